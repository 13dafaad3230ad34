use anyhow::Context;
use clap::Parser;
use log::info;
use std::io::{self, Write};
use std::path::PathBuf;
use teammap::{frankfurt_teams, Columns};
use workflow::config::PlotConfig;
use workflow::runner::{column_table, Runner};

mod workflow;

#[derive(Parser)]
#[command(author, version, about = "Plot the Frankfurt team positions in the terminal")]
struct Args {
    /// Print the derived latitude / longitude / label columns instead of the plot
    #[arg(long, default_value_t = false, conflicts_with = "json")]
    table: bool,
    /// Print the recorded scene as JSON instead of the plot
    #[arg(long, default_value_t = false)]
    json: bool,
    /// Load style overrides from YAML
    #[arg(long)]
    style: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = if let Some(path) = args.style {
        PlotConfig::load(path)?
    } else {
        PlotConfig::default()
    };

    let teams = frankfurt_teams();
    let columns = Columns::project(&teams);
    info!("projected {} active teams", columns.len());

    let runner = Runner::new(config);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if args.table {
        out.write_all(column_table(&columns).as_bytes())
            .context("writing column table")?;
    } else if args.json {
        let json = runner.scene_json(&columns)?;
        writeln!(out, "{json}").context("writing scene json")?;
    } else {
        let summary = runner.plot(&columns, &mut out)?;
        info!(
            "plotted {} markers with {} labels",
            summary.points, summary.annotations
        );
    }

    Ok(())
}
