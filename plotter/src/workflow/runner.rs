use crate::workflow::config::PlotConfig;
use anyhow::Context;
use std::fmt::Write as _;
use std::io::Write;
use teammap::{Columns, PointRenderer, RenderSummary, Scene, TextSurface};

/// Renders one set of columns through the configured style.
#[derive(Clone)]
pub struct Runner {
    renderer: PointRenderer,
}

impl Runner {
    pub fn new(config: PlotConfig) -> Self {
        Self {
            renderer: PointRenderer::new(config.style),
        }
    }

    /// Draws the plot as text into `sink`.
    pub fn plot<W: Write>(&self, columns: &Columns, sink: W) -> anyhow::Result<RenderSummary> {
        let mut surface = TextSurface::new(sink);
        self.renderer
            .render(columns, &mut surface)
            .context("rendering text plot")
    }

    /// Records the plot and returns the scene as pretty JSON.
    pub fn scene_json(&self, columns: &Columns) -> anyhow::Result<String> {
        let mut scene = Scene::default();
        self.renderer
            .render(columns, &mut scene)
            .context("recording scene")?;
        scene.to_json().context("serializing scene")
    }
}

/// Aligned listing of the derived columns, one row per team.
pub fn column_table(columns: &Columns) -> String {
    let label_width = columns
        .labels()
        .iter()
        .map(|label| label.chars().count())
        .chain(std::iter::once("label".len()))
        .max()
        .unwrap_or(0);

    let mut table = String::new();
    let _ = writeln!(
        table,
        "{:>3}  {:>10}  {:>10}  {:<label_width$}",
        "#", "latitude", "longitude", "label"
    );
    for (index, (latitude, longitude, label)) in columns.iter().enumerate() {
        let _ = writeln!(
            table,
            "{:>3}  {:>10.5}  {:>10.5}  {:<label_width$}",
            index, latitude, longitude, label
        );
    }
    table
}
