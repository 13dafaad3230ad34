use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use teammap::PlotStyle;

/// Driver configuration: the plot style, optionally overridden from YAML.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct PlotConfig {
    #[serde(default)]
    pub style: PlotStyle,
}

impl PlotConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path_ref = path.as_ref();
        let contents = fs::read_to_string(path_ref)
            .with_context(|| format!("reading plot config {}", path_ref.display()))?;
        let config: PlotConfig = serde_yaml::from_str(&contents)
            .with_context(|| format!("parsing plot config {}", path_ref.display()))?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn default_config_uses_reference_style() {
        let cfg = PlotConfig::default();
        assert_eq!(cfg.style, PlotStyle::default());
    }

    #[test]
    fn config_load_reads_yaml_overrides() {
        let mut temp = NamedTempFile::new().unwrap();
        temp.write_all(b"style:\n  title: Teams\n  grid: false\n  label_align: left\n")
            .unwrap();
        let path = temp.into_temp_path();
        let cfg = PlotConfig::load(&path).unwrap();
        assert_eq!(cfg.style.title, "Teams");
        assert!(!cfg.style.grid);
        assert_eq!(cfg.style.x_label, "latitude");
        assert_eq!(cfg.style.label_font_size, 9.0);
    }

    #[test]
    fn config_load_reports_missing_file() {
        let err = PlotConfig::load("does/not/exist.yaml").unwrap_err();
        assert!(err.to_string().contains("reading plot config"));
    }
}
