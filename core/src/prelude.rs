use serde::{Deserialize, Serialize};

/// Figure dimensions in inches.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FigureSize {
    pub width: f32,
    pub height: f32,
}

impl FigureSize {
    /// Dots per inch used by pixel backends.
    pub const DPI: f32 = 100.0;

    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn to_pixels(self) -> (f32, f32) {
        (self.width * Self::DPI, self.height * Self::DPI)
    }
}

/// Plain RGB color, components in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const BLUE: Color = Color::from_rgb(0.0, 0.0, 1.0);
    pub const BLACK: Color = Color::from_rgb(0.0, 0.0, 0.0);

    pub const fn from_rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HorizontalAlign {
    Left,
    Center,
    Right,
}

/// Styling shared by every marker of one scatter call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarkerStyle {
    pub color: Color,
    /// Radius in points.
    pub radius: f32,
}

/// Styling applied to a single text annotation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    pub font_size: f32,
    pub align: HorizontalAlign,
    pub color: Color,
}

/// Everything the renderer needs to know about how the plot looks.
///
/// The default reproduces the original figure: 10 x 8 inches, blue markers,
/// 9 pt right-aligned labels, grid on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotStyle {
    pub figure: FigureSize,
    pub marker_color: Color,
    /// Marker radius in points.
    pub marker_radius: f32,
    pub label_font_size: f32,
    pub label_align: HorizontalAlign,
    pub x_label: String,
    pub y_label: String,
    pub title: String,
    pub grid: bool,
}

impl Default for PlotStyle {
    fn default() -> Self {
        Self {
            figure: FigureSize::new(10.0, 8.0),
            marker_color: Color::BLUE,
            marker_radius: 3.0,
            label_font_size: 9.0,
            label_align: HorizontalAlign::Right,
            x_label: "latitude".into(),
            y_label: "longitude".into(),
            title: "Position of teams in Frankfurt am Main".into(),
            grid: true,
        }
    }
}

impl PlotStyle {
    pub fn marker_style(&self) -> MarkerStyle {
        MarkerStyle {
            color: self.marker_color,
            radius: self.marker_radius,
        }
    }

    pub fn label_style(&self) -> TextStyle {
        TextStyle {
            font_size: self.label_font_size,
            align: self.label_align,
            color: Color::BLACK,
        }
    }
}

/// Errors surfaced while driving a drawing surface.
#[derive(thiserror::Error, Debug)]
pub enum PlotError {
    #[error("surface failure: {0}")]
    Surface(String),
    #[error("io failure: {0}")]
    Io(#[from] std::io::Error),
    #[error("serialization failure: {0}")]
    Json(#[from] serde_json::Error),
}

pub type PlotResult<T> = Result<T, PlotError>;

/// Drawing surface the point renderer issues its calls against.
///
/// Calls arrive in a fixed order: `begin`, `scatter`, one `text` per point,
/// the labels, `grid`, then `present`.
pub trait Surface {
    fn begin(&mut self, size: FigureSize) -> PlotResult<()>;
    fn scatter(&mut self, xs: &[f64], ys: &[f64], marker: &MarkerStyle) -> PlotResult<()>;
    fn text(&mut self, x: f64, y: f64, label: &str, style: &TextStyle) -> PlotResult<()>;
    fn x_label(&mut self, label: &str) -> PlotResult<()>;
    fn y_label(&mut self, label: &str) -> PlotResult<()>;
    fn title(&mut self, title: &str) -> PlotResult<()>;
    fn grid(&mut self, visible: bool) -> PlotResult<()>;
    fn present(&mut self) -> PlotResult<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_style_matches_reference_figure() {
        let style = PlotStyle::default();
        assert_eq!(style.figure.to_pixels(), (1000.0, 800.0));
        assert_eq!(style.x_label, "latitude");
        assert_eq!(style.y_label, "longitude");
        assert!(style.grid);
        assert_eq!(style.label_style().align, HorizontalAlign::Right);
    }

    #[test]
    fn partial_style_json_falls_back_to_defaults() {
        let style: PlotStyle = serde_json::from_str(r#"{"title": "Teams"}"#).unwrap();
        assert_eq!(style.title, "Teams");
        assert_eq!(style.label_font_size, 9.0);
    }
}
