use crate::math::Range;
use crate::prelude::{
    Color, FigureSize, MarkerStyle, PlotError, PlotResult, PlotStyle, Surface, TextStyle,
};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    pub x: f64,
    pub y: f64,
    pub color: Color,
    pub radius: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Annotation {
    pub x: f64,
    pub y: f64,
    pub label: String,
    pub style: TextStyle,
}

/// Retained record of everything drawn onto a figure.
///
/// Backends that need the whole picture before they can lay it out (text
/// grids, canvases redrawn every frame) render into a `Scene` first.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scene {
    pub figure: FigureSize,
    pub markers: Vec<Marker>,
    pub annotations: Vec<Annotation>,
    pub x_label: Option<String>,
    pub y_label: Option<String>,
    pub title: Option<String>,
    pub grid: bool,
    pub presented: bool,
}

impl Default for Scene {
    fn default() -> Self {
        Self {
            figure: PlotStyle::default().figure,
            markers: Vec::new(),
            annotations: Vec::new(),
            x_label: None,
            y_label: None,
            title: None,
            grid: false,
            presented: false,
        }
    }
}

impl Scene {
    /// Autoscaled x and y limits. Annotations do not widen the limits.
    pub fn bounds(&self) -> (Range, Range) {
        let xs: Vec<f64> = self.markers.iter().map(|marker| marker.x).collect();
        let ys: Vec<f64> = self.markers.iter().map(|marker| marker.y).collect();
        (Range::autoscale(&xs), Range::autoscale(&ys))
    }

    pub fn to_json(&self) -> PlotResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl Surface for Scene {
    fn begin(&mut self, size: FigureSize) -> PlotResult<()> {
        *self = Scene {
            figure: size,
            ..Scene::default()
        };
        Ok(())
    }

    fn scatter(&mut self, xs: &[f64], ys: &[f64], marker: &MarkerStyle) -> PlotResult<()> {
        if xs.len() != ys.len() {
            return Err(PlotError::Surface(format!(
                "scatter received {} x values and {} y values",
                xs.len(),
                ys.len()
            )));
        }
        self.markers
            .extend(xs.iter().zip(ys).map(|(&x, &y)| Marker {
                x,
                y,
                color: marker.color,
                radius: marker.radius,
            }));
        Ok(())
    }

    fn text(&mut self, x: f64, y: f64, label: &str, style: &TextStyle) -> PlotResult<()> {
        self.annotations.push(Annotation {
            x,
            y,
            label: label.to_string(),
            style: *style,
        });
        Ok(())
    }

    fn x_label(&mut self, label: &str) -> PlotResult<()> {
        self.x_label = Some(label.to_string());
        Ok(())
    }

    fn y_label(&mut self, label: &str) -> PlotResult<()> {
        self.y_label = Some(label.to_string());
        Ok(())
    }

    fn title(&mut self, title: &str) -> PlotResult<()> {
        self.title = Some(title.to_string());
        Ok(())
    }

    fn grid(&mut self, visible: bool) -> PlotResult<()> {
        self.grid = visible;
        Ok(())
    }

    fn present(&mut self) -> PlotResult<()> {
        self.presented = true;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn marker() -> MarkerStyle {
        MarkerStyle {
            color: Color::BLUE,
            radius: 3.0,
        }
    }

    #[test]
    fn scatter_rejects_uneven_sequences() {
        let mut scene = Scene::default();
        let err = scene.scatter(&[1.0, 2.0], &[1.0], &marker()).unwrap_err();
        assert!(err.to_string().contains("2 x values and 1 y values"));
    }

    #[test]
    fn begin_clears_previous_drawing() {
        let mut scene = Scene::default();
        scene.scatter(&[1.0], &[2.0], &marker()).unwrap();
        scene.title("old").unwrap();
        scene.begin(FigureSize::new(4.0, 3.0)).unwrap();
        assert!(scene.markers.is_empty());
        assert_eq!(scene.title, None);
        assert_eq!(scene.figure, FigureSize::new(4.0, 3.0));
    }

    #[test]
    fn bounds_follow_markers_only() {
        let mut scene = Scene::default();
        scene.scatter(&[0.0, 10.0], &[0.0, 20.0], &marker()).unwrap();
        let style = PlotStyle::default().label_style();
        scene.text(100.0, 100.0, "far away", &style).unwrap();
        let (x, y) = scene.bounds();
        assert_eq!(x, Range::new(-0.5, 10.5));
        assert_eq!(y, Range::new(-1.0, 21.0));
    }

    #[test]
    fn scene_serializes_to_json() {
        let mut scene = Scene::default();
        scene.scatter(&[1.5], &[2.5], &marker()).unwrap();
        scene.title("Teams").unwrap();
        let json = scene.to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["title"], "Teams");
        assert_eq!(value["markers"][0]["x"], 1.5);
    }
}
