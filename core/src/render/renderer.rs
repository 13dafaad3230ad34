use crate::prelude::{PlotResult, PlotStyle, Surface};
use crate::roster::Columns;
use log::{debug, info};
use serde::Serialize;

/// What one render pass issued to its surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RenderSummary {
    pub points: usize,
    pub annotations: usize,
}

/// Drives a [`Surface`] through the team scatter plot.
///
/// The renderer only reads its style, so repeated renders of the same
/// columns issue identical call sequences.
#[derive(Debug, Clone, Default)]
pub struct PointRenderer {
    style: PlotStyle,
}

impl PointRenderer {
    pub fn new(style: PlotStyle) -> Self {
        Self { style }
    }

    pub fn style(&self) -> &PlotStyle {
        &self.style
    }

    pub fn render<S>(&self, columns: &Columns, surface: &mut S) -> PlotResult<RenderSummary>
    where
        S: Surface + ?Sized,
    {
        debug!(
            "PointRenderer figure {}x{} in",
            self.style.figure.width, self.style.figure.height
        );
        surface.begin(self.style.figure)?;

        // latitude runs along x, longitude along y
        surface.scatter(
            columns.latitudes(),
            columns.longitudes(),
            &self.style.marker_style(),
        )?;

        let label_style = self.style.label_style();
        let mut annotations = 0;
        for (latitude, longitude, label) in columns.iter() {
            surface.text(latitude, longitude, label, &label_style)?;
            annotations += 1;
        }

        surface.x_label(&self.style.x_label)?;
        surface.y_label(&self.style.y_label)?;
        surface.title(&self.style.title)?;
        surface.grid(self.style.grid)?;
        surface.present()?;

        info!("PointRenderer drew {} markers", columns.len());
        Ok(RenderSummary {
            points: columns.len(),
            annotations,
        })
    }
}
