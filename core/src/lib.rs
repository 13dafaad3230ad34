//! Core of the Frankfurt team map.
//!
//! Holds the literal team roster, projects it into parallel columns and
//! drives a [`Surface`](prelude::Surface) through the scatter-plot sequence.
//! Backends live behind the surface trait so the same renderer feeds the
//! terminal driver and the desktop canvas.

pub mod math;
pub mod prelude;
pub mod render;
pub mod roster;

pub use prelude::{PlotError, PlotResult, PlotStyle, Surface};
pub use render::{PointRenderer, RenderSummary, Scene, TextSurface};
pub use roster::{frankfurt_teams, Columns, TeamRecord};
