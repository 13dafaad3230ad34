pub mod renderer;
pub mod scene;
pub mod text;

pub use renderer::{PointRenderer, RenderSummary};
pub use scene::{Annotation, Marker, Scene};
pub use text::{rasterize, TextSurface};
