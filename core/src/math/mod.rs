pub mod bounds;
pub mod stats;
pub mod ticks;
pub mod viewport;

pub use bounds::Range;
pub use stats::StatsHelper;
pub use ticks::{nice_step, nice_ticks, tick_label};
pub use viewport::Viewport;
