// Chart geometry: polar projection, auto-ranged grid bounds, hit testing.
// Rendering itself lives in `ui::widgets::scatter` (canvas) and
// `export::png` (bitmap); both draw from the primitives here.

pub mod hit;
pub mod projection;
pub mod range;

pub use hit::find_nearest;
pub use projection::{Paddings, ProjectionParams};
pub use range::{compute_range, GridSpec};
