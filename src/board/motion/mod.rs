pub mod drift;
pub mod entry;
pub mod tween;

pub use drift::{DriftState, drive_drift};
pub use entry::{Entering, begin_entry};
pub use tween::{AxisMotion, Easing, Motion, Tween, tick_motions};
