//! Platform boundary
//!
//! Maps raw device events to session inputs and checks the asset directory.
//! Nothing here touches the simulation directly.

pub mod assets;
pub mod clock;
pub mod input;

pub use assets::{FONT_FILE, check_assets};
pub use clock::{FrameClock, MAX_FRAME_DT};
pub use input::{Rect, hit_test, map_key, pointer_input, region_center, regions};
