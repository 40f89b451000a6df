/// User interface module
///
/// - `strip.rs` - slide strip, arrows and pagination markers
/// - `overlay.rs` - fullscreen zoom viewer
/// - `transition.rs` - fade/scale animations
/// - `style.rs` - shared widget styles

pub mod overlay;
pub mod strip;
pub mod style;
pub mod transition;
