/// State management module
///
/// This module holds everything the carousel knows about itself:
/// - The fixed image collection (data.rs)
/// - Zoom level for the fullscreen viewer (zoom.rs)
/// - Slide index and overlay state machine (carousel.rs)
/// - Pure view description derived from that state (view_model.rs)

pub mod carousel;
pub mod data;
pub mod error;
pub mod view_model;
pub mod zoom;

pub use carousel::Carousel;
pub use data::{Gallery, ImageRef, ImageSource};
pub use error::CarouselError;
pub use zoom::ZoomLevel;
