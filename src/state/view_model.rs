/// View description of the carousel
///
/// `describe` is a pure function of the three state cells (slide index,
/// overlay target, zoom). The iced view code only ever renders what it
/// returns.

use super::carousel::{Carousel, Overlay};
use super::zoom::ZoomLevel;

/// Everything the widget shows for one state
#[derive(Debug, Clone, PartialEq)]
pub struct CarouselView {
    /// Position of the active slide
    pub index: usize,
    /// One pagination marker per image
    pub markers: Vec<Marker>,
    /// Fullscreen viewer, when open
    pub overlay: Option<OverlayView>,
}

/// Pagination marker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Marker {
    pub index: usize,
    pub active: bool,
}

/// Fullscreen viewer contents
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverlayView {
    /// Gallery position of the shown image
    pub index: usize,
    pub zoom: ZoomLevel,
}

/// Caption for the slide at `index` (1-based for display)
pub fn slide_label(index: usize) -> String {
    format!("Slide {}", index + 1)
}

pub fn describe(carousel: &Carousel) -> CarouselView {
    let index = carousel.index();
    let markers = (0..carousel.gallery().len())
        .map(|i| Marker {
            index: i,
            active: i == index,
        })
        .collect();

    let overlay = match carousel.overlay() {
        Overlay::Open { image, zoom } => Some(OverlayView { index: image, zoom }),
        Overlay::Closed => None,
    };

    CarouselView { index, markers, overlay }
}
