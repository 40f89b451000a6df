/// Carousel state machine
///
/// Three cells make up the whole widget state: the slide index, the
/// fullscreen overlay target and the zoom level of that overlay. Every
/// operation here is a synchronous transition driven by a single input.

use super::data::{Gallery, ImageRef};
use super::error::CarouselError;
use super::zoom::ZoomLevel;

/// Fullscreen viewer state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Overlay {
    #[default]
    Closed,
    /// Showing the image at `image` (a gallery position) with `zoom` applied
    Open { image: usize, zoom: ZoomLevel },
}

impl Overlay {
    pub fn is_open(&self) -> bool {
        matches!(self, Overlay::Open { .. })
    }
}

/// Slide strip plus fullscreen viewer
#[derive(Debug, Clone)]
pub struct Carousel {
    gallery: Gallery,
    index: usize,
    overlay: Overlay,
}

impl Carousel {
    /// Start on the first slide with the overlay closed
    pub fn new(gallery: Gallery) -> Self {
        Self {
            gallery,
            index: 0,
            overlay: Overlay::Closed,
        }
    }

    pub fn gallery(&self) -> &Gallery {
        &self.gallery
    }

    /// Position of the active slide, always in `0..gallery.len()`
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn overlay(&self) -> Overlay {
        self.overlay
    }

    /// Image under the active slide
    pub fn current_image(&self) -> &ImageRef {
        // The gallery is never empty and the index is kept in range.
        &self.gallery[self.index]
    }

    /// Image shown in the fullscreen viewer, if open
    pub fn overlay_image(&self) -> Option<&ImageRef> {
        match self.overlay {
            Overlay::Open { image, .. } => self.gallery.get(image),
            Overlay::Closed => None,
        }
    }

    /// Zoom of the fullscreen viewer; only observable while it is open
    pub fn zoom(&self) -> Option<ZoomLevel> {
        match self.overlay {
            Overlay::Open { zoom, .. } => Some(zoom),
            Overlay::Closed => None,
        }
    }

    /// Advance to the next slide, wrapping to the first
    pub fn next(&mut self) {
        self.index = (self.index + 1) % self.gallery.len();
    }

    /// Go back one slide, wrapping to the last
    pub fn prev(&mut self) {
        let len = self.gallery.len();
        self.index = (self.index + len - 1) % len;
    }

    /// Jump straight to `index` (pagination markers)
    pub fn select_slide(&mut self, index: usize) -> Result<(), CarouselError> {
        let len = self.gallery.len();
        if index >= len {
            return Err(CarouselError::SlideOutOfRange { index, len });
        }

        self.index = index;
        Ok(())
    }

    /// Show the active slide fullscreen at 100%
    pub fn open_overlay(&mut self) {
        self.overlay = Overlay::Open {
            image: self.index,
            zoom: ZoomLevel::default(),
        };
    }

    /// Close the fullscreen viewer; zoom goes back to 100%
    ///
    /// Returns whether the overlay was open.
    pub fn close_overlay(&mut self) -> bool {
        let was_open = self.overlay.is_open();
        self.overlay = Overlay::Closed;
        was_open
    }

    pub fn zoom_in(&mut self) {
        if let Overlay::Open { zoom, .. } = &mut self.overlay {
            *zoom = zoom.zoom_in();
        }
    }

    pub fn zoom_out(&mut self) {
        if let Overlay::Open { zoom, .. } = &mut self.overlay {
            *zoom = zoom.zoom_out();
        }
    }
}
