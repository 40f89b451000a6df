use thiserror::Error;

/// Precondition violations of the carousel state machine
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CarouselError {
    /// A carousel needs at least one image to show
    #[error("the image collection is empty")]
    EmptyGallery,

    #[error("slide {index} is out of range for a collection of {len} images")]
    SlideOutOfRange { index: usize, len: usize },
}
