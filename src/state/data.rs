/// Shared data structures for the carousel
///
/// These types describe the image collection the carousel walks through.
/// The collection is fixed once built and never changes afterwards.

use std::fmt;
use std::ops::Index;
use std::path::Path;

use super::error::CarouselError;

/// Reference to one image of the collection (URL or file path)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImageRef(String);

/// Where the bytes of an image come from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageSource<'a> {
    /// Fetched over HTTP(S)
    Remote(&'a str),
    /// Read from the local filesystem
    File(&'a Path),
}

impl ImageRef {
    pub fn new(reference: impl Into<String>) -> Self {
        Self(reference.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Classify the reference by its scheme
    pub fn source(&self) -> ImageSource<'_> {
        let reference = self.as_str();
        let lower = reference.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            ImageSource::Remote(reference)
        } else {
            ImageSource::File(Path::new(reference))
        }
    }
}

impl fmt::Display for ImageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for ImageRef {
    fn from(reference: &str) -> Self {
        Self::new(reference)
    }
}

impl From<String> for ImageRef {
    fn from(reference: String) -> Self {
        Self(reference)
    }
}

/// Ordered, non-empty image collection
#[derive(Debug, Clone, PartialEq)]
pub struct Gallery {
    images: Vec<ImageRef>,
}

impl Gallery {
    /// Build a gallery, rejecting an empty collection up front
    pub fn new<I, R>(images: I) -> Result<Self, CarouselError>
    where
        I: IntoIterator<Item = R>,
        R: Into<ImageRef>,
    {
        let images: Vec<ImageRef> = images.into_iter().map(Into::into).collect();

        if images.is_empty() {
            return Err(CarouselError::EmptyGallery);
        }

        Ok(Self { images })
    }

    /// Number of images (always at least 1)
    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn get(&self, index: usize) -> Option<&ImageRef> {
        self.images.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ImageRef> {
        self.images.iter()
    }
}

impl Index<usize> for Gallery {
    type Output = ImageRef;

    fn index(&self, index: usize) -> &ImageRef {
        &self.images[index]
    }
}
