/// Image loading module
///
/// This module handles:
/// - Fetching image bytes over HTTP or from disk
/// - Decoding and downscaling them off the UI thread
/// - Keeping the decoded handles around for the view

pub mod cache;
pub mod loader;

pub use cache::{ImageCache, Slot};
pub use loader::{load_image, LoadError, LoadedImage};
