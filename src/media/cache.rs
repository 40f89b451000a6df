/// Per-slide image cache
///
/// One slot per gallery position. Slots start as `Loading` and are
/// filled in as background loads complete.

use super::loader::{LoadError, LoadedImage};

#[derive(Debug, Clone)]
pub enum Slot {
    Loading,
    Ready(LoadedImage),
    Failed(LoadError),
}

#[derive(Debug, Clone)]
pub struct ImageCache {
    slots: Vec<Slot>,
}

impl ImageCache {
    pub fn new(len: usize) -> Self {
        Self {
            slots: vec![Slot::Loading; len],
        }
    }

    pub fn slot(&self, index: usize) -> Option<&Slot> {
        self.slots.get(index)
    }

    /// Decoded image at `index`, if it finished loading
    pub fn ready(&self, index: usize) -> Option<&LoadedImage> {
        match self.slots.get(index) {
            Some(Slot::Ready(image)) => Some(image),
            _ => None,
        }
    }

    /// Record the outcome of a background load
    pub fn insert(&mut self, index: usize, result: Result<LoadedImage, LoadError>) {
        if let Some(slot) = self.slots.get_mut(index) {
            *slot = match result {
                Ok(image) => Slot::Ready(image),
                Err(error) => Slot::Failed(error),
            };
        }
    }

    /// Number of slots that are no longer loading
    pub fn settled(&self) -> usize {
        self.slots
            .iter()
            .filter(|slot| !matches!(slot, Slot::Loading))
            .count()
    }
}
