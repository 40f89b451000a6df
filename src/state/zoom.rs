/// Zoom level of the fullscreen viewer
///
/// The level is kept as a whole number of 0.2 steps above 1.0, so any
/// sequence of zoom in/out lands exactly on the same factors.

/// Smallest magnification (no zoom)
pub const MIN_ZOOM: f32 = 1.0;

/// Largest magnification
pub const MAX_ZOOM: f32 = 3.0;

/// Amount added or removed per zoom action
pub const ZOOM_STEP: f32 = 0.2;

/// Number of steps between `MIN_ZOOM` and `MAX_ZOOM`
const MAX_STEPS: u8 = 10;

/// Zoom factor, guaranteed to be within [1.0, 3.0].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ZoomLevel(u8);

impl ZoomLevel {
    /// Returns the zoom as a multiplier (1.0 = 100%).
    #[must_use]
    pub fn factor(self) -> f32 {
        (MIN_ZOOM + ZOOM_STEP * f32::from(self.0)).min(MAX_ZOOM)
    }

    /// Returns the zoom as a rounded percentage (e.g. 1.4 → 140).
    #[must_use]
    pub fn percent(self) -> u32 {
        100 + 20 * u32::from(self.0)
    }

    #[must_use]
    pub fn is_min(self) -> bool {
        self.0 == 0
    }

    #[must_use]
    pub fn is_max(self) -> bool {
        self.0 >= MAX_STEPS
    }

    /// Increases zoom by one step, stopping at `MAX_ZOOM`.
    #[must_use]
    pub fn zoom_in(self) -> Self {
        Self((self.0 + 1).min(MAX_STEPS))
    }

    /// Decreases zoom by one step, stopping at `MIN_ZOOM`.
    #[must_use]
    pub fn zoom_out(self) -> Self {
        Self(self.0.saturating_sub(1))
    }
}
