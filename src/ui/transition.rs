/// Time-based transitions
///
/// An `Animation` maps wall-clock time to an eased progress in [0, 1].
/// It is advanced from `window::frames()` ticks and dropped once done,
/// which also stops the frame subscription.

use std::time::{Duration, Instant};

use crate::state::ZoomLevel;

/// Scale the incoming slide starts from
pub const ENTER_SCALE: f32 = 0.95;

/// Scale the outgoing slide shrinks to
pub const EXIT_SCALE: f32 = 0.95;

/// Scale the fullscreen image enters from and leaves to
pub const OVERLAY_REST_SCALE: f32 = 0.9;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Animation {
    started: Instant,
    duration: Duration,
    progress: f32,
}

impl Animation {
    pub fn start(now: Instant, duration: Duration) -> Self {
        let mut animation = Self {
            started: now,
            duration,
            progress: 0.0,
        };
        animation.tick(now);
        animation
    }

    /// Recompute progress for the current frame
    pub fn tick(&mut self, now: Instant) {
        let linear = if self.duration.is_zero() {
            1.0
        } else {
            let elapsed = now.saturating_duration_since(self.started);
            (elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0)
        };
        self.progress = ease_in_out(linear);
    }

    /// Eased progress, 0.0 at start and 1.0 when finished
    pub fn progress(&self) -> f32 {
        self.progress
    }

    pub fn is_finished(&self) -> bool {
        self.progress >= 1.0
    }
}

/// Cubic ease-in-out
fn ease_in_out(t: f32) -> f32 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

/// How one image is drawn during a frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layer {
    pub opacity: f32,
    pub scale: f32,
}

impl Layer {
    pub const RESTING: Layer = Layer {
        opacity: 1.0,
        scale: 1.0,
    };
}

/// Crossfade between two slides
///
/// The outgoing opacity is always `1 - incoming`, so two different slides
/// are never both fully opaque.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlideTransition {
    pub from: usize,
    pub to: usize,
    animation: Animation,
}

impl SlideTransition {
    pub fn start(from: usize, to: usize, now: Instant, duration: Duration) -> Self {
        Self {
            from,
            to,
            animation: Animation::start(now, duration),
        }
    }

    pub fn tick(&mut self, now: Instant) {
        self.animation.tick(now);
    }

    pub fn is_finished(&self) -> bool {
        self.animation.is_finished()
    }

    pub fn incoming(&self) -> Layer {
        let p = self.animation.progress();
        Layer {
            opacity: p,
            scale: ENTER_SCALE + (1.0 - ENTER_SCALE) * p,
        }
    }

    pub fn outgoing(&self) -> Layer {
        let p = self.animation.progress();
        Layer {
            opacity: 1.0 - p,
            scale: 1.0 - (1.0 - EXIT_SCALE) * p,
        }
    }
}

/// A value easing from `from` to `to`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    from: f32,
    to: f32,
    animation: Animation,
}

impl Tween {
    pub fn start(from: f32, to: f32, now: Instant, duration: Duration) -> Self {
        Self {
            from,
            to,
            animation: Animation::start(now, duration),
        }
    }

    pub fn tick(&mut self, now: Instant) {
        self.animation.tick(now);
    }

    pub fn value(&self) -> f32 {
        self.from + (self.to - self.from) * self.animation.progress()
    }

    pub fn is_finished(&self) -> bool {
        self.animation.is_finished()
    }
}

/// Presentation of the fullscreen viewer
///
/// Lives from the moment the viewer opens until its fade-out ends, which
/// can be after the carousel itself has already gone back to closed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlayMotion {
    image: usize,
    zoom: ZoomLevel,
    opacity: Tween,
    scale: Tween,
    closing: bool,
    duration: Duration,
}

impl OverlayMotion {
    /// Fade in while growing from `OVERLAY_REST_SCALE` to 100%
    pub fn open(image: usize, now: Instant, duration: Duration) -> Self {
        let zoom = ZoomLevel::default();
        Self {
            image,
            zoom,
            opacity: Tween::start(0.0, 1.0, now, duration),
            scale: Tween::start(OVERLAY_REST_SCALE, zoom.factor(), now, duration),
            closing: false,
            duration,
        }
    }

    /// Ease the image scale from wherever it is towards `zoom`
    pub fn zoom_to(&mut self, zoom: ZoomLevel, now: Instant) {
        self.zoom = zoom;
        self.scale = Tween::start(self.scale.value(), zoom.factor(), now, self.duration);
    }

    /// Fade out and shrink back to `OVERLAY_REST_SCALE`
    pub fn close(&mut self, now: Instant) {
        self.closing = true;
        self.opacity = Tween::start(self.opacity.value(), 0.0, now, self.duration);
        self.scale = Tween::start(self.scale.value(), OVERLAY_REST_SCALE, now, self.duration);
    }

    pub fn tick(&mut self, now: Instant) {
        self.opacity.tick(now);
        self.scale.tick(now);
    }

    /// Gallery position of the shown image
    pub fn image(&self) -> usize {
        self.image
    }

    /// Last zoom the viewer showed
    pub fn zoom(&self) -> ZoomLevel {
        self.zoom
    }

    pub fn opacity(&self) -> f32 {
        self.opacity.value()
    }

    pub fn scale(&self) -> f32 {
        self.scale.value()
    }

    pub fn is_closing(&self) -> bool {
        self.closing
    }

    /// No tween left to run
    pub fn is_settled(&self) -> bool {
        self.opacity.is_finished() && self.scale.is_finished()
    }

    /// Fade-out finished; the viewer can stop being drawn
    pub fn is_done(&self) -> bool {
        self.closing && self.is_settled()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DURATION: Duration = Duration::from_millis(800);

    #[test]
    fn test_animation_progress() {
        let start = Instant::now();
        let mut animation = Animation::start(start, DURATION);
        assert_eq!(animation.progress(), 0.0);
        assert!(!animation.is_finished());

        animation.tick(start + DURATION / 2);
        assert!((animation.progress() - 0.5).abs() < 1e-4);

        animation.tick(start + DURATION);
        assert!(animation.is_finished());

        animation.tick(start + DURATION * 3);
        assert_eq!(animation.progress(), 1.0);
    }

    #[test]
    fn test_zero_duration_finishes_immediately() {
        let animation = Animation::start(Instant::now(), Duration::ZERO);
        assert!(animation.is_finished());
    }

    #[test]
    fn test_progress_is_monotonic() {
        let start = Instant::now();
        let mut animation = Animation::start(start, DURATION);
        let mut last = 0.0;
        for ms in (0..=800).step_by(20) {
            animation.tick(start + Duration::from_millis(ms));
            assert!(animation.progress() >= last);
            last = animation.progress();
        }
    }

    #[test]
    fn test_slides_never_both_opaque() {
        let start = Instant::now();
        let mut transition = SlideTransition::start(0, 1, start, DURATION);

        for ms in (0..=900).step_by(10) {
            transition.tick(start + Duration::from_millis(ms));
            let incoming = transition.incoming();
            let outgoing = transition.outgoing();

            assert!(!(incoming.opacity >= 1.0 && outgoing.opacity >= 1.0));
            assert!((incoming.opacity + outgoing.opacity - 1.0).abs() < 1e-5);
            assert!(incoming.scale <= 1.0 && outgoing.scale <= 1.0);
        }
    }

    #[test]
    fn test_slide_transition_endpoints() {
        let start = Instant::now();
        let mut transition = SlideTransition::start(2, 0, start, DURATION);
        assert_eq!(transition.incoming().opacity, 0.0);
        assert_eq!(transition.outgoing(), Layer::RESTING);

        transition.tick(start + DURATION);
        assert!(transition.is_finished());
        assert_eq!(transition.incoming(), Layer::RESTING);
        assert_eq!(transition.outgoing().opacity, 0.0);
    }

    #[test]
    fn test_tween_value() {
        let start = Instant::now();
        let mut tween = Tween::start(1.0, 2.0, start, DURATION);
        assert_eq!(tween.value(), 1.0);

        tween.tick(start + DURATION / 2);
        assert!((tween.value() - 1.5).abs() < 1e-4);

        tween.tick(start + DURATION);
        assert!(tween.is_finished());
        assert_eq!(tween.value(), 2.0);
    }

    #[test]
    fn test_overlay_opens_from_rest_scale() {
        let start = Instant::now();
        let mut motion = OverlayMotion::open(1, start, DURATION);
        assert_eq!(motion.opacity(), 0.0);
        assert_eq!(motion.scale(), OVERLAY_REST_SCALE);
        assert!(!motion.is_settled());

        motion.tick(start + DURATION);
        assert!(motion.is_settled());
        assert!(!motion.is_done());
        assert_eq!(motion.opacity(), 1.0);
        assert_eq!(motion.scale(), 1.0);
    }

    #[test]
    fn test_overlay_eases_to_new_zoom() {
        let start = Instant::now();
        let mut motion = OverlayMotion::open(0, start, DURATION);
        motion.tick(start + DURATION);

        let zoom = ZoomLevel::default().zoom_in();
        let later = start + DURATION * 2;
        motion.zoom_to(zoom, later);
        assert_eq!(motion.scale(), 1.0);
        assert_eq!(motion.zoom(), zoom);

        motion.tick(later + DURATION / 2);
        assert!(motion.scale() > 1.0 && motion.scale() < 1.2);

        motion.tick(later + DURATION);
        assert!((motion.scale() - 1.2).abs() < 1e-5);
    }

    #[test]
    fn test_overlay_fades_out_on_close() {
        let start = Instant::now();
        let mut motion = OverlayMotion::open(2, start, DURATION);
        motion.tick(start + DURATION);

        let later = start + DURATION * 2;
        motion.close(later);
        assert!(motion.is_closing());
        assert!(!motion.is_done());
        assert_eq!(motion.opacity(), 1.0);
        assert_eq!(motion.image(), 2);

        motion.tick(later + DURATION);
        assert!(motion.is_done());
        assert_eq!(motion.opacity(), 0.0);
        assert_eq!(motion.scale(), OVERLAY_REST_SCALE);
    }
}
