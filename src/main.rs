use iced::widget::{column, container, text, Stack};
use iced::{keyboard, window};
use iced::{Alignment, Element, Length, Subscription, Task, Theme};
use std::time::{Duration, Instant};
use tracing_subscriber::EnvFilter;

mod config;
mod media;
mod state;
mod ui;

use config::{Args, Config};
use media::{ImageCache, LoadError, LoadedImage};
use state::view_model;
use state::{Carousel, Gallery};
use ui::transition::{OverlayMotion, SlideTransition};

/// Main application state
///
/// Holds the three carousel cells (inside `Carousel`) plus what is needed
/// to draw them: decoded images and any running animations.
struct PhotoCarousel {
    config: Config,
    /// Slide index, overlay target and zoom
    carousel: Carousel,
    /// Decoded pixels per slide
    images: ImageCache,
    /// Crossfade between the previous and the active slide
    slide_transition: Option<SlideTransition>,
    /// Fade and scale of the fullscreen viewer, kept through its fade-out
    overlay_motion: Option<OverlayMotion>,
}

/// Application messages (events)
#[derive(Debug, Clone)]
pub enum Message {
    /// Right arrow
    NextSlide,
    /// Left arrow
    PrevSlide,
    /// Pagination marker
    SelectSlide(usize),
    /// Click on the active slide
    OpenOverlay,
    /// Backdrop click or close control
    CloseOverlay,
    ZoomIn,
    ZoomOut,
    /// Escape key, from the global keyboard listener
    EscapePressed,
    /// Animation frame
    Tick(Instant),
    /// Background load of the slide at the given position finished
    ImageLoaded(usize, Result<LoadedImage, LoadError>),
}

impl PhotoCarousel {
    /// Create the application and start loading every slide
    fn new(config: Config, gallery: Gallery) -> (Self, Task<Message>) {
        let max_dimension = config.max_dimension;
        let loads: Vec<Task<Message>> = gallery
            .iter()
            .cloned()
            .enumerate()
            .map(|(index, image)| {
                Task::perform(media::load_image(image, max_dimension), move |result| {
                    Message::ImageLoaded(index, result)
                })
            })
            .collect();

        tracing::info!("🎞️  Photo carousel initialized with {} images", gallery.len());

        let app = PhotoCarousel {
            config,
            images: ImageCache::new(gallery.len()),
            carousel: Carousel::new(gallery),
            slide_transition: None,
            overlay_motion: None,
        };

        (app, Task::batch(loads))
    }

    fn title(&self) -> String {
        self.config.title.clone()
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::NextSlide => self.navigate(Carousel::next),
            Message::PrevSlide => self.navigate(Carousel::prev),
            Message::SelectSlide(index) => self.navigate(|carousel| {
                if let Err(err) = carousel.select_slide(index) {
                    tracing::warn!("Ignoring slide selection: {}", err);
                }
            }),
            Message::OpenOverlay => {
                self.carousel.open_overlay();
                self.overlay_motion = Some(OverlayMotion::open(
                    self.carousel.index(),
                    Instant::now(),
                    Duration::from_millis(self.config.overlay_transition_ms),
                ));
                if let Some(image) = self.carousel.overlay_image() {
                    tracing::debug!("🔍 Opened {}", image);
                }
            }
            Message::CloseOverlay => self.close_overlay(),
            Message::EscapePressed => {
                // No-op while the viewer is closed
                if self.carousel.overlay().is_open() {
                    self.close_overlay();
                }
            }
            Message::ZoomIn => {
                self.carousel.zoom_in();
                self.follow_zoom();
            }
            Message::ZoomOut => {
                self.carousel.zoom_out();
                self.follow_zoom();
            }
            Message::Tick(now) => self.tick(now),
            Message::ImageLoaded(index, result) => {
                let Some(image) = self.carousel.gallery().get(index) else {
                    return Task::none();
                };
                match &result {
                    Ok(loaded) => tracing::info!(
                        "📸 Loaded {} ({}x{})",
                        image,
                        loaded.width,
                        loaded.height
                    ),
                    Err(err) => tracing::warn!("⚠️  Failed to load {}: {}", image, err),
                }
                self.images.insert(index, result);
                tracing::debug!(
                    "{}/{} slides settled",
                    self.images.settled(),
                    self.carousel.gallery().len()
                );
            }
        }

        Task::none()
    }

    /// Apply a slide change and start the crossfade if the slide moved
    fn navigate(&mut self, step: impl FnOnce(&mut Carousel)) {
        let before = self.carousel.index();
        step(&mut self.carousel);
        let after = self.carousel.index();

        if after != before {
            tracing::debug!("Slide {} ({})", after + 1, self.carousel.current_image());
            self.slide_transition = Some(SlideTransition::start(
                before,
                after,
                Instant::now(),
                Duration::from_millis(self.config.slide_transition_ms),
            ));
        }
    }

    /// Close the viewer and let it fade out
    fn close_overlay(&mut self) {
        if !self.carousel.close_overlay() {
            return;
        }
        tracing::debug!("Closed fullscreen viewer");

        if let Some(motion) = &mut self.overlay_motion {
            if !motion.is_closing() {
                motion.close(Instant::now());
            }
        }
    }

    /// Ease the viewer's image towards the carousel's zoom
    fn follow_zoom(&mut self) {
        if let (Some(motion), Some(zoom)) = (&mut self.overlay_motion, self.carousel.zoom()) {
            if motion.zoom() != zoom {
                motion.zoom_to(zoom, Instant::now());
                tracing::debug!("Zoom {}%", zoom.percent());
            }
        }
    }

    /// Advance running animations and drop the finished ones
    fn tick(&mut self, now: Instant) {
        if let Some(transition) = &mut self.slide_transition {
            transition.tick(now);
            if transition.is_finished() {
                self.slide_transition = None;
            }
        }

        if let Some(motion) = &mut self.overlay_motion {
            motion.tick(now);
            if motion.is_done() {
                self.overlay_motion = None;
            }
        }
    }

    fn is_animating(&self) -> bool {
        self.slide_transition.is_some()
            || self
                .overlay_motion
                .is_some_and(|motion| !motion.is_settled())
    }

    /// Global listeners owned by the carousel
    ///
    /// iced keeps a listener registered only while it is returned here, so
    /// the Escape listener goes away with the component and frame ticks
    /// only run while something animates.
    fn subscription(&self) -> Subscription<Message> {
        let escape = keyboard::on_key_press(escape_key);

        if self.is_animating() {
            Subscription::batch([escape, window::frames().map(Message::Tick)])
        } else {
            escape
        }
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let description = view_model::describe(&self.carousel);

        let header = container(
            column![
                text(&self.config.title).size(32),
                text(&self.config.subtitle).size(14),
            ]
            .spacing(8)
            .align_x(Alignment::Center),
        )
        .width(Length::Fill)
        .padding(24)
        .center_x(Length::Fill)
        .style(ui::style::band);

        let strip = ui::strip::view(&description, &self.images, self.slide_transition.as_ref());

        let footer = container(text("Built with Rust, iced and tokio").size(14))
            .width(Length::Fill)
            .padding(16)
            .center_x(Length::Fill)
            .style(ui::style::band);

        let card = container(column![header, strip, footer])
            .max_width(768.0)
            .style(ui::style::card)
            .clip(true);

        let page = container(card)
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(24)
            .center_x(Length::Fill)
            .center_y(Length::Fill);

        let mut layers = Stack::new().push(page);
        if let Some(motion) = &self.overlay_motion {
            // While fading out the carousel is already closed; keep showing
            // what the viewer showed last.
            let (index, zoom) = description
                .overlay
                .map_or((motion.image(), motion.zoom()), |overlay| {
                    (overlay.index, overlay.zoom)
                });
            layers = layers.push(ui::overlay::view(index, zoom, motion, &self.images));
        }

        layers.width(Length::Fill).height(Length::Fill).into()
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

fn escape_key(key: keyboard::Key, _modifiers: keyboard::Modifiers) -> Option<Message> {
    match key {
        keyboard::Key::Named(keyboard::key::Named::Escape) => Some(Message::EscapePressed),
        _ => None,
    }
}

/// `RUST_LOG` when set and valid, `info` otherwise
fn log_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

fn main() -> iced::Result {
    tracing_subscriber::fmt().with_env_filter(log_filter()).init();

    let (config, gallery) = match load_startup_config() {
        Ok(startup) => startup,
        Err(err) => {
            tracing::error!("❌ {}", err);
            std::process::exit(1);
        }
    };

    iced::application(PhotoCarousel::title, PhotoCarousel::update, PhotoCarousel::view)
        .subscription(PhotoCarousel::subscription)
        .theme(PhotoCarousel::theme)
        .window_size((960.0, 780.0))
        .centered()
        .run_with(move || PhotoCarousel::new(config, gallery))
}

/// Resolve configuration and the image collection before any window opens
fn load_startup_config() -> Result<(Config, Gallery), config::ConfigError> {
    let args = Args::parse(pico_args::Arguments::from_env())?;
    let config = Config::from_args(&args)?;
    let gallery = config.gallery()?;
    Ok((config, gallery))
}

#[cfg(test)]
mod tests {
    use super::*;
    use state::carousel::Overlay;

    fn app() -> PhotoCarousel {
        let config = Config {
            images: vec!["A".into(), "B".into(), "C".into()],
            ..Config::default()
        };
        let gallery = config.gallery().unwrap();
        let (app, _loads) = PhotoCarousel::new(config, gallery);
        app
    }

    fn zoom(app: &PhotoCarousel) -> Option<f32> {
        app.carousel.zoom().map(|zoom| zoom.factor())
    }

    #[test]
    fn test_navigation_messages() {
        let mut app = app();

        let _ = app.update(Message::NextSlide);
        let _ = app.update(Message::NextSlide);
        assert_eq!(app.carousel.index(), 2);
        let _ = app.update(Message::NextSlide);
        assert_eq!(app.carousel.index(), 0);
        let _ = app.update(Message::PrevSlide);
        assert_eq!(app.carousel.index(), 2);
        let _ = app.update(Message::SelectSlide(1));
        assert_eq!(app.carousel.index(), 1);
    }

    #[test]
    fn test_invalid_marker_is_ignored() {
        let mut app = app();
        let _ = app.update(Message::SelectSlide(9));
        assert_eq!(app.carousel.index(), 0);
        assert!(app.slide_transition.is_none());
    }

    #[test]
    fn test_navigation_starts_transition() {
        let mut app = app();
        let _ = app.update(Message::NextSlide);

        let transition = app.slide_transition.expect("transition should run");
        assert_eq!((transition.from, transition.to), (0, 1));
        assert!(app.is_animating());

        let _ = app.update(Message::Tick(Instant::now() + Duration::from_secs(5)));
        assert!(app.slide_transition.is_none());
        assert!(!app.is_animating());
    }

    #[test]
    fn test_selecting_current_slide_does_not_animate() {
        let mut app = app();
        let _ = app.update(Message::SelectSlide(0));
        assert!(app.slide_transition.is_none());
    }

    #[test]
    fn test_overlay_zoom_messages() {
        let mut app = app();
        let _ = app.update(Message::NextSlide);
        let _ = app.update(Message::OpenOverlay);
        assert_eq!(
            app.carousel.overlay_image().map(|image| image.as_str()),
            Some("B")
        );

        for _ in 0..3 {
            let _ = app.update(Message::ZoomIn);
        }
        assert!((zoom(&app).unwrap() - 1.6).abs() < 1e-5);

        let _ = app.update(Message::ZoomOut);
        assert!((zoom(&app).unwrap() - 1.4).abs() < 1e-5);
        assert!(app.carousel.overlay().is_open());

        let _ = app.update(Message::CloseOverlay);
        assert_eq!(app.carousel.overlay(), Overlay::Closed);

        let _ = app.update(Message::OpenOverlay);
        assert!((zoom(&app).unwrap() - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_escape_closes_open_overlay() {
        let mut app = app();
        let _ = app.update(Message::OpenOverlay);
        let _ = app.update(Message::ZoomIn);

        let _ = app.update(Message::EscapePressed);
        assert_eq!(app.carousel.overlay(), Overlay::Closed);
        assert!(zoom(&app).is_none());
    }

    #[test]
    fn test_escape_while_closed_is_noop() {
        let mut app = app();
        let _ = app.update(Message::NextSlide);

        let _ = app.update(Message::EscapePressed);
        assert_eq!(app.carousel.overlay(), Overlay::Closed);
        assert_eq!(app.carousel.index(), 1);
    }

    #[test]
    fn test_overlay_fades_out_after_close() {
        let mut app = app();
        let _ = app.update(Message::OpenOverlay);
        assert!(app.is_animating());

        let _ = app.update(Message::Tick(Instant::now() + Duration::from_secs(5)));
        let motion = app.overlay_motion.expect("viewer stays drawn while open");
        assert_eq!(motion.opacity(), 1.0);
        assert!(!app.is_animating());

        let _ = app.update(Message::CloseOverlay);
        assert_eq!(app.carousel.overlay(), Overlay::Closed);
        let motion = app.overlay_motion.expect("viewer is still fading out");
        assert!(motion.is_closing());
        assert!(app.is_animating());

        let _ = app.update(Message::Tick(Instant::now() + Duration::from_secs(5)));
        assert!(app.overlay_motion.is_none());
        assert!(!app.is_animating());
    }

    #[test]
    fn test_zoom_eases_towards_new_level() {
        let mut app = app();
        let _ = app.update(Message::OpenOverlay);
        let _ = app.update(Message::Tick(Instant::now() + Duration::from_secs(5)));
        assert!(!app.is_animating());

        let _ = app.update(Message::ZoomIn);
        let motion = app.overlay_motion.expect("viewer is open");
        assert_eq!(motion.zoom().percent(), 120);
        assert!((motion.scale() - 1.0).abs() < 1e-5);
        assert!(app.is_animating());

        let _ = app.update(Message::Tick(Instant::now() + Duration::from_secs(5)));
        let motion = app.overlay_motion.expect("viewer is open");
        assert!((motion.scale() - 1.2).abs() < 1e-5);
    }

    #[test]
    fn test_zoom_at_limit_does_not_animate() {
        let mut app = app();
        let _ = app.update(Message::OpenOverlay);
        let _ = app.update(Message::Tick(Instant::now() + Duration::from_secs(5)));

        let _ = app.update(Message::ZoomOut);
        assert!(!app.is_animating());
        assert!(zoom(&app).is_some_and(|factor| (factor - 1.0).abs() < 1e-5));
    }

    #[test]
    fn test_rust_log_overrides_default_filter() {
        use tracing::Level;

        std::env::set_var("RUST_LOG", "debug");
        let subscriber = tracing_subscriber::fmt().with_env_filter(log_filter()).finish();
        tracing::subscriber::with_default(subscriber, || {
            assert!(tracing::enabled!(Level::DEBUG));
        });

        std::env::remove_var("RUST_LOG");
        let subscriber = tracing_subscriber::fmt().with_env_filter(log_filter()).finish();
        tracing::subscriber::with_default(subscriber, || {
            assert!(tracing::enabled!(Level::INFO));
            assert!(!tracing::enabled!(Level::DEBUG));
        });
    }

    #[test]
    fn test_escape_key_mapping() {
        let escape = keyboard::Key::Named(keyboard::key::Named::Escape);
        assert!(matches!(
            escape_key(escape, keyboard::Modifiers::default()),
            Some(Message::EscapePressed)
        ));

        let enter = keyboard::Key::Named(keyboard::key::Named::Enter);
        assert!(escape_key(enter, keyboard::Modifiers::default()).is_none());
    }

    #[test]
    fn test_failed_load_keeps_placeholder() {
        let mut app = app();
        let _ = app.update(Message::ImageLoaded(
            0,
            Err(LoadError::Http("404 Not Found".to_string())),
        ));

        assert!(app.images.ready(0).is_none());
        assert_eq!(app.images.settled(), 1);
    }
}
