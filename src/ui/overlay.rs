/// Fullscreen zoom viewer
///
/// A dark backdrop covering the whole window. Pressing anywhere on it
/// closes the viewer; the zoom and close controls are buttons, which
/// capture their press so it never reaches the backdrop.

use iced::alignment::Horizontal;
use iced::widget::image::Handle;
use iced::widget::scrollable::{Direction, Scrollbar};
use iced::widget::{
    button, container, image, mouse_area, opaque, responsive, row, scrollable, text, Stack,
};
use iced::{Alignment, Element, Length, Size};

use super::style;
use super::strip::placeholder_text;
use super::transition::OverlayMotion;
use crate::media::ImageCache;
use crate::state::ZoomLevel;
use crate::Message;

/// Share of the window the unzoomed image may cover
const VIEWPORT_FILL: f32 = 0.9;

/// Backdrop opacity once faded in
const BACKDROP_ALPHA: f32 = 0.9;

/// Fit `natural` inside `bounds`, keeping aspect ratio and never upscaling
pub fn contain(natural: Size, bounds: Size) -> Size {
    if natural.width <= 0.0 || natural.height <= 0.0 {
        return Size::new(0.0, 0.0);
    }

    let ratio = (bounds.width / natural.width)
        .min(bounds.height / natural.height)
        .min(1.0);

    Size::new(natural.width * ratio, natural.height * ratio)
}

/// Draw the viewer for gallery position `index` at `zoom`
///
/// Opacity and image scale come from `motion`, so the viewer keeps being
/// drawn while it fades out after closing.
pub fn view<'a>(
    index: usize,
    zoom: ZoomLevel,
    motion: &OverlayMotion,
    images: &ImageCache,
) -> Element<'a, Message> {
    let opacity = motion.opacity();
    let scale = motion.scale();

    let picture: Element<'a, Message> = match images.ready(index) {
        Some(loaded) => {
            let handle = loaded.handle.clone();
            let natural = Size::new(loaded.width as f32, loaded.height as f32);

            responsive(move |viewport| {
                zoomed_image(handle.clone(), natural, viewport, scale, opacity)
            })
            .into()
        }
        None => container(text(placeholder_text(index, images)).size(24))
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .into(),
    };

    let controls = container(
        row![
            text(format!("{}%", zoom.percent())).size(16),
            control("+", Message::ZoomIn, !zoom.is_max()),
            control("−", Message::ZoomOut, !zoom.is_min()),
            control("✕", Message::CloseOverlay, true),
        ]
        .spacing(12)
        .align_y(Alignment::Center),
    )
    .width(Length::Fill)
    .align_x(Horizontal::Right)
    .padding(24);

    let backdrop = container(
        Stack::new()
            .push(picture)
            .push(controls)
            .width(Length::Fill)
            .height(Length::Fill),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .style(style::backdrop(BACKDROP_ALPHA * opacity));

    opaque(mouse_area(backdrop).on_press(Message::CloseOverlay))
}

/// Image sized for the current zoom, scrollable once it outgrows the window
fn zoomed_image<'a>(
    handle: Handle,
    natural: Size,
    viewport: Size,
    scale: f32,
    opacity: f32,
) -> Element<'a, Message> {
    let fitted = contain(
        natural,
        Size::new(viewport.width * VIEWPORT_FILL, viewport.height * VIEWPORT_FILL),
    );
    let shown = Size::new(fitted.width * scale, fitted.height * scale);

    let canvas = container(
        image(handle)
            .width(Length::Fixed(shown.width))
            .height(Length::Fixed(shown.height))
            .opacity(opacity),
    )
    .center_x(Length::Fixed(shown.width.max(viewport.width)))
    .center_y(Length::Fixed(shown.height.max(viewport.height)));

    scrollable(canvas)
        .direction(Direction::Both {
            vertical: Scrollbar::new(),
            horizontal: Scrollbar::new(),
        })
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

// Controls always carry `on_press`: a disabled button lets the press
// through to the backdrop, which would close the viewer. A control with
// nothing left to do is only dimmed.
fn control<'a>(label: &'a str, message: Message, active: bool) -> Element<'a, Message> {
    button(text(label).size(20))
        .padding([6, 12])
        .on_press(message)
        .style(style::zoom_control(active))
        .into()
}
