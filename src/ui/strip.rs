/// Slide strip
///
/// Renders the active slide (crossfading with the previous one while a
/// transition runs), the prev/next arrows and the pagination markers.

use iced::alignment::{Horizontal, Vertical};
use iced::mouse;
use iced::widget::image::Handle;
use iced::widget::{button, container, image, mouse_area, responsive, row, text, Space, Stack};
use iced::{Alignment, ContentFit, Element, Length, Size};

use super::style;
use super::transition::{Layer, SlideTransition};
use crate::media::{ImageCache, Slot};
use crate::state::view_model::{slide_label, CarouselView, Marker};
use crate::Message;

/// Height of the strip in logical pixels
pub const STRIP_HEIGHT: f32 = 420.0;

/// One image drawn in the strip for the current frame
#[derive(Debug, Clone)]
pub struct SlideLayer {
    pub index: usize,
    pub handle: Option<Handle>,
    /// Shown instead of the image while `handle` is missing
    pub caption: String,
    pub layer: Layer,
}

/// Compute what the strip draws, back to front
///
/// The outgoing slide is only drawn while a transition towards the
/// active slide is running and its pixels are available.
pub fn slide_layers(
    index: usize,
    images: &ImageCache,
    transition: Option<&SlideTransition>,
) -> Vec<SlideLayer> {
    let handle = |i: usize| images.ready(i).map(|loaded| loaded.handle.clone());

    match transition {
        Some(transition) if transition.to == index => {
            let mut layers = Vec::with_capacity(2);
            if transition.from != index {
                if let Some(outgoing) = handle(transition.from) {
                    layers.push(SlideLayer {
                        index: transition.from,
                        handle: Some(outgoing),
                        caption: placeholder_text(transition.from, images),
                        layer: transition.outgoing(),
                    });
                }
            }
            layers.push(SlideLayer {
                index,
                handle: handle(index),
                caption: placeholder_text(index, images),
                layer: transition.incoming(),
            });
            layers
        }
        _ => vec![SlideLayer {
            index,
            handle: handle(index),
            caption: placeholder_text(index, images),
            layer: Layer::RESTING,
        }],
    }
}

/// Caption drawn where a slide has no pixels yet
pub fn placeholder_text(index: usize, images: &ImageCache) -> String {
    let label = slide_label(index);
    match images.slot(index) {
        Some(Slot::Failed(err)) => format!("{label} ({err})"),
        _ => label,
    }
}

pub fn view<'a>(
    carousel: &CarouselView,
    images: &ImageCache,
    transition: Option<&SlideTransition>,
) -> Element<'a, Message> {
    let layers = slide_layers(carousel.index, images, transition);

    let slides = responsive(move |size| {
        Stack::with_children(layers.iter().map(|slide| render_layer(slide, size)))
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    });

    let slides = mouse_area(slides)
        .on_press(Message::OpenOverlay)
        .interaction(mouse::Interaction::Pointer);

    let arrows = container(
        row![
            arrow("‹", Message::PrevSlide),
            Space::with_width(Length::Fill),
            arrow("›", Message::NextSlide),
        ]
        .align_y(Alignment::Center),
    )
    .width(Length::Fill)
    .center_y(Length::Fill)
    .padding([0, 20]);

    let markers = container(
        row(carousel.markers.iter().copied().map(marker))
            .spacing(8)
            .align_y(Alignment::Center),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .align_x(Horizontal::Center)
    .align_y(Vertical::Bottom)
    .padding(16);

    container(
        Stack::new()
            .push(slides)
            .push(arrows)
            .push(markers)
            .width(Length::Fill)
            .height(Length::Fill),
    )
    .width(Length::Fill)
    .height(Length::Fixed(STRIP_HEIGHT))
    .clip(true)
    .into()
}

fn render_layer<'a>(slide: &SlideLayer, size: Size) -> Element<'a, Message> {
    match &slide.handle {
        Some(handle) => container(
            image(handle.clone())
                .content_fit(ContentFit::Cover)
                .width(Length::Fixed(size.width * slide.layer.scale))
                .height(Length::Fixed(size.height * slide.layer.scale))
                .opacity(slide.layer.opacity),
        )
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into(),
        None => container(text(slide.caption.clone()).size(20))
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .into(),
    }
}

fn arrow<'a>(label: &'a str, message: Message) -> Element<'a, Message> {
    button(text(label).size(28))
        .padding([2, 14])
        .on_press(message)
        .style(style::control)
        .into()
}

fn marker<'a>(marker: Marker) -> Element<'a, Message> {
    let size = if marker.active { 15.0 } else { 12.0 };

    button(Space::new(Length::Fixed(size), Length::Fixed(size)))
        .padding(0)
        .on_press(Message::SelectSlide(marker.index))
        .style(style::marker(marker.active, size))
        .into()
}
