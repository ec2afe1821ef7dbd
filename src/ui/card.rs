use iced::alignment::{Horizontal, Vertical};
use iced::mouse::{self, Cursor};
use iced::widget::canvas::{self, Program};
use iced::border::Radius;
use iced::{touch, Color, Degrees, Point, Rectangle, Renderer, Size, Theme, Vector};

use crate::gesture::{self, GestureSession};
use crate::state::data::Photo;
use crate::state::session::Direction;
use crate::Message;

const CARD_WIDTH: f32 = 340.0;
const CARD_HEIGHT: f32 = 460.0;
const CARD_MARGIN: f32 = 10.0;
const IMAGE_HEIGHT: f32 = 320.0;

/// The interactive card for the front-most photo.
///
/// Renders the photo with the live drag transform and feeds raw
/// mouse/touch events into the gesture tracker. The tracker's session lives
/// in the canvas widget state, so it survives redraws but is scoped to this
/// card; at most one `Message::Decided` is emitted per press-to-release.
pub struct PhotoCard {
    photo: Photo,
}

impl PhotoCard {
    pub fn new(photo: Photo) -> Self {
        PhotoCard { photo }
    }
}

impl Program<Message> for PhotoCard {
    type State = GestureSession;

    fn update(
        &self,
        state: &mut Self::State,
        event: canvas::Event,
        _bounds: Rectangle,
        cursor: Cursor,
    ) -> (canvas::event::Status, Option<Message>) {
        match event {
            // Mouse press over the card - start tracking
            canvas::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                if let Some(position) = cursor.position() {
                    state.begin(position);
                    return (canvas::event::Status::Captured, None);
                }
            }

            canvas::Event::Mouse(mouse::Event::CursorMoved { position }) => {
                if state.is_active() {
                    state.track(position);
                    return (canvas::event::Status::Captured, None);
                }
            }

            canvas::Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
                if state.is_active() {
                    let decision = state.resolve();
                    return (canvas::event::Status::Captured, decision.map(Message::Decided));
                }
            }

            // The cursor left the window mid-drag. The last known offset
            // still classifies, so a decisive drag is not lost.
            canvas::Event::Mouse(mouse::Event::CursorLeft) => {
                if state.is_active() {
                    let decision = state.resolve();
                    return (canvas::event::Status::Captured, decision.map(Message::Decided));
                }
            }

            // Touch events for mobile-style input. Only the primary contact
            // is tracked; begin() ignores extra fingers.
            canvas::Event::Touch(touch::Event::FingerPressed { position, .. }) => {
                state.begin(position);
                return (canvas::event::Status::Captured, None);
            }

            canvas::Event::Touch(touch::Event::FingerMoved { position, .. }) => {
                if state.is_active() {
                    state.track(position);
                    return (canvas::event::Status::Captured, None);
                }
            }

            canvas::Event::Touch(
                touch::Event::FingerLifted { .. } | touch::Event::FingerLost { .. },
            ) => {
                if state.is_active() {
                    let decision = state.resolve();
                    return (canvas::event::Status::Captured, decision.map(Message::Decided));
                }
            }

            _ => {}
        }

        (canvas::event::Status::Ignored, None)
    }

    fn draw(
        &self,
        state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = canvas::Frame::new(renderer, bounds.size());
        let transform = gesture::card_transform(state.offset());
        let center = frame.center();

        frame.push_transform();
        frame.translate(Vector::new(center.x, center.y) + transform.translation);
        frame.rotate(Degrees(transform.rotation));

        // Card background
        let card = canvas::Path::rounded_rectangle(
            Point::new(-CARD_WIDTH / 2.0, -CARD_HEIGHT / 2.0),
            Size::new(CARD_WIDTH, CARD_HEIGHT),
            Radius::from(20.0),
        );
        frame.fill(&card, Color::from_rgba(1.0, 1.0, 1.0, transform.opacity));

        // Photo
        let image_bounds = Rectangle::new(
            Point::new(
                -CARD_WIDTH / 2.0 + CARD_MARGIN,
                -CARD_HEIGHT / 2.0 + CARD_MARGIN,
            ),
            Size::new(CARD_WIDTH - 2.0 * CARD_MARGIN, IMAGE_HEIGHT),
        );
        frame.draw_image(
            image_bounds,
            canvas::Image::new(self.photo.handle.clone()).opacity(transform.opacity),
        );

        // Name and size labels
        frame.fill_text(canvas::Text {
            content: self.photo.name.clone(),
            position: Point::new(0.0, -CARD_HEIGHT / 2.0 + CARD_MARGIN + IMAGE_HEIGHT + 35.0),
            color: Color::from_rgba(0.13, 0.13, 0.13, transform.opacity),
            size: 18.0.into(),
            font: iced::Font {
                weight: iced::font::Weight::Bold,
                ..iced::Font::DEFAULT
            },
            horizontal_alignment: Horizontal::Center,
            vertical_alignment: Vertical::Center,
            ..canvas::Text::default()
        });
        frame.fill_text(canvas::Text {
            content: self.photo.size.clone(),
            position: Point::new(0.0, -CARD_HEIGHT / 2.0 + CARD_MARGIN + IMAGE_HEIGHT + 62.0),
            color: Color::from_rgba(0.4, 0.4, 0.4, transform.opacity),
            size: 14.0.into(),
            horizontal_alignment: Horizontal::Center,
            vertical_alignment: Vertical::Center,
            ..canvas::Text::default()
        });

        // Advisory KEEP/DELETE hint once the drag leans far enough
        if let Some(hint) = transform.hint {
            let (label, color) = match hint {
                Direction::Right => ("KEEP", Color::from_rgba8(34, 197, 94, transform.opacity)),
                Direction::Left => ("DELETE", Color::from_rgba8(239, 68, 68, transform.opacity)),
            };
            frame.fill_text(canvas::Text {
                content: label.to_string(),
                position: Point::new(0.0, -CARD_HEIGHT / 2.0 + 55.0),
                color,
                size: 36.0.into(),
                font: iced::Font {
                    weight: iced::font::Weight::Bold,
                    ..iced::Font::DEFAULT
                },
                horizontal_alignment: Horizontal::Center,
                vertical_alignment: Vertical::Center,
                ..canvas::Text::default()
            });
        }

        frame.pop_transform();

        vec![frame.into_geometry()]
    }

    fn mouse_interaction(
        &self,
        state: &Self::State,
        bounds: Rectangle,
        cursor: Cursor,
    ) -> mouse::Interaction {
        if state.is_active() {
            mouse::Interaction::Grabbing
        } else if cursor.is_over(bounds) {
            mouse::Interaction::Grab
        } else {
            mouse::Interaction::default()
        }
    }
}
