use iced::keyboard::{self, key};
use iced::widget::{button, canvas, column, container, progress_bar, row, scrollable, text, Column};
use iced::{Alignment, Element, Length, Subscription, Task, Theme};
use rfd::FileDialog;

mod gesture;
mod photo;
mod state;
mod ui;

use photo::loader::{self, BatchResult};
use state::session::{Direction, SessionError, TriageSession};

/// Main application state
struct PhotoTriage {
    /// The active triage session; `None` until a batch has been loaded
    session: Option<TriageSession>,
    /// True while a picked batch is loading in the background
    loading: bool,
    /// Status message to display to the user
    status: String,
}

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    /// User clicked the photo picker
    PickPhotos,
    /// Background batch load completed
    BatchLoaded(BatchResult),
    /// A direction was committed - by gesture, keyboard, or button
    Decided(Direction),
    /// Discard the current session and return to the picker
    StartOver,
}

impl PhotoTriage {
    /// Create a new instance of the application
    fn new() -> (Self, Task<Message>) {
        println!("📸 Photo Triage initialized");

        (
            PhotoTriage {
                session: None,
                loading: false,
                status: "Select photos to get started.".to_string(),
            },
            Task::none(),
        )
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::PickPhotos => {
                if self.loading {
                    return Task::none();
                }

                // Show the native file picker dialog
                let picked = FileDialog::new()
                    .set_title("Select Photos to Triage")
                    .add_filter("Images", &loader::IMAGE_EXTENSIONS)
                    .pick_files();

                if let Some(paths) = picked {
                    if !paths.is_empty() {
                        self.loading = true;
                        self.status = format!("Loading {} photos...", paths.len());

                        // Validate and load the batch off the UI thread
                        return Task::perform(
                            loader::load_batch(paths),
                            Message::BatchLoaded,
                        );
                    }
                }

                Task::none()
            }
            Message::BatchLoaded(batch) => {
                self.loading = false;

                match TriageSession::new(batch.photos) {
                    Ok(session) => {
                        self.status = format!(
                            "Loaded {} photos. Swipe right to keep, left to delete.",
                            session.total()
                        );
                        self.session = Some(session);
                    }
                    Err(SessionError::EmptyBatch) => {
                        self.status = format!(
                            "No readable images in that selection ({} files skipped).",
                            batch.skipped
                        );
                    }
                    Err(e) => {
                        self.status = format!("Could not start session: {}", e);
                    }
                }

                Task::none()
            }
            Message::Decided(direction) => {
                let Some(session) = &mut self.session else {
                    return Task::none();
                };

                // Late keyboard input after the last card decides nothing
                if session.is_complete() {
                    return Task::none();
                }

                match session.record_decision(direction) {
                    Ok(()) => {
                        if session.is_complete() {
                            println!(
                                "🎉 Triage complete: {} kept, {} to delete",
                                session.kept_count(),
                                session.deleted_count()
                            );
                        }
                    }
                    Err(e) => eprintln!("⚠️  Decision rejected: {}", e),
                }

                Task::none()
            }
            Message::StartOver => {
                if self.session.take().is_some() {
                    println!("🔄 Session discarded, back to the picker");
                }
                self.status = "Select photos to get started.".to_string();

                Task::none()
            }
        }
    }

    /// Keyboard shortcuts: ← / x delete, → / space / enter keep, r restart
    fn subscription(&self) -> Subscription<Message> {
        keyboard::on_key_press(|key, _modifiers| match key.as_ref() {
            keyboard::Key::Named(key::Named::ArrowLeft) => {
                Some(Message::Decided(Direction::Left))
            }
            keyboard::Key::Named(
                key::Named::ArrowRight | key::Named::Space | key::Named::Enter,
            ) => Some(Message::Decided(Direction::Right)),
            keyboard::Key::Character("x" | "X") => Some(Message::Decided(Direction::Left)),
            keyboard::Key::Character("r" | "R") => Some(Message::StartOver),
            _ => None,
        })
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let screen = match &self.session {
            None => self.view_picker(),
            Some(session) if session.is_complete() => self.view_summary(session),
            Some(session) => self.view_triage(session),
        };

        container(screen)
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .into()
    }

    /// Entry screen: nothing loaded yet
    fn view_picker(&self) -> Element<Message> {
        column![
            text("📸 Photo Cleanup").size(48),
            text("Swipe to organize your photos").size(18),
            button("Open Photo Gallery")
                .on_press_maybe((!self.loading).then_some(Message::PickPhotos))
                .padding(15),
            text("✅ Select multiple photos").size(14),
            text("✅ Works offline").size(14),
            text("✅ Nothing leaves your device").size(14),
            text(&self.status).size(16),
        ]
        .spacing(15)
        .padding(40)
        .align_x(Alignment::Center)
        .into()
    }

    /// Active triage: stats, the swipeable card, and the action buttons
    fn view_triage(&self, session: &TriageSession) -> Element<Message> {
        let stats = row![
            text(format!("Kept: {}", session.kept_count())).size(16),
            text(format!("Deleted: {}", session.deleted_count())).size(16),
            text(format!("Remaining: {}", session.remaining())).size(16),
        ]
        .spacing(30);

        let card: Element<Message> = match session.current() {
            Some(photo) => canvas(ui::card::PhotoCard::new(photo.clone()))
                .width(Length::Fill)
                .height(Length::Fixed(560.0))
                .into(),
            None => text("").into(),
        };

        let actions = row![
            button("❌ Delete")
                .style(button::danger)
                .on_press(Message::Decided(Direction::Left))
                .padding(12),
            button("💚 Keep")
                .style(button::success)
                .on_press(Message::Decided(Direction::Right))
                .padding(12),
        ]
        .spacing(40);

        column![
            text("📸 Photo Cleanup").size(32),
            stats,
            progress_bar(0.0..=1.0, session.progress()).height(10),
            card,
            actions,
            text("← Delete | → Keep | R Restart").size(12),
        ]
        .spacing(15)
        .padding(20)
        .align_x(Alignment::Center)
        .into()
    }

    /// Terminal screen: both partitions are final
    fn view_summary(&self, session: &TriageSession) -> Element<Message> {
        let kept_list = Column::with_children(
            session
                .kept()
                .iter()
                .map(|photo| text(format!("✅ {}", photo.name)).size(14).into()),
        )
        .spacing(4);

        let deleted_list = Column::with_children(
            session
                .deleted()
                .iter()
                .map(|photo| text(format!("🗑️ {}", photo.name)).size(14).into()),
        )
        .spacing(4);

        column![
            text("🎉 All Done!").size(48),
            text("You've organized all your photos").size(18),
            row![
                text(format!("✅ {} photos to keep", session.kept_count())).size(16),
                text(format!("🗑️ {} photos to delete", session.deleted_count())).size(16),
            ]
            .spacing(30),
            scrollable(
                row![kept_list, deleted_list]
                    .spacing(60)
                    .padding(10)
            )
            .height(Length::Fixed(260.0)),
            button("Start Over").on_press(Message::StartOver).padding(15),
        ]
        .spacing(15)
        .padding(40)
        .align_x(Alignment::Center)
        .into()
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

fn main() -> iced::Result {
    iced::application("Photo Triage", PhotoTriage::update, PhotoTriage::view)
        .subscription(PhotoTriage::subscription)
        .theme(PhotoTriage::theme)
        .centered()
        .run_with(PhotoTriage::new)
}
