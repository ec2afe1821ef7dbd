/// Shared data structures for the application state
///
/// These structs represent the data model that flows between
/// the photo loading layer and the UI layer.
use iced::widget::image::Handle;

/// A single photo queued for triage
#[derive(Debug, Clone)]
pub struct Photo {
    /// Unique id, stable for the lifetime of the batch
    pub id: u64,
    /// Display name (e.g. "IMG_0421.jpg")
    pub name: String,
    /// Human-readable file size (e.g. "2.4 MB")
    pub size: String,
    /// Renderable image data, decoded on demand by the renderer
    pub handle: Handle,
}

// Photos compare by identity; the image data never changes after creation
impl PartialEq for Photo {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Photo {}
