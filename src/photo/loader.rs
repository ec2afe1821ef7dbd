/// Photo batch loading
///
/// Turns a list of user-picked paths into validated `Photo` values. Each
/// file is probed with the image crate before it enters the queue, so the
/// triage session only ever sees renderable photos. Unreadable files are
/// skipped with a warning; a bad file never fails the whole batch.
use std::path::{Path, PathBuf};

use iced::widget::image::Handle;
use tokio::task;

use crate::state::data::Photo;

/// File extensions offered by the native picker
pub const IMAGE_EXTENSIONS: [&str; 8] = [
    "jpg", "jpeg", "png", "gif", "bmp", "webp", "tif", "tiff",
];

/// Outcome of loading a picked batch
#[derive(Debug, Clone)]
pub struct BatchResult {
    /// Photos that passed validation, in pick order
    pub photos: Vec<Photo>,
    /// Files that could not be read as images
    pub skipped: usize,
}

/// Load and validate a batch of picked files.
/// Runs on a blocking thread to keep header probing off the UI thread.
pub async fn load_batch(paths: Vec<PathBuf>) -> BatchResult {
    task::spawn_blocking(move || load_batch_blocking(paths))
        .await
        .unwrap_or_else(|e| {
            eprintln!("⚠️  Photo loading task failed: {}", e);
            BatchResult {
                photos: Vec::new(),
                skipped: 0,
            }
        })
}

/// Blocking implementation of batch loading
fn load_batch_blocking(paths: Vec<PathBuf>) -> BatchResult {
    let mut photos = Vec::new();
    let mut skipped = 0;

    for (index, path) in paths.into_iter().enumerate() {
        match load_photo(&path, index as u64 + 1) {
            Ok(photo) => {
                println!("📸 Loaded {} ({})", photo.name, photo.size);
                photos.push(photo);
            }
            Err(reason) => {
                eprintln!("⚠️  Skipping {}: {}", path.display(), reason);
                skipped += 1;
            }
        }
    }

    println!(
        "✅ Batch ready: {} photos, {} skipped",
        photos.len(),
        skipped
    );

    BatchResult { photos, skipped }
}

/// Validate one file and build its `Photo` value
fn load_photo(path: &Path, id: u64) -> Result<Photo, String> {
    // Probe the header without decoding the full image
    let (width, height) =
        image::image_dimensions(path).map_err(|e| format!("not a readable image: {}", e))?;

    if width == 0 || height == 0 {
        return Err("image has zero dimensions".to_string());
    }

    let bytes = std::fs::metadata(path)
        .map_err(|e| format!("failed to read file metadata: {}", e))?
        .len();

    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string());

    Ok(Photo {
        id,
        name,
        size: format_file_size(bytes),
        handle: Handle::from_path(path),
    })
}

/// Format a byte count for display (1024 base, two decimals max)
pub fn format_file_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];

    if bytes == 0 {
        return "0 B".to_string();
    }

    let exponent = ((bytes as f64).log(1024.0).floor() as usize).min(UNITS.len() - 1);
    let value = bytes as f64 / 1024f64.powi(exponent as i32);
    let rounded = (value * 100.0).round() / 100.0;

    format!("{} {}", rounded, UNITS[exponent])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_file_size() {
        assert_eq!(format_file_size(0), "0 B");
        assert_eq!(format_file_size(512), "512 B");
        assert_eq!(format_file_size(1024), "1 KB");
        assert_eq!(format_file_size(1536), "1.5 KB");
        assert_eq!(format_file_size(2 * 1024 * 1024), "2 MB");
        assert_eq!(format_file_size(5 * 1024 * 1024 * 1024), "5 GB");
    }

    #[test]
    fn test_format_file_size_rounds_to_two_decimals() {
        // 1234567 / 1024^2 = 1.17737... MB
        assert_eq!(format_file_size(1_234_567), "1.18 MB");
    }

    #[test]
    fn test_huge_sizes_stay_in_gb() {
        // Past the last unit the exponent is clamped rather than overflowing
        assert_eq!(format_file_size(3 * 1024u64.pow(4)), "3072 GB");
    }

    #[test]
    fn test_load_photo_missing_file() {
        let result = load_photo(Path::new("/nonexistent/photo.jpg"), 1);
        assert!(result.is_err());
    }

    #[test]
    fn test_batch_skips_unreadable_files() {
        let batch = load_batch_blocking(vec![
            PathBuf::from("/nonexistent/a.jpg"),
            PathBuf::from("/nonexistent/b.png"),
        ]);
        assert!(batch.photos.is_empty());
        assert_eq!(batch.skipped, 2);
    }
}
