/// Photo ingestion module
///
/// This module handles:
/// - Validating user-picked files as renderable images
/// - Building `Photo` values with display names and size labels
/// - Loading batches off the UI thread

pub mod loader;
