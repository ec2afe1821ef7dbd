/// State management module
///
/// This module handles all application state, including:
/// - The triage session traversal and its partitions (session.rs)
/// - Shared data structures (data.rs)

pub mod data;
pub mod session;
