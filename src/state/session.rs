/// The triage session: the authoritative record of what has been decided
///
/// A session owns an immutable, ordered batch of photos and walks it front
/// to back exactly once, sorting each photo into the `kept` or `deleted`
/// partition. `record_decision` is the only mutator; everything else is a
/// read-only query. Invariant throughout:
/// `kept.len() + deleted.len() == cursor`, and the two partitions together
/// are exactly the decided prefix of the batch, in decision order.
use thiserror::Error;

use super::data::Photo;

/// A committed swipe direction.
///
/// Classified gestures, keyboard shortcuts, and the on-screen buttons all
/// reduce to this before they reach the session; the session cannot tell
/// them apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Delete the current photo
    Left,
    /// Keep the current photo
    Right,
}

/// Errors surfaced by the session. Both are caller bugs, not runtime
/// conditions to retry.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SessionError {
    #[error("cannot start a triage session with an empty photo batch")]
    EmptyBatch,
    #[error("the triage session is already complete")]
    Complete,
}

/// Sequential traversal over one batch of photos.
#[derive(Debug)]
pub struct TriageSession {
    photos: Vec<Photo>,
    cursor: usize,
    kept: Vec<Photo>,
    deleted: Vec<Photo>,
}

impl TriageSession {
    /// Start a session over a finalized batch.
    ///
    /// The batch must already be validated and non-empty; an empty batch is
    /// rejected rather than producing a session that is born complete.
    pub fn new(photos: Vec<Photo>) -> Result<Self, SessionError> {
        if photos.is_empty() {
            return Err(SessionError::EmptyBatch);
        }

        Ok(TriageSession {
            photos,
            cursor: 0,
            kept: Vec::new(),
            deleted: Vec::new(),
        })
    }

    /// The photo awaiting a decision, or `None` once the session is
    /// complete.
    pub fn current(&self) -> Option<&Photo> {
        self.photos.get(self.cursor)
    }

    /// How many photos still await a decision.
    pub fn remaining(&self) -> usize {
        self.photos.len() - self.cursor
    }

    /// Total batch size.
    pub fn total(&self) -> usize {
        self.photos.len()
    }

    /// Whether every photo in the batch has been decided.
    pub fn is_complete(&self) -> bool {
        self.cursor == self.photos.len()
    }

    /// Fraction of the batch decided so far, in `[0, 1]`.
    pub fn progress(&self) -> f32 {
        self.cursor as f32 / self.photos.len() as f32
    }

    /// Commit a decision for the current photo and advance the cursor.
    ///
    /// This is the session's single mutation point. A complete session
    /// rejects further decisions without touching either partition.
    pub fn record_decision(&mut self, direction: Direction) -> Result<(), SessionError> {
        let photo = self
            .photos
            .get(self.cursor)
            .cloned()
            .ok_or(SessionError::Complete)?;

        match direction {
            Direction::Right => self.kept.push(photo),
            Direction::Left => self.deleted.push(photo),
        }
        self.cursor += 1;

        Ok(())
    }

    /// Photos decided as keepers, in decision order.
    pub fn kept(&self) -> &[Photo] {
        &self.kept
    }

    /// Photos marked for deletion, in decision order.
    pub fn deleted(&self) -> &[Photo] {
        &self.deleted
    }

    pub fn kept_count(&self) -> usize {
        self.kept.len()
    }

    pub fn deleted_count(&self) -> usize {
        self.deleted.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::widget::image::Handle;

    fn photo(id: u64, name: &str) -> Photo {
        Photo {
            id,
            name: name.to_string(),
            size: "1 KB".to_string(),
            handle: Handle::from_bytes(Vec::new()),
        }
    }

    fn batch() -> Vec<Photo> {
        vec![photo(1, "a.jpg"), photo(2, "b.jpg"), photo(3, "c.jpg")]
    }

    fn check_invariant(session: &TriageSession) {
        let decided = session.total() - session.remaining();
        assert_eq!(session.kept_count() + session.deleted_count(), decided);
        for kept in session.kept() {
            assert!(!session.deleted().contains(kept));
        }
    }

    #[test]
    fn test_empty_batch_is_rejected() {
        assert_eq!(
            TriageSession::new(Vec::new()).err(),
            Some(SessionError::EmptyBatch)
        );
    }

    #[test]
    fn test_fresh_session() {
        let session = TriageSession::new(batch()).unwrap();
        assert_eq!(session.current().map(|p| p.id), Some(1));
        assert_eq!(session.remaining(), 3);
        assert_eq!(session.total(), 3);
        assert!(!session.is_complete());
        assert_eq!(session.progress(), 0.0);
        check_invariant(&session);
    }

    #[test]
    fn test_queries_are_stable_between_decisions() {
        let session = TriageSession::new(batch()).unwrap();
        assert_eq!(session.current(), session.current());
        assert_eq!(session.remaining(), session.remaining());
    }

    #[test]
    fn test_keep_advances_cursor() {
        let mut session = TriageSession::new(batch()).unwrap();
        session.record_decision(Direction::Right).unwrap();

        assert_eq!(session.current().map(|p| p.id), Some(2));
        assert_eq!(session.remaining(), 2);
        assert_eq!(session.kept().iter().map(|p| p.id).collect::<Vec<_>>(), [1]);
        assert!(session.deleted().is_empty());
        check_invariant(&session);
    }

    #[test]
    fn test_full_traversal_partitions_in_order() {
        let mut session = TriageSession::new(batch()).unwrap();
        session.record_decision(Direction::Right).unwrap();
        session.record_decision(Direction::Left).unwrap();
        session.record_decision(Direction::Right).unwrap();

        assert!(session.is_complete());
        assert_eq!(session.current(), None);
        assert_eq!(session.remaining(), 0);
        assert_eq!(session.progress(), 1.0);
        assert_eq!(
            session.kept().iter().map(|p| p.id).collect::<Vec<_>>(),
            [1, 3]
        );
        assert_eq!(
            session.deleted().iter().map(|p| p.id).collect::<Vec<_>>(),
            [2]
        );
        check_invariant(&session);
    }

    #[test]
    fn test_single_photo_session() {
        let mut session = TriageSession::new(vec![photo(7, "only.png")]).unwrap();
        session.record_decision(Direction::Left).unwrap();

        assert!(session.is_complete());
        assert!(session.kept().is_empty());
        assert_eq!(session.deleted().iter().map(|p| p.id).collect::<Vec<_>>(), [7]);
    }

    #[test]
    fn test_complete_session_rejects_decisions() {
        let mut session = TriageSession::new(vec![photo(1, "a.jpg")]).unwrap();
        session.record_decision(Direction::Right).unwrap();

        let err = session.record_decision(Direction::Left);
        assert_eq!(err, Err(SessionError::Complete));

        // The failed call mutated nothing
        assert_eq!(session.kept_count(), 1);
        assert_eq!(session.deleted_count(), 0);
        assert_eq!(session.remaining(), 0);
        check_invariant(&session);
    }

    #[test]
    fn test_invariant_holds_across_traversal() {
        let mut session = TriageSession::new(batch()).unwrap();
        let mut last_remaining = session.remaining();

        for direction in [Direction::Left, Direction::Right, Direction::Left] {
            session.record_decision(direction).unwrap();
            check_invariant(&session);

            // The cursor only ever moves forward
            assert!(session.remaining() < last_remaining);
            last_remaining = session.remaining();
        }
        assert!(session.is_complete());
    }
}
