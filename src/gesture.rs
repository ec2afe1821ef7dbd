/// Swipe gesture tracking and classification
///
/// A `GestureSession` follows one continuous press-to-release interaction:
/// it is started at press-down, fed every pointer move, and resolved exactly
/// once at release (or when the input stream is lost). Resolution classifies
/// the final horizontal offset into a committed direction or a cancel.
///
/// Classification is a pure function of the session value, so it is testable
/// without any event loop. The visual card transform derived from the live
/// offset lives here too; it is advisory only and never affects the outcome.
use iced::{Point, Vector};

use crate::state::session::Direction;

/// Minimum absolute horizontal offset (in logical pixels) required to commit
/// a swipe. A release at or below this distance cancels the gesture.
pub const SWIPE_THRESHOLD: f32 = 100.0;

/// Horizontal offset at which the KEEP/DELETE hint label appears.
pub const HINT_THRESHOLD: f32 = 50.0;

/// Degrees of card rotation per pixel of horizontal drag.
const ROTATION_FACTOR: f32 = 0.1;

/// Vertical drag is damped so the card mostly moves sideways.
const VERTICAL_DAMPING: f32 = 0.1;

/// Horizontal distance over which the card fades out completely.
const FADE_DISTANCE: f32 = 300.0;

/// One press-to-release tracking session.
///
/// The default value is the idle state. A session is discarded (reset to
/// idle) at the end of every interaction regardless of outcome, so a single
/// session can never produce more than one decision.
#[derive(Debug, Clone, Copy, Default)]
pub struct GestureSession {
    origin: Point,
    offset: Vector,
    active: bool,
}

impl GestureSession {
    /// Start tracking from a press-down at `origin`.
    ///
    /// A press while a session is already active is ignored: the tracker is
    /// single-pointer and only follows the primary contact.
    pub fn begin(&mut self, origin: Point) {
        if self.active {
            return;
        }
        self.origin = origin;
        self.offset = Vector::new(0.0, 0.0);
        self.active = true;
    }

    /// Update the live offset from the current pointer position.
    /// Moves arriving while idle are ignored.
    pub fn track(&mut self, position: Point) {
        if !self.active {
            return;
        }
        self.offset = position - self.origin;
    }

    /// Whether a press is currently being tracked.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// The live (dx, dy) offset relative to the press origin.
    pub fn offset(&self) -> Vector {
        self.offset
    }

    /// Classify the current offset without ending the session.
    ///
    /// The threshold comparison is strict: an offset of exactly
    /// `SWIPE_THRESHOLD` does not commit.
    pub fn classify(&self) -> Option<Direction> {
        let d = self.offset.x;
        if d.abs() > SWIPE_THRESHOLD {
            Some(if d > 0.0 {
                Direction::Right
            } else {
                Direction::Left
            })
        } else {
            None
        }
    }

    /// End the session, classifying the last known offset.
    ///
    /// Used for both normal release and a lost input stream: a pointer that
    /// vanishes after a decisive drag still commits from where it last was.
    /// The session resets to idle regardless of outcome.
    pub fn resolve(&mut self) -> Option<Direction> {
        if !self.active {
            return None;
        }
        let decision = self.classify();
        *self = Self::default();
        decision
    }
}

/// Visual state of the card while dragging, derived from the live offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardTransform {
    /// Screen-space displacement of the card center.
    pub translation: Vector,
    /// Tilt in degrees, following the horizontal drag.
    pub rotation: f32,
    /// Card opacity, fading as the drag approaches a commit.
    pub opacity: f32,
    /// Which hint label to show, once the drag leans far enough.
    pub hint: Option<Direction>,
}

/// Derive the card transform from a drag offset.
///
/// Purely presentational: none of these values feed back into
/// classification.
pub fn card_transform(offset: Vector) -> CardTransform {
    let hint = if offset.x > HINT_THRESHOLD {
        Some(Direction::Right)
    } else if offset.x < -HINT_THRESHOLD {
        Some(Direction::Left)
    } else {
        None
    };

    CardTransform {
        translation: Vector::new(offset.x, offset.y * VERTICAL_DAMPING),
        rotation: offset.x * ROTATION_FACTOR,
        opacity: (1.0 - offset.x.abs() / FADE_DISTANCE).clamp(0.0, 1.0),
        hint,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dragged_to(x: f32, y: f32) -> GestureSession {
        let mut session = GestureSession::default();
        session.begin(Point::new(10.0, 20.0));
        session.track(Point::new(10.0 + x, 20.0 + y));
        session
    }

    #[test]
    fn test_offset_follows_pointer() {
        let session = dragged_to(35.0, -12.0);
        assert_eq!(session.offset(), Vector::new(35.0, -12.0));
        assert!(session.is_active());
    }

    #[test]
    fn test_threshold_is_strict() {
        assert_eq!(dragged_to(100.0, 0.0).classify(), None);
        assert_eq!(dragged_to(100.01, 0.0).classify(), Some(Direction::Right));
        assert_eq!(dragged_to(-100.0, 0.0).classify(), None);
        assert_eq!(dragged_to(-100.01, 0.0).classify(), Some(Direction::Left));
    }

    #[test]
    fn test_short_drag_cancels() {
        let mut session = dragged_to(60.0, 0.0);
        assert_eq!(session.resolve(), None);
        assert!(!session.is_active());
    }

    #[test]
    fn test_vertical_drag_never_commits() {
        // Only the horizontal component classifies
        assert_eq!(dragged_to(0.0, 500.0).classify(), None);
    }

    #[test]
    fn test_resolve_commits_once_and_resets() {
        let mut session = dragged_to(150.0, 0.0);
        assert_eq!(session.resolve(), Some(Direction::Right));

        // The session was discarded: resolving again yields nothing
        assert_eq!(session.resolve(), None);
        assert_eq!(session.offset(), Vector::new(0.0, 0.0));
    }

    #[test]
    fn test_second_press_is_ignored() {
        let mut session = dragged_to(150.0, 0.0);
        session.begin(Point::new(500.0, 500.0));
        // The original drag is still in place
        assert_eq!(session.offset(), Vector::new(150.0, 0.0));
    }

    #[test]
    fn test_moves_while_idle_are_ignored() {
        let mut session = GestureSession::default();
        session.track(Point::new(400.0, 0.0));
        assert_eq!(session.offset(), Vector::new(0.0, 0.0));
        assert_eq!(session.classify(), None);
    }

    #[test]
    fn test_lost_pointer_keeps_decisive_offset() {
        // An input stream lost after a decisive drag still classifies from
        // the last known offset
        let mut session = dragged_to(-180.0, 30.0);
        assert_eq!(session.resolve(), Some(Direction::Left));
    }

    #[test]
    fn test_transform_at_rest() {
        let transform = card_transform(Vector::new(0.0, 0.0));
        assert_eq!(transform.translation, Vector::new(0.0, 0.0));
        assert_eq!(transform.rotation, 0.0);
        assert_eq!(transform.opacity, 1.0);
        assert_eq!(transform.hint, None);
    }

    #[test]
    fn test_transform_follows_drag() {
        let transform = card_transform(Vector::new(120.0, 40.0));
        assert_eq!(transform.translation, Vector::new(120.0, 4.0));
        assert!((transform.rotation - 12.0).abs() < 1e-5);
        assert!((transform.opacity - 0.6).abs() < 1e-5);
        assert_eq!(transform.hint, Some(Direction::Right));
    }

    #[test]
    fn test_hint_threshold_is_strict() {
        assert_eq!(card_transform(Vector::new(50.0, 0.0)).hint, None);
        assert_eq!(
            card_transform(Vector::new(50.5, 0.0)).hint,
            Some(Direction::Right)
        );
        assert_eq!(
            card_transform(Vector::new(-50.5, 0.0)).hint,
            Some(Direction::Left)
        );
    }

    #[test]
    fn test_opacity_is_clamped() {
        let transform = card_transform(Vector::new(900.0, 0.0));
        assert_eq!(transform.opacity, 0.0);
    }
}
