/// UI building blocks
///
/// - card.rs: the swipeable card for the front-most photo (canvas-based)

pub mod card;
