use std::collections::VecDeque;

use crate::grid::Position;

/// Ordered snake body; the front of the deque is the head.
#[derive(Debug, Clone)]
pub struct SnakeBody {
    segments: VecDeque<Position>,
}

impl SnakeBody {
    /// Creates a one-segment body at `origin`.
    #[must_use]
    pub fn new(origin: Position) -> Self {
        let mut segments = VecDeque::new();
        segments.push_front(origin);
        Self { segments }
    }

    /// Creates a body from explicit segments (front is head).
    #[must_use]
    pub fn from_segments(segments: Vec<Position>) -> Self {
        debug_assert!(!segments.is_empty());
        Self {
            segments: VecDeque::from(segments),
        }
    }

    /// Returns the current head position.
    #[must_use]
    pub fn head(&self) -> Position {
        *self
            .segments
            .front()
            .expect("snake body always contains at least one segment")
    }

    /// Returns the current tail position.
    #[must_use]
    pub fn tail(&self) -> Position {
        *self
            .segments
            .back()
            .expect("snake body always contains at least one segment")
    }

    /// Returns true if any segment equals `position`.
    #[must_use]
    pub fn occupies(&self, position: Position) -> bool {
        self.segments.contains(&position)
    }

    /// Prepends `new_head`; drops the tail unless `grew`.
    ///
    /// This is the only mutation path. The caller validates `new_head`
    /// against the body first; advancing into an occupied cell is a
    /// collision the engine must already have caught.
    pub fn advance(&mut self, new_head: Position, grew: bool) {
        self.segments.push_front(new_head);
        if !grew {
            let _ = self.segments.pop_back();
        }
    }

    /// Returns the current segment count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Returns true when there are no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Iterates over segments from head to tail.
    pub fn segments(&self) -> impl Iterator<Item = &Position> {
        self.segments.iter()
    }
}
