use super::action::Direction;
use super::state::Position;

/// Maximum number of body segments the snake can hold
pub const SNAKE_CAPACITY: usize = 50;
/// Length of a freshly initialized snake
pub const INITIAL_LENGTH: usize = 3;

/// The snake, stored as a fixed-capacity arena of segments
///
/// Index 0 is the head and `len - 1` the tail. Slots past `len` hold stale
/// positions and are never exposed. The buffer is overwritten in place on
/// every move and never reallocated.
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    segments: [Position; SNAKE_CAPACITY],
    len: usize,
    direction: Direction,
    step: i32,
}

impl Snake {
    /// Create a snake whose segments are `step` pixels apart, initialized at `start`
    pub fn new(start: Position, step: u32) -> Self {
        let mut snake = Self {
            segments: [Position::default(); SNAKE_CAPACITY],
            len: 0,
            direction: Direction::Right,
            step: step as i32,
        };
        snake.initialize(start);
        snake
    }

    /// Reset to a three-segment horizontal body heading right, head at `start`
    pub fn initialize(&mut self, start: Position) {
        self.len = INITIAL_LENGTH;
        self.direction = Direction::Right;
        for i in 0..self.len {
            self.segments[i] = Position::new(start.x - i as i32 * self.step, start.y);
        }
    }

    /// Shift every segment onto its predecessor, tail first, then step the head.
    ///
    /// The shift must run from the tail towards the head and must happen before
    /// the head moves, otherwise segments alias each other. No bounds or
    /// collision checks happen here.
    pub fn advance(&mut self) {
        for i in (1..self.len).rev() {
            self.segments[i] = self.segments[i - 1];
        }
        self.segments[0] = self.segments[0].moved_in_direction(self.direction, self.step);
    }

    /// Add one segment, capped at capacity. Returns false when already full.
    ///
    /// The new slot starts as a copy of the tail and separates from it on the
    /// next advance.
    pub fn grow(&mut self) -> bool {
        if self.len >= SNAKE_CAPACITY {
            return false;
        }
        self.segments[self.len] = self.segments[self.len - 1];
        self.len += 1;
        true
    }

    /// Change direction unless it would reverse onto the body
    pub fn turn(&mut self, direction: Direction) -> bool {
        if self.direction.is_opposite(direction) {
            return false;
        }
        self.direction = direction;
        true
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Get the head position
    pub fn head(&self) -> Position {
        self.segments[0]
    }

    /// Get the tail position (last occupied segment)
    pub fn tail(&self) -> Position {
        self.segments[self.len - 1]
    }

    /// Occupied segments, head first
    pub fn segments(&self) -> &[Position] {
        &self.segments[..self.len]
    }

    /// Get body segments (excluding head)
    pub fn body_segments(&self) -> &[Position] {
        &self.segments[1..self.len]
    }

    /// Check if any occupied segment sits on `pos`
    pub fn contains(&self, pos: Position) -> bool {
        self.segments().contains(&pos)
    }

    /// Get the length of the snake
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always false; a snake keeps at least its head
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len == SNAKE_CAPACITY
    }

    /// Build a snake from an explicit body, head first
    #[cfg(test)]
    pub(crate) fn from_body(body: &[Position], direction: Direction, step: u32) -> Self {
        assert!(!body.is_empty() && body.len() <= SNAKE_CAPACITY);
        let mut segments = [Position::default(); SNAKE_CAPACITY];
        segments[..body.len()].copy_from_slice(body);
        Self {
            segments,
            len: body.len(),
            direction,
            step: step as i32,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snake_creation() {
        let snake = Snake::new(Position::new(10, 10), 2);
        assert_eq!(snake.len(), 3);
        assert_eq!(snake.direction(), Direction::Right);
        assert_eq!(
            snake.segments(),
            &[
                Position::new(10, 10),
                Position::new(8, 10),
                Position::new(6, 10)
            ]
        );
        assert_eq!(snake.tail(), Position::new(6, 10));
    }

    #[test]
    fn test_advance_right() {
        let mut snake = Snake::new(Position::new(10, 10), 2);
        snake.advance();
        assert_eq!(snake.head(), Position::new(12, 10));
        assert_eq!(snake.segments()[1], Position::new(10, 10));
        assert_eq!(snake.segments()[2], Position::new(8, 10));
        assert_eq!(snake.len(), 3);
    }

    #[test]
    fn test_advance_shifts_every_segment_onto_predecessor() {
        let mut snake = Snake::new(Position::new(20, 10), 2);
        snake.grow();
        snake.grow();
        snake.advance();
        snake.turn(Direction::Down);
        snake.advance();

        for dir in [Direction::Left, Direction::Down, Direction::Right] {
            snake.turn(dir);
            let before = snake.segments().to_vec();
            snake.advance();
            let after = snake.segments();

            for i in 1..after.len() {
                assert_eq!(after[i], before[i - 1]);
            }
            assert_eq!(after[0], before[0].moved_in_direction(snake.direction(), 2));
        }
    }

    #[test]
    fn test_reversal_rejected() {
        for current in Direction::ALL {
            for requested in Direction::ALL {
                let mut snake = Snake::new(Position::new(10, 10), 2);
                snake.direction = current;

                let accepted = snake.turn(requested);
                assert_eq!(accepted, !current.is_opposite(requested));
                let expected = if accepted { requested } else { current };
                assert_eq!(snake.direction(), expected);
            }
        }
    }

    #[test]
    fn test_grow_fills_new_slot_with_tail() {
        let mut snake = Snake::new(Position::new(10, 10), 2);
        assert!(snake.grow());
        assert_eq!(snake.len(), 4);
        assert_eq!(snake.segments()[3], Position::new(6, 10));

        snake.advance();
        assert_eq!(
            snake.segments(),
            &[
                Position::new(12, 10),
                Position::new(10, 10),
                Position::new(8, 10),
                Position::new(6, 10)
            ]
        );
    }

    #[test]
    fn test_grow_capped_at_capacity() {
        let mut snake = Snake::new(Position::new(10, 10), 2);
        while snake.grow() {}
        assert_eq!(snake.len(), SNAKE_CAPACITY);
        assert!(snake.is_full());

        assert!(!snake.grow());
        assert_eq!(snake.len(), SNAKE_CAPACITY);
    }

    #[test]
    fn test_initialize_resets_state() {
        let mut snake = Snake::new(Position::new(10, 10), 2);
        snake.grow();
        snake.turn(Direction::Down);
        snake.advance();

        snake.initialize(Position::new(10, 10));
        assert_eq!(snake.segments(), Snake::new(Position::new(10, 10), 2).segments());
        assert_eq!(snake.len(), 3);
        assert_eq!(snake.direction(), Direction::Right);
        assert_eq!(snake.head(), Position::new(10, 10));
    }

    #[test]
    fn test_contains() {
        let snake = Snake::new(Position::new(10, 10), 2);
        assert!(snake.contains(Position::new(10, 10)));
        assert!(snake.contains(Position::new(6, 10)));
        assert!(!snake.contains(Position::new(4, 10)));
        assert_eq!(snake.body_segments().len(), 2);
    }
}
