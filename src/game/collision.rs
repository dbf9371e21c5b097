//! Pure collision predicates over the snake and food.
//!
//! The game loop calls these once per tick, after the snake has advanced,
//! in the order wall, self, food.

use super::food::Food;
use super::snake::Snake;
use super::state::{Bounds, Collision};

/// Head outside [0, width) x [0, height)
pub fn collides_wall(snake: &Snake, bounds: &Bounds) -> bool {
    !bounds.contains(snake.head())
}

/// Head on any of segments 1..len
pub fn collides_self(snake: &Snake) -> bool {
    snake.body_segments().contains(&snake.head())
}

/// Head on the food cell
pub fn collides_food(snake: &Snake, food: &Food) -> bool {
    snake.head() == food.position()
}

/// First fatal collision, checking the wall before the body
pub fn fatal_collision(snake: &Snake, bounds: &Bounds) -> Option<Collision> {
    if collides_wall(snake, bounds) {
        Some(Collision::Wall)
    } else if collides_self(snake) {
        Some(Collision::SelfCollision)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::action::Direction;
    use crate::game::state::Position;

    fn bounds() -> Bounds {
        Bounds::new(40, 30, 2).unwrap()
    }

    #[test]
    fn test_wall_collision_each_edge() {
        let cases = [
            (Position::new(-2, 10), true),
            (Position::new(40, 10), true),
            (Position::new(10, -2), true),
            (Position::new(10, 30), true),
            (Position::new(0, 0), false),
            (Position::new(38, 28), false),
        ];

        for (head, expected) in cases {
            let snake = Snake::from_body(&[head], Direction::Right, 2);
            assert_eq!(collides_wall(&snake, &bounds()), expected, "head {head:?}");
        }
    }

    #[test]
    fn test_moving_left_off_edge() {
        let mut snake = Snake::from_body(
            &[Position::new(0, 10), Position::new(2, 10), Position::new(4, 10)],
            Direction::Left,
            2,
        );
        snake.advance();

        assert_eq!(snake.head(), Position::new(-2, 10));
        assert!(collides_wall(&snake, &bounds()));
        assert_eq!(fatal_collision(&snake, &bounds()), Some(Collision::Wall));
    }

    #[test]
    fn test_self_collision() {
        // Head has looped back onto the fourth segment
        let snake = Snake::from_body(
            &[
                Position::new(10, 10),
                Position::new(10, 12),
                Position::new(12, 12),
                Position::new(12, 10),
                Position::new(10, 10),
            ],
            Direction::Up,
            2,
        );
        assert!(collides_self(&snake));
        assert_eq!(
            fatal_collision(&snake, &bounds()),
            Some(Collision::SelfCollision)
        );
    }

    #[test]
    fn test_stale_slots_ignored_by_self_collision() {
        let mut snake = Snake::new(Position::new(10, 10), 2);
        snake.advance();
        assert!(!collides_self(&snake));
        assert_eq!(fatal_collision(&snake, &bounds()), None);
    }

    #[test]
    fn test_self_collision_through_turns() {
        let mut snake = Snake::new(Position::new(20, 10), 2);
        snake.grow();
        snake.grow();
        snake.advance();
        snake.advance();

        snake.turn(Direction::Down);
        snake.advance();
        assert!(!collides_self(&snake));
        snake.turn(Direction::Left);
        snake.advance();
        assert!(!collides_self(&snake));
        snake.turn(Direction::Up);
        snake.advance();
        assert!(collides_self(&snake));
    }

    #[test]
    fn test_food_collision() {
        let snake = Snake::new(Position::new(10, 10), 2);
        assert!(collides_food(&snake, &Food::new(Position::new(10, 10))));
        assert!(!collides_food(&snake, &Food::new(Position::new(8, 10))));
    }
}
