use super::direction::Direction;

/// A cell on the game board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// One step in a direction with torus wraparound: leaving an edge
    /// re-enters from the opposite edge.
    pub fn wrapped_step(&self, direction: Direction, board_size: usize) -> Self {
        let size = board_size as i32;
        let (dx, dy) = direction.delta();
        Self {
            x: (self.x + dx).rem_euclid(size),
            y: (self.y + dy).rem_euclid(size),
        }
    }
}

/// The snake, head at index 0
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    pub body: Vec<Position>,
    pub direction: Direction,
}

impl Snake {
    /// Create a snake of the given length, body trailing behind the head
    /// opposite to the direction of travel (wrapping if needed).
    pub fn new(head: Position, direction: Direction, length: usize, board_size: usize) -> Self {
        let back = match direction {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        };

        let mut body = vec![head];
        for i in 1..length.max(1) {
            body.push(body[i - 1].wrapped_step(back, board_size));
        }

        Self { body, direction }
    }

    pub fn head(&self) -> Position {
        self.body[0]
    }

    /// Whether any segment occupies the given cell
    pub fn occupies(&self, pos: Position) -> bool {
        self.body.contains(&pos)
    }

    /// Advance one cell in the current heading, growing if `grow` is true
    pub fn advance(&mut self, board_size: usize, grow: bool) {
        let new_head = self.head().wrapped_step(self.direction, board_size);
        self.body.insert(0, new_head);

        if !grow {
            self.body.pop();
        }
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

/// The single food item on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Food {
    pub pos: Position,
    /// Big food is worth double points
    pub is_big: bool,
}

/// What the snake's head ran into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionKind {
    /// Snake hit its own body
    SelfCollision,
    /// Snake hit an obstacle cell
    Obstacle,
}

/// Lifecycle of one game session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Running,
    Paused,
    GameOver,
}

/// Complete game state, the snapshot the view layer renders from
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub snake: Snake,
    pub food: Food,
    /// Fixed for the whole session, not regenerated on reset
    pub obstacles: Vec<Position>,
    pub board_size: usize,
    pub score: u32,
    pub high_score: u32,
    /// Total foods consumed this game, drives big-food cadence
    pub food_eaten: u32,
    pub status: GameStatus,
}

impl GameState {
    pub fn is_game_over(&self) -> bool {
        self.status == GameStatus::GameOver
    }

    pub fn is_paused(&self) -> bool {
        self.status == GameStatus::Paused
    }

    /// Whether a cell is free of snake segments and obstacles
    pub fn is_free(&self, pos: Position) -> bool {
        !self.snake.occupies(pos) && !self.obstacles.contains(&pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrapped_step_interior() {
        let pos = Position::new(5, 5);
        assert_eq!(pos.wrapped_step(Direction::Right, 20), Position::new(6, 5));
        assert_eq!(pos.wrapped_step(Direction::Left, 20), Position::new(4, 5));
        assert_eq!(pos.wrapped_step(Direction::Down, 20), Position::new(5, 6));
        assert_eq!(pos.wrapped_step(Direction::Up, 20), Position::new(5, 4));
    }

    #[test]
    fn test_wrapped_step_edges() {
        assert_eq!(
            Position::new(19, 7).wrapped_step(Direction::Right, 20),
            Position::new(0, 7)
        );
        assert_eq!(
            Position::new(0, 7).wrapped_step(Direction::Left, 20),
            Position::new(19, 7)
        );
        assert_eq!(
            Position::new(7, 19).wrapped_step(Direction::Down, 20),
            Position::new(7, 0)
        );
        assert_eq!(
            Position::new(7, 0).wrapped_step(Direction::Up, 20),
            Position::new(7, 19)
        );
    }

    #[test]
    fn test_snake_creation_trails_backward() {
        let snake = Snake::new(Position::new(5, 5), Direction::Right, 3, 20);
        assert_eq!(snake.len(), 3);
        assert_eq!(snake.head(), Position::new(5, 5));
        assert_eq!(snake.body[1], Position::new(4, 5));
        assert_eq!(snake.body[2], Position::new(3, 5));
    }

    #[test]
    fn test_snake_creation_wraps_tail() {
        let snake = Snake::new(Position::new(0, 5), Direction::Right, 2, 20);
        assert_eq!(snake.body[1], Position::new(19, 5));
    }

    #[test]
    fn test_snake_advance() {
        let mut snake = Snake::new(Position::new(5, 5), Direction::Right, 3, 20);

        snake.advance(20, false);
        assert_eq!(snake.len(), 3);
        assert_eq!(snake.head(), Position::new(6, 5));

        snake.advance(20, true);
        assert_eq!(snake.len(), 4);
        assert_eq!(snake.head(), Position::new(7, 5));
    }

    #[test]
    fn test_snake_advance_wraps() {
        let mut snake = Snake::new(Position::new(19, 5), Direction::Right, 1, 20);
        snake.advance(20, false);
        assert_eq!(snake.head(), Position::new(0, 5));
    }

    #[test]
    fn test_occupies() {
        let snake = Snake::new(Position::new(5, 5), Direction::Right, 3, 20);
        assert!(snake.occupies(Position::new(5, 5)));
        assert!(snake.occupies(Position::new(4, 5)));
        assert!(!snake.occupies(Position::new(10, 10)));
    }
}
