use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, warn};

use super::config::GameConfig;
use super::direction::Direction;
use super::state::{CollisionKind, Food, GameState, GameStatus, Position, Snake};
use crate::store::HighScoreStore;

/// Rejection-sampling budget before falling back to a deterministic scan
const MAX_SPAWN_ATTEMPTS: usize = 1000;

/// What happened during one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickOutcome {
    /// Whether the snake moved (false when paused or already over)
    pub advanced: bool,
    /// The food that was eaten this tick, if any
    pub ate: Option<Food>,
    /// Set when this tick ended the game
    pub collision: Option<CollisionKind>,
    /// Whether this tick set a new high score
    pub new_high_score: bool,
}

impl TickOutcome {
    fn idle() -> Self {
        Self {
            advanced: false,
            ate: None,
            collision: None,
            new_high_score: false,
        }
    }
}

/// The game-loop state machine.
///
/// Owns all mutable game state. The engine has no timer of its own: the host
/// calls [`tick`](Self::tick) at whatever cadence it chooses, which is also
/// how tests drive it.
pub struct GameEngine {
    config: GameConfig,
    state: GameState,
    rng: StdRng,
    store: Box<dyn HighScoreStore>,
}

impl GameEngine {
    /// Create an engine with an entropy-seeded RNG
    pub fn new(config: GameConfig, store: Box<dyn HighScoreStore>) -> Self {
        Self::with_rng(config, store, StdRng::from_entropy())
    }

    /// Create an engine with a fixed seed, for reproducible tests
    pub fn with_seed(config: GameConfig, store: Box<dyn HighScoreStore>, seed: u64) -> Self {
        Self::with_rng(config, store, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: GameConfig, mut store: Box<dyn HighScoreStore>, mut rng: StdRng) -> Self {
        let board_size = config.board_size;
        let center = (board_size / 2) as i32;

        let snake = Snake::new(
            Position::new(center, center),
            Direction::Right,
            config.initial_snake_length,
            board_size,
        );

        // Initial food avoids only the snake; obstacles come next and avoid both.
        let food_pos = find_free_cell(&mut rng, board_size, |pos| !snake.occupies(pos))
            .unwrap_or(Position::new(0, 0));
        let food = Food {
            pos: food_pos,
            is_big: false,
        };

        let mut obstacles: Vec<Position> = Vec::with_capacity(config.obstacle_count);
        for _ in 0..config.obstacle_count {
            let taken = |pos: Position| {
                snake.occupies(pos) || pos == food.pos || obstacles.contains(&pos)
            };
            if let Some(pos) = find_free_cell(&mut rng, board_size, |pos| !taken(pos)) {
                obstacles.push(pos);
            }
        }

        let high_score = store.load();

        let state = GameState {
            snake,
            food,
            obstacles,
            board_size,
            score: 0,
            high_score,
            food_eaten: 0,
            status: GameStatus::Running,
        };

        Self {
            config,
            state,
            rng,
            store,
        }
    }

    /// Read-only snapshot for the view layer
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Advance the simulation by one step.
    ///
    /// No-op unless the game is running. A collision with the snake's own
    /// body or an obstacle ends the game; all later ticks leave the state
    /// untouched.
    pub fn tick(&mut self) -> TickOutcome {
        if self.state.status != GameStatus::Running {
            return TickOutcome::idle();
        }

        let board_size = self.state.board_size;
        let new_head = self
            .state
            .snake
            .head()
            .wrapped_step(self.state.snake.direction, board_size);

        if let Some(kind) = self.check_collision(new_head) {
            self.state.status = GameStatus::GameOver;
            info!(score = self.state.score, ?kind, "game over");

            return TickOutcome {
                advanced: false,
                ate: None,
                collision: Some(kind),
                new_high_score: false,
            };
        }

        let ate = (new_head == self.state.food.pos).then_some(self.state.food);
        self.state.snake.advance(board_size, ate.is_some());

        let mut new_high_score = false;
        if let Some(food) = ate {
            let points = if food.is_big {
                self.config.big_food_points
            } else {
                self.config.food_points
            };
            self.state.score += points;

            if self.state.score > self.state.high_score {
                self.state.high_score = self.state.score;
                new_high_score = true;
                info!(high_score = self.state.high_score, "new high score");
                if let Err(err) = self.store.save(self.state.high_score) {
                    warn!(error = %err, "failed to persist high score");
                }
            }

            self.state.food_eaten += 1;
            self.respawn_food();
        }

        TickOutcome {
            advanced: true,
            ate,
            collision: None,
            new_high_score,
        }
    }

    /// Change the heading for the next tick.
    ///
    /// Rejected (returning false) when the game is over or when the new
    /// heading is the exact reverse of the current one, which would drive the
    /// head straight into the neck.
    pub fn set_direction(&mut self, direction: Direction) -> bool {
        if self.state.status == GameStatus::GameOver {
            return false;
        }
        if self.state.snake.direction.is_opposite(direction) {
            return false;
        }

        self.state.snake.direction = direction;
        true
    }

    /// Flip between Running and Paused; ignored once the game is over
    pub fn toggle_pause(&mut self) {
        self.state.status = match self.state.status {
            GameStatus::Running => GameStatus::Paused,
            GameStatus::Paused => GameStatus::Running,
            GameStatus::GameOver => GameStatus::GameOver,
        };
    }

    /// Start a fresh game: single-segment snake back at the center, initial
    /// heading, zero score, fresh food. The high score and the obstacle
    /// layout survive the reset.
    pub fn reset(&mut self) {
        let board_size = self.state.board_size;
        let center = (board_size / 2) as i32;

        self.state.snake = Snake::new(
            Position::new(center, center),
            Direction::Right,
            self.config.initial_snake_length,
            board_size,
        );
        self.state.score = 0;
        self.state.food_eaten = 0;
        self.state.status = GameStatus::Running;
        self.respawn_food();
        debug!("game reset");
    }

    fn check_collision(&self, pos: Position) -> Option<CollisionKind> {
        if self.state.snake.occupies(pos) {
            return Some(CollisionKind::SelfCollision);
        }
        if self.state.obstacles.contains(&pos) {
            return Some(CollisionKind::Obstacle);
        }
        None
    }

    /// Place the next food on a free cell. When the board has no free cell
    /// left the spawn fails closed and the game ends.
    fn respawn_food(&mut self) {
        let is_big = self.state.food_eaten % self.config.foods_per_big == 0
            && self.state.food_eaten > 0;

        let state = &self.state;
        match find_free_cell(&mut self.rng, state.board_size, |pos| state.is_free(pos)) {
            Some(pos) => {
                self.state.food = Food { pos, is_big };
            }
            None => {
                info!("board full, ending game");
                self.state.status = GameStatus::GameOver;
            }
        }
    }
}

/// Uniform random free cell via bounded rejection sampling, falling back to a
/// row-major scan. Returns None only when no cell is free.
fn find_free_cell(
    rng: &mut StdRng,
    board_size: usize,
    is_free: impl Fn(Position) -> bool,
) -> Option<Position> {
    let size = board_size as i32;

    for _ in 0..MAX_SPAWN_ATTEMPTS {
        let pos = Position::new(rng.gen_range(0..size), rng.gen_range(0..size));
        if is_free(pos) {
            return Some(pos);
        }
    }

    for y in 0..size {
        for x in 0..size {
            let pos = Position::new(x, y);
            if is_free(pos) {
                return Some(pos);
            }
        }
    }

    None
}
