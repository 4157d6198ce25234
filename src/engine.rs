use std::time::Duration;

use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::{GameConfig, MIN_TICK_INTERVAL_MS, POINTS_PER_SPEED_UP, SPEED_UP_STEP_MS};
use crate::food::{self, GridFull};
use crate::grid::{Grid, Position};
use crate::input::Direction;
use crate::snake::SnakeBody;

/// Current state-machine phase.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Phase {
    Idle,
    Running,
    GameOver,
}

/// Read-only state view handed to renderers once per tick.
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub snake: Vec<Position>,
    pub food: Position,
    pub velocity: Option<Direction>,
    pub score: u32,
    pub phase: Phase,
    pub tick_interval: Duration,
    pub tile_count: u16,
    pub cell_size_px: u16,
}

/// The game state machine for one session.
///
/// Owns the complete mutable game state. `tick`, `start` and
/// `request_direction` are the only mutation paths; `velocity` is `None`
/// exactly while the engine sits in `Idle` before the first start.
#[derive(Debug)]
pub struct GameEngine {
    pub snake: SnakeBody,
    pub food: Position,
    pub velocity: Option<Direction>,
    pub score: u32,
    pub phase: Phase,
    tick_interval_ms: u64,
    pending_direction: Option<Direction>,
    grid: Grid,
    config: GameConfig,
    rng: StdRng,
}

impl GameEngine {
    /// Creates an idle engine with entropy-seeded food placement.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Creates a deterministic engine for tests and reproducible runs.
    #[must_use]
    pub fn new_with_seed(config: GameConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: GameConfig, mut rng: StdRng) -> Self {
        let grid = Grid::new(config.tile_count);
        let snake = SnakeBody::new(grid.center());
        let food = place_avoiding(&mut rng, grid, &snake);

        Self {
            snake,
            food,
            velocity: None,
            score: 0,
            phase: Phase::Idle,
            tick_interval_ms: config.tick_interval_ms,
            pending_direction: None,
            grid,
            config,
            rng,
        }
    }

    /// Records the direction to apply on the next tick, last-write-wins.
    ///
    /// A request opposite to the current velocity is silently ignored.
    /// While not `Running` the request is recorded but does not start a
    /// game; a subsequent `start` discards it.
    pub fn request_direction(&mut self, direction: Direction) {
        if self.velocity == Some(direction.opposite()) {
            return;
        }
        self.pending_direction = Some(direction);
    }

    /// Starts (or restarts) a game from any phase.
    ///
    /// Replaces the gameplay state wholesale: one-segment snake at the grid
    /// center, score 0, base tick interval, fresh food. Velocity is forced
    /// to `Right` and the pending direction cleared, so the first tick after
    /// any start moves right regardless of which input triggered it.
    pub fn start(&mut self) {
        self.snake = SnakeBody::new(self.grid.center());
        self.score = 0;
        self.tick_interval_ms = self.config.tick_interval_ms;
        self.food = place_avoiding(&mut self.rng, self.grid, &self.snake);
        self.velocity = Some(Direction::Right);
        self.pending_direction = None;
        self.phase = Phase::Running;
        info!("game started on a {0}x{0} grid", self.grid.tile_count());
    }

    /// Advances the simulation by one tick.
    ///
    /// No-op unless `Running`; the scheduler is the only caller in normal
    /// operation.
    pub fn tick(&mut self) {
        if self.phase != Phase::Running {
            debug!("tick ignored in phase {:?}", self.phase);
            return;
        }

        if let Some(pending) = self.pending_direction.take() {
            self.velocity = Some(pending);
        }
        let velocity = self
            .velocity
            .expect("a running game always has a velocity");

        let new_head = self.grid.normalize(self.snake.head().stepped(velocity));
        if self.snake.occupies(new_head) {
            self.phase = Phase::GameOver;
            info!("self-collision, final score {}", self.score);
            return;
        }

        let ate = new_head == self.food;
        self.snake.advance(new_head, ate);

        if ate {
            self.score += 1;
            self.speed_up_on_milestone();

            let snake = &self.snake;
            match food::place(&mut self.rng, self.grid, |position| {
                snake.occupies(position)
            }) {
                Ok(position) => self.food = position,
                Err(GridFull { .. }) => {
                    // The snake covers the whole board; nothing left to eat.
                    self.phase = Phase::GameOver;
                    info!("board filled, final score {}", self.score);
                }
            }
        }
    }

    fn speed_up_on_milestone(&mut self) {
        if self.score % POINTS_PER_SPEED_UP == 0 && self.tick_interval_ms > MIN_TICK_INTERVAL_MS {
            self.tick_interval_ms =
                (self.tick_interval_ms - SPEED_UP_STEP_MS).max(MIN_TICK_INTERVAL_MS);
            debug!("speed up, tick interval now {} ms", self.tick_interval_ms);
        }
    }

    /// Current tick interval; the scheduler re-arms with this after
    /// speed-ups.
    #[must_use]
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    /// The playfield geometry of this session.
    #[must_use]
    pub fn grid(&self) -> Grid {
        self.grid
    }

    /// Builds the read-only view renderers consume.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            snake: self.snake.segments().copied().collect(),
            food: self.food,
            velocity: self.velocity,
            score: self.score,
            phase: self.phase,
            tick_interval: self.tick_interval(),
            tile_count: self.config.tile_count,
            cell_size_px: self.config.cell_size_px,
        }
    }
}

fn place_avoiding(rng: &mut StdRng, grid: Grid, snake: &SnakeBody) -> Position {
    food::place(rng, grid, |position| snake.occupies(position))
        .expect("a fresh snake cannot fill the grid")
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::time::Duration;

    use crate::config::GameConfig;
    use crate::grid::Position;
    use crate::input::Direction;
    use crate::snake::SnakeBody;

    use super::{GameEngine, Phase};

    fn engine_20(seed: u64) -> GameEngine {
        GameEngine::new_with_seed(GameConfig::default(), seed)
    }

    fn feed_and_tick(engine: &mut GameEngine) {
        let velocity = engine.velocity.expect("running engine has a velocity");
        engine.food = engine
            .grid()
            .normalize(engine.snake.head().stepped(velocity));
        engine.tick();
    }

    #[test]
    fn construction_is_idle_with_food_off_snake() {
        let engine = engine_20(1);

        assert_eq!(engine.phase, Phase::Idle);
        assert_eq!(engine.velocity, None);
        assert_eq!(engine.score, 0);
        assert_eq!(engine.snake.len(), 1);
        assert_eq!(engine.snake.head(), Position { x: 10, y: 10 });
        assert!(!engine.snake.occupies(engine.food));
    }

    #[test]
    fn start_always_resets_from_any_phase() {
        let mut engine = engine_20(2);

        for _ in 0..3 {
            engine.start();
            assert_eq!(engine.phase, Phase::Running);
            assert_eq!(engine.velocity, Some(Direction::Right));
            assert_eq!(engine.score, 0);
            assert_eq!(engine.snake.len(), 1);
            assert_eq!(engine.tick_interval(), Duration::from_millis(150));

            feed_and_tick(&mut engine);
            assert_eq!(engine.score, 1);
        }
    }

    #[test]
    fn start_overrides_the_requested_direction() {
        let mut engine = engine_20(3);

        engine.request_direction(Direction::Up);
        engine.start();
        engine.food = Position { x: 0, y: 0 };
        engine.tick();

        assert_eq!(engine.snake.head(), Position { x: 11, y: 10 });
        assert_eq!(engine.velocity, Some(Direction::Right));
    }

    #[test]
    fn tick_outside_running_is_a_no_op() {
        let mut engine = engine_20(4);
        let head_before = engine.snake.head();

        engine.tick();

        assert_eq!(engine.phase, Phase::Idle);
        assert_eq!(engine.snake.head(), head_before);
    }

    #[test]
    fn head_wraps_across_the_right_edge() {
        let mut engine = engine_20(5);
        engine.start();
        engine.snake = SnakeBody::new(Position { x: 19, y: 10 });
        engine.food = Position { x: 5, y: 5 };

        engine.tick();

        assert_eq!(engine.snake.head(), Position { x: 0, y: 10 });
        assert_eq!(engine.phase, Phase::Running);
    }

    #[test]
    fn reversal_requests_are_ignored() {
        let mut engine = engine_20(6);
        engine.start();
        engine.food = Position { x: 0, y: 0 };

        engine.request_direction(Direction::Left);
        engine.tick();

        assert_eq!(engine.velocity, Some(Direction::Right));
        assert_eq!(engine.snake.head(), Position { x: 11, y: 10 });
    }

    #[test]
    fn pending_direction_is_last_write_wins() {
        let mut engine = engine_20(7);
        engine.start();
        engine.food = Position { x: 0, y: 0 };

        engine.request_direction(Direction::Up);
        engine.request_direction(Direction::Down);
        engine.tick();

        assert_eq!(engine.velocity, Some(Direction::Down));
        assert_eq!(engine.snake.head(), Position { x: 10, y: 11 });
    }

    #[test]
    fn eating_grows_and_relocates_food() {
        let mut engine = engine_20(8);
        engine.start();
        engine.food = Position { x: 11, y: 10 };

        engine.tick();

        assert_eq!(engine.score, 1);
        let segments: Vec<Position> = engine.snake.segments().copied().collect();
        assert_eq!(
            segments,
            vec![Position { x: 11, y: 10 }, Position { x: 10, y: 10 }]
        );
        assert!(!engine.snake.occupies(engine.food));
    }

    #[test]
    fn non_eating_tick_keeps_length() {
        let mut engine = engine_20(9);
        engine.start();
        engine.food = Position { x: 0, y: 0 };

        engine.tick();

        assert_eq!(engine.score, 0);
        assert_eq!(engine.snake.len(), 1);
    }

    #[test]
    fn running_snake_never_holds_duplicate_segments() {
        let mut engine = engine_20(10);
        engine.start();

        for _ in 0..10 {
            feed_and_tick(&mut engine);
            assert_eq!(engine.phase, Phase::Running);

            let segments: Vec<Position> = engine.snake.segments().copied().collect();
            let unique: HashSet<Position> = segments.iter().copied().collect();
            assert_eq!(segments.len(), unique.len());
        }
        assert_eq!(engine.snake.len(), 11);
    }

    #[test]
    fn every_fifth_point_speeds_up_the_game() {
        let mut engine = engine_20(11);
        engine.start();

        for _ in 0..10 {
            feed_and_tick(&mut engine);
        }

        assert_eq!(engine.score, 10);
        assert_eq!(engine.tick_interval(), Duration::from_millis(130));
    }

    #[test]
    fn speed_never_drops_below_the_floor() {
        let config = GameConfig {
            tick_interval_ms: 60,
            ..GameConfig::default()
        };
        let mut engine = GameEngine::new_with_seed(config, 12);
        engine.start();

        for _ in 0..10 {
            feed_and_tick(&mut engine);
        }

        assert_eq!(engine.tick_interval(), Duration::from_millis(50));
    }

    #[test]
    fn self_collision_freezes_the_final_state() {
        let mut engine = engine_20(13);
        engine.start();
        engine.snake = SnakeBody::from_segments(vec![
            Position { x: 5, y: 5 },
            Position { x: 4, y: 5 },
            Position { x: 4, y: 6 },
            Position { x: 5, y: 6 },
            Position { x: 6, y: 6 },
        ]);
        engine.velocity = Some(Direction::Down);
        engine.score = 7;
        engine.food = Position { x: 0, y: 0 };

        engine.tick();

        assert_eq!(engine.phase, Phase::GameOver);
        assert_eq!(engine.score, 7);
        assert_eq!(engine.snake.len(), 5);
        assert_eq!(engine.snake.head(), Position { x: 5, y: 5 });
        assert_eq!(engine.food, Position { x: 0, y: 0 });

        engine.tick();
        assert_eq!(engine.phase, Phase::GameOver);
        assert_eq!(engine.snake.len(), 5);
    }

    #[test]
    fn seeded_engines_evolve_identically() {
        let mut left = engine_20(42);
        let mut right = engine_20(42);

        left.start();
        right.start();
        assert_eq!(left.food, right.food);

        for _ in 0..5 {
            left.request_direction(Direction::Down);
            right.request_direction(Direction::Down);
            feed_and_tick(&mut left);
            feed_and_tick(&mut right);

            assert_eq!(left.food, right.food);
            assert_eq!(left.snake.head(), right.snake.head());
            assert_eq!(left.score, right.score);
        }
    }

    #[test]
    fn snapshot_mirrors_the_engine_state() {
        let mut engine = engine_20(14);
        engine.start();

        let snapshot = engine.snapshot();

        assert_eq!(snapshot.phase, Phase::Running);
        assert_eq!(snapshot.snake, vec![Position { x: 10, y: 10 }]);
        assert_eq!(snapshot.food, engine.food);
        assert_eq!(snapshot.velocity, Some(Direction::Right));
        assert_eq!(snapshot.score, 0);
        assert_eq!(snapshot.tick_interval, Duration::from_millis(150));
        assert_eq!(snapshot.tile_count, 20);
        assert_eq!(snapshot.cell_size_px, 20);
    }
}
