use torus_snake::config::GameConfig;
use torus_snake::engine::{GameEngine, Phase};
use torus_snake::grid::Position;
use torus_snake::input::Direction;
use torus_snake::snake::SnakeBody;

#[test]
fn scripted_eat_turn_and_collide() {
    let mut engine = GameEngine::new_with_seed(GameConfig::default(), 42);
    engine.start();
    engine.food = Position { x: 11, y: 10 };

    engine.tick();
    assert_eq!(engine.phase, Phase::Running);
    assert_eq!(engine.score, 1);
    assert_eq!(engine.snake.len(), 2);
    assert_eq!(engine.snake.head(), Position { x: 11, y: 10 });
    assert!(!engine.snake.occupies(engine.food));

    engine.request_direction(Direction::Up);
    engine.tick();
    assert_eq!(engine.phase, Phase::Running);
    assert_eq!(engine.snake.head(), Position { x: 11, y: 9 });

    // Hand-built loop about to bite its own flank.
    engine.snake = SnakeBody::from_segments(vec![
        Position { x: 5, y: 5 },
        Position { x: 4, y: 5 },
        Position { x: 4, y: 6 },
        Position { x: 5, y: 6 },
        Position { x: 6, y: 6 },
    ]);
    engine.velocity = Some(Direction::Down);
    engine.food = Position { x: 0, y: 0 };
    let score_before = engine.score;

    engine.tick();
    assert_eq!(engine.phase, Phase::GameOver);
    assert_eq!(engine.score, score_before);
    assert_eq!(engine.snake.len(), 5);

    engine.start();
    assert_eq!(engine.phase, Phase::Running);
    assert_eq!(engine.score, 0);
    assert_eq!(engine.snake.len(), 1);
    assert_eq!(engine.velocity, Some(Direction::Right));
}
