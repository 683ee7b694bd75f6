use grid_snake::food::Food;
use grid_snake::game::{GameState, GameStatus};
use grid_snake::grid::Cell;
use grid_snake::input::{Direction, GameInput};

#[test]
fn stepwise_food_collection_and_wall_collision() {
    let mut state = GameState::new_with_seed(200, 200, 42);
    state.food = Food::at(Cell::at(120, 100), 200, 200);

    state.tick();
    assert_eq!(state.status, GameStatus::Running);
    assert_eq!(state.body.head(), Cell::at(120, 100));
    assert_eq!(state.body.length(), 3);
    assert_eq!(state.current_score(), 10);

    state.food = Food::at(Cell::at(0, 0), 200, 200);
    state.apply_input(GameInput::Direction(Direction::Up));
    for expected_y in [80, 60, 40, 20, 0] {
        state.tick();
        assert_eq!(state.status, GameStatus::Running);
        assert_eq!(state.body.head(), Cell::at(120, expected_y));
    }
    assert_eq!(state.body.segments().count(), 3);
    assert_eq!(state.body.tail(), Cell::at(120, 40));

    state.tick();
    assert_eq!(state.status, GameStatus::Ended);
    assert_eq!(state.current_score(), 10);

    state.apply_input(GameInput::Reset);
    assert_eq!(state.status, GameStatus::Running);
    assert_eq!(state.body.head(), Cell::at(100, 100));
    assert_eq!(state.current_score(), 0);
}

#[test]
fn pause_freezes_the_snake_until_resumed() {
    let mut state = GameState::new_with_seed(600, 400, 7);
    state.food = Food::at(Cell::at(0, 0), 600, 400);

    state.tick();
    let head = state.body.head();

    state.apply_input(GameInput::Pause);
    state.apply_input(GameInput::Direction(Direction::Down));
    for _ in 0..5 {
        state.tick();
    }
    assert_eq!(state.status, GameStatus::Paused);
    assert_eq!(state.body.head(), head);

    state.apply_input(GameInput::Pause);
    state.tick();
    assert_eq!(state.body.head(), head.stepped(Direction::Right));
}

#[test]
fn long_random_walk_never_places_food_on_the_snake() {
    let mut state = GameState::new_with_seed(200, 200, 2024);
    let turns = [
        Direction::Down,
        Direction::Left,
        Direction::Up,
        Direction::Right,
    ];

    let mut tick = 0usize;
    while state.status == GameStatus::Running && tick < 400 {
        if tick % 3 == 0 {
            state.apply_input(GameInput::Direction(turns[(tick / 3) % turns.len()]));
        }
        state.tick();
        if state.status == GameStatus::Running {
            assert!(!state.body.occupied(state.food.cell()));
        }
        tick += 1;
    }
}
