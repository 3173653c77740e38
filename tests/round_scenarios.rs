use std::collections::HashSet;

use duel_snake::game::{GameState, GameStatus, Round};
use duel_snake::grid::{Cell, Grid};
use duel_snake::input::Heading;
use duel_snake::pathfinder::shortest_distance;
use duel_snake::snake::{Advance, DeathReason, Snake};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

fn scenario(user: Snake, ai: Snake, food: Cell) -> Round {
    let grid = Grid::new(20);
    let state = GameState {
        user,
        ai,
        food,
        ..GameState::fresh(grid)
    };
    Round::from_state(grid, state, 17)
}

fn assert_no_duplicate_segments(snake: &Snake) {
    let unique: HashSet<_> = snake.segments().copied().collect();
    assert_eq!(unique.len(), snake.len(), "duplicate segment in {snake:?}");
}

#[test]
fn first_tick_from_fresh_board() {
    let grid = Grid::new(20);
    let mut round = Round::new_with_seed(grid, 42);
    let before = round.state().clone();
    let distance_before = shortest_distance(
        before.ai.head(),
        before.food,
        &before.occupied_cells(),
        grid,
    )
    .expect("food is reachable on an empty board");

    let report = round.tick().expect("fresh round is running");

    let state = round.state();
    assert_eq!(report.user, Advance::Moved);
    assert_eq!(state.user.head(), Cell::new(4, 10));

    // Food is up and to the left; Up enumerates before Left.
    assert_eq!(report.ai_plan, Some(Heading::Up));
    assert_eq!(state.ai.head(), Cell::new(16, 9));
    let distance_after = shortest_distance(
        state.ai.head(),
        state.food,
        &HashSet::from([state.user.head()]),
        grid,
    );
    assert_eq!(distance_after, Some(distance_before - 1));
    assert_eq!(state.status, GameStatus::Running);
}

#[test]
fn turning_into_own_neck_ends_the_round_without_moving() {
    let user = Snake::from_segments(vec![Cell::new(3, 10), Cell::new(4, 10)], Heading::Right);
    let mut round = scenario(
        user.clone(),
        Snake::new(Cell::new(16, 10), Heading::Left),
        Cell::new(5, 5),
    );

    let report = round.tick().expect("round is running");

    assert_eq!(report.user, Advance::Died(DeathReason::SelfCollision));
    assert_eq!(round.state().user, user);
    assert_eq!(round.state().status, GameStatus::Over);
    assert_eq!(round.state().user_death, Some(DeathReason::SelfCollision));
}

#[test]
fn opponent_takes_adjacent_food() {
    let mut round = scenario(
        Snake::new(Cell::new(2, 2), Heading::Right),
        Snake::new(Cell::new(10, 10), Heading::Left),
        Cell::new(10, 9),
    );

    let report = round.tick().expect("round is running");

    let state = round.state();
    assert_eq!(report.ai_plan, Some(Heading::Up));
    assert_eq!(report.ai, Advance::Ate);
    assert_eq!(state.ai.len(), 2);
    assert_eq!(state.ai.head(), Cell::new(10, 9));
    assert_eq!(state.score_ai, 1);
    assert_eq!(state.score_user, 0);
    assert_ne!(state.food, Cell::new(10, 9));
    assert!(!state.ai.occupies(state.food));
    assert!(!state.user.occupies(state.food));
}

#[test]
fn player_running_into_opponent_body_is_fatal() {
    let ai = Snake::from_segments(
        vec![Cell::new(8, 4), Cell::new(8, 5), Cell::new(8, 6)],
        Heading::Up,
    );
    let mut round = scenario(Snake::new(Cell::new(7, 5), Heading::Right), ai, Cell::new(15, 15));

    let report = round.tick().expect("round is running");

    assert_eq!(report.user, Advance::Died(DeathReason::OpponentCollision));
    assert_eq!(round.state().user.head(), Cell::new(7, 5));
    assert!(round.is_over());
}

#[test]
fn opponent_running_into_wall_ends_round_for_both() {
    // The food sits behind the opponent, which may not reverse, so it keeps
    // heading left into the wall.
    let mut round = scenario(
        Snake::new(Cell::new(10, 15), Heading::Right),
        Snake::new(Cell::new(0, 3), Heading::Left),
        Cell::new(1, 3),
    );

    let report = round.tick().expect("round is running");

    assert_eq!(report.ai_plan, Some(Heading::Right));
    assert_eq!(report.ai, Advance::Died(DeathReason::Wall));
    assert_eq!(report.user, Advance::Moved);
    assert_eq!(round.state().ai_death, Some(DeathReason::Wall));
    assert_eq!(round.state().status, GameStatus::Over);
}

#[test]
fn over_state_is_idempotent() {
    let mut round = scenario(
        Snake::new(Cell::new(19, 10), Heading::Right),
        Snake::new(Cell::new(10, 10), Heading::Left),
        Cell::new(2, 2),
    );
    round.tick();
    assert!(round.is_over());

    let frozen = round.state().clone();
    for heading in Heading::SEARCH_ORDER {
        round.queue_heading(heading);
        assert_eq!(round.tick(), None);
    }

    assert_eq!(round.state(), &frozen);
}

#[test]
fn random_play_preserves_board_invariants() {
    let grid = Grid::new(20);

    for seed in 0..20 {
        let mut round = Round::new_with_seed(grid, seed);
        let mut player = StdRng::seed_from_u64(seed + 1000);

        for _ in 0..500 {
            if let Some(&heading) = Heading::SEARCH_ORDER.choose(&mut player) {
                round.queue_heading(heading);
            }
            if round.tick().is_none() {
                break;
            }

            let state = round.state();
            assert_no_duplicate_segments(&state.user);
            assert_no_duplicate_segments(&state.ai);
            assert!(state.user.segments().all(|cell| !state.ai.occupies(*cell)));
            assert!(grid.in_bounds(state.food));
            assert!(!state.user.occupies(state.food));
            assert!(!state.ai.occupies(state.food));
            assert_eq!(state.score_user as usize, state.user.len() - 1);
            assert_eq!(state.score_ai as usize, state.ai.len() - 1);
        }
    }
}
