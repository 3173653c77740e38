use rand::Rng;

use crate::grid::{Cell, Grid};
use crate::snake::Snake;

/// Picks a uniformly random cell not covered by any of `snakes`.
///
/// Uses rejection sampling over the whole grid.
///
/// # Panics
///
/// Panics when the snakes cover every cell, since no placement exists.
#[must_use]
pub fn spawn_position<R: Rng + ?Sized>(rng: &mut R, grid: Grid, snakes: &[&Snake]) -> Cell {
    let occupied: usize = snakes.iter().map(|snake| snake.len()).sum();
    assert!(
        occupied < grid.total_cells(),
        "spawn_position: no free cells on the board ({occupied} of {} occupied)",
        grid.total_cells(),
    );

    let size = i32::from(grid.size());
    loop {
        let candidate = Cell::new(rng.gen_range(0..size), rng.gen_range(0..size));
        if !snakes.iter().any(|snake| snake.occupies(candidate)) {
            return candidate;
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use crate::grid::{Cell, Grid};
    use crate::input::Heading;
    use crate::snake::Snake;

    use super::spawn_position;

    #[test]
    fn food_spawn_never_overlaps_either_snake() {
        let mut rng = StdRng::seed_from_u64(7);
        let grid = Grid::new(6);
        let user = Snake::from_segments(
            vec![Cell::new(0, 0), Cell::new(1, 0), Cell::new(2, 0)],
            Heading::Left,
        );
        let ai = Snake::from_segments(
            vec![Cell::new(5, 5), Cell::new(5, 4), Cell::new(5, 3), Cell::new(4, 3)],
            Heading::Down,
        );

        for _ in 0..200 {
            let food = spawn_position(&mut rng, grid, &[&user, &ai]);
            assert!(grid.in_bounds(food));
            assert!(!user.occupies(food));
            assert!(!ai.occupies(food));
        }
    }

    #[test]
    fn food_finds_the_single_free_cell() {
        let mut rng = StdRng::seed_from_u64(11);
        let grid = Grid::new(2);
        let user = Snake::from_segments(vec![Cell::new(0, 0), Cell::new(1, 0)], Heading::Left);
        let ai = Snake::new(Cell::new(1, 1), Heading::Up);

        assert_eq!(spawn_position(&mut rng, grid, &[&user, &ai]), Cell::new(0, 1));
    }

    #[test]
    #[should_panic(expected = "no free cells")]
    fn full_board_panics_instead_of_looping() {
        let mut rng = StdRng::seed_from_u64(3);
        let grid = Grid::new(2);
        let user = Snake::from_segments(vec![Cell::new(0, 0), Cell::new(1, 0)], Heading::Left);
        let ai = Snake::from_segments(vec![Cell::new(1, 1), Cell::new(0, 1)], Heading::Left);

        let _ = spawn_position(&mut rng, grid, &[&user, &ai]);
    }
}
