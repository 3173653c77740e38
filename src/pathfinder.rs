//! Shortest-path search that steers the computer-controlled snake.
//!
//! Every call is a fresh breadth-first search; nothing is cached between
//! ticks, so the cost is bounded by the grid's cell count per call.

use std::collections::{HashSet, VecDeque};

use crate::grid::{Cell, Grid};
use crate::input::Heading;

/// Queue entry: a discovered cell plus the first heading of the path that
/// reached it (`None` only for the start cell).
#[derive(Debug, Clone, Copy)]
struct Frontier {
    cell: Cell,
    first_step: Option<Heading>,
    depth: usize,
}

/// Outcome of a search that reached the goal.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
struct Route {
    first_step: Option<Heading>,
    length: usize,
}

/// Returns the first heading of a shortest path from `start` to `goal`.
///
/// Cells in `blocked` and cells outside `grid` are impassable; `start` is
/// treated as already visited. Neighbors expand in Up, Down, Left, Right
/// order, so ties between equally short paths go to the earliest heading.
///
/// Returns `None` when `goal` is unreachable, or when `goal == start`.
#[must_use]
pub fn next_heading(
    start: Cell,
    goal: Cell,
    blocked: &HashSet<Cell>,
    grid: Grid,
) -> Option<Heading> {
    search(start, goal, blocked, grid).and_then(|route| route.first_step)
}

/// Returns the number of steps on a shortest path, or `None` if unreachable.
#[must_use]
pub fn shortest_distance(
    start: Cell,
    goal: Cell,
    blocked: &HashSet<Cell>,
    grid: Grid,
) -> Option<usize> {
    search(start, goal, blocked, grid).map(|route| route.length)
}

fn search(start: Cell, goal: Cell, blocked: &HashSet<Cell>, grid: Grid) -> Option<Route> {
    let mut visited = vec![false; grid.total_cells()];
    if let Some(index) = grid.index_of(start) {
        visited[index] = true;
    }

    let mut queue = VecDeque::new();
    queue.push_back(Frontier {
        cell: start,
        first_step: None,
        depth: 0,
    });

    while let Some(current) = queue.pop_front() {
        if current.cell == goal {
            return Some(Route {
                first_step: current.first_step,
                length: current.depth,
            });
        }

        for heading in Heading::SEARCH_ORDER {
            let next = current.cell.step(heading);
            let Some(index) = grid.index_of(next) else {
                continue;
            };
            if visited[index] || blocked.contains(&next) {
                continue;
            }

            visited[index] = true;
            queue.push_back(Frontier {
                cell: next,
                first_step: current.first_step.or(Some(heading)),
                depth: current.depth + 1,
            });
        }
    }

    None
}
