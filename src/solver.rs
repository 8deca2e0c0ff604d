use std::collections::HashSet;

use itertools::Itertools;
use strum::VariantArray;

use crate::board::Board;
use crate::cell::Cell;
use crate::location::Location;
use crate::step::Step;
use crate::union_find::UnionFind;

/// One unit of work in the search chain.
///
/// The chain is an ordered list of these descriptors; each invocation of [`run`] dispatches on the descriptor at position 0 and treats the rest of the slice as the stages still to come.
#[derive(Copy, Clone, Debug)]
enum Stage {
    /// Resolve duplicate symbols within row `y`.
    Row(usize),
    /// Resolve duplicate symbols within column `x`.
    Column(usize),
    /// Drop boards whose non-blank cells do not form one connected region.
    Connectivity,
    /// Record a fully validated board.
    Collect,
}

/// Finds every solution of `board` by exhaustive depth-first search.
///
/// Candidate boards are threaded through one [`Stage::Row`] per row, then one [`Stage::Column`] per column, then the connectivity filter and the collector, so a board is only tested for connectivity once every line is simultaneously duplicate-free.
/// The result is a deduplicated set; distinct search paths arriving at the same grid count once, and repeated calls on the same board yield the same set.
pub fn solve(board: &Board) -> HashSet<Board> {
    let (width, height) = board.size();

    let stages = (0..height).map(Stage::Row)
        .chain((0..width).map(Stage::Column))
        .chain([Stage::Connectivity, Stage::Collect])
        .collect_vec();

    let mut answers = HashSet::new();
    run(board.clone(), &stages, &mut answers);
    answers
}

fn run(board: Board, stages: &[Stage], answers: &mut HashSet<Board>) {
    let Some(stage) = stages.first() else { return };

    match *stage {
        Stage::Row(y) => {
            let line = board.row(y).collect_vec();
            resolve_duplicates(board, &line, stages, answers);
        }
        Stage::Column(x) => {
            let line = board.col(x).collect_vec();
            resolve_duplicates(board, &line, stages, answers);
        }
        Stage::Connectivity => {
            if connected(&board) {
                run(board, &stages[1..], answers);
            }
        }
        Stage::Collect => {
            answers.insert(board);
        }
    }
}

/// Eliminates duplicate symbols among the non-blank cells of one line.
///
/// The first duplicated symbol in line order is resolved in every admissible way: keep one occurrence and blank the rest, or blank every occurrence.
/// Each resulting board re-enters this same stage, so any further duplicate groups in the line are found by recursion; a board with no duplicates left is forwarded to the next stage.
///
/// Blanking *all* occurrences of a value goes beyond the usual "leave exactly one" reading of the rules; both resolutions are explored, and the adjacency and connectivity rules alone decide final validity.
fn resolve_duplicates(board: Board, line: &[Location], stages: &[Stage], answers: &mut HashSet<Board>) {
    let occupied = line.iter()
        .filter_map(|&location| match board.cell(location) {
            Some(Cell::Symbol(symbol)) => Some((symbol, location)),
            _ => None,
        })
        .collect_vec();

    let groups = occupied.iter().copied().into_group_map();

    let Some(group) = occupied.iter()
        .find_map(|(symbol, _)| groups.get(symbol).filter(|locations| locations.len() > 1))
    else {
        // line is clean; hand the board on
        return run(board, &stages[1..], answers);
    };

    // keep one cell of the group and blank the others
    for &keep in group {
        let candidate = group.iter()
            .filter(|&&location| location != keep)
            .try_fold(board.clone(), |b, &location| b.blank(location));

        // a candidate tripping the adjacency rule is dropped wholesale
        if let Ok(next) = candidate {
            run(next, stages, answers);
        }
    }

    // or blank the whole group
    if let Ok(next) = group.iter().try_fold(board.clone(), |b, &location| b.blank(location)) {
        run(next, stages, answers);
    }
}

/// Whether the non-blank cells of `board` form a single orthogonally connected region.
///
/// Neighboring non-blank cells are unioned into equivalence classes; the board is connected iff one class spans the whole non-blank set.
/// Unions against blank or out-of-range neighbors are no-ops, and a board with no non-blank cells counts as connected.
fn connected(board: &Board) -> bool {
    let cells = board.non_blank().collect_vec();
    let Some(&start) = cells.first() else { return true };

    let mut classes = UnionFind::new(cells.iter().copied());
    for &location in &cells {
        for step in Step::VARIANTS {
            classes.union(location, step.attempt_from(location));
        }
    }

    classes.find(start).is_some_and(|(_, size)| size == cells.len())
}
