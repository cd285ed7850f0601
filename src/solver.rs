use crate::maze::Grid;

/// True when a 4-connected run of path cells joins start to goal.
///
/// Depth-first over a stack. Neighbours are pushed unfiltered and walls are
/// discarded when popped, so a walled start or goal is never reached.
pub fn is_solvable(grid: &Grid) -> bool {
    let goal = grid.goal();
    let mut visited = vec![false; grid.width() * grid.height()];
    let mut stack = vec![grid.start()];

    while let Some(pos) = stack.pop() {
        let idx = pos.y * grid.width() + pos.x;
        if visited[idx] || !grid.is_path(pos) {
            continue;
        }
        if pos == goal {
            return true;
        }
        visited[idx] = true;
        stack.extend(grid.neighbors(pos));
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze::Pos;

    fn barrier() -> [Pos; 3] {
        [Pos::new(1, 0), Pos::new(1, 1), Pos::new(1, 2)]
    }

    #[test]
    fn open_grids_are_solvable() {
        for (w, h) in [(1, 1), (1, 5), (5, 1), (2, 2), (10, 10), (31, 21)] {
            assert!(is_solvable(&Grid::open(w, h)), "{w}x{h}");
        }
    }

    #[test]
    fn walled_goal_is_unsolvable() {
        let grid = Grid::with_walls(4, 4, [Pos::new(3, 3)]);
        assert!(!is_solvable(&grid));
    }

    #[test]
    fn walled_start_is_unsolvable() {
        let grid = Grid::with_walls(4, 4, [Pos::new(0, 0)]);
        assert!(!is_solvable(&grid));
    }

    #[test]
    fn full_column_separates_start_from_goal() {
        let grid = Grid::with_walls(3, 3, barrier());
        assert!(!is_solvable(&grid));
    }

    #[test]
    fn removing_any_barrier_cell_reconnects() {
        let walls = barrier();
        for skip in 0..walls.len() {
            let kept = walls
                .iter()
                .enumerate()
                .filter(|(i, _)| *i != skip)
                .map(|(_, p)| *p);
            let grid = Grid::with_walls(3, 3, kept);
            assert!(is_solvable(&grid), "gap at {:?}", walls[skip]);
        }
    }

    #[test]
    fn stray_wall_does_not_cut_alternate_route() {
        let grid: Grid = "\
            ....\n\
            .##.\n\
            ....\n\
            ...."
            .parse()
            .unwrap();
        assert!(is_solvable(&grid));

        let grid: Grid = "\
            ....\n\
            .##.\n\
            ...#\n\
            ...."
            .parse()
            .unwrap();
        assert!(is_solvable(&grid));
    }

    #[test]
    fn winding_corridor_is_followed() {
        let grid: Grid = "\
            .#...\n\
            .#.#.\n\
            .#.#.\n\
            ...#.\n\
            ####."
            .parse()
            .unwrap();
        assert!(is_solvable(&grid));
    }

    #[test]
    fn diagonal_gap_does_not_connect() {
        let grid: Grid = "\
            .#.\n\
            #..\n\
            ..."
            .parse()
            .unwrap();
        assert!(!is_solvable(&grid));
    }
}
