//! Group, liberty and territory analysis on a grid.
//!
//! All searches are iterative flood fills under 4-adjacency.

use rustc_hash::FxHashSet;

use crate::core::{Color, ColorMap, Grid, Position};

/// The maximal same-colored group containing `start`.
///
/// Empty if `start` is empty or off the board.
#[must_use]
pub fn collect_group(grid: &Grid, start: Position) -> Vec<Position> {
    let Ok(Some(color)) = grid.get(start) else {
        return Vec::new();
    };

    let mut group = Vec::new();
    let mut visited = FxHashSet::default();
    let mut stack = vec![start];
    while let Some(current) = stack.pop() {
        if !visited.insert(current) || grid.at(current) != Some(color) {
            continue;
        }
        group.push(current);
        stack.extend(grid.neighbors(current));
    }
    group
}

/// Whether any stone of `group` touches an empty cell.
#[must_use]
pub fn has_liberty(grid: &Grid, group: &[Position]) -> bool {
    group
        .iter()
        .flat_map(|&stone| grid.neighbors(stone))
        .any(|n| grid.at(n).is_none())
}

/// Opponent stones that a stone at `position` leaves without liberties.
///
/// Looks at every `victim`-colored group orthogonally adjacent to
/// `position`; each captured stone appears once even when its group
/// touches `position` from several sides. The grid is not modified.
#[must_use]
pub fn captures_from(grid: &Grid, position: Position, victim: Color) -> Vec<Position> {
    let mut captured = Vec::new();
    let mut seen = FxHashSet::default();
    for neighbor in grid.neighbors(position) {
        if grid.at(neighbor) != Some(victim) || seen.contains(&neighbor) {
            continue;
        }
        let group = collect_group(grid, neighbor);
        seen.extend(group.iter().copied());
        if !has_liberty(grid, &group) {
            captured.extend(group);
        }
    }
    captured
}

/// An empty region and the colors bordering it.
#[derive(Clone, Debug, Default)]
pub struct Region {
    pub cells: Vec<Position>,
    pub borders: FxHashSet<Color>,
}

impl Region {
    /// The single color that encloses this region, if exactly one does.
    #[must_use]
    pub fn owner(&self) -> Option<Color> {
        let mut colors = self.borders.iter();
        match (colors.next(), colors.next()) {
            (Some(&color), None) => Some(color),
            _ => None,
        }
    }
}

/// Every maximal empty region of the grid.
#[must_use]
pub fn empty_regions(grid: &Grid) -> Vec<Region> {
    let mut visited = FxHashSet::default();
    let mut regions = Vec::new();
    for start in grid.empty_positions() {
        if visited.contains(&start) {
            continue;
        }
        let mut region = Region::default();
        let mut stack = vec![start];
        while let Some(current) = stack.pop() {
            if !visited.insert(current) {
                continue;
            }
            region.cells.push(current);
            for neighbor in grid.neighbors(current) {
                match grid.at(neighbor) {
                    None => stack.push(neighbor),
                    Some(color) => {
                        region.borders.insert(color);
                    }
                }
            }
        }
        regions.push(region);
    }
    regions
}

/// Empty cells enclosed by exactly one color, per color.
#[must_use]
pub fn territory(grid: &Grid) -> ColorMap<u32> {
    let mut totals = ColorMap::with_value(0);
    for region in empty_regions(grid) {
        if let Some(owner) = region.owner() {
            totals[owner] += region.cells.len() as u32;
        }
    }
    totals
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_with(stones: &[(usize, usize, Color)]) -> Grid {
        let mut grid = Grid::new(9).unwrap();
        for &(row, col, color) in stones {
            grid.put(Position::new(row, col), Some(color));
        }
        grid
    }

    #[test]
    fn test_collect_group() {
        use Color::*;
        let grid = grid_with(&[
            (0, 0, Black),
            (0, 1, Black),
            (1, 1, Black),
            (2, 2, Black),
            (0, 2, White),
        ]);

        let mut group = collect_group(&grid, Position::new(0, 0));
        group.sort();
        assert_eq!(
            group,
            vec![Position::new(0, 0), Position::new(0, 1), Position::new(1, 1)]
        );
        assert!(collect_group(&grid, Position::new(5, 5)).is_empty());
        assert!(collect_group(&grid, Position::new(30, 0)).is_empty());
    }

    #[test]
    fn test_has_liberty() {
        use Color::*;
        let grid = grid_with(&[(0, 0, Black), (0, 1, White), (1, 0, White)]);

        let corner = collect_group(&grid, Position::new(0, 0));
        assert!(!has_liberty(&grid, &corner));

        let white = collect_group(&grid, Position::new(0, 1));
        assert!(has_liberty(&grid, &white));
    }

    #[test]
    fn test_captures_deduplicate_shared_group() {
        use Color::*;
        // White pair at (1,1)-(1,2) surrounded except for (2,1).
        let mut grid = grid_with(&[
            (1, 1, White),
            (1, 2, White),
            (0, 1, Black),
            (0, 2, Black),
            (1, 0, Black),
            (1, 3, Black),
            (2, 2, Black),
        ]);
        grid.put(Position::new(2, 1), Some(Black));

        let mut captured = captures_from(&grid, Position::new(2, 1), White);
        captured.sort();
        assert_eq!(captured, vec![Position::new(1, 1), Position::new(1, 2)]);
    }

    #[test]
    fn test_captures_ignore_groups_with_liberties() {
        use Color::*;
        let mut grid = grid_with(&[(4, 4, White), (3, 4, Black), (5, 4, Black)]);
        grid.put(Position::new(4, 3), Some(Black));

        assert!(captures_from(&grid, Position::new(4, 3), White).is_empty());
    }

    #[test]
    fn test_territory_single_owner_only() {
        use Color::*;
        // Black wall on column 1 encloses column 0; White wall on column 3.
        let mut stones = Vec::new();
        for row in 0..9 {
            stones.push((row, 1, Black));
            stones.push((row, 3, White));
        }
        let grid = grid_with(&stones);

        let totals = territory(&grid);
        // Column 0 is Black's; column 2 touches both; columns 4..9 are White's.
        assert_eq!(totals[Black], 9);
        assert_eq!(totals[White], 45);
    }

    #[test]
    fn test_empty_board_has_no_territory() {
        let grid = Grid::new(9).unwrap();
        let regions = empty_regions(&grid);
        assert_eq!(regions.len(), 1);
        assert_eq!(regions[0].owner(), None);
        assert_eq!(territory(&grid), ColorMap::with_value(0));
    }
}
