use crate::commands::helpers::views_for;
use crate::commands::CmdResult;
use crate::index::cell_views;
use crate::model::Grid;

/// Lists the given cells, or every cell when none are given.
pub fn run(grid: &Grid, globals: &[usize]) -> CmdResult {
    let cells = if globals.is_empty() {
        cell_views(grid)
    } else {
        views_for(grid, globals)
    };
    CmdResult::default().with_listed_cells(cells)
}
