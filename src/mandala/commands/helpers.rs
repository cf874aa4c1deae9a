use crate::error::Result;
use crate::grid_store::GridStore;
use crate::index::{cell_view, cell_views, CellView};
use crate::model::Grid;
use crate::persist;
use crate::store::DataStore;

/// Cells whose card differs between two grids of the same variant.
pub fn changed_cells(before: &Grid, after: &Grid) -> Vec<CellView> {
    cell_views(after)
        .into_iter()
        .filter(|view| before.card(view.address.section, view.address.card) != &view.card)
        .collect()
}

/// Write-through commit: persist first, then swap the grid in. A failed
/// write leaves the in-memory grid as it was. Returns the changed cells.
pub fn commit<S: DataStore>(store: &mut S, grids: &mut GridStore, next: Grid) -> Result<Vec<CellView>> {
    persist::save(store, &next)?;
    let previous = grids.replace(next);
    Ok(changed_cells(&previous, grids.get()))
}

pub fn views_for(grid: &Grid, globals: &[usize]) -> Vec<CellView> {
    globals.iter().map(|g| cell_view(grid, *g)).collect()
}
