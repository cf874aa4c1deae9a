use crate::defaults::{default_grid, Palette};
use crate::error::Result;
use crate::model::{Grid, Variant};
use crate::persist;
use crate::store::DataStore;
use crate::sync::sync_all;
use log::info;

/// Produces the grid a session starts from: the persisted snapshot when one
/// decodes, otherwise the default grid. Either way it passes through
/// `sync_all` once, and is written back if that changed anything.
pub fn run<S: DataStore>(store: &mut S, variant: Variant, palette: &Palette) -> Result<Grid> {
    let (loaded, defaulted) = match persist::load(store, variant) {
        Some(grid) => (grid, false),
        None => (default_grid(variant, palette), true),
    };
    let grid = sync_all(&loaded);
    if defaulted || grid != loaded {
        persist::save(store, &grid)?;
    }
    info!(
        "event=grid_open variant={} source={}",
        variant,
        if defaulted { "default" } else { "persisted" }
    );
    Ok(grid)
}
