use crate::commands::helpers::commit;
use crate::commands::{CmdMessage, CmdResult, ResetRequest};
use crate::defaults::{seeded_grid, Palette};
use crate::error::Result;
use crate::grid_store::GridStore;
use crate::session::Session;
use crate::store::DataStore;
use log::info;

/// Returns the grid to its seeded default, persists it and drops any open
/// drag or edit session.
pub fn run<S: DataStore>(
    store: &mut S,
    grids: &mut GridStore,
    session: &mut Session,
    palette: &Palette,
    _request: ResetRequest,
) -> Result<CmdResult> {
    let variant = grids.get().variant();
    let changed = commit(store, grids, seeded_grid(variant, palette))?;
    session.clear();
    info!("event=grid_reset variant={} changed={}", variant, changed.len());

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("{} reset to defaults", variant.name())));
    Ok(result.with_affected_cells(changed))
}
