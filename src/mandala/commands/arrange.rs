use crate::commands::helpers::commit;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::grid_store::GridStore;
use crate::index::to_local;
use crate::session::Session;
use crate::store::DataStore;
use crate::swap::swap;
use log::debug;

/// Picks up `global`. Center cards stay put and open no session.
pub fn begin_drag(grids: &GridStore, session: &mut Session, global: usize) -> CmdResult {
    let shape = grids.get().shape();
    let address = to_local(&shape, global);
    let mut result = CmdResult::default();
    if shape.is_center_card(address.card) {
        debug!("event=drag_begin cell={} status=rejected", global);
        result.add_message(CmdMessage::warning(format!(
            "Cell {} is a section center and cannot be moved",
            global
        )));
        return result;
    }
    session.start_drag(global);
    debug!("event=drag_begin cell={}", global);
    result
}

/// Drops the held cell on `target`. The drag session ends whatever happens.
pub fn drop_on<S: DataStore>(
    store: &mut S,
    grids: &mut GridStore,
    session: &mut Session,
    target: usize,
) -> Result<CmdResult> {
    let dragged = session.take_drag();
    let shape = grids.get().shape();
    let target_address = to_local(&shape, target);
    let mut result = CmdResult::default();

    let Some(source) = dragged else {
        debug!("event=drop cell={} status=no_drag", target);
        return Ok(result);
    };
    if source == target {
        debug!("event=drop cell={} status=same_cell", target);
        return Ok(result);
    }
    if shape.is_center_card(target_address.card) {
        debug!("event=drop cell={} status=center_target", target);
        result.add_message(CmdMessage::warning(format!(
            "Cell {} is a section center and cannot be replaced",
            target
        )));
        return Ok(result);
    }

    let next = swap(grids.get(), source, target);
    let changed = commit(store, grids, next)?;
    result.add_message(CmdMessage::success(format!(
        "Moved cell {} to {}",
        source, target
    )));
    Ok(result.with_affected_cells(changed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::defaults::{seeded_grid, Palette};
    use crate::model::Variant;
    use crate::persist;
    use crate::store::memory::InMemoryStore;

    fn setup(variant: Variant) -> (InMemoryStore, GridStore, Session) {
        let grid = seeded_grid(variant, &Palette::default());
        (InMemoryStore::new(), GridStore::new(grid), Session::new())
    }

    #[test]
    fn drag_and_drop_swaps_and_persists() {
        let (mut store, mut grids, mut session) = setup(Variant::Small);
        begin_drag(&grids, &mut session, 0);
        assert_eq!(session.dragged(), Some(0));

        let result = drop_on(&mut store, &mut grids, &mut session, 8).unwrap();
        assert_eq!(grids.get().card(0, 8).id, "card-0");
        assert_eq!(grids.get().card(0, 0).id, "card-8");
        assert_eq!(result.affected_cells.len(), 2);
        assert_eq!(session.dragged(), None);
        assert_eq!(persist::load(&store, Variant::Small).as_ref(), Some(grids.get()));
    }

    #[test]
    fn center_card_cannot_be_dragged() {
        let (_store, grids, mut session) = setup(Variant::Large);
        let result = begin_drag(&grids, &mut session, 13);
        assert_eq!(session.dragged(), None);
        assert_eq!(result.messages[0].level, MessageLevel::Warning);
    }

    #[test]
    fn drop_on_center_card_ends_drag_without_change() {
        let (mut store, mut grids, mut session) = setup(Variant::Large);
        let before = grids.get().clone();
        begin_drag(&grids, &mut session, 10);
        let result = drop_on(&mut store, &mut grids, &mut session, 40).unwrap();
        assert_eq!(grids.get(), &before);
        assert_eq!(session.dragged(), None);
        assert_eq!(result.messages[0].level, MessageLevel::Warning);
        assert!(store.is_empty());
    }

    #[test]
    fn drop_without_drag_or_on_source_does_nothing() {
        let (mut store, mut grids, mut session) = setup(Variant::Small);
        let before = grids.get().clone();
        drop_on(&mut store, &mut grids, &mut session, 3).unwrap();

        begin_drag(&grids, &mut session, 3);
        let result = drop_on(&mut store, &mut grids, &mut session, 3).unwrap();
        assert!(result.affected_cells.is_empty());
        assert_eq!(session.dragged(), None);
        assert_eq!(grids.get(), &before);
        assert!(store.is_empty());
    }

    #[test]
    fn swap_resyncs_mirrored_cells() {
        let (mut store, mut grids, mut session) = setup(Variant::Large);
        begin_drag(&grids, &mut session, 37);
        let result = drop_on(&mut store, &mut grids, &mut session, 42).unwrap();
        let globals: Vec<usize> = result.affected_cells.iter().map(|v| v.global_index).collect();
        assert_eq!(globals, vec![13, 37, 42, 58]);
        assert_eq!(grids.get().card(1, 4).title, "Goal 6");
    }
}
