use crate::commands::helpers::commit;
use crate::commands::{CardUpdate, CmdMessage, CmdResult, EditTarget};
use crate::error::Result;
use crate::grid_store::GridStore;
use crate::index::{to_local, CellAddress};
use crate::model::{validate_title, Grid};
use crate::session::Session;
use crate::store::DataStore;
use crate::sync::{spread_background, sync_one};
use log::debug;

/// Opens an edit session on `global`, replacing any open one.
pub fn begin(grids: &GridStore, session: &mut Session, global: usize) -> EditTarget {
    let grid = grids.get();
    let address = to_local(&grid.shape(), global);
    session.start_edit(global);
    debug!("event=edit_begin cell={}", address);
    EditTarget {
        global_index: global,
        address,
        card: grid.card(address.section, address.card).clone(),
    }
}

/// Writes `update` onto the cell and propagates it. The card keeps its id.
pub fn apply_update(grid: &Grid, address: CellAddress, update: &CardUpdate) -> Grid {
    let mut next = grid.clone();
    let card = next.card_mut(address.section, address.card);
    card.title = update.title.clone();
    card.content = update.content.clone();
    card.bg_color = update.bg_color.clone();
    let updated = card.clone();

    let next = sync_one(&next, address, &updated);
    if update.sync_background {
        spread_background(&next, address.section, &update.bg_color)
    } else {
        next
    }
}

/// Saves the open edit session. Without one this does nothing. A rejected
/// title leaves the session open.
pub fn save<S: DataStore>(
    store: &mut S,
    grids: &mut GridStore,
    session: &mut Session,
    update: CardUpdate,
) -> Result<CmdResult> {
    validate_title(&update.title)?;
    let Some(global) = session.take_edit() else {
        debug!("event=edit_save status=no_session");
        return Ok(CmdResult::default());
    };

    let address = to_local(&grids.get().shape(), global);
    let next = apply_update(grids.get(), address, &update);
    let changed = commit(store, grids, next)?;

    let mut result = CmdResult::default();
    if changed.is_empty() {
        result.add_message(CmdMessage::info(format!("Cell {} unchanged", global)));
    } else {
        result.add_message(CmdMessage::success(format!(
            "Cell {} saved: {} ({} cell{} updated)",
            global,
            update.title,
            changed.len(),
            if changed.len() == 1 { "" } else { "s" }
        )));
    }
    Ok(result.with_affected_cells(changed))
}

pub fn cancel(session: &mut Session) -> CmdResult {
    if let Some(global) = session.take_edit() {
        debug!("event=edit_cancel cell={}", global);
    }
    CmdResult::default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defaults::{seeded_grid, Palette};
    use crate::error::MandalaError;
    use crate::model::{Color, RichText, Variant};
    use crate::persist;
    use crate::store::memory::InMemoryStore;
    use crate::sync::mirrors_consistent;
    use std::str::FromStr;

    fn setup(variant: Variant) -> (InMemoryStore, GridStore, Session) {
        let grid = seeded_grid(variant, &Palette::default());
        (InMemoryStore::new(), GridStore::new(grid), Session::new())
    }

    fn update(title: &str, color: &str, sync_background: bool) -> CardUpdate {
        CardUpdate {
            title: title.to_string(),
            content: RichText::from_str("C").unwrap(),
            bg_color: Color::from_str(color).unwrap(),
            sync_background,
        }
    }

    #[test]
    fn save_propagates_and_persists() {
        let (mut store, mut grids, mut session) = setup(Variant::Large);
        let target = begin(&grids, &mut session, 38);
        assert_eq!(target.address, CellAddress::new(4, 2));

        let result = save(&mut store, &mut grids, &mut session, update("T", "#111", false)).unwrap();
        assert_eq!(result.affected_cells.len(), 2);
        assert_eq!(grids.get().card(2, 4).title, "T");
        assert_eq!(grids.get().card(4, 2).id, "section-4-card-2");
        assert_eq!(session.editing(), None);
        assert_eq!(persist::load(&store, Variant::Large).as_ref(), Some(grids.get()));
    }

    #[test]
    fn save_without_session_is_a_no_op() {
        let (mut store, mut grids, mut session) = setup(Variant::Small);
        let before = grids.get().clone();
        let result = save(&mut store, &mut grids, &mut session, update("T", "#111", false)).unwrap();
        assert!(result.affected_cells.is_empty());
        assert!(result.messages.is_empty());
        assert_eq!(grids.get(), &before);
        assert!(store.is_empty());
    }

    #[test]
    fn multi_line_title_is_rejected() {
        let (mut store, mut grids, mut session) = setup(Variant::Small);
        let before = grids.get().clone();
        begin(&grids, &mut session, 0);

        let err = save(&mut store, &mut grids, &mut session, update("a\nb", "#111", false));
        assert!(matches!(err, Err(MandalaError::InvalidTitle(_))));
        assert_eq!(grids.get(), &before);
        assert_eq!(session.editing(), Some(0));
        assert!(store.is_empty());
    }

    #[test]
    fn cancel_clears_session_without_changes() {
        let (_store, grids, mut session) = setup(Variant::Small);
        begin(&grids, &mut session, 2);
        cancel(&mut session);
        assert_eq!(session.editing(), None);
        cancel(&mut session);
    }

    #[test]
    fn sync_background_skips_center_card() {
        let (mut store, mut grids, mut session) = setup(Variant::Small);
        let core = grids.get().card(0, 4).bg_color.clone();
        begin(&grids, &mut session, 0);
        save(&mut store, &mut grids, &mut session, update("T", "#222", true)).unwrap();

        let grid = grids.get();
        for c in (0..9).filter(|c| *c != 4) {
            assert_eq!(grid.card(0, c).bg_color.as_str(), "#222");
        }
        assert_eq!(grid.card(0, 4).bg_color, core);
    }

    #[test]
    fn sync_background_in_center_section_keeps_mirrors() {
        let (mut store, mut grids, mut session) = setup(Variant::Large);
        begin(&grids, &mut session, 36);
        save(&mut store, &mut grids, &mut session, update("T", "#333", true)).unwrap();
        assert!(mirrors_consistent(grids.get()));
        assert_eq!(grids.get().card(8, 4).bg_color.as_str(), "#333");
    }

    #[test]
    fn editing_the_core_goal_touches_one_cell() {
        let (mut store, mut grids, mut session) = setup(Variant::Large);
        begin(&grids, &mut session, 40);
        let result = save(&mut store, &mut grids, &mut session, update("Vision", "#444", false)).unwrap();
        assert_eq!(result.affected_cells.len(), 1);
        assert_eq!(result.affected_cells[0].global_index, 40);
    }
}
