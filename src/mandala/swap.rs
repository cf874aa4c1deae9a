use crate::index::{to_global, to_local, CellAddress};
use crate::model::Grid;
use crate::sync::{is_mirrored, mirror_in_place};
use log::debug;

/// Exchanges the cards at two global indexes and re-synchronizes any
/// mirrored endpoint from its new occupant.
///
/// Endpoints are re-synchronized in ascending global order, so a swap between
/// two mirrored cells always resolves the same way. Center cards are not
/// refused here; keeping them in place is the caller's policy.
///
/// # Panics
///
/// If either index is outside the grid.
pub fn swap(grid: &Grid, from: usize, to: usize) -> Grid {
    let shape = grid.shape();
    let a = to_local(&shape, from);
    let b = to_local(&shape, to);
    if from == to {
        return grid.clone();
    }

    let mut next = grid.clone();
    let sections = next.sections_mut();
    if a.section == b.section {
        sections[a.section].cards.swap(a.card, b.card);
    } else {
        let held = sections[a.section].cards[a.card].clone();
        sections[a.section].cards[a.card] = sections[b.section].cards[b.card].clone();
        sections[b.section].cards[b.card] = held;
    }
    debug!("event=cell_swap from={} to={}", a, b);

    let mut endpoints = [a, b];
    endpoints.sort_by_key(|addr| to_global(&shape, addr.section, addr.card));
    for addr in endpoints {
        resync_endpoint(&mut next, addr);
    }
    next
}

fn resync_endpoint(grid: &mut Grid, addr: CellAddress) {
    if !is_mirrored(&grid.shape(), addr) {
        return;
    }
    let occupant = grid.card(addr.section, addr.card).clone();
    mirror_in_place(grid, addr, &occupant);
}
