//! # Mirror Synchronization
//!
//! In a grid with a periphery, the center card of every peripheral section `p`
//! shows the same title, content and color as card `p` of the center section.
//! The core goal (center card of the center section) takes part in no pair.
//!
//! Editing either side of a pair updates the other. Each call treats the
//! edited cell as the source and writes at most one other cell, so
//! propagation never cycles. Ids are never copied.
//!
//! Both entry points are pure: they return a new grid and leave their input
//! untouched.

use crate::index::CellAddress;
use crate::model::{Card, Color, Grid, GridShape};
use log::debug;

/// Which way an edit at a given cell has to travel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MirrorDirection {
    /// A center-section cell feeds the center card of the section it names.
    ToPeriphery,
    /// A peripheral center card feeds its slot in the center section.
    ToCenter,
    None,
}

pub fn mirror_direction(shape: &GridShape, addr: CellAddress) -> MirrorDirection {
    if !shape.has_periphery() {
        return MirrorDirection::None;
    }
    let in_center_section = shape.is_center_section(addr.section);
    let is_center_card = shape.is_center_card(addr.card);
    match (in_center_section, is_center_card) {
        // the center section's own slot would point back at the core goal
        (true, false) if addr.card != shape.center_section => MirrorDirection::ToPeriphery,
        (false, true) if addr.section != shape.center_card => MirrorDirection::ToCenter,
        _ => MirrorDirection::None,
    }
}

/// The other half of the mirror pair `addr` belongs to, if any.
pub fn mirror_partner(shape: &GridShape, addr: CellAddress) -> Option<CellAddress> {
    match mirror_direction(shape, addr) {
        MirrorDirection::ToPeriphery => Some(CellAddress::new(addr.card, shape.center_card)),
        MirrorDirection::ToCenter => Some(CellAddress::new(shape.center_section, addr.section)),
        MirrorDirection::None => None,
    }
}

pub fn is_mirrored(shape: &GridShape, addr: CellAddress) -> bool {
    mirror_direction(shape, addr) != MirrorDirection::None
}

/// Writes `source`'s face onto the partner of `addr`. Returns the partner
/// that was written, if any.
pub(crate) fn mirror_in_place(grid: &mut Grid, addr: CellAddress, source: &Card) -> Option<CellAddress> {
    let target = mirror_partner(&grid.shape(), addr)?;
    grid.card_mut(target.section, target.card).copy_face_from(source);
    debug!(
        "event=mirror_sync source={} target={} title={:?}",
        addr, target, source.title
    );
    Some(target)
}

/// Propagates an edit or relocation at `addr` to its mirror partner.
pub fn sync_one(grid: &Grid, addr: CellAddress, updated: &Card) -> Grid {
    let mut next = grid.clone();
    mirror_in_place(&mut next, addr, updated);
    next
}

/// Seeds every mirror from the center section.
pub fn sync_all(grid: &Grid) -> Grid {
    let shape = grid.shape();
    let mut next = grid.clone();
    if !shape.has_periphery() {
        return next;
    }
    for card in 0..shape.cards_per_section {
        let addr = CellAddress::new(shape.center_section, card);
        if mirror_direction(&shape, addr) == MirrorDirection::ToPeriphery {
            let source = next.card(addr.section, addr.card).clone();
            mirror_in_place(&mut next, addr, &source);
        }
    }
    next
}

/// Recolors every card in `section` except its center card, then re-syncs
/// each recolored card so the mirror pairs stay equal.
pub fn spread_background(grid: &Grid, section: usize, color: &Color) -> Grid {
    let shape = grid.shape();
    let mut next = grid.clone();
    for card in 0..shape.cards_per_section {
        if shape.is_center_card(card) {
            continue;
        }
        let target = next.card_mut(section, card);
        if target.bg_color == *color {
            continue;
        }
        target.bg_color = color.clone();
        let source = target.clone();
        mirror_in_place(&mut next, CellAddress::new(section, card), &source);
    }
    next
}

/// True when every mirror pair holds the same face.
pub fn mirrors_consistent(grid: &Grid) -> bool {
    let shape = grid.shape();
    (0..shape.cards_per_section).all(|card| {
        let addr = CellAddress::new(shape.center_section, card);
        match mirror_partner(&shape, addr) {
            Some(partner) => grid
                .card(addr.section, addr.card)
                .same_face(grid.card(partner.section, partner.card)),
            None => true,
        }
    })
}
