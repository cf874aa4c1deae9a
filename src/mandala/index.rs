//! # Cell Addressing
//!
//! Every cell has two equivalent addresses:
//!
//! - a **global index** in `0..S*C`, used by drag sessions, edit sessions and
//!   every renderer callback;
//! - a **local address** `(section, card)`, used by the grid itself.
//!
//! The mapping is `global = section * C + card` and its inverse. It is a pure
//! bijection; out-of-range input is a programming error and panics. Input that
//! comes from a user goes through [`CellRef::resolve`] instead, which reports
//! [`MandalaError::OutOfRange`].
//!
//! Where a cell is *drawn* (its visual row and column) is a rendering concern
//! and deliberately lives elsewhere.

use crate::error::{MandalaError, Result};
use crate::model::{Card, Grid, GridShape};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellAddress {
    pub section: usize,
    pub card: usize,
}

impl CellAddress {
    pub fn new(section: usize, card: usize) -> Self {
        Self { section, card }
    }
}

impl fmt::Display for CellAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.section, self.card)
    }
}

pub fn to_global(shape: &GridShape, section: usize, card: usize) -> usize {
    assert!(
        section < shape.sections,
        "section {} out of range (grid has {} sections)",
        section,
        shape.sections
    );
    assert!(
        card < shape.cards_per_section,
        "card {} out of range (sections hold {} cards)",
        card,
        shape.cards_per_section
    );
    section * shape.cards_per_section + card
}

pub fn to_local(shape: &GridShape, global: usize) -> CellAddress {
    assert!(
        global < shape.cell_count(),
        "cell {} out of range (grid has {} cells)",
        global,
        shape.cell_count()
    );
    CellAddress {
        section: global / shape.cards_per_section,
        card: global % shape.cards_per_section,
    }
}

/// Checks a user-supplied global index.
pub fn check_global(shape: &GridShape, global: usize) -> Result<usize> {
    if global < shape.cell_count() {
        Ok(global)
    } else {
        Err(MandalaError::OutOfRange {
            index: global,
            cells: shape.cell_count(),
        })
    }
}

/// A user-supplied reference to a cell: `17` or `1.8`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellRef {
    Global(usize),
    Local(CellAddress),
}

impl CellRef {
    pub fn resolve(&self, shape: &GridShape) -> Result<usize> {
        match *self {
            CellRef::Global(global) => check_global(shape, global),
            CellRef::Local(addr) => {
                if addr.section >= shape.sections || addr.card >= shape.cards_per_section {
                    return Err(MandalaError::InvalidCellRef(format!(
                        "{} is outside a grid of {} sections x {} cards",
                        addr, shape.sections, shape.cards_per_section
                    )));
                }
                Ok(to_global(shape, addr.section, addr.card))
            }
        }
    }
}

impl fmt::Display for CellRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellRef::Global(i) => write!(f, "{}", i),
            CellRef::Local(addr) => write!(f, "{}", addr),
        }
    }
}

impl FromStr for CellRef {
    type Err = MandalaError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || MandalaError::InvalidCellRef(s.to_string());
        if let Some((section, card)) = s.split_once(['.', ':']) {
            let section = section.parse().map_err(|_| invalid())?;
            let card = card.parse().map_err(|_| invalid())?;
            return Ok(CellRef::Local(CellAddress::new(section, card)));
        }
        s.parse().map(CellRef::Global).map_err(|_| invalid())
    }
}

/// Parses a single reference or a range of global indexes (`3-5`).
///
/// Ranges are only accepted between global indexes and must be ascending.
/// Whether the cells exist is checked later, during resolution.
pub fn parse_cell_or_range(s: &str) -> Result<Vec<CellRef>> {
    if let Some(dash_pos) = s.find('-') {
        if dash_pos > 0 {
            let start = CellRef::from_str(&s[..dash_pos])?;
            let end = CellRef::from_str(&s[dash_pos + 1..])?;
            return match (start, end) {
                (CellRef::Global(a), CellRef::Global(b)) if a <= b => {
                    Ok((a..=b).map(CellRef::Global).collect())
                }
                (CellRef::Global(a), CellRef::Global(b)) => Err(MandalaError::InvalidCellRef(
                    format!("range start ({}) must be <= end ({})", a, b),
                )),
                _ => Err(MandalaError::InvalidCellRef(format!(
                    "ranges only take global indexes: {}",
                    s
                ))),
            };
        }
    }
    CellRef::from_str(s).map(|cell| vec![cell])
}

/// What a renderer needs to draw one cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellView {
    pub card: Card,
    pub global_index: usize,
    pub address: CellAddress,
    pub is_draggable: bool,
    pub is_editable: bool,
}

pub fn cell_view(grid: &Grid, global: usize) -> CellView {
    let shape = grid.shape();
    let address = to_local(&shape, global);
    CellView {
        card: grid.card(address.section, address.card).clone(),
        global_index: global,
        address,
        is_draggable: !shape.is_center_card(address.card),
        is_editable: true,
    }
}

/// Lists every cell in global order.
pub fn cell_views(grid: &Grid) -> Vec<CellView> {
    (0..grid.shape().cell_count())
        .map(|global| cell_view(grid, global))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defaults::{default_grid, Palette};
    use crate::model::Variant;

    #[test]
    fn global_and_local_are_inverse() {
        let shape = Variant::Large.shape();
        for g in 0..81 {
            let addr = to_local(&shape, g);
            assert_eq!(to_global(&shape, addr.section, addr.card), g);
        }
        for s in 0..9 {
            for c in 0..9 {
                assert_eq!(to_local(&shape, to_global(&shape, s, c)), CellAddress::new(s, c));
            }
        }
    }

    #[test]
    fn small_grid_addresses_are_card_indexes() {
        let shape = Variant::Small.shape();
        assert_eq!(to_local(&shape, 7), CellAddress::new(0, 7));
        assert_eq!(to_global(&shape, 0, 4), 4);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn to_local_panics_past_the_end() {
        to_local(&Variant::Large.shape(), 81);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn to_global_panics_on_bad_card() {
        to_global(&Variant::Small.shape(), 0, 9);
    }

    #[test]
    fn parses_cell_refs() {
        assert_eq!("17".parse::<CellRef>().unwrap(), CellRef::Global(17));
        assert_eq!(
            "1.8".parse::<CellRef>().unwrap(),
            CellRef::Local(CellAddress::new(1, 8))
        );
        assert_eq!(
            "4:2".parse::<CellRef>().unwrap(),
            CellRef::Local(CellAddress::new(4, 2))
        );
        assert!("".parse::<CellRef>().is_err());
        assert!("a.1".parse::<CellRef>().is_err());
        assert!("1.".parse::<CellRef>().is_err());
        assert!("x".parse::<CellRef>().is_err());
    }

    #[test]
    fn resolve_reports_out_of_range() {
        let shape = Variant::Small.shape();
        assert_eq!(CellRef::Global(8).resolve(&shape).unwrap(), 8);
        assert!(matches!(
            CellRef::Global(9).resolve(&shape),
            Err(MandalaError::OutOfRange { index: 9, cells: 9 })
        ));
        assert!(CellRef::Local(CellAddress::new(1, 0)).resolve(&shape).is_err());

        let large = Variant::Large.shape();
        assert_eq!(
            CellRef::Local(CellAddress::new(4, 2)).resolve(&large).unwrap(),
            38
        );
    }

    #[test]
    fn parses_ranges() {
        assert_eq!(
            parse_cell_or_range("3-5").unwrap(),
            vec![CellRef::Global(3), CellRef::Global(4), CellRef::Global(5)]
        );
        assert_eq!(parse_cell_or_range("2").unwrap(), vec![CellRef::Global(2)]);
        assert!(parse_cell_or_range("5-3").is_err());
        assert!(parse_cell_or_range("1.1-1.3").is_err());
        assert!(parse_cell_or_range("3-").is_err());
        assert!(parse_cell_or_range("-3").is_err());
    }

    #[test]
    fn center_cards_are_not_draggable() {
        let grid = default_grid(Variant::Large, &Palette::default());
        let views = cell_views(&grid);
        assert_eq!(views.len(), 81);
        for view in &views {
            assert_eq!(view.is_draggable, view.address.card != 4);
            assert!(view.is_editable);
        }
        assert_eq!(views[40].card.title, "Core Goal");
    }
}
