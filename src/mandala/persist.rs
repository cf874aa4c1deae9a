//! Snapshot persistence.
//!
//! A small grid is stored as a JSON array of its nine cards, a large grid as
//! a JSON array of its sections. There is no version field: anything that
//! does not decode into a grid of the expected shape reads as absent, and the
//! caller falls back to a fresh default grid.

use crate::error::Result;
use crate::model::{Card, Grid, Section, Variant};
use crate::store::DataStore;
use log::{debug, warn};

pub fn encode(grid: &Grid) -> Result<String> {
    let json = match grid.variant() {
        Variant::Small => serde_json::to_string(&grid.sections()[0].cards)?,
        Variant::Large => serde_json::to_string(grid.sections())?,
    };
    Ok(json)
}

/// Decodes a snapshot, or explains why it cannot be used.
pub fn decode(variant: Variant, raw: &str) -> Result<Grid> {
    match variant {
        Variant::Small => {
            let cards: Vec<Card> = serde_json::from_str(raw)?;
            Grid::from_cards(cards)
        }
        Variant::Large => {
            let sections: Vec<Section> = serde_json::from_str(raw)?;
            Grid::new(variant, sections)
        }
    }
}

/// Reads a variant's snapshot. Missing, unreadable or malformed state all
/// come back as `None`; nothing is surfaced to the caller.
pub fn load<S: DataStore>(store: &S, variant: Variant) -> Option<Grid> {
    let key = variant.storage_key();
    let raw = match store.read_slot(&key) {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            debug!("event=grid_load key={} status=absent", key);
            return None;
        }
        Err(err) => {
            warn!("event=grid_load key={} status=unreadable error={}", key, err);
            return None;
        }
    };
    match decode(variant, &raw) {
        Ok(grid) => {
            debug!("event=grid_load key={} status=ok", key);
            Some(grid)
        }
        Err(err) => {
            warn!("event=grid_load key={} status=malformed error={}", key, err);
            None
        }
    }
}

/// Writes the full snapshot, replacing whatever the slot held.
pub fn save<S: DataStore>(store: &mut S, grid: &Grid) -> Result<()> {
    let key = grid.variant().storage_key();
    let json = encode(grid)?;
    store.write_slot(&key, &json)?;
    debug!("event=grid_save key={} bytes={}", key, json.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defaults::{seeded_grid, Palette};
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;
    use crate::swap::swap;

    #[test]
    fn save_then_load_roundtrips_large_grid() {
        let mut store = InMemoryStore::new();
        let grid = swap(&seeded_grid(Variant::Large, &Palette::default()), 0, 40);
        save(&mut store, &grid).unwrap();
        assert_eq!(load(&store, Variant::Large), Some(grid));
    }

    #[test]
    fn save_then_load_roundtrips_small_grid() {
        let mut store = InMemoryStore::new();
        let grid = swap(&seeded_grid(Variant::Small, &Palette::default()), 2, 7);
        save(&mut store, &grid).unwrap();
        assert_eq!(load(&store, Variant::Small), Some(grid));
    }

    #[test]
    fn variants_use_separate_slots() {
        let fixture = StoreFixture::new().with_default_grid(Variant::Small);
        assert!(load(&fixture.store, Variant::Small).is_some());
        assert!(load(&fixture.store, Variant::Large).is_none());
    }

    #[test]
    fn small_layout_is_a_card_array() {
        let grid = seeded_grid(Variant::Small, &Palette::default());
        let value: serde_json::Value = serde_json::from_str(&encode(&grid).unwrap()).unwrap();
        let cards = value.as_array().unwrap();
        assert_eq!(cards.len(), 9);
        assert_eq!(cards[4]["title"], "Core Goal");
        assert_eq!(cards[4]["bgColor"], "#f04902");
    }

    #[test]
    fn large_layout_is_a_section_array() {
        let grid = seeded_grid(Variant::Large, &Palette::default());
        let value: serde_json::Value = serde_json::from_str(&encode(&grid).unwrap()).unwrap();
        let sections = value.as_array().unwrap();
        assert_eq!(sections.len(), 9);
        assert_eq!(sections[3]["sectionIndex"], 3);
        assert_eq!(sections[3]["cards"].as_array().unwrap().len(), 9);
    }

    #[test]
    fn missing_slot_is_absent() {
        let store = InMemoryStore::new();
        assert!(load(&store, Variant::Large).is_none());
    }

    #[test]
    fn non_json_is_absent() {
        let fixture = StoreFixture::new().with_raw_slot(Variant::Small, "{not json");
        assert!(load(&fixture.store, Variant::Small).is_none());
    }

    #[test]
    fn wrong_shape_is_absent() {
        let fixture = StoreFixture::new().with_raw_slot(Variant::Small, "[]");
        assert!(load(&fixture.store, Variant::Small).is_none());

        // a small snapshot is not a large one
        let small = encode(&seeded_grid(Variant::Small, &Palette::default())).unwrap();
        let fixture = StoreFixture::new().with_raw_slot(Variant::Large, &small);
        assert!(load(&fixture.store, Variant::Large).is_none());
    }

    #[test]
    fn invalid_color_is_absent() {
        let grid = seeded_grid(Variant::Small, &Palette::default());
        let raw = encode(&grid).unwrap().replace("#f04902", "orange");
        let fixture = StoreFixture::new().with_raw_slot(Variant::Small, &raw);
        assert!(load(&fixture.store, Variant::Small).is_none());
    }
}
