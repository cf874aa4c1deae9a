use crate::model::Grid;

/// Owns the current grid. Every mutation hands in a complete replacement;
/// there are no partial updates.
#[derive(Debug, Clone)]
pub struct GridStore {
    grid: Grid,
}

impl GridStore {
    pub fn new(grid: Grid) -> Self {
        Self { grid }
    }

    pub fn get(&self) -> &Grid {
        &self.grid
    }

    /// Swaps in a new grid and returns the previous one.
    ///
    /// # Panics
    ///
    /// If the replacement belongs to a different variant.
    pub fn replace(&mut self, grid: Grid) -> Grid {
        assert_eq!(
            grid.variant(),
            self.grid.variant(),
            "grid store holds a {} grid",
            self.grid.variant()
        );
        std::mem::replace(&mut self.grid, grid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defaults::{default_grid, seeded_grid, Palette};
    use crate::model::Variant;

    #[test]
    fn replace_returns_previous_grid() {
        let palette = Palette::default();
        let mut store = GridStore::new(default_grid(Variant::Large, &palette));
        let previous = store.replace(seeded_grid(Variant::Large, &palette));
        assert_eq!(previous, default_grid(Variant::Large, &palette));
        assert_eq!(store.get(), &seeded_grid(Variant::Large, &palette));
    }

    #[test]
    #[should_panic(expected = "grid store holds")]
    fn replace_rejects_other_variant() {
        let palette = Palette::default();
        let mut store = GridStore::new(default_grid(Variant::Large, &palette));
        store.replace(default_grid(Variant::Small, &palette));
    }
}
