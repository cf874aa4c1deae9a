use crate::model::{Card, Color, Grid, RichText, Section, Variant};
use crate::sync::sync_all;
use serde::{Deserialize, Serialize};

pub const CORE_GOAL_TITLE: &str = "Core Goal";
pub const DEFAULT_CONTENT: &str = "Notes...";

/// Card positions that share an edge with the center card.
const EDGE_POSITIONS: [usize; 4] = [1, 3, 5, 7];

/// Colors used for a freshly generated center section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    pub main: Color,
    pub secondary: Color,
    pub tertiary: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            main: Color::from_static("#f04902"),
            secondary: Color::from_static("#ffa15c"),
            tertiary: Color::from_static("#ffcaa4"),
        }
    }
}

impl Palette {
    fn color_for(&self, card: usize, center_card: usize) -> &Color {
        if card == center_card {
            &self.main
        } else if EDGE_POSITIONS.contains(&card) {
            &self.secondary
        } else {
            &self.tertiary
        }
    }
}

fn default_title(card: usize, center_card: usize) -> String {
    if card == center_card {
        CORE_GOAL_TITLE.to_string()
    } else {
        format!("Goal {}", card)
    }
}

fn card_id(variant: Variant, section: usize, card: usize) -> String {
    match variant {
        Variant::Small => format!("card-{}", card),
        Variant::Large => format!("section-{}-card-{}", section, card),
    }
}

/// Generates the unsynchronized default grid. Output depends only on the
/// variant, the palette and each cell's address.
pub fn default_grid(variant: Variant, palette: &Palette) -> Grid {
    let shape = variant.shape();
    let white = Color::from_static(Color::WHITE);

    let sections = (0..shape.sections)
        .map(|section| {
            let cards = (0..shape.cards_per_section)
                .map(|card| {
                    let bg_color = if shape.is_center_section(section) {
                        palette.color_for(card, shape.center_card).clone()
                    } else {
                        white.clone()
                    };
                    Card::new(
                        card_id(variant, section, card),
                        default_title(card, shape.center_card),
                        RichText::from_static(DEFAULT_CONTENT),
                        bg_color,
                    )
                })
                .collect();
            Section {
                id: format!("section-{}", section),
                section_index: section,
                cards,
            }
        })
        .collect();

    Grid::from_trusted(variant, sections)
}

/// The default grid with every mirror seeded from the center section.
pub fn seeded_grid(variant: Variant, palette: &Palette) -> Grid {
    sync_all(&default_grid(variant, palette))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_default_colors_follow_palette() {
        let palette = Palette::default();
        let grid = default_grid(Variant::Small, &palette);
        let cards = &grid.sections()[0].cards;
        assert_eq!(cards.len(), 9);
        assert_eq!(cards[4].bg_color, palette.main);
        assert_eq!(cards[4].title, CORE_GOAL_TITLE);
        for i in [1, 3, 5, 7] {
            assert_eq!(cards[i].bg_color, palette.secondary);
        }
        for i in [0, 2, 6, 8] {
            assert_eq!(cards[i].bg_color, palette.tertiary);
        }
        assert_eq!(cards[0].id, "card-0");
        assert_eq!(cards[2].title, "Goal 2");
    }

    #[test]
    fn large_default_has_white_periphery() {
        let grid = default_grid(Variant::Large, &Palette::default());
        assert_eq!(grid.sections().len(), 9);
        assert_eq!(grid.card(0, 0).bg_color.as_str(), "#ffffff");
        assert_eq!(grid.card(0, 4).bg_color.as_str(), "#ffffff");
        assert_eq!(grid.card(2, 3).id, "section-2-card-3");
        assert_eq!(grid.sections()[7].id, "section-7");
    }

    #[test]
    fn seeded_grid_mirrors_center_section() {
        let palette = Palette::default();
        let grid = seeded_grid(Variant::Large, &palette);
        assert_eq!(grid.card(1, 4).bg_color, palette.secondary);
        assert_eq!(grid.card(1, 4).title, "Goal 1");
        assert_eq!(grid.card(1, 4).id, "section-1-card-4");
        assert_eq!(grid.card(0, 4).bg_color, palette.tertiary);
    }

    #[test]
    fn generation_is_deterministic() {
        let palette = Palette::default();
        assert_eq!(
            seeded_grid(Variant::Large, &palette),
            seeded_grid(Variant::Large, &palette)
        );
    }
}
