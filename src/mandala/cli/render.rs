//! # Rendering Module
//!
//! Turns `CmdResult` data into terminal text. Layout math (visual placement,
//! width, truncation, padding) is done on plain strings first; styles are
//! applied last so that alignment never depends on escape codes.
//!
//! Every public `render_*` function has an `_internal` twin taking
//! `use_color: Option<bool>` so tests can pin the output to plain text.

use super::styles::{names, MANDALA_THEME};
use colored::Colorize;
use mandala::api::{CmdMessage, GridInfo, MessageLevel};
use mandala::config::{MandalaConfig, CONFIG_KEYS};
use mandala::index::CellView;
use mandala::model::{Color, GridShape};
use mandala::sync::mirror_partner;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Width of one cell's label, index included.
pub const CELL_WIDTH: usize = 16;
pub const LOCK_MARKER: &str = "◆";
const SWATCH: &str = "  ";
const INDEX_WIDTH: usize = 2;

/// Where a cell is drawn. Sections tile the board three to a row; cards
/// tile their section three to a row.
fn visual_position(section: usize, card: usize) -> (usize, usize) {
    ((section / 3) * 3 + card / 3, (section % 3) * 3 + card % 3)
}

pub fn render_grid(shape: &GridShape, views: &[CellView]) -> String {
    render_grid_internal(shape, views, None)
}

fn render_grid_internal(shape: &GridShape, views: &[CellView], use_color: Option<bool>) -> String {
    let blocks = if shape.sections > 1 { 3 } else { 1 };
    let side = blocks * 3;
    let mut board: Vec<Vec<Option<&CellView>>> = vec![vec![None; side]; side];
    for view in views {
        let (row, col) = visual_position(view.address.section, view.address.card);
        if row < side && col < side {
            board[row][col] = Some(view);
        }
    }

    let swatch_width = if swatches_enabled(use_color) { SWATCH.width() } else { 0 };
    let column_width = swatch_width + CELL_WIDTH;
    let block_rule = "─".repeat(3 * column_width + 2);
    let separator = vec![block_rule; blocks].join("─┼─");

    let mut output = String::new();
    for (row_index, row) in board.iter().enumerate() {
        if row_index > 0 && row_index % 3 == 0 {
            output.push_str(&separator);
            output.push('\n');
        }
        let cells: Vec<String> = row
            .iter()
            .map(|cell| match cell {
                Some(view) => render_cell(view, use_color),
                None => " ".repeat(column_width),
            })
            .collect();
        let line = cells
            .chunks(3)
            .map(|chunk| chunk.join(" "))
            .collect::<Vec<_>>()
            .join(" │ ");
        output.push_str(line.trim_end());
        output.push('\n');
    }
    output
}

fn render_cell(view: &CellView, use_color: Option<bool>) -> String {
    let label = if view.is_draggable {
        view.card.title.clone()
    } else {
        format!("{} {}", LOCK_MARKER, view.card.title)
    };
    let label = truncate_to_width(&label, CELL_WIDTH - INDEX_WIDTH - 1);
    let padding = " ".repeat(CELL_WIDTH - INDEX_WIDTH - 1 - label.width());

    let title_style = if view.is_draggable {
        names::TITLE
    } else {
        names::CORE_TITLE
    };
    format!(
        "{}{} {}{}",
        swatch(&view.card.bg_color, use_color),
        MANDALA_THEME.paint(
            names::INDEX,
            &format!("{:>width$}", view.global_index, width = INDEX_WIDTH),
            use_color
        ),
        MANDALA_THEME.paint(title_style, &label, use_color),
        padding
    )
}

fn swatches_enabled(use_color: Option<bool>) -> bool {
    use_color.unwrap_or_else(|| colored::control::SHOULD_COLORIZE.should_colorize())
}

fn swatch(color: &Color, use_color: Option<bool>) -> String {
    if !swatches_enabled(use_color) {
        return String::new();
    }
    let (r, g, b) = color.rgb();
    SWATCH.on_truecolor(r, g, b).to_string()
}

/// Full cards, one block per cell.
pub fn render_full_cells(shape: &GridShape, views: &[CellView]) -> String {
    render_full_cells_internal(shape, views, None)
}

fn render_full_cells_internal(
    shape: &GridShape,
    views: &[CellView],
    use_color: Option<bool>,
) -> String {
    if views.is_empty() {
        return format!("{}\n", MANDALA_THEME.paint(names::MUTED, "No cells.", use_color));
    }

    let mut output = String::new();
    for (i, view) in views.iter().enumerate() {
        if i > 0 {
            output.push_str("\n================================\n\n");
        }
        output.push_str(&format!(
            "{} {}\n",
            MANDALA_THEME.paint(names::INDEX, &view.global_index.to_string(), use_color),
            MANDALA_THEME.paint(names::CORE_TITLE, &view.card.title, use_color)
        ));

        let mut details = vec![
            format!("cell {}", view.address),
            view.card.bg_color.to_string(),
        ];
        if !view.is_draggable {
            details.push(MANDALA_THEME.paint(names::LOCKED, "center", use_color));
        }
        if let Some(partner) = mirror_partner(shape, view.address) {
            details.push(format!("mirrors {}", partner));
        }
        output.push_str(&MANDALA_THEME.paint(names::ADDRESS, &details.join("  "), use_color));
        output.push_str("\n--------------------------------\n");
        if view.card.content.is_blank() {
            output.push_str(&MANDALA_THEME.paint(names::MUTED, "(no notes)", use_color));
        } else {
            output.push_str(&view.card.content.plain_text());
        }
        output.push('\n');
    }
    output
}

pub fn render_grid_info(info: &GridInfo) -> String {
    let lines = vec![
        format!("variant = {}", info.variant),
        format!("cells = {}", info.cell_count),
        format!("storage key = {}", info.storage_key),
        format!("storage path = {}", info.storage_path.display()),
        format!("capture region = {}", info.capture_region_id),
    ];
    render_text_list(&lines, "")
}

pub fn render_config(config: &MandalaConfig) -> String {
    let lines: Vec<String> = CONFIG_KEYS
        .iter()
        .map(|key| format!("{} = {}", key, config.get(key).unwrap_or_default()))
        .collect();
    render_text_list(&lines, "No configuration values.")
}

pub fn render_text_list(lines: &[String], empty_message: &str) -> String {
    render_text_list_internal(lines, empty_message, None)
}

fn render_text_list_internal(
    lines: &[String],
    empty_message: &str,
    use_color: Option<bool>,
) -> String {
    if lines.is_empty() {
        if empty_message.is_empty() {
            return String::new();
        }
        return format!("{}\n", MANDALA_THEME.paint(names::MUTED, empty_message, use_color));
    }
    lines.iter().map(|line| format!("{}\n", line)).collect()
}

pub fn render_messages(messages: &[CmdMessage]) -> String {
    render_messages_internal(messages, None)
}

fn render_messages_internal(messages: &[CmdMessage], use_color: Option<bool>) -> String {
    messages
        .iter()
        .map(|msg| {
            let style = match msg.level {
                MessageLevel::Info => names::INFO,
                MessageLevel::Success => names::SUCCESS,
                MessageLevel::Warning => names::WARNING,
                MessageLevel::Error => names::ERROR,
            };
            format!("{}\n", MANDALA_THEME.paint(style, &msg.content, use_color))
        })
        .collect()
}

pub fn print_messages(messages: &[CmdMessage]) {
    let output = render_messages(messages);
    if !output.is_empty() {
        print!("{}", output);
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    let limit = max_width.saturating_sub(1);

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > limit {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use mandala::defaults::{seeded_grid, Palette};
    use mandala::index::cell_views;
    use mandala::model::Variant;
    use std::path::PathBuf;

    fn plain_grid(variant: Variant) -> String {
        let grid = seeded_grid(variant, &Palette::default());
        render_grid_internal(&grid.shape(), &cell_views(&grid), Some(false))
    }

    #[test]
    fn test_visual_position() {
        assert_eq!(visual_position(0, 0), (0, 0));
        assert_eq!(visual_position(0, 8), (2, 2));
        assert_eq!(visual_position(4, 4), (4, 4));
        assert_eq!(visual_position(2, 3), (1, 6));
        assert_eq!(visual_position(8, 8), (8, 8));
    }

    #[test]
    fn test_render_small_grid() {
        let output = plain_grid(Variant::Small);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with(" 0 Goal 0"));
        assert!(lines[1].contains(" 4 ◆ Core Goal"));
        assert!(lines[2].contains(" 8 Goal 8"));
    }

    #[test]
    fn test_render_large_grid_layout() {
        let output = plain_grid(Variant::Large);
        let lines: Vec<&str> = output.lines().collect();
        // nine rows plus two block separators
        assert_eq!(lines.len(), 11);
        assert!(lines[3].contains('┼'));
        let middle = lines[5];
        assert!(middle.contains("40 ◆ Core Goal"));
        assert_eq!(middle.matches('│').count(), 2);
        // (2,3) sits on visual row 1
        assert!(lines[1].contains("21 Goal 3"));
    }

    #[test]
    fn test_render_cell_truncates_long_titles() {
        let mut grid_views = cell_views(&seeded_grid(Variant::Small, &Palette::default()));
        grid_views[0].card.title = "A very long goal title indeed".to_string();
        let cell = render_cell(&grid_views[0], Some(false));
        assert_eq!(cell.width(), CELL_WIDTH);
        assert!(cell.contains('…'));
    }

    #[test]
    fn test_render_full_cells() {
        let grid = seeded_grid(Variant::Large, &Palette::default());
        let views = cell_views(&grid);
        let output = render_full_cells_internal(&grid.shape(), &[views[38].clone()], Some(false));
        assert!(output.contains("38 Goal 2"));
        assert!(output.contains("cell 4.2"));
        assert!(output.contains("mirrors 2.4"));
        assert!(output.contains("Notes..."));
    }

    #[test]
    fn test_render_full_cells_marks_center() {
        let grid = seeded_grid(Variant::Small, &Palette::default());
        let views = cell_views(&grid);
        let output = render_full_cells_internal(&grid.shape(), &views[4..5], Some(false));
        assert!(output.contains("center"));
        assert!(!output.contains("mirrors"));
    }

    #[test]
    fn test_render_full_cells_empty() {
        let shape = Variant::Small.shape();
        assert!(render_full_cells_internal(&shape, &[], Some(false)).contains("No cells."));
    }

    #[test]
    fn test_render_grid_info() {
        let info = GridInfo {
            variant: Variant::Large,
            cell_count: 81,
            storage_key: "mandala-chart-9x9-sections".to_string(),
            storage_path: PathBuf::from("/data/mandala-chart-9x9-sections.json"),
            capture_region_id: "screenShot_9x9",
        };
        let output = render_grid_info(&info);
        assert!(output.contains("variant = 9x9"));
        assert!(output.contains("capture region = screenShot_9x9"));
    }

    #[test]
    fn test_render_text_list_empty() {
        let output = render_text_list_internal(&[], "Nothing here.", Some(false));
        assert_eq!(output, "Nothing here.\n");
    }

    #[test]
    fn test_render_messages_multiple() {
        let messages = vec![
            CmdMessage::info("Info message"),
            CmdMessage::warning("Warning message"),
            CmdMessage::error("Error message"),
        ];
        let output = render_messages_internal(&messages, Some(false));
        assert_eq!(output, "Info message\nWarning message\nError message\n");
    }

    #[test]
    fn test_truncate_to_width() {
        assert_eq!(truncate_to_width("short", 10), "short");
        assert_eq!(truncate_to_width("abcdefghij", 5), "abcd…");
        assert_eq!(truncate_to_width("目標目標目標", 5), "目標…");
    }
}
