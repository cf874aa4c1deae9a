//! Named styles for terminal output.
//!
//! Renderers ask for a style by what the text *is* (an index, a title, a
//! warning), never by color, so the look can change in one place.

use console::Style;
use once_cell::sync::Lazy;
use std::collections::HashMap;

pub mod names {
    pub const INDEX: &str = "index";
    pub const ADDRESS: &str = "address";
    pub const TITLE: &str = "title";
    pub const CORE_TITLE: &str = "core_title";
    pub const LOCKED: &str = "locked";
    pub const MUTED: &str = "muted";
    pub const INFO: &str = "info";
    pub const SUCCESS: &str = "success";
    pub const WARNING: &str = "warning";
    pub const ERROR: &str = "error";
}

#[derive(Default)]
pub struct Theme {
    styles: HashMap<&'static str, Style>,
}

impl Theme {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(mut self, name: &'static str, style: Style) -> Self {
        self.styles.insert(name, style);
        self
    }

    /// Applies the named style. `use_color` forces styling on or off; `None`
    /// leaves it to terminal detection. Unknown names render plain.
    pub fn paint(&self, name: &str, text: &str, use_color: Option<bool>) -> String {
        let style = self.styles.get(name).cloned().unwrap_or_else(Style::new);
        let style = match use_color {
            Some(c) => style.force_styling(c),
            None => style,
        };
        style.apply_to(text).to_string()
    }
}

pub static MANDALA_THEME: Lazy<Theme> = Lazy::new(|| {
    Theme::new()
        .add(names::INDEX, Style::new().yellow())
        .add(names::ADDRESS, Style::new().color256(245))
        .add(names::TITLE, Style::new())
        .add(names::CORE_TITLE, Style::new().bold())
        .add(names::LOCKED, Style::new().cyan())
        .add(names::MUTED, Style::new().color256(245).italic())
        .add(names::INFO, Style::new().dim())
        .add(names::SUCCESS, Style::new().green())
        .add(names::WARNING, Style::new().yellow())
        .add(names::ERROR, Style::new().red())
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paint_without_color_is_plain() {
        assert_eq!(MANDALA_THEME.paint(names::ERROR, "boom", Some(false)), "boom");
        assert_eq!(MANDALA_THEME.paint("nope", "x", Some(false)), "x");
    }

    #[test]
    fn paint_with_color_adds_escapes() {
        let painted = MANDALA_THEME.paint(names::SUCCESS, "ok", Some(true));
        assert!(painted.contains("\u{1b}["));
        assert!(painted.contains("ok"));
    }
}
