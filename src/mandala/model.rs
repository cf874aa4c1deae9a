use crate::error::{MandalaError, Result};
use pulldown_cmark::{Event, Parser, TagEnd};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A card background color, carried as `#rgb` or `#rrggbb` text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color(String);

impl Color {
    pub const WHITE: &'static str = "#ffffff";

    /// For literals already known to be valid.
    pub(crate) fn from_static(s: &'static str) -> Self {
        debug_assert!(Color::from_str(s).is_ok(), "invalid color literal {}", s);
        Color(s.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Expands the color into its red, green and blue channels.
    pub fn rgb(&self) -> (u8, u8, u8) {
        let hex = &self.0[1..];
        let channel = |s: &str| u8::from_str_radix(s, 16).unwrap_or(0);
        if hex.len() == 3 {
            let digit = |i: usize| channel(&hex[i..i + 1].repeat(2));
            (digit(0), digit(1), digit(2))
        } else {
            (channel(&hex[0..2]), channel(&hex[2..4]), channel(&hex[4..6]))
        }
    }
}

impl FromStr for Color {
    type Err = MandalaError;

    fn from_str(s: &str) -> Result<Self> {
        let hex = s
            .strip_prefix('#')
            .ok_or_else(|| MandalaError::InvalidColor(format!("'{}' must start with '#'", s)))?;
        if !matches!(hex.len(), 3 | 6) || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(MandalaError::InvalidColor(format!(
                "'{}' is not a #rgb or #rrggbb color",
                s
            )));
        }
        Ok(Color(s.to_string()))
    }
}

impl TryFrom<String> for Color {
    type Error = MandalaError;

    fn try_from(value: String) -> Result<Self> {
        Color::from_str(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.0
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The serialized document held by a card. Markdown and HTML markup are both
/// accepted; only control characters are rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RichText(String);

impl RichText {
    pub(crate) fn from_static(s: &'static str) -> Self {
        RichText(s.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }

    /// Strips markup, keeping one line per block.
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        for event in Parser::new(&self.0) {
            match event {
                Event::Text(text) | Event::Code(text) => out.push_str(&text),
                Event::Html(html) | Event::InlineHtml(html) => out.push_str(&strip_tags(&html)),
                Event::SoftBreak => out.push(' '),
                Event::HardBreak
                | Event::End(TagEnd::Paragraph)
                | Event::End(TagEnd::Heading(_))
                | Event::End(TagEnd::Item) => out.push('\n'),
                _ => {}
            }
        }
        out.lines()
            .map(|line| line.split_whitespace().collect::<Vec<_>>().join(" "))
            .filter(|line| !line.is_empty())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn strip_tags(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut in_tag = false;
    for c in html.chars() {
        match c {
            '<' => in_tag = true,
            '>' if in_tag => {
                in_tag = false;
                out.push(' ');
            }
            _ if !in_tag => out.push(c),
            _ => {}
        }
    }
    out
}

impl FromStr for RichText {
    type Err = MandalaError;

    fn from_str(s: &str) -> Result<Self> {
        if let Some(bad) = s
            .chars()
            .find(|c| c.is_control() && !matches!(c, '\n' | '\r' | '\t'))
        {
            return Err(MandalaError::InvalidRichText(format!(
                "control character U+{:04X} is not allowed",
                bad as u32
            )));
        }
        Ok(RichText(s.to_string()))
    }
}

impl TryFrom<String> for RichText {
    type Error = MandalaError;

    fn try_from(value: String) -> Result<Self> {
        RichText::from_str(&value)
    }
}

impl From<RichText> for String {
    fn from(text: RichText) -> Self {
        text.0
    }
}

impl fmt::Display for RichText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Titles render on a single line, so no control characters at all.
pub fn validate_title(title: &str) -> Result<()> {
    match title.chars().find(|c| c.is_control()) {
        Some(bad) => Err(MandalaError::InvalidTitle(format!(
            "control character U+{:04X} is not allowed",
            bad as u32
        ))),
        None => Ok(()),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub id: String,
    pub title: String,
    pub content: RichText,
    pub bg_color: Color,
}

impl Card {
    pub fn new(id: impl Into<String>, title: impl Into<String>, content: RichText, bg_color: Color) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            content,
            bg_color,
        }
    }

    /// Copies title, content and color from `source`. The id is left alone.
    pub fn copy_face_from(&mut self, source: &Card) {
        self.title = source.title.clone();
        self.content = source.content.clone();
        self.bg_color = source.bg_color.clone();
    }

    pub fn same_face(&self, other: &Card) -> bool {
        self.title == other.title && self.content == other.content && self.bg_color == other.bg_color
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    pub id: String,
    pub section_index: usize,
    pub cards: Vec<Card>,
}

/// Dimensions and center designations of a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridShape {
    pub sections: usize,
    pub cards_per_section: usize,
    pub center_section: usize,
    pub center_card: usize,
}

impl GridShape {
    pub fn cell_count(&self) -> usize {
        self.sections * self.cards_per_section
    }

    /// Mirroring only exists when every center-section card has a section of its own.
    pub fn has_periphery(&self) -> bool {
        self.sections > 1 && self.sections == self.cards_per_section
    }

    pub fn is_center_section(&self, section: usize) -> bool {
        section == self.center_section
    }

    pub fn is_center_card(&self, card: usize) -> bool {
        card == self.center_card
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Variant {
    /// One section of nine cards.
    Small,
    /// Nine sections of nine cards.
    Large,
}

impl Variant {
    const NAME_PREFIX: &'static str = "mandala-chart";

    pub fn shape(self) -> GridShape {
        match self {
            Variant::Small => GridShape {
                sections: 1,
                cards_per_section: 9,
                center_section: 0,
                center_card: 4,
            },
            Variant::Large => GridShape {
                sections: 9,
                cards_per_section: 9,
                center_section: 4,
                center_card: 4,
            },
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Variant::Small => "3x3",
            Variant::Large => "9x9",
        }
    }

    pub fn name(self) -> String {
        format!("{}-{}", Self::NAME_PREFIX, self.label())
    }

    /// Key of the key-value slot holding this variant's snapshot.
    pub fn storage_key(self) -> String {
        match self {
            Variant::Small => format!("{}-cards", self.name()),
            Variant::Large => format!("{}-sections", self.name()),
        }
    }

    /// Identifier of the region an external capture utility exports.
    pub fn capture_region_id(self) -> &'static str {
        match self {
            Variant::Small => "screenShot_3x3",
            Variant::Large => "screenShot_9x9",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Variant {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "3x3" | "small" => Ok(Variant::Small),
            "9x9" | "large" => Ok(Variant::Large),
            other => Err(format!("Unknown variant '{}' (expected 3x3 or 9x9)", other)),
        }
    }
}

impl TryFrom<String> for Variant {
    type Error = String;

    fn try_from(value: String) -> std::result::Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Variant> for String {
    fn from(variant: Variant) -> Self {
        variant.label().to_string()
    }
}

/// The whole board. Only constructible with a valid shape for its variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    variant: Variant,
    sections: Vec<Section>,
}

impl Grid {
    pub fn new(variant: Variant, sections: Vec<Section>) -> Result<Self> {
        let shape = variant.shape();
        if sections.len() != shape.sections {
            return Err(MandalaError::Shape(format!(
                "{} expects {} sections, got {}",
                variant,
                shape.sections,
                sections.len()
            )));
        }
        for (position, section) in sections.iter().enumerate() {
            if section.section_index != position {
                return Err(MandalaError::Shape(format!(
                    "section at position {} claims index {}",
                    position, section.section_index
                )));
            }
            if section.cards.len() != shape.cards_per_section {
                return Err(MandalaError::Shape(format!(
                    "section {} holds {} cards, expected {}",
                    position,
                    section.cards.len(),
                    shape.cards_per_section
                )));
            }
        }
        Ok(Self { variant, sections })
    }

    /// For sections generated from the variant's own shape.
    pub(crate) fn from_trusted(variant: Variant, sections: Vec<Section>) -> Self {
        debug_assert!(Self::new(variant, sections.clone()).is_ok());
        Self { variant, sections }
    }

    /// Builds a small grid from its flat card list.
    pub fn from_cards(cards: Vec<Card>) -> Result<Self> {
        Self::new(
            Variant::Small,
            vec![Section {
                id: "section-0".to_string(),
                section_index: 0,
                cards,
            }],
        )
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn shape(&self) -> GridShape {
        self.variant.shape()
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn card(&self, section: usize, card: usize) -> &Card {
        &self.sections[section].cards[card]
    }

    pub(crate) fn card_mut(&mut self, section: usize, card: usize) -> &mut Card {
        &mut self.sections[section].cards[card]
    }

    pub(crate) fn sections_mut(&mut self) -> &mut [Section] {
        &mut self.sections
    }
}
