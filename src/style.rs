use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{MicronError, MicronResult};

/// Palette shared by foreground and background styles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Red,
    Orange,
    Yellow,
    Green,
    Blue,
    Indigo,
    Violet,
    White,
    DarkGrey,
    DarkerGrey,
    Grey,
    LightGrey,
    Black,
}

impl Color {
    pub const ALL: [Color; 13] = [
        Color::Red,
        Color::Orange,
        Color::Yellow,
        Color::Green,
        Color::Blue,
        Color::Indigo,
        Color::Violet,
        Color::White,
        Color::DarkGrey,
        Color::DarkerGrey,
        Color::Grey,
        Color::LightGrey,
        Color::Black,
    ];

    /// Hex code used after `` `F ``
    pub fn foreground_hex(self) -> &'static str {
        match self {
            Color::Red => "f00",
            Color::Orange => "fa5",
            Color::Yellow => "ff0",
            Color::Green => "0f0",
            Color::Blue => "00f",
            Color::Indigo => "309",
            Color::Violet => "90f",
            Color::White => "fff",
            Color::DarkGrey => "555",
            Color::DarkerGrey => "222",
            Color::Grey => "888",
            Color::LightGrey => "bbb",
            Color::Black => "000",
        }
    }

    /// Hex code used after `` `B ``. Differs from the foreground code for darker grey.
    pub fn background_hex(self) -> &'static str {
        match self {
            Color::DarkerGrey => "333",
            other => other.foreground_hex(),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Orange => "orange",
            Color::Yellow => "yellow",
            Color::Green => "green",
            Color::Blue => "blue",
            Color::Indigo => "indigo",
            Color::Violet => "violet",
            Color::White => "white",
            Color::DarkGrey => "dark-grey",
            Color::DarkerGrey => "darker-grey",
            Color::Grey => "grey",
            Color::LightGrey => "light-grey",
            Color::Black => "black",
        }
    }

    fn from_name(name: &str) -> Option<Color> {
        Color::ALL.into_iter().find(|c| c.name() == name)
    }
}

/// A single token of the closed Micron style vocabulary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Style {
    Foreground(Color),
    Background(Color),
    Center,
    Left,
    Right,
    Reset,
    Bold,
    Italic,
    Underline,
}

impl Style {
    /// Line styles affect the whole rendered line and are emitted as a prefix.
    pub fn is_line(self) -> bool {
        matches!(self, Style::Center | Style::Left | Style::Right | Style::Reset)
    }

    pub fn is_inline(self) -> bool {
        !self.is_line()
    }

    /// Escape body emitted after the backtick when the style is opened
    fn code(self) -> String {
        match self {
            Style::Foreground(c) => format!("F{}", c.foreground_hex()),
            Style::Background(c) => format!("B{}", c.background_hex()),
            Style::Center => "c".to_string(),
            Style::Left => "l".to_string(),
            Style::Right => "r".to_string(),
            Style::Reset => "a".to_string(),
            Style::Bold => "!".to_string(),
            Style::Italic => "*".to_string(),
            Style::Underline => "_".to_string(),
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Style::Foreground(c) => write!(f, "fg-{}", c.name()),
            Style::Background(c) => write!(f, "bg-{}", c.name()),
            Style::Center => f.write_str("center"),
            Style::Left => f.write_str("left"),
            Style::Right => f.write_str("right"),
            Style::Reset => f.write_str("reset"),
            Style::Bold => f.write_str("bold"),
            Style::Italic => f.write_str("italic"),
            Style::Underline => f.write_str("underline"),
        }
    }
}

impl FromStr for Style {
    type Err = MicronError;

    fn from_str(token: &str) -> MicronResult<Self> {
        let style = match token {
            "center" => Style::Center,
            "left" => Style::Left,
            "right" => Style::Right,
            "reset" => Style::Reset,
            "bold" => Style::Bold,
            "italic" => Style::Italic,
            "underline" => Style::Underline,
            _ => {
                let parsed = if let Some(name) = token.strip_prefix("fg-") {
                    Color::from_name(name).map(Style::Foreground)
                } else if let Some(name) = token.strip_prefix("bg-") {
                    Color::from_name(name).map(Style::Background)
                } else {
                    None
                };
                return parsed.ok_or_else(|| MicronError::InvalidStyle {
                    token: token.to_string(),
                    reason: "expected center, left, right, reset, bold, italic, underline, \
                             fg-<color> or bg-<color>"
                        .to_string(),
                });
            }
        };
        Ok(style)
    }
}

impl TryFrom<String> for Style {
    type Error = MicronError;

    fn try_from(value: String) -> MicronResult<Self> {
        value.parse()
    }
}

impl From<Style> for String {
    fn from(style: Style) -> Self {
        style.to_string()
    }
}

/// Ordered, deduplicated list of styles attached to a node.
///
/// Empty means "inherit from the ancestor". First occurrence wins when a
/// token is repeated, so `[bold, center, bold]` and `[bold, center]` compare
/// equal. Reordered lists are still considered different.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Vec<Style>", into = "Vec<Style>")]
pub struct StyleSet(Vec<Style>);

impl StyleSet {
    pub const EMPTY: StyleSet = StyleSet(Vec::new());

    pub fn new<I: IntoIterator<Item = Style>>(styles: I) -> Self {
        let mut canonical: Vec<Style> = Vec::new();
        for style in styles {
            if !canonical.contains(&style) {
                canonical.push(style);
            }
        }
        StyleSet(canonical)
    }

    pub fn empty() -> Self {
        Self::EMPTY
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[Style] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Style> {
        self.0.iter()
    }

    pub fn line_styles(&self) -> impl Iterator<Item = Style> + '_ {
        self.0.iter().copied().filter(|s| s.is_line())
    }

    pub fn inline_styles(&self) -> impl Iterator<Item = Style> + '_ {
        self.0.iter().copied().filter(|s| s.is_inline())
    }

    pub fn has_line_style(&self) -> bool {
        self.0.iter().any(|s| s.is_line())
    }

    /// `self` when set, otherwise the inherited style.
    pub fn or_inherited<'a>(&'a self, inherited: &'a StyleSet) -> &'a StyleSet {
        if self.is_empty() {
            inherited
        } else {
            self
        }
    }
}

impl From<Vec<Style>> for StyleSet {
    fn from(styles: Vec<Style>) -> Self {
        StyleSet::new(styles)
    }
}

impl<const N: usize> From<[Style; N]> for StyleSet {
    fn from(styles: [Style; N]) -> Self {
        StyleSet::new(styles)
    }
}

impl From<StyleSet> for Vec<Style> {
    fn from(set: StyleSet) -> Self {
        set.0
    }
}

impl FromIterator<Style> for StyleSet {
    fn from_iter<I: IntoIterator<Item = Style>>(iter: I) -> Self {
        StyleSet::new(iter)
    }
}

impl<'a> IntoIterator for &'a StyleSet {
    type Item = &'a Style;
    type IntoIter = std::slice::Iter<'a, Style>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Wrap `text` in the escapes for `styles`.
///
/// Line styles become a prefix. Inline styles wrap the text in the given
/// order, each one wrapping the result of the previous. Colors are only
/// closed when `reset_after` is set; emphasis toggles always close.
pub fn apply_style(text: &str, styles: &StyleSet, reset_after: bool) -> String {
    if styles.is_empty() {
        return if reset_after {
            format!("{}`f`b", text)
        } else {
            text.to_string()
        };
    }

    let line_prefix: String = styles.line_styles().map(|s| format!("`{}", s.code())).collect();

    let mut result = text.to_string();
    for style in styles.inline_styles() {
        result = match style {
            Style::Foreground(_) => {
                let close = if reset_after { "`f" } else { "" };
                format!("`{}{}{}", style.code(), result, close)
            }
            Style::Background(_) => {
                let close = if reset_after { "`b" } else { "" };
                format!("`{}{}{}", style.code(), result, close)
            }
            _ => {
                let toggle = style.code();
                format!("`{}{}`{}", toggle, result, toggle)
            }
        };
    }

    line_prefix + &result
}

/// Fragment returned after a node whose own style differs from the ambient one.
///
/// Neutralises colors, drops an alignment the node introduced when the
/// ambient style has none, then re-opens the ambient style.
pub fn restore_ambient(own: &StyleSet, ambient: &StyleSet) -> String {
    let mut fragment = String::from("`f`b");
    if own.has_line_style() && !ambient.has_line_style() {
        fragment.push_str("`a");
    }
    fragment.push_str(&apply_style("", ambient, false));
    fragment
}
