//! Marks and how they are decorated for display.
//!
//! The canvas stores bare [`Mark`]s. Turning a mark into something a terminal
//! can print is the job of a [`MarkFormatter`], so the grid itself never holds
//! escape codes and can be inspected in tests as plain characters.

use ratatui::style::Color;

/// A single cell value: a glyph and an optional display color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mark {
    pub glyph: char,
    pub color: Option<Color>,
}

impl Mark {
    /// The value every cell starts with.
    pub const BLANK: Mark = Mark {
        glyph: ' ',
        color: None,
    };

    pub fn new(glyph: char, color: Option<Color>) -> Self {
        Self { glyph, color }
    }

    /// A mark without color (trails are always drawn this way).
    pub fn plain(glyph: char) -> Self {
        Self { glyph, color: None }
    }

    pub fn is_blank(&self) -> bool {
        self.glyph == ' '
    }
}

impl Default for Mark {
    fn default() -> Self {
        Self::BLANK
    }
}

/// Turns a mark into the token printed for its cell.
pub trait MarkFormatter {
    fn decorate(&self, mark: &Mark) -> String;
}

/// Wraps colored marks in ANSI escape codes.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnsiFormatter;

impl MarkFormatter for AnsiFormatter {
    fn decorate(&self, mark: &Mark) -> String {
        match mark.color {
            Some(color) => {
                let code = color_to_ansi(color);
                if code.is_empty() {
                    mark.glyph.to_string()
                } else {
                    format!("{}{}{}", code, mark.glyph, ANSI_RESET)
                }
            }
            None => mark.glyph.to_string(),
        }
    }
}

/// Emits glyphs only. Used for headless output and `NO_COLOR`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainFormatter;

impl MarkFormatter for PlainFormatter {
    fn decorate(&self, mark: &Mark) -> String {
        mark.glyph.to_string()
    }
}

/// ANSI reset sequence
const ANSI_RESET: &str = "\x1b[0m";

/// Convert a ratatui Color to an ANSI escape code.
fn color_to_ansi(color: Color) -> &'static str {
    match color {
        Color::Black => "\x1b[30m",
        Color::Red => "\x1b[31m",
        Color::Green => "\x1b[32m",
        Color::Yellow => "\x1b[33m",
        Color::Blue => "\x1b[34m",
        Color::Magenta => "\x1b[35m",
        Color::Cyan => "\x1b[36m",
        Color::Gray => "\x1b[37m",
        Color::DarkGray => "\x1b[90m",
        Color::LightRed => "\x1b[91m",
        Color::LightGreen => "\x1b[92m",
        Color::LightYellow => "\x1b[93m",
        Color::LightBlue => "\x1b[94m",
        Color::LightMagenta => "\x1b[95m",
        Color::LightCyan => "\x1b[96m",
        Color::White => "\x1b[97m",
        Color::Reset => "\x1b[0m",
        // RGB and indexed colors are never produced by parse_color
        _ => "",
    }
}

/// Palette names, in the spelling used by config and program files.
const PALETTE: &[(&str, Color)] = &[
    ("black", Color::Black),
    ("red", Color::Red),
    ("green", Color::Green),
    ("yellow", Color::Yellow),
    ("blue", Color::Blue),
    ("magenta", Color::Magenta),
    ("cyan", Color::Cyan),
    ("white", Color::White),
    ("light_grey", Color::Gray),
    ("dark_grey", Color::DarkGray),
    ("light_red", Color::LightRed),
    ("light_green", Color::LightGreen),
    ("light_yellow", Color::LightYellow),
    ("light_blue", Color::LightBlue),
    ("light_magenta", Color::LightMagenta),
    ("light_cyan", Color::LightCyan),
];

/// Look up a palette color by name.
///
/// Case-insensitive; `-` and `_` are interchangeable and `gray` is accepted
/// for `grey`.
pub fn parse_color(name: &str) -> Option<Color> {
    let normalized = name.trim().to_lowercase().replace('-', "_").replace("gray", "grey");
    PALETTE
        .iter()
        .find(|(candidate, _)| *candidate == normalized)
        .map(|(_, color)| *color)
}

/// Palette name for a color, if it has one.
pub fn color_name(color: Color) -> Option<&'static str> {
    PALETTE
        .iter()
        .find(|(_, candidate)| *candidate == color)
        .map(|(name, _)| *name)
}

/// All accepted palette names, for help and error messages.
pub fn palette_names() -> impl Iterator<Item = &'static str> {
    PALETTE.iter().map(|(name, _)| *name)
}
