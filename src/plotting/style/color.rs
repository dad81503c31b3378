//! Colors as matplotlib accepts them: hex strings, named colors, the
//! `C0`-`C9` cycle, `tab:` names and single-letter format codes.

use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Color {
    Rgb(u8, u8, u8),
    /// Alpha in 0.0-1.0
    Rgba(u8, u8, u8, f64),
    /// Resolved at render time; unknown names are passed to SVG unchanged.
    Named(String),
}

/// Named colors understood beyond plain SVG/CSS names.
const NAMED: &[(&str, (u8, u8, u8))] = &[
    ("black", (0, 0, 0)),
    ("white", (255, 255, 255)),
    ("red", (255, 0, 0)),
    ("green", (0, 128, 0)),
    ("blue", (0, 0, 255)),
    ("yellow", (255, 255, 0)),
    ("cyan", (0, 255, 255)),
    ("magenta", (255, 0, 255)),
    ("orange", (255, 165, 0)),
    ("purple", (128, 0, 128)),
    ("brown", (165, 42, 42)),
    ("pink", (255, 192, 203)),
    ("gray", (128, 128, 128)),
    ("grey", (128, 128, 128)),
    ("lightgray", (211, 211, 211)),
    ("lightgrey", (211, 211, 211)),
    ("darkgray", (169, 169, 169)),
    ("darkgrey", (169, 169, 169)),
    ("navy", (0, 0, 128)),
    ("teal", (0, 128, 128)),
    ("olive", (128, 128, 0)),
    ("tan", (210, 180, 140)),
    ("c0", (0x1f, 0x77, 0xb4)),
    ("c1", (0xff, 0x7f, 0x0e)),
    ("c2", (0x2c, 0xa0, 0x2c)),
    ("c3", (0xd6, 0x27, 0x28)),
    ("c4", (0x94, 0x67, 0xbd)),
    ("c5", (0x8c, 0x56, 0x4b)),
    ("c6", (0xe3, 0x77, 0xc2)),
    ("c7", (0x7f, 0x7f, 0x7f)),
    ("c8", (0xbc, 0xbd, 0x22)),
    ("c9", (0x17, 0xbe, 0xcf)),
    ("tab:blue", (0x1f, 0x77, 0xb4)),
    ("tab:orange", (0xff, 0x7f, 0x0e)),
    ("tab:green", (0x2c, 0xa0, 0x2c)),
    ("tab:red", (0xd6, 0x27, 0x28)),
    ("tab:purple", (0x94, 0x67, 0xbd)),
    ("tab:brown", (0x8c, 0x56, 0x4b)),
    ("tab:pink", (0xe3, 0x77, 0xc2)),
    ("tab:gray", (0x7f, 0x7f, 0x7f)),
    ("tab:olive", (0xbc, 0xbd, 0x22)),
    ("tab:cyan", (0x17, 0xbe, 0xcf)),
];

fn lookup_named(name: &str) -> Option<(u8, u8, u8)> {
    let name = name.trim().to_ascii_lowercase();
    NAMED.iter().find(|(n, _)| *n == name).map(|&(_, rgb)| rgb)
}

impl Color {
    pub const BLACK: Color = Color::Rgb(0, 0, 0);
    pub const WHITE: Color = Color::Rgb(255, 255, 255);
    pub const RED: Color = Color::Rgb(255, 0, 0);
    pub const LIGHT_GRAY: Color = Color::Rgb(211, 211, 211);
    pub const TRANSPARENT: Color = Color::Rgba(0, 0, 0, 0.0);

    pub fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
        Color::Rgba(r, g, b, a.clamp(0.0, 1.0))
    }

    /// Parse `#rgb`, `#rrggbb` or `#rrggbbaa` (the `#` is optional).
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim_start_matches('#');
        if !hex.is_ascii() {
            return None;
        }
        let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        match hex.len() {
            3 => {
                let mut channels = hex.chars().map(|c| c.to_digit(16).map(|d| (d * 17) as u8));
                Some(Color::Rgb(channels.next()??, channels.next()??, channels.next()??))
            }
            6 => Some(Color::Rgb(byte(0)?, byte(2)?, byte(4)?)),
            8 => Some(Color::Rgba(byte(0)?, byte(2)?, byte(4)?, byte(6)? as f64 / 255.0)),
            _ => None,
        }
    }

    pub fn to_svg_string(&self) -> String {
        match self {
            Color::Rgb(r, g, b) => format!("rgb({},{},{})", r, g, b),
            Color::Rgba(r, g, b, a) => format!("rgba({},{},{},{})", r, g, b, a),
            Color::Named(name) => match lookup_named(name) {
                Some((r, g, b)) => format!("rgb({},{},{})", r, g, b),
                None => name.clone(),
            },
        }
    }

    /// Lower-case `#rrggbb`; unknown names map to black.
    pub fn to_hex(&self) -> String {
        let (r, g, b) = self.to_rgb();
        format!("#{:02x}{:02x}{:02x}", r, g, b)
    }

    pub fn to_rgb(&self) -> (u8, u8, u8) {
        match self {
            Color::Rgb(r, g, b) | Color::Rgba(r, g, b, _) => (*r, *g, *b),
            Color::Named(name) => lookup_named(name).unwrap_or((0, 0, 0)),
        }
    }

    pub fn alpha(&self) -> f64 {
        match self {
            Color::Rgba(_, _, _, a) => *a,
            Color::Rgb(..) | Color::Named(_) => 1.0,
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        // matplotlib's C0
        Color::Rgb(0x1f, 0x77, 0xb4)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_svg_string())
    }
}

impl From<&str> for Color {
    fn from(s: &str) -> Self {
        let looks_hex = s.starts_with('#') || (s.len() >= 6 && s.chars().all(|c| c.is_ascii_hexdigit()));
        if looks_hex {
            if let Some(c) = Color::from_hex(s) {
                return c;
            }
        }
        Color::Named(s.to_string())
    }
}

impl From<String> for Color {
    fn from(s: String) -> Self {
        Color::from(s.as_str())
    }
}

impl From<&String> for Color {
    fn from(s: &String) -> Self {
        Color::from(s.as_str())
    }
}

impl From<(u8, u8, u8)> for Color {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Color::Rgb(r, g, b)
    }
}

/// The single-letter color codes of matplotlib format strings.
pub fn from_format_char(c: char) -> Option<Color> {
    let rgb = match c {
        'b' => (0, 0, 255),
        'g' => (0, 128, 0),
        'r' => (255, 0, 0),
        'c' => (0, 191, 191),
        'm' => (191, 0, 191),
        'y' => (191, 191, 0),
        'k' => (0, 0, 0),
        'w' => (255, 255, 255),
        _ => return None,
    };
    Some(rgb.into())
}
