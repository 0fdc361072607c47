use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use tuirealm::props::Color;

/// The user's light/dark choice.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    #[default]
    Light,
    Dark,
}

impl ThemePreference {
    pub fn toggled(self) -> Self {
        match self {
            ThemePreference::Light => ThemePreference::Dark,
            ThemePreference::Dark => ThemePreference::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ThemePreference::Light => "light",
            ThemePreference::Dark => "dark",
        }
    }

    /// Glyph shown by the navbar toggle.
    pub fn icon(self) -> &'static str {
        match self {
            ThemePreference::Light => "☀",
            ThemePreference::Dark => "☾",
        }
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemePreference {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(ThemePreference::Light),
            "dark" => Ok(ThemePreference::Dark),
            other => Err(format!("unknown theme '{other}', expected light or dark")),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeMetadata {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeColors {
    // === Surfaces ===
    pub background: String,
    pub surface: String,
    pub border: String,

    // === Text ===
    pub text_primary: String,
    pub text_muted: String,

    // === Accents ===
    pub primary_accent: String,
    pub secondary_accent: String,

    // === Selection ===
    pub selection_bg: String,
    pub selection_fg: String,

    // === Skill bars ===
    pub bar_track: String,
    pub bar_fill: String,

    // === Status ===
    pub status_success: String,
    pub status_error: String,
    pub status_info: String,

    // === Shortcut hints ===
    pub shortcut_key: String,
    pub shortcut_description: String,
}

impl ThemeColors {
    /// `(key, value)` pairs in declaration order.
    pub fn entries(&self) -> [(&'static str, &str); 16] {
        [
            ("background", &self.background),
            ("surface", &self.surface),
            ("border", &self.border),
            ("text_primary", &self.text_primary),
            ("text_muted", &self.text_muted),
            ("primary_accent", &self.primary_accent),
            ("secondary_accent", &self.secondary_accent),
            ("selection_bg", &self.selection_bg),
            ("selection_fg", &self.selection_fg),
            ("bar_track", &self.bar_track),
            ("bar_fill", &self.bar_fill),
            ("status_success", &self.status_success),
            ("status_error", &self.status_error),
            ("status_info", &self.status_info),
            ("shortcut_key", &self.shortcut_key),
            ("shortcut_description", &self.shortcut_description),
        ]
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeFile {
    pub metadata: ThemeMetadata,
    pub colors: ThemeColors,
}

/// Convert a hex (`#rrggbb`) or named colour to a terminal colour.
pub fn parse_color(value: &str) -> Option<Color> {
    let value = value.trim();
    match value.to_lowercase().as_str() {
        "reset" => Some(Color::Reset),
        "black" => Some(Color::Black),
        "red" => Some(Color::Red),
        "green" => Some(Color::Green),
        "yellow" => Some(Color::Yellow),
        "blue" => Some(Color::Blue),
        "magenta" => Some(Color::Magenta),
        "cyan" => Some(Color::Cyan),
        "white" => Some(Color::White),
        "gray" | "grey" => Some(Color::Gray),
        "darkgray" | "darkgrey" => Some(Color::DarkGray),
        "lightred" => Some(Color::LightRed),
        "lightgreen" => Some(Color::LightGreen),
        "lightyellow" => Some(Color::LightYellow),
        "lightblue" => Some(Color::LightBlue),
        "lightmagenta" => Some(Color::LightMagenta),
        "lightcyan" => Some(Color::LightCyan),
        _ => parse_hex_color(value).map(|(r, g, b)| Color::Rgb(r, g, b)),
    }
}

fn parse_hex_color(hex: &str) -> Option<(u8, u8, u8)> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }

    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some((r, g, b))
}

/// Resolved colours of the active theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub preference: ThemePreference,
    pub background: Color,
    pub surface: Color,
    pub border: Color,
    pub text_primary: Color,
    pub text_muted: Color,
    pub primary_accent: Color,
    pub secondary_accent: Color,
    pub selection_bg: Color,
    pub selection_fg: Color,
    pub bar_track: Color,
    pub bar_fill: Color,
    pub status_success: Color,
    pub status_error: Color,
    pub status_info: Color,
    pub shortcut_key: Color,
    pub shortcut_description: Color,
}

impl Palette {
    /// Named-colour palette used for any value that does not parse.
    pub fn fallback(preference: ThemePreference) -> Self {
        let (background, surface, text_primary, text_muted) = match preference {
            ThemePreference::Light => (Color::White, Color::Gray, Color::Black, Color::DarkGray),
            ThemePreference::Dark => (Color::Black, Color::DarkGray, Color::White, Color::Gray),
        };
        Self {
            preference,
            background,
            surface,
            border: text_muted,
            text_primary,
            text_muted,
            primary_accent: Color::Magenta,
            secondary_accent: Color::Cyan,
            selection_bg: Color::Magenta,
            selection_fg: background,
            bar_track: surface,
            bar_fill: Color::Magenta,
            status_success: Color::Green,
            status_error: Color::Red,
            status_info: Color::Blue,
            shortcut_key: Color::Yellow,
            shortcut_description: text_muted,
        }
    }

    /// Resolve a theme file, falling back per colour.
    pub fn from_colors(preference: ThemePreference, colors: &ThemeColors) -> Self {
        let fallback = Self::fallback(preference);
        let pick = |value: &str, default: Color| parse_color(value).unwrap_or(default);

        Self {
            preference,
            background: pick(&colors.background, fallback.background),
            surface: pick(&colors.surface, fallback.surface),
            border: pick(&colors.border, fallback.border),
            text_primary: pick(&colors.text_primary, fallback.text_primary),
            text_muted: pick(&colors.text_muted, fallback.text_muted),
            primary_accent: pick(&colors.primary_accent, fallback.primary_accent),
            secondary_accent: pick(&colors.secondary_accent, fallback.secondary_accent),
            selection_bg: pick(&colors.selection_bg, fallback.selection_bg),
            selection_fg: pick(&colors.selection_fg, fallback.selection_fg),
            bar_track: pick(&colors.bar_track, fallback.bar_track),
            bar_fill: pick(&colors.bar_fill, fallback.bar_fill),
            status_success: pick(&colors.status_success, fallback.status_success),
            status_error: pick(&colors.status_error, fallback.status_error),
            status_info: pick(&colors.status_info, fallback.status_info),
            shortcut_key: pick(&colors.shortcut_key, fallback.shortcut_key),
            shortcut_description: pick(
                &colors.shortcut_description,
                fallback.shortcut_description,
            ),
        }
    }

    /// `color` at the given opacity over the page background.
    ///
    /// Only RGB colours can be blended; named colours snap at half opacity.
    pub fn fade(&self, color: Color, opacity: f32) -> Color {
        let opacity = opacity.clamp(0.0, 1.0);
        if opacity >= 1.0 {
            return color;
        }

        match (color, self.background) {
            (Color::Rgb(r, g, b), Color::Rgb(br, bg, bb)) => Color::Rgb(
                mix(br, r, opacity),
                mix(bg, g, opacity),
                mix(bb, b, opacity),
            ),
            _ if opacity < 0.5 => self.background,
            _ => color,
        }
    }
}

fn mix(from: u8, to: u8, amount: f32) -> u8 {
    let value = from as f32 + (to as f32 - from as f32) * amount;
    value.round().clamp(0.0, 255.0) as u8
}

/// `[theme]` section of the configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ThemeConfig {
    preference_file: Option<String>,
    persist: Option<bool>,
    light_file: Option<String>,
    dark_file: Option<String>,
}

fn non_blank(value: &Option<String>) -> Option<PathBuf> {
    value
        .as_deref()
        .filter(|v| !v.trim().is_empty())
        .map(PathBuf::from)
}

impl ThemeConfig {
    /// Custom preferences file; `None` means the platform default location.
    pub fn preference_file(&self) -> Option<PathBuf> {
        non_blank(&self.preference_file)
    }

    pub fn persist(&self) -> bool {
        self.persist.unwrap_or(true)
    }

    /// Custom palette file replacing the built-in one for `preference`.
    pub fn palette_file(&self, preference: ThemePreference) -> Option<PathBuf> {
        match preference {
            ThemePreference::Light => non_blank(&self.light_file),
            ThemePreference::Dark => non_blank(&self.dark_file),
        }
    }
}
