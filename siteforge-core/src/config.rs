//! Provides the [`Config`] type, the flat set of user-chosen parameters driving one render.

use crate::error::Error;
use crate::scripts::watermark::Watermark;
use crate::templates::Template;
use crate::timestamp::TargetPreset;

use std::fmt::Display;
use std::str::FromStr;

/// The default font stylesheet.
pub const DEFAULT_FONT_URL: &str =
    "https://fonts.googleapis.com/css2?family=Inter:wght@400;600;800&display=swap";

/// The configuration of a page.
///
/// Every field has a default, so a configuration is always fully populated.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// The brand name.
    pub brand: String,
    /// The headline, rendered inside the document's `<h1>`.
    pub headline: String,
    /// The short description under the headline, also used as the meta description.
    pub sub: String,
    /// The website URL used by footer links.
    pub website: String,
    /// The repository URL used by footer links.
    pub repo: String,

    /// The accent color, in any CSS color syntax.
    pub accent: String,
    /// The corner radius, in pixels.
    pub radius: f64,
    /// The shadow intensity, used as a blur radius in pixels.
    pub shadow: f64,
    /// The maximum content width, in pixels.
    pub max_width: f64,
    /// The horizontal alignment of the content.
    pub align: Align,
    /// Whether to overlay a texture noise.
    pub noise: bool,
    /// Whether to draw the decorative blob.
    pub blob: bool,
    /// The color theme.
    pub theme: Theme,

    /// Whether to render footer links.
    pub show_social: bool,
    /// Whether to render the countdown timer.
    pub timer: bool,
    /// The raw countdown target, as entered by the user.
    pub target: String,
    /// Whether to render the progress bar.
    pub progress_on: bool,
    /// The progress percentage, between 0 and 100.
    pub progress: u8,

    /// The font family name.
    pub font_name: String,
    /// The external font stylesheet URL.
    pub font_url: String,

    /// The selected template.
    pub template: Template,
    /// How user text is escaped.
    pub escaping: Escaping,
    /// The attribution badge.
    pub watermark: Watermark,
}

/// The horizontal alignment of the content.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Align {
    /// Centered content.
    Center,
    /// Left-aligned content.
    Left,
}

/// The color theme of the document.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    /// Light text on a black background.
    Dark,
    /// Dark text on a near-white background.
    Light,
}

/// The escaping applied to user text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Escaping {
    /// Only `<` is escaped, and only in the title and meta description.
    ///
    /// Body text is interpolated verbatim, so users may embed their own markup.
    Head,
    /// All user text is HTML-escaped wherever it is interpolated.
    Full,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            brand: "CR SiteForge".to_string(),
            headline: "Building something new".to_string(),
            sub: "We move fast. Stay tuned.".to_string(),
            website: "#".to_string(),
            repo: "#".to_string(),
            accent: "#7c3aed".to_string(),
            radius: 22.0,
            shadow: 42.0,
            max_width: 980.0,
            align: Align::Center,
            noise: true,
            blob: true,
            theme: Theme::Dark,
            show_social: true,
            timer: true,
            target: TargetPreset::SevenDays.target(),
            progress_on: false,
            progress: 40,
            font_name: "Inter".to_string(),
            font_url: DEFAULT_FONT_URL.to_string(),
            template: Template::Liquid,
            escaping: Escaping::Head,
            watermark: Watermark::default(),
        }
    }
}

impl Config {
    /// Sets the progress percentage, clamping it to the range 0 to 100.
    pub fn set_progress(&mut self, progress: i64) {
        self.progress = progress.clamp(0, 100) as u8;
    }
}

impl Align {
    /// Returns the identifier of the alignment.
    pub fn id(&self) -> &'static str {
        match self {
            Align::Center => "center",
            Align::Left => "left",
        }
    }
}

impl Theme {
    /// Returns the identifier of the theme, as used in the `data-theme` attribute.
    pub fn id(&self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }
}

impl Escaping {
    /// Returns the identifier of the escaping mode.
    pub fn id(&self) -> &'static str {
        match self {
            Escaping::Head => "head",
            Escaping::Full => "full",
        }
    }
}

impl FromStr for Align {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "center" => Ok(Align::Center),
            "left" => Ok(Align::Left),
            _ => Err(Error::InvalidValue {
                field: "align",
                value: s.to_string(),
            }),
        }
    }
}

impl FromStr for Theme {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dark" => Ok(Theme::Dark),
            "light" => Ok(Theme::Light),
            _ => Err(Error::InvalidValue {
                field: "theme",
                value: s.to_string(),
            }),
        }
    }
}

impl FromStr for Escaping {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "head" => Ok(Escaping::Head),
            "full" => Ok(Escaping::Full),
            _ => Err(Error::InvalidValue {
                field: "escaping",
                value: s.to_string(),
            }),
        }
    }
}

impl Display for Align {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

impl Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

impl Display for Escaping {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}
