//! Provides the built-in templates and the trait through which they are rendered.

/// Contains all the built-in template renderers.
#[allow(clippy::missing_docs_in_private_items)]
pub mod renderers {
    mod aurora;
    mod liquid;
    mod mesh;
    mod neon;
    mod noir;
    mod photo;
    mod poster;
    mod split;
    mod terminal;

    pub use aurora::AuroraRenderer as Aurora;
    pub use liquid::LiquidRenderer as Liquid;
    pub use mesh::MeshRenderer as Mesh;
    pub use neon::NeonRenderer as Neon;
    pub use noir::NoirRenderer as Noir;
    pub use photo::PhotoRenderer as Photo;
    pub use poster::PosterRenderer as Poster;
    pub use split::SplitRenderer as Split;
    pub use terminal::TerminalRenderer as Terminal;
}

use crate::config::{Align, Config, Escaping};
use crate::document::{escape_html, escape_lt};
use crate::error::Error;
use crate::scripts::countdown::{TARGET_ATTRIBUTE, TIMER_ID};
use crate::timestamp::resolve_target;

use std::fmt::Display;
use std::str::FromStr;

/// One of the nine fixed visual layouts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Template {
    /// Liquid Glass.
    Liquid,
    /// Noir Minimal.
    Noir,
    /// Neon Grid.
    Neon,
    /// Aurora Waves.
    Aurora,
    /// Split Hero.
    Split,
    /// Terminal Pulse.
    Terminal,
    /// Photo Hero.
    Photo,
    /// Poster Type.
    Poster,
    /// Gradient Mesh.
    Mesh,
}

/// The output of a template: a body fragment and the CSS it needs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Fragment {
    /// The markup placed inside `<body>`.
    pub body: String,
    /// The CSS appended to the shared stylesheet.
    pub css: String,
}

/// Values derived from the configuration once per render and shared by the template and the document shell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderContext {
    /// The brand, escaped for the body.
    pub brand: String,
    /// The headline, escaped for the body.
    pub headline: String,
    /// The subcopy, escaped for the body.
    pub sub: String,
    /// The website URL, escaped for an attribute.
    pub website: String,
    /// The repository URL, escaped for an attribute.
    pub repo: String,
    /// The brand, escaped for the `<title>`.
    pub title: String,
    /// The subcopy, escaped for the meta description.
    pub description: String,
    /// The resolved countdown target as an ISO-8601 timestamp.
    pub target: String,
}

/// Represents a template renderer.
///
/// A renderer maps a configuration to a [`Fragment`]. It must be deterministic and free of side effects:
///   identical configurations always yield identical fragments. Each renderer decides on its own which
///   optional feature blocks it draws; flags which do not fit a template's visual language are ignored.
pub trait TemplateRenderer: Send + Sync {
    /// Returns the template which the renderer renders.
    fn template(&self) -> Template;

    /// Renders the configuration into a fragment.
    fn render(&self, cfg: &Config, ctx: &RenderContext) -> Fragment;
}

impl Template {
    /// All the templates, in the order they are presented to users.
    pub const ALL: [Template; 9] = [
        Template::Liquid,
        Template::Noir,
        Template::Neon,
        Template::Aurora,
        Template::Split,
        Template::Terminal,
        Template::Photo,
        Template::Poster,
        Template::Mesh,
    ];

    /// Returns the identifier of the template.
    pub fn id(&self) -> &'static str {
        match self {
            Template::Liquid => "liquid",
            Template::Noir => "noir",
            Template::Neon => "neon",
            Template::Aurora => "aurora",
            Template::Split => "split",
            Template::Terminal => "terminal",
            Template::Photo => "photo",
            Template::Poster => "poster",
            Template::Mesh => "mesh",
        }
    }

    /// Returns the display name of the template.
    pub fn name(&self) -> &'static str {
        match self {
            Template::Liquid => "Liquid Glass",
            Template::Noir => "Noir Minimal",
            Template::Neon => "Neon Grid",
            Template::Aurora => "Aurora Waves",
            Template::Split => "Split Hero",
            Template::Terminal => "Terminal Pulse",
            Template::Photo => "Photo Hero",
            Template::Poster => "Poster Type",
            Template::Mesh => "Gradient Mesh",
        }
    }
}

impl FromStr for Template {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Template::ALL
            .iter()
            .find(|t| t.id() == s)
            .copied()
            .ok_or_else(|| Error::UnknownTemplate(s.to_string()))
    }
}

impl Display for Template {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

impl RenderContext {
    /// Derives the render context from a configuration.
    ///
    /// This resolves the countdown target, falling back to the current time if it cannot be parsed.
    pub fn new(cfg: &Config) -> Self {
        let body = |s: &str| match cfg.escaping {
            Escaping::Head => s.to_string(),
            Escaping::Full => escape_html(s),
        };

        let head = |s: &str| match cfg.escaping {
            Escaping::Head => escape_lt(s),
            Escaping::Full => escape_html(s),
        };

        Self {
            brand: body(&cfg.brand),
            headline: body(&cfg.headline),
            sub: body(&cfg.sub),
            website: body(&cfg.website),
            repo: body(&cfg.repo),
            title: head(&cfg.brand),
            description: head(&cfg.sub),
            target: resolve_target(&cfg.target),
        }
    }

    /// Returns the countdown placeholder if the timer is enabled, or an empty string otherwise.
    pub fn timer(&self, cfg: &Config) -> String {
        if cfg.timer {
            format!(
                r#"<div id="{}" class="timer" {}="{}"></div>"#,
                TIMER_ID, TARGET_ATTRIBUTE, self.target
            )
        } else {
            String::new()
        }
    }
}

/// Returns `left` for left-aligned configurations, and an empty string otherwise.
///
/// This is appended to the class list of a template's outermost container.
pub fn left_class(cfg: &Config) -> &'static str {
    match cfg.align {
        Align::Left => "left",
        Align::Center => "",
    }
}

/// A macro which counts its arguments.
macro_rules! count {
    () => { 0_usize };
    ($head:tt $($tail:tt)*) => { 1_usize + count!($($tail)*) };
}

/// Defines the templates available in the program by way of a global variable.
macro_rules! define_templates {
    ($($name:expr,)*) => {
        const TEMPLATE_COUNT: usize = count!($($name)*);

        ::lazy_static::lazy_static! {
            static ref TEMPLATE_RENDERERS: [Box<dyn $crate::templates::TemplateRenderer>; TEMPLATE_COUNT] = [
                $(Box::new($name)),*
            ];
        }
    }
}
