//! SiteForge: compiles coming-soon page configurations into self-contained HTML documents.

#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

pub mod config;
pub mod document;
pub mod error;
pub mod export;
pub mod scripts;
pub mod timestamp;

#[macro_use]
pub mod templates;

#[cfg(test)]
mod tests;

pub use config::{Align, Config, Escaping, Theme};
pub use error::Error;
pub use templates::{Fragment, RenderContext, Template};

use crate::templates::TemplateRenderer;

define_templates![
    templates::renderers::Liquid,
    templates::renderers::Noir,
    templates::renderers::Neon,
    templates::renderers::Aurora,
    templates::renderers::Split,
    templates::renderers::Terminal,
    templates::renderers::Photo,
    templates::renderers::Poster,
    templates::renderers::Mesh,
];

/// Renders the configuration with the template it selects, returning a complete HTML document.
pub fn render(cfg: &Config) -> Result<String, Error> {
    render_with(cfg, cfg.template)
}

/// Renders the configuration with the given template, ignoring the template selected by the configuration.
pub fn render_with(cfg: &Config, template: Template) -> Result<String, Error> {
    let renderer = renderer(template)?;
    let ctx = RenderContext::new(cfg);
    let fragment = renderer.render(cfg, &ctx);
    let html = document::compile(cfg, &fragment, &ctx);

    document::check(&html, cfg)?;

    Ok(html)
}

/// Looks up the renderer registered for the given template.
pub fn renderer(template: Template) -> Result<&'static dyn TemplateRenderer, Error> {
    TEMPLATE_RENDERERS
        .iter()
        .find(|r| r.template() == template)
        .map(|r| &**r)
        .ok_or_else(|| Error::UnknownTemplate(template.id().to_string()))
}
