//! Provides the document compiler, which wraps a template fragment in the shared document shell.

use crate::config::Config;
use crate::error::Error;
use crate::quiet_assert;
use crate::scripts::countdown::Countdown;
use crate::scripts::watermark::HOST_ID;
use crate::templates::{Fragment, RenderContext};

/// The comment placed directly after the doctype of every document.
pub const GENERATOR_COMMENT: &str = "<!-- generated with CR•ForgeSite -->";

/// Compiles a fragment into a complete, self-contained HTML document.
///
/// The configuration provides the shell-level concerns: title, meta description, font, CSS variables,
///   theme attribute and the progress overlay. The countdown script is always emitted and does nothing
///   when the template omitted the timer placeholder; the watermark script is always emitted.
pub fn compile(cfg: &Config, fragment: &Fragment, ctx: &RenderContext) -> String {
    format!(
        r#"<!doctype html>
{comment}
<html lang="en" data-theme="{theme}">
<head>
<meta charset="utf-8"/><meta name="viewport" content="width=device-width, initial-scale=1"/>
<title>{title} — Coming Soon</title>
<meta name="description" content="{description}"/>
<link rel="preconnect" href="https://fonts.gstatic.com" crossorigin>
<link href="{font_url}" rel="stylesheet">
<style>
{variables}
*{{box-sizing:border-box}} html,body{{height:100%}}
@media (prefers-reduced-motion: reduce){{*,*:before,*:after{{animation-duration:0.001ms!important;animation-iteration-count:1!important;transition-duration:0.001ms!important;scroll-behavior:auto!important}}}}
{css}
</style>
</head>
<body style="font-family:{font_name},ui-sans-serif,system-ui; background:var(--bg); color:var(--fg);">
{body}
{progress}
<script>
{countdown}
</script>
<script>
{watermark}
</script>
</body>
</html>
"#,
        comment = GENERATOR_COMMENT,
        theme = cfg.theme,
        title = ctx.title,
        description = ctx.description,
        font_url = cfg.font_url,
        variables = css_variables(cfg),
        css = fragment.css,
        font_name = cfg.font_name,
        body = fragment.body,
        progress = progress_overlay(cfg),
        countdown = Countdown::default().script(),
        watermark = cfg.watermark.script(),
    )
}

/// Derives the CSS custom properties from the configuration.
///
/// The background and foreground colors are overridden for the light theme through the `data-theme` attribute
///   of the root element.
pub fn css_variables(cfg: &Config) -> String {
    format!(
        ":root{{--ac:{};--radius:{}px;--shadow:{};--max:{}px;--noise:{};--bg:#000;--fg:#fff}}\n[data-theme=\"light\"]{{--bg:#f7f7fb;--fg:#0b0b10}}",
        cfg.accent,
        css_number(cfg.radius),
        css_number(cfg.shadow),
        css_number(cfg.max_width),
        u8::from(cfg.noise),
    )
}

/// Returns the fixed progress overlay if the progress bar is enabled, or an empty string otherwise.
pub fn progress_overlay(cfg: &Config) -> String {
    if cfg.progress_on {
        format!(
            r#"<div aria-hidden="true" style="position:fixed;left:0;bottom:0;height:3px;width:{}%;background:var(--ac);box-shadow:0 0 calc(var(--shadow)*1px) color-mix(in oklab, var(--ac), transparent 60%);"></div>"#,
            css_number(f64::from(cfg.progress))
        )
    } else {
        String::new()
    }
}

/// Checks the invariants every rendered document must satisfy.
///
/// The watermark host is counted in the injected script alone, since user text may mention it freely.
pub fn check(html: &str, cfg: &Config) -> Result<(), Error> {
    let root = format!("<html lang=\"en\" data-theme=\"{}\">", cfg.theme);
    let host_literal = format!("\"{}\"", HOST_ID);
    let watermark = cfg.watermark.script();

    quiet_assert!(html.to_ascii_lowercase().starts_with("<!doctype html>"))?;
    quiet_assert!(html.contains("<h1>"))?;
    quiet_assert!(html.contains(&root))?;
    quiet_assert!(html.contains(&watermark))?;
    quiet_assert!(watermark.matches(&host_literal).count() == 1)?;

    Ok(())
}

/// Formats a number the way it would be formatted when interpolated by a browser script.
///
/// Integral values have no fractional part and negative zero is written as `0`.
pub fn css_number(n: f64) -> String {
    if n == 0.0 {
        "0".to_string()
    } else {
        n.to_string()
    }
}

/// Replaces every `<` with its entity, which prevents the text from opening a new tag.
pub fn escape_lt(s: &str) -> String {
    s.replace('<', "&lt;")
}

/// Escapes the characters which are significant in HTML text and attribute values.
pub fn escape_html(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());

    for c in s.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            c => escaped.push(c),
        }
    }

    escaped
}
