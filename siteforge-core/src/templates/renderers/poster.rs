use crate::config::Config;
use crate::templates::{left_class, Fragment, RenderContext, Template, TemplateRenderer};

/// Renders the `poster` template: oversized gradient type with inline links.
pub struct PosterRenderer;

impl TemplateRenderer for PosterRenderer {
    fn template(&self) -> Template {
        Template::Poster
    }

    fn render(&self, cfg: &Config, ctx: &RenderContext) -> Fragment {
        let meta = if cfg.show_social {
            format!(
                r#"<div class="meta"><a href="{}">Website</a> — <a href="{}">GitHub</a></div>"#,
                ctx.website, ctx.repo
            )
        } else {
            String::new()
        };

        let body = format!(
            r#"<section class="poster {left}">
  <h1>{headline}</h1>
  <p>{sub}</p>
  {timer}
  {meta}
</section>"#,
            left = left_class(cfg),
            headline = ctx.headline,
            sub = ctx.sub,
            timer = ctx.timer(cfg),
            meta = meta,
        );

        Fragment {
            body,
            css: CSS.to_string(),
        }
    }
}

const CSS: &str = r#"body{margin:0;background:var(--bg);color:var(--fg)}
.poster{min-height:100%;display:grid;align-content:center;gap:18px;padding:10vmin;max-width:var(--max);margin-inline:auto}
.poster.left{margin-left:clamp(16px,6vw,80px)}
h1{font-size:clamp(44px,9vw,120px);line-height:.95;margin:0;background:linear-gradient(180deg,var(--fg),color-mix(in oklab,var(--fg),transparent 28%));-webkit-background-clip:text;background-clip:text;color:transparent;text-shadow:0 1px 14px rgba(0,0,0,.35)}
p{opacity:.95;max-width:62ch}
.timer{display:flex;gap:12px}
.timer .box{padding:.6rem .9rem;border-radius:12px;background:color-mix(in oklab,var(--fg),transparent 93%);border:1px solid color-mix(in oklab,var(--fg),transparent 86%)}
.meta{opacity:.85}
a{color:var(--fg);text-decoration:none}"#;
