use crate::config::Config;
use crate::templates::{left_class, Fragment, RenderContext, Template, TemplateRenderer};

/// Renders the `neon` template: a glowing panel on a line grid.
///
/// The brand and footer links are not part of this layout.
pub struct NeonRenderer;

impl TemplateRenderer for NeonRenderer {
    fn template(&self) -> Template {
        Template::Neon
    }

    fn render(&self, cfg: &Config, ctx: &RenderContext) -> Fragment {
        let body = format!(
            r#"<div class="grid">
  <div class="panel {left}">
    <h1>{headline}</h1>
    <p>{sub}</p>
    {timer}
  </div>
</div>"#,
            left = left_class(cfg),
            headline = ctx.headline,
            sub = ctx.sub,
            timer = ctx.timer(cfg),
        );

        Fragment {
            body,
            css: CSS.to_string(),
        }
    }
}

const CSS: &str = r#"body{margin:0;background:var(--bg);color:var(--fg)}
.grid{min-height:100%;display:grid;place-items:center;background-image:linear-gradient(color-mix(in oklab, var(--fg), transparent 95%) 1px,transparent 1px),linear-gradient(90deg,color-mix(in oklab, var(--fg), transparent 95%) 1px,transparent 1px);background-size:40px 40px}
.panel{width:min(var(--max),92vw);padding:6vmin;border:1px solid color-mix(in oklab, var(--fg), transparent 85%);border-radius:var(--radius);background:radial-gradient(60% 80% at 20% 0%,color-mix(in oklab, var(--ac) 60%, transparent),transparent 60%),color-mix(in oklab, var(--bg), transparent 55%);backdrop-filter:blur(10px);margin-inline:auto}
.panel.left{margin-left:clamp(16px,6vw,80px)}
h1{font-size:clamp(36px,6vw,72px);margin:0 0 10px 0;text-shadow:0 1px 12px rgba(0,0,0,.35)}
p{opacity:.9;margin:0 0 16px 0;max-width:60ch;text-shadow:0 1px 8px rgba(0,0,0,.2)}
.timer{display:flex;gap:12px}
.timer .box{padding:.6rem .9rem;border-radius:12px;background:color-mix(in oklab, var(--fg), transparent 94%);border:1px solid color-mix(in oklab, var(--fg), transparent 88%)}"#;
