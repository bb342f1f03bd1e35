use crate::config::Config;
use crate::document::css_number;
use crate::templates::{left_class, Fragment, RenderContext, Template, TemplateRenderer};

/// Renders the `noir` template: bare typography with an accent dot and an inline progress line.
///
/// Footer links and the decorative blob are never drawn.
pub struct NoirRenderer;

impl TemplateRenderer for NoirRenderer {
    fn template(&self) -> Template {
        Template::Noir
    }

    fn render(&self, cfg: &Config, ctx: &RenderContext) -> Fragment {
        let bar = if cfg.progress_on {
            format!(
                r#"<div class="bar" style="--p:{}%"></div>"#,
                css_number(f64::from(cfg.progress))
            )
        } else {
            String::new()
        };

        let body = format!(
            r#"<main class="noir {left}">
  <header><span>{brand}</span><span class="dot"></span></header>
  <h1>{headline}</h1>
  <p>{sub}</p>
  <div class="line"></div>
  {timer}
  {bar}
</main>"#,
            left = left_class(cfg),
            brand = ctx.brand,
            headline = ctx.headline,
            sub = ctx.sub,
            timer = ctx.timer(cfg),
            bar = bar,
        );

        Fragment {
            body,
            css: CSS.to_string(),
        }
    }
}

const CSS: &str = r#"body{margin:0;background:var(--bg);color:var(--fg)}
.noir{min-height:100%;padding:8vmin;display:grid;align-content:center;gap:2.2vmin;max-width:var(--max);margin-inline:auto}
.noir.left{margin-left:clamp(16px,6vw,80px)}
header{display:flex;justify-content:space-between;align-items:center;font-weight:800;letter-spacing:.1em;text-transform:uppercase}
.dot{width:10px;height:10px;border-radius:50%;background:var(--ac);display:inline-block;box-shadow:0 0 25px var(--ac)}
h1{font-size:clamp(40px,8vw,96px);line-height:1.02;margin:0;text-shadow:0 1px 12px rgba(0,0,0,.35)}
p{opacity:.9;max-width:60ch;text-shadow:0 1px 8px rgba(0,0,0,.2)}
.line{height:1px;background:linear-gradient(90deg,var(--ac),transparent)}
.timer{display:flex;gap:12px}
.timer .box{padding:.6rem .9rem;border:1px solid color-mix(in oklab, var(--fg), transparent 88%);border-radius:12px;background:color-mix(in oklab, var(--bg), transparent 80%)}
.bar{height:4px;background:linear-gradient(90deg,var(--ac),transparent);width:var(--p)}"#;
