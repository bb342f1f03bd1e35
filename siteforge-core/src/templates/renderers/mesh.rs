use crate::config::Config;
use crate::templates::{left_class, Fragment, RenderContext, Template, TemplateRenderer};

/// Renders the `mesh` template: a card over two overlapping gradient fields.
pub struct MeshRenderer;

impl TemplateRenderer for MeshRenderer {
    fn template(&self) -> Template {
        Template::Mesh
    }

    fn render(&self, cfg: &Config, ctx: &RenderContext) -> Fragment {
        let footer = if cfg.show_social {
            format!(
                r#"<footer><a href="{}">Website</a><a href="{}">GitHub</a></footer>"#,
                ctx.website, ctx.repo
            )
        } else {
            String::new()
        };

        let body = format!(
            r#"<div class="mesh {left}">
  <div class="card">
    <div class="logo">{brand}</div>
    <h1>{headline}</h1>
    <p>{sub}</p>
    {timer}
    {footer}
  </div>
</div>"#,
            left = left_class(cfg),
            brand = ctx.brand,
            headline = ctx.headline,
            sub = ctx.sub,
            timer = ctx.timer(cfg),
            footer = footer,
        );

        Fragment {
            body,
            css: CSS.to_string(),
        }
    }
}

const CSS: &str = r#"body{margin:0;background:var(--bg);color:var(--fg)}
.mesh{min-height:100%;position:relative;display:grid;place-items:center;padding:8vmin}
.mesh.left{place-items:start center}
.mesh:before,.mesh:after{content:"";position:absolute;inset:-20% -10% auto;filter:blur(80px);opacity:.4;border-radius:50%}
.mesh:before{background:radial-gradient(closest-side,var(--ac),transparent 70%)}
.mesh:after{background:radial-gradient(closest-side,#22d3ee,transparent 70%);transform:translate(30%,20%)}
.card{position:relative;width:min(var(--max),92vw);padding:clamp(24px,4vw,56px);background:linear-gradient(180deg,rgba(255,255,255,.08),rgba(255,255,255,.02));border:1px solid color-mix(in oklab,var(--fg),transparent 86%);border-radius:var(--radius);box-shadow:0 22px calc(var(--shadow)*1px) rgba(0,0,0,.5)}
.logo{font-weight:800;text-transform:uppercase;letter-spacing:.14em;opacity:.95}
h1{font-size:clamp(38px,7vw,88px);margin:.3em 0;text-shadow:0 1px 12px rgba(0,0,0,.35)}
p{opacity:.94;max-width:62ch;text-shadow:0 1px 8px rgba(0,0,0,.2)}
.timer{display:flex;gap:10px;margin-top:14px}
.timer .box{padding:10px 14px;border-radius:12px;background:color-mix(in oklab,var(--fg),transparent 94%);border:1px solid color-mix(in oklab,var(--fg),transparent 88%)}
footer{display:flex;gap:16px;margin-top:18px;opacity:.9}
a{color:var(--fg);text-decoration:none}"#;
