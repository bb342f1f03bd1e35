use crate::config::Config;
use crate::templates::{left_class, Fragment, RenderContext, Template, TemplateRenderer};

/// Renders the `aurora` template: a card over two blurred light fields.
///
/// The light fields are part of the layout and are drawn regardless of the blob flag.
pub struct AuroraRenderer;

impl TemplateRenderer for AuroraRenderer {
    fn template(&self) -> Template {
        Template::Aurora
    }

    fn render(&self, cfg: &Config, ctx: &RenderContext) -> Fragment {
        let body = format!(
            r#"<section class="aurora {left}">
  <div class="fx"></div><div class="fx two"></div>
  <div class="card">
    <div class="logo">{brand}</div>
    <h1>{headline}</h1>
    <p>{sub}</p>
    {timer}
  </div>
</section>"#,
            left = left_class(cfg),
            brand = ctx.brand,
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
.aurora{min-height:100%;position:relative;display:grid;place-items:center;padding:8vmin}
.aurora.left{place-items:start center}
.fx,.fx.two{position:absolute;inset:-20% -10% auto;filter:blur(60px);opacity:.45;border-radius:50%}
.fx{background:radial-gradient(circle at 30% 40%,var(--ac),transparent 60%)}
.fx.two{background:radial-gradient(circle at 70% 30%,#4f46e5,transparent 60%)}
.card{position:relative;width:min(var(--max),92vw);padding:clamp(24px,4vw,56px);background:linear-gradient(180deg,rgba(255,255,255,.09),rgba(255,255,255,.03));border:1px solid color-mix(in oklab, var(--fg), transparent 88%);border-radius:var(--radius);box-shadow:0 20px calc(var(--shadow)*1px) rgba(0,0,0,.55)}
.logo{font-weight:800;text-transform:uppercase;letter-spacing:.14em;opacity:.95}
h1{font-size:clamp(36px,7.5vw,84px);margin:.3em 0;text-shadow:0 1px 12px rgba(0,0,0,.35)}
p{opacity:.94;max-width:62ch;text-shadow:0 1px 8px rgba(0,0,0,.2)}
.timer{display:flex;gap:10px;margin-top:16px}
.timer .box{padding:10px 14px;border-radius:12px;background:color-mix(in oklab, var(--fg), transparent 94%);border:1px solid color-mix(in oklab, var(--fg), transparent 88%)}"#;
