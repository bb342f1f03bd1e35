use crate::config::Config;
use crate::templates::{Fragment, RenderContext, Template, TemplateRenderer};

/// The background image of the `photo` template, the only external image any template loads.
pub const PHOTO_URL: &str =
    "https://images.unsplash.com/photo-1496307042754-b4aa456c4a2d?q=80&w=1600&auto=format&fit=crop";

/// Renders the `photo` template: a translucent card over a full-bleed photograph.
pub struct PhotoRenderer;

impl TemplateRenderer for PhotoRenderer {
    fn template(&self) -> Template {
        Template::Photo
    }

    fn render(&self, cfg: &Config, ctx: &RenderContext) -> Fragment {
        let body = format!(
            r#"<section class="photo">
  <div class="layer"></div>
  <div class="content">
    <h1>{headline}</h1>
    <p>{sub}</p>
    {timer}
  </div>
</section>"#,
            headline = ctx.headline,
            sub = ctx.sub,
            timer = ctx.timer(cfg),
        );

        Fragment {
            body,
            css: CSS.replace("@PHOTO_URL@", PHOTO_URL),
        }
    }
}

const CSS: &str = r#"body{margin:0;background:var(--bg);color:var(--fg)}
.photo{min-height:100%;position:relative;display:grid;place-items:center;background-image:url('@PHOTO_URL@');background-size:cover;background-position:center}
.layer{position:absolute;inset:0;background:linear-gradient(180deg, color-mix(in oklab, var(--bg), transparent 12%), color-mix(in oklab, var(--bg), transparent 22%))}
.content{position:relative;width:min(var(--max),92vw);padding:clamp(24px,4vw,56px);backdrop-filter:blur(6px);background:color-mix(in oklab, var(--bg), transparent 58%);border:1px solid color-mix(in oklab, var(--fg), transparent 86%);border-radius:var(--radius)}
h1{font-size:clamp(36px,7vw,84px);margin:0 0 6px 0;text-shadow:0 1px 12px rgba(0,0,0,.35)}
p{opacity:.95;max-width:60ch;text-shadow:0 1px 8px rgba(0,0,0,.2)}
.timer{display:flex;gap:10px;margin-top:12px}
.timer .box{padding:10px 14px;border-radius:12px;background:color-mix(in oklab, var(--fg), transparent 94%);border:1px solid color-mix(in oklab, var(--fg), transparent 88%)}"#;
