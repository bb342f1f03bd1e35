use crate::config::Config;
use crate::templates::{Fragment, RenderContext, Template, TemplateRenderer};

/// Renders the `split` template: an accent panel beside the copy.
///
/// The two-column layout has no alignment variant.
pub struct SplitRenderer;

impl TemplateRenderer for SplitRenderer {
    fn template(&self) -> Template {
        Template::Split
    }

    fn render(&self, cfg: &Config, ctx: &RenderContext) -> Fragment {
        let body = format!(
            r#"<div class="split">
  <aside></aside>
  <main>
    <div class="logo">{brand}</div>
    <h1>{headline}</h1>
    <p>{sub}</p>
    {timer}
  </main>
</div>"#,
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
.split{min-height:100%;display:grid;grid-template-columns:1.1fr 1.2fr}
aside{background:radial-gradient(120% 120% at 20% 20%,var(--ac),transparent 60%),linear-gradient(180deg,color-mix(in oklab, var(--bg), transparent 10%),var(--bg));filter:saturate(120%)}
main{display:grid;align-content:center;gap:18px;padding:clamp(24px,6vw,80px)}
.logo{font-weight:800;text-transform:uppercase;letter-spacing:.14em;opacity:.95}
h1{font-size:clamp(36px,7vw,84px);margin:0;text-shadow:0 1px 12px rgba(0,0,0,.35)}
p{opacity:.94;max-width:60ch;text-shadow:0 1px 8px rgba(0,0,0,.2)}
.timer{display:flex;gap:10px}
.timer .box{padding:10px 14px;border-radius:12px;background:color-mix(in oklab, var(--fg), transparent 94%);border:1px solid color-mix(in oklab, var(--fg), transparent 88%)}
@media (max-width:900px){.split{grid-template-columns:1fr}.timer{justify-content:flex-start}}"#;
