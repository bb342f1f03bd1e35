use crate::config::Config;
use crate::templates::{Fragment, RenderContext, Template, TemplateRenderer};

/// Renders the `terminal` template: a shell session announcing the brand.
///
/// The headline is shown as a caption above the window; the subcopy and footer links are not drawn.
pub struct TerminalRenderer;

impl TemplateRenderer for TerminalRenderer {
    fn template(&self) -> Template {
        Template::Terminal
    }

    fn render(&self, cfg: &Config, ctx: &RenderContext) -> Fragment {
        let body = format!(
            r#"<div class="term">
  <h1>{headline}</h1>
  <div class="bar"><span class="dot"></span><span class="dot"></span><span class="dot"></span></div>
  <pre>$ init build
> echo "{brand}"
> status: shipping soon...
</pre>
  {timer}
</div>"#,
            headline = ctx.headline,
            brand = ctx.brand,
            timer = ctx.timer(cfg),
        );

        Fragment {
            body,
            css: CSS.to_string(),
        }
    }
}

const CSS: &str = r#"body{margin:0;background:var(--bg);color:var(--fg)}
.term{min-height:100%;display:grid;place-items:center;align-content:center;padding:10vmin}
h1{font-size:clamp(20px,3.4vw,34px);margin:0 0 12px 0;opacity:.92;font-family:ui-monospace, SFMono-Regular, Menlo, Monaco, Consolas, monospace}
.bar{display:flex;gap:6px;position:relative;top:8px}
.dot{width:10px;height:10px;border-radius:50%;background:var(--ac);box-shadow:0 0 18px var(--ac)}
pre{width:min(var(--max),92vw);background:color-mix(in oklab, var(--bg), transparent 40%);backdrop-filter:blur(6px);border:1px solid color-mix(in oklab, var(--fg), transparent 86%);border-radius:var(--radius);padding:24px;font-family:ui-monospace, SFMono-Regular, Menlo, Monaco, Consolas, monospace;font-size:clamp(12px,2.2vw,16px)}
.timer{margin-top:14px;display:flex;gap:10px}
.timer .box{padding:8px 10px;border-radius:10px;background:color-mix(in oklab, var(--fg), transparent 94%);border:1px solid color-mix(in oklab, var(--fg), transparent 88%)}"#;
