use crate::config::{Align, Config};
use crate::templates::{left_class, Fragment, RenderContext, Template, TemplateRenderer};

/// Renders the `liquid` template: a frosted glass card over a floating accent blob.
pub struct LiquidRenderer;

impl TemplateRenderer for LiquidRenderer {
    fn template(&self) -> Template {
        Template::Liquid
    }

    fn render(&self, cfg: &Config, ctx: &RenderContext) -> Fragment {
        let blob = if cfg.blob {
            r#"<div class="blob"></div>"#
        } else {
            ""
        };

        let footer = if cfg.show_social {
            format!(
                r#"<footer><a href="{}" aria-label="website">Website</a><a href="{}" aria-label="github">GitHub</a></footer>"#,
                ctx.website, ctx.repo
            )
        } else {
            String::new()
        };

        let body = format!(
            r#"<div class="wrap {left}">
  {blob}
  <div class="glass">
    <div class="logo">{brand}</div>
    <h1>{headline}</h1>
    <p class="sub">{sub}</p>
    {timer}
    {footer}
  </div>
</div>"#,
            left = left_class(cfg),
            blob = blob,
            brand = ctx.brand,
            headline = ctx.headline,
            sub = ctx.sub,
            timer = ctx.timer(cfg),
            footer = footer,
        );

        // The card is recentred explicitly when the grid aligns to the start.
        let glass_margin = match cfg.align {
            Align::Left => "margin-inline:auto;",
            Align::Center => "",
        };

        Fragment {
            body,
            css: CSS.replace("@GLASS_MARGIN@", glass_margin),
        }
    }
}

const CSS: &str = r#"body{margin:0;background:radial-gradient(1000px 700px at 12% 8%, color-mix(in oklab,var(--bg) 85%, var(--ac) 15%) 0%, var(--bg) 36%, var(--bg) 100%); color:var(--fg)}
.wrap{position:relative;min-height:100%;display:grid;place-items:center;padding:clamp(24px,4vw,64px)}
.wrap.left{place-items:start center}
.blob{position:absolute;inset:auto -12% -18% auto;width:60vmax;height:60vmax;background:radial-gradient(closest-side,var(--ac),transparent 70%);filter:blur(90px);opacity:.28;animation:float 14s ease-in-out infinite alternate}
@keyframes float{to{transform:translate3d(-4%, -2%,0)}}
.glass{position:relative;width:min(var(--max),92vw);backdrop-filter:saturate(150%) blur(18px);background:linear-gradient(120deg,rgba(255,255,255,.10),rgba(255,255,255,.04));border:1px solid rgba(255,255,255,.16);border-radius:var(--radius);box-shadow:0 22px calc(var(--shadow)*1px) rgba(0,0,0,.46);padding:clamp(20px,4vw,50px);@GLASS_MARGIN@}
.logo{font-weight:800;letter-spacing:.12em;text-transform:uppercase;opacity:.95;margin-bottom:10px;font-size:.9rem}
h1{font-size:clamp(36px,6.2vw,68px);margin:.25em 0;color:var(--fg);text-shadow:0 1px 12px rgba(0,0,0,.35)}
.sub{opacity:.92;margin:.6rem 0 1.4rem;max-width:60ch;text-shadow:0 1px 8px rgba(0,0,0,.28)}
.timer{display:flex;gap:10px;margin:14px 0 22px;opacity:.98}
.timer .box{padding:10px 14px;border-radius:14px;background:color-mix(in oklab, var(--fg), transparent 94%);border:1px solid color-mix(in oklab, var(--fg), transparent 88%);text-shadow:0 1px 6px rgba(0,0,0,.2)}
footer{display:flex;gap:16px;margin-top:18px;opacity:.9}
a{color:var(--fg);text-decoration:none}
.wrap:before{content:"";position:fixed;inset:0;pointer-events:none;opacity:calc(.12*var(--noise));background-image:url('data:image/svg+xml;utf8,<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 100 100" preserveAspectRatio="none"><filter id="n"><feTurbulence type="fractalNoise" baseFrequency="0.8" numOctaves="4"/></filter><rect width="100%" height="100%" filter="url(%23n)" opacity="0.22"/></svg>')}
[data-theme="light"] .glass{background:linear-gradient(120deg,rgba(0,0,0,.04),rgba(0,0,0,.02));border-color:rgba(0,0,0,.12)}
[data-theme="light"] .timer .box{background:color-mix(in oklab,#000,transparent 94%);border-color:color-mix(in oklab,#000,transparent 88%)}"#;
