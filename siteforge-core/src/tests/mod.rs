#[macro_use]
mod r#macro;

use crate::config::{Align, Config, Escaping, Theme};
use crate::scripts::watermark::HOST_ID;
use crate::templates::Template;
use crate::{render, render_with};

use chrono::{DateTime, Utc};

define_template_tests![
    liquid => Template::Liquid,
    noir => Template::Noir,
    neon => Template::Neon,
    aurora => Template::Aurora,
    split => Template::Split,
    terminal => Template::Terminal,
    photo => Template::Photo,
    poster => Template::Poster,
    mesh => Template::Mesh
];

/// Renders one template under a spread of configurations and checks the document invariants of each.
pub struct Testcase {
    template: Template,
    configs: Vec<Config>,
}

impl Testcase {
    pub fn new(template: Template) -> Self {
        let base = Config {
            target: "2030-01-01T00:00:00Z".to_string(),
            template,
            ..Config::default()
        };

        let configs = vec![
            base.clone(),
            Config {
                theme: Theme::Light,
                align: Align::Left,
                ..base.clone()
            },
            Config {
                timer: false,
                show_social: false,
                blob: false,
                noise: false,
                progress_on: true,
                progress: 100,
                ..base.clone()
            },
            Config {
                brand: String::new(),
                headline: String::new(),
                sub: String::new(),
                escaping: Escaping::Full,
                ..base
            },
        ];

        Self { template, configs }
    }

    pub fn run(&self) {
        for cfg in &self.configs {
            let html = render(cfg).unwrap();

            assert!(html.starts_with("<!doctype html>"));
            assert!(html.contains("<h1>"));
            assert!(html.contains(&format!("<html lang=\"en\" data-theme=\"{}\">", cfg.theme)));
            assert_eq!(html.matches(HOST_ID).count(), 1);

            // Rendering is pure.
            assert_eq!(html, render_with(cfg, self.template).unwrap());
        }
    }
}

fn nova() -> Config {
    Config {
        brand: "Nova".to_string(),
        headline: "Back soon".to_string(),
        template: Template::Noir,
        theme: Theme::Light,
        progress_on: true,
        progress: 80,
        target: "2030-01-01T00:00:00Z".to_string(),
        ..Config::default()
    }
}

/// Returns the part of the document between `<head>` and `</head>`.
fn head(html: &str) -> &str {
    let start = html.find("<head>").unwrap() + "<head>".len();
    let end = html.find("</head>").unwrap();
    &html[start..end]
}

#[test]
fn nova_end_to_end() {
    let html = render(&nova()).unwrap();

    assert!(html.contains("data-theme=\"light\""));
    assert!(html.contains("<h1>Back soon</h1>"));
    assert!(html.contains("width:80%"));
    assert!(html.contains(HOST_ID));
    assert!(html.contains("<title>Nova — Coming Soon</title>"));
}

#[test]
fn progress_overlay_follows_flag() {
    let mut cfg = Config {
        template: Template::Liquid,
        progress_on: true,
        progress: 37,
        ..nova()
    };

    let html = render(&cfg).unwrap();
    assert!(html.contains("height:3px;width:37%;"));

    cfg.progress_on = false;
    let html = render(&cfg).unwrap();
    assert!(!html.contains("width:37%"));
    assert!(!html.contains("position:fixed;left:0;bottom:0"));
}

#[test]
fn noir_draws_its_own_progress_line() {
    let cfg = Config {
        progress: 37,
        ..nova()
    };

    assert!(render(&cfg).unwrap().contains(r#"<div class="bar" style="--p:37%"></div>"#));
}

#[test]
fn head_text_cannot_open_tags() {
    let cfg = Config {
        brand: "<script>alert(1)</script>".to_string(),
        sub: "<img src=x onerror=alert(1)>".to_string(),
        ..nova()
    };

    let html = render(&cfg).unwrap();
    let head = head(&html);

    assert!(head.contains("<title>&lt;script>alert(1)&lt;/script> — Coming Soon</title>"));
    assert!(head.contains(r#"content="&lt;img src=x onerror=alert(1)>""#));
    assert!(!head.contains("<script"));
    assert!(!head.contains("<img"));
}

#[test]
fn text_mentioning_the_watermark_host_still_renders() {
    for template in Template::ALL {
        let cfg = Config {
            brand: format!("\"{}\"", HOST_ID),
            headline: format!("Ask us about \"{}\"", HOST_ID),
            sub: HOST_ID.to_string(),
            template,
            ..nova()
        };

        let html = render(&cfg).unwrap();
        assert!(html.contains(&cfg.watermark.script()));
    }
}

#[test]
fn head_escaping_leaves_body_verbatim() {
    let cfg = Config {
        headline: "Back <em>soon</em>".to_string(),
        ..nova()
    };

    assert!(render(&cfg).unwrap().contains("<h1>Back <em>soon</em></h1>"));
}

#[test]
fn full_escaping_covers_body_and_links() {
    let cfg = Config {
        template: Template::Mesh,
        headline: "Back <em>soon</em>".to_string(),
        website: "https://example.com/\" onclick=\"x".to_string(),
        escaping: Escaping::Full,
        ..nova()
    };

    let html = render(&cfg).unwrap();

    assert!(html.contains("<h1>Back &lt;em&gt;soon&lt;/em&gt;</h1>"));
    assert!(html.contains(r#"href="https://example.com/&quot; onclick=&quot;x""#));
}

#[test]
fn unparseable_target_counts_down_to_now() {
    let cfg = Config {
        target: "next tuesday-ish".to_string(),
        ..nova()
    };

    let before = Utc::now();
    let html = render(&cfg).unwrap();

    let start = html.find("data-target=\"").unwrap() + "data-target=\"".len();
    let end = start + html[start..].find('"').unwrap();
    let target = DateTime::parse_from_rfc3339(&html[start..end])
        .unwrap()
        .with_timezone(&Utc);

    assert!((target - before).num_milliseconds().abs() < 1000);
}

#[test]
fn timer_placeholder_follows_flag() {
    let mut cfg = nova();
    assert!(render(&cfg)
        .unwrap()
        .contains(r#"<div id="cr-timer" class="timer" data-target="2030-01-01T00:00:00.000Z"></div>"#));

    cfg.timer = false;
    let html = render(&cfg).unwrap();
    assert!(!html.contains("data-target=\""));
    // The script is still emitted and does nothing without its element.
    assert!(html.contains("getElementById(\"cr-timer\")"));
}

#[test]
fn footer_links_are_a_per_template_policy() {
    let cfg = Config {
        website: "https://nova.example".to_string(),
        show_social: true,
        ..nova()
    };

    for (template, draws_links) in [
        (Template::Liquid, true),
        (Template::Noir, false),
        (Template::Neon, false),
        (Template::Aurora, false),
        (Template::Split, false),
        (Template::Terminal, false),
        (Template::Photo, false),
        (Template::Poster, true),
        (Template::Mesh, true),
    ] {
        let html = render_with(&cfg, template).unwrap();
        assert_eq!(
            html.contains("href=\"https://nova.example\""),
            draws_links,
            "{}",
            template
        );
    }
}

#[test]
fn blob_is_only_drawn_by_liquid() {
    let mut cfg = Config {
        template: Template::Liquid,
        ..nova()
    };

    assert!(render(&cfg).unwrap().contains(r#"<div class="blob"></div>"#));

    cfg.blob = false;
    assert!(!render(&cfg).unwrap().contains(r#"<div class="blob"></div>"#));

    cfg.blob = true;
    cfg.template = Template::Mesh;
    assert!(!render(&cfg).unwrap().contains(r#"<div class="blob"></div>"#));
}

#[test]
fn shell_carries_reduced_motion_and_font() {
    let cfg = Config {
        font_name: "Space Grotesk".to_string(),
        font_url: "https://fonts.example/space.css".to_string(),
        ..nova()
    };

    let html = render(&cfg).unwrap();

    assert!(html.contains("@media (prefers-reduced-motion: reduce)"));
    assert!(html.contains(r#"<link href="https://fonts.example/space.css" rel="stylesheet">"#));
    assert!(html.contains("font-family:Space Grotesk,ui-sans-serif,system-ui;"));
}

#[test]
fn templates_parse_from_identifiers() {
    for template in Template::ALL {
        assert_eq!(template.id().parse::<Template>(), Ok(template));
    }

    assert_eq!(
        "brutalist".parse::<Template>(),
        Err(crate::Error::UnknownTemplate("brutalist".to_string()))
    );
}

#[test]
fn every_template_is_registered() {
    for template in Template::ALL {
        assert_eq!(crate::renderer(template).unwrap().template(), template);
    }
}
