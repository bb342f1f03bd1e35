//! Provides the manifest format and its conversion into a page configuration.

pub mod git;

use serde_derive::Deserialize;
use siteforge_core::scripts::watermark::Watermark;
use siteforge_core::{Config, Error};

/// The manifest file, `siteforge.toml`.
///
/// Every table and every key is optional; missing values take the defaults of [`Config`].
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    pub site: Option<SiteManifest>,
    pub style: Option<StyleManifest>,
    pub layout: Option<LayoutManifest>,
    pub features: Option<FeaturesManifest>,
    pub typography: Option<TypographyManifest>,
    pub watermark: Option<WatermarkManifest>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SiteManifest {
    pub brand: Option<String>,
    pub headline: Option<String>,
    pub sub: Option<String>,
    pub website: Option<String>,
    pub repo: Option<String>,
    pub template: Option<String>,
    pub escaping: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StyleManifest {
    pub accent: Option<String>,
    pub radius: Option<f64>,
    pub shadow: Option<f64>,
    pub theme: Option<String>,
    pub noise: Option<bool>,
    pub blob: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LayoutManifest {
    pub max_width: Option<f64>,
    pub align: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FeaturesManifest {
    pub show_social: Option<bool>,
    pub timer: Option<bool>,
    pub target: Option<String>,
    pub progress_on: Option<bool>,
    pub progress: Option<i64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TypographyManifest {
    pub font_name: Option<String>,
    pub font_url: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WatermarkManifest {
    pub href: Option<String>,
    pub label: Option<String>,
    pub interval_ms: Option<u32>,
}

/// Parses a manifest.
pub fn load(manifest: &str) -> Result<Manifest, toml::de::Error> {
    toml::from_str(manifest)
}

/// Overwrites `$target` with the value of `$source` if it is present.
macro_rules! apply {
    ($target:expr, $source:expr) => {
        if let Some(value) = $source {
            $target = value;
        }
    };
    ($target:expr, $source:expr, parse) => {
        if let Some(value) = $source {
            $target = value.parse()?;
        }
    };
}

impl TryFrom<Manifest> for Config {
    type Error = Error;

    fn try_from(manifest: Manifest) -> Result<Self, Self::Error> {
        let mut config = Config::default();

        if let Some(site) = manifest.site {
            apply!(config.brand, site.brand);
            apply!(config.headline, site.headline);
            apply!(config.sub, site.sub);
            apply!(config.website, site.website);
            apply!(config.repo, site.repo);
            apply!(config.template, site.template, parse);
            apply!(config.escaping, site.escaping, parse);
        }

        if let Some(style) = manifest.style {
            apply!(config.accent, style.accent);
            apply!(config.radius, style.radius.map(non_negative));
            apply!(config.shadow, style.shadow.map(non_negative));
            apply!(config.theme, style.theme, parse);
            apply!(config.noise, style.noise);
            apply!(config.blob, style.blob);
        }

        if let Some(layout) = manifest.layout {
            apply!(config.max_width, layout.max_width);
            apply!(config.align, layout.align, parse);
        }

        if let Some(features) = manifest.features {
            apply!(config.show_social, features.show_social);
            apply!(config.timer, features.timer);
            apply!(config.target, features.target);
            apply!(config.progress_on, features.progress_on);

            if let Some(progress) = features.progress {
                config.set_progress(progress);
            }
        }

        if let Some(typography) = manifest.typography {
            apply!(config.font_name, typography.font_name);
            apply!(config.font_url, typography.font_url);
        }

        if let Some(watermark) = manifest.watermark {
            let mut badge = Watermark::default();
            apply!(badge.href, watermark.href);
            apply!(badge.label, watermark.label);
            apply!(badge.interval_ms, watermark.interval_ms);
            config.watermark = badge;
        }

        Ok(config)
    }
}

/// Clamps lengths which cannot be negative.
fn non_negative(n: f64) -> f64 {
    n.max(0.0)
}

#[cfg(test)]
mod test {
    use super::*;

    use siteforge_core::{Align, Escaping, Template, Theme};

    #[test]
    fn empty_manifest_is_default() {
        let config = Config::try_from(load("").unwrap()).unwrap();
        let default = Config::default();

        assert_eq!(config.brand, default.brand);
        assert_eq!(config.template, Template::Liquid);
        assert_eq!(config.watermark, default.watermark);
    }

    #[test]
    fn manifest_overrides_defaults() {
        let manifest = load(
            r##"
            [site]
            brand = "Nova"
            headline = "Back soon"
            template = "noir"
            escaping = "full"

            [style]
            accent = "#ff0066"
            radius = 12
            shadow = -4
            theme = "light"

            [layout]
            max_width = 1200
            align = "left"

            [features]
            progress_on = true
            progress = 180

            [watermark]
            label = "made by Nova"
            "##,
        )
        .unwrap();

        let config = Config::try_from(manifest).unwrap();

        assert_eq!(config.brand, "Nova");
        assert_eq!(config.template, Template::Noir);
        assert_eq!(config.escaping, Escaping::Full);
        assert_eq!(config.radius, 12.0);
        assert_eq!(config.shadow, 0.0);
        assert_eq!(config.theme, Theme::Light);
        assert_eq!(config.max_width, 1200.0);
        assert_eq!(config.align, Align::Left);
        assert_eq!(config.progress, 100);
        assert_eq!(config.watermark.label, "made by Nova");
        assert_eq!(config.watermark.interval_ms, 3000);
    }

    #[test]
    fn unknown_template_is_rejected() {
        let manifest = load("[site]\ntemplate = \"brutalist\"").unwrap();

        assert_eq!(
            Config::try_from(manifest).unwrap_err(),
            Error::UnknownTemplate("brutalist".to_string())
        );
    }

    #[test]
    fn syntax_errors_have_a_location() {
        let e = load("[site]\nbrand = ").unwrap_err();

        assert!(e.line_col().is_some());
    }
}
