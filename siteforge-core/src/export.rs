//! Provides helpers for exporting rendered documents.

use crate::config::Config;

/// Returns the file name under which the document rendered from the configuration is saved.
pub fn file_name(cfg: &Config) -> String {
    format!("{}.html", slug(&format!("{}-{}", cfg.brand, cfg.template.id())))
}

/// Lowercases the string and collapses every run of other characters than ASCII letters and digits into `-`.
pub fn slug(s: &str) -> String {
    let mut slug = String::with_capacity(s.len());

    for c in s.to_lowercase().chars() {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            slug.push(c);
        } else if !slug.ends_with('-') {
            slug.push('-');
        }
    }

    slug.trim_matches('-').to_string()
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::templates::Template;

    #[test]
    fn slug_collapses_separators() {
        assert_eq!(slug("  CR SiteForge -- Beta!  "), "cr-siteforge-beta");
        assert_eq!(slug("Café Ünïcode"), "caf-n-code");
    }

    #[test]
    fn file_name_includes_template() {
        let cfg = Config {
            brand: "Nova Labs".to_string(),
            template: Template::Noir,
            ..Config::default()
        };

        assert_eq!(file_name(&cfg), "nova-labs-noir.html");
    }
}
