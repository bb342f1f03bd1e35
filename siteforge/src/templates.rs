//! Provides the `siteforge templates` functionality.

use crate::error::SiteForgeError;

use siteforge_core::Template;

use clap::ArgMatches;
use humphrey_json::prelude::*;
use humphrey_json::Value;

/// Lists the available templates on stdout.
pub fn list(args: &ArgMatches) -> Result<(), Box<dyn SiteForgeError>> {
    if args.is_present("json") {
        println!("{}", to_json().serialize());
    } else {
        for template in Template::ALL {
            println!("{:<10} {}", template.id(), template.name());
        }
    }

    Ok(())
}

/// Returns the templates as an array of `{"id", "name"}` objects.
fn to_json() -> Value {
    Value::Array(
        Template::ALL
            .iter()
            .map(|template| {
                json!({
                    "id": (template.id().to_string()),
                    "name": (template.name().to_string())
                })
            })
            .collect(),
    )
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn json_lists_every_template_in_order() {
        let templates = match to_json() {
            Value::Array(templates) => templates,
            _ => panic!("expected an array"),
        };

        assert_eq!(templates.len(), 9);
        assert_eq!(
            templates[0].get("id").and_then(|id| id.as_str()),
            Some("liquid")
        );
        assert_eq!(
            templates[8].get("name").and_then(|name| name.as_str()),
            Some("Gradient Mesh")
        );
    }
}
