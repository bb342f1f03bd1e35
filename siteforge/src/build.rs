//! Provides the `siteforge build` functionality.

use crate::config;
use crate::error::{SiteForgeError, TracebackError};
use crate::fs;
use crate::logger::Progress;

use siteforge_core::timestamp::TargetPreset;
use siteforge_core::{export, render_with, Config, Template};

use clap::ArgMatches;

use std::fs::read_to_string;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Contains information about a successful build.
pub struct BuildInfo {
    /// The total time taken, in milliseconds.
    pub total_duration: f64,
    /// The time taken to render the documents, in milliseconds.
    pub render_duration: f64,
    /// The time taken to write the documents to disk, in milliseconds.
    pub fs_duration: f64,
    /// The paths of the saved documents, empty when printing to stdout.
    pub outputs: Vec<PathBuf>,
}

/// Builds the page described by the manifest, applying the command-line overrides.
pub fn build(args: &ArgMatches) -> Result<BuildInfo, Box<dyn SiteForgeError>> {
    let manifest_path = args.value_of("manifest-path").unwrap_or("siteforge.toml");
    let output = args.value_of("output").unwrap_or("dist");

    let path = PathBuf::try_from(manifest_path)
        .ok()
        .and_then(|path| path.canonicalize().ok())
        .ok_or_else(|| fs::Error::NotFound(manifest_path.to_string()))?;
    let project_dir = path
        .parent()
        .map(Path::to_path_buf)
        .ok_or_else(|| "invalid manifest path".to_string())?;

    let config = load_config(&path)?;
    let config = apply_overrides(config, args)?;

    log!(
        "Building",
        "{} ({})",
        config.brand,
        project_dir.to_string_lossy().trim_start_matches("\\\\?\\")
    );

    let templates: Vec<Template> = if args.is_present("all") {
        Template::ALL.to_vec()
    } else {
        vec![config.template]
    };

    let mut documents: Vec<(String, String)> = Vec::with_capacity(templates.len());
    let mut progress = args
        .is_present("all")
        .then(|| Progress::new("Rendering", templates.len()));

    let render_start = Instant::now();
    for template in templates {
        detail!("Rendering", "{} ({})", template.name(), template.id());

        let cfg = Config {
            template,
            ..config.clone()
        };
        let html = render_with(&cfg, template)?;

        documents.push((export::file_name(&cfg), html));

        if let Some(progress) = progress.as_mut() {
            progress.next();
        }
    }
    let render_duration = render_start.elapsed().as_micros();

    if args.is_present("stdout") {
        for (_, html) in &documents {
            println!("{}", html);
        }

        let render_duration = (render_duration / 100) as f64 / 10.0;

        return Ok(BuildInfo {
            total_duration: render_duration,
            render_duration,
            fs_duration: 0.0,
            outputs: Vec::new(),
        });
    }

    let out_dir = project_dir.join(output);
    let mut outputs = Vec::with_capacity(documents.len());

    let save_start = Instant::now();
    for (name, html) in &documents {
        let saved = fs::save_document(&out_dir, name, html)?;
        detail!("Saved", "{}", saved.to_string_lossy());
        outputs.push(saved);
    }
    let save_duration = save_start.elapsed().as_micros();

    let total_duration = ((render_duration + save_duration) / 100) as f64 / 10.0;
    let render_duration = (render_duration / 100) as f64 / 10.0;
    let fs_duration = (save_duration / 100) as f64 / 10.0;

    log!(
        "Finished",
        "{} in {}ms ({}ms render, {}ms filesystem)",
        match outputs.len() {
            1 => "1 page".to_string(),
            n => format!("{} pages", n),
        },
        total_duration,
        render_duration,
        fs_duration
    );

    Ok(BuildInfo {
        total_duration,
        render_duration,
        fs_duration,
        outputs,
    })
}

/// Reads the manifest at the given path and converts it into a configuration.
fn load_config(path: &Path) -> Result<Config, Box<dyn SiteForgeError>> {
    let manifest =
        read_to_string(path).map_err(|e| format!("failed to read manifest:\n  {}", e))?;

    let manifest = match config::load(&manifest) {
        Ok(manifest) => manifest,
        Err(e) => match e.line_col() {
            Some((line, col)) => {
                return Err(Box::new(TracebackError {
                    path: path.to_path_buf(),
                    line: line as u32 + 1,
                    column: col as u32 + 1,
                    kind: e.to_string(),
                }))
            }
            _ => return Err(Box::new(format!("failed to parse manifest:\n  {}", e))),
        },
    };

    Config::try_from(manifest).map_err(with_hint)
}

/// Applies the `--template`, `--theme` and `--target-in` overrides to the configuration.
fn apply_overrides(
    mut config: Config,
    args: &ArgMatches,
) -> Result<Config, Box<dyn SiteForgeError>> {
    if let Some(template) = args.value_of("template") {
        config.template = template.parse().map_err(with_hint)?;
    }

    if let Some(theme) = args.value_of("theme") {
        config.theme = theme.parse()?;
    }

    if let Some(preset) = args.value_of("target-in") {
        let preset: TargetPreset = preset.parse()?;
        config.target = preset.target();
        detail!("Targeting", "{}", config.target);
    }

    Ok(config)
}

/// Appends a pointer to `siteforge templates` to unknown template errors.
fn with_hint(e: siteforge_core::Error) -> Box<dyn SiteForgeError> {
    match e {
        siteforge_core::Error::UnknownTemplate(_) => Box::new(format!(
            "{}\n  run `siteforge templates` to list the available templates",
            e
        )),
        e => Box::new(e),
    }
}
