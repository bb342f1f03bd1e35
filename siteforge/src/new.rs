//! Provides the `siteforge new` functionality.

use crate::config::git;
use crate::error::SiteForgeError;
use crate::fs;

use clap::ArgMatches;
use include_dir::{include_dir, Dir, DirEntry};

use std::fs::{create_dir, write};
use std::path::{Path, PathBuf};

/// The starter project, built into the binary when compiled.
static STARTER_PROJECT: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/starter");

/// The name of the manifest file.
const MANIFEST: &str = "siteforge.toml";

/// Creates a new site with the given arguments.
pub fn new(args: &ArgMatches) -> Result<(), Box<dyn SiteForgeError>> {
    let name = args
        .value_of("name")
        .ok_or_else(|| "missing site name".to_string())?;
    let path = PathBuf::try_from(name).map_err(|_| fs::Error::Write)?;
    let no_git = args.is_present("no-git");

    if path.exists() {
        return Err(format!("destination `{}` already exists", name).into());
    }

    let starter = STARTER_PROJECT
        .get_file(MANIFEST)
        .and_then(|file| file.contents_utf8())
        .ok_or(fs::Error::Read)?;

    create_dir(&path).map_err(|_| fs::Error::Write)?;
    write(path.join(MANIFEST), starter_manifest(starter, name)).map_err(|_| fs::Error::Write)?;

    extract(&path, &STARTER_PROJECT)?;

    if !no_git && !git::init_repository(&format!("./{}", name)) {
        detail!("Skipped", "git repository initialisation");
    }

    log!("Created", "new SiteForge page `{}`", name);

    Ok(())
}

/// Sets the brand of the starter manifest to the name of the new site.
fn starter_manifest(starter: &str, name: &str) -> String {
    let brand = toml::Value::String(name.to_string());

    starter
        .lines()
        .map(|line| {
            if line.starts_with("brand = ") {
                format!("brand = {}\n", brand)
            } else {
                format!("{}\n", line)
            }
        })
        .collect()
}

/// Extracts the embedded directory to the filesystem.
fn extract(root: &Path, dir: &Dir) -> Result<(), fs::Error> {
    for child in dir.entries() {
        match child {
            DirEntry::Dir(dir) => {
                create_dir(root.join(dir.path())).map_err(|_| fs::Error::Write)?;
                extract(root, dir)?
            }
            DirEntry::File(file) => {
                if !file.path().ends_with(MANIFEST) {
                    write(root.join(file.path()), file.contents()).map_err(|_| fs::Error::Write)?
                }
            }
        }
    }

    Ok(())
}
