#[macro_use]
pub mod logger;

pub mod build;
pub mod config;
pub mod error;
pub mod fs;
pub mod new;
pub mod templates;

#[cfg(test)]
mod test;

use crate::error::SiteForgeError;
use crate::logger::{LogLevel, Logger, LOGGER};

use clap::{Arg, ArgMatches, Command};

fn main() {
    let matches = app().get_matches();

    let log_level = if matches.is_present("quiet") {
        LogLevel::Quiet
    } else if matches.is_present("verbose") {
        LogLevel::Verbose
    } else {
        LogLevel::Normal
    };

    Logger::new(log_level).register();

    let result = run(&matches);

    if let Err(e) = result {
        if LOGGER.get().map(Logger::has_logged).unwrap_or(false) {
            eprintln!();
        }

        e.print();
        std::process::exit(1);
    }
}

/// Dispatches the subcommand.
pub fn run(matches: &ArgMatches) -> Result<(), Box<dyn SiteForgeError>> {
    match matches.subcommand() {
        Some(("build", args)) => build::build(args).map(|_| ()),
        Some(("new", args)) => new::new(args),
        Some(("templates", args)) => templates::list(args),
        _ => unreachable!(),
    }
}

pub fn app() -> Command<'static> {
    Command::new("SiteForge")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Generates self-contained coming-soon pages")
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .short('q')
                .global(true)
                .help("Only log errors"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .global(true)
                .conflicts_with("quiet")
                .help("Log every step of the build"),
        )
        .subcommand(
            Command::new("build")
                .about("Renders the page described by the manifest")
                .arg(
                    Arg::new("manifest-path")
                        .long("manifest-path")
                        .help("Path to the manifest file")
                        .takes_value(true)
                        .default_value("siteforge.toml"),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Output directory, relative to the manifest")
                        .takes_value(true)
                        .default_value("dist"),
                )
                .arg(
                    Arg::new("template")
                        .long("template")
                        .short('t')
                        .help("Overrides the template selected by the manifest")
                        .takes_value(true),
                )
                .arg(
                    Arg::new("theme")
                        .long("theme")
                        .help("Overrides the theme selected by the manifest")
                        .takes_value(true)
                        .possible_values(["dark", "light"]),
                )
                .arg(
                    Arg::new("target-in")
                        .long("target-in")
                        .help("Counts down to a target this far from now")
                        .takes_value(true)
                        .possible_values(["+3d", "+7d", "+30d"]),
                )
                .arg(
                    Arg::new("all")
                        .long("all")
                        .help("Renders every template")
                        .conflicts_with("template"),
                )
                .arg(
                    Arg::new("stdout")
                        .long("stdout")
                        .help("Prints the document instead of saving it")
                        .conflicts_with("all"),
                ),
        )
        .subcommand(
            Command::new("new")
                .about("Creates a new site")
                .arg(Arg::new("name").help("Name of the site").required(true))
                .arg(
                    Arg::new("no-git")
                        .long("no-git")
                        .help("Don't initialise a Git repository"),
                ),
        )
        .subcommand(
            Command::new("templates")
                .about("Lists the available templates")
                .arg(Arg::new("json").long("json").help("Prints the list as JSON")),
        )
        .subcommand_required(true)
}
