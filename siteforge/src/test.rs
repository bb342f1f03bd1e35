use crate::{app, build, run};

use std::fs::{read_to_string, remove_dir_all};
use std::path::Path;
use std::process::exit;

macro_rules! test {
    ($name:ident, $manifest_path:expr, $output:expr $(, $arg:expr)*) => {
        #[test]
        fn $name() {
            let manifest_path = concat!(env!("CARGO_MANIFEST_DIR"), $manifest_path);
            let info = full_build(manifest_path, $output, &[$($arg),*]);
            let outputs = info
                .outputs
                .iter()
                .map(|path| read_to_string(path).unwrap())
                .collect::<Vec<_>>();
            cleanup(manifest_path, $output);

            assert!(!outputs.is_empty());

            for html in outputs {
                assert!(html.starts_with("<!doctype html>"));
                assert!(html.contains("data-theme=\"light\""));
                assert_eq!(html.matches("cr-stamp-host").count(), 1);
            }
        }
    };
}

test!(basic, "/tests/basic/siteforge.toml", "dist-basic");
test!(
    basic_every_template,
    "/tests/basic/siteforge.toml",
    "dist-all",
    "--all"
);
test!(
    basic_with_overrides,
    "/tests/basic/siteforge.toml",
    "dist-overrides",
    "--template",
    "terminal",
    "--target-in",
    "+3d"
);

#[test]
fn basic_saves_under_the_slugged_name() {
    let manifest_path = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/basic/siteforge.toml");
    let info = full_build(manifest_path, "dist-named", &[]);
    let names = info
        .outputs
        .iter()
        .filter_map(|path| path.file_name())
        .map(|name| name.to_string_lossy().to_string())
        .collect::<Vec<_>>();
    cleanup(manifest_path, "dist-named");

    assert_eq!(names, vec!["nova-noir.html".to_string()]);
}

#[test]
fn unknown_template_override_fails() {
    let manifest_path = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/basic/siteforge.toml");
    let args = app().get_matches_from(vec![
        "siteforge",
        "build",
        "--manifest-path",
        manifest_path,
        "--output",
        "dist-unknown",
        "--template",
        "brutalist",
    ]);

    let result = match args.subcommand() {
        Some(("build", args)) => build::build(args),
        _ => unreachable!(),
    };
    cleanup(manifest_path, "dist-unknown");

    assert!(result.is_err());
}

#[test]
fn missing_manifest_fails() {
    let args = app().get_matches_from(vec![
        "siteforge",
        "build",
        "--manifest-path",
        concat!(env!("CARGO_MANIFEST_DIR"), "/tests/missing/siteforge.toml"),
    ]);

    assert!(run(&args).is_err());
}

#[test]
fn templates_lists() {
    let args = app().get_matches_from(vec!["siteforge", "templates", "--json"]);

    assert!(run(&args).is_ok());
}

fn full_build(manifest_path: &str, output: &str, extra: &[&str]) -> build::BuildInfo {
    let mut argv = vec![
        "siteforge",
        "build",
        "--manifest-path",
        manifest_path,
        "--output",
        output,
    ];
    argv.extend_from_slice(extra);

    let args = app().get_matches_from(argv);
    let result = match args.subcommand() {
        Some(("build", args)) => build::build(args),
        _ => unreachable!(),
    };

    match result {
        Ok(info) => info,
        Err(e) => {
            cleanup(manifest_path, output);
            e.print();
            exit(1);
        }
    }
}

fn cleanup(manifest_path: &str, output: &str) {
    let path = Path::new(manifest_path);
    let _ = remove_dir_all(path.parent().unwrap().join(output));
}
