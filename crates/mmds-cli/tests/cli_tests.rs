//! End-to-end runs of parsed command lines.

#![allow(clippy::unwrap_used)]

use std::path::Path;

use clap::Parser;
use mmds_cli::{Cli, MmdsConfig, run};

const STYLESHEET: &str = ":export {
  clr-neutral-white: #fff; clr-neutral-100: #f5f5f5; clr-neutral-200: #e5e5e5;
  clr-neutral-300: #d4d4d4; clr-neutral-400: #737373; clr-neutral-500: #404040;
  clr-neutral-black: #000;
  clr-primary-100: #dbeafe; clr-primary-200: #bfdbfe; clr-primary-300: #93c5fd;
  clr-primary-400: oklch(55.857% 0.1908 256.019); clr-primary-500: #1e40af;
  clr-secondary-100: #ede9fe; clr-secondary-200: #ddd6fe; clr-secondary-300: #c4b5fd;
  clr-secondary-400: #8b5cf6; clr-secondary-500: #6d28d9;
  clr-accent-100: #fef3c7; clr-accent-200: #fde68a; clr-accent-300: #fcd34d;
  clr-accent-400: #f59e0b; clr-accent-500: #b45309;
  clr-success-100: #dcfce7; clr-success-200: #bbf7d0; clr-success-300: #86efac;
  clr-success-400: #22c55e; clr-success-500: #15803d;
  clr-error-100: #fee2e2; clr-error-200: #fecaca; clr-error-300: #fca5a5;
  clr-error-400: #ef4444; clr-error-500: #b91c1c;
  bp-small: 30em; bp-medium: 45em; bp-large: 60em;
  size-0: 0; size-1: 0.125rem; size-2: 0.25rem; size-3: 0.5rem; size-4: 1rem;
  size-5: 1.5rem; size-6: 2rem; size-7: 2.5rem; size-8: 3rem; size-9: 4rem;
  size-10: 5rem; size-11: 6rem; size-12: 7.5rem; size-13: 10rem; size-14: 12.5rem;
  size-15: 15rem;
  fs-200: 0.75rem; fs-300: 0.875rem; fs-400: 1rem; fs-500: 1.125rem;
  fs-600: 1.25rem; fs-700: 1.5rem; fs-800: 2rem; fs-900: 2.5rem;
  fw-thin: 100; fw-extra-light: 200; fw-light: 300; fw-regular: 400; fw-medium: 500;
  fw-semi-bold: 600; fw-bold: 700; fw-extra-bold: 800; fw-black: 900;
  ff-base: Inter, system-ui, sans-serif; ff-accent: Georgia, serif;
}
";

fn run_args(args: &[&str]) -> mmds_cli::Result<()> {
    let mut argv = vec!["mmds"];
    argv.extend_from_slice(args);
    run(Cli::try_parse_from(argv).unwrap())
}

fn write_project(dir: &Path) -> String {
    std::fs::write(dir.join("tokens.module.css"), STYLESHEET).unwrap();

    let mut config = MmdsConfig::default();
    config.source.path = dir.join("tokens.module.css");
    config.output.dir = dir.join("dist");
    config.output.css_selector = "[data-theme]".to_string();

    let path = dir.join("mmds.toml");
    std::fs::write(&path, config.to_toml_string().unwrap()).unwrap();
    path.to_str().unwrap().to_string()
}

#[test]
fn test_check_with_config() {
    let dir = tempfile::TempDir::new().unwrap();
    let config = write_project(dir.path());
    run_args(&["--config", &config, "check"]).unwrap();
}

#[test]
fn test_export_css_uses_configured_selector() {
    let dir = tempfile::TempDir::new().unwrap();
    let config = write_project(dir.path());
    let out = dir.path().join("tokens.css");

    run_args(&["--config", &config, "export", "--as", "css", "--out", out.to_str().unwrap()])
        .unwrap();

    let css = std::fs::read_to_string(&out).unwrap();
    assert!(css.starts_with("[data-theme] {\n"));
    assert!(css.contains("  --clr-primary-400: oklch(55.857% 0.1908 256.019);\n"));
}

#[test]
fn test_export_with_source_format_and_shape() {
    let dir = tempfile::TempDir::new().unwrap();
    write_project(dir.path());
    let source = dir.path().join("tokens.module.css");
    let out = dir.path().join("design-tokens.json");

    run_args(&[
        "export",
        "--source",
        source.to_str().unwrap(),
        "--format",
        "css",
        "--as",
        "grouped",
        "--out",
        out.to_str().unwrap(),
    ])
    .unwrap();

    let grouped: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(grouped["fontWeights"]["bold"], "700");
    assert_eq!(grouped["breakpoints"]["medium"], "45em");
}

#[test]
fn test_build_into_configured_dir() {
    let dir = tempfile::TempDir::new().unwrap();
    let config = write_project(dir.path());

    run_args(&["build", "--config", &config]).unwrap();

    let flat: serde_json::Value = serde_json::from_str(
        &std::fs::read_to_string(dir.path().join("dist/tokens.json")).unwrap(),
    )
    .unwrap();
    assert_eq!(flat["size-4"], "1rem");
    assert_eq!(flat["fw-bold"], "700");
}

#[test]
fn test_drift_fails_the_command() {
    let dir = tempfile::TempDir::new().unwrap();
    let config = write_project(dir.path());
    let broken = STYLESHEET.replace("clr-error-500: #b91c1c;", "clr-error-600: #b91c1c;");
    std::fs::write(dir.path().join("tokens.module.css"), broken).unwrap();

    let err = run_args(&["--config", &config, "check"]).unwrap_err();
    assert!(err.is_drift());
    let message = err.to_string();
    assert!(message.contains("(missing: clr-error-500)"));
    assert!(message.contains("(undeclared: clr-error-600)"));
}

#[test]
fn test_contract_to_file() {
    let dir = tempfile::TempDir::new().unwrap();
    let out = dir.path().join("tokens.d.ts");

    run_args(&["contract", "--lang", "ts", "--out", out.to_str().unwrap()]).unwrap();
    let ts = std::fs::read_to_string(&out).unwrap();
    assert!(ts.contains("export type TokenMap = Readonly<Record<FlatKey, string>>;"));
}

#[test]
fn test_config_init_then_load() {
    let dir = tempfile::TempDir::new().unwrap();
    let file = dir.path().join("mmds.toml");
    let file = file.to_str().unwrap();

    run_args(&["config", "init", "--file", file]).unwrap();
    assert!(run_args(&["config", "init", "--file", file]).is_err());
    run_args(&["config", "init", "--file", file, "--force"]).unwrap();

    assert_eq!(MmdsConfig::load(Some(file)).unwrap(), MmdsConfig::default());
}
