//! Tests for the tx-config command line.

use super::*;

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(std::iter::once("tx-config").chain(args.iter().copied()))
        .expect("arguments parse")
}

#[test]
fn emit_defaults_to_js_on_stdout() {
    match parse(&["emit"]).command {
        Commands::Emit {
            format,
            out,
            base_font_size,
        } => {
            assert_eq!(format, OutputFormat::Js);
            assert_eq!(out, None);
            assert_eq!(base_font_size, None);
        }
        other => panic!("unexpected command {other:?}"),
    }
}

#[test]
fn bare_out_flag_targets_default_file() {
    match parse(&["emit", "--out"]).command {
        Commands::Emit { out, .. } => assert_eq!(out, Some(PathBuf::from(DEFAULT_OUTPUT_FILE))),
        other => panic!("unexpected command {other:?}"),
    }
}

#[test]
fn emit_accepts_format_and_root() {
    match parse(&["emit", "--format", "json", "--out", "theme.json", "--base-font-size", "10"])
        .command
    {
        Commands::Emit {
            format,
            out,
            base_font_size,
        } => {
            assert_eq!(format, OutputFormat::Json);
            assert_eq!(out, Some(PathBuf::from("theme.json")));
            assert_eq!(base_font_size, Some(10.0));
        }
        other => panic!("unexpected command {other:?}"),
    }
}

#[test]
fn unknown_format_is_rejected() {
    assert!(Cli::try_parse_from(["tx-config", "emit", "--format", "yaml"]).is_err());
}

#[test]
fn resolve_rejects_bad_root() {
    let err = resolve(Some(0.0)).unwrap_err();
    assert!(format!("{err:#}").contains("base font size"));
}

#[test]
fn js_rendering_is_a_default_export() {
    let root = resolve(None).unwrap();
    let source = render(&root, OutputFormat::Js).unwrap();
    assert!(source.starts_with("export default {"));
    assert!(source.ends_with("};\n"));
}

#[test]
fn json_rendering_ends_with_newline() {
    let root = resolve(None).unwrap();
    let json = render(&root, OutputFormat::Json).unwrap();
    assert!(json.starts_with('{'));
    assert!(json.ends_with("}\n"));
}

#[test]
fn summary_counts_families() {
    let root = resolve(None).unwrap();
    assert_eq!(
        summary(&root),
        "configuration valid: 1 content globs, 7 screens, 6 palettes, 3 font families, 11 font sizes, 1 safelisted classes"
    );
}

#[test]
fn emit_writes_file() {
    let path = std::env::temp_dir().join(format!("tx-config-test-{}.js", std::process::id()));
    let cli = parse(&["emit", "--out", path.to_str().unwrap()]);
    run(cli).unwrap();
    let written = fs::read_to_string(&path).unwrap();
    fs::remove_file(&path).unwrap();
    assert!(written.contains("\"98.75rem\""));
}

#[test]
fn check_runs_on_default_configuration() {
    run(parse(&["check"])).unwrap();
}

#[test]
fn check_with_custom_root_runs() {
    run(parse(&["check", "--base-font-size", "10"])).unwrap();
}

#[test]
fn check_rejects_zero_root() {
    let err = run(parse(&["check", "--base-font-size", "0"])).unwrap_err();
    assert!(format!("{err:#}").contains("invalid --base-font-size"));
}
