use super::*;

#[test]
fn test_cli_defaults() {
    let cli = Cli::try_parse_from(["boxrank"]).unwrap();
    assert_eq!(cli.params, "ombh2,omch2,w0,ns,ln10As,H0,Neff");
    assert_eq!(cli.fiducial, "mdpl2");
    assert!(!cli.usemean);
    assert_eq!(cli.input, PathBuf::from("./LH_np7_n25_s555.dat"));
    assert_eq!(cli.format, FormatArg::Text);

    let config = resolve_config(cli);
    assert_eq!(config.center_mode, CenterMode::Fiducial);
    assert_eq!(config.format, ReportFormat::Text);
}

#[test]
fn test_cli_overrides() {
    let cli = Cli::try_parse_from([
        "boxrank",
        "--params",
        "H0,ns",
        "--fiducial",
        "pl2018",
        "--usemean",
        "--input",
        "boxes.dat.gz",
        "--format",
        "json",
    ])
    .unwrap();
    let config = resolve_config(cli);
    assert_eq!(config.params, "H0,ns");
    assert_eq!(config.fiducial, "pl2018");
    assert_eq!(config.center_mode, CenterMode::SampleMean);
    assert_eq!(config.input, PathBuf::from("boxes.dat.gz"));
    assert_eq!(config.format, ReportFormat::Json);
}

#[test]
fn test_cli_rejects_unknown_format() {
    assert!(Cli::try_parse_from(["boxrank", "--format", "csv"]).is_err());
}

#[test]
fn test_cli_usemean_takes_no_value() {
    assert!(Cli::try_parse_from(["boxrank", "--usemean", "true"]).is_err());
}

#[test]
fn test_report_failure_writes_error_text() {
    let err = PipelineError::from(crate::input::InputError::io(
        std::path::Path::new("nope.dat"),
        std::io::Error::new(std::io::ErrorKind::NotFound, "No such file or directory"),
    ));
    let mut out = Vec::new();
    report_failure(&err, &mut out);
    let text = String::from_utf8(out).unwrap();
    assert_eq!(
        text,
        "error: IO error reading nope.dat: No such file or directory\n"
    );
}
