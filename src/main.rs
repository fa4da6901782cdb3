mod input;
mod logging;
mod model;
mod pipeline;
mod report;

use std::io::Write;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::input::DEFAULT_INPUT;
use crate::model::fiducial::{DEFAULT_FIDUCIAL, builtin_fiducials};
use crate::model::selection::DEFAULT_PARAMS;
use crate::pipeline::stage1_centers::CenterMode;
use crate::pipeline::stage4_report::ReportFormat;
use crate::pipeline::{PipelineError, RunConfig};
use crate::report::ReportError;
use crate::report::text::render_fiducial_catalog;

#[derive(Debug, Parser)]
#[command(name = "boxrank", version)]
#[command(about = "Rank simulation boxes by RMS distance from a fiducial cosmology")]
struct Cli {
    /// comma separated parameter list
    #[arg(long, default_value = DEFAULT_PARAMS)]
    params: String,

    /// fiducial cosmology, either mdpl2 or pl2018
    #[arg(long, default_value = DEFAULT_FIDUCIAL)]
    fiducial: String,

    /// center on the box-sample mean instead of the fiducial values
    #[arg(long)]
    usemean: bool,

    /// box parameter table (whitespace separated, header row, optionally .gz)
    #[arg(long, default_value = DEFAULT_INPUT)]
    input: PathBuf,

    /// report format
    #[arg(long, value_enum, default_value_t = FormatArg::Text)]
    format: FormatArg,

    /// print the built-in fiducial cosmologies and exit
    #[arg(long)]
    list_fiducials: bool,

    /// debug logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum FormatArg {
    Text,
    Json,
}

fn main() {
    let cli = Cli::parse();
    logging::init_tracing(cli.verbose);
    if let Err(err) = run(cli) {
        tracing::error!("{err}");
        // Written unconditionally: RUST_LOG may filter the event above.
        report_failure(&err, &mut std::io::stderr());
        std::process::exit(1);
    }
}

fn report_failure(err: &PipelineError, out: &mut dyn Write) {
    let _ = writeln!(out, "error: {err}");
}

fn run(cli: Cli) -> Result<(), PipelineError> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    if cli.list_fiducials {
        out.write_all(render_fiducial_catalog(builtin_fiducials()).as_bytes())
            .map_err(ReportError::from)?;
        return Ok(());
    }

    let config = resolve_config(cli);
    pipeline::run(&config, &mut out)
}

fn resolve_config(cli: Cli) -> RunConfig {
    RunConfig {
        input: cli.input,
        params: cli.params,
        fiducial: cli.fiducial,
        center_mode: if cli.usemean {
            CenterMode::SampleMean
        } else {
            CenterMode::Fiducial
        },
        format: match cli.format {
            FormatArg::Text => ReportFormat::Text,
            FormatArg::Json => ReportFormat::Json,
        },
    }
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
