//! Replay command - run a trace headlessly

use analogmove_core::replay::{self, ExecutionReport, ReplayOptions};
use anyhow::{Context, Result, bail};
use clap::Args;
use std::path::PathBuf;

/// Arguments for the replay command
#[derive(Args)]
pub struct ReplayArgs {
    /// Trace file (TOML)
    pub trace: PathBuf,

    /// Config file to use instead of the platform default
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Stop at the first failed expectation
    #[arg(long)]
    pub fail_fast: bool,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,
}

/// Execute the replay command
pub fn execute(args: ReplayArgs) -> Result<()> {
    let script = replay::load_trace(&args.trace)
        .with_context(|| format!("failed to load trace {}", args.trace.display()))?;
    let config = crate::config::effective(args.config.as_deref())?;
    tracing::info!(
        "Replaying {} ({} frames)",
        args.trace.display(),
        script.frames.len()
    );

    let options = ReplayOptions {
        fail_fast: args.fail_fast,
    };
    let report = replay::run_trace(&script, &config.input, &options)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", render(&report));
    }

    if !report.passed() {
        bail!("{}", failure_summary(&report));
    }
    Ok(())
}

fn failure_summary(report: &ExecutionReport) -> String {
    let summary = &report.summary;
    format!(
        "{} of {} expectation(s) failed",
        summary.assertions_failed,
        summary.assertions_passed + summary.assertions_failed
    )
}

fn render(report: &ExecutionReport) -> String {
    let mut out = String::new();
    for (frame, output) in report.outputs.iter().enumerate() {
        match output {
            Some(o) => out.push_str(&format!(
                "{:>5}  analog   forward {:+.3}  sideways {:+.3}{}{}\n",
                frame,
                o.forward_axis,
                o.sideways_axis,
                if o.jumping { "  jump" } else { "" },
                if o.sneaking { "  sneak" } else { "" },
            )),
            None => out.push_str(&format!("{:>5}  digital\n", frame)),
        }
    }
    for failure in &report.failures {
        out.push_str(&format!(
            "FAIL frame {} (t={}ms): {}\n",
            failure.frame, failure.t, failure.message
        ));
    }
    out.push_str(&format!(
        "{}: {}/{} frames, {} passed, {} failed\n",
        report.summary.status,
        report.frames_executed,
        report.total_frames,
        report.summary.assertions_passed,
        report.summary.assertions_failed
    ));
    out
}
