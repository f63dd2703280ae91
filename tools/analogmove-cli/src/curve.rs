//! Curve command - print the response curve

use analogmove_core::ResponseCurve;
use anyhow::{Result, bail};
use clap::Args;

/// Arguments for the curve command
#[derive(Args)]
pub struct CurveArgs {
    /// Curve exponent (defaults to the configured exponent)
    #[arg(short, long)]
    pub exponent: Option<f32>,

    /// Number of intervals between 0.0 and 1.0
    #[arg(short, long, default_value = "10")]
    pub steps: usize,
}

/// Execute the curve command
pub fn execute(args: CurveArgs) -> Result<()> {
    let exponent = match args.exponent {
        Some(e) => e,
        None => crate::config::effective(None)?.input.analog.exponent,
    };
    if !exponent.is_finite() || exponent <= 0.0 {
        bail!("exponent must be a positive finite number, got {}", exponent);
    }

    print!("{}", render(&ResponseCurve::new(exponent), args.steps));
    Ok(())
}

fn render(curve: &ResponseCurve, steps: usize) -> String {
    let mut out = format!("exponent {}\n  input   output\n", curve.exponent());
    for (x, y) in curve.table(steps) {
        out.push_str(&format!("  {:.3}   {:.4}\n", x, y));
    }
    out
}
