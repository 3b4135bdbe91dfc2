use clap::Args;
use receipt_points::error::AppError;
use receipt_points::receipts::{breakdown, PointsBreakdown, Receipt};
use std::fmt::Write as _;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// Path to a receipt JSON document
    #[arg(long)]
    pub(crate) receipt: PathBuf,
    /// Print the breakdown as JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let raw = std::fs::read_to_string(&args.receipt)?;
    let receipt: Receipt = serde_json::from_str(&raw)?;
    let outcome = breakdown(&receipt);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
        print!("{}", render_breakdown(&receipt, &outcome));
    }

    Ok(())
}

fn render_breakdown(receipt: &Receipt, outcome: &PointsBreakdown) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Receipt from {} on {} at {} (total {})",
        receipt.retailer, receipt.purchase_date, receipt.purchase_time, receipt.total
    );

    for component in &outcome.components {
        let _ = writeln!(
            out,
            "- {:<24} {:>4}  {}",
            component.rule.label(),
            component.points,
            component.notes
        );
    }

    let _ = writeln!(out, "Total points: {}", outcome.total);
    out
}
