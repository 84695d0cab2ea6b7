use anyhow::Result;
use colored::Colorize;

use crate::cli::output::OutputOptions;
use crate::cli::table;
use crate::core::aws;
use crate::core::estimate;
use crate::core::formatter::{format_gb, format_usd};
use crate::core::models::estimate::{StorageClass, StorageReport};

const DISCLAIMER: &[&str] = &[
    "DISCLAIMER: This is an ESTIMATE based on CloudWatch 'BucketSizeBytes'.",
    "1. It does NOT include Data Transfer costs.",
    "2. It does NOT include Request costs (PUT, GET, etc.).",
    "3. It assumes standard pricing rates and does not account for free tiers or volume discounts.",
    "4. CloudWatch S3 metrics are updated daily, so data may be up to 24 hours old.",
];

pub async fn run(
    bucket: String,
    region: String,
    profile: Option<String>,
    opts: &OutputOptions,
) -> Result<()> {
    colored::control::set_override(opts.use_color);

    if !opts.is_json() {
        println!("Fetching CloudWatch metrics for bucket '{bucket}' in region '{region}'...");
    }

    let client = aws::cloudwatch_client(profile.as_deref(), &region).await;

    let mut sizes = Vec::new();
    for class in StorageClass::ALL {
        match estimate::fetch_class_size(&client, &bucket, class).await {
            Ok(Some(bytes)) => sizes.push((class, bytes)),
            // No datapoints in the window: the class stays absent from the
            // report, same as a tier that was never provisioned.
            Ok(None) => {}
            Err(err) => {
                eprintln!(
                    "{} Could not fetch metric for {}: {err}",
                    "Warning:".yellow(),
                    class.metric_name()
                );
            }
        }
    }

    let report = estimate::build_report(&bucket, sizes);

    if opts.is_json() {
        println!("{}", serde_json::to_string(&report)?);
        return Ok(());
    }

    println!();
    println!("{}", "--- Storage Cost Estimate (Monthly) ---".bold());
    if report.estimates.is_empty() {
        println!(
            "No storage metrics found. Note that CloudWatch metrics for S3 are reported once daily."
        );
    } else {
        println!(
            "{}",
            table::render(
                &["Storage Type", "Size", "Est. Cost"],
                &estimate_rows(&report)
            )
        );
    }

    println!();
    println!("{}", "=".repeat(60));
    for line in DISCLAIMER {
        println!("{line}");
    }
    println!("{}", "=".repeat(60));

    Ok(())
}

/// (storage type, size, cost) rows in query order, with the trailing TOTAL
/// row summing both columns.
fn estimate_rows(report: &StorageReport) -> Vec<Vec<String>> {
    let mut rows: Vec<Vec<String>> = report
        .estimates
        .iter()
        .map(|e| {
            vec![
                e.class.metric_name().to_string(),
                format_gb(e.size_gb),
                format_usd(e.monthly_cost),
            ]
        })
        .collect();
    rows.push(vec![
        "TOTAL".to_string(),
        format_gb(report.total_gb),
        format_usd(report.total_cost),
    ]);
    rows
}
