use anyhow::Result;
use colored::Colorize;

use crate::cli::output::OutputOptions;
use crate::cli::table;
use crate::core::aws;
use crate::core::cost::{self, CostQueryError};
use crate::core::formatter::format_usd;
use crate::core::models::cost::CostReport;

pub async fn run(
    buckets: Vec<String>,
    days: i64,
    profile: Option<String>,
    opts: &OutputOptions,
) -> Result<()> {
    colored::control::set_override(opts.use_color);

    // A non-positive lookback is an empty window, not an API error.
    let window_days = days.max(0);
    let (start, end) = cost::lookback_period(window_days);

    if !opts.is_json() {
        let quoted: Vec<String> = buckets.iter().map(|b| format!("'{b}'")).collect();
        println!(
            "Fetching aggregated costs for buckets: {}",
            quoted.join(", ")
        );
        println!("Period: {start} to {end}...");
    }

    let groups = if window_days > 0 {
        let client = aws::cost_explorer_client(profile.as_deref()).await;
        match cost::fetch_usage_groups(&client, &buckets, &start, &end).await {
            Ok(groups) => groups,
            Err(err @ CostQueryError::Request(_)) => {
                eprintln!(
                    "{} {err}",
                    "Error fetching data from Cost Explorer:".red()
                );
                eprintln!(
                    "Tip: Ensure the 'aws:s3:bucket' Cost Allocation Tag is enabled in the Billing Console."
                );
                std::process::exit(1);
            }
            Err(err) => {
                eprintln!("{} {err}", "Error reading Cost Explorer response:".red());
                std::process::exit(1);
            }
        }
    } else {
        Vec::new()
    };

    let report = cost::build_report(groups, start, end);

    if opts.is_json() {
        println!("{}", serde_json::to_string(&report)?);
        return Ok(());
    }

    println!();
    println!("{}", "--- Aggregated Cost Summary ---".bold());
    println!(
        "{}",
        table::render(&["Category", "Cost"], &summary_rows(&report))
    );

    println!();
    println!("{}", "--- Detailed Breakdown ---".bold());
    println!(
        "{}",
        table::render(&["Usage Type", "Category", "Cost"], &detail_rows(&report))
    );

    Ok(())
}

/// (category, cost) rows descending by cost, with the trailing TOTAL row.
fn summary_rows(report: &CostReport) -> Vec<Vec<String>> {
    let mut rows: Vec<Vec<String>> = report
        .totals
        .iter()
        .map(|t| vec![t.category.to_string(), format_usd(t.amount)])
        .collect();
    rows.push(vec!["TOTAL".to_string(), format_usd(report.total_cost)]);
    rows
}

/// (usage type, category, cost) rows descending by cost.
fn detail_rows(report: &CostReport) -> Vec<Vec<String>> {
    report
        .records
        .iter()
        .map(|r| {
            vec![
                r.usage_type.clone(),
                r.category.to_string(),
                format_usd(r.amount),
            ]
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expected(raw: &[&[&str]]) -> Vec<Vec<String>> {
        raw.iter()
            .map(|r| r.iter().map(|c| c.to_string()).collect())
            .collect()
    }

    #[test]
    fn scenario_zero_cost_row_is_dropped() {
        let report = cost::build_report(
            vec![
                ("TimedStorage-ByteHrs".to_string(), 12.5),
                ("Requests-Tier1".to_string(), 0.0),
            ],
            "2026-07-08".to_string(),
            "2026-08-07".to_string(),
        );
        assert_eq!(
            summary_rows(&report),
            expected(&[&["Storage", "$12.5000"], &["TOTAL", "$12.5000"]])
        );
        assert_eq!(
            detail_rows(&report),
            expected(&[&["TimedStorage-ByteHrs", "Storage", "$12.5000"]])
        );
    }

    #[test]
    fn summary_total_row_trails_descending_categories() {
        let report = cost::build_report(
            vec![
                ("Requests-Tier1".to_string(), 0.5),
                ("DataTransfer-Out-Bytes".to_string(), 3.0),
            ],
            "2026-07-08".to_string(),
            "2026-08-07".to_string(),
        );
        assert_eq!(
            summary_rows(&report),
            expected(&[
                &["Data Transfer", "$3.0000"],
                &["Requests", "$0.5000"],
                &["TOTAL", "$3.5000"],
            ])
        );
    }

    #[test]
    fn empty_report_still_has_total_row() {
        let report = cost::build_report(
            vec![],
            "2026-08-07".to_string(),
            "2026-08-07".to_string(),
        );
        assert_eq!(summary_rows(&report), expected(&[&["TOTAL", "$0.0000"]]));
        assert!(detail_rows(&report).is_empty());
    }
}
