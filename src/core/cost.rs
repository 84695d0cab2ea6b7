use aws_sdk_costexplorer::error::DisplayErrorContext;
use aws_sdk_costexplorer::types::{
    DateInterval, Dimension, DimensionValues, Expression, Granularity, GroupDefinition,
    GroupDefinitionType, TagValues,
};
use aws_sdk_costexplorer::Client;
use chrono::{Duration, Local};
use thiserror::Error;

use crate::core::categorize::categorize;
use crate::core::models::cost::{CategoryTotal, CostRecord, CostReport};

const S3_SERVICE: &str = "Amazon Simple Storage Service";
const BUCKET_TAG: &str = "aws:s3:bucket";

#[derive(Debug, Error)]
pub enum CostQueryError {
    /// The GetCostAndUsage call itself failed (credentials, disabled cost
    /// allocation tag, network).
    #[error("{0}")]
    Request(String),
    /// The call succeeded but the response was not usable.
    #[error("{0}")]
    Reply(String),
}

/// [start, end) of the lookback window ending today, as YYYY-MM-DD strings.
pub fn lookback_period(days: i64) -> (String, String) {
    let end = Local::now().date_naive();
    let start = end - Duration::days(days);
    (
        start.format("%Y-%m-%d").to_string(),
        end.format("%Y-%m-%d").to_string(),
    )
}

/// Run the single GetCostAndUsage query (monthly granularity, unblended
/// cost, service = S3 and bucket tag in `buckets`, grouped by usage type)
/// and flatten every period's groups into (usage type, amount) pairs.
pub async fn fetch_usage_groups(
    client: &Client,
    buckets: &[String],
    start: &str,
    end: &str,
) -> Result<Vec<(String, f64)>, CostQueryError> {
    let period = DateInterval::builder()
        .start(start)
        .end(end)
        .build()
        .map_err(|e| CostQueryError::Request(e.to_string()))?;

    let service_filter = Expression::builder()
        .dimensions(
            DimensionValues::builder()
                .key(Dimension::Service)
                .values(S3_SERVICE)
                .build(),
        )
        .build();
    let bucket_filter = Expression::builder()
        .tags(
            TagValues::builder()
                .key(BUCKET_TAG)
                .set_values(Some(buckets.to_vec()))
                .build(),
        )
        .build();

    let response = client
        .get_cost_and_usage()
        .time_period(period)
        .granularity(Granularity::Monthly)
        .filter(
            Expression::builder()
                .and(service_filter)
                .and(bucket_filter)
                .build(),
        )
        .metrics("UnblendedCost")
        .group_by(
            GroupDefinition::builder()
                .r#type(GroupDefinitionType::Dimension)
                .key("USAGE_TYPE")
                .build(),
        )
        .send()
        .await
        .map_err(|e| CostQueryError::Request(DisplayErrorContext(e).to_string()))?;

    let mut groups = Vec::new();
    for period in response.results_by_time() {
        for group in period.groups() {
            let Some(usage_type) = group.keys().first() else {
                continue;
            };
            let amount = group
                .metrics()
                .and_then(|m| m.get("UnblendedCost"))
                .and_then(|v| v.amount())
                .ok_or_else(|| {
                    CostQueryError::Reply(format!("missing UnblendedCost for {usage_type}"))
                })?;
            let amount: f64 = amount.parse().map_err(|_| {
                CostQueryError::Reply(format!(
                    "unparsable UnblendedCost {amount:?} for {usage_type}"
                ))
            })?;
            groups.push((usage_type.clone(), amount));
        }
    }

    Ok(groups)
}

/// Fold raw (usage type, amount) pairs into the categorized report.
/// Zero-amount rows are dropped before categorization; detail rows and
/// category totals both end up descending by amount.
pub fn build_report(groups: Vec<(String, f64)>, start: String, end: String) -> CostReport {
    let mut records: Vec<CostRecord> = Vec::new();
    let mut totals: Vec<CategoryTotal> = Vec::new();
    let mut total_cost = 0.0;

    for (usage_type, amount) in groups {
        if amount == 0.0 {
            continue;
        }
        let category = categorize(&usage_type);
        total_cost += amount;
        match totals.iter_mut().find(|t| t.category == category) {
            Some(total) => total.amount += amount,
            None => totals.push(CategoryTotal { category, amount }),
        }
        records.push(CostRecord {
            usage_type,
            category,
            amount,
        });
    }

    records.sort_by(|a, b| b.amount.total_cmp(&a.amount));
    totals.sort_by(|a, b| b.amount.total_cmp(&a.amount));

    CostReport {
        start,
        end,
        records,
        totals,
        total_cost,
    }
}
