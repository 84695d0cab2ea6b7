use anyhow::Result;
use aws_sdk_cloudwatch::error::DisplayErrorContext;
use aws_sdk_cloudwatch::primitives::DateTime;
use aws_sdk_cloudwatch::types::{Dimension, Statistic};
use aws_sdk_cloudwatch::Client;
use chrono::{Duration, Utc};

use crate::core::models::estimate::{StorageClass, StorageClassEstimate, StorageReport};
use crate::core::pricing::price_per_gb;

const S3_NAMESPACE: &str = "AWS/S3";
const BUCKET_SIZE_METRIC: &str = "BucketSizeBytes";
// The metric is published once daily; a 2-day window guarantees at least
// one datapoint is in range when the class is in use.
const LOOKBACK_DAYS: i64 = 2;
const ONE_DAY_SECONDS: i32 = 86_400;

/// Fetch the most recent BucketSizeBytes average for one storage class.
/// `Ok(None)` means the class reported no datapoints in the window.
pub async fn fetch_class_size(
    client: &Client,
    bucket: &str,
    class: StorageClass,
) -> Result<Option<f64>> {
    let end = Utc::now();
    let start = end - Duration::days(LOOKBACK_DAYS);

    let response = client
        .get_metric_statistics()
        .namespace(S3_NAMESPACE)
        .metric_name(BUCKET_SIZE_METRIC)
        .dimensions(Dimension::builder().name("BucketName").value(bucket).build())
        .dimensions(
            Dimension::builder()
                .name("StorageType")
                .value(class.metric_name())
                .build(),
        )
        .start_time(DateTime::from_secs(start.timestamp()))
        .end_time(DateTime::from_secs(end.timestamp()))
        .period(ONE_DAY_SECONDS)
        .statistics(Statistic::Average)
        .send()
        .await
        .map_err(|e| anyhow::anyhow!("{}", DisplayErrorContext(e)))?;

    let datapoints: Vec<(i64, f64)> = response
        .datapoints()
        .iter()
        .filter_map(|d| Some((d.timestamp()?.secs(), d.average()?)))
        .collect();

    Ok(latest_average(&datapoints))
}

/// Value of the most recent datapoint, regardless of input order.
pub fn latest_average(datapoints: &[(i64, f64)]) -> Option<f64> {
    datapoints
        .iter()
        .max_by_key(|(ts, _)| *ts)
        .map(|(_, value)| *value)
}

pub fn bytes_to_gb(bytes: f64) -> f64 {
    bytes / (1024.0 * 1024.0 * 1024.0)
}

/// Price the fetched per-class byte sizes and total them up.
pub fn build_report(bucket: &str, sizes: Vec<(StorageClass, f64)>) -> StorageReport {
    let mut estimates = Vec::new();
    let mut total_gb = 0.0;
    let mut total_cost = 0.0;

    for (class, bytes) in sizes {
        let size_gb = bytes_to_gb(bytes);
        let monthly_cost = size_gb * price_per_gb(class);
        total_gb += size_gb;
        total_cost += monthly_cost;
        estimates.push(StorageClassEstimate {
            class,
            size_gb,
            monthly_cost,
        });
    }

    StorageReport {
        bucket: bucket.to_string(),
        estimates,
        total_gb,
        total_cost,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_gib_is_exactly_one_gb() {
        assert_eq!(bytes_to_gb(1_073_741_824.0), 1.0);
    }

    #[test]
    fn latest_average_ignores_input_order() {
        let points = [(200, 5.0), (400, 9.0), (300, 7.0)];
        assert_eq!(latest_average(&points), Some(9.0));
    }

    #[test]
    fn latest_average_empty_is_none() {
        assert_eq!(latest_average(&[]), None);
    }

    #[test]
    fn report_prices_each_class() {
        let report = build_report(
            "my-bucket",
            vec![
                (StorageClass::Standard, 2_147_483_648.0),
                (StorageClass::Glacier, 1_073_741_824.0),
            ],
        );
        assert_eq!(report.estimates.len(), 2);
        assert_eq!(report.estimates[0].size_gb, 2.0);
        assert!((report.estimates[0].monthly_cost - 0.046).abs() < 1e-12);
        assert_eq!(report.estimates[1].size_gb, 1.0);
        assert!((report.estimates[1].monthly_cost - 0.004).abs() < 1e-12);
        assert_eq!(report.total_gb, 3.0);
        assert!((report.total_cost - 0.05).abs() < 1e-12);
    }

    #[test]
    fn empty_sizes_make_empty_report() {
        let report = build_report("my-bucket", vec![]);
        assert!(report.estimates.is_empty());
        assert_eq!(report.total_gb, 0.0);
        assert_eq!(report.total_cost, 0.0);
    }
}
