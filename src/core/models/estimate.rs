use serde::{Deserialize, Serialize};

/// S3 storage classes that publish a BucketSizeBytes metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StorageClass {
    Standard,
    IntelligentTieringFrequentAccess,
    StandardInfrequentAccess,
    OneZoneInfrequentAccess,
    Glacier,
    DeepArchive,
}

impl StorageClass {
    /// Every metered class, in the order they are queried and displayed.
    pub const ALL: [StorageClass; 6] = [
        Self::Standard,
        Self::IntelligentTieringFrequentAccess,
        Self::StandardInfrequentAccess,
        Self::OneZoneInfrequentAccess,
        Self::Glacier,
        Self::DeepArchive,
    ];

    /// Value of the CloudWatch `StorageType` dimension for this class.
    pub fn metric_name(&self) -> &'static str {
        match self {
            Self::Standard => "StandardStorage",
            Self::IntelligentTieringFrequentAccess => "IntelligentTieringFAStorage",
            Self::StandardInfrequentAccess => "StandardIAStorage",
            Self::OneZoneInfrequentAccess => "OneZoneIAStorage",
            Self::Glacier => "GlacierStorage",
            Self::DeepArchive => "DeepArchiveStorage",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageClassEstimate {
    pub class: StorageClass,
    pub size_gb: f64,
    pub monthly_cost: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageReport {
    pub bucket: String,
    /// One entry per class that had a datapoint, in query order.
    pub estimates: Vec<StorageClassEstimate>,
    pub total_gb: f64,
    pub total_cost: f64,
}
