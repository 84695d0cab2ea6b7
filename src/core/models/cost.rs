use serde::{Deserialize, Serialize};

use crate::core::categorize::Category;

/// One non-zero usage-type row from Cost Explorer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CostRecord {
    pub usage_type: String,
    pub category: Category,
    pub amount: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryTotal {
    pub category: Category,
    pub amount: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CostReport {
    pub start: String,
    pub end: String,
    /// Detail rows, descending by amount.
    pub records: Vec<CostRecord>,
    /// Per-category totals, descending by amount.
    pub totals: Vec<CategoryTotal>,
    pub total_cost: f64,
}
