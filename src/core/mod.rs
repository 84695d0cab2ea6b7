pub mod aws;
pub mod categorize;
pub mod cost;
pub mod estimate;
pub mod formatter;
pub mod models;
pub mod pricing;
