pub mod cost;
pub mod estimate;
