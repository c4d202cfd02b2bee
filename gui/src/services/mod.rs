// Remote data access for the cost views.
pub mod cost_client;
pub mod fetch;
pub mod print_url;

pub use cost_client::{CostBackend, CostClient};
pub use fetch::{fetch_sections, fetch_summary, FetchFailure, FetchStage, SummaryData};
pub use print_url::build_print_url;
