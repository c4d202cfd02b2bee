// GUI components module
pub mod cost_summary;
pub mod project_costs;
pub mod toolbar;

pub use cost_summary::CostSummary;
pub use project_costs::ProjectCosts;
pub use toolbar::Toolbar;
