pub mod summary_state;
pub mod view_state;
