pub mod cost_store;
pub mod csv_parser;
