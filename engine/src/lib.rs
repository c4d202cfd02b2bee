// Engine library root: the project cost backend served over gRPC.

pub mod config;
pub mod data;
pub mod error;
pub mod rollup;
pub mod services;
