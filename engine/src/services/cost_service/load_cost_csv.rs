// Handler for the LoadCostCsv RPC
use std::sync::Arc;
use tokio::sync::RwLock;
use tonic::{Response, Status};

use crate::data::cost_store::CostDataStore;
use crate::data::csv_parser::CostCsvParser;
use crate::services::{LoadCsvRequest, LoadCsvResponse};

pub async fn handle_load_cost_csv(
    req_payload: LoadCsvRequest,
    cost_store: Arc<RwLock<CostDataStore>>,
) -> Result<Response<LoadCsvResponse>, Status> {
    let records = CostCsvParser::load_records_from_csv(&req_payload.file_path)?;
    let parsed = records.len();

    let added = cost_store.write().await.add_records(records);
    tracing::info!(path = %req_payload.file_path, parsed, added, "Loaded cost records");

    Ok(Response::new(LoadCsvResponse {
        success: true,
        message: format!("Loaded {} cost records ({} new) from {}", parsed, added, req_payload.file_path),
        records_loaded: parsed as i32,
    }))
}
