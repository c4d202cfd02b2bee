// Handler for the GetPrimaryCosts RPC
use std::sync::Arc;
use tokio::sync::RwLock;
use tonic::{Response, Status};

use super::helpers::{require_project_id, to_grpc_primary_costs};
use crate::data::cost_store::CostDataStore;
use crate::rollup::{primary_account_names, primary_costs};
use crate::services::{PrimaryCostsRequest, PrimaryCostsResponse};

pub async fn handle_get_primary_costs(
    req_payload: PrimaryCostsRequest,
    cost_store: Arc<RwLock<CostDataStore>>,
    total_row_name: &str,
) -> Result<Response<PrimaryCostsResponse>, Status> {
    let project_id = require_project_id(&req_payload.project_id)?;
    let store = cost_store.read().await;
    let records = store.records_for(project_id)?;

    // Columns follow the caller's account list so they line up with its header.
    let accounts = if req_payload.primary_account_names.is_empty() {
        primary_account_names(records)
    } else {
        req_payload.primary_account_names
    };

    let map = primary_costs(records, &accounts, total_row_name);
    tracing::debug!(project_id = %project_id, groups = map.len(), accounts = accounts.len(), "Computed primary costs");
    Ok(Response::new(to_grpc_primary_costs(&map)))
}
