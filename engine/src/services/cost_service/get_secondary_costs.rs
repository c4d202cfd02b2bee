// Handler for the GetSecondaryCosts RPC
use std::sync::Arc;
use tokio::sync::RwLock;
use tonic::{Response, Status};

use super::helpers::{require_project_id, to_grpc_secondary_costs};
use crate::data::cost_store::CostDataStore;
use crate::rollup::secondary_costs;
use crate::services::{ProjectRequest, SecondaryCostsResponse};

pub async fn handle_get_secondary_costs(
    req_payload: ProjectRequest,
    cost_store: Arc<RwLock<CostDataStore>>,
    total_row_name: &str,
) -> Result<Response<SecondaryCostsResponse>, Status> {
    let project_id = require_project_id(&req_payload.project_id)?;
    let store = cost_store.read().await;
    let records = store.records_for(project_id)?;

    Ok(Response::new(to_grpc_secondary_costs(&secondary_costs(records, total_row_name))))
}
