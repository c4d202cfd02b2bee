// Handler for the GetProjectCostsRecords RPC
use std::sync::Arc;
use tokio::sync::RwLock;
use tonic::{Response, Status};

use super::helpers::{require_project_id, to_grpc_sections};
use crate::data::cost_store::CostDataStore;
use crate::rollup::cost_sections;
use crate::services::{CostSectionsResponse, ProjectRequest};

pub async fn handle_get_cost_records(
    req_payload: ProjectRequest,
    cost_store: Arc<RwLock<CostDataStore>>,
) -> Result<Response<CostSectionsResponse>, Status> {
    let project_id = require_project_id(&req_payload.project_id)?;
    let store = cost_store.read().await;
    let records = store.records_for(project_id)?;

    Ok(Response::new(to_grpc_sections(&cost_sections(records))))
}
