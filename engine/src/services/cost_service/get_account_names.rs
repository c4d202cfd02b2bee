// Handler for the GetPrimaryAccountNames RPC
use std::sync::Arc;
use tokio::sync::RwLock;
use tonic::{Response, Status};

use super::helpers::require_project_id;
use crate::data::cost_store::CostDataStore;
use crate::rollup::primary_account_names;
use crate::services::{AccountNamesResponse, ProjectRequest};

pub async fn handle_get_account_names(
    req_payload: ProjectRequest,
    cost_store: Arc<RwLock<CostDataStore>>,
) -> Result<Response<AccountNamesResponse>, Status> {
    let project_id = require_project_id(&req_payload.project_id)?;
    let store = cost_store.read().await;
    let records = store.records_for(project_id)?;

    Ok(Response::new(AccountNamesResponse {
        account_names: primary_account_names(records),
    }))
}
