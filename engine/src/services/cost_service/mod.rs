// engine/src/services/cost_service/mod.rs
// ProjectCostEngine and its ProjectCostService impl; each RPC is handled in a sibling module.

use super::{
    AccountNamesResponse, ConstantsRequest, ConstantsResponse, CostSectionsResponse, LoadCsvRequest,
    LoadCsvResponse, PrimaryCostsRequest, PrimaryCostsResponse, ProjectCostService, ProjectRequest,
    SecondaryCostsResponse,
};
use crate::data::cost_store::CostDataStore;
use shared::models::ConstantMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tonic::{Request, Response, Status};

pub mod get_account_names;
pub mod get_constants;
pub mod get_cost_records;
pub mod get_primary_costs;
pub mod get_secondary_costs;
pub mod helpers;
pub mod load_cost_csv;

pub struct ProjectCostEngine {
    cost_store: Arc<RwLock<CostDataStore>>,
    constants: ConstantMap,
}

impl ProjectCostEngine {
    pub fn new(cost_store: Arc<RwLock<CostDataStore>>, constants: ConstantMap) -> Self {
        ProjectCostEngine { cost_store, constants }
    }

    fn primary_total_row_name(&self) -> &str {
        self.constants.primary_total_row_name().unwrap_or_default()
    }

    fn secondary_total_row_name(&self) -> &str {
        self.constants.secondary_total_row_name().unwrap_or_default()
    }
}

#[tonic::async_trait]
impl ProjectCostService for ProjectCostEngine {
    async fn get_project_cost_constants(
        &self,
        _request: Request<ConstantsRequest>,
    ) -> Result<Response<ConstantsResponse>, Status> {
        tracing::info!(constants = self.constants.len(), "Received GetProjectCostConstants");
        get_constants::handle_get_constants(&self.constants).await
    }

    async fn get_primary_account_names(
        &self,
        request: Request<ProjectRequest>,
    ) -> Result<Response<AccountNamesResponse>, Status> {
        let req_payload = request.into_inner();
        tracing::info!(project_id = %req_payload.project_id, "Received GetPrimaryAccountNames");
        get_account_names::handle_get_account_names(req_payload, self.cost_store.clone()).await
    }

    async fn get_primary_costs(
        &self,
        request: Request<PrimaryCostsRequest>,
    ) -> Result<Response<PrimaryCostsResponse>, Status> {
        let req_payload = request.into_inner();
        tracing::info!(
            project_id = %req_payload.project_id,
            accounts = ?req_payload.primary_account_names,
            "Received GetPrimaryCosts"
        );
        get_primary_costs::handle_get_primary_costs(req_payload, self.cost_store.clone(), self.primary_total_row_name()).await
    }

    async fn get_secondary_costs(
        &self,
        request: Request<ProjectRequest>,
    ) -> Result<Response<SecondaryCostsResponse>, Status> {
        let req_payload = request.into_inner();
        tracing::info!(project_id = %req_payload.project_id, "Received GetSecondaryCosts");
        get_secondary_costs::handle_get_secondary_costs(req_payload, self.cost_store.clone(), self.secondary_total_row_name()).await
    }

    async fn get_project_costs_records(
        &self,
        request: Request<ProjectRequest>,
    ) -> Result<Response<CostSectionsResponse>, Status> {
        let req_payload = request.into_inner();
        tracing::info!(project_id = %req_payload.project_id, "Received GetProjectCostsRecords");
        get_cost_records::handle_get_cost_records(req_payload, self.cost_store.clone()).await
    }

    async fn load_cost_csv(&self, request: Request<LoadCsvRequest>) -> Result<Response<LoadCsvResponse>, Status> {
        let req_payload = request.into_inner();
        tracing::info!(path = %req_payload.file_path, "Received LoadCostCsv");
        load_cost_csv::handle_load_cost_csv(req_payload, self.cost_store.clone()).await
    }
}
