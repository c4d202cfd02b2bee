// gRPC client for the engine's ProjectCostService
use anyhow::{Context, Result};
use engine::services::cost_service::helpers::{
    from_grpc_account_names, from_grpc_constants, from_grpc_primary_costs, from_grpc_secondary_costs,
    from_grpc_sections,
};
use engine::services::{
    ConstantsRequest, PrimaryCostsRequest, ProjectCostServiceClient, ProjectRequest,
};
use shared::models::{ConstantMap, CostSection, PrimaryCostMap, SecondaryCostMap};
use tonic::transport::Channel;

/// The backend calls the cost views depend on. Every call may fail.
#[tonic::async_trait]
pub trait CostBackend: Send + Sync {
    async fn project_cost_constants(&self) -> Result<ConstantMap>;
    async fn primary_account_names(&self, project_id: &str) -> Result<Vec<String>>;
    /// Amounts come back in the order of `accounts`.
    async fn primary_costs(&self, project_id: &str, accounts: &[String]) -> Result<PrimaryCostMap>;
    async fn secondary_costs(&self, project_id: &str) -> Result<SecondaryCostMap>;
    async fn project_costs_records(&self, project_id: &str) -> Result<Vec<CostSection>>;
}

#[derive(Clone)]
pub struct CostClient {
    client: ProjectCostServiceClient<Channel>,
    endpoint: String,
}

impl CostClient {
    pub async fn connect(endpoint: String) -> Result<Self> {
        let channel = Channel::from_shared(endpoint.clone())
            .with_context(|| format!("Invalid engine endpoint '{}'", endpoint))?
            .connect()
            .await
            .with_context(|| format!("Failed to connect to engine at {}", endpoint))?;
        tracing::debug!(endpoint = %endpoint, "Connected to cost engine");
        Ok(Self {
            client: ProjectCostServiceClient::new(channel),
            endpoint,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn project_request(project_id: &str) -> tonic::Request<ProjectRequest> {
        tonic::Request::new(ProjectRequest {
            project_id: project_id.to_string(),
        })
    }
}

#[tonic::async_trait]
impl CostBackend for CostClient {
    async fn project_cost_constants(&self) -> Result<ConstantMap> {
        let response = self
            .client
            .clone()
            .get_project_cost_constants(tonic::Request::new(ConstantsRequest {}))
            .await?
            .into_inner();
        Ok(from_grpc_constants(response))
    }

    async fn primary_account_names(&self, project_id: &str) -> Result<Vec<String>> {
        let response = self
            .client
            .clone()
            .get_primary_account_names(Self::project_request(project_id))
            .await?
            .into_inner();
        Ok(from_grpc_account_names(response))
    }

    async fn primary_costs(&self, project_id: &str, accounts: &[String]) -> Result<PrimaryCostMap> {
        let request = tonic::Request::new(PrimaryCostsRequest {
            project_id: project_id.to_string(),
            primary_account_names: accounts.to_vec(),
        });
        let response = self.client.clone().get_primary_costs(request).await?.into_inner();
        Ok(from_grpc_primary_costs(response))
    }

    async fn secondary_costs(&self, project_id: &str) -> Result<SecondaryCostMap> {
        let response = self
            .client
            .clone()
            .get_secondary_costs(Self::project_request(project_id))
            .await?
            .into_inner();
        Ok(from_grpc_secondary_costs(response))
    }

    async fn project_costs_records(&self, project_id: &str) -> Result<Vec<CostSection>> {
        let response = self
            .client
            .clone()
            .get_project_costs_records(Self::project_request(project_id))
            .await?
            .into_inner();
        Ok(from_grpc_sections(project_id, response)?)
    }
}
