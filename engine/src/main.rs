// Engine main entry point
use engine::config::settings::EngineSettings;
use engine::data::cost_store::CostDataStore;
use engine::data::csv_parser::CostCsvParser;
use engine::services::cost_service::ProjectCostEngine;
use engine::services::ProjectCostServiceServer;
use std::sync::Arc;
use tokio::sync::RwLock;
use tonic::transport::Server;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    info!("Starting Project Cost Engine...");

    let settings = EngineSettings::load()?;
    let addr = settings.addr().parse()?;

    let mut cost_store = CostDataStore::new();
    if let Some(path) = &settings.data_file {
        match CostCsvParser::load_records_from_csv(path) {
            Ok(records) => {
                let added = cost_store.add_records(records);
                info!(path = %path, added, projects = ?cost_store.project_ids(), "Loaded startup cost data");
            }
            // The engine stays up so data can still be pushed through LoadCostCsv.
            Err(e) => warn!(path = %path, error = %e, "Failed to load startup cost data"),
        }
    }
    let cost_store = Arc::new(RwLock::new(cost_store));

    let cost_service = ProjectCostEngine::new(cost_store, settings.constants.to_constant_map());

    info!("Engine will listen on {}", addr);
    Server::builder()
        .add_service(ProjectCostServiceServer::new(cost_service))
        .serve(addr)
        .await?;

    Ok(())
}
