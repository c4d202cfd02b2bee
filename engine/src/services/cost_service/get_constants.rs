// Handler for the GetProjectCostConstants RPC
use tonic::{Response, Status};

use super::helpers::to_grpc_constants;
use crate::services::ConstantsResponse;
use shared::models::ConstantMap;

pub async fn handle_get_constants(constants: &ConstantMap) -> Result<Response<ConstantsResponse>, Status> {
    Ok(Response::new(to_grpc_constants(constants)))
}
