// gRPC surface of the engine. The generated code is compiled by build.rs into OUT_DIR.
pub mod generated {
    tonic::include_proto!("projectcosts");
}

pub use generated::project_cost_service_client::ProjectCostServiceClient;
pub use generated::project_cost_service_server::{ProjectCostService, ProjectCostServiceServer};
pub use generated::{
    AccountNamesResponse, Constant, ConstantsRequest, ConstantsResponse, CostSectionsResponse,
    LoadCsvRequest, LoadCsvResponse, PrimaryCostsRequest, PrimaryCostsResponse, ProjectRequest,
    SecondaryCostsResponse,
};
// Aliased so they do not shadow the domain types from `shared::models`.
pub use generated::{
    CostRecord as ProtoCostRecord, CostSection as ProtoCostSection,
    PrimaryCostEntry as ProtoPrimaryCostEntry, SecondaryCostEntry as ProtoSecondaryCostEntry,
};

pub mod cost_service;
