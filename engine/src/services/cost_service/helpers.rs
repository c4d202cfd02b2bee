// Conversions between domain models and their protobuf counterparts.
// The GUI client uses the `from_grpc_*` half, the engine handlers the `to_grpc_*` half.
use crate::error::EngineError;
use crate::services::{
    AccountNamesResponse, Constant, ConstantsResponse, CostSectionsResponse, PrimaryCostsResponse,
    ProtoCostRecord, ProtoCostSection, ProtoPrimaryCostEntry, ProtoSecondaryCostEntry,
    SecondaryCostsResponse,
};
use chrono::NaiveDate;
use tonic::Status;
use shared::models::{
    ConstantMap, CostKind, CostRecord as DomainCostRecord, CostSection, PrimaryCostEntry,
    PrimaryCostMap, SecondaryCostEntry, SecondaryCostMap, VendorRef,
};

const DATE_FORMAT: &str = "%Y-%m-%d";

pub fn require_project_id(project_id: &str) -> Result<&str, Status> {
    let project_id = project_id.trim();
    if project_id.is_empty() {
        return Err(Status::invalid_argument("project_id is required"));
    }
    Ok(project_id)
}

pub fn kind_to_grpc(kind: CostKind) -> &'static str {
    match kind {
        CostKind::Primary => "PRIMARY",
        CostKind::Secondary => "SECONDARY",
    }
}

pub fn kind_from_grpc(kind: &str) -> Result<CostKind, EngineError> {
    match kind {
        "PRIMARY" => Ok(CostKind::Primary),
        "SECONDARY" => Ok(CostKind::Secondary),
        other => Err(EngineError::ProcessingError(format!("Unknown cost kind: '{}'", other))),
    }
}

pub fn to_grpc_record(record: &DomainCostRecord) -> ProtoCostRecord {
    ProtoCostRecord {
        id: record.id.clone(),
        vendor_name: record.vendor.name.clone(),
        vendor_link: record.vendor.link.clone(),
        account_main: record.account_main.clone(),
        account_expense: record.account_expense.clone(),
        cost_class: record.cost_class.clone(),
        cost_date: record.cost_date.format(DATE_FORMAT).to_string(),
        description: record.description.clone(),
        amount: record.amount,
        kind: kind_to_grpc(record.kind).to_string(),
    }
}

pub fn from_grpc_record(project_id: &str, record: ProtoCostRecord) -> Result<DomainCostRecord, EngineError> {
    let cost_date = NaiveDate::parse_from_str(&record.cost_date, DATE_FORMAT).map_err(|e| {
        EngineError::ProcessingError(format!("Invalid cost date '{}' on record {}: {}", record.cost_date, record.id, e))
    })?;
    Ok(DomainCostRecord {
        kind: kind_from_grpc(&record.kind)?,
        id: record.id,
        project_id: project_id.to_string(),
        vendor: VendorRef { name: record.vendor_name, link: record.vendor_link },
        account_main: record.account_main,
        account_expense: record.account_expense,
        cost_class: record.cost_class,
        cost_date,
        description: record.description,
        amount: record.amount,
    })
}

pub fn to_grpc_sections(sections: &[CostSection]) -> CostSectionsResponse {
    CostSectionsResponse {
        sections: sections
            .iter()
            .map(|section| ProtoCostSection {
                name: section.name.clone(),
                records: section.records.iter().map(to_grpc_record).collect(),
            })
            .collect(),
    }
}

pub fn from_grpc_sections(project_id: &str, response: CostSectionsResponse) -> Result<Vec<CostSection>, EngineError> {
    response
        .sections
        .into_iter()
        .map(|section| {
            let records = section
                .records
                .into_iter()
                .map(|record| from_grpc_record(project_id, record))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(CostSection { name: section.name, records })
        })
        .collect()
}

pub fn to_grpc_constants(constants: &ConstantMap) -> ConstantsResponse {
    ConstantsResponse {
        constants: constants
            .iter()
            .map(|(name, value)| Constant { name: name.to_string(), value: value.to_string() })
            .collect(),
    }
}

pub fn from_grpc_constants(response: ConstantsResponse) -> ConstantMap {
    response.constants.into_iter().map(|c| (c.name, c.value)).collect()
}

pub fn from_grpc_account_names(response: AccountNamesResponse) -> Vec<String> {
    response.account_names
}

pub fn to_grpc_primary_costs(map: &PrimaryCostMap) -> PrimaryCostsResponse {
    PrimaryCostsResponse {
        entries: map
            .iter()
            .map(|e| ProtoPrimaryCostEntry { group: e.group.clone(), amounts: e.amounts.clone() })
            .collect(),
    }
}

pub fn from_grpc_primary_costs(response: PrimaryCostsResponse) -> PrimaryCostMap {
    PrimaryCostMap {
        entries: response
            .entries
            .into_iter()
            .map(|e| PrimaryCostEntry { group: e.group, amounts: e.amounts })
            .collect(),
    }
}

pub fn to_grpc_secondary_costs(map: &SecondaryCostMap) -> SecondaryCostsResponse {
    SecondaryCostsResponse {
        entries: map
            .iter()
            .map(|e| ProtoSecondaryCostEntry { group: e.group.clone(), amount: e.amount })
            .collect(),
    }
}

pub fn from_grpc_secondary_costs(response: SecondaryCostsResponse) -> SecondaryCostMap {
    SecondaryCostMap {
        entries: response
            .entries
            .into_iter()
            .map(|e| SecondaryCostEntry { group: e.group, amount: e.amount })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_date_is_a_processing_error() {
        let record = ProtoCostRecord {
            id: "r1".to_string(),
            cost_date: "03/02/2024".to_string(),
            kind: "PRIMARY".to_string(),
            ..Default::default()
        };
        let err = from_grpc_record("P-1", record).unwrap_err();
        assert!(matches!(err, EngineError::ProcessingError(msg) if msg.contains("r1")));
    }

    #[test]
    fn unknown_kind_is_rejected() {
        assert!(kind_from_grpc("TERTIARY").is_err());
        assert_eq!(kind_from_grpc(kind_to_grpc(CostKind::Secondary)).unwrap(), CostKind::Secondary);
    }

    #[test]
    fn constants_keep_wire_order() {
        let response = ConstantsResponse {
            constants: vec![
                Constant { name: "B".to_string(), value: "2".to_string() },
                Constant { name: "A".to_string(), value: "1".to_string() },
            ],
        };
        let names: Vec<String> = from_grpc_constants(response).iter().map(|(k, _)| k.to_string()).collect();
        assert_eq!(names, vec!["B", "A"]);
    }
}
