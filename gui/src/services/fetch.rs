//! Sequential fetch chains for the cost views.
//!
//! The summary chain runs constants → account names → primary costs → secondary
//! costs, one call at a time, because each call is parameterised by what came
//! before it. The first failure ends the chain; the caller gets everything
//! fetched up to that point so it can keep rendering the last good state.

use super::cost_client::CostBackend;
use shared::models::{ConstantMap, CostSection, PrimaryCostMap, SecondaryCostMap};
use std::fmt;

/// Whatever part of the summary chain has completed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SummaryData {
    pub constants: Option<ConstantMap>,
    pub accounts: Option<Vec<String>>,
    pub primary: Option<PrimaryCostMap>,
    pub secondary: Option<SecondaryCostMap>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchStage {
    Constants,
    AccountNames,
    PrimaryCosts,
    SecondaryCosts,
    CostRecords,
}

impl fmt::Display for FetchStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FetchStage::Constants => "project cost constants",
            FetchStage::AccountNames => "primary account names",
            FetchStage::PrimaryCosts => "primary costs",
            FetchStage::SecondaryCosts => "secondary costs",
            FetchStage::CostRecords => "cost records",
        };
        f.write_str(name)
    }
}

#[derive(Debug, thiserror::Error)]
#[error("Fetching {stage} for project '{project_id}' failed: {cause:#}")]
pub struct FetchFailure {
    pub stage: FetchStage,
    pub project_id: String,
    /// Results of the calls that completed before `stage`.
    pub partial: SummaryData,
    pub cause: anyhow::Error,
}

impl FetchFailure {
    fn new(stage: FetchStage, project_id: &str, partial: SummaryData, cause: anyhow::Error) -> Self {
        let failure = FetchFailure {
            stage,
            project_id: project_id.to_string(),
            partial,
            cause,
        };
        tracing::error!(stage = %failure.stage, project_id = %failure.project_id, "{}", failure);
        failure
    }
}

pub async fn fetch_summary<B>(backend: &B, project_id: &str) -> Result<SummaryData, FetchFailure>
where
    B: CostBackend + ?Sized,
{
    let mut data = SummaryData::default();

    match backend.project_cost_constants().await {
        Ok(constants) => data.constants = Some(constants),
        Err(e) => return Err(FetchFailure::new(FetchStage::Constants, project_id, data, e)),
    }

    let accounts = match backend.primary_account_names(project_id).await {
        Ok(accounts) => accounts,
        Err(e) => return Err(FetchFailure::new(FetchStage::AccountNames, project_id, data, e)),
    };

    match backend.primary_costs(project_id, &accounts).await {
        Ok(primary) => {
            data.accounts = Some(accounts);
            data.primary = Some(primary);
        }
        Err(e) => {
            data.accounts = Some(accounts);
            return Err(FetchFailure::new(FetchStage::PrimaryCosts, project_id, data, e));
        }
    }

    match backend.secondary_costs(project_id).await {
        Ok(secondary) => data.secondary = Some(secondary),
        Err(e) => return Err(FetchFailure::new(FetchStage::SecondaryCosts, project_id, data, e)),
    }

    tracing::debug!(project_id = %project_id, "Fetched cost summary");
    Ok(data)
}

pub async fn fetch_sections<B>(backend: &B, project_id: &str) -> Result<Vec<CostSection>, FetchFailure>
where
    B: CostBackend + ?Sized,
{
    backend
        .project_costs_records(project_id)
        .await
        .map_err(|e| FetchFailure::new(FetchStage::CostRecords, project_id, SummaryData::default(), e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::{anyhow, Result};
    use std::sync::Mutex;

    /// Scripted backend that records the order of calls and can fail at one stage.
    #[derive(Default)]
    struct FakeBackend {
        fail_at: Option<FetchStage>,
        calls: Mutex<Vec<FetchStage>>,
        seen_accounts: Mutex<Vec<String>>,
    }

    impl FakeBackend {
        fn failing_at(stage: FetchStage) -> Self {
            FakeBackend { fail_at: Some(stage), ..Default::default() }
        }

        fn record(&self, stage: FetchStage) -> Result<()> {
            self.calls.lock().unwrap().push(stage);
            if self.fail_at == Some(stage) {
                return Err(anyhow!("{} unavailable", stage));
            }
            Ok(())
        }

        fn calls(&self) -> Vec<FetchStage> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[tonic::async_trait]
    impl CostBackend for FakeBackend {
        async fn project_cost_constants(&self) -> Result<ConstantMap> {
            self.record(FetchStage::Constants)?;
            Ok(vec![("PRIMARY_COSTS_TOTAL_ROW_NAME".to_string(), "TOTAL".to_string())].into_iter().collect())
        }

        async fn primary_account_names(&self, _project_id: &str) -> Result<Vec<String>> {
            self.record(FetchStage::AccountNames)?;
            Ok(vec!["Acme".to_string(), "Beta".to_string()])
        }

        async fn primary_costs(&self, _project_id: &str, accounts: &[String]) -> Result<PrimaryCostMap> {
            self.record(FetchStage::PrimaryCosts)?;
            *self.seen_accounts.lock().unwrap() = accounts.to_vec();
            let mut map = PrimaryCostMap::default();
            map.push("TOTAL", vec![1.0, 2.0, 3.0]);
            Ok(map)
        }

        async fn secondary_costs(&self, _project_id: &str) -> Result<SecondaryCostMap> {
            self.record(FetchStage::SecondaryCosts)?;
            Ok(SecondaryCostMap::default())
        }

        async fn project_costs_records(&self, project_id: &str) -> Result<Vec<CostSection>> {
            self.record(FetchStage::CostRecords)?;
            Ok(vec![CostSection { name: project_id.to_string(), records: Vec::new() }])
        }
    }

    #[tokio::test]
    async fn summary_calls_run_in_dependency_order() {
        let backend = FakeBackend::default();
        let data = fetch_summary(&backend, "P-1").await.unwrap();

        assert_eq!(
            backend.calls(),
            vec![FetchStage::Constants, FetchStage::AccountNames, FetchStage::PrimaryCosts, FetchStage::SecondaryCosts]
        );
        assert_eq!(*backend.seen_accounts.lock().unwrap(), vec!["Acme", "Beta"]);
        assert!(data.constants.is_some());
        assert_eq!(data.accounts.unwrap(), vec!["Acme", "Beta"]);
        assert_eq!(data.primary.unwrap().len(), 1);
        assert!(data.secondary.is_some());
    }

    #[tokio::test]
    async fn failure_short_circuits_and_keeps_partial_results() {
        let backend = FakeBackend::failing_at(FetchStage::SecondaryCosts);
        let failure = fetch_summary(&backend, "P-1").await.unwrap_err();

        assert_eq!(failure.stage, FetchStage::SecondaryCosts);
        assert!(failure.partial.primary.is_some());
        assert!(failure.partial.secondary.is_none());
        assert!(failure.to_string().contains("secondary costs unavailable"));
    }

    #[tokio::test]
    async fn early_failure_skips_every_later_call() {
        let backend = FakeBackend::failing_at(FetchStage::AccountNames);
        let failure = fetch_summary(&backend, "P-1").await.unwrap_err();

        assert_eq!(backend.calls(), vec![FetchStage::Constants, FetchStage::AccountNames]);
        assert!(failure.partial.constants.is_some());
        assert!(failure.partial.accounts.is_none());
        assert!(failure.partial.primary.is_none());
    }

    #[tokio::test]
    async fn primary_failure_still_reports_the_accounts() {
        let backend = FakeBackend::failing_at(FetchStage::PrimaryCosts);
        let failure = fetch_summary(&backend, "P-1").await.unwrap_err();
        assert_eq!(failure.partial.accounts.as_deref(), Some(&["Acme".to_string(), "Beta".to_string()][..]));
    }

    #[tokio::test]
    async fn sections_fetch_is_independent_of_the_summary_chain() {
        let backend = FakeBackend::failing_at(FetchStage::Constants);
        let sections = fetch_sections(&backend, "P-1").await.unwrap();
        assert_eq!(sections[0].name, "P-1");
        assert_eq!(backend.calls(), vec![FetchStage::CostRecords]);
    }
}
