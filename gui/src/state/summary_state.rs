// Inputs fetched for the cost summary and the table derived from them.
//
// Every apply_* stores its input and rebuilds the table from scratch, so applying
// the same map twice (a re-render, a second fetch cycle) never double counts.

use crate::services::SummaryData;
use crate::summary::{aggregate, build_header, CostTable, HeaderCell};
use shared::models::{ConstantMap, PrimaryCostMap, SecondaryCostMap};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SummaryState {
    constants: ConstantMap,
    accounts: Option<Vec<String>>,
    primary: Option<PrimaryCostMap>,
    secondary: Option<SecondaryCostMap>,
    header: Vec<HeaderCell>,
    table: CostTable,
}

impl SummaryState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_data(data: SummaryData) -> Self {
        let mut state = Self::new();
        state.apply(data);
        state
    }

    /// Applies whatever parts of a fetch cycle arrived; absent parts keep their current value.
    pub fn apply(&mut self, data: SummaryData) {
        if let Some(constants) = data.constants {
            self.apply_constants(constants);
        }
        if let Some(accounts) = data.accounts {
            self.apply_accounts(accounts);
        }
        if let Some(primary) = data.primary {
            self.apply_primary(primary);
        }
        if let Some(secondary) = data.secondary {
            self.apply_secondary(secondary);
        }
    }

    pub fn apply_constants(&mut self, constants: ConstantMap) {
        self.constants.merge(constants);
        if let Some(accounts) = &self.accounts {
            // The total column label is a constant.
            self.header = build_header(accounts, &self.constants);
        }
        self.recompute();
    }

    pub fn apply_accounts(&mut self, accounts: Vec<String>) {
        if self.accounts.as_ref() == Some(&accounts) {
            return;
        }
        self.header = build_header(&accounts, &self.constants);
        self.accounts = Some(accounts);
        self.recompute();
    }

    pub fn apply_primary(&mut self, primary: PrimaryCostMap) {
        self.primary = Some(primary);
        self.recompute();
    }

    pub fn apply_secondary(&mut self, secondary: SecondaryCostMap) {
        self.secondary = Some(secondary);
        self.recompute();
    }

    fn recompute(&mut self) {
        self.table = aggregate(
            &self.constants,
            self.accounts.as_deref().unwrap_or_default(),
            self.primary.as_ref(),
            self.secondary.as_ref(),
        );
    }

    pub fn header(&self) -> &[HeaderCell] {
        &self.header
    }

    pub fn table(&self) -> &CostTable {
        &self.table
    }

    pub fn is_loaded(&self) -> bool {
        self.secondary.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::{PRIMARY_COSTS_TOTAL_ROW_NAME, SECONDARY_COSTS_TOTAL_ROW_NAME};

    fn constants() -> ConstantMap {
        let mut constants = ConstantMap::new();
        constants.insert(PRIMARY_COSTS_TOTAL_ROW_NAME, "TOTAL");
        constants.insert(SECONDARY_COSTS_TOTAL_ROW_NAME, "SECONDARY TOTAL");
        constants
    }

    fn loaded_primary() -> SummaryState {
        let mut state = SummaryState::new();
        state.apply_constants(constants());
        state.apply_accounts(vec!["Acme".to_string(), "Beta".to_string()]);
        let mut primary = PrimaryCostMap::default();
        primary.push("Travel", vec![10.0, 20.0, 30.0]);
        primary.push("TOTAL", vec![10.0, 20.0, 30.0]);
        state.apply_primary(primary);
        state
    }

    fn secondary() -> SecondaryCostMap {
        let mut secondary = SecondaryCostMap::default();
        secondary.push("Permits", 12.5);
        secondary.push("SECONDARY TOTAL", 12.5);
        secondary
    }

    #[test]
    fn pending_secondary_keeps_primary_rows() {
        let state = loaded_primary();
        assert!(!state.is_loaded());
        assert_eq!(state.table().rows.len(), 2);
        assert_eq!(state.table().overall_total, 30.0);
    }

    #[test]
    fn applying_secondary_twice_does_not_double_count() {
        let mut state = loaded_primary();
        state.apply_secondary(secondary());
        assert_eq!(state.table().overall_total, 42.5);

        state.apply_secondary(secondary());
        assert_eq!(state.table().overall_total, 42.5);
        let overall_rows = state.table().rows.iter().filter(|r| r.id == "OVERALL_TOTAL").count();
        assert_eq!(overall_rows, 1);
    }

    #[test]
    fn header_is_rebuilt_only_for_a_new_account_list() {
        let mut state = loaded_primary();
        let labels = |s: &SummaryState| s.header().iter().map(|c| c.label.clone()).collect::<Vec<_>>();
        assert_eq!(labels(&state), vec!["", "Acme", "Beta", "Total"]);

        let before = state.clone();
        state.apply_accounts(vec!["Acme".to_string(), "Beta".to_string()]);
        assert_eq!(state, before);

        state.apply_accounts(vec!["Beta".to_string()]);
        assert_eq!(labels(&state), vec!["", "Beta", "Total"]);
    }

    #[test]
    fn from_data_applies_every_part() {
        let data = SummaryData {
            constants: Some(constants()),
            accounts: Some(vec!["Acme".to_string()]),
            primary: Some(PrimaryCostMap::default()),
            secondary: Some(secondary()),
        };
        let state = SummaryState::from_data(data);
        assert!(state.is_loaded());
        assert_eq!(state.table().overall_total, 12.5);
        assert_eq!(state.header().len(), 3);
    }
}
