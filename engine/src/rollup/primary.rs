use super::group_name;
use shared::models::{CostKind, CostRecord, PrimaryCostMap};
use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet};

/// Distinct main accounts of primary cost records, sorted by name.
pub fn primary_account_names(records: &[CostRecord]) -> Vec<String> {
    records
        .iter()
        .filter(|r| r.kind == CostKind::Primary)
        .map(|r| r.account_main.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// One entry per cost class (sorted) with an amount per account in `accounts` order,
/// followed by the class total. A trailing `total_row_name` entry sums every column.
///
/// Records booked against an account outside `accounts` are left out of every column.
pub fn primary_costs(records: &[CostRecord], accounts: &[String], total_row_name: &str) -> PrimaryCostMap {
    let width = accounts.len() + 1;
    let mut groups: BTreeMap<Cow<'_, str>, Vec<f64>> = BTreeMap::new();

    for record in records.iter().filter(|r| r.kind == CostKind::Primary) {
        let Some(column) = accounts.iter().position(|a| *a == record.account_main) else {
            tracing::debug!(
                record_id = %record.id,
                account = %record.account_main,
                "Skipping primary cost for an account not in the requested list"
            );
            continue;
        };
        let amounts = groups
            .entry(group_name(&record.cost_class, total_row_name))
            .or_insert_with(|| vec![0.0; width]);
        amounts[column] += record.amount;
        amounts[width - 1] += record.amount;
    }

    let mut totals = vec![0.0; width];
    let mut map = PrimaryCostMap::default();
    for (group, amounts) in groups {
        for (total, amount) in totals.iter_mut().zip(&amounts) {
            *total += amount;
        }
        map.push(group, amounts);
    }
    map.push(total_row_name, totals);
    map
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rollup::fixtures::{record, sample_records};

    #[test]
    fn account_names_are_distinct_and_sorted() {
        assert_eq!(primary_account_names(&sample_records()), vec!["Acme", "Beta"]);
    }

    #[test]
    fn costs_follow_requested_account_order() {
        let accounts = vec!["Beta".to_string(), "Acme".to_string()];
        let map = primary_costs(&sample_records(), &accounts, "TOTAL");

        let groups: Vec<&str> = map.iter().map(|e| e.group.as_str()).collect();
        assert_eq!(groups, vec!["Labor", "Travel", "TOTAL"]);
        assert_eq!(map.entries[0].amounts, vec![0.0, 150.0, 150.0]);
        assert_eq!(map.entries[1].amounts, vec![20.0, 10.0, 30.0]);
        assert_eq!(map.entries[2].amounts, vec![20.0, 160.0, 180.0]);
    }

    #[test]
    fn every_entry_has_one_slot_per_account_plus_total() {
        let accounts = primary_account_names(&sample_records());
        let map = primary_costs(&sample_records(), &accounts, "TOTAL");
        assert!(map.iter().all(|e| e.amounts.len() == accounts.len() + 1));
    }

    #[test]
    fn unrequested_accounts_are_left_out() {
        let accounts = vec!["Acme".to_string()];
        let map = primary_costs(&sample_records(), &accounts, "TOTAL");
        let total = map.iter().last().unwrap();
        assert_eq!(total.amounts, vec![160.0, 160.0]);
    }

    #[test]
    fn class_named_like_the_total_row_is_renamed() {
        let records = vec![record("1", "Acme", "TOTAL", 1, 40.0, CostKind::Primary)];
        let map = primary_costs(&records, &["Acme".to_string()], "TOTAL");

        let groups: Vec<&str> = map.iter().map(|e| e.group.as_str()).collect();
        assert_eq!(groups, vec!["TOTAL (class)", "TOTAL"]);
        assert_eq!(map.iter().filter(|e| e.group == "TOTAL").count(), 1);
        assert_eq!(map.entries[1].amounts, vec![40.0, 40.0]);
    }

    #[test]
    fn no_primary_records_still_yields_a_total_row() {
        let map = primary_costs(&[], &[], "TOTAL");
        assert_eq!(map.len(), 1);
        assert_eq!(map.entries[0].amounts, vec![0.0]);
    }
}
