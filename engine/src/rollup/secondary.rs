use super::group_name;
use shared::models::{CostKind, CostRecord, SecondaryCostMap};
use std::borrow::Cow;
use std::collections::BTreeMap;

/// Per-class sums of secondary cost records (sorted by class), then a `total_row_name` entry.
pub fn secondary_costs(records: &[CostRecord], total_row_name: &str) -> SecondaryCostMap {
    let mut groups: BTreeMap<Cow<'_, str>, f64> = BTreeMap::new();
    for record in records.iter().filter(|r| r.kind == CostKind::Secondary) {
        *groups.entry(group_name(&record.cost_class, total_row_name)).or_insert(0.0) += record.amount;
    }

    let mut map = SecondaryCostMap::default();
    let mut total = 0.0;
    for (group, amount) in groups {
        total += amount;
        map.push(group, amount);
    }
    map.push(total_row_name, total);
    map
}
