use shared::models::{CostRecord, CostSection};
use std::collections::BTreeMap;

/// Groups records into one section per cost class, ordered by date within each section.
pub fn cost_sections(records: &[CostRecord]) -> Vec<CostSection> {
    let mut by_class: BTreeMap<&str, Vec<CostRecord>> = BTreeMap::new();
    for record in records {
        by_class.entry(record.cost_class.as_str()).or_default().push(record.clone());
    }

    by_class
        .into_iter()
        .map(|(name, mut records)| {
            records.sort_by_key(|r| r.cost_date);
            CostSection { name: name.to_string(), records }
        })
        .collect()
}
