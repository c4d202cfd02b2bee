use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Constant naming the primary cost row that carries the per-account totals.
pub const PRIMARY_COSTS_TOTAL_ROW_NAME: &str = "PRIMARY_COSTS_TOTAL_ROW_NAME";
/// Constant naming the secondary cost row that carries the secondary total.
pub const SECONDARY_COSTS_TOTAL_ROW_NAME: &str = "SECONDARY_COSTS_TOTAL_ROW_NAME";
/// Constant holding the label of the grand-total column.
pub const TOTAL_COLUMN_NAME: &str = "TOTAL_COLUMN_NAME";

pub const DEFAULT_TOTAL_COLUMN_LABEL: &str = "Total";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum CostKind {
    /// Broken out per primary account.
    Primary,
    /// Reported only as a single aggregate amount.
    Secondary,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VendorRef {
    pub name: String,
    pub link: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CostRecord {
    pub id: String,
    pub project_id: String,
    pub vendor: VendorRef,
    pub account_main: String,
    pub account_expense: String,
    pub cost_class: String,
    pub cost_date: NaiveDate,
    pub description: String,
    pub amount: f64,
    pub kind: CostKind,
}

/// A named bucket of cost records, in the order the backend produced them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CostSection {
    pub name: String,
    pub records: Vec<CostRecord>,
}

/// Symbolic name to string value, kept in backend order.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ConstantMap {
    entries: Vec<(String, String)>,
}

impl ConstantMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Inserts or overwrites `name`, keeping the original position of an existing entry.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(key, _)| *key == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    /// Layers `other` over `self`: matching names are overwritten, new names appended.
    pub fn merge(&mut self, other: ConstantMap) {
        for (name, value) in other.entries {
            self.insert(name, value);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn primary_total_row_name(&self) -> Option<&str> {
        self.get(PRIMARY_COSTS_TOTAL_ROW_NAME)
    }

    pub fn secondary_total_row_name(&self) -> Option<&str> {
        self.get(SECONDARY_COSTS_TOTAL_ROW_NAME)
    }

    pub fn total_column_label(&self) -> &str {
        self.get(TOTAL_COLUMN_NAME).unwrap_or(DEFAULT_TOTAL_COLUMN_LABEL)
    }
}

impl FromIterator<(String, String)> for ConstantMap {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        let mut map = ConstantMap::new();
        for (name, value) in iter {
            map.insert(name, value);
        }
        map
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PrimaryCostEntry {
    pub group: String,
    /// One amount per primary account followed by the group total.
    pub amounts: Vec<f64>,
}

/// Cost group to per-account amounts. An ordered sequence, never a hash map:
/// row order on screen is the order the backend sent.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PrimaryCostMap {
    pub entries: Vec<PrimaryCostEntry>,
}

impl PrimaryCostMap {
    pub fn push(&mut self, group: impl Into<String>, amounts: Vec<f64>) {
        self.entries.push(PrimaryCostEntry {
            group: group.into(),
            amounts,
        });
    }

    pub fn iter(&self) -> impl Iterator<Item = &PrimaryCostEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SecondaryCostEntry {
    pub group: String,
    pub amount: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SecondaryCostMap {
    pub entries: Vec<SecondaryCostEntry>,
}

impl SecondaryCostMap {
    pub fn push(&mut self, group: impl Into<String>, amount: f64) {
        self.entries.push(SecondaryCostEntry {
            group: group.into(),
            amount,
        });
    }

    pub fn iter(&self) -> impl Iterator<Item = &SecondaryCostEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_overwrites_in_place_and_appends_new_names() {
        let mut constants = ConstantMap::new();
        constants.insert(PRIMARY_COSTS_TOTAL_ROW_NAME, "Old");
        constants.insert("OTHER", "x");

        let fetched: ConstantMap = vec![
            (PRIMARY_COSTS_TOTAL_ROW_NAME.to_string(), "Total Primary".to_string()),
            (SECONDARY_COSTS_TOTAL_ROW_NAME.to_string(), "Total Secondary".to_string()),
        ]
        .into_iter()
        .collect();
        constants.merge(fetched);

        let names: Vec<&str> = constants.iter().map(|(k, _)| k).collect();
        assert_eq!(
            names,
            vec![PRIMARY_COSTS_TOTAL_ROW_NAME, "OTHER", SECONDARY_COSTS_TOTAL_ROW_NAME]
        );
        assert_eq!(constants.primary_total_row_name(), Some("Total Primary"));
        assert_eq!(constants.secondary_total_row_name(), Some("Total Secondary"));
    }

    #[test]
    fn total_column_label_falls_back_to_default() {
        let mut constants = ConstantMap::new();
        assert_eq!(constants.total_column_label(), "Total");
        constants.insert(TOTAL_COLUMN_NAME, "Grand Total");
        assert_eq!(constants.total_column_label(), "Grand Total");
    }

    #[test]
    fn primary_cost_map_keeps_insertion_order_through_serde() {
        let mut map = PrimaryCostMap::default();
        map.push("Travel", vec![10.0, 20.0, 30.0]);
        map.push("Labor", vec![1.0, 2.0, 3.0]);
        map.push("Equipment", vec![0.0, 5.0, 5.0]);

        let json = serde_json::to_string(&map).unwrap();
        let back: PrimaryCostMap = serde_json::from_str(&json).unwrap();
        let groups: Vec<&str> = back.iter().map(|e| e.group.as_str()).collect();
        assert_eq!(groups, vec!["Travel", "Labor", "Equipment"]);
    }
}
