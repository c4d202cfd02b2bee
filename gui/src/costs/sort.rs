//! Comparator factory for sorting the records of one cost section.

use chrono::NaiveDate;
use shared::models::CostRecord;
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    pub fn arrow(self) -> &'static str {
        match self {
            SortDirection::Ascending => "▲",
            SortDirection::Descending => "▼",
        }
    }
}

/// A sort key pulled out of a record.
#[derive(Debug, Clone, PartialEq, PartialOrd)]
pub enum FieldValue {
    Text(String),
    Date(NaiveDate),
    Amount(f64),
}

/// Optional transform applied to both keys before they are compared.
pub type Primer = fn(FieldValue) -> FieldValue;

pub fn field_value(record: &CostRecord, field: &str) -> Option<FieldValue> {
    let value = match field {
        "vendor" => FieldValue::Text(record.vendor.name.clone()),
        "account_main" => FieldValue::Text(record.account_main.clone()),
        "account_expense" => FieldValue::Text(record.account_expense.clone()),
        "cost_class" => FieldValue::Text(record.cost_class.clone()),
        "cost_date" => FieldValue::Date(record.cost_date),
        "description" => FieldValue::Text(record.description.clone()),
        "amount" => FieldValue::Amount(record.amount),
        _ => return None,
    };
    Some(value)
}

/// Lowercases text keys so sorting ignores case.
pub fn case_insensitive(value: FieldValue) -> FieldValue {
    match value {
        FieldValue::Text(text) => FieldValue::Text(text.to_lowercase()),
        other => other,
    }
}

/// Returns a three-way comparator over `field`. Keys that are neither greater nor
/// less than each other (equal, or an unknown field) compare as equal; ties keep
/// whatever order the sort itself preserves.
pub fn sort_by(
    field: &str,
    direction: SortDirection,
    primer: Option<Primer>,
) -> impl Fn(&CostRecord, &CostRecord) -> Ordering + '_ {
    let key = move |record: &CostRecord| {
        let value = field_value(record, field);
        match primer {
            Some(primer) => value.map(primer),
            None => value,
        }
    };

    move |a: &CostRecord, b: &CostRecord| {
        let (a, b) = (key(a), key(b));
        let ordering = if a > b {
            Ordering::Greater
        } else if b > a {
            Ordering::Less
        } else {
            Ordering::Equal
        };
        match direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::{CostKind, VendorRef};

    fn record(id: &str, class: &str, day: u32, amount: f64) -> CostRecord {
        CostRecord {
            id: id.to_string(),
            project_id: "P-1".to_string(),
            vendor: VendorRef { name: format!("Vendor {}", id), link: String::new() },
            account_main: "Acme".to_string(),
            account_expense: "Travel".to_string(),
            cost_class: class.to_string(),
            cost_date: NaiveDate::from_ymd_opt(2024, 5, day).unwrap(),
            description: String::new(),
            amount,
            kind: CostKind::Primary,
        }
    }

    fn ids(records: &[CostRecord]) -> Vec<&str> {
        records.iter().map(|r| r.id.as_str()).collect()
    }

    fn sample() -> Vec<CostRecord> {
        vec![
            record("a", "travel", 3, 30.0),
            record("b", "Labor", 1, 10.0),
            record("c", "equipment", 2, 20.0),
        ]
    }

    #[test]
    fn amount_ascending_then_descending_reverses_order() {
        let mut records = sample();
        records.sort_by(sort_by("amount", SortDirection::Ascending, None));
        let ascending: Vec<String> = ids(&records).into_iter().map(String::from).collect();
        assert_eq!(ascending, vec!["b", "c", "a"]);

        records.sort_by(sort_by("amount", SortDirection::Descending, None));
        let mut descending: Vec<String> = ids(&records).into_iter().map(String::from).collect();
        descending.reverse();
        assert_eq!(descending, ascending);
    }

    #[test]
    fn dates_sort_chronologically() {
        let mut records = sample();
        records.sort_by(sort_by("cost_date", SortDirection::Ascending, None));
        assert_eq!(ids(&records), vec!["b", "c", "a"]);
    }

    #[test]
    fn primer_transforms_keys_before_comparison() {
        let mut records = sample();
        records.sort_by(sort_by("cost_class", SortDirection::Ascending, None));
        assert_eq!(ids(&records), vec!["b", "c", "a"]); // "Labor" < "equipment" < "travel"

        records.sort_by(sort_by("cost_class", SortDirection::Ascending, Some(case_insensitive)));
        assert_eq!(ids(&records), vec!["c", "b", "a"]);
    }

    #[test]
    fn unknown_field_keeps_order() {
        let mut records = sample();
        records.sort_by(sort_by("nope", SortDirection::Descending, None));
        assert_eq!(ids(&records), vec!["a", "b", "c"]);
    }

    #[test]
    fn ties_keep_their_relative_order() {
        let mut records = vec![record("x", "A", 1, 5.0), record("y", "B", 2, 5.0), record("z", "C", 3, 1.0)];
        records.sort_by(sort_by("amount", SortDirection::Ascending, None));
        assert_eq!(ids(&records), vec!["z", "x", "y"]);
    }
}
