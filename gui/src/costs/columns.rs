use super::sort::{field_value, FieldValue};
use shared::models::CostRecord;
use shared::utils::us_format::format_currency;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    Left,
    Right,
}

impl Alignment {
    pub fn css_class(self) -> &'static str {
        match self {
            Alignment::Left => "cell-left",
            Alignment::Right => "cell-right",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnDef {
    pub label: &'static str,
    /// Name understood by `field_value` and `cell_text`.
    pub field: &'static str,
    pub sortable: bool,
    pub wrap_text: bool,
    pub alignment: Alignment,
    pub currency: bool,
}

pub static COLUMNS: [ColumnDef; 7] = [
    ColumnDef { label: "Vendor", field: "vendor", sortable: false, wrap_text: true, alignment: Alignment::Left, currency: false },
    ColumnDef { label: "Account (Main)", field: "account_main", sortable: false, wrap_text: true, alignment: Alignment::Left, currency: false },
    ColumnDef { label: "Account (Expense)", field: "account_expense", sortable: false, wrap_text: false, alignment: Alignment::Left, currency: false },
    ColumnDef { label: "Class", field: "cost_class", sortable: true, wrap_text: false, alignment: Alignment::Left, currency: false },
    ColumnDef { label: "Date", field: "cost_date", sortable: true, wrap_text: false, alignment: Alignment::Left, currency: false },
    ColumnDef { label: "Notes", field: "description", sortable: false, wrap_text: true, alignment: Alignment::Left, currency: false },
    ColumnDef { label: "Amount", field: "amount", sortable: true, wrap_text: false, alignment: Alignment::Right, currency: true },
];

pub fn column(field: &str) -> Option<&'static ColumnDef> {
    COLUMNS.iter().find(|c| c.field == field)
}

/// Display text of one cell of the detail table.
pub fn cell_text(record: &CostRecord, field: &str) -> String {
    match field_value(record, field) {
        Some(FieldValue::Text(text)) => text,
        Some(FieldValue::Date(date)) => date.format("%m/%d/%Y").to_string(),
        Some(FieldValue::Amount(amount)) if column(field).is_some_and(|c| c.currency) => format_currency(amount),
        Some(FieldValue::Amount(amount)) => format!("{:.2}", amount),
        None => String::new(),
    }
}
