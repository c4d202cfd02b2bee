//! Folds the primary and secondary cost maps into summary table rows.
//!
//! Rows come out in backend order: primary groups, then secondary groups, then a
//! synthetic overall-total row once the secondary costs are known. Total rows are
//! recognised once, when a group is classified, by comparing its name with the
//! sentinel names from the [`ConstantMap`].

use shared::models::{ConstantMap, PrimaryCostMap, SecondaryCostMap};
use shared::utils::us_format::format_currency;

pub const OVERALL_TOTAL_ID: &str = "OVERALL_TOTAL";
pub const OVERALL_TOTAL_NAME: &str = "Overall Total";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CostGroup {
    Regular(String),
    /// The backend's total row for a cost kind, or the overall total.
    Total,
}

impl CostGroup {
    pub fn classify(name: &str, total_row_name: Option<&str>) -> Self {
        match total_row_name {
            Some(sentinel) if sentinel == name => CostGroup::Total,
            _ => CostGroup::Regular(name.to_string()),
        }
    }

    /// Display label; total rows are shown without one.
    pub fn label(&self) -> &str {
        match self {
            CostGroup::Regular(name) => name,
            CostGroup::Total => "",
        }
    }

    pub fn is_total(&self) -> bool {
        matches!(self, CostGroup::Total)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowStyle {
    Normal,
    Bold,
    /// Bold with extra spacing, for the overall-total row.
    Overall,
}

impl RowStyle {
    pub fn is_bold(self) -> bool {
        !matches!(self, RowStyle::Normal)
    }

    pub fn css_class(self) -> &'static str {
        match self {
            RowStyle::Normal => "cell-right",
            RowStyle::Bold => "cell-right text-bold",
            RowStyle::Overall => "cell-right text-bold row-overall",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CostRow {
    pub id: String,
    /// Group name as sent by the backend.
    pub name: String,
    pub group: CostGroup,
    /// One cell per account followed by the total cell; blanks are empty strings.
    pub cells: Vec<String>,
    pub style: RowStyle,
}

impl CostRow {
    pub fn label(&self) -> &str {
        self.group.label()
    }

    pub fn account_cells(&self) -> &[String] {
        &self.cells[..self.cells.len() - 1]
    }

    pub fn total_cell(&self) -> &str {
        self.cells.last().map(String::as_str).unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CostTable {
    pub rows: Vec<CostRow>,
    pub overall_total: f64,
}

/// Builds the summary rows and the overall total from whatever has been fetched so far.
/// A `None` map contributes nothing.
pub fn aggregate(
    constants: &ConstantMap,
    accounts: &[String],
    primary: Option<&PrimaryCostMap>,
    secondary: Option<&SecondaryCostMap>,
) -> CostTable {
    let width = accounts.len();

    let (mut rows, mut overall_total) = match primary {
        Some(map) => primary_rows(map, width, constants.primary_total_row_name()),
        None => (Vec::new(), 0.0),
    };

    if let Some(map) = secondary {
        let (secondary, secondary_total) = secondary_rows(map, width, constants.secondary_total_row_name());
        rows.extend(secondary);
        overall_total += secondary_total;
        rows.push(overall_row(width, overall_total));
    }

    CostTable { rows, overall_total }
}

fn primary_rows(map: &PrimaryCostMap, width: usize, total_row_name: Option<&str>) -> (Vec<CostRow>, f64) {
    map.iter().fold((Vec::with_capacity(map.len()), 0.0), |(mut rows, total), entry| {
        if entry.amounts.len() != width + 1 {
            tracing::warn!(
                group = %entry.group,
                expected = width + 1,
                actual = entry.amounts.len(),
                "Primary cost amounts do not match the account list"
            );
        }
        let mut cells: Vec<String> = entry.amounts.iter().take(width + 1).map(|a| format_currency(*a)).collect();
        cells.resize(width + 1, String::new());

        let group = CostGroup::classify(&entry.group, total_row_name);
        let contribution = match group {
            CostGroup::Total => entry.amounts.get(width).copied().unwrap_or(0.0),
            CostGroup::Regular(_) => 0.0,
        };
        rows.push(CostRow {
            id: format!("PRIMARY_{}", entry.group),
            name: entry.group.clone(),
            style: if group.is_total() { RowStyle::Bold } else { RowStyle::Normal },
            group,
            cells,
        });
        (rows, total + contribution)
    })
}

fn secondary_rows(map: &SecondaryCostMap, width: usize, total_row_name: Option<&str>) -> (Vec<CostRow>, f64) {
    map.iter().fold((Vec::with_capacity(map.len()), 0.0), |(mut rows, total), entry| {
        let group = CostGroup::classify(&entry.group, total_row_name);
        let contribution = if group.is_total() { entry.amount } else { 0.0 };
        rows.push(CostRow {
            id: format!("SECONDARY_{}", entry.group),
            name: entry.group.clone(),
            style: if group.is_total() { RowStyle::Bold } else { RowStyle::Normal },
            group,
            cells: total_only_cells(width, entry.amount),
        });
        (rows, total + contribution)
    })
}

fn overall_row(width: usize, overall_total: f64) -> CostRow {
    CostRow {
        id: OVERALL_TOTAL_ID.to_string(),
        name: OVERALL_TOTAL_NAME.to_string(),
        group: CostGroup::Total,
        cells: total_only_cells(width, overall_total),
        style: RowStyle::Overall,
    }
}

fn total_only_cells(width: usize, amount: f64) -> Vec<String> {
    let mut cells = vec![String::new(); width + 1];
    cells[width] = format_currency(amount);
    cells
}
