use super::columns::column;
use super::sort::{case_insensitive, sort_by, SortDirection};
use shared::models::{CostRecord, CostSection};

#[derive(Debug, Clone, PartialEq)]
pub struct CostSectionView {
    pub name: String,
    pub records: Vec<CostRecord>,
    pub subtotal: f64,
    pub sort_direction: SortDirection,
    pub sorted_by: Option<String>,
}

impl From<CostSection> for CostSectionView {
    fn from(section: CostSection) -> Self {
        let subtotal = section.records.iter().map(|r| r.amount).sum();
        CostSectionView {
            name: section.name,
            records: section.records,
            subtotal,
            sort_direction: SortDirection::Ascending,
            sorted_by: None,
        }
    }
}

impl CostSectionView {
    /// Direction a click on `field`'s header should sort in next.
    pub fn next_direction(&self, field: &str) -> SortDirection {
        match self.sorted_by.as_deref() {
            Some(current) if current == field => self.sort_direction.toggled(),
            _ => SortDirection::Ascending,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CostSections {
    pub sections: Vec<CostSectionView>,
}

impl CostSections {
    pub fn new(sections: Vec<CostSection>) -> Self {
        CostSections {
            sections: sections.into_iter().map(CostSectionView::from).collect(),
        }
    }

    pub fn names(&self) -> Vec<String> {
        self.sections.iter().map(|s| s.name.clone()).collect()
    }

    pub fn get(&self, name: &str) -> Option<&CostSectionView> {
        self.sections.iter().find(|s| s.name == name)
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Sorts one section's records in place; every other section is left as is.
    /// Text keys compare case-insensitively. Returns false when no section has
    /// that name or `field` is not a sortable column.
    pub fn sort_section(&mut self, name: &str, field: &str, direction: SortDirection) -> bool {
        if !column(field).is_some_and(|c| c.sortable) {
            tracing::debug!(field = %field, "Sort requested on a column that is not sortable");
            return false;
        }
        let Some(section) = self.sections.iter_mut().find(|s| s.name == name) else {
            tracing::debug!(section = %name, "Sort requested for an unknown section");
            return false;
        };
        section.records.sort_by(sort_by(field, direction, Some(case_insensitive)));
        section.sort_direction = direction;
        section.sorted_by = Some(field.to_string());
        true
    }
}
