use shared::models::ConstantMap;

pub const COST_GROUP_TITLE: &str = "Cost Group";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderCell {
    pub label: String,
    pub title: String,
}

impl HeaderCell {
    fn new(label: &str, title: &str) -> Self {
        HeaderCell {
            label: label.to_string(),
            title: title.to_string(),
        }
    }
}

/// Blank "Cost Group" cell, one cell per account in order, then the total column.
pub fn build_header(accounts: &[String], constants: &ConstantMap) -> Vec<HeaderCell> {
    let total_label = constants.total_column_label();
    let mut header = Vec::with_capacity(accounts.len() + 2);
    header.push(HeaderCell::new("", COST_GROUP_TITLE));
    header.extend(accounts.iter().map(|name| HeaderCell::new(name, name)));
    header.push(HeaderCell::new(total_label, total_label));
    header
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::TOTAL_COLUMN_NAME;

    #[test]
    fn header_wraps_accounts_in_order() {
        let accounts = vec!["Beta".to_string(), "Acme".to_string()];
        let header = build_header(&accounts, &ConstantMap::new());
        let labels: Vec<&str> = header.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(labels, vec!["", "Beta", "Acme", "Total"]);
        assert_eq!(header[0].title, COST_GROUP_TITLE);
    }

    #[test]
    fn total_column_label_comes_from_constants() {
        let mut constants = ConstantMap::new();
        constants.insert(TOTAL_COLUMN_NAME, "All Accounts");
        let header = build_header(&[], &constants);
        assert_eq!(header.len(), 2);
        assert_eq!(header[1], HeaderCell::new("All Accounts", "All Accounts"));
    }
}
