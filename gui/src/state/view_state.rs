// Which accordion sections are open, and how the toggle-all button is labelled.

/// The two button wordings used by the cost views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleVariant {
    /// "Show Details" / "Hide Details"
    Details,
    /// "Expand All" / "Collapse All"
    ExpandCollapse,
}

impl ToggleVariant {
    fn labels(self) -> (&'static str, &'static str) {
        match self {
            ToggleVariant::Details => ("Show Details", "Hide Details"),
            ToggleVariant::ExpandCollapse => ("Expand All", "Collapse All"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionViewState {
    open: Vec<String>,
}

impl SectionViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn expand_all<S: AsRef<str>>(&mut self, sections: &[S]) {
        self.open = sections.iter().map(|s| s.as_ref().to_string()).collect();
    }

    pub fn collapse_all(&mut self) {
        self.open.clear();
    }

    pub fn toggle(&mut self, section: &str) {
        match self.open.iter().position(|s| s == section) {
            Some(idx) => {
                self.open.remove(idx);
            }
            None => self.open.push(section.to_string()),
        }
    }

    /// Collapses everything when anything is open, otherwise expands every section.
    pub fn toggle_all<S: AsRef<str>>(&mut self, sections: &[S]) {
        if self.any_open() {
            self.collapse_all();
        } else {
            self.expand_all(sections);
        }
    }

    pub fn is_open(&self, section: &str) -> bool {
        self.open.iter().any(|s| s == section)
    }

    pub fn any_open(&self) -> bool {
        !self.open.is_empty()
    }

    pub fn toggle_label(&self, variant: ToggleVariant) -> &'static str {
        let (closed, open) = variant.labels();
        if self.any_open() {
            open
        } else {
            closed
        }
    }
}
