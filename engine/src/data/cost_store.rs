// In-memory cost records, grouped by project
use crate::error::EngineError;
use shared::models::CostRecord;
use std::collections::HashMap;

pub struct CostDataStore {
    // Records per project id, in load order.
    projects: HashMap<String, Vec<CostRecord>>,
}

impl CostDataStore {
    pub fn new() -> Self {
        CostDataStore {
            projects: HashMap::new(),
        }
    }

    /// Adds records to their projects. A record whose id is already stored replaces the old one in place.
    /// Returns the number of records that were new.
    pub fn add_records(&mut self, new_records: Vec<CostRecord>) -> usize {
        let mut added = 0;
        for record in new_records {
            let project = self.projects.entry(record.project_id.clone()).or_default();
            match project.iter_mut().find(|existing| existing.id == record.id) {
                Some(existing) => *existing = record,
                None => {
                    project.push(record);
                    added += 1;
                }
            }
        }
        added
    }

    pub fn records_for(&self, project_id: &str) -> Result<&[CostRecord], EngineError> {
        self.projects
            .get(project_id)
            .map(Vec::as_slice)
            .ok_or_else(|| EngineError::CostDataError(format!("Project '{}' not found", project_id)))
    }

    pub fn project_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.projects.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }
}

impl Default for CostDataStore {
    fn default() -> Self {
        Self::new()
    }
}
