// Per-section detail tables of raw cost records.
pub mod columns;
pub mod sections;
pub mod sort;

pub use columns::{cell_text, Alignment, ColumnDef, COLUMNS};
pub use sections::{CostSectionView, CostSections};
pub use sort::{sort_by, FieldValue, SortDirection};
