// Pivoted cost summary: one column per primary account plus a total column.
pub mod aggregate;
pub mod header;

pub use aggregate::{aggregate, CostGroup, CostRow, CostTable, RowStyle};
pub use header::{build_header, HeaderCell};
