// Server-side rollups of raw cost records into the shapes the viewer requests
pub mod primary;
pub mod secondary;
pub mod sections;

pub use primary::{primary_account_names, primary_costs};
pub use secondary::secondary_costs;
pub use sections::cost_sections;

use std::borrow::Cow;

/// Group name a cost class is reported under. A class spelled exactly like the
/// total row gets a suffix so it cannot be read as a second total.
pub(crate) fn group_name<'a>(class: &'a str, total_row_name: &str) -> Cow<'a, str> {
    if class == total_row_name {
        tracing::warn!(class = %class, "Cost class collides with the total row name, renaming the group");
        Cow::Owned(format!("{} (class)", class))
    } else {
        Cow::Borrowed(class)
    }
}
