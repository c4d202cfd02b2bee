// Link to the printable cost sheet for a project
use crate::config::PrintOptionSetting;
use anyhow::{Context, Result};
use url::Url;

/// `base?id=<record_id>&<option>=true|false...`, options in configured order.
pub fn build_print_url(base: &str, record_id: &str, options: &[PrintOptionSetting]) -> Result<Url> {
    let mut url = Url::parse(base).with_context(|| format!("Invalid print base URL '{}'", base))?;
    {
        let mut query = url.query_pairs_mut();
        query.append_pair("id", record_id);
        for option in options {
            query.append_pair(&option.name, if option.enabled { "true" } else { "false" });
        }
    }
    Ok(url)
}
