// Pivoted cost summary: one column per primary account plus the total column
#![allow(non_snake_case)]
use dioxus::prelude::*;

use crate::config::AppConfig;
use crate::services::{fetch_summary, CostClient};
use crate::state::summary_state::SummaryState;

#[component]
pub fn CostSummary(project_id: String) -> Element {
    let config = use_context::<AppConfig>();
    let mut summary = use_signal(SummaryState::new);

    use_future(move || {
        let endpoint = config.engine.endpoint();
        let project_id = project_id.clone();
        async move {
            let client = match CostClient::connect(endpoint).await {
                Ok(client) => client,
                Err(e) => {
                    tracing::error!("Cost summary unavailable: {:#}", e);
                    return;
                }
            };
            tracing::info!(endpoint = %client.endpoint(), project_id = %project_id, "Fetching cost summary");
            // On failure keep whatever arrived before it; the error is already logged.
            let data = match fetch_summary(&client, &project_id).await {
                Ok(data) => data,
                Err(failure) => failure.partial,
            };
            summary.write().apply(data);
        }
    });

    let state = summary.read();
    let header = state.header().to_vec();
    let rows = state.table().rows.clone();
    let loading = !state.is_loaded();
    drop(state);

    rsx! {
        if loading {
            div { class: "subtotal", "Loading cost summary..." }
        }
        table { class: "cost-table cost-summary",
            thead {
                tr {
                    {header.into_iter().enumerate().map(|(idx, cell)| rsx! {
                        th { key: "{idx}", class: "cell-right", title: "{cell.title}", "{cell.label}" }
                    })}
                }
            }
            tbody {
                {rows.into_iter().map(|row| {
                    let label = row.label().to_string();
                    let label_class = if row.style.is_bold() { "cell-left text-bold" } else { "cell-left" };
                    let cell_class = row.style.css_class();
                    rsx! {
                        tr { key: "{row.id}", title: "{row.name}",
                            td { class: label_class, "{label}" }
                            for value in row.cells.iter() {
                                td { class: cell_class, "{value}" }
                            }
                        }
                    }
                })}
            }
        }
    }
}
