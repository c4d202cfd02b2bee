// Detail view: one collapsible, independently sortable table per cost class
#![allow(non_snake_case)]
use dioxus::prelude::*;

use crate::config::AppConfig;
use crate::costs::{cell_text, CostSectionView, CostSections, COLUMNS};
use crate::services::{fetch_sections, CostClient};
use crate::state::view_state::{SectionViewState, ToggleVariant};
use shared::utils::us_format::format_currency;

#[component]
pub fn ProjectCosts(project_id: String) -> Element {
    let config = use_context::<AppConfig>();
    let mut costs = use_signal(CostSections::default);
    let mut view = use_signal(SectionViewState::new);

    use_future(move || {
        let endpoint = config.engine.endpoint();
        let project_id = project_id.clone();
        async move {
            let client = match CostClient::connect(endpoint).await {
                Ok(client) => client,
                Err(e) => {
                    tracing::error!("Cost details unavailable: {:#}", e);
                    return;
                }
            };
            if let Ok(sections) = fetch_sections(&client, &project_id).await {
                tracing::info!(sections = sections.len(), "Loaded cost sections");
                costs.set(CostSections::new(sections));
            }
        }
    });

    if costs.read().is_empty() {
        return rsx! {
            div { class: "section", "No cost records for this project." }
        };
    }

    let sections = costs.read().sections.clone();
    let names = costs.read().names();
    let all_names = names.clone();
    let toggle_label = view.read().toggle_label(ToggleVariant::Details);

    rsx! {
        div { class: "toolbar",
            button { onclick: move |_| view.write().expand_all(&names), "Expand All" }
            button { onclick: move |_| view.write().collapse_all(), "Collapse All" }
            button { onclick: move |_| view.write().toggle_all(&all_names), "{toggle_label}" }
        }
        {sections.into_iter().map(|section| {
            let name = section.name.clone();
            let is_open = view.read().is_open(&name);
            let count = section.records.len();
            let subtotal = format_currency(section.subtotal);
            rsx! {
                div { key: "{name}", class: "section",
                    div {
                        class: "section-title",
                        onclick: move |_| {
                            let mut view = view;
                            view.write().toggle(&name);
                        },
                        strong { "{section.name}" }
                        span { class: "subtotal", "{count} records, {subtotal}" }
                    }
                    if is_open {
                        SectionTable { section: section.clone(), costs: costs }
                    }
                }
            }
        })}
    }
}

#[component]
fn SectionTable(section: CostSectionView, costs: Signal<CostSections>) -> Element {
    let name = section.name.clone();

    rsx! {
        table { class: "cost-table",
            thead {
                tr {
                    {COLUMNS.iter().map(|column| {
                        let arrow = match section.sorted_by.as_deref() {
                            Some(field) if field == column.field => section.sort_direction.arrow(),
                            _ => "",
                        };
                        let class = if column.sortable {
                            format!("{} sortable", column.alignment.css_class())
                        } else {
                            column.alignment.css_class().to_string()
                        };
                        let field = column.field;
                        let sortable = column.sortable;
                        let direction = section.next_direction(field);
                        let name = name.clone();
                        rsx! {
                            th {
                                key: "{field}",
                                class: "{class}",
                                onclick: move |_| {
                                    if sortable {
                                        let mut costs = costs;
                                        costs.write().sort_section(&name, field, direction);
                                    }
                                },
                                "{column.label} {arrow}"
                            }
                        }
                    })}
                }
            }
            tbody {
                {section.records.iter().map(|record| {
                    rsx! {
                        tr { key: "{record.id}",
                            {COLUMNS.iter().map(|column| {
                                let text = cell_text(record, column.field);
                                let class = if column.wrap_text {
                                    format!("{} wrap", column.alignment.css_class())
                                } else {
                                    column.alignment.css_class().to_string()
                                };
                                let content = if column.field == "vendor" && !record.vendor.link.is_empty() {
                                    let href = record.vendor.link.clone();
                                    rsx! { a { href: "{href}", target: "_blank", "{text}" } }
                                } else {
                                    rsx! { "{text}" }
                                };
                                rsx! {
                                    td { key: "{column.field}", class: "{class}", {content} }
                                }
                            })}
                        }
                    }
                })}
            }
        }
    }
}
