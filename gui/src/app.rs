#![allow(non_snake_case)]
use dioxus::prelude::*;

use crate::components::{CostSummary, ProjectCosts, Toolbar};
use crate::config::theme::ThemePalette;
use crate::config::AppConfig;

#[component]
pub fn App() -> Element {
    let config = use_context::<AppConfig>();
    let stylesheet = ThemePalette::by_name(&config.app.theme).stylesheet();

    let content = match config.project_id() {
        Some(project_id) => {
            let project_id = project_id.to_string();
            rsx! {
                CostSummary { project_id: project_id.clone() }
                ProjectCosts { project_id: project_id }
            }
        }
        None => rsx! {
            div { class: "section", "No project selected." }
        },
    };

    rsx! {
        style { "{stylesheet}" }
        Toolbar {}
        {content}
    }
}
