// Toolbar: current project, export options and the print link
#![allow(non_snake_case)]
use dioxus::prelude::*;

use crate::config::AppConfig;
use crate::services::build_print_url;

#[component]
pub fn Toolbar() -> Element {
    let config = use_context::<AppConfig>();
    let initial_options = config.print.options.clone();
    let options = use_signal(move || initial_options);

    let title = config.app.title.clone();
    let project_label = config.project_id().unwrap_or("(none)").to_string();

    let current_options = options.read().clone();
    let print_link = config.project_id().and_then(|project_id| {
        match build_print_url(&config.print.base_url, project_id, &current_options) {
            Ok(url) => Some(url.to_string()),
            Err(e) => {
                tracing::error!("Cannot build print link: {:#}", e);
                None
            }
        }
    });
    let print_link = match print_link {
        Some(href) => rsx! { a { href: "{href}", target: "_blank", "Print Cost Sheet" } },
        None => rsx! {},
    };

    rsx! {
        div { class: "toolbar",
            strong { "{title}" }
            span { "Project: {project_label}" }
            {current_options.iter().enumerate().map(move |(idx, option)| {
                let mut options = options;
                let label = option.label.clone();
                let checked = option.enabled;
                rsx! {
                    label { key: "{idx}",
                        input {
                            r#type: "checkbox",
                            checked: checked,
                            onchange: move |_| {
                                if let Some(option) = options.write().get_mut(idx) {
                                    option.enabled = !option.enabled;
                                }
                            },
                        }
                        "{label}"
                    }
                }
            })}
            {print_link}
        }
    }
}
