use dioxus::prelude::*;

use crate::vm::SummaryVm;

#[component]
pub fn SummaryScreen(
    summary: SummaryVm,
    on_retry: EventHandler<()>,
    on_exit: EventHandler<()>,
) -> Element {
    rsx! {
        section { class: "page {summary.tier_class}", id: "summary",
            h2 { class: "view-title", "{summary.title}" }
            p { class: "summary__score", "{summary.score_label}" }
            p { class: "summary__percent", "{summary.percent_label}" }
            p { class: "summary__message", "{summary.message}" }
            div { class: "summary__actions",
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    onclick: move |_| on_retry.call(()),
                    "Retry this set"
                }
                button {
                    class: "btn btn-secondary",
                    r#type: "button",
                    onclick: move |_| on_exit.call(()),
                    "Back to modules"
                }
            }
        }
    }
}
