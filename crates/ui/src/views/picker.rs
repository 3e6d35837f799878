use dioxus::prelude::*;

use crate::vm::{ModuleCardVm, PickerVm, SetButtonVm, SetChoice};

#[component]
pub fn PickerScreen(picker: PickerVm, on_select: EventHandler<SetChoice>) -> Element {
    rsx! {
        section { class: "page picker", id: "picker",
            header { class: "view-header",
                if let Some(brand) = picker.brand.as_ref() {
                    p { class: "view-brand", "{brand}" }
                }
                h2 { class: "view-title", "Choose a module" }
                if let Some(audience) = picker.audience.as_ref() {
                    p { class: "view-subtitle", "{audience}" }
                }
                if let Some(note) = picker.note.as_ref() {
                    p { class: "view-note", "{note}" }
                }
            }
            div { class: "module-grid",
                for module in picker.modules.iter() {
                    ModuleCard { key: "{module.code}", module: module.clone(), on_select: on_select }
                }
            }
        }
    }
}

#[component]
fn ModuleCard(module: ModuleCardVm, on_select: EventHandler<SetChoice>) -> Element {
    rsx! {
        article { class: "module-card", "data-module": "{module.code}",
            header { class: "module-card__header",
                h3 { class: "module-card__title", "{module.title}" }
                span { class: "module-card__sets", "{module.sets_label}" }
            }
            if let Some(src) = module.preview_image.as_ref() {
                img {
                    class: "module-card__preview",
                    src: "{src}",
                    alt: "{module.title} preview",
                }
            } else {
                div { class: "module-card__preview module-card__preview--empty" }
            }
            if !module.label_counts.is_empty() {
                ul { class: "module-card__counts",
                    for count in module.label_counts.iter() {
                        li { key: "{count}", "{count}" }
                    }
                }
            }
            div { class: "module-card__actions",
                if module.sets.is_empty() {
                    button {
                        class: "btn btn-secondary set-btn set-btn--unavailable",
                        r#type: "button",
                        disabled: true,
                        "Unavailable"
                    }
                } else {
                    for set in module.sets.iter() {
                        SetButton { key: "{set.label}", set: set.clone(), on_select: on_select }
                    }
                }
            }
        }
    }
}

#[component]
fn SetButton(set: SetButtonVm, on_select: EventHandler<SetChoice>) -> Element {
    let choice = set.choice.clone();
    rsx! {
        button {
            class: "btn btn-primary set-btn",
            r#type: "button",
            title: "{set.detail}",
            onclick: move |_| on_select.call(choice.clone()),
            "{set.label}"
        }
    }
}

/// Blocking notice shown when a chosen set cannot be played.
#[component]
pub fn NoticeDialog(message: String, on_dismiss: EventHandler<()>) -> Element {
    rsx! {
        div { class: "modal-backdrop", id: "notice",
            div { class: "modal", role: "alertdialog",
                p { class: "modal__message", "{message}" }
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    onclick: move |_| on_dismiss.call(()),
                    "OK"
                }
            }
        }
    }
}
