use derm_core::model::DiagnosisCode;
use dioxus::prelude::*;

use crate::vm::{AnswerButtonVm, QuizVm};

#[component]
pub fn QuizScreen(
    quiz: QuizVm,
    on_answer: EventHandler<DiagnosisCode>,
    on_next: EventHandler<()>,
    on_exit: EventHandler<()>,
) -> Element {
    let can_advance = quiz.can_advance;
    let next_class = if can_advance {
        "btn btn-primary next-btn"
    } else {
        "btn btn-primary next-btn next-btn--disabled"
    };

    rsx! {
        section { class: "page quiz", id: "quiz",
            header { class: "view-header quiz__header",
                button {
                    class: "btn btn-ghost quiz__exit",
                    r#type: "button",
                    onclick: move |_| on_exit.call(()),
                    "Back to modules"
                }
                h2 { class: "view-title", "{quiz.title}" }
                div { class: "quiz__status",
                    span { class: "quiz__progress", "{quiz.progress_label}" }
                    span { class: "quiz__score", "{quiz.score_label}" }
                }
            }
            figure { class: "quiz__figure",
                img { class: "quiz__image", src: "{quiz.image_url}", alt: "{quiz.image_alt}" }
            }
            div { class: "answer-grid",
                for answer in quiz.answers.iter() {
                    AnswerButton { key: "{answer.code}", answer: answer.clone(), on_answer: on_answer }
                }
            }
            if let Some(feedback) = quiz.feedback.as_ref() {
                p { class: "{feedback.class()}", role: "status", "{feedback.text}" }
            }
            footer { class: "quiz__footer",
                button {
                    class: "{next_class}",
                    r#type: "button",
                    disabled: !can_advance,
                    onclick: move |_| {
                        if can_advance {
                            on_next.call(());
                        }
                    },
                    "{quiz.next_label}"
                }
            }
        }
    }
}

#[component]
fn AnswerButton(answer: AnswerButtonVm, on_answer: EventHandler<DiagnosisCode>) -> Element {
    let code = answer.code.clone();
    rsx! {
        button {
            class: "{answer.state.class()}",
            r#type: "button",
            disabled: answer.disabled,
            "data-code": "{answer.code}",
            onclick: move |_| on_answer.call(code.clone()),
            "{answer.label}"
        }
    }
}
