use dioxus::prelude::*;

use super::quiz::QuizIntent;
use crate::vm::AnswerChoice;

#[component]
pub fn QuestionScreen(
    question_html: String,
    choices: Vec<AnswerChoice>,
    progress_label: String,
    locked: bool,
    on_intent: EventHandler<QuizIntent>,
) -> Element {
    rsx! {
        div { class: "quiz-card quiz-question-screen",
            div { class: "quiz-header",
                span { class: "quiz-progress", "{progress_label}" }
                button {
                    class: "btn btn-link",
                    id: "quiz-back",
                    r#type: "button",
                    onclick: move |_| on_intent.call(QuizIntent::GoBack),
                    "Back to Home"
                }
            }
            div { class: "quiz-question", dangerous_inner_html: "{question_html}" }
            div { class: "quiz-answers",
                for (index, choice) in choices.into_iter().enumerate() {
                    AnswerButton {
                        key: "{index}",
                        choice,
                        locked,
                        on_intent,
                    }
                }
            }
        }
    }
}

#[component]
pub fn AnswerButton(
    choice: AnswerChoice,
    locked: bool,
    on_intent: EventHandler<QuizIntent>,
) -> Element {
    let answer = choice.answer.clone();
    rsx! {
        button {
            class: choice.style.class(),
            r#type: "button",
            disabled: locked,
            onclick: move |_| on_intent.call(QuizIntent::Select(answer.clone())),
            span { dangerous_inner_html: "{choice.html}" }
        }
    }
}
