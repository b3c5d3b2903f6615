use dioxus::prelude::*;

use super::quiz::QuizIntent;

#[component]
pub fn EndScreen(score_label: String, on_intent: EventHandler<QuizIntent>) -> Element {
    rsx! {
        div { class: "quiz-card quiz-end",
            h2 { class: "quiz-title", "Quiz Complete! 🎉" }
            p { class: "quiz-score", "{score_label}" }
            button {
                class: "btn btn-primary",
                id: "quiz-play-again",
                r#type: "button",
                onclick: move |_| on_intent.call(QuizIntent::PlayAgain),
                "Play Again"
            }
        }
    }
}
