use dioxus::prelude::*;
use trivia_core::{Category, CategoryId};

use super::quiz::QuizIntent;
use super::state::{ViewError, ViewState};

#[component]
pub fn StartScreen(
    categories: ViewState<Vec<Category>>,
    selected: Option<CategoryId>,
    loading: bool,
    error: Option<ViewError>,
    on_intent: EventHandler<QuizIntent>,
) -> Element {
    let start_disabled = selected.is_none() || loading;
    let selected_value = selected.map(|id| id.to_string()).unwrap_or_default();

    rsx! {
        div { class: "quiz-card quiz-start",
            h1 { class: "quiz-title", "QuizMaster" }
            p { class: "quiz-subtitle", "Choose Your Category" }

            match categories {
                ViewState::Idle | ViewState::Loading => rsx! {
                    p { class: "quiz-status", "Loading categories..." }
                },
                ViewState::Error(err) => rsx! {
                    p { class: "quiz-error", "{err.message()}" }
                },
                ViewState::Ready(categories) => rsx! {
                    select {
                        class: "quiz-select",
                        id: "quiz-category",
                        value: "{selected_value}",
                        disabled: loading,
                        onchange: move |evt: FormEvent| {
                            let category = evt.value().parse::<CategoryId>().ok();
                            on_intent.call(QuizIntent::ChooseCategory(category));
                        },
                        option { value: "", "Select a quiz category..." }
                        for category in categories {
                            option {
                                key: "{category.id()}",
                                value: "{category.id()}",
                                selected: selected == Some(category.id()),
                                "{category.name()}"
                            }
                        }
                    }
                },
            }

            button {
                class: "btn btn-primary",
                id: "quiz-start",
                r#type: "button",
                disabled: start_disabled,
                onclick: move |_| on_intent.call(QuizIntent::Start),
                if loading { "Loading..." } else { "Start Quiz" }
            }

            if loading {
                p { class: "quiz-status", "Loading questions..." }
            }
            if let Some(err) = error {
                p { class: "quiz-error", "{err.message()}" }
            }
        }
    }
}
