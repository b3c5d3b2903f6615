use dioxus::prelude::*;
use tracing::{debug, info, warn};
use trivia_core::{CategoryId, LoadResolution, QuizState};

use super::end::EndScreen;
use super::question::QuestionScreen;
use super::start::StartScreen;
use super::state::{ViewError, view_state_from_resource};
use crate::context::AppContext;
use crate::vm::{PendingAnswer, QuizVm};

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuizIntent {
    ChooseCategory(Option<CategoryId>),
    Start,
    Select(String),
    GoBack,
    PlayAgain,
}

/// Root quiz screen: picks the start, question or end screen from the session state.
#[component]
pub fn QuizView() -> Element {
    let ctx = use_context::<AppContext>();
    let quiz_loop = ctx.quiz_loop();
    let reveal_delay = ctx.reveal_delay();

    let vm = use_signal(QuizVm::new);
    let selected = use_signal(|| None::<CategoryId>);

    let categories = {
        let quiz_loop = quiz_loop.clone();
        use_resource(move || {
            let quiz_loop = quiz_loop.clone();
            async move {
                quiz_loop
                    .list_categories()
                    .await
                    .map_err(|_| ViewError::CategoriesUnavailable)
            }
        })
    };

    let dispatch_intent = use_callback(move |intent: QuizIntent| {
        let mut vm = vm;
        let mut selected = selected;

        match intent {
            QuizIntent::ChooseCategory(category) => selected.set(category),
            QuizIntent::Start => {
                let Some(category) = selected() else {
                    return;
                };
                let begun = vm.write().begin_start(category);
                let ticket = match begun {
                    Ok(ticket) => ticket,
                    Err(err) => {
                        warn!(error = %err, "ignored start request");
                        return;
                    }
                };
                let quiz_loop = quiz_loop.clone();
                spawn(async move {
                    let result = quiz_loop.load_questions(category).await;
                    let finished = vm.write().finish_start(ticket, result);
                    match finished {
                        Ok(LoadResolution::Started { total }) => {
                            info!(%category, total, "quiz started");
                        }
                        Ok(LoadResolution::Discarded) => {
                            debug!(%category, "dropped superseded question load");
                        }
                        Err(err) => debug!(%category, error = %err, "quiz did not start"),
                    }
                });
            }
            QuizIntent::Select(answer) => {
                let Some(pending) = vm.write().select(&answer) else {
                    return;
                };
                if reveal_delay.is_zero() {
                    commit_answer(vm, &pending);
                } else {
                    spawn(async move {
                        tokio::time::sleep(reveal_delay).await;
                        commit_answer(vm, &pending);
                    });
                }
            }
            QuizIntent::GoBack => {
                let left = vm.write().go_back();
                match left {
                    Ok(()) => selected.set(None),
                    Err(err) => warn!(error = %err, "ignored go back request"),
                }
            }
            QuizIntent::PlayAgain => {
                let reset = vm.write().play_again();
                match reset {
                    Ok(()) => selected.set(None),
                    Err(err) => warn!(error = %err, "ignored play again request"),
                }
            }
        }
    });

    #[cfg(test)]
    use_hook(|| {
        if let Some(handles) = try_consume_context::<QuizTestHandles>() {
            handles.register(dispatch_intent, vm);
        }
    });

    let categories = view_state_from_resource(categories);
    let screen = {
        let vm = vm.read();
        match vm.state() {
            QuizState::Start => rsx! {
                StartScreen {
                    categories,
                    selected: selected(),
                    loading: vm.is_loading(),
                    error: vm.load_error(),
                    on_intent: dispatch_intent,
                }
            },
            QuizState::InProgress => rsx! {
                QuestionScreen {
                    question_html: vm.question_html().unwrap_or_default(),
                    choices: vm.answer_choices(),
                    progress_label: vm.progress_label().unwrap_or_default(),
                    locked: vm.is_locked(),
                    on_intent: dispatch_intent,
                }
            },
            QuizState::Complete => rsx! {
                EndScreen {
                    score_label: vm.score_label().unwrap_or_default(),
                    on_intent: dispatch_intent,
                }
            },
        }
    };

    rsx! {
        div { class: "quiz-root", {screen} }
    }
}

fn commit_answer(mut vm: Signal<QuizVm>, pending: &PendingAnswer) {
    let committed = vm.write().commit(pending);
    match committed {
        Ok(outcome) => debug!(
            correct = outcome.correct,
            score = outcome.score,
            complete = outcome.is_complete,
            "answer submitted"
        ),
        // The player left the quiz while the answer was on display.
        Err(err) => debug!(ticket = %pending.ticket, error = %err, "dropped delayed answer"),
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct QuizTestHandles {
    dispatch: Rc<RefCell<Option<Callback<QuizIntent>>>>,
    vm: Rc<RefCell<Option<Signal<QuizVm>>>>,
}

#[cfg(test)]
impl QuizTestHandles {
    pub(crate) fn register(&self, dispatch: Callback<QuizIntent>, vm: Signal<QuizVm>) {
        *self.dispatch.borrow_mut() = Some(dispatch);
        *self.vm.borrow_mut() = Some(vm);
    }

    pub(crate) fn dispatch(&self) -> Callback<QuizIntent> {
        (*self.dispatch.borrow()).expect("quiz dispatch registered")
    }

    pub(crate) fn vm(&self) -> Signal<QuizVm> {
        (*self.vm.borrow()).expect("quiz vm registered")
    }
}
