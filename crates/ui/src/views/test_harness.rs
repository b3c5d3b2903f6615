use std::sync::Arc;
use std::time::Duration;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use services::{QuestionSource, QuizConfig, QuizLoopService};

use super::quiz::{QuizIntent, QuizTestHandles};
use super::QuizView;
use crate::context::{UiApp, build_app_context};

#[derive(Clone)]
struct TestApp {
    quiz_loop: Arc<QuizLoopService>,
    reveal_delay: Duration,
}

impl UiApp for TestApp {
    fn quiz_loop(&self) -> Arc<QuizLoopService> {
        Arc::clone(&self.quiz_loop)
    }

    fn reveal_delay(&self) -> Duration {
        self.reveal_delay
    }
}

#[derive(Props, Clone)]
struct QuizHarnessProps {
    app: Arc<TestApp>,
    handles: QuizTestHandles,
}

impl PartialEq for QuizHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for QuizHarnessProps {}

#[component]
fn QuizHarness(props: QuizHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.handles.clone());
    rsx! { QuizView {} }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub handles: QuizTestHandles,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        for _ in 0..3 {
            let _ = tokio::time::timeout(
                std::time::Duration::from_millis(50),
                self.dom.wait_for_work(),
            )
            .await;
            self.dom.render_immediate(&mut NoOpMutations);
            self.dom.process_events();
        }
    }

    pub fn dispatch(&mut self, intent: QuizIntent) {
        let dispatch = self.handles.dispatch();
        self.dom.in_runtime(|| dispatch.call(intent));
        drive_dom(&mut self.dom);
    }

    /// Correct answer of the open question, read without subscribing.
    pub fn correct_answer(&self) -> Option<String> {
        let vm = self.handles.vm();
        self.dom.in_runtime(|| {
            vm.peek()
                .session()
                .current_question()
                .map(|question| question.correct_answer().to_string())
        })
    }

    /// Some answer of the open question other than the correct one.
    pub fn wrong_answer(&self) -> Option<String> {
        let vm = self.handles.vm();
        self.dom.in_runtime(|| {
            let guard = vm.peek();
            let question = guard.session().current_question()?;
            question
                .answers()
                .iter()
                .find(|answer| !question.is_correct(answer))
                .cloned()
        })
    }

    pub fn score(&self) -> usize {
        let vm = self.handles.vm();
        self.dom.in_runtime(|| vm.peek().session().score())
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_quiz_harness(source: Arc<dyn QuestionSource>, reveal_delay: Duration) -> ViewHarness {
    let quiz_loop = Arc::new(QuizLoopService::new(source, QuizConfig::default()));
    let handles = QuizTestHandles::default();
    let app = Arc::new(TestApp {
        quiz_loop,
        reveal_delay,
    });

    let dom = VirtualDom::new_with_props(
        QuizHarness,
        QuizHarnessProps {
            app,
            handles: handles.clone(),
        },
    );

    ViewHarness { dom, handles }
}
