mod end;
mod question;
mod quiz;
mod start;
mod state;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use end::EndScreen;
pub use question::{AnswerButton, QuestionScreen};
pub use quiz::{QuizIntent, QuizView};
pub use start::StartScreen;
pub use state::{ViewError, ViewState, view_state_from_resource};
