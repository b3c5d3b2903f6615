mod prepare;
mod workflow;

pub use prepare::prepare_questions;
pub use workflow::QuizLoopService;
