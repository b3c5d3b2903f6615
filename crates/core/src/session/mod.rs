mod engine;
mod progress;
mod ticket;

pub use engine::{Operation, QuizState, Session};
pub use progress::{AnswerOutcome, FinalScore, LoadResolution, QuestionProgress};
pub use ticket::{AnswerTicket, Generation, LoadTicket};
