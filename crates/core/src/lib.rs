#![forbid(unsafe_code)]

pub mod error;
pub mod model;
pub mod session;
pub mod shuffle;

pub use error::{ErrorKind, LoadFailure, SessionError};
pub use model::{Category, CategoryId, PreparedQuestion, QuestionError, RawQuestion};
pub use session::{
    AnswerOutcome, AnswerTicket, FinalScore, Generation, LoadResolution, LoadTicket,
    Operation, QuestionProgress, QuizState, Session,
};
pub use shuffle::shuffle_in_place;
