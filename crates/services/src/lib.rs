#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod quiz;
pub mod source;

pub use config::{QuestionKind, QuizConfig};
pub use error::{ConfigError, QuizError, SourceError};
pub use quiz::{QuizLoopService, prepare_questions};
pub use source::{
    OpenTdbClient, QuestionQuery, QuestionSource, SimulatedFailure, StaticQuestionSource,
};
