use rand::Rng;
use serde::Deserialize;
use thiserror::Error;

use crate::shuffle::shuffle_in_place;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("question text cannot be empty")]
    EmptyText,

    #[error("correct answer cannot be empty")]
    EmptyCorrectAnswer,

    #[error("question has no incorrect answers")]
    NoIncorrectAnswers,
}

//
// ─── RAW QUESTION ──────────────────────────────────────────────────────────────
//

/// A question record exactly as delivered by the question source.
///
/// Text fields may carry inline markup or HTML entities. They are kept verbatim;
/// rendering them safely is the presentation layer's job. Field names on the wire
/// follow Open Trivia DB's `results` entries.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RawQuestion {
    #[serde(rename = "question")]
    pub text: String,
    pub correct_answer: String,
    #[serde(default)]
    pub incorrect_answers: Vec<String>,
}

impl RawQuestion {
    #[must_use]
    pub fn new(
        text: impl Into<String>,
        correct_answer: impl Into<String>,
        incorrect_answers: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            text: text.into(),
            correct_answer: correct_answer.into(),
            incorrect_answers: incorrect_answers.into_iter().map(Into::into).collect(),
        }
    }

    /// Check that the record can be turned into a playable question.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError` when the text or correct answer is blank, or when
    /// there is nothing to choose between.
    pub fn validate(&self) -> Result<(), QuestionError> {
        if self.text.trim().is_empty() {
            return Err(QuestionError::EmptyText);
        }
        if self.correct_answer.trim().is_empty() {
            return Err(QuestionError::EmptyCorrectAnswer);
        }
        if self.incorrect_answers.is_empty() {
            return Err(QuestionError::NoIncorrectAnswers);
        }
        Ok(())
    }
}

//
// ─── PREPARED QUESTION ─────────────────────────────────────────────────────────
//

/// A question with its answer options shuffled once, at preparation time.
///
/// `answers` is a permutation of the incorrect answers plus the correct one.
/// The order never changes after construction, so repeated reads render the same
/// layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedQuestion {
    text: String,
    correct_answer: String,
    answers: Vec<String>,
}

impl PreparedQuestion {
    /// Prepare a raw question, shuffling its answers with the given RNG.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError` if the raw record fails validation.
    pub fn prepare<R: Rng + ?Sized>(raw: RawQuestion, rng: &mut R) -> Result<Self, QuestionError> {
        raw.validate()?;

        let RawQuestion {
            text,
            correct_answer,
            incorrect_answers,
        } = raw;

        let mut answers = incorrect_answers;
        answers.push(correct_answer.clone());
        shuffle_in_place(&mut answers, rng);

        Ok(Self {
            text,
            correct_answer,
            answers,
        })
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn correct_answer(&self) -> &str {
        &self.correct_answer
    }

    /// All answer options in their fixed, shuffled order.
    #[must_use]
    pub fn answers(&self) -> &[String] {
        &self.answers
    }

    /// Exact string comparison against the correct answer.
    #[must_use]
    pub fn is_correct(&self, answer: &str) -> bool {
        answer == self.correct_answer
    }
}
