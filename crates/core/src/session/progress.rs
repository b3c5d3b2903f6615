/// Position within a running quiz, useful for UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuestionProgress {
    /// 1-based ordinal of the current question.
    pub number: usize,
    pub total: usize,
}

/// Score shown once the quiz is complete.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FinalScore {
    pub score: usize,
    pub total: usize,
}

/// Result of a single accepted answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerOutcome {
    pub correct: bool,
    pub correct_answer: String,
    pub score: usize,
    pub is_complete: bool,
}

/// What happened to a finished question load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadResolution {
    /// The questions were installed and the quiz is running.
    Started { total: usize },
    /// The ticket was superseded; the result was dropped untouched.
    Discarded,
}
