use std::fmt;

use crate::model::CategoryId;

/// Monotonic counter bumped every time the session discards its in-flight work.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Generation(u64);

impl Generation {
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }

    #[must_use]
    pub(crate) fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

impl fmt::Display for Generation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Handle for one outstanding question load.
///
/// Issued by `Session::begin_start`; the fetch result is only applied when it is
/// handed back together with the ticket that is still pending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LoadTicket {
    generation: Generation,
    category: CategoryId,
}

impl LoadTicket {
    pub(crate) fn new(generation: Generation, category: CategoryId) -> Self {
        Self {
            generation,
            category,
        }
    }

    #[must_use]
    pub fn generation(&self) -> Generation {
        self.generation
    }

    #[must_use]
    pub fn category(&self) -> CategoryId {
        self.category
    }
}

/// Permission to answer exactly one question of one quiz run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AnswerTicket {
    generation: Generation,
    index: usize,
}

impl AnswerTicket {
    pub(crate) fn new(generation: Generation, index: usize) -> Self {
        Self { generation, index }
    }

    #[must_use]
    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// Zero-based index of the question this ticket answers.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }
}

impl fmt::Display for AnswerTicket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "question {} of generation {}", self.index + 1, self.generation)
    }
}
