use serde::Deserialize;

use crate::model::ids::CategoryId;

/// A labeled partition of the question bank, as listed by the question source.
///
/// Deserializes from an Open Trivia DB `trivia_categories` entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
pub struct Category {
    id: CategoryId,
    name: String,
}

impl Category {
    #[must_use]
    pub fn new(id: CategoryId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    #[must_use]
    pub fn id(&self) -> CategoryId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}
