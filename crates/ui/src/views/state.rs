use dioxus::prelude::*;
use trivia_core::LoadFailure;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewError {
    CategoriesUnavailable,
    NoQuestions,
    QuestionsUnreachable,
    Unknown,
}

impl ViewError {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            ViewError::CategoriesUnavailable => "Failed to load quiz categories. Please try again.",
            ViewError::NoQuestions => "Could not retrieve questions. Try a different category.",
            ViewError::QuestionsUnreachable => {
                "Failed to load questions. Please check your network connection."
            }
            ViewError::Unknown => "Something went wrong. Please try again.",
        }
    }

    #[must_use]
    pub fn from_load_failure(failure: LoadFailure) -> Self {
        match failure {
            LoadFailure::NoQuestionsAvailable => ViewError::NoQuestions,
            LoadFailure::SourceUnreachable => ViewError::QuestionsUnreachable,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ViewState<T> {
    Idle,
    Loading,
    Ready(T),
    Error(ViewError),
}

#[must_use]
pub fn view_state_from_resource<T: Clone>(
    resource: Resource<Result<T, ViewError>>,
) -> ViewState<T> {
    match resource.state().cloned() {
        UseResourceState::Pending => ViewState::Loading,
        UseResourceState::Ready => match resource.value().read().as_ref() {
            Some(Ok(data)) => ViewState::Ready(data.clone()),
            Some(Err(err)) => ViewState::Error(*err),
            None => ViewState::Error(ViewError::Unknown),
        },
        UseResourceState::Paused | UseResourceState::Stopped => ViewState::Idle,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_failures_keep_their_messages_apart() {
        let empty = ViewError::from_load_failure(LoadFailure::NoQuestionsAvailable);
        let down = ViewError::from_load_failure(LoadFailure::SourceUnreachable);
        assert_eq!(
            empty.message(),
            "Could not retrieve questions. Try a different category."
        );
        assert_eq!(
            down.message(),
            "Failed to load questions. Please check your network connection."
        );
    }
}
