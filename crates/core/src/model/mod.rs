mod category;
mod ids;
mod question;

pub use category::Category;
pub use ids::{CategoryId, ParseIdError};
pub use question::{PreparedQuestion, QuestionError, RawQuestion};
