pub mod app;
pub mod context;
pub mod vm;
pub mod views;

pub use app::App;
pub use context::{AppContext, DEFAULT_REVEAL_DELAY, UiApp, build_app_context};
