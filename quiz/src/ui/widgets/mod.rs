//! TUI widgets for the quiz screens

pub mod loading;
pub mod question;
pub mod results;
pub mod setup;

pub use loading::LoadingWidget;
pub use question::QuestionCardWidget;
pub use results::ResultsWidget;
pub use setup::{CountSliderWidget, LevelFieldWidget, SubjectListWidget};
