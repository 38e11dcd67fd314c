pub mod convert;
pub mod interactive;
pub mod list;
pub mod prompt;
pub mod rate;
pub mod session;
pub mod setup;
pub mod ui;
