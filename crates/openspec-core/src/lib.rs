pub mod config;
pub mod error;
pub mod io;
pub mod markers;
pub mod paths;
pub mod slash;
pub mod templates;

pub use error::{OpenSpecError, Result};
pub use markers::OPENSPEC_MARKERS;
pub use slash::{SlashCommandConfigurator, SlashCommandRegistry, SlashCommandTarget};
pub use templates::SlashCommandId;
