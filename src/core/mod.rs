pub mod aliases;
pub mod commands;
pub mod directory;
pub mod state;

pub use aliases::AliasStore;
pub use directory::DirectoryTracker;
pub use state::{Session, ShellState};
