mod commands;

pub use commands::{generate, Cli};
