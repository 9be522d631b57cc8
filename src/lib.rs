/// Shelfscan - terminal catalog browser
///
/// Filters a static book catalog by title, author and genre, pages through
/// the matches and expands them with related titles on "load more".

pub mod cli;
pub mod config;
pub mod core;
pub mod tui;

#[cfg(test)]
mod tests;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
