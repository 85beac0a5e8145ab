pub mod config;
pub mod error;
pub mod parse;
pub mod prompt;
pub mod topic;
pub mod types;
pub mod words;

// Keep the public surface small and intentional.
pub use config::*;
pub use error::*;
pub use parse::*;
pub use prompt::*;
pub use topic::*;
pub use types::*;
pub use words::*;
