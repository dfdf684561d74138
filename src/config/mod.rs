//! Option management subsystem.
//!
//! # Data Flow
//! ```text
//! option file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → LogOption (validated, immutable)
//!     → Log::set_option builds sinks and swaps them in atomically
//!
//! On file change:
//!     watcher.rs detects change
//!     → loader.rs loads new option
//!     → validation.rs validates
//!     → atomic swap inside the facade
//!     → subsequent calls observe the new option
//! ```
//!
//! # Design Decisions
//! - An option is immutable once installed; changes install a new one
//! - All fields have defaults to allow minimal option files
//! - A failed reload keeps the current option

pub mod loader;
pub mod schema;
pub mod validation;
pub mod watcher;

pub use loader::{load_option, parse_option, ConfigError};
pub use schema::LogOption;
pub use validation::{validate_option, ValidationError};
pub use watcher::OptionWatcher;
