//! Page controllers. Each owns its page's state behind a lock and talks to
//! the backend through the shared [`ApiClient`](crate::api::ApiClient).
//!
//! Failures are caught here: they are stored on the page state for display
//! and returned to the caller, never left to unwind.

pub mod generator;
pub mod help;
pub mod insights;
pub mod library;

pub use generator::{Generated, GeneratorController, GeneratorState};
pub use help::HelpPage;
pub use insights::{InsightsController, InsightsState};
pub use library::{LibraryController, LibraryState};
