//! # scoda-client
//!
//! Client for the Scoda content-planning backend: a typed REST client, the
//! auth session store, idea-graph views, and the page controllers built on
//! top of them.

pub mod api;
pub mod background;
pub mod config;
pub mod controllers;
pub mod error;
pub mod session;
pub mod state;
pub mod view;

use tracing_subscriber::{fmt, EnvFilter};

pub use config::ClientConfig;
pub use error::ClientError;
pub use session::{AuthStatus, AuthStore};
pub use state::AppState;
pub use view::GraphView;

/// Install the global tracing subscriber. `RUST_LOG` overrides the default
/// filter. Output goes to stderr so rendered pages stay clean on stdout.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("scoda_client=debug,scoda_store=info,warn"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .init();
}
