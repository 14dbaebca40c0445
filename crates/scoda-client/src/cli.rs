//! Command-line interface for the `scoda` binary.

use clap::{Parser, Subcommand};

use scoda_shared::NodeFilter;

const ENV_HELP: &str = "\
Environment:
  SCODA_API_URL       Backend base URL (default http://localhost:3001)
  SCODA_TIMEOUT_SECS  Request timeout in seconds (default 30)
  SCODA_DATA_DIR      Directory for the local session database
  RUST_LOG            Log filter";

#[derive(Debug, Parser)]
#[command(name = "scoda", version)]
#[command(about = "Scoda content planner")]
#[command(disable_help_subcommand = true)]
#[command(after_help = ENV_HELP)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Cli {
    /// The requested command; a bare `scoda` shows help.
    pub fn into_command(self) -> Command {
        self.command.unwrap_or(Command::Help)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Generate a content plan for a topic
    Generate {
        /// Topic, e.g. "7-day Instagram Reels challenge for fitness coaches"
        #[arg(required = true, num_args = 1..)]
        topic: Vec<String>,
        #[arg(long, default_value_t = NodeFilter::All)]
        filter: NodeFilter,
    },
    /// Create an account and sign in
    Signup {
        name: String,
        email: String,
        password: String,
    },
    /// Sign in
    Login { email: String, password: String },
    /// Sign out, locally and on the backend
    Logout,
    /// Show the signed-in user
    #[command(name = "whoami")]
    WhoAmI,
    /// Change name and email
    Profile { name: String, email: String },
    /// Permanently delete the account
    DeleteAccount,
    /// Saved content plans
    Library {
        #[command(subcommand)]
        action: Option<LibraryCommand>,
    },
    /// Usage statistics
    Insights,
    /// Check that the backend is up
    Health,
    /// How Scoda works
    Help,
}

impl Command {
    /// Commands that act on the stored session and need it verified first.
    pub fn needs_session(&self) -> bool {
        !matches!(
            self,
            Command::Help | Command::Health | Command::Signup { .. } | Command::Login { .. }
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum LibraryCommand {
    /// List saved plans
    List,
    /// Show one saved plan
    Show {
        id: String,
        #[arg(long, default_value_t = NodeFilter::All)]
        filter: NodeFilter,
    },
    /// Delete a saved plan
    Delete { id: String },
    /// Ask the backend to improve a saved plan
    Refine { id: String },
}
