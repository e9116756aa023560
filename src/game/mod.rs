//! Session state machine, statistics and guess submission

mod error;
mod manager;
mod session;
mod stats;

pub use error::{GameError, GuessError, SessionError};
pub use manager::{SessionManager, SessionView, SubmitOutcome};
pub use session::{Guess, SessionState, SessionStatus};
pub use stats::Stats;
