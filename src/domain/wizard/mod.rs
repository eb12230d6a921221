//! Wizard domain module.
//!
//! A pure transition engine (`Wizard`) over immutable `WizardState` values,
//! and `FinderSession`, which owns the current state for one user.

mod machine;
mod session;
mod state;
mod status;

pub use machine::{Step, Wizard};
pub use session::FinderSession;
pub use state::WizardState;
pub use status::WizardStatus;
