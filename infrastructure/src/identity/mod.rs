//! Identity adapters

mod local;
mod session;

pub use local::LocalIdentity;
pub use session::{SessionError, SessionFile};
