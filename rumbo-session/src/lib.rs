pub mod credential;
pub mod guard;
pub mod session;

pub use credential::{Claims, CredentialError, CredentialStore, MemoryCredentialStore};
pub use guard::{allows, Capability, GuardDecision, RouteGuard};
pub use session::{SessionContext, SessionEvent};
