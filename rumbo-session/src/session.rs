use crate::credential::{decode_claims, Claims, CredentialError, CredentialStore};
use std::sync::{Arc, Mutex, RwLock};

/// Emitted to observers when the session changes, so components that key off
/// the stored credential (favorites cache, listings) can react.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    LoggedIn,
    LoggedOut,
}

type Observer = Box<dyn Fn(SessionEvent) + Send + Sync>;

/// Process-wide session context. Owns the decoded identity exclusively;
/// everything else reads it through this handle.
///
/// Lifecycle is explicit: `restore()` on startup, `logout()` on teardown.
pub struct SessionContext {
    store: Arc<dyn CredentialStore>,
    identity: RwLock<Option<Claims>>,
    observers: Mutex<Vec<Observer>>,
}

impl SessionContext {
    pub fn new(store: Arc<dyn CredentialStore>) -> Self {
        Self {
            store,
            identity: RwLock::new(None),
            observers: Mutex::new(Vec::new()),
        }
    }

    /// Read the stored credential at startup. A credential that no longer
    /// decodes is discarded and the user is simply anonymous.
    pub fn restore(&self) {
        let Some(credential) = self.store.load() else {
            return;
        };

        match decode_claims(&credential) {
            Ok(claims) => {
                tracing::debug!(sub = %claims.sub, "Session restored");
                *self.identity.write().expect("identity lock poisoned") = Some(claims);
            }
            Err(_) => {
                tracing::debug!("Stored credential no longer decodes, discarding");
                self.store.clear();
            }
        }
    }

    /// Store a freshly issued credential and adopt its identity.
    pub fn login(&self, credential: &str) -> Result<Claims, CredentialError> {
        let claims = decode_claims(credential)?;
        self.store.save(credential);
        *self.identity.write().expect("identity lock poisoned") = Some(claims.clone());
        self.notify(SessionEvent::LoggedIn);
        Ok(claims)
    }

    /// Clear storage and identity, then notify observers synchronously.
    pub fn logout(&self) {
        self.store.clear();
        *self.identity.write().expect("identity lock poisoned") = None;
        self.notify(SessionEvent::LoggedOut);
    }

    pub fn identity(&self) -> Option<Claims> {
        self.identity.read().expect("identity lock poisoned").clone()
    }

    pub fn role(&self) -> Option<rumbo_shared::Role> {
        self.identity.read().expect("identity lock poisoned").as_ref().map(|c| c.role)
    }

    pub fn is_authenticated(&self) -> bool {
        self.identity.read().expect("identity lock poisoned").is_some()
    }

    /// The raw credential, for attaching as a bearer header.
    pub fn credential(&self) -> Option<String> {
        if self.is_authenticated() {
            self.store.load()
        } else {
            None
        }
    }

    pub fn subscribe(&self, observer: impl Fn(SessionEvent) + Send + Sync + 'static) {
        self.observers
            .lock()
            .expect("observer lock poisoned")
            .push(Box::new(observer));
    }

    fn notify(&self, event: SessionEvent) {
        let observers = self.observers.lock().expect("observer lock poisoned");
        for observer in observers.iter() {
            observer(event);
        }
    }
}
