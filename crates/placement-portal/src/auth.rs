//! Demo lecturer sign-in: institutional email, then a shared secret.
//!
//! The flow is a small state machine per session:
//! `Anonymous` → `AwaitingSecret` (after [`LecturerSession::login`] with a
//! registered email) →
//! `Lecturer` (after [`LecturerSession::verify_secret`]).

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::config::PortalSettings;
use crate::error::{PortalError, Result};

/// Registered lecturer accounts.
pub trait UserStore {
    /// Adds an email; returns `false` if it was already present.
    fn insert(&mut self, email: &str) -> bool;

    fn contains(&self, email: &str) -> bool;
}

/// Process-local store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserStore {
    emails: BTreeSet<String>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.emails.len()
    }

    pub fn is_empty(&self) -> bool {
        self.emails.is_empty()
    }
}

impl UserStore for InMemoryUserStore {
    fn insert(&mut self, email: &str) -> bool {
        self.emails.insert(email.to_ascii_lowercase())
    }

    fn contains(&self, email: &str) -> bool {
        self.emails.contains(&email.to_ascii_lowercase())
    }
}

/// Records a lecturer registration.
///
/// The email must end with the institutional suffix (case-insensitive).
pub fn register(store: &mut dyn UserStore, settings: &PortalSettings, email: &str) -> Result<()> {
    let email = email.trim();
    let suffix = settings.institution_email_suffix.to_ascii_lowercase();
    let domain_ok = email.len() > suffix.len() && email.to_ascii_lowercase().ends_with(&suffix);
    if !domain_ok {
        return Err(PortalError::EmailNotInstitutional {
            email: email.to_string(),
            suffix: settings.institution_email_suffix.clone(),
        });
    }
    if store.insert(email) {
        info!("lecturer registered");
    }
    Ok(())
}

/// Where a session is in the sign-in flow.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "state", content = "email", rename_all = "snake_case")]
pub enum AuthState {
    #[default]
    Anonymous,
    AwaitingSecret(String),
    Lecturer(String),
}

/// One visitor's sign-in state.
#[derive(Debug, Clone, Default)]
pub struct LecturerSession {
    state: AuthState,
}

impl LecturerSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &AuthState {
        &self.state
    }

    /// First step. The email must be registered in `store`; the password
    /// is only checked for presence.
    pub fn login(&mut self, store: &dyn UserStore, email: &str, password: &str) -> Result<()> {
        let email = email.trim();
        if email.is_empty() || password.is_empty() {
            return Err(PortalError::MissingCredentials);
        }
        if !store.contains(email) {
            warn!("login rejected: email not registered");
            return Err(PortalError::NotRegistered {
                email: email.to_string(),
            });
        }
        self.state = AuthState::AwaitingSecret(email.to_string());
        Ok(())
    }

    /// Second step. A wrong secret leaves the login pending.
    pub fn verify_secret(&mut self, settings: &PortalSettings, secret: &str) -> Result<&str> {
        let AuthState::AwaitingSecret(email) = &self.state else {
            return Err(PortalError::NoPendingLogin);
        };
        match settings.lecturer_secret.as_deref() {
            Some(expected) if expected == secret => {
                let email = email.clone();
                info!("lecturer signed in");
                self.state = AuthState::Lecturer(email);
                self.require_lecturer()
            }
            Some(_) => {
                warn!("lecturer secret rejected");
                Err(PortalError::WrongSecret)
            }
            None => {
                warn!("lecturer secret rejected: LECTURER_SECRET is not configured");
                Err(PortalError::WrongSecret)
            }
        }
    }

    pub fn logout(&mut self) {
        self.state = AuthState::Anonymous;
    }

    /// Guard for the lecturer area; yields the signed-in email.
    pub fn require_lecturer(&self) -> Result<&str> {
        match &self.state {
            AuthState::Lecturer(email) => Ok(email),
            _ => Err(PortalError::NotSignedIn),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{LECTURER_SECRET, StaticConfig};

    fn settings(secret: Option<&str>) -> PortalSettings {
        let mut config = StaticConfig::new();
        if let Some(secret) = secret {
            config = config.with(LECTURER_SECRET, secret);
        }
        PortalSettings::load(&config).unwrap()
    }

    fn store_with(email: &str) -> InMemoryUserStore {
        let mut store = InMemoryUserStore::new();
        store.insert(email);
        store
    }

    #[test]
    fn register_checks_institution_suffix() {
        let settings = settings(None);
        let mut store = InMemoryUserStore::new();
        register(&mut store, &settings, "Dana@Zefat.AC.IL").unwrap();
        assert!(store.contains("dana@zefat.ac.il"));

        let err = register(&mut store, &settings, "dana@gmail.com").unwrap_err();
        assert!(matches!(err, PortalError::EmailNotInstitutional { .. }));
        let err = register(&mut store, &settings, "@zefat.ac.il").unwrap_err();
        assert!(matches!(err, PortalError::EmailNotInstitutional { .. }));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn full_sign_in_flow() {
        let settings = settings(Some("open-sesame"));
        let store = store_with("lecturer@zefat.ac.il");
        let mut session = LecturerSession::new();
        assert_eq!(session.require_lecturer(), Err(PortalError::NotSignedIn));

        session.login(&store, "lecturer@zefat.ac.il", "pw").unwrap();
        assert_eq!(
            session.state(),
            &AuthState::AwaitingSecret("lecturer@zefat.ac.il".to_string())
        );
        assert_eq!(session.require_lecturer(), Err(PortalError::NotSignedIn));

        assert_eq!(
            session.verify_secret(&settings, "wrong"),
            Err(PortalError::WrongSecret)
        );
        assert!(matches!(session.state(), AuthState::AwaitingSecret(_)));

        let email = session.verify_secret(&settings, "open-sesame").unwrap();
        assert_eq!(email, "lecturer@zefat.ac.il");
        assert_eq!(session.require_lecturer(), Ok("lecturer@zefat.ac.il"));

        session.logout();
        assert_eq!(session.state(), &AuthState::Anonymous);
    }

    #[test]
    fn login_requires_both_fields() {
        let store = store_with("a@zefat.ac.il");
        let mut session = LecturerSession::new();
        assert_eq!(
            session.login(&store, "", "pw"),
            Err(PortalError::MissingCredentials)
        );
        assert_eq!(
            session.login(&store, "a@zefat.ac.il", ""),
            Err(PortalError::MissingCredentials)
        );
        assert_eq!(session.state(), &AuthState::Anonymous);
    }

    #[test]
    fn login_requires_registration() {
        let settings = settings(Some("x"));
        let mut store = InMemoryUserStore::new();
        let mut session = LecturerSession::new();
        assert_eq!(
            session.login(&store, "dana@zefat.ac.il", "pw"),
            Err(PortalError::NotRegistered {
                email: "dana@zefat.ac.il".to_string()
            })
        );
        assert_eq!(session.state(), &AuthState::Anonymous);

        register(&mut store, &settings, "Dana@zefat.ac.il").unwrap();
        session.login(&store, " DANA@zefat.ac.il ", "pw").unwrap();
        assert_eq!(
            session.state(),
            &AuthState::AwaitingSecret("DANA@zefat.ac.il".to_string())
        );
    }

    #[test]
    fn secret_step_needs_pending_login() {
        let settings = settings(Some("x"));
        let mut session = LecturerSession::new();
        assert_eq!(
            session.verify_secret(&settings, "x"),
            Err(PortalError::NoPendingLogin)
        );
    }

    #[test]
    fn unset_secret_never_matches() {
        let settings = settings(None);
        let store = store_with("a@zefat.ac.il");
        let mut session = LecturerSession::new();
        session.login(&store, "a@zefat.ac.il", "pw").unwrap();
        assert_eq!(session.verify_secret(&settings, ""), Err(PortalError::WrongSecret));
    }
}
