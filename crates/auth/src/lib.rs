//! Credential gate in front of the game.
//!
//! A deliberately thin demo gate: an in-memory credential list, exact-match
//! lookup, and the current user. The binary refuses to enter the game loop
//! until [`AuthService::login`] succeeds. There are no tokens and no
//! hashing; the game owns no account data worth protecting.

/// A username/password pair accepted by the gate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: &str, password: &str) -> Self {
        Self {
            username: username.to_string(),
            password: password.to_string(),
        }
    }
}

/// Tracks who, if anyone, is logged in.
#[derive(Debug, Clone)]
pub struct AuthService {
    users: Vec<Credentials>,
    current_user: Option<String>,
}

impl AuthService {
    pub fn new(users: Vec<Credentials>) -> Self {
        Self {
            users,
            current_user: None,
        }
    }

    /// The two demo accounts: `player1`/`pass1` and `player2`/`pass2`.
    pub fn with_demo_users() -> Self {
        Self::new(vec![
            Credentials::new("player1", "pass1"),
            Credentials::new("player2", "pass2"),
        ])
    }

    /// Attempt to log in. Returns whether the credentials matched; a failed
    /// attempt does not log out a previously authenticated user.
    pub fn login(&mut self, username: &str, password: &str) -> bool {
        let found = self
            .users
            .iter()
            .any(|u| u.username == username && u.password == password);
        if found {
            self.current_user = Some(username.to_string());
        }
        found
    }

    pub fn logout(&mut self) {
        self.current_user = None;
    }

    pub fn is_authenticated(&self) -> bool {
        self.current_user.is_some()
    }

    pub fn current_user(&self) -> Option<&str> {
        self.current_user.as_deref()
    }
}

impl Default for AuthService {
    fn default() -> Self {
        Self::with_demo_users()
    }
}
