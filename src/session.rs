//! Session identity and conversation bookkeeping
//!
//! A [`Session`] is one quiz attempt. It owns the opaque session id that
//! correlates every agent call with a single server-side conversation, and a
//! local audit trail of the answers submitted during the attempt. The history
//! is never sent to the agent.

use rand::Rng;

/// Default prefix for generated session ids
pub const DEFAULT_SESSION_PREFIX: &str = "game-quiz";

/// Length of the random component of a session id
const RANDOM_SUFFIX_LEN: usize = 9;

const BASE36_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Generate a new session id
///
/// The id has the form `{prefix}-{unix_millis}-{random}` where the random
/// component is nine lowercase base36 characters.
///
/// # Arguments
///
/// * `prefix` - Leading tag for the id (e.g. `game-quiz`)
///
/// # Examples
///
/// ```
/// use gamequiz::session::generate_session_id;
///
/// let id = generate_session_id("game-quiz");
/// assert!(id.starts_with("game-quiz-"));
/// assert_ne!(id, generate_session_id("game-quiz"));
/// ```
pub fn generate_session_id(prefix: &str) -> String {
    let millis = chrono::Utc::now().timestamp_millis();
    let mut rng = rand::rng();
    let suffix: String = (0..RANDOM_SUFFIX_LEN)
        .map(|_| BASE36_ALPHABET[rng.random_range(0..BASE36_ALPHABET.len())] as char)
        .collect();
    format!("{}-{}-{}", prefix, millis, suffix)
}

/// One conversational quiz attempt
///
/// Owned by the quiz state machine. Resetting replaces the id and clears
/// the history.
#[derive(Debug, Clone)]
pub struct Session {
    prefix: String,
    session_id: String,
    history: Vec<String>,
}

impl Session {
    /// Creates a session with a freshly generated id and empty history
    ///
    /// # Examples
    ///
    /// ```
    /// use gamequiz::session::Session;
    ///
    /// let session = Session::new("game-quiz");
    /// assert!(session.id().starts_with("game-quiz-"));
    /// assert!(session.history().is_empty());
    /// ```
    pub fn new(prefix: impl Into<String>) -> Self {
        let prefix = prefix.into();
        let session_id = generate_session_id(&prefix);
        Self {
            prefix,
            session_id,
            history: Vec::new(),
        }
    }

    /// The opaque id sent to the agent with every call
    pub fn id(&self) -> &str {
        &self.session_id
    }

    /// Answers submitted since the last reset, oldest first
    pub fn history(&self) -> &[String] {
        &self.history
    }

    /// Append an entry to the history
    pub fn record(&mut self, entry: impl Into<String>) {
        self.history.push(entry.into());
    }

    /// Replace the history with a single entry
    ///
    /// Used when the first question arrives, so a start that follows an
    /// aborted attempt never inherits stale entries.
    pub fn restart_history(&mut self, first: impl Into<String>) {
        self.history.clear();
        self.history.push(first.into());
    }

    /// Start a new attempt: new id, empty history
    ///
    /// The new id always differs from the previous one.
    pub fn reset(&mut self) {
        let mut next = generate_session_id(&self.prefix);
        while next == self.session_id {
            next = generate_session_id(&self.prefix);
        }
        tracing::debug!("Session reset: {} -> {}", self.session_id, next);
        self.session_id = next;
        self.history.clear();
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(DEFAULT_SESSION_PREFIX)
    }
}
