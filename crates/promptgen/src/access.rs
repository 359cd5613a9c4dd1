//! Access gate for the Pro categories.
//!
//! Two states, [`AccessState::Locked`] and [`AccessState::Unlocked`]. The gate
//! restores its state once from the store at startup and can only move from
//! locked to unlocked; there is no path back.
//!
//! The unlock code is a literal compared on the client. Anyone reading the
//! binary can recover it. This mirrors the product's purchase flow, where the
//! code is handed out after checkout, and is kept as-is for compatibility with
//! existing stored flags.

use tracing::{debug, info, warn};

use crate::error::AccessError;
use crate::store::KeyValueStore;

/// Store key holding the persisted flag.
pub const PRO_FLAG_KEY: &str = "proUser";
/// The only stored value that counts as unlocked.
pub const PRO_FLAG_VALUE: &str = "true";
/// Access code, compared after trimming and lowercasing the input.
pub const UNLOCK_CODE: &str = "unlock-pro-799";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessState {
    Locked,
    Unlocked,
}

/// Successful unlock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Unlocked {
    /// False when the flag could not be written. The session stays unlocked
    /// but the next launch will start locked again.
    pub persisted: bool,
}

/// Stateful gate over an injected store.
#[derive(Debug)]
pub struct AccessGate<S> {
    store: S,
    state: AccessState,
}

impl<S: KeyValueStore> AccessGate<S> {
    /// Restore the gate from `store`.
    ///
    /// Unlocked only when the stored flag is exactly `"true"`. A missing key,
    /// any other value, or a store read failure all start locked.
    pub fn init(store: S) -> Self {
        let state = match store.get(PRO_FLAG_KEY) {
            Ok(Some(value)) if value == PRO_FLAG_VALUE => AccessState::Unlocked,
            Ok(_) => AccessState::Locked,
            Err(e) => {
                warn!("failed to read access flag, starting locked: {e}");
                AccessState::Locked
            }
        };
        debug!(?state, "access gate initialized");
        Self { store, state }
    }

    pub fn state(&self) -> AccessState {
        self.state
    }

    pub fn is_unlocked(&self) -> bool {
        self.state == AccessState::Unlocked
    }

    /// Compare `code` against the access code and unlock on a match.
    ///
    /// A match persists the flag immediately; a store write failure is logged
    /// and reported through [`Unlocked::persisted`]. A mismatch changes
    /// nothing and writes nothing. Attempts are unlimited.
    pub fn attempt_unlock(&mut self, code: &str) -> Result<Unlocked, AccessError> {
        if !code_matches(code) {
            info!("unlock attempt rejected");
            return Err(AccessError::InvalidCode);
        }

        self.state = AccessState::Unlocked;
        let persisted = match self.store.set(PRO_FLAG_KEY, PRO_FLAG_VALUE) {
            Ok(()) => true,
            Err(e) => {
                warn!("unlocked for this session only, flag not persisted: {e}");
                false
            }
        };
        info!(persisted, "pro access unlocked");
        Ok(Unlocked { persisted })
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

fn code_matches(code: &str) -> bool {
    code.trim().to_lowercase() == UNLOCK_CODE
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StoreError;
    use crate::store::MemoryStore;

    /// Store whose reads and writes always fail.
    struct BrokenStore;

    impl KeyValueStore for BrokenStore {
        fn get(&self, _key: &str) -> Result<Option<String>, StoreError> {
            Err(StoreError::Io {
                path: "broken".into(),
                source: std::io::Error::other("disk on fire"),
            })
        }

        fn set(&mut self, _key: &str, _value: &str) -> Result<(), StoreError> {
            Err(StoreError::Io {
                path: "broken".into(),
                source: std::io::Error::other("disk on fire"),
            })
        }
    }

    #[test]
    fn empty_store_starts_locked() {
        let gate = AccessGate::init(MemoryStore::new());
        assert_eq!(gate.state(), AccessState::Locked);
    }

    #[test]
    fn only_exact_true_restores_unlocked() {
        for (value, expected) in [
            ("true", AccessState::Unlocked),
            ("TRUE", AccessState::Locked),
            ("1", AccessState::Locked),
            (" true", AccessState::Locked),
            ("", AccessState::Locked),
        ] {
            let mut store = MemoryStore::new();
            store.set(PRO_FLAG_KEY, value).unwrap();
            assert_eq!(AccessGate::init(store).state(), expected, "{value:?}");
        }
    }

    #[test]
    fn code_is_trimmed_and_case_insensitive() {
        let store = MemoryStore::new();
        let mut gate = AccessGate::init(store.clone());

        let unlocked = gate.attempt_unlock("  UNLOCK-PRO-799\n").unwrap();
        assert!(unlocked.persisted);
        assert!(gate.is_unlocked());

        // A fresh session over the same store comes up unlocked.
        let fresh = AccessGate::init(store);
        assert_eq!(fresh.state(), AccessState::Unlocked);
    }

    #[test]
    fn wrong_code_stays_locked_and_writes_nothing() {
        let store = MemoryStore::new();
        let mut gate = AccessGate::init(store.clone());

        assert_eq!(gate.attempt_unlock("wrong-code"), Err(AccessError::InvalidCode));
        assert_eq!(gate.state(), AccessState::Locked);
        assert!(store.is_empty());
    }

    #[test]
    fn unlimited_attempts() {
        let mut gate = AccessGate::init(MemoryStore::new());
        for attempt in 0..50 {
            assert!(gate.attempt_unlock(&format!("guess-{attempt}")).is_err());
        }
        assert!(gate.attempt_unlock("unlock-pro-799").is_ok());
    }

    #[test]
    fn correct_code_after_unlock_succeeds_again() {
        let store = MemoryStore::new();
        let mut gate = AccessGate::init(store.clone());
        gate.attempt_unlock("unlock-pro-799").unwrap();
        gate.attempt_unlock("unlock-pro-799").unwrap();
        assert!(gate.is_unlocked());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn wrong_code_after_unlock_does_not_relock() {
        let mut gate = AccessGate::init(MemoryStore::new());
        gate.attempt_unlock("unlock-pro-799").unwrap();
        assert!(gate.attempt_unlock("nope").is_err());
        assert!(gate.is_unlocked());
    }

    #[test]
    fn store_failures_are_best_effort() {
        let mut gate = AccessGate::init(BrokenStore);
        assert_eq!(gate.state(), AccessState::Locked);

        let unlocked = gate.attempt_unlock("unlock-pro-799").unwrap();
        assert!(!unlocked.persisted);
        assert!(gate.is_unlocked());
    }
}
