//! Login session backed by the on-disk flag store

use anyhow::Result;
use async_trait::async_trait;

use super::store::FlagStore;
use super::traits::Session;

/// Flag key marking a logged-in user
const LOGGED_IN_KEY: &str = "isLoggedIn";
/// Sentinel value stored under the flag key
const LOGGED_IN_VALUE: &str = "1";

/// Session persisted through the flag store
///
/// The flag is read once when the session is restored; after that the
/// in-memory bit is authoritative and the store is only written through.
/// Logging in records the flag, logging out removes it.
pub struct StoredSession {
    store: FlagStore,
    logged_in: bool,
}

impl StoredSession {
    /// Restore session state from the store
    pub fn restore(store: FlagStore) -> Self {
        let logged_in = store.get(LOGGED_IN_KEY) == Some(LOGGED_IN_VALUE);
        tracing::info!("Session restored, logged_in={logged_in}");
        Self { store, logged_in }
    }
}

#[async_trait]
impl Session for StoredSession {
    fn is_logged_in(&self) -> bool {
        self.logged_in
    }

    async fn login(&mut self, _email: &str, _password: &str) -> Result<()> {
        self.store.set(LOGGED_IN_KEY, LOGGED_IN_VALUE)?;
        self.logged_in = true;
        tracing::info!("Session established");
        Ok(())
    }

    async fn logout(&mut self) -> Result<()> {
        self.store.remove(LOGGED_IN_KEY)?;
        self.logged_in = false;
        tracing::info!("Session ended");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn store_at(dir: &tempfile::TempDir) -> FlagStore {
        FlagStore::open_at(dir.path().join("flags.json")).unwrap()
    }

    mod restore {
        use super::*;

        #[test]
        fn test_fresh_store_restores_logged_out() {
            let dir = tempdir().unwrap();
            let session = StoredSession::restore(store_at(&dir));
            assert!(!session.is_logged_in());
        }

        #[test]
        fn test_sentinel_value_restores_logged_in() {
            let dir = tempdir().unwrap();
            let mut store = store_at(&dir);
            store.set("isLoggedIn", "1").unwrap();

            let session = StoredSession::restore(store);
            assert!(session.is_logged_in());
        }

        #[test]
        fn test_other_values_do_not_count_as_logged_in() {
            let dir = tempdir().unwrap();
            let mut store = store_at(&dir);
            store.set("isLoggedIn", "yes").unwrap();

            let session = StoredSession::restore(store);
            assert!(!session.is_logged_in());
        }
    }

    mod transitions {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test]
        async fn test_login_records_the_flag() {
            let dir = tempdir().unwrap();
            let mut session = StoredSession::restore(store_at(&dir));

            session.login("alice@example.com", "correct horse").await.unwrap();
            assert!(session.is_logged_in());

            let reopened = store_at(&dir);
            assert_eq!(reopened.get("isLoggedIn"), Some("1"));
        }

        #[tokio::test]
        async fn test_logout_removes_the_flag() {
            let dir = tempdir().unwrap();
            let mut session = StoredSession::restore(store_at(&dir));
            session.login("alice@example.com", "correct horse").await.unwrap();

            session.logout().await.unwrap();
            assert!(!session.is_logged_in());

            let reopened = store_at(&dir);
            assert_eq!(reopened.get("isLoggedIn"), None);
        }

        #[tokio::test]
        async fn test_session_survives_a_restart() {
            let dir = tempdir().unwrap();
            let mut session = StoredSession::restore(store_at(&dir));
            session.login("alice@example.com", "correct horse").await.unwrap();
            drop(session);

            let restored = StoredSession::restore(store_at(&dir));
            assert!(restored.is_logged_in());
        }

        #[tokio::test]
        async fn test_logout_survives_a_restart() {
            let dir = tempdir().unwrap();
            let mut session = StoredSession::restore(store_at(&dir));
            session.login("alice@example.com", "correct horse").await.unwrap();
            session.logout().await.unwrap();
            drop(session);

            let restored = StoredSession::restore(store_at(&dir));
            assert!(!restored.is_logged_in());
        }
    }
}
