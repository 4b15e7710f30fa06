//! Session Handling
//!
//! Token storage, the shared session guard run at the entry of every
//! protected view, and the explicit `Session` context handed to requests.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;
use wasm_bindgen::JsValue;

use crate::api::ApiClient;
use crate::config::{API_BASE_URL, LOGIN_PATH, TOKEN_STORAGE_KEY};
use crate::token;

// ========================
// Token Storage
// ========================

/// Where the bearer token lives between page loads
pub trait TokenStore {
    fn load(&self) -> Option<String>;
    fn save(&self, token: &str);
    fn clear(&self);
}

/// `window.localStorage` under [`TOKEN_STORAGE_KEY`]
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }

    fn report(action: &str, err: JsValue) {
        web_sys::console::error_1(&format!("[SESSION] localStorage {} failed: {:?}", action, err).into());
    }
}

impl TokenStore for BrowserStorage {
    fn load(&self) -> Option<String> {
        Self::storage()?.get_item(TOKEN_STORAGE_KEY).ok().flatten()
    }

    fn save(&self, token: &str) {
        if let Some(storage) = Self::storage() {
            if let Err(err) = storage.set_item(TOKEN_STORAGE_KEY, token) {
                Self::report("write", err);
            }
        }
    }

    fn clear(&self) {
        if let Some(storage) = Self::storage() {
            if let Err(err) = storage.remove_item(TOKEN_STORAGE_KEY) {
                Self::report("remove", err);
            }
        }
    }
}

// ========================
// Session Guard
// ========================

/// Resolved session: the token plus the customer id decoded from it
#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    pub token: String,
    pub customer_id: i64,
}

impl Session {
    /// Client that attaches this session's bearer token
    pub fn client(&self) -> ApiClient {
        ApiClient::new(API_BASE_URL).with_token(self.token.clone())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum SessionCheck {
    Active(Session),
    Redirect,
}

/// Validate the stored token at `now_secs`.
///
/// An expired token is removed from the store; a missing token or one
/// without a customer id just redirects.
pub fn check_session(store: &impl TokenStore, now_secs: i64) -> SessionCheck {
    let Some(token) = store.load() else {
        return SessionCheck::Redirect;
    };

    if token::is_expired_at(&token, now_secs) {
        store.clear();
        return SessionCheck::Redirect;
    }

    match token::customer_id(&token) {
        Some(customer_id) => SessionCheck::Active(Session { token, customer_id }),
        None => SessionCheck::Redirect,
    }
}

/// Persist a freshly issued token and resolve it the way the next guarded
/// page will
pub fn start_session(store: &impl TokenStore, token: &str, now_secs: i64) -> SessionCheck {
    store.save(token);
    check_session(store, now_secs)
}

/// Result of the customer fetch on dashboard entry. A failure ends the
/// session: the token is dropped and `None` tells the caller to go to login.
pub fn settle_customer<T, E>(store: &impl TokenStore, fetched: Result<T, E>) -> Option<T> {
    match fetched {
        Ok(customer) => Some(customer),
        Err(_) => {
            store.clear();
            None
        }
    }
}

// ========================
// Navigation
// ========================

/// Router navigation that can be moved into `Send + Sync` callbacks such as
/// modal actions. Must be created inside the router.
#[derive(Clone, Copy)]
pub struct Navigator(StoredValue<Box<dyn Fn(&str, NavigateOptions)>, LocalStorage>);

impl Navigator {
    pub fn go(&self, path: &str) {
        // The owning view may already be gone when a delayed action fires
        let _ = self.0.try_with_value(|navigate| navigate(path, NavigateOptions::default()));
    }
}

pub fn use_navigator() -> Navigator {
    let navigate: Box<dyn Fn(&str, NavigateOptions)> = Box::new(use_navigate());
    Navigator(StoredValue::new_local(navigate))
}

/// Run the guard for the current view.
///
/// Returns the session when valid; otherwise schedules a redirect to the
/// login page and returns `None`.
pub fn use_session_guard(navigator: Navigator) -> Option<Session> {
    match check_session(&BrowserStorage, chrono::Utc::now().timestamp()) {
        SessionCheck::Active(session) => Some(session),
        SessionCheck::Redirect => {
            web_sys::console::log_1(&"[SESSION] No usable token, redirecting to login".into());
            request_animation_frame(move || navigator.go(LOGIN_PATH));
            None
        }
    }
}

/// Drop the stored token and go back to the login page
pub fn end_session(navigator: Navigator) {
    BrowserStorage.clear();
    navigator.go(LOGIN_PATH);
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::api::ApiError;
    use crate::models::Customer;
    use crate::token::tests::make_token;
    use std::cell::RefCell;

    /// In-memory store for exercising the guard off the browser
    #[derive(Default)]
    pub(crate) struct MemoryStore {
        pub token: RefCell<Option<String>>,
        pub clears: RefCell<u32>,
    }

    impl MemoryStore {
        pub(crate) fn with(token: &str) -> Self {
            Self { token: RefCell::new(Some(token.to_string())), clears: RefCell::new(0) }
        }
    }

    impl TokenStore for MemoryStore {
        fn load(&self) -> Option<String> {
            self.token.borrow().clone()
        }

        fn save(&self, token: &str) {
            *self.token.borrow_mut() = Some(token.to_string());
        }

        fn clear(&self) {
            *self.clears.borrow_mut() += 1;
            *self.token.borrow_mut() = None;
        }
    }

    const NOW: i64 = 1_700_000_000;

    #[test]
    fn test_missing_token_redirects() {
        let store = MemoryStore::default();
        assert_eq!(check_session(&store, NOW), SessionCheck::Redirect);
        assert_eq!(*store.clears.borrow(), 0);
    }

    #[test]
    fn test_expired_token_is_cleared() {
        let store = MemoryStore::with(&make_token(r#"{"sub":"42","exp":1600000000}"#));
        assert_eq!(check_session(&store, NOW), SessionCheck::Redirect);
        assert_eq!(*store.clears.borrow(), 1);
        assert!(store.load().is_none());
    }

    #[test]
    fn test_malformed_token_is_cleared() {
        let store = MemoryStore::with("T");
        assert_eq!(check_session(&store, NOW), SessionCheck::Redirect);
        assert!(store.load().is_none());
    }

    #[test]
    fn test_token_without_customer_redirects_without_clearing() {
        let token = make_token(r#"{"sub":"joao","exp":1800000000}"#);
        let store = MemoryStore::with(&token);
        assert_eq!(check_session(&store, NOW), SessionCheck::Redirect);
        assert_eq!(store.load(), Some(token));
    }

    #[test]
    fn test_valid_token_resolves_customer() {
        let token = make_token(r#"{"sub":"42","exp":1800000000}"#);
        let store = MemoryStore::with(&token);
        assert_eq!(
            check_session(&store, NOW),
            SessionCheck::Active(Session { token, customer_id: 42 })
        );
    }

    #[test]
    fn test_login_token_resolves_dashboard_customer() {
        let store = MemoryStore::default();
        let token = make_token(r#"{"sub":"42","exp":1800000000}"#);

        let check = start_session(&store, &token, NOW);
        assert_eq!(store.load(), Some(token.clone()));
        let SessionCheck::Active(session) = check else { panic!("expected an active session") };
        assert_eq!(session.customer_id, 42);
        assert_eq!(session.client().url("/api/customer/42"), "http://localhost:8080/api/customer/42");
    }

    #[test]
    fn test_failed_customer_fetch_clears_token() {
        let store = MemoryStore::with(&make_token(r#"{"sub":"42","exp":1800000000}"#));
        let fetched: Result<Customer, ApiError> = Err(ApiError::Server("Erro ao buscar cliente.".into()));

        assert_eq!(settle_customer(&store, fetched), None);
        assert_eq!(*store.clears.borrow(), 1);
        assert!(store.load().is_none());
        assert_eq!(check_session(&store, NOW), SessionCheck::Redirect);
    }

    #[test]
    fn test_loaded_customer_keeps_token() {
        let token = make_token(r#"{"sub":"42","exp":1800000000}"#);
        let store = MemoryStore::with(&token);
        let customer = Customer { id: 42, name: "Maria".into(), email: "maria@example.com".into() };

        assert_eq!(settle_customer::<_, ApiError>(&store, Ok(customer.clone())), Some(customer));
        assert_eq!(store.load(), Some(token));
    }

    #[test]
    fn test_session_client_carries_token() {
        let session = Session { token: "abc".into(), customer_id: 1 };
        assert_eq!(session.client().token(), Some("abc"));
    }
}
