//! Login state kept alongside the record collections.

use crate::store::KeyValueStore;
use crate::Result;

pub const LOGGED_IN_KEY: &str = "isLoggedIn";
pub const USER_EMAIL_KEY: &str = "userEmail";
pub const USER_FULL_NAME_KEY: &str = "userFullName";
pub const USER_PHONE_KEY: &str = "userPhone";

pub const LOGIN_PATH: &str = "/login";
pub const REGISTER_PATH: &str = "/register";

const SESSION_KEYS: [&str; 4] = [
    LOGGED_IN_KEY,
    USER_EMAIL_KEY,
    USER_FULL_NAME_KEY,
    USER_PHONE_KEY,
];

/// Details stored for the signed-in user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserSession {
    pub email: String,
    pub full_name: String,
    pub phone: String,
}

/// Mark the user as logged in and store their details.
pub fn login<S>(store: &S, user: &UserSession) -> Result<()>
where
    S: KeyValueStore + ?Sized,
{
    store.set_item(LOGGED_IN_KEY, "true")?;
    store.set_item(USER_EMAIL_KEY, &user.email)?;
    store.set_item(USER_FULL_NAME_KEY, &user.full_name)?;
    store.set_item(USER_PHONE_KEY, &user.phone)?;
    Ok(())
}

/// Any non-empty login flag counts as logged in.
pub fn is_logged_in<S>(store: &S) -> Result<bool>
where
    S: KeyValueStore + ?Sized,
{
    Ok(store
        .get_item(LOGGED_IN_KEY)?
        .is_some_and(|flag| !flag.is_empty()))
}

/// Whether a visitor on `path` should be sent to the login page.
///
/// The login and register pages, and the site root, never redirect.
pub fn requires_login_redirect<S>(store: &S, path: &str) -> Result<bool>
where
    S: KeyValueStore + ?Sized,
{
    if is_logged_in(store)? {
        return Ok(false);
    }
    Ok(!matches!(path, "" | "/" | LOGIN_PATH | REGISTER_PATH))
}

/// Clear the login flag and every stored user detail.
pub fn logout<S>(store: &S) -> Result<()>
where
    S: KeyValueStore + ?Sized,
{
    for key in SESSION_KEYS {
        store.remove_item(key)?;
    }
    tracing::debug!("Session cleared");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    fn user() -> UserSession {
        UserSession {
            email: "pharmacist@example.com".into(),
            full_name: "Dana Lee".into(),
            phone: "555-123-4567".into(),
        }
    }

    #[test]
    fn test_redirects_when_logged_out() {
        let store = MemoryStore::new();
        assert!(!is_logged_in(&store).unwrap());
        assert!(requires_login_redirect(&store, "/medicines").unwrap());
        assert!(!requires_login_redirect(&store, "/login").unwrap());
        assert!(!requires_login_redirect(&store, "/register").unwrap());
        assert!(!requires_login_redirect(&store, "").unwrap());
    }

    #[test]
    fn test_login_then_logout() {
        let store = MemoryStore::new();
        store.set_item("medicines", "[]").unwrap();

        login(&store, &user()).unwrap();
        assert!(is_logged_in(&store).unwrap());
        assert!(!requires_login_redirect(&store, "/sales").unwrap());

        logout(&store).unwrap();
        assert!(!is_logged_in(&store).unwrap());
        assert_eq!(store.keys(), vec!["medicines".to_string()]);
    }
}
