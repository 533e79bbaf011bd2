//! Host identity and theming.
//!
//! When the storefront runs inside Telegram, the host hands over the signed-in
//! user and accepts theme colors. Outside Telegram there is no host, and the
//! user is a guest. Both cases resolve to a [`UserIdentity`], which is the
//! only thing the rest of the storefront looks at.

use serde::{Deserialize, Serialize};

/// A user as reported by the host (`initDataUnsafe.user`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostUser {
    pub id: i64,
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub photo_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub header_color: String,
    pub background_color: String,
}

impl Theme {
    /// Dark palette used by the shop.
    #[must_use]
    pub fn storefront() -> Self {
        Self {
            header_color: "#000000".to_string(),
            background_color: "#121212".to_string(),
        }
    }
}

/// Capabilities offered by an embedding host.
pub trait HostProvider {
    fn user(&self) -> Option<HostUser>;

    /// Hosts that cannot be themed ignore this.
    fn apply_theme(&self, _theme: &Theme) {}
}

#[derive(Debug, Deserialize)]
struct InitData {
    user: Option<HostUser>,
}

/// The Telegram Mini App host, built from its `initDataUnsafe` JSON.
#[derive(Debug, Clone, Default)]
pub struct TelegramHost {
    user: Option<HostUser>,
}

impl TelegramHost {
    /// Parses the init data. Malformed JSON leaves the host without a user.
    #[must_use]
    pub fn from_init_data(json: &str) -> Self {
        match serde_json::from_str::<InitData>(json) {
            Ok(data) => Self { user: data.user },
            Err(e) => {
                tracing::warn!(error = %e, "could not read Telegram init data");
                Self { user: None }
            }
        }
    }
}

impl HostProvider for TelegramHost {
    fn user(&self) -> Option<HostUser> {
        self.user.clone()
    }

    fn apply_theme(&self, theme: &Theme) {
        tracing::debug!(
            header = %theme.header_color,
            background = %theme.background_color,
            "theme applied"
        );
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuestUser {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserIdentity {
    Telegram(HostUser),
    Guest(GuestUser),
}

impl UserIdentity {
    /// Identifier used to scope persisted data.
    #[must_use]
    pub fn storage_id(&self) -> String {
        match self {
            UserIdentity::Telegram(user) => user.id.to_string(),
            UserIdentity::Guest(guest) => guest.id.clone(),
        }
    }

    #[must_use]
    pub fn first_name(&self) -> &str {
        match self {
            UserIdentity::Telegram(user) => &user.first_name,
            UserIdentity::Guest(guest) => &guest.first_name,
        }
    }

    /// First and last name joined, as shown on order confirmations.
    #[must_use]
    pub fn display_name(&self) -> String {
        let (first, last) = match self {
            UserIdentity::Telegram(user) => (&user.first_name, &user.last_name),
            UserIdentity::Guest(guest) => (&guest.first_name, &guest.last_name),
        };
        format!("{first} {last}").trim().to_string()
    }

    #[must_use]
    pub fn is_guest(&self) -> bool {
        matches!(self, UserIdentity::Guest(_))
    }

    #[must_use]
    pub fn storage_keys(&self) -> StorageKeys {
        StorageKeys::for_user(&self.storage_id())
    }
}

/// Resolves who is using the storefront.
///
/// - host with a user → that user, and the shop theme is applied;
/// - host without a user → the `unknown_user` guest;
/// - no host → the `browser_user` guest.
#[must_use]
pub fn resolve_identity(host: Option<&dyn HostProvider>) -> UserIdentity {
    let Some(host) = host else {
        tracing::info!("no host detected, running in browser mode");
        return UserIdentity::Guest(GuestUser {
            id: "browser_user".to_string(),
            first_name: "Тестовый".to_string(),
            last_name: "Пользователь".to_string(),
        });
    };

    if let Some(user) = host.user() {
        tracing::info!(user_id = user.id, "host user loaded");
        host.apply_theme(&Theme::storefront());
        UserIdentity::Telegram(user)
    } else {
        tracing::warn!("host present but no user data found");
        UserIdentity::Guest(GuestUser {
            id: "unknown_user".to_string(),
            first_name: "Гость".to_string(),
            last_name: String::new(),
        })
    }
}

/// Per-user keys into the [`crate::store::KeyValueStore`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageKeys {
    pub cart: String,
    pub favorites: String,
    pub purchases: String,
    pub addresses: String,
}

impl StorageKeys {
    #[must_use]
    pub fn for_user(user_id: &str) -> Self {
        Self {
            cart: format!("cart_{user_id}"),
            favorites: format!("favorites_{user_id}"),
            purchases: format!("purchases_{user_id}"),
            addresses: format!("addresses_{user_id}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;

    struct RecordingHost {
        user: Option<HostUser>,
        themes: RefCell<Vec<Theme>>,
    }

    impl HostProvider for RecordingHost {
        fn user(&self) -> Option<HostUser> {
            self.user.clone()
        }

        fn apply_theme(&self, theme: &Theme) {
            self.themes.borrow_mut().push(theme.clone());
        }
    }

    #[test]
    fn telegram_host_reads_user_from_init_data() {
        let host = TelegramHost::from_init_data(
            r#"{"user":{"id":42,"first_name":"Анна","username":"anna"}}"#,
        );
        let user = host.user().expect("user expected");
        assert_eq!(user.id, 42);
        assert_eq!(user.first_name, "Анна");
        assert_eq!(user.last_name, "");
        assert_eq!(user.username, "anna");
    }

    #[test]
    fn telegram_host_tolerates_malformed_init_data() {
        assert!(TelegramHost::from_init_data("{oops").user().is_none());
    }

    #[test]
    fn no_host_resolves_to_browser_guest() {
        let identity = resolve_identity(None);
        assert!(identity.is_guest());
        assert_eq!(identity.storage_id(), "browser_user");
        assert_eq!(identity.first_name(), "Тестовый");
        assert_eq!(identity.display_name(), "Тестовый Пользователь");
    }

    #[test]
    fn host_without_user_resolves_to_unknown_guest() {
        let host = TelegramHost::default();
        let identity = resolve_identity(Some(&host));
        assert_eq!(identity.storage_id(), "unknown_user");
        assert_eq!(identity.first_name(), "Гость");
        assert_eq!(identity.display_name(), "Гость");
    }

    #[test]
    fn host_user_is_used_and_themed() {
        let host = RecordingHost {
            user: Some(HostUser {
                id: 7,
                first_name: "Ира".to_string(),
                last_name: String::new(),
                username: String::new(),
                photo_url: String::new(),
            }),
            themes: RefCell::new(Vec::new()),
        };
        let identity = resolve_identity(Some(&host));
        assert!(!identity.is_guest());
        assert_eq!(identity.storage_id(), "7");
        assert_eq!(*host.themes.borrow(), vec![Theme::storefront()]);
    }

    #[test]
    fn guest_is_not_themed() {
        let host = RecordingHost {
            user: None,
            themes: RefCell::new(Vec::new()),
        };
        let _ = resolve_identity(Some(&host));
        assert!(host.themes.borrow().is_empty());
    }

    #[test]
    fn storage_keys_are_scoped_by_user() {
        let keys = StorageKeys::for_user("42");
        assert_eq!(keys.cart, "cart_42");
        assert_eq!(keys.favorites, "favorites_42");
        assert_eq!(keys.purchases, "purchases_42");
        assert_eq!(keys.addresses, "addresses_42");
    }
}
