//! Operator identity as reported by the host

use serde::{Deserialize, Serialize};
use tracing::debug;
use crate::utils::errors::HostResult;
use super::Identity;

/// Read-only snapshot of the user the host is running for
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostUser {
    pub id: i64,
    pub first_name: String,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub language_code: Option<String>,
}

impl HostUser {
    /// First and last name joined for display
    pub fn display_name(&self) -> String {
        match &self.last_name {
            Some(last) if !last.is_empty() => format!("{} {}", self.first_name, last),
            _ => self.first_name.clone(),
        }
    }
}

impl From<&teloxide::types::User> for HostUser {
    fn from(user: &teloxide::types::User) -> Self {
        Self {
            id: user.id.0 as i64,
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            username: user.username.clone(),
            language_code: user.language_code.clone(),
        }
    }
}

/// Identity fixed at construction, e.g. the sender of a bot update
#[derive(Debug, Clone, Default)]
pub struct StaticIdentity {
    user: Option<HostUser>,
}

impl StaticIdentity {
    pub fn new(user: Option<HostUser>) -> Self {
        Self { user }
    }
}

impl Identity for StaticIdentity {
    fn current_user(&self) -> HostResult<Option<HostUser>> {
        Ok(self.user.clone())
    }
}

/// Identity taken from a mini-app launch `initData` query string
///
/// Only the unverified `user` field is read; the hash is not checked.
#[derive(Debug, Clone, Default)]
pub struct InitDataIdentity {
    user: Option<HostUser>,
}

impl InitDataIdentity {
    pub fn parse(init_data: &str) -> Self {
        let raw_user = url::form_urlencoded::parse(init_data.as_bytes())
            .find(|(key, _)| key == "user")
            .map(|(_, value)| value.into_owned());

        let user = match raw_user {
            Some(json) => match serde_json::from_str::<HostUser>(&json) {
                Ok(user) => Some(user),
                Err(e) => {
                    debug!(error = %e, "Malformed user field in init data");
                    None
                }
            },
            None => None,
        };

        Self { user }
    }
}

impl Identity for InitDataIdentity {
    fn current_user(&self) -> HostResult<Option<HostUser>> {
        Ok(self.user.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_init_data_user() {
        let init_data = "query_id=AAH&user=%7B%22id%22%3A279058397%2C%22first_name%22%3A%22Vlad%22%2C%22last_name%22%3A%22M%22%2C%22username%22%3A%22vladm%22%2C%22language_code%22%3A%22ru%22%2C%22is_premium%22%3Atrue%7D&auth_date=1662771648&hash=c501";
        let identity = InitDataIdentity::parse(init_data);
        let user = identity.current_user().unwrap().unwrap();

        assert_eq!(user.id, 279058397);
        assert_eq!(user.display_name(), "Vlad M");
        assert_eq!(user.username.as_deref(), Some("vladm"));
        assert_eq!(user.language_code.as_deref(), Some("ru"));
    }

    #[test]
    fn test_init_data_without_user() {
        let identity = InitDataIdentity::parse("auth_date=1662771648&hash=c501");
        assert_eq!(identity.current_user().unwrap(), None);
    }

    #[test]
    fn test_init_data_with_malformed_user() {
        let identity = InitDataIdentity::parse("user=%7Bnot-json");
        assert_eq!(identity.current_user().unwrap(), None);
    }

    #[test]
    fn test_display_name_without_last_name() {
        let user = HostUser {
            id: 1,
            first_name: "Анна".to_string(),
            last_name: None,
            username: None,
            language_code: None,
        };
        assert_eq!(user.display_name(), "Анна");
    }
}
