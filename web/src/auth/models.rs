//! Data structures for authentication-related entities.

use serde::{Deserialize, Serialize};

/// Claims carried by the backend-issued session token.
///
/// The gateway decodes these for display purposes only; signature and expiry
/// enforcement stay with the backend, which holds the secret.
#[derive(Debug, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Opaque user identifier shown in the page header.
    pub ident: String,
    #[serde(default)]
    pub iat: Option<i64>,
    #[serde(default)]
    pub exp: Option<i64>,
}

/// Fields posted by the HTML login form.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

/// `redirectTo` query parameter carried by the form actions.
#[derive(Debug, Default, Deserialize)]
pub struct RedirectTarget {
    #[serde(rename = "redirectTo")]
    pub redirect_to: Option<String>,
}

impl RedirectTarget {
    /// Where to send the browser after the action; the site root when the
    /// form did not say.
    pub fn destination(&self) -> &str {
        self.redirect_to.as_deref().unwrap_or("/")
    }
}

/// Layout identity payload.
#[derive(Debug, Serialize)]
pub struct Session {
    /// Decoded display identifier, or empty when logged out.
    pub ident: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn redirect_target_defaults_to_root() {
        assert_eq!(RedirectTarget::default().destination(), "/");

        let target = RedirectTarget { redirect_to: Some("/courses".into()) };
        assert_eq!(target.destination(), "/courses");
    }

    #[test]
    fn redirect_target_uses_camel_case_key() {
        let target: RedirectTarget = serde_json::from_str(r#"{"redirectTo": "/chats"}"#).unwrap();
        assert_eq!(target.destination(), "/chats");
    }
}
