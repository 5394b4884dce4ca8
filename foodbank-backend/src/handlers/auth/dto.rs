use std::fmt;

use serde::Serialize;
use serde_json::Value;

pub const LOGIN_SUCCESSFUL: &str = "Login successful";

/// Credentials carried by a login request body.
///
/// Nothing is enforced at the boundary: a field that is missing or is not a
/// JSON string is `None`.
#[derive(Default, Clone, PartialEq, Eq)]
pub struct LoginRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

impl LoginRequest {
    pub fn from_value(value: &Value) -> Self {
        let field = |name: &str| {
            value
                .get(name)
                .and_then(Value::as_str)
                .map(str::to_owned)
        };
        Self {
            username: field("username"),
            password: field("password"),
        }
    }
}

// Keeps the password out of logs and panic messages.
impl fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginRequest")
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub message: &'static str,
}

impl LoginResponse {
    pub fn success() -> Self {
        Self {
            message: LOGIN_SUCCESSFUL,
        }
    }
}
