use serde::{Deserialize, Serialize};

/// Sign-up payload as received from the client. Every field is optional at
/// the wire level; presence is enforced by `validation::signup`, not serde,
/// so a missing key and an empty value take the same failure path.
#[derive(Deserialize, Clone, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct SignUpRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub password_confirm: Option<String>,
}

impl SignUpRequest {
    /// Required fields paired with their wire names, in the order they are
    /// checked. Checks iterate this list so the order never depends on
    /// struct layout or serde internals.
    pub fn required_fields(&self) -> [(&'static str, Option<&str>); 4] {
        [
            ("name", self.name.as_deref()),
            ("email", self.email.as_deref()),
            ("password", self.password.as_deref()),
            ("passwordConfirm", self.password_confirm.as_deref()),
        ]
    }
}

#[derive(Serialize)]
pub struct SignUpAccepted {
    pub email: String,
}
