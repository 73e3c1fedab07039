//! Login credential captured on the sign-in screen.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LoginMethod {
    #[default]
    Email,
    Phone,
}

impl LoginMethod {
    /// Input-type hint for the host text field.
    pub fn input_hint(self) -> &'static str {
        match self {
            LoginMethod::Email => "email",
            LoginMethod::Phone => "tel",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginCredential {
    pub method: LoginMethod,
    pub value: String,
}

impl LoginCredential {
    pub fn new() -> Self {
        Self::default()
    }

    /// Switches the login method.
    ///
    /// The entered value is kept unless `clear_value` is set.
    pub fn select_method(&mut self, method: LoginMethod, clear_value: bool) {
        if self.method != method && clear_value {
            self.value.clear();
        }
        self.method = method;
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    pub fn is_submittable(&self) -> bool {
        !self.value.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_method_is_email() {
        let credential = LoginCredential::new();
        assert_eq!(credential.method, LoginMethod::Email);
        assert!(!credential.is_submittable());
    }

    #[test]
    fn method_switch_retains_value_by_default() {
        let mut credential = LoginCredential::new();
        credential.select_method(LoginMethod::Phone, false);
        credential.set_value("5551234567");
        credential.select_method(LoginMethod::Email, false);
        assert_eq!(credential.method, LoginMethod::Email);
        assert_eq!(credential.value, "5551234567");
    }

    #[test]
    fn method_switch_can_clear_value() {
        let mut credential = LoginCredential::new();
        credential.set_value("ada@example.com");
        credential.select_method(LoginMethod::Email, true);
        assert_eq!(credential.value, "ada@example.com", "same method keeps value");
        credential.select_method(LoginMethod::Phone, true);
        assert!(credential.value.is_empty());
    }

    #[test]
    fn input_hint_follows_method() {
        assert_eq!(LoginMethod::Email.input_hint(), "email");
        assert_eq!(LoginMethod::Phone.input_hint(), "tel");
    }
}
