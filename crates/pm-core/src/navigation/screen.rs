use serde::{Deserialize, Serialize};

/// Full-page UI state of the onboarding flow.
///
/// Exactly one screen is active at a time. `Splash` is initial, `Main` is
/// terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Screen {
    #[default]
    Splash,
    AuthChoice,
    Register,
    Login,
    OtpVerify,
    Permissions,
    Main,
}

impl Screen {
    pub fn is_terminal(self) -> bool {
        matches!(self, Screen::Main)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Screen::Splash => "splash",
            Screen::AuthChoice => "auth-choice",
            Screen::Register => "register",
            Screen::Login => "login",
            Screen::OtpVerify => "otp-verify",
            Screen::Permissions => "permissions",
            Screen::Main => "main",
        }
    }
}

impl std::fmt::Display for Screen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
