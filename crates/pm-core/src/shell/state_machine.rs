//! Shell state machine.
//!
//! Defines a pure state transition function for the onboarding flow:
//! splash, auth choice, register or login, code verification, permissions,
//! main. Guards are enforced by ignoring the triggering event; nothing here
//! reports an error.

use serde::{Deserialize, Serialize};

use crate::ids::TimerId;
use crate::login::LoginMethod;
use crate::navigation::{Screen, Tab};
use crate::otp::OtpCode;
use crate::permissions::Capability;
use crate::profile::ProfileField;
use crate::shell::ShellState;

/// Events that drive the shell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShellEvent {
    /// Shell mounted on the splash screen; arms the auto-advance timer.
    Launch { timer_id: TimerId },
    /// Splash timer fired.
    SplashElapsed { timer_id: TimerId },
    /// Shell torn down; cancels anything pending.
    Unmount,

    // Auth choice
    CreateAccount,
    SignIn,
    /// Return to the auth choice from register or login.
    Back,

    // Register
    UpdateProfile { field: ProfileField, value: String },
    SubmitRegistration,

    // Login
    SelectLoginMethod { method: LoginMethod },
    UpdateLoginValue { value: String },
    SubmitLogin,

    // Code verification
    EnterOtpDigit { index: usize, raw: String },
    VerifyCode,
    /// Verifier result (from orchestrator).
    CodeAccepted,
    /// Verifier result (from orchestrator).
    CodeRejected,

    // Permissions
    RequestPermission { capability: Capability },
    /// Requester result (from orchestrator).
    PermissionGranted { capability: Capability },
    /// Requester result (from orchestrator).
    PermissionDenied { capability: Capability },
    ContinueToMain,

    // Main
    SelectTab { tab: Tab },
}

/// Side-effects produced by state transitions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShellAction {
    ArmSplashTimer { timer_id: TimerId },
    CancelSplashTimer { timer_id: TimerId },
    /// Move input focus to an OTP slot.
    FocusOtpSlot { index: usize },
    VerifyCode { code: OtpCode },
    RequestPermission { capability: Capability },
}

/// Behaviour switches for the cases where intent is ambiguous.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShellPolicy {
    pub clear_login_value_on_method_switch: bool,
}

/// Pure shell state machine: no side effects.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShellStateMachine {
    policy: ShellPolicy,
}

impl ShellStateMachine {
    pub fn new(policy: ShellPolicy) -> Self {
        Self { policy }
    }

    pub fn transition(
        &self,
        mut state: ShellState,
        event: ShellEvent,
    ) -> (ShellState, Vec<ShellAction>) {
        match (state.screen, event) {
            (Screen::Splash, ShellEvent::Launch { timer_id }) => {
                if state.splash_timer.is_some() {
                    return (state, Vec::new());
                }
                state.splash_timer = Some(timer_id.clone());
                (state, vec![ShellAction::ArmSplashTimer { timer_id }])
            }
            (Screen::Splash, ShellEvent::SplashElapsed { timer_id })
                if state.splash_timer.as_ref() == Some(&timer_id) =>
            {
                state.splash_timer = None;
                state.screen = Screen::AuthChoice;
                (state, Vec::new())
            }
            (_, ShellEvent::Unmount) => match state.splash_timer.take() {
                Some(timer_id) => (state, vec![ShellAction::CancelSplashTimer { timer_id }]),
                None => (state, Vec::new()),
            },
            (Screen::AuthChoice, ShellEvent::CreateAccount) => {
                state.screen = Screen::Register;
                (state, Vec::new())
            }
            (Screen::AuthChoice, ShellEvent::SignIn) => {
                state.screen = Screen::Login;
                (state, Vec::new())
            }
            (Screen::Register | Screen::Login, ShellEvent::Back) => {
                state.screen = Screen::AuthChoice;
                (state, Vec::new())
            }
            (Screen::Register, ShellEvent::UpdateProfile { field, value }) => {
                state.profile.set(field, value);
                (state, Vec::new())
            }
            (Screen::Register, ShellEvent::SubmitRegistration) if state.profile.is_complete() => {
                state.screen = Screen::OtpVerify;
                (state, Vec::new())
            }
            (Screen::Login, ShellEvent::SelectLoginMethod { method }) => {
                state
                    .login
                    .select_method(method, self.policy.clear_login_value_on_method_switch);
                (state, Vec::new())
            }
            (Screen::Login, ShellEvent::UpdateLoginValue { value }) => {
                state.login.set_value(value);
                (state, Vec::new())
            }
            (Screen::Login, ShellEvent::SubmitLogin) if state.login.is_submittable() => {
                state.screen = Screen::OtpVerify;
                (state, Vec::new())
            }
            (Screen::OtpVerify, ShellEvent::EnterOtpDigit { index, raw }) => {
                let actions = state
                    .otp
                    .set_digit(index, &raw)
                    .focus()
                    .map(|focus| ShellAction::FocusOtpSlot { index: focus.to })
                    .into_iter()
                    .collect();
                (state, actions)
            }
            (Screen::OtpVerify, ShellEvent::VerifyCode) => {
                let code = state.otp.buffer().code();
                (state, vec![ShellAction::VerifyCode { code }])
            }
            (Screen::OtpVerify, ShellEvent::CodeAccepted) => {
                state.screen = Screen::Permissions;
                (state, Vec::new())
            }
            (Screen::Permissions, ShellEvent::RequestPermission { capability })
                if !state.permissions.is_granted(capability) =>
            {
                (state, vec![ShellAction::RequestPermission { capability }])
            }
            (Screen::Permissions, ShellEvent::PermissionGranted { capability }) => {
                state.permissions.grant(capability);
                (state, Vec::new())
            }
            (Screen::Permissions, ShellEvent::ContinueToMain)
                if state.permissions.all_granted() =>
            {
                state.screen = Screen::Main;
                state.tabs.reset();
                (state, Vec::new())
            }
            (Screen::Main, ShellEvent::SelectTab { tab }) => {
                state.tabs.select(tab);
                (state, Vec::new())
            }
            (screen, _event) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(%screen, event = ?_event, "shell event ignored");
                #[cfg(not(feature = "tracing"))]
                let _ = screen;
                (state, Vec::new())
            }
        }
    }
}
