//! Wire types exchanged with the presentation layer.

use pm_core::{
    login::LoginMethod, navigation::Tab, otp::FocusAdvance, permissions::Capability,
    profile::ProfileField, shell::ShellSnapshot,
};
use serde::{Deserialize, Serialize};

/// One input action from the presentation layer.
///
/// Encoded as `{"command": "<name>", ...fields}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum ShellCommand {
    GetState,
    CreateAccount,
    SignIn,
    Back,
    UpdateProfile { field: ProfileField, value: String },
    SubmitRegistration,
    SelectLoginMethod { method: LoginMethod },
    UpdateLoginValue { value: String },
    SubmitLogin,
    EnterOtpDigit { index: usize, value: String },
    VerifyCode,
    RequestPermission { capability: Capability },
    ContinueToMain,
    SelectTab { tab: Tab },
}

impl ShellCommand {
    pub fn name(&self) -> &'static str {
        match self {
            Self::GetState => "get_state",
            Self::CreateAccount => "create_account",
            Self::SignIn => "sign_in",
            Self::Back => "back",
            Self::UpdateProfile { .. } => "update_profile",
            Self::SubmitRegistration => "submit_registration",
            Self::SelectLoginMethod { .. } => "select_login_method",
            Self::UpdateLoginValue { .. } => "update_login_value",
            Self::SubmitLogin => "submit_login",
            Self::EnterOtpDigit { .. } => "enter_otp_digit",
            Self::VerifyCode => "verify_code",
            Self::RequestPermission { .. } => "request_permission",
            Self::ContinueToMain => "continue_to_main",
            Self::SelectTab { .. } => "select_tab",
        }
    }
}

/// Reply to a command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandReply {
    pub snapshot: ShellSnapshot,
    /// Only set by `enter_otp_digit` when focus should move.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub focus: Option<FocusAdvance>,
}

impl From<ShellSnapshot> for CommandReply {
    fn from(snapshot: ShellSnapshot) -> Self {
        Self {
            snapshot,
            focus: None,
        }
    }
}

/// One line written by the bridge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BridgeMessage {
    /// Reply to a command.
    State {
        #[serde(flatten)]
        reply: CommandReply,
    },
    /// State changed without a command, e.g. the splash timer fired.
    StateChanged { snapshot: ShellSnapshot },
    Error { message: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use pm_core::shell::ShellState;

    #[test]
    fn parses_unit_commands() {
        let command: ShellCommand = serde_json::from_str(r#"{"command":"create_account"}"#).unwrap();
        assert_eq!(command, ShellCommand::CreateAccount);

        let command: ShellCommand = serde_json::from_str(r#"{"command":"get_state"}"#).unwrap();
        assert_eq!(command.name(), "get_state");
    }

    #[test]
    fn parses_commands_with_fields() {
        let command: ShellCommand = serde_json::from_str(
            r#"{"command":"update_profile","field":"first_name","value":"Ada"}"#,
        )
        .unwrap();
        assert_eq!(
            command,
            ShellCommand::UpdateProfile {
                field: ProfileField::FirstName,
                value: "Ada".to_string(),
            }
        );

        let command: ShellCommand =
            serde_json::from_str(r#"{"command":"enter_otp_digit","index":2,"value":"7"}"#)
                .unwrap();
        assert_eq!(
            command,
            ShellCommand::EnterOtpDigit {
                index: 2,
                value: "7".to_string()
            }
        );

        let command: ShellCommand =
            serde_json::from_str(r#"{"command":"request_permission","capability":"camera"}"#)
                .unwrap();
        assert_eq!(
            command,
            ShellCommand::RequestPermission {
                capability: Capability::Camera
            }
        );

        let command: ShellCommand =
            serde_json::from_str(r#"{"command":"select_login_method","method":"phone"}"#).unwrap();
        assert_eq!(
            command,
            ShellCommand::SelectLoginMethod {
                method: LoginMethod::Phone
            }
        );

        let command: ShellCommand =
            serde_json::from_str(r#"{"command":"select_tab","tab":"settings"}"#).unwrap();
        assert_eq!(command, ShellCommand::SelectTab { tab: Tab::Settings });
    }

    #[test]
    fn rejects_unknown_command_and_bad_fields() {
        assert!(serde_json::from_str::<ShellCommand>(r#"{"command":"fly"}"#).is_err());
        assert!(serde_json::from_str::<ShellCommand>(
            r#"{"command":"request_permission","capability":"microphone"}"#
        )
        .is_err());
        assert!(serde_json::from_str::<ShellCommand>(r#"{"command":"select_tab"}"#).is_err());
    }

    #[test]
    fn bridge_messages_are_tagged_by_type() {
        let snapshot = ShellSnapshot::from(&ShellState::new());

        let json = serde_json::to_value(BridgeMessage::State {
            reply: CommandReply::from(snapshot.clone()),
        })
        .unwrap();
        assert_eq!(json["type"], "state");
        assert_eq!(json["snapshot"]["screen"], "splash");
        assert!(json.get("focus").is_none());

        let json = serde_json::to_value(BridgeMessage::StateChanged { snapshot }).unwrap();
        assert_eq!(json["type"], "state_changed");

        let json = serde_json::to_value(BridgeMessage::Error {
            message: "bad".to_string(),
        })
        .unwrap();
        assert_eq!(json["type"], "error");
        assert_eq!(json["message"], "bad");
    }
}
