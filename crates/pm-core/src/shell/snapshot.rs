use serde::{Deserialize, Serialize};

use crate::login::LoginCredential;
use crate::navigation::{Screen, Tab};
use crate::permissions::{Capability, PermissionSet};
use crate::profile::ProfileDraft;
use crate::shell::ShellState;

/// Read-only view of the shell for rendering.
///
/// Derived values are computed when the snapshot is taken.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShellSnapshot {
    /// Revision of the state this snapshot was taken from.
    pub revision: u64,
    pub screen: Screen,
    pub tab: Option<Tab>,
    pub profile: ProfileDraft,
    /// Blocking field errors in form order; empty once the draft is
    /// submittable.
    pub profile_errors: Vec<String>,
    pub display_name: String,
    pub full_name: String,
    pub login: LoginCredential,
    pub login_input_hint: String,
    pub otp: OtpSnapshot,
    pub verification_destination: String,
    pub permissions: PermissionSnapshot,
    pub can_submit_registration: bool,
    pub can_submit_login: bool,
    pub can_continue: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OtpSnapshot {
    pub slots: Vec<String>,
    pub focused: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionSnapshot {
    pub camera: bool,
    pub media: bool,
    pub location: bool,
    pub all_granted: bool,
    pub missing: Vec<Capability>,
}

impl From<&PermissionSet> for PermissionSnapshot {
    fn from(set: &PermissionSet) -> Self {
        Self {
            camera: set.is_granted(Capability::Camera),
            media: set.is_granted(Capability::Media),
            location: set.is_granted(Capability::Location),
            all_granted: set.all_granted(),
            missing: set.missing(),
        }
    }
}

impl From<&ShellState> for ShellSnapshot {
    fn from(state: &ShellState) -> Self {
        Self {
            revision: state.revision,
            screen: state.screen,
            tab: state.active_tab(),
            profile: state.profile.clone(),
            profile_errors: state
                .profile
                .errors()
                .iter()
                .map(ToString::to_string)
                .collect(),
            display_name: state.profile.display_name().to_string(),
            full_name: state.profile.full_name(),
            login: state.login.clone(),
            login_input_hint: state.login.method.input_hint().to_string(),
            otp: OtpSnapshot {
                slots: state.otp.buffer().slots().to_vec(),
                focused: state.otp.focused(),
            },
            verification_destination: state.verification_destination().to_string(),
            permissions: PermissionSnapshot::from(&state.permissions),
            can_submit_registration: state.can_submit_registration(),
            can_submit_login: state.can_submit_login(),
            can_continue: state.can_continue(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_of_fresh_state() {
        let snapshot = ShellSnapshot::from(&ShellState::new());
        assert_eq!(snapshot.screen, Screen::Splash);
        assert_eq!(snapshot.tab, None);
        assert_eq!(snapshot.display_name, "User");
        assert_eq!(snapshot.otp.slots, vec![String::new(); 6]);
        assert_eq!(snapshot.login_input_hint, "email");
        assert!(!snapshot.permissions.all_granted);
        assert_eq!(snapshot.permissions.missing, Capability::ALL.to_vec());
        assert_eq!(snapshot.profile_errors.len(), 6);
        assert_eq!(snapshot.profile_errors[0], "first_name is required");
        assert!(!snapshot.can_continue);
    }

    #[test]
    fn snapshot_serializes_screen_and_permissions() {
        let mut state = ShellState::new();
        state.permissions.grant(Capability::Media);
        let json = serde_json::to_value(ShellSnapshot::from(&state)).unwrap();
        assert_eq!(json["screen"], "splash");
        assert_eq!(json["permissions"]["media"], true);
        assert_eq!(json["permissions"]["all_granted"], false);
        assert_eq!(
            json["permissions"]["missing"],
            serde_json::json!(["camera", "location"])
        );
        assert_eq!(json["revision"], 0);
    }

    #[test]
    fn snapshot_carries_state_revision() {
        let state = ShellState {
            revision: 7,
            ..ShellState::new()
        };
        assert_eq!(ShellSnapshot::from(&state).revision, 7);
    }
}
