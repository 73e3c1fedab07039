use serde::{Deserialize, Serialize};

use crate::ids::TimerId;
use crate::login::LoginCredential;
use crate::navigation::{Screen, Tab, TabController};
use crate::otp::OtpEntry;
use crate::permissions::PermissionSet;
use crate::profile::ProfileDraft;

/// Complete session state of the onboarding shell.
///
/// Created empty at process start and never persisted; a restart begins at
/// `Splash` again.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShellState {
    pub screen: Screen,
    pub tabs: TabController,
    pub profile: ProfileDraft,
    pub login: LoginCredential,
    pub otp: OtpEntry,
    pub permissions: PermissionSet,
    /// Splash timer currently armed, if any.
    pub splash_timer: Option<TimerId>,
    /// Bumped by the writer on every committed change. Transitions leave it
    /// untouched.
    pub revision: u64,
}

impl ShellState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Active tab; only meaningful on the main screen.
    pub fn active_tab(&self) -> Option<Tab> {
        (self.screen == Screen::Main).then(|| self.tabs.active())
    }

    /// Where the one-time code was "sent": the registration email when
    /// present, otherwise the login value.
    pub fn verification_destination(&self) -> &str {
        if self.profile.email.is_empty() {
            &self.login.value
        } else {
            &self.profile.email
        }
    }

    pub fn can_submit_registration(&self) -> bool {
        self.screen == Screen::Register && self.profile.is_complete()
    }

    pub fn can_submit_login(&self) -> bool {
        self.screen == Screen::Login && self.login.is_submittable()
    }

    pub fn can_continue(&self) -> bool {
        self.screen == Screen::Permissions && self.permissions.all_granted()
    }
}
