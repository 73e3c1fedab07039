//! Capability grants that gate entry into the main screen.
//!
//! Flags only move from `false` to `true`; there is no revoke.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Capability {
    Camera,
    Media,
    Location,
}

impl Capability {
    pub const ALL: [Capability; 3] = [Capability::Camera, Capability::Media, Capability::Location];

    pub fn as_str(self) -> &'static str {
        match self {
            Capability::Camera => "camera",
            Capability::Media => "media",
            Capability::Location => "location",
        }
    }
}

impl std::fmt::Display for Capability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionSet {
    camera: bool,
    media: bool,
    location: bool,
}

impl PermissionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks `capability` granted. Returns `true` if it was not granted before.
    pub fn grant(&mut self, capability: Capability) -> bool {
        let flag = self.flag_mut(capability);
        let newly_granted = !*flag;
        *flag = true;
        newly_granted
    }

    pub fn is_granted(&self, capability: Capability) -> bool {
        match capability {
            Capability::Camera => self.camera,
            Capability::Media => self.media,
            Capability::Location => self.location,
        }
    }

    pub fn all_granted(&self) -> bool {
        self.camera && self.media && self.location
    }

    pub fn missing(&self) -> Vec<Capability> {
        Capability::ALL
            .into_iter()
            .filter(|c| !self.is_granted(*c))
            .collect()
    }

    fn flag_mut(&mut self, capability: Capability) -> &mut bool {
        match capability {
            Capability::Camera => &mut self.camera,
            Capability::Media => &mut self.media,
            Capability::Location => &mut self.location,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nothing_is_granted_initially() {
        let set = PermissionSet::new();
        assert!(!set.all_granted());
        assert_eq!(set.missing(), Capability::ALL.to_vec());
    }

    #[test]
    fn grant_is_idempotent() {
        let mut set = PermissionSet::new();
        assert!(set.grant(Capability::Camera));
        assert!(!set.grant(Capability::Camera));
        assert!(set.is_granted(Capability::Camera));
    }

    #[test]
    fn all_granted_requires_every_capability() {
        let mut set = PermissionSet::new();
        set.grant(Capability::Camera);
        set.grant(Capability::Media);
        assert!(!set.all_granted());
        assert_eq!(set.missing(), vec![Capability::Location]);
        set.grant(Capability::Location);
        assert!(set.all_granted());
    }

    #[test]
    fn all_granted_matches_conjunction_for_every_order() {
        let orders = [
            [Capability::Camera, Capability::Media, Capability::Location],
            [Capability::Location, Capability::Camera, Capability::Media],
            [Capability::Media, Capability::Location, Capability::Camera],
        ];
        for order in orders {
            let mut set = PermissionSet::new();
            let mut previous = set;
            for capability in order {
                set.grant(capability);
                for c in Capability::ALL {
                    assert!(!previous.is_granted(c) || set.is_granted(c), "flag revoked");
                }
                assert_eq!(
                    set.all_granted(),
                    Capability::ALL.iter().all(|c| set.is_granted(*c))
                );
                previous = set;
            }
            assert!(set.all_granted());
        }
    }
}
