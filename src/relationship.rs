//! Follow relationship between the current user and a contact.
//!
//! The only client-side transition is `NotFollowed -> Pending`. `Accepted`
//! comes from seed data or from accepting an incoming request on the
//! dashboard. Nothing leaves `Pending` or `Accepted`.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FollowStatus {
    #[default]
    NotFollowed,
    Pending,
    Accepted,
}

impl FollowStatus {
    /// Applies the follow action. Returns the new status, or `None` when the
    /// action does not apply to the current status.
    pub fn follow(self) -> Option<FollowStatus> {
        match self {
            FollowStatus::NotFollowed => Some(FollowStatus::Pending),
            FollowStatus::Pending | FollowStatus::Accepted => None,
        }
    }

    /// Messaging and calling are open only once the relationship is accepted.
    pub fn can_communicate(self) -> bool {
        matches!(self, FollowStatus::Accepted)
    }

    pub fn can_follow(self) -> bool {
        self.follow().is_some()
    }

    pub fn label(self) -> &'static str {
        match self {
            FollowStatus::NotFollowed => "Not Followed",
            FollowStatus::Pending => "Pending",
            FollowStatus::Accepted => "Connected",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_follow_transitions() {
        assert_eq!(FollowStatus::NotFollowed.follow(), Some(FollowStatus::Pending));
        assert_eq!(FollowStatus::Pending.follow(), None);
        assert_eq!(FollowStatus::Accepted.follow(), None);
    }

    #[test]
    fn test_only_accepted_can_communicate() {
        assert!(!FollowStatus::NotFollowed.can_communicate());
        assert!(!FollowStatus::Pending.can_communicate());
        assert!(FollowStatus::Accepted.can_communicate());
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&FollowStatus::NotFollowed).unwrap();
        assert_eq!(json, "\"not_followed\"");

        let parsed: FollowStatus = serde_json::from_str("\"accepted\"").unwrap();
        assert_eq!(parsed, FollowStatus::Accepted);
    }
}
