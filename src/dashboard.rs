//! Dashboard screen state: world users, incoming follow requests, search
//! and the selected user.

use log::{debug, info};

use crate::directory::Directory;
use crate::error::SeedError;
use crate::models::{Contact, FollowRequest};
use crate::seed;

/// Figures shown in the "Your Progress" card. Only `global_friends` is
/// derived from state; the rest are fixed mock values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressStats {
    pub languages_learning: u32,
    pub conversation_hours: u32,
    pub global_friends: usize,
    pub countries_visited: u32,
}

#[derive(Debug, Clone)]
pub struct DashboardScreen {
    directory: Directory,
    requests: Vec<FollowRequest>,
    search: String,
    selected: Option<u32>,
}

impl DashboardScreen {
    /// Builds a fresh dashboard from the seed fixtures.
    pub fn seeded() -> Result<Self, SeedError> {
        Ok(Self::new(seed::world_users()?, seed::follow_requests()?))
    }

    pub fn new(users: Vec<Contact>, requests: Vec<FollowRequest>) -> Self {
        DashboardScreen {
            directory: Directory::new(users),
            requests,
            search: String::new(),
            selected: None,
        }
    }

    pub fn directory(&self) -> &Directory {
        &self.directory
    }

    pub fn requests(&self) -> &[FollowRequest] {
        &self.requests
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn set_search(&mut self, query: &str) {
        self.search = query.to_string();
    }

    /// Users matching the current search, in directory order.
    pub fn filtered_users(&self) -> Vec<&Contact> {
        self.directory.filter(&self.search)
    }

    pub fn select(&mut self, id: u32) -> bool {
        if self.directory.get(id).is_none() {
            return false;
        }
        self.selected = Some(id);
        true
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// The selected user as currently stored, so a follow is reflected
    /// immediately.
    pub fn selected_user(&self) -> Option<&Contact> {
        self.selected.and_then(|id| self.directory.get(id))
    }

    pub fn follow(&mut self, id: u32) -> bool {
        self.directory.follow(id)
    }

    /// Accepts request `id`: it leaves the queue and the requester joins the
    /// directory as an accepted, online contact.
    pub fn accept_request(&mut self, id: u32) -> bool {
        let Some(index) = self.requests.iter().position(|r| r.id == id) else {
            debug!("Accept ignored: no follow request {}", id);
            return false;
        };

        let request = self.requests.remove(index);
        info!("Accepted follow request from {} ({})", request.name, request.id);
        if !self.directory.insert(request.into_contact()) {
            debug!("Requester {} was already listed; directory unchanged", id);
        }
        true
    }

    /// Declines request `id`. The directory is not touched.
    pub fn decline_request(&mut self, id: u32) -> bool {
        let before = self.requests.len();
        self.requests.retain(|r| r.id != id);
        let removed = self.requests.len() != before;
        if removed {
            info!("Declined follow request {}", id);
        } else {
            debug!("Decline ignored: no follow request {}", id);
        }
        removed
    }

    pub fn online_now(&self) -> usize {
        self.directory.online_count()
    }

    pub fn progress(&self) -> ProgressStats {
        ProgressStats {
            languages_learning: 3,
            conversation_hours: 127,
            global_friends: self.directory.accepted_count(),
            countries_visited: 15,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FollowStatus;

    #[test]
    fn test_follow_refreshes_selection() {
        let mut dashboard = DashboardScreen::seeded().unwrap();
        assert!(dashboard.select(5));
        assert_eq!(dashboard.selected_user().unwrap().follow_status, FollowStatus::NotFollowed);

        assert!(dashboard.follow(5));
        assert_eq!(dashboard.selected_user().unwrap().follow_status, FollowStatus::Pending);
    }

    #[test]
    fn test_select_unknown_user() {
        let mut dashboard = DashboardScreen::seeded().unwrap();
        assert!(!dashboard.select(404));
        assert!(dashboard.selected_user().is_none());
    }

    #[test]
    fn test_accept_updates_friend_count() {
        let mut dashboard = DashboardScreen::seeded().unwrap();
        assert_eq!(dashboard.progress().global_friends, 3);

        assert!(dashboard.accept_request(101));
        assert_eq!(dashboard.progress().global_friends, 4);
        assert_eq!(dashboard.online_now(), 7);

        // Already handled
        assert!(!dashboard.accept_request(101));
        assert_eq!(dashboard.directory().len(), 9);
    }

    #[test]
    fn test_search_is_live() {
        let mut dashboard = DashboardScreen::seeded().unwrap();
        dashboard.set_search("fr");
        let ids: Vec<u32> = dashboard.filtered_users().iter().map(|u| u.id).collect();
        // Hiroshi learns French, Sophie lives in France and speaks French
        assert_eq!(ids, vec![2, 5]);

        dashboard.set_search("");
        assert_eq!(dashboard.filtered_users().len(), 8);
    }
}
