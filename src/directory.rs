//! In-memory contact list owned by a single screen.

use log::{debug, info};

use crate::models::{Contact, FollowStatus};

#[derive(Debug, Clone, Default)]
pub struct Directory {
    contacts: Vec<Contact>,
}

impl Directory {
    pub fn new(contacts: Vec<Contact>) -> Self {
        Directory { contacts }
    }

    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    pub fn get(&self, id: u32) -> Option<&Contact> {
        self.contacts.iter().find(|c| c.id == id)
    }

    pub fn position(&self, id: u32) -> Option<usize> {
        self.contacts.iter().position(|c| c.id == id)
    }

    /// Sends a follow request to `id`. Returns true if the contact moved to
    /// `Pending`; unknown ids and contacts past `NotFollowed` are left alone.
    pub fn follow(&mut self, id: u32) -> bool {
        let Some(contact) = self.contacts.iter_mut().find(|c| c.id == id) else {
            debug!("Follow ignored: no contact with id {}", id);
            return false;
        };

        match contact.follow_status.follow() {
            Some(next) => {
                info!("Follow request sent to {} ({})", contact.name, contact.id);
                contact.follow_status = next;
                true
            }
            None => {
                debug!(
                    "Follow ignored for {}: status is already {:?}",
                    contact.name, contact.follow_status
                );
                false
            }
        }
    }

    /// Appends a contact unless one with the same id is already listed.
    pub fn insert(&mut self, contact: Contact) -> bool {
        if self.get(contact.id).is_some() {
            debug!("Contact {} already in directory", contact.id);
            return false;
        }
        self.contacts.push(contact);
        true
    }

    /// Contacts whose name, country, spoken languages or learning language
    /// contain `query`, ignoring case. An empty query matches everyone.
    pub fn filter(&self, query: &str) -> Vec<&Contact> {
        let needle = query.to_lowercase();
        self.contacts.iter().filter(|c| c.matches(&needle)).collect()
    }

    pub fn online_count(&self) -> usize {
        self.contacts.iter().filter(|c| c.online).count()
    }

    /// "Global friends": contacts with an accepted relationship.
    pub fn accepted_count(&self) -> usize {
        self.contacts
            .iter()
            .filter(|c| c.follow_status == FollowStatus::Accepted)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;

    fn seeded() -> Directory {
        Directory::new(seed::world_users().unwrap())
    }

    #[test]
    fn test_follow_only_from_not_followed() {
        let mut directory = seeded();

        // Emma Johnson starts not followed
        assert!(directory.follow(3));
        assert_eq!(directory.get(3).unwrap().follow_status, FollowStatus::Pending);

        // A second follow does nothing
        assert!(!directory.follow(3));
        assert_eq!(directory.get(3).unwrap().follow_status, FollowStatus::Pending);

        // Pending and accepted users are untouched
        assert!(!directory.follow(2));
        assert_eq!(directory.get(2).unwrap().follow_status, FollowStatus::Pending);
        assert!(!directory.follow(1));
        assert_eq!(directory.get(1).unwrap().follow_status, FollowStatus::Accepted);

        assert!(!directory.follow(999));
    }

    #[test]
    fn test_filter_spanish() {
        let directory = seeded();
        let names: Vec<&str> = directory.filter("Spanish").iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Maria Santos", "Carlos Rodriguez"]);
    }

    #[test]
    fn test_filter_fields_and_case() {
        let directory = seeded();

        assert_eq!(directory.filter("").len(), 8);
        assert_eq!(directory.filter("NORWAY").len(), 1);
        assert_eq!(directory.filter("tanaka")[0].id, 2);
        // "English" is spoken by every seeded user
        assert_eq!(directory.filter("english").len(), 8);
        assert!(directory.filter("klingon").is_empty());
    }

    #[test]
    fn test_counts() {
        let directory = seeded();
        assert_eq!(directory.online_count(), 6);
        assert_eq!(directory.accepted_count(), 3);
    }

    #[test]
    fn test_insert_rejects_duplicate_ids() {
        let mut directory = seeded();
        let existing = directory.get(1).unwrap().clone();
        assert!(!directory.insert(existing));
        assert_eq!(directory.len(), 8);
    }
}
