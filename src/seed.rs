//! Embedded mock data.
//!
//! Every screen re-seeds from these fixtures when it is opened; nothing is
//! shared between screens and nothing is written back.

use std::collections::HashSet;

use log::debug;
use serde::de::DeserializeOwned;

use crate::error::SeedError;
use crate::models::{Contact, FollowRequest, Message};

const WORLD_USERS: &str = include_str!("../data/world_users.json");
const FOLLOW_REQUESTS: &str = include_str!("../data/follow_requests.json");
const CONVERSATIONS: &str = include_str!("../data/conversations.json");
const MESSAGES: &str = include_str!("../data/messages.json");

/// The conversation the seeded transcript belongs to.
pub const SEEDED_CONVERSATION_ID: u32 = 1;

/// Users shown on the dashboard's world map and user list.
pub fn world_users() -> Result<Vec<Contact>, SeedError> {
    let users: Vec<Contact> = parse("world_users", WORLD_USERS)?;
    ensure_unique_ids("world_users", users.iter().map(|u| u.id))?;
    Ok(users)
}

/// Follow requests received by the current user.
pub fn follow_requests() -> Result<Vec<FollowRequest>, SeedError> {
    let requests: Vec<FollowRequest> = parse("follow_requests", FOLLOW_REQUESTS)?;
    ensure_unique_ids("follow_requests", requests.iter().map(|r| r.id))?;
    Ok(requests)
}

/// Conversations listed on the chat screen.
pub fn conversations() -> Result<Vec<Contact>, SeedError> {
    let chats: Vec<Contact> = parse("conversations", CONVERSATIONS)?;
    ensure_unique_ids("conversations", chats.iter().map(|c| c.id))?;
    Ok(chats)
}

/// Messages of the seeded conversation.
pub fn messages() -> Result<Vec<Message>, SeedError> {
    let messages: Vec<Message> = parse("messages", MESSAGES)?;
    ensure_unique_ids("messages", messages.iter().map(|m| m.id))?;
    Ok(messages)
}

fn parse<T: DeserializeOwned>(name: &'static str, raw: &str) -> Result<Vec<T>, SeedError> {
    let items: Vec<T> = serde_json::from_str(raw)
        .map_err(|source| SeedError::InvalidFixture { name, source })?;
    debug!("Loaded {} records from seed fixture {}", items.len(), name);
    Ok(items)
}

fn ensure_unique_ids(name: &'static str, ids: impl Iterator<Item = u32>) -> Result<(), SeedError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(SeedError::DuplicateId { name, id });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FollowStatus;

    #[test]
    fn test_fixtures_load() {
        assert_eq!(world_users().unwrap().len(), 8);
        assert_eq!(follow_requests().unwrap().len(), 2);
        assert_eq!(conversations().unwrap().len(), 3);
        assert_eq!(messages().unwrap().len(), 4);
    }

    #[test]
    fn test_seeded_statuses() {
        let users = world_users().unwrap();
        let accepted = users.iter().filter(|u| u.follow_status == FollowStatus::Accepted).count();
        let pending = users.iter().filter(|u| u.follow_status == FollowStatus::Pending).count();
        assert_eq!(accepted, 3);
        assert_eq!(pending, 1);

        let chats = conversations().unwrap();
        assert_eq!(chats[0].follow_status, FollowStatus::Accepted);
        assert_eq!(chats[1].follow_status, FollowStatus::Pending);
        assert_eq!(chats[2].follow_status, FollowStatus::NotFollowed);
    }

    #[test]
    fn test_malformed_fixture_is_reported() {
        let result: Result<Vec<Contact>, SeedError> = parse("broken", "[{\"id\": 1}]");
        match result {
            Err(SeedError::InvalidFixture { name, .. }) => assert_eq!(name, "broken"),
            other => panic!("Expected InvalidFixture, got {:?}", other),
        }
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let result = ensure_unique_ids("dupes", [1, 2, 1].into_iter());
        assert!(matches!(result, Err(SeedError::DuplicateId { id: 1, .. })));
    }
}
