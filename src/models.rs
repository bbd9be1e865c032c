use serde::{Deserialize, Serialize};

pub use crate::relationship::FollowStatus;

/// A map position for the world map pins.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    pub const ORIGIN: GeoPoint = GeoPoint { lat: 0.0, lng: 0.0 };
}

/// A directory entry, shared in shape by the dashboard and the chat screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    pub id: u32,
    pub name: String,
    pub country: String,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub languages: Vec<String>,
    /// The language this contact is learning or practicing.
    pub learning: String,
    pub online: bool,
    #[serde(default)]
    pub unread: u32,
    #[serde(default)]
    pub last_message: Option<String>,
    #[serde(default)]
    pub last_active: Option<String>,
    #[serde(default)]
    pub location: Option<GeoPoint>,
    pub follow_status: FollowStatus,
}

impl Contact {
    /// Avatar fallback text: the first letter of each name part.
    pub fn initials(&self) -> String {
        initials(&self.name)
    }

    /// Case-insensitive substring match over name, country, spoken languages
    /// and the learning language. `needle` must already be lowercase.
    pub fn matches(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self.country.to_lowercase().contains(needle)
            || self.languages.iter().any(|lang| lang.to_lowercase().contains(needle))
            || self.learning.to_lowercase().contains(needle)
    }
}

/// An incoming follow request waiting for accept or decline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FollowRequest {
    pub id: u32,
    pub name: String,
    pub country: String,
    #[serde(default)]
    pub languages: Vec<String>,
    pub learning: String,
}

impl FollowRequest {
    pub fn initials(&self) -> String {
        initials(&self.name)
    }

    /// Promote the requester into a directory entry with an accepted relationship.
    pub fn into_contact(self) -> Contact {
        Contact {
            id: self.id,
            name: self.name,
            country: self.country,
            avatar: None,
            languages: self.languages,
            learning: self.learning,
            online: true,
            unread: 0,
            last_message: None,
            last_active: None,
            location: Some(GeoPoint::ORIGIN),
            follow_status: FollowStatus::Accepted,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: u32,
    pub sender: String,
    pub body: String,
    /// Display-only time label, e.g. "10:30 AM".
    pub time: String,
    pub is_me: bool,
    #[serde(default)]
    pub translation: Option<String>,
    #[serde(default)]
    pub show_translation: bool,
}

impl Message {
    /// Only messages from the other party that carry a translation offer the toggle.
    pub fn can_translate(&self) -> bool {
        !self.is_me && self.has_translation()
    }

    pub fn has_translation(&self) -> bool {
        self.translation.as_deref().map_or(false, |t| !t.is_empty())
    }

    /// The translation text, if it is both present and switched on.
    pub fn visible_translation(&self) -> Option<&str> {
        if self.show_translation {
            self.translation.as_deref().filter(|t| !t.is_empty())
        } else {
            None
        }
    }
}

pub fn initials(name: &str) -> String {
    name.split(' ')
        .filter_map(|part| part.chars().next())
        .collect()
}
