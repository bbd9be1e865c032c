use log::{debug, info};

use crate::models::Message;

/// The messages of one conversation.
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    messages: Vec<Message>,
}

impl Transcript {
    pub fn new(messages: Vec<Message>) -> Self {
        Transcript { messages }
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn get(&self, id: u32) -> Option<&Message> {
        self.messages.iter().find(|m| m.id == id)
    }

    /// Appends an outgoing message. Blank bodies are ignored and return `None`.
    /// The body is stored as typed; only the blank check trims.
    pub fn append_own(&mut self, sender: &str, body: &str, time: String) -> Option<&Message> {
        if body.trim().is_empty() {
            debug!("Ignoring blank message");
            return None;
        }

        let message = Message {
            id: self.next_id(),
            sender: sender.to_string(),
            body: body.to_string(),
            time,
            is_me: true,
            translation: None,
            show_translation: false,
        };
        info!("Appended message {} ({} chars)", message.id, message.body.chars().count());
        self.messages.push(message);
        self.messages.last()
    }

    /// Flips whether the translation of `id` is shown. Returns the new
    /// visibility, or `None` for an unknown id.
    pub fn toggle_translation(&mut self, id: u32) -> Option<bool> {
        let message = self.messages.iter_mut().find(|m| m.id == id)?;
        message.show_translation = !message.show_translation;
        debug!("Translation for message {} now {}", id, message.show_translation);
        Some(message.show_translation)
    }

    fn next_id(&self) -> u32 {
        self.messages.iter().map(|m| m.id).max().unwrap_or(0) + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;

    #[test]
    fn test_append_assigns_next_id() {
        let mut transcript = Transcript::new(seed::messages().unwrap());
        let message = transcript.append_own("You", "Hello", "11:00 AM".to_string()).unwrap();

        assert_eq!(message.id, 5);
        assert!(message.is_me);
        assert_eq!(message.body, "Hello");
        assert_eq!(message.translation, None);
        assert!(!message.show_translation);
        assert_eq!(transcript.len(), 5);
    }

    #[test]
    fn test_blank_bodies_ignored() {
        let mut transcript = Transcript::default();
        assert!(transcript.append_own("You", "", "11:00 AM".to_string()).is_none());
        assert!(transcript.append_own("You", "   ", "11:00 AM".to_string()).is_none());
        assert!(transcript.append_own("You", "\t\n", "11:00 AM".to_string()).is_none());
        assert!(transcript.is_empty());
    }

    #[test]
    fn test_toggle_translation_only_flips_flag() {
        let mut transcript = Transcript::new(seed::messages().unwrap());
        let before = transcript.get(1).unwrap().clone();

        assert_eq!(transcript.toggle_translation(1), Some(true));
        let after = transcript.get(1).unwrap();
        assert_eq!(after.visible_translation(), Some("Hello! How are you doing today?"));
        assert_eq!(after.body, before.body);
        assert_eq!(after.translation, before.translation);

        assert_eq!(transcript.toggle_translation(1), Some(false));
        assert_eq!(transcript.get(1).unwrap().visible_translation(), None);
        assert_eq!(transcript.toggle_translation(42), None);
    }

    #[test]
    fn test_sent_message_never_gets_translation() {
        let mut transcript = Transcript::default();
        transcript.append_own("You", "Bonjour", "9:00 AM".to_string());

        assert_eq!(transcript.toggle_translation(1), Some(true));
        let message = transcript.get(1).unwrap();
        assert!(!message.can_translate());
        assert_eq!(message.visible_translation(), None);
    }
}
