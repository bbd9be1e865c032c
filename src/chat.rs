//! Chat screen state: conversations, per-conversation transcripts, the
//! composer draft and the call overlay.
//!
//! Everything here sits behind the messaging gate: a conversation is
//! writable only when its contact's relationship is accepted. Controls that
//! fail the gate are reported as disabled through [`ChatControls`] rather
//! than producing errors.

use std::collections::HashMap;

use chrono::format::{Item, StrftimeItems};
use chrono::Local;
use log::{debug, info, warn};

use crate::call::{CallKind, CallOverlay};
use crate::config::{Settings, DEFAULT_TIME_FORMAT};
use crate::directory::Directory;
use crate::error::SeedError;
use crate::models::{Contact, FollowStatus, Message};
use crate::seed;
use crate::transcript::Transcript;

/// Which affordances of the chat screen are enabled right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChatControls {
    pub composer: bool,
    pub send: bool,
    pub voice_call: bool,
    pub video_call: bool,
    pub translate: bool,
    pub volume: bool,
    pub attach: bool,
    pub emoji: bool,
}

/// Banner shown above the transcript while the gate is closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateNotice {
    AwaitingAcceptance,
    NotFollowing,
}

impl GateNotice {
    pub fn text(self) -> &'static str {
        match self {
            GateNotice::AwaitingAcceptance => "Follow request sent. Waiting for acceptance to chat.",
            GateNotice::NotFollowing => "Follow this user to start a conversation.",
        }
    }

    /// Whether the banner carries a "Send Follow Request" action.
    pub fn offers_follow(self) -> bool {
        matches!(self, GateNotice::NotFollowing)
    }
}

#[derive(Debug, Clone)]
pub struct ChatScreen {
    conversations: Directory,
    selected: Option<u32>,
    transcripts: HashMap<u32, Transcript>,
    draft: String,
    call: CallOverlay,
    sender: String,
    time_format: String,
}

impl ChatScreen {
    /// Builds a fresh chat screen from the seed fixtures. The seeded
    /// transcript belongs to the first conversation.
    pub fn seeded(settings: &Settings) -> Result<Self, SeedError> {
        let mut transcripts = HashMap::new();
        transcripts.insert(seed::SEEDED_CONVERSATION_ID, Transcript::new(seed::messages()?));
        Ok(Self::new(seed::conversations()?, transcripts, settings))
    }

    pub fn new(conversations: Vec<Contact>, transcripts: HashMap<u32, Transcript>, settings: &Settings) -> Self {
        let selected = conversations.first().map(|c| c.id);
        ChatScreen {
            conversations: Directory::new(conversations),
            selected,
            transcripts,
            draft: String::new(),
            call: CallOverlay::default(),
            sender: settings.display_name.clone(),
            time_format: settings.time_format.clone(),
        }
    }

    pub fn conversations(&self) -> &[Contact] {
        self.conversations.contacts()
    }

    pub fn selected_contact(&self) -> Option<&Contact> {
        self.selected.and_then(|id| self.conversations.get(id))
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected.and_then(|id| self.conversations.position(id))
    }

    /// Switches conversation. An active call is left running.
    pub fn select(&mut self, id: u32) -> bool {
        if self.conversations.get(id).is_none() {
            return false;
        }
        debug!("Selected conversation {}", id);
        self.selected = Some(id);
        true
    }

    /// Moves the selection by `delta` rows, clamped to the list.
    pub fn select_offset(&mut self, delta: isize) {
        let len = self.conversations.len();
        if len == 0 {
            return;
        }
        let current = self.selected_index().unwrap_or(0) as isize;
        let next = (current + delta).clamp(0, len as isize - 1) as usize;
        let id = self.conversations.contacts()[next].id;
        self.select(id);
    }

    pub fn status(&self) -> FollowStatus {
        self.selected_contact()
            .map(|c| c.follow_status)
            .unwrap_or_default()
    }

    /// The messaging gate.
    pub fn can_communicate(&self) -> bool {
        self.status().can_communicate()
    }

    pub fn controls(&self) -> ChatControls {
        let open = self.can_communicate();
        ChatControls {
            composer: open,
            send: open && !self.draft.trim().is_empty(),
            voice_call: open,
            video_call: open,
            translate: open,
            volume: open,
            attach: open,
            emoji: open,
        }
    }

    pub fn gate_notice(&self) -> Option<GateNotice> {
        match self.status() {
            FollowStatus::Accepted => None,
            FollowStatus::Pending => Some(GateNotice::AwaitingAcceptance),
            FollowStatus::NotFollowed => Some(GateNotice::NotFollowing),
        }
    }

    /// Messages of the selected conversation.
    pub fn messages(&self) -> &[Message] {
        self.selected
            .and_then(|id| self.transcripts.get(&id))
            .map(|t| t.messages())
            .unwrap_or(&[])
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn set_draft(&mut self, draft: &str) {
        self.draft = draft.to_string();
    }

    /// Sends the draft into the selected conversation, stamped with the
    /// current local time. Blank drafts and closed gates send nothing.
    pub fn send(&mut self) -> Option<&Message> {
        let time = self.time_label();
        self.send_with_time(time)
    }

    fn time_label(&self) -> String {
        let valid = StrftimeItems::new(&self.time_format).all(|item| !matches!(item, Item::Error));
        if !valid {
            warn!("Invalid time format '{}', using {}", self.time_format, DEFAULT_TIME_FORMAT);
        }
        let format = if valid { self.time_format.as_str() } else { DEFAULT_TIME_FORMAT };
        Local::now().format(format).to_string()
    }

    fn send_with_time(&mut self, time: String) -> Option<&Message> {
        if !self.can_communicate() {
            debug!("Send blocked: conversation is not accepted");
            return None;
        }
        if self.draft.trim().is_empty() {
            return None;
        }
        let id = self.selected?;

        let body = std::mem::take(&mut self.draft);
        info!("Sending message to conversation {}", id);
        self.transcripts
            .entry(id)
            .or_default()
            .append_own(&self.sender, &body, time)
    }

    /// Flips the translation of a message from the other party. Messages
    /// without a translation, and our own messages, are left alone.
    pub fn toggle_translation(&mut self, message_id: u32) -> Option<bool> {
        let id = self.selected?;
        let transcript = self.transcripts.get_mut(&id)?;
        if !transcript.get(message_id)?.can_translate() {
            return None;
        }
        transcript.toggle_translation(message_id)
    }

    /// Sends a follow request for the selected conversation. The chat screen
    /// can only move a contact to pending.
    pub fn follow_selected(&mut self) -> bool {
        match self.selected {
            Some(id) => self.conversations.follow(id),
            None => false,
        }
    }

    pub fn call(&self) -> &CallOverlay {
        &self.call
    }

    pub fn start_call(&mut self, kind: CallKind) -> bool {
        let allowed = self.can_communicate();
        self.call.start(kind, allowed)
    }

    pub fn toggle_mute(&mut self) -> bool {
        self.call.toggle_mute()
    }

    pub fn toggle_camera(&mut self) -> bool {
        self.call.toggle_camera()
    }

    pub fn end_call(&mut self) {
        self.call.end();
    }
}
