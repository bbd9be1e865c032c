//! Mock call overlay. No media is involved; these are display flags only.

use log::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallKind {
    Video,
    Voice,
}

impl CallKind {
    pub fn label(self) -> &'static str {
        match self {
            CallKind::Video => "Video Call",
            CallKind::Voice => "Voice Call",
        }
    }
}

/// Shown in the overlay in place of a running timer.
pub const MOCK_CALL_DURATION: &str = "00:45";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CallOverlay {
    active: Option<CallKind>,
    muted: bool,
    camera_off: bool,
}

impl CallOverlay {
    /// Starts a call of `kind`, replacing any other active call. Does nothing
    /// unless `allowed` (the messaging gate) is open.
    pub fn start(&mut self, kind: CallKind, allowed: bool) -> bool {
        if !allowed {
            debug!("{} not started: conversation is not accepted", kind.label());
            return false;
        }
        info!("{} started", kind.label());
        self.active = Some(kind);
        true
    }

    pub fn toggle_mute(&mut self) -> bool {
        if self.active.is_none() {
            return false;
        }
        self.muted = !self.muted;
        true
    }

    /// The camera toggle is only offered during a video call.
    pub fn toggle_camera(&mut self) -> bool {
        if self.active != Some(CallKind::Video) {
            return false;
        }
        self.camera_off = !self.camera_off;
        true
    }

    /// Ends the call and clears mute and camera state.
    pub fn end(&mut self) {
        if let Some(kind) = self.active {
            info!("{} ended", kind.label());
        }
        *self = CallOverlay::default();
    }

    pub fn active(&self) -> Option<CallKind> {
        self.active
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    pub fn is_video(&self) -> bool {
        self.active == Some(CallKind::Video)
    }

    pub fn is_voice(&self) -> bool {
        self.active == Some(CallKind::Voice)
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    pub fn is_camera_off(&self) -> bool {
        self.camera_off
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calls_are_mutually_exclusive() {
        let mut call = CallOverlay::default();

        assert!(call.start(CallKind::Video, true));
        assert!(call.is_video() && !call.is_voice());

        assert!(call.start(CallKind::Voice, true));
        assert!(call.is_voice() && !call.is_video());
    }

    #[test]
    fn test_gate_blocks_start() {
        let mut call = CallOverlay::default();
        assert!(!call.start(CallKind::Voice, false));
        assert!(!call.is_active());
    }

    #[test]
    fn test_end_resets_all_flags() {
        let mut call = CallOverlay::default();
        call.start(CallKind::Video, true);
        assert!(call.toggle_mute());
        assert!(call.toggle_camera());
        assert!(call.is_muted() && call.is_camera_off());

        call.end();
        assert_eq!(call, CallOverlay::default());
    }

    #[test]
    fn test_camera_toggle_needs_video() {
        let mut call = CallOverlay::default();
        assert!(!call.toggle_camera());
        assert!(!call.toggle_mute());

        call.start(CallKind::Voice, true);
        assert!(!call.toggle_camera());
        assert!(call.toggle_mute());
        assert!(call.is_muted());
    }
}
