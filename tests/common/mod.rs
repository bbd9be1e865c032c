// Common test utilities for integration tests
// This module contains shared code for all integration tests

use std::sync::Once;

use log::LevelFilter;

use linguaconnect::chat::ChatScreen;
use linguaconnect::config::Settings;
use linguaconnect::dashboard::DashboardScreen;

// Initialize logging once
static INIT_LOGGER: Once = Once::new();

/// Set up the logger for the tests
pub fn setup_logging() {
    INIT_LOGGER.call_once(|| {
        env_logger::Builder::new()
            .filter_level(LevelFilter::Debug)
            .is_test(true)
            .init();
    });
}

/// A dashboard built from the bundled fixtures, with logging on.
pub fn seeded_dashboard() -> DashboardScreen {
    setup_logging();
    DashboardScreen::seeded().expect("bundled fixtures should parse")
}

/// A chat screen built from the bundled fixtures with default settings.
pub fn seeded_chat() -> ChatScreen {
    setup_logging();
    ChatScreen::seeded(&Settings::default()).expect("bundled fixtures should parse")
}
