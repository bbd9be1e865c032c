//! Route switching between the three screens.
//!
//! Navigation is the only thing screens have in common. Entering a route
//! always builds its screen from seed data, so changes made on one visit are
//! gone on the next and never leak into another screen.

use std::fmt;

use log::info;
use serde::{Deserialize, Serialize};

use crate::chat::ChatScreen;
use crate::config::Settings;
use crate::dashboard::DashboardScreen;
use crate::error::SeedError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum Route {
    #[default]
    Home,
    Dashboard,
    Chat,
}

impl Route {
    pub const ALL: [Route; 3] = [Route::Home, Route::Dashboard, Route::Chat];

    pub fn title(self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::Dashboard => "Dashboard",
            Route::Chat => "Chat",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

pub enum Screen {
    Home,
    Dashboard(DashboardScreen),
    Chat(ChatScreen),
}

impl Screen {
    pub fn route(&self) -> Route {
        match self {
            Screen::Home => Route::Home,
            Screen::Dashboard(_) => Route::Dashboard,
            Screen::Chat(_) => Route::Chat,
        }
    }
}

pub struct App {
    settings: Settings,
    screen: Screen,
}

impl App {
    /// Opens the app on the configured start screen.
    pub fn new(settings: Settings) -> Result<Self, SeedError> {
        let screen = build_screen(settings.start_screen, &settings)?;
        Ok(App { settings, screen })
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn route(&self) -> Route {
        self.screen.route()
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn screen_mut(&mut self) -> &mut Screen {
        &mut self.screen
    }

    /// Switches to `route`, re-seeding it even when it is already showing.
    pub fn navigate(&mut self, route: Route) -> Result<(), SeedError> {
        info!("Navigating from {} to {}", self.route(), route);
        self.screen = build_screen(route, &self.settings)?;
        Ok(())
    }
}

fn build_screen(route: Route, settings: &Settings) -> Result<Screen, SeedError> {
    Ok(match route {
        Route::Home => Screen::Home,
        Route::Dashboard => Screen::Dashboard(DashboardScreen::seeded()?),
        Route::Chat => Screen::Chat(ChatScreen::seeded(settings)?),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_on_configured_route() {
        let settings = Settings {
            start_screen: Route::Dashboard,
            ..Settings::default()
        };
        let app = App::new(settings).unwrap();
        assert_eq!(app.route(), Route::Dashboard);
    }

    #[test]
    fn test_navigation_reseeds() {
        let mut app = App::new(Settings::default()).unwrap();
        app.navigate(Route::Dashboard).unwrap();

        if let Screen::Dashboard(dashboard) = app.screen_mut() {
            assert!(dashboard.decline_request(102));
            assert_eq!(dashboard.requests().len(), 1);
        } else {
            panic!("Expected dashboard screen");
        }

        app.navigate(Route::Chat).unwrap();
        app.navigate(Route::Dashboard).unwrap();

        match app.screen() {
            Screen::Dashboard(dashboard) => assert_eq!(dashboard.requests().len(), 2),
            _ => panic!("Expected dashboard screen"),
        }
    }
}
