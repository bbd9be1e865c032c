use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::{debug, info};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Tabs, Wrap},
    Frame,
};
use std::{io, time::Duration};
use textwrap::wrap;
use tui_input::{backend::crossterm::EventHandler, Input};

use linguaconnect::call::{CallKind, MOCK_CALL_DURATION};
use linguaconnect::chat::ChatScreen;
use linguaconnect::dashboard::DashboardScreen;
use linguaconnect::{landing, App, Contact, FollowStatus, Route, Screen};

// Export types needed by main module
pub use ratatui::backend::CrosstermBackend;
pub use ratatui::Terminal;

/// What the main loop should do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiCommand {
    Quit,
}

pub struct AppUI {
    app: App,
    search_input: Input,
    composer_input: Input,
    dashboard_focus: DashboardFocus,
    user_cursor: usize,
    request_cursor: usize,
    chat_focus: ChatFocus,
    message_cursor: usize,
    help_dialog: Option<HelpDialog>,
    status: Option<String>, // One-line feedback for the last action
}

// Keyboard shortcuts popup
struct HelpDialog {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DashboardFocus {
    Search,
    Users,
    Requests,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ChatFocus {
    Conversations,
    Messages,
    Composer,
}

impl AppUI {
    pub fn new(app: App) -> Self {
        AppUI {
            app,
            search_input: Input::default(),
            composer_input: Input::default(),
            dashboard_focus: DashboardFocus::Users,
            user_cursor: 0,
            request_cursor: 0,
            chat_focus: ChatFocus::Composer,
            message_cursor: 0,
            help_dialog: None,
            status: None,
        }
    }

    pub fn route(&self) -> Route {
        self.app.route()
    }

    /// Shows a popup with all keyboard shortcuts
    pub fn show_help_dialog(&mut self) {
        self.help_dialog = Some(HelpDialog {});
    }

    /// Polls for one key event and applies it.
    pub fn handle_input(&mut self) -> Result<Option<UiCommand>> {
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    return self.handle_key(key);
                }
            }
        }
        Ok(None)
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Result<Option<UiCommand>> {
        // Any key press closes the help dialog
        if self.help_dialog.is_some() {
            self.help_dialog = None;
            return Ok(None);
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('c') => return Ok(Some(UiCommand::Quit)),
                KeyCode::Char('h') => {
                    self.show_help_dialog();
                    return Ok(None);
                }
                _ => {}
            }
        }

        let target = match key.code {
            KeyCode::F(1) => Some(Route::Home),
            KeyCode::F(2) => Some(Route::Dashboard),
            KeyCode::F(3) => Some(Route::Chat),
            _ => None,
        };
        if let Some(route) = target {
            self.navigate(route)?;
            return Ok(None);
        }

        match self.app.route() {
            Route::Home => self.handle_home_key(key),
            Route::Dashboard => Ok(self.handle_dashboard_key(key)),
            Route::Chat => Ok(self.handle_chat_key(key)),
        }
    }

    fn navigate(&mut self, route: Route) -> Result<()> {
        self.app.navigate(route)?;
        // Screens re-seed on entry, so their view state starts over too
        self.search_input = Input::default();
        self.composer_input = Input::default();
        self.dashboard_focus = DashboardFocus::Users;
        self.user_cursor = 0;
        self.request_cursor = 0;
        self.chat_focus = ChatFocus::Composer;
        self.message_cursor = 0;
        self.status = None;
        Ok(())
    }

    fn handle_home_key(&mut self, key: KeyEvent) -> Result<Option<UiCommand>> {
        match key.code {
            KeyCode::Esc => Ok(Some(UiCommand::Quit)),
            KeyCode::Enter => {
                // "Start Learning Now"
                self.navigate(Route::Dashboard)?;
                Ok(None)
            }
            _ => Ok(None),
        }
    }

    fn handle_dashboard_key(&mut self, key: KeyEvent) -> Option<UiCommand> {
        let mut open_chat = false;
        {
            let Screen::Dashboard(dashboard) = self.app.screen_mut() else {
                return None;
            };

            match key.code {
                KeyCode::Esc => return Some(UiCommand::Quit),
                KeyCode::Tab => {
                    self.dashboard_focus = match self.dashboard_focus {
                        DashboardFocus::Search => DashboardFocus::Users,
                        DashboardFocus::Users => DashboardFocus::Requests,
                        DashboardFocus::Requests => DashboardFocus::Search,
                    };
                    return None;
                }
                _ => {}
            }

            match self.dashboard_focus {
                DashboardFocus::Search => {
                    self.search_input.handle_event(&Event::Key(key));
                    dashboard.set_search(self.search_input.value());
                    self.user_cursor = 0;
                }
                DashboardFocus::Users => {
                    let visible: Vec<(u32, FollowStatus)> = dashboard
                        .filtered_users()
                        .iter()
                        .map(|u| (u.id, u.follow_status))
                        .collect();
                    match key.code {
                        KeyCode::Up => self.user_cursor = self.user_cursor.saturating_sub(1),
                        KeyCode::Down => {
                            if self.user_cursor + 1 < visible.len() {
                                self.user_cursor += 1;
                            }
                        }
                        KeyCode::Enter => {
                            if let Some((id, _)) = visible.get(self.user_cursor) {
                                dashboard.select(*id);
                            }
                        }
                        KeyCode::Char('f') => {
                            if let Some(user) = dashboard.selected_user() {
                                let (id, name) = (user.id, user.name.clone());
                                if dashboard.follow(id) {
                                    self.status = Some(format!("Follow request sent to {}", name));
                                }
                            }
                        }
                        KeyCode::Char('m') => {
                            let accepted = dashboard
                                .selected_user()
                                .map_or(false, |u| u.follow_status.can_communicate());
                            open_chat = accepted;
                        }
                        _ => {}
                    }
                }
                DashboardFocus::Requests => {
                    let ids: Vec<u32> = dashboard.requests().iter().map(|r| r.id).collect();
                    match key.code {
                        KeyCode::Up => self.request_cursor = self.request_cursor.saturating_sub(1),
                        KeyCode::Down => {
                            if self.request_cursor + 1 < ids.len() {
                                self.request_cursor += 1;
                            }
                        }
                        KeyCode::Char('a') => {
                            if let Some(id) = ids.get(self.request_cursor) {
                                if dashboard.accept_request(*id) {
                                    self.status = Some("Follow request accepted".to_string());
                                }
                            }
                        }
                        KeyCode::Char('d') => {
                            if let Some(id) = ids.get(self.request_cursor) {
                                if dashboard.decline_request(*id) {
                                    self.status = Some("Follow request declined".to_string());
                                }
                            }
                        }
                        _ => {}
                    }
                    let remaining = dashboard.requests().len();
                    self.request_cursor = self.request_cursor.min(remaining.saturating_sub(1));
                }
            }
        }

        if open_chat {
            // Screens share nothing, so the chat opens on its own seed data
            if let Err(e) = self.navigate(Route::Chat) {
                self.status = Some(format!("Could not open chat: {}", e));
            }
        }
        None
    }

    fn handle_chat_key(&mut self, key: KeyEvent) -> Option<UiCommand> {
        let Screen::Chat(chat) = self.app.screen_mut() else {
            return None;
        };

        // The call overlay is modal while it is up
        if chat.call().is_active() {
            match key.code {
                KeyCode::Char('m') => {
                    chat.toggle_mute();
                }
                KeyCode::Char('c') => {
                    chat.toggle_camera();
                }
                KeyCode::Char('e') | KeyCode::Esc => chat.end_call(),
                _ => {}
            }
            return None;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            let kind = match key.code {
                KeyCode::Char('p') => Some(CallKind::Voice),
                KeyCode::Char('v') => Some(CallKind::Video),
                _ => None,
            };
            if let Some(kind) = kind {
                if !chat.start_call(kind) {
                    self.status = Some("Calls are available once the follow request is accepted".to_string());
                }
                return None;
            }
        }

        match key.code {
            KeyCode::Esc => return Some(UiCommand::Quit),
            KeyCode::Tab => {
                self.chat_focus = match self.chat_focus {
                    ChatFocus::Conversations => ChatFocus::Messages,
                    ChatFocus::Messages => ChatFocus::Composer,
                    ChatFocus::Composer => ChatFocus::Conversations,
                };
                return None;
            }
            _ => {}
        }

        match self.chat_focus {
            ChatFocus::Conversations => match key.code {
                KeyCode::Up => {
                    chat.select_offset(-1);
                    self.message_cursor = 0;
                }
                KeyCode::Down => {
                    chat.select_offset(1);
                    self.message_cursor = 0;
                }
                KeyCode::Char('f') => {
                    if chat.gate_notice().map_or(false, |n| n.offers_follow()) && chat.follow_selected() {
                        self.status = Some("Follow request sent".to_string());
                    }
                }
                _ => {}
            },
            ChatFocus::Messages => {
                let ids: Vec<u32> = chat.messages().iter().map(|m| m.id).collect();
                match key.code {
                    KeyCode::Up => self.message_cursor = self.message_cursor.saturating_sub(1),
                    KeyCode::Down => {
                        if self.message_cursor + 1 < ids.len() {
                            self.message_cursor += 1;
                        }
                    }
                    KeyCode::Char('t') | KeyCode::Enter => {
                        if let Some(id) = ids.get(self.message_cursor) {
                            chat.toggle_translation(*id);
                        }
                    }
                    _ => {}
                }
            }
            ChatFocus::Composer => {
                if !chat.controls().composer {
                    return None;
                }
                if key.code == KeyCode::Enter {
                    if chat.send().is_some() {
                        self.composer_input = Input::default();
                        self.message_cursor = chat.messages().len().saturating_sub(1);
                    }
                } else {
                    self.composer_input.handle_event(&Event::Key(key));
                    chat.set_draft(self.composer_input.value());
                }
            }
        }
        None
    }

    pub fn draw(&self, frame: &mut Frame) {
        let size = frame.size();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header with navigation
                Constraint::Min(5),    // Active screen
                Constraint::Length(1), // Help line
            ])
            .split(size);

        draw_header(frame, self.app.route(), chunks[0]);

        match self.app.screen() {
            Screen::Home => draw_home(frame, chunks[1]),
            Screen::Dashboard(dashboard) => self.draw_dashboard(frame, dashboard, chunks[1]),
            Screen::Chat(chat) => self.draw_chat(frame, chat, chunks[1]),
        }

        let hints = match self.app.route() {
            Route::Home => "ESC quit | Enter start learning | F2 dashboard | F3 chat | Ctrl+H help",
            Route::Dashboard => "ESC quit | TAB focus | Enter select | f follow | m message | a/d accept/decline | Ctrl+H help",
            Route::Chat => "ESC quit | TAB focus | f follow | t translate | Ctrl+P voice | Ctrl+V video | Ctrl+H help",
        };
        let mut help_spans = vec![Span::styled(hints, Style::default().fg(Color::Gray))];
        if let Some(status) = &self.status {
            help_spans.push(Span::styled(format!("  {}", status), Style::default().fg(Color::Green)));
        }
        frame.render_widget(Paragraph::new(Line::from(help_spans)), chunks[2]);

        if self.help_dialog.is_some() {
            draw_help_dialog(frame, size);
        }
    }

    fn draw_dashboard(&self, frame: &mut Frame, dashboard: &DashboardScreen, area: Rect) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
            .split(area);

        let left = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(6), Constraint::Min(3)])
            .split(columns[0]);

        // Your Progress
        let progress = dashboard.progress();
        let progress_lines = vec![
            stat_line("Languages Learning", progress.languages_learning.to_string()),
            stat_line("Conversation Hours", format!("{}h", progress.conversation_hours)),
            stat_line("Global Friends", progress.global_friends.to_string()),
            stat_line("Countries Visited", progress.countries_visited.to_string()),
        ];
        let progress_widget = Paragraph::new(progress_lines)
            .block(Block::default().title("Your Progress").borders(Borders::ALL));
        frame.render_widget(progress_widget, left[0]);

        // Follow requests
        let requests = dashboard.requests();
        let request_items: Vec<ListItem> = if requests.is_empty() {
            vec![ListItem::new(Span::styled(
                "No new follow requests.",
                Style::default().fg(Color::Gray),
            ))]
        } else {
            requests
                .iter()
                .map(|r| ListItem::new(format!("[{}] {} ({})", r.initials(), r.name, r.country)))
                .collect()
        };
        let mut request_state = ListState::default();
        if !requests.is_empty() && self.dashboard_focus == DashboardFocus::Requests {
            request_state.select(Some(self.request_cursor));
        }
        let request_list = List::new(request_items)
            .block(focus_block(
                format!("Follow Requests ({})", requests.len()),
                self.dashboard_focus == DashboardFocus::Requests,
            ))
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED));
        frame.render_stateful_widget(request_list, left[1], &mut request_state);

        let right = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Search
                Constraint::Length(4), // Map pins
                Constraint::Min(3),    // User list
                Constraint::Length(5), // Selected user actions
            ])
            .split(columns[1]);

        // Search box
        let search_widget = Paragraph::new(self.search_input.value()).block(focus_block(
            "Search by name, country, or language...".to_string(),
            self.dashboard_focus == DashboardFocus::Search,
        ));
        frame.render_widget(search_widget, right[0]);
        if self.dashboard_focus == DashboardFocus::Search {
            frame.set_cursor(right[0].x + self.search_input.cursor() as u16 + 1, right[0].y + 1);
        }

        let users = dashboard.filtered_users();

        // World map pins, online users in green
        let pins: Vec<Span> = users
            .iter()
            .flat_map(|u| {
                let color = if u.online { Color::Green } else { Color::DarkGray };
                [
                    Span::styled(format!("● {}", u.initials()), Style::default().fg(color)),
                    Span::raw("  "),
                ]
            })
            .collect();
        let map_title = format!(
            "Global Language Community - {} Online Now",
            dashboard.online_now()
        );
        let map_widget = Paragraph::new(Line::from(pins))
            .wrap(Wrap { trim: true })
            .block(Block::default().title(map_title).borders(Borders::ALL));
        frame.render_widget(map_widget, right[1]);

        // User list
        let selected_id = dashboard.selected_user().map(|u| u.id);
        let user_items: Vec<ListItem> = users
            .iter()
            .map(|u| user_item(u, selected_id == Some(u.id)))
            .collect();
        let mut user_state = ListState::default();
        if !users.is_empty() && self.dashboard_focus == DashboardFocus::Users {
            user_state.select(Some(self.user_cursor.min(users.len() - 1)));
        }
        let user_list = List::new(user_items)
            .block(focus_block(
                "Users (Enter to select)".to_string(),
                self.dashboard_focus == DashboardFocus::Users,
            ))
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED));
        frame.render_stateful_widget(user_list, right[2], &mut user_state);

        // Selected user actions
        let actions = match dashboard.selected_user() {
            None => vec![Line::from(Span::styled(
                "Click on users to connect",
                Style::default().fg(Color::Gray),
            ))],
            Some(user) => {
                let location = user
                    .location
                    .map(|p| format!(" ({:.2}, {:.2})", p.lat, p.lng))
                    .unwrap_or_default();
                let action = match user.follow_status {
                    FollowStatus::Accepted => Span::styled(
                        "[m] Message   [ ] Video Call   [ ] Voice Call",
                        Style::default().fg(Color::Green),
                    ),
                    FollowStatus::Pending => Span::styled(
                        "Follow Request Sent",
                        Style::default().fg(Color::DarkGray),
                    ),
                    FollowStatus::NotFollowed => {
                        Span::styled("[f] Follow", Style::default().fg(Color::Yellow))
                    }
                };
                vec![
                    Line::from(vec![
                        Span::styled(
                            format!("Connect with {}", user.name),
                            Style::default().add_modifier(Modifier::BOLD),
                        ),
                        Span::raw(location),
                        Span::styled("  ★ 4.9", Style::default().fg(Color::Yellow)),
                    ]),
                    Line::from(action),
                ]
            }
        };
        let actions_widget = Paragraph::new(actions)
            .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(Color::Blue)));
        frame.render_widget(actions_widget, right[3]);
    }

    fn draw_chat(&self, frame: &mut Frame, chat: &ChatScreen, area: Rect) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
            .split(area);

        // Conversation list
        let conversation_items: Vec<ListItem> = chat
            .conversations()
            .iter()
            .map(conversation_item)
            .collect();
        let mut conversation_state = ListState::default();
        conversation_state.select(chat.selected_index());
        let conversation_list = List::new(conversation_items)
            .block(focus_block(
                "Conversations".to_string(),
                self.chat_focus == ChatFocus::Conversations,
            ))
            .highlight_style(Style::default().bg(Color::Blue).fg(Color::White));
        frame.render_stateful_widget(conversation_list, columns[0], &mut conversation_state);

        let notice = chat.gate_notice();
        let right = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),                                      // Chat header
                Constraint::Length(if notice.is_some() { 1 } else { 0 }), // Gate banner
                Constraint::Min(5),                                         // Messages
                Constraint::Length(3),                                      // Composer
            ])
            .split(columns[1]);

        let controls = chat.controls();

        // Chat header
        if let Some(contact) = chat.selected_contact() {
            let presence = if contact.online { "Online" } else { "Last seen 1h ago" };
            let header = Line::from(vec![
                Span::styled(
                    format!("[{}] {}", contact.initials(), contact.name),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::raw(format!("  {} • {}   ", presence, contact.country)),
                control_span("Voice", controls.voice_call),
                Span::raw(" "),
                control_span("Video", controls.video_call),
                Span::raw(" "),
                control_span("Translate", controls.translate),
            ]);
            frame.render_widget(
                Paragraph::new(header).block(Block::default().borders(Borders::ALL)),
                right[0],
            );
        }

        // Gate banner
        if let Some(notice) = notice {
            let mut spans = vec![Span::styled(notice.text(), Style::default().fg(Color::Yellow))];
            if notice.offers_follow() {
                spans.push(Span::styled(
                    "  [f] Send Follow Request",
                    Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
                ));
            }
            frame.render_widget(Paragraph::new(Line::from(spans)), right[1]);
        }

        self.draw_messages(frame, chat, right[2]);

        // Composer
        let placeholder = if controls.composer { "Type your message..." } else { "Follow to send messages" };
        let composer_text = if self.composer_input.value().is_empty() {
            Span::styled(placeholder, Style::default().fg(Color::DarkGray))
        } else {
            Span::raw(self.composer_input.value())
        };
        let composer_title = Line::from(vec![
            Span::raw("Message "),
            control_span("Attach", controls.attach),
            Span::raw(" "),
            control_span("Emoji", controls.emoji),
            Span::raw(" "),
            control_span("Translate", controls.translate),
            Span::raw(" "),
            control_span("Volume", controls.volume),
            Span::raw(" "),
            control_span("Send", controls.send),
        ]);
        let composer = Paragraph::new(Line::from(composer_text)).block(
            Block::default()
                .title(composer_title)
                .borders(Borders::ALL)
                .border_style(if self.chat_focus == ChatFocus::Composer && controls.composer {
                    Style::default().fg(Color::Yellow)
                } else {
                    Style::default()
                }),
        );
        frame.render_widget(composer, right[3]);
        if self.chat_focus == ChatFocus::Composer && controls.composer && !chat.call().is_active() {
            frame.set_cursor(right[3].x + self.composer_input.cursor() as u16 + 1, right[3].y + 1);
        }

        if chat.call().is_active() {
            draw_call_overlay(frame, chat, area);
        }
    }

    fn draw_messages(&self, frame: &mut Frame, chat: &ChatScreen, area: Rect) {
        let wrap_width = area.width.saturating_sub(2).max(1) as usize; // Account for borders
        let messages = chat.messages();
        let focused = self.chat_focus == ChatFocus::Messages;

        let mut items: Vec<ListItem> = Vec::new();
        let mut cursor_row = None;
        for (index, m) in messages.iter().enumerate() {
            if focused && index == self.message_cursor {
                cursor_row = Some(items.len());
            }

            let prefix = format!("[{}] {}: ", m.time, m.sender);
            let toggle = if m.can_translate() {
                if m.show_translation { "  [t] Original" } else { "  [t] Translate" }
            } else {
                ""
            };
            let full_content = format!("{}{}{}", prefix, m.body, toggle);

            let style = if m.is_me {
                Style::default().fg(Color::Blue)
            } else {
                Style::default()
            };
            for line in wrap(&full_content, wrap_width) {
                items.push(ListItem::new(Text::from(line.into_owned())).style(style));
            }

            if let Some(translation) = m.visible_translation() {
                for line in wrap(&format!("    {}", translation), wrap_width) {
                    items.push(
                        ListItem::new(Text::from(line.into_owned()))
                            .style(Style::default().fg(Color::Gray).add_modifier(Modifier::ITALIC)),
                    );
                }
            }
        }

        // Follow the cursor when focused, otherwise stay scrolled to the bottom
        let mut list_state = ListState::default();
        match cursor_row {
            Some(row) => list_state.select(Some(row)),
            None if !items.is_empty() => list_state.select(Some(items.len() - 1)),
            None => {}
        }

        let highlight = if focused {
            Style::default().add_modifier(Modifier::REVERSED)
        } else {
            Style::default()
        };
        let list = List::new(items)
            .block(focus_block("Messages".to_string(), focused))
            .highlight_style(highlight);
        frame.render_stateful_widget(list, area, &mut list_state);
    }
}

fn focus_block(title: String, focused: bool) -> Block<'static> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(if focused {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        })
}

fn stat_line(label: &'static str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:<22}", label), Style::default().fg(Color::Gray)),
        Span::styled(value, Style::default().add_modifier(Modifier::BOLD)),
    ])
}

// Disabled controls are greyed out instead of hidden
fn control_span(label: &'static str, enabled: bool) -> Span<'static> {
    let style = if enabled {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray).add_modifier(Modifier::CROSSED_OUT)
    };
    Span::styled(format!("[{}]", label), style)
}

fn user_item(user: &Contact, selected: bool) -> ListItem<'static> {
    let marker = if selected { "* " } else { "  " };
    let status_indicator = if user.online { "🟢 " } else { "⚪ " };
    let line = Line::from(vec![
        Span::raw(format!("{}{}", marker, status_indicator)),
        Span::styled(user.name.clone(), Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(format!(" - {} | {} | ", user.country, user.languages.join(", "))),
        Span::raw("Learning: "),
        Span::styled(user.learning.clone(), Style::default().fg(Color::Blue)),
        Span::styled(format!("  {}", user.follow_status.label()), status_style(user.follow_status)),
    ]);
    ListItem::new(line)
}

fn conversation_item(contact: &Contact) -> ListItem<'static> {
    let status_indicator = if contact.online { "🟢 " } else { "⚪ " };
    let mut first = vec![
        Span::raw(status_indicator),
        Span::styled(contact.name.clone(), Style::default().add_modifier(Modifier::BOLD)),
        Span::styled(
            format!("  {}", contact.last_active.clone().unwrap_or_default()),
            Style::default().fg(Color::Gray),
        ),
    ];
    if contact.unread > 0 {
        first.push(Span::styled(
            format!(" ({})", contact.unread),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ));
    }

    let mut second = vec![Span::raw(format!("   {} · {}", contact.learning, contact.country))];
    if contact.follow_status != FollowStatus::Accepted {
        second.push(Span::styled(
            format!("  {}", contact.follow_status.label()),
            status_style(contact.follow_status),
        ));
    }

    let preview = format!("   {}", contact.last_message.clone().unwrap_or_default());
    ListItem::new(vec![
        Line::from(first),
        Line::from(Span::styled(preview, Style::default().fg(Color::Gray))),
        Line::from(second),
    ])
}

fn status_style(status: FollowStatus) -> Style {
    match status {
        FollowStatus::Accepted => Style::default().fg(Color::Green),
        FollowStatus::Pending => Style::default().fg(Color::Yellow),
        FollowStatus::NotFollowed => Style::default().fg(Color::Gray),
    }
}

fn draw_header(f: &mut Frame, route: Route, area: Rect) {
    let titles: Vec<Line> = Route::ALL
        .iter()
        .enumerate()
        .map(|(i, r)| Line::from(format!("F{} {}", i + 1, r.title())))
        .collect();
    let selected = Route::ALL.iter().position(|r| *r == route).unwrap_or(0);

    let tabs = Tabs::new(titles)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(Span::styled(
                    landing::PRODUCT_NAME,
                    Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
                )),
        )
        .select(selected)
        .highlight_style(Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD));
    f.render_widget(tabs, area);
}

fn draw_home(f: &mut Frame, area: Rect) {
    let mut lines = vec![
        Line::from(Span::styled(
            format!("🌍 {}", landing::TAGLINE),
            Style::default().fg(Color::Blue),
        )),
        Line::from(""),
        Line::from(Span::styled(
            landing::HEADLINE,
            Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(landing::BLURB),
        Line::from(""),
    ];

    let stat_spans: Vec<Span> = landing::STATS
        .iter()
        .flat_map(|s| {
            [
                Span::styled(s.value, Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD)),
                Span::styled(format!(" {}    ", s.label), Style::default().fg(Color::Gray)),
            ]
        })
        .collect();
    lines.push(Line::from(stat_spans));
    lines.push(Line::from(""));

    for feature in landing::FEATURES.iter() {
        lines.push(Line::from(Span::styled(
            feature.title,
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::raw(format!("  {}", feature.description))));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        landing::CALL_TO_ACTION,
        Style::default().add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(landing::CALL_TO_ACTION_DETAIL));
    lines.push(Line::from(Span::styled(
        "Press Enter to start learning now",
        Style::default().fg(Color::Green),
    )));

    let home = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(home, area);
}

fn draw_call_overlay(f: &mut Frame, chat: &ChatScreen, area: Rect) {
    let popup_area = centered_rect(50, 9, area);
    let call = chat.call();
    let kind = call.active().unwrap_or(CallKind::Voice);

    let popup_block = Block::default()
        .title(kind.label())
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));

    f.render_widget(Clear, popup_area); // Clear the area first
    f.render_widget(popup_block, popup_area);

    let inner_area = popup_area.inner(&Margin {
        vertical: 1,
        horizontal: 2,
    });

    let name = chat.selected_contact().map(|c| c.name.clone()).unwrap_or_default();
    let mut content = vec![
        Line::from(Span::styled(name, Style::default().add_modifier(Modifier::BOLD))),
        Line::from(format!("{} • {}", kind.label(), MOCK_CALL_DURATION)),
        Line::from(""),
    ];
    if call.is_video() {
        let camera = if call.is_camera_off() { "Camera off" } else { "Camera on" };
        content.push(Line::from(Span::styled(camera, Style::default().fg(Color::Gray))));
    }

    let mute_style = if call.is_muted() {
        Style::default().fg(Color::Red)
    } else {
        Style::default().fg(Color::Green)
    };
    let mut controls = vec![Span::styled(
        if call.is_muted() { "[m] Unmute" } else { "[m] Mute" },
        mute_style,
    )];
    if call.is_video() {
        let camera_style = if call.is_camera_off() {
            Style::default().fg(Color::Red)
        } else {
            Style::default().fg(Color::Green)
        };
        controls.push(Span::raw("   "));
        controls.push(Span::styled(
            if call.is_camera_off() { "[c] Camera on" } else { "[c] Camera off" },
            camera_style,
        ));
    }
    controls.push(Span::raw("   "));
    controls.push(Span::styled("[e] End call", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)));
    content.push(Line::from(controls));

    f.render_widget(Paragraph::new(content), inner_area);
}

fn draw_help_dialog(f: &mut Frame, area: Rect) {
    let popup_area = centered_rect(72, 30, area);

    let popup_block = Block::default()
        .title("Keyboard Shortcuts")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    f.render_widget(Clear, popup_area); // Clear the area first
    f.render_widget(popup_block, popup_area);

    let inner_area = popup_area.inner(&Margin {
        vertical: 1,
        horizontal: 2,
    });

    let shortcuts = vec![
        ("General", ""),
        ("ESC", "Quit application (ends the call when one is up)"),
        ("F1/F2/F3", "Home / Dashboard / Chat"),
        ("Tab", "Move focus between panels"),
        ("", ""),
        ("Dashboard", ""),
        ("↑/↓", "Navigate users or follow requests"),
        ("Enter", "Select the highlighted user"),
        ("f", "Follow the selected user"),
        ("m", "Message the selected user (connected users only)"),
        ("a / d", "Accept / decline the highlighted follow request"),
        ("", ""),
        ("Chat", ""),
        ("↑/↓", "Switch conversation or highlight a message"),
        ("f", "Send a follow request for this conversation"),
        ("t", "Show or hide the translation of a message"),
        ("Enter", "Send message (connected conversations only)"),
        ("Ctrl+P", "Start a voice call"),
        ("Ctrl+V", "Start a video call"),
        ("m / c / e", "Mute / camera / end during a call"),
        ("", ""),
        ("Help", ""),
        ("Ctrl+H", "Show this help dialog"),
        ("", ""),
        ("Press any key to close this dialog", ""),
    ];

    let items: Vec<ListItem> = shortcuts
        .iter()
        .map(|(key, desc)| {
            if desc.is_empty() {
                if key.is_empty() {
                    ListItem::new("")
                } else {
                    ListItem::new(Text::styled(
                        key.to_string(),
                        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
                    ))
                }
            } else {
                let line = Line::from(vec![
                    Span::styled(format!("{:<12}", key), Style::default().fg(Color::Green)),
                    Span::raw(desc.to_string()),
                ]);
                ListItem::new(line)
            }
        })
        .collect();

    f.render_widget(List::new(items), inner_area);
}

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let popup_width = width.min(area.width.saturating_sub(4));
    let popup_height = height.min(area.height.saturating_sub(4));
    let popup_x = area.x + (area.width - popup_width) / 2;
    let popup_y = area.y + (area.height - popup_height) / 2;
    Rect::new(popup_x, popup_y, popup_width, popup_height)
}

pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    debug!("Terminal switched to alternate screen");
    Ok(terminal)
}

pub fn restore_terminal(mut terminal: Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    info!("Terminal restored");
    Ok(())
}
