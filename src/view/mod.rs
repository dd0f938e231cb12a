//! TUI rendering and terminal management (impure shell).
//!
//! Everything below `TuiApp` is a pure function of `AppState`: the render
//! functions draw derived view state and the event handlers translate
//! terminal input into state transitions plus optional [`SessionEvent`]s.
//! Only `TuiApp` itself touches the real terminal and the network bridge.

pub mod help;
pub mod input;
pub mod layout;
pub mod notice;
pub mod status;
pub mod styles;
pub mod suggestions;
pub mod transcript;

pub use styles::{ColorConfig, Palette};

use std::io::{self, Stdout};
use std::sync::mpsc::{self, Receiver};
use std::time::Duration;

use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
    KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::ExecutableCommand;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Rect;
use ratatui::{Frame, Terminal};
use tracing::info;

use crate::api::bridge::ApiBridge;
use crate::api::SearchClient;
use crate::config::{KeyBindings, ResolvedConfig};
use crate::model::{AppError, KeyAction};
use crate::state::{input_handler, AppState, Focus, SessionEvent};

/// How long the event loop waits for terminal input before draining the
/// resolution channel. Also bounds how stale a drawn frame can be.
const TICK: Duration = Duration::from_millis(100);

/// Areas recorded during a draw that the mouse handler needs afterwards.
#[derive(Debug, Clone, Default)]
pub struct RenderedAreas {
    /// One rect per visible suggestion chip, in display order.
    pub chips: Vec<Rect>,
}

/// Draws the whole application into one frame.
///
/// Takes `&mut AppState` only to clamp the transcript scroll against the
/// just-measured content height; no other state changes happen here.
pub fn render_app(frame: &mut Frame, app: &mut AppState) -> RenderedAreas {
    let palette = Palette::new();
    let areas = layout::split(
        frame.area(),
        app.session.shows_input(),
        app.session.transient_error.is_some(),
    );

    layout::render_header(frame, areas.header, &palette);
    transcript::render_transcript(frame, areas.transcript, app, &palette);
    if let (Some(area), Some(message)) = (areas.notice, app.session.transient_error.as_deref()) {
        notice::render_notice(frame, area, message, &palette);
    }
    let mut rendered = RenderedAreas::default();
    if let Some(area) = areas.chips {
        rendered.chips = suggestions::render_chips(frame, area, app, &palette);
    }
    if let Some(area) = areas.input {
        input::render_input(frame, area, app, &palette);
    }
    status::render_status(frame, areas.status, app, &palette);

    if app.help_visible {
        help::render_help_overlay(frame, &palette);
    }
    rendered
}

/// Translates a key event into state changes and an optional session event.
///
/// Precedence: Ctrl+C, then the help overlay, then text capture by the
/// input bar, then the suggestion row, then the bindings table. Printable
/// keys never reach the bindings while the input bar has focus.
pub fn handle_key_event(
    app: &mut AppState,
    bindings: &KeyBindings,
    key: KeyEvent,
) -> Option<SessionEvent> {
    // Ctrl+C always quits, regardless of focus or bindings
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.quit();
        return None;
    }

    if app.help_visible {
        if matches!(key.code, KeyCode::Char('?') | KeyCode::Esc | KeyCode::Char('q')) {
            app.help_visible = false;
        }
        return None;
    }

    if app.input_captures_keys() {
        return handle_input_key(app, key);
    }

    if app.session.shows_input() && app.focus == Focus::Suggestions {
        return handle_suggestion_key(app, bindings, key);
    }

    match bindings.get(key)? {
        KeyAction::Quit => {
            app.quit();
            None
        }
        KeyAction::ToggleHelp => {
            app.toggle_help();
            None
        }
        KeyAction::Dismiss => app
            .session
            .transient_error
            .is_some()
            .then_some(SessionEvent::DismissError),
        KeyAction::Activate => {
            app.toggle_selected_detail();
            None
        }
        KeyAction::RequestExplanation => Some(SessionEvent::RequestExplanation),
        KeyAction::ResetSession => Some(SessionEvent::Reset),
        KeyAction::NextItem => {
            if app.session.result.is_some() {
                app.next_match();
            } else {
                app.scroll_down(1);
            }
            None
        }
        KeyAction::PrevItem => {
            if app.session.result.is_some() {
                app.prev_match();
            } else {
                app.scroll_up(1);
            }
            None
        }
        KeyAction::PageUp => {
            app.scroll_up(10);
            None
        }
        KeyAction::PageDown => {
            app.scroll_down(10);
            None
        }
        // Chip and focus actions only apply while the input is shown
        KeyAction::NextChip | KeyAction::PrevChip | KeyAction::CycleFocus => None,
    }
}

/// Key handling while the input bar captures typing.
fn handle_input_key(app: &mut AppState, key: KeyEvent) -> Option<SessionEvent> {
    match key.code {
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            input_handler::handle_char_input(app, ch);
            None
        }
        KeyCode::Backspace => {
            input_handler::handle_backspace(app);
            None
        }
        KeyCode::Delete => {
            input_handler::handle_delete(app);
            None
        }
        KeyCode::Left => {
            input_handler::handle_cursor_left(app);
            None
        }
        KeyCode::Right => {
            input_handler::handle_cursor_right(app);
            None
        }
        KeyCode::Home => {
            input_handler::handle_cursor_home(app);
            None
        }
        KeyCode::End => {
            input_handler::handle_cursor_end(app);
            None
        }
        KeyCode::Enter => Some(SessionEvent::Submit(app.session.query.clone())),
        KeyCode::Tab => {
            app.cycle_focus();
            None
        }
        KeyCode::Esc => {
            // A visible notice takes the Esc; otherwise it clears the input
            if app.session.transient_error.is_some() {
                Some(SessionEvent::DismissError)
            } else {
                app.clear_input();
                None
            }
        }
        KeyCode::Up => {
            app.scroll_up(1);
            None
        }
        KeyCode::Down => {
            app.scroll_down(1);
            None
        }
        KeyCode::PageUp => {
            app.scroll_up(10);
            None
        }
        KeyCode::PageDown => {
            app.scroll_down(10);
            None
        }
        _ => None,
    }
}

/// Key handling while the suggestion row has focus.
fn handle_suggestion_key(
    app: &mut AppState,
    bindings: &KeyBindings,
    key: KeyEvent,
) -> Option<SessionEvent> {
    match bindings.get(key)? {
        KeyAction::NextChip | KeyAction::NextItem => {
            app.next_chip();
            None
        }
        KeyAction::PrevChip | KeyAction::PrevItem => {
            app.prev_chip();
            None
        }
        KeyAction::Activate => app.select_suggestion(),
        KeyAction::CycleFocus => {
            app.cycle_focus();
            None
        }
        KeyAction::Dismiss => {
            if app.session.transient_error.is_some() {
                Some(SessionEvent::DismissError)
            } else {
                app.focus = Focus::Input;
                None
            }
        }
        KeyAction::Quit => {
            app.quit();
            None
        }
        KeyAction::ToggleHelp => {
            app.toggle_help();
            None
        }
        _ => None,
    }
}

/// Translates a mouse event into state changes and an optional session
/// event. `chips` is the chip layout recorded by the last draw.
pub fn handle_mouse_event(
    app: &mut AppState,
    chips: &[Rect],
    mouse: MouseEvent,
) -> Option<SessionEvent> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            let index = suggestions::chip_at(chips, mouse.column, mouse.row)?;
            app.select_suggestion_at(index)
        }
        MouseEventKind::ScrollUp => {
            app.scroll_up(3);
            None
        }
        MouseEventKind::ScrollDown => {
            app.scroll_down(3);
            None
        }
        _ => None,
    }
}

/// Main TUI application.
///
/// Generic over the backend so tests can drive it with `TestBackend`;
/// the real binary runs it on crossterm/stdout. Owns the API bridge, so
/// dropping the app also cancels in-flight HTTP work.
pub struct TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    terminal: Terminal<B>,
    app: AppState,
    bindings: KeyBindings,
    bridge: ApiBridge,
    resolutions: Receiver<SessionEvent>,
    chip_areas: Vec<Rect>,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Creates and initializes the application against the real terminal.
    ///
    /// Sets up raw mode, the alternate screen, and mouse capture, and
    /// builds the HTTP client targeting the configured endpoint root.
    pub fn new(config: &ResolvedConfig) -> Result<Self, AppError> {
        let client = SearchClient::new(&config.api_url)?;
        let (tx, rx) = mpsc::channel();
        let bridge = ApiBridge::new(client, tx)?;

        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        stdout.execute(EnableMouseCapture)?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;

        Ok(Self {
            terminal,
            app: AppState::new(config.suggestions.clone()),
            bindings: KeyBindings::default(),
            bridge,
            resolutions: rx,
            chip_areas: Vec::new(),
        })
    }

    /// Runs the event loop until the user quits.
    ///
    /// `startup_query` is submitted immediately, as if typed and entered.
    pub fn run(&mut self, startup_query: Option<String>) -> Result<(), AppError> {
        if let Some(query) = startup_query {
            self.apply(SessionEvent::Submit(query));
        }
        self.draw()?;

        while !self.app.should_quit {
            if event::poll(TICK)? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        if let Some(session_event) =
                            handle_key_event(&mut self.app, &self.bindings, key)
                        {
                            self.apply(session_event);
                        }
                        self.drain_resolutions();
                        self.draw()?;
                    }
                    Event::Mouse(mouse) => {
                        if let Some(session_event) =
                            handle_mouse_event(&mut self.app, &self.chip_areas, mouse)
                        {
                            self.apply(session_event);
                        }
                        self.drain_resolutions();
                        self.draw()?;
                    }
                    Event::Resize(_, _) => {
                        self.draw()?;
                    }
                    _ => {}
                }
            } else if self.drain_resolutions() {
                self.draw()?;
            }
        }
        info!("event loop finished");
        Ok(())
    }
}

impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Applies one session event and dispatches the command it requires.
    fn apply(&mut self, event: SessionEvent) {
        if let Some(command) = self.app.apply_event(event) {
            self.bridge.dispatch(command);
        }
    }

    /// Feeds every pending network resolution into the state machine.
    ///
    /// Returns whether anything was applied (and a redraw is due).
    fn drain_resolutions(&mut self) -> bool {
        let mut applied = false;
        while let Ok(event) = self.resolutions.try_recv() {
            self.apply(event);
            applied = true;
        }
        applied
    }

    /// Draws one frame and records the chip layout for mouse hit-testing.
    fn draw(&mut self) -> Result<(), AppError> {
        let app = &mut self.app;
        let chip_areas = &mut self.chip_areas;
        self.terminal.draw(|frame| {
            *chip_areas = render_app(frame, app).chips;
        })?;
        Ok(())
    }
}

impl<B> Drop for TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    fn drop(&mut self) {
        // Restore the terminal even when run() exits via an error
        let _ = disable_raw_mode();
        let mut stdout = io::stdout();
        let _ = stdout.execute(DisableMouseCapture);
        let _ = stdout.execute(LeaveAlternateScreen);
    }
}


#[cfg(test)]
#[path = "render_tests.rs"]
mod render_tests;
