//! Main TUI application state and logic

use crate::engine::arithmetic::ArithOp;
use crate::engine::errors::EvalError;
use crate::engine::programmer::{NumberBase, ProgrammerOp};
use crate::engine::scientific::SciFunction;
use crate::session::{Mode, Session};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};

/// How long a recorded error stays on screen before it is dropped
const ERROR_DISPLAY_WINDOW: Duration = Duration::from_secs(3);

/// The main application state
pub struct App {
    /// The calculator session being driven
    pub session: Session,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// When the currently shown error was recorded
    error_shown_at: Option<Instant>,
}

impl App {
    /// Create a new app around the given session
    pub fn new(session: Session) -> Self {
        App {
            session,
            should_quit: false,
            status_message: String::from("Ready"),
            error_shown_at: None,
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            // Expire the transient error banner
            if let Some(shown_at) = self.error_shown_at {
                if shown_at.elapsed() >= ERROR_DISPLAY_WINDOW {
                    self.session.clear_error();
                    self.error_shown_at = None;
                }
            }

            // Use poll with timeout so the error expiry keeps ticking
            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Render the UI
    fn render(&self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // mode tabs
                Constraint::Length(5), // display
                Constraint::Min(0),    // key reference
                Constraint::Length(1), // status bar
            ])
            .split(frame.area());

        super::panes::render_mode_bar(frame, chunks[0], self.session.mode());
        super::panes::render_display_pane(frame, chunks[1], &self.session);
        super::panes::render_reference_pane(frame, chunks[2], &self.session);
        super::panes::render_status_bar(frame, chunks[3], &self.session, &self.status_message);
    }

    /// Handle keyboard events
    fn handle_key_event(&mut self, key: KeyEvent) {
        let before = self.session.last_error().cloned();
        self.dispatch_key(key);
        self.sync_error_timer(before);
    }

    fn dispatch_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            KeyCode::Tab => {
                let mode = self.session.mode().next();
                self.session.set_mode(mode);
                self.status_message = format!("{} mode", mode.label());
            }
            KeyCode::Esc => {
                self.session.press_clear();
                self.status_message = String::from("Cleared");
            }
            KeyCode::Backspace => {
                self.session.press_backspace();
            }
            KeyCode::Enter => {
                self.evaluate();
            }
            KeyCode::Char('=') => {
                self.evaluate();
            }
            KeyCode::Left | KeyCode::Right => {
                if self.session.mode() == Mode::Converter {
                    self.session.cycle_category();
                    self.status_message = format!("Category: {}", self.session.category().name);
                }
            }
            KeyCode::Char(c @ '0'..='9') => {
                self.session.press_digit(c);
            }
            KeyCode::Char('.') | KeyCode::Char(',') => {
                self.session.press_decimal();
            }
            KeyCode::Char(c) => {
                self.handle_mode_char(c);
            }
            _ => {}
        }
    }

    /// Enter and `=` evaluate in the numeric modes and convert in
    /// converter mode.
    fn evaluate(&mut self) {
        if self.session.mode() == Mode::Converter {
            self.session.apply_convert();
        } else {
            self.session.press_equals();
        }
    }

    /// Mode-specific character handling beyond digits and the decimal
    /// point.
    fn handle_mode_char(&mut self, c: char) {
        // The numeric modes share the arithmetic operator keys.
        if self.session.mode() != Mode::Converter {
            if let Some(op) = ArithOp::from_char(c) {
                self.session.press_operator(op);
                return;
            }
        }

        match self.session.mode() {
            Mode::Scientific => {
                if let Some(func) = sci_key(c) {
                    self.session.apply_scientific(func);
                    if self.session.last_error().is_none() {
                        let verb = if func.is_constant() { "inserted" } else { "applied" };
                        self.status_message = format!("{} {}", func.label(), verb);
                    }
                }
            }
            Mode::Programmer => {
                self.handle_programmer_char(c);
            }
            Mode::Converter => match c {
                'f' => {
                    self.session.cycle_from_unit();
                    self.status_message = format!("From: {}", self.session.from_unit().name);
                }
                't' => {
                    self.session.cycle_to_unit();
                    self.status_message = format!("To: {}", self.session.to_unit().name);
                }
                's' => {
                    self.session.swap_units();
                    self.status_message = format!(
                        "{} → {}",
                        self.session.from_unit().symbol,
                        self.session.to_unit().symbol
                    );
                }
                _ => {}
            },
            Mode::Standard => {}
        }
    }

    /// Programmer mode: lowercase hex digits, uppercase base switches,
    /// and the bitwise operator keys.
    fn handle_programmer_char(&mut self, c: char) {
        match c {
            'a'..='f' => self.session.press_digit(c),
            'H' => self.switch_base(NumberBase::Hex),
            'D' => self.switch_base(NumberBase::Dec),
            'O' => self.switch_base(NumberBase::Oct),
            'B' => self.switch_base(NumberBase::Bin),
            '&' => self.apply_bitwise(ProgrammerOp::And),
            '|' => self.apply_bitwise(ProgrammerOp::Or),
            '^' => self.apply_bitwise(ProgrammerOp::Xor),
            '~' => self.apply_bitwise(ProgrammerOp::Not),
            '<' => self.apply_bitwise(ProgrammerOp::ShiftLeft),
            '>' => self.apply_bitwise(ProgrammerOp::ShiftRight),
            _ => {}
        }
    }

    fn apply_bitwise(&mut self, op: ProgrammerOp) {
        self.session.apply_programmer(op);
        if self.session.last_error().is_none() {
            self.status_message = format!("{} applied", op.label());
        }
    }

    fn switch_base(&mut self, base: NumberBase) {
        self.session.apply_programmer(ProgrammerOp::SetBase(base));
        if self.session.last_error().is_none() {
            self.status_message = format!("Base: {}", base.label());
        }
    }

    /// Start or keep the error display window in step with the session.
    /// A repeat of the identical error keeps its original window.
    fn sync_error_timer(&mut self, before: Option<EvalError>) {
        match self.session.last_error() {
            None => self.error_shown_at = None,
            Some(err) if before.as_ref() != Some(err) => {
                self.error_shown_at = Some(Instant::now());
            }
            Some(_) => {}
        }
    }
}

/// Scientific mode key map
fn sci_key(c: char) -> Option<SciFunction> {
    match c {
        's' => Some(SciFunction::Sin),
        'c' => Some(SciFunction::Cos),
        't' => Some(SciFunction::Tan),
        'r' => Some(SciFunction::Sqrt),
        'x' => Some(SciFunction::Square),
        'z' => Some(SciFunction::Cube),
        'l' => Some(SciFunction::Log),
        'n' => Some(SciFunction::Ln),
        'p' => Some(SciFunction::Pi),
        'e' => Some(SciFunction::E),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sci_key_covers_every_function() {
        let mapped: Vec<SciFunction> = "sctrxzlnpe".chars().filter_map(sci_key).collect();
        assert_eq!(mapped.len(), SciFunction::ALL.len());
        for func in SciFunction::ALL {
            assert!(mapped.contains(&func));
        }
    }

    #[test]
    fn test_sci_key_ignores_unmapped() {
        assert_eq!(sci_key('q'), None);
        assert_eq!(sci_key('1'), None);
    }
}
