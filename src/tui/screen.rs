use std::time::Duration;

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::clock::{GameStatus, Side};
use crate::controller::{Controller, Host};
use crate::layout::ButtonKind;
use crate::render::DisplayList;
use crate::tui::canvas::{self, ClockCanvas};
use crate::tui::event::{AppEvent, EventHandler};
use crate::tui::Tui;
use crate::util::now_epoch;

/// In a terminal, "fullscreen" means dropping the border and key hints so the
/// clock faces get every cell.
#[derive(Default)]
struct TerminalHost {
    fullscreen: bool,
}

impl Host for TerminalHost {
    fn toggle_fullscreen(&mut self) -> Result<()> {
        self.fullscreen = !self.fullscreen;
        log::debug!("fullscreen {}", if self.fullscreen { "on" } else { "off" });
        Ok(())
    }
}

/// What a key press asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum KeyAction {
    Tap(Side),
    TapRunning,
    Button(ButtonKind),
    Quit,
}

fn key_action(key: &KeyEvent) -> Option<KeyAction> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    match key.code {
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('z') => Some(KeyAction::Tap(Side::Left)),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('m') => Some(KeyAction::Tap(Side::Right)),
        KeyCode::Char(' ') => Some(KeyAction::TapRunning),
        KeyCode::Char('p') => Some(KeyAction::Button(ButtonKind::Pause)),
        KeyCode::Char('r') => Some(KeyAction::Button(ButtonKind::Reset)),
        KeyCode::Char('f') => Some(KeyAction::Button(ButtonKind::Fullscreen)),
        KeyCode::Char('q') | KeyCode::Esc => Some(KeyAction::Quit),
        _ => None,
    }
}

/// Where the clock canvas goes, and the key-hint row if there is one.
fn screen_areas(area: Rect, fullscreen: bool) -> (Rect, Option<Rect>) {
    if fullscreen {
        return (area, None);
    }
    let inner = Block::default().borders(Borders::ALL).inner(area);
    let rows = Layout::vertical([
        Constraint::Min(1),    // clock faces
        Constraint::Length(1), // key hint
    ])
    .split(inner);
    (rows[0], Some(rows[1]))
}

/// Run the clock until the user quits.
pub fn run(terminal: &mut Tui, controller: &mut Controller, tick_rate: Duration) -> Result<()> {
    let events = EventHandler::new(tick_rate);
    let mut host = TerminalHost::default();
    let mut list = DisplayList::new();

    loop {
        let size = terminal.size()?;
        let area = Rect::new(0, 0, size.width, size.height);
        let (clock_area, hint_area) = screen_areas(area, host.fullscreen);
        let (width, height) = canvas::viewport_size(clock_area);
        controller.resize(width, height);
        controller.frame(now_epoch(), &mut list);

        let status = status_line(controller);
        terminal.draw(|frame| {
            if let Some(hint_area) = hint_area {
                let outer = Block::default()
                    .title(" Chess Clock ")
                    .title_bottom(Line::from(status.clone()).right_aligned())
                    .borders(Borders::ALL)
                    .style(Style::default().fg(Color::White).bg(Color::Black));
                frame.render_widget(outer, area);
                frame.render_widget(Paragraph::new(hint_line()), hint_area);
            }
            frame.render_widget(ClockCanvas::new(&list), clock_area);
        })?;

        match events.next()? {
            AppEvent::Key(key) => match key_action(&key) {
                Some(KeyAction::Quit) => return Ok(()),
                Some(KeyAction::Tap(side)) => {
                    controller.tap(side, now_epoch());
                }
                Some(KeyAction::TapRunning) => {
                    controller.tap_running(now_epoch());
                }
                Some(KeyAction::Button(kind)) => controller.press(kind, now_epoch(), &mut host),
                None => {}
            },
            AppEvent::Press(column, row) => {
                let (x, y) = canvas::cell_to_viewport(clock_area, column, row);
                controller.pointer_down(x, y, now_epoch(), &mut host);
            }
            AppEvent::Resize(_, _) | AppEvent::Tick => {}
        }
    }
}

fn status_line(controller: &Controller) -> String {
    let game = controller.game();
    match game.status() {
        GameStatus::NotStarted => " Tap your side to start the opponent's clock ".into(),
        GameStatus::InProgress => match game.running_side() {
            Some(side) => format!(" {} to move ", side.label()),
            None => " Paused ".into(),
        },
        GameStatus::GameOver => match game.flagged_side() {
            Some(side) => format!(" {} flag fell ", side.label()),
            None => " Game over ".into(),
        },
    }
}

fn hint_line() -> Line<'static> {
    let key = |k: &'static str| {
        Span::styled(k, Style::default().fg(Color::Green).add_modifier(Modifier::BOLD))
    };
    Line::from(vec![
        key("  [←/a]"),
        Span::raw(" left  "),
        key("[→/l]"),
        Span::raw(" right  "),
        key("[Space]"),
        Span::raw(" switch  "),
        key("[p]"),
        Span::raw(" pause  "),
        key("[r]"),
        Span::raw(" reset  "),
        key("[f]"),
        Span::raw(" fullscreen  "),
        Span::styled("[q]", Style::default().fg(Color::Red)),
        Span::raw(" quit"),
    ])
}
