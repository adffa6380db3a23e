use std::env;
use std::error::Error;
use std::io::{stdout, Stdout, Write};
use std::time::Duration;

use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
    MouseButton, MouseEvent, MouseEventKind,
};
use crossterm::execute;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Rect;
use ratatui::Terminal;

use crate::config::{BUTTONS_ENV, DEFAULT_BUTTON_COUNT, MAX_BUTTONS};
use crate::grid::{ButtonGrid, Dispatcher, Flow, UiEvent};
use crate::platform;
use crate::ui::{button_at, draw_window};

type Term = Terminal<CrosstermBackend<Stdout>>;

pub fn run() -> Result<(), Box<dyn Error>> {
    let mut tui = TuiGuard::new()?;
    run_loop(tui.terminal_mut())
}

fn run_loop(terminal: &mut Term) -> Result<(), Box<dyn Error>> {
    let mut grid = ButtonGrid::new(button_count(env::var(BUTTONS_ENV).ok().as_deref()));
    let mut dispatcher = Dispatcher::new();
    let environment = platform::environment();

    loop {
        terminal.draw(|frame| draw_window(frame, &grid, environment))?;

        if event::poll(Duration::from_millis(50))? {
            let area = terminal.size()?;
            if let Some(ev) = translate(event::read()?, area, grid.len()) {
                dispatcher.push(ev);
            }
        }

        if dispatcher.drain(&mut grid)? == Flow::Quit {
            break;
        }
    }
    Ok(())
}

struct TuiGuard {
    terminal: Term,
}

impl TuiGuard {
    fn new() -> Result<Self, Box<dyn Error>> {
        enable_raw_mode()?;
        // Raw mode is already on here, so any later failure has to undo it.
        let terminal = undo_on_err(enter_screen, || restore_terminal(&mut stdout()))?;
        Ok(Self { terminal })
    }

    fn terminal_mut(&mut self) -> &mut Term {
        &mut self.terminal
    }
}

impl Drop for TuiGuard {
    fn drop(&mut self) {
        restore_terminal(self.terminal.backend_mut());
        let _ = self.terminal.show_cursor();
    }
}

fn enter_screen() -> Result<Term, Box<dyn Error>> {
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.hide_cursor()?;
    Ok(terminal)
}

fn restore_terminal<W: Write>(out: &mut W) {
    let _ = disable_raw_mode();
    let _ = execute!(out, DisableMouseCapture, LeaveAlternateScreen);
}

fn undo_on_err<T, E>(step: impl FnOnce() -> Result<T, E>, undo: impl FnOnce()) -> Result<T, E> {
    let result = step();
    if result.is_err() {
        undo();
    }
    result
}

fn button_count(raw: Option<&str>) -> usize {
    raw.and_then(|s| s.trim().parse::<usize>().ok())
        .filter(|n| (1..=MAX_BUTTONS).contains(n))
        .unwrap_or(DEFAULT_BUTTON_COUNT)
}

fn translate(ev: Event, area: Rect, count: usize) -> Option<UiEvent> {
    match ev {
        Event::Key(KeyEvent {
            code,
            kind: KeyEventKind::Press,
            ..
        }) => match code {
            KeyCode::Char('q') | KeyCode::Esc => Some(UiEvent::Quit),
            KeyCode::Char(c) => c
                .to_digit(10)
                .map(|d| d as usize)
                .filter(|&d| d < count)
                .map(UiEvent::Activate),
            _ => None,
        },
        Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            ..
        }) => button_at(area, count, column, row).map(UiEvent::Activate),
        _ => None,
    }
}
