use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Wrap};

use crate::config::{GameState, Settings, BUTTON_H, BUTTON_W, INFO_W, VERSION};
use crate::grid::ButtonGrid;
use crate::platform::Environment;

const BUTTON_PAD: u16 = 2;

pub fn draw_window(frame: &mut Frame, grid: &ButtonGrid, env: &Environment) {
    let area = frame.size();

    let rects = button_rects(area, grid.len());
    if rects.len() < grid.len() {
        let msg = Paragraph::new(format!(
            "RESIZE WINDOW (min height: {})",
            min_height(grid.len())
        ))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(window_block());
        frame.render_widget(msg, area);
        return;
    }

    let cabinet = window_block();
    let (_, sidebar_area) = split_window(cabinet.inner(area));
    frame.render_widget(cabinet, area);

    for (button, rect) in grid.buttons().iter().zip(rects) {
        let style = Style::default().bg(button.bg).fg(Color::Black);
        let widget = Paragraph::new(button.label.as_str())
            .alignment(Alignment::Center)
            .style(style)
            .block(Block::default().borders(Borders::ALL).style(style));
        frame.render_widget(widget, rect);
    }

    draw_sidebar(frame, env, sidebar_area);
}

// Cabinet border (2) + gap above the first button (1) + the buttons.
fn min_height(count: usize) -> usize {
    3 + count * usize::from(BUTTON_H)
}

fn window_block() -> Block<'static> {
    Block::default()
        .title(format!("SWEEPER {VERSION}"))
        .border_type(BorderType::Thick)
        .borders(Borders::ALL)
        .title_alignment(Alignment::Left)
}

fn split_window(inner: Rect) -> (Rect, Rect) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(BUTTON_W + BUTTON_PAD * 2), Constraint::Length(INFO_W)])
        .split(inner);
    (cols[0], cols[1])
}

// Buttons past the bottom edge are left out.
pub fn button_rects(area: Rect, count: usize) -> Vec<Rect> {
    let (column, _) = split_window(window_block().inner(area));
    let width = BUTTON_W.min(column.width.saturating_sub(BUTTON_PAD));
    let mut rects = Vec::with_capacity(count);
    let mut y = column.y + 1;
    for _ in 0..count {
        if width == 0 || y + BUTTON_H > column.bottom() {
            break;
        }
        rects.push(Rect {
            x: column.x + BUTTON_PAD,
            y,
            width,
            height: BUTTON_H,
        });
        y += BUTTON_H;
    }
    rects
}

// Nothing is clickable while the window is too small to show every button.
pub fn button_at(area: Rect, count: usize, column: u16, row: u16) -> Option<usize> {
    let rects = button_rects(area, count);
    if rects.len() < count {
        return None;
    }
    let hit = Rect {
        x: column,
        y: row,
        width: 1,
        height: 1,
    };
    rects.iter().position(|rect| rect.intersects(hit))
}

fn draw_sidebar(frame: &mut Frame, env: &Environment, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(13), Constraint::Length(4)].as_ref())
        .split(area);

    let settings = Settings::default();
    let base = env
        .base_path
        .as_deref()
        .map_or_else(|| "-".to_string(), |p| p.display().to_string());
    let check = settings
        .validate()
        .map_or_else(|e| e.to_string(), |()| "ok".to_string());
    let info = Paragraph::new(format!(
        "STATE {}\nPLATFORM {}\nRIGHT BTN {}\nPACKAGED {}\nBASE {}\n\nBOARD {}x{}\nMINES {}\nDRAG {}\nBTN {}px\nCHECK {}",
        GameState::Ready,
        env.platform,
        env.right_btn_num,
        if env.packaged { "yes" } else { "no" },
        base,
        settings.dims.0,
        settings.dims.1,
        settings.mines,
        if settings.drag_select { "on" } else { "off" },
        settings.btn_size,
        check,
    ))
    .block(Block::default().title("INFO").borders(Borders::ALL))
    .wrap(Wrap { trim: true });
    frame.render_widget(info, chunks[0]);

    let controls = Paragraph::new("click / 0-9 press\nq quit")
        .block(Block::default().title("CONTROLS").borders(Borders::ALL))
        .wrap(Wrap { trim: true });
    frame.render_widget(controls, chunks[1]);
}
