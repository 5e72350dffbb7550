use ratatui::{
    Frame,
    layout::{Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
};

use crate::app::{TILE_H, TILE_W};
use crate::game::Game;
use crate::input::DragSource;
use make10_core::{Board, LEVELS, Layout, Pos};

// ── Constants ────────────────────────────────────────────────────────────────

/// Digit colors, one per value 1..=9.
const DIGIT_COLORS: [Color; 9] = [
    Color::Rgb(0x2e, 0x8b, 0x57),
    Color::Rgb(0xff, 0xe4, 0xc4),
    Color::Rgb(0xff, 0x00, 0x00),
    Color::Rgb(0xff, 0xff, 0x00),
    Color::Rgb(0x00, 0xff, 0x00),
    Color::Rgb(0xe9, 0x96, 0x7a),
    Color::Rgb(0x00, 0xbf, 0xff),
    Color::Rgb(0xff, 0x80, 0x0d),
    Color::Rgb(0xff, 0x14, 0x93),
];

const DEBUG_COLOR: Color = Color::Rgb(0xff, 0x80, 0x0d);

// ── Public entry point ───────────────────────────────────────────────────────

pub fn draw(f: &mut Frame, game: &Game) {
    let area = f.area();
    let layout = Layout::new(area.width as i32, area.height as i32, TILE_W, TILE_H);
    let board = game.board();

    draw_board(f, board, &layout, game.debug);

    if let Some(drag) = game.input.is_dragging() {
        draw_selection(f, drag.start, drag.end);
    }

    if let Some(p) = game.input.keys.pointer() {
        draw_pointer(f, p);
    }

    draw_status(f, game);

    if game.debug {
        draw_log(f, game);
    }
}

// ── Board ────────────────────────────────────────────────────────────────────

fn draw_board(f: &mut Frame, board: &Board, layout: &Layout, debug: bool) {
    let area = f.area();

    for x in 0..board.w() {
        for y in 0..board.h() {
            let (value, cleared) = board.at(x, y);

            if debug {
                let o = board.cell_origin(layout, x, y);
                let far = Pos::new(o.x + layout.tile_w - 1, o.y + layout.tile_h - 1);
                if let Some(tile) = span_rect(o, far, area) {
                    f.render_widget(
                        Block::bordered().style(Style::default().fg(DEBUG_COLOR)),
                        tile,
                    );
                }
            }

            let c = board.cell_center(layout, x, y);
            if c.x < 0 || c.y < 0 {
                continue;
            }
            let pos = Position::new(c.x as u16, c.y as u16);
            if !area.contains(pos) {
                continue;
            }

            let style = if cleared {
                Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM)
            } else {
                Style::default()
                    .fg(DIGIT_COLORS[(value - 1) as usize])
                    .add_modifier(Modifier::BOLD)
            };
            let digit = Paragraph::new(Span::styled(value.to_string(), style));
            f.render_widget(digit, Rect::new(pos.x, pos.y, 1, 1));
        }
    }
}

// ── Selection rectangle and pointer ──────────────────────────────────────────

fn draw_selection(f: &mut Frame, a: Pos, b: Pos) {
    if let Some(rect) = span_rect(a, b, f.area()) {
        f.render_widget(
            Block::bordered().style(Style::default().fg(Color::White)),
            rect,
        );
    }
}

fn draw_pointer(f: &mut Frame, p: Pos) {
    if p.x < 0 || p.y < 0 {
        return;
    }
    let pos = Position::new(p.x as u16, p.y as u16);
    if !f.area().contains(pos) {
        return;
    }
    let marker = Paragraph::new(Span::styled(
        "+",
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD | Modifier::REVERSED),
    ));
    f.render_widget(marker, Rect::new(pos.x, pos.y, 1, 1));
}

// ── Status overlay ───────────────────────────────────────────────────────────

fn draw_status(f: &mut Frame, game: &Game) {
    let area = f.area();
    if area.height == 0 {
        return;
    }

    let lines = vec![
        Line::from(vec![
            Span::styled(
                format!("Level {}/{}", game.level + 1, LEVELS.len()),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!(
                    "  {}  moves {}  {} left",
                    game.rule.label(),
                    game.history.len() - 1,
                    game.board().remaining()
                ),
                Style::default().fg(Color::Gray),
            ),
        ]),
        Line::from(vec![
            Span::styled("drag", Style::default().fg(Color::Yellow)),
            Span::styled("/", Style::default().fg(Color::DarkGray)),
            Span::styled("arrows+space", Style::default().fg(Color::Yellow)),
            Span::styled(" select  ", Style::default().fg(Color::Gray)),
            Span::styled("n", Style::default().fg(Color::Yellow)),
            Span::styled(" next  ", Style::default().fg(Color::Gray)),
            Span::styled("p", Style::default().fg(Color::Yellow)),
            Span::styled(" prev  ", Style::default().fg(Color::Gray)),
            Span::styled("u", Style::default().fg(Color::Yellow)),
            Span::styled(" undo  ", Style::default().fg(Color::Gray)),
            Span::styled("d", Style::default().fg(Color::Yellow)),
            Span::styled(" debug  ", Style::default().fg(Color::Gray)),
            Span::styled("q", Style::default().fg(Color::Yellow)),
            Span::styled(" quit", Style::default().fg(Color::Gray)),
        ]),
    ];

    let height = (lines.len() as u16).min(area.height);
    let status = Paragraph::new(lines);
    f.render_widget(status, Rect::new(0, 0, area.width, height));
}

// ── Debug log ────────────────────────────────────────────────────────────────

fn draw_log(f: &mut Frame, game: &Game) {
    let area = f.area();
    if area.height <= 3 {
        return;
    }

    let lines: Vec<Line> = game
        .log_lines()
        .iter()
        .map(|l| Line::from(Span::styled(l.clone(), Style::default().fg(DEBUG_COLOR))))
        .collect();

    let log_area = Rect::new(0, 3, area.width.min(44), area.height - 3);
    f.render_widget(Paragraph::new(lines), log_area);
}

// ── Helpers ──────────────────────────────────────────────────────────────────

/// Screen rectangle spanning two corners inclusive, clamped to the frame.
/// None when the span lies entirely outside it.
fn span_rect(a: Pos, b: Pos, area: Rect) -> Option<Rect> {
    let lx = a.x.min(b.x).max(0);
    let ly = a.y.min(b.y).max(0);
    let rx = a.x.max(b.x).min(area.width as i32 - 1);
    let ry = a.y.max(b.y).min(area.height as i32 - 1);
    if lx > rx || ly > ry {
        return None;
    }
    Some(Rect::new(
        lx as u16,
        ly as u16,
        (rx - lx + 1) as u16,
        (ry - ly + 1) as u16,
    ))
}
