use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::{App, MotionLabel};

pub fn render(frame: &mut Frame, app: &App) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(frame.area());

    render_gallery(frame, layout[0], app);
    render_status_bar(frame, layout[1], app);
}

/// Draw the visible window of the infinite card strip.
///
/// World column `scroller.current_x()` lands on the left edge of the area;
/// cards are laid out from there, wrapping modulo the item count. Cards cut
/// off by either edge are clipped to the area.
fn render_gallery(frame: &mut Frame, area: Rect, app: &App) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    let card_width = app.card_width as i32;
    let x = app.scroller.current_x();

    // First card starts left of (or at) the area edge.
    let mut screen_col = -x.rem_euclid(card_width);
    let mut world_col = x + screen_col;

    while screen_col < area.width as i32 {
        let left = screen_col.max(0);
        let right = (screen_col + card_width).min(area.width as i32);
        if right > left {
            let rect = Rect {
                x: area.x + left as u16,
                y: area.y,
                width: (right - left) as u16,
                height: area.height,
            };
            let label = app.item_at(world_col);
            let card = Paragraph::new(label.to_string())
                .alignment(Alignment::Center)
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .title(Span::styled(
                            format!(" {label} "),
                            Style::default().add_modifier(Modifier::BOLD),
                        )),
                );
            frame.render_widget(card, rect);
        }
        screen_col += card_width;
        world_col += card_width;
    }
}

fn render_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let motion_str = match app.motion {
        MotionLabel::Idle => "IDLE",
        MotionLabel::Scroll => "SCROLL",
        MotionLabel::Fling => "FLING",
    };

    let duration = app.scroller.duration();
    let duration_str = if duration.is_infinite() {
        "inf".to_string()
    } else {
        format!("{duration:.0}ms")
    };

    let status_text = format!(
        " {} | x: {} | v: {:.0} px/s | dur: {} | spin: {}",
        motion_str,
        app.scroller.current_x(),
        app.scroller.current_velocity(),
        duration_str,
        if app.spin_mode { "on" } else { "off" },
    );

    let help_hint = " q:quit h/l:scroll H/L:fling z:spin space:stop ";
    let padding_len = area
        .width
        .saturating_sub(status_text.len() as u16 + help_hint.len() as u16)
        as usize;

    let line = Line::from(vec![
        Span::styled(
            status_text,
            Style::default().fg(Color::Black).bg(Color::Gray),
        ),
        Span::styled(" ".repeat(padding_len), Style::default().bg(Color::Gray)),
        Span::styled(
            help_hint,
            Style::default().fg(Color::DarkGray).bg(Color::Gray),
        ),
    ]);

    frame.render_widget(Paragraph::new(line), area);
}
