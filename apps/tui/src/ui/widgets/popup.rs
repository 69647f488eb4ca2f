use ratatui::layout::Rect;
use ratatui::prelude::Buffer;
use ratatui::widgets::Widget;

pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = ratatui::layout::Layout::default()
        .direction(ratatui::layout::Direction::Vertical)
        .constraints([
            ratatui::layout::Constraint::Percentage((100 - percent_y) / 2),
            ratatui::layout::Constraint::Percentage(percent_y),
            ratatui::layout::Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    let horizontal_layout = ratatui::layout::Layout::default()
        .direction(ratatui::layout::Direction::Horizontal)
        .constraints([
            ratatui::layout::Constraint::Percentage((100 - percent_x) / 2),
            ratatui::layout::Constraint::Percentage(percent_x),
            ratatui::layout::Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1]);

    horizontal_layout[1]
}

/// Places a small popup next to a pointer cell, nudged back inside the
/// frame when it would overflow.
pub fn anchored_rect(column: u16, row: u16, width: u16, height: u16, frame: Rect) -> Rect {
    let mut x = column.saturating_add(2);
    let mut y = row.saturating_sub(1);

    if x + width > frame.width {
        x = column.saturating_sub(width + 1);
    }
    if y + height > frame.height {
        y = frame.height.saturating_sub(height);
    }

    Rect {
        x,
        y,
        width: width.min(frame.width),
        height: height.min(frame.height),
    }
}

pub struct ClearWidget;

impl Widget for ClearWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        ratatui::widgets::Clear.render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchored_rect_stays_inside_the_frame() {
        let frame = Rect::new(0, 0, 80, 24);
        let near_edge = anchored_rect(78, 23, 20, 3, frame);
        assert!(near_edge.x + near_edge.width <= frame.width);
        assert!(near_edge.y + near_edge.height <= frame.height);
    }
}
