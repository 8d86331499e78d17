//! Layout calculations for the quiz screens

use ratatui::layout::{Constraint, Layout, Rect};

/// Layout for the setup screen
pub struct SetupLayout {
    pub title_area: Rect,
    pub subject_area: Rect,
    pub level_area: Rect,
    pub count_area: Rect,
    pub hint_area: Rect,
}

impl SetupLayout {
    pub fn calculate(area: Rect) -> Self {
        let card = centered_rect_fixed(60, 24, area);
        let [title_area, subject_area, level_area, count_area, hint_area] =
            Layout::vertical([
                Constraint::Length(3),
                Constraint::Length(7),
                Constraint::Length(7),
                Constraint::Length(5),
                Constraint::Length(2),
            ])
            .areas(card);

        Self {
            title_area,
            subject_area,
            level_area,
            count_area,
            hint_area,
        }
    }
}

/// Layout for the quiz screen
pub struct QuizLayout {
    pub header_area: Rect,
    pub progress_area: Rect,
    pub question_area: Rect,
    pub hint_area: Rect,
}

impl QuizLayout {
    pub fn calculate(area: Rect) -> Self {
        let card = centered_rect_percent(70, 85, area);
        let [header_area, progress_area, question_area, hint_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Min(10),
            Constraint::Length(2),
        ])
        .areas(card);

        Self {
            header_area,
            progress_area,
            question_area,
            hint_area,
        }
    }
}

/// A centered rectangle with fixed dimensions, capped to the available area
pub fn centered_rect_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// A centered rectangle sized as a percentage of the available area
pub fn centered_rect_percent(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let width = area.width * percent_x / 100;
    let height = area.height * percent_y / 100;
    centered_rect_fixed(width, height, area)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect_caps_to_area() {
        let area = Rect::new(0, 0, 40, 10);
        let rect = centered_rect_fixed(100, 100, area);
        assert_eq!(rect.width, 40);
        assert_eq!(rect.height, 10);
    }

    #[test]
    fn test_centered_rect_is_centered() {
        let area = Rect::new(0, 0, 100, 40);
        let rect = centered_rect_fixed(60, 20, area);
        assert_eq!(rect.x, 20);
        assert_eq!(rect.y, 10);
    }
}
