use ratatui::layout::{Constraint, Direction, Layout, Rect};

#[derive(Debug, Clone)]
pub struct MainLayout {
    pub header_area: Rect,
    pub banner_area: Rect,
    pub nav_area: Rect,
    pub content_area: Rect,
    pub footer_area: Rect,
}

/// Shell frame. `banner_lines` is zero unless the offline or install
/// banners are showing.
pub fn create_main_layout(area: Rect, banner_lines: u16) -> MainLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),            // Header
            Constraint::Length(banner_lines), // Banners
            Constraint::Length(3),            // Navigation
            Constraint::Min(0),               // Content
            Constraint::Length(1),            // Footer
        ])
        .split(area);

    MainLayout {
        header_area: chunks[0],
        banner_area: chunks[1],
        nav_area: chunks[2],
        content_area: chunks[3],
        footer_area: chunks[4],
    }
}

pub fn create_two_column_layout(area: Rect, left_percentage: u16) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(left_percentage),
            Constraint::Percentage(100 - left_percentage),
        ])
        .split(area);

    (chunks[0], chunks[1])
}

pub fn create_two_row_layout(area: Rect, top_percentage: u16) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(top_percentage),
            Constraint::Percentage(100 - top_percentage),
        ])
        .split(area);

    (chunks[0], chunks[1])
}

/// Equal-width row of cells, used for stat card strips.
pub fn create_summary_layout(area: Rect, sections: usize) -> Vec<Rect> {
    if sections == 0 {
        return vec![];
    }

    let constraints: Vec<Constraint> = (0..sections)
        .map(|_| Constraint::Ratio(1, sections as u32))
        .collect();

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area)
        .to_vec()
}

/// Vertical stack: fixed heights for every section but the last, which
/// takes what is left.
pub fn create_stack_layout(area: Rect, fixed_heights: &[u16]) -> Vec<Rect> {
    let mut constraints: Vec<Constraint> = fixed_heights
        .iter()
        .map(|&height| Constraint::Length(height))
        .collect();
    constraints.push(Constraint::Min(0));

    Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area)
        .to_vec()
}

pub mod utils {
    use super::*;

    pub fn is_area_too_small(area: Rect, min_width: u16, min_height: u16) -> bool {
        area.width < min_width || area.height < min_height
    }
}
