// Legend - the fixed category enumeration as a static color/label list

use career_map::Category;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::hex_color;

pub fn render_legend(f: &mut Frame, area: Rect) {
    let lines: Vec<Line> = Category::ALL
        .iter()
        .map(|category| {
            Line::from(vec![
                Span::styled("● ", Style::default().fg(hex_color(category.color()))),
                Span::styled(category.label(), Style::default().fg(Color::Gray)),
            ])
        })
        .collect();

    let legend = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Legend "),
    );

    f.render_widget(legend, area);
}
