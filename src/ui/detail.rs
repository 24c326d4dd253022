// 💬 Detail dialog renderer - modal popup over the map
// All content decisions (tabs, expansion) live in career_map::dialog

use career_map::{Business, Excursion, Tab};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Tabs, Wrap},
    Frame,
};

use super::{hex_color, App};

pub fn render_dialog(f: &mut Frame, app: &mut App) {
    let Some(business) = app.selected_business().cloned() else {
        return;
    };

    let area = centered_rect(72, 84, f.size());
    app.dialog_area = area;

    let accent = hex_color(&business.color);

    f.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(accent))
        .title(format!(" {} ", business.name));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Badge + description
            Constraint::Length(2), // Tab strip
            Constraint::Min(0),    // Active tab content
        ])
        .split(inner);

    render_dialog_header(f, chunks[0], &business, accent);
    render_tab_strip(f, chunks[1], app, &business, accent);
    render_tab_content(f, chunks[2], app, &business, accent);
}

fn render_dialog_header(f: &mut Frame, area: Rect, business: &Business, accent: Color) {
    let mut badge_spans = vec![Span::styled(
        format!(" {} ", business.subcategory),
        Style::default()
            .fg(Color::White)
            .bg(accent)
            .add_modifier(Modifier::BOLD),
    )];

    if !business.excursion_years.is_empty() {
        let years: Vec<String> = business.excursion_years.iter().map(u16::to_string).collect();
        badge_spans.push(Span::raw("  "));
        badge_spans.push(Span::styled(
            format!("Экскурсии: {}", years.join(" · ")),
            Style::default().fg(Color::DarkGray),
        ));
    }

    let lines = vec![
        Line::from(badge_spans),
        Line::from(""),
        Line::from(Span::styled(
            business.description.clone(),
            Style::default().fg(Color::Gray),
        )),
    ];

    let header = Paragraph::new(lines).wrap(Wrap { trim: false });
    f.render_widget(header, area);
}

fn render_tab_strip(f: &mut Frame, area: Rect, app: &App, business: &Business, accent: Color) {
    let tabs = Tab::available(business);
    let active = app.dialog.tab();
    let selected = tabs.iter().position(|t| *t == active).unwrap_or(0);

    let titles: Vec<Line> = tabs.iter().map(|t| Line::from(t.title())).collect();

    let strip = Tabs::new(titles)
        .select(selected)
        .style(Style::default().fg(Color::DarkGray))
        .highlight_style(
            Style::default()
                .fg(accent)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        )
        .divider(" │ ");

    f.render_widget(strip, area);
}

fn render_tab_content(f: &mut Frame, area: Rect, app: &App, business: &Business, accent: Color) {
    let lines = match app.dialog.tab() {
        Tab::Excursions => excursion_lines(app, business, accent),
        Tab::Technologies => technology_lines(business, accent),
        Tab::History => history_lines(business, accent),
        Tab::Testimonials => testimonial_lines(business, accent),
        Tab::Careers => career_lines(business, accent),
    };

    let content = Paragraph::new(lines).wrap(Wrap { trim: false });
    f.render_widget(content, area);
}

fn excursion_lines(app: &App, business: &Business, accent: Color) -> Vec<Line<'static>> {
    let cursor = app.dialog.cursor();
    let expanded = app.dialog.expanded();
    let mut lines = Vec::new();

    for (index, excursion) in business.excursions.iter().enumerate() {
        let is_under_cursor = index == cursor;
        let is_expanded = expanded == Some(index);

        let marker = if is_under_cursor { "→ " } else { "  " };
        let mut spans = vec![
            Span::styled(marker.to_string(), Style::default().fg(accent)),
            Span::styled(
                format!("{}. ", index + 1),
                Style::default().fg(accent).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                excursion.text().to_string(),
                if is_under_cursor {
                    Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::Gray)
                },
            ),
        ];

        if excursion.has_image() {
            spans.push(Span::styled(" 📷", Style::default().fg(Color::Yellow)));
        }
        lines.push(Line::from(spans));

        if let Excursion::Detailed { image_url: Some(url), .. } = excursion {
            if is_expanded {
                lines.push(Line::from(vec![
                    Span::raw("       "),
                    Span::styled("🖼 ".to_string(), Style::default().fg(Color::Yellow)),
                    Span::styled(url.clone(), Style::default().fg(Color::DarkGray)),
                ]));
            } else if is_under_cursor {
                lines.push(Line::from(Span::styled(
                    "       Нажмите Enter, чтобы увидеть фото",
                    Style::default()
                        .fg(Color::DarkGray)
                        .add_modifier(Modifier::ITALIC),
                )));
            }
        }

        lines.push(Line::from(""));
    }

    lines
}

fn technology_lines(business: &Business, accent: Color) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for tech in &business.technologies {
        lines.push(Line::from(vec![
            Span::styled("⚙ ".to_string(), Style::default().fg(accent)),
            Span::styled(
                tech.name.clone(),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ),
        ]));
        lines.push(Line::from(Span::styled(
            format!("   {}", tech.description),
            Style::default().fg(Color::Gray),
        )));
        lines.push(Line::from(""));
    }
    lines
}

fn history_lines(business: &Business, accent: Color) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for item in &business.history {
        let mut title_spans = Vec::new();
        if let Some(year) = &item.year {
            title_spans.push(Span::styled(
                format!("[{}] ", year),
                Style::default().fg(accent).add_modifier(Modifier::BOLD),
            ));
        }
        title_spans.push(Span::styled(
            item.title.clone(),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ));
        lines.push(Line::from(title_spans));
        lines.push(Line::from(Span::styled(
            format!("   {}", item.description),
            Style::default().fg(Color::Gray),
        )));
        lines.push(Line::from(""));
    }
    lines
}

fn testimonial_lines(business: &Business, accent: Color) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for testimonial in &business.testimonials {
        lines.push(Line::from(Span::styled(
            format!("«{}»", testimonial.text),
            Style::default().fg(Color::Gray).add_modifier(Modifier::ITALIC),
        )));

        let mut author_spans = vec![
            Span::styled("— ".to_string(), Style::default().fg(accent)),
            Span::styled(testimonial.author.clone(), Style::default().fg(Color::White)),
        ];
        if let Some(group) = &testimonial.group {
            author_spans.push(Span::styled(
                format!(", {}", group),
                Style::default().fg(Color::DarkGray),
            ));
        }
        lines.push(Line::from(author_spans));
        lines.push(Line::from(""));
    }
    lines
}

fn career_lines(business: &Business, accent: Color) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled(
            "Профессии и карьерные возможности",
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Специальности техникума, которые откроют вам путь на это предприятие",
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
    ];

    let mut badges = Vec::new();
    for profession in &business.professions {
        badges.push(Span::styled(
            format!(" {} ", profession),
            Style::default().fg(accent).add_modifier(Modifier::REVERSED),
        ));
        badges.push(Span::raw("  "));
    }
    lines.push(Line::from(badges));

    lines
}

/// Rect centered in `r`, sized as a percentage of it
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
