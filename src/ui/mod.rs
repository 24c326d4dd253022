// 🖥️ Terminal UI - event loop and screen layout
// The map owns keyboard focus; the dialog owns the selection

mod detail;
mod legend;
mod map;

use anyhow::Result;
use career_map::{Business, Catalog, DialogState};
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, MouseButton, MouseEvent,
        MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame, Terminal,
};
use std::io;

/// Minimum terminal width to show the legend sidebar
const MIN_WIDTH_FOR_LEGEND: u16 = 110;

/// Width of the legend sidebar
const LEGEND_WIDTH: u16 = 30;

pub struct App {
    pub catalog: Catalog,
    pub dialog: DialogState,
    /// Keyboard focus across the markers, by catalog index
    pub focused: usize,
    /// Last rendered map widget area, for mouse hit testing
    pub map_area: Rect,
    /// Last rendered dialog area; clicks outside it close the dialog
    pub dialog_area: Rect,
}

impl App {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            dialog: DialogState::new(),
            focused: 0,
            map_area: Rect::default(),
            dialog_area: Rect::default(),
        }
    }

    pub fn focused_business(&self) -> Option<&Business> {
        self.catalog.get(self.focused)
    }

    pub fn selected_business(&self) -> Option<&Business> {
        self.dialog.selected_id().and_then(|id| self.catalog.find(id))
    }

    pub fn focus_next(&mut self) {
        let len = self.catalog.len();
        if len == 0 {
            return;
        }
        self.focused = (self.focused + 1) % len;
    }

    pub fn focus_previous(&mut self) {
        let len = self.catalog.len();
        if len == 0 {
            return;
        }
        self.focused = if self.focused == 0 { len - 1 } else { self.focused - 1 };
    }

    /// Open the dialog on the keyboard-focused marker
    pub fn open_focused(&mut self) {
        if let Some(id) = self.focused_business().map(|b| b.id.clone()) {
            self.dialog.open(&id);
        }
    }

    /// Open the dialog on a clicked marker and move focus to it
    pub fn open_at(&mut self, index: usize) {
        if let Some(id) = self.catalog.get(index).map(|b| b.id.clone()) {
            self.focused = index;
            self.dialog.open(&id);
        }
    }
}

pub fn run_ui(app: &mut App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run the app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("Error: {:?}", err);
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        match event::read()? {
            Event::Key(key) => {
                if app.dialog.is_open() {
                    handle_dialog_key(app, key.code);
                } else if handle_map_key(app, key.code) {
                    return Ok(());
                }
            }
            Event::Mouse(mouse) => handle_mouse(app, mouse),
            _ => {}
        }
    }
}

/// Key handling while no business is selected; returns true to quit
fn handle_map_key(app: &mut App, code: KeyCode) -> bool {
    match code {
        KeyCode::Char('q') | KeyCode::Esc => return true,
        KeyCode::Right | KeyCode::Down | KeyCode::Tab | KeyCode::Char('l') => app.focus_next(),
        KeyCode::Left | KeyCode::Up | KeyCode::BackTab | KeyCode::Char('h') => {
            app.focus_previous()
        }
        KeyCode::Enter => app.open_focused(),
        _ => {}
    }
    false
}

/// Key handling while the dialog is open
fn handle_dialog_key(app: &mut App, code: KeyCode) {
    let Some(business) = app.selected_business().cloned() else {
        // Selection outside the catalog: nothing to show, just close
        app.dialog.close();
        return;
    };

    match code {
        KeyCode::Char('q') | KeyCode::Esc => app.dialog.close(),
        KeyCode::Char('n') => app.dialog.advance(&app.catalog),
        KeyCode::Tab | KeyCode::Right => app.dialog.next_tab(&business),
        KeyCode::BackTab | KeyCode::Left => app.dialog.prev_tab(&business),
        KeyCode::Down | KeyCode::Char('j') => app.dialog.cursor_down(&business),
        KeyCode::Up | KeyCode::Char('k') => app.dialog.cursor_up(),
        KeyCode::Enter => app.dialog.toggle_expanded(&business),
        _ => {}
    }
}

fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    let MouseEventKind::Down(MouseButton::Left) = mouse.kind else {
        return;
    };

    if app.dialog.is_open() {
        // Backdrop click closes the dialog
        if !contains(app.dialog_area, mouse.column, mouse.row) {
            app.dialog.close();
        }
        return;
    }

    if let Some(index) = map::hit_test(app.map_area, &app.catalog, mouse.column, mouse.row) {
        app.open_at(index);
    }
}

fn contains(area: Rect, column: u16, row: u16) -> bool {
    column >= area.x
        && column < area.x + area.width
        && row >= area.y
        && row < area.y + area.height
}

fn ui(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Map + legend
            Constraint::Length(3), // Status bar
        ])
        .split(f.size());

    render_header(f, chunks[0], app);

    if f.size().width >= MIN_WIDTH_FOR_LEGEND {
        let content_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(0), Constraint::Length(LEGEND_WIDTH)])
            .split(chunks[1]);

        map::render_map(f, content_chunks[0], app);
        legend::render_legend(f, content_chunks[1]);
    } else {
        map::render_map(f, chunks[1], app);
    }

    render_status_bar(f, chunks[2], app);

    // Modal detail dialog on top of everything
    if app.dialog.is_open() {
        detail::render_dialog(f, app);
    }
}

fn render_header(f: &mut Frame, area: Rect, app: &App) {
    let spans = vec![
        Span::styled(
            "Карта профессионального пути",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  |  "),
        Span::styled(
            "Образовательные экскурсии на предприятия-партнёры техникума",
            Style::default().fg(Color::DarkGray),
        ),
        Span::raw("  |  "),
        Span::styled(
            format!("{} предприятий", app.catalog.len()),
            Style::default().fg(Color::White),
        ),
    ];

    let header = Paragraph::new(vec![Line::from(spans)]).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );

    f.render_widget(header, area);
}

fn render_status_bar(f: &mut Frame, area: Rect, app: &App) {
    let mut spans = Vec::new();

    if app.dialog.is_open() {
        spans.push(Span::styled("Tab", Style::default().fg(Color::Yellow)));
        spans.push(Span::raw(" Sections | "));
        spans.push(Span::styled("↑/↓", Style::default().fg(Color::Yellow)));
        spans.push(Span::raw(" Excursions | "));
        spans.push(Span::styled("Enter", Style::default().fg(Color::Yellow)));
        spans.push(Span::raw(" Photo | "));
        spans.push(Span::styled("n", Style::default().fg(Color::Yellow)));
        spans.push(Span::raw(" Next business | "));
        spans.push(Span::styled("Esc", Style::default().fg(Color::Red)));
        spans.push(Span::raw(" Close"));
    } else {
        if let Some(business) = app.focused_business() {
            spans.push(Span::styled(
                format!(" {} ", business.name),
                Style::default().fg(hex_color(&business.color)),
            ));
            spans.push(Span::raw("| "));
        }
        spans.push(Span::styled("Click", Style::default().fg(Color::Yellow)));
        spans.push(Span::raw(" Open marker | "));
        spans.push(Span::styled("←/→", Style::default().fg(Color::Yellow)));
        spans.push(Span::raw(" Focus | "));
        spans.push(Span::styled("Enter", Style::default().fg(Color::Yellow)));
        spans.push(Span::raw(" Open | "));
        spans.push(Span::styled("q", Style::default().fg(Color::Red)));
        spans.push(Span::raw(" Quit"));
    }

    let status_bar = Paragraph::new(vec![Line::from(spans)]).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White)),
    );

    f.render_widget(status_bar, area);
}

/// Parse a "#rrggbb" accent color; anything else falls back to white
pub(crate) fn hex_color(hex: &str) -> Color {
    let digits = hex.trim().trim_start_matches('#');
    if digits.len() == 6 {
        if let Ok(value) = u32::from_str_radix(digits, 16) {
            return Color::Rgb((value >> 16) as u8, (value >> 8) as u8, value as u8);
        }
    }
    Color::White
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_color_parses_rgb() {
        assert_eq!(hex_color("#1e40af"), Color::Rgb(0x1e, 0x40, 0xaf));
        assert_eq!(hex_color("10B981"), Color::Rgb(0x10, 0xb9, 0x81));
    }

    #[test]
    fn test_hex_color_falls_back_to_white() {
        assert_eq!(hex_color(""), Color::White);
        assert_eq!(hex_color("#fff"), Color::White);
        assert_eq!(hex_color("not-a-color"), Color::White);
    }

    #[test]
    fn test_contains_respects_bounds() {
        let area = Rect::new(10, 5, 20, 10);
        assert!(contains(area, 10, 5));
        assert!(contains(area, 29, 14));
        assert!(!contains(area, 30, 5));
        assert!(!contains(area, 9, 5));
        assert!(!contains(area, 10, 15));
    }
}
