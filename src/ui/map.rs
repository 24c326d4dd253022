// 🗺️ Map renderer - illustrated city scene plus one marker per business
// Canvas space matches the catalog coordinate space: 160 x 100, y down

use career_map::{icons, Business, Catalog, MAP_HEIGHT, MAP_WIDTH};
use ratatui::{
    layout::{Margin, Rect},
    style::{Color, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Circle, Context, Line as CanvasLine, Rectangle},
        Block, Borders,
    },
    Frame,
};

use super::{hex_color, App};

/// Marker radius in map units; also the mouse hit radius
const MARKER_RADIUS: f64 = 5.0;

// ----------------------------------------------------------------------------
// Fixed decorative scene (unrelated to data)
// ----------------------------------------------------------------------------

/// Horizontal roads at these y positions
const ROADS_H: [f64; 2] = [30.0, 50.0];

/// Vertical roads at these x positions
const ROADS_V: [f64; 3] = [40.0, 80.0, 120.0];

/// River bank polylines, top and bottom edge, in (x, y) map coords
const RIVER_TOP: [(f64, f64); 5] = [(0.0, 65.0), (40.0, 68.0), (80.0, 70.0), (120.0, 71.0), (160.0, 72.0)];
const RIVER_BOTTOM: [(f64, f64); 5] = [(0.0, 73.0), (40.0, 75.0), (80.0, 77.0), (120.0, 78.0), (160.0, 80.0)];

/// Park areas as (center x, center y, radius)
const PARKS: [(f64, f64, f64); 2] = [(72.0, 70.0, 6.0), (45.0, 52.0, 5.0)];

/// Anonymous city blocks as (x, y, width, height)
const BUILDING_BLOCKS: [(f64, f64, f64, f64); 8] = [
    (16.0, 15.0, 8.0, 6.0),
    (56.0, 10.0, 6.0, 5.0),
    (104.0, 12.0, 7.0, 7.0),
    (128.0, 18.0, 8.0, 8.0),
    (19.0, 35.0, 6.0, 5.0),
    (125.0, 35.0, 9.0, 6.0),
    (13.0, 55.0, 7.0, 6.0),
    (109.0, 52.0, 5.0, 5.0),
];

pub fn render_map(f: &mut Frame, area: Rect, app: &mut App) {
    app.map_area = area;

    let selected = app.dialog.selected_id().map(str::to_owned);
    let focused = app.focused;
    let catalog = &app.catalog;

    let canvas = Canvas::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::White))
                .title(" City Map "),
        )
        .marker(Marker::Braille)
        .x_bounds([0.0, MAP_WIDTH])
        .y_bounds([0.0, MAP_HEIGHT])
        .paint(move |ctx| {
            draw_scene(ctx);
            ctx.layer();
            for (index, business) in catalog.iter().enumerate() {
                let is_selected = selected.as_deref() == Some(business.id.as_str());
                draw_marker(ctx, business, is_selected, index == focused);
            }
        });

    f.render_widget(canvas, area);
}

/// Canvas y grows upward; catalog y grows downward
fn flip(y: f64) -> f64 {
    MAP_HEIGHT - y
}

fn draw_scene(ctx: &mut Context) {
    // River: two bank polylines
    for bank in [RIVER_TOP, RIVER_BOTTOM] {
        for pair in bank.windows(2) {
            ctx.draw(&CanvasLine {
                x1: pair[0].0,
                y1: flip(pair[0].1),
                x2: pair[1].0,
                y2: flip(pair[1].1),
                color: Color::Blue,
            });
        }
    }

    // Road grid
    for y in ROADS_H {
        ctx.draw(&CanvasLine {
            x1: 0.0,
            y1: flip(y),
            x2: MAP_WIDTH,
            y2: flip(y),
            color: Color::DarkGray,
        });
    }
    for x in ROADS_V {
        ctx.draw(&CanvasLine {
            x1: x,
            y1: 0.0,
            x2: x,
            y2: MAP_HEIGHT,
            color: Color::DarkGray,
        });
    }

    // Parks
    for (x, y, radius) in PARKS {
        ctx.draw(&Circle {
            x,
            y: flip(y),
            radius,
            color: Color::Green,
        });
    }

    // Anonymous city blocks
    for (x, y, width, height) in BUILDING_BLOCKS {
        ctx.draw(&Rectangle {
            x,
            y: flip(y + height),
            width,
            height,
            color: Color::Gray,
        });
    }
}

fn draw_marker(ctx: &mut Context, business: &Business, is_selected: bool, is_focused: bool) {
    let color = hex_color(&business.color);
    let x = business.x;
    let y = flip(business.y);

    ctx.draw(&Circle {
        x,
        y,
        radius: MARKER_RADIUS,
        color,
    });

    // Emphasis ring around the active selection
    if is_selected {
        ctx.draw(&Circle {
            x,
            y,
            radius: MARKER_RADIUS + 2.0,
            color,
        });
    }

    if is_focused {
        ctx.draw(&Circle {
            x,
            y,
            radius: MARKER_RADIUS + 1.0,
            color: Color::White,
        });
    }

    ctx.print(
        x - 1.0,
        y,
        Line::from(Span::styled(
            icons::glyph(&business.icon),
            Style::default().fg(Color::White),
        )),
    );

    // Name label next to the focused marker
    if is_focused && !is_selected {
        ctx.print(
            x + MARKER_RADIUS + 2.0,
            y,
            Line::from(Span::styled(business.name.clone(), Style::default().fg(color))),
        );
    }
}

/// Translate a terminal cell click into the nearest marker, if any
///
/// The cell center is mapped into the 0..160 x 0..100 coordinate space of
/// the last rendered map area; a marker is hit when the click lands
/// within its radius (slightly widened horizontally: terminal cells are
/// taller than they are wide).
pub fn hit_test(area: Rect, catalog: &Catalog, column: u16, row: u16) -> Option<usize> {
    let inner = area.inner(&Margin {
        horizontal: 1,
        vertical: 1,
    });
    if inner.width == 0 || inner.height == 0 {
        return None;
    }
    if !super::contains(inner, column, row) {
        return None;
    }

    let mx = ((column - inner.x) as f64 + 0.5) / inner.width as f64 * MAP_WIDTH;
    let my = ((row - inner.y) as f64 + 0.5) / inner.height as f64 * MAP_HEIGHT;

    catalog
        .iter()
        .enumerate()
        .filter_map(|(index, business)| {
            let dx = business.x - mx;
            let dy = business.y - my;
            let within = dx.abs() <= MARKER_RADIUS + 1.5 && dy.abs() <= MARKER_RADIUS;
            within.then_some((index, dx * dx + dy * dy))
        })
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(index, _)| index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use career_map::{Business, Catalog, Category, Excursion};

    fn business(id: &str, x: f64, y: f64) -> Business {
        Business {
            id: id.to_string(),
            name: format!("Business {}", id),
            category: Category::Factory,
            subcategory: "Test".to_string(),
            x,
            y,
            description: String::new(),
            excursions: vec![Excursion::Text("Visit".to_string())],
            professions: Vec::new(),
            icon: "Factory".to_string(),
            color: "#1e40af".to_string(),
            technologies: Vec::new(),
            history: Vec::new(),
            testimonials: Vec::new(),
            image_url: None,
            excursion_years: Vec::new(),
        }
    }

    fn catalog() -> Catalog {
        Catalog::new(vec![
            business("a1", 20.0, 20.0),
            business("a2", 80.0, 50.0),
            business("a3", 140.0, 80.0),
        ])
    }

    // 82x52 outer area -> 80x50 inner drawing area: one cell covers
    // exactly 2 map units both ways, so marker (20, 20) sits at cell
    // (1 + 10, 1 + 10).
    const AREA: Rect = Rect {
        x: 0,
        y: 0,
        width: 82,
        height: 52,
    };

    #[test]
    fn test_click_on_marker_hits_it() {
        let catalog = catalog();
        assert_eq!(hit_test(AREA, &catalog, 11, 11), Some(0));
        assert_eq!(hit_test(AREA, &catalog, 41, 26), Some(1));
        assert_eq!(hit_test(AREA, &catalog, 71, 41), Some(2));
    }

    #[test]
    fn test_click_between_markers_hits_nothing() {
        let catalog = catalog();
        assert_eq!(hit_test(AREA, &catalog, 25, 18), None);
    }

    #[test]
    fn test_click_near_marker_picks_nearest() {
        let catalog = catalog();
        // One cell off still lands within the marker radius
        assert_eq!(hit_test(AREA, &catalog, 12, 12), Some(0));
    }

    #[test]
    fn test_click_outside_map_area_is_ignored() {
        let catalog = catalog();
        assert_eq!(hit_test(AREA, &catalog, 100, 11), None);
        assert_eq!(hit_test(AREA, &catalog, 11, 60), None);
        // Border cells are not part of the drawing area
        assert_eq!(hit_test(AREA, &catalog, 0, 0), None);
    }

    #[test]
    fn test_degenerate_area_hits_nothing() {
        let catalog = catalog();
        let tiny = Rect::new(0, 0, 2, 2);
        assert_eq!(hit_test(tiny, &catalog, 1, 1), None);
    }
}
