//! Frame rendering

use super::palette::Palette;
use super::{App, InputMode};
use crate::core::AppState;
use ratatui::{prelude::*, widgets::*};
use shared::models::Product;
use tui_logger::{TuiLoggerLevelOutput, TuiLoggerWidget};

pub const SHOP_TITLE: &str = "NepasysShop";

/// Lines per product row in the list
const PRODUCT_ROWS: usize = 2;

const SPINNER: [char; 10] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

/// Whether a sentinel placed after `items` rows of `item_height` lines is on
/// screen when the list starts at `offset` in a viewport of `viewport` lines
pub fn sentinel_in_view(offset: usize, items: usize, item_height: usize, viewport: usize) -> bool {
    items.saturating_sub(offset) * item_height < viewport
}

pub fn cart_button_label(in_cart: bool) -> &'static str {
    if in_cart { "In Cart ✓" } else { "Add to Cart" }
}

pub fn rating_label(product: &Product) -> String {
    format!("★ {} ({})", product.rating.rate, product.rating.count)
}

pub fn draw(f: &mut Frame, app: &mut App, state: &AppState) {
    let palette = Palette::for_theme(state.theme());
    f.render_widget(Block::default().style(palette.base()), f.area());

    if state.is_loading() {
        app.sentinel_visible = false;
        draw_loading(f, app, &palette);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(3), // Search / category / sort
            Constraint::Min(4),    // Products (+ logs)
            Constraint::Length(1), // Help
        ])
        .split(f.area());

    draw_header(f, chunks[0], state, &palette);
    draw_controls(f, chunks[1], app, state, &palette);

    let main_area = if app.show_logs {
        let split = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(4), Constraint::Length(10)])
            .split(chunks[2]);
        draw_logs(f, split[1], app, &palette);
        split[0]
    } else {
        chunks[2]
    };

    if state.window().is_empty() {
        app.sentinel_visible = false;
        draw_empty(f, main_area, state, &palette);
    } else {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(main_area);
        draw_products(f, columns[0], app, state, &palette);
        draw_detail(f, columns[1], app, state, &palette);
    }

    draw_help(f, chunks[3], app, &palette);
}

fn draw_loading(f: &mut Frame, app: &App, palette: &Palette) {
    let area = centered_rows(f.area(), 3);
    let spinner = SPINNER[app.tick % SPINNER.len()];
    let text = vec![
        Line::from(Span::styled(spinner.to_string(), palette.accent())),
        Line::from(""),
        Line::from(Span::styled("Loading products...", palette.title())),
    ];
    f.render_widget(Paragraph::new(text).alignment(Alignment::Center), area);
}

fn draw_header(f: &mut Frame, area: Rect, state: &AppState, palette: &Palette) {
    let theme_icon = if state.theme().is_dark() { "☀" } else { "☾" };
    let mut spans = vec![
        Span::styled(format!(" {} ", SHOP_TITLE), palette.title()),
        Span::raw(" | "),
        Span::styled(format!("{} {}", theme_icon, state.theme()), palette.muted()),
        Span::raw(" | 🛒"),
    ];
    if !state.cart().is_empty() {
        spans.push(Span::styled(
            format!(" {} ", state.cart().len()),
            Style::default()
                .fg(Color::White)
                .bg(palette.badge)
                .add_modifier(Modifier::BOLD),
        ));
    }

    let header = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(palette.border_style()),
    );
    f.render_widget(header, area);
}

fn draw_controls(f: &mut Frame, area: Rect, app: &mut App, state: &AppState, palette: &Palette) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(20),
            Constraint::Length(28),
            Constraint::Length(24),
        ])
        .split(area);

    // Search box
    let editing = app.input_mode == InputMode::Editing;
    let search_style = if editing {
        Style::default().fg(palette.accent)
    } else {
        palette.border_style()
    };
    let search_block = Block::default()
        .borders(Borders::ALL)
        .title(" Search (/) ")
        .border_style(search_style);

    let width = columns[0].width.max(3) - 3;
    let scroll = app.input.visual_scroll(width as usize);
    let search = if app.input.value().is_empty() && !editing {
        Paragraph::new(Span::styled("Search products...", palette.muted()))
    } else {
        Paragraph::new(app.input.value()).scroll((0, scroll as u16))
    };
    f.render_widget(search.block(search_block), columns[0]);

    if editing {
        f.set_cursor_position((
            columns[0].x + ((app.input.visual_cursor().max(scroll) - scroll) as u16) + 1,
            columns[0].y + 1,
        ));
    }

    let category = Paragraph::new(format!("{} ▾", state.query().category.label())).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Category (c) ")
            .border_style(palette.border_style()),
    );
    f.render_widget(category, columns[1]);

    let sort = Paragraph::new(format!("{} ▾", state.query().sort.label())).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Sort (s) ")
            .border_style(palette.border_style()),
    );
    f.render_widget(sort, columns[2]);
}

fn draw_products(f: &mut Frame, area: Rect, app: &mut App, state: &AppState, palette: &Palette) {
    let window = state.window();

    let mut items: Vec<ListItem> = state
        .displayed()
        .map(|product| product_item(product, state.cart().contains(product.id), palette))
        .collect();

    if window.has_more() {
        let sentinel = if window.is_extending() {
            Line::from(Span::styled(
                format!("{} Loading more...", SPINNER[app.tick % SPINNER.len()]),
                palette.accent(),
            ))
        } else {
            Line::from(Span::styled("▼ more", palette.muted()))
        };
        items.push(ListItem::new(sentinel));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" Products {}/{} ", window.len(), state.filtered_len()))
        .border_style(palette.border_style());
    let viewport = block.inner(area).height as usize;

    let list = List::new(items)
        .block(block)
        .highlight_style(palette.highlight())
        .highlight_symbol("▶ ");
    f.render_stateful_widget(list, area, &mut app.list_state);

    app.sentinel_visible =
        window.has_more() && sentinel_in_view(app.list_state.offset(), window.len(), PRODUCT_ROWS, viewport);
}

fn product_item<'a>(product: &'a Product, in_cart: bool, palette: &Palette) -> ListItem<'a> {
    let button_style = if in_cart {
        Style::default().fg(palette.in_cart).add_modifier(Modifier::BOLD)
    } else {
        palette.accent()
    };

    ListItem::new(vec![
        Line::from(Span::styled(product.title.as_str(), palette.title())),
        Line::from(vec![
            Span::styled(format!("  {}", product.display_category()), palette.accent()),
            Span::raw("  "),
            Span::styled(product.display_price(), palette.title()),
            Span::raw("  "),
            Span::styled(rating_label(product), Style::default().fg(palette.star)),
            Span::raw("  "),
            Span::styled(format!("[{}]", cart_button_label(in_cart)), button_style),
        ]),
    ])
}

fn draw_detail(f: &mut Frame, area: Rect, app: &App, state: &AppState, palette: &Palette) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Details ")
        .border_style(palette.border_style());

    let Some(product) = app.list_state.selected().and_then(|i| state.displayed_at(i)) else {
        f.render_widget(block, area);
        return;
    };
    let in_cart = state.cart().contains(product.id);

    let text = vec![
        Line::from(Span::styled(product.display_category(), palette.accent())),
        Line::from(Span::styled(product.title.as_str(), palette.title())),
        Line::from(""),
        Line::from(vec![
            Span::styled(product.display_price(), palette.title()),
            Span::raw("   "),
            Span::styled(rating_label(product), Style::default().fg(palette.star)),
        ]),
        Line::from(""),
        Line::from(Span::raw(product.description.as_str())),
        Line::from(""),
        Line::from(Span::styled(product.image.as_str(), palette.muted())),
        Line::from(""),
        Line::from(Span::styled(
            format!("[ {} ]  (space)", cart_button_label(in_cart)),
            if in_cart {
                Style::default().fg(palette.in_cart).add_modifier(Modifier::BOLD)
            } else {
                palette.accent()
            },
        )),
    ];

    f.render_widget(Paragraph::new(text).block(block).wrap(Wrap { trim: true }), area);
}

fn draw_empty(f: &mut Frame, area: Rect, state: &AppState, palette: &Palette) {
    let mut text = vec![Line::from(Span::styled("No products found", palette.muted()))];
    if let Some(err) = state.load_error() {
        text.push(Line::from(""));
        text.push(Line::from(Span::styled(
            format!("Could not load the catalog: {}. Press r to retry.", err.message),
            Style::default().fg(palette.badge),
        )));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(palette.border_style());
    let inner = block.inner(area);
    f.render_widget(block, area);
    f.render_widget(
        Paragraph::new(text)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        centered_rows(inner, 3),
    );
}

fn draw_logs(f: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let logs = TuiLoggerWidget::default()
        .block(
            Block::default()
                .title(" Logs ([ ] to scroll) ")
                .border_style(palette.border_style())
                .borders(Borders::ALL),
        )
        .output_separator('|')
        .output_timestamp(Some("%H:%M:%S".to_string()))
        .output_level(Some(TuiLoggerLevelOutput::Abbreviated))
        .output_target(false)
        .output_file(false)
        .output_line(false)
        .style(palette.base())
        .state(&app.logger_state);
    f.render_widget(logs, area);
}

fn draw_help(f: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let text = match app.input_mode {
        InputMode::Editing => "Type to search · Esc/Enter done",
        InputMode::Normal => {
            "↑↓ move · space cart · / search · c category · s sort · t theme · l logs · r reload · q quit"
        }
    };
    f.render_widget(Paragraph::new(text).style(palette.muted()), area);
}

/// Vertically centered band of `rows` lines inside `area`
fn centered_rows(area: Rect, rows: u16) -> Rect {
    let top = area.height.saturating_sub(rows) / 2;
    Rect {
        x: area.x,
        y: area.y + top,
        width: area.width,
        height: rows.min(area.height),
    }
}
