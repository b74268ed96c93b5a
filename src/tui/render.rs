//! 画面描画
//!
//! 描画のたびに `Model.hit` を更新し、`Model.scroll` を上限内に収める。

use super::app::Model;
use super::layout::{self, cell_rect, columns_for, visible_rows};
use crate::country::{CountryRecord, RegionOption};
use crate::directory::CardList;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph};

/// アプリ名
const TITLE: &str = "Know Your Country";
/// 検索欄のプレースホルダー
const SEARCH_PLACEHOLDER: &str = "Search for a country...";
/// フィルタボタンの幅
const FILTER_WIDTH: u16 = 24;

/// 画面を描画
pub fn view(f: &mut Frame, model: &mut Model) {
    model.hit.clear();

    let chunks = Layout::vertical([
        Constraint::Length(1), // タイトル
        Constraint::Length(3), // 検索 + フィルタ
        Constraint::Length(1), // 件数
        Constraint::Min(0),    // グリッド
        Constraint::Length(1), // ヘルプ
    ])
    .split(f.area());

    render_title(f, chunks[0]);

    let controls = Layout::horizontal([Constraint::Min(10), Constraint::Length(FILTER_WIDTH)])
        .split(chunks[1]);
    render_search(f, model, controls[0]);
    render_filter_button(f, model, controls[1]);
    model.hit.set_button(controls[1]);

    render_status(f, model, chunks[2]);
    render_grid(f, model, chunks[3]);
    render_help(f, model, chunks[4]);

    // メニューは最前面に重ねる
    if model.controller.state().is_menu_open() {
        render_menu(f, model, controls[1]);
    }
}

fn render_title(f: &mut Frame, area: Rect) {
    let title = Paragraph::new(Line::from(vec![
        Span::styled(TITLE, Style::default().add_modifier(Modifier::BOLD)),
        Span::styled("  countries of the world", Style::default().fg(Color::DarkGray)),
    ]));
    f.render_widget(title, area);
}

fn render_search(f: &mut Frame, model: &Model, area: Rect) {
    let state = model.controller.state();
    let menu_open = state.is_menu_open();

    let (text, style) = if state.search_query.is_empty() {
        (SEARCH_PLACEHOLDER, Style::default().fg(Color::DarkGray))
    } else {
        (state.search_query.as_str(), Style::default())
    };

    let border = if menu_open {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default().fg(Color::Cyan)
    };

    let search = Paragraph::new(Line::from(Span::styled(text, style))).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border)
            .title(" Search "),
    );
    f.render_widget(search, area);

    if !menu_open {
        f.set_cursor_position(search_cursor(area, &state.search_query));
    }
}

/// 検索欄のカーソル位置（表示幅で数え、枠内に収める）
fn search_cursor(area: Rect, query: &str) -> Position {
    let offset = u16::try_from(Line::from(query).width()).unwrap_or(u16::MAX);
    let x = area
        .x
        .saturating_add(1)
        .saturating_add(offset)
        .min(area.right().saturating_sub(2))
        .max(area.x);
    Position::new(x, area.y.saturating_add(1))
}

fn render_filter_button(f: &mut Frame, model: &Model, area: Rect) {
    let state = model.controller.state();
    let (arrow, border) = if state.is_menu_open() {
        ("▴", Style::default().fg(Color::Yellow))
    } else {
        ("▾", Style::default())
    };

    let label_style = if state.region_filter.is_some() {
        Style::default().add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };

    let button = Paragraph::new(Line::from(vec![
        Span::styled(state.filter_label(), label_style),
        Span::raw(" "),
        Span::raw(arrow),
    ]))
    .block(Block::default().borders(Borders::ALL).border_style(border));
    f.render_widget(button, area);
}

fn render_status(f: &mut Frame, model: &Model, area: Rect) {
    let controller = &model.controller;
    let text = if controller.state().loading {
        if controller.records().is_empty() {
            "Loading countries...".to_string()
        } else {
            format!("Loading {} countries...", controller.records().len())
        }
    } else {
        format!(
            "{} of {} countries",
            controller.visible().len(),
            controller.records().len()
        )
    };

    f.render_widget(
        Paragraph::new(Span::styled(text, Style::default().fg(Color::DarkGray))),
        area,
    );
}

fn render_grid(f: &mut Frame, model: &mut Model, area: Rect) {
    let columns = columns_for(area.width);
    let rows = visible_rows(area.height);

    let count = match model.controller.card_list() {
        CardList::Placeholders(n) => n,
        CardList::Cards(cards) => cards.len(),
    };
    model.max_scroll = layout::max_scroll(count, area);
    model.scroll = model.scroll.min(model.max_scroll);

    let start = model.scroll * columns;
    let end = (start + rows * columns).min(count);

    match model.controller.card_list() {
        CardList::Placeholders(_) => {
            for slot in 0..end.saturating_sub(start) {
                render_placeholder(f, cell_rect(area, columns, slot));
            }
        }
        CardList::Cards(cards) if cards.is_empty() => {
            let empty = Paragraph::new("No countries matched")
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center);
            f.render_widget(empty, area);
        }
        CardList::Cards(cards) => {
            for (slot, country) in cards[start..end].iter().enumerate() {
                render_card(f, country, cell_rect(area, columns, slot));
            }
        }
    }
}

fn render_card(f: &mut Frame, country: &CountryRecord, area: Rect) {
    let label = Style::default().add_modifier(Modifier::BOLD);
    let lines = vec![
        Line::from(vec![
            Span::styled("Population: ", label),
            Span::raw(country.population_display()),
        ]),
        Line::from(vec![Span::styled("Region: ", label), Span::raw(&country.region)]),
        Line::from(vec![
            Span::styled("Capital: ", label),
            Span::raw(country.capital_display()),
        ]),
    ];

    let card = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(Span::styled(
                format!(" {} ", country.name),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            )),
    );
    f.render_widget(card, area);
}

fn render_placeholder(f: &mut Frame, area: Rect) {
    let shade = Style::default().fg(Color::DarkGray);
    let bar = |width: u16| Line::from(Span::styled("░".repeat(width as usize), shade));
    let inner = area.width.saturating_sub(2);

    let lines = vec![bar(inner * 2 / 3), bar(inner / 2), bar(inner / 2)];
    let card = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(shade),
    );
    f.render_widget(card, area);
}

fn render_menu(f: &mut Frame, model: &mut Model, button: Rect) {
    let options = RegionOption::all();
    let current = model.controller.state().region_filter;

    let area = Rect::new(
        button.x,
        button.bottom(),
        button.width,
        options.len() as u16 + 2,
    )
    .intersection(f.area());

    let items: Vec<ListItem> = options
        .iter()
        .map(|o| {
            let mark = if o.region() == current { "● " } else { "  " };
            ListItem::new(format!("{mark}{}", o.label()))
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow)),
        )
        .highlight_style(Style::default().fg(Color::Black).bg(Color::Yellow));

    let mut state = ListState::default();
    state.select(Some(model.menu_cursor));

    f.render_widget(Clear, area);
    f.render_stateful_widget(list, area, &mut state);

    let item_rects = options
        .iter()
        .enumerate()
        .map(|(i, o)| {
            let rect = Rect::new(
                area.x + 1,
                area.y + 1 + i as u16,
                area.width.saturating_sub(2),
                1,
            )
            .intersection(area);
            (rect, *o)
        })
        .collect();
    model.hit.set_menu(area, item_rects);
}

fn render_help(f: &mut Frame, model: &Model, area: Rect) {
    let help = if model.controller.state().is_menu_open() {
        " ↑/↓: move | Enter: select | Esc: close | Ctrl+C: quit"
    } else {
        " type: search | Tab: region | ↑/↓ PgUp/PgDn: scroll | Esc: clear/quit"
    };
    f.render_widget(
        Paragraph::new(help).style(Style::default().fg(Color::DarkGray)),
        area,
    );
}

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;
