use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use crate::app::{App, View};
use crate::models::{partition, Article, CardFields, Category, SECONDARY_LIMIT};

const LOADING_MESSAGE: &str = "Loading news...";
const EMPTY_MESSAGE: &str = "No news available.";

pub fn draw(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(f.area());

    draw_top_bar(f, chunks[0], app);

    // Three mutually exclusive branches: loading, empty, populated
    if app.loading {
        centered_message(f, chunks[1], LOADING_MESSAGE);
    } else if app.articles.is_empty() {
        centered_message(f, chunks[1], EMPTY_MESSAGE);
    } else {
        match app.view {
            View::Search => draw_search(f, chunks[1], app),
            View::Headlines => draw_headlines(f, chunks[1], app),
        }
    }

    f.render_widget(Paragraph::new(app.status.as_str()), chunks[2]);
}

fn draw_top_bar(f: &mut Frame, area: Rect, app: &App) {
    let top = if app.input_mode {
        format!("Search: {}_", app.query)
    } else {
        format!(
            "newsdeck [{}]  Tab:view  /:search  1-5:category  j/k:move  r:refresh  o:open  q:quit",
            app.view.label()
        )
    };
    f.render_widget(Paragraph::new(top), area);
}

fn centered_message(f: &mut Frame, area: Rect, message: &str) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(45),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(area);
    f.render_widget(
        Paragraph::new(message).alignment(Alignment::Center),
        chunks[1],
    );
}

// ==================== Search view ====================

fn draw_search(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(1)])
        .split(area);

    draw_category_row(f, chunks[0], app);

    let width = usize::from(chunks[1].width).saturating_sub(4).max(20);
    let items: Vec<ListItem> = app
        .articles
        .iter()
        .map(|a| card_item(&a.card(), width))
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title("Articles"))
        .highlight_style(Style::default().add_modifier(Modifier::BOLD));

    let mut state = ListState::default();
    state.select(Some(app.selected));
    f.render_stateful_widget(list, chunks[1], &mut state);
}

fn draw_category_row(f: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::raw(" ")];
    for (i, cat) in Category::ALL.iter().enumerate() {
        let style = if app.category == Some(*cat) {
            Style::default().add_modifier(Modifier::BOLD | Modifier::REVERSED)
        } else {
            Style::default()
        };
        spans.push(Span::styled(format!("[{}] {}", i + 1, cat.label()), style));
        spans.push(Span::raw("  "));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// One article card. The image line is omitted entirely when the article
/// has no image.
fn card_item(card: &CardFields, width: usize) -> ListItem<'static> {
    let mut lines = vec![
        Line::from(Span::styled(
            card.title.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled(
                format!("[{}]", card.source),
                Style::default().fg(Color::Red),
            ),
            Span::styled(
                format!("  {}", card.date),
                Style::default().fg(Color::DarkGray),
            ),
        ]),
    ];

    if let Some(img) = &card.image_url {
        lines.push(Line::from(Span::styled(
            format!("img: {img}"),
            Style::default().fg(Color::DarkGray),
        )));
    }

    for wrapped in textwrap::wrap(&card.description, width) {
        lines.push(Line::from(wrapped.into_owned()));
    }

    lines.push(Line::from(Span::styled(
        format!("Read more: {}", card.link),
        Style::default().fg(Color::Blue),
    )));
    lines.push(Line::from(""));

    ListItem::new(lines)
}

// ==================== Headlines view ====================

fn draw_headlines(f: &mut Frame, area: Rect, app: &App) {
    let Some(headlines) = partition(&app.articles) else {
        // Empty lists never reach here; draw() shows the empty branch
        return;
    };

    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(67), Constraint::Percentage(33)])
        .split(area);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(9), Constraint::Min(1)])
        .split(panes[0]);

    draw_featured(f, left[0], headlines.featured, app.selected == 0);
    draw_secondary(f, left[1], headlines.secondary, app.selected);
    draw_trending(f, panes[1], headlines.trending, app.selected);
}

fn draw_featured(f: &mut Frame, area: Rect, featured: &Article, selected: bool) {
    let card = featured.card();

    let mut lines = vec![
        Line::from(vec![
            Span::styled(
                format!("[{}]", card.source),
                Style::default().fg(Color::Red),
            ),
            Span::styled(
                format!("  {}", card.date),
                Style::default().fg(Color::DarkGray),
            ),
        ]),
        Line::from(Span::styled(
            card.title,
            Style::default().add_modifier(Modifier::BOLD),
        )),
    ];

    if let Some(img) = card.image_url {
        lines.push(Line::from(Span::styled(
            format!("img: {img}"),
            Style::default().fg(Color::DarkGray),
        )));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(card.description));
    lines.push(Line::from(Span::styled(
        format!("Read full story: {}", card.link),
        Style::default().fg(Color::Blue),
    )));

    let mut block = Block::default().borders(Borders::ALL).title("Featured");
    if selected {
        block = block.border_style(Style::default().fg(Color::Yellow));
    }

    f.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: false }),
        area,
    );
}

fn draw_secondary(f: &mut Frame, area: Rect, secondary: &[Article], selected: usize) {
    let items: Vec<ListItem> = secondary
        .iter()
        .map(|a| {
            let card = a.card();
            let mut lines = vec![
                Line::from(Span::styled(
                    card.title,
                    Style::default().add_modifier(Modifier::BOLD),
                )),
                Line::from(vec![
                    Span::styled(
                        format!("[{}]", card.source),
                        Style::default().fg(Color::Red),
                    ),
                    Span::styled(
                        format!("  {}", card.date),
                        Style::default().fg(Color::DarkGray),
                    ),
                ]),
            ];
            if let Some(img) = card.image_url {
                lines.push(Line::from(Span::styled(
                    format!("img: {img}"),
                    Style::default().fg(Color::DarkGray),
                )));
            }
            lines.push(Line::from(card.description));
            lines.push(Line::from(""));
            ListItem::new(lines)
        })
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title("Top Stories"))
        .highlight_style(Style::default().add_modifier(Modifier::BOLD));

    // Absolute selection index 1..=6 maps onto this list
    let mut state = ListState::default();
    state.select(selected.checked_sub(1).filter(|i| *i < secondary.len()));
    f.render_stateful_widget(list, area, &mut state);
}

fn draw_trending(f: &mut Frame, area: Rect, trending: &[Article], selected: usize) {
    let items: Vec<ListItem> = trending
        .iter()
        .map(|a| {
            ListItem::new(vec![
                Line::from(a.title.clone()),
                Line::from(vec![
                    Span::styled(a.time_line(), Style::default().fg(Color::DarkGray)),
                    Span::raw("  "),
                    Span::styled(a.source.name.clone(), Style::default().fg(Color::Blue)),
                ]),
                Line::from(""),
            ])
        })
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title("Trending Now"))
        .highlight_style(Style::default().add_modifier(Modifier::BOLD));

    // Absolute selection index 7..=14 maps onto the sidebar
    let mut state = ListState::default();
    state.select(
        selected
            .checked_sub(1 + SECONDARY_LIMIT)
            .filter(|i| *i < trending.len()),
    );
    f.render_stateful_widget(list, area, &mut state);
}
