use ratatui::prelude::*;
use ratatui::widgets::{Block, Clear, Paragraph, Tabs, Wrap};

use crate::content::{
    CtaLink, AUDIT_AREAS, AUDIT_DELIVERABLES, AUDIT_HEADING, AUDIT_NOTE, AUDIT_QUOTE,
    AUDIT_TIMELINE, BENCHMARK_HEADING, BENCHMARK_INTRO, CASE_STUDIES, CASE_STUDIES_HEADING,
    CATEGORIES, CTA_HEADING, CTA_PITCH, EYEBROW, FOOTER, HEADLINE, METRICS, RESULT_PLACEHOLDER,
    SCALE_LEGEND, SUBTITLE, TAGLINE,
};
use crate::scoring::{Rating, CATEGORY_COUNT, MAX_TOTAL};
use crate::tui::app::{App, InputMode, View};
use crate::tui::theme::ThemeColors;

pub fn draw(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    // Handle very small terminal sizes gracefully
    if area.height < 6 || area.width < 30 {
        let msg = Paragraph::new("Terminal too small").alignment(Alignment::Center);
        frame.render_widget(msg, area);
        return;
    }

    // Layout: Title(1) + Tabs(1) + Body(fill) + Status(1)
    let chunks = Layout::vertical([
        Constraint::Length(1), // Title bar
        Constraint::Length(1), // Tab bar
        Constraint::Fill(1),   // Body
        Constraint::Length(1), // Status bar
    ])
    .split(area);

    render_title(frame, chunks[0], app);
    render_tabs(frame, chunks[1], app);
    match app.current_view {
        View::Scorecard => render_scorecard(frame, chunks[2], app),
        View::Insights => render_insights(frame, chunks[2], app),
    }
    render_status_bar(frame, chunks[3], app);

    if app.input_mode == InputMode::Help {
        render_help_popup(frame, &app.theme);
    }
}

fn render_title(frame: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let left = SUBTITLE;
    let mut spans = vec![Span::styled(left, Style::default().fg(theme.title_color).bold())];

    let right = EYEBROW.to_uppercase();
    let padding_len = (area.width as usize).saturating_sub(left.chars().count() + right.chars().count());
    if padding_len > 0 {
        spans.push(Span::raw(" ".repeat(padding_len)));
        spans.push(Span::styled(right, Style::default().fg(theme.muted)));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_tabs(frame: &mut Frame, area: Rect, app: &App) {
    let selected: usize = match app.current_view {
        View::Scorecard => 0,
        View::Insights => 1,
    };

    let tabs = Tabs::new(vec!["Scorecard", "Insights"])
        .select(selected)
        .style(app.theme.tab_inactive_style)
        .highlight_style(app.theme.tab_active_style)
        .divider(" | ");

    frame.render_widget(tabs, area);
}

fn render_scorecard(frame: &mut Frame, area: Rect, app: &App) {
    let columns = Layout::horizontal([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    render_category_list(frame, columns[0], app);

    // Results panel grows to fit its wrapped text; the detail pane takes the rest
    let results = results_paragraph(app);
    let inner_width = columns[1].width.saturating_sub(2);
    let results_height = u16::try_from(results.line_count(inner_width))
        .unwrap_or(u16::MAX)
        .saturating_add(2)
        .min(columns[1].height);

    let right = Layout::vertical([Constraint::Fill(1), Constraint::Length(results_height)])
        .split(columns[1]);
    render_category_detail(frame, right[0], app);

    let block = Block::bordered()
        .title(" Diagnostic Score ")
        .title_style(app.theme.popup_title);
    frame.render_widget(results.block(block), right[1]);
}

/// Lines before the first category row: intro, scale legend, blank
const LIST_HEADER_LINES: u16 = 3;
/// Each category takes a title line and a score-button line
const LINES_PER_CATEGORY: u16 = 2;

/// First visible line of the category list so the selected row and its
/// buttons stay on screen
fn category_list_scroll(selected: usize, visible: u16) -> u16 {
    let selected_end = LIST_HEADER_LINES + (selected as u16 + 1) * LINES_PER_CATEGORY;
    selected_end.saturating_sub(visible)
}

/// One row per category plus its five score buttons
fn render_category_list(frame: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let mut lines = vec![
        Line::from(Span::styled(BENCHMARK_INTRO, Style::default().fg(theme.muted))),
        Line::from(Span::styled(SCALE_LEGEND, Style::default().fg(theme.accent))),
        Line::from(""),
    ];

    for (idx, category) in CATEGORIES.iter().enumerate() {
        let is_selected = idx == app.selected;
        let marker = if is_selected { "▸ " } else { "  " };
        let row_style = if is_selected {
            theme.row_selected
        } else {
            Style::default()
        };

        lines.push(
            Line::from(vec![
                Span::raw(marker),
                Span::styled(format!("{}. ", idx + 1), Style::default().fg(theme.index_color)),
                Span::raw(category.title),
            ])
            .style(row_style),
        );
        lines.push(score_buttons(app.scorer.score(idx), theme));
    }

    let block = Block::bordered()
        .title(format!(" {} ", BENCHMARK_HEADING))
        .title_style(theme.popup_title);
    let scroll = category_list_scroll(app.selected, block.inner(area).height);
    frame.render_widget(Paragraph::new(lines).block(block).scroll((scroll, 0)), area);
}

fn score_buttons(current: Option<Rating>, theme: &ThemeColors) -> Line<'static> {
    let mut spans = vec![Span::raw("     ")];
    for rating in Rating::all() {
        let style = if current == Some(rating) {
            theme.button_selected
        } else {
            theme.button_idle
        };
        spans.push(Span::styled(format!("[{}]", rating), style));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

fn render_category_detail(frame: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let category = app.selected_category();

    let lines = vec![
        Line::from(Span::styled(
            "TRADITIONAL FLOW",
            Style::default().fg(theme.muted).bold(),
        )),
        Line::from(Span::styled(category.manual, Style::default().fg(theme.muted))),
        Line::from(""),
        Line::from(Span::styled(
            "AI-POWERED FLOW",
            Style::default().fg(theme.accent).bold(),
        )),
        Line::from(category.ai_first),
    ];

    let block = Block::bordered()
        .title(format!(" {} ", category.title))
        .title_style(theme.popup_title);
    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
        area,
    );
}

fn results_paragraph(app: &App) -> Paragraph<'static> {
    let theme = &app.theme;
    let total = app.scorer.total_score();

    let mut lines = vec![
        Line::from(vec![
            Span::styled(total.to_string(), Style::default().fg(theme.title_color).bold()),
            Span::styled(format!("/{}", MAX_TOTAL), Style::default().fg(theme.muted)),
            Span::raw("  "),
            Span::styled(
                format!("{}/{} answered", app.scorer.answered_count(), CATEGORY_COUNT),
                Style::default().fg(theme.muted),
            ),
        ]),
        total_bar(total, 20, theme),
        Line::from(""),
    ];

    match app.scorer.risk_tier() {
        Some(tier) => {
            let color = theme.tone_color(tier.tone);
            lines.push(Line::from(Span::styled(
                tier.label.to_uppercase(),
                Style::default().fg(color).bold(),
            )));
            lines.push(Line::from(Span::styled(tier.description, Style::default().fg(color))));
        }
        None => {
            lines.push(Line::from(Span::styled(
                RESULT_PLACEHOLDER,
                Style::default().fg(theme.muted).italic(),
            )));
        }
    }

    Paragraph::new(lines).wrap(Wrap { trim: true })
}

fn total_bar(total: u32, width: usize, theme: &ThemeColors) -> Line<'static> {
    let ratio = (f64::from(total) / f64::from(MAX_TOTAL)).min(1.0);
    let filled = (ratio * width as f64).round() as usize;
    let empty = width.saturating_sub(filled);

    let mut spans = Vec::new();
    if filled > 0 {
        spans.push(Span::styled("█".repeat(filled), Style::default().fg(theme.bar_filled)));
    }
    if empty > 0 {
        spans.push(Span::styled("░".repeat(empty), Style::default().fg(theme.bar_empty)));
    }
    Line::from(spans)
}

/// Metrics, case studies, audit offer and calls to action
fn insights_lines(theme: &ThemeColors) -> Vec<Line<'static>> {
    let heading = |text: &'static str| {
        Line::from(Span::styled(text, Style::default().fg(theme.title_color).bold()))
    };
    let accent = Style::default().fg(theme.accent);
    let muted = Style::default().fg(theme.muted);

    let mut lines = vec![
        Line::from(Span::styled(HEADLINE, accent.bold())),
        Line::from(Span::styled(TAGLINE, muted.italic())),
        Line::from(""),
    ];

    for metric in &METRICS {
        lines.push(Line::from(vec![
            Span::styled(format!("{:>4}  ", metric.value), accent.bold()),
            Span::styled(metric.label.to_uppercase(), Style::default().bold()),
            Span::styled(format!("  {}", metric.note), muted.italic()),
        ]));
    }
    lines.push(Line::from(""));

    lines.push(heading(CASE_STUDIES_HEADING));
    for study in &CASE_STUDIES {
        lines.push(Line::from(vec![
            Span::styled(format!("[{}] ", study.tag), accent.bold()),
            Span::styled(study.title, Style::default().bold()),
        ]));
        lines.push(Line::from(Span::styled(study.summary, muted.italic())));
        let [headline, support] = study.outcomes;
        lines.push(Line::from(vec![
            Span::styled("  ↗ ", Style::default().fg(theme.tone_success)),
            Span::styled(headline, Style::default().bold()),
        ]));
        lines.push(Line::from(vec![
            Span::styled("  ✓ ", accent),
            Span::raw(support),
        ]));
        lines.push(Line::from(""));
    }

    lines.push(heading(AUDIT_HEADING));
    lines.push(Line::from(Span::styled(AUDIT_QUOTE, muted.italic())));
    lines.push(Line::from(Span::styled("What We Audit", accent.bold())));
    for (i, area) in AUDIT_AREAS.iter().enumerate() {
        lines.push(Line::from(vec![
            Span::styled(format!("  0{} ", i + 1), accent.bold()),
            Span::raw(*area),
        ]));
    }
    lines.push(Line::from(Span::styled("Strategic Delivery", accent.bold())));
    for deliverable in &AUDIT_DELIVERABLES {
        lines.push(Line::from(vec![Span::styled("  • ", accent), Span::raw(*deliverable)]));
    }
    lines.push(Line::from(vec![
        Span::styled("Timeline: ", Style::default().bold()),
        Span::raw(AUDIT_TIMELINE),
        Span::raw("  "),
        Span::styled(AUDIT_NOTE.to_uppercase(), accent.bold()),
    ]));
    lines.push(Line::from(""));

    lines.push(heading(CTA_HEADING));
    lines.push(Line::from(CTA_PITCH));
    for (key, link) in [("a", CtaLink::StrategyAudit), ("m", CtaLink::Masterclass)] {
        lines.push(Line::from(vec![
            Span::styled(format!("  {} ", key), Style::default().fg(theme.status_key_color).bold()),
            Span::styled(link.label(), Style::default().bold()),
            Span::styled(format!("  {}", link.url()), muted.underlined()),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(FOOTER, muted)));

    lines
}

fn render_insights(frame: &mut Frame, area: Rect, app: &mut App) {
    let block = Block::bordered()
        .title(" Insights ")
        .title_style(app.theme.popup_title);
    let inner = block.inner(area);

    let paragraph = Paragraph::new(insights_lines(&app.theme)).wrap(Wrap { trim: false });
    let total_lines = u16::try_from(paragraph.line_count(inner.width)).unwrap_or(u16::MAX);
    app.set_insights_max_scroll(total_lines.saturating_sub(inner.height));

    frame.render_widget(
        paragraph.block(block).scroll((app.insights_scroll, 0)),
        area,
    );
}

fn render_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let text = if let Some((ref msg, _)) = app.flash_message {
        // Show flash message with color based on message type
        let msg_color = if msg.starts_with("Failed") || msg.starts_with("Error") {
            theme.flash_error
        } else if msg.starts_with("Opened:") {
            theme.flash_success
        } else {
            theme.title_color
        };
        Line::from(Span::styled(msg.clone(), Style::default().fg(msg_color)))
    } else {
        let hints: &[(&str, &str)] = match app.current_view {
            View::Scorecard => &[
                ("j/k", ":move"),
                ("1-5", ":score"),
                ("h/l", ":adjust"),
                ("a", ":audit"),
                ("m", ":masterclass"),
                ("Tab", ":insights"),
                ("?", ":help"),
                ("q", ":quit"),
            ],
            View::Insights => &[
                ("j/k", ":scroll"),
                ("a", ":audit"),
                ("m", ":masterclass"),
                ("Tab", ":scorecard"),
                ("?", ":help"),
                ("q", ":quit"),
            ],
        };

        let mut hint_spans = Vec::new();
        for (i, (key, label)) in hints.iter().enumerate() {
            if i > 0 {
                hint_spans.push(Span::raw(" "));
            }
            hint_spans.push(Span::styled(*key, Style::default().fg(theme.status_key_color)));
            hint_spans.push(Span::raw(*label));
        }

        // The running total is dropped first when the line is too narrow
        let total = Span::styled(
            format!("{}/{}  ", app.scorer.total_score(), MAX_TOTAL),
            Style::default().fg(theme.muted),
        );
        let hints_width: usize = hint_spans.iter().map(Span::width).sum();
        let mut spans = Vec::new();
        if total.width() + hints_width <= area.width as usize {
            spans.push(total);
        }
        spans.extend(hint_spans);
        Line::from(spans)
    };

    frame.render_widget(
        Paragraph::new(text).style(Style::default().bg(theme.status_bar_bg)),
        area,
    );
}

/// Create a centered rectangle with fixed width and height
fn centered_rect_fixed(width: u16, height: u16, area: Rect) -> Rect {
    // Clamp dimensions to area bounds
    let width = width.min(area.width);
    let height = height.min(area.height);

    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;

    Rect {
        x,
        y,
        width,
        height,
    }
}

/// Render the help overlay popup
fn render_help_popup(frame: &mut Frame, theme: &ThemeColors) {
    let popup_area = centered_rect_fixed(50, 15, frame.area());

    frame.render_widget(Clear, popup_area);

    let block = Block::bordered()
        .title(" Keyboard Shortcuts ")
        .title_style(theme.popup_title)
        .border_style(Style::default().fg(theme.popup_border));
    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let key_style = Style::default().fg(theme.status_key_color).bold();
    let entries = [
        ("j / Down      ", "Next category (scroll in Insights)"),
        ("k / Up        ", "Previous category"),
        ("1 - 5         ", "Score the selected category"),
        ("l / Right     ", "Raise score"),
        ("h / Left      ", "Lower score"),
        ("a             ", "Book Strategy Audit"),
        ("m             ", "Register Live Masterclass"),
        ("Tab           ", "Toggle Scorecard/Insights"),
        ("?             ", "Show/hide this help"),
        ("q / Ctrl-c    ", "Quit"),
    ];

    let mut help_lines: Vec<Line> = entries
        .iter()
        .map(|(key, desc)| Line::from(vec![Span::styled(*key, key_style), Span::raw(*desc)]))
        .collect();
    help_lines.push(Line::from(""));
    help_lines.push(Line::from(Span::styled(
        "Press any key to close",
        Style::default().fg(theme.muted),
    )));

    frame.render_widget(Paragraph::new(help_lines), inner);
}
