//! 视图层模块
//!
//! 包含主渲染入口和各种视图组件

pub mod components;
pub mod layouts;

use chrono::Local;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, List, ListItem, ListState, Paragraph, Wrap},
};

use super::state::{App, AppMode, ConfirmAction};
use crate::i18n::Language;
use crate::models::{ItemKind, Recommendation};
use crate::theme::{Palette, Theme};
use components::{item_style, radio_label, render_dialog_framework, render_input_widget};
use layouts::centered_rect;

/// 渲染 UI
pub fn render(frame: &mut Frame, app: &App) {
    let palette = app.palette();
    frame.render_widget(
        Block::default().style(Style::default().bg(palette.background).fg(palette.text)),
        frame.area(),
    );

    let summary_height = if app.list.is_empty() { 0 } else { 4 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),              // 标题
            Constraint::Length(3),              // 新条目
            Constraint::Min(6),                 // 正反两列
            Constraint::Length(summary_height), // 统计
            Constraint::Length(1),              // 页脚
            Constraint::Length(3),              // 帮助
        ])
        .split(frame.area());

    render_header(frame, app, chunks[0], &palette);
    render_new_item(frame, app, chunks[1], &palette);
    render_columns(frame, app, chunks[2], &palette);
    if !app.list.is_empty() {
        render_summary(frame, app, chunks[3], &palette);
    }
    render_footer(frame, app, chunks[4], &palette);
    render_help(frame, app, chunks[5], &palette);

    // 渲染弹窗
    match &app.mode {
        AppMode::SelectingLanguage(index) => render_language_dialog(frame, app, *index, &palette),
        AppMode::Confirm(action) => render_confirm_dialog(frame, app, action, &palette),
        _ => {}
    }
}

fn render_header(frame: &mut Frame, app: &App, area: Rect, palette: &Palette) {
    let t = app.t();
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(40)])
        .split(area);

    render_input_widget(
        frame,
        chunks[0],
        t.title,
        &app.list.title,
        t.list_title,
        app.mode == AppMode::EditingTitle,
        palette,
    );

    // 显示按 [m] 后将切换到的模式
    let theme_label = match app.prefs.theme() {
        Theme::Light => t.dark_mode,
        Theme::Dark => t.light_mode,
    };
    let status = Paragraph::new(Line::from(vec![
        Span::styled(
            format!("{} ", app.prefs.language().code()),
            Style::default().fg(palette.accent).add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!("[m] {theme_label}"), Style::default().fg(palette.muted)),
    ]))
    .block(
        Block::default()
            .title(format!("[e] {}", t.print_save))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(palette.border)),
    );
    frame.render_widget(status, chunks[1]);
}

fn render_new_item(frame: &mut Frame, app: &App, area: Rect, palette: &Palette) {
    let t = app.t();
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    render_input_widget(
        frame,
        chunks[0],
        t.add_new_item,
        &app.list.pending.text,
        t.add_new_item,
        app.mode == AppMode::AddingItem,
        palette,
    );

    let kind = app.list.pending.kind;
    let kinds = Paragraph::new(Line::from(vec![
        Span::styled(
            radio_label(t.pro, kind == ItemKind::Pro),
            Style::default().fg(palette.pro).add_modifier(Modifier::BOLD),
        ),
        Span::raw("   "),
        Span::styled(
            radio_label(t.con, kind == ItemKind::Con),
            Style::default().fg(palette.con).add_modifier(Modifier::BOLD),
        ),
    ]))
    .block(
        Block::default()
            .title(t.select_type)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(palette.border)),
    );
    frame.render_widget(kinds, chunks[1]);
}

fn render_columns(frame: &mut Frame, app: &App, area: Rect, palette: &Palette) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    render_column(frame, app, ItemKind::Pro, chunks[0], palette);
    render_column(frame, app, ItemKind::Con, chunks[1], palette);
}

fn render_column(frame: &mut Frame, app: &App, kind: ItemKind, area: Rect, palette: &Palette) {
    let t = app.t();
    let (label, color) = match kind {
        ItemKind::Pro => (t.pros, palette.pro),
        ItemKind::Con => (t.cons, palette.con),
    };
    let items = app.list.items(kind);
    let focused = app.focus == kind && app.mode == AppMode::Normal;
    let selected = app.selected_index(kind).filter(|_| focused);

    let rows: Vec<ListItem> = if items.is_empty() {
        vec![ListItem::new(Span::styled(
            t.no_items_yet,
            Style::default()
                .fg(palette.muted)
                .add_modifier(Modifier::ITALIC),
        ))]
    } else {
        items
            .iter()
            .enumerate()
            .map(|(i, item)| {
                ListItem::new(Line::from(Span::styled(
                    format!("● {item}"),
                    item_style(color, selected == Some(i)),
                )))
            })
            .collect()
    };

    let border = if focused { color } else { palette.border };
    let list = List::new(rows).block(
        Block::default()
            .title(Span::styled(
                format!("{} ({})", label, items.len()),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border)),
    );

    let mut state = ListState::default();
    state.select(selected);
    frame.render_stateful_widget(list, area, &mut state);
}

fn render_summary(frame: &mut Frame, app: &App, area: Rect, palette: &Palette) {
    let t = app.t();
    let summary = app.list.summary();
    let (verdict, color) = match summary.recommendation {
        Recommendation::Favorable => (t.recommended, palette.pro),
        Recommendation::Unfavorable => (t.not_recommended, palette.con),
    };

    let block = Block::default()
        .title(format!(
            "{}: {} {}, {} {}",
            t.summary,
            summary.pros_count,
            t.pros.to_lowercase(),
            summary.cons_count,
            t.cons.to_lowercase()
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.border));

    let gauge = Gauge::default()
        .block(block)
        .gauge_style(Style::default().fg(color).bg(palette.border))
        .percent(u16::from(summary.percentage))
        .label(format!("{}% {} · {}", summary.percentage, t.positive, verdict));
    frame.render_widget(gauge, area);
}

fn render_footer(frame: &mut Frame, app: &App, area: Rect, palette: &Palette) {
    let t = app.t();
    let title = if app.list.title.is_empty() {
        t.title
    } else {
        app.list.title.as_str()
    };
    let footer = Paragraph::new(format!(
        "{} - {} {}",
        title,
        t.created_on,
        Local::now().format("%Y-%m-%d")
    ))
    .style(Style::default().fg(palette.muted))
    .centered();
    frame.render_widget(footer, area);
}

fn render_help(frame: &mut Frame, app: &App, area: Rect, palette: &Palette) {
    let t = app.t();
    let help_text = match &app.mode {
        AppMode::Normal => t.help_normal,
        AppMode::EditingTitle => t.help_title,
        AppMode::AddingItem => t.help_adding,
        AppMode::SelectingLanguage(_) => t.help_language,
        AppMode::Confirm(_) => t.help_confirm,
    };

    let text = match app.message.as_deref() {
        Some(message) if !message.is_empty() => format!("{help_text}  |  {message}"),
        _ => help_text.to_string(),
    };

    let help = Paragraph::new(text)
        .style(Style::default().fg(palette.muted))
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.border)),
        );

    frame.render_widget(help, area);
}

fn render_language_dialog(frame: &mut Frame, app: &App, highlighted: usize, palette: &Palette) {
    let area = centered_rect(40, 30, frame.area());
    let inner = render_dialog_framework(frame, area, app.t().language, palette);

    let current = app.prefs.language();
    let rows: Vec<ListItem> = Language::ALL
        .iter()
        .map(|lang| {
            let marker = if *lang == current { "✓" } else { " " };
            ListItem::new(format!("{} {} ({})", marker, lang.native_name(), lang.code()))
                .style(Style::default().fg(palette.text))
        })
        .collect();

    let list = List::new(rows).highlight_style(
        Style::default()
            .fg(palette.accent)
            .add_modifier(Modifier::BOLD | Modifier::REVERSED),
    );

    let mut state = ListState::default();
    state.select(Some(highlighted));
    frame.render_stateful_widget(list, inner, &mut state);
}

fn render_confirm_dialog(frame: &mut Frame, app: &App, action: &ConfirmAction, palette: &Palette) {
    let t = app.t();
    let area = centered_rect(50, 20, frame.area());

    let (title, message) = match action {
        ConfirmAction::Reset => (t.reset_list, t.confirm_reset),
    };

    let inner = render_dialog_framework(frame, area, title, palette);
    let dialog = Paragraph::new(format!("{}\n\n{}", message, t.help_confirm))
        .style(Style::default().fg(palette.con))
        .wrap(Wrap { trim: true });

    frame.render_widget(dialog, inner);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preferences::PreferenceStore;
    use crate::storage::MemoryStore;
    use ratatui::{Terminal, backend::TestBackend};
    use std::path::PathBuf;

    fn screen(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 30)).unwrap();
        terminal.draw(|f| render(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn app() -> App {
        let prefs = PreferenceStore::load(Box::new(MemoryStore::new()), Some("en_US"));
        App::new(prefs, PathBuf::from("."))
    }

    #[test]
    fn test_empty_list_hides_summary() {
        let app = app();
        let text = screen(&app);

        assert!(text.contains("No items added yet"));
        assert!(text.contains("Pros (0)"));
        assert!(!text.contains("Summary"));
        assert!(text.contains("[e] Print / Save as Text"));
    }

    #[test]
    fn test_summary_shows_percentage_and_verdict() {
        let mut app = app();
        app.list.add_item("Cheaper", ItemKind::Pro);
        app.list.add_item("Slower", ItemKind::Con);
        app.list.add_item("Cheaper2", ItemKind::Pro);

        let text = screen(&app);
        assert!(text.contains("Summary: 2 pros, 1 cons"));
        assert!(text.contains("67% Positive · Recommended"));
    }
}
