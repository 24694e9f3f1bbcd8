//! 通用 UI 组件
//!
//! 对话框、输入框等通用组件

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use crate::theme::Palette;

/// [组件] 弹窗基础框架
pub fn render_dialog_framework(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    palette: &Palette,
) -> Rect {
    frame.render_widget(Clear, area);
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .style(Style::default().fg(palette.accent).bg(palette.background));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    inner
}

/// [组件] 输入框；为空时显示灰色占位文本
pub fn render_input_widget(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    value: &str,
    placeholder: &str,
    is_focused: bool,
    palette: &Palette,
) {
    let (text, style) = if value.is_empty() && !is_focused {
        (placeholder.to_string(), Style::default().fg(palette.muted))
    } else if is_focused {
        (
            format!("{value}▏"),
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        (value.to_string(), Style::default().fg(palette.text))
    };

    let border = if is_focused { palette.accent } else { palette.border };
    let input = Paragraph::new(text)
        .style(style)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border)),
        );
    frame.render_widget(input, area);
}

/// [组件] 单选按钮文本，例如 "(•) Pro"
pub fn radio_label(label: &str, checked: bool) -> String {
    if checked {
        format!("(•) {label}")
    } else {
        format!("( ) {label}")
    }
}

/// 条目样式，选中时反色
pub fn item_style(color: Color, selected: bool) -> Style {
    if selected {
        Style::default()
            .fg(color)
            .add_modifier(Modifier::BOLD | Modifier::REVERSED)
    } else {
        Style::default().fg(color)
    }
}
