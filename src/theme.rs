//! 亮色/暗色主题
//!
//! 主题的持久化格式（键名和取值）由本模块负责，偏好存储只负责调用。

use ratatui::style::Color;

use crate::error::Result;
use crate::storage::KeyValueStore;

const THEME_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn code(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// 读取已保存的主题，缺失或无效时使用亮色
pub fn load(store: &dyn KeyValueStore) -> Theme {
    store
        .get(THEME_KEY)
        .and_then(|code| Theme::from_code(&code))
        .unwrap_or_default()
}

/// 保存主题
pub fn persist(store: &mut dyn KeyValueStore, theme: Theme) -> Result<()> {
    tracing::debug!("Switching to {} theme", theme.code());
    store.set(THEME_KEY, theme.code())
}

/// 终端调色板
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub text: Color,
    pub muted: Color,
    pub accent: Color,
    pub border: Color,
    pub pro: Color,
    pub con: Color,
}

impl Palette {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self {
                background: Color::White,
                text: Color::Black,
                muted: Color::DarkGray,
                accent: Color::Blue,
                border: Color::Gray,
                pro: Color::Green,
                con: Color::Red,
            },
            Theme::Dark => Self {
                background: Color::Black,
                text: Color::White,
                muted: Color::Gray,
                accent: Color::Cyan,
                border: Color::DarkGray,
                pro: Color::LightGreen,
                con: Color::LightRed,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn test_toggle_round_trips() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
    }

    #[test]
    fn test_load_defaults_to_light() {
        let mut store = MemoryStore::new();
        assert_eq!(load(&store), Theme::Light);

        store.set(THEME_KEY, "sepia").unwrap();
        assert_eq!(load(&store), Theme::Light);

        persist(&mut store, Theme::Dark).unwrap();
        assert_eq!(load(&store), Theme::Dark);
    }
}
