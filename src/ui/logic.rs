//! 业务逻辑处理 (Update/Dispatch)
//!
//! 包含核心的 dispatch 逻辑和各种业务处理方法

use super::actions::Action;
use super::state::{App, AppMode, ConfirmAction};
use crate::export::export_report;
use crate::i18n::Language;
use crate::models::ItemKind;
use crate::theme::Theme;

impl App {
    /// 核心逻辑分发
    pub fn dispatch(&mut self, action: Action) -> bool {
        match action {
            Action::Quit => return true,
            Action::MoveSelectionUp => self.move_up(),
            Action::MoveSelectionDown => self.move_down(),
            Action::FocusPros => self.focus = ItemKind::Pro,
            Action::FocusCons => self.focus = ItemKind::Con,

            Action::StartEditTitle => self.mode = AppMode::EditingTitle,
            Action::StartAddItem => self.mode = AppMode::AddingItem,
            Action::DeleteSelected => self.delete_selected(),
            Action::StartReset => self.mode = AppMode::Confirm(ConfirmAction::Reset),
            Action::Export => self.export(),
            Action::StartSelectLanguage => {
                self.mode = AppMode::SelectingLanguage(self.prefs.language().index());
            }
            Action::ToggleTheme => self.toggle_theme(),

            Action::ToggleKind => {
                if self.mode == AppMode::AddingItem {
                    self.list.pending.kind = self.list.pending.kind.toggled();
                }
            }

            Action::Cancel => self.cancel(),

            Action::Submit => match self.mode {
                AppMode::EditingTitle => self.mode = AppMode::Normal,
                AppMode::AddingItem => self.confirm_add_item(),
                AppMode::SelectingLanguage(index) => self.confirm_language(index),
                AppMode::Confirm(ConfirmAction::Reset) => self.confirm_reset(),
                AppMode::Normal => {}
            },

            Action::Input(c) => match self.mode {
                AppMode::EditingTitle => self.list.title.push(c),
                AppMode::AddingItem => self.list.pending.text.push(c),
                _ => {}
            },

            Action::DeleteChar => match self.mode {
                AppMode::EditingTitle => {
                    self.list.title.pop();
                }
                AppMode::AddingItem => {
                    self.list.pending.text.pop();
                }
                _ => {}
            },
        }
        false
    }

    // ============ 导航相关 ============

    /// 向上移动选择
    pub fn move_up(&mut self) {
        if let AppMode::SelectingLanguage(index) = &mut self.mode {
            *index = index.saturating_sub(1);
            return;
        }

        if let Some(index) = self.selected_index(self.focus) {
            self.set_selected(self.focus, index.saturating_sub(1));
        }
    }

    /// 向下移动选择
    pub fn move_down(&mut self) {
        if let AppMode::SelectingLanguage(index) = &mut self.mode {
            if *index + 1 < Language::ALL.len() {
                *index += 1;
            }
            return;
        }

        let len = self.list.items(self.focus).len();
        if let Some(index) = self.selected_index(self.focus) {
            if index + 1 < len {
                self.set_selected(self.focus, index + 1);
            }
        }
    }

    // ============ 条目相关 ============

    /// 提交输入框；空白文本不做任何事，输入框保持打开以便连续添加
    pub fn confirm_add_item(&mut self) {
        let kind = self.list.pending.kind;
        if self.list.submit_pending() {
            let last = self.list.items(kind).len() - 1;
            self.focus = kind;
            self.set_selected(kind, last);
            self.message = Some(self.t().item_added.to_string());
            tracing::debug!("Added {:?} item, {:?}", kind, self.list.summary());
        }
    }

    /// 删除当前列中选中的条目
    pub fn delete_selected(&mut self) {
        let Some(index) = self.selected_index(self.focus) else {
            return;
        };

        if self.list.delete_item(self.focus, index).is_some() {
            self.clamp_selection();
            self.message = Some(self.t().item_deleted.to_string());
        }
    }

    /// 执行重置
    pub fn confirm_reset(&mut self) {
        self.list.reset();
        self.focus = ItemKind::Pro;
        self.selected = [0, 0];
        self.mode = AppMode::Normal;
        self.message = None;
        tracing::info!("List reset");
    }

    // ============ 导出 ============

    pub fn export(&mut self) {
        let t = self.t();
        self.message = Some(
            match export_report(&self.list, self.prefs.language(), &self.export_dir) {
                Ok(path) => format!("{} {}", t.exported_to, path.display()),
                Err(e) => {
                    tracing::error!("Export failed: {}", e);
                    format!("{}: {}", t.export_failed, e)
                }
            },
        );
    }

    // ============ 偏好设置 ============

    pub fn confirm_language(&mut self, index: usize) {
        if let Some(language) = Language::ALL.get(index) {
            self.prefs.set_language(*language);
        }
        self.mode = AppMode::Normal;
        self.message = None;
    }

    pub fn toggle_theme(&mut self) {
        let theme = self.prefs.toggle_theme();
        let t = self.t();
        self.message = Some(
            match theme {
                Theme::Light => t.light_mode,
                Theme::Dark => t.dark_mode,
            }
            .to_string(),
        );
    }

    // ============ 通用操作 ============

    /// 取消当前操作（待添加的文本保留）
    pub fn cancel(&mut self) {
        self.mode = AppMode::Normal;
        self.message = None;
    }
}
