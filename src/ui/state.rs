//! App 状态定义 (Model)
//!
//! 包含应用状态结构体及相关枚举

use std::path::PathBuf;

use crate::i18n::{Translations, translations};
use crate::models::{DecisionList, ItemKind};
use crate::preferences::PreferenceStore;
use crate::theme::Palette;

/// 应用状态
pub struct App {
    pub list: DecisionList,
    pub prefs: PreferenceStore,
    pub mode: AppMode,
    pub focus: ItemKind, // 当前选中的列
    pub selected: [usize; 2], // 每列的选中位置 [pro, con]
    pub message: Option<String>,
    pub export_dir: PathBuf,
}

/// 应用模式
#[derive(Debug, Clone, PartialEq)]
pub enum AppMode {
    Normal,
    EditingTitle,
    AddingItem,
    SelectingLanguage(usize), // 语言列表中高亮的位置
    Confirm(ConfirmAction),
}

/// 确认操作类型
#[derive(Debug, Clone, PartialEq)]
pub enum ConfirmAction {
    Reset,
}

impl App {
    /// 创建新的应用实例
    pub fn new(prefs: PreferenceStore, export_dir: PathBuf) -> Self {
        Self {
            list: DecisionList::new(),
            prefs,
            mode: AppMode::Normal,
            focus: ItemKind::Pro,
            selected: [0, 0],
            message: None,
            export_dir,
        }
    }

    pub fn t(&self) -> &'static Translations {
        translations(self.prefs.language())
    }

    pub fn palette(&self) -> Palette {
        Palette::for_theme(self.prefs.theme())
    }

    fn column(kind: ItemKind) -> usize {
        match kind {
            ItemKind::Pro => 0,
            ItemKind::Con => 1,
        }
    }

    /// 某列的选中位置（列为空时为 None）
    pub fn selected_index(&self, kind: ItemKind) -> Option<usize> {
        let len = self.list.items(kind).len();
        (len > 0).then(|| self.selected[Self::column(kind)].min(len - 1))
    }

    pub fn set_selected(&mut self, kind: ItemKind, index: usize) {
        self.selected[Self::column(kind)] = index;
    }

    /// 确保选中索引有效
    pub fn clamp_selection(&mut self) {
        for kind in [ItemKind::Pro, ItemKind::Con] {
            let index = self.selected_index(kind).unwrap_or(0);
            self.set_selected(kind, index);
        }
    }
}
