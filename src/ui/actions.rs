//! Action 枚举定义 (Intent)
//!
//! 用户交互转化为明确的语义化 Action

/// 用户操作枚举
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Quit,
    MoveSelectionUp,
    MoveSelectionDown,
    FocusPros,
    FocusCons,

    // 触发特定功能
    StartEditTitle,
    StartAddItem,
    DeleteSelected,
    StartReset,
    Export,
    StartSelectLanguage,
    ToggleTheme,

    // 表单/通用交互
    ToggleKind,  // Tab
    Cancel,      // Esc / n
    Submit,      // Enter / y
    Input(char), // 输入字符
    DeleteChar,  // Backspace
}
