//! 偏好存储：界面语言与主题
//!
//! 语言保存在键 `language` 下；主题的读写交给 [`crate::theme`]。
//! 持久化失败只记录日志，内存中的值照常生效。

use crate::i18n::Language;
use crate::storage::KeyValueStore;
use crate::theme::{self, Theme};

const LANGUAGE_KEY: &str = "language";

/// 从已保存的值或系统区域设置推断界面语言
///
/// 已保存的值必须是支持的语言代码之一；否则取区域设置的主标签
/// （`pt-BR`、`es_ES.UTF-8` 中的 `pt`、`es`），依次匹配 pt、es，其余为 en。
pub fn resolve_language(saved: Option<&str>, locale: Option<&str>) -> Language {
    if let Some(lang) = saved.and_then(Language::from_code) {
        return lang;
    }

    let primary = locale
        .and_then(|tag| tag.split(['-', '_', '.']).next())
        .unwrap_or_default();

    if primary == "pt" {
        Language::Pt
    } else if primary == "es" {
        Language::Es
    } else {
        Language::En
    }
}

/// 读取运行环境的区域设置
pub fn detect_locale() -> Option<String> {
    detect_locale_with(|var| std::env::var(var).ok())
}

/// 依次查找 LC_ALL、LC_MESSAGES、LANG，跳过空值以及 C/POSIX
pub fn detect_locale_with(lookup: impl Fn(&str) -> Option<String>) -> Option<String> {
    ["LC_ALL", "LC_MESSAGES", "LANG"]
        .into_iter()
        .filter_map(lookup)
        .find(|value| !value.is_empty() && value != "C" && value != "POSIX")
}

pub struct PreferenceStore {
    store: Box<dyn KeyValueStore>,
    language: Language,
    theme: Theme,
}

impl PreferenceStore {
    pub fn load(store: Box<dyn KeyValueStore>, locale: Option<&str>) -> Self {
        let saved = store.get(LANGUAGE_KEY);
        let language = resolve_language(saved.as_deref(), locale);
        let theme = theme::load(&*store);

        tracing::info!(
            "Preferences loaded: language={} (saved={:?}, locale={:?}) theme={}",
            language.code(),
            saved,
            locale,
            theme.code()
        );

        Self {
            store,
            language,
            theme,
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn set_language(&mut self, language: Language) {
        self.language = language;
        if let Err(e) = self.store.set(LANGUAGE_KEY, language.code()) {
            tracing::warn!("Failed to persist language {}: {}", language.code(), e);
        }
    }

    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        if let Err(e) = theme::persist(&mut *self.store, self.theme) {
            tracing::warn!("Failed to persist theme {}: {}", self.theme.code(), e);
        }
        self.theme
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Error, Result};
    use crate::storage::{MemoryStore, TomlStore};

    /// 写入总是失败的存储
    struct ReadOnlyStore;

    impl KeyValueStore for ReadOnlyStore {
        fn get(&self, _key: &str) -> Option<String> {
            None
        }

        fn set(&mut self, _key: &str, _value: &str) -> Result<()> {
            Err(Error::Io(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "read-only",
            )))
        }
    }

    #[test]
    fn test_resolve_from_locale() {
        assert_eq!(resolve_language(None, Some("pt-BR")), Language::Pt);
        assert_eq!(resolve_language(None, Some("pt_PT.UTF-8")), Language::Pt);
        assert_eq!(resolve_language(None, Some("es")), Language::Es);
        assert_eq!(resolve_language(None, Some("fr-FR")), Language::En);
        assert_eq!(resolve_language(None, Some("ptx")), Language::En);
        assert_eq!(resolve_language(None, None), Language::En);
    }

    fn env(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: Vec<(String, String)> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.iter().find(|(k, _)| k == key).map(|(_, v)| v.clone())
    }

    #[test]
    fn test_locale_variable_order() {
        let all = env(&[("LC_ALL", "es_ES"), ("LC_MESSAGES", "pt_BR"), ("LANG", "en_US")]);
        assert_eq!(detect_locale_with(all).as_deref(), Some("es_ES"));

        let messages = env(&[("LC_MESSAGES", "pt_BR"), ("LANG", "en_US")]);
        assert_eq!(detect_locale_with(messages).as_deref(), Some("pt_BR"));

        let lang = env(&[("LANG", "en_US.UTF-8")]);
        assert_eq!(detect_locale_with(lang).as_deref(), Some("en_US.UTF-8"));

        assert_eq!(detect_locale_with(env(&[])), None);
    }

    #[test]
    fn test_locale_skips_empty_and_posix_values() {
        let vars = env(&[("LC_ALL", ""), ("LC_MESSAGES", "C"), ("LANG", "pt_PT.UTF-8")]);
        assert_eq!(detect_locale_with(vars).as_deref(), Some("pt_PT.UTF-8"));

        let posix_only = env(&[("LC_ALL", "POSIX"), ("LANG", "C")]);
        assert_eq!(detect_locale_with(posix_only), None);
    }

    #[test]
    fn test_saved_language_wins_over_locale() {
        assert_eq!(resolve_language(Some("es"), Some("pt-BR")), Language::Es);
        assert_eq!(resolve_language(Some("en"), Some("pt-BR")), Language::En);
    }

    #[test]
    fn test_invalid_saved_language_falls_back() {
        assert_eq!(resolve_language(Some("de"), Some("es-MX")), Language::Es);
        assert_eq!(resolve_language(Some(""), None), Language::En);
    }

    #[test]
    fn test_load_without_saved_value_uses_locale() {
        let prefs = PreferenceStore::load(Box::new(MemoryStore::new()), Some("pt-BR"));
        assert_eq!(prefs.language(), Language::Pt);
        assert_eq!(prefs.theme(), Theme::Light);
    }

    #[test]
    fn test_preferences_persist_across_loads() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preferences.toml");

        let mut prefs = PreferenceStore::load(Box::new(TomlStore::open(&path)), None);
        prefs.set_language(Language::Es);
        assert_eq!(prefs.toggle_theme(), Theme::Dark);

        let reloaded = PreferenceStore::load(Box::new(TomlStore::open(&path)), Some("pt-BR"));
        assert_eq!(reloaded.language(), Language::Es);
        assert_eq!(reloaded.theme(), Theme::Dark);
    }

    #[test]
    fn test_write_failure_keeps_in_memory_value() {
        let mut prefs = PreferenceStore::load(Box::new(ReadOnlyStore), Some("es-AR"));
        assert_eq!(prefs.language(), Language::Es);

        prefs.set_language(Language::Pt);
        assert_eq!(prefs.language(), Language::Pt);
        assert_eq!(prefs.toggle_theme(), Theme::Dark);
    }
}
