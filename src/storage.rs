use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// 简单的字符串键值存储
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// TOML 文件存储 (~/.config/prosncons/preferences.toml)
///
/// 每次写入都会把整张表写回文件。
#[derive(Debug)]
pub struct TomlStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl TomlStore {
    /// 打开存储；文件不存在或无法解析时以空表启动
    pub fn open(path: &Path) -> Self {
        let entries = match load_entries(path) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!("Ignoring unreadable preferences at {}: {}", path.display(), e);
                BTreeMap::new()
            }
        };

        Self {
            path: path.to_path_buf(),
            entries,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl KeyValueStore for TomlStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        save_entries(&self.entries, &self.path)
    }
}

/// 内存存储，用于测试或无法访问配置目录时
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// TOML文件结构：顶层的字符串键值对
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct PreferencesFile {
    #[serde(flatten)]
    entries: BTreeMap<String, String>,
}

/// 从TOML文件加载键值表
fn load_entries(path: &Path) -> Result<BTreeMap<String, String>> {
    if !path.exists() {
        return Ok(BTreeMap::new());
    }

    let content = fs::read_to_string(path)?;
    let data: PreferencesFile = toml::from_str(&content)?;
    Ok(data.entries)
}

/// 保存键值表到TOML文件
fn save_entries(entries: &BTreeMap<String, String>, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let data = PreferencesFile {
        entries: entries.clone(),
    };
    let content = toml::to_string_pretty(&data)?;
    fs::write(path, content)?;
    Ok(())
}
