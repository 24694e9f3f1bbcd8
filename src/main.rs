mod error;
mod export;
mod i18n;
mod logging;
mod models;
mod preferences;
mod storage;
mod theme;
mod ui;

use std::io;
use std::path::PathBuf;

use clap::Parser;
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::*;

use crate::error::{Error, Result};
use crate::i18n::Language;
use crate::preferences::{PreferenceStore, detect_locale};
use crate::storage::{KeyValueStore, MemoryStore, TomlStore};
use crate::ui::{App, render};

const PREFERENCES_FILE: &str = "preferences.toml";

/// 终端版正反清单
#[derive(Debug, Parser)]
#[command(name = "prosncons", version, about)]
struct Args {
    /// 偏好设置目录（默认 ~/.config/prosncons）
    #[arg(long)]
    config_dir: Option<PathBuf>,

    /// 导出报告的目录
    #[arg(long, default_value = ".")]
    export_dir: PathBuf,

    /// 界面语言 (en, pt, es)，会被保存
    #[arg(long)]
    lang: Option<Language>,
}

/// 获取偏好设置目录路径 (~/.config/prosncons/)
fn get_config_dir(args: &Args) -> Option<PathBuf> {
    args.config_dir
        .clone()
        .or_else(|| dirs::config_dir().map(|dir| dir.join("prosncons")))
}

fn open_store(args: &Args) -> Box<dyn KeyValueStore> {
    match get_config_dir(args) {
        Some(dir) => {
            let store = TomlStore::open(&dir.join(PREFERENCES_FILE));
            tracing::info!("Preferences file: {}", store.path().display());
            Box::new(store)
        }
        None => {
            tracing::warn!("No config directory available, preferences will not be saved");
            Box::new(MemoryStore::new())
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    if let Err(e) = logging::init() {
        eprintln!("Logging disabled: {e}");
    }

    // 加载偏好设置
    let locale = detect_locale();
    let mut prefs = PreferenceStore::load(open_store(&args), locale.as_deref());
    if let Some(lang) = args.lang {
        prefs.set_language(lang);
    }

    // 创建应用状态
    let mut app = App::new(prefs, args.export_dir.clone());

    // 设置终端
    let mut terminal = setup_terminal()?;

    // 主循环
    let result = run_app(&mut terminal, &mut app);

    // 恢复终端
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = &result {
        tracing::error!("Exited with error: {}", e);
    }
    tracing::info!("prosncons exiting");
    result
}

/// 进入原始模式和备用屏幕；中途失败时恢复终端
fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().map_err(|e| Error::terminal(format!("enable raw mode: {e}")))?;
    restore_on_error(enter_alternate_screen(), restore_terminal)
}

fn enter_alternate_screen() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

fn restore_terminal() {
    let _ = disable_raw_mode();
    let mut stdout = io::stdout();
    let _ = execute!(stdout, LeaveAlternateScreen);
}

/// 结果为错误时先执行清理
fn restore_on_error<T>(result: Result<T>, cleanup: impl FnOnce()) -> Result<T> {
    if result.is_err() {
        cleanup();
    }
    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| render(f, app))?;

        if let crossterm::event::Event::Key(key) = crossterm::event::read()? {
            if key.kind == crossterm::event::KeyEventKind::Press && ui::handle_key_event(app, key.code)
            {
                break;
            }
        }
    }
    Ok(())
}
