//! 导出：把清单和统计渲染为纯文本报告并写入文件

use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate};

use crate::error::Result;
use crate::i18n::{Language, Translations, translations};
use crate::models::{DecisionList, ItemKind, Recommendation};

/// 渲染报告
///
/// 统计部分只在至少有一个条目时出现，与屏幕显示一致。
pub fn render_report(list: &DecisionList, t: &Translations, date: NaiveDate) -> String {
    let heading = display_title(list, t);
    let mut out = String::new();

    let _ = writeln!(out, "{heading}");
    let _ = writeln!(out, "{}", "=".repeat(heading.chars().count()));

    for kind in [ItemKind::Pro, ItemKind::Con] {
        let (label, marker) = match kind {
            ItemKind::Pro => (t.pros, '+'),
            ItemKind::Con => (t.cons, '-'),
        };
        let items = list.items(kind);

        let _ = writeln!(out);
        let _ = writeln!(out, "{} ({})", label, items.len());
        if items.is_empty() {
            let _ = writeln!(out, "  {}", t.no_items_yet);
        }
        for item in items {
            let _ = writeln!(out, "  {marker} {item}");
        }
    }

    let summary = list.summary();
    if summary.total() > 0 {
        let verdict = match summary.recommendation {
            Recommendation::Favorable => t.recommended,
            Recommendation::Unfavorable => t.not_recommended,
        };
        let _ = writeln!(out);
        let _ = writeln!(out, "{}", t.summary);
        let _ = writeln!(
            out,
            "  {} {}, {} {}",
            summary.pros_count,
            t.pros.to_lowercase(),
            summary.cons_count,
            t.cons.to_lowercase()
        );
        let _ = writeln!(out, "  {}% {} - {}", summary.percentage, t.positive, verdict);
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "{} - {} {}", heading, t.created_on, date.format("%Y-%m-%d"));
    out
}

/// 写入 `<dir>/<标题>-YYYYMMDD-HHMMSS.txt`，返回文件路径
pub fn export_report(list: &DecisionList, language: Language, dir: &Path) -> Result<PathBuf> {
    let t = translations(language);
    let now = Local::now();
    let report = render_report(list, t, now.date_naive());

    fs::create_dir_all(dir)?;
    let file_name = format!(
        "{}-{}.txt",
        slugify(display_title(list, t)),
        now.format("%Y%m%d-%H%M%S")
    );
    let path = dir.join(file_name);
    fs::write(&path, report)?;

    tracing::info!("Exported list to {}", path.display());
    Ok(path)
}

fn display_title<'a>(list: &'a DecisionList, t: &'a Translations) -> &'a str {
    if list.title.is_empty() {
        t.title
    } else {
        &list.title
    }
}

/// 文件名安全的标题
fn slugify(title: &str) -> String {
    let slug: String = title
        .chars()
        .map(|c| {
            if c.is_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '-'
            }
        })
        .collect();

    let slug = slug
        .split('-')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("-");

    if slug.is_empty() {
        "list".to_string()
    } else {
        slug
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 14).unwrap()
    }

    #[test]
    fn test_empty_report_has_no_summary() {
        let list = DecisionList::new();
        let report = render_report(&list, translations(Language::En), date());

        assert!(report.starts_with("Pros & Cons List\n"));
        assert!(report.contains("Pros (0)\n  No items added yet"));
        assert!(!report.contains("Summary"));
        assert!(report.ends_with("Pros & Cons List - Created on 2025-03-14\n"));
    }

    #[test]
    fn test_report_lists_items_and_summary() {
        let mut list = DecisionList::new();
        list.title = "Move to Lisbon".to_string();
        list.add_item("Weather", ItemKind::Pro);
        list.add_item("Food", ItemKind::Pro);
        list.add_item("Distance", ItemKind::Con);

        let report = render_report(&list, translations(Language::Pt), date());

        assert!(report.contains("Prós (2)\n  + Weather\n  + Food\n"));
        assert!(report.contains("Contras (1)\n  - Distance\n"));
        assert!(report.contains("2 prós, 1 contras"));
        assert!(report.contains("67% Positivo - Recomendado"));
        assert!(report.contains("Move to Lisbon - Criado em 2025-03-14"));
    }

    #[test]
    fn test_only_empty_title_falls_back_to_default() {
        let mut list = DecisionList::new();
        list.title = "  ".to_string();
        let report = render_report(&list, translations(Language::En), date());

        assert!(report.starts_with("  \n"));
        assert!(report.ends_with("   - Created on 2025-03-14\n"));
    }

    #[test]
    fn test_export_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut list = DecisionList::new();
        list.title = "Buy a car?".to_string();
        list.add_item("Freedom", ItemKind::Pro);
        list.add_item("Cost", ItemKind::Con);
        list.add_item("Parking", ItemKind::Con);

        let path = export_report(&list, Language::Es, dir.path()).unwrap();

        let name = path.file_name().unwrap().to_string_lossy().to_string();
        assert!(name.starts_with("buy-a-car-"));
        assert!(name.ends_with(".txt"));

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("33% Positivo - No Recomendado"));
    }

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Pros & Cons List"), "pros-cons-list");
        assert_eq!(slugify("  ?? "), "list");
        assert_eq!(slugify("Título"), "título");
    }
}
