/// 条目类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ItemKind {
    #[default]
    Pro,
    Con,
}

impl ItemKind {
    pub fn toggled(self) -> Self {
        match self {
            ItemKind::Pro => ItemKind::Con,
            ItemKind::Con => ItemKind::Pro,
        }
    }
}

/// 待添加条目（输入框内容 + 所选类型）
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PendingEntry {
    pub text: String,
    pub kind: ItemKind,
}

/// 推荐结论
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recommendation {
    Favorable,
    Unfavorable,
}

/// 派生统计，每次读取时重新计算
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub pros_count: usize,
    pub cons_count: usize,
    pub percentage: u8,
    pub recommendation: Recommendation,
}

impl Summary {
    pub fn total(&self) -> usize {
        self.pros_count + self.cons_count
    }
}

/// 根据正反条目数量计算统计
///
/// 百分比四舍五入（0.5 向上），总数为 0 时为 0；百分比 >= 50 即为 Favorable。
pub fn summarize(pros_count: usize, cons_count: usize) -> Summary {
    let total = pros_count + cons_count;
    let percentage = if total == 0 {
        0
    } else {
        ((200 * pros_count + total) / (2 * total)) as u8
    };

    let recommendation = if percentage >= 50 {
        Recommendation::Favorable
    } else {
        Recommendation::Unfavorable
    };

    Summary {
        pros_count,
        cons_count,
        percentage,
        recommendation,
    }
}

/// 决策清单（仅存在于当前会话）
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DecisionList {
    pub title: String,
    pub pros: Vec<String>,
    pub cons: Vec<String>,
    pub pending: PendingEntry,
}

impl DecisionList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self, kind: ItemKind) -> &[String] {
        match kind {
            ItemKind::Pro => &self.pros,
            ItemKind::Con => &self.cons,
        }
    }

    fn items_mut(&mut self, kind: ItemKind) -> &mut Vec<String> {
        match kind {
            ItemKind::Pro => &mut self.pros,
            ItemKind::Con => &mut self.cons,
        }
    }

    /// 添加条目；空白文本被静默忽略
    pub fn add_item(&mut self, text: &str, kind: ItemKind) -> bool {
        if text.trim().is_empty() {
            return false;
        }

        self.items_mut(kind).push(text.to_string());
        self.pending.text.clear();
        true
    }

    /// 提交输入框中的待添加条目
    pub fn submit_pending(&mut self) -> bool {
        let text = std::mem::take(&mut self.pending.text);
        let kind = self.pending.kind;
        if self.add_item(&text, kind) {
            true
        } else {
            self.pending.text = text;
            false
        }
    }

    /// 按位置删除条目，越界时不做任何事
    pub fn delete_item(&mut self, kind: ItemKind, index: usize) -> Option<String> {
        let items = self.items_mut(kind);
        if index < items.len() {
            Some(items.remove(index))
        } else {
            None
        }
    }

    /// 清空标题、条目和输入，偏好设置不受影响
    pub fn reset(&mut self) {
        self.title.clear();
        self.pros.clear();
        self.cons.clear();
        self.pending = PendingEntry::default();
    }

    pub fn summary(&self) -> Summary {
        summarize(self.pros.len(), self.cons.len())
    }

    pub fn is_empty(&self) -> bool {
        self.pros.is_empty() && self.cons.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_item_appends_to_chosen_side() {
        let mut list = DecisionList::new();
        assert!(list.add_item("Cheaper", ItemKind::Pro));
        assert_eq!(list.pros, vec!["Cheaper"]);
        assert!(list.cons.is_empty());

        assert!(list.add_item("Slower", ItemKind::Con));
        assert_eq!(list.pros.len(), 1);
        assert_eq!(list.cons, vec!["Slower"]);
    }

    #[test]
    fn test_blank_item_is_ignored() {
        let mut list = DecisionList::new();
        list.pending.text = "  ".to_string();

        assert!(!list.add_item("  ", ItemKind::Pro));
        assert!(!list.add_item("", ItemKind::Con));
        assert!(!list.add_item("\t\n", ItemKind::Pro));

        assert!(list.is_empty());
        assert_eq!(list.pending.text, "  ");
        assert_eq!(list.summary().pros_count, 0);
    }

    #[test]
    fn test_add_keeps_text_as_typed_and_clears_pending() {
        let mut list = DecisionList::new();
        list.pending = PendingEntry {
            text: " Faster ".to_string(),
            kind: ItemKind::Con,
        };

        assert!(list.submit_pending());
        assert_eq!(list.cons, vec![" Faster "]);
        assert!(list.pending.text.is_empty());
        assert_eq!(list.pending.kind, ItemKind::Con);
    }

    #[test]
    fn test_delete_item_preserves_order() {
        let mut list = DecisionList::new();
        for text in ["a", "b", "c", "d"] {
            list.add_item(text, ItemKind::Pro);
        }

        assert_eq!(list.delete_item(ItemKind::Pro, 1), Some("b".to_string()));
        assert_eq!(list.pros, vec!["a", "c", "d"]);
        assert!(list.cons.is_empty());
    }

    #[test]
    fn test_delete_out_of_range_is_noop() {
        let mut list = DecisionList::new();
        list.add_item("a", ItemKind::Con);

        assert_eq!(list.delete_item(ItemKind::Con, 1), None);
        assert_eq!(list.delete_item(ItemKind::Pro, 0), None);
        assert_eq!(list.cons, vec!["a"]);
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut list = DecisionList::new();
        list.title = "New job".to_string();
        list.add_item("Salary", ItemKind::Pro);
        list.add_item("Commute", ItemKind::Con);
        list.pending = PendingEntry {
            text: "draft".to_string(),
            kind: ItemKind::Con,
        };

        list.reset();

        assert_eq!(list, DecisionList::new());
        assert_eq!(list.pending.kind, ItemKind::Pro);
    }

    #[test]
    fn test_summary_boundaries() {
        let empty = summarize(0, 0);
        assert_eq!(empty.percentage, 0);
        assert_eq!(empty.recommendation, Recommendation::Unfavorable);

        let mostly_pro = summarize(3, 1);
        assert_eq!(mostly_pro.percentage, 75);
        assert_eq!(mostly_pro.recommendation, Recommendation::Favorable);

        let even = summarize(1, 1);
        assert_eq!(even.percentage, 50);
        assert_eq!(even.recommendation, Recommendation::Favorable);

        let only_cons = summarize(0, 4);
        assert_eq!(only_cons.percentage, 0);
        assert_eq!(only_cons.recommendation, Recommendation::Unfavorable);

        assert_eq!(summarize(5, 0).percentage, 100);
    }

    #[test]
    fn test_summary_rounds_half_up() {
        assert_eq!(summarize(1, 2).percentage, 33);
        assert_eq!(summarize(1, 7).percentage, 13); // 12.5
        assert_eq!(summarize(49, 51).recommendation, Recommendation::Unfavorable);
    }

    #[test]
    fn test_cheaper_slower_scenario() {
        let mut list = DecisionList::new();
        list.add_item("Cheaper", ItemKind::Pro);
        list.add_item("Slower", ItemKind::Con);
        list.add_item("Cheaper2", ItemKind::Pro);

        let summary = list.summary();
        assert_eq!(summary.pros_count, 2);
        assert_eq!(summary.cons_count, 1);
        assert_eq!(summary.percentage, 67);
        assert_eq!(summary.recommendation, Recommendation::Favorable);
    }
}
