/// Screen classification from tree content alone.
///
/// There is no screen id anywhere in the target app's tree; each predicate
/// keys off text fragments that only occur on its screen. All predicates are
/// pure and evaluated fresh every tick.
use crate::config::TargetConfig;
use crate::tree::query;
use crate::tree::UiTree;

fn contains_any(tree: &UiTree, labels: &[String]) -> bool {
    let needles: Vec<&str> = labels.iter().map(String::as_str).collect();
    query::find_first_by_any_text(tree, tree.root(), &needles).is_some()
}

/// The process-category list (Инвентаризация / Приемка / ...).
pub fn is_process_list_screen(tree: &UiTree, target: &TargetConfig) -> bool {
    contains_any(tree, &target.process_labels)
}

/// Any step of the booking calendar flow: date picker, time picker, confirm.
pub fn is_calendar_screen(tree: &UiTree, target: &TargetConfig) -> bool {
    contains_any(tree, &target.calendar_labels)
}

/// The "choose a time" sheet, a sub-case of the calendar screen.
pub fn is_time_picker_open(tree: &UiTree, target: &TargetConfig) -> bool {
    query::contains_text(tree, tree.root(), &target.time_picker_label)
}

/// The "choose a warehouse" list.
pub fn is_warehouse_picker(tree: &UiTree, target: &TargetConfig) -> bool {
    query::contains_text(tree, tree.root(), &target.warehouse_prompt)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::node::{UiNode, UiTreeBuilder};

    fn tree_with_texts(texts: &[&str]) -> UiTree {
        let mut b = UiTreeBuilder::new().package("ru.ozon.hire");
        let root = b.add(None, UiNode::default());
        for t in texts {
            b.add(Some(root), UiNode { text: Some((*t).into()), ..Default::default() });
        }
        b.build()
    }

    #[test]
    fn process_list_recognized_by_any_category_label() {
        let target = TargetConfig::default();
        assert!(is_process_list_screen(&tree_with_texts(&["Приемка", "8 ч"]), &target));
        assert!(is_process_list_screen(&tree_with_texts(&["Размещение"]), &target));
        assert!(!is_process_list_screen(&tree_with_texts(&["Главная"]), &target));
    }

    #[test]
    fn calendar_covers_date_time_and_confirm_steps() {
        let target = TargetConfig::default();
        assert!(is_calendar_screen(&tree_with_texts(&["Записывайтесь", "15"]), &target));
        assert!(is_calendar_screen(&tree_with_texts(&["Выберите время"]), &target));
        assert!(is_calendar_screen(&tree_with_texts(&["Записаться"]), &target));
        assert!(!is_calendar_screen(&tree_with_texts(&["Выберите склад"]), &target));
    }

    #[test]
    fn time_picker_is_a_calendar_subcase() {
        let target = TargetConfig::default();
        let tree = tree_with_texts(&["Выберите время", "08:00–20:00"]);
        assert!(is_calendar_screen(&tree, &target));
        assert!(is_time_picker_open(&tree, &target));
        assert!(!is_time_picker_open(&tree_with_texts(&["Записывайтесь"]), &target));
    }

    #[test]
    fn warehouse_picker_recognized() {
        let target = TargetConfig::default();
        assert!(is_warehouse_picker(&tree_with_texts(&["Выберите склад"]), &target));
        assert!(!is_warehouse_picker(&tree_with_texts(&["Приемка"]), &target));
    }
}
