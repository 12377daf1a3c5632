/// Pure depth-first queries over a `UiTree` snapshot.
///
/// Every function tolerates an absent root (the host may return no window)
/// and preserves child order: matches come back in pre-order, a node before
/// its descendants. Text and description matching is case-insensitive;
/// resource-id matching is case-sensitive because the target app keeps its
/// view ids stably cased while text content varies.
use crate::tree::node::{NodeId, UiTree};

fn text_contains(haystack: &Option<String>, needle: &str) -> bool {
    match haystack {
        Some(t) => t.to_lowercase().contains(&needle.to_lowercase()),
        None => false,
    }
}

/// True if any node's text contains `needle`, case-insensitive.
pub fn contains_text(tree: &UiTree, root: Option<NodeId>, needle: &str) -> bool {
    let Some(id) = root else { return false };
    if text_contains(&tree.node(id).text, needle) {
        return true;
    }
    tree.node(id)
        .children
        .iter()
        .any(|&c| contains_text(tree, Some(c), needle))
}

/// All nodes whose text contains `needle`, in pre-order.
pub fn find_all_by_text(tree: &UiTree, root: Option<NodeId>, needle: &str) -> Vec<NodeId> {
    let mut out = Vec::new();
    collect_by_text(tree, root, needle, &mut out);
    out
}

fn collect_by_text(tree: &UiTree, root: Option<NodeId>, needle: &str, out: &mut Vec<NodeId>) {
    let Some(id) = root else { return };
    if text_contains(&tree.node(id).text, needle) {
        out.push(id);
    }
    for &c in &tree.node(id).children {
        collect_by_text(tree, Some(c), needle, out);
    }
}

/// First node (pre-order) whose text contains any of `needles`.
pub fn find_first_by_any_text(
    tree: &UiTree,
    root: Option<NodeId>,
    needles: &[&str],
) -> Option<NodeId> {
    let id = root?;
    if needles.iter().any(|n| text_contains(&tree.node(id).text, n)) {
        return Some(id);
    }
    tree.node(id)
        .children
        .iter()
        .find_map(|&c| find_first_by_any_text(tree, Some(c), needles))
}

/// All nodes whose text contains any of `needles`, in pre-order.
pub fn find_all_by_any_text(tree: &UiTree, root: Option<NodeId>, needles: &[&str]) -> Vec<NodeId> {
    let mut out = Vec::new();
    collect_by_any_text(tree, root, needles, &mut out);
    out
}

fn collect_by_any_text(
    tree: &UiTree,
    root: Option<NodeId>,
    needles: &[&str],
    out: &mut Vec<NodeId>,
) {
    let Some(id) = root else { return };
    if needles.iter().any(|n| text_contains(&tree.node(id).text, n)) {
        out.push(id);
    }
    for &c in &tree.node(id).children {
        collect_by_any_text(tree, Some(c), needles, out);
    }
}

/// First scrollable node, pre-order, self before children.
pub fn find_scrollable(tree: &UiTree, root: Option<NodeId>) -> Option<NodeId> {
    let id = root?;
    if tree.node(id).scrollable {
        return Some(id);
    }
    tree.node(id)
        .children
        .iter()
        .find_map(|&c| find_scrollable(tree, Some(c)))
}

/// First node whose resource id contains `part`. Case-sensitive.
pub fn find_by_id_substring(tree: &UiTree, root: Option<NodeId>, part: &str) -> Option<NodeId> {
    let id = root?;
    if matches!(&tree.node(id).resource_id, Some(rid) if rid.contains(part)) {
        return Some(id);
    }
    tree.node(id)
        .children
        .iter()
        .find_map(|&c| find_by_id_substring(tree, Some(c), part))
}

/// First node whose accessibility description contains `part`. Case-insensitive.
pub fn find_by_desc_substring(tree: &UiTree, root: Option<NodeId>, part: &str) -> Option<NodeId> {
    let id = root?;
    if text_contains(&tree.node(id).description, part) {
        return Some(id);
    }
    tree.node(id)
        .children
        .iter()
        .find_map(|&c| find_by_desc_substring(tree, Some(c), part))
}

/// Walks `node` up through its ancestors and returns the first clickable one,
/// the node itself included.
pub fn nearest_clickable_ancestor(tree: &UiTree, node: NodeId) -> Option<NodeId> {
    let mut cur = Some(node);
    while let Some(id) = cur {
        if tree.node(id).clickable {
            return Some(id);
        }
        cur = tree.node(id).parent;
    }
    None
}

/// True if `node` or any descendant is checkable and checked.
pub fn has_checked_descendant(tree: &UiTree, node: Option<NodeId>) -> bool {
    let Some(id) = node else { return false };
    let n = tree.node(id);
    if n.checkable && n.checked {
        return true;
    }
    n.children
        .iter()
        .any(|&c| has_checked_descendant(tree, Some(c)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::node::{UiNode, UiTreeBuilder};

    fn text_node(t: &str) -> UiNode {
        UiNode { text: Some(t.into()), ..Default::default() }
    }

    /// root ─ a("Приемка") ─ b("приемка смена")
    ///      └ c(scrollable) ─ d(desc "WarehouseTab")
    fn sample() -> (UiTree, [NodeId; 5]) {
        let mut b = UiTreeBuilder::new();
        let root = b.add(None, UiNode::default());
        let a = b.add(Some(root), text_node("Приемка"));
        let inner = b.add(Some(a), text_node("приемка смена"));
        let c = b.add(
            Some(root),
            UiNode { scrollable: true, ..Default::default() },
        );
        let d = b.add(
            Some(c),
            UiNode { description: Some("WarehouseTab".into()), ..Default::default() },
        );
        (b.build(), [root, a, inner, c, d])
    }

    #[test]
    fn contains_text_is_case_insensitive() {
        let (tree, _) = sample();
        assert!(contains_text(&tree, tree.root(), "ПРИЕМКА"));
        assert!(contains_text(&tree, tree.root(), "смена"));
        assert!(!contains_text(&tree, tree.root(), "Размещение"));
    }

    #[test]
    fn absent_root_matches_nothing() {
        let (tree, _) = sample();
        assert!(!contains_text(&tree, None, "Приемка"));
        assert!(find_all_by_text(&tree, None, "Приемка").is_empty());
        assert!(find_scrollable(&tree, None).is_none());
        assert!(!has_checked_descendant(&tree, None));
    }

    #[test]
    fn find_all_returns_parent_before_child() {
        let (tree, [_, a, inner, ..]) = sample();
        let hits = find_all_by_text(&tree, tree.root(), "приемка");
        assert_eq!(hits, vec![a, inner]);
    }

    #[test]
    fn any_text_traversal_order_wins_over_needle_order() {
        let (tree, [_, a, ..]) = sample();
        // "смена" appears deeper than "Приемка"; pre-order position decides.
        let first = find_first_by_any_text(&tree, tree.root(), &["смена", "приемка"]);
        assert_eq!(first, Some(a));
        let all = find_all_by_any_text(&tree, tree.root(), &["смена", "приемка"]);
        assert_eq!(all.len(), 2);
    }

    #[test]
    fn scrollable_found_preorder() {
        let (tree, [_, _, _, c, _]) = sample();
        assert_eq!(find_scrollable(&tree, tree.root()), Some(c));
    }

    #[test]
    fn id_match_is_case_sensitive_desc_match_is_not() {
        let mut b = UiTreeBuilder::new();
        let root = b.add(None, UiNode::default());
        let with_id = b.add(
            Some(root),
            UiNode { resource_id: Some("ru.ozon.hire:id/availableShift_3".into()), ..Default::default() },
        );
        let tree = b.build();

        assert_eq!(
            find_by_id_substring(&tree, tree.root(), "availableShift"),
            Some(with_id)
        );
        assert!(find_by_id_substring(&tree, tree.root(), "AVAILABLESHIFT").is_none());

        let (desc_tree, [_, _, _, _, d]) = sample();
        assert_eq!(
            find_by_desc_substring(&desc_tree, desc_tree.root(), "warehousetab"),
            Some(d)
        );
    }

    #[test]
    fn clickable_ancestor_skips_non_clickable_parent() {
        let mut b = UiTreeBuilder::new();
        let root = b.add(None, UiNode::default());
        let grand = b.add(Some(root), UiNode { clickable: true, ..Default::default() });
        let parent = b.add(Some(grand), UiNode::default());
        let leaf = b.add(Some(parent), text_node("15"));
        let tree = b.build();

        assert_eq!(nearest_clickable_ancestor(&tree, leaf), Some(grand));
    }

    #[test]
    fn clickable_ancestor_returns_self_and_none_when_absent() {
        let mut b = UiTreeBuilder::new();
        let root = b.add(None, UiNode::default());
        let leaf = b.add(Some(root), UiNode { clickable: true, ..Default::default() });
        let plain = b.add(Some(root), UiNode::default());
        let tree = b.build();

        assert_eq!(nearest_clickable_ancestor(&tree, leaf), Some(leaf));
        assert!(nearest_clickable_ancestor(&tree, plain).is_none());
    }

    #[test]
    fn checked_descendant_requires_checkable_and_checked() {
        let mut b = UiTreeBuilder::new();
        let root = b.add(None, UiNode::default());
        let row = b.add(Some(root), UiNode::default());
        b.add(
            Some(row),
            UiNode { checkable: true, checked: false, ..Default::default() },
        );
        b.add(
            Some(row),
            UiNode { checkable: false, checked: true, ..Default::default() },
        );
        let tree = b.build();
        assert!(!has_checked_descendant(&tree, Some(row)));

        let mut b = UiTreeBuilder::new();
        let root = b.add(None, UiNode::default());
        let row = b.add(Some(root), UiNode::default());
        b.add(
            Some(row),
            UiNode { checkable: true, checked: true, ..Default::default() },
        );
        let tree = b.build();
        assert!(has_checked_descendant(&tree, Some(row)));
    }
}
