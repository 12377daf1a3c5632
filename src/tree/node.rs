/// Arena-backed snapshot of the foreground window's accessibility tree.
///
/// The host materializes one `UiTree` per UI-change notification; the engine
/// reads it for the duration of a single tick and drops it. Nodes are plain
/// records addressed by index, so there are no back-reference cycles and no
/// handle that could outlive the snapshot.
use serde::{Deserialize, Serialize};

/// Index of a node inside its owning `UiTree`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeId(pub usize);

/// Screen-coordinate bounding rectangle, left/top inclusive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bounds {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Bounds {
    pub fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self { left, top, right, bottom }
    }

    /// Centre point, used as the tap target for gesture synthesis.
    pub fn center(&self) -> (i32, i32) {
        ((self.left + self.right) / 2, (self.top + self.bottom) / 2)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UiNode {
    pub text: Option<String>,
    pub description: Option<String>,
    pub resource_id: Option<String>,
    pub clickable: bool,
    pub scrollable: bool,
    pub checkable: bool,
    pub checked: bool,
    pub bounds: Bounds,
    pub children: Vec<NodeId>,
    pub parent: Option<NodeId>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiTree {
    /// Package name of the window this snapshot was captured from.
    pub package_name: Option<String>,
    nodes: Vec<UiNode>,
}

impl UiTree {
    pub fn root(&self) -> Option<NodeId> {
        if self.nodes.is_empty() {
            None
        } else {
            Some(NodeId(0))
        }
    }

    pub fn node(&self, id: NodeId) -> &UiNode {
        &self.nodes[id.0]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// Builder used by host adapters (and tests) to materialize a snapshot.
///
/// Nodes are added parent-first; the first node added becomes the root.
#[derive(Debug, Default)]
pub struct UiTreeBuilder {
    package_name: Option<String>,
    nodes: Vec<UiNode>,
}

impl UiTreeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn package(mut self, name: impl Into<String>) -> Self {
        self.package_name = Some(name.into());
        self
    }

    /// Adds a node under `parent` (`None` only for the root) and returns its id.
    pub fn add(&mut self, parent: Option<NodeId>, mut node: UiNode) -> NodeId {
        let id = NodeId(self.nodes.len());
        node.parent = parent;
        node.children.clear();
        self.nodes.push(node);
        if let Some(p) = parent {
            self.nodes[p.0].children.push(id);
        }
        id
    }

    pub fn build(self) -> UiTree {
        UiTree {
            package_name: self.package_name,
            nodes: self.nodes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_links_parent_and_children_in_order() {
        let mut b = UiTreeBuilder::new().package("com.example");
        let root = b.add(None, UiNode::default());
        let a = b.add(Some(root), UiNode { text: Some("a".into()), ..Default::default() });
        let c = b.add(Some(root), UiNode { text: Some("b".into()), ..Default::default() });
        let tree = b.build();

        assert_eq!(tree.root(), Some(root));
        assert_eq!(tree.node(root).children, vec![a, c]);
        assert_eq!(tree.node(a).parent, Some(root));
        assert_eq!(tree.package_name.as_deref(), Some("com.example"));
    }

    #[test]
    fn empty_tree_has_no_root() {
        let tree = UiTreeBuilder::new().build();
        assert!(tree.root().is_none());
        assert!(tree.is_empty());
    }

    #[test]
    fn bounds_center_is_midpoint() {
        assert_eq!(Bounds::new(0, 0, 100, 50).center(), (50, 25));
        assert_eq!(Bounds::new(10, 20, 30, 60).center(), (20, 40));
    }
}
