/// Input dispatch over the host's injection primitives.
///
/// Dispatch is fire-and-forget: every method reports whether the action was
/// issued, never whether the target screen actually changed. Callers confirm
/// progress by re-classifying the screen on a later tick.
use std::sync::Arc;

use crate::host::UiHost;
use crate::tree::query;
use crate::tree::{NodeId, UiTree};

pub struct InputDispatcher {
    host: Arc<dyn UiHost>,
    tap_duration_ms: u32,
}

impl InputDispatcher {
    pub fn new(host: Arc<dyn UiHost>, tap_duration_ms: u32) -> Self {
        Self { host, tap_duration_ms }
    }

    /// Clicks `node` if it is clickable, otherwise its nearest clickable
    /// ancestor. Returns false when neither exists or the issue failed.
    pub async fn click(&self, tree: &UiTree, node: NodeId) -> bool {
        if tree.node(node).clickable {
            return self.host.perform_click(node).await;
        }
        match query::nearest_clickable_ancestor(tree, node) {
            Some(ancestor) => self.host.perform_click(ancestor).await,
            None => {
                tracing::debug!(node = node.0, "click: no clickable ancestor");
                false
            }
        }
    }

    /// Synthesizes a short tap at the centroid of the node's bounds. Does not
    /// require the node to be clickable; used as the click fallback and for
    /// tab-bar items addressed by description.
    pub async fn tap(&self, tree: &UiTree, node: NodeId) -> bool {
        let (x, y) = tree.node(node).bounds.center();
        tracing::debug!(x, y, "tap");
        self.host.synthesize_tap(x, y, self.tap_duration_ms).await
    }

    /// Forward-scroll on a scrollable node.
    pub async fn scroll_forward(&self, node: NodeId) -> bool {
        self.host.perform_scroll_forward(node).await
    }
}
