/// Seam between the engine and the platform's accessibility layer.
///
/// The host owns the live window handles; the engine only ever sees the
/// arena snapshot. Node-addressed actions take a `NodeId` that must refer to
/// the snapshot most recently returned by `current_tree` — actions are issued
/// within the same tick that produced the snapshot, never later.
use async_trait::async_trait;

use crate::errors::BotResult;
use crate::tree::{NodeId, UiTree};

/// Inbound notification driving the engine. Carries no payload: the engine
/// re-reads the current tree itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostEvent {
    TreeChanged,
    Stop,
}

/// How to (re)launch the target application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LaunchIntent {
    /// Platform-resolved standard launch entry for a package.
    Package(String),
    /// Explicit activity component, used when resolution fails.
    Component { package: String, activity: String },
}

/// Tree inspection and input injection primitives, as the platform gives them.
///
/// All input actions are fire-and-forget: the returned bool reports whether
/// the action was *issued*, not whether the UI reacted. The engine infers the
/// outcome by re-classifying the screen on a later tick.
#[async_trait]
pub trait UiHost: Send + Sync {
    /// Snapshot of the foreground window, or `None` if no window is available.
    async fn current_tree(&self) -> Option<UiTree>;

    async fn perform_click(&self, node: NodeId) -> bool;

    async fn perform_scroll_forward(&self, node: NodeId) -> bool;

    /// Press-and-release gesture at a screen coordinate.
    async fn synthesize_tap(&self, x: i32, y: i32, duration_ms: u32) -> bool;

    /// Standard launch entry point for `package`, if the platform can resolve one.
    fn launch_intent_for(&self, package: &str) -> Option<LaunchIntent>;

    async fn start_activity(&self, intent: LaunchIntent) -> BotResult<()>;
}
