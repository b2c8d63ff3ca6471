pub mod dispatch;
pub mod router;
pub mod sync;

pub use dispatch::{ClickDispatcher, ControlAction, ControlContext, EditTarget, UiCommand, UP_TO_DATE_LABEL};
pub use router::EventRouter;
pub use sync::{LeafRegistry, LiveMenuSet, MenuSynchronizer, RebuildSummary};

use anyhow::Result;
use std::fmt;

/// Identifies one menu entry for the lifetime of the host.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NodeId(pub String);

impl NodeId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NodeId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// Top-level entry for a configured group.
    Group,
    Submenu,
    Leaf,
}

/// Menu primitives the synchronizer needs from the tray.
///
/// `parent == None` targets the top level of the tray menu. Nodes are
/// appended in call order.
pub trait MenuHost {
    fn add_node(
        &mut self,
        parent: Option<&NodeId>,
        kind: NodeKind,
        label: &str,
        description: &str,
    ) -> Result<NodeId>;

    fn add_separator(&mut self, parent: Option<&NodeId>) -> Result<NodeId>;

    /// Hides and drops a node. Unknown ids are ignored.
    fn retire(&mut self, id: &NodeId);

    fn set_label(&mut self, id: &NodeId, label: &str);

    fn set_enabled(&mut self, id: &NodeId, enabled: bool);
}
