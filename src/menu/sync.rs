use super::{MenuHost, NodeId, NodeKind};
use crate::config::{ActionNode, Configuration};

/// Receives every leaf created by a rebuild and every leaf it retires.
pub trait LeafRegistry {
    fn register_leaf(&mut self, id: &NodeId, run_spec: &str);
    fn retire_leaf(&mut self, id: &NodeId);
}

/// Menu entries created by the last rebuild, in creation order.
#[derive(Debug, Default)]
pub struct LiveMenuSet {
    handles: Vec<NodeId>,
    leaves: Vec<NodeId>,
    separators: Vec<NodeId>,
}

impl LiveMenuSet {
    pub fn handles(&self) -> &[NodeId] {
        &self.handles
    }

    pub fn leaves(&self) -> &[NodeId] {
        &self.leaves
    }

    pub fn separator_count(&self) -> usize {
        self.separators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty() && self.separators.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RebuildSummary {
    pub retired: usize,
    pub created: usize,
    pub leaves: usize,
}

pub struct MenuSynchronizer<R: LeafRegistry> {
    registry: R,
    live: LiveMenuSet,
}

impl<R: LeafRegistry> MenuSynchronizer<R> {
    pub fn new(registry: R) -> Self {
        Self {
            registry,
            live: LiveMenuSet::default(),
        }
    }

    pub fn registry(&self) -> &R {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut R {
        &mut self.registry
    }

    pub fn live(&self) -> &LiveMenuSet {
        &self.live
    }

    /// Retires every live entry and returns how many handles were dropped.
    /// Leaf listeners are detached first so no click reaches a hidden entry.
    pub fn retire_all(&mut self, host: &mut dyn MenuHost) -> usize {
        let live = std::mem::take(&mut self.live);

        for id in &live.leaves {
            self.registry.retire_leaf(id);
        }
        for id in live.separators.iter().rev() {
            host.retire(id);
        }
        for id in live.handles.iter().rev() {
            host.retire(id);
        }

        live.handles.len()
    }

    /// Replaces the live menu with one built from `config`.
    pub fn rebuild(&mut self, host: &mut dyn MenuHost, config: &Configuration) -> RebuildSummary {
        let retired = self.retire_all(host);
        let mut live = LiveMenuSet::default();

        for group in &config.groups {
            let group_id = match host.add_node(None, NodeKind::Group, &group.name, "") {
                Ok(id) => id,
                Err(e) => {
                    log::warn!("Failed to add group {:?}: {}", group.name, e);
                    continue;
                }
            };
            live.handles.push(group_id.clone());

            for entry in &group.entries {
                emit_node(host, entry, &group_id, &mut self.registry, &mut live);
            }
            push_separator(host, None, &mut live);
        }

        let summary = RebuildSummary {
            retired,
            created: live.handles.len(),
            leaves: live.leaves.len(),
        };
        self.live = live;

        log::info!(
            "Menu rebuilt: {} entries ({} actions), {} retired",
            summary.created,
            summary.leaves,
            summary.retired
        );
        summary
    }
}

fn emit_node<R: LeafRegistry>(
    host: &mut dyn MenuHost,
    node: &ActionNode,
    parent: &NodeId,
    registry: &mut R,
    live: &mut LiveMenuSet,
) {
    let kind = if node.is_leaf() { NodeKind::Leaf } else { NodeKind::Submenu };
    let id = match host.add_node(Some(parent), kind, &node.name, &node.description) {
        Ok(id) => id,
        Err(e) => {
            log::warn!("Failed to add menu entry {:?}: {}", node.name, e);
            return;
        }
    };
    live.handles.push(id.clone());

    if node.is_leaf() {
        registry.register_leaf(&id, &node.run_spec);
        live.leaves.push(id);
    } else {
        for child in &node.children {
            emit_node(host, child, &id, registry, live);
        }
    }

    push_separator(host, Some(parent), live);
}

fn push_separator(host: &mut dyn MenuHost, parent: Option<&NodeId>, live: &mut LiveMenuSet) {
    match host.add_separator(parent) {
        Ok(id) => live.separators.push(id),
        Err(e) => log::debug!("Failed to add separator: {}", e),
    }
}
