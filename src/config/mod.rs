pub mod edit;
pub mod store;

pub use edit::{ConfigEditor, EditError};
pub use store::{ConfigError, ConfigStore};

use serde::{Deserialize, Serialize};

/// The full launcher menu, in on-screen order.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Configuration {
    #[serde(rename = "lists", default)]
    pub groups: Vec<Group>,
    #[serde(default)]
    pub about: About,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Group {
    pub name: String,
    #[serde(rename = "item", default)]
    pub entries: Vec<ActionNode>,
}

/// One configured entry. A node with children is a sub-menu and its
/// `run_spec` is never executed.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ActionNode {
    #[serde(rename = "item_name")]
    pub name: String,
    #[serde(rename = "item_des", default)]
    pub description: String,
    #[serde(rename = "item_run", default)]
    pub run_spec: String,
    #[serde(rename = "sub_items", default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<ActionNode>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct About {}

impl ActionNode {
    pub fn leaf(name: &str, description: &str, run_spec: &str) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            run_spec: run_spec.to_string(),
            children: Vec::new(),
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Number of nodes in this subtree, including `self`.
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(ActionNode::node_count).sum::<usize>()
    }
}

impl Configuration {
    /// Menu handles a full build of this configuration creates: one per
    /// group plus one per action node at any depth.
    pub fn handle_count(&self) -> usize {
        self.groups
            .iter()
            .map(|g| 1 + g.entries.iter().map(ActionNode::node_count).sum::<usize>())
            .sum()
    }
}
