use qol_launcher::command::Launcher;
use qol_launcher::menu::{MenuHost, NodeId, NodeKind};
use std::collections::HashMap;
use std::io;
use std::sync::Mutex;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq)]
pub struct HostNode {
    pub parent: Option<NodeId>,
    pub kind: Option<NodeKind>,
    pub label: String,
    pub enabled: bool,
}

/// In-memory tray menu. Separators have `kind == None`.
#[derive(Default)]
pub struct RecordingHost {
    next: usize,
    pub nodes: HashMap<NodeId, HostNode>,
    pub order: Vec<NodeId>,
    pub retired: Vec<NodeId>,
}

impl RecordingHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id_of(&self, label: &str) -> Option<NodeId> {
        self.order
            .iter()
            .find(|id| self.nodes.get(*id).is_some_and(|n| n.label == label))
            .cloned()
    }

    pub fn labels(&self) -> Vec<String> {
        self.order
            .iter()
            .filter_map(|id| self.nodes.get(id))
            .filter(|n| n.kind.is_some())
            .map(|n| n.label.clone())
            .collect()
    }

    fn insert(&mut self, parent: Option<&NodeId>, kind: Option<NodeKind>, label: &str) -> NodeId {
        self.next += 1;
        let id = NodeId(format!("node-{}", self.next));
        self.nodes.insert(
            id.clone(),
            HostNode {
                parent: parent.cloned(),
                kind,
                label: label.to_string(),
                enabled: true,
            },
        );
        self.order.push(id.clone());
        id
    }
}

impl MenuHost for RecordingHost {
    fn add_node(
        &mut self,
        parent: Option<&NodeId>,
        kind: NodeKind,
        label: &str,
        _description: &str,
    ) -> anyhow::Result<NodeId> {
        Ok(self.insert(parent, Some(kind), label))
    }

    fn add_separator(&mut self, parent: Option<&NodeId>) -> anyhow::Result<NodeId> {
        Ok(self.insert(parent, None, "---"))
    }

    fn retire(&mut self, id: &NodeId) {
        if self.nodes.remove(id).is_some() {
            self.order.retain(|o| o != id);
            self.retired.push(id.clone());
        }
    }

    fn set_label(&mut self, id: &NodeId, label: &str) {
        if let Some(node) = self.nodes.get_mut(id) {
            node.label = label.to_string();
        }
    }

    fn set_enabled(&mut self, id: &NodeId, enabled: bool) {
        if let Some(node) = self.nodes.get_mut(id) {
            node.enabled = enabled;
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum LaunchCall {
    Open(String),
    Spawn(String, Vec<String>),
}

#[derive(Default)]
pub struct RecordingLauncher {
    pub calls: Mutex<Vec<LaunchCall>>,
}

impl RecordingLauncher {
    pub fn calls(&self) -> Vec<LaunchCall> {
        self.calls.lock().unwrap().clone()
    }
}

impl Launcher for RecordingLauncher {
    fn open(&self, target: &str) -> io::Result<()> {
        self.calls.lock().unwrap().push(LaunchCall::Open(target.to_string()));
        Ok(())
    }

    fn spawn(&self, program: &str, args: &[String]) -> io::Result<()> {
        self.calls
            .lock()
            .unwrap()
            .push(LaunchCall::Spawn(program.to_string(), args.to_vec()));
        Ok(())
    }

    fn opener(&self) -> &str {
        "xdg-open"
    }
}

/// Polls `condition` until it holds or two seconds pass.
pub async fn eventually(mut condition: impl FnMut() -> bool) -> bool {
    for _ in 0..200 {
        if condition() {
            return true;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    false
}

/// Lets spawned listeners run for a moment.
pub async fn settle() {
    tokio::time::sleep(Duration::from_millis(50)).await;
}

pub fn write_config(path: &std::path::Path, json: &str) {
    std::fs::write(path, json).unwrap();
}

pub const TWO_GROUP_CONFIG: &str = r#"{
  "lists": [
    {
      "name": "Dev",
      "item": [
        { "item_name": "Echo", "item_des": "says hi", "item_run": "echo hi" },
        {
          "item_name": "Docs",
          "sub_items": [
            { "item_name": "Rust", "item_run": "https://doc.rust-lang.org" }
          ]
        }
      ]
    },
    {
      "name": "Ops",
      "item": [
        { "item_name": "Uptime", "item_run": "uptime" }
      ]
    }
  ],
  "about": {}
}"#;

pub const ONE_GROUP_CONFIG: &str = r#"{
  "lists": [
    { "name": "Solo", "item": [ { "item_name": "Date", "item_run": "date" } ] }
  ]
}"#;
