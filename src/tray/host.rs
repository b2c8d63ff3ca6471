use crate::menu::{MenuHost, NodeId, NodeKind};
use anyhow::Result;
use std::collections::HashMap;
use tray_icon::menu::{IsMenuItem, Menu, MenuId, MenuItem, PredefinedMenuItem, Submenu};

enum Entry {
    Item(MenuItem),
    Submenu(Submenu),
    Separator(PredefinedMenuItem),
}

impl Entry {
    fn id(&self) -> &MenuId {
        match self {
            Entry::Item(item) => item.id(),
            Entry::Submenu(submenu) => submenu.id(),
            Entry::Separator(separator) => separator.id(),
        }
    }

    fn as_menu_item(&self) -> &dyn IsMenuItem {
        match self {
            Entry::Item(item) => item,
            Entry::Submenu(submenu) => submenu,
            Entry::Separator(separator) => separator,
        }
    }
}

struct Placed {
    entry: Entry,
    parent: Option<NodeId>,
}

/// [`MenuHost`] over the tray's context menu. Must stay on the UI thread.
pub struct TrayMenuHost {
    menu: Menu,
    entries: HashMap<NodeId, Placed>,
}

impl TrayMenuHost {
    pub fn new() -> Self {
        Self {
            menu: Menu::new(),
            entries: HashMap::new(),
        }
    }

    pub fn menu(&self) -> &Menu {
        &self.menu
    }

    fn append(&mut self, parent: Option<&NodeId>, entry: Entry) -> Result<NodeId> {
        let id = NodeId(entry.id().0.clone());

        match parent {
            None => self.menu.append(entry.as_menu_item())?,
            Some(parent_id) => match self.entries.get(parent_id) {
                Some(Placed { entry: Entry::Submenu(submenu), .. }) => submenu.append(entry.as_menu_item())?,
                _ => anyhow::bail!("Parent {} is not a live submenu", parent_id),
            },
        }

        self.entries.insert(
            id.clone(),
            Placed {
                entry,
                parent: parent.cloned(),
            },
        );
        Ok(id)
    }
}

impl Default for TrayMenuHost {
    fn default() -> Self {
        Self::new()
    }
}

impl MenuHost for TrayMenuHost {
    // Menu items have no tooltip slot, so descriptions are not shown.
    fn add_node(
        &mut self,
        parent: Option<&NodeId>,
        kind: NodeKind,
        label: &str,
        _description: &str,
    ) -> Result<NodeId> {
        let entry = match kind {
            NodeKind::Leaf => Entry::Item(MenuItem::new(label, true, None)),
            NodeKind::Group | NodeKind::Submenu => Entry::Submenu(Submenu::new(label, true)),
        };
        self.append(parent, entry)
    }

    fn add_separator(&mut self, parent: Option<&NodeId>) -> Result<NodeId> {
        self.append(parent, Entry::Separator(PredefinedMenuItem::separator()))
    }

    fn retire(&mut self, id: &NodeId) {
        let Some(placed) = self.entries.remove(id) else {
            return;
        };
        let item = placed.entry.as_menu_item();

        let result = match &placed.parent {
            None => self.menu.remove(item),
            Some(parent_id) => match self.entries.get(parent_id) {
                Some(Placed { entry: Entry::Submenu(submenu), .. }) => submenu.remove(item),
                // Parent already gone; the entry went with it.
                _ => Ok(()),
            },
        };

        if let Err(e) = result {
            log::debug!("Failed to remove menu entry {}: {}", id, e);
        }
    }

    fn set_label(&mut self, id: &NodeId, label: &str) {
        match self.entries.get(id).map(|p| &p.entry) {
            Some(Entry::Item(item)) => item.set_text(label),
            Some(Entry::Submenu(submenu)) => submenu.set_text(label),
            _ => log::warn!("Cannot relabel menu entry {}", id),
        }
    }

    fn set_enabled(&mut self, id: &NodeId, enabled: bool) {
        match self.entries.get(id).map(|p| &p.entry) {
            Some(Entry::Item(item)) => item.set_enabled(enabled),
            Some(Entry::Submenu(submenu)) => submenu.set_enabled(enabled),
            _ => log::warn!("Cannot toggle menu entry {}", id),
        }
    }
}
