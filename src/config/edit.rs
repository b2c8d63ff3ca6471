use super::{ActionNode, Configuration, Group};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum EditError {
    #[error("no group at index {0}")]
    GroupNotFound(usize),

    #[error("no entry at path {0:?}")]
    EntryNotFound(Vec<usize>),

    #[error("entry path must not be empty")]
    EmptyPath,
}

/// In-memory edits against a configuration file.
///
/// Entries are addressed by an index path: `[2]` is the third entry of a
/// group, `[2, 0]` the first child of that entry, and so on.
pub struct ConfigEditor {
    path: PathBuf,
    config: Configuration,
}

impl ConfigEditor {
    /// Opens `path`, starting from an empty configuration if the file does
    /// not exist yet.
    pub fn open(path: &Path) -> Result<Self> {
        let config = if path.exists() {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse {}", path.display()))?
        } else {
            Configuration::default()
        };

        Ok(Self {
            path: path.to_path_buf(),
            config,
        })
    }

    pub fn config(&self) -> &Configuration {
        &self.config
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create {}", parent.display()))?;
            }
        }
        let content = serde_json::to_string_pretty(&self.config)?;
        std::fs::write(&self.path, content)
            .with_context(|| format!("Failed to write {}", self.path.display()))?;
        log::info!("Saved config to {}", self.path.display());
        Ok(())
    }

    pub fn add_group(&mut self, name: &str) -> usize {
        self.config.groups.push(Group {
            name: name.to_string(),
            entries: Vec::new(),
        });
        self.config.groups.len() - 1
    }

    pub fn rename_group(&mut self, group: usize, name: &str) -> Result<(), EditError> {
        self.group_mut(group)?.name = name.to_string();
        Ok(())
    }

    pub fn remove_group(&mut self, group: usize) -> Result<Group, EditError> {
        if group >= self.config.groups.len() {
            return Err(EditError::GroupNotFound(group));
        }
        Ok(self.config.groups.remove(group))
    }

    /// Appends `node` to the group when `parent` is empty, otherwise to the
    /// children of the entry at `parent`.
    pub fn add_entry(
        &mut self,
        group: usize,
        parent: &[usize],
        node: ActionNode,
    ) -> Result<Vec<usize>, EditError> {
        let siblings = self.siblings_mut(group, parent)?;
        siblings.push(node);
        let mut path = parent.to_vec();
        path.push(siblings.len() - 1);
        Ok(path)
    }

    pub fn entry_mut(&mut self, group: usize, path: &[usize]) -> Result<&mut ActionNode, EditError> {
        let (last, parent) = path.split_last().ok_or(EditError::EmptyPath)?;
        self.siblings_mut(group, parent)?
            .get_mut(*last)
            .ok_or_else(|| EditError::EntryNotFound(path.to_vec()))
    }

    pub fn remove_entry(&mut self, group: usize, path: &[usize]) -> Result<ActionNode, EditError> {
        let (last, parent) = path.split_last().ok_or(EditError::EmptyPath)?;
        let siblings = self.siblings_mut(group, parent)?;
        if *last >= siblings.len() {
            return Err(EditError::EntryNotFound(path.to_vec()));
        }
        Ok(siblings.remove(*last))
    }

    fn group_mut(&mut self, group: usize) -> Result<&mut Group, EditError> {
        self.config
            .groups
            .get_mut(group)
            .ok_or(EditError::GroupNotFound(group))
    }

    fn siblings_mut(&mut self, group: usize, parent: &[usize]) -> Result<&mut Vec<ActionNode>, EditError> {
        let mut siblings = &mut self.group_mut(group)?.entries;
        for (depth, &idx) in parent.iter().enumerate() {
            siblings = siblings
                .get_mut(idx)
                .map(|node| &mut node.children)
                .ok_or_else(|| EditError::EntryNotFound(parent[..=depth].to_vec()))?;
        }
        Ok(siblings)
    }
}
