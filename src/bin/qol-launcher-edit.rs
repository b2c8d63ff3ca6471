use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use qol_launcher::config::{ActionNode, ConfigEditor};
use qol_launcher::settings::LauncherSettings;
use std::path::PathBuf;

/// Edit the QoL Launcher menu file. Use "Reload Config" in the tray afterwards.
#[derive(Parser)]
#[command(name = "qol-launcher-edit", version)]
struct Cli {
    /// Config file to edit (defaults to the launcher's configured file)
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the menu tree with the indices other commands take
    Show,
    AddGroup {
        name: String,
    },
    RenameGroup {
        group: usize,
        name: String,
    },
    RemoveGroup {
        group: usize,
    },
    /// Add an entry to a group, or under an existing entry with --parent
    AddItem {
        group: usize,
        /// Dotted index path of the parent entry, e.g. 2.0
        #[arg(long, value_parser = parse_entry_path)]
        parent: Option<EntryPath>,
        #[arg(long)]
        name: String,
        #[arg(long, default_value = "")]
        description: String,
        #[arg(long, default_value = "")]
        run: String,
    },
    UpdateItem {
        group: usize,
        #[arg(value_parser = parse_entry_path)]
        path: EntryPath,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        run: Option<String>,
    },
    RemoveItem {
        group: usize,
        #[arg(value_parser = parse_entry_path)]
        path: EntryPath,
    },
}

/// Child indices from a group's top level down, e.g. `2.0`. Kept as one
/// value so clap doesn't treat it as a list of arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
struct EntryPath(Vec<usize>);

fn parse_entry_path(s: &str) -> Result<EntryPath, String> {
    s.split('.')
        .map(|part| part.parse::<usize>().map_err(|_| format!("invalid index {:?} in {:?}", part, s)))
        .collect::<Result<Vec<_>, _>>()
        .map(EntryPath)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .init();

    let cli = Cli::parse();
    let config_path = match cli.config {
        Some(path) => path,
        None => {
            let cwd = std::env::current_dir().context("Failed to read current directory")?;
            LauncherSettings::load(Some(&cwd)).config_file
        }
    };

    let mut editor = ConfigEditor::open(&config_path)?;

    match cli.command {
        Command::Show => {
            print_tree(&editor);
            return Ok(());
        }
        Command::AddGroup { name } => {
            let idx = editor.add_group(&name);
            println!("Added group {}", idx);
        }
        Command::RenameGroup { group, name } => editor.rename_group(group, &name)?,
        Command::RemoveGroup { group } => {
            let removed = editor.remove_group(group)?;
            println!("Removed group {:?}", removed.name);
        }
        Command::AddItem { group, parent, name, description, run } => {
            let node = ActionNode::leaf(&name, &description, &run);
            let path = editor.add_entry(group, parent.as_ref().map_or(&[][..], |p| &p.0), node)?;
            println!("Added entry {}", format_path(&path));
        }
        Command::UpdateItem { group, path, name, description, run } => {
            let node = editor.entry_mut(group, &path.0)?;
            if let Some(name) = name {
                node.name = name;
            }
            if let Some(description) = description {
                node.description = description;
            }
            if let Some(run) = run {
                node.run_spec = run;
            }
        }
        Command::RemoveItem { group, path } => {
            let removed = editor.remove_entry(group, &path.0)?;
            println!("Removed entry {:?}", removed.name);
        }
    }

    editor.save()
}

fn print_tree(editor: &ConfigEditor) {
    println!("{}", editor.path().display());
    for (g, group) in editor.config().groups.iter().enumerate() {
        println!("[{}] {}", g, group.name);
        for (i, node) in group.entries.iter().enumerate() {
            print_node(node, &mut vec![i]);
        }
    }
}

fn print_node(node: &ActionNode, path: &mut Vec<usize>) {
    let indent = "  ".repeat(path.len());
    if node.is_leaf() {
        println!("{}{} {}  -> {}", indent, format_path(path), node.name, node.run_spec);
    } else {
        println!("{}{} {}/", indent, format_path(path), node.name);
    }

    for (i, child) in node.children.iter().enumerate() {
        path.push(i);
        print_node(child, path);
        path.pop();
    }
}

fn format_path(path: &[usize]) -> String {
    path.iter().map(|i| i.to_string()).collect::<Vec<_>>().join(".")
}
