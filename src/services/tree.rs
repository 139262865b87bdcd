use crate::catalog::{Children, NodeKind, TreeNode};
use crate::domain::models::{FilePreview, TreeRow};
use std::collections::BTreeSet;

/// Look up the node addressed by a slash-delimited path.
///
/// Empty segments are dropped, so `src`, `src/` and `src//app.js` normalise
/// the same way. Each segment is tried as an exact key first and then with a
/// trailing slash; authored trees use both spellings for folders.
pub fn resolve<'a>(root: &'a Children, path: &str) -> Option<&'a TreeNode> {
    walk(root, path).map(|(_, node)| node)
}

/// Row path of the node `path` resolves to, built from the stored keys.
/// `src/app.js` against a `src/` folder gives `src//app.js`.
pub fn rendered_path(root: &Children, path: &str) -> Option<String> {
    walk(root, path).map(|(rendered, _)| rendered)
}

fn walk<'a>(root: &'a Children, path: &str) -> Option<(String, &'a TreeNode)> {
    let parts: Vec<&str> = path.split('/').filter(|p| !p.is_empty()).collect();
    let mut level = root;
    let mut rendered = String::new();
    for (i, part) in parts.iter().enumerate() {
        let (key, found) = level
            .entry(part)
            .or_else(|| level.entry(&format!("{}/", part)))?;
        rendered = join_path(&rendered, key);
        if i == parts.len() - 1 {
            return Some((rendered, found));
        }
        match (&found.kind, &found.children) {
            (NodeKind::Folder, Some(children)) if !children.is_empty() => level = children,
            _ => return None,
        }
    }
    None
}

pub fn join_path(base: &str, name: &str) -> String {
    if base.is_empty() {
        name.to_string()
    } else {
        format!("{}/{}", base, name)
    }
}

/// Syntax-highlighting language for a file name, by extension.
pub fn language_for(filename: &str) -> &'static str {
    let ext = match filename.rsplit_once('.') {
        Some((_, ext)) => ext.to_ascii_lowercase(),
        None => return "text",
    };
    match ext.as_str() {
        "js" => "javascript",
        "jsx" => "jsx",
        "ts" => "typescript",
        "tsx" => "tsx",
        "py" => "python",
        "css" => "css",
        "json" => "json",
        "html" => "html",
        "md" => "markdown",
        "yml" | "yaml" => "yaml",
        _ => "text",
    }
}

/// Per-view state of the file tree: what is expanded, selected and searched.
#[derive(Debug, Default, Clone)]
pub struct TreeView {
    pub expanded: BTreeSet<String>,
    pub selected: Option<String>,
    pub search: String,
}

impl TreeView {
    pub fn toggle(&mut self, path: &str) {
        if !self.expanded.remove(path) {
            self.expanded.insert(path.to_string());
        }
    }

    pub fn expand(&mut self, path: &str) {
        self.expanded.insert(path.to_string());
    }

    pub fn expand_all(&mut self, root: &Children) {
        self.expanded.clear();
        collect_folder_paths(root, "", &mut self.expanded);
    }

    pub fn collapse_all(&mut self) {
        self.expanded.clear();
    }

    pub fn select(&mut self, path: &str) {
        self.selected = Some(path.to_string());
    }

    fn matches(&self, name: &str, node: &TreeNode) -> bool {
        if self.search.is_empty() {
            return true;
        }
        let term = self.search.to_lowercase();
        let contains = |s: &Option<String>| {
            s.as_ref()
                .map(|v| v.to_lowercase().contains(&term))
                .unwrap_or(false)
        };
        name.to_lowercase().contains(&term)
            || contains(&node.description)
            || contains(&node.content)
    }

    /// Depth-first rows as a tree widget would draw them. A node that fails
    /// the search hides its whole subtree.
    pub fn rows(&self, root: &Children) -> Vec<TreeRow> {
        let mut out = Vec::new();
        self.push_rows(root, "", 0, &mut out);
        out
    }

    fn push_rows(&self, level: &Children, base: &str, depth: usize, out: &mut Vec<TreeRow>) {
        for (name, node) in level.iter() {
            if !self.matches(name, node) {
                continue;
            }
            let path = join_path(base, name);
            let is_folder = node.is_folder();
            let expanded = is_folder && self.expanded.contains(&path);
            out.push(TreeRow {
                path: path.clone(),
                name: name.to_string(),
                depth,
                kind: node.kind,
                expanded,
                selected: !is_folder && self.selected.as_deref() == Some(path.as_str()),
                important: node.important,
            });
            if expanded {
                if let Some(children) = &node.children {
                    self.push_rows(children, &path, depth + 1, out);
                }
            }
        }
    }

    /// Preview of the selected path, or `None` when nothing resolves.
    pub fn preview(&self, root: &Children) -> Option<FilePreview> {
        let path = self.selected.as_deref()?;
        preview(root, path)
    }
}

fn collect_folder_paths(level: &Children, base: &str, out: &mut BTreeSet<String>) {
    for (name, node) in level.iter() {
        if !node.is_folder() {
            continue;
        }
        let path = join_path(base, name);
        if let Some(children) = &node.children {
            collect_folder_paths(children, &path, out);
        }
        out.insert(path);
    }
}

pub fn preview(root: &Children, path: &str) -> Option<FilePreview> {
    let node = resolve(root, path)?;
    let name = node.name.clone().unwrap_or_else(|| {
        path.split('/')
            .filter(|p| !p.is_empty())
            .last()
            .unwrap_or(path)
            .to_string()
    });
    let language = match node.kind {
        NodeKind::File => language_for(&name),
        NodeKind::Folder => "text",
    };
    Some(FilePreview {
        path: path.to_string(),
        language: language.to_string(),
        name,
        kind: node.kind,
        description: node.description.clone(),
        content: node.content.clone(),
        important: node.important,
    })
}

/// Plain-text outline of a kit's tree, as copied to the clipboard.
pub fn summary(title: &str, root: &Children) -> String {
    let mut text = format!("{}\n{}\n\n", title, "=".repeat(title.chars().count()));
    push_summary(root, "", &mut text);
    text
}

fn push_summary(level: &Children, indent: &str, out: &mut String) {
    for (name, node) in level.iter() {
        match node.kind {
            NodeKind::Folder => {
                out.push_str(&format!("{}📁 {}\n", indent, name));
                if let Some(children) = &node.children {
                    push_summary(children, &format!("{}  ", indent), out);
                }
            }
            NodeKind::File => out.push_str(&format!("{}📄 {}\n", indent, name)),
        }
    }
}
