use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::{BTreeMap, HashSet};
use std::fmt;
use std::path::{Path, PathBuf};

pub const BUILTIN_CATALOG: &str = include_str!("../catalog/builtin.json");
pub const BUILTIN_SOURCE: &str = "builtin";

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Catalog {
    pub name: String,
    #[serde(default)]
    pub kits: Vec<Kit>,
    #[serde(default)]
    pub scripts: Vec<Script>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Kit {
    pub id: u32,
    pub name: String,
    pub description: String,
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default, rename = "githublink")]
    pub github_link: Option<String>,
    #[serde(default)]
    pub recommended_for: Option<RecommendationProfile>,
    #[serde(default)]
    pub skill_level: Option<String>,
    #[serde(default)]
    pub use_cases: Vec<String>,
    #[serde(default)]
    pub rating: Option<f32>,
    #[serde(default)]
    pub setup_time: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub structure: Children,
}

/// Preference values a kit declares itself suited for. Every facet is
/// optional in authored data; absence behaves like an empty set.
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct RecommendationProfile {
    #[serde(default)]
    pub product: Vec<String>,
    #[serde(default)]
    pub experience: Vec<String>,
    #[serde(default)]
    pub team: Vec<String>,
    #[serde(default)]
    pub timeline: Vec<String>,
    #[serde(default)]
    pub priorities: Vec<String>,
    #[serde(default)]
    pub tech: Vec<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Free,
    Pro,
    Best,
}

impl Tier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::Free => "free",
            Tier::Pro => "pro",
            Tier::Best => "best",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Script {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub tier: Option<Tier>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub difficulty: Option<String>,
    #[serde(default)]
    pub models: Vec<String>,
    #[serde(default)]
    pub use_cases: Vec<String>,
    #[serde(default)]
    pub why: Option<String>,
    #[serde(default)]
    pub readme: Option<String>,
    #[serde(default)]
    pub code: CodePayload,
    #[serde(default)]
    pub usage: Option<String>,
}

impl Script {
    /// Tier shown to users; unlabeled scripts display as free.
    pub fn display_tier(&self) -> Tier {
        self.tier.unwrap_or(Tier::Free)
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct CodePayload {
    #[serde(default)]
    pub main: Option<String>,
    #[serde(default)]
    pub requirements: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Folder,
    File,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct TreeNode {
    #[serde(rename = "type")]
    pub kind: NodeKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Children>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub important: bool,
}

impl TreeNode {
    pub fn is_folder(&self) -> bool {
        self.kind == NodeKind::Folder
    }
}

/// Name → node mapping that keeps the authored key order.
#[derive(Debug, Clone, Default)]
pub struct Children(Vec<(String, TreeNode)>);

impl Children {
    pub fn new(entries: Vec<(String, TreeNode)>) -> Self {
        Self(entries)
    }

    pub fn get(&self, key: &str) -> Option<&TreeNode> {
        self.entry(key).map(|(_, v)| v)
    }

    /// Stored key and node for `key`.
    pub fn entry(&self, key: &str) -> Option<(&str, &TreeNode)> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(k, v)| (k.as_str(), v))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &TreeNode)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl Serialize for Children {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (k, v) in &self.0 {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Children {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ChildrenVisitor;

        impl<'de> Visitor<'de> for ChildrenVisitor {
            type Value = Children;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of node names to tree nodes")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Children, A::Error> {
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((k, v)) = access.next_entry::<String, TreeNode>()? {
                    entries.push((k, v));
                }
                Ok(Children(entries))
            }
        }

        deserializer.deserialize_map(ChildrenVisitor)
    }
}

#[derive(thiserror::Error, Debug)]
pub enum CatalogError {
    #[error("kit not found: {0}")]
    KitNotFound(String),
    #[error("script not found: {0}")]
    ScriptNotFound(String),
    #[error("duplicate kit id: {0}")]
    DuplicateKit(u32),
    #[error("duplicate script id: {0}")]
    DuplicateScript(String),
    #[error("kit {kit}: file node `{path}` has children")]
    FileWithChildren { kit: u32, path: String },
}

pub fn resolve_catalog_file(source: &str) -> PathBuf {
    let p = Path::new(source);
    if p.is_dir() {
        p.join("catalog.json")
    } else {
        p.to_path_buf()
    }
}

pub fn load_catalog(source: &str) -> anyhow::Result<Catalog> {
    if source == BUILTIN_SOURCE {
        log::debug!("loading built-in catalog");
        return Ok(serde_json::from_str(BUILTIN_CATALOG)?);
    }
    let file = resolve_catalog_file(source);
    log::debug!("loading catalog from {}", file.display());
    let raw = std::fs::read_to_string(&file)
        .map_err(|e| anyhow::anyhow!("cannot read catalog {}: {}", file.display(), e))?;
    Ok(serde_json::from_str(&raw)?)
}

impl Catalog {
    pub fn kit(&self, id: &str) -> Result<&Kit, CatalogError> {
        id.trim()
            .parse::<u32>()
            .ok()
            .and_then(|n| self.kits.iter().find(|k| k.id == n))
            .ok_or_else(|| CatalogError::KitNotFound(id.to_string()))
    }

    pub fn script(&self, id: &str) -> Result<&Script, CatalogError> {
        self.scripts
            .iter()
            .find(|s| s.id == id)
            .ok_or_else(|| CatalogError::ScriptNotFound(id.to_string()))
    }

    /// Unique script languages, sorted, with how many scripts use each.
    pub fn script_languages(&self) -> BTreeMap<String, usize> {
        let mut out = BTreeMap::new();
        for s in &self.scripts {
            if let Some(lang) = &s.language {
                *out.entry(lang.clone()).or_insert(0) += 1;
            }
        }
        out
    }

    pub fn kit_categories(&self) -> BTreeMap<String, usize> {
        let mut out = BTreeMap::new();
        for k in &self.kits {
            *out.entry(k.category.clone()).or_insert(0) += 1;
        }
        out
    }

    pub fn script_categories(&self) -> BTreeMap<String, usize> {
        let mut out = BTreeMap::new();
        for s in &self.scripts {
            *out.entry(s.category.clone()).or_insert(0) += 1;
        }
        out
    }
}

pub fn validate(c: &Catalog) -> Result<(), CatalogError> {
    let mut kit_ids = HashSet::new();
    for k in &c.kits {
        if !kit_ids.insert(k.id) {
            return Err(CatalogError::DuplicateKit(k.id));
        }
        check_file_nodes(k.id, &k.structure, "")?;
    }
    let mut script_ids = HashSet::new();
    for s in &c.scripts {
        if !script_ids.insert(&s.id) {
            return Err(CatalogError::DuplicateScript(s.id.clone()));
        }
    }
    Ok(())
}

fn check_file_nodes(kit: u32, children: &Children, base: &str) -> Result<(), CatalogError> {
    for (name, node) in children.iter() {
        let path = if base.is_empty() {
            name.to_string()
        } else {
            format!("{}/{}", base, name)
        };
        match (&node.kind, &node.children) {
            (NodeKind::File, Some(_)) => {
                return Err(CatalogError::FileWithChildren { kit, path });
            }
            (NodeKind::Folder, Some(inner)) => check_file_nodes(kit, inner, &path)?,
            _ => {}
        }
    }
    Ok(())
}
