use crate::catalog::{Kit, NodeKind, Script, Tier};
use crate::services::filter::FEATURED_CATEGORY;
use crate::services::quiz::DEFAULT_AUTO_ADVANCE_MS;
use serde::{Deserialize, Serialize};

fn default_category() -> String {
    FEATURED_CATEGORY.to_string()
}

fn default_auto_advance_ms() -> u64 {
    DEFAULT_AUTO_ADVANCE_MS
}

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub quiz: QuizConfig,
}

#[derive(Debug, Deserialize)]
pub struct GeneralConfig {
    #[serde(default)]
    pub catalog: Option<String>,
    #[serde(default = "default_category")]
    pub default_category: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            catalog: None,
            default_category: default_category(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct QuizConfig {
    #[serde(default = "default_auto_advance_ms")]
    pub auto_advance_ms: u64,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            auto_advance_ms: default_auto_advance_ms(),
        }
    }
}

#[derive(Serialize, Clone)]
pub struct KitSummary {
    pub id: u32,
    pub name: String,
    pub description: String,
    pub category: String,
    pub tags: Vec<String>,
    pub featured: bool,
    pub language: Option<String>,
    pub rating: Option<f32>,
    pub setup_time: Option<String>,
    pub status: Option<String>,
}

impl From<&Kit> for KitSummary {
    fn from(k: &Kit) -> Self {
        Self {
            id: k.id,
            name: k.name.clone(),
            description: k.description.clone(),
            category: k.category.clone(),
            tags: k.tags.clone(),
            featured: k.featured,
            language: k.language.clone(),
            rating: k.rating,
            setup_time: k.setup_time.clone(),
            status: k.status.clone(),
        }
    }
}

#[derive(Serialize, Clone)]
pub struct ScriptSummary {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: String,
    pub tags: Vec<String>,
    pub featured: bool,
    pub tier: Tier,
    pub language: Option<String>,
    pub difficulty: Option<String>,
}

impl From<&Script> for ScriptSummary {
    fn from(s: &Script) -> Self {
        Self {
            id: s.id.clone(),
            title: s.title.clone(),
            description: s.description.clone(),
            category: s.category.clone(),
            tags: s.tags.clone(),
            featured: s.featured,
            tier: s.display_tier(),
            language: s.language.clone(),
            difficulty: s.difficulty.clone(),
        }
    }
}

#[derive(Serialize, Clone)]
pub struct FacetCount {
    pub name: String,
    pub count: usize,
}

#[derive(Serialize, Clone, Debug)]
pub struct Recommendation {
    pub kit: u32,
    pub name: String,
    pub description: String,
    pub score: u32,
    pub why: Vec<String>,
    pub skill_level: Option<String>,
}

#[derive(Serialize, Clone, Debug)]
pub struct TreeRow {
    pub path: String,
    pub name: String,
    pub depth: usize,
    pub kind: NodeKind,
    pub expanded: bool,
    pub selected: bool,
    pub important: bool,
}

#[derive(Serialize, Clone, Debug)]
pub struct FilePreview {
    pub path: String,
    pub name: String,
    pub kind: NodeKind,
    pub language: String,
    pub description: Option<String>,
    pub content: Option<String>,
    pub important: bool,
}

#[derive(Serialize)]
pub struct SandboxLink {
    pub kit: u32,
    pub repository: Option<String>,
    pub url: Option<String>,
}

#[derive(Serialize)]
pub struct ScriptSection {
    pub script: String,
    pub tab: String,
    pub text: Option<String>,
}

#[derive(Serialize)]
pub struct QuizReport {
    pub completed: bool,
    pub answers: Option<crate::services::scoring::QuizAnswers>,
    pub recommendations: Vec<Recommendation>,
}

#[derive(Serialize)]
pub struct ValidateReport {
    pub catalog: String,
    pub kits: usize,
    pub scripts: usize,
}
