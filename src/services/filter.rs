use crate::catalog::{Kit, Script, Tier};
use serde::Serialize;
use std::collections::BTreeSet;

pub const FEATURED_CATEGORY: &str = "featured";

/// Facet accessors shared by kits and scripts.
pub trait Listing {
    fn title(&self) -> &str;
    fn description(&self) -> &str;
    fn tags(&self) -> &[String];
    fn category(&self) -> &str;
    fn featured(&self) -> bool;
    fn tier(&self) -> Option<Tier>;
    fn language(&self) -> Option<&str>;
}

impl Listing for Kit {
    fn title(&self) -> &str {
        &self.name
    }
    fn description(&self) -> &str {
        &self.description
    }
    fn tags(&self) -> &[String] {
        &self.tags
    }
    fn category(&self) -> &str {
        &self.category
    }
    fn featured(&self) -> bool {
        self.featured
    }
    fn tier(&self) -> Option<Tier> {
        None
    }
    fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }
}

impl Listing for Script {
    fn title(&self) -> &str {
        &self.title
    }
    fn description(&self) -> &str {
        &self.description
    }
    fn tags(&self) -> &[String] {
        &self.tags
    }
    fn category(&self) -> &str {
        &self.category
    }
    fn featured(&self) -> bool {
        self.featured
    }
    fn tier(&self) -> Option<Tier> {
        self.tier
    }
    fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TierFilter {
    All,
    Only(Tier),
}

impl TierFilter {
    pub fn parse(raw: &str) -> anyhow::Result<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(TierFilter::All),
            "free" => Ok(TierFilter::Only(Tier::Free)),
            "pro" => Ok(TierFilter::Only(Tier::Pro)),
            "best" => Ok(TierFilter::Only(Tier::Best)),
            other => anyhow::bail!("unknown tier: {} (expected all, free, pro or best)", other),
        }
    }
}

/// Facet selections for one browse view. Owned by the view that created it.
#[derive(Debug, Clone, Serialize)]
pub struct FilterState {
    pub category: String,
    pub tier: TierFilter,
    pub languages: BTreeSet<String>,
    pub query: String,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            category: FEATURED_CATEGORY.to_string(),
            tier: TierFilter::All,
            languages: BTreeSet::new(),
            query: String::new(),
        }
    }
}

impl FilterState {
    pub fn toggle_language(&mut self, language: &str) {
        if !self.languages.remove(language) {
            self.languages.insert(language.to_string());
        }
    }

    pub fn clear(&mut self) {
        *self = FilterState::default();
    }

    pub fn has_active_filters(&self) -> bool {
        !self.languages.is_empty()
            || !self.query.is_empty()
            || self.tier != TierFilter::All
            || self.category != FEATURED_CATEGORY
    }

    pub fn matches<T: Listing>(&self, item: &T) -> bool {
        self.matches_category(item)
            && self.matches_tier(item)
            && self.matches_language(item)
            && self.matches_text(item)
    }

    fn matches_category<T: Listing>(&self, item: &T) -> bool {
        if self.category == FEATURED_CATEGORY {
            item.featured()
        } else {
            item.category() == self.category
        }
    }

    fn matches_tier<T: Listing>(&self, item: &T) -> bool {
        match self.tier {
            TierFilter::All => true,
            TierFilter::Only(t) => item.tier() == Some(t),
        }
    }

    fn matches_language<T: Listing>(&self, item: &T) -> bool {
        self.languages.is_empty()
            || item
                .language()
                .map(|l| self.languages.contains(l))
                .unwrap_or(false)
    }

    fn matches_text<T: Listing>(&self, item: &T) -> bool {
        if self.query.is_empty() {
            return true;
        }
        let q = self.query.to_lowercase();
        item.title().to_lowercase().contains(&q)
            || item.description().to_lowercase().contains(&q)
            || item.tags().iter().any(|t| t.to_lowercase().contains(&q))
    }
}

/// Order-preserving subset of `items` that passes every active facet.
pub fn filter<'a, T: Listing>(items: &'a [T], state: &FilterState) -> Vec<&'a T> {
    let out: Vec<&T> = items.iter().filter(|i| state.matches(*i)).collect();
    log::debug!(
        "filter category={} tier={:?} languages={} query={:?}: {} of {}",
        state.category,
        state.tier,
        state.languages.len(),
        state.query,
        out.len(),
        items.len()
    );
    out
}
