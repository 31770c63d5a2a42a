//! Configuration of the layout engine.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Where the bracket of a constituent is drawn relative to the word row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlacementGroup {
    /// Above the words (high-level constituents)
    Above,
    /// Below the words (all other constituents except the root)
    Below,
    /// Not drawn (the root, unless it is high-level)
    Hidden,
}

/// Configuration of the layout engine.
///
/// The only setting is the set of *high-level* labels: constituents with
/// one of these labels are drawn above the word row, all others below.
///
/// Can be deserialized from JSON, e.g.
/// `{"high_level_labels": ["SN_Sujeto", "SV_Predicado"]}`.
///
/// # Example
/// ```
/// use synbox::layout::{LayoutConfig, PlacementGroup};
///
/// let config = LayoutConfig::new().with_high_level_labels(["NP", "VP"]);
/// assert_eq!(config.classify("NP", 1), PlacementGroup::Above);
/// assert_eq!(config.classify("Det", 2), PlacementGroup::Below);
/// assert_eq!(config.classify("S", 0), PlacementGroup::Hidden);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub high_level_labels: BTreeSet<String>,
}

impl LayoutConfig {
    /// Creates a configuration without high-level labels.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a high-level label.
    pub fn with_high_level_label<S: Into<String>>(mut self, label: S) -> Self {
        self.high_level_labels.insert(label.into());
        self
    }

    /// Adds several high-level labels.
    pub fn with_high_level_labels<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.high_level_labels
            .extend(labels.into_iter().map(Into::into));
        self
    }

    /// Parses a configuration from JSON. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Whether `label` is drawn above the word row.
    pub fn is_high_level(&self, label: &str) -> bool {
        self.high_level_labels.contains(label)
    }

    /// Decides where a constituent with `label` at `depth` is drawn.
    ///
    /// High-level labels go above at any depth; every other constituent goes
    /// below, except at depth 0 (the root), which is not drawn.
    pub fn classify(&self, label: &str, depth: usize) -> PlacementGroup {
        if self.is_high_level(label) {
            PlacementGroup::Above
        } else if depth > 0 {
            PlacementGroup::Below
        } else {
            PlacementGroup::Hidden
        }
    }
}
