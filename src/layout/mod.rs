//! Grid layout of constituency trees.
//!
//! The layout places the words of a sentence in one row, one word per
//! column, and draws every constituent as a bracket over the columns of
//! the words it dominates. Brackets are stacked in rows above and below
//! the word row:
//!
//! ```text
//!   NP______  VP___          <- above, depth 1 (high-level: NP, VP)
//!   The  cat  sat            <- words
//!   Det  N    V              <- below, depth 2
//! ```
//!
//! Computing a [Layout] takes these steps:
//! 1. [Annotations::compute] numbers the words left to right and assigns
//!    every node its word [Span] and depth.
//! 2. [LayoutConfig::classify] puts each constituent into a
//!    [PlacementGroup]: high-level labels above, others below, and the
//!    root is not drawn unless it is high-level.
//! 3. Each group is split into one [PlacementRow] per depth, with
//!    placements sorted by column. Constituents of the same depth never
//!    overlap, so each row is a sequence of disjoint brackets.
//! 4. [PlacementRow::segments] fills the columns not covered by brackets
//!    with gaps, so that every row spans all columns.
//!
//! The tree is never modified; computing the layout twice yields the same
//! result.

pub mod annotation;
pub mod config;
pub mod layout_error;
pub mod placement;

pub use annotation::{Annotations, NodeAnnotation, Span};
pub use config::{LayoutConfig, PlacementGroup};
pub use layout_error::LayoutError;
pub use placement::{Placement, PlacementRow, RowSegment, Segments};

use crate::model::{ConstituentTree, Node};
use log::{debug, trace};
use serde::{Deserialize, Serialize};

// =#========================================================================#=
// LAYOUT
// =#========================================================================#=
/// Finished layout of a tree, ready to be rendered.
///
/// Both `above` and `below` are ordered from the row farthest from the
/// words to the nearest one, which is by ascending depth. A renderer
/// drawing top to bottom thus emits `above` in order, then the words, then
/// `below` in reverse.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Layout {
    /// Words of the sentence, one per column
    pub words: Vec<String>,
    /// Rows of high-level constituents above the words
    pub above: Vec<PlacementRow>,
    /// Rows of all other constituents below the words
    pub below: Vec<PlacementRow>,
}

impl Layout {
    /// Computes the layout of `tree` under `config`.
    ///
    /// # Errors
    /// [LayoutError::InvariantViolation] if the tree is not well-formed,
    /// see [Annotations::compute].
    ///
    /// # Example
    /// ```
    /// use synbox::bracket::parse_str;
    /// use synbox::layout::{Layout, LayoutConfig};
    ///
    /// let tree = parse_str("(S (NP (Det The) (N cat)) (VP (V sat)))")?;
    /// let config = LayoutConfig::new().with_high_level_labels(["NP", "VP"]);
    /// let layout = Layout::compute(&tree, &config)?;
    ///
    /// assert_eq!(layout.words, vec!["The", "cat", "sat"]);
    /// assert_eq!(layout.above.len(), 1);
    /// assert_eq!(layout.below.len(), 1);
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn compute(tree: &ConstituentTree, config: &LayoutConfig) -> Result<Self, LayoutError> {
        let annotations = Annotations::compute(tree)?;

        let mut above = Vec::new();
        let mut below = Vec::new();
        for node in tree.nodes() {
            let Node::Internal { index, label, .. } = node else {
                continue;
            };
            let annotation = annotations
                .get(*index)
                .ok_or_else(|| LayoutError::at_node(*index, "constituent without annotation"))?;
            let placement = Placement::new(*index, label.clone(), annotation.span);

            match config.classify(label, annotation.depth) {
                PlacementGroup::Above => above.push((annotation.depth, placement)),
                PlacementGroup::Below => below.push((annotation.depth, placement)),
                PlacementGroup::Hidden => {}
            }
        }

        let layout = Layout {
            above: placement::stratify(above)?,
            below: placement::stratify(below)?,
            words: annotations.into_words(),
        };

        debug!(
            "laid out {} words in {} rows above and {} rows below",
            layout.num_columns(),
            layout.above.len(),
            layout.below.len()
        );
        for row in layout.above.iter().chain(&layout.below) {
            trace!("depth {}: {:?}", row.depth, row.placements);
        }

        Ok(layout)
    }

    /// Number of columns, i.e. of words.
    pub fn num_columns(&self) -> usize {
        self.words.len()
    }

    /// Rows below the words, starting with the one nearest to them.
    pub fn below_inward_out(&self) -> impl Iterator<Item = &PlacementRow> {
        self.below.iter().rev()
    }

    /// Whether there are no brackets at all.
    pub fn has_no_brackets(&self) -> bool {
        self.above.is_empty() && self.below.is_empty()
    }
}
