//! Word spans and depths of the nodes of a tree.
//!
//! [Annotations] is computed from an immutable [ConstituentTree] and maps
//! each node (by [NodeIndex]) to its [Span] and depth, leaving the tree
//! itself untouched.

use crate::layout::layout_error::LayoutError;
use crate::model::{ConstituentTree, Node, NodeIndex};
use serde::{Deserialize, Serialize};

// =#========================================================================#=
// SPAN
// =#========================================================================#=
/// Inclusive range `[start, end]` of word positions; `end >= start`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    /// Creates the span `[start, end]`.
    ///
    /// # Panics
    /// Panics if `end < start`.
    pub fn new(start: usize, end: usize) -> Self {
        assert!(end >= start, "span end {end} before start {start}");
        Self { start, end }
    }

    /// Span of the single word at `position`.
    pub fn point(position: usize) -> Self {
        Self { start: position, end: position }
    }

    /// Number of words covered.
    pub fn width(&self) -> usize {
        self.end - self.start + 1
    }

    /// Whether `position` lies within this span.
    pub fn contains(&self, position: usize) -> bool {
        self.start <= position && position <= self.end
    }

    /// Whether the two spans share at least one word.
    pub fn overlaps(&self, other: &Span) -> bool {
        self.start <= other.end && other.start <= self.end
    }

    /// Smallest span covering both spans.
    pub fn hull(&self, other: &Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }
}

/// Span and depth of a single node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeAnnotation {
    pub span: Span,
    /// Distance from the root (root has depth 0)
    pub depth: usize,
}

// =#========================================================================#=
// ANNOTATIONS
// =#========================================================================#=
/// Spans and depths of all nodes of a tree, plus its words in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Annotations {
    entries: Vec<NodeAnnotation>,
    words: Vec<String>,
}

impl Annotations {
    /// Computes spans and depths for every node of `tree`.
    ///
    /// Walks the tree twice:
    /// 1. Pre-order, left to right: numbers the words (`0, 1, ...`),
    ///    collects them, and assigns depths top-down.
    /// 2. Post-order: assigns each constituent the hull of its children's
    ///    spans, bottom-up.
    ///
    /// # Errors
    /// [LayoutError::InvariantViolation] if the tree has no root, a word
    /// position stored in a leaf disagrees with the traversal order, or a
    /// constituent has no children and thus no span.
    ///
    /// # Example
    /// ```
    /// use synbox::bracket::parse_str;
    /// use synbox::layout::{Annotations, Span};
    ///
    /// let tree = parse_str("(S (NP (Det The) (N cat)) (VP (V sat)))")?;
    /// let annotations = Annotations::compute(&tree)?;
    /// let np = tree.root().children()[0];
    /// assert_eq!(annotations.span(np), Some(Span::new(0, 1)));
    /// assert_eq!(annotations.depth(np), Some(1));
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn compute(tree: &ConstituentTree) -> Result<Self, LayoutError> {
        let root = tree
            .root_index()
            .ok_or_else(|| LayoutError::in_tree("tree has no root"))?;
        if !tree[root].is_internal() {
            return Err(LayoutError::at_node(root, "root is not a constituent"));
        }

        let num_nodes = tree.num_nodes();
        let mut depths: Vec<Option<usize>> = vec![None; num_nodes];
        let mut spans: Vec<Option<Span>> = vec![None; num_nodes];
        let mut words = Vec::with_capacity(tree.num_words());

        // Words and depths, top-down
        depths[root] = Some(0);
        for node in tree.pre_order_iter() {
            let index = node.index();
            let depth = depths[index]
                .ok_or_else(|| LayoutError::at_node(index, "node not reachable from its parent"))?;

            for &child in node.children() {
                depths[child] = Some(depth + 1);
            }

            if let Node::Leaf { word, word_index, .. } = node {
                let position = words.len();
                if *word_index != position {
                    return Err(LayoutError::at_node(
                        index,
                        format!("word {word:?} stored at position {word_index} but is word {position}"),
                    ));
                }
                spans[index] = Some(Span::point(position));
                words.push(word.clone());
            }
        }

        // Spans, bottom-up
        for node in tree.post_order_iter() {
            if node.is_leaf() {
                continue;
            }
            let index = node.index();
            let span = node
                .children()
                .iter()
                .map(|&child| spans[child])
                .try_fold(None, |hull: Option<Span>, child_span| {
                    child_span.map(|span| Some(hull.map_or(span, |acc| acc.hull(&span))))
                })
                .flatten()
                .ok_or_else(|| LayoutError::at_node(index, format!("constituent {:?} spans no words", node.label())))?;
            spans[index] = Some(span);
        }

        let entries = spans
            .into_iter()
            .zip(depths)
            .enumerate()
            .map(|(index, entry)| match entry {
                (Some(span), Some(depth)) => Ok(NodeAnnotation { span, depth }),
                _ => Err(LayoutError::at_node(index, "node is not part of the tree")),
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { entries, words })
    }

    /// Returns the annotation of the node at `index`, if it exists.
    pub fn get(&self, index: NodeIndex) -> Option<&NodeAnnotation> {
        self.entries.get(index)
    }

    /// Returns the span of the node at `index`, if it exists.
    pub fn span(&self, index: NodeIndex) -> Option<Span> {
        self.get(index).map(|annotation| annotation.span)
    }

    /// Returns the depth of the node at `index`, if it exists.
    pub fn depth(&self, index: NodeIndex) -> Option<usize> {
        self.get(index).map(|annotation| annotation.depth)
    }

    /// Returns the words of the sentence in order.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Returns the number of words.
    pub fn num_words(&self) -> usize {
        self.words.len()
    }

    /// Consumes the annotations and returns the words.
    pub fn into_words(self) -> Vec<String> {
        self.words
    }

    /// Iterates over `(node index, annotation)` pairs in arena order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeIndex, &NodeAnnotation)> {
        self.entries.iter().enumerate()
    }
}
