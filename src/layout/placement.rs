//! Placement records, rows of placements, and the gaps between them.

use crate::layout::annotation::Span;
use crate::layout::layout_error::LayoutError;
use crate::model::NodeIndex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::slice;

// =#========================================================================#=
// PLACEMENT
// =#========================================================================#=
/// A bracket drawn for one constituent: its label and the columns it spans.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Placement {
    /// Constituent in the tree this bracket is drawn for
    pub node: NodeIndex,
    /// Category label, e.g. `NP`
    pub label: String,
    /// First column (word position) covered
    pub column_start: usize,
    /// Number of columns covered (at least 1)
    pub column_width: usize,
}

impl Placement {
    /// Creates the placement of `node` over `span`.
    pub fn new(node: NodeIndex, label: String, span: Span) -> Self {
        Self {
            node,
            label,
            column_start: span.start,
            column_width: span.width(),
        }
    }

    /// Column right after the last covered one.
    pub fn column_end(&self) -> usize {
        self.column_start + self.column_width
    }

    /// Covered columns as inclusive word span, `None` if no column is
    /// covered (only possible for a deserialized placement).
    pub fn span(&self) -> Option<Span> {
        let end = self.column_end().checked_sub(1)?;
        (self.column_width > 0).then_some(Span { start: self.column_start, end })
    }
}

// =#========================================================================#=
// PLACEMENT ROW
// =#========================================================================#=
/// All brackets of one depth, sorted by first column.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct PlacementRow {
    /// Depth shared by all constituents of this row
    pub depth: usize,
    /// Brackets, sorted by `column_start`
    pub placements: Vec<Placement>,
}

impl PlacementRow {
    /// Whether no two brackets of this row share a column.
    pub fn is_non_overlapping(&self) -> bool {
        self.placements
            .windows(2)
            .all(|pair| pair[0].column_end() <= pair[1].column_start)
    }

    /// Splits the `num_columns` columns of this row into brackets and the
    /// empty gaps around them, from left to right.
    ///
    /// A gap before a bracket has width `column_start - position`, and a
    /// trailing gap `num_columns - position`, where `position` is the
    /// column right after the previous bracket. For a non-overlapping row
    /// the widths of all segments add up to `num_columns`.
    ///
    /// # Example
    /// ```
    /// use synbox::layout::{Placement, PlacementRow, RowSegment, Span};
    ///
    /// let row = PlacementRow {
    ///     depth: 2,
    ///     placements: vec![Placement::new(3, "SN".to_string(), Span::new(1, 2))],
    /// };
    /// let widths: Vec<_> = row.segments(5).map(|s| s.width()).collect();
    /// assert_eq!(widths, vec![1, 2, 2]);
    /// assert!(matches!(row.segments(5).next(), Some(RowSegment::Gap(1))));
    /// ```
    pub fn segments(&self, num_columns: usize) -> Segments<'_> {
        Segments {
            placements: self.placements.iter(),
            pending: None,
            position: 0,
            num_columns,
        }
    }
}

/// A run of columns in a row: either empty or covered by one bracket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowSegment<'a> {
    /// Empty columns
    Gap(usize),
    /// Columns covered by a bracket
    Bracket(&'a Placement),
}

impl RowSegment<'_> {
    /// Number of columns of this segment.
    pub fn width(&self) -> usize {
        match self {
            RowSegment::Gap(width) => *width,
            RowSegment::Bracket(placement) => placement.column_width,
        }
    }
}

/// Iterator over the [RowSegment]s of a [PlacementRow].
///
/// Created by [PlacementRow::segments].
#[derive(Debug, Clone)]
pub struct Segments<'a> {
    placements: slice::Iter<'a, Placement>,
    pending: Option<&'a Placement>,
    position: usize,
    num_columns: usize,
}

impl<'a> Iterator for Segments<'a> {
    type Item = RowSegment<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let placement = match self.pending.take() {
            Some(placement) => placement,
            None => match self.placements.next() {
                Some(placement) if placement.column_start > self.position => {
                    // Gap first, bracket on the next call
                    self.pending = Some(placement);
                    return Some(RowSegment::Gap(placement.column_start - self.position));
                }
                Some(placement) => placement,
                None if self.num_columns > self.position => {
                    let trailing = self.num_columns - self.position;
                    self.position = self.num_columns;
                    return Some(RowSegment::Gap(trailing));
                }
                None => return None,
            },
        };

        self.position = placement.column_end();
        Some(RowSegment::Bracket(placement))
    }
}

// ============================================================================
// Stratification
// ============================================================================
/// Groups placements into one row per depth.
///
/// Rows are ordered by ascending depth, i.e. from the row drawn farthest
/// from the words to the one drawn nearest, both above and below the word
/// row. Within a row, placements are sorted by first column.
///
/// # Errors
/// [LayoutError::InvariantViolation] if two placements of the same depth
/// overlap, which a well-formed tree never produces.
pub(crate) fn stratify<I>(placements: I) -> Result<Vec<PlacementRow>, LayoutError>
where
    I: IntoIterator<Item = (usize, Placement)>,
{
    let mut by_depth: BTreeMap<usize, Vec<Placement>> = BTreeMap::new();
    for (depth, placement) in placements {
        by_depth.entry(depth).or_default().push(placement);
    }

    by_depth
        .into_iter()
        .map(|(depth, mut placements)| {
            placements.sort_by_key(|placement| placement.column_start);
            let row = PlacementRow { depth, placements };
            if row.is_non_overlapping() {
                Ok(row)
            } else {
                Err(LayoutError::in_tree(format!("overlapping constituents at depth {depth}")))
            }
        })
        .collect()
}
