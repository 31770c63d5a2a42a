//! Bracket notation writing for [ConstituentTree].

use crate::model::{ConstituentTree, Node, NodeIndex};

/// Characters per constituent besides its label: `"(" + " " + ")"`
const CONSTITUENT_OVERHEAD_CHARS: usize = 3;

/// Returns the canonical bracket notation of `tree`.
///
/// Constituents are written as `(LABEL child child ...)` separated by single
/// spaces, and words appear bare inside the constituent they belong to, so
/// parsing the result yields a structurally identical tree. Returns an
/// empty string if the root of the tree is not set.
///
/// # Example
/// ```
/// use synbox::bracket::{parse_str, to_bracket_string};
///
/// let tree = parse_str("(S\n  (NP (Det The) (N cat))\n  (VP (V sat)))")?;
/// assert_eq!(to_bracket_string(&tree), "(S (NP (Det The) (N cat)) (VP (V sat)))");
///
/// # Ok::<(), synbox::parser::ParsingError>(())
/// ```
pub fn to_bracket_string(tree: &ConstituentTree) -> String {
    /// Pending output, processed last in first out
    enum Step {
        Node(NodeIndex),
        Space,
        Close,
    }

    let Some(root) = tree.root_index() else {
        return String::new();
    };

    let mut out = String::with_capacity(estimate_bracket_len(tree));
    let mut stack = vec![Step::Node(root)];
    while let Some(step) = stack.pop() {
        match step {
            Step::Space => out.push(' '),
            Step::Close => out.push(')'),
            Step::Node(index) => match &tree[index] {
                Node::Leaf { word, .. } => out.push_str(word),
                Node::Internal { label, children, .. } => {
                    out.push('(');
                    out.push_str(label);
                    stack.push(Step::Close);
                    for &child in children.iter().rev() {
                        stack.push(Step::Node(child));
                        stack.push(Step::Space);
                    }
                }
            },
        }
    }
    out
}

/// Estimates the length of the bracket string of `tree`.
fn estimate_bracket_len(tree: &ConstituentTree) -> usize {
    tree.nodes()
        .iter()
        .map(|node| match node {
            Node::Leaf { word, .. } => word.len() + 1,
            Node::Internal { label, .. } => label.len() + CONSTITUENT_OVERHEAD_CHARS,
        })
        .sum()
}
