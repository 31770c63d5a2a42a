use synbox::bracket::{BracketParser, parse_str, to_bracket_string};
use synbox::model::{Node, TreeBuilder};
use synbox::parser::ParsingErrorType;

// --- TESTS WELL-FORMED INPUT ---
#[test]
fn test_basic_sentence() {
    let tree = parse_str("(S (NP (Det The) (N cat)) (VP (V sat)))").unwrap();

    assert!(tree.is_valid());
    assert_eq!(tree.words(), vec!["The", "cat", "sat"]);
    assert_eq!(tree.num_words(), 3);
    // S, NP, Det, N, VP, V
    assert_eq!(tree.num_internal(), 6);
    assert_eq!(tree.num_nodes(), 9);

    let root = tree.root();
    assert!(root.is_root());
    assert_eq!(root.label(), "S");
    assert_eq!(root.children().len(), 2);

    let np = &tree[root.children()[0]];
    assert_eq!(np.label(), "NP");
    assert_eq!(np.parent_index(), Some(root.index()));

    let det = &tree[np.children()[0]];
    assert!(det.is_internal());
    assert_eq!(det.label(), "Det");

    // Words inside a constituent carry its label
    let the = &tree[det.children()[0]];
    assert!(the.is_leaf());
    assert_eq!(the.label(), "Det");
    assert_eq!(the.word(), Some("The"));
    assert_eq!(the.word_index(), Some(0));
}

#[test]
fn test_single_leaf() {
    let tree = parse_str("(S word)").unwrap();
    assert_eq!(tree.words(), vec!["word"]);
    assert_eq!(tree.num_nodes(), 2);
    assert_eq!(tree.root().children().len(), 1);
}

#[test]
fn test_bare_words_mixed_with_constituents() {
    let tree = parse_str("(S a (X b) c)").unwrap();
    assert_eq!(tree.words(), vec!["a", "b", "c"]);

    let labels: Vec<_> = tree
        .root()
        .children()
        .iter()
        .map(|&child| tree[child].label())
        .collect();
    assert_eq!(labels, vec!["S", "X", "S"]);
}

#[test]
fn test_whitespace_and_line_breaks() {
    let input = "\n\t(S\r\n  (NP ellos)\x0B(VP\x0Cleen)  )\n\n";
    let tree = parse_str(input).unwrap();
    assert_eq!(tree.words(), vec!["ellos", "leen"]);
}

#[test]
fn test_no_whitespace_around_parentheses() {
    let tree = parse_str("(S(NP(N x))(VP y))").unwrap();
    assert_eq!(tree.words(), vec!["x", "y"]);
    assert_eq!(tree.to_bracket_string(), "(S (NP (N x)) (VP y))");
}

#[test]
fn test_utf8_words_and_labels() {
    let tree = parse_str("(O (SN_Sujeto (N_Núcleo jóvenes)) (SV_Predicado leen))").unwrap();
    assert_eq!(tree.words(), vec!["jóvenes", "leen"]);
    let subject = &tree[tree.root().children()[0]];
    assert_eq!(subject.label(), "SN_Sujeto");
}

#[test]
fn test_non_ascii_space_is_part_of_word() {
    let tree = parse_str("(S a\u{a0}b)").unwrap();
    assert_eq!(tree.words(), vec!["a\u{a0}b"]);
}

#[test]
fn test_empty_constituent_is_accepted_by_parser() {
    let tree = parse_str("(S)").unwrap();
    assert_eq!(tree.num_words(), 0);
    assert!(tree.root().children().is_empty());
}

// --- TESTS MALFORMED INPUT ---
#[test]
fn test_missing_opening_parenthesis() {
    let error = parse_str("S (NP x)").unwrap_err();
    assert_eq!(
        error.kind(),
        &ParsingErrorType::MissingOpeningParenthesis {
            found: "\"S\"".to_string()
        }
    );
    assert_eq!(error.position(), 0);
    assert_eq!(error.context(), "S (NP x)");
}

#[test]
fn test_empty_input() {
    for input in ["", "   \n"] {
        let error = parse_str(input).unwrap_err();
        assert_eq!(
            error.kind(),
            &ParsingErrorType::MissingOpeningParenthesis {
                found: "end of input".to_string()
            }
        );
    }
}

#[test]
fn test_stray_closing_parenthesis() {
    let error = parse_str(") (S x)").unwrap_err();
    assert!(matches!(
        error.kind(),
        ParsingErrorType::MissingOpeningParenthesis { .. }
    ));
    assert_eq!(error.position(), 0);
}

#[test]
fn test_unterminated_bracket() {
    let error = parse_str("(S (NP x)").unwrap_err();
    assert_eq!(error.kind(), &ParsingErrorType::UnterminatedBracket);
    assert_eq!(error.position(), 9);
    assert_eq!(error.context(), "");
}

#[test]
fn test_unterminated_inner_bracket() {
    let error = parse_str("(S (NP x) (VP y").unwrap_err();
    assert_eq!(error.kind(), &ParsingErrorType::UnterminatedBracket);
}

#[test]
fn test_missing_label() {
    let error = parse_str("(S ( ) x)").unwrap_err();
    assert_eq!(
        error.kind(),
        &ParsingErrorType::MissingLabel {
            found: "')'".to_string()
        }
    );
    assert_eq!(error.position(), 5);
}

#[test]
fn test_missing_label_at_end_of_input() {
    let error = parse_str("(").unwrap_err();
    assert_eq!(
        error.kind(),
        &ParsingErrorType::MissingLabel {
            found: "end of input".to_string()
        }
    );
    assert_eq!(error.position(), 1);
}

#[test]
fn test_input_after_root_is_ignored() {
    let tree = parse_str("(S x) (T y)").unwrap();
    assert_eq!(tree.words(), vec!["x"]);
    assert_eq!(tree.to_bracket_string(), "(S x)");

    for input in ["(S x))", "(S x) y", "(S x) ("] {
        let tree = parse_str(input).unwrap();
        assert!(tree.is_valid());
        assert_eq!(tree.words(), vec!["x"], "{input}");
    }
}

#[test]
fn test_error_message() {
    let error = parse_str("S (NP x)").unwrap_err();
    let message = error.to_string();
    assert!(message.starts_with("Input must start with '(' but found \"S\" at position 0"));
    assert!(message.contains("S (NP x)"));
}

#[test]
fn test_parser_recovers_after_error() {
    let mut parser = BracketParser::new_defaults();
    assert!(parser.parse_str("(S (NP x)").is_err());
    let tree = parser.parse_str("(S (NP x) (VP y))").unwrap();
    assert!(tree.is_valid());
    assert_eq!(tree.words(), vec!["x", "y"]);
}

#[test]
fn test_parser_reuse() {
    let mut parser = BracketParser::new_defaults().with_num_words(2);
    let first = parser.parse_str("(S a b)").unwrap();
    let second = parser.parse_str("(S c d e)").unwrap();
    assert_eq!(first.words(), vec!["a", "b"]);
    assert_eq!(second.words(), vec!["c", "d", "e"]);
    assert_eq!(second.root().children().len(), 3);
}

// --- TESTS WRITING ---
#[test]
fn test_round_trip() {
    let inputs = [
        "(S (NP (Det The) (N cat)) (VP (V sat)))",
        "(S word)",
        "(S a (X b) c)",
        "(O (SN_Sujeto (N_Núcleo jóvenes)) (SV_Predicado leen))",
    ];
    for input in inputs {
        let tree = parse_str(input).unwrap();
        let written = to_bracket_string(&tree);
        assert_eq!(written, input);
        assert_eq!(parse_str(&written).unwrap(), tree);
    }
}

#[test]
fn test_writing_normalizes_whitespace() {
    let tree = parse_str("  ( S\n\t(NP  x )\n(VP y) ) ").unwrap();
    assert_eq!(tree.to_bracket_string(), "(S (NP x) (VP y))");
}

// --- TESTS CUSTOM BUILDER ---
/// Builds nothing but the list of constituent labels in completion order.
#[derive(Default)]
struct LabelCollector {
    labels: Vec<String>,
    next_index: usize,
}

impl TreeBuilder for LabelCollector {
    type NodeIdx = usize;
    type Tree = Vec<String>;

    fn init_next(&mut self, _num_words: usize) {
        self.labels.clear();
        self.next_index = 0;
    }

    fn add_leaf(&mut self, _label: &str, _word: &str) -> usize {
        self.next_index += 1;
        self.next_index - 1
    }

    fn add_internal(&mut self, label: &str, _children: &[usize]) -> usize {
        self.labels.push(label.to_string());
        self.next_index += 1;
        self.next_index - 1
    }

    fn finish_tree(&mut self, _root: usize) -> Option<Vec<String>> {
        Some(std::mem::take(&mut self.labels))
    }
}

#[test]
fn test_custom_tree_builder() {
    let mut parser = BracketParser::new(LabelCollector::default());
    let labels = parser
        .parse_str("(S (NP (Det The) (N cat)) (VP (V sat)))")
        .unwrap();
    assert_eq!(labels, vec!["Det", "N", "NP", "V", "VP", "S"]);
}

#[test]
fn test_leaves_come_before_their_constituent() {
    let tree = parse_str("(S (NP x) (VP y))").unwrap();
    for node in tree.nodes() {
        if let Node::Internal { index, children, .. } = node {
            assert!(children.iter().all(|child| child < index));
        }
    }
}

// --- TESTS DEEP NESTING ---
const DEEP_NESTING: usize = 10_000;

fn nested_input(depth: usize) -> String {
    format!("{}w{}", "(A ".repeat(depth), ")".repeat(depth))
}

#[test]
fn test_deeply_nested_input() {
    let input = nested_input(DEEP_NESTING);
    let tree = parse_str(&input).unwrap();

    assert!(tree.is_valid());
    assert_eq!(tree.words(), vec!["w"]);
    assert_eq!(tree.num_internal(), DEEP_NESTING);
    assert_eq!(tree.num_nodes(), DEEP_NESTING + 1);
    assert_eq!(tree.to_bracket_string(), input);
}

#[test]
fn test_deeply_nested_unterminated_input() {
    let input = nested_input(DEEP_NESTING);
    let error = parse_str(&input[..input.len() - 1]).unwrap_err();
    assert_eq!(error.kind(), &ParsingErrorType::UnterminatedBracket);
    assert_eq!(error.position(), input.len() - 1);
}
