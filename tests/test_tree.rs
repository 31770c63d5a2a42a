use synbox::bracket::parse_str;
use synbox::model::{ConstituentTree, Node};

/// Builds `(S (NP ellos) (VP leen))` by hand.
fn build_small_tree() -> ConstituentTree {
    let mut tree = ConstituentTree::new(2);
    let ellos = tree.add_leaf("NP".to_string(), "ellos".to_string());
    let np = tree.add_internal("NP".to_string(), vec![ellos]);
    let leen = tree.add_leaf("VP".to_string(), "leen".to_string());
    let vp = tree.add_internal("VP".to_string(), vec![leen]);
    let s = tree.add_internal("S".to_string(), vec![np, vp]);
    tree.set_root(s);
    tree
}

#[test]
fn test_building_tree() {
    let tree = build_small_tree();

    assert!(tree.is_valid());
    assert_eq!(tree.num_words(), 2);
    assert_eq!(tree.num_internal(), 3);
    assert_eq!(tree.num_nodes(), 5);
    assert_eq!(tree.root_index(), Some(4));

    let leen = &tree[2];
    assert!(leen.is_leaf());
    assert_eq!(leen.word_index(), Some(1));
    assert_eq!(leen.parent_index(), Some(3));
    assert!(leen.has_parent());

    assert!(!tree.root().has_parent());
    assert_eq!(tree, parse_str("(S (NP ellos) (VP leen))").unwrap());
}

#[test]
fn test_tree_without_root_is_invalid() {
    let mut tree = ConstituentTree::new(1);
    let x = tree.add_leaf("S".to_string(), "x".to_string());
    tree.add_internal("S".to_string(), vec![x]);

    assert!(!tree.is_root_set());
    assert_eq!(tree.root_index(), None);
    assert!(!tree.is_valid());
    assert_eq!(tree.pre_order_iter().count(), 0);
    assert_eq!(tree.to_bracket_string(), "");
}

#[test]
fn test_root_with_parent_is_invalid() {
    let mut tree = ConstituentTree::new(1);
    let x = tree.add_leaf("S".to_string(), "x".to_string());
    let inner = tree.add_internal("S".to_string(), vec![x]);
    tree.add_internal("T".to_string(), vec![inner]);
    tree.set_root(inner);
    assert!(!tree.is_valid());
}

#[test]
fn test_words_out_of_order_are_invalid() {
    // Leaves added right to left: word positions disagree with tree order
    let mut tree = ConstituentTree::new(2);
    let second = tree.add_leaf("S".to_string(), "b".to_string());
    let first = tree.add_leaf("S".to_string(), "a".to_string());
    let s = tree.add_internal("S".to_string(), vec![first, second]);
    tree.set_root(s);
    assert!(!tree.is_valid());
}

#[test]
#[should_panic]
fn test_get_root_panics_on_empty_tree() {
    let tree = ConstituentTree::new(2);
    tree.root(); // Should panic
}

#[test]
#[should_panic]
fn test_get_node_out_of_bounds() {
    let tree = build_small_tree();
    let _ = &tree[55];
}

#[test]
fn test_node_lookup() {
    let tree = build_small_tree();
    assert!(tree.node(4).is_some());
    assert!(tree.node(5).is_none());
}

#[test]
fn test_pre_order_iter() {
    let tree = parse_str("(S (NP (Det The) (N cat)) (VP (V sat)))").unwrap();
    let visited: Vec<_> = tree
        .pre_order_iter()
        .map(|node| node.word().unwrap_or(node.label()))
        .collect();
    assert_eq!(visited, vec!["S", "NP", "Det", "The", "N", "cat", "VP", "V", "sat"]);
}

#[test]
fn test_post_order_iter() {
    let tree = parse_str("(S (NP (Det The) (N cat)) (VP (V sat)))").unwrap();
    let visited: Vec<_> = tree
        .post_order_iter()
        .map(|node| node.word().unwrap_or(node.label()))
        .collect();
    assert_eq!(visited, vec!["The", "Det", "cat", "N", "NP", "sat", "V", "VP", "S"]);
}

#[test]
fn test_iterators_visit_every_node_once() {
    let tree = parse_str("(S a (X b (Y c d)) e)").unwrap();

    let mut pre: Vec<_> = tree.pre_order_iter().map(Node::index).collect();
    let mut post: Vec<_> = tree.post_order_iter().map(Node::index).collect();
    pre.sort_unstable();
    post.sort_unstable();

    let all: Vec<_> = (0..tree.num_nodes()).collect();
    assert_eq!(pre, all);
    assert_eq!(post, all);
}

#[test]
fn test_display() {
    let tree = build_small_tree();
    let expected = "\
Tree with 2 words (5 nodes total):
[4] S
  ├─ [1] NP
  │   └─ [0] \"ellos\" (word 0)
  └─ [3] VP
      └─ [2] \"leen\" (word 1)
";
    assert_eq!(tree.to_string(), expected);
}

#[test]
fn test_display_of_deep_tree() {
    let depth = 1_000;
    let input = format!("{}w{}", "(A ".repeat(depth), ")".repeat(depth));
    let tree = parse_str(&input).unwrap();

    let outline = tree.to_string();
    // Header, one line per constituent, and the word
    assert_eq!(outline.lines().count(), depth + 2);
    assert!(outline.lines().last().unwrap().ends_with("\"w\" (word 0)"));
}
