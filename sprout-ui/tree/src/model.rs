use sprout_tree::TreeNode;

/// Flattened representation of a visible tree row.
pub struct FlattenedNode<'a> {
    /// Zero-based tree depth (`0` for root-level rows).
    pub depth: usize,
    /// Borrowed source node.
    pub node: &'a TreeNode,
}

/// Flatten a tree into a depth-first list of visible rows.
///
/// Rows keep the order of the tree. Children are included only when
/// `is_expanded` returns `true` for their parent.
pub fn flatten_tree<'a>(
    nodes: &'a [TreeNode],
    is_expanded: impl Fn(&TreeNode) -> bool,
) -> Vec<FlattenedNode<'a>> {
    let mut entries = Vec::new();
    for node in nodes {
        push_node(node, 0, &is_expanded, &mut entries);
    }
    entries
}

fn push_node<'a>(
    node: &'a TreeNode,
    depth: usize,
    is_expanded: &impl Fn(&TreeNode) -> bool,
    entries: &mut Vec<FlattenedNode<'a>>,
) {
    entries.push(FlattenedNode { depth, node });

    if !node.is_leaf() && is_expanded(node) {
        for child in node.children() {
            push_node(child, depth + 1, is_expanded, entries);
        }
    }
}

#[cfg(test)]
mod tests {
    use sprout_tree::NodeKey;

    use super::*;

    fn sample() -> Vec<TreeNode> {
        vec![
            TreeNode::new(1, "root").with_children(vec![
                TreeNode::new(2, "zeta"),
                TreeNode::new(3, "alpha")
                    .with_children(vec![TreeNode::new(4, "hidden")]),
            ]),
            TreeNode::new(5, "top"),
        ]
    }

    fn flat_titles(entries: &[FlattenedNode<'_>]) -> Vec<String> {
        entries
            .iter()
            .map(|entry| entry.node.title().to_owned())
            .collect()
    }

    #[test]
    fn flatten_tree_handles_empty_input() {
        let entries = flatten_tree(&[], |_| true);
        assert!(entries.is_empty());
    }

    #[test]
    fn flatten_tree_keeps_tree_order_and_depth() {
        let nodes = sample();

        let entries = flatten_tree(&nodes, |_| true);

        assert_eq!(
            flat_titles(&entries),
            vec!["root", "zeta", "alpha", "hidden", "top"]
        );
        let depths: Vec<usize> =
            entries.iter().map(|entry| entry.depth).collect();
        assert_eq!(depths, vec![0, 1, 1, 2, 0]);
    }

    #[test]
    fn flatten_tree_hides_children_of_collapsed_nodes() {
        let nodes = sample();
        let collapsed = NodeKey::from(3);

        let entries = flatten_tree(&nodes, |node| node.key != collapsed);

        assert_eq!(flat_titles(&entries), vec!["root", "zeta", "alpha", "top"]);
    }

    #[test]
    fn flatten_tree_shows_placeholders_with_empty_title() {
        let mut nodes = sample();
        let _ = sprout_tree::add_same_level_node(&mut nodes, &NodeKey::from(5));

        let entries = flatten_tree(&nodes, |_| true);

        let last = entries.last().expect("placeholder row");
        assert!(last.node.is_placeholder());
        assert_eq!(last.node.title(), "");
        assert_eq!(last.depth, 0);
    }
}
