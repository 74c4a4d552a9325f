use std::collections::HashSet;

/// Path of node titles from root to the target node.
///
/// The path is built by concatenating [`TreeNode::title`] values while walking
/// from the root to the current node.
///
/// Note: if siblings share a title, title-based paths become ambiguous. The
/// first sibling wins every lookup and duplicates share one expansion flag.
pub type TreePath = Vec<String>;

/// Trait implemented by tree node types consumable by this crate.
pub trait TreeNode {
    /// Title used to identify the node within its parent.
    fn title(&self) -> &str;
    /// Secondary label rendered next to a leaf title, such as a size.
    fn annotation(&self) -> Option<&str> {
        None
    }
    /// Children for the node (folders only).
    fn children(&self) -> Option<&[Self]>
    where
        Self: Sized;
    /// Whether this node is a folder.
    fn is_folder(&self) -> bool;
}

/// Set of expanded folder paths. Every folder starts collapsed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpansionState {
    expanded: HashSet<TreePath>,
}

impl ExpansionState {
    /// Create an expansion state with every folder collapsed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return whether the folder at `path` is expanded.
    pub fn is_expanded(&self, path: &[String]) -> bool {
        self.expanded.contains(path)
    }

    /// Flip the flag for `path` and return the new value.
    pub fn toggle(&mut self, path: &[String]) -> bool {
        if self.expanded.remove(path) {
            return false;
        }

        self.expanded.insert(path.to_vec());
        true
    }

    /// Force the flag for `path`.
    pub fn set_expanded(&mut self, path: &[String], expanded: bool) {
        if expanded {
            self.expanded.insert(path.to_vec());
        } else {
            self.expanded.remove(path);
        }
    }

    /// Number of expanded folders.
    pub fn len(&self) -> usize {
        self.expanded.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expanded.is_empty()
    }

    /// Collapse every folder.
    pub fn clear(&mut self) {
        self.expanded.clear();
    }

    /// Drop flags whose path no longer resolves to a folder in `nodes`.
    pub fn retain_folders<T: TreeNode>(&mut self, nodes: &[T]) {
        self.expanded.retain(|path| {
            find_node(nodes, path)
                .map(|node| node.is_folder())
                .unwrap_or(false)
        });
    }
}

/// Resolve a title path into the node it names.
pub fn find_node<'a, T: TreeNode>(
    nodes: &'a [T],
    path: &[String],
) -> Option<&'a T> {
    let (head, tail) = path.split_first()?;
    let node = nodes.iter().find(|node| node.title() == head)?;

    if tail.is_empty() {
        return Some(node);
    }

    if !node.is_folder() {
        return None;
    }

    find_node(node.children()?, tail)
}

/// One node produced by [`render`].
pub enum RenderNode<'a, T: TreeNode> {
    /// A non-folder node.
    Leaf(TreeLeaf<'a, T>),
    /// A folder with a lazy sequence of its children.
    Branch(TreeBranch<'a, T>),
}

impl<'a, T: TreeNode> RenderNode<'a, T> {
    /// Borrowed source node.
    pub fn node(&self) -> &'a T {
        match self {
            RenderNode::Leaf(leaf) => leaf.node,
            RenderNode::Branch(branch) => branch.node,
        }
    }

    /// Title-based path from the root to this node.
    pub fn path(&self) -> &TreePath {
        match self {
            RenderNode::Leaf(leaf) => &leaf.path,
            RenderNode::Branch(branch) => &branch.path,
        }
    }

    /// Zero-based depth (`0` for root-level nodes).
    pub fn depth(&self) -> usize {
        match self {
            RenderNode::Leaf(leaf) => leaf.depth,
            RenderNode::Branch(branch) => branch.depth,
        }
    }

    pub fn is_branch(&self) -> bool {
        matches!(self, RenderNode::Branch(_))
    }
}

/// Leaf node: a label plus an optional annotation.
pub struct TreeLeaf<'a, T: TreeNode> {
    pub node: &'a T,
    pub path: TreePath,
    pub depth: usize,
}

impl<'a, T: TreeNode> TreeLeaf<'a, T> {
    pub fn label(&self) -> &'a str {
        self.node.title()
    }

    pub fn annotation(&self) -> Option<&'a str> {
        self.node.annotation()
    }
}

/// Branch node: a label, its expansion flag and its children.
pub struct TreeBranch<'a, T: TreeNode> {
    pub node: &'a T,
    pub path: TreePath,
    pub depth: usize,
    /// Current value of this folder's [`ExpansionState`] flag.
    pub expanded: bool,
    children: Render<'a, T>,
}

impl<'a, T: TreeNode> TreeBranch<'a, T> {
    pub fn label(&self) -> &'a str {
        self.node.title()
    }

    /// Lazy sequence over every child, regardless of the expansion flag.
    pub fn children(&self) -> Render<'a, T> {
        self.children.clone()
    }
}

/// Lazy depth-first iterator over one level of a tree.
///
/// Nodes are yielded in input order. Branches carry their own [`Render`]
/// for the next level, so a consumer walks only what it needs.
pub struct Render<'a, T: TreeNode> {
    nodes: std::slice::Iter<'a, T>,
    parent: TreePath,
    depth: usize,
    expansion: &'a ExpansionState,
}

impl<'a, T: TreeNode> Clone for Render<'a, T> {
    fn clone(&self) -> Self {
        Self {
            nodes: self.nodes.clone(),
            parent: self.parent.clone(),
            depth: self.depth,
            expansion: self.expansion,
        }
    }
}

impl<'a, T: TreeNode> Iterator for Render<'a, T> {
    type Item = RenderNode<'a, T>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.nodes.next()?;
        let mut path = self.parent.clone();
        path.push(node.title().to_owned());

        if !node.is_folder() {
            return Some(RenderNode::Leaf(TreeLeaf {
                node,
                path,
                depth: self.depth,
            }));
        }

        let children = Render {
            nodes: node.children().unwrap_or(&[]).iter(),
            parent: path.clone(),
            depth: self.depth + 1,
            expansion: self.expansion,
        };

        Some(RenderNode::Branch(TreeBranch {
            node,
            expanded: self.expansion.is_expanded(&path),
            path,
            depth: self.depth,
            children,
        }))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.nodes.size_hint()
    }
}

impl<'a, T: TreeNode> ExactSizeIterator for Render<'a, T> {}

/// Render the root level of a tree.
///
/// Input ordering is preserved at every level; folders and files interleave
/// exactly as supplied.
pub fn render<'a, T: TreeNode>(
    nodes: &'a [T],
    expansion: &'a ExpansionState,
) -> Render<'a, T> {
    Render {
        nodes: nodes.iter(),
        parent: Vec::new(),
        depth: 0,
        expansion,
    }
}

/// Flattened representation of a visible tree node.
pub struct FlattenedNode<'a, T: TreeNode> {
    /// Zero-based tree depth (`0` for root-level rows).
    pub depth: usize,
    /// Borrowed source node.
    pub node: &'a T,
    /// Title-based path from the root to this row.
    pub path: TreePath,
    /// Whether the row is an expanded folder.
    pub is_expanded: bool,
}

/// Flatten a tree into the depth-first list of rows a list widget draws.
///
/// Children are included only for folders expanded in `expansion`.
pub fn flatten_visible<'a, T: TreeNode>(
    nodes: &'a [T],
    expansion: &'a ExpansionState,
) -> Vec<FlattenedNode<'a, T>> {
    let mut entries = Vec::new();
    push_rows(render(nodes, expansion), &mut entries);
    entries
}

fn push_rows<'a, T: TreeNode>(
    rows: Render<'a, T>,
    entries: &mut Vec<FlattenedNode<'a, T>>,
) {
    for row in rows {
        match row {
            RenderNode::Leaf(leaf) => entries.push(FlattenedNode {
                depth: leaf.depth,
                node: leaf.node,
                path: leaf.path,
                is_expanded: false,
            }),
            RenderNode::Branch(branch) => {
                let children = branch.expanded.then(|| branch.children());
                entries.push(FlattenedNode {
                    depth: branch.depth,
                    node: branch.node,
                    path: branch.path,
                    is_expanded: branch.expanded,
                });

                if let Some(children) = children {
                    push_rows(children, entries);
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug)]
    enum TestNode {
        Folder {
            title: String,
            children: Vec<TestNode>,
        },
        VirtualFolder {
            title: String,
        },
        File {
            title: String,
            size: Option<String>,
        },
    }

    impl TestNode {
        fn folder(title: &str, children: Vec<Self>) -> Self {
            Self::Folder {
                title: title.to_owned(),
                children,
            }
        }

        fn virtual_folder(title: &str) -> Self {
            Self::VirtualFolder {
                title: title.to_owned(),
            }
        }

        fn file(title: &str) -> Self {
            Self::File {
                title: title.to_owned(),
                size: None,
            }
        }

        fn sized_file(title: &str, size: &str) -> Self {
            Self::File {
                title: title.to_owned(),
                size: Some(size.to_owned()),
            }
        }
    }

    impl TreeNode for TestNode {
        fn title(&self) -> &str {
            match self {
                TestNode::Folder { title, .. } => title,
                TestNode::VirtualFolder { title } => title,
                TestNode::File { title, .. } => title,
            }
        }

        fn annotation(&self) -> Option<&str> {
            match self {
                TestNode::File { size, .. } => size.as_deref(),
                _ => None,
            }
        }

        fn children(&self) -> Option<&[Self]> {
            match self {
                TestNode::Folder { children, .. } => Some(children),
                TestNode::VirtualFolder { .. } => None,
                TestNode::File { .. } => None,
            }
        }

        fn is_folder(&self) -> bool {
            matches!(
                self,
                TestNode::Folder { .. } | TestNode::VirtualFolder { .. }
            )
        }
    }

    fn path(parts: &[&str]) -> TreePath {
        parts.iter().map(|part| (*part).to_owned()).collect()
    }

    fn flat_titles(entries: &[FlattenedNode<'_, TestNode>]) -> Vec<String> {
        entries
            .iter()
            .map(|entry| entry.node.title().to_owned())
            .collect()
    }

    fn count_kinds(rows: Render<'_, TestNode>) -> (usize, usize) {
        let mut leaves = 0;
        let mut branches = 0;
        for row in rows {
            match row {
                RenderNode::Leaf(_) => leaves += 1,
                RenderNode::Branch(branch) => {
                    branches += 1;
                    let (inner_leaves, inner_branches) =
                        count_kinds(branch.children());
                    leaves += inner_leaves;
                    branches += inner_branches;
                },
            }
        }
        (leaves, branches)
    }

    fn sample_tree() -> Vec<TestNode> {
        vec![
            TestNode::file("zeta.sql"),
            TestNode::folder(
                "data",
                vec![
                    TestNode::sized_file("info.txt", "2 KB"),
                    TestNode::folder("raw", vec![TestNode::file("dump.csv")]),
                    TestNode::file("alpha.txt"),
                ],
            ),
            TestNode::folder("empty", Vec::new()),
            TestNode::file("README.md"),
        ]
    }

    #[test]
    fn render_handles_empty_input() {
        let nodes: Vec<TestNode> = Vec::new();
        let expansion = ExpansionState::new();
        assert_eq!(render(&nodes, &expansion).count(), 0);
        assert!(flatten_visible(&nodes, &expansion).is_empty());
    }

    #[test]
    fn render_yields_two_branches_with_one_leaf_each_in_input_order() {
        let nodes = vec![
            TestNode::folder("data", vec![TestNode::file("info.txt")]),
            TestNode::folder("static", vec![TestNode::file("logo.png")]),
        ];
        let expansion = ExpansionState::new();

        let top: Vec<RenderNode<'_, TestNode>> =
            render(&nodes, &expansion).collect();
        assert_eq!(top.len(), 2);

        let expected = [("data", "info.txt"), ("static", "logo.png")];
        for (row, (branch_title, leaf_title)) in top.iter().zip(expected) {
            let RenderNode::Branch(branch) = row else {
                panic!("expected branch for {branch_title}");
            };
            assert_eq!(branch.label(), branch_title);

            let children: Vec<RenderNode<'_, TestNode>> =
                branch.children().collect();
            assert_eq!(children.len(), 1);
            let RenderNode::Leaf(leaf) = &children[0] else {
                panic!("expected leaf under {branch_title}");
            };
            assert_eq!(leaf.label(), leaf_title);
            assert_eq!(leaf.path, path(&[branch_title, leaf_title]));
        }
    }

    #[test]
    fn render_counts_match_file_and_folder_counts() {
        let nodes = sample_tree();
        let expansion = ExpansionState::new();

        let (leaves, branches) = count_kinds(render(&nodes, &expansion));

        assert_eq!(leaves, 5);
        assert_eq!(branches, 3);
    }

    #[test]
    fn render_preserves_interleaved_input_order() {
        let nodes = sample_tree();
        let expansion = ExpansionState::new();

        let titles: Vec<&str> = render(&nodes, &expansion)
            .map(|row| row.node().title())
            .collect();
        assert_eq!(titles, vec!["zeta.sql", "data", "empty", "README.md"]);

        let Some(RenderNode::Branch(data)) = render(&nodes, &expansion).nth(1)
        else {
            panic!("expected data branch");
        };
        let child_titles: Vec<&str> =
            data.children().map(|row| row.node().title()).collect();
        assert_eq!(child_titles, vec!["info.txt", "raw", "alpha.txt"]);
    }

    #[test]
    fn render_is_restartable() {
        let nodes = sample_tree();
        let expansion = ExpansionState::new();
        let rows = render(&nodes, &expansion);

        let first: Vec<TreePath> =
            rows.clone().map(|row| row.path().clone()).collect();
        let second: Vec<TreePath> =
            rows.map(|row| row.path().clone()).collect();

        assert_eq!(first, second);
    }

    #[test]
    fn render_exposes_leaf_annotation() {
        let nodes = sample_tree();
        let expansion = ExpansionState::new();
        let Some(RenderNode::Branch(data)) = render(&nodes, &expansion).nth(1)
        else {
            panic!("expected data branch");
        };

        let Some(RenderNode::Leaf(info)) = data.children().next() else {
            panic!("expected info leaf");
        };

        assert_eq!(info.annotation(), Some("2 KB"));
    }

    #[test]
    fn render_marks_branch_expansion_from_state() {
        let nodes = sample_tree();
        let mut expansion = ExpansionState::new();
        expansion.set_expanded(&path(&["data"]), true);

        let flags: Vec<(String, bool)> = render(&nodes, &expansion)
            .filter_map(|row| match row {
                RenderNode::Branch(branch) => {
                    Some((branch.label().to_owned(), branch.expanded))
                },
                RenderNode::Leaf(_) => None,
            })
            .collect();

        assert_eq!(
            flags,
            vec![(String::from("data"), true), (String::from("empty"), false)]
        );
    }

    #[test]
    fn flatten_visible_respects_expansion_and_depth() {
        let nodes = sample_tree();
        let mut expansion = ExpansionState::new();
        expansion.toggle(&path(&["data"]));

        let entries = flatten_visible(&nodes, &expansion);
        assert_eq!(
            flat_titles(&entries),
            vec![
                "zeta.sql",
                "data",
                "info.txt",
                "raw",
                "alpha.txt",
                "empty",
                "README.md"
            ]
        );
        assert_eq!(entries[1].depth, 0);
        assert!(entries[1].is_expanded);
        assert_eq!(entries[2].depth, 1);
        assert_eq!(entries[3].path, path(&["data", "raw"]));
        assert!(!entries[3].is_expanded);
    }

    #[test]
    fn flatten_visible_hides_children_of_collapsed_folders() {
        let nodes = sample_tree();
        let mut expansion = ExpansionState::new();
        expansion.set_expanded(&path(&["data", "raw"]), true);

        let entries = flatten_visible(&nodes, &expansion);

        assert_eq!(
            flat_titles(&entries),
            vec!["zeta.sql", "data", "empty", "README.md"]
        );
    }

    #[test]
    fn flatten_visible_handles_folder_without_children_slice() {
        let nodes = vec![TestNode::virtual_folder("virtual")];
        let mut expansion = ExpansionState::new();
        expansion.toggle(&path(&["virtual"]));

        let entries = flatten_visible(&nodes, &expansion);

        assert_eq!(flat_titles(&entries), vec!["virtual"]);
        assert!(entries[0].is_expanded);
    }

    #[test]
    fn flatten_visible_path_invariant_holds() {
        let nodes = sample_tree();
        let mut expansion = ExpansionState::new();
        expansion.toggle(&path(&["data"]));
        expansion.toggle(&path(&["data", "raw"]));

        for entry in flatten_visible(&nodes, &expansion) {
            assert_eq!(entry.path.len(), entry.depth + 1);
        }
    }

    #[test]
    fn expansion_toggle_twice_restores_collapsed_state() {
        let mut expansion = ExpansionState::new();
        let target = path(&["data"]);

        assert!(expansion.toggle(&target));
        assert!(expansion.is_expanded(&target));
        assert!(!expansion.toggle(&target));
        assert!(!expansion.is_expanded(&target));
        assert!(expansion.is_empty());
    }

    #[test]
    fn expansion_flags_are_independent_per_folder() {
        let mut expansion = ExpansionState::new();
        expansion.toggle(&path(&["data"]));
        expansion.toggle(&path(&["empty"]));
        expansion.toggle(&path(&["data"]));

        assert!(!expansion.is_expanded(&path(&["data"])));
        assert!(expansion.is_expanded(&path(&["empty"])));
        assert_eq!(expansion.len(), 1);
    }

    #[test]
    fn retain_folders_drops_paths_that_no_longer_name_folders() {
        let nodes = sample_tree();
        let mut expansion = ExpansionState::new();
        expansion.set_expanded(&path(&["data"]), true);
        expansion.set_expanded(&path(&["data", "raw"]), true);
        expansion.set_expanded(&path(&["README.md"]), true);
        expansion.set_expanded(&path(&["gone"]), true);

        expansion.retain_folders(&nodes);

        assert_eq!(expansion.len(), 2);
        assert!(expansion.is_expanded(&path(&["data", "raw"])));
        assert!(!expansion.is_expanded(&path(&["gone"])));
    }

    #[test]
    fn find_node_walks_title_paths() {
        let nodes = sample_tree();

        let found = find_node(&nodes, &path(&["data", "raw", "dump.csv"]));
        assert_eq!(found.map(|node| node.title()), Some("dump.csv"));
        assert!(find_node(&nodes, &path(&["README.md", "child"])).is_none());
        assert!(find_node(&nodes, &[]).is_none());
    }
}
