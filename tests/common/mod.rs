#![allow(dead_code)]

/// Edge list of a height-balanced binary search tree over the ids `1..=n`.
///
/// The middle element (upper middle for even sizes) becomes the root, so the
/// left subtree is never smaller than the right one and single children are
/// always left children.
pub fn balanced_bst_text(n: i64) -> String {
    fn build(lo: i64, hi: i64, lines: &mut Vec<String>) -> Option<i64> {
        if lo > hi {
            return None;
        }
        let mid = lo + (hi - lo + 1) / 2;
        let left = build(lo, mid - 1, lines);
        let right = build(mid + 1, hi, lines);
        match (left, right) {
            (Some(l), Some(r)) => lines.push(format!("{mid},{l},{r}")),
            (Some(l), None) => lines.push(format!("{mid},{l}")),
            (None, Some(_)) => unreachable!("left subtree is never smaller than the right one"),
            (None, None) => {}
        }
        Some(mid)
    }

    let mut lines = Vec::new();
    let root = build(1, n, &mut lines).expect("n must be positive");
    if lines.is_empty() {
        lines.push(root.to_string());
    }
    lines.join("\n")
}

/// Edge list of a path `1 -> 2 -> ... -> n`.
pub fn chain_text(n: i64) -> String {
    if n == 1 {
        return "1".to_string();
    }
    (1..n)
        .map(|i| format!("{},{}", i, i + 1))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Edge list of a tree given by a parent table.
///
/// `parents[k]` is the position of the parent of node `k + 1`, and `ids`
/// maps positions to node ids. Children are listed in increasing position.
pub fn tree_text(parents: &[usize], ids: &[i64]) -> String {
    let mut children: Vec<Vec<usize>> = vec![Vec::new(); ids.len()];
    for (k, &parent) in parents.iter().enumerate() {
        children[parent].push(k + 1);
    }

    let mut lines: Vec<String> = children
        .iter()
        .enumerate()
        .filter(|(_, kids)| !kids.is_empty())
        .map(|(position, kids)| {
            std::iter::once(ids[position])
                .chain(kids.iter().map(|&kid| ids[kid]))
                .map(|id| id.to_string())
                .collect::<Vec<_>>()
                .join(",")
        })
        .collect();

    if lines.is_empty() {
        lines.push(ids[0].to_string());
    }
    lines.join("\n")
}
