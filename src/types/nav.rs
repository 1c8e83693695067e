//! Navigation tree types

use serde::{Deserialize, Serialize};

/// A node of the book's navigation tree (its human-curated table of
/// contents). May be incomplete, wrong, or absent entirely.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NavEntry {
    /// Display title
    pub title: String,

    /// Target document path
    pub href: String,

    /// Optional anchor (element id) within the target document
    pub anchor: Option<String>,

    /// Child entries for nested navigation
    pub children: Vec<NavEntry>,
}

impl NavEntry {
    /// Create a new navigation entry. A `#fragment` suffix on `href` is
    /// split off into the anchor, matching how navigation documents
    /// address in-file targets.
    pub fn new(title: impl Into<String>, href: impl Into<String>) -> Self {
        let href = href.into();
        let (path, anchor) = match href.split_once('#') {
            Some((path, frag)) if !frag.is_empty() => (path.to_string(), Some(frag.to_string())),
            Some((path, _)) => (path.to_string(), None),
            None => (href, None),
        };
        Self {
            title: title.into(),
            href: path,
            anchor,
            children: Vec::new(),
        }
    }

    /// Add child entries
    pub fn with_children(mut self, children: Vec<NavEntry>) -> Self {
        self.children = children;
        self
    }

    /// Add a single child entry
    pub fn add_child(&mut self, child: NavEntry) {
        self.children.push(child);
    }
}

/// Flatten a navigation tree into a linear sequence: pre-order,
/// depth-first, sections and leaves both captured in traversal order.
pub fn flatten_nav(entries: &[NavEntry]) -> Vec<&NavEntry> {
    fn visit<'a>(entry: &'a NavEntry, out: &mut Vec<&'a NavEntry>) {
        out.push(entry);
        for child in &entry.children {
            visit(child, out);
        }
    }

    let mut out = Vec::new();
    for entry in entries {
        visit(entry, &mut out);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anchor_split_from_href() {
        let entry = NavEntry::new("Part Two", "text/part2.xhtml#ch07");
        assert_eq!(entry.href, "text/part2.xhtml");
        assert_eq!(entry.anchor.as_deref(), Some("ch07"));

        let entry = NavEntry::new("Part One", "text/part1.xhtml");
        assert_eq!(entry.href, "text/part1.xhtml");
        assert_eq!(entry.anchor, None);
    }

    #[test]
    fn test_flatten_is_preorder() {
        let tree = vec![
            NavEntry::new("Part I", "p1.xhtml").with_children(vec![
                NavEntry::new("Chapter 1", "c1.xhtml"),
                NavEntry::new("Chapter 2", "c2.xhtml"),
            ]),
            NavEntry::new("Part II", "p2.xhtml")
                .with_children(vec![NavEntry::new("Chapter 3", "c3.xhtml")]),
        ];

        let flat: Vec<&str> = flatten_nav(&tree).iter().map(|e| e.title.as_str()).collect();
        assert_eq!(
            flat,
            vec!["Part I", "Chapter 1", "Chapter 2", "Part II", "Chapter 3"]
        );
    }
}
