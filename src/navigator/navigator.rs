use snafu::Snafu;
use tracing::debug;

use crate::filesystem::{DirId, Tree};

/// One row of a directory listing. For directories `size_kib` is the total of
/// the whole subtree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingEntry {
    pub name: String,
    pub size_kib: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Listing {
    Empty,
    Entries {
        directories: Vec<ListingEntry>,
        files: Vec<ListingEntry>,
    },
}

/// Owns the tree and the current-directory cursor of a session.
///
/// The cursor starts at the root and only moves through `change_into`,
/// `change_to_parent` and `reset`. A failed move leaves it untouched.
#[derive(Debug)]
pub struct Navigator {
    tree: Tree,
    current: DirId,
}

impl Navigator {
    pub fn new(tree: Tree) -> Self {
        let current = tree.root();
        Self { tree, current }
    }

    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    pub fn current(&self) -> DirId {
        self.current
    }

    pub fn current_path(&self) -> String {
        self.tree.path(self.current)
    }

    pub fn change_into(&mut self, name: &str) -> Result<(), NavigationError> {
        match self.tree.find_child(self.current, name) {
            Some(child) => {
                self.current = child;
                debug!("Moved into {} ({})", self.current_path(), self.current);
                Ok(())
            }
            None => {
                debug!("No directory '{}' under {}", name, self.current_path());
                NotFoundSnafu { name }.fail()
            }
        }
    }

    pub fn change_to_parent(&mut self) -> Result<(), NavigationError> {
        let parent = self
            .tree
            .get(self.current)
            .parent()
            .ok_or(NavigationError::AtRoot)?;
        self.current = parent;
        debug!("Moved up to {}", self.current_path());
        Ok(())
    }

    pub fn reset(&mut self) {
        self.current = self.tree.root();
        debug!("Cursor reset to {}", self.current_path());
    }

    pub fn list_current(&self) -> Listing {
        let dir = self.tree.get(self.current);
        if dir.is_empty() {
            return Listing::Empty;
        }

        let directories = dir
            .subdirectories()
            .iter()
            .map(|id| ListingEntry {
                name: self.tree.get(*id).name().to_owned(),
                size_kib: self.tree.total_size(*id),
            })
            .collect();
        let files = dir
            .files()
            .iter()
            .map(|file| ListingEntry {
                name: file.name().to_owned(),
                size_kib: file.size_kib(),
            })
            .collect();

        Listing::Entries { directories, files }
    }

    pub fn current_total_size(&self) -> u64 {
        self.tree.total_size(self.current)
    }
}

#[derive(Debug, Snafu, PartialEq, Eq)]
pub enum NavigationError {
    #[snafu(display("Directory not found: {}", name))]
    NotFound { name: String },
    #[snafu(display("Already at root"))]
    AtRoot,
}

#[cfg(test)]
mod tests {
    use rstest::*;

    use super::*;
    use crate::filesystem::{FileEntry, sample_tree};

    #[fixture]
    fn navigator() -> Navigator {
        Navigator::new(sample_tree())
    }

    fn entry(name: &str, size_kib: u64) -> ListingEntry {
        ListingEntry {
            name: name.to_owned(),
            size_kib,
        }
    }

    #[rstest]
    fn starts_at_root(navigator: Navigator) {
        assert_eq!(navigator.current(), navigator.tree().root());
        assert_eq!(navigator.current_path(), "/root");
    }

    #[rstest]
    fn change_into_moves_cursor(mut navigator: Navigator) {
        navigator.change_into("documents").unwrap();
        navigator.change_into("work").unwrap();
        assert_eq!(navigator.current_path(), "/root/documents/work");
    }

    #[rstest]
    #[case("documents")]
    #[case("pictures")]
    fn change_into_then_parent_round_trips(mut navigator: Navigator, #[case] name: &str) {
        let start = navigator.current();
        navigator.change_into(name).unwrap();
        assert_ne!(navigator.current(), start);
        navigator.change_to_parent().unwrap();
        assert_eq!(navigator.current(), start);
    }

    #[rstest]
    #[case("nonexistent")]
    #[case("Documents")]
    #[case("work")]
    #[case("..")]
    fn change_into_unknown_leaves_cursor(mut navigator: Navigator, #[case] name: &str) {
        let start = navigator.current();
        let result = navigator.change_into(name);
        assert_eq!(
            result,
            Err(NavigationError::NotFound {
                name: name.to_owned()
            })
        );
        assert_eq!(navigator.current(), start);
    }

    #[rstest]
    fn change_to_parent_at_root_fails(mut navigator: Navigator) {
        assert_eq!(navigator.change_to_parent(), Err(NavigationError::AtRoot));
        assert_eq!(navigator.current(), navigator.tree().root());
    }

    #[rstest]
    fn reset_returns_to_root(mut navigator: Navigator) {
        navigator.change_into("pictures").unwrap();
        navigator.change_into("vacation").unwrap();
        navigator.reset();
        assert_eq!(navigator.current_path(), "/root");
        navigator.reset();
        assert_eq!(navigator.current_path(), "/root");
    }

    #[rstest]
    fn lists_root_in_insertion_order(navigator: Navigator) {
        assert_eq!(
            navigator.list_current(),
            Listing::Entries {
                directories: vec![entry("documents", 1995), entry("pictures", 930)],
                files: vec![entry("readme.txt", 10)],
            }
        );
    }

    #[rstest]
    fn lists_files_only_directory(mut navigator: Navigator) {
        navigator.change_into("documents").unwrap();
        navigator.change_into("personal").unwrap();
        assert_eq!(
            navigator.list_current(),
            Listing::Entries {
                directories: vec![],
                files: vec![entry("diary.txt", 1500)],
            }
        );
    }

    #[test]
    fn lists_empty_directory_as_empty() {
        let mut tree = Tree::new("root");
        tree.add_child(tree.root(), "void");
        let mut navigator = Navigator::new(tree);
        navigator.change_into("void").unwrap();
        assert_eq!(navigator.list_current(), Listing::Empty);
        assert_eq!(navigator.current_total_size(), 0);
    }

    #[test]
    fn directories_without_files_are_not_empty() {
        let mut tree = Tree::new("root");
        let root = tree.root();
        tree.add_child(root, "inner");
        let navigator = Navigator::new(tree);
        assert_eq!(
            navigator.list_current(),
            Listing::Entries {
                directories: vec![entry("inner", 0)],
                files: vec![],
            }
        );
    }

    #[rstest]
    fn total_size_follows_cursor(mut navigator: Navigator) {
        assert_eq!(navigator.current_total_size(), 2935);
        navigator.change_into("documents").unwrap();
        assert_eq!(navigator.current_total_size(), 1995);
        navigator.change_into("work").unwrap();
        assert_eq!(navigator.current_total_size(), 370);
    }

    #[test]
    fn change_into_picks_first_duplicate() {
        let mut tree = Tree::new("root");
        let root = tree.root();
        let first = tree.add_child(root, "same");
        let second = tree.add_child(root, "same");
        tree.add_file(second, FileEntry::new("only-in-second", 7));

        let mut navigator = Navigator::new(tree);
        navigator.change_into("same").unwrap();
        assert_eq!(navigator.current(), first);
        assert_eq!(navigator.current_total_size(), 0);
    }
}
