use derive_more::Display;

/// Handle to a directory stored in a [`Tree`].
///
/// Handles are only handed out by the tree that owns the directory, so every
/// `DirId` obtained from a tree is valid for that tree for its whole lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display("#{_0}")]
pub struct DirId(usize);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    name: String,
    size_kib: u64,
}

impl FileEntry {
    pub fn new(name: impl Into<String>, size_kib: u64) -> Self {
        Self {
            name: name.into(),
            size_kib,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn size_kib(&self) -> u64 {
        self.size_kib
    }
}

/// A named directory node. Children are owned by the tree arena; `parent` is
/// a plain back-reference used for path derivation and ascending.
#[derive(Debug, Clone)]
pub struct Directory {
    name: String,
    parent: Option<DirId>,
    subdirectories: Vec<DirId>,
    files: Vec<FileEntry>,
}

impl Directory {
    fn new(name: String, parent: Option<DirId>) -> Self {
        Self {
            name,
            parent,
            subdirectories: Vec::new(),
            files: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn parent(&self) -> Option<DirId> {
        self.parent
    }

    pub fn subdirectories(&self) -> &[DirId] {
        &self.subdirectories
    }

    pub fn files(&self) -> &[FileEntry] {
        &self.files
    }

    pub fn is_empty(&self) -> bool {
        self.subdirectories.is_empty() && self.files.is_empty()
    }
}

/// Directory hierarchy with a single root.
///
/// Nodes are only ever appended, which keeps the parent graph acyclic: a new
/// directory always points at an already existing one.
#[derive(Debug, Clone)]
pub struct Tree {
    nodes: Vec<Directory>,
}

impl Tree {
    const ROOT: DirId = DirId(0);

    pub fn new(root_name: impl Into<String>) -> Self {
        Self {
            nodes: vec![Directory::new(root_name.into(), None)],
        }
    }

    pub fn root(&self) -> DirId {
        Self::ROOT
    }

    pub fn get(&self, id: DirId) -> &Directory {
        &self.nodes[id.0]
    }

    pub fn directory_count(&self) -> usize {
        self.nodes.len()
    }

    /// Appends a new subdirectory to `parent`. Sibling names are not checked
    /// for uniqueness.
    pub fn add_child(&mut self, parent: DirId, name: impl Into<String>) -> DirId {
        let id = DirId(self.nodes.len());
        self.nodes.push(Directory::new(name.into(), Some(parent)));
        self.nodes[parent.0].subdirectories.push(id);
        id
    }

    pub fn add_file(&mut self, parent: DirId, file: FileEntry) {
        self.nodes[parent.0].files.push(file);
    }

    /// First subdirectory of `parent` whose name matches exactly.
    pub fn find_child(&self, parent: DirId, name: &str) -> Option<DirId> {
        self.get(parent)
            .subdirectories
            .iter()
            .copied()
            .find(|child| self.get(*child).name == name)
    }

    /// Absolute path of `id`, e.g. `/root/documents/work`.
    pub fn path(&self, id: DirId) -> String {
        let mut names = Vec::new();
        let mut current = Some(id);
        while let Some(dir_id) = current {
            let dir = self.get(dir_id);
            names.push(dir.name.as_str());
            current = dir.parent;
        }

        names.iter().rev().fold(String::new(), |mut path, name| {
            path.push('/');
            path.push_str(name);
            path
        })
    }

    /// Sum of every file size in the subtree rooted at `id`, recomputed on
    /// each call. Saturates at `u64::MAX` instead of overflowing.
    pub fn total_size(&self, id: DirId) -> u64 {
        let dir = self.get(id);
        let own = dir
            .files
            .iter()
            .map(FileEntry::size_kib)
            .fold(0u64, u64::saturating_add);
        dir.subdirectories
            .iter()
            .map(|child| self.total_size(*child))
            .fold(own, u64::saturating_add)
    }
}
