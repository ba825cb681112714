use crate::filesystem::{FileEntry, Tree};

/// Tree every session starts with unless a fixture file is supplied.
pub fn sample_tree() -> Tree {
    let mut tree = Tree::new("root");
    let root = tree.root();

    let documents = tree.add_child(root, "documents");
    let pictures = tree.add_child(root, "pictures");
    let work = tree.add_child(documents, "work");
    let personal = tree.add_child(documents, "personal");
    let vacation = tree.add_child(pictures, "vacation");

    tree.add_file(root, FileEntry::new("readme.txt", 10));
    tree.add_file(documents, FileEntry::new("doc1.pdf", 50));
    tree.add_file(documents, FileEntry::new("doc2.pdf", 75));
    tree.add_file(work, FileEntry::new("report.docx", 120));
    tree.add_file(work, FileEntry::new("presentation.pptx", 250));
    tree.add_file(personal, FileEntry::new("diary.txt", 1500));
    tree.add_file(pictures, FileEntry::new("photo1.jpg", 200));
    tree.add_file(pictures, FileEntry::new("photo2.jpg", 150));
    tree.add_file(vacation, FileEntry::new("beach.jpg", 300));
    tree.add_file(vacation, FileEntry::new("mountain.jpg", 280));

    tree
}
