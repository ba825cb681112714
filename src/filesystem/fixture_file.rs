use std::{
    borrow::Cow,
    path::{Path, PathBuf},
};

use compio::fs;
use hashlink::LinkedHashMap;
use saphyr::{LoadableYamlNode, Scalar, Yaml};
use snafu::prelude::*;
use tracing::{debug, info};

use crate::filesystem::{DirId, FileEntry, Tree};

fn key(name: &str) -> Yaml<'_> {
    Yaml::Value(Scalar::String(Cow::Borrowed(name)))
}

/// Loads an initial tree from a YAML document of the form
///
/// ```yaml
/// root:
///   name: root
///   files:
///     - { name: readme.txt, size: 10 }
///   directories:
///     - name: documents
/// ```
///
/// Entries are sequences rather than maps, so the order of the file is the
/// listing order and sibling names may repeat.
pub struct FixtureFile;

impl FixtureFile {
    pub async fn from_path(path: impl AsRef<Path>) -> Result<Tree, FixtureError> {
        let path = path.as_ref();
        debug!("Reading fixture file: {}", path.display());
        let bytes = fs::read(path).await.context(ReadSnafu {
            path: path.to_path_buf(),
        })?;
        let contents = String::from_utf8(bytes).context(EncodingSnafu {
            path: path.to_path_buf(),
        })?;

        let tree = Self::parse(&contents)?;
        info!(
            "Loaded {} directories from fixture {}",
            tree.directory_count(),
            path.display()
        );
        Ok(tree)
    }

    pub fn parse(contents: &str) -> Result<Tree, FixtureError> {
        let documents = Yaml::load_from_str(contents).context(ParseSnafu)?;
        let top_level = documents
            .first()
            .ok_or(FixtureError::EmptyDocument)?
            .as_mapping()
            .ok_or(FixtureError::TopLevelNotMap)?;

        let root_data = top_level
            .get(&key("root"))
            .ok_or(FixtureError::MissingRoot)?
            .as_mapping()
            .ok_or(FixtureError::NotAMap {
                location: "root".to_owned(),
            })?;

        let root_name = Self::directory_name(root_data, "root")?;
        let mut tree = Tree::new(root_name);
        let root = tree.root();
        Self::fill_directory(&mut tree, root, root_data)?;

        Ok(tree)
    }

    fn directory_name(
        data: &LinkedHashMap<Yaml, Yaml>,
        location: &str,
    ) -> Result<String, FixtureError> {
        data.get(&key("name"))
            .and_then(|v| v.as_str())
            .filter(|name| !name.is_empty())
            .map(str::to_owned)
            .context(MissingNameSnafu { location })
    }

    fn fill_directory(
        tree: &mut Tree,
        id: DirId,
        data: &LinkedHashMap<Yaml, Yaml>,
    ) -> Result<(), FixtureError> {
        let location = tree.path(id);

        for entry in Self::sequence(data, "files", &location)? {
            let file = entry.as_mapping().context(NotAMapSnafu {
                location: format!("{location} files"),
            })?;
            tree.add_file(id, Self::file_entry(file, &location)?);
        }

        for entry in Self::sequence(data, "directories", &location)? {
            let child_data = entry.as_mapping().context(NotAMapSnafu {
                location: format!("{location} directories"),
            })?;
            let name = Self::directory_name(child_data, &location)?;
            let child = tree.add_child(id, name);
            Self::fill_directory(tree, child, child_data)?;
        }

        Ok(())
    }

    fn sequence<'a, 'y>(
        data: &'a LinkedHashMap<Yaml<'y>, Yaml<'y>>,
        field: &'static str,
        location: &str,
    ) -> Result<&'a [Yaml<'y>], FixtureError> {
        match data.get(&key(field)) {
            None => Ok(&[][..]),
            Some(Yaml::Sequence(items)) => Ok(items.as_slice()),
            Some(_) => NotASequenceSnafu { field, location }.fail(),
        }
    }

    fn file_entry(
        data: &LinkedHashMap<Yaml, Yaml>,
        location: &str,
    ) -> Result<FileEntry, FixtureError> {
        let name = data
            .get(&key("name"))
            .and_then(|v| v.as_str())
            .context(MissingNameSnafu {
                location: format!("{location} files"),
            })?;

        let size = match data.get(&key("size")) {
            Some(Yaml::Value(Scalar::Integer(size))) => u64::try_from(*size).ok(),
            _ => None,
        }
        .context(InvalidSizeSnafu {
            file: format!("{location}/{name}"),
        })?;

        Ok(FileEntry::new(name, size))
    }
}

#[derive(Debug, Snafu)]
pub enum FixtureError {
    #[snafu(display("Failed to read the fixture file: {}", path.display()))]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[snafu(display("Fixture file {} is not valid UTF-8", path.display()))]
    EncodingError {
        path: PathBuf,
        source: std::string::FromUtf8Error,
    },
    #[snafu(display("Failed to parse the fixture file"))]
    ParseError { source: saphyr::ScanError },
    #[snafu(display("Fixture file contains no document"))]
    EmptyDocument,
    #[snafu(display("Top level of fixture should be a map"))]
    TopLevelNotMap,
    #[snafu(display("Fixture has no 'root' directory"))]
    MissingRoot,
    #[snafu(display("Expected a map at {}", location))]
    NotAMap { location: String },
    #[snafu(display("Entry under {} has no name", location))]
    MissingName { location: String },
    #[snafu(display("'{}' of {} should be a list", field, location))]
    NotASequence {
        field: &'static str,
        location: String,
    },
    #[snafu(display("File {} needs a non-negative integer size", file))]
    InvalidSize { file: String },
}
