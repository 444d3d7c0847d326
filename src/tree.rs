//! Virtual file tree of generated assets.

use std::collections::BTreeMap;

use crate::error::{IconError, IconResult};
use crate::icon::EncodedIcon;

/// Slash-separated path to PNG bytes, ordered by path.
///
/// Paths are unique. Insertion order has no effect on iteration order, so
/// two trees built from the same entries compare equal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputTree {
    entries: BTreeMap<String, Vec<u8>>,
}

impl OutputTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an entry. Fails if `path` is already present.
    pub fn insert(&mut self, path: impl Into<String>, bytes: Vec<u8>) -> IconResult<()> {
        let path = path.into();
        if self.entries.contains_key(&path) {
            return Err(IconError::DuplicatePath(path));
        }
        self.entries.insert(path, bytes);
        Ok(())
    }

    pub fn get(&self, path: &str) -> Option<&[u8]> {
        self.entries.get(path).map(Vec::as_slice)
    }

    pub fn contains(&self, path: &str) -> bool {
        self.entries.contains_key(path)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[u8])> {
        self.entries
            .iter()
            .map(|(path, bytes)| (path.as_str(), bytes.as_slice()))
    }

    /// Parent folders of every entry, outermost first, without duplicates.
    ///
    /// `res/mipmap-mdpi/ic_launcher.png` contributes `res/` and
    /// `res/mipmap-mdpi/`.
    pub fn directories(&self) -> Vec<String> {
        let mut dirs = std::collections::BTreeSet::new();
        for path in self.entries.keys() {
            let mut end = 0;
            while let Some(pos) = path[end..].find('/') {
                end += pos + 1;
                dirs.insert(path[..end].to_string());
            }
        }
        dirs.into_iter().collect()
    }
}

impl TryFrom<Vec<EncodedIcon>> for OutputTree {
    type Error = IconError;

    fn try_from(icons: Vec<EncodedIcon>) -> IconResult<Self> {
        let mut tree = Self::new();
        for icon in icons {
            tree.insert(icon.path, icon.png)?;
        }
        Ok(tree)
    }
}

impl<'a> IntoIterator for &'a OutputTree {
    type Item = (&'a String, &'a Vec<u8>);
    type IntoIter = std::collections::btree_map::Iter<'a, String, Vec<u8>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
