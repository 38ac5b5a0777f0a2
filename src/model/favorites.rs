use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a catalog document
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentId(pub u32);

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The shared set of favorited documents.
///
/// Mutated only through [`FavoriteSet::toggle`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FavoriteSet {
    ids: BTreeSet<DocumentId>,
}

impl FavoriteSet {
    pub fn new() -> Self {
        FavoriteSet::default()
    }

    pub fn from_ids<I: IntoIterator<Item = DocumentId>>(ids: I) -> Self {
        FavoriteSet {
            ids: ids.into_iter().collect(),
        }
    }

    /// Flip membership of `id`. Returns the new membership.
    pub fn toggle(&mut self, id: DocumentId) -> bool {
        if self.ids.remove(&id) {
            false
        } else {
            self.ids.insert(id);
            true
        }
    }

    pub fn is_favorite(&self, id: DocumentId) -> bool {
        self.ids.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Favorited ids in ascending order
    pub fn iter(&self) -> impl Iterator<Item = DocumentId> + '_ {
        self.ids.iter().copied()
    }
}
