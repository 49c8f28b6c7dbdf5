use api_client::{Album, Photo};

use crate::store::CollectionStore;

/// One renderable unit of the merged gallery view: an album, or a photo that
/// does not belong to any album. Derived per render pass, never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridEntry {
    Album(Album),
    Photo(Photo),
}

impl GridEntry {
    pub fn is_album(&self) -> bool {
        matches!(self, GridEntry::Album(_))
    }
}

fn matches(title: Option<&str>, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    match title {
        Some(title) => title.to_lowercase().contains(needle),
        None => false,
    }
}

/// Derive the merged gallery grid: all matching albums in store order,
/// followed by all matching photos without an album, in store order.
///
/// The query is trimmed and matched case-insensitively against titles; an
/// empty or whitespace-only query matches everything. Photos that belong to
/// an album never appear here, whatever the query.
pub fn derive(photos: &[Photo], albums: &[Album], query: &str) -> Vec<GridEntry> {
    let needle = query.trim().to_lowercase();
    let mut entries: Vec<GridEntry> = albums
        .iter()
        .filter(|a| matches(a.title.as_deref(), &needle))
        .cloned()
        .map(GridEntry::Album)
        .collect();
    entries.extend(
        photos
            .iter()
            .filter(|p| p.album_id.is_none() && matches(p.title.as_deref(), &needle))
            .cloned()
            .map(GridEntry::Photo),
    );
    entries
}

/// The single-album variant of the same matching rule: no album entries and
/// no membership exclusion, just the album's own photos filtered by title.
pub fn filter_photos(photos: &[Photo], query: &str) -> Vec<Photo> {
    let needle = query.trim().to_lowercase();
    photos
        .iter()
        .filter(|p| matches(p.title.as_deref(), &needle))
        .cloned()
        .collect()
}

/// Memoizing wrapper around [`derive`], keyed on the store revision and the
/// query. `refresh` is expected to be called after every state transition;
/// it recomputes only when either input actually changed and reports whether
/// it did.
#[derive(Debug, Default)]
pub struct GridFilter {
    key: Option<(u64, String)>,
    entries: Vec<GridEntry>,
}

impl GridFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn refresh(&mut self, store: &CollectionStore, query: &str) -> bool {
        let unchanged = self
            .key
            .as_ref()
            .map_or(false, |(revision, q)| *revision == store.revision() && q == query);
        if unchanged {
            return false;
        }
        self.entries = derive(store.photos(), store.albums(), query);
        self.key = Some((store.revision(), query.to_string()));
        true
    }

    pub fn entries(&self) -> &[GridEntry] {
        &self.entries
    }
}
