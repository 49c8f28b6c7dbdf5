use api_client::{Album, AlbumId, Photo, PhotoId};

/// In-memory store of the owner's photos and albums.
///
/// Mutations are only applied on the interaction thread, and each one bumps
/// `revision` so derived views can tell whether anything changed. A photo's
/// `album_id` is only ever patched from a server-confirmed response; there is
/// no optimistic attachment.
#[derive(Debug, Default)]
pub struct CollectionStore {
    photos: Vec<Photo>,
    albums: Vec<Album>,
    revision: u64,
}

impl CollectionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_photos(&mut self, photos: Vec<Photo>) {
        self.photos = photos;
        self.bump();
    }

    pub fn set_albums(&mut self, albums: Vec<Album>) {
        self.albums = albums;
        self.bump();
    }

    /// Insert a freshly created album at the head of the ordering, so the
    /// most recently created album is listed first.
    pub fn insert_album(&mut self, album: Album) {
        self.albums.insert(0, album);
        self.bump();
    }

    /// Record a server-confirmed attachment. Returns false when the photo is
    /// not part of the collection.
    pub fn patch_photo_album(&mut self, photo: PhotoId, album: AlbumId) -> bool {
        match self.photos.iter_mut().find(|p| p.id == photo) {
            Some(p) => {
                p.album_id = Some(album);
                self.bump();
                true
            }
            None => false,
        }
    }

    /// Drop all state, e.g. when the owner signs out.
    pub fn clear(&mut self) {
        self.photos.clear();
        self.albums.clear();
        self.bump();
    }

    pub fn photo(&self, id: PhotoId) -> Option<&Photo> {
        self.photos.iter().find(|p| p.id == id)
    }

    pub fn album(&self, id: AlbumId) -> Option<&Album> {
        self.albums.iter().find(|a| a.id == id)
    }

    pub fn photos(&self) -> &[Photo] {
        &self.photos
    }

    pub fn albums(&self) -> &[Album] {
        &self.albums
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    fn bump(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn photo(id: PhotoId) -> Photo {
        Photo {
            id,
            title: Some(format!("photo {id}")),
            url: format!("http://photos.test/{id}.jpg"),
            album_id: None,
        }
    }

    fn album(id: AlbumId, title: &str) -> Album {
        Album {
            id,
            title: Some(title.into()),
        }
    }

    #[test]
    fn insert_album_goes_to_head() {
        let mut store = CollectionStore::new();
        store.set_albums(vec![album(1, "Old"), album(2, "Older")]);
        store.insert_album(album(3, "New"));
        let ids: Vec<_> = store.albums().iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn patch_photo_album_sets_membership() {
        let mut store = CollectionStore::new();
        store.set_photos(vec![photo(1), photo(2)]);
        assert!(store.patch_photo_album(1, 5));
        assert_eq!(store.photo(1).unwrap().album_id, Some(5));
        assert_eq!(store.photo(2).unwrap().album_id, None);
    }

    #[test]
    fn patch_unknown_photo_is_rejected() {
        let mut store = CollectionStore::new();
        let before = store.revision();
        assert!(!store.patch_photo_album(99, 5));
        assert_eq!(store.revision(), before);
    }

    #[test]
    fn every_mutation_bumps_revision() {
        let mut store = CollectionStore::new();
        let r0 = store.revision();
        store.set_photos(vec![photo(1)]);
        let r1 = store.revision();
        store.insert_album(album(1, "A"));
        let r2 = store.revision();
        store.patch_photo_album(1, 1);
        let r3 = store.revision();
        assert!(r0 < r1 && r1 < r2 && r2 < r3);
    }
}
