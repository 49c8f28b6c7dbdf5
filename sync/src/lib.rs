//! Sync gateway between the remote photo-hosting service and the local
//! collection.
//!
//! The gateway owns the remote side: every workflow action that needs the
//! server goes through it. The `apply_*` functions are the reconciliation
//! half — they run on the interaction thread once a response arrives, so the
//! store is never observed half-updated.

use api_client::{Album, AlbumDetail, AlbumId, ApiClient, ApiError, OwnerId, Photo, PhotoId};
use collection::CollectionStore;

#[derive(Debug, Clone)]
pub struct Gateway {
    client: ApiClient,
}

impl Gateway {
    pub fn new(client: ApiClient) -> Self {
        Gateway { client }
    }

    pub async fn load_photos(&self, owner: OwnerId) -> Result<Vec<Photo>, ApiError> {
        self.client.get_gallery(owner).await
    }

    pub async fn load_albums(&self, owner: OwnerId) -> Result<Vec<Album>, ApiError> {
        self.client.get_albums(owner).await
    }

    pub async fn load_album(&self, album: AlbumId) -> Result<AlbumDetail, ApiError> {
        self.client.get_album(album).await
    }

    pub async fn load_photo(&self, photo: PhotoId) -> Result<Option<Photo>, ApiError> {
        self.client.get_image(photo).await
    }

    /// Create an album. The title is trimmed before it goes on the wire;
    /// rejecting empty names is the caller's job and happens before any
    /// request is made.
    pub async fn create_album(&self, owner: OwnerId, title: &str) -> Result<Album, ApiError> {
        self.client.create_album(owner, title.trim()).await
    }

    pub async fn attach_photo(
        &self,
        owner: OwnerId,
        photo: PhotoId,
        album: AlbumId,
    ) -> Result<(), ApiError> {
        self.client.set_photo_album(photo, owner, album).await
    }
}

/// Reconcile a gallery load. Failures degrade to an empty list so the page
/// stays usable with whatever partial data did arrive.
pub fn apply_photos(store: &mut CollectionStore, result: Result<Vec<Photo>, ApiError>) {
    match result {
        Ok(photos) => store.set_photos(photos),
        Err(err) => {
            tracing::warn!("failed to load gallery: {err}");
            store.set_photos(Vec::new());
        }
    }
}

/// Reconcile an album-list load, with the same fail-soft rule.
pub fn apply_albums(store: &mut CollectionStore, result: Result<Vec<Album>, ApiError>) {
    match result {
        Ok(albums) => store.set_albums(albums),
        Err(err) => {
            tracing::warn!("failed to load albums: {err}");
            store.set_albums(Vec::new());
        }
    }
}

/// A confirmed album creation lands at the head of the album ordering.
pub fn apply_album_created(store: &mut CollectionStore, album: Album) {
    tracing::info!(album = album.id, "album created");
    store.insert_album(album);
}

/// A server-confirmed attachment patches the photo's membership.
pub fn apply_attachment(store: &mut CollectionStore, photo: PhotoId, album: AlbumId) -> bool {
    let patched = store.patch_photo_album(photo, album);
    if !patched {
        tracing::warn!(photo, album, "attachment confirmed for unknown photo");
    }
    patched
}
