//! API client module for the picstash photo-hosting service.

use reqwest::header::CONTENT_TYPE;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub type PhotoId = i64;
pub type AlbumId = i64;
pub type OwnerId = i64;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Photo {
    pub id: PhotoId,
    pub title: Option<String>,
    pub url: String,
    pub album_id: Option<AlbumId>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Album {
    pub id: AlbumId,
    pub title: Option<String>,
}

/// Payload of `GET /album/{id}`: the album itself plus its photos.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct AlbumDetail {
    pub album: Option<Album>,
    #[serde(default)]
    pub images: Vec<Photo>,
}

#[derive(Debug, Deserialize)]
struct GalleryResponse {
    #[serde(default)]
    images: Vec<Photo>,
}

#[derive(Debug, Deserialize)]
struct AlbumsResponse {
    #[serde(default)]
    albums: Vec<Album>,
}

#[derive(Debug, Deserialize)]
struct ImageResponse {
    image: Option<Photo>,
}

#[derive(Debug, Deserialize)]
struct CreateAlbumResponse {
    album: Album,
}

#[derive(Debug, Serialize)]
struct CreateAlbumRequest<'a> {
    owner_id: OwnerId,
    title: &'a str,
}

#[derive(Debug, Serialize)]
struct SetAlbumRequest {
    owner_id: OwnerId,
    album_id: AlbumId,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    /// Non-2xx response carrying an `error` field; shown to the user verbatim.
    #[error("{0}")]
    Server(String),
    /// Non-2xx response without a usable `error` field.
    #[error("server returned status {0}")]
    Status(u16),
    #[error("request error: {0}")]
    Request(String),
    #[error("malformed response: {0}")]
    Decode(String),
}

impl ApiError {
    /// The server-reported message, if the failure carried one.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Server(message) => Some(message),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        ApiClient {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn get_gallery(&self, owner: OwnerId) -> Result<Vec<Photo>, ApiError> {
        let url = format!("{}/gallery/{}", self.base_url, owner);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;
        let response = check_status(response).await?;
        let body = response
            .json::<GalleryResponse>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok(body.images)
    }

    pub async fn get_albums(&self, owner: OwnerId) -> Result<Vec<Album>, ApiError> {
        let url = format!("{}/albums/{}", self.base_url, owner);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;
        let response = check_status(response).await?;
        let body = response
            .json::<AlbumsResponse>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok(body.albums)
    }

    pub async fn get_album(&self, album: AlbumId) -> Result<AlbumDetail, ApiError> {
        let url = format!("{}/album/{}", self.base_url, album);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;
        let response = check_status(response).await?;
        response
            .json::<AlbumDetail>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    pub async fn get_image(&self, photo: PhotoId) -> Result<Option<Photo>, ApiError> {
        let url = format!("{}/image/{}", self.base_url, photo);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;
        let response = check_status(response).await?;
        let body = response
            .json::<ImageResponse>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok(body.image)
    }

    pub async fn create_album(&self, owner: OwnerId, title: &str) -> Result<Album, ApiError> {
        let url = format!("{}/albums", self.base_url);
        let response = self
            .client
            .post(&url)
            .header(CONTENT_TYPE, "application/json")
            .json(&CreateAlbumRequest {
                owner_id: owner,
                title,
            })
            .send()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;
        let response = check_status(response).await?;
        let body = response
            .json::<CreateAlbumResponse>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok(body.album)
    }

    pub async fn set_photo_album(
        &self,
        photo: PhotoId,
        owner: OwnerId,
        album: AlbumId,
    ) -> Result<(), ApiError> {
        let url = format!("{}/image/{}/set-album", self.base_url, photo);
        let response = self
            .client
            .post(&url)
            .header(CONTENT_TYPE, "application/json")
            .json(&SetAlbumRequest {
                owner_id: owner,
                album_id: album,
            })
            .send()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;
        check_status(response).await?;
        Ok(())
    }
}

/// Turn a non-2xx response into an error, surfacing the server's own
/// `error` message when the body carries one.
async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let code = status.as_u16();
    let body = response.text().await.unwrap_or_default();
    match serde_json::from_str::<ErrorBody>(&body) {
        Ok(ErrorBody {
            error: Some(message),
        }) => Err(ApiError::Server(message)),
        _ => Err(ApiError::Status(code)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    #[test]
    fn gallery_response_tolerates_missing_list() {
        let parsed: GalleryResponse = serde_json::from_str("{}").unwrap();
        assert!(parsed.images.is_empty());

        let parsed: GalleryResponse = serde_json::from_str(
            r#"{"images": [{"id": 1, "title": "Cat", "url": "http://x/1.jpg", "album_id": null}]}"#,
        )
        .unwrap();
        assert_eq!(parsed.images.len(), 1);
        assert_eq!(parsed.images[0].title.as_deref(), Some("Cat"));
        assert!(parsed.images[0].album_id.is_none());
    }

    #[test]
    fn album_detail_tolerates_missing_album() {
        let parsed: AlbumDetail = serde_json::from_str(r#"{"images": []}"#).unwrap();
        assert!(parsed.album.is_none());
        assert!(parsed.images.is_empty());
    }

    #[tokio::test]
    async fn create_album_posts_owner_and_title() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/albums")
                .json_body(serde_json::json!({"owner_id": 7, "title": "Trip"}));
            then.status(200)
                .json_body(serde_json::json!({"album": {"id": 3, "title": "Trip"}}));
        });

        let client = ApiClient::new(server.url(""));
        let album = client.create_album(7, "Trip").await.unwrap();
        assert_eq!(album.id, 3);
        assert_eq!(album.title.as_deref(), Some("Trip"));
        mock.assert();
    }

    #[tokio::test]
    async fn server_error_field_is_surfaced_verbatim() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/albums");
            then.status(400)
                .json_body(serde_json::json!({"error": "album limit reached"}));
        });

        let client = ApiClient::new(server.url(""));
        let err = client.create_album(7, "Trip").await.unwrap_err();
        assert_eq!(err, ApiError::Server("album limit reached".into()));
        assert_eq!(err.server_message(), Some("album limit reached"));
    }

    #[tokio::test]
    async fn bodyless_failure_falls_back_to_status() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/gallery/7");
            then.status(500);
        });

        let client = ApiClient::new(server.url(""));
        let err = client.get_gallery(7).await.unwrap_err();
        assert_eq!(err, ApiError::Status(500));
        assert!(err.server_message().is_none());
    }

    #[tokio::test]
    async fn set_photo_album_posts_to_image_endpoint() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/image/1/set-album")
                .json_body(serde_json::json!({"owner_id": 7, "album_id": 5}));
            then.status(200).json_body(serde_json::json!({}));
        });

        let client = ApiClient::new(server.url(""));
        client.set_photo_album(1, 7, 5).await.unwrap();
        mock.assert();
    }
}
