use api_client::{Album, ApiClient, ApiError, Photo};
use collection::CollectionStore;
use httpmock::prelude::*;
use sync::{apply_album_created, apply_albums, apply_attachment, apply_photos, Gateway};

fn gateway(server: &MockServer) -> Gateway {
    Gateway::new(ApiClient::new(server.url("")))
}

#[tokio::test]
async fn load_photos_round_trip() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/gallery/7");
        then.status(200).json_body(serde_json::json!({
            "images": [
                {"id": 1, "title": "Cat", "url": "http://x/1.jpg", "album_id": null},
                {"id": 2, "title": "Dog", "url": "http://x/2.jpg", "album_id": 5}
            ]
        }));
    });

    let photos = gateway(&server).load_photos(7).await.unwrap();
    assert_eq!(photos.len(), 2);
    assert_eq!(photos[1].album_id, Some(5));
}

#[tokio::test]
async fn load_failure_degrades_to_empty_collection() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/gallery/7");
        then.status(500);
    });

    let mut store = CollectionStore::new();
    store.set_photos(vec![Photo {
        id: 9,
        title: None,
        url: "http://x/9.jpg".into(),
        album_id: None,
    }]);

    let result = gateway(&server).load_photos(7).await;
    apply_photos(&mut store, result);
    assert!(store.photos().is_empty());
}

#[tokio::test]
async fn create_album_trims_title_before_sending() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/albums")
            .json_body(serde_json::json!({"owner_id": 7, "title": "Trip"}));
        then.status(200)
            .json_body(serde_json::json!({"album": {"id": 3, "title": "Trip"}}));
    });

    let album = gateway(&server).create_album(7, "  Trip  ").await.unwrap();
    assert_eq!(album.title.as_deref(), Some("Trip"));
    mock.assert();
}

#[tokio::test]
async fn create_album_failure_carries_server_text() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/albums");
        then.status(400)
            .json_body(serde_json::json!({"error": "too many albums"}));
    });

    let err = gateway(&server).create_album(7, "Trip").await.unwrap_err();
    assert_eq!(err, ApiError::Server("too many albums".into()));
}

#[tokio::test]
async fn attach_photo_posts_owner_and_album() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/image/1/set-album")
            .json_body(serde_json::json!({"owner_id": 7, "album_id": 5}));
        then.status(200).json_body(serde_json::json!({}));
    });

    gateway(&server).attach_photo(7, 1, 5).await.unwrap();
    mock.assert();
}

#[test]
fn reconciliation_patches_only_confirmed_state() {
    let mut store = CollectionStore::new();
    apply_photos(
        &mut store,
        Ok(vec![Photo {
            id: 1,
            title: Some("Cat".into()),
            url: "http://x/1.jpg".into(),
            album_id: None,
        }]),
    );
    apply_albums(
        &mut store,
        Ok(vec![Album {
            id: 5,
            title: Some("Pets".into()),
        }]),
    );

    apply_album_created(
        &mut store,
        Album {
            id: 6,
            title: Some("New".into()),
        },
    );
    assert_eq!(store.albums()[0].id, 6);

    assert!(apply_attachment(&mut store, 1, 5));
    assert_eq!(store.photo(1).unwrap().album_id, Some(5));
    assert!(!apply_attachment(&mut store, 42, 5));
}
