use api_client::ApiClient;
use collection::{CollectionStore, GridEntry, GridFilter};
use httpmock::prelude::*;
use sync::{apply_albums, apply_photos, Gateway};

#[tokio::main]
async fn main() {
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
    server.mock(|when, then| {
        when.method(GET).path("/albums/7");
        then.status(200).json_body(serde_json::json!({
            "albums": [{"id": 5, "title": "Pets"}]
        }));
    });

    let gateway = Gateway::new(ApiClient::new(server.url("")));
    let mut store = CollectionStore::new();

    let photos = gateway.load_photos(7).await;
    let albums = gateway.load_albums(7).await;
    apply_photos(&mut store, photos);
    apply_albums(&mut store, albums);

    let mut grid = GridFilter::new();
    grid.refresh(&store, "cat");

    // Only the unaffiliated Cat photo survives: Dog is excluded by album
    // membership, the Pets album by title mismatch.
    match grid.entries() {
        [GridEntry::Photo(photo)] => assert_eq!(photo.id, 1),
        entries => panic!("unexpected grid: {entries:?}"),
    }
}
