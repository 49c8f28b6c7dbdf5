use api_client::ApiClient;
use collection::{CollectionStore, SelectionTracker};
use httpmock::prelude::*;
use sync::{apply_albums, apply_attachment, apply_photos, Gateway};
use ui::{AttachWorkflow, WorkflowState};

#[tokio::main]
async fn main() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/gallery/7");
        then.status(200).json_body(serde_json::json!({
            "images": [
                {"id": 1, "title": "Cat", "url": "http://x/1.jpg", "album_id": null}
            ]
        }));
    });
    server.mock(|when, then| {
        when.method(GET).path("/albums/7");
        then.status(200).json_body(serde_json::json!({
            "albums": [{"id": 5, "title": "Pets"}]
        }));
    });
    let attach = server.mock(|when, then| {
        when.method(POST)
            .path("/image/1/set-album")
            .json_body(serde_json::json!({"owner_id": 7, "album_id": 5}));
        then.status(200).json_body(serde_json::json!({}));
    });

    let gateway = Gateway::new(ApiClient::new(server.url("")));
    let mut store = CollectionStore::new();
    let photos = gateway.load_photos(7).await;
    let albums = gateway.load_albums(7).await;
    apply_photos(&mut store, photos);
    apply_albums(&mut store, albums);

    // Select photo 1, open the menu, enter the picker, pick album 5.
    let mut selection = SelectionTracker::new();
    selection.select(1);

    let mut workflow = AttachWorkflow::new();
    workflow.toggle_menu();
    workflow
        .begin_attach(selection.active().is_some())
        .expect("a photo is selected");
    workflow.pick(5);
    assert_eq!(workflow.state(), WorkflowState::AttachPicking);

    let album = workflow
        .confirm_target(selection.active().is_some())
        .expect("both guards hold");
    let photo = selection.active().expect("selection present");

    gateway.attach_photo(7, photo, album).await.expect("attach confirmed");
    attach.assert();

    // Server said yes: patch the store, clear the selection, close up.
    apply_attachment(&mut store, photo, album);
    selection.clear();
    workflow.attach_succeeded();

    assert_eq!(store.photo(1).expect("photo kept").album_id, Some(5));
    assert_eq!(selection.active(), None);
    assert_eq!(workflow.state(), WorkflowState::Closed);
}
