//! User interface for picstash.

mod activation;
mod image_loader;
mod nav;
mod notice;
mod style;
mod workflow;

pub use image_loader::{ImageLoadError, ImageLoader};
pub use nav::Route;
pub use notice::{Notice, NoticeKind};
pub use workflow::{AttachWorkflow, WorkflowGuard, WorkflowState};

use crate::activation::{ActivationTracker, Target};
use crate::style::Palette;
use api_client::{Album, AlbumDetail, AlbumId, ApiClient, ApiError, OwnerId, Photo, PhotoId};
use collection::{CollectionStore, GridEntry, GridFilter, SelectionTracker};
use i18n::Lang;
use iced::event::{self, Event};
use iced::keyboard::{self, key};
use iced::mouse;
use iced::widget::image::Handle;
use iced::widget::{
    button, column, container, image, pick_list, row, scrollable, text, text_input, Column,
};
use iced::{
    executor, Alignment, Application, Command, Element, Length, Point, Rectangle, Settings,
    Subscription, Theme,
};
use std::collections::HashMap;
use std::path::PathBuf;
use sync::Gateway;
use tokio::time::{sleep, Duration};

const NOTICE_DISPLAY_DURATION: Duration = Duration::from_secs(5);
const GRID_COLUMNS: usize = 4;
const CARD_SIDE: f32 = 150.0;

fn manage_region_id() -> container::Id {
    container::Id::new("manage-region")
}

/// The signed-in owner. Constructed once after sign-in and passed into the
/// UI; the collection and selection it scopes die with the UI instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Session {
    pub owner: OwnerId,
}

#[derive(Debug, Clone)]
pub struct Flags {
    pub session: Session,
    pub api_base_url: String,
    pub language: Lang,
    pub preload: usize,
    pub cache_dir: PathBuf,
    /// Photo to pre-select on the gallery's first render, handed over by
    /// whatever navigated here.
    pub highlight: Option<PhotoId>,
}

pub fn run(flags: Flags) -> iced::Result {
    PicstashUI::run(Settings::with_flags(flags))
}

/// Entry of the album picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlbumChoice {
    pub id: AlbumId,
    pub title: String,
}

impl std::fmt::Display for AlbumChoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.title)
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    PhotosLoaded(Result<Vec<Photo>, ApiError>),
    AlbumsLoaded(Result<Vec<Album>, ApiError>),
    SessionChanged(Session),
    SearchChanged(String),
    PhotoCardClicked(PhotoId),
    AlbumCardClicked(AlbumId),
    ToggleManageMenu,
    CreateAlbumRequested,
    AlbumNameChanged(String),
    ConfirmCreateAlbum,
    CancelCreateAlbum,
    AlbumCreated(Result<Album, ApiError>),
    BeginAttach,
    AlbumPicked(AlbumChoice),
    ConfirmAttach,
    PhotoAttached(PhotoId, AlbumId, Result<(), ApiError>),
    Navigate(Route),
    AlbumViewLoaded(AlbumId, Result<AlbumDetail, ApiError>),
    AlbumSearchChanged(String),
    PhotoViewLoaded(PhotoId, Result<Option<Photo>, ApiError>),
    CopyPhotoLink(String),
    ThumbnailLoaded(PhotoId, Result<Handle, ImageLoadError>),
    FullImageLoaded(PhotoId, Result<Handle, ImageLoadError>),
    PointerMoved(Point),
    PointerPressed,
    MenuRegion(Option<Rectangle>),
    EscapePressed,
    DismissNotice(usize),
    ClearNotices,
}

#[derive(Debug)]
enum Page {
    Gallery,
    Album(AlbumView),
    Photo(PhotoView),
}

#[derive(Debug)]
struct AlbumView {
    id: AlbumId,
    album: Option<Album>,
    photos: Vec<Photo>,
    filtered: Vec<Photo>,
    query: String,
    loading: bool,
}

impl AlbumView {
    fn loading(id: AlbumId) -> Self {
        AlbumView {
            id,
            album: None,
            photos: Vec::new(),
            filtered: Vec::new(),
            query: String::new(),
            loading: true,
        }
    }
}

#[derive(Debug)]
struct PhotoView {
    id: PhotoId,
    photo: Option<Photo>,
    loading: bool,
}

pub struct PicstashUI {
    session: Session,
    gateway: Gateway,
    lang: Lang,
    store: CollectionStore,
    grid: GridFilter,
    selection: SelectionTracker,
    workflow: AttachWorkflow,
    activation: ActivationTracker,
    page: Page,
    query: String,
    loading_photos: bool,
    loading_albums: bool,
    album_prompt: Option<String>,
    attach_in_flight: bool,
    create_in_flight: bool,
    notices: Vec<Notice>,
    thumbnails: HashMap<PhotoId, Handle>,
    full_images: HashMap<PhotoId, Handle>,
    image_loader: ImageLoader,
    cursor: Point,
    preload: usize,
}

impl PicstashUI {
    /// Expose current state for testing purposes
    pub fn photo_count(&self) -> usize {
        self.store.photos().len()
    }

    pub fn album_count(&self) -> usize {
        self.store.albums().len()
    }

    pub fn album_ids(&self) -> Vec<AlbumId> {
        self.store.albums().iter().map(|a| a.id).collect()
    }

    pub fn photo_album(&self, photo: PhotoId) -> Option<AlbumId> {
        self.store.photo(photo).and_then(|p| p.album_id)
    }

    pub fn grid_entries(&self) -> &[GridEntry] {
        self.grid.entries()
    }

    pub fn selected_photo(&self) -> Option<PhotoId> {
        self.selection.active()
    }

    pub fn workflow_state(&self) -> WorkflowState {
        self.workflow.state()
    }

    pub fn chosen_album(&self) -> Option<AlbumId> {
        self.workflow.chosen_album()
    }

    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    pub fn is_loading(&self) -> bool {
        self.loading_photos || self.loading_albums
    }

    pub fn attach_in_flight(&self) -> bool {
        self.attach_in_flight
    }

    pub fn create_in_flight(&self) -> bool {
        self.create_in_flight
    }

    pub fn album_prompt_open(&self) -> bool {
        self.album_prompt.is_some()
    }

    pub fn page_name(&self) -> &'static str {
        match self.page {
            Page::Gallery => "Gallery",
            Page::Album(_) => "Album",
            Page::Photo(_) => "Photo",
        }
    }

    pub fn album_view_photo_count(&self) -> Option<usize> {
        match &self.page {
            Page::Album(view) => Some(view.filtered.len()),
            _ => None,
        }
    }

    fn text(&self, key: &str) -> String {
        i18n::lookup(self.lang, key)
    }

    fn guard_text(&self, guard: WorkflowGuard) -> String {
        match guard {
            WorkflowGuard::NoPhotoSelected => self.text("gallery.pickPhotoFirst"),
            WorkflowGuard::NoAlbumChosen => self.text("gallery.pickAlbum"),
        }
    }

    /// Server-reported error text verbatim, otherwise the localized fallback
    /// for the failed operation.
    fn request_error_text(&self, err: &ApiError, fallback_key: &str) -> String {
        match err.server_message() {
            Some(message) => message.to_string(),
            None => self.text(fallback_key),
        }
    }

    fn push_notice(&mut self, notice: Notice) -> Command<Message> {
        self.notices.push(notice);
        Self::notice_timeout()
    }

    fn notice_timeout() -> Command<Message> {
        Command::perform(
            async {
                sleep(NOTICE_DISPLAY_DURATION).await;
            },
            |_| Message::ClearNotices,
        )
    }

    fn load_collection(&self) -> Command<Message> {
        let owner = self.session.owner;
        let photos = {
            let gateway = self.gateway.clone();
            Command::perform(
                async move { gateway.load_photos(owner).await },
                Message::PhotosLoaded,
            )
        };
        let albums = {
            let gateway = self.gateway.clone();
            Command::perform(
                async move { gateway.load_albums(owner).await },
                Message::AlbumsLoaded,
            )
        };
        Command::batch(vec![photos, albums])
    }

    fn load_thumbnail(&self, photo: PhotoId, url: String) -> Command<Message> {
        let loader = self.image_loader.clone();
        Command::perform(async move { loader.load(photo, &url).await }, move |result| {
            Message::ThumbnailLoaded(photo, result)
        })
    }

    fn load_full_image(&self, photo: PhotoId, url: String) -> Command<Message> {
        let loader = self.image_loader.clone();
        Command::perform(async move { loader.load(photo, &url).await }, move |result| {
            Message::FullImageLoaded(photo, result)
        })
    }

    fn preload_thumbnails(&self, photos: &[Photo]) -> Command<Message> {
        let commands: Vec<_> = photos
            .iter()
            .take(self.preload)
            .map(|photo| self.load_thumbnail(photo.id, photo.url.clone()))
            .collect();
        Command::batch(commands)
    }

    fn handle(&mut self, message: Message) -> Command<Message> {
        match message {
            Message::PhotosLoaded(result) => {
                self.loading_photos = false;
                let preload = match &result {
                    Ok(photos) => self.preload_thumbnails(photos),
                    Err(_) => Command::none(),
                };
                sync::apply_photos(&mut self.store, result);
                preload
            }
            Message::AlbumsLoaded(result) => {
                self.loading_albums = false;
                sync::apply_albums(&mut self.store, result);
                Command::none()
            }
            Message::SessionChanged(session) => {
                if session == self.session {
                    return Command::none();
                }
                self.session = session;
                self.store.clear();
                self.selection.clear();
                self.workflow.dismiss();
                self.album_prompt = None;
                self.thumbnails.clear();
                self.full_images.clear();
                self.loading_photos = true;
                self.loading_albums = true;
                self.page = Page::Gallery;
                self.load_collection()
            }
            Message::SearchChanged(query) => {
                self.query = query;
                Command::none()
            }
            Message::PhotoCardClicked(photo) => {
                let double = self.activation.click(Target::Photo(photo));
                match self.page {
                    Page::Gallery => {
                        if double {
                            return self.handle(Message::Navigate(Route::Photo(photo)));
                        }
                        self.selection.select(photo);
                    }
                    // Album pages navigate on double activation; a single
                    // click is inert there.
                    Page::Album(_) => {
                        if double {
                            return self.handle(Message::Navigate(Route::Photo(photo)));
                        }
                    }
                    Page::Photo(_) => {}
                }
                Command::none()
            }
            Message::AlbumCardClicked(album) => {
                if self.activation.click(Target::Album(album)) {
                    return self.handle(Message::Navigate(Route::Album(album)));
                }
                Command::none()
            }
            Message::ToggleManageMenu => {
                self.workflow.toggle_menu();
                if !self.workflow.is_open() {
                    self.album_prompt = None;
                }
                Command::none()
            }
            Message::CreateAlbumRequested => {
                if self.workflow.state() == WorkflowState::MenuOpen {
                    self.album_prompt = Some(String::new());
                }
                Command::none()
            }
            Message::AlbumNameChanged(name) => {
                if let Some(draft) = &mut self.album_prompt {
                    *draft = name;
                }
                Command::none()
            }
            Message::CancelCreateAlbum => {
                self.album_prompt = None;
                Command::none()
            }
            Message::ConfirmCreateAlbum => {
                if self.create_in_flight {
                    return Command::none();
                }
                let Some(draft) = self.album_prompt.clone() else {
                    return Command::none();
                };
                let title = draft.trim().to_string();
                if title.is_empty() {
                    // Rejected locally; the prompt stays open, nothing goes
                    // on the wire.
                    return self.push_notice(Notice::error(self.text("gallery.albumNameRequired")));
                }
                self.album_prompt = None;
                self.create_in_flight = true;
                let gateway = self.gateway.clone();
                let owner = self.session.owner;
                Command::perform(
                    async move { gateway.create_album(owner, &title).await },
                    Message::AlbumCreated,
                )
            }
            Message::AlbumCreated(result) => {
                self.create_in_flight = false;
                match result {
                    Ok(album) => {
                        sync::apply_album_created(&mut self.store, album);
                        self.workflow.create_finished(true);
                        Command::none()
                    }
                    Err(err) => {
                        self.workflow.create_finished(false);
                        self.push_notice(Notice::error(
                            self.request_error_text(&err, "gallery.createAlbumError"),
                        ))
                    }
                }
            }
            Message::BeginAttach => {
                match self.workflow.begin_attach(self.selection.active().is_some()) {
                    Ok(()) => Command::none(),
                    Err(guard) => self.push_notice(Notice::error(self.guard_text(guard))),
                }
            }
            Message::AlbumPicked(choice) => {
                self.workflow.pick(choice.id);
                Command::none()
            }
            Message::ConfirmAttach => {
                if self.attach_in_flight {
                    return Command::none();
                }
                let album = match self.workflow.confirm_target(self.selection.active().is_some()) {
                    Ok(album) => album,
                    Err(guard) => {
                        return self.push_notice(Notice::error(self.guard_text(guard)));
                    }
                };
                let Some(photo) = self.selection.active() else {
                    return Command::none();
                };
                self.attach_in_flight = true;
                let gateway = self.gateway.clone();
                let owner = self.session.owner;
                Command::perform(
                    async move { gateway.attach_photo(owner, photo, album).await },
                    move |result| Message::PhotoAttached(photo, album, result),
                )
            }
            Message::PhotoAttached(photo, album, result) => {
                self.attach_in_flight = false;
                match result {
                    Ok(()) => {
                        sync::apply_attachment(&mut self.store, photo, album);
                        self.selection.clear();
                        self.workflow.attach_succeeded();
                        self.push_notice(Notice::info(self.text("gallery.attachedOk")))
                    }
                    Err(err) => {
                        self.workflow.attach_failed();
                        self.push_notice(Notice::error(
                            self.request_error_text(&err, "gallery.attachError"),
                        ))
                    }
                }
            }
            Message::Navigate(route) => match route {
                Route::Gallery { highlight } => {
                    self.page = Page::Gallery;
                    if let Some(photo) = highlight {
                        self.selection.select(photo);
                    }
                    Command::none()
                }
                Route::Album(id) => {
                    self.page = Page::Album(AlbumView::loading(id));
                    let gateway = self.gateway.clone();
                    Command::perform(async move { gateway.load_album(id).await }, move |result| {
                        Message::AlbumViewLoaded(id, result)
                    })
                }
                Route::Photo(id) => {
                    self.page = Page::Photo(PhotoView {
                        id,
                        photo: None,
                        loading: true,
                    });
                    let gateway = self.gateway.clone();
                    Command::perform(async move { gateway.load_photo(id).await }, move |result| {
                        Message::PhotoViewLoaded(id, result)
                    })
                }
            },
            Message::AlbumViewLoaded(id, result) => {
                let photos = {
                    let Page::Album(view) = &mut self.page else {
                        return Command::none();
                    };
                    if view.id != id {
                        return Command::none();
                    }
                    view.loading = false;
                    match result {
                        Ok(detail) => {
                            view.album = detail.album;
                            view.photos = detail.images;
                        }
                        Err(err) => {
                            tracing::warn!("failed to load album {id}: {err}");
                            view.album = None;
                            view.photos = Vec::new();
                        }
                    }
                    view.filtered = collection::filter_photos(&view.photos, &view.query);
                    view.photos.clone()
                };
                self.preload_thumbnails(&photos)
            }
            Message::AlbumSearchChanged(query) => {
                if let Page::Album(view) = &mut self.page {
                    view.query = query;
                    view.filtered = collection::filter_photos(&view.photos, &view.query);
                }
                Command::none()
            }
            Message::PhotoViewLoaded(id, result) => {
                let target = {
                    let Page::Photo(view) = &mut self.page else {
                        return Command::none();
                    };
                    if view.id != id {
                        return Command::none();
                    }
                    view.loading = false;
                    match result {
                        Ok(photo) => view.photo = photo,
                        Err(err) => {
                            tracing::warn!("failed to load photo {id}: {err}");
                            view.photo = None;
                        }
                    }
                    view.photo.clone()
                };
                match target {
                    Some(photo) => self.load_full_image(photo.id, photo.url),
                    None => Command::none(),
                }
            }
            Message::CopyPhotoLink(url) => {
                let notice = self.push_notice(Notice::info(self.text("image.linkCopied")));
                Command::batch(vec![iced::clipboard::write(url), notice])
            }
            Message::ThumbnailLoaded(photo, result) => {
                match result {
                    Ok(handle) => {
                        self.thumbnails.insert(photo, handle);
                    }
                    Err(err) => {
                        tracing::warn!("failed to load thumbnail for {photo}: {err}");
                    }
                }
                Command::none()
            }
            Message::FullImageLoaded(photo, result) => {
                match result {
                    Ok(handle) => {
                        self.full_images.insert(photo, handle);
                    }
                    Err(err) => {
                        tracing::warn!("failed to load image {photo}: {err}");
                    }
                }
                Command::none()
            }
            Message::PointerMoved(position) => {
                self.cursor = position;
                Command::none()
            }
            Message::PointerPressed => {
                // Resolve the menu's rendered extent before deciding whether
                // the press fell outside of it.
                if matches!(self.page, Page::Gallery) && self.workflow.is_open() {
                    return container::visible_bounds(manage_region_id()).map(Message::MenuRegion);
                }
                Command::none()
            }
            Message::MenuRegion(bounds) => {
                if !self.workflow.is_open() {
                    return Command::none();
                }
                let inside = bounds.map_or(false, |region| region.contains(self.cursor));
                if !inside {
                    self.workflow.dismiss();
                    self.album_prompt = None;
                }
                Command::none()
            }
            Message::EscapePressed => {
                if self.album_prompt.is_some() {
                    self.album_prompt = None;
                } else if self.workflow.is_open() {
                    self.workflow.dismiss();
                } else {
                    match &self.page {
                        Page::Album(_) => {
                            return self
                                .handle(Message::Navigate(Route::Gallery { highlight: None }));
                        }
                        Page::Photo(view) => {
                            let id = view.id;
                            return self.handle(Message::Navigate(Route::Gallery {
                                highlight: Some(id),
                            }));
                        }
                        Page::Gallery => {}
                    }
                }
                Command::none()
            }
            Message::DismissNotice(index) => {
                if index < self.notices.len() {
                    self.notices.remove(index);
                }
                Command::none()
            }
            Message::ClearNotices => {
                self.notices.clear();
                Command::none()
            }
        }
    }

    fn notice_banner(&self) -> Option<Element<'_, Message>> {
        if self.notices.is_empty() {
            return None;
        }
        let mut list = Column::new().spacing(5);
        for (i, notice) in self.notices.iter().enumerate() {
            let entry = row![
                text(&notice.text).size(16).width(Length::Fill),
                button(text("Dismiss"))
                    .style(style::button_primary())
                    .on_press(Message::DismissNotice(i)),
            ]
            .spacing(10)
            .align_items(Alignment::Center);
            list = list.push(
                container(entry)
                    .style(style::banner(notice.kind))
                    .padding(8)
                    .width(Length::Fill),
            );
        }
        Some(list.into())
    }

    fn manage_region(&self) -> Element<'_, Message> {
        let mut block = column![button(text(self.text("common.manage")))
            .style(style::button_primary())
            .on_press(Message::ToggleManageMenu)]
        .spacing(4);
        if self.workflow.is_open() {
            block = block.push(self.manage_menu());
        }
        container(block).id(manage_region_id()).into()
    }

    fn manage_menu(&self) -> Element<'_, Message> {
        let mut menu = column![
            button(text(self.text("gallery.createAlbum")))
                .style(style::menu_item())
                .on_press(Message::CreateAlbumRequested),
            button(text(self.text("gallery.addToAlbum")))
                .style(style::menu_item())
                .on_press(Message::BeginAttach),
        ]
        .spacing(4);

        if let Some(draft) = &self.album_prompt {
            let mut confirm = button(text(self.text("gallery.createAlbum")))
                .style(style::button_primary());
            if !self.create_in_flight {
                confirm = confirm.on_press(Message::ConfirmCreateAlbum);
            }
            menu = menu.push(
                column![
                    text_input(&self.text("gallery.promptAlbumName"), draft)
                        .on_input(Message::AlbumNameChanged)
                        .on_submit(Message::ConfirmCreateAlbum),
                    row![
                        confirm,
                        button(text("Cancel"))
                            .style(style::button_primary())
                            .on_press(Message::CancelCreateAlbum)
                    ]
                    .spacing(10),
                ]
                .spacing(8),
            );
        }

        if self.workflow.state() == WorkflowState::AttachPicking {
            let options: Vec<AlbumChoice> = self
                .store
                .albums()
                .iter()
                .map(|album| AlbumChoice {
                    id: album.id,
                    title: album
                        .title
                        .clone()
                        .unwrap_or_else(|| self.text("common.untitled")),
                })
                .collect();
            let chosen = self
                .workflow
                .chosen_album()
                .and_then(|id| options.iter().find(|o| o.id == id).cloned());
            let mut add = button(text(self.text("common.add"))).style(style::button_primary());
            if self.workflow.chosen_album().is_some() && !self.attach_in_flight {
                add = add.on_press(Message::ConfirmAttach);
            }
            menu = menu.push(
                column![
                    pick_list(options, chosen, Message::AlbumPicked)
                        .placeholder(self.text("gallery.pickAlbumPlaceholder")),
                    add,
                ]
                .spacing(8),
            );
        }

        container(menu).style(style::menu_panel()).padding(8).into()
    }

    fn album_grid_card(&self, album: &Album) -> Element<'_, Message> {
        let title = album
            .title
            .clone()
            .unwrap_or_else(|| self.text("common.untitled"));
        button(
            container(text(title).size(16))
                .width(Length::Fixed(CARD_SIDE))
                .height(Length::Fixed(CARD_SIDE))
                .center_x()
                .center_y(),
        )
        .style(style::album_card())
        .on_press(Message::AlbumCardClicked(album.id))
        .into()
    }

    fn photo_grid_card(&self, photo: &Photo, selectable: bool) -> Element<'_, Message> {
        let thumb: Element<Message> = if let Some(handle) = self.thumbnails.get(&photo.id) {
            image(handle.clone())
                .width(Length::Fixed(CARD_SIDE))
                .height(Length::Fixed(CARD_SIDE))
                .into()
        } else {
            container(text(self.text("common.loading")))
                .width(Length::Fixed(CARD_SIDE))
                .height(Length::Fixed(CARD_SIDE))
                .center_x()
                .center_y()
                .into()
        };
        let selected = selectable && self.selection.is_selected(photo.id);
        button(thumb)
            .style(style::photo_card(selected))
            .on_press(Message::PhotoCardClicked(photo.id))
            .into()
    }

    fn card_grid<'a>(&self, cards: Vec<Element<'a, Message>>) -> Element<'a, Message> {
        let mut rows = column![].spacing(10);
        let mut current = row![].spacing(10);
        let mut count = 0;
        for card in cards {
            current = current.push(card);
            count += 1;
            if count == GRID_COLUMNS {
                rows = rows.push(current);
                current = row![].spacing(10);
                count = 0;
            }
        }
        if count > 0 {
            rows = rows.push(current);
        }
        scrollable(rows).height(Length::Fill).into()
    }

    fn gallery_view(&self) -> Element<'_, Message> {
        let header = row![
            text(self.text("common.gallery")).size(24),
            text_input(&self.text("common.search"), &self.query)
                .on_input(Message::SearchChanged)
                .width(Length::Fixed(240.0)),
            self.manage_region(),
        ]
        .spacing(Palette::SPACING)
        .align_items(Alignment::Start);

        let entries = self.grid.entries();
        let body: Element<Message> = if self.loading_photos && self.loading_albums {
            text(self.text("common.loading")).size(16).into()
        } else if entries.is_empty() {
            text(self.text("gallery.empty")).size(16).into()
        } else {
            let cards = entries
                .iter()
                .map(|entry| match entry {
                    GridEntry::Album(album) => self.album_grid_card(album),
                    GridEntry::Photo(photo) => self.photo_grid_card(photo, true),
                })
                .collect();
            self.card_grid(cards)
        };

        column![header, body, text(self.text("gallery.hint")).size(14)]
            .spacing(Palette::SPACING)
            .into()
    }

    fn album_view(&self, view: &AlbumView) -> Element<'_, Message> {
        let title = view
            .album
            .as_ref()
            .and_then(|album| album.title.clone())
            .unwrap_or_else(|| self.text("album.untitled"));
        let header = row![
            button(text(self.text("common.back")))
                .style(style::button_primary())
                .on_press(Message::Navigate(Route::Gallery { highlight: None })),
            text(title).size(24),
            text_input(&self.text("common.search"), &view.query)
                .on_input(Message::AlbumSearchChanged)
                .width(Length::Fixed(240.0)),
        ]
        .spacing(Palette::SPACING)
        .align_items(Alignment::Center);

        let body: Element<Message> = if view.loading {
            text(self.text("common.loading")).size(16).into()
        } else if view.filtered.is_empty() {
            text(self.text("album.empty")).size(16).into()
        } else {
            let cards = view
                .filtered
                .iter()
                .map(|photo| self.photo_grid_card(photo, false))
                .collect();
            self.card_grid(cards)
        };

        column![header, body, text(self.text("album.hintOpen")).size(14)]
            .spacing(Palette::SPACING)
            .into()
    }

    fn photo_view(&self, view: &PhotoView) -> Element<'_, Message> {
        let back = button(text(self.text("common.back")))
            .style(style::button_primary())
            .on_press(Message::Navigate(Route::Gallery {
                highlight: Some(view.id),
            }));

        if view.loading {
            return column![back, text(self.text("common.loading")).size(16)]
                .spacing(Palette::SPACING)
                .into();
        }

        match &view.photo {
            Some(photo) => {
                let title = photo
                    .title
                    .clone()
                    .unwrap_or_else(|| self.text("common.untitled"));
                let full: Element<Message> = if let Some(handle) = self.full_images.get(&photo.id) {
                    image(handle.clone())
                        .width(Length::Fill)
                        .height(Length::Fill)
                        .into()
                } else {
                    container(text(self.text("common.loading")))
                        .width(Length::Fill)
                        .height(Length::Fill)
                        .center_x()
                        .center_y()
                        .into()
                };
                column![
                    row![
                        back,
                        text(title).size(24),
                        button(text(self.text("common.share")))
                            .style(style::button_primary())
                            .on_press(Message::CopyPhotoLink(photo.url.clone())),
                    ]
                    .spacing(Palette::SPACING)
                    .align_items(Alignment::Center),
                    full,
                ]
                .spacing(Palette::SPACING)
                .into()
            }
            None => column![back, text(self.text("image.missing")).size(16)]
                .spacing(Palette::SPACING)
                .into(),
        }
    }
}

impl Application for PicstashUI {
    type Executor = executor::Default;
    type Message = Message;
    type Theme = Theme;
    type Flags = Flags;

    fn new(flags: Flags) -> (Self, Command<Message>) {
        let gateway = Gateway::new(ApiClient::new(flags.api_base_url.clone()));
        let image_loader = ImageLoader::new(flags.cache_dir.clone());

        let mut selection = SelectionTracker::new();
        if let Some(photo) = flags.highlight {
            selection.select(photo);
        }

        let app = Self {
            session: flags.session,
            gateway,
            lang: flags.language,
            store: CollectionStore::new(),
            grid: GridFilter::new(),
            selection,
            workflow: AttachWorkflow::new(),
            activation: ActivationTracker::new(),
            page: Page::Gallery,
            query: String::new(),
            loading_photos: true,
            loading_albums: true,
            album_prompt: None,
            attach_in_flight: false,
            create_in_flight: false,
            notices: Vec::new(),
            thumbnails: HashMap::new(),
            full_images: HashMap::new(),
            image_loader,
            cursor: Point::ORIGIN,
            preload: flags.preload,
        };
        let load = app.load_collection();
        (app, load)
    }

    fn title(&self) -> String {
        String::from("picstash - Photo Hosting Client")
    }

    fn update(&mut self, message: Message) -> Command<Message> {
        let command = self.handle(message);
        // Re-derive the gallery grid; a no-op unless the store or the query
        // actually changed.
        self.grid.refresh(&self.store, &self.query);
        command
    }

    fn subscription(&self) -> Subscription<Message> {
        // The pointer listener backing the outside-interaction dismisser is
        // registered while the gallery page is mounted and dropped with it.
        match self.page {
            Page::Gallery => event::listen_with(gallery_events),
            _ => event::listen_with(escape_events),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        let mut base = column![].spacing(Palette::SPACING);
        if let Some(banner) = self.notice_banner() {
            base = base.push(banner);
        }
        let content = match &self.page {
            Page::Gallery => self.gallery_view(),
            Page::Album(view) => self.album_view(view),
            Page::Photo(view) => self.photo_view(view),
        };
        base = base.push(content);

        container(base)
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(20)
            .into()
    }
}

fn gallery_events(event: Event, _status: event::Status) -> Option<Message> {
    match event {
        Event::Mouse(mouse::Event::CursorMoved { position }) => {
            Some(Message::PointerMoved(position))
        }
        Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
            Some(Message::PointerPressed)
        }
        Event::Keyboard(keyboard::Event::KeyPressed {
            key: keyboard::Key::Named(key::Named::Escape),
            ..
        }) => Some(Message::EscapePressed),
        _ => None,
    }
}

fn escape_events(event: Event, _status: event::Status) -> Option<Message> {
    match event {
        Event::Keyboard(keyboard::Event::KeyPressed {
            key: keyboard::Key::Named(key::Named::Escape),
            ..
        }) => Some(Message::EscapePressed),
        _ => None,
    }
}
