use api_client::AlbumId;

/// Where the manage/attach interaction currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WorkflowState {
    #[default]
    Closed,
    MenuOpen,
    AttachPicking,
}

/// Local preconditions that must hold before an attach operation may touch
/// the network.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkflowGuard {
    NoPhotoSelected,
    NoAlbumChosen,
}

/// The attach-to-album state machine.
///
/// All transitions are driven by explicit calls from the update loop, so the
/// logic stays independent of rendering. `chosen_album` is only observable
/// while picking; every other state reports `None`.
#[derive(Debug, Default)]
pub struct AttachWorkflow {
    state: WorkflowState,
    chosen_album: Option<AlbumId>,
}

impl AttachWorkflow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> WorkflowState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state != WorkflowState::Closed
    }

    pub fn chosen_album(&self) -> Option<AlbumId> {
        match self.state {
            WorkflowState::AttachPicking => self.chosen_album,
            _ => None,
        }
    }

    /// Toggle the manage menu. Opening never retains a prior album pick.
    pub fn toggle_menu(&mut self) {
        self.chosen_album = None;
        self.state = match self.state {
            WorkflowState::Closed => WorkflowState::MenuOpen,
            _ => WorkflowState::Closed,
        };
    }

    /// Enter the album picker. Requires an open menu and an active photo
    /// selection; without a selection the state is left untouched so the
    /// caller can show a notice instead.
    pub fn begin_attach(&mut self, has_selection: bool) -> Result<(), WorkflowGuard> {
        if self.state != WorkflowState::MenuOpen {
            return Ok(());
        }
        if !has_selection {
            return Err(WorkflowGuard::NoPhotoSelected);
        }
        self.state = WorkflowState::AttachPicking;
        self.chosen_album = None;
        Ok(())
    }

    pub fn pick(&mut self, album: AlbumId) {
        if self.state == WorkflowState::AttachPicking {
            self.chosen_album = Some(album);
        }
    }

    /// Re-check both preconditions right before the network call and hand
    /// back the target album.
    pub fn confirm_target(&self, has_selection: bool) -> Result<AlbumId, WorkflowGuard> {
        if !has_selection {
            return Err(WorkflowGuard::NoPhotoSelected);
        }
        match (self.state, self.chosen_album) {
            (WorkflowState::AttachPicking, Some(album)) => Ok(album),
            _ => Err(WorkflowGuard::NoAlbumChosen),
        }
    }

    pub fn attach_succeeded(&mut self) {
        self.state = WorkflowState::Closed;
        self.chosen_album = None;
    }

    /// A failed attach keeps the picker open and the pick intact, so the
    /// user can retry without choosing again.
    pub fn attach_failed(&mut self) {}

    /// Album creation finished. Success reopens the menu so the fresh album
    /// can be attached right away; failure closes the workflow.
    pub fn create_finished(&mut self, success: bool) {
        self.chosen_album = None;
        self.state = if success {
            WorkflowState::MenuOpen
        } else {
            WorkflowState::Closed
        };
    }

    /// An interaction outside the menu region: full reset.
    pub fn dismiss(&mut self) {
        self.state = WorkflowState::Closed;
        self.chosen_album = None;
    }
}
