use api_client::PhotoId;

/// Tracks the single "active" photo in the gallery. Selecting a new photo
/// silently replaces any prior selection; at most one photo is ever active.
#[derive(Debug, Default)]
pub struct SelectionTracker {
    active: Option<PhotoId>,
}

impl SelectionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select(&mut self, photo: PhotoId) {
        self.active = Some(photo);
    }

    pub fn clear(&mut self) {
        self.active = None;
    }

    pub fn active(&self) -> Option<PhotoId> {
        self.active
    }

    pub fn is_selected(&self, photo: PhotoId) -> bool {
        self.active == Some(photo)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection_is_exclusive() {
        let mut selection = SelectionTracker::new();
        selection.select(1);
        selection.select(2);
        assert!(selection.is_selected(2));
        assert!(!selection.is_selected(1));
        assert_eq!(selection.active(), Some(2));
    }

    #[test]
    fn clear_resets_to_none() {
        let mut selection = SelectionTracker::new();
        selection.select(1);
        selection.clear();
        assert_eq!(selection.active(), None);
    }
}
