use super::{BookmarkStatus, Generation};
use crate::entities::*;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadState {
    /// No place is open.
    #[default]
    Idle,
    Loading,
    Ready,
    Failed(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowMode {
    Viewing,
    Editing,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewRow {
    pub review: Review,
    pub mode: RowMode,
    /// Edit and delete controls are only offered to the author.
    pub can_modify: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookmarkView {
    pub bookmarked: bool,
    pub status: BookmarkStatus,
}

/// Render-ready snapshot of the panel, recomputed on demand.
///
/// Use [`PanelView::bookmark`] to display the bookmark state;
/// `place.bookmarked` is what the service reported at fetch time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelView {
    pub place_id: Option<PlaceId>,
    pub place: Option<Place>,
    pub rows: Vec<ReviewRow>,
    pub page_info: Option<PageInfo>,
    pub load: LoadState,
    pub bookmark: BookmarkView,
    pub draft: String,
    pub edit_draft: String,
    pub viewer: Option<Viewer>,
    pub generation: Generation,
}

impl PanelView {
    pub const fn is_open(&self) -> bool {
        self.place_id.is_some()
    }

    pub const fn is_loading(&self) -> bool {
        matches!(self.load, LoadState::Loading)
    }

    pub fn editing(&self) -> Option<&ReviewRow> {
        self.rows.iter().find(|r| r.mode == RowMode::Editing)
    }

    pub fn row(&self, id: ReviewId) -> Option<&ReviewRow> {
        self.rows.iter().find(|r| r.review.id == id)
    }
}
