//! The place detail panel.
//!
//! [`PlacePanel`] owns the load lifecycle. Every reload is requested
//! by advancing the [`Generation`] and a response is only applied if
//! no newer generation was requested while it was in flight.
//! Review mutations never patch the local list, they refetch.

use std::{cell::RefCell, future::Future, rc::Rc, time::Duration};

use crate::{
    entities::*,
    gateways::{ConfirmationSurface, NoticeKind, PlaceService, Timer},
    Error, Result,
};

mod bookmark;
mod generation;
mod reviews;
mod view;


pub use self::{bookmark::*, generation::Generation, reviews::*, view::*};

const LOAD_FAILED: &str = "The place could not be loaded. Please try again.";
const BOOKMARK_FAILED: &str = "The bookmark could not be saved.";
const LOGIN_REQUIRED: &str = "Please log in first.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelOptions {
    /// Minimum time the loading state is shown before fetching.
    pub min_loading_duration: Duration,
    pub page_size: u32,
    pub bookmark_failure: BookmarkFailurePolicy,
}

impl Default for PanelOptions {
    fn default() -> Self {
        Self {
            min_loading_duration: Duration::ZERO,
            page_size: DEFAULT_PAGE_SIZE,
            bookmark_failure: BookmarkFailurePolicy::default(),
        }
    }
}

/// The collaborators of a panel.
#[derive(Debug)]
pub struct Gateways<S: ?Sized, N: ?Sized, T: ?Sized> {
    pub places: Rc<S>,
    pub surface: Rc<N>,
    pub timer: Rc<T>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    Applied,
    /// A newer generation was requested meanwhile.
    Discarded,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    Completed,
    /// The viewer did not confirm.
    Declined,
}

#[derive(Debug)]
struct PanelState {
    place_id: Option<PlaceId>,
    page: PageRequest,
    generation: Generation,
    load: LoadState,
    detail: Option<PlaceDetail>,
    reviews: ReviewList,
    bookmark: BookmarkToggle,
}

impl PanelState {
    fn new(options: &PanelOptions) -> Self {
        Self {
            place_id: None,
            page: PageRequest::first(options.page_size),
            generation: Generation::default(),
            load: LoadState::Idle,
            detail: None,
            reviews: ReviewList::default(),
            bookmark: BookmarkToggle::new(options.bookmark_failure),
        }
    }

    fn advance(&mut self) -> Generation {
        self.generation = self.generation.next();
        self.generation
    }

    fn reset(&mut self, place_id: Option<PlaceId>) {
        self.place_id = place_id;
        self.page = PageRequest::first(self.page.size);
        self.load = LoadState::Idle;
        self.detail = None;
        self.reviews = ReviewList::default();
        self.bookmark.reset();
    }

    fn apply(&mut self, detail: PlaceDetail) {
        self.bookmark.seed(detail.place.bookmarked);
        if let Some(selected) = self.reviews.selection() {
            if !detail.contains_review(selected) {
                log::debug!("Review {selected} is gone: cancel editing");
                self.reviews.clear_selection();
            }
        }
        self.detail = Some(detail);
        self.load = LoadState::Ready;
    }
}

#[derive(Debug)]
pub struct PlacePanel<S: ?Sized, N: ?Sized, T: ?Sized> {
    places: Rc<S>,
    surface: Rc<N>,
    timer: Rc<T>,
    viewer: Option<Viewer>,
    options: PanelOptions,
    state: RefCell<PanelState>,
}

impl<S, N, T> PlacePanel<S, N, T>
where
    S: PlaceService + ?Sized,
    N: ConfirmationSurface + ?Sized,
    T: Timer + ?Sized,
{
    pub fn new(gateways: Gateways<S, N, T>, viewer: Option<Viewer>, options: PanelOptions) -> Self {
        let Gateways {
            places,
            surface,
            timer,
        } = gateways;
        let state = RefCell::new(PanelState::new(&options));
        Self {
            places,
            surface,
            timer,
            viewer,
            options,
            state,
        }
    }

    pub const fn viewer(&self) -> Option<&Viewer> {
        self.viewer.as_ref()
    }

    pub fn generation(&self) -> Generation {
        self.state.borrow().generation
    }

    pub fn is_open(&self) -> bool {
        self.state.borrow().place_id.is_some()
    }

    /// Show the panel for a place and load it.
    ///
    /// The panel is reset synchronously, the returned future
    /// performs the load.
    pub fn open(&self, place_id: PlaceId) -> impl Future<Output = Result<LoadOutcome>> + '_ {
        let generation = {
            let mut state = self.state.borrow_mut();
            state.reset(Some(place_id));
            state.advance()
        };
        log::debug!("Open place {place_id}");
        self.load(generation)
    }

    /// Hide the panel. Loads that are still in flight will be discarded.
    pub fn close(&self) {
        let mut state = self.state.borrow_mut();
        if let Some(place_id) = state.place_id {
            log::debug!("Close place {place_id}");
        }
        state.reset(None);
        state.advance();
    }

    /// Request a full reload of place and reviews.
    ///
    /// The generation is advanced synchronously, so only the
    /// most recent of several concurrent refreshes is applied.
    pub fn refresh(&self) -> impl Future<Output = Result<LoadOutcome>> + '_ {
        let generation = {
            let mut state = self.state.borrow_mut();
            state.place_id.is_some().then(|| state.advance())
        };
        async move {
            match generation {
                Some(generation) => self.load(generation).await,
                None => Err(Error::NotOpen),
            }
        }
    }

    /// Manual retry after a failed load.
    pub fn retry(&self) -> impl Future<Output = Result<LoadOutcome>> + '_ {
        self.refresh()
    }

    /// Switch to another page of reviews.
    pub fn show_page(&self, page: u32) -> impl Future<Output = Result<LoadOutcome>> + '_ {
        {
            let mut state = self.state.borrow_mut();
            state.page = state.page.with_page(page);
        }
        self.refresh()
    }

    async fn load(&self, generation: Generation) -> Result<LoadOutcome> {
        let (place_id, page) = {
            let mut state = self.state.borrow_mut();
            // A future polled after a newer load finished must not
            // touch the load state.
            if state.generation != generation {
                log::debug!("Skip outdated load of generation {generation}");
                return Ok(LoadOutcome::Discarded);
            }
            let place_id = state.place_id.ok_or(Error::NotOpen)?;
            state.load = LoadState::Loading;
            (place_id, state.page)
        };
        let settle = self.options.min_loading_duration;
        if !settle.is_zero() {
            self.timer.sleep(settle).await;
        }
        if self.is_superseded(generation) {
            log::debug!("Skip loading place {place_id}: generation {generation} is outdated");
            return Ok(LoadOutcome::Discarded);
        }
        log::debug!(
            "Loading place {place_id} (generation {generation}, page {})",
            page.page
        );
        let result = self.places.fetch_place_detail(place_id, page).await;
        if self.is_superseded(generation) {
            log::debug!("Discard response for place {place_id}: generation {generation} is outdated");
            return Ok(LoadOutcome::Discarded);
        }
        match result {
            Ok(detail) => {
                log::debug!(
                    "Loaded place {place_id} with {} review(s)",
                    detail.reviews.len()
                );
                self.state.borrow_mut().apply(detail);
                Ok(LoadOutcome::Applied)
            }
            Err(err) => {
                log::warn!("Unable to load place {place_id}: {err}");
                self.state.borrow_mut().load = LoadState::Failed(err.to_string());
                self.notify(NoticeKind::Error, LOAD_FAILED);
                Err(err.into())
            }
        }
    }

    fn is_superseded(&self, generation: Generation) -> bool {
        self.state.borrow().generation != generation
    }

    /// Flip the bookmark flag and tell the service.
    ///
    /// The flag changes before the returned future is polled and
    /// no reload is triggered.
    pub fn toggle_bookmark(&self) -> impl Future<Output = Result<bool>> + '_ {
        let begun = self.begin_toggle();
        async move {
            let (viewer, place_id, toggle) = begun?;
            let result = if toggle.bookmarked {
                log::info!("Bookmark place {place_id}");
                self.places.set_bookmark(viewer, place_id).await
            } else {
                log::info!("Remove bookmark of place {place_id}");
                self.places.clear_bookmark(viewer, place_id).await
            };
            match result {
                Ok(()) => {
                    self.state.borrow_mut().bookmark.succeed(toggle);
                    Ok(toggle.bookmarked)
                }
                Err(err) => {
                    let rolled_back = self.state.borrow_mut().bookmark.fail(toggle);
                    log::warn!(
                        "Unable to update bookmark of place {place_id} (rolled back: {rolled_back}): {err}"
                    );
                    self.notify(NoticeKind::Error, BOOKMARK_FAILED);
                    Err(err.into())
                }
            }
        }
    }

    fn begin_toggle(&self) -> Result<(UserId, PlaceId, PendingToggle)> {
        let viewer = self.require_viewer()?;
        let mut state = self.state.borrow_mut();
        let place_id = state.place_id.ok_or(Error::NotOpen)?;
        let toggle = state.bookmark.begin();
        Ok((viewer, place_id, toggle))
    }

    fn require_viewer(&self) -> Result<UserId> {
        match &self.viewer {
            Some(viewer) => Ok(viewer.id),
            None => {
                log::warn!("Refused mutation without viewer identity");
                self.notify(NoticeKind::Warning, LOGIN_REQUIRED);
                Err(Error::Unauthorized)
            }
        }
    }

    fn notify(&self, kind: NoticeKind, message: &str) {
        self.surface.notify(kind, message);
    }

    pub fn view(&self) -> PanelView {
        let state = self.state.borrow();
        let viewer_id = self.viewer.as_ref().map(|v| v.id);
        let selection = state.reviews.selection();
        let rows = state
            .detail
            .iter()
            .flat_map(|d| d.reviews.iter())
            .map(|review| ReviewRow {
                mode: if Some(review.id) == selection {
                    RowMode::Editing
                } else {
                    RowMode::Viewing
                },
                can_modify: viewer_id.is_some_and(|id| review.is_authored_by(id)),
                review: review.clone(),
            })
            .collect();
        PanelView {
            place_id: state.place_id,
            place: state.detail.as_ref().map(|d| d.place.clone()),
            rows,
            page_info: state.detail.as_ref().map(|d| d.page_info),
            load: state.load.clone(),
            bookmark: BookmarkView {
                bookmarked: state.bookmark.is_bookmarked(),
                status: state.bookmark.status(),
            },
            draft: state.reviews.draft().to_owned(),
            edit_draft: state.reviews.edit_draft().to_owned(),
            viewer: self.viewer.clone(),
            generation: state.generation,
        }
    }
}
