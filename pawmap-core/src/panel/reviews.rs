use super::{ActionOutcome, PlacePanel};
use crate::{
    entities::*,
    gateways::{ConfirmationSurface, NoticeKind, PlaceService, Timer},
    util::validate,
    Error, Result,
};

const EMPTY_TEXT: &str = "Please enter some text.";
const REVIEW_POSTED: &str = "Your review has been posted.";
const POST_FAILED: &str = "Your review could not be posted.";
const CONFIRM_UPDATE: &str = "Do you really want to change this review?";
const REVIEW_UPDATED: &str = "Your review has been changed.";
const UPDATE_FAILED: &str = "Your review could not be changed.";
const CONFIRM_DELETE: &str = "Do you really want to delete this review?";
const REVIEW_DELETED: &str = "Your review has been deleted.";
const DELETE_FAILED: &str = "Your review could not be deleted.";
const NOT_THE_AUTHOR: &str = "Only the author can change this review.";

/// Transient, viewer-side state of the review list: the single
/// review that is being edited and the texts typed so far.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReviewList {
    selection: Option<ReviewId>,
    draft: String,
    edit_draft: String,
}

impl ReviewList {
    pub const fn selection(&self) -> Option<ReviewId> {
        self.selection
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn edit_draft(&self) -> &str {
        &self.edit_draft
    }

    /// Returns `false` if the review was already selected.
    pub fn select(&mut self, id: ReviewId) -> bool {
        if self.selection == Some(id) {
            return false;
        }
        self.selection = Some(id);
        self.edit_draft.clear();
        true
    }

    pub fn clear_selection(&mut self) {
        self.selection = None;
        self.edit_draft.clear();
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    pub fn set_edit_draft(&mut self, text: impl Into<String>) {
        self.edit_draft = text.into();
    }

    pub fn clear_draft(&mut self) {
        self.draft.clear();
    }
}

impl<S, N, T> PlacePanel<S, N, T>
where
    S: PlaceService + ?Sized,
    N: ConfirmationSurface + ?Sized,
    T: Timer + ?Sized,
{
    pub fn set_draft(&self, text: &str) {
        self.state.borrow_mut().reviews.set_draft(text);
    }

    pub fn set_edit_draft(&self, text: &str) {
        self.state.borrow_mut().reviews.set_edit_draft(text);
    }

    /// Post a new review for the open place.
    pub async fn submit_new(&self, text: &str) -> Result<ActionOutcome> {
        let viewer = self.require_viewer()?;
        let place_id = self.state.borrow().place_id.ok_or(Error::NotOpen)?;
        let text = self.validate_text(text)?;
        log::info!("Viewer {viewer} posts a review for place {place_id}");
        if let Err(err) = self.places.create_review(place_id, text).await {
            log::warn!("Unable to post review for place {place_id}: {err}");
            self.notify(NoticeKind::Error, POST_FAILED);
            return Err(err.into());
        }
        self.notify(NoticeKind::Success, REVIEW_POSTED);
        self.state.borrow_mut().reviews.clear_draft();
        self.refresh_after_mutation().await;
        Ok(ActionOutcome::Completed)
    }

    /// Render the review as an inline editor.
    ///
    /// Any other selection and its draft are discarded.
    pub fn begin_edit(&self, review_id: ReviewId) -> Result<()> {
        self.check_modifiable(review_id)?;
        if self.state.borrow_mut().reviews.select(review_id) {
            log::debug!("Begin editing review {review_id}");
        }
        Ok(())
    }

    pub fn cancel_edit(&self) {
        let mut state = self.state.borrow_mut();
        if let Some(review_id) = state.reviews.selection() {
            log::debug!("Cancel editing review {review_id}");
        }
        state.reviews.clear_selection();
    }

    /// Replace the text of the review that is being edited.
    ///
    /// Nothing is sent unless the viewer confirms. Declining keeps
    /// the editor open.
    pub async fn confirm_edit(&self, review_id: ReviewId, text: &str) -> Result<ActionOutcome> {
        self.check_modifiable(review_id)?;
        if self.state.borrow().reviews.selection() != Some(review_id) {
            return Err(Error::NotEditing);
        }
        let text = self.validate_text(text)?;
        if !self.surface.confirm(CONFIRM_UPDATE).await {
            log::debug!("Changing review {review_id} declined");
            return Ok(ActionOutcome::Declined);
        }
        // The panel may have changed while the viewer was asked.
        self.check_modifiable(review_id)?;
        if self.state.borrow().reviews.selection() != Some(review_id) {
            log::debug!("Review {review_id} is no longer being edited");
            return Err(Error::NotEditing);
        }
        log::info!("Change review {review_id}");
        if let Err(err) = self.places.update_review(review_id, text).await {
            log::warn!("Unable to change review {review_id}: {err}");
            self.notify(NoticeKind::Error, UPDATE_FAILED);
            return Err(err.into());
        }
        self.notify(NoticeKind::Success, REVIEW_UPDATED);
        {
            let mut state = self.state.borrow_mut();
            if state.reviews.selection() == Some(review_id) {
                state.reviews.clear_selection();
            }
        }
        self.refresh_after_mutation().await;
        Ok(ActionOutcome::Completed)
    }

    /// Delete a review of the viewer after confirmation.
    pub async fn delete_review(&self, review_id: ReviewId) -> Result<ActionOutcome> {
        self.check_modifiable(review_id)?;
        if !self.surface.confirm(CONFIRM_DELETE).await {
            log::debug!("Deleting review {review_id} declined");
            return Ok(ActionOutcome::Declined);
        }
        self.check_modifiable(review_id)?;
        log::info!("Delete review {review_id}");
        if let Err(err) = self.places.delete_review(review_id).await {
            log::warn!("Unable to delete review {review_id}: {err}");
            self.notify(NoticeKind::Error, DELETE_FAILED);
            return Err(err.into());
        }
        self.notify(NoticeKind::Success, REVIEW_DELETED);
        self.refresh_after_mutation().await;
        Ok(ActionOutcome::Completed)
    }

    fn validate_text<'t>(&self, text: &'t str) -> Result<&'t str> {
        validate::review_text(text).inspect_err(|_| {
            self.notify(NoticeKind::Warning, EMPTY_TEXT);
        })
    }

    // Edit rights are derived from the current snapshot, never
    // from what the caller claims.
    fn check_modifiable(&self, review_id: ReviewId) -> Result<()> {
        let viewer = self.require_viewer()?;
        let authored = {
            let state = self.state.borrow();
            let detail = state.detail.as_ref().ok_or(Error::NotOpen)?;
            detail
                .review(review_id)
                .ok_or(Error::ReviewNotFound)?
                .is_authored_by(viewer)
        };
        if !authored {
            log::warn!("Viewer {viewer} is not the author of review {review_id}");
            self.notify(NoticeKind::Warning, NOT_THE_AUTHOR);
            return Err(Error::Forbidden);
        }
        Ok(())
    }

    async fn refresh_after_mutation(&self) {
        // Load failures have already been reported by `load`.
        if let Err(err) = self.refresh().await {
            log::debug!("Reload after mutation failed: {err}");
        }
    }
}
