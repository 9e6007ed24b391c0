use crate::{id::*, page::PageInfo, review::Review};

/// A point of interest with bookmarkable status.
///
/// Operating hours, phone and homepage are optional:
/// `None` means the place did not provide them.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Place {
    pub id            : PlaceId,
    pub name          : String,
    pub category      : String,
    pub address       : String,
    pub opening_hours : Option<String>,
    pub phone         : Option<String>,
    pub homepage      : Option<String>,
    pub cover_image   : String,
    pub bookmarked    : bool,
}

/// Everything the detail panel displays about a place,
/// fetched as a single snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceDetail {
    pub place: Place,
    pub reviews: Vec<Review>,
    pub page_info: PageInfo,
}

impl PlaceDetail {
    pub fn review(&self, id: ReviewId) -> Option<&Review> {
        self.reviews.iter().find(|r| r.id == id)
    }

    pub fn contains_review(&self, id: ReviewId) -> bool {
        self.review(id).is_some()
    }
}
