use crate::{id::*, time::Timestamp};

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Review {
    pub id            : ReviewId,
    pub place_id      : PlaceId,
    pub author_id     : UserId,
    pub author_name   : String,
    pub author_avatar : Option<String>,
    pub text          : String,
    pub created_at    : Timestamp,
}

impl Review {
    pub fn is_authored_by(&self, user: UserId) -> bool {
        self.author_id == user
    }
}
