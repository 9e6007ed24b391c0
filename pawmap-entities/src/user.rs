use crate::id::UserId;

/// Public profile of a user as shown next to the review form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub display_name: String,
    pub avatar: Option<String>,
}

/// The identity looking at the panel, resolved once per session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Viewer {
    pub id: UserId,
    pub profile: Option<Profile>,
}

impl Viewer {
    pub const fn new(id: UserId) -> Self {
        Self { id, profile: None }
    }

    pub fn display_name(&self) -> Option<&str> {
        self.profile.as_ref().map(|p| p.display_name.as_str())
    }
}
