use crate::{
    entities::{UserId, Viewer},
    gateways::{self, IdentityProvider},
    Result,
};

/// Resolves the viewer of this session once, so the panel never
/// needs to look up the identity again.
///
/// An unknown id keeps the viewer without a profile; the remote
/// service will reject its mutations if the id is really stale.
pub async fn resolve_viewer<I>(identity: &I, viewer_id: Option<UserId>) -> Result<Option<Viewer>>
where
    I: IdentityProvider + ?Sized,
{
    let Some(id) = viewer_id else {
        log::info!("No viewer identity configured: the panel is read-only");
        return Ok(None);
    };
    match identity.current_user(id).await {
        Ok(profile) => {
            log::debug!("Resolved viewer {id} as '{}'", profile.display_name);
            Ok(Some(Viewer {
                id,
                profile: Some(profile),
            }))
        }
        Err(gateways::Error::NotFound) => {
            log::warn!("Viewer {id} not found: continue without profile");
            Ok(Some(Viewer::new(id)))
        }
        Err(err) => Err(err.into()),
    }
}
