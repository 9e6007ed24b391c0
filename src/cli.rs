use clap::Parser;
use pawmap_core::entities::{PlaceId, UserId};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pawmap", author, version, about = "Browse places, bookmarks and reviews of pets")]
pub struct Args {
    /// Configuration file [default: pawmap.toml]
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Act as this viewer (overrides the configuration)
    #[arg(long, value_name = "USER_ID")]
    pub viewer: Option<UserId>,

    /// Place to open on start
    #[arg(value_name = "PLACE_ID")]
    pub place: Option<PlaceId>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Args::command().debug_assert();
    }

    #[test]
    fn parse_arguments() {
        let args = Args::try_parse_from(["pawmap", "--viewer", "7", "42"]).unwrap();
        assert_eq!(args.viewer, Some(UserId::new(7)));
        assert_eq!(args.place, Some(PlaceId::new(42)));
        assert!(args.config.is_none());

        assert!(Args::try_parse_from(["pawmap", "park"]).is_err());
    }
}
