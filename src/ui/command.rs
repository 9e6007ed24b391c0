use pawmap_core::entities::{IdParseError, PlaceId, ReviewId};
use std::str::FromStr;
use thiserror::Error;

pub const HELP: &str = "\
Commands:
  open <place-id>     show a place
  close               close the panel
  refresh | retry     reload the current place
  page <n> | next | prev
  bookmark            toggle the bookmark
  post <text>         write a review
  edit <review-id>    edit one of your reviews
  save [<text>]       save the edited review
  cancel              stop editing
  delete <review-id>  delete one of your reviews
  help | quit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Open(PlaceId),
    Close,
    Refresh,
    Retry,
    Page(u32),
    NextPage,
    PreviousPage,
    Bookmark,
    Post(String),
    Edit(ReviewId),
    /// Without text the current edit draft is saved.
    Save(Option<String>),
    Cancel,
    Delete(ReviewId),
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("Unknown command '{0}', type 'help'")]
    Unknown(String),
    #[error("Missing argument: {0}")]
    MissingArgument(&'static str),
    #[error(transparent)]
    InvalidId(#[from] IdParseError),
    #[error("Invalid page '{0}'")]
    InvalidPage(String),
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (name, arg) = match line.split_once(char::is_whitespace) {
            Some((name, arg)) => (name, arg.trim()),
            None => (line, ""),
        };
        let required = |what| {
            if arg.is_empty() {
                Err(CommandError::MissingArgument(what))
            } else {
                Ok(arg)
            }
        };
        let cmd = match name.to_lowercase().as_str() {
            "open" => Self::Open(required("place id")?.parse()?),
            "close" => Self::Close,
            "refresh" | "reload" => Self::Refresh,
            "retry" => Self::Retry,
            "page" => {
                let page = required("page number")?;
                Self::Page(
                    page.parse()
                        .map_err(|_| CommandError::InvalidPage(page.to_owned()))?,
                )
            }
            "next" => Self::NextPage,
            "prev" | "previous" => Self::PreviousPage,
            "bookmark" | "bm" => Self::Bookmark,
            "post" => Self::Post(arg.to_owned()),
            "edit" => Self::Edit(required("review id")?.parse()?),
            "save" => Self::Save(Some(arg).filter(|a| !a.is_empty()).map(ToOwned::to_owned)),
            "cancel" => Self::Cancel,
            "delete" | "rm" => Self::Delete(required("review id")?.parse()?),
            "help" | "?" => Self::Help,
            "quit" | "exit" | "q" => Self::Quit,
            _ => return Err(CommandError::Unknown(name.to_owned())),
        };
        Ok(cmd)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_commands_without_arguments() {
        assert_eq!("close".parse::<Command>(), Ok(Command::Close));
        assert_eq!(" Refresh ".parse::<Command>(), Ok(Command::Refresh));
        assert_eq!("bm".parse::<Command>(), Ok(Command::Bookmark));
        assert_eq!("next".parse::<Command>(), Ok(Command::NextPage));
        assert_eq!("q".parse::<Command>(), Ok(Command::Quit));
    }

    #[test]
    fn parse_ids() {
        assert_eq!("open 12".parse::<Command>(), Ok(Command::Open(PlaceId::new(12))));
        assert_eq!("edit  3".parse::<Command>(), Ok(Command::Edit(ReviewId::new(3))));
        assert_eq!("rm 4".parse::<Command>(), Ok(Command::Delete(ReviewId::new(4))));
        assert!(matches!(
            "open park".parse::<Command>(),
            Err(CommandError::InvalidId(_))
        ));
        assert_eq!(
            "delete".parse::<Command>(),
            Err(CommandError::MissingArgument("review id"))
        );
    }

    #[test]
    fn keep_review_text_verbatim() {
        assert_eq!(
            "post Great  park, lots of shade ".parse::<Command>(),
            Ok(Command::Post("Great  park, lots of shade".into()))
        );
        assert_eq!("post".parse::<Command>(), Ok(Command::Post(String::new())));
        assert_eq!("save".parse::<Command>(), Ok(Command::Save(None)));
        assert_eq!("save ok".parse::<Command>(), Ok(Command::Save(Some("ok".into()))));
    }

    #[test]
    fn parse_page() {
        assert_eq!("page 2".parse::<Command>(), Ok(Command::Page(2)));
        assert_eq!(
            "page two".parse::<Command>(),
            Err(CommandError::InvalidPage("two".into()))
        );
    }

    #[test]
    fn reject_unknown_commands() {
        assert_eq!(
            "jump".parse::<Command>(),
            Err(CommandError::Unknown("jump".into()))
        );
    }
}
