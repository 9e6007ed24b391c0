//! The interactive terminal host of the place panel.

use crate::{
    adapters::{Console, RemoteIdentity, RemotePlaces, TokioTimer},
    config::Config,
    ui::{self, Command, HELP},
};
use anyhow::Result;
use pawmap_core::{
    entities::{PlaceId, Viewer},
    panel::{Gateways, PlacePanel},
    session, Error,
};
use pawmap_frontend_api::Endpoint;
use std::rc::Rc;
use tokio::io::{BufReader, Stdin};

type Terminal = Console<BufReader<Stdin>>;
type Panel = PlacePanel<RemotePlaces, Terminal, TokioTimer>;

/// Runs the command loop until `quit` or the end of input.
///
/// Must be called within a [`tokio::task::LocalSet`].
pub async fn run(cfg: Config, place: Option<PlaceId>) -> Result<()> {
    let endpoint = Endpoint::new(&cfg.api.base_url, cfg.api.fetch_timeout)?
        .with_token(cfg.api.token.clone());
    log::info!("Using place service at {}", endpoint.url());

    let viewer = resolve_viewer(&cfg, endpoint.clone()).await?;
    let console = Console::stdin();
    let gateways = Gateways {
        places: Rc::new(RemotePlaces::new(endpoint)),
        surface: Rc::new(console.clone()),
        timer: Rc::new(TokioTimer),
    };
    let panel = Rc::new(PlacePanel::new(gateways, viewer, cfg.panel_options()));

    println!("{HELP}\n");
    if let Some(place) = place {
        report(panel.open(place).await);
    }
    loop {
        println!("{}", ui::render(&panel.view()));
        let Some(line) = console.read_line("> ").await? else {
            break;
        };
        if line.trim().is_empty() {
            continue;
        }
        let cmd = match line.parse::<Command>() {
            Ok(cmd) => cmd,
            Err(err) => {
                println!("{err}");
                continue;
            }
        };
        if cmd == Command::Quit {
            break;
        }
        dispatch(&panel, cmd).await;
    }
    panel.close();
    Ok(())
}

async fn resolve_viewer(cfg: &Config, endpoint: Endpoint) -> Result<Option<Viewer>> {
    let identity = RemoteIdentity::new(endpoint);
    match session::resolve_viewer(&identity, cfg.session.viewer_id).await {
        Ok(viewer) => Ok(viewer),
        Err(Error::Gateway(err)) => {
            log::warn!("Unable to resolve viewer profile: {err}");
            Ok(cfg.session.viewer_id.map(Viewer::new))
        }
        Err(err) => Err(err.into()),
    }
}

async fn dispatch(panel: &Rc<Panel>, cmd: Command) {
    match cmd {
        Command::Open(place) => report(panel.open(place).await),
        Command::Close => panel.close(),
        Command::Refresh => report(panel.refresh().await),
        Command::Retry => report(panel.retry().await),
        Command::Page(page) => report(panel.show_page(page).await),
        Command::NextPage | Command::PreviousPage => {
            let Some(info) = panel.view().page_info else {
                println!("Nothing to page through");
                return;
            };
            let page = if cmd == Command::NextPage {
                info.has_next().then(|| info.page + 1)
            } else {
                info.has_previous().then(|| info.page - 1)
            };
            match page {
                Some(page) => report(panel.show_page(page).await),
                None => println!("No more pages"),
            }
        }
        Command::Bookmark => {
            // The flag flips immediately, the request completes
            // in the background.
            let panel = Rc::clone(panel);
            tokio::task::spawn_local(async move {
                report(panel.toggle_bookmark().await);
            });
            tokio::task::yield_now().await;
        }
        Command::Post(text) => {
            panel.set_draft(&text);
            report(panel.submit_new(&text).await);
        }
        Command::Edit(review) => {
            if let Err(err) = panel.begin_edit(review) {
                log::debug!("Unable to edit review {review}: {err}");
                return;
            }
            if let Some(row) = panel.view().row(review) {
                panel.set_edit_draft(&row.review.text);
            }
        }
        Command::Save(text) => {
            let view = panel.view();
            let Some(review) = view.editing().map(|row| row.review.id) else {
                println!("Nothing is being edited. Try 'edit <review-id>'.");
                return;
            };
            let text = text.unwrap_or(view.edit_draft);
            panel.set_edit_draft(&text);
            report(panel.confirm_edit(review, &text).await);
        }
        Command::Cancel => panel.cancel_edit(),
        Command::Delete(review) => report(panel.delete_review(review).await),
        Command::Help => println!("{HELP}"),
        Command::Quit => {}
    }
}

// The panel has already notified the viewer about failures.
fn report<T: std::fmt::Debug>(result: pawmap_core::Result<T>) {
    match result {
        Ok(outcome) => log::debug!("Outcome: {outcome:?}"),
        Err(err) => log::debug!("Command failed: {err}"),
    }
}
