use clap::Parser;

mod adapters;
mod app;
mod cli;
mod config;
mod ui;

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let args = cli::Args::parse();
    let mut cfg = config::Config::try_load_from_file_or_default(args.config.as_ref())?;
    if let Some(viewer) = args.viewer {
        cfg.session.viewer_id = Some(viewer);
    }

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    let local = tokio::task::LocalSet::new();
    local.block_on(&runtime, app::run(cfg, args.place))
}
