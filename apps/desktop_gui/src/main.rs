use anyhow::Context;
use clap::Parser;
use crossbeam_channel::bounded;
use url::Url;

mod backend_bridge;
mod controller;
mod ui;

use backend_bridge::commands::BackendCommand;
use controller::events::UiEvent;
use ui::app::ScreeningApp;

#[derive(Debug, Parser)]
#[command(name = "bioscreen", about = "Biomarker consumption screening client")]
struct Args {
    /// Base URL of the prediction service.
    #[arg(long, env = "BIOSCREEN_API_URL", default_value = "http://127.0.0.1:8000")]
    api_url: String,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();

    let args = Args::parse();
    let api_url: Url = args
        .api_url
        .parse()
        .with_context(|| format!("invalid prediction service URL '{}'", args.api_url))?;

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(16);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(64);
    backend_bridge::runtime::launch(api_url, cmd_rx, ui_tx);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("BioScreen")
            .with_inner_size([520.0, 640.0])
            .with_min_inner_size([420.0, 540.0]),
        ..Default::default()
    };
    eframe::run_native(
        "BioScreen",
        options,
        Box::new(|_cc| Ok(Box::new(ScreeningApp::new(cmd_tx, ui_rx)))),
    )
    .map_err(|err| anyhow::anyhow!("failed to run desktop app: {err}"))
}
