use std::sync::Arc;

use clap::{Parser, Subcommand};
use dotenvy::dotenv;
use tokio::sync::mpsc;

use chat_simulator::config;
use chat_simulator::engine::{ChatHub, ChatService, EventForwarder, LogListener, Simulator};
use chat_simulator::session::SessionConfig;
use chat_simulator::ui::ChatApp;

#[derive(Parser)]
#[command(name = "chat_simulator", version, about = "In-process chat simulator")]
struct Cli {
    /// Path to JSON config file
    #[arg(long, default_value = config::DEFAULT_CONFIG_PATH, value_name = "FILE")]
    config: String,
    #[command(subcommand)]
    mode: Option<Mode>,
}

#[derive(Subcommand, Clone, Copy, PartialEq, Eq)]
enum Mode {
    /// Run the message simulation without a UI, logging deliveries
    Headless,
}

#[tokio::main]
async fn main() -> Result<(), eframe::Error> {
    dotenv().ok();
    env_logger::init();

    let cli = Cli::parse();
    let app_config = config::load_config(&cli.config);
    let session = SessionConfig::builder()
        .username(app_config.username.clone())
        .theme(app_config.theme.clone())
        .build();

    if cli.mode == Some(Mode::Headless) {
        run_headless().await;
        return Ok(());
    }

    run_full_client(session, app_config.timestamps).await
}

/// Runs only the generator against a logging listener, then exits.
async fn run_headless() {
    let hub = Arc::new(ChatHub::new());
    hub.attach(Box::new(LogListener));

    let (_stop_tx, stop_rx) = mpsc::channel(1);
    Simulator::new(hub, stop_rx).run().await;
}

async fn run_full_client(
    session: SessionConfig,
    timestamps: bool,
) -> Result<(), eframe::Error> {
    // UI -> chat service
    let (cmd_tx, cmd_rx) = mpsc::channel(100);
    // Hub -> UI
    let (event_tx, event_rx) = mpsc::unbounded_channel();

    let hub = Arc::new(ChatHub::new());
    hub.attach(Box::new(EventForwarder::new(event_tx)));

    let service = ChatService::new(Arc::clone(&hub), session.clone(), cmd_rx);
    tokio::spawn(service.run());

    let (stop_tx, stop_rx) = mpsc::channel(1);
    let simulator = Simulator::new(Arc::clone(&hub), stop_rx);
    tokio::spawn(simulator.run());

    let options = eframe::NativeOptions::default();
    let mut event_rx = Some(event_rx);

    let result = eframe::run_native(
        "Chat Simulator",
        options,
        Box::new(move |cc| {
            let event_receiver = event_rx
                .take()
                .expect("ChatApp should only be initialized once");

            log::info!("Session started for {}", session.username());

            Ok(Box::new(ChatApp::new(
                cc,
                cmd_tx.clone(),
                event_receiver,
                session.clone(),
                timestamps,
            )))
        }),
    );

    // Window closed; cancel the generator if it is still waiting.
    let _ = stop_tx.try_send(());
    result
}
