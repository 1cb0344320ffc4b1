use crossterm::event;
use ratatui::{backend::Backend, Terminal};
use std::time::{Duration, Instant};
use tokio::sync::mpsc;
use webhook_chat::{
    api::WebhookClient,
    app::App,
    config::{get_config, initialize_config},
    constants::{POLL_RATE_MS, TICK_RATE_MS},
    errors::ChatResult,
    key_handlers::{handle_event, Event},
    logging::init_logging,
    reply::Reply,
    terminal::{restore_terminal, setup_terminal},
    ui,
};

#[tokio::main]
async fn main() -> ChatResult<()> {
    initialize_config()?;
    let config = get_config();
    let _logger = init_logging(&config)?;
    log::info!("Starting webhook-chat against {}", config.webhook_url);

    let client = WebhookClient::from_config(&get_config())?;
    let (reply_sender, reply_receiver) = mpsc::channel::<Reply>(8);
    let app = App::new(client, reply_sender);

    let mut terminal = setup_terminal()?;
    let res = run_app(&mut terminal, app, reply_receiver).await;
    restore_terminal(&mut terminal)?;

    if let Err(err) = &res {
        log::error!("Application error: {}", err);
    }
    log::info!("Exiting");

    res
}

/// Main loop of the application.
async fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
    mut reply_receiver: mpsc::Receiver<Reply>,
) -> ChatResult<()> {
    let (tx, mut rx) = mpsc::channel::<Event>(100);

    // Spawn a task to read user input
    tokio::task::spawn_blocking(move || {
        let mut last_tick = Instant::now();
        loop {
            match event::poll(Duration::from_millis(POLL_RATE_MS)) {
                Ok(true) => {
                    if let Ok(event) = event::read() {
                        if tx.blocking_send(Event::Input(event)).is_err() {
                            return;
                        }
                    }
                }
                Ok(false) => {}
                Err(e) => {
                    log::error!("Failed to poll terminal events: {}", e);
                    return;
                }
            }

            if last_tick.elapsed() >= Duration::from_millis(TICK_RATE_MS) {
                if tx.blocking_send(Event::Tick).is_err() {
                    return;
                }
                last_tick = Instant::now();
            }
        }
    });

    loop {
        terminal.draw(|f| ui::draw(f, &mut app))?;

        tokio::select! {
            event = rx.recv() => handle_event(event, &mut app),
            Some(reply) = reply_receiver.recv() => app.apply_reply(reply),
        }

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
