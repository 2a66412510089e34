//! # Binary: lingualens
//!
//! ## Responsibility
//! Entry point for the lingualens terminal client. Resolves configuration,
//! initializes the terminal, runs the event loop, and ensures clean exit.
//!
//! ## Usage
//! ```bash
//! lingualens                                        # default endpoint
//! lingualens --endpoint http://lang.example.com/identify
//! lingualens --mock                                 # no service needed
//! lingualens --config client.toml --timeout-ms 5000
//! ```
//!
//! ## Guarantees
//! - Terminal state always restored on exit, even on panic
//! - Clean shutdown on Esc or Ctrl+C
//! - The UI thread never blocks on the network: identify calls run as
//!   spawned tasks and complete through a channel drained each frame

use std::io;
use std::sync::mpsc;
use std::sync::Arc;
use std::time::Duration;

use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use lingualens::config::ClientConfig;
use lingualens::tui::app::{App, LogLevel};
use lingualens::tui::events::{apply_event, poll_event};
use lingualens::tui::ui;
use lingualens::{
    HttpIdentifyService, IdentificationResult, IdentifyService, LensError, MockIdentifyService,
};

/// Render refresh / input poll rate: 10 frames per second.
const TICK_RATE: Duration = Duration::from_millis(100);

/// One completed identify call: dispatch sequence number plus outcome.
type Completion = (u64, Result<IdentificationResult, LensError>);

/// Prints usage and exits if `--help` is present; otherwise resolves config.
fn resolve_config() -> Result<ClientConfig, LensError> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.iter().any(|a| a == "--help" || a == "-h") {
        println!(
            "lingualens — terminal client for a text language-identification service\n\n\
             Options:\n\
             \x20 --endpoint <url>    identify endpoint (default http://127.0.0.1:8000/identify)\n\
             \x20 --timeout-ms <n>    request timeout in milliseconds (default 30000)\n\
             \x20 --config <file>     TOML config file\n\
             \x20 --mock              use canned responses, no service needed\n\n\
             Environment: LINGUALENS_ENDPOINT, LINGUALENS_TIMEOUT_MS"
        );
        std::process::exit(0);
    }
    ClientConfig::resolve(&args)
}

/// Sets up the terminal for TUI rendering.
///
/// # Errors
/// Returns `io::Error` if terminal initialization fails.
fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>, io::Error> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend)
}

/// Restores the terminal to its original state.
fn restore_terminal(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<(), io::Error> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

fn main() -> Result<(), LensError> {
    lingualens::init_tracing()?;

    let config = match resolve_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("lingualens: {e}");
            std::process::exit(2);
        }
    };

    let service: Arc<dyn IdentifyService> = if config.mock {
        Arc::new(MockIdentifyService::new())
    } else {
        Arc::new(HttpIdentifyService::new(config.endpoint.clone()).with_timeout(config.timeout()))
    };

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .enable_all()
        .build()?;

    // Install panic hook that restores terminal before printing panic message
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        default_hook(info);
    }));

    let mut terminal = setup_terminal()?;
    let mut app = App::new();
    app.log(
        LogLevel::Info,
        "Client started",
        if config.mock {
            "backend=mock".to_string()
        } else {
            format!("endpoint={}", config.endpoint)
        },
    );

    let result = run(&mut terminal, &mut app, &runtime, service);

    restore_terminal(&mut terminal)?;

    if let Err(e) = result {
        eprintln!("lingualens error: {e}");
        std::process::exit(1);
    }

    Ok(())
}

/// Runs the TUI event loop.
///
/// Each frame: render, poll one input event, dispatch a submission if any,
/// then drain completed identify calls from the results channel. Overlapping
/// submissions are allowed; `App::complete_identify` discards stale ones.
fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    runtime: &tokio::runtime::Runtime,
    service: Arc<dyn IdentifyService>,
) -> Result<(), LensError> {
    let (tx, rx) = mpsc::channel::<Completion>();

    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        let event = poll_event(TICK_RATE);
        if let Some(text) = apply_event(app, event) {
            let seq = app.begin_identify();
            app.log(
                LogLevel::Info,
                "Identify dispatched",
                format!("seq={seq} chars={}", text.chars().count()),
            );

            let service = Arc::clone(&service);
            let tx = tx.clone();
            runtime.spawn(async move {
                let outcome = service.identify(&text).await;
                // Receiver gone means the loop exited; nothing left to do.
                let _ = tx.send((seq, outcome));
            });
        }

        if app.should_quit {
            break;
        }

        while let Ok((seq, outcome)) = rx.try_recv() {
            app.complete_identify(seq, outcome);
        }
    }

    Ok(())
}
