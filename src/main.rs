//! TTSC main entry point
//!
//! The event loop blocks on stdin and dispatches one key event to
//! completion at a time:
//! 1. a modal handler is active - the key goes to it (line entry, menus)
//! 2. otherwise - the default bindings run the matching command
//!
//! Every command is synchronous; Speak holds the loop until the offline
//! engine finishes vocalizing.

use log::{debug, error, info};
use nix::libc;
use std::io::{self, Read};
use std::os::unix::io::AsRawFd;
use std::process;
use ttsc::input::{create_default_keymap, DefaultKeyHandler, HandlerAction};
use ttsc::state::State;
use ttsc::term::RawModeGuard;
use ttsc::{ui, Result};

fn main() {
    // Parse command line arguments
    let args: Vec<String> = std::env::args().collect();
    let debug_mode = args.iter().any(|arg| arg == "--debug" || arg == "-d");

    // Initialize logger
    if debug_mode {
        // Debug mode: write to ttsc.log file
        use std::fs::OpenOptions;
        match OpenOptions::new()
            .create(true)
            .append(true)
            .open("ttsc.log")
        {
            Ok(log_file) => {
                env_logger::Builder::new()
                    .filter_level(log::LevelFilter::Debug)
                    .target(env_logger::Target::Pipe(Box::new(log_file)))
                    .init();
            }
            Err(e) => {
                eprintln!("Warning: Failed to open ttsc.log for debug logging: {}", e);
                eprintln!("Continuing without file logging...");
                env_logger::Builder::new()
                    .filter_level(log::LevelFilter::Warn)
                    .init();
            }
        }

        info!(
            "TTSC version {} starting (debug mode, logging to ttsc.log)",
            ttsc::VERSION
        );
    } else {
        // Normal mode: minimal logging to stderr, only errors
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Error)
            .init();
    }

    // Run the application
    if let Err(e) = run() {
        error!("Fatal error: {}", e);
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    debug!("Initializing TTSC");

    // Verify stdin is a TTY; the UI reads single keystrokes
    let stdin_fd = io::stdin().as_raw_fd();
    if unsafe { libc::isatty(stdin_fd) } == 0 {
        eprintln!("Error: ttsc requires an interactive terminal (stdin is not a TTY)");
        eprintln!("Usage: Run ttsc directly in a terminal, not through pipes or redirects");
        process::exit(1);
    }

    // Load configuration and acquire the offline engine
    // Engine initialization failure is the one fatal error: without it the
    // application has nothing to offer
    let mut state = State::new()?;
    info!("State initialized - config from {:?}", state.config.path());
    info!(
        "{} voices enumerated, rate {} wpm",
        state.coordinator.voices().len(),
        state.session.rate
    );

    // Create default key handler
    let keymap = create_default_keymap();
    info!("Key handler initialized with {} bindings", keymap.len());
    let mut default_handler = DefaultKeyHandler::new(keymap);

    // Raw mode lets the UI capture single keystrokes including Ctrl+C;
    // the guard restores the terminal on every exit path
    let _guard = RawModeGuard::enable(stdin_fd)?;

    info!("TTSC ready - entering event loop");
    ui::draw_screen(&state);

    // Main event loop: one key event dispatched to completion per pass
    let mut buf = [0u8; 64];
    while !state.quit {
        let n = io::stdin().read(&mut buf)?;
        if n == 0 {
            info!("stdin closed");
            break;
        }
        let key = &buf[..n];

        let action = if !state.handlers.is_empty() {
            // Temporarily pop the handler to avoid borrow checker issues
            if let Some(mut handler) = state.handlers.pop() {
                let action = handler.process_with_state(key, &mut state)?;
                if action != HandlerAction::Remove {
                    // Handler wants to stay active
                    state.handlers.push(handler);
                }
                action
            } else {
                HandlerAction::Ignored
            }
        } else {
            // No modal handlers - process with default bindings
            default_handler.process_key(key, &mut state)?
        };

        // Refresh the panel once the key is fully processed and no modal
        // input is pending
        if !state.quit && state.handlers.is_empty() && action != HandlerAction::Ignored {
            ui::draw_screen(&state);
        }
    }

    info!("Shutting down");
    Ok(())
}
