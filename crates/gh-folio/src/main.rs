use ratatui::{
    backend::CrosstermBackend,
    crossterm::{
        event::{self, Event, KeyEventKind},
        execute,
        terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    },
    Terminal,
};
use std::io;
use std::sync::mpsc;

mod actions;
mod dispatcher;
mod logger;
mod middleware;
mod reducers;
mod state;
mod store;
mod theme;
mod view_models;
mod views;

use actions::Action;
use dispatcher::Dispatcher;
use gh_folio_config::{AppConfig, Preferences};
use middleware::{
    github::GitHubMiddleware, keyboard::KeyboardMiddleware, logging::LoggingMiddleware,
    preferences::PreferencesMiddleware,
};
use state::AppState;
use store::Store;

fn main() -> io::Result<()> {
    // Token variables may live in a .env file
    dotenvy::dotenv().ok();

    let log_file = logger::init();
    log::info!("Starting gh-folio, logging to {:?}", log_file);

    // Load configuration and the persisted theme preference
    let config = AppConfig::load();
    let preferences = Preferences::load();
    let initial_state = AppState::new(config, preferences.theme);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Actions dispatched by middleware and async tasks land on this channel
    let (action_tx, action_rx) = mpsc::channel::<Action>();

    // Initialize store with middleware
    let mut store = Store::new(initial_state, Dispatcher::new(action_tx));

    // Add middleware in order (they execute in this order)
    store.add_middleware(Box::new(LoggingMiddleware::new()));
    store.add_middleware(Box::new(KeyboardMiddleware::new()));
    store.add_middleware(Box::new(GitHubMiddleware::new()));
    store.add_middleware(Box::new(PreferencesMiddleware::new()));

    // Kick off client initialization and the first fetch
    store.dispatch(Action::BootstrapStart);

    // Main event loop
    let result = run_app(&mut terminal, &mut store, &action_rx);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = result {
        eprintln!("Error: {}", err);
    }

    log::info!("Exiting gh-folio");
    Ok(())
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    store: &mut Store,
    action_rx: &mpsc::Receiver<Action>,
) -> io::Result<()> {
    loop {
        // Render
        terminal.draw(|frame| {
            let area = frame.area();
            views::render(store.state(), area, frame);
        })?;

        // Check if we should quit
        if !store.state().running {
            break;
        }

        // Handle events
        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (ignore key release)
                if key.kind == KeyEventKind::Press {
                    store.dispatch(Action::GlobalKeyPressed(key));
                }
            }
        }

        // Feed actions dispatched by middleware and async tasks back in
        while let Ok(action) = action_rx.try_recv() {
            store.dispatch(action);
        }
    }

    Ok(())
}
