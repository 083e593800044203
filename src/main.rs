mod api;
mod app;
mod config;
mod error;
mod input;
mod models;
mod ui;

use std::io::{self, Stdout};
use std::path::PathBuf;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc;
use tracing_subscriber::EnvFilter;

use api::{FetchRequest, NewsClient};
use app::{App, View};
use config::Config;
use error::Result;
use input::Action;
use models::{Article, Category};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::load()?;
    init_logging()?;

    let Some(api_key) = config.api_key.clone() else {
        eprintln!(
            "No API key configured. Set NEWS_API_KEY or add api_key to {}",
            Config::config_path().display()
        );
        std::process::exit(1);
    };

    let client = NewsClient::new(api_key, config.language.clone());

    let mut terminal = setup_terminal()?;
    let res = run(&mut terminal, client, config).await;
    restore_terminal(&mut terminal)?;
    res
}

async fn run(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    client: NewsClient,
    config: Config,
) -> Result<()> {
    let (tx, mut rx) = mpsc::channel::<(u64, Result<Vec<Article>>)>(4);

    let mut app = App::new(config.default_query, config.country);

    // Initial fetch for the default view
    let request = app.request(None);
    spawn_fetch(&client, &tx, app.begin_fetch(), request);

    loop {
        while let Ok((generation, result)) = rx.try_recv() {
            app.finish_fetch(generation, result);
        }

        terminal.draw(|f| ui::draw(f, &app))?;

        match input::poll_action(app.input_mode)? {
            Action::Quit => break,
            Action::Down => app.move_down(),
            Action::Up => app.move_up(),

            Action::SwitchView => {
                let request = app.switch_view();
                spawn_fetch(&client, &tx, app.begin_fetch(), request);
            }

            Action::Refresh => {
                let request = app.request(None);
                spawn_fetch(&client, &tx, app.begin_fetch(), request);
            }

            Action::Category(i) => {
                if app.view == View::Search {
                    if let Some(category) = Category::ALL.get(i).copied() {
                        let request = app.select_category(category);
                        spawn_fetch(&client, &tx, app.begin_fetch(), request);
                    }
                }
            }

            Action::StartSearch => {
                if app.view == View::Search {
                    app.start_search();
                }
            }
            Action::SearchChar(c) => app.push_search_char(c),
            Action::Backspace => app.pop_search_char(),
            Action::ClearSearch => app.clear_search(),
            Action::CancelSearch => app.cancel_search(),

            Action::SubmitSearch => {
                let request = app.submit_search();
                spawn_fetch(&client, &tx, app.begin_fetch(), request);
            }

            Action::OpenInBrowser => {
                if let Some(article) = app.selected_article() {
                    if let Err(e) = open::that(&article.url) {
                        app.status = format!("Could not open browser: {e}");
                    } else {
                        app.status = "Opened in browser.".to_string();
                    }
                }
            }

            Action::None => {}
        }
    }

    Ok(())
}

fn spawn_fetch(
    client: &NewsClient,
    tx: &mpsc::Sender<(u64, Result<Vec<Article>>)>,
    generation: u64,
    request: FetchRequest,
) {
    let client = client.clone();
    let tx = tx.clone();
    tokio::spawn(async move {
        let result = client.fetch(&request).await;
        let _ = tx.send((generation, result)).await;
    });
}

/// Log to a file; stdout belongs to the TUI.
fn init_logging() -> Result<()> {
    let log_dir = dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("newsdeck");
    std::fs::create_dir_all(&log_dir)?;
    let log_file = std::fs::File::create(log_dir.join("newsdeck.log"))?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(log_file)
        .with_ansi(false)
        .init();

    Ok(())
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Ok(Terminal::new(backend)?)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}
