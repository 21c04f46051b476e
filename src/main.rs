use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::PathBuf;
use std::time::{Duration, Instant};

use clap::Parser;
use color_eyre::Result;
use ratatui::DefaultTerminal;
use ratatui::crossterm::event::{
    self, DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
};
use ratatui::crossterm::execute;

use catalog_search::app::App;
use catalog_search::config::{Config, ConfigResult, load_config};
use catalog_search::navigation::{NavigationSink, NavigationTarget, PrintSink};
use catalog_search::search::{FetchResponse, PageElements, SearchWidget, WidgetSettings, markup};
use catalog_search::service::{SuggestionClient, spawn_worker};

const APP_DIR: &str = "catalog-search";
const LOG_FILE: &str = "catalog-search.log";

#[derive(Parser, Debug)]
#[command(
    name = "catalog-search",
    version,
    about = "Live product search for the catalog",
    long_about = None
)]
struct Args {
    /// Catalog base URL (overrides the config file)
    #[arg(long, value_name = "URL")]
    base_url: Option<String>,

    /// Debounce window in milliseconds (overrides the config file)
    #[arg(long, value_name = "MS")]
    debounce_ms: Option<u64>,

    /// Path to a config file instead of the default location
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Fetch suggestions for QUERY once, print the panel markup and exit
    #[arg(long, value_name = "QUERY")]
    once: Option<String>,

    /// Element ids present on the host page for --once, comma separated
    /// (default: the full search bar)
    #[arg(long, value_name = "IDS", value_delimiter = ',', requires = "once")]
    page_elements: Option<Vec<String>>,
}

fn main() -> Result<()> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;

    let args = Args::parse();
    init_logging();

    let ConfigResult { mut config, warning } = load_config(args.config.as_deref());
    if let Some(warning) = warning {
        log::warn!("{}", warning);
    }
    if let Some(base_url) = args.base_url {
        config.service.base_url = base_url;
    }
    if let Some(debounce_ms) = args.debounce_ms {
        config.search.debounce_ms = debounce_ms;
    }

    let client = SuggestionClient::from_config(&config.service)?;

    if let Some(query) = args.once {
        let elements = match args.page_elements {
            Some(ids) => PageElements::new(ids),
            None => PageElements::full_search_bar(),
        };
        return run_once(client, WidgetSettings::from(&config.search), &elements, &query);
    }

    let base_url = client.base_url().clone();
    if let Some(target) = run_tui(client, &config)? {
        PrintSink::new(io::stdout()).redirect(&target.resolve(&base_url))?;
    }
    Ok(())
}

/// Log to a file under the cache directory; the terminal belongs to the UI
fn init_logging() {
    let Some(dir) = dirs::cache_dir().map(|d| d.join(APP_DIR)) else {
        return;
    };
    if std::fs::create_dir_all(&dir).is_err() {
        return;
    }
    let Ok(file) = OpenOptions::new()
        .create(true)
        .append(true)
        .open(dir.join(LOG_FILE))
    else {
        return;
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format(|buf, record| {
            writeln!(
                buf,
                "{} {:<5} {}: {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
}

/// Run one search through the widget without a terminal and print the
/// search container markup
fn run_once(
    client: SuggestionClient,
    settings: WidgetSettings,
    elements: &PageElements,
    query: &str,
) -> Result<()> {
    // Pages without the search input get no widget and no markup
    let Some(mut widget) = SearchWidget::attach(elements, settings) else {
        return Ok(());
    };

    let now = Instant::now();
    widget.on_input(query, now);

    if let Some(request) = widget.poll_fetch(now + Duration::from_millis(settings.debounce_ms)) {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;
        let records = runtime.block_on(client.search(&request.query))?;

        widget.apply_response(FetchResponse {
            query: request.query,
            generation: request.generation,
            result: Ok(records),
        });
    }

    println!("{}", markup::render_container(widget.panel(), widget.highlighted()));
    Ok(())
}

fn run_tui(client: SuggestionClient, config: &Config) -> Result<Option<NavigationTarget>> {
    let mut app = App::new(config);
    app.set_worker(spawn_worker(client)?);

    // Initialize terminal (handles raw mode, alternate screen, etc.)
    let mut terminal = ratatui::init();
    let result: Result<()> = execute!(io::stdout(), EnableMouseCapture, EnableBracketedPaste)
        .map_err(Into::into)
        .and_then(|()| run(&mut terminal, &mut app));

    if let Err(e) = execute!(io::stdout(), DisableBracketedPaste, DisableMouseCapture) {
        log::warn!("Failed to restore mouse mode: {}", e);
    }
    ratatui::restore();

    if let Some(worker) = app.take_worker() {
        worker.shutdown();
    }

    result.map(|()| app.take_navigation())
}

fn run(terminal: &mut DefaultTerminal, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|frame| app.render(frame))?;

        if event::poll(app.poll_timeout(Instant::now()))? {
            app.handle_event(event::read()?, Instant::now());
        }
        app.tick(Instant::now());

        if app.should_quit() {
            return Ok(());
        }
    }
}
