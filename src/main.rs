use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use ration_optimizer::{
    data::export::{export_filtered, ExportRequest},
    events,
    logging::{init_logging, LogTarget},
    source_for,
    ui::{self, Theme},
    App, RationTable, Settings, ThemeChoice,
};

/// How long to wait for input before redrawing.
const POLL_INTERVAL: Duration = Duration::from_millis(250);

#[derive(Parser, Debug)]
#[command(name = "ration-optimizer")]
#[command(about = "Filter ration items to maximize calories while minimizing weight")]
struct Args {
    /// Catalog file (.csv or .json); defaults to the bundled FSR 2012 menus
    #[arg(short, long)]
    data: Option<PathBuf>,

    /// Settings file (TOML); `rations.toml` is used when present
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Colour theme
    #[arg(long, value_enum)]
    theme: Option<ThemeChoice>,

    /// Append logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Log filter directive (e.g. "debug", "ration_optimizer=trace")
    #[arg(long)]
    log_level: Option<String>,

    /// Export the filtered items to a file (.csv or .json) and exit
    #[arg(short, long)]
    export: Option<PathBuf>,

    /// Lowest calories to keep (export mode)
    #[arg(long, requires = "export")]
    min_calories: Option<f64>,

    /// Highest calories to keep (export mode)
    #[arg(long, requires = "export")]
    max_calories: Option<f64>,

    /// Lowest weight in grams to keep (export mode)
    #[arg(long, requires = "export")]
    min_grams: Option<f64>,

    /// Highest weight in grams to keep (export mode)
    #[arg(long, requires = "export")]
    max_grams: Option<f64>,

    /// Item types to keep, comma separated (export mode)
    #[arg(long, value_delimiter = ',', requires = "export")]
    types: Option<Vec<String>>,
}

fn main() {
    let args = Args::parse();
    if let Err(e) = run(args) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let mut settings = Settings::load(args.config.as_deref())?;

    // Command line flags override settings
    if let Some(data) = args.data.clone() {
        settings.data = Some(data);
    }
    if let Some(theme) = args.theme {
        settings.theme = theme;
    }
    if let Some(log_file) = args.log_file.clone() {
        settings.log_file = Some(log_file);
    }
    if let Some(level) = args.log_level.clone() {
        settings.log_level = level;
    }

    // Handle export mode (non-interactive)
    if let Some(ref export_path) = args.export {
        let target = match settings.log_file.as_deref() {
            Some(path) => LogTarget::File(path),
            None => LogTarget::Stderr,
        };
        init_logging(target, &settings.log_level)?;
        let table = load_table(settings.data.as_deref())?;
        return export_to_file(&table, &args, export_path);
    }

    let target = match settings.log_file.as_deref() {
        Some(path) => LogTarget::File(path),
        None => LogTarget::Disabled,
    };
    init_logging(target, &settings.log_level)?;

    // Load before touching the terminal so errors print normally
    let table = load_table(settings.data.as_deref())?;
    let theme = Theme::from_choice(settings.theme);
    let app = App::new(table, theme).with_export_path(settings.export_path);

    run_tui(app)
}

fn load_table(path: Option<&Path>) -> Result<RationTable> {
    let source = source_for(path);
    source
        .load()
        .with_context(|| format!("failed to load catalog from {}", source.description()))
}

/// Run the TUI until the user quits
fn run_tui(mut app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Setup panic hook to restore terminal
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
        original_hook(panic);
    }));

    tracing::info!(
        items = app.table().len(),
        source = app.source_description(),
        "dashboard started"
    );

    // Run the main loop
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    while app.running {
        terminal.draw(|frame| ui::draw(frame, app))?;

        if let Some(event) = events::poll_event(POLL_INTERVAL)? {
            match event {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    events::handle_key_event(app, key)
                }
                Event::Mouse(mouse) => events::handle_mouse_event(app, mouse, ui::TAB_ROW),
                Event::Resize(_, _) => {
                    // Terminal will redraw on next iteration
                }
                _ => {}
            }
        }
    }

    tracing::info!("dashboard closed");
    Ok(())
}

/// Apply the export-mode filter flags and write the result
fn export_to_file(table: &RationTable, args: &Args, export_path: &Path) -> Result<()> {
    let request = ExportRequest {
        min_calories: args.min_calories,
        max_calories: args.max_calories,
        min_grams: args.min_grams,
        max_grams: args.max_grams,
        types: args.types.clone(),
    };
    let view = export_filtered(table, &request, export_path)?;

    println!(
        "Exported {} of {} items to: {}",
        view.len(),
        table.len(),
        export_path.display()
    );
    Ok(())
}
