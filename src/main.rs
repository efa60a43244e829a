//! Folio - Command-Line Host
//!
//! Loads the YC dataset, applies the configured filters, prints one page of
//! results with seeded tile styling, and writes the summary export.
//!
//! Usage: `folio [path/to/folio.toml]`

use anyhow::{Context, Result, bail};
use chrono::Utc;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use folio::domain::config::{FolioConfig, LogConfig};
use folio::explorer::{ExplorerState, FileExporter, save_snapshot};
use folio::helpers::{get_or_create_data_dir, is_development};
use folio::random::SeededRandomSource;
use folio::services::{DatasetSource, ExplorerSession, block_on};
use folio::utils::format::{format_datetime, format_number, format_page_bar, truncate};

fn init_tracing(log: &LogConfig) -> Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(&log.level))?;

    let (file_layer, guard) = if log.file {
        let dir = get_or_create_data_dir()?;
        let appender = tracing_appender::rolling::daily(dir, "folio.log");
        let (writer, guard) = tracing_appender::non_blocking(appender);
        (
            Some(fmt::layer().with_writer(writer).with_ansi(false)),
            Some(guard),
        )
    } else {
        (None, None)
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer())
        .with(file_layer)
        .init();

    Ok(guard)
}

fn main() -> Result<()> {
    let config_path = std::env::args().nth(1).map(std::path::PathBuf::from);
    let config = FolioConfig::try_load(config_path.as_deref()).context("loading config")?;

    // Keep the guard alive so buffered file logs are flushed on exit
    let _guard = init_tracing(&config.log)?;
    tracing::info!(development = is_development(), "Starting Folio...");

    let mut rng = SeededRandomSource::new(config.random.seed);
    tracing::info!(seed = rng.seed(), "Tile randomness seeded");

    let source = DatasetSource::parse(&config.dataset.source);
    let session = ExplorerSession::new(ExplorerState::new(config.explorer.page_size));
    block_on(session.reload(&source))?;

    let mut state = session.state();
    if let Some(message) = state.load_state().error_message() {
        bail!("{message} (source: {source})");
    }

    state.set_search_term(config.explorer.search.as_str());
    for category in &config.explorer.categories {
        state.add_category(category);
    }
    state.set_page(config.explorer.page);

    let stats = state.stats();
    println!("Total companies: {}", format_number(stats.total));
    println!("Categories:      {}", format_number(stats.distinct_category_count));
    println!("Locations:       {}", format_number(stats.distinct_location_count));
    println!("Top categories:  {}", stats.top_categories.join(", "));

    let pagination = state.pagination();
    let (first, last) = pagination.visible_range();
    println!(
        "\nShowing {first}-{last} of {} (page {}/{})",
        format_number(pagination.total_items()),
        pagination.current_page(),
        pagination.total_pages().max(1),
    );

    for (offset, company) in state.page_rows().into_iter().enumerate() {
        let accent = rng.accent_color();
        let tilt = rng.rotation();
        println!(
            "{:>4}. {:<28} {:<20} {:<12} {:+.2}°  {}",
            first + offset,
            truncate(&company.company, 28),
            truncate(&company.category, 20),
            accent.name,
            tilt,
            truncate(&company.one_liner, 60),
        );
        let chips = company.display_subcategories();
        if !chips.is_empty() {
            println!("      {}", chips.join(" · "));
        }
    }

    if pagination.is_visible() {
        println!("\n{}", format_page_bar(&pagination.buttons(), pagination.current_page()));
    }

    let export_dir = match &config.export.dir {
        Some(dir) => dir.clone(),
        None => get_or_create_data_dir()?,
    };
    let generated_at = Utc::now();
    let snapshot = state.export_snapshot(generated_at);
    let exporter = FileExporter::new(export_dir);
    let filename = save_snapshot(&exporter, &snapshot)?;
    println!(
        "\nSummary written to {} at {}",
        exporter.dir().join(filename).display(),
        format_datetime(&generated_at)
    );

    Ok(())
}
