use anyhow::Context;
use salon_app::cli::parse_args;
use salon_app::render;
use salon_app::seed::load_store;
use salon_core::config::load_config;
use salon_service::calendar::CalendarService;
use salon_service::clock::{Clock, SystemClock};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, reload, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let (filter_layer, filter_handle) = reload::Layer::new(EnvFilter::new("debug"));

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_file(true)
                .with_line_number(true),
        )
        .init();

    let invocation = parse_args(std::env::args().skip(1))?;

    let config = load_config()?;

    tracing::info!(config = ?config, "Configuration loaded");

    if let Ok(filter) = EnvFilter::try_new(config.logging.level.as_str()) {
        if let Err(e) = filter_handle.modify(|current| *current = filter) {
            tracing::warn!(error = %e, "Failed to update log filter from config");
        }
    } else {
        tracing::warn!(level = %config.logging.level, "Invalid log level in config, keeping debug");
    }

    let store = load_store(config.data.seed_file.as_deref()).await?;
    let clock = SystemClock;
    let now = clock.now();
    let calendar = CalendarService::from_settings(store, clock, &config)
        .context("invalid schedule or layout configuration")?;

    let date = invocation.date.unwrap_or_else(|| calendar.today());
    tracing::debug!(%date, category = %invocation.category, "Rendering day");

    let hours = calendar.working_hours(date);
    let slots = calendar.slot_grid(date, invocation.category).await?;
    let day = calendar.day_view(date, None).await?;

    println!("{}", render::hours_line(date, &hours));
    if hours.is_open() {
        println!("\n{} slots:", invocation.category);
        print!("{}", render::slot_grid(&slots));
    }
    println!("\nAppointments:");
    print!("{}", render::day_layout(&day));
    if let Some(offset) = calendar.grid().now_offset(now).filter(|_| day.is_today) {
        println!("\nNow marker at {offset:.0}px");
    }

    Ok(())
}
