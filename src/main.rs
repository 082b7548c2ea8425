use anyhow::Result;

fn main() -> Result<()> {
    // Initialize core
    skycast_core::init()?;

    // Create and initialize application
    let mut app = skycast_core::App::new()?;
    app.initialize()?;

    tracing::info!("Skycast application started");

    let services = skycast_ui::AppServices::new(app.config())?;
    skycast_ui::shell::run(&services, &app.config().weather.fallback_city)?;

    // Graceful shutdown
    app.shutdown()?;

    Ok(())
}
