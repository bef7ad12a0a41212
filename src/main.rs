use anyhow::Result;
use listkeeper::config::Config;
use listkeeper::logger::Logger;

#[tokio::main]
async fn main() -> Result<()> {
    if std::env::args().skip(1).any(|arg| arg == "--init-config") {
        Config::generate_default_config(Config::get_default_config_path()?)?;
        return Ok(());
    }

    let config = Config::load()?;

    let logger = Logger::from_config(&config.logging)?;
    logger.install(&config.logging)?;
    log::info!("listkeeper {} starting", listkeeper::constants::APP_VERSION);

    listkeeper::ui::run_app(config, logger).await?;

    Ok(())
}
