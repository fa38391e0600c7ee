use empath::{config, logging, ui, App};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    config::initialize_config()?;
    let config = config::get_config();

    let _logger = logging::init_logging(&config.log_level)?;
    log::info!("Starting empath against {}", config.base_url);

    let app = App::new();
    ui::run_ui(app).await?;

    Ok(())
}
