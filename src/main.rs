use anyhow::Context;
use stuhealth::config::{AppConfig, load_dotenv};

fn init_tracing(config: &AppConfig) {
    tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .with_target(false)
        .init();
}

fn main() -> anyhow::Result<()> {
    load_dotenv();
    let (config, rejected) = AppConfig::parse_env();
    init_tracing(&config);
    for var in &rejected {
        var.log();
    }

    #[cfg(not(target_arch = "wasm32"))]
    std::fs::create_dir_all(&config.data_dir).with_context(|| {
        format!(
            "failed to create data directory {}",
            config.data_dir.display()
        )
    })?;

    tracing::info!(data_dir = %config.data_dir.display(), "starting stuhealth");
    stuhealth::ui::install_config(config);
    dioxus::launch(stuhealth::ui::App);
    Ok(())
}
