//! site-i18n
//!
//! Export entry point: checks the translation table and prints it as JSON

use anyhow::Context;
use tracing::info;

use site_i18n::{config::Settings, utils::logging, TranslationTable};

fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    // Load configuration
    let settings = Settings::new().context("failed to load configuration")?;
    settings.validate()?;

    // Initialize logging
    let _guard = logging::init_logging(&settings.logging)?;

    info!("Starting {}...", site_i18n::info());

    let table = TranslationTable::new(&settings.i18n.default_locale)?;
    table.verify().context("translation table is inconsistent")?;
    logging::log_table_stats(&table.stats());

    println!("{}", table.to_json()?);

    info!(default_locale = table.default_locale(), "Translation table exported");
    Ok(())
}
