use log::LevelFilter;
use simplelog::{ConfigBuilder, SimpleLogger};

use crate::config;

pub fn setup_simple_logger() -> anyhow::Result<()> {
    let logger_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .add_filter_allow_str("vet_practice")
        .build();

    let level = if config::APP_CONFIG.is_prod() {
        LevelFilter::Info
    } else {
        LevelFilter::Debug
    };

    Ok(SimpleLogger::init(level, logger_config)?)
}
