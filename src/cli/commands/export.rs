use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::manager::ConventionsManager;
use crate::errors::AppResult;
use crate::export::{self, ExportFormat};
use chrono::NaiveDate;

pub fn handle(cmd: &Commands, cfg: &Config, today: NaiveDate) -> AppResult<()> {
    if let Commands::Export { format, output } = cmd {
        let mut mgr = ConventionsManager::with_today(today);
        mgr.load_from_path(&cfg.feed);

        match format {
            ExportFormat::Json => export::json::write_json(output, &mgr)?,
            ExportFormat::Csv => export::csv::write_csv(output, &mgr)?,
        }
    }

    Ok(())
}
