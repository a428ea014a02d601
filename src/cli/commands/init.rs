use crate::config::Config;
use crate::errors::AppResult;

/// Handle the `init` subcommand
pub fn handle() -> AppResult<()> {
    Config::init_all()?;
    Ok(())
}
