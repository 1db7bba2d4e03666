//! Config command handler

use crate::config::CliConfig;
use crate::error::CliResult;

/// Execute the config command: print the effective configuration as YAML
pub fn execute_config(config: &CliConfig) -> CliResult<()> {
    print!("{}", config.to_yaml()?);
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_execute_config() {
        assert!(execute_config(&CliConfig::default()).is_ok());
    }
}
