use crate::commands::{CmdMessage, CmdResult, DataPaths};
use crate::config::CustbookConfig;
use crate::currency::{self, ToggleOutcome};
use crate::error::Result;
use tracing::info;

#[derive(Debug, Clone)]
pub enum CurrencyAction {
    List,
    Toggle(String),
    SetDefault(String),
}

pub fn run(paths: &DataPaths, action: CurrencyAction) -> Result<CmdResult> {
    let dir = &paths.data_dir;
    let mut config = CustbookConfig::load(dir)?;
    let mut result = CmdResult::default();

    match action {
        CurrencyAction::List => {}
        CurrencyAction::Toggle(code) => match currency::toggle(&mut config, &code)? {
            ToggleOutcome::Activated(code) => {
                config.save(dir)?;
                info!(%code, "currency enabled");
                result.add_message(CmdMessage::success(format!("{} enabled", code)));
            }
            ToggleOutcome::Deactivated { code, new_default } => {
                config.save(dir)?;
                info!(%code, "currency disabled");
                result.add_message(CmdMessage::success(format!("{} disabled", code)));
                if let Some(new_default) = new_default {
                    result.add_message(CmdMessage::info(format!(
                        "Default currency is now {}",
                        new_default
                    )));
                }
            }
            ToggleOutcome::Refused(reason) => {
                result.add_message(CmdMessage::warning(reason));
            }
        },
        CurrencyAction::SetDefault(code) => {
            let code = currency::set_default(&mut config, &code)?;
            config.save(dir)?;
            result.add_message(CmdMessage::success(format!(
                "Default currency set to {}",
                code
            )));
        }
    }

    Ok(result.with_config(config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn toggle_persists() {
        let dir = tempdir().unwrap();
        let paths = DataPaths::new(dir.path().to_path_buf());

        run(&paths, CurrencyAction::Toggle("AFN".into())).unwrap();
        let config = CustbookConfig::load(dir.path()).unwrap();
        assert!(!config.active_currencies.contains(&"AFN".to_string()));
    }

    #[test]
    fn toggling_default_reports_new_default() {
        let dir = tempdir().unwrap();
        let paths = DataPaths::new(dir.path().to_path_buf());

        let result = run(&paths, CurrencyAction::Toggle("usd".into())).unwrap();
        assert_eq!(result.messages.len(), 2);
        assert_eq!(result.config.unwrap().default_currency, "AFN");
    }

    #[test]
    fn refusing_last_currency_is_a_warning() {
        let dir = tempdir().unwrap();
        let paths = DataPaths::new(dir.path().to_path_buf());
        let config = CustbookConfig {
            active_currencies: vec!["EUR".into()],
            default_currency: "EUR".into(),
            ..CustbookConfig::default()
        };
        config.save(dir.path()).unwrap();

        let result = run(&paths, CurrencyAction::Toggle("EUR".into())).unwrap();
        assert_eq!(result.messages[0].level, crate::commands::MessageLevel::Warning);
        assert_eq!(
            CustbookConfig::load(dir.path()).unwrap().active_currencies,
            vec!["EUR"]
        );
    }

    #[test]
    fn set_default_must_be_active() {
        let dir = tempdir().unwrap();
        let paths = DataPaths::new(dir.path().to_path_buf());
        run(&paths, CurrencyAction::Toggle("EUR".into())).unwrap();
        assert!(run(&paths, CurrencyAction::SetDefault("EUR".into())).is_err());
        run(&paths, CurrencyAction::SetDefault("aed".into())).unwrap();
        assert_eq!(CustbookConfig::load(dir.path()).unwrap().default_currency, "AED");
    }
}
