use crate::prelude::{println, *};
use actionrepo_core::config::{AppConfig, Environment};
use colored::Colorize;

#[derive(Debug, clap::Parser)]
#[command(name = "config")]
#[command(about = "Show the static configuration table")]
pub struct App {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

pub fn run(app: App, config: &AppConfig, global: crate::Global) -> Result<()> {
    if app.json {
        println!(
            "{}",
            serde_json::to_string_pretty(config)
                .map_err(|e| eyre!("JSON serialization failed: {}", e))?
        );
        return Ok(());
    }

    format_config_table(config, global.environment).printstd();
    Ok(())
}

fn on_off(enabled: bool) -> String {
    if enabled {
        "enabled".green().to_string()
    } else {
        "disabled".dimmed().to_string()
    }
}

fn format_config_table(config: &AppConfig, selected: Environment) -> prettytable::Table {
    let mut table = new_table();

    table.add_row(prettytable::row!["Name", config.app.name]);
    table.add_row(prettytable::row!["Version", config.app.version]);
    table.add_row(prettytable::row!["Description", config.app.description]);
    table.add_row(prettytable::row!["Debug mode", config.settings.debug_mode]);
    table.add_row(prettytable::row!["Log level", config.settings.log_level]);
    table.add_row(prettytable::row![
        "Timeout",
        f!("{}s", config.settings.default_timeout)
    ]);
    table.add_row(prettytable::row!["Max retries", config.settings.max_retries]);
    table.add_row(prettytable::row!["Buffer size", config.settings.buffer_size]);

    for env in Environment::ALL {
        let endpoint = config.api_endpoint(env).unwrap_or("-");
        let label = f!("API ({env})");
        if env == selected {
            table.add_row(prettytable::row![label.bold(), endpoint.cyan().bold()]);
        } else {
            table.add_row(prettytable::row![label, endpoint]);
        }
    }

    for (feature, enabled) in &config.features {
        table.add_row(prettytable::row![
            f!("Feature {feature}"),
            on_off(*enabled)
        ]);
    }

    table.add_row(prettytable::row![
        "Database",
        f!(
            "{}@{}:{} (timeout {}s)",
            config.database.name,
            config.database.host,
            config.database.port,
            config.database.timeout
        )
    ]);
    table.add_row(prettytable::row![
        "Webhook events",
        config.webhook.supported_events.join(", ")
    ]);
    table.add_row(prettytable::row!["Webhook endpoint", config.webhook.endpoint]);
    table.add_row(prettytable::row![
        "Webhook content type",
        config.webhook.content_type
    ]);

    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_table_has_row_per_entry() {
        let config = AppConfig::default();
        let table = format_config_table(&config, Environment::Development);

        // 8 settings rows, 3 endpoints, 4 features, database, 3 webhook rows
        assert_eq!(table.len(), 8 + 3 + 4 + 1 + 3);
    }
}
