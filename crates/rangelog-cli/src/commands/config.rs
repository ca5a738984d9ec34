use clap::Subcommand;
use rangelog_core::storage::Config;

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Get a value by dotted key (e.g. trend.moving_average_window)
    Get { key: String },
    /// Set a value by dotted key
    Set { key: String, value: String },
    /// Print the full configuration
    List,
}

pub fn run(action: ConfigAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ConfigAction::Get { key } => {
            let config = Config::load()?;
            match config.get(&key) {
                Some(value) => println!("{value}"),
                None => return Err(format!("unknown config key: {key}").into()),
            }
        }
        ConfigAction::Set { key, value } => {
            let mut config = Config::load()?;
            config.set(&key, &value)?;
            println!("{key} = {value}");
        }
        ConfigAction::List => {
            let config = Config::load()?;
            println!("{}", toml::to_string_pretty(&config)?);
        }
    }
    Ok(())
}
