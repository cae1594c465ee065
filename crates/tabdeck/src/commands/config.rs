use colored::Colorize;

use crate::cli::ConfigCommands;
use crate::config::Config;

pub fn run(command: ConfigCommands) -> anyhow::Result<()> {
    match command {
        ConfigCommands::Show => show(),
        ConfigCommands::Set { key, value } => set(&key, &value),
    }
}

fn show() -> anyhow::Result<()> {
    let path = Config::path()?;
    let config = Config::load_or_default();

    println!("{} {}", "Config file:".bold(), path.display());
    if !path.exists() {
        println!("{}", "(not created yet, showing defaults)".dimmed());
    }
    println!();

    let rows = [
        ("defaults.theme", config.theme().map(str::to_string), "light"),
        (
            "defaults.transition",
            config.transition().map(str::to_string),
            "slide",
        ),
        (
            "defaults.start_topic",
            config.start_topic().map(|t| t.id().to_string()),
            "intro",
        ),
    ];
    for (key, value, default) in rows {
        match value {
            Some(v) => println!("  {:<22} {}", key, v.green()),
            None => println!("  {:<22} {}", key, format!("{default} (default)").dimmed()),
        }
    }
    Ok(())
}

fn set(key: &str, value: &str) -> anyhow::Result<()> {
    let mut config = Config::load_or_default();
    config.set(key, value)?;
    let path = config.save()?;
    tracing::debug!("wrote {}", path.display());
    println!("{} {key} = {value}", "Set".green().bold());
    Ok(())
}
