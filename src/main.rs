use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

use headlines::app::App;
use headlines::catalog::Catalog;
use headlines::config::Config;
use headlines::theme::ThemeVariant;
use headlines::ui;

/// Get the config directory path (~/.config/headlines/)
fn get_config_dir() -> Result<PathBuf> {
    let home = std::env::var("HOME").context("HOME environment variable not set")?;
    Ok(PathBuf::from(home).join(".config").join("headlines"))
}

#[derive(Parser, Debug)]
#[command(
    name = "headlines",
    about = "Terminal news reader demo with bookmarks and theme switching"
)]
struct Args {
    /// Theme to start with ("light" or "dark"); overrides the config file
    #[arg(long, value_name = "NAME")]
    theme: Option<String>,

    /// Load the article catalog from a TOML file instead of the built-in set
    #[arg(long, value_name = "FILE")]
    articles: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing for debug logging
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let config_dir = get_config_dir()?;
    let config =
        Config::load(&config_dir.join("config.toml")).context("Failed to load configuration")?;

    // CLI theme wins over config; an unknown name is an error
    let theme_name = args.theme.as_deref().unwrap_or(&config.theme);
    let theme = ThemeVariant::from_str_name(theme_name).ok_or_else(|| {
        anyhow::anyhow!(
            "Unknown theme '{}' (expected 'light' or 'dark')",
            theme_name
        )
    })?;

    // CLI catalog path wins over config; neither means the built-in catalog
    let catalog = match args.articles.as_ref().or(config.articles_file.as_ref()) {
        Some(path) => Catalog::load(path)
            .with_context(|| format!("Failed to load articles from {}", path.display()))?,
        None => Catalog::builtin().context("Failed to load built-in article catalog")?,
    };

    let mut app = App::new(catalog, theme);

    // Apply keybinding overrides from config
    for warning in app.keybindings.apply_overrides(&config.keybindings) {
        tracing::warn!("{}", warning);
    }

    ui::run(&mut app).await?;

    println!("Goodbye!");
    Ok(())
}
