use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "orthoview_viewer=debug,orthoview_core=info,warn";

#[derive(Parser, Debug, Clone)]
#[command(name = "orthoview", about = "Inspect an image with zoom and drag-to-pan")]
#[command(version)]
pub struct Config {
    /// Image to open on startup
    pub image: Option<PathBuf>,

    /// Colour theme to start with
    #[arg(long, value_enum, default_value_t = ThemeChoice::Dark)]
    pub theme: ThemeChoice,

    /// Log filter directives, e.g. "orthoview_core=debug". Overrides RUST_LOG.
    #[arg(long)]
    pub log_filter: Option<String>,
}

#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ThemeChoice {
    Light,
    #[default]
    Dark,
}

impl ThemeChoice {
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn theme(self) -> iced::Theme {
        match self {
            Self::Light => iced::Theme::Light,
            Self::Dark => iced::Theme::Dark,
        }
    }
}

impl Config {
    /// `--log-filter` first, then `RUST_LOG`, then the built-in default.
    pub fn env_filter(&self) -> EnvFilter {
        if let Some(directives) = &self.log_filter {
            return EnvFilter::new(directives);
        }
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
    }
}
