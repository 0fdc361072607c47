use crate::theme::ThemePreference;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Parser)]
#[command(name = "folio", version)]
#[command(about = "A developer portfolio you scroll through in your terminal")]
pub struct CliArgs {
    /// Configuration file layered over the built-in defaults
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Portfolio content file (TOML) replacing the built-in content
    #[arg(long, value_name = "PATH")]
    pub content: Option<PathBuf>,

    /// Start with this theme for one run without saving it
    #[arg(long, value_enum)]
    pub theme: Option<ThemePreference>,

    /// Show everything immediately instead of animating it
    #[arg(long, help = "Disable all animations")]
    pub no_animations: bool,
}
