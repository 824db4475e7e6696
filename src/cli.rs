//! Command line arguments.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::core::Theme;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// RNG seed; the same seed deals the same pieces
    #[arg(long)]
    pub seed: Option<u32>,

    /// Save file (defaults to the user data directory)
    #[arg(long, conflicts_with = "no_save")]
    pub save: Option<PathBuf>,

    /// Neither load nor write a save file
    #[arg(long)]
    pub no_save: bool,

    /// Where log output goes; logging is off without it
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Color theme. Neon and retro must be bought in the shop first
    #[arg(long, value_enum)]
    pub theme: Option<ThemeArg>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ThemeArg {
    Classic,
    Neon,
    Retro,
}

impl From<ThemeArg> for Theme {
    fn from(arg: ThemeArg) -> Self {
        match arg {
            ThemeArg::Classic => Theme::Classic,
            ThemeArg::Neon => Theme::Neon,
            ThemeArg::Retro => Theme::Retro,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_flags() {
        let args = Args::parse_from(["blockfall", "--seed", "42", "--no-save", "--theme", "neon"]);
        assert_eq!(args.seed, Some(42));
        assert!(args.no_save);
        assert_eq!(args.theme, Some(ThemeArg::Neon));
        assert!(args.save.is_none());
    }

    #[test]
    fn save_conflicts_with_no_save() {
        let res = Args::try_parse_from(["blockfall", "--save", "x.json", "--no-save"]);
        assert!(res.is_err());
    }
}
