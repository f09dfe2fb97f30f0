//! Othello AI Engine GUI
//!
//! A graphical interface for playing Othello against the AI or another player.

use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use othello::ui::{AppConfig, GameMode, OthelloApp};
use othello::{Difficulty, Tile};

/// Which side(s) the human controls
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum HumanSide {
    Black,
    White,
    /// Hotseat, no AI
    Both,
}

#[derive(Debug, Parser)]
#[command(name = "othello", version, about = "Play Othello against a minimax AI")]
struct Args {
    /// AI search depth preset
    #[arg(short, long, value_enum, default_value_t = Difficulty::Normal)]
    difficulty: Difficulty,

    /// Side played by the human
    #[arg(long, value_enum, default_value_t = HumanSide::Black)]
    human: HumanSide,

    /// Seed for the AI's tie-breaking coin
    #[arg(long)]
    seed: Option<u64>,
}

impl Args {
    fn app_config(&self) -> AppConfig {
        let mode = match self.human {
            HumanSide::Black => GameMode::PvE { human_color: Tile::Black },
            HumanSide::White => GameMode::PvE { human_color: Tile::White },
            HumanSide::Both => GameMode::PvP,
        };
        AppConfig {
            mode,
            difficulty: self.difficulty,
            seed: self.seed,
        }
    }
}

fn main() -> Result<(), eframe::Error> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    tracing::info!(?args, "starting");
    let config = args.app_config();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([960.0, 720.0])
            .with_min_inner_size([720.0, 540.0])
            .with_title("Othello"),
        ..Default::default()
    };

    eframe::run_native(
        "Othello",
        options,
        Box::new(move |cc| Ok(Box::new(OthelloApp::new(cc, config)))),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_args() {
        let args = Args::parse_from(["othello"]);
        assert_eq!(args.difficulty, Difficulty::Normal);
        assert_eq!(args.human, HumanSide::Black);
        assert_eq!(args.seed, None);
    }

    #[test]
    fn test_hotseat_and_seed() {
        let args = Args::parse_from(["othello", "--human", "both", "-d", "hard", "--seed", "42"]);
        let config = args.app_config();
        assert_eq!(config.mode, GameMode::PvP);
        assert_eq!(config.difficulty, Difficulty::Hard);
        assert_eq!(config.seed, Some(42));
    }
}
