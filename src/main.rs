use std::fs;
use std::path::PathBuf;

use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use habit_engine::{
    config::Settings,
    models::UserSnapshot,
    scoring::{self, HabitEngine},
};
use tracing::{error, info};

#[derive(Parser)]
#[clap(name = "habit-engine")]
#[clap(about = "Gamification calculator for habit tracking", long_about = None)]
struct Cli {
    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a full evaluation pass over a user snapshot
    Evaluate {
        /// Path to a JSON user snapshot (stats + habit histories)
        #[clap(short, long)]
        snapshot: PathBuf,

        /// Evaluation date, defaults to today (YYYY-MM-DD)
        #[clap(long)]
        today: Option<NaiveDate>,

        /// Emit the report as JSON instead of text
        #[clap(long)]
        json: bool,
    },

    /// Show level and progress for an XP value
    Level {
        #[clap(short, long, allow_hyphen_values = true)]
        xp: i64,
    },

    /// Show current and next rank for an XP value
    Rank {
        #[clap(short, long)]
        xp: u64,
    },

    /// Show the XP reward for a habit difficulty (1-5)
    Reward {
        #[clap(short, long)]
        difficulty: u8,
    },

    /// Compute the current streak from a user snapshot
    Streak {
        /// Path to a JSON user snapshot
        #[clap(short, long)]
        snapshot: PathBuf,

        /// Restrict to a single habit id (default: user-level aggregate)
        #[clap(long)]
        habit: Option<String>,

        /// Evaluation date, defaults to today (YYYY-MM-DD)
        #[clap(long)]
        today: Option<NaiveDate>,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let settings = Settings::new().unwrap_or_else(|_| {
        info!("Using default settings");
        Settings::default()
    });

    if let Err(e) = settings.validate() {
        error!("Invalid settings: {}", e);
        return Err(anyhow::anyhow!(e));
    }

    match cli.command {
        Commands::Evaluate {
            snapshot,
            today,
            json,
        } => {
            let snapshot = load_snapshot(&snapshot)?;
            let today = today.unwrap_or_else(|| Local::now().date_naive());
            info!("Evaluating user {} as of {}", snapshot.user_id, today);

            let engine = HabitEngine::new(settings)?;
            let report = engine.evaluate(&snapshot, today)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("\n=== Gamification Report ===");
                println!("User: {}", report.user_id);
                println!("XP: {}", report.stats.xp);
                println!(
                    "Level: {} ({}% to level {})",
                    report.level.level,
                    report.level.progress_percent,
                    report.level.level + 1
                );
                match &report.rank.next {
                    Some(next) => println!(
                        "Rank: {} ({} XP to {})",
                        report.rank.current.name, next.xp_required, next.rank.name
                    ),
                    None => println!("Rank: {} (max rank)", report.rank.current.name),
                }
                println!("Current streak: {} days", report.stats.current_streak);
                println!("Longest streak: {} days", report.stats.longest_streak);
                println!("Total completions: {}", report.stats.total_completions);

                if report.newly_unlocked.is_empty() {
                    println!("No new achievements");
                } else {
                    println!("Newly unlocked (+{} XP):", report.xp_awarded);
                    for a in &report.newly_unlocked {
                        println!("  {} (+{} XP)", a.id, a.xp_reward);
                    }
                }
            }
        }

        Commands::Level { xp } => {
            let progress = scoring::level_progress(xp)?;
            println!(
                "Level {} — {} / {} XP in level ({}%)",
                progress.level,
                progress.xp_in_level,
                progress.xp_for_next_level,
                progress.progress_percent
            );
        }

        Commands::Rank { xp } => {
            let status = scoring::rank_status(xp, &settings.gamification.ranks)?;
            println!("Rank: {}", status.current.name);
            match status.next {
                Some(next) => println!(
                    "Next: {} in {} XP ({}% there)",
                    next.rank.name, next.xp_required, next.progress
                ),
                None => println!("Max rank reached"),
            }
        }

        Commands::Reward { difficulty } => {
            let reward = scoring::xp_reward_for(difficulty, settings.gamification.base_xp)?;
            println!("Difficulty {} completion awards {} XP", difficulty, reward);
        }

        Commands::Streak {
            snapshot,
            habit,
            today,
        } => {
            let snapshot = load_snapshot(&snapshot)?;
            let today = today.unwrap_or_else(|| Local::now().date_naive());
            let lookback = settings.gamification.lookback_days;

            let streak = match habit {
                Some(id) => {
                    let habit = snapshot
                        .habits
                        .iter()
                        .find(|h| h.habit_id == id)
                        .ok_or_else(|| anyhow::anyhow!("No habit with id: {}", id))?;
                    scoring::compute_streak(&habit.records, today, lookback)
                }
                None => scoring::compute_user_streak(&snapshot.habits, today, lookback),
            };
            println!("Streak as of {}: {} days", today, streak);
        }
    }

    Ok(())
}

fn load_snapshot(path: &PathBuf) -> anyhow::Result<UserSnapshot> {
    let raw = fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", path.display(), e))?;
    Ok(serde_json::from_str(&raw)?)
}
