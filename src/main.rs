//! Adaptrack - Adaptive Training Progress Engine
//!
//! Status-inspection entry point: prints the stored streak, weekly progress,
//! and matching achievements for a user.

use adaptrack::{FileProgressStore, ProgressEngine};
use anyhow::Context;
use chrono::Utc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use uuid::Uuid;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Adaptrack v{}", env!("CARGO_PKG_VERSION"));

    let user_id = match std::env::args().nth(1) {
        Some(arg) => Uuid::parse_str(&arg).context("user id must be a UUID")?,
        None => Uuid::nil(),
    };

    let config = adaptrack::storage::load_config().context("failed to load configuration")?;
    let store = FileProgressStore::default_location();
    let engine = ProgressEngine::open(user_id, config, store)
        .context("failed to open progress engine")?;

    print_status(&engine);
    Ok(())
}

fn print_status(engine: &ProgressEngine<FileProgressStore>) {
    let streak = engine.get_streak_status(Utc::now());
    let weekly = engine.get_weekly_progress();

    println!("Streak: {} days", streak.current_streak);
    println!("  {}", streak.message);
    if streak.is_on_streak {
        println!("  {} day(s) left before the streak breaks", streak.days_until_break);
    }

    println!(
        "This week: {}/{} workouts ({:.0}%)",
        weekly.completed, weekly.target, weekly.percentage
    );
    println!("Lifetime workouts: {}", engine.state().total_workouts);

    let achievements = engine.check_achievements();
    if achievements.is_empty() {
        println!("No milestones right now.");
    } else {
        println!("Milestones:");
        for id in achievements {
            println!("  - {} ({id})", id.title());
        }
    }
}
