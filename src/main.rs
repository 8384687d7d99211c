/// Main entry point for the wellness tracker CLI
///
/// This file sets up logging, parses command line arguments, opens the
/// tracker against its database, and dispatches one subcommand. Mutating
/// subcommands persist before exit.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;

use wellness_tracker::{MetricKind, WellnessTracker};

/// Get the default database path with robust fallback strategy
fn get_default_database_path() -> Result<PathBuf, Box<dyn std::error::Error>> {
    // Try various locations in order of preference
    let potential_paths = [
        // 1. User's home directory (preferred)
        dirs::home_dir().map(|mut p| {
            p.push(".wellness_tracker");
            p
        }),
        // 2. User's data directory (platform-specific)
        dirs::data_dir().map(|mut p| {
            p.push("wellness_tracker");
            p
        }),
        // 3. User's config directory
        dirs::config_dir().map(|mut p| {
            p.push("wellness_tracker");
            p
        }),
        // 4. Current working directory (last resort)
        std::env::current_dir().ok().map(|mut p| {
            p.push(".wellness_tracker");
            p
        }),
    ];

    for potential_path in potential_paths.iter().flatten() {
        // Try to create the directory
        if let Ok(()) = std::fs::create_dir_all(potential_path) {
            // Test if we can write to this directory
            let test_file = potential_path.join(".test_write");
            if std::fs::write(&test_file, "test").is_ok() {
                let _ = std::fs::remove_file(&test_file); // Clean up test file
                let mut db_path = potential_path.clone();
                db_path.push("wellness.db");
                return Ok(db_path);
            }
        }
    }

    // Ultimate fallback: use a temporary directory
    let mut temp_path = std::env::temp_dir();
    temp_path.push("wellness_tracker");
    std::fs::create_dir_all(&temp_path)?;
    temp_path.push("wellness.db");

    tracing::warn!("Using temporary directory for database: {}", temp_path.display());
    Ok(temp_path)
}

/// Command line arguments for the wellness tracker CLI
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the SQLite database file
    /// If not provided, uses a default location in the user's home directory
    #[arg(long)]
    database: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// Enable verbose output (implies debug)
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show the dashboard snapshot (the default)
    Dashboard,
    /// Manage habits
    Habit {
        #[command(subcommand)]
        action: HabitAction,
    },
    /// Log today's mood
    Mood {
        /// The mood emoji (e.g. 😊)
        emoji: String,
        /// Optional note
        #[arg(long, default_value = "")]
        note: String,
    },
    /// Add water intake in milliliters
    Water { ml: u32 },
    /// Record today's step count
    Steps { count: u32 },
    /// Show the notification feed
    Notifications {
        /// Mark everything read after showing it
        #[arg(long)]
        mark_read: bool,
    },
    /// Replace the notification feed with demo samples
    SeedDemo,
}

#[derive(Subcommand, Debug)]
enum HabitAction {
    /// Create a new habit
    Add {
        name: String,
        #[arg(default_value = "")]
        description: String,
    },
    /// Mark a habit completed for today
    Done { name: String },
    /// Remove today's completion from a habit
    Undo { name: String },
    /// List all habits with streaks
    List,
    /// Delete a habit
    Remove { name: String },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Set up logging based on command line flags
    let log_level = if args.verbose {
        "debug"
    } else if args.debug {
        "info"
    } else {
        "warn"
    };

    tracing_subscriber::fmt()
        .with_env_filter(format!("wellness_tracker={}", log_level))
        .with_writer(std::io::stderr) // Send logs to stderr, not stdout
        .init();

    // Determine database path
    let db_path = match args.database {
        Some(path) => {
            // Validate and prepare the provided path
            if let Some(parent) = path.parent() {
                if !parent.exists() {
                    std::fs::create_dir_all(parent)?;
                }
            }
            path
        }
        None => get_default_database_path()?,
    };

    info!("Using database at: {}", db_path.display());

    let tracker = WellnessTracker::open(db_path)?;

    match args.command.unwrap_or(Command::Dashboard) {
        Command::Dashboard => {
            show_dashboard(&tracker)?;
        }
        Command::Habit { action } => {
            run_habit_action(&tracker, action)?;
            tracker.persist()?;
        }
        Command::Mood { emoji, note } => {
            tracker
                .moods()
                .lock()
                .map_err(|_| "mood store is poisoned")?
                .log(&emoji, &note);
            tracker.persist()?;
            println!("Logged mood {}", emoji);
        }
        Command::Water { ml } => {
            let counters = tracker.counters();
            let mut counters = counters.lock().map_err(|_| "counter store is poisoned")?;
            counters.increment_today(MetricKind::Water, ml);
            let current = counters.get_today(MetricKind::Water);
            let goal = counters.goal(MetricKind::Water);
            drop(counters);
            tracker.persist()?;
            println!("Water today: {} / {} ml", current, goal);
        }
        Command::Steps { count } => {
            let counters = tracker.counters();
            counters
                .lock()
                .map_err(|_| "counter store is poisoned")?
                .set_today(MetricKind::Steps, count);
            tracker.persist()?;
            println!("Steps today: {}", count);
        }
        Command::Notifications { mark_read } => {
            show_notifications(&tracker, mark_read)?;
            if mark_read {
                tracker.persist()?;
            }
        }
        Command::SeedDemo => {
            tracker
                .notifications()
                .lock()
                .map_err(|_| "notification store is poisoned")?
                .seed_samples();
            tracker.persist()?;
            println!("Seeded demo notifications");
        }
    }

    Ok(())
}

/// Print the dashboard snapshot
fn show_dashboard(tracker: &WellnessTracker) -> Result<(), Box<dyn std::error::Error>> {
    let snapshot = tracker.metrics().dashboard_snapshot()?;
    let weekly_water = tracker.metrics().weekly_water_average()?;
    let weekly_mood = tracker.metrics().weekly_mood_average()?;

    println!(
        "Habits: {} / {} completed today",
        snapshot.habits_completed_today, snapshot.habits_total
    );
    println!(
        "Water:  {} / {} ml (weekly avg {:.0} ml)",
        snapshot.current_water_ml, snapshot.water_goal_ml, weekly_water
    );
    println!("Steps:  {} / {}", snapshot.step_count, snapshot.step_goal);
    match snapshot.today_mood_emoji {
        Some(emoji) => println!("Mood:   {} (weekly avg {:.1})", emoji, weekly_mood),
        None => println!("Mood:   not logged yet (weekly avg {:.1})", weekly_mood),
    }
    println!("Unread notifications: {}", snapshot.unread_notifications);
    Ok(())
}

/// Dispatch one habit subcommand
fn run_habit_action(
    tracker: &WellnessTracker,
    action: HabitAction,
) -> Result<(), Box<dyn std::error::Error>> {
    let habits = tracker.habits();
    let mut habits = habits.lock().map_err(|_| "habit store is poisoned")?;

    match action {
        HabitAction::Add { name, description } => {
            habits.add(&name, &description)?;
            println!("Added habit '{}'", name);
        }
        HabitAction::Done { name } => {
            let id = match habits.find_by_name(&name).first() {
                Some(habit) => habit.id.clone(),
                None => return Err(format!("No habit named '{}'", name).into()),
            };
            habits.mark_completed_today(&id)?;
            let streak = habits.get(&id).map(|h| h.streak).unwrap_or(0);
            println!("Completed '{}' (streak: {})", name, streak);
        }
        HabitAction::Undo { name } => {
            let id = match habits.find_by_name(&name).first() {
                Some(habit) => habit.id.clone(),
                None => return Err(format!("No habit named '{}'", name).into()),
            };
            habits.mark_incomplete_today(&id)?;
            println!("Removed today's completion for '{}'", name);
        }
        HabitAction::List => {
            if habits.is_empty() {
                println!("No habits yet");
            } else {
                for habit in habits.habits() {
                    let done = if habit.is_completed(tracker.clock().today()) {
                        "✓"
                    } else {
                        " "
                    };
                    println!("[{}] {} (streak: {})", done, habit.name, habit.streak);
                }
                println!(
                    "Weekly completion: {}%",
                    habits.weekly_completion_percentage()
                );
            }
        }
        HabitAction::Remove { name } => {
            let matches: Vec<_> = habits
                .find_by_name(&name)
                .iter()
                .map(|h| h.id.clone())
                .collect();
            if matches.is_empty() {
                return Err(format!("No habit named '{}'", name).into());
            }
            if matches.len() > 1 {
                tracing::warn!("{} habits named '{}'; removing the first", matches.len(), name);
            }
            habits.remove(&matches[0]);
            println!("Removed habit '{}'", name);
        }
    }

    Ok(())
}

/// Print the notification feed, optionally marking it read
fn show_notifications(
    tracker: &WellnessTracker,
    mark_read: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let notifications = tracker.notifications();
    let mut notifications = notifications
        .lock()
        .map_err(|_| "notification store is poisoned")?;

    if notifications.is_empty() {
        println!("No notifications");
        return Ok(());
    }

    for notification in notifications.notifications() {
        let marker = if notification.is_read { " " } else { "*" };
        println!(
            "{} {} {} - {}",
            marker,
            notification.icon(),
            notification.title,
            notification.message
        );
    }

    if mark_read {
        notifications.mark_all_read();
    }

    Ok(())
}
