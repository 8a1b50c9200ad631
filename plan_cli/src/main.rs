use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use plan_core::*;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "fitplan")]
#[command(about = "Weekly training plan generator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Override data directory
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate this week's training plan (default)
    Plan {
        /// Emit the plan as JSON instead of formatted output
        #[arg(long)]
        json: bool,

        /// Override the current time (RFC 3339, for reproducible output)
        #[arg(long)]
        now: Option<String>,
    },

    /// Recommend a weekly training frequency
    Frequency,

    /// Show daily calorie and macro targets
    Nutrition,

    /// Log a completed session
    Complete {
        /// Session focus (strength, hypertrophy, metabolic, performance)
        focus: String,

        /// Mark the session as ended early
        #[arg(long)]
        early: bool,
    },

    /// Show recently completed sessions
    History {
        /// Window in days (defaults to the configured history window)
        #[arg(long)]
        days: Option<i64>,
    },

    /// Import a profile from a JSON file
    InitProfile {
        /// Path to a profile JSON file
        file: PathBuf,
    },
}

fn main() -> Result<()> {
    plan_core::logging::init();

    let cli = Cli::parse();

    let config = Config::load()?;
    let data_dir = cli.data_dir.unwrap_or_else(|| config.data.data_dir.clone());

    match cli.command {
        Some(Commands::Plan { json, now }) => cmd_plan(data_dir, json, now),
        Some(Commands::Frequency) => cmd_frequency(data_dir),
        Some(Commands::Nutrition) => cmd_nutrition(data_dir),
        Some(Commands::Complete { focus, early }) => cmd_complete(data_dir, &focus, early),
        Some(Commands::History { days }) => cmd_history(data_dir, days, &config),
        Some(Commands::InitProfile { file }) => cmd_init_profile(data_dir, &file),
        None => cmd_plan(data_dir, false, None),
    }
}

fn profile_path(data_dir: &Path) -> PathBuf {
    data_dir.join("profile.json")
}

fn history_path(data_dir: &Path) -> PathBuf {
    data_dir.join("completions.csv")
}

fn require_profile(data_dir: &Path) -> Result<UserProfile> {
    UserProfile::load(&profile_path(data_dir))?.ok_or_else(|| {
        Error::Profile(format!(
            "No profile found at {:?}. Run `fitplan init-profile <file>` first.",
            profile_path(data_dir)
        ))
    })
}

fn validated_catalog() -> Result<Catalog> {
    let catalog = build_default_catalog();
    let errors = catalog.validate();
    if !errors.is_empty() {
        eprintln!("Catalog validation errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        return Err(Error::CatalogValidation("Invalid catalog".into()));
    }
    Ok(catalog)
}

fn cmd_plan(data_dir: PathBuf, json: bool, now_override: Option<String>) -> Result<()> {
    let profile = require_profile(&data_dir)?;
    let catalog = validated_catalog()?;

    let now = match now_override {
        Some(raw) => DateTime::parse_from_rfc3339(&raw)
            .map_err(|e| Error::Other(format!("Invalid --now timestamp: {}", e)))?
            .with_timezone(&Utc),
        None => Utc::now(),
    };

    let plan = generate_weekly_plan(&profile, &catalog, now);

    if json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
    } else {
        display_plan(&plan);
    }

    Ok(())
}

fn cmd_frequency(data_dir: PathBuf) -> Result<()> {
    let profile = require_profile(&data_dir)?;
    let recommendation = calculate_recommended_frequency(&profile);

    println!("\n╭─────────────────────────────────────────╮");
    println!("│  RECOMMENDED FREQUENCY");
    println!("╰─────────────────────────────────────────╯");
    println!();
    println!("  {} days per week", recommendation.days);
    println!("  {}", recommendation.reason);

    if safety_conflict(&profile, &recommendation) {
        println!();
        println!(
            "  ⚠ Warning: your chosen frequency ({} days) exceeds the safe ceiling of {} days.",
            profile.sessions_per_week, recommendation.days
        );
    }

    println!();
    Ok(())
}

fn cmd_nutrition(data_dir: PathBuf) -> Result<()> {
    let profile = require_profile(&data_dir)?;
    let plan = calculate_nutrition(&profile);

    println!("\n╭─────────────────────────────────────────╮");
    println!("│  DAILY NUTRITION TARGETS");
    println!("╰─────────────────────────────────────────╯");
    println!();
    println!("  Calories: {} kcal", plan.calories);
    println!("  Protein:  {} g", plan.protein_g);
    println!("  Carbs:    {} g", plan.carbs_g);
    println!("  Fats:     {} g", plan.fats_g);
    println!();
    println!("  Key micros: {}", plan.key_micros.join(", "));
    println!();
    Ok(())
}

fn cmd_complete(data_dir: PathBuf, focus: &str, early: bool) -> Result<()> {
    let focus = parse_focus(focus)
        .ok_or_else(|| Error::Other(format!("Unknown focus: {}", focus)))?;

    let record = CompletedSessionRecord {
        id: uuid::Uuid::new_v4(),
        date: Utc::now(),
        focus,
        status: if early {
            CompletionStatus::Early
        } else {
            CompletionStatus::Full
        },
    };

    append_record(&history_path(&data_dir), &record)?;
    println!("✓ Logged {} session", focus);
    Ok(())
}

fn cmd_history(data_dir: PathBuf, days: Option<i64>, config: &Config) -> Result<()> {
    let days = days.unwrap_or(config.history.window_days);
    let records = load_recent(&history_path(&data_dir), Utc::now(), days)?;

    if records.is_empty() {
        println!("No completed sessions in the last {} days.", days);
        return Ok(());
    }

    println!("\nCompleted sessions (last {} days):", days);
    for record in records {
        let marker = match record.status {
            CompletionStatus::Full => "✓",
            CompletionStatus::Early => "◐",
        };
        println!(
            "  {} {}  {}",
            marker,
            record.date.format("%Y-%m-%d %H:%M"),
            record.focus
        );
    }
    println!();
    Ok(())
}

fn cmd_init_profile(data_dir: PathBuf, file: &Path) -> Result<()> {
    let contents = std::fs::read_to_string(file)?;
    let profile: UserProfile = serde_json::from_str(&contents)
        .map_err(|e| Error::Profile(format!("Profile file {:?} is malformed: {}", file, e)))?;

    let path = profile_path(&data_dir);
    profile.save(&path)?;
    println!("✓ Profile saved to {}", path.display());
    Ok(())
}

fn parse_focus(raw: &str) -> Option<WorkoutFocus> {
    match raw.to_lowercase().as_str() {
        "strength" => Some(WorkoutFocus::Strength),
        "hypertrophy" => Some(WorkoutFocus::Hypertrophy),
        "metabolic" => Some(WorkoutFocus::Metabolic),
        "performance" => Some(WorkoutFocus::Performance),
        _ => None,
    }
}

fn display_plan(plan: &WeeklyPlan) {
    println!("\n╭─────────────────────────────────────────╮");
    println!("│  WEEKLY TRAINING PLAN (week {})", plan.week_number);
    println!("╰─────────────────────────────────────────╯");

    for session in &plan.sessions {
        println!();
        println!("  ── {} · {} ──", session.date.format("%a %Y-%m-%d"), session.focus);

        for step in &session.warmup {
            println!("    Warmup: {} ({} min)", step.name, step.duration_min);
        }

        for entry in &session.exercises {
            let sets = entry.sets.len();
            let reps = entry.sets.first().map(|s| s.reps).unwrap_or(0);
            println!("    {} — {}x{}", entry.exercise.name, sets, reps);

            if entry.is_substitute {
                if let Some(ref replaced) = entry.replaced_exercise_name {
                    println!("      (substituted for {})", replaced);
                }
            }
            if !entry.notes.is_empty() {
                println!("      {}", entry.notes);
            }
        }

        println!(
            "    Finisher: {} ({} min)",
            session.cardio_finisher.name, session.cardio_finisher.duration_min
        );

        for step in &session.cooldown {
            println!("    Cooldown: {} ({} min)", step.name, step.duration_min);
        }
    }

    println!();
}
