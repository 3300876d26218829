mod export;
mod store;

use clap::{Args, Parser, Subcommand, ValueEnum};
use fastfit_core::*;
use std::path::{Path, PathBuf};
use store::SavedPlan;

#[derive(Parser)]
#[command(name = "fastfit")]
#[command(about = "Fasting-aware weekly workout planner", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Override data directory
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Read configuration from this file instead of the default location
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Show debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate this week's plan (default)
    Plan(PlanArgs),

    /// Show the last saved plan
    Show,

    /// Export the last saved plan
    Export {
        /// Output format
        #[arg(long, value_enum, default_value_t = ExportFormat::Csv)]
        format: ExportFormat,

        /// Destination file
        #[arg(long)]
        output: PathBuf,
    },

    /// List chronotypes and their preferred workout windows
    Chronotypes,
}

#[derive(Args, Default)]
struct PlanArgs {
    /// Chronotype (early, normal, late)
    #[arg(long)]
    chronotype: Option<Chronotype>,

    /// Fasting protocol as fasting:eating hours, e.g. 16:8
    #[arg(long)]
    protocol: Option<FastingProtocol>,

    /// Start of the eating window, HH:MM
    #[arg(long)]
    eat_start: Option<TimeOfDay>,

    /// Adaptation week (1 = first week of fasting)
    #[arg(long)]
    week: Option<u32>,

    /// Minimum hours between session starts
    #[arg(long)]
    rest_hours: Option<f64>,

    /// Comma-separated workout categories
    #[arg(long, value_delimiter = ',')]
    categories: Option<Vec<WorkoutCategory>>,

    /// Print the plan as JSON
    #[arg(long)]
    json: bool,

    /// Save the plan for `show` and `export`
    #[arg(long)]
    save: bool,
}

impl PlanArgs {
    /// Layer command-line overrides on top of the configured profile
    fn apply(&self, mut profile: PlanConfig) -> PlanConfig {
        if let Some(chronotype) = self.chronotype {
            profile.chronotype = chronotype;
        }
        if let Some(protocol) = self.protocol {
            profile.protocol = protocol;
        }
        if let Some(start) = self.eat_start {
            profile.eating_window_start = start;
        }
        if let Some(week) = self.week {
            profile.adaptation_week = week;
        }
        if let Some(hours) = self.rest_hours {
            profile.min_rest_hours = hours;
        }
        if let Some(ref categories) = self.categories {
            profile.categories = categories.clone();
        }
        profile
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum ExportFormat {
    Csv,
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    fastfit_core::logging::init_for_cli(cli.verbose);

    let config = match cli.config {
        Some(ref path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    let data_dir = cli.data_dir.unwrap_or_else(|| config.data.data_dir.clone());
    let plan_path = data_dir.join("plans").join("last_plan.json");

    match cli.command {
        Some(Commands::Plan(args)) => cmd_plan(&args, &config, &plan_path),
        Some(Commands::Show) => cmd_show(&plan_path),
        Some(Commands::Export { format, output }) => cmd_export(&plan_path, format, &output),
        Some(Commands::Chronotypes) => {
            cmd_chronotypes();
            Ok(())
        }
        None => {
            // Default to "plan" command
            cmd_plan(&PlanArgs::default(), &config, &plan_path)
        }
    }
}

fn cmd_plan(args: &PlanArgs, config: &Config, plan_path: &Path) -> Result<()> {
    let catalog = get_default_catalog().with_custom(&config.exercises.custom);
    let errors = catalog.validate();
    if !errors.is_empty() {
        eprintln!("Catalog validation errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        return Err(Error::CatalogValidation("Invalid catalog".into()));
    }

    let profile = args.apply(config.profile.clone());
    let plan = WeeklyScheduler::with_catalog(&catalog, config.progression.clone())
        .generate(&profile)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
    } else {
        display_plan(&plan);
    }

    if args.save {
        let saved = SavedPlan::new(plan);
        saved.save(plan_path)?;
        if !args.json {
            println!("✓ Plan saved ({})", saved.id);
        }
    }

    Ok(())
}

fn cmd_show(plan_path: &Path) -> Result<()> {
    match SavedPlan::load(plan_path)? {
        Some(saved) => {
            println!(
                "Saved plan {} (generated {})",
                saved.id,
                saved.generated_at.format("%Y-%m-%d %H:%M UTC")
            );
            display_plan(&saved.plan);
        }
        None => {
            println!("No saved plan found - run `fastfit plan --save` first.");
        }
    }
    Ok(())
}

fn cmd_export(plan_path: &Path, format: ExportFormat, output: &Path) -> Result<()> {
    let saved = SavedPlan::load(plan_path)?
        .ok_or_else(|| Error::Other("No saved plan to export - run `fastfit plan --save` first".into()))?;

    let count = match format {
        ExportFormat::Csv => export::write_csv(&saved.plan, output)?,
        ExportFormat::Json => export::write_json(&saved, output)?,
    };

    println!("✓ Exported {} sessions", count);
    println!("  File: {}", output.display());
    Ok(())
}

fn cmd_chronotypes() {
    for profile in fastfit_core::chronotype::profiles() {
        let windows: Vec<String> = profile.windows.iter().map(|w| w.to_string()).collect();
        println!("{:<8} {}", profile.chronotype, profile.description);
        println!("         windows: {}", windows.join(", "));
    }
}

fn display_plan(plan: &WeeklyPlan) {
    println!("\n╭─────────────────────────────────────────╮");
    println!(
        "│  WEEK {} PLAN  ·  {}  ·  {}",
        plan.adaptation_week, plan.chronotype, plan.protocol
    );
    println!("╰─────────────────────────────────────────╯");
    println!();
    println!(
        "  Eating window: {}   Minimum rest: {}h   Total: {} min",
        plan.eating_window,
        plan.min_rest_hours,
        plan.total_minutes()
    );
    println!();

    for session in &plan.sessions {
        println!(
            "  {}  {}  {:<14} {:>3} min  {:<6}  {}",
            session.weekday,
            session.slot,
            session.category,
            session.duration_minutes,
            session.intensity,
            session.fasting
        );

        let names: Vec<&str> = session.exercises.iter().map(|e| e.name.as_str()).collect();
        println!("       → {}", names.join(", "));

        if session.constraint_relaxed {
            if let Some(hours) = session.rest_hours {
                println!("       ⚠ Only {:.1}h rest since the previous session", hours);
            }
        }

        println!("       ℹ {}", session.advisory);
        println!();
    }
}
