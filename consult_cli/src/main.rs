use clap::{Parser, Subcommand};
use consult_core::*;
use serde_json::{json, Map, Value};
use std::io::{self, Read};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "consult")]
#[command(about = "Personalized fitness and nutrition consultations", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file (defaults to the standard config path)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Print the HTTP response body (`{"advice": ...}`) instead of plain text
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate advice from command-line values
    Advise {
        /// Consultation type (fitness or nutrition)
        #[arg(long = "type", default_value = "nutrition")]
        kind: String,

        /// Age in years
        #[arg(long)]
        age: String,

        /// Weight in kg
        #[arg(long)]
        weight: String,

        /// Height in cm
        #[arg(long)]
        height: String,

        /// weight-loss, muscle-gain, maintenance, endurance or general-health
        #[arg(long)]
        goal: String,

        /// sedentary, light, moderate, active or athlete
        #[arg(long)]
        activity: Option<String>,

        /// Dietary preferences, e.g. "vegetarian"
        #[arg(long)]
        diet: Option<String>,

        /// Food allergies
        #[arg(long)]
        allergies: Option<String>,

        /// Health conditions
        #[arg(long)]
        conditions: Option<String>,
    },

    /// Generate advice from a JSON request body ("-" reads stdin)
    File {
        path: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    consult_core::logging::init_with_level(&config.logging.level);

    let body = match cli.command {
        Commands::Advise {
            kind,
            age,
            weight,
            height,
            goal,
            activity,
            diet,
            allergies,
            conditions,
        } => {
            let mut fields = Map::new();
            fields.insert("type".into(), Value::String(kind));
            fields.insert("age".into(), Value::String(age));
            fields.insert("weight".into(), Value::String(weight));
            fields.insert("height".into(), Value::String(height));
            fields.insert("goal".into(), Value::String(goal));
            let optional = [
                ("activityLevel", activity),
                ("dietaryPreferences", diet),
                ("allergies", allergies),
                ("healthConditions", conditions),
            ];
            for (key, value) in optional {
                if let Some(value) = value {
                    fields.insert(key.into(), Value::String(value));
                }
            }
            Value::Object(fields)
        }
        Commands::File { path } => serde_json::from_slice(&read_input(&path)?)?,
    };

    let request = ConsultationRequest::from_value(&body)?;
    tracing::debug!(kind = ?request.kind, goal = %request.goal.label(), "Running consultation");
    let report = consult(&request);

    if cli.json {
        println!("{}", json!({ "advice": report.as_str() }));
    } else {
        print!("{}", report);
    }

    Ok(())
}

fn read_input(path: &Path) -> Result<Vec<u8>> {
    let mut contents = Vec::new();
    if path.as_os_str() == "-" {
        io::stdin().read_to_end(&mut contents)?;
    } else {
        contents = std::fs::read(path)?;
    }
    Ok(contents)
}
