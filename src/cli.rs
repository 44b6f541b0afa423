use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::interface::PartialProfile;

/// budget-diet — Daily meal plans that fit a monthly food budget.
#[derive(Parser, Debug)]
#[command(name = "budget-diet")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Path to a food catalog (JSON or CSV). Uses the built-in catalog when omitted.
    #[arg(short, long, global = true)]
    pub catalog: Option<PathBuf>,

    /// Path to a JSON planner configuration file.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

/// Profile fields shared by the subcommands.
#[derive(Args, Debug, Clone, Default)]
pub struct ProfileArgs {
    /// Age in years.
    #[arg(long)]
    pub age: Option<u32>,

    /// male or female.
    #[arg(long)]
    pub gender: Option<String>,

    /// Weight in kg.
    #[arg(long)]
    pub weight: Option<f64>,

    /// Height in cm.
    #[arg(long)]
    pub height: Option<f64>,

    /// sedentary, light, moderate, active or very_active.
    #[arg(long)]
    pub activity: Option<String>,

    /// weight_loss, maintain or gain_muscle.
    #[arg(long)]
    pub goal: Option<String>,
}

impl From<ProfileArgs> for PartialProfile {
    fn from(args: ProfileArgs) -> Self {
        PartialProfile {
            age: args.age,
            gender: args.gender,
            weight: args.weight,
            height: args.height,
            activity: args.activity,
            goal: args.goal,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate a diet plan for a profile and monthly budget.
    Plan {
        #[command(flatten)]
        profile: ProfileArgs,

        /// Monthly food budget.
        #[arg(short, long)]
        budget: Option<f64>,

        /// Seed for reproducible item selection.
        #[arg(long)]
        seed: Option<u64>,

        /// Print the plan as JSON instead of a table.
        #[arg(long)]
        json: bool,

        /// Skip the remote generator and use the local algorithm only.
        #[arg(long)]
        offline: bool,
    },

    /// Show BMR, TDEE and the daily calorie target for a profile.
    Calories {
        #[command(flatten)]
        profile: ProfileArgs,
    },

    /// Search the catalog, or list items affordable for each meal slot.
    Catalog {
        /// Case-insensitive name filter. Without it the first items are listed.
        #[arg(short, long)]
        query: Option<String>,

        /// Monthly food budget; lists affordable items per slot instead.
        #[arg(short, long, conflicts_with = "query")]
        budget: Option<f64>,
    },
}
