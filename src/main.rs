use std::path::Path;

use clap::Parser;

use budget_diet_rs::catalog::{default_catalog, load_catalog, FoodCatalog};
use budget_diet_rs::cli::{Cli, Command, ProfileArgs};
use budget_diet_rs::config::PlannerConfig;
use budget_diet_rs::error::Result;
use budget_diet_rs::generation::DietPlanService;
use budget_diet_rs::interface::{
    check_monthly_budget, complete_profile, display_affordable, display_energy, display_outcome,
    display_search, prompt_monthly_budget,
};
use budget_diet_rs::logging::init_logging;
use budget_diet_rs::planner::{daily_budget, energy_breakdown, RandomPicker};

fn main() {
    init_logging();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let catalog = open_catalog(cli.catalog.as_deref())?;

    match cli.command {
        Command::Plan {
            profile,
            budget,
            seed,
            json,
            offline,
        } => cmd_plan(
            &catalog,
            cli.config.as_deref(),
            profile,
            budget,
            seed,
            json,
            offline,
        ),
        Command::Calories { profile } => cmd_calories(profile),
        Command::Catalog { query, budget } => cmd_catalog(&catalog, query, budget),
    }
}

fn open_catalog(path: Option<&Path>) -> Result<FoodCatalog> {
    match path {
        Some(p) => load_catalog(p),
        None => Ok(default_catalog()),
    }
}

/// Generate and display a plan.
fn cmd_plan(
    catalog: &FoodCatalog,
    config_path: Option<&Path>,
    profile: ProfileArgs,
    budget: Option<f64>,
    seed: Option<u64>,
    json: bool,
    offline: bool,
) -> Result<()> {
    let mut config = PlannerConfig::load(config_path)?;
    if offline {
        config.remote.enabled = false;
    }

    let profile = complete_profile(profile.into())?;
    let monthly_budget = match budget {
        Some(b) => check_monthly_budget(b)?,
        None => prompt_monthly_budget()?,
    };

    let mut picker = match seed {
        Some(s) => RandomPicker::seeded(s),
        None => RandomPicker::from_entropy(),
    };

    let service = DietPlanService::from_config(&config);
    let outcome = service.generate(&profile, monthly_budget, catalog.items(), &mut picker);

    if json {
        println!("{}", serde_json::to_string_pretty(outcome.plan())?);
    } else {
        display_outcome(&outcome);
    }

    Ok(())
}

/// Show energy figures for a profile.
fn cmd_calories(profile: ProfileArgs) -> Result<()> {
    let profile = complete_profile(profile.into())?;
    display_energy(&profile, &energy_breakdown(&profile));
    Ok(())
}

/// Search the catalog, or list affordable items per slot under a budget.
fn cmd_catalog(catalog: &FoodCatalog, query: Option<String>, budget: Option<f64>) -> Result<()> {
    match budget {
        Some(b) => {
            let monthly_budget = check_monthly_budget(b)?;
            display_affordable(catalog, daily_budget(monthly_budget));
        }
        None => {
            let query = query.unwrap_or_default();
            display_search(&query, &catalog.lookup(&query));
        }
    }
    Ok(())
}
