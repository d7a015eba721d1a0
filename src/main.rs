use clap::Parser;
use log::error;
use std::process::ExitCode;
use std::sync::Arc;

use recipe_finder::{
    render, DurationBucket, FailureKind, FinderConfig, MealDbClient, Mood, PipelineState,
    RecipeApi, RecipeFilter, SearchError, SearchQuery, SearchSession,
};

#[derive(Parser, Debug)]
#[command(
    name = "recipe-finder",
    version,
    about = "Find recipes by ingredient or category"
)]
struct Cli {
    /// Main ingredient to search for, e.g. "chicken"
    #[arg(short, long)]
    ingredient: Option<String>,

    /// Category to search or narrow by ("All" for any)
    #[arg(short, long)]
    category: Option<String>,

    /// Only show recipes with this mood (comfort, party, healthy, light, spicy, general)
    #[arg(short, long)]
    mood: Option<Mood>,

    /// Only show recipes in this time bucket (quick, medium, long, unknown)
    #[arg(short, long = "time")]
    time: Option<DurationBucket>,

    /// Maximum number of recipes to look up
    #[arg(long, env = "RECIPE_FINDER_LIMIT")]
    limit: Option<usize>,

    /// Cards per row in the grid
    #[arg(long, default_value_t = 3)]
    columns: usize,

    /// Show the full recipe with this id instead of the grid
    #[arg(long)]
    show: Option<String>,

    /// Print the available categories and exit
    #[arg(long)]
    list_categories: bool,

    /// Print results as JSON
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            error!("{}", e);
            eprintln!("{}", e.user_message());
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<ExitCode, SearchError> {
    let mut config = FinderConfig::load()?;
    if let Some(limit) = cli.limit {
        config.max_results = limit;
    }
    if config.max_results == 0 {
        return Err(SearchError::Builder(
            "--limit must be at least 1".to_string(),
        ));
    }
    let client = Arc::new(MealDbClient::new(&config)?);

    if cli.list_categories {
        for category in client.categories().await? {
            println!("{}", category);
        }
        return Ok(ExitCode::SUCCESS);
    }

    let query = SearchQuery::new(cli.ingredient.as_deref(), cli.category.as_deref());
    let session = SearchSession::new(client, config.max_results);
    session.search(&query).await;

    let recipes = match session.state() {
        PipelineState::Succeeded(recipes) => recipes,
        PipelineState::Failed {
            kind: FailureKind::NoResults,
            message,
        } => {
            println!("{}", message);
            return Ok(ExitCode::SUCCESS);
        }
        PipelineState::Failed { message, .. } => {
            eprintln!("{}", message);
            return Ok(ExitCode::FAILURE);
        }
        PipelineState::Idle | PipelineState::Fetching => return Ok(ExitCode::FAILURE),
    };

    let mut filter = RecipeFilter::new();
    filter.mood = cli.mood;
    filter.duration = cli.time;
    let visible = filter.apply(&recipes);

    if let Some(id) = cli.show.as_deref() {
        return match visible.iter().find(|r| r.id == id) {
            Some(recipe) => {
                print!("{}", render::detail(recipe));
                Ok(ExitCode::SUCCESS)
            }
            None => {
                eprintln!("Recipe {} is not among the results.", id);
                Ok(ExitCode::FAILURE)
            }
        };
    }

    if cli.json {
        match serde_json::to_string_pretty(&visible) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                error!("Failed to serialize results: {}", e);
                return Ok(ExitCode::FAILURE);
            }
        }
        return Ok(ExitCode::SUCCESS);
    }

    if visible.is_empty() {
        println!("No recipes match the selected filters.");
    } else {
        print!("{}", render::grid(&visible, cli.columns));
        println!(
            "{} of {} recipes shown",
            visible.len(),
            recipes.len()
        );
    }

    Ok(ExitCode::SUCCESS)
}
