use log::debug;
use std::env;
use std::process::ExitCode;

use mealdb_desserts::{load_config, FetchError, FetchState, MealCatalog, MealDetail, MealSummary};

fn print_list(meals: &[MealSummary]) {
    if meals.is_empty() {
        println!("No data");
        return;
    }
    for meal in meals {
        println!("{}\t{}", meal.id, meal.display_name());
    }
}

fn print_detail(meal: &MealDetail) {
    println!("{}", meal.name);
    println!("{}", meal.thumbnail_url);
    println!();
    println!("Ingredients");
    let width = meal
        .lines
        .iter()
        .map(|line| line.ingredient.chars().count())
        .max()
        .unwrap_or(0);
    for line in &meal.lines {
        println!("  {:<width$}  {}", line.ingredient, line.measure, width = width);
    }
    println!();
    println!("Instructions");
    println!("{}", meal.instructions);
}

fn report<T>(state: FetchState<T>, render: impl FnOnce(&T)) -> ExitCode {
    match state {
        FetchState::Success(data) => {
            render(&data);
            ExitCode::SUCCESS
        }
        FetchState::Error(message) => {
            eprintln!("{}", message);
            ExitCode::FAILURE
        }
        FetchState::Idle | FetchState::Loading => ExitCode::FAILURE,
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::init();

    // Optional meal id: without one, list desserts
    let meal_id = env::args().nth(1);

    let catalog = match load_config().map_err(FetchError::from).and_then(|config| {
        debug!("Using {:?}", config);
        MealCatalog::new(&config)
    }) {
        Ok(catalog) => catalog,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    match meal_id {
        Some(id) => report(catalog.get_meal_detail(&id).await, print_detail),
        None => report(catalog.list_desserts().await, |meals: &Vec<MealSummary>| {
            print_list(meals)
        }),
    }
}
