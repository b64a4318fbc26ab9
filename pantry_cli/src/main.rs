//! # Pantry CLI Application
//!
//! Terminal front-end for the ingredient entry form. Prompts for category,
//! subcategory, name, storage state and dates, then prints the assembled
//! record as JSON.

mod cli;
mod session;

use std::io::{self, Write};

use chrono::Local;
use clap::Parser;
use log::LevelFilter;
use pantry_core::{load_catalog, save_catalog, CategoryCatalog, EntryForm, PantryResult};

use cli::Cli;
use session::Prompter;

fn run(cli: &Cli) -> PantryResult<()> {
    let loaded;
    let catalog: &CategoryCatalog = match &cli.catalog {
        Some(path) => {
            loaded = load_catalog(path)?;
            &loaded
        }
        None => CategoryCatalog::default_catalog()?,
    };

    if let Some(path) = &cli.write_catalog {
        save_catalog(catalog, path)?;
        println!("Catalog written to {}", path.display());
        return Ok(());
    }

    let today = cli.today.unwrap_or_else(|| Local::now().date_naive());
    let form = EntryForm::with_today(catalog, today);

    if !cli.json {
        println!("Pantry - Add Ingredient");
        println!("=======================");
        println!();
    }

    // Prompts go to stderr in JSON mode so stdout carries only the record
    let prompts: Box<dyn Write> = if cli.json {
        Box::new(io::stderr())
    } else {
        Box::new(io::stdout())
    };
    let stdin = io::stdin();
    let record = Prompter::new(stdin.lock(), prompts).run(form)?;

    if !cli.json {
        println!();
        println!("Record:");
    }
    println!("{}", record.to_json()?);
    Ok(())
}

fn main() {
    let cli = Cli::parse();

    let mut logger = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if cli.verbose {
        logger.filter_level(LevelFilter::Debug);
    }
    logger.init();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        if let Ok(json) = serde_json::to_string_pretty(&e) {
            eprintln!();
            eprintln!("Error JSON:");
            eprintln!("{}", json);
        }
        std::process::exit(1);
    }
}
