use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Parser;
use pantry_core::dates::parse_date;

#[derive(Parser, Debug)]
#[command(name = "pantry")]
#[command(about = "Add an ingredient to the fridge inventory", long_about = None)]
pub struct Cli {
    /// Category catalog JSON file (defaults to the built-in catalog)
    #[arg(short, long)]
    pub catalog: Option<PathBuf>,

    /// Override today's date (YYYY-MM-DD)
    #[arg(long, value_parser = parse_today)]
    pub today: Option<NaiveDate>,

    /// Print only the record JSON
    #[arg(long)]
    pub json: bool,

    /// Write the active catalog to this path and exit
    #[arg(long)]
    pub write_catalog: Option<PathBuf>,

    /// Verbose logging (same as RUST_LOG=debug)
    #[arg(short, long)]
    pub verbose: bool,
}

fn parse_today(s: &str) -> Result<NaiveDate, String> {
    parse_date(s).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flags() {
        let cli = Cli::parse_from(["pantry", "--today", "2024-01-30", "--json", "-c", "cat.json"]);
        assert_eq!(cli.today, NaiveDate::from_ymd_opt(2024, 1, 30));
        assert!(cli.json);
        assert_eq!(cli.catalog, Some(PathBuf::from("cat.json")));
        assert!(cli.write_catalog.is_none());
    }

    #[test]
    fn test_bad_today_rejected() {
        assert!(Cli::try_parse_from(["pantry", "--today", "30/01/2024"]).is_err());
    }
}
