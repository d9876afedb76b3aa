// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! waymark CLI entry point.
//!
//! Thin wiring: parse arguments, load the catalogue and preferences files,
//! call into the library, print. Failures go to stderr with a non-zero exit.

use clap::Parser;

use waymark::{
    search, Catalogue, CatalogueStore, Favorites, FileStore, JsonCatalogueStore, SearchHistory,
};

mod cli;
use cli::display;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let catalogue_store = JsonCatalogueStore::new(&cli.data);
    let mut prefs = FileStore::open(&cli.state);

    match cli.command {
        Commands::Search { query, limit } => {
            let catalogue = catalogue_store.load()?;
            let links = catalogue.visible_links();
            let results = search(&links, &query);

            // A shell invocation is an explicit submission, so it enters
            // the history; interactive surfaces call submit() themselves.
            let mut history = SearchHistory::load(&prefs);
            history.add(&mut prefs, &query);

            if results.is_empty() {
                println!("no matches for {}", display::bold(query.trim()));
                return Ok(());
            }
            for (rank, link) in results.iter().take(limit).enumerate() {
                println!("{}", display::result_line(rank + 1, link));
            }
            if results.len() > limit {
                println!("{}", display::dim(&format!("… {} more", results.len() - limit)));
            }
        }

        Commands::List { category } => {
            let catalogue = catalogue_store.load()?;
            let categories = catalogue.visible_categories();
            for cat in categories {
                if let Some(wanted) = &category {
                    if &cat.id != wanted {
                        continue;
                    }
                }
                println!("{}", display::category_line(&cat));
                for link in catalogue.links_by_category(&cat.id) {
                    println!("{}", display::link_line(&link));
                }
            }
        }

        Commands::History { remove, clear } => {
            let mut history = SearchHistory::load(&prefs);
            if clear {
                history.clear(&mut prefs);
                println!("history cleared");
            } else if let Some(term) = remove {
                history.remove(&mut prefs, &term);
                println!("removed {}", display::bold(&term));
            } else if history.is_empty() {
                println!("{}", display::dim("history is empty"));
            } else {
                for (i, term) in history.entries().iter().enumerate() {
                    println!("{:>3}. {}", i + 1, term);
                }
            }
        }

        Commands::Favorite { toggle } => {
            let mut favorites = Favorites::load(&prefs);
            if let Some(id) = toggle {
                favorites.toggle(&mut prefs, &id);
                let state = if favorites.is_favorite(&id) {
                    display::green("favorited")
                } else {
                    display::dim("unfavorited")
                };
                println!("{} {}", state, id);
            } else {
                let catalogue = catalogue_store.load()?;
                let picked = favorites.favorite_links(&catalogue.links);
                if picked.is_empty() {
                    println!("{}", display::dim("no favorites yet"));
                }
                for link in picked {
                    println!("{}", display::link_line(&link));
                }
            }
        }

        Commands::Inspect => {
            let catalogue = catalogue_store.load()?;
            print_stats(&catalogue);
        }
    }
    Ok(())
}

fn print_stats(catalogue: &Catalogue) {
    let visible = catalogue.links.iter().filter(|l| l.visible).count();
    let featured = catalogue.links.iter().filter(|l| l.featured).count();
    let tags = waymark::catalogue::all_tags(&catalogue.links).len();

    println!("{}", display::bold(&catalogue.site.title));
    println!("{}", display::stat_line("links", catalogue.links.len()));
    println!("{}", display::stat_line("  visible", visible));
    println!("{}", display::stat_line("  featured", featured));
    println!("{}", display::stat_line("categories", catalogue.categories.len()));
    println!("{}", display::stat_line("distinct tags", tags));
    for category in &catalogue.categories {
        let count = catalogue
            .links
            .iter()
            .filter(|l| l.category_id == category.id)
            .count();
        println!("{}", display::stat_line(&format!("  {}", category.name), count));
    }
}
