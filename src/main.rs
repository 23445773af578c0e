use std::process::ExitCode;
use std::sync::{mpsc, Arc};
use std::time::Duration;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use atlascope::backend::BackendClient;
use atlascope::catalog::{self, CountryClient, CountryRecord, FilterCriteria};
use atlascope::cli::{Cli, Command, FavCommand};
use atlascope::config::Config;
use atlascope::favorites::FavoritesStore;
use atlascope::session::{FileStorage, SessionStore, SessionWatcher};

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = Config::load()?;

    let storage = FileStorage::new(FileStorage::default_dir());
    let storage_dir = storage.dir().to_path_buf();
    let session = SessionStore::new(Arc::new(storage));

    let provider = CountryClient::new(
        &config.provider.base_url,
        Duration::from_secs(config.provider.connect_timeout_seconds),
    );
    let backend = Arc::new(BackendClient::new(
        &config.backend.base_url,
        Duration::from_secs(config.backend.connect_timeout_seconds),
        session.clone(),
    ));
    let favorites = FavoritesStore::new(backend.clone(), session.clone());

    match cli.command {
        Command::List {
            query,
            region,
            language,
        } => {
            let countries = provider.all().await?;
            favorites.sync().await;

            let criteria = FilterCriteria {
                query,
                region,
                language,
            };
            for country in catalog::filter(&countries, &criteria) {
                let star = if favorites.is_favorite(&country.cca3) {
                    "*"
                } else {
                    " "
                };
                println!(
                    "{star} {:<4} {:<36} {:<10} {:>14}",
                    country.cca3,
                    country.display_name(),
                    country.region,
                    country.formatted_population()
                );
            }
        }
        Command::Show { code } => match provider.by_code(&code).await? {
            Some(country) => {
                favorites.sync().await;
                print_details(&country, favorites.is_favorite(&country.cca3));
            }
            None => anyhow::bail!("Country '{code}' not found"),
        },
        Command::Languages => {
            let countries = provider.all().await?;
            for language in catalog::available_languages(&countries) {
                println!("{language}");
            }
        }
        Command::Register {
            name,
            email,
            password,
        } => {
            let auth = backend.register(&name, &email, &password).await?;
            session.persist(&auth.user, &auth.token)?;
            favorites.sync().await;
            println!("Registered and logged in as {}", auth.user.email);
        }
        Command::Login { email, password } => {
            let auth = backend.login(&email, &password).await?;
            session.persist(&auth.user, &auth.token)?;
            favorites.sync().await;
            println!("Logged in as {}", auth.user.email);
        }
        Command::Logout => {
            session.clear()?;
            favorites.clear();
            println!("Logged out");
        }
        Command::Whoami => match session.user() {
            Some(user) => println!("{} <{}>", user.name, user.email),
            None => println!("Not logged in"),
        },
        Command::Fav(cmd) => {
            favorites.sync().await;
            match cmd {
                FavCommand::List => {
                    let codes = favorites.favorites();
                    if codes.is_empty() {
                        println!("No favorites yet");
                    } else {
                        for country in provider.by_codes(&codes).await? {
                            println!(
                                "{:<4} {:<36} {}",
                                country.cca3,
                                country.display_name(),
                                country.region
                            );
                        }
                    }
                }
                FavCommand::Add { code } => {
                    favorites.add(&code).await?;
                    println!("Added {code}");
                }
                FavCommand::Remove { code } => {
                    favorites.remove(&code).await?;
                    println!("Removed {code}");
                }
            }
        }
        Command::Watch => {
            let (tx, rx) = mpsc::channel();
            let _watcher = SessionWatcher::start(&storage_dir, tx, 200)?;

            favorites.sync().await;
            print_favorites_line(&session, &favorites);

            // Blocks on the watcher channel between syncs; fine on the
            // multi-thread runtime.
            loop {
                match tokio::task::block_in_place(|| rx.recv()) {
                    Ok(_) => {
                        favorites.sync().await;
                        print_favorites_line(&session, &favorites);
                    }
                    Err(_) => break,
                }
            }
        }
    }

    Ok(())
}

fn print_favorites_line(session: &SessionStore, favorites: &FavoritesStore) {
    let who = match session.user() {
        Some(user) => user.email,
        None => "(not logged in)".to_string(),
    };
    println!("{who}: {}", favorites.favorites().join(", "));
}

fn print_details(country: &CountryRecord, is_favorite: bool) {
    let star = if is_favorite { " *" } else { "" };
    println!("{} ({}){star}", country.display_name(), country.cca3);
    println!("  Official:   {}", country.name.official);
    println!("  Region:     {}", country.region);
    println!(
        "  Subregion:  {}",
        country.subregion.as_deref().unwrap_or("N/A")
    );
    println!(
        "  Capital:    {}",
        country.primary_capital().unwrap_or("N/A")
    );
    println!("  Population: {}", country.formatted_population());

    if !country.languages.is_empty() {
        let languages: Vec<&str> = country.languages.values().map(String::as_str).collect();
        println!("  Languages:  {}", languages.join(", "));
    }
    if !country.currencies.is_empty() {
        let currencies: Vec<String> = country
            .currencies
            .iter()
            .map(|(code, info)| match info.symbol.as_deref() {
                Some(symbol) => format!("{} ({}, {})", info.name, code, symbol),
                None => format!("{} ({})", info.name, code),
            })
            .collect();
        println!("  Currencies: {}", currencies.join(", "));
    }
    if let Some(flag) = country.flags.png.as_deref().or(country.flags.svg.as_deref()) {
        println!("  Flag:       {flag}");
    }
}
