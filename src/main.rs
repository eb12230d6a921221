//! Terminal host for the assurance finder.
//!
//! Reads configuration from the environment, loads the catalog and drives
//! one finder session over stdin/stdout.

use std::error::Error;
use std::sync::Arc;
use tokio::io::{self, AsyncBufReadExt, BufReader};
use tracing::{error, info};

use assurance_finder::adapters::JsonFileCatalog;
use assurance_finder::application::{OpenFinderCommand, OpenFinderHandler};
use assurance_finder::config::AppConfig;
use assurance_finder::domain::finder::{Answer, ResultVolume};
use assurance_finder::domain::wizard::{FinderSession, WizardStatus};

const HELP: &str = "Commands: <option number or value>[, ...] | back | reset | results | quit";

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = AppConfig::load()?;
    config.validate()?;
    config.logging.init_tracing()?;

    let finder_config = Arc::new(config.finder.load_finder_config()?);
    let catalog = Arc::new(JsonFileCatalog::new(config.catalog.path()));
    let handler = OpenFinderHandler::new(catalog, finder_config);

    let mut session = match handler.handle(OpenFinderCommand::default()).await {
        Ok(session) => session,
        Err(e) => {
            error!(error = %e, "Could not open finder session");
            return Err(e.into());
        }
    };

    println!("{}", HELP);
    print_screen(&session);

    let mut lines = BufReader::new(io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let input = line.trim();
        match input {
            "" => {}
            "quit" | "exit" => break,
            "reset" => session.reset(),
            "results" => print_results(&session),
            "back" => {
                if session.go_back().is_none() {
                    session.reset();
                }
            }
            _ => handle_input(&mut session, input),
        }
        if input != "results" {
            print_screen(&session);
        }
    }

    info!(session_id = %session.id(), "Finder session closed");
    Ok(())
}

fn handle_input(session: &mut FinderSession, input: &str) {
    if !session.status().accepts_answers() {
        let entry_id = input
            .parse::<usize>()
            .ok()
            .and_then(|n| session.entry_points().get(n.wrapping_sub(1)))
            .map(|entry| entry.id.clone())
            .unwrap_or_else(|| input.to_string());
        if let Err(e) = session.start_entry_point(&entry_id) {
            println!("{}", e);
        }
        return;
    }

    let Some(question) = session.current_question() else {
        println!("No questions remain. {}", HELP);
        return;
    };
    let multi = question.is_multi();
    let options = session.current_options();

    let values: Vec<String> = input
        .split(',')
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(|v| {
            v.parse::<usize>()
                .ok()
                .and_then(|n| options.get(n.wrapping_sub(1)))
                .map(|option| option.value.clone())
                .unwrap_or_else(|| v.to_string())
        })
        .collect();

    if values.is_empty() {
        return;
    }
    let answer = if multi {
        Answer::multiple(values)
    } else {
        Answer::single(values[0].clone())
    };
    session.submit_answer(answer);
}

fn print_screen(session: &FinderSession) {
    if session.status() == WizardStatus::Idle {
        println!("\nWhere would you like to start?");
        for (i, entry) in session.entry_points().iter().enumerate() {
            println!("  {}. {} - {}", i + 1, entry.title, entry.description);
        }
        return;
    }

    let crumbs = session.breadcrumbs();
    if !crumbs.is_empty() {
        let trail: Vec<String> = crumbs.iter().map(|(_, answer)| answer.clone()).collect();
        println!("\n[{}]", trail.join(" > "));
    }
    println!(
        "{} | Progress {} | {} techniques remaining",
        session.status().label(),
        session.progress(),
        session.filtered_techniques().len()
    );

    if session.should_show_results() {
        print_results(session);
    }

    if let Some(prompt) = session.current_prompt() {
        println!("\n{}", prompt);
        for (i, option) in session.current_options().iter().enumerate() {
            match option.count {
                Some(count) => println!("  {}. {} ({})", i + 1, option.label, count),
                None => println!("  {}. {}", i + 1, option.label),
            }
        }
    }
}

fn print_results(session: &FinderSession) {
    match session.result_volume() {
        ResultVolume::None => {
            println!("No techniques match. Try going back.");
            return;
        }
        ResultVolume::Few => println!("Only a few techniques match."),
        ResultVolume::TooMany => println!("Many techniques match; answer more questions to narrow them."),
        ResultVolume::Ideal => {}
    }

    for ranked in session.ranked_results() {
        let marker = if ranked.versatile { " *" } else { "" };
        println!(
            "  {:>4}  {}{}",
            ranked.score.to_string(),
            ranked.technique.name,
            marker
        );
        for reason in &ranked.reasons {
            println!("          - {}", reason);
        }
    }
}
