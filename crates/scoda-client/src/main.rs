//! # scoda
//!
//! Command-line front end for the Scoda content planner. Each invocation
//! restores the stored session, runs one page action, and prints the
//! result as plain text.

mod cli;

use anyhow::{bail, Context};
use clap::{CommandFactory, Parser};
use tracing::info;

use scoda_client::controllers::{HelpPage, InsightsState, LibraryState};
use scoda_client::{AppState, AuthStatus, ClientConfig};
use scoda_shared::User;

use crate::cli::{Cli, Command, LibraryCommand};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    scoda_client::init_tracing();

    let command = Cli::parse().into_command();

    if command == Command::Help {
        print_help();
        return Ok(());
    }

    let config = ClientConfig::from_env();
    info!(api_url = %config.api_url, "Starting Scoda client v{}", env!("CARGO_PKG_VERSION"));

    let app = AppState::open(config).context("Failed to open local session storage")?;

    if command.needs_session() {
        app.auth.initialize().await;
    }

    run(&app, command).await
}

async fn run(app: &AppState, command: Command) -> anyhow::Result<()> {
    match command {
        Command::Help => print_help(),

        Command::Health => {
            if app.api.health().await {
                println!("Backend at {} is healthy", app.api.base_url());
            } else {
                bail!("Backend at {} is not healthy", app.api.base_url());
            }
        }

        Command::Signup { name, email, password } => {
            let user = app.auth.signup(&name, &email, &password).await?;
            println!("Welcome, {}!", user.name);
            print_user(&user);
        }

        Command::Login { email, password } => {
            let user = app.auth.login(&email, &password).await?;
            println!("Signed in as {}", user.email);
            print_user(&user);
        }

        Command::Logout => {
            app.auth.logout().await;
            println!("Signed out");
        }

        Command::WhoAmI => match (app.auth.status(), app.auth.user()) {
            (AuthStatus::Authenticated, Some(user)) => print_user(&user),
            _ => println!("Not signed in"),
        },

        Command::Profile { name, email } => {
            let user = app.auth.update_profile(&name, &email).await?;
            println!("Profile updated");
            print_user(&user);
        }

        Command::DeleteAccount => {
            app.auth.delete_account().await?;
            println!("Account deleted");
        }

        Command::Generate { topic, filter } => {
            let topic = topic.join(" ");
            match app.generator.generate(&topic).await {
                Ok(generated) => {
                    app.generator.set_filter(filter);
                    let state = app.generator.state();
                    if let Some(view) = &state.view {
                        print!("{}", view.render_text());
                    }
                    match generated.saved {
                        Some(saved) => println!("\nSaved to your library as {}", saved.id),
                        None if app.auth.is_authenticated() => {
                            println!("\nCould not save to your library")
                        }
                        None => println!("\nSign in to save plans to your library"),
                    }
                    if let Some(credits) = app.auth.credits() {
                        println!("Credits remaining: {credits}");
                    }
                }
                Err(e) if e.is_unauthorized() => {
                    let state = app.generator.state();
                    let prompt = state.sign_in_prompt.unwrap_or_else(|| e.to_string());
                    println!("{prompt}");
                    println!("Run `scoda login <email> <password>` or `scoda signup` to continue.");
                }
                Err(e) => return Err(e.into()),
            }
        }

        Command::Library { action } => {
            run_library(app, action.unwrap_or(LibraryCommand::List)).await?
        }

        Command::Insights => {
            if !app.auth.is_authenticated() {
                println!("Sign in to see your insights");
                return Ok(());
            }
            app.insights.load().await?;
            print_insights(&app.insights.state());
        }
    }
    Ok(())
}

async fn run_library(app: &AppState, command: LibraryCommand) -> anyhow::Result<()> {
    if !app.auth.is_authenticated() {
        println!("Sign in to see your library");
        return Ok(());
    }

    match command {
        LibraryCommand::List => {
            app.library.load().await?;
            print_library(&app.library.state());
        }
        LibraryCommand::Show { id, filter } => {
            app.library.load().await?;
            if !app.library.select(&id) {
                bail!("No saved plan with id {id}");
            }
            app.library.set_filter(filter);
            let state = app.library.state();
            if let Some(view) = state.selected_view() {
                print!("{}", view.render_text());
            }
        }
        LibraryCommand::Delete { id } => {
            app.library.delete(&id).await?;
            println!("Deleted {id}");
        }
        LibraryCommand::Refine { id } => {
            let refined = app.library.refine(&id).await?;
            println!(
                "Refined \"{}\" ({} nodes)",
                refined.topic,
                refined.graph.nodes.len()
            );
        }
    }
    Ok(())
}

fn print_help() {
    println!("{}\n", Cli::command().render_long_help());
    print!("{}", HelpPage::new().render_text());
}

fn print_user(user: &User) {
    println!("  id:      {}", user.id);
    println!("  name:    {}", user.name);
    println!("  email:   {}", user.email);
    match user.credits {
        Some(credits) => println!("  credits: {credits}"),
        None => println!("  credits: unknown"),
    }
}

fn print_library(state: &LibraryState) {
    if state.ideas.is_empty() {
        println!("Your library is empty. Generate a plan while signed in to save it.");
        return;
    }
    for idea in &state.ideas {
        let marker = if state.selected.as_deref() == Some(idea.id.as_str()) {
            "*"
        } else {
            " "
        };
        println!(
            "{marker} {}  {}  ({} nodes, {})",
            idea.id,
            idea.topic,
            idea.graph.nodes.len(),
            idea.created_at.format("%Y-%m-%d %H:%M")
        );
    }
}

fn print_insights(state: &InsightsState) {
    let stats = &state.stats;
    println!("Total ideas:         {}", stats.total_ideas);
    println!("Total nodes:         {}", stats.total_nodes);
    println!("Avg nodes per idea:  {:.1}", stats.avg_nodes_per_idea);
    println!("Most used category:  {}", stats.most_used_category);
    println!("Ideas this week:     {}", stats.ideas_this_week);
    println!("Credits used:        {}", stats.credits_used);
    println!("Credits remaining:   {}", stats.remaining_credits);

    let busiest = state.busiest_day().max(1);
    println!("\nWeekly activity:");
    for point in &state.activity {
        let width = (point.ideas * 20 / busiest) as usize;
        println!("  {:<4} {:<20} {}", point.day, "#".repeat(width), point.ideas);
    }

    if !state.categories.is_empty() {
        println!("\nCategories:");
        for category in &state.categories {
            println!("  {:<24} {:>5.1}%  ({})", category.name, category.value, category.count);
        }
    }

    if !state.most_active.is_empty() {
        println!("\nMost active:");
        for category in &state.most_active {
            println!("  {:<24} {}", category.name, category.count);
        }
    }
}
