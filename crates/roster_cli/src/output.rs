use clap::ValueEnum;
use colored::*;
use roster_core::Contributor;
use serde_json::{Value, json};

/// Console output format for record listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// One-line summary: `<name> - <role>`.
pub fn print_summary_line(contributor: &Contributor) {
    println!("{} - {}", contributor.name, contributor.category);
}

/// Field-per-line detail view; absent fields are skipped.
pub fn print_details(contributor: &Contributor) {
    println!("Name: {}", contributor.name);
    println!("Role: {}", contributor.category);
    if let Some(bio) = &contributor.bio {
        println!("Bio: {}", bio);
    }
    if let Some(email) = &contributor.email {
        println!("Email: {}", email);
    }
    if let Some(url) = contributor.github_url() {
        println!("GitHub: {}", url);
    }
    if let Some(url) = contributor.twitter_url() {
        println!("Twitter: {}", url);
    }
}

pub fn contributor_json(contributor: &Contributor) -> Value {
    json!({
        "name": contributor.name,
        "role": contributor.category.display_name(),
        "category": contributor.category,
        "github": contributor.github,
        "twitter": contributor.twitter,
        "email": contributor.email,
        "bio": contributor.bio,
    })
}

pub fn print_json(value: &Value) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub fn print_success(message: &str) {
    println!("{} {}", "✓".green().bold(), message.green());
}

pub fn print_info(message: &str) {
    eprintln!("{} {}", "ℹ".blue().bold(), message);
}
