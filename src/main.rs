/*
dcnet is a command line reader for danceconvention.net events.

```
$ RUST_LOG=info cargo run -- 1234
$ cargo run -- 1234 --json > event.json
$ DCNET_LANGUAGE=de cargo run -- 1234 --contests-only
```
*/

use anyhow::Context;
use clap::Parser;
use dcnet_lib::shared::utils::init_logger;
use dcnet_lib::{ContestSection, DcnetConfig, Event, EventService};

#[derive(Debug, Parser)]
#[command(name = "dcnet")]
#[command(about = "Fetch contests and signups of a danceconvention.net event", long_about = None)]
struct Cli {
    /// Event id as used in danceconvention.net URLs
    #[arg(value_name = "EVENT_ID")]
    event_id: String,
    /// Print the whole event as JSON instead of a summary
    #[arg(long)]
    json: bool,
    /// Language of the event page used for the description
    #[arg(long, value_name = "LANG")]
    language: Option<String>,
    /// Only fetch the contest list
    #[arg(long)]
    contests_only: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logger();
    let cli = Cli::parse();

    let mut config = DcnetConfig::from_env().context("loading configuration")?;
    if let Some(language) = cli.language {
        config = config.with_language(language);
    }

    let service = EventService::from_config(&config)?;
    let event = if cli.contests_only {
        service.load_contests(cli.event_id.as_str()).await
    } else {
        service.load_event(cli.event_id.as_str()).await
    }
    .with_context(|| format!("loading event {}", cli.event_id))?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&event)?);
    } else {
        print_summary(&event);
    }
    Ok(())
}

fn print_summary(event: &Event) {
    println!("Event {}", event.id());
    if let Some(description) = event.description() {
        println!("  {}", description);
    }
    match event.validity() {
        Some(true) => println!("  valid: yes"),
        Some(false) => println!("  valid: no (no contests)"),
        None => println!("  valid: unknown"),
    }
    println!("  contests: {}", event.contests().len());
    println!("  signups: {}", event.signups().len());

    for (id, contest) in event.contests() {
        println!(
            "  - [{}] {} ({})",
            id,
            contest.name().unwrap_or("unnamed"),
            contest.division_type()
        );
        for section in ContestSection::ALL {
            if let Some(count) = contest.section_len(section) {
                println!("      {}: {}", section, count);
            }
        }
    }
}
