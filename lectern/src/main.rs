use clap::Parser;
use tracing::info;

use lectern::{build_conference, parse_talk_time, Conference, Talk, TalkType};

#[derive(Parser)]
#[command(name = "lectern")]
#[command(about = "Conference schedule DSL demonstration", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Build the sample conference through every construction path
    Demo {
        /// Mark the conference as important (recorded, never acted on)
        #[arg(long)]
        important: bool,

        /// Print the schedule as JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    let filter = tracing_subscriber::EnvFilter::from_default_env().add_directive(
        "lectern=info"
            .parse()
            .map_err(|e| anyhow::anyhow!("Invalid log directive: {e}"))?,
    );

    tracing_subscriber::fmt().with_env_filter(filter).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Demo { important, json } => {
            let conference = demo_conference(important)?;
            info!(name = %conference.name(), talks = conference.len(), "demo schedule built");

            if json {
                println!("{}", serde_json::to_string_pretty(&conference)?);
            } else {
                println!("{conference}");
                for talk in conference.talks() {
                    println!("  {talk}");
                }
            }
        }
    }

    Ok(())
}

/// Assemble a sample schedule exercising each way a talk can be added
fn demo_conference(important: bool) -> anyhow::Result<Conference> {
    let prebuilt = Talk::with_kind(
        "Ask the Maintainers",
        "Panel",
        parse_talk_time("2022-01-05T17:00")?,
        TalkType::Keynote,
    );

    let conference = build_conference(important, |c| {
        c.name("Rust Guild").location("Room 101");

        c.talks(|t| {
            // direct factories
            t.add_keynote_talk("Fearless Refactoring", "A. Speaker", "2022-01-05T09:00")?;
            t.add_conference_talk("Intro to Ownership", "B. Speaker", "2022-01-05T10:00")?;

            // staged chain
            t.conference_talk()
                .named("Lifetimes in Anger")
                .by("C. Speaker")
                .at("2022-01-05T11:00")?;

            // direct insertion of a prebuilt value
            t.add(prebuilt);

            // re-entry accumulates into the same schedule
            t.talks(|inner| {
                inner.add_conference_talk("Hallway Track", "Everyone", "2022-01-05T12:00")
            })
        })
    })?;

    Ok(conference)
}
