//! Interactive terminal front end for the profile showcase.
//!
//! Run with:
//! ```
//! cargo run -p showcase --bin showcase
//! ```
//!
//! Set `SHOWCASE_SEED` for a reproducible run.

use profiles::filter::FilterUpdate;
use rand::SeedableRng;
use rand::rngs::{OsRng, StdRng};
use showcase::clipboard::{Clipboard, CommandClipboard, MemoryClipboard};
use showcase::commands::{Command, CommandError, HELP};
use showcase::config::ShowcaseConfig;
use showcase::generators::ProfileGenerator;
use showcase::notify::ToastKind;
use showcase::render;
use showcase::state::{FilterPanel, Showcase};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = ShowcaseConfig::from_env();
    tracing::debug!("Configuration: {:?}", config);

    let mut rng = match config.seed {
        Some(seed) => {
            tracing::info!("Using seed {seed}");
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_rng(OsRng)?,
    };

    let clipboard: Box<dyn Clipboard> = match config
        .clipboard_command
        .as_deref()
        .and_then(CommandClipboard::parse)
    {
        Some(command) => Box::new(command),
        None => Box::new(MemoryClipboard::new()),
    };

    let generator = ProfileGenerator::with_config(config.generator_config());
    tracing::debug!("Generator: {:?}", generator.config());
    let mut showcase = Showcase::new(generator, config.batch_size, &mut rng)?;

    println!("Random User Profile Showcase");
    println!("Type `help` for commands.\n");
    println!("{}", render::cards(&showcase.view()));

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(CommandError::Empty) => continue,
            Err(e) => {
                println!("{e}");
                continue;
            }
        };

        let changes_filters = matches!(
            command,
            Command::Gender(_) | Command::Age(..) | Command::Country(_) | Command::Reset
        );

        match command {
            Command::Quit => break,
            Command::Help => println!("{HELP}"),
            Command::List => println!("{}", render::cards(&showcase.view())),
            Command::Regenerate => {
                if showcase.regenerate(&mut rng).is_ok() {
                    println!("{}", render::cards(&showcase.view()));
                }
            }
            Command::ToggleFilters => match showcase.toggle_filter_panel() {
                FilterPanel::Shown => println!(
                    "{}",
                    render::filter_panel(showcase.criteria(), &showcase.countries())
                ),
                FilterPanel::Hidden => println!("Filters hidden"),
            },
            Command::Gender(gender) => {
                showcase.update_filters(FilterUpdate::gender(gender));
                println!("{}", render::cards(&showcase.view()));
            }
            Command::Age(min, max) => {
                showcase.update_filters(FilterUpdate::age_range(min, max));
                println!("{}", render::cards(&showcase.view()));
            }
            Command::Country(country) => {
                showcase.update_filters(FilterUpdate::country(country));
                println!("{}", render::cards(&showcase.view()));
            }
            Command::Reset => {
                showcase.reset_filters();
                println!("{}", render::cards(&showcase.view()));
            }
            Command::Open(position) => {
                let id = showcase.view().get(position).map(|p| p.id);
                match id {
                    Some(id) if showcase.select(id) => {
                        if let Some(profile) = showcase.modal().selected() {
                            println!("{}", render::detail(profile));
                        }
                    }
                    _ => println!("No card {position}"),
                }
            }
            Command::Close => showcase.close_modal(),
            Command::Copy(field) => {
                if !showcase.modal().is_open() {
                    println!("Open a profile first");
                } else {
                    // Failures surface as a toast below.
                    let _ = showcase.copy_field(field, clipboard.as_ref()).await;
                }
            }
            Command::Download => {
                if !showcase.modal().is_open() {
                    println!("Open a profile first");
                } else {
                    let _ = showcase.download(&config.download_dir).await;
                }
            }
        }

        if changes_filters && showcase.filter_panel() == FilterPanel::Shown {
            println!(
                "{}",
                render::filter_panel(showcase.criteria(), &showcase.countries())
            );
        }

        for toast in showcase.drain_notifications() {
            match toast.kind {
                ToastKind::Success => println!("[ok] {}", toast.message),
                ToastKind::Failure => println!("[!!] {}", toast.message),
            }
        }
    }

    Ok(())
}
