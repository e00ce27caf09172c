use std::{path::PathBuf, time::Duration};

use clap::Parser;
use tracing_subscriber::EnvFilter;

use lienzo::{ContentSource, ContentVariant, FilterSelection, SiteConfig, SiteContent};

#[derive(Parser)]
#[command(name = "lienzo")]
#[command(about = "Single-page portfolio and exhibition site")]
struct Cli {
    /// Load site copy from a TOML file instead of a built-in variant
    #[arg(long, value_name = "FILE")]
    content: Option<PathBuf>,

    /// Built-in content variant
    #[arg(long, value_enum, default_value_t = ContentVariant::Exhibition)]
    variant: ContentVariant,

    /// Simulated delivery time of the contact form
    #[arg(long, value_name = "MS", default_value_t = 2000)]
    submit_delay_ms: u64,

    /// Print the catalog (optionally filtered) and exit
    #[arg(long, value_name = "FILTER", num_args = 0..=1, default_missing_value = "all")]
    list_projects: Option<FilterSelection>,

    /// Print the selected content as TOML and exit
    #[arg(long)]
    dump_content: bool,

    /// Initial window width
    #[arg(long, value_name = "PX", default_value_t = 1280.0)]
    width: f32,

    /// Initial window height
    #[arg(long, value_name = "PX", default_value_t = 800.0)]
    height: f32,

    /// Keep every element at rest
    #[arg(long)]
    no_motion: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn config(&self) -> SiteConfig {
        let source = match &self.content {
            Some(path) => ContentSource::File(path.clone()),
            None => ContentSource::Builtin(self.variant),
        };
        SiteConfig::new()
            .with_content(source)
            .with_submit_delay(Duration::from_millis(self.submit_delay_ms))
            .with_window(self.width, self.height)
            .with_motion(!self.no_motion)
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn list_projects(content: &SiteContent, selection: FilterSelection) -> anyhow::Result<()> {
    let catalog = content.catalog()?;
    let projects = catalog.filter(selection);

    println!(
        "=== {} ({}) ===",
        content.filter_label(selection),
        projects.len()
    );
    if projects.is_empty() {
        println!("{}", content.projects.empty);
        return Ok(());
    }
    for project in projects {
        let star = if project.featured { "*" } else { " " };
        println!(
            "{star} {:>3}  {:<28} {:<7} {}",
            project.id,
            project.title,
            format!("{:?}", project.category).to_lowercase(),
            project.tech.join(", ")
        );
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();
    init_tracing(args.verbose);

    let config = args.config();
    let content = config.load_content()?;
    tracing::debug!(source = ?config.content, "content ready");

    if args.dump_content {
        print!("{}", content.to_toml_string()?);
        return Ok(());
    }

    if let Some(selection) = args.list_projects {
        return list_projects(&content, selection);
    }

    run(config, content)
}

#[cfg(feature = "gui")]
fn run(config: SiteConfig, content: SiteContent) -> anyhow::Result<()> {
    lienzo::gui::run(config, content)
}

#[cfg(not(feature = "gui"))]
fn run(_config: SiteConfig, content: SiteContent) -> anyhow::Result<()> {
    anyhow::bail!(
        "{} was built without the `gui` feature; use --list-projects or --dump-content",
        content.meta.title
    )
}
