//! CLI Adapter.

mod interactive;
mod parameter_args;

use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use tracing::info;

use crate::app::api::{self, DefaultContext, OutputOptions, RandomOptions};
use crate::app::logging::{default_level, init_logging};
use crate::domain::configuration::OutputConfig;
use crate::domain::{AppError, Locale, OutputFormat, ParameterSet};
use parameter_args::ParameterArgs;

#[derive(Parser)]
#[command(name = "framelab")]
#[command(version)]
#[command(
    about = "Assemble structured image-generation prompts from photographic parameters",
    long_about = None
)]
struct Cli {
    /// Config file (defaults to ./framelab.toml when present)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a prompt from config defaults, a preset and flags
    #[clap(visible_alias = "r")]
    Render {
        #[command(flatten)]
        source: SourceArgs,
        #[command(flatten)]
        params: ParameterArgs,
        #[command(flatten)]
        output: OutputArgs,
        /// Save the final parameters as a preset (.toml, .yml, .yaml, .json)
        #[arg(long, value_name = "PATH")]
        save: Option<PathBuf>,
    },
    /// Apply random curated scenarios and render each result
    #[clap(visible_alias = "rnd")]
    Random {
        #[command(flatten)]
        source: SourceArgs,
        #[command(flatten)]
        params: ParameterArgs,
        #[command(flatten)]
        output: OutputArgs,
        /// Number of consecutive scenarios
        #[arg(short = 'c', long, default_value_t = 1)]
        count: usize,
        /// Seed for reproducible picks
        #[arg(long)]
        seed: Option<u64>,
    },
    /// List option values for a field, or for every field
    #[clap(visible_alias = "o")]
    Options {
        /// Field name (angle, scale, pose, lighting, lighting-basic, style, grading,
        /// texture, film-stock, lens, camera, aperture, ratio, bg-texture, floor-texture)
        field: Option<String>,
        /// Label language
        #[arg(short, long)]
        locale: Option<Locale>,
    },
    /// Resolve an orbital degree to its compass direction
    #[clap(visible_alias = "d")]
    Direction {
        /// Degree as text; unparsable input counts as 0
        #[arg(allow_hyphen_values = true)]
        degree: String,
    },
    /// List the scenario catalog
    Scenarios,
    /// Choose every parameter interactively, then render
    #[clap(visible_alias = "i")]
    Interactive {
        #[command(flatten)]
        source: SourceArgs,
        #[command(flatten)]
        output: OutputArgs,
        /// Save the chosen parameters as a preset
        #[arg(long, value_name = "PATH")]
        save: Option<PathBuf>,
    },
}

#[derive(Args, Debug, Clone, Default)]
struct SourceArgs {
    /// Preset file layered over config defaults
    #[arg(short, long, value_name = "PATH")]
    preset: Option<PathBuf>,
}

#[derive(Args, Debug, Clone, Default)]
struct OutputArgs {
    /// Output format: json, prompt or summary
    #[arg(short, long)]
    format: Option<OutputFormat>,
    /// Label language for the summary format
    #[arg(short, long)]
    locale: Option<Locale>,
    /// Copy the output to the clipboard
    #[arg(long)]
    copy: bool,
}

impl OutputArgs {
    fn resolve(&self, config: &OutputConfig) -> OutputOptions {
        let mut options = OutputOptions::from(config);
        if let Some(format) = self.format {
            options.format = format;
        }
        if let Some(locale) = self.locale {
            options.locale = locale;
        }
        options.copy |= self.copy;
        options
    }
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();

    let result = execute(cli);
    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn execute(cli: Cli) -> Result<(), AppError> {
    // Commands that need no config or catalog.
    match &cli.command {
        Commands::Options { field, locale } => {
            init_logging(default_level("warn", cli.verbose));
            return run_options(field.as_deref(), locale.unwrap_or_default());
        }
        Commands::Direction { degree } => {
            init_logging(default_level("warn", cli.verbose));
            let outcome = api::direction(degree);
            println!("{}° → {} ({})", outcome.degree, outcome.direction.label, outcome.direction.id);
            return Ok(());
        }
        _ => {}
    }

    let level = api::configured_log_level(cli.config.as_deref());
    init_logging(default_level(level.as_deref().unwrap_or("warn"), cli.verbose));
    let ctx = api::load_context(cli.config.as_deref())?;

    match cli.command {
        Commands::Render { source, params, output, save } => {
            let mut resolved = api::resolve_parameters(&ctx, source.preset.as_deref())?;
            params.apply(&mut resolved);
            render_and_print(&ctx, resolved, &output, save.as_deref())
        }
        Commands::Random { source, params, output, count, seed } => {
            let mut base = api::resolve_parameters(&ctx, source.preset.as_deref())?;
            params.apply(&mut base);
            run_random(&ctx, &base, &output, RandomOptions { count, seed, last_index: None })
        }
        Commands::Scenarios => {
            for (index, scenario) in api::scenarios(&ctx).iter().enumerate() {
                let settings = &scenario.settings;
                println!("{index:>3}  {}", scenario.text);
                println!(
                    "     {} | {} | {} | {} | {} {}",
                    settings.lighting,
                    settings.style,
                    settings.film_stock,
                    settings.scale,
                    settings.camera,
                    settings.lens
                );
            }
            Ok(())
        }
        Commands::Interactive { source, output, save } => {
            let start = api::resolve_parameters(&ctx, source.preset.as_deref())?;
            let locale = output.resolve(&ctx.config().output).locale;
            let chosen = interactive::run_wizard(start, locale)?;
            render_and_print(&ctx, chosen, &output, save.as_deref())
        }
        Commands::Options { .. } | Commands::Direction { .. } => Ok(()),
    }
}

fn render_and_print(
    ctx: &DefaultContext,
    params: ParameterSet,
    output: &OutputArgs,
    save: Option<&Path>,
) -> Result<(), AppError> {
    if let Some(path) = save {
        api::save_preset(ctx, path, &params)?;
        eprintln!("✅ Saved preset to {}", path.display());
    }

    let options = output.resolve(&ctx.config().output);
    let outcome = api::render(ctx, params, &options)?;
    println!("{}", outcome.output);
    if outcome.copied {
        eprintln!("✅ Copied to clipboard");
    }
    Ok(())
}

fn run_random(
    ctx: &DefaultContext,
    base: &ParameterSet,
    output: &OutputArgs,
    options: RandomOptions,
) -> Result<(), AppError> {
    let picks = api::random(ctx, base, &options)?;
    let output_options = output.resolve(&ctx.config().output);
    let last = picks.len().saturating_sub(1);

    for (position, pick) in picks.into_iter().enumerate() {
        info!(index = pick.index, direction = pick.direction_id, "scenario");
        // Only the final pick is copied.
        let options = OutputOptions { copy: output_options.copy && position == last, ..output_options };
        let outcome = api::render(ctx, pick.params, &options)?;
        println!("{}", outcome.output);
        if outcome.copied {
            eprintln!("✅ Copied to clipboard");
        }
    }
    Ok(())
}

fn run_options(field: Option<&str>, locale: Locale) -> Result<(), AppError> {
    let listings = api::options(field, locale)?;
    let single = listings.len() == 1;

    for listing in listings {
        if !single {
            println!("{} ({}):", listing.heading, listing.field);
        }
        for value in listing.values {
            let indent = if single { "" } else { "  " };
            if value.label == value.value {
                println!("{indent}{}", value.value);
            } else {
                println!("{indent}{} ({})", value.value, value.label);
            }
        }
    }
    Ok(())
}
