use clap::{Parser, Subcommand};
use smallpress::config::SiteConfig;
use smallpress::generate::BuildOutput;
use smallpress::{config, feed, generate, output, process, scan};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "smallpress")]
#[command(about = "Static blog build pipeline: markdown in, ordered page records out")]
#[command(long_about = "\
Static blog build pipeline: markdown in, ordered page records out

Your filesystem is the data source. Markdown files with YAML front matter
become an ordered, cross-linked collection of page records (pages.json),
ready for a separate rendering layer. Posts sort newest-first with
previous/next links following the same order.

Content structure:

  content/
  ├── config.toml                  # Site config (optional)
  ├── hello-world.md               # → slug \"hello-world\"
  └── posts/
      ├── first-post.md            # → slug \"posts/first-post\"
      └── 2024/
          └── year-review.md       # → slug \"posts/2024/year-review\"

Each document starts with YAML front matter:

  ---
  title: Hello World               # required, non-empty
  date: 2024-03-01                 # required, YYYY-MM-DD or RFC 3339
  description: Optional summary    # optional; excerpt derived when absent
  ---
  Body markdown...

Run 'smallpress gen-config' to generate a documented config.toml.")]
#[command(version)]
struct Cli {
    /// Content directory
    #[arg(long, default_value = "content", global = true)]
    source: PathBuf,

    /// Output directory
    #[arg(long, default_value = "dist", global = true)]
    output: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Discover documents and print the content inventory
    Scan,
    /// Run the full pipeline and write pages.json (and the feed) to the output directory
    Build,
    /// Run the full pipeline without writing output
    Check,
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Scan => {
            let documents = scan::scan(&cli.source)?;
            output::print_scan_output(&documents, &cli.source);
        }
        Command::Build => {
            let (build, config) = run_pipeline(&cli.source)?;
            let manifest_path = generate::write_manifest(&build, &cli.output)?;
            output::print_build_output(&build);
            println!("Manifest: {}", manifest_path.display());
            if config.feed.enable {
                let feed_path = feed::write_feed(&build, &cli.output, &config.feed.path)?;
                println!("Feed: {}", feed_path.display());
            }
        }
        Command::Check => {
            let (build, _) = run_pipeline(&cli.source)?;
            output::print_build_output(&build);
            println!("Content is valid");
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// Scan → process → assemble, sharing the config between stages.
fn run_pipeline(source: &Path) -> Result<(BuildOutput, SiteConfig), Box<dyn std::error::Error>> {
    let config = config::load_config(source)?;
    init_thread_pool(&config.processing);

    let documents = scan::scan(source)?;
    let processed = process::process(documents, config.content.words_per_minute)?;
    let build = generate::assemble(processed, &config.site, config.content.excerpt_length)?;
    Ok((build, config))
}

/// Initialize the rayon thread pool based on processing config.
///
/// Caps at the number of available CPU cores — user can constrain down, not up.
fn init_thread_pool(processing: &config::ProcessingConfig) {
    let workers = config::effective_workers(processing);
    rayon::ThreadPoolBuilder::new()
        .num_threads(workers)
        .build_global()
        .ok();
}
