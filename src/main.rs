// file: src/main.rs
// description: commandline application entry point with command handling
// reference: application bootstrap and orchestration

use anyhow::{Context, Result};
use clap::{ArgAction, CommandFactory, Parser};
use docref::config::DEFAULT_CONFIG_PATH;
use docref::utils::interrupt::{Outcome, race_interrupt};
use docref::utils::logging::{format_error, format_warning};
use docref::{
    Config, DocumentIndex, DocumentOpener, Indexer, Presenter, PromptChooser, list_all,
    render_json, resolve,
};
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{debug, info};

#[derive(Parser)]
#[command(name = "docref")]
#[command(author = "cipher")]
#[command(version = "0.1.0")]
#[command(about = "Search and open reference docs.", long_about = None)]
struct Cli {
    /// Keyword to search
    keyword: Option<String>,

    /// List all keywords
    #[arg(short, long, action = ArgAction::SetTrue)]
    list: bool,

    /// The folder path of documents
    #[arg(short, long, value_name = "DIR")]
    doc: Option<PathBuf>,

    #[arg(short, long, value_name = "FILE", default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    color: bool,

    #[arg(short, long, action = ArgAction::SetTrue)]
    verbose: bool,

    /// Print the listing or the matched document as JSON instead of opening it
    #[arg(long, action = ArgAction::SetTrue)]
    json: bool,

    /// Print the matched document's path instead of opening it
    #[arg(short, long, action = ArgAction::SetTrue)]
    print: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    docref::utils::logging::init_logger(cli.color, cli.verbose);
    if !cli.color {
        colored::control::set_override(false);
    }

    let command = tokio::task::spawn_blocking(move || run(cli));

    match race_interrupt(command, tokio::signal::ctrl_c()).await {
        Outcome::Finished(Ok(Ok(()))) => ExitCode::SUCCESS,
        Outcome::Finished(Ok(Err(err))) => {
            eprintln!("{}", format_error(&format!("{:#}", err)));
            ExitCode::FAILURE
        }
        Outcome::Finished(Err(err)) => {
            eprintln!("{}", format_error(&err.to_string()));
            ExitCode::FAILURE
        }
        Outcome::Interrupted => {
            println!("\tInterrupted\n");
            // a pending stdin read cannot be cancelled; exit without joining it
            std::process::exit(0);
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    if !cli.list && cli.keyword.is_none() {
        Cli::command().print_help()?;
        return Ok(());
    }

    debug!("Loading configuration from: {}", cli.config.display());
    let config = Config::load(Some(cli.config.as_path())).context("Failed to load configuration")?;

    let directory = config
        .docs
        .resolve_directory(cli.doc.as_deref())
        .context("Failed to locate documents folder")?;

    let index = Indexer::new(&config.docs)
        .build_index(&directory)
        .with_context(|| format!("Failed to index {}", directory.display()))?;

    if index.is_empty() {
        eprintln!(
            "{}",
            format_warning(&format!("No documents found in {}", directory.display()))
        );
    }

    let presenter = Presenter::new(&config.display);

    match cli.keyword.as_deref() {
        Some(keyword) if !cli.list => {
            cmd_show(&config, &index, &presenter, keyword, cli.json, cli.print)
        }
        _ => cmd_list(&index, &presenter, cli.json),
    }
}

fn cmd_list(index: &DocumentIndex, presenter: &Presenter, json: bool) -> Result<()> {
    let entries = list_all(index);
    info!("Listing {} keywords", entries.len());

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if json {
        writeln!(out, "{}", render_json(&entries)?)?;
    } else {
        presenter.write_listing(&mut out, &entries)?;
    }

    Ok(())
}

fn cmd_show(
    config: &Config,
    index: &DocumentIndex,
    presenter: &Presenter,
    keyword: &str,
    json: bool,
    print: bool,
) -> Result<()> {
    // keep stdout clean for machine-readable output
    let prompt_output: Box<dyn Write> = if json || print {
        Box::new(io::stderr())
    } else {
        Box::new(io::stdout())
    };

    let mut chooser = PromptChooser::new(presenter.clone(), io::stdin().lock(), prompt_output);
    let record = resolve(keyword, index, &mut chooser)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match record {
        None if json => writeln!(out, "null")?,
        None => presenter.write_not_found(&mut out, keyword)?,
        Some(record) if json => writeln!(out, "{}", render_json(record)?)?,
        Some(record) if print => writeln!(out, "{}", record.path.display())?,
        Some(record) => {
            presenter.write_opening(&mut out, &record.path)?;
            out.flush()?;
            DocumentOpener::new(&config.opener)
                .open(&record.path)
                .context("Failed to open document")?;
        }
    }

    Ok(())
}
