// src/cli.rs
use std::{env, path::{Path, PathBuf}};

use color_eyre::eyre::{eyre, Result, WrapErr};
use rustyline::{error::ReadlineError, DefaultEditor};

use crate::api::{HttpSource, ItemApi, ItemSource};
use crate::config::{consts::*, options, AppOptions};
use crate::error::Error;
use crate::progress::Progress;
use crate::runner::{self, QueryOutcome};
use crate::{clipboard, file, render};

const HELP: &str = include_str!("cli_help.txt");

#[derive(Debug, PartialEq)]
pub enum Parsed {
    Run(Cli),
    Help,
}

/// Command line, applied on top of the config file.
#[derive(Debug, Default, PartialEq)]
pub struct Cli {
    pub config: Option<PathBuf>,
    pub queries: Vec<String>,
    pub url: Option<String>,
    pub out: Option<PathBuf>,
    pub max_files: Option<usize>,
    pub limit: Option<usize>,
    pub hide_output: bool,
    pub clipboard: bool,
    pub no_overwrite: bool,
}

impl Cli {
    pub fn config_path(&self) -> &Path {
        self.config.as_deref().unwrap_or(Path::new(CONFIG_FILE))
    }

    pub fn apply(&self, opts: &mut AppOptions) {
        if let Some(url) = &self.url { opts.source.url = url.clone(); }
        if let Some(out) = &self.out { opts.export.out_dir = out.clone(); }
        if let Some(n) = self.max_files { opts.export.max_files = n; }
        if let Some(n) = self.limit { opts.export.display_limit = n; }
        if self.hide_output { opts.export.hide_output = true; }
        if self.clipboard { opts.export.clipboard = true; }
        if self.no_overwrite { opts.export.overwrite = false; }
    }
}

pub fn run() -> Result<()> {
    let cli = match parse_cli(env::args().skip(1))? {
        Parsed::Help => {
            eprintln!("{HELP}");
            return Ok(());
        }
        Parsed::Run(cli) => cli,
    };

    let mut opts = options::load(cli.config_path())?;
    cli.apply(&mut opts);
    logd!("Options: {:?}", opts);

    println!("Loading item database from {}...", opts.source.url);
    let source = HttpSource::new(&opts.source)?;
    let mut api = ItemApi::new(source).wrap_err("could not load the item database")?;
    println!("Loaded {} items.", api.len());

    if cli.queries.is_empty() {
        repl(&mut api, &opts)
    } else {
        for q in &cli.queries {
            handle_query(&api, q, &opts);
        }
        Ok(())
    }
}

fn repl<S: ItemSource>(api: &mut ItemApi<S>, opts: &AppOptions) -> Result<()> {
    let mut rl = DefaultEditor::new()?;
    loop {
        let line = match rl.readline(PROMPT) {
            Ok(line) => line,
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
            Err(e) => return Err(e.into()),
        };
        let query = line.trim();
        if query.is_empty() { continue; }
        let _ = rl.add_history_entry(query);

        if query.eq_ignore_ascii_case(QUIT) { break; }
        if query.eq_ignore_ascii_case(RELOAD) {
            match api.reload() {
                Ok(n) => println!("Reloaded {n} items."),
                Err(e) => eprintln!("Reload failed, keeping the old catalog: {e}"),
            }
            continue;
        }
        handle_query(api, query, opts);
    }
    Ok(())
}

/// One query: print pages, write files, optionally copy the last page.
fn handle_query<S: ItemSource>(api: &ItemApi<S>, query: &str, opts: &AppOptions) {
    let outcome = runner::run_query(api, query);
    if outcome.is_empty() {
        println!("Item not found.");
        return;
    }

    let (shown, truncated) = outcome.shown(opts.export.display_limit);
    if let QueryOutcome::Distinct(all) = &outcome {
        if truncated {
            println!("Multiple items found ({}); outputting the first {}:", all.len(), shown.len());
        } else {
            println!("Multiple items found:");
        }
        for item in shown {
            println!("  {item}");
        }
    }

    let pages: Vec<String> = shown.iter().map(render::render).collect();
    if !opts.export.hide_output {
        for page in &pages {
            println!("{page}");
        }
    }

    let report = file::export_pages(&opts.export, outcome.items(), &mut Console);
    if !report.failed.is_empty() {
        eprintln!("{} of {} file(s) not written.", report.failed.len(), report.failed.len() + report.written.len());
    }

    if opts.export.clipboard {
        if let (Some(item), Some(page)) = (shown.last(), pages.last()) {
            println!("Copying {} to clipboard...", item.name_or_empty());
            if let Err(e) = clipboard::copy(page) {
                eprintln!("{e}");
            }
        }
    }
}

/// Console progress sink.
struct Console;

impl Progress for Console {
    fn log(&mut self, msg: &str) {
        println!("{msg}");
    }

    fn item_failed(&mut self, name: &str, err: &Error) {
        match err {
            Error::InvalidFileName(_) => eprintln!("Invalid file name! {name:?} was not created."),
            _ => eprintln!("{name:?} was not created. Error: {err}"),
        }
    }
}

pub fn parse_cli<I: IntoIterator<Item = String>>(args: I) -> Result<Parsed> {
    let mut cli = Cli::default();
    let mut args = args.into_iter();
    while let Some(a) = args.next() {
        match a.as_str() {
            "-q" | "--query" => cli.queries.push(args.next().ok_or_else(|| eyre!("Missing value for --query"))?),
            "-o" | "--out" => cli.out = Some(PathBuf::from(args.next().ok_or_else(|| eyre!("Missing output folder"))?)),
            "--max-files" => {
                let v = args.next().ok_or_else(|| eyre!("Missing value for --max-files"))?;
                cli.max_files = Some(v.parse().wrap_err_with(|| format!("Invalid --max-files: {v}"))?);
            }
            "--limit" => {
                let v = args.next().ok_or_else(|| eyre!("Missing value for --limit"))?;
                cli.limit = Some(v.parse().wrap_err_with(|| format!("Invalid --limit: {v}"))?);
            }
            "--hide-output" => cli.hide_output = true,
            "--clipboard" => cli.clipboard = true,
            "--no-overwrite" => cli.no_overwrite = true,
            "--url" => cli.url = Some(args.next().ok_or_else(|| eyre!("Missing value for --url"))?),
            "--config" => cli.config = Some(PathBuf::from(args.next().ok_or_else(|| eyre!("Missing config path"))?)),
            "-h" | "--help" => return Ok(Parsed::Help),
            _ => return Err(eyre!("Unknown arg: {a}")),
        }
    }
    Ok(Parsed::Run(cli))
}
