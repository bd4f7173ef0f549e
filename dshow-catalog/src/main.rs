//! # dshow-catalog
//!
//! Query and export the DirectShow identifier catalog.
//!
//! ## Usage
//! ```bash
//! dshow-catalog list subtype
//! dshow-catalog lookup MEDIASUBTYPE_NV12
//! dshow-catalog find {56A86891-0AD4-11CE-B03A-0020AF0BA770}
//! dshow-catalog export --pretty > catalog.json
//!
//! # Show deprecation warnings and native-call tracing
//! RUST_LOG=dshow_core=debug dshow-catalog lookup MEDIATYPE_File
//! ```

use std::io::{self, Write};

use anyhow::{bail, Context, Result};
use dshow_core::catalog::{CatalogExport, CATALOG_VERSION};
use dshow_core::config::{self, config_file_path};
use dshow_core::merit::MERITS;
use dshow_core::{catalog, Category, Guid, IdentifierEntry};
use serde::Serialize;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

const USAGE: &str = "\
usage: dshow-catalog <command>

commands:
  list [category]          list identifiers, optionally of one category
  lookup <name>            resolve an SDK name, e.g. MEDIATYPE_Video
  find <guid> [category]   find the names carrying a GUID
  merit                    list the named merit levels
  export [--pretty]        dump the whole catalog as JSON
  config                   show the effective configuration

categories: major_type subtype format_type time_format trace_event interface_id class_id";

/// Used when `RUST_LOG` is unset. Keeps deprecation warnings visible.
const DEFAULT_LOG_FILTER: &str = "dshow_catalog=info,dshow_core=warn";

#[derive(Debug, PartialEq)]
enum Command {
    List(Option<Category>),
    Lookup(String),
    Find(Guid, Option<Category>),
    Merit,
    Export { pretty: bool },
    Config,
    Help,
}

fn parse_args(args: &[String]) -> Result<Command> {
    let mut args = args.iter().map(String::as_str);
    let command = match args.next() {
        None | Some("help" | "-h" | "--help") => Command::Help,
        Some("list") => Command::List(args.next().map(str::parse::<Category>).transpose()?),
        Some("lookup") => Command::Lookup(args.next().context("lookup needs a name")?.to_string()),
        Some("find") => {
            let guid = args.next().context("find needs a GUID")?.parse::<Guid>()?;
            Command::Find(guid, args.next().map(str::parse::<Category>).transpose()?)
        }
        Some("merit") => Command::Merit,
        Some("export") => match args.next() {
            None => Command::Export { pretty: false },
            Some("--pretty") => Command::Export { pretty: true },
            Some(other) => bail!("unknown export option: {}", other),
        },
        Some("config") => Command::Config,
        Some(other) => bail!("unknown command: {}\n\n{}", other, USAGE),
    };
    if let Some(extra) = args.next() {
        bail!("unexpected argument: {}", extra);
    }
    Ok(command)
}

fn print_entry(out: &mut impl Write, entry: &IdentifierEntry) -> io::Result<()> {
    let marker = match entry.deprecation {
        Some(_) => "  [deprecated]",
        None => "",
    };
    writeln!(out, "{:<40} {}  {}{}", entry.name, entry.value, entry.category, marker)
}

fn print_json(out: &mut impl Write, value: &impl Serialize, pretty: bool) -> Result<()> {
    if pretty {
        serde_json::to_writer_pretty(&mut *out, value)?;
    } else {
        serde_json::to_writer(&mut *out, value)?;
    }
    writeln!(out)?;
    Ok(())
}

fn run(command: Command, out: &mut impl Write) -> Result<()> {
    let catalog = catalog();
    match command {
        Command::Help => writeln!(out, "{}", USAGE)?,
        Command::List(category) => {
            let entries: Vec<_> = match category {
                Some(category) => catalog.entries(category).collect(),
                None => catalog.iter().collect(),
            };
            for entry in &entries {
                print_entry(out, entry)?;
            }
            debug!(count = entries.len(), "listed identifiers");
        }
        Command::Lookup(name) => {
            catalog.resolve(&name).with_context(|| format!("no identifier named {}", name))?;
            if let Some(entry) = catalog.find(&name) {
                print_json(out, entry, true)?;
            }
        }
        Command::Find(guid, category) => {
            let matches: Vec<_> = Category::ALL
                .into_iter()
                .filter(|c| category.map_or(true, |wanted| wanted == *c))
                .filter_map(|c| catalog.by_value(c, &guid))
                .collect();
            if matches.is_empty() {
                bail!("no identifier has the value {}", guid);
            }
            for entry in matches {
                print_entry(out, entry)?;
            }
        }
        Command::Merit => {
            for (name, merit) in MERITS {
                writeln!(out, "{:<24} {}", name, merit)?;
            }
        }
        Command::Export { pretty } => {
            let export: CatalogExport = catalog.export();
            print_json(out, &export, pretty)?;
        }
        Command::Config => {
            writeln!(out, "# {}", config_file_path().display())?;
            print_json(out, &config::config(), true)?;
        }
    }
    Ok(())
}

fn log_filter() -> Result<EnvFilter> {
    match std::env::var(EnvFilter::DEFAULT_ENV) {
        Ok(directives) => EnvFilter::try_new(&directives).with_context(|| format!("bad RUST_LOG: {}", directives)),
        Err(_) => Ok(EnvFilter::try_new(DEFAULT_LOG_FILTER)?),
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(log_filter()?)
        .with_writer(io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let command = parse_args(&args)?;
    info!(catalog = CATALOG_VERSION, "dshow-catalog v{}", dshow_core::VERSION);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(command, &mut out)
}
