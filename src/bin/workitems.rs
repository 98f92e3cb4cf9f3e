//! workitems CLI — interactive shell standing in for the UI views.
//!
//! One store, constructed at startup, driven by commands on stdin. The
//! same handle a view controller would hold.

use std::io::{BufRead, Write as _};
use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;
use workitems::config::Config;
use workitems::model::{ItemId, NewWorkItem, WorkItem};
use workitems::store::{SharedStore, WorkItemStore};

#[derive(Parser)]
#[command(name = "workitems", about = "Shared work-item state store")]
struct Cli {
    /// TOML seed file of items to preload
    #[arg(long)]
    seed: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    let config = Config::from_env()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.log_level))
        .with_writer(std::io::stderr)
        .init();

    let store = match config.event_cap {
        Some(cap) => WorkItemStore::with_event_cap(cap),
        None => WorkItemStore::new(),
    };
    let store = store.into_shared();

    if let Some(ref path) = cli.seed {
        let seeded = workitems::seed::load(path)?;
        let count = seeded.len();
        let mut store = store.borrow_mut();
        for new in seeded {
            store.add(new);
        }
        println!("Seeded {count} item(s) from {}", path.display());
    }

    run_shell(&store)
}

fn run_shell(store: &SharedStore) -> anyhow::Result<()> {
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();

    loop {
        print!("> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let (command, rest) = match line.split_once(char::is_whitespace) {
            Some((cmd, rest)) => (cmd, rest.trim()),
            None => (line, ""),
        };

        match command {
            "add" => cmd_add(store, rest),
            "list" | "ls" => cmd_list(store),
            "remove" | "rm" => cmd_remove(store, rest),
            "select" => cmd_select(store, rest),
            "current" => cmd_current(store),
            "unselect" => cmd_unselect(store),
            "clear" => cmd_clear(store),
            "events" => cmd_events(store, rest),
            "help" => print_help(),
            "quit" | "exit" => break,
            other => println!("unknown command '{other}' — try 'help'"),
        }
    }

    Ok(())
}

fn cmd_add(store: &SharedStore, title: &str) {
    if title.is_empty() {
        println!("usage: add <title>");
        return;
    }
    let item = store.borrow_mut().add(NewWorkItem::new(title));
    println!("Added: {} {}", item.id, item.title);
}

fn cmd_list(store: &SharedStore) {
    let store = store.borrow();
    let items = store.items();

    if items.is_empty() {
        println!("No work items.");
        return;
    }

    // Header
    println!("{:<8}  {:<40}  CREATED", "ID", "TITLE");
    println!("{}", "-".repeat(68));

    for item in items {
        let title = truncated(&item.title, 40);
        println!(
            "{:<8}  {:<40}  {}",
            item.id.to_string(),
            title,
            item.created_at.format("%Y-%m-%d %H:%M")
        );
    }

    println!("\n{} item(s)", items.len());
}

fn cmd_remove(store: &SharedStore, prefix: &str) {
    if prefix.is_empty() {
        println!("usage: remove <id-prefix>");
        return;
    }
    let id = match resolve_prefix(store, prefix) {
        Ok(id) => id,
        Err(msg) => {
            println!("{msg}");
            return;
        }
    };
    // resolve_prefix only returns listed ids, so the remove always hits
    if let Some(item) = store.borrow_mut().remove(id) {
        println!("Removed: {} {}", item.id, item.title);
    }
}

fn cmd_select(store: &SharedStore, prefix: &str) {
    if prefix.is_empty() {
        println!("usage: select <id-prefix>");
        return;
    }
    let id = match resolve_prefix(store, prefix) {
        Ok(id) => id,
        Err(msg) => {
            println!("{msg}");
            return;
        }
    };
    match store.borrow_mut().select(id) {
        Ok(item) => println!("Current: {} {}", item.id, item.title),
        Err(e) => println!("{e}"),
    }
}

fn cmd_current(store: &SharedStore) {
    match store.borrow().current() {
        Some(item) => {
            println!("ID:       {}", item.id);
            println!("Title:    {}", item.title);
            if !item.details.is_null() {
                println!("Details:  {}", item.details);
            }
            println!("Created:  {}", item.created_at);
        }
        None => println!("No current item."),
    }
}

fn cmd_unselect(store: &SharedStore) {
    match store.borrow_mut().clear_current() {
        Some(item) => println!("Unselected: {} {}", item.id, item.title),
        None => println!("No current item."),
    }
}

fn cmd_clear(store: &SharedStore) {
    let mut store = store.borrow_mut();
    let count = store.len();
    store.clear();
    println!("Cleared {count} item(s).");
}

fn cmd_events(store: &SharedStore, since: &str) {
    let since: u64 = match since {
        "" => 0,
        raw => match raw.parse() {
            Ok(n) => n,
            Err(_) => {
                println!("usage: events [since-seq]");
                return;
            }
        },
    };

    let store = store.borrow();
    let events = store.events_since(since);

    if events.is_empty() {
        println!("No events.");
        return;
    }

    for event in events {
        println!(
            "{:<6}  {}  {:?}",
            event.seq,
            event.timestamp.format("%H:%M:%S"),
            event.kind
        );
    }
}

/// Truncate for display without splitting a multi-byte character.
fn truncated(title: &str, max_chars: usize) -> &str {
    match title.char_indices().nth(max_chars) {
        Some((idx, _)) => &title[..idx],
        None => title,
    }
}

/// Resolve an id prefix against the list — errors on zero or multiple matches.
fn resolve_prefix(store: &SharedStore, prefix: &str) -> Result<ItemId, String> {
    let store = store.borrow();
    let matches: Vec<&WorkItem> = store
        .items()
        .iter()
        .filter(|item| item.id.0.to_string().starts_with(prefix))
        .collect();

    match matches.len() {
        0 => Err(format!("no work item matching prefix '{prefix}'")),
        1 => Ok(matches[0].id),
        n => Err(format!(
            "{n} work items match prefix '{prefix}' — be more specific"
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::truncated;

    #[test]
    fn truncated_cuts_on_char_boundaries() {
        let title = "日".repeat(15);
        let cut = truncated(&title, 13);
        assert_eq!(cut.chars().count(), 13);
        assert_eq!(cut, "日".repeat(13));
    }

    #[test]
    fn truncated_passes_short_titles_through() {
        assert_eq!(truncated("water the garden", 40), "water the garden");
        assert_eq!(truncated("", 40), "");
    }
}

fn print_help() {
    println!("Commands:");
    println!("  add <title>          append a new work item");
    println!("  list                 show the list");
    println!("  remove <id-prefix>   remove the first matching item");
    println!("  select <id-prefix>   make a listed item current");
    println!("  current              show the current item");
    println!("  unselect             clear the current selection");
    println!("  clear                empty the list (selection untouched)");
    println!("  events [since-seq]   show recorded events");
    println!("  quit                 exit");
}
