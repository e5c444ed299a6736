use std::path::PathBuf;

use clap::Parser;
use colored::Colorize;
use lending_library::{
    Book, CatalogConfig, CatalogObserver, LibraryFacade, LibraryService, Notice, Report,
    TransitionLogger, User, catalog::DEFAULT_MAX_HISTORY_SIZE,
};
use tracing_subscriber::EnvFilter;

/// Command-line arguments for the lending library walkthrough
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Log at debug level instead of info (RUST_LOG takes precedence)
    #[arg(short, long)]
    verbose: bool,

    /// Print the notice history as JSON lines at the end
    #[arg(long)]
    json: bool,

    /// Print the notice history as a markdown table at the end
    #[arg(long)]
    table: bool,

    /// Write a DOT graph of the book lifecycle to this file
    #[arg(long, value_name = "FILE")]
    dot: Option<PathBuf>,

    /// Maximum number of notices kept in the history
    #[arg(long, default_value_t = DEFAULT_MAX_HISTORY_SIZE)]
    history_limit: usize,
}

/// Prints each notice as it happens
#[derive(Debug)]
struct ConsoleNotifier;

impl CatalogObserver for ConsoleNotifier {
    fn on_notice(&self, notice: &Notice) {
        let line = notice.to_string();
        if notice.is_refused() {
            println!("{}", line.yellow());
        } else {
            println!("{}", line.green());
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(default_level(args.verbose))),
        )
        .with_writer(std::io::stderr)
        .init();

    println!("{}", "Lending Library Walkthrough".green().bold());
    println!("===========================\n");

    let mut library =
        LibraryFacade::new(CatalogConfig { max_history_size: args.history_limit });
    library.register_observer(Box::new(ConsoleNotifier));
    library.register_observer(Box::new(TransitionLogger));

    let naruto = library.add_book(Book::regular("Naruto"));
    let dragon_ball = library.add_book(Book::premium("Dragon Ball Z"));
    print_listing(&mut library, "Initial Library Book Collection");

    let naldo = User::regular("Naldo");
    let sam = User::premium("Sam");

    println!("\n{}", "Borrowing Books:".yellow().bold());
    library.borrow_book(naruto, &naldo)?;
    library.borrow_book(dragon_ball, &naldo)?;
    library.borrow_book(dragon_ball, &sam)?;
    print_listing(&mut library, "After Borrowing Books");

    println!("\n{}", "Returning Books:".yellow().bold());
    library.return_book(naruto)?;
    library.return_book(dragon_ball)?;
    print_listing(&mut library, "After Returning Books");

    println!("\n{}", "Reserving a Book:".yellow().bold());
    library.reserve_book(naruto, &naldo)?;
    print_listing(&mut library, "After Reserving the Book");

    println!("\n{}", "Attempting to Borrow a Reserved Book:".yellow().bold());
    library.borrow_book(naruto, &sam)?;

    library.return_book(naruto)?;
    print_listing(&mut library, "After Returning the Reserved Book");

    if args.table {
        println!("\n{}", "Notice History:".yellow().bold());
        println!("{}", Report::history_table(library.history()));
    }

    if args.json {
        for notice in library.history() {
            println!("{}", notice.to_json_line()?);
        }
    }

    if let Some(path) = args.dot {
        let dot = Report::state_machine_dot(library.history());
        Report::save_dot_to_file(&dot, &path)?;
        println!("\nLifecycle graph written to {}", path.display());
    }

    println!("\n{}", "Walkthrough complete!".green().bold());
    Ok(())
}

/// Print every book with its current state under a heading
fn print_listing(library: &mut LibraryFacade, heading: &str) {
    println!("\n{}", format!("{heading}:").cyan().bold());
    print!("{}", Report::listing(library.list_books()));
}

/// Log level used when `RUST_LOG` is unset
fn default_level(verbose: bool) -> &'static str {
    if verbose { "debug" } else { "info" }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::{Args, default_level};

    #[test]
    fn test_default_level_shows_transition_log() {
        // TransitionLogger writes at info, so the quiet default must include it.
        assert_eq!(default_level(false), "info");
        assert_eq!(default_level(true), "debug");
    }

    #[test]
    fn test_args_defaults() {
        let args = Args::parse_from(["lending-library"]);
        assert!(!args.verbose);
        assert!(!args.json && !args.table);
        assert!(args.dot.is_none());
        assert_eq!(args.history_limit, lending_library::catalog::DEFAULT_MAX_HISTORY_SIZE);
    }
}
