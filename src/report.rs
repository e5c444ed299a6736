use std::{collections::HashSet, fs::File, io::Write, path::Path};

use crate::{
    book::Book,
    book_state::BookState,
    error::LibraryError,
    events::BookEvent,
    notice::{Notice, Outcome},
    user::User,
};

/// Text renderings of a catalog and its event log
#[derive(Debug)]
pub struct Report;

impl Report {
    /// One line per book, in catalog order
    #[must_use]
    pub fn listing(books: &[Book]) -> String {
        let mut out = String::new();
        for book in books {
            let premium = if book.is_premium() { " [premium]" } else { "" };
            out.push_str(&format!("- {book}{premium}\n"));
        }
        out
    }

    /// Generate a markdown table of the history
    #[must_use]
    #[allow(single_use_lifetimes)]
    pub fn history_table<'a>(notices: impl IntoIterator<Item = &'a Notice>) -> String {
        let mut notices = notices.into_iter().peekable();
        if notices.peek().is_none() {
            return "No notices recorded yet.".to_string();
        }

        let mut table = String::from("| # | Book | Event | From | To | Outcome |\n");
        table.push_str("|---|------|-------|------|----|---------|\n");

        for (i, notice) in notices.enumerate() {
            let row = i.saturating_add(1);
            match notice {
                Notice::CatalogOpened => {
                    table.push_str(&format!("| {row} | | Open | | | {notice} |\n"));
                }
                Notice::Transition(t) => {
                    let outcome = match t.outcome {
                        Outcome::Applied => "applied".to_string(),
                        Outcome::Refused(refusal) => format!("refused: {refusal}"),
                    };
                    table.push_str(&format!(
                        "| {row} | {} | {} | {} | {} | {outcome} |\n",
                        t.title, t.event, t.from, t.to
                    ));
                }
            }
        }

        table
    }

    /// Generate a DOT graph of the transition table for a premium book
    ///
    /// Every state is probed with every event, so refusals show up as dashed
    /// self-loops. Edges traversed by applied transitions in `history` are
    /// drawn red.
    #[must_use]
    #[allow(single_use_lifetimes)]
    pub fn state_machine_dot<'a>(history: impl IntoIterator<Item = &'a Notice>) -> String {
        let probes = [
            ("Borrow (premium member)", BookEvent::Borrow(User::premium("premium member"))),
            ("Borrow (regular member)", BookEvent::Borrow(User::regular("regular member"))),
            ("Return", BookEvent::Return),
            ("Reserve", BookEvent::Reserve(User::regular("regular member"))),
        ];

        let travelled: HashSet<(BookState, BookState)> = history
            .into_iter()
            .filter_map(Notice::transition)
            .filter(|t| t.is_applied())
            .map(|t| (t.from, t.to))
            .collect();

        let mut dot = String::from("digraph book_lifecycle {\n");
        dot.push_str("  rankdir=LR;\n");
        dot.push_str("  node [shape=circle, style=filled, fillcolor=lightblue];\n");

        for state in BookState::ALL {
            // Initial state is highlighted
            let tooltip = state.description();
            if state == BookState::default() {
                dot.push_str(&format!(
                    "  {state} [tooltip=\"{tooltip}\", fillcolor=palegreen, peripheries=2];\n"
                ));
            } else {
                dot.push_str(&format!("  {state} [tooltip=\"{tooltip}\"];\n"));
            }
        }

        for from in BookState::ALL {
            for (label, event) in &probes {
                match from.next(event, true) {
                    Ok(to) => {
                        let style = if travelled.contains(&(from, to)) {
                            "color=red, penwidth=2.0"
                        } else {
                            "color=black"
                        };
                        dot.push_str(&format!("  {from} -> {to} [label=\"{label}\", {style}];\n"));
                    }
                    Err(refusal) => dot.push_str(&format!(
                        "  {from} -> {from} [label=\"{label}: {refusal}\", style=dashed, color=gray];\n"
                    )),
                }
            }
        }

        dot.push_str("}\n");
        dot
    }

    /// Save the DOT representation to a file
    ///
    /// # Errors
    ///
    /// Returns a `LibraryError::Io` if the file cannot be created or written to
    pub fn save_dot_to_file(dot: &str, path: impl AsRef<Path>) -> Result<(), LibraryError> {
        let mut file = File::create(path)?;
        file.write_all(dot.as_bytes())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::Report;
    use crate::{book::Book, catalog::Catalog, error::LibraryError, notice::Notice, user::User};

    /// Nothing recorded yet
    const NO_NOTICES: [Notice; 0] = [];

    #[test]
    fn test_listing() {
        let books = [Book::regular("Naruto"), Book::premium("Dragon Ball Z")];
        assert_eq!(
            Report::listing(&books),
            "- Naruto (State: Available)\n- Dragon Ball Z (State: Available) [premium]\n"
        );
    }

    #[test]
    fn test_empty_history_table() {
        assert_eq!(Report::history_table(&NO_NOTICES), "No notices recorded yet.");
    }

    #[test]
    #[allow(clippy::unwrap_used)]
    fn test_history_table_rows() {
        let mut catalog = Catalog::new();
        let id = catalog.add_book(Book::premium("Dragon Ball Z"));
        catalog.borrow_book(id, &User::regular("Naldo")).unwrap();
        catalog.borrow_book(id, &User::premium("Sam")).unwrap();

        let table = Report::history_table(catalog.history());
        let rows: Vec<&str> = table.lines().collect();
        assert_eq!(rows.len(), 4);
        assert!(rows.iter().any(|row| row.contains("refused: is a premium book")));
        assert!(rows.iter().any(|row| row.contains("| Borrow(Sam) | Available | Borrowed | applied |")));
    }

    #[test]
    #[allow(clippy::unwrap_used)]
    fn test_dot_covers_table() {
        let dot = Report::state_machine_dot(&NO_NOTICES);
        assert!(dot.starts_with("digraph book_lifecycle {"));
        assert!(dot.contains("Available -> Borrowed [label=\"Borrow (premium member)\", color=black];"));
        assert!(dot.contains("Available -> Reserved"));
        assert!(dot.contains("Borrowed -> Available"));
        assert!(dot.contains("Reserved -> Available"));
        assert!(dot.contains("is a premium book"));
        // Three states probed with four events each.
        assert_eq!(dot.matches(" -> ").count(), 12);

        let mut catalog = Catalog::new();
        let id = catalog.add_book(Book::regular("Naruto"));
        catalog.reserve_book(id, &User::regular("Naldo")).unwrap();
        let dot = Report::state_machine_dot(catalog.history());
        assert!(dot.contains("Available -> Reserved [label=\"Reserve\", color=red, penwidth=2.0];"));
    }

    #[test]
    fn test_dot_nodes_carry_descriptions() {
        let dot = Report::state_machine_dot(&NO_NOTICES);
        assert!(dot.contains("Available [tooltip=\"Book is available for borrowing\""));
        assert!(dot.contains("Borrowed [tooltip=\"Book is borrowed by a member\"];"));
        assert!(dot.contains("Reserved [tooltip=\"Book is reserved for a member\"];"));
    }

    #[test]
    #[allow(clippy::unwrap_used)]
    fn test_save_dot_to_file() {
        let path = std::env::temp_dir()
            .join(format!("lending-library-lifecycle-{}.dot", std::process::id()));
        let dot = Report::state_machine_dot(&NO_NOTICES);

        Report::save_dot_to_file(&dot, &path).unwrap();
        let written = fs::read_to_string(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(written, dot);
    }

    #[test]
    fn test_save_dot_to_directory_fails() {
        let result = Report::save_dot_to_file("digraph {}\n", std::env::temp_dir());
        assert!(matches!(result, Err(LibraryError::Io(_))));
    }
}
