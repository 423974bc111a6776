//! # Product Commands
//!
//! Parses stdin lines into [`Command`]s, runs them against the manager and
//! renders the sorted list (or the error) after each one.
//!
//! ## Session Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Command Session                                      │
//! │                                                                         │
//! │  "> add Apple | 5"                                                      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Command::from_str ──► Command::Add { name: "Apple", quantity: "5" }   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  execute(&mut manager, command) ──► Reply::Products                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  render_products(manager.products())                                   │
//! │                                                                         │
//! │  Removal is two lines:                                                 │
//! │  "> rm 2"  ──► Reply::ConfirmRemoval(request) ──► prompt [y/N]         │
//! │  "y"       ──► confirm_removal(request)                                │
//! │  anything else ──► decline_removal(request)                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Product References
//! Commands that take `<id>` accept either the product id or the row
//! number shown in the last rendered list (1-based).

use std::fmt::Write as _;
use std::str::FromStr;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::debug;

use stockroom_core::{EditDraft, Product, RemovalRequest};

use crate::error::ApiError;
use crate::state::InventoryManager;

/// Usage text printed by `help`.
pub const HELP: &str = "\
Commands:
  list                      Show all products
  add <name> | <quantity>   Add a product
  edit <id>                 Start editing a product
  save <name> | <quantity>  Save the product being edited
  cancel                    Abandon the current edit
  inc <id>                  Add one unit
  dec <id>                  Remove one unit (never below zero)
  rm <id>                   Remove a product (asks for confirmation)
  help                      Show this help
  quit                      Exit

<id> is a product id or a row number from the list.";

// =============================================================================
// Command
// =============================================================================

/// One parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    List,
    Add { name: String, quantity: String },
    Edit(String),
    Save { name: String, quantity: String },
    Cancel,
    Increase(String),
    Decrease(String),
    Remove(String),
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = ApiError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };

        match verb.to_lowercase().as_str() {
            "list" | "ls" => Ok(Command::List),
            "add" => {
                let (name, quantity) = split_fields(rest);
                Ok(Command::Add { name, quantity })
            }
            "save" => {
                let (name, quantity) = split_fields(rest);
                Ok(Command::Save { name, quantity })
            }
            "edit" => target(verb, rest).map(Command::Edit),
            "cancel" => Ok(Command::Cancel),
            "inc" | "+" => target(verb, rest).map(Command::Increase),
            "dec" | "-" => target(verb, rest).map(Command::Decrease),
            "rm" | "remove" | "del" => target(verb, rest).map(Command::Remove),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" | "q" => Ok(Command::Quit),
            "" => Err(ApiError::invalid_command("Empty command")),
            other => Err(ApiError::invalid_command(format!(
                "Unknown command: {} (try `help`)",
                other
            ))),
        }
    }
}

/// Splits `name | quantity`. A missing `|` leaves the quantity empty.
fn split_fields(rest: &str) -> (String, String) {
    match rest.split_once('|') {
        Some((name, quantity)) => (name.trim().to_string(), quantity.trim().to_string()),
        None => (rest.trim().to_string(), String::new()),
    }
}

fn target(verb: &str, rest: &str) -> Result<String, ApiError> {
    match rest.split_whitespace().next() {
        Some(token) => Ok(token.to_string()),
        None => Err(ApiError::invalid_command(format!(
            "`{}` needs a product id or row number",
            verb
        ))),
    }
}

// =============================================================================
// Execution
// =============================================================================

/// What a command produced, before rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Show the current list.
    Products,
    /// An edit started; show the prefilled values.
    Editing(EditDraft),
    /// Removal needs a yes/no answer on the next line.
    ConfirmRemoval(RemovalRequest),
    Help,
    Quit,
}

/// Runs one command against the manager.
pub fn execute(manager: &mut InventoryManager, command: Command) -> Result<Reply, ApiError> {
    debug!(?command, "Executing command");

    match command {
        Command::List => Ok(Reply::Products),
        Command::Add { name, quantity } => {
            manager.add(&name, &quantity)?;
            Ok(Reply::Products)
        }
        Command::Edit(token) => {
            let id = resolve_id(manager, &token);
            Ok(Reply::Editing(manager.begin_edit(&id)?))
        }
        Command::Save { name, quantity } => {
            manager.commit_edit(&name, &quantity)?;
            Ok(Reply::Products)
        }
        Command::Cancel => {
            manager.cancel_edit();
            Ok(Reply::Products)
        }
        Command::Increase(token) => {
            let id = resolve_id(manager, &token);
            manager.increase_quantity(&id)?;
            Ok(Reply::Products)
        }
        Command::Decrease(token) => {
            let id = resolve_id(manager, &token);
            manager.decrease_quantity(&id)?;
            Ok(Reply::Products)
        }
        Command::Remove(token) => {
            let id = resolve_id(manager, &token);
            Ok(Reply::ConfirmRemoval(manager.request_removal(&id)?))
        }
        Command::Help => Ok(Reply::Help),
        Command::Quit => Ok(Reply::Quit),
    }
}

/// Maps a row number from the rendered list to its product id.
///
/// Anything that isn't an in-range row number is taken as an id.
fn resolve_id(manager: &InventoryManager, token: &str) -> String {
    token
        .parse::<usize>()
        .ok()
        .and_then(|row| row.checked_sub(1))
        .and_then(|index| manager.products().get(index))
        .map(|p| p.id.clone())
        .unwrap_or_else(|| token.to_string())
}

// =============================================================================
// Rendering
// =============================================================================

/// Renders the sorted list as a table. `*` marks the product under edit.
pub fn render_products(products: &[Product], editing: Option<&str>) -> String {
    if products.is_empty() {
        return "(no products)\n".to_string();
    }

    let name_width = products
        .iter()
        .map(|p| p.name.chars().count())
        .max()
        .unwrap_or(0)
        .max(4);

    let mut out = String::new();
    let _ = writeln!(out, "    #  {:<name_width$}  {:>8}  Id", "Name", "Qty");
    for (row, product) in products.iter().enumerate() {
        let marker = if editing == Some(product.id.as_str()) { '*' } else { ' ' };
        let _ = writeln!(
            out,
            "{} {:>3}  {:<name_width$}  {:>8}  {}",
            marker,
            row + 1,
            product.name,
            product.quantity,
            product.id
        );
    }
    out
}

fn render_draft(draft: &EditDraft) -> String {
    format!(
        "Editing \"{}\". Current values: {} | {}\nUse `save <name> | <quantity>` or `cancel`.\n",
        draft.name, draft.name, draft.quantity_text
    )
}

fn render_error(err: &ApiError) -> String {
    format!("Error: {}\n", err.message)
}

fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}

// =============================================================================
// Session
// =============================================================================

/// Reads commands until `quit` or end of input.
pub async fn run_session<R, W>(
    manager: &mut InventoryManager,
    input: R,
    output: &mut W,
) -> std::io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = input.lines();
    let mut pending: Option<RemovalRequest> = None;

    output
        .write_all(render_products(manager.products(), manager.editing()).as_bytes())
        .await?;

    loop {
        if pending.is_none() {
            output.write_all(b"> ").await?;
        }
        output.flush().await?;

        let Some(line) = lines.next_line().await? else {
            if let Some(request) = pending.take() {
                manager.decline_removal(request);
            }
            break;
        };

        if let Some(request) = pending.take() {
            let text = if is_affirmative(&line) {
                match manager.confirm_removal(request) {
                    Ok(_) => render_products(manager.products(), manager.editing()),
                    Err(e) => render_error(&ApiError::from(e)),
                }
            } else {
                manager.decline_removal(request);
                format!("Kept.\n{}", render_products(manager.products(), manager.editing()))
            };
            output.write_all(text.as_bytes()).await?;
            continue;
        }

        if line.trim().is_empty() {
            continue;
        }

        let reply = line
            .parse::<Command>()
            .and_then(|command| execute(manager, command));

        let text = match reply {
            Ok(Reply::Products) => render_products(manager.products(), manager.editing()),
            Ok(Reply::Editing(draft)) => render_draft(&draft),
            Ok(Reply::ConfirmRemoval(request)) => {
                let prompt = format!("{} [y/N] ", request.prompt());
                pending = Some(request);
                prompt
            }
            Ok(Reply::Help) => format!("{}\n", HELP),
            Ok(Reply::Quit) => break,
            Err(e) => render_error(&e),
        };
        output.write_all(text.as_bytes()).await?;
    }

    output.flush().await
}

// =============================================================================
// Unit Tests
// =============================================================================
