//! Command dispatch for one interactive session
//!
//! [`Session::execute`] is the single point where a typed line becomes a
//! change to the menu or ledger. Every failure is recovered here: the
//! command is abandoned, the message returned, and the session carries on.

use std::time::Instant;

use crate::apply::{apply, Outcome, State, Touched};
use crate::assistant::{self, Guided, Prompter};
use crate::commands::CommandKind;
use crate::core_types::{CommandId, SessionId};
use crate::errors::{MgwError, Result};
use crate::model::{Item, Order};
use crate::ops::{Menu, OrderLedger, Repository};
use crate::parser::{self, RawCommand};
use crate::render;
use crate::rules::validation;
use crate::{log_op_end, log_op_error, log_op_start};

pub const EXIT_MESSAGE: &str = "Goodbye! Thank you for using MoneyGoWhere.";
pub const CANCELLED_MESSAGE: &str = "Command cancelled.";

/// What the caller should show after one line
#[derive(Debug, Clone, PartialEq)]
pub enum Response {
    /// The command ran; `warning` is set if its change could not be saved
    Output {
        text: String,
        warning: Option<MgwError>,
    },
    /// The command was rejected and nothing changed
    Failed(MgwError),
    /// The session is over
    Exit(String),
}

impl Response {
    fn output(text: impl Into<String>) -> Self {
        Response::Output {
            text: text.into(),
            warning: None,
        }
    }

    /// Text to print, without a trailing newline
    pub fn text(&self) -> String {
        match self {
            Response::Output {
                text,
                warning: None,
            } => text.trim_end().to_string(),
            Response::Output {
                text,
                warning: Some(err),
            } => format!(
                "{}\nWarning: {} The change is kept in memory only.",
                text.trim_end(),
                err
            ),
            Response::Failed(err) => err.to_string(),
            Response::Exit(message) => message.clone(),
        }
    }

    pub fn is_exit(&self) -> bool {
        matches!(self, Response::Exit(_))
    }
}

/// One run of the program: in-memory state plus where to persist it
pub struct Session {
    state: State,
    menu_repo: Box<dyn Repository<Item>>,
    ledger_repo: Box<dyn Repository<Order>>,
    session_id: SessionId,
}

impl Session {
    /// Load both snapshots and start a session
    ///
    /// A snapshot that cannot be loaded starts out empty; the load errors
    /// are returned so the caller can report them.
    pub fn open(
        menu_repo: Box<dyn Repository<Item>>,
        ledger_repo: Box<dyn Repository<Order>>,
    ) -> (Self, Vec<MgwError>) {
        let session_id = SessionId::new();
        log_op_start!("session_open", session_id = %session_id);
        let start = Instant::now();
        let mut warnings = Vec::new();

        let menu = match menu_repo.load() {
            Ok(items) => Menu::from_items(items),
            Err(err) => {
                log_op_error!(
                    "load_menu",
                    err.clone(),
                    duration_ms = start.elapsed().as_millis() as u64,
                    session_id = %session_id
                );
                warnings.push(err);
                Menu::new()
            }
        };
        let ledger = match ledger_repo.load() {
            Ok(orders) => OrderLedger::from_orders(orders),
            Err(err) => {
                log_op_error!(
                    "load_ledger",
                    err.clone(),
                    duration_ms = start.elapsed().as_millis() as u64,
                    session_id = %session_id
                );
                warnings.push(err);
                OrderLedger::new()
            }
        };

        log_op_end!(
            "session_open",
            duration_ms = start.elapsed().as_millis() as u64,
            session_id = %session_id,
            menu_len = menu.len(),
            ledger_len = ledger.len()
        );

        let session = Self {
            state: State::new(menu, ledger),
            menu_repo,
            ledger_repo,
            session_id,
        };
        (session, warnings)
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn session_id(&self) -> &SessionId {
        &self.session_id
    }

    /// Handle one input line
    ///
    /// `prompter` is only used when a bare guided command asks for its
    /// values.
    pub fn execute(&mut self, line: &str, prompter: &mut dyn Prompter) -> Response {
        if line.trim().is_empty() {
            return Response::Failed(MgwError::MissingArgument {
                what: "a command".to_string(),
            });
        }

        let raw = parser::parse(line);
        let Some((kind, _)) = CommandKind::lookup(raw.name()) else {
            return Response::Failed(MgwError::UnknownCommand {
                command: raw.name().to_string(),
            });
        };

        let op = kind.name();
        let command_id = CommandId::new();
        log_op_start!(op, command_id = %command_id, session_id = %self.session_id);
        let start = Instant::now();

        let result = self.execute_impl(raw, kind, prompter).map_err(|e| {
            log_op_error!(
                op,
                e.clone(),
                duration_ms = start.elapsed().as_millis() as u64,
                command_id = %command_id
            );
            e
        });

        match result {
            Ok(response) => {
                log_op_end!(
                    op,
                    duration_ms = start.elapsed().as_millis() as u64,
                    command_id = %command_id,
                    menu_len = self.state.menu.len(),
                    ledger_len = self.state.ledger.len()
                );
                response
            }
            Err(err) => Response::Failed(err),
        }
    }

    fn execute_impl(
        &mut self,
        raw: RawCommand,
        kind: CommandKind,
        prompter: &mut dyn Prompter,
    ) -> Result<Response> {
        let raw = if assistant::wants_assistant(&raw, kind) {
            match assistant::run(raw, kind, prompter) {
                Guided::Ready(raw) => raw,
                Guided::Cancelled => return Ok(Response::output(CANCELLED_MESSAGE)),
            }
        } else {
            raw
        };

        let command = validation::validate(raw, kind, &self.state.menu)?;
        let outcome = apply(&mut self.state, command)?;

        if outcome == Outcome::Exit {
            return Ok(Response::Exit(EXIT_MESSAGE.to_string()));
        }

        let warning = self.persist(outcome.touched()).err();
        Ok(Response::Output {
            text: self.describe(&outcome),
            warning,
        })
    }

    /// Rewrite the snapshot a command changed
    fn persist(&self, touched: Touched) -> Result<()> {
        let start = Instant::now();
        let (op, result) = match touched {
            Touched::Nothing => return Ok(()),
            Touched::Menu => ("save_menu", self.menu_repo.save(self.state.menu.items())),
            Touched::Ledger => (
                "save_ledger",
                self.ledger_repo.save(self.state.ledger.list()),
            ),
        };
        if let Err(err) = &result {
            log_op_error!(
                op,
                err.clone(),
                duration_ms = start.elapsed().as_millis() as u64,
                session_id = %self.session_id
            );
        }
        result
    }

    fn describe(&self, outcome: &Outcome) -> String {
        let menu = &self.state.menu;
        match outcome {
            Outcome::Help => render::render_help(),
            Outcome::ItemAdded { index } | Outcome::ItemUpdated { index } => {
                let verb = if matches!(outcome, Outcome::ItemAdded { .. }) {
                    "added"
                } else {
                    "updated"
                };
                match menu.get(*index) {
                    Ok(item) => format!(
                        "Item {} {}: {} (${}).",
                        index, verb, item.name, item.price
                    ),
                    Err(_) => format!("Item {} {}.", index, verb),
                }
            }
            Outcome::ItemDeleted { index, item } => {
                format!("Item {} deleted: {}.", index, item.name)
            }
            Outcome::ItemsFound { query, indices } => {
                render::render_find_results(menu, query, indices)
            }
            Outcome::ItemsListed => render::render_menu(menu),
            Outcome::OrderPlaced { order_id } => {
                let subtotal = self
                    .state
                    .ledger
                    .list()
                    .iter()
                    .find(|o| o.id() == order_id)
                    .map(Order::subtotal)
                    .unwrap_or_default();
                format!("Order {} placed. Subtotal: ${}.", order_id, subtotal)
            }
            Outcome::OrdersListed => render::render_orders(self.state.ledger.list()),
            Outcome::OrderRefunded { order_id } => format!("Order {} refunded.", order_id),
            Outcome::Exit => EXIT_MESSAGE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assistant::ScriptedPrompter;
    use crate::model::Money;
    use crate::ops::InMemoryRepository;

    fn session() -> (Session, InMemoryRepository<Item>, InMemoryRepository<Order>) {
        let menu_repo = InMemoryRepository::new();
        let ledger_repo = InMemoryRepository::new();
        let (session, warnings) =
            Session::open(Box::new(menu_repo.clone()), Box::new(ledger_repo.clone()));
        assert!(warnings.is_empty());
        (session, menu_repo, ledger_repo)
    }

    fn run(session: &mut Session, line: &str) -> Response {
        session.execute(line, &mut ScriptedPrompter::default())
    }

    #[test]
    fn test_add_item_persists() {
        let (mut session, menu_repo, _) = session();

        let response = run(&mut session, "/additem -n Chicken Rice -p 2.50");

        assert_eq!(response.text(), "Item 0 added: Chicken Rice ($2.50).");
        assert_eq!(
            menu_repo.snapshot(),
            vec![Item::new("Chicken Rice", Money::from_cents(250))]
        );
    }

    #[test]
    fn test_rejected_command_changes_nothing() {
        let (mut session, menu_repo, _) = session();

        let response = run(&mut session, "/additem -n Tea -p 5.1");

        assert!(matches!(
            response,
            Response::Failed(MgwError::BadPrecision { .. })
        ));
        assert!(session.state().menu.is_empty());
        assert_eq!(menu_repo.save_count(), 0);
    }

    #[test]
    fn test_unknown_and_empty_lines() {
        let (mut session, _, _) = session();
        assert_eq!(
            run(&mut session, "dance").text(),
            "The command: dance is not a valid command."
        );
        assert!(matches!(
            run(&mut session, "   "),
            Response::Failed(MgwError::MissingArgument { .. })
        ));
    }

    #[test]
    fn test_save_failure_keeps_change_in_memory() {
        let (mut session, menu_repo, _) = session();
        menu_repo.fail_saves(Some("disk full".to_string()));

        let response = run(&mut session, "/additem -n Tea -p 1.00");

        let Response::Output { warning, .. } = &response else {
            panic!("expected Output, got {:?}", response);
        };
        assert!(matches!(warning, Some(MgwError::Persistence { .. })));
        assert!(response.text().contains("kept in memory only"));
        assert_eq!(session.state().menu.len(), 1);
    }

    #[test]
    fn test_load_failure_starts_empty() {
        let menu_repo = InMemoryRepository::with_records(vec![Item::new(
            "Tea",
            Money::from_cents(100),
        )]);
        menu_repo.fail_loads("corrupt file");
        let ledger_repo: InMemoryRepository<Order> = InMemoryRepository::new();

        let (session, warnings) =
            Session::open(Box::new(menu_repo), Box::new(ledger_repo));

        assert_eq!(warnings.len(), 1);
        assert!(session.state().menu.is_empty());
    }

    #[test]
    fn test_guided_flow_and_cancel() {
        let (mut session, _, _) = session();

        let mut prompter = ScriptedPrompter::new(["Laksa", "4.50"]);
        let response = session.execute("1", &mut prompter);
        assert_eq!(response.text(), "Item 0 added: Laksa ($4.50).");

        let mut prompter = ScriptedPrompter::new(["cancel"]);
        let response = session.execute("2", &mut prompter);
        assert_eq!(response.text(), CANCELLED_MESSAGE);
        assert_eq!(session.state().menu.len(), 1);
    }

    #[test]
    fn test_order_and_refund_persist_ledger() {
        let (mut session, _, ledger_repo) = session();
        run(&mut session, "/additem -n Chicken Rice -p 2.00");
        run(&mut session, "/additem -n Bubble Tea -p 5.00");

        let response = run(&mut session, "/addorder -i 0 -q 10 -i bubble -q 10");
        assert!(response.text().ends_with("Subtotal: $70.00."));
        assert_eq!(ledger_repo.save_count(), 1);

        run(&mut session, "/refundorder -i 1");
        assert_eq!(ledger_repo.save_count(), 2);

        let again = run(&mut session, "/refundorder -i 1");
        assert!(matches!(
            again,
            Response::Failed(MgwError::AlreadyRefunded { .. })
        ));
        assert_eq!(ledger_repo.save_count(), 2);
    }

    #[test]
    fn test_exit() {
        let (mut session, _, _) = session();
        assert!(run(&mut session, "exit").is_exit());
        assert!(run(&mut session, "/exit").is_exit());
    }
}
