use mgw_core::{
    InMemoryRepository, Item, Menu, Money, Order, Response, ScriptedPrompter, Session,
};

/// A session over in-memory repositories, plus handles to inspect them
#[allow(dead_code)]
pub struct TestSession {
    pub session: Session,
    pub menu_repo: InMemoryRepository<Item>,
    pub ledger_repo: InMemoryRepository<Order>,
}

#[allow(dead_code)]
impl TestSession {
    /// Run one line with no prompter answers
    pub fn run(&mut self, line: &str) -> Response {
        self.session.execute(line, &mut ScriptedPrompter::default())
    }

    /// Run one line, panicking if it is rejected
    pub fn run_ok(&mut self, line: &str) -> String {
        match self.run(line) {
            Response::Failed(err) => panic!("`{}` failed: {}", line, err),
            response => response.text(),
        }
    }

    pub fn menu_names(&self) -> Vec<String> {
        self.session
            .state()
            .menu
            .items()
            .iter()
            .map(|i| i.name.clone())
            .collect()
    }
}

/// Open a session whose menu starts with `items`
#[allow(dead_code)]
pub fn session_with_menu(items: Vec<Item>) -> TestSession {
    let menu_repo = InMemoryRepository::with_records(items);
    let ledger_repo = InMemoryRepository::new();
    let (session, warnings) =
        Session::open(Box::new(menu_repo.clone()), Box::new(ledger_repo.clone()));
    assert!(warnings.is_empty(), "unexpected load warnings: {:?}", warnings);
    TestSession {
        session,
        menu_repo,
        ledger_repo,
    }
}

#[allow(dead_code)]
pub fn empty_session() -> TestSession {
    session_with_menu(Vec::new())
}

/// Items named `names`, each priced 1.00
#[allow(dead_code)]
pub fn items(names: &[&str]) -> Vec<Item> {
    names
        .iter()
        .map(|n| Item::new(*n, Money::from_cents(100)))
        .collect()
}

#[allow(dead_code)]
pub fn menu_of(names: &[&str]) -> Menu {
    Menu::from_items(items(names))
}
