/// Scenario 2: Fuzzy lookup and order placement
mod common;

use common::{menu_of, session_with_menu};
use mgw_core::{ErrorCategory, Item, MgwError, Money, Response};

#[test]
fn test_scenario_02_exact_match_wins() {
    let menu = menu_of(&["Bubble Tea", "Milk Tea", "Tea"]);
    assert_eq!(menu.find_matching_indices("tea"), vec![2]);
}

#[test]
fn test_scenario_02_no_match_is_empty() {
    let menu = menu_of(&["Bubble Tea", "Milk Tea", "Tea"]);
    assert!(menu.find_matching_indices("xyz").is_empty());
}

#[test]
fn test_scenario_02_finditem_renders_matches() {
    let mut t = session_with_menu(common::items(&["Bubble Tea", "Coffee", "Milk Tea"]));

    let output = t.run_ok("finditem tea");
    assert!(output.contains("| 0     | Bubble Tea"));
    assert!(output.contains("| 2     | Milk Tea"));
    assert!(!output.contains("Coffee"));

    let output = t.run_ok("/finditem laksa");
    assert_eq!(output, "No items found matching \"laksa\".");
}

#[test]
fn test_scenario_02_subtotal_of_mixed_order() {
    let mut t = session_with_menu(vec![
        Item::new("chicken rice", Money::from_cents(200)),
        Item::new("bubble tea", Money::from_cents(500)),
    ]);

    t.run_ok("/addorder -i 0 -q 10 -i \"bubble tea\" -q 10");

    let orders = t.session.state().ledger.list();
    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0].subtotal(), Money::from_cents(7000));
    assert_eq!(orders[0].subtotal().to_string(), "70.00");
    assert_eq!(t.ledger_repo.snapshot(), orders.to_vec());
}

#[test]
fn test_scenario_02_out_of_range_reference_is_range_error() {
    let mut t = session_with_menu(common::items(&["Tea"]));

    for line in ["/addorder -i 1", "/addorder -i -1", "/addorder -i 0 -q 0"] {
        let Response::Failed(err) = t.run(line) else {
            panic!("`{}` should fail", line);
        };
        assert_eq!(err.category(), ErrorCategory::Range, "{}", line);
    }
    assert!(t.session.state().ledger.is_empty());
}

#[test]
fn test_scenario_02_ambiguous_name_is_ambiguity_error() {
    let mut t = session_with_menu(common::items(&["Bubble Tea", "Milk Tea"]));

    let response = t.run("addorder -i tea");

    let Response::Failed(err) = &response else {
        panic!("should fail, got {:?}", response);
    };
    assert_eq!(err.category(), ErrorCategory::Ambiguity);
    assert_eq!(
        err,
        &MgwError::AmbiguousItem {
            query: "tea".to_string(),
            candidates: vec!["Bubble Tea".to_string(), "Milk Tea".to_string()],
        }
    );
    assert_eq!(t.ledger_repo.save_count(), 0);
}

#[test]
fn test_scenario_02_exact_name_resolves_order_despite_partial_matches() {
    let mut t = session_with_menu(common::items(&["Bubble Tea", "Milk Tea", "Tea"]));

    t.run_ok("/addorder -i tea -q 2");

    let orders = t.session.state().ledger.list();
    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0].entries().len(), 1);
    assert_eq!(orders[0].entries()[0].item.name, "Tea");
    assert_eq!(orders[0].entries()[0].quantity, 2);
    assert_eq!(t.ledger_repo.save_count(), 1);
}

#[test]
fn test_scenario_02_entries_survive_menu_changes() {
    let mut t = session_with_menu(vec![Item::new("Tea", Money::from_cents(100))]);

    t.run_ok("/addorder -i Tea -q 2");
    t.run_ok("/updateitem -i 0 -p 9.00");
    t.run_ok("/deleteitem -i 0");

    let order = &t.session.state().ledger.list()[0];
    assert_eq!(order.entries()[0].item.price, Money::from_cents(100));
    assert_eq!(order.subtotal(), Money::from_cents(200));
}
