/// Scenario 1: Menu add/update/delete through the session
mod common;

use common::{empty_session, items, session_with_menu};
use mgw_core::{ErrorCategory, Item, MgwError, Money, Response};

#[test]
fn test_scenario_01_add_item_grows_menu_by_one_and_persists() {
    // GIVEN a menu with one item
    let mut t = session_with_menu(items(&["Tea"]));

    // WHEN adding an item with a valid name and price
    t.run_ok("/additem -n Chicken Rice -p 2.50");

    // THEN the menu grows by exactly that item, and it is saved
    let expected = vec![
        Item::new("Tea", Money::from_cents(100)),
        Item::new("Chicken Rice", Money::from_cents(250)),
    ];
    assert_eq!(t.session.state().menu.items(), expected.as_slice());
    assert_eq!(t.menu_repo.snapshot(), expected);
    assert_eq!(t.menu_repo.save_count(), 1);
}

#[test]
fn test_scenario_01_guided_and_power_forms_agree() {
    let mut t = empty_session();

    t.run_ok("additem --name Laksa --price 4.50");
    t.run_ok("/additem -n Laksa -p 4.50");
    t.run_ok("1 -n Laksa -p 4.50");

    let menu = &t.session.state().menu;
    assert_eq!(menu.len(), 3);
    assert!(menu
        .items()
        .iter()
        .all(|i| *i == Item::new("Laksa", Money::from_cents(450))));
}

#[test]
fn test_scenario_01_delete_shifts_later_items_down() {
    let mut t = session_with_menu(items(&["a", "b", "c", "d"]));

    t.run_ok("/deleteitem -i 1");

    assert_eq!(t.menu_names(), vec!["a", "c", "d"]);
    assert_eq!(t.menu_repo.snapshot().len(), 3);
}

#[test]
fn test_scenario_01_update_changes_only_named_fields() {
    let mut t = session_with_menu(items(&["Tea", "Coffee"]));

    t.run_ok("/updateitem -i 1 -n Kopi");

    let coffee = &t.session.state().menu.items()[1];
    assert_eq!(coffee.name, "Kopi");
    assert_eq!(coffee.price, Money::from_cents(100));
}

#[test]
fn test_scenario_01_rejections_are_format_or_range_errors() {
    let mut t = session_with_menu(items(&["Tea"]));

    let cases = [
        ("/additem -n Tea", ErrorCategory::Format),
        ("/additem -n Tea -p 5", ErrorCategory::Format),
        ("/additem -n Tea -p -1.00", ErrorCategory::Format),
        ("/deleteitem -i x", ErrorCategory::Format),
        ("/deleteitem -i 1", ErrorCategory::Range),
        ("/updateitem -i 9 -p 1.00", ErrorCategory::Range),
    ];
    for (line, category) in cases {
        match t.run(line) {
            Response::Failed(err) => assert_eq!(err.category(), category, "{}", line),
            other => panic!("`{}` should fail, got {:?}", line, other),
        }
    }
    assert_eq!(t.menu_names(), vec!["Tea"]);
    assert_eq!(t.menu_repo.save_count(), 0);
}

#[test]
fn test_scenario_01_delete_on_empty_menu() {
    let mut t = empty_session();
    assert_eq!(t.run("/deleteitem -i 0"), Response::Failed(MgwError::EmptyMenu));
}
