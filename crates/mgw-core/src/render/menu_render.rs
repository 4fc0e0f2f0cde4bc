use crate::errors::MAX_NAME_LEN;
use crate::model::Item;
use crate::ops::Menu;

const INDEX_WIDTH: usize = 5;
const PRICE_WIDTH: usize = 5;

fn row(index: &str, name: &str, price: &str) -> String {
    format!(
        "| {:<iw$} | {:<nw$} | {:<pw$} |\n",
        index,
        name,
        price,
        iw = INDEX_WIDTH,
        nw = MAX_NAME_LEN,
        pw = PRICE_WIDTH
    )
}

fn table<'a>(rows: impl Iterator<Item = (usize, &'a Item)>) -> String {
    let mut output = row("Index", "Name", "Price");
    output.push_str(&row(
        &"-".repeat(INDEX_WIDTH),
        &"-".repeat(MAX_NAME_LEN),
        &"-".repeat(PRICE_WIDTH),
    ));
    for (index, item) in rows {
        output.push_str(&row(&index.to_string(), &item.name, &item.price.to_string()));
    }
    output
}

/// Render the whole menu as a table
pub fn render_menu(menu: &Menu) -> String {
    if menu.is_empty() {
        return "The menu is empty.\n".to_string();
    }
    table(menu.items().iter().enumerate())
}

/// Render the items at `indices`, keeping their menu positions
pub fn render_find_results(menu: &Menu, query: &str, indices: &[usize]) -> String {
    let rows: Vec<(usize, &Item)> = indices
        .iter()
        .filter_map(|&i| menu.get(i).ok().map(|item| (i, item)))
        .collect();
    if rows.is_empty() {
        return format!("No items found matching \"{}\".\n", query);
    }
    table(rows.into_iter())
}
