use crate::model::Order;

const RULE: &str = "================================================";

/// Render every order with its entries and subtotal
///
/// Orders are numbered from 1; that number is what `/refundorder -i`
/// accepts.
pub fn render_orders(orders: &[Order]) -> String {
    if orders.is_empty() {
        return "There are no orders.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(RULE);
    output.push('\n');

    for (position, order) in orders.iter().enumerate() {
        output.push_str(&format!("Order {}\n", position + 1));
        output.push_str(&format!("Order ID: {}\n", order.id()));
        output.push_str(&format!(
            "Order time: {}\n",
            order.created_at().format("%Y-%m-%d %H:%M:%S")
        ));
        output.push_str(&format!("Status: {}\n", order.status()));

        for (number, entry) in order.entries().iter().enumerate() {
            output.push_str(&format!(
                "{}. {} x{}\n",
                number + 1,
                entry.item.name,
                entry.quantity
            ));
        }

        output.push_str(&format!("\nSubtotal: ${}\n", order.subtotal()));
        output.push_str(RULE);
        output.push('\n');
    }

    output
}
