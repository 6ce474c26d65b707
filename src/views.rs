//! Minimal HTML rendering for the page flows.
//!
//! Stands in for the external view renderer: every page is plain string
//! building over the store's records, with just enough markup for the
//! forms and tables to work.

use crate::models::bookings;
use crate::models::clients;
use crate::models::print_orders::{self, OrderStatus};
use crate::models::print_products;
use crate::models::services;

/// A booking joined with the names its row displays.
pub struct BookingRow {
    pub booking: bookings::Model,
    pub client_name: String,
    pub service_name: String,
}

/// A print order joined with the names its row displays.
pub struct PrintOrderRow {
    pub order: print_orders::Model,
    pub client_name: String,
    pub product_name: String,
}

/// Escape text for use in HTML body and attribute positions.
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

fn layout(title: &str, body: &str) -> String {
    let title = escape(title);
    format!(
        "<!DOCTYPE html>\n<html>\n<head><title>{title} | Studio Desk</title></head>\n<body>\n\
         <nav><a href=\"/\">Dashboard</a> | <a href=\"/clients\">Clients</a> | \
         <a href=\"/bookings\">Bookings</a> | <a href=\"/services\">Services</a> | \
         <a href=\"/products\">Print Products</a> | <a href=\"/prints\">Print Orders</a> | \
         <a href=\"/invoicing\">Invoicing</a></nav>\n\
         <h1>{title}</h1>\n{body}\n</body>\n</html>\n"
    )
}

fn table(headers: &[&str], rows: &str) -> String {
    let head: String = headers.iter().map(|h| format!("<th>{h}</th>")).collect();
    format!("<table>\n<tr>{head}</tr>\n{rows}</table>\n")
}

/// A one-button inline form, used for the POST delete actions.
fn post_button(action: &str, label: &str) -> String {
    format!(
        "<form method=\"post\" action=\"{action}\" style=\"display:inline\">\
         <button type=\"submit\">{label}</button></form>"
    )
}

fn select(
    name: &str,
    options: impl Iterator<Item = (i64, String)>,
    selected: Option<i64>,
) -> String {
    let mut out = format!("<select name=\"{name}\">");
    for (id, label) in options {
        let sel = if selected == Some(id) { " selected" } else { "" };
        let label = escape(&label);
        out.push_str(&format!("<option value=\"{id}\"{sel}>{label}</option>"));
    }
    out.push_str("</select>");
    out
}

fn status_select(selected: OrderStatus) -> String {
    let mut out = String::from("<select name=\"status\">");
    for status in [
        OrderStatus::Ordered,
        OrderStatus::Printed,
        OrderStatus::Collected,
    ] {
        let sel = if status == selected { " selected" } else { "" };
        let label = status.as_str();
        out.push_str(&format!("<option value=\"{label}\"{sel}>{label}</option>"));
    }
    out.push_str("</select>");
    out
}

/// Prices are in rand, as the studio quotes them.
fn money(price: f64) -> String {
    format!("R{price:.2}")
}

// ── Dashboard ──

pub fn dashboard_page(upcoming: &[BookingRow], recent: &[clients::Model]) -> String {
    let mut body = String::from("<h2>Upcoming Bookings</h2>\n");
    if upcoming.is_empty() {
        body.push_str("<p>No upcoming bookings.</p>\n");
    } else {
        let rows: String = upcoming
            .iter()
            .map(|row| {
                let b = &row.booking;
                format!(
                    "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
                    b.date,
                    b.time.format("%H:%M"),
                    escape(&row.client_name),
                    escape(&row.service_name),
                )
            })
            .collect();
        body.push_str(&table(&["Date", "Time", "Client", "Service"], &rows));
    }

    body.push_str("<h2>Recent Clients</h2>\n");
    if recent.is_empty() {
        body.push_str("<p>No clients yet.</p>\n");
    } else {
        let rows: String = recent
            .iter()
            .map(|c| {
                format!(
                    "<tr><td><a href=\"/clients/{}\">{}</a></td><td>{}</td></tr>\n",
                    c.id,
                    escape(&c.name),
                    escape(&c.email),
                )
            })
            .collect();
        body.push_str(&table(&["Name", "Email"], &rows));
    }

    layout("Dashboard", &body)
}

pub fn invoicing_page() -> String {
    layout("Invoicing", "<p>No invoices yet.</p>")
}

// ── Clients ──

pub fn clients_page(clients: &[clients::Model]) -> String {
    let rows: String = clients
        .iter()
        .map(|c| {
            format!(
                "<tr><td><a href=\"/clients/{id}\">{name}</a></td><td>{email}</td>\
                 <td>{phone}</td><td><a href=\"/clients/edit/{id}\">Edit</a> {delete}</td></tr>\n",
                id = c.id,
                name = escape(&c.name),
                email = escape(&c.email),
                phone = escape(&c.phone),
                delete = post_button(&format!("/clients/delete/{}", c.id), "Delete"),
            )
        })
        .collect();
    let body = format!(
        "<p><a href=\"/clients/add\">Add Client</a></p>\n{}",
        table(&["Name", "Email", "Phone", ""], &rows)
    );
    layout("Clients", &body)
}

pub fn client_details_page(
    client: &clients::Model,
    bookings: &[BookingRow],
    orders: &[PrintOrderRow],
) -> String {
    let mut body = format!(
        "<p>Email: {} | Phone: {}</p>\n\
         <p><a href=\"/clients/edit/{}\">Edit</a></p>\n<h2>Bookings</h2>\n",
        escape(&client.email),
        escape(&client.phone),
        client.id,
    );
    if bookings.is_empty() {
        body.push_str("<p>No bookings.</p>\n");
    } else {
        let rows: String = bookings
            .iter()
            .map(|row| {
                let b = &row.booking;
                format!(
                    "<tr><td>{}</td><td>{}</td><td>{}</td></tr>\n",
                    b.date,
                    b.time.format("%H:%M"),
                    escape(&row.service_name),
                )
            })
            .collect();
        body.push_str(&table(&["Date", "Time", "Service"], &rows));
    }

    body.push_str("<h2>Print Orders</h2>\n");
    if orders.is_empty() {
        body.push_str("<p>No print orders.</p>\n");
    } else {
        let rows: String = orders
            .iter()
            .map(|row| {
                format!(
                    "<tr><td>{}</td><td>{}</td><td>{}</td></tr>\n",
                    escape(&row.product_name),
                    row.order.quantity,
                    row.order.status.as_str(),
                )
            })
            .collect();
        body.push_str(&table(&["Product", "Quantity", "Status"], &rows));
    }

    layout(&client.name, &body)
}

fn client_form(action: &str, existing: Option<&clients::Model>) -> String {
    let (name, email, phone) = match existing {
        Some(c) => (escape(&c.name), escape(&c.email), escape(&c.phone)),
        None => (String::new(), String::new(), String::new()),
    };
    format!(
        "<form method=\"post\" action=\"{action}\">\n\
         <p><label>Name <input name=\"name\" value=\"{name}\" required></label></p>\n\
         <p><label>Email <input name=\"email\" type=\"email\" value=\"{email}\" required></label></p>\n\
         <p><label>Phone <input name=\"phone\" value=\"{phone}\" required></label></p>\n\
         <button type=\"submit\">Save</button>\n</form>"
    )
}

pub fn add_client_page() -> String {
    layout("Add Client", &client_form("/clients/add", None))
}

pub fn edit_client_page(client: &clients::Model) -> String {
    let action = format!("/clients/edit/{}", client.id);
    layout("Edit Client", &client_form(&action, Some(client)))
}

// ── Services and print products (same name + price shape) ──

fn priced_form(action: &str, name: &str, price: Option<f64>) -> String {
    let name = escape(name);
    let price = price.map(|p| p.to_string()).unwrap_or_default();
    format!(
        "<form method=\"post\" action=\"{action}\">\n\
         <p><label>Name <input name=\"name\" value=\"{name}\" required></label></p>\n\
         <p><label>Price <input name=\"price\" type=\"number\" step=\"0.01\" min=\"0\" \
         value=\"{price}\" required></label></p>\n\
         <button type=\"submit\">Save</button>\n</form>"
    )
}

fn priced_rows(items: impl Iterator<Item = (i64, String, f64)>, base: &str) -> String {
    items
        .map(|(id, name, price)| {
            format!(
                "<tr><td>{name}</td><td>{price}</td>\
                 <td><a href=\"{base}/edit/{id}\">Edit</a> {delete}</td></tr>\n",
                name = escape(&name),
                price = money(price),
                delete = post_button(&format!("{base}/delete/{id}"), "Delete"),
            )
        })
        .collect()
}

pub fn services_page(services: &[services::Model]) -> String {
    let rows = priced_rows(
        services.iter().map(|s| (s.id, s.name.clone(), s.price)),
        "/services",
    );
    let body = format!(
        "<p><a href=\"/services/add\">Add Service</a></p>\n{}",
        table(&["Service", "Price", ""], &rows)
    );
    layout("Services", &body)
}

pub fn add_service_page() -> String {
    layout("Add Service", &priced_form("/services/add", "", None))
}

pub fn edit_service_page(service: &services::Model) -> String {
    let action = format!("/services/edit/{}", service.id);
    layout(
        "Edit Service",
        &priced_form(&action, &service.name, Some(service.price)),
    )
}

pub fn print_products_page(products: &[print_products::Model]) -> String {
    let rows = priced_rows(
        products.iter().map(|p| (p.id, p.name.clone(), p.price)),
        "/products",
    );
    let body = format!(
        "<p><a href=\"/products/add\">Add Print Product</a></p>\n{}",
        table(&["Product", "Price", ""], &rows)
    );
    layout("Print Products", &body)
}

pub fn add_print_product_page() -> String {
    layout("Add Print Product", &priced_form("/products/add", "", None))
}

pub fn edit_print_product_page(product: &print_products::Model) -> String {
    let action = format!("/products/edit/{}", product.id);
    layout(
        "Edit Print Product",
        &priced_form(&action, &product.name, Some(product.price)),
    )
}

// ── Bookings ──

pub fn bookings_page(bookings: &[BookingRow]) -> String {
    let rows: String = bookings
        .iter()
        .map(|row| {
            let b = &row.booking;
            format!(
                "<tr><td>{date}</td><td>{time}</td><td>{client}</td><td>{service}</td>\
                 <td><a href=\"/bookings/edit/{id}\">Edit</a> {delete}</td></tr>\n",
                date = b.date,
                time = b.time.format("%H:%M"),
                client = escape(&row.client_name),
                service = escape(&row.service_name),
                id = b.id,
                delete = post_button(&format!("/bookings/delete/{}", b.id), "Delete"),
            )
        })
        .collect();
    let body = format!(
        "<p><a href=\"/bookings/add\">Add Booking</a></p>\n{}",
        table(&["Date", "Time", "Client", "Service", ""], &rows)
    );
    layout("Bookings", &body)
}

fn booking_form(
    action: &str,
    existing: Option<&bookings::Model>,
    clients: &[clients::Model],
    services: &[services::Model],
) -> String {
    let date = existing.map(|b| b.date.to_string()).unwrap_or_default();
    let time = existing
        .map(|b| b.time.format("%H:%M").to_string())
        .unwrap_or_default();
    let client_picker = select(
        "client_id",
        clients.iter().map(|c| (c.id, c.name.clone())),
        existing.map(|b| b.client_id),
    );
    let service_picker = select(
        "service_id",
        services.iter().map(|s| (s.id, s.name.clone())),
        existing.map(|b| b.service_id),
    );
    format!(
        "<form method=\"post\" action=\"{action}\">\n\
         <p><label>Date <input name=\"booking_date\" type=\"date\" value=\"{date}\" required></label></p>\n\
         <p><label>Time <input name=\"booking_time\" type=\"time\" value=\"{time}\" required></label></p>\n\
         <p><label>Client {client_picker}</label></p>\n\
         <p><label>Service {service_picker}</label></p>\n\
         <button type=\"submit\">Save</button>\n</form>"
    )
}

pub fn add_booking_page(clients: &[clients::Model], services: &[services::Model]) -> String {
    layout(
        "Add Booking",
        &booking_form("/bookings/add", None, clients, services),
    )
}

pub fn edit_booking_page(
    booking: &bookings::Model,
    clients: &[clients::Model],
    services: &[services::Model],
) -> String {
    let action = format!("/bookings/edit/{}", booking.id);
    layout(
        "Edit Booking",
        &booking_form(&action, Some(booking), clients, services),
    )
}

// ── Print orders ──

pub fn print_orders_page(orders: &[PrintOrderRow]) -> String {
    let rows: String = orders
        .iter()
        .map(|row| {
            let o = &row.order;
            format!(
                "<tr><td>{client}</td><td>{product}</td><td>{quantity}</td><td>{status}</td>\
                 <td><a href=\"/prints/edit/{id}\">Edit</a> {delete}</td></tr>\n",
                client = escape(&row.client_name),
                product = escape(&row.product_name),
                quantity = o.quantity,
                status = o.status.as_str(),
                id = o.id,
                delete = post_button(&format!("/prints/delete/{}", o.id), "Delete"),
            )
        })
        .collect();
    let body = format!(
        "<p><a href=\"/prints/add\">Add Print Order</a></p>\n{}",
        table(&["Client", "Product", "Quantity", "Status", ""], &rows)
    );
    layout("Print Orders", &body)
}

pub fn add_print_order_page(
    clients: &[clients::Model],
    products: &[print_products::Model],
) -> String {
    let client_picker = select(
        "client_id",
        clients.iter().map(|c| (c.id, c.name.clone())),
        None,
    );
    let product_picker = select(
        "product_id",
        products.iter().map(|p| (p.id, p.name.clone())),
        None,
    );
    let body = format!(
        "<form method=\"post\" action=\"/prints/add\">\n\
         <p><label>Client {client_picker}</label></p>\n\
         <p><label>Product {product_picker}</label></p>\n\
         <p><label>Quantity <input name=\"quantity\" type=\"number\" min=\"1\" value=\"1\" required></label></p>\n\
         <button type=\"submit\">Save</button>\n</form>"
    );
    layout("Add Print Order", &body)
}

pub fn edit_print_order_page(
    order: &print_orders::Model,
    clients: &[clients::Model],
    products: &[print_products::Model],
) -> String {
    let client_picker = select(
        "client_id",
        clients.iter().map(|c| (c.id, c.name.clone())),
        Some(order.client_id),
    );
    let product_picker = select(
        "product_id",
        products.iter().map(|p| (p.id, p.name.clone())),
        Some(order.product_id),
    );
    let status_picker = status_select(order.status);
    let action = format!("/prints/edit/{}", order.id);
    let body = format!(
        "<form method=\"post\" action=\"{action}\">\n\
         <p><label>Client {client_picker}</label></p>\n\
         <p><label>Product {product_picker}</label></p>\n\
         <p><label>Quantity <input name=\"quantity\" type=\"number\" min=\"1\" value=\"{}\" required></label></p>\n\
         <p><label>Status {status_picker}</label></p>\n\
         <button type=\"submit\">Save</button>\n</form>",
        order.quantity,
    );
    layout("Edit Print Order", &body)
}

#[cfg(test)]
mod tests {
    use super::escape;

    #[test]
    fn escape_covers_markup_characters() {
        assert_eq!(
            escape("<a href=\"x\">R&D 'shots'</a>"),
            "&lt;a href=&quot;x&quot;&gt;R&amp;D &#39;shots&#39;&lt;/a&gt;"
        );
        assert_eq!(escape("plain text"), "plain text");
    }
}
