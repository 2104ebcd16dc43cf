//! Server-rendered HTML.
//!
//! Each submodule renders one area of the site into a `String`; handlers
//! wrap the result in [`axum::response::Html`]. All interpolated text goes
//! through [`escape`].

pub mod admin;
pub mod home;
pub mod inventory;
pub mod marketing;

use autolot_core::constants::{
    DEALERSHIP_ADDRESS, DEALERSHIP_EMAIL, DEALERSHIP_NAME, DEALERSHIP_PHONE,
};
use autolot_core::format::{format_currency, format_mileage, format_phone_number};
use autolot_core::vehicle::Vehicle;

/// Top-level navigation entries, used to highlight the current page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Nav {
    Home,
    Inventory,
    Financing,
    About,
    Contact,
    Faq,
    Admin,
    None,
}

const NAV_LINKS: &[(Nav, &str, &str)] = &[
    (Nav::Home, "/", "Home"),
    (Nav::Inventory, "/inventory", "Inventory"),
    (Nav::Financing, "/financing", "Financing"),
    (Nav::About, "/about", "About"),
    (Nav::Contact, "/contact", "Contact"),
    (Nav::Faq, "/faq", "FAQ"),
];

/// Escape text for use in element content and quoted attribute values.
pub fn escape(text: &str) -> String {
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

/// Wrap page `body` in the shared document shell (head, header, footer).
pub fn layout(title: &str, active: Nav, body: &str) -> String {
    let nav: String = NAV_LINKS
        .iter()
        .map(|(nav, href, label)| {
            let class = if *nav == active { " class=\"active\"" } else { "" };
            format!("<a href=\"{href}\"{class}>{label}</a>")
        })
        .collect();

    let phone = format_phone_number(DEALERSHIP_PHONE);
    let name = escape(DEALERSHIP_NAME);
    let title = escape(title);

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title} | {name}</title>
<link rel="stylesheet" href="/static/css/site.css">
</head>
<body>
<header class="site-header">
  <a class="brand" href="/">{name}</a>
  <nav>{nav}</nav>
  <a class="header-phone" href="tel:{DEALERSHIP_PHONE}">{phone}</a>
</header>
<main>
{body}
</main>
<footer class="site-footer">
  <p><strong>{name}</strong> &middot; {address}</p>
  <p><a href="tel:{DEALERSHIP_PHONE}">{phone}</a> &middot; <a href="mailto:{DEALERSHIP_EMAIL}">{DEALERSHIP_EMAIL}</a></p>
</footer>
<script src="/static/js/site.js" defer></script>
</body>
</html>
"#,
        address = escape(DEALERSHIP_ADDRESS),
    )
}

/// Summary card linking to a vehicle's detail page.
pub fn vehicle_card(vehicle: &Vehicle) -> String {
    let badge = if vehicle.featured {
        "<span class=\"badge featured\">Featured</span>"
    } else {
        ""
    };

    format!(
        r#"<article class="vehicle-card">
  <a href="/inventory/{id}">
    <img src="{image}" alt="{title}" loading="lazy">
    <h3>{title}</h3>
  </a>
  {badge}<span class="badge">{condition}</span>
  <p class="price">{price}</p>
  <p class="meta">{mileage} &middot; {fuel} &middot; {transmission}</p>
</article>"#,
        id = urlencoding::encode(&vehicle.id),
        image = escape(&vehicle.image),
        title = escape(&vehicle.display_title()),
        condition = vehicle.condition.label(),
        price = format_currency(vehicle.price),
        mileage = format_mileage(vehicle.mileage),
        fuel = escape(&vehicle.fuel_type),
        transmission = escape(&vehicle.transmission),
    )
}

/// Grid of cards, or a message when there is nothing to show.
pub fn vehicle_grid(vehicles: &[Vehicle], empty_message: &str) -> String {
    if vehicles.is_empty() {
        return format!("<p class=\"empty\">{}</p>", escape(empty_message));
    }
    let cards: String = vehicles.iter().map(vehicle_card).collect();
    format!("<div class=\"vehicle-grid\">{cards}</div>")
}

/// `<option>` elements for `values`, preceded by an "any" option.
pub fn select_options<S: AsRef<str>>(
    values: &[S],
    selected: Option<&str>,
    any_label: &str,
) -> String {
    let mut out = format!("<option value=\"\">{}</option>", escape(any_label));
    for value in values {
        let value = value.as_ref();
        let is_selected = selected.is_some_and(|s| s.eq_ignore_ascii_case(value));
        out.push_str(&format!(
            "<option value=\"{v}\"{sel}>{v}</option>",
            v = escape(value),
            sel = if is_selected { " selected" } else { "" },
        ));
    }
    out
}

/// Simple titled page used for 404s and error notices.
pub fn message_page(title: &str, message: &str) -> String {
    let body = format!(
        "<section class=\"message\"><h1>{}</h1><p>{}</p><p><a class=\"button\" href=\"/inventory\">Browse inventory</a></p></section>",
        escape(title),
        escape(message),
    );
    layout(title, Nav::None, &body)
}
