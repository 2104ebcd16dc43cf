//! Admin dashboard and login form.
//!
//! The dashboard lists every vehicle with a delete button and carries the
//! add-vehicle form. Form field names match the JSON API's camelCase keys
//! so both paths share one validator.

use autolot_core::constants::{
    BODY_TYPES, EXTERIOR_COLORS, FUEL_TYPES, INTERIOR_COLORS, MAKES, MAX_YEAR, MIN_YEAR,
    TRANSMISSIONS,
};
use autolot_core::format::{format_currency, format_date, format_mileage};
use autolot_core::vehicle::{Condition, Vehicle};

use super::{escape, layout, select_options, Nav};

/// Outcome banner shown above the dashboard after a form post.
pub enum AdminNotice<'a> {
    None,
    Created,
    Deleted,
    Error(&'a str),
}

fn notice_html(notice: &AdminNotice<'_>) -> String {
    match notice {
        AdminNotice::None => String::new(),
        AdminNotice::Created => "<p class=\"notice success\">Vehicle added.</p>".to_string(),
        AdminNotice::Deleted => "<p class=\"notice success\">Vehicle removed.</p>".to_string(),
        AdminNotice::Error(message) => {
            format!("<p class=\"notice error\">{}</p>", escape(message))
        }
    }
}

fn vehicle_rows(vehicles: &[Vehicle], writable: bool) -> String {
    vehicles
        .iter()
        .map(|v| {
            let id = urlencoding::encode(&v.id);
            let action = if writable {
                format!(
                    r#"<form action="/admin/vehicles/{id}/delete" method="post" data-confirm="Delete this vehicle?"><button type="submit" class="danger">Delete</button></form>"#
                )
            } else {
                String::new()
            };
            format!(
                r#"<tr>
  <td><a href="/inventory/{id}">{title}</a></td>
  <td>{stock}</td>
  <td>{price}</td>
  <td>{mileage}</td>
  <td>{condition}</td>
  <td>{featured}</td>
  <td>{added}</td>
  <td>{action}</td>
</tr>"#,
                title = escape(&v.display_title()),
                stock = escape(&v.stock_number),
                price = format_currency(v.price),
                mileage = format_mileage(v.mileage),
                condition = v.condition.label(),
                featured = if v.featured { "Yes" } else { "" },
                added = format_date(&v.created_at),
            )
        })
        .collect()
}

fn add_form() -> String {
    let years: String = (MIN_YEAR..=MAX_YEAR)
        .rev()
        .map(|y| format!("<option value=\"{y}\">{y}</option>"))
        .collect();
    let conditions: String = Condition::ALL
        .iter()
        .map(|c| {
            let sel = if *c == Condition::default() { " selected" } else { "" };
            format!("<option value=\"{}\"{sel}>{}</option>", c.as_str(), c.label())
        })
        .collect();

    format!(
        r#"<form class="stacked grid-form" action="/admin/vehicles" method="post">
  <label>Make <select name="make" required>{makes}</select></label>
  <label>Model <input name="model" required></label>
  <label>Year <select name="year" required><option value="">Select</option>{years}</select></label>
  <label>Trim <input name="trim"></label>
  <label>Price ($) <input type="number" name="price" min="1" required></label>
  <label>Mileage <input type="number" name="mileage" min="0" required></label>
  <label>Fuel type <select name="fuelType" required>{fuel}</select></label>
  <label>Transmission <select name="transmission" required>{transmissions}</select></label>
  <label>Exterior color <select name="exteriorColor" required>{exterior}</select></label>
  <label>Interior color <select name="interiorColor">{interior}</select></label>
  <label>Body type <select name="bodyType">{body}</select></label>
  <label>Condition <select name="condition">{conditions}</select></label>
  <label>VIN <input name="vin" maxlength="17"></label>
  <label>Stock # <input name="stockNumber"></label>
  <label>City MPG <input type="number" name="mpgCity" min="0"></label>
  <label>Highway MPG <input type="number" name="mpgHighway" min="0"></label>
  <label>Image URL <input name="image" placeholder="/static/images/..."></label>
  <label class="checkbox"><input type="checkbox" name="featured" value="true"> Featured</label>
  <label class="wide">Description <textarea name="description" rows="4"></textarea></label>
  <button type="submit">Add vehicle</button>
</form>"#,
        makes = select_options(MAKES, None, "Select"),
        fuel = select_options(FUEL_TYPES, None, "Select"),
        transmissions = select_options(TRANSMISSIONS, None, "Select"),
        exterior = select_options(EXTERIOR_COLORS, None, "Select"),
        interior = select_options(INTERIOR_COLORS, None, "Select"),
        body = select_options(BODY_TYPES, None, "Select"),
    )
}

/// `/admin` dashboard.
pub fn dashboard(vehicles: &[Vehicle], writable: bool, notice: AdminNotice<'_>) -> String {
    let banner = if writable {
        String::new()
    } else {
        "<p class=\"notice warning\">File writes are disabled on this deployment. \
         Set ENABLE_FILE_WRITES=true to add or remove vehicles.</p>"
            .to_string()
    };

    let table = if vehicles.is_empty() {
        "<p class=\"empty\">The inventory is empty.</p>".to_string()
    } else {
        format!(
            r#"<table class="admin-table">
<thead><tr><th>Vehicle</th><th>Stock #</th><th>Price</th><th>Mileage</th><th>Condition</th><th>Featured</th><th>Added</th><th></th></tr></thead>
<tbody>{rows}</tbody>
</table>"#,
            rows = vehicle_rows(vehicles, writable),
        )
    };

    let form = if writable {
        format!("<section><h2>Add a vehicle</h2>{}</section>", add_form())
    } else {
        String::new()
    };

    let body = format!(
        r#"<section>
  <div class="admin-header">
    <h1>Inventory admin</h1>
    <a href="/logout">Sign out</a>
  </div>
  {banner}{notice}
  <p>{count} vehicles</p>
  {table}
</section>
{form}"#,
        notice = notice_html(&notice),
        count = vehicles.len(),
    );
    layout("Admin", Nav::Admin, &body)
}

/// `/login` form. `redirect` is echoed back as a hidden field.
pub fn login(redirect: &str, error: Option<&str>) -> String {
    let error = error
        .map(|e| format!("<p class=\"notice error\">{}</p>", escape(e)))
        .unwrap_or_default();
    let body = format!(
        r#"<section class="narrow">
  <h1>Staff sign in</h1>
  {error}
  <form class="stacked" action="/login" method="post">
    <input type="hidden" name="redirect" value="{redirect}">
    <label>Username <input name="username" autocomplete="username" required></label>
    <label>Password <input type="password" name="password" autocomplete="current-password" required></label>
    <button type="submit">Sign in</button>
  </form>
</section>"#,
        redirect = escape(redirect),
    );
    layout("Sign in", Nav::None, &body)
}
