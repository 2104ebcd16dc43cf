//! Inventory listing and vehicle detail pages.

use autolot_core::constants::{
    BODY_TYPES, FUEL_TYPES, MAX_PRICE, MAX_YEAR, MILEAGE_OPTIONS, MIN_YEAR, PRICE_STEP,
};
use autolot_core::format::{
    format_combined_fuel_economy, format_currency, format_date, format_mileage, format_number,
    format_vin,
};
use autolot_core::inventory::{InventoryFilter, SortOrder};
use autolot_core::vehicle::{Condition, Vehicle};

use super::{escape, layout, select_options, vehicle_grid, Nav};

fn numeric_options(
    values: impl Iterator<Item = i64>,
    selected: Option<i64>,
    label: impl Fn(i64) -> String,
) -> String {
    values
        .map(|value| {
            let sel = if selected == Some(value) { " selected" } else { "" };
            format!("<option value=\"{value}\"{sel}>{}</option>", label(value))
        })
        .collect()
}

fn filter_form(filter: &InventoryFilter, makes: &[String]) -> String {
    let chosen = filter.condition.as_deref().and_then(Condition::parse);
    let conditions: String = Condition::ALL
        .iter()
        .map(|c| {
            let sel = if chosen == Some(*c) {
                " selected"
            } else {
                ""
            };
            format!("<option value=\"{}\"{sel}>{}</option>", c.as_str(), c.label())
        })
        .collect();

    let sort = filter.sort.unwrap_or_default();
    let sorts: String = SortOrder::ALL
        .iter()
        .map(|o| {
            let sel = if *o == sort { " selected" } else { "" };
            format!("<option value=\"{}\"{sel}>{}</option>", o.as_str(), o.label())
        })
        .collect();

    let prices = numeric_options(
        (1..=MAX_PRICE / PRICE_STEP).map(|i| i * PRICE_STEP),
        filter.max_price,
        |p| format!("Under {}", format_currency(p)),
    );
    let years = numeric_options(
        (i64::from(MIN_YEAR)..=i64::from(MAX_YEAR)).rev(),
        filter.min_year.map(i64::from),
        |y| format!("{y} or newer"),
    );
    let mileages = numeric_options(
        MILEAGE_OPTIONS.iter().copied(),
        filter.max_mileage,
        |m| format!("Under {} mi", format_number(m)),
    );

    format!(
        r#"<form class="filters" action="/inventory" method="get">
  <input type="search" name="q" placeholder="Search" value="{q}">
  <select name="make">{makes}</select>
  <select name="body_type">{body_types}</select>
  <select name="condition"><option value="">Any condition</option>{conditions}</select>
  <select name="fuel_type">{fuel_types}</select>
  <select name="max_price"><option value="">Any price</option>{prices}</select>
  <select name="min_year"><option value="">Any year</option>{years}</select>
  <select name="max_mileage"><option value="">Any mileage</option>{mileages}</select>
  <select name="sort">{sorts}</select>
  <button type="submit">Apply</button>
  <a href="/inventory">Reset</a>
</form>"#,
        q = escape(filter.q.as_deref().unwrap_or("")),
        makes = select_options(makes, filter.make.as_deref(), "Any make"),
        body_types = select_options(BODY_TYPES, filter.body_type.as_deref(), "Any body type"),
        fuel_types = select_options(FUEL_TYPES, filter.fuel_type.as_deref(), "Any fuel type"),
    )
}

/// `/inventory` listing page.
pub fn list(
    filter: &InventoryFilter,
    results: &[Vehicle],
    makes: &[String],
    total: usize,
) -> String {
    let summary = if filter.is_active() {
        format!("Showing {} of {} vehicles", results.len(), total)
    } else {
        format!("{total} vehicles in stock")
    };

    let body = format!(
        r#"<section>
  <h1>Inventory</h1>
  {form}
  <p class="summary">{summary}</p>
  {grid}
</section>"#,
        form = filter_form(filter, makes),
        grid = vehicle_grid(results, "No vehicles match your search. Try widening the filters."),
    );
    layout("Inventory", Nav::Inventory, &body)
}

fn spec_row(label: &str, value: &str) -> String {
    if value.trim().is_empty() {
        return String::new();
    }
    format!("<tr><th>{label}</th><td>{}</td></tr>", escape(value))
}

/// `/inventory/{id}` detail page with similar-vehicle suggestions.
pub fn detail(vehicle: &Vehicle, similar: &[Vehicle]) -> String {
    let title = vehicle.display_title();

    let fuel_economy = match (vehicle.mpg_city, vehicle.mpg_highway) {
        (Some(city), Some(hwy)) => format_combined_fuel_economy(city, hwy),
        _ => String::new(),
    };

    let specs = [
        spec_row("Year", &vehicle.year.to_string()),
        spec_row("Make", &vehicle.make),
        spec_row("Model", &vehicle.model),
        spec_row("Trim", &vehicle.trim),
        spec_row("Body type", &vehicle.body_type),
        spec_row("Condition", vehicle.condition.label()),
        spec_row("Mileage", &format_mileage(vehicle.mileage)),
        spec_row("Fuel type", &vehicle.fuel_type),
        spec_row("Fuel economy", &fuel_economy),
        spec_row("Transmission", &vehicle.transmission),
        spec_row("Exterior color", &vehicle.exterior_color),
        spec_row("Interior color", &vehicle.interior_color),
        spec_row("VIN", &format_vin(&vehicle.vin)),
        spec_row("Stock #", &vehicle.stock_number),
        spec_row("Listed", &format_date(&vehicle.created_at)),
    ]
    .concat();

    let description = vehicle
        .description
        .as_deref()
        .map(|d| format!("<p class=\"description\">{}</p>", escape(d)))
        .unwrap_or_default();

    let body = format!(
        r#"<article class="vehicle-detail">
  <p><a href="/inventory">&larr; Back to inventory</a></p>
  <div class="two-column">
    <img src="{image}" alt="{title_attr}">
    <div>
      <h1>{title_attr}</h1>
      <p class="price">{price}</p>
      <p><a class="button" href="/financing?price={price_raw}">Estimate payments</a>
         <a class="button secondary" href="/contact">Ask about this vehicle</a></p>
      {description}
      <table class="specs">{specs}</table>
    </div>
  </div>
</article>
<section>
  <h2>Similar vehicles</h2>
  {similar}
</section>"#,
        image = escape(&vehicle.image),
        title_attr = escape(&title),
        price = format_currency(vehicle.price),
        price_raw = vehicle.price,
        similar = vehicle_grid(similar, "No similar vehicles right now."),
    );
    layout(&title, Nav::Inventory, &body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use autolot_core::vehicle::PLACEHOLDER_IMAGE;

    fn vehicle() -> Vehicle {
        Vehicle {
            id: "v1".into(),
            make: "Toyota".into(),
            model: "RAV4".into(),
            year: 2021,
            trim: "XLE".into(),
            price: 28995,
            mileage: 24500,
            fuel_type: "Hybrid".into(),
            transmission: "CVT".into(),
            exterior_color: "Blue".into(),
            interior_color: String::new(),
            body_type: "SUV".into(),
            condition: Condition::Certified,
            vin: "2T3RWRFV5MW123456".into(),
            stock_number: "T2104".into(),
            title: "2021 Toyota RAV4 XLE".into(),
            image: PLACEHOLDER_IMAGE.into(),
            featured: true,
            mpg_city: Some(41),
            mpg_highway: Some(38),
            description: Some("One owner <b>clean</b> history".into()),
            created_at: Default::default(),
        }
    }

    #[test]
    fn detail_renders_formatted_specs() {
        let html = detail(&vehicle(), &[]);
        assert!(html.contains("$28,995"));
        assert!(html.contains("24,500 mi"));
        assert!(html.contains("2T3 RWRFV 5 MW123456"));
        assert!(html.contains("41 City / 38 Hwy / 40 Combined MPG"));
        assert!(html.contains("One owner &lt;b&gt;clean&lt;/b&gt; history"));
        assert!(!html.contains("Interior color"));
        assert!(html.contains("No similar vehicles right now."));
    }

    #[test]
    fn list_summary_reflects_filtering() {
        let vehicles = vec![vehicle()];
        let idle = list(&InventoryFilter::default(), &vehicles, &["Toyota".into()], 1);
        assert!(idle.contains("1 vehicles in stock"));

        let filter = InventoryFilter {
            make: Some("Honda".into()),
            ..Default::default()
        };
        let html = list(&filter, &[], &["Toyota".into()], 1);
        assert!(html.contains("Showing 0 of 1 vehicles"));
        assert!(html.contains("No vehicles match your search."));
    }

    #[test]
    fn condition_select_matches_any_casing() {
        let filter = InventoryFilter {
            condition: Some("Used".into()),
            ..Default::default()
        };
        let html = list(&filter, &[], &[], 0);
        assert!(html.contains("<option value=\"used\" selected>Used</option>"));
        assert!(!html.contains("<option value=\"new\" selected>"));
    }
}
