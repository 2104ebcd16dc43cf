use autolot_core::constants::{BODY_TYPES, DEALERSHIP_NAME, DEALERSHIP_TAGLINE};
use autolot_core::format::format_number;
use autolot_core::vehicle::Vehicle;

use super::{escape, layout, vehicle_grid, Nav};

pub fn render(featured: &[Vehicle], inventory_count: usize) -> String {
    let body_type_links: String = BODY_TYPES
        .iter()
        .map(|body_type| {
            format!(
                "<a class=\"chip\" href=\"/inventory?body_type={}\">{}</a>",
                urlencoding::encode(body_type),
                escape(body_type),
            )
        })
        .collect();

    let count = i64::try_from(inventory_count).unwrap_or(i64::MAX);

    let body = format!(
        r#"<section class="hero">
  <h1>{name}</h1>
  <p>{tagline}</p>
  <form class="hero-search" action="/inventory" method="get">
    <input type="search" name="q" placeholder="Search make, model, or trim">
    <button type="submit">Search {count} vehicles</button>
  </form>
</section>
<section>
  <h2>Shop by body style</h2>
  <div class="chips">{body_type_links}</div>
</section>
<section>
  <h2>Featured vehicles</h2>
  {grid}
  <p><a class="button" href="/inventory">View all inventory</a></p>
</section>
<section class="cta-row">
  <div><h3>Get pre-qualified</h3><p>Estimate your payment before you visit.</p><a href="/financing">Financing options</a></div>
  <div><h3>Questions?</h3><p>Our team is happy to help.</p><a href="/contact">Contact us</a></div>
</section>"#,
        name = escape(DEALERSHIP_NAME),
        tagline = escape(DEALERSHIP_TAGLINE),
        count = format_number(count),
        grid = vehicle_grid(featured, "New arrivals are on their way. Check back soon."),
    );

    layout("Home", Nav::Home, &body)
}
