//! About, contact, FAQ, and financing pages.

use autolot_core::constants::{
    BUSINESS_HOURS, DEALERSHIP_ADDRESS, DEALERSHIP_EMAIL, DEALERSHIP_NAME, DEALERSHIP_PHONE,
    LOAN_TERMS,
};
use autolot_core::finance::LoanEstimate;
use autolot_core::format::{format_currency, format_number, format_percentage, format_phone_number};

use super::{escape, layout, Nav};

const FAQ: &[(&str, &str)] = &[
    (
        "Do you accept trade-ins?",
        "Yes. Bring your vehicle and title to the showroom and we will appraise it while you shop. Appraisals are free and carry no obligation.",
    ),
    (
        "Can I get financing with less-than-perfect credit?",
        "We work with a network of lenders covering a wide range of credit profiles. Use the payment estimator on the financing page, then apply in person or by phone.",
    ),
    (
        "Are your used vehicles inspected?",
        "Every used vehicle passes a multi-point inspection before it is listed. Certified pre-owned vehicles also include an extended limited warranty.",
    ),
    (
        "Can I schedule a test drive?",
        "Call us or send a message through the contact page with the vehicle's stock number and a time that suits you.",
    ),
    (
        "Do you deliver?",
        "We offer home delivery within 50 miles of the dealership. Contact us for a quote beyond that radius.",
    ),
    (
        "What documents do I need to buy?",
        "A valid driver's license, proof of insurance, and, if financing, recent proof of income and residence.",
    ),
];

pub fn about(inventory_count: usize) -> String {
    let count = format_number(i64::try_from(inventory_count).unwrap_or(i64::MAX));
    let body = format!(
        r#"<section>
  <h1>About {name}</h1>
  <p>We are a family-owned dealership serving the region for over twenty years. Our goal is simple: honest prices, well-inspected vehicles, and no-pressure service.</p>
  <ul class="stats">
    <li><strong>{count}</strong> vehicles in stock</li>
    <li><strong>20+</strong> years in business</li>
    <li><strong>5,000+</strong> happy drivers</li>
  </ul>
  <h2>Our promise</h2>
  <p>Every vehicle on our lot is inspected, reconditioned, and priced against the market so you can skip the haggling.</p>
</section>"#,
        name = escape(DEALERSHIP_NAME),
    );
    layout("About", Nav::About, &body)
}

/// What the contact page should show above (or instead of) the form.
pub enum ContactNotice<'a> {
    None,
    /// Inquiry accepted; carries the visitor's name.
    Sent(&'a str),
    /// Form rejected; carries the reason.
    Invalid(&'a str),
}

pub fn contact(notice: ContactNotice<'_>) -> String {
    let hours: String = BUSINESS_HOURS
        .iter()
        .map(|(days, hours)| format!("<tr><th>{days}</th><td>{hours}</td></tr>"))
        .collect();

    let form_or_thanks = match notice {
        ContactNotice::Sent(name) => format!(
            "<p class=\"notice success\">Thanks, {}! We will be in touch shortly.</p>",
            escape(name)
        ),
        other => {
            let error = match other {
                ContactNotice::Invalid(reason) => {
                    format!("<p class=\"notice error\">{}</p>", escape(reason))
                }
                _ => String::new(),
            };
            format!(
                r#"{error}<form class="stacked" action="/contact" method="post">
  <label>Name <input name="name" required></label>
  <label>Email <input type="email" name="email" required></label>
  <label>Phone <input type="tel" name="phone"></label>
  <label>Message <textarea name="message" rows="5" required></textarea></label>
  <button type="submit">Send message</button>
</form>"#
            )
        }
    };

    let body = format!(
        r#"<section class="two-column">
  <div>
    <h1>Contact us</h1>
    <p>{address}</p>
    <p><a href="tel:{DEALERSHIP_PHONE}">{phone}</a></p>
    <p><a href="mailto:{DEALERSHIP_EMAIL}">{DEALERSHIP_EMAIL}</a></p>
    <h2>Hours</h2>
    <table class="hours">{hours}</table>
  </div>
  <div>{form_or_thanks}</div>
</section>"#,
        address = escape(DEALERSHIP_ADDRESS),
        phone = format_phone_number(DEALERSHIP_PHONE),
    );
    layout("Contact", Nav::Contact, &body)
}

pub fn faq() -> String {
    let items: String = FAQ
        .iter()
        .map(|(q, a)| {
            format!(
                "<details><summary>{}</summary><p>{}</p></details>",
                escape(q),
                escape(a)
            )
        })
        .collect();

    let body = format!(
        "<section><h1>Frequently asked questions</h1><div class=\"faq\">{items}</div></section>"
    );
    layout("FAQ", Nav::Faq, &body)
}

/// Values echoed back into the financing form plus the computed estimate.
pub struct FinancingView {
    pub price: i64,
    pub down_payment: i64,
    pub apr_percent: f64,
    pub term_months: u32,
    pub estimate: Result<LoanEstimate, String>,
}

pub fn financing(view: &FinancingView) -> String {
    let terms: String = LOAN_TERMS
        .iter()
        .map(|term| {
            let selected = if *term == view.term_months { " selected" } else { "" };
            format!("<option value=\"{term}\"{selected}>{term} months</option>")
        })
        .collect();

    let result = match &view.estimate {
        Ok(estimate) => format!(
            r#"<div class="estimate">
  <p class="monthly">{monthly}<span>/month</span></p>
  <p>{financed} financed over {term} months at {apr} APR</p>
  <p>Total interest: {interest}</p>
</div>"#,
            monthly = format_currency(estimate.monthly_payment),
            financed = format_currency(estimate.amount_financed),
            term = estimate.term_months,
            apr = format_percentage(estimate.apr_percent, 2),
            interest = format_currency(estimate.total_interest),
        ),
        Err(reason) => format!("<p class=\"notice error\">{}</p>", escape(reason)),
    };

    let body = format!(
        r#"<section class="two-column">
  <div>
    <h1>Financing</h1>
    <p>We partner with banks and credit unions to find a rate that fits. Estimate your monthly payment below; your final rate depends on credit approval.</p>
    <form class="stacked" action="/financing" method="get">
      <label>Vehicle price ($) <input type="number" name="price" min="0" value="{price}"></label>
      <label>Down payment ($) <input type="number" name="down_payment" min="0" value="{down}"></label>
      <label>APR (%) <input type="number" name="apr" min="0" step="0.1" value="{apr}"></label>
      <label>Term <select name="term">{terms}</select></label>
      <button type="submit">Calculate</button>
    </form>
  </div>
  <div>{result}</div>
</section>"#,
        price = view.price,
        down = view.down_payment,
        apr = view.apr_percent,
    );
    layout("Financing", Nav::Financing, &body)
}
