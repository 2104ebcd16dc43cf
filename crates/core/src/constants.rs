//! Static configuration consumed by forms, filters, and page chrome.
//!
//! Kept in `core` so both the API handlers and the page renderer read the
//! same option lists.

// ---------------------------------------------------------------------------
// Dealership contact details
// ---------------------------------------------------------------------------

pub const DEALERSHIP_NAME: &str = "Summit Auto Group";
pub const DEALERSHIP_TAGLINE: &str = "Quality pre-owned and new vehicles, priced right.";
/// Raw digits; run through `format::format_phone_number` for display.
pub const DEALERSHIP_PHONE: &str = "5551234567";
pub const DEALERSHIP_EMAIL: &str = "sales@summitautogroup.com";
pub const DEALERSHIP_ADDRESS: &str = "1200 Summit Ave, Springfield, IL 62701";

/// Opening hours as `(days, hours)` pairs.
pub const BUSINESS_HOURS: &[(&str, &str)] = &[
    ("Monday - Friday", "9:00 AM - 7:00 PM"),
    ("Saturday", "9:00 AM - 6:00 PM"),
    ("Sunday", "Closed"),
];

// ---------------------------------------------------------------------------
// Numeric ranges
// ---------------------------------------------------------------------------

/// Oldest model year accepted by the admin form and browse filter.
pub const MIN_YEAR: i32 = 1990;

/// Newest model year offered (next year's models arrive in autumn).
pub const MAX_YEAR: i32 = 2027;

/// Upper bound of the price filter, in whole dollars.
pub const MAX_PRICE: i64 = 150_000;

/// Step between price filter options.
pub const PRICE_STEP: i64 = 5_000;

/// Mileage ceilings offered by the browse filter.
pub const MILEAGE_OPTIONS: &[i64] = &[10_000, 25_000, 50_000, 75_000, 100_000, 150_000];

// ---------------------------------------------------------------------------
// Categorical enumerations
// ---------------------------------------------------------------------------

pub const MAKES: &[&str] = &[
    "Acura",
    "Audi",
    "BMW",
    "Chevrolet",
    "Ford",
    "GMC",
    "Honda",
    "Hyundai",
    "Jeep",
    "Kia",
    "Lexus",
    "Mazda",
    "Mercedes-Benz",
    "Nissan",
    "Ram",
    "Subaru",
    "Tesla",
    "Toyota",
    "Volkswagen",
];

pub const BODY_TYPES: &[&str] = &[
    "Sedan",
    "SUV",
    "Truck",
    "Coupe",
    "Hatchback",
    "Convertible",
    "Van",
    "Wagon",
];

pub const FUEL_TYPES: &[&str] = &["Gasoline", "Diesel", "Hybrid", "Plug-in Hybrid", "Electric"];

pub const TRANSMISSIONS: &[&str] = &["Automatic", "Manual", "CVT"];

pub const EXTERIOR_COLORS: &[&str] = &[
    "Black", "White", "Silver", "Gray", "Red", "Blue", "Green", "Brown", "Beige", "Orange",
    "Yellow",
];

pub const INTERIOR_COLORS: &[&str] = &["Black", "Gray", "Beige", "Brown", "Red", "White"];

// ---------------------------------------------------------------------------
// Financing
// ---------------------------------------------------------------------------

/// Loan terms offered by the payment calculator, in months.
pub const LOAN_TERMS: &[u32] = &[36, 48, 60, 72, 84];

pub const DEFAULT_LOAN_TERM: u32 = 60;

/// Default APR (percent) shown before the visitor enters their own.
pub const DEFAULT_APR: f64 = 6.9;

/// Default down payment as a fraction of the price.
pub const DEFAULT_DOWN_PAYMENT_RATIO: f64 = 0.10;
