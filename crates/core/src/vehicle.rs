//! The vehicle record and the input used to create one.
//!
//! Field names serialize in camelCase so the persisted JSON array stays
//! readable by the storefront's client-side components.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::error::CoreError;
use crate::types::{Timestamp, VehicleId};

/// Image shown when a vehicle is created without one.
pub const PLACEHOLDER_IMAGE: &str = "/static/images/placeholder-car.svg";

/// Fields that must be present and truthy for a create to succeed, in the
/// order they are checked.
pub const REQUIRED_FIELDS: &[&str] = &[
    "make",
    "model",
    "year",
    "price",
    "mileage",
    "fuelType",
    "transmission",
    "exteriorColor",
];

/// Sale condition of a vehicle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Condition {
    New,
    #[default]
    Used,
    Certified,
}

impl Condition {
    pub const ALL: [Condition; 3] = [Condition::New, Condition::Used, Condition::Certified];

    /// Wire value, as stored in the JSON file.
    pub fn as_str(self) -> &'static str {
        match self {
            Condition::New => "new",
            Condition::Used => "used",
            Condition::Certified => "certified",
        }
    }

    /// Human-readable label for badges and selects.
    pub fn label(self) -> &'static str {
        match self {
            Condition::New => "New",
            Condition::Used => "Used",
            Condition::Certified => "Certified Pre-Owned",
        }
    }

    /// Parse a wire value, case-insensitively.
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
    }
}

/// Stored records may carry any casing; `null` means the default.
impl<'de> Deserialize<'de> for Condition {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match Option::<String>::deserialize(deserializer)? {
            None => Ok(Condition::default()),
            Some(raw) => Condition::parse(&raw).ok_or_else(|| {
                D::Error::unknown_variant(&raw, &["new", "used", "certified"])
            }),
        }
    }
}

/// One inventory item.
///
/// Numeric fields also accept numeric strings, so hand-edited or older
/// files load instead of failing the whole array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    pub id: VehicleId,
    pub make: String,
    pub model: String,
    #[serde(deserialize_with = "loose_int")]
    pub year: i32,
    #[serde(default)]
    pub trim: String,
    #[serde(deserialize_with = "loose_int")]
    pub price: i64,
    #[serde(deserialize_with = "loose_int")]
    pub mileage: i64,
    pub fuel_type: String,
    pub transmission: String,
    pub exterior_color: String,
    #[serde(default)]
    pub interior_color: String,
    #[serde(default)]
    pub body_type: String,
    #[serde(default)]
    pub condition: Condition,
    #[serde(default)]
    pub vin: String,
    #[serde(default)]
    pub stock_number: String,
    #[serde(default)]
    pub title: String,
    #[serde(default = "default_image")]
    pub image: String,
    #[serde(default)]
    pub featured: bool,
    #[serde(
        default,
        deserialize_with = "loose_optional_int",
        skip_serializing_if = "Option::is_none"
    )]
    pub mpg_city: Option<u32>,
    #[serde(
        default,
        deserialize_with = "loose_optional_int",
        skip_serializing_if = "Option::is_none"
    )]
    pub mpg_highway: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub created_at: Timestamp,
}

fn default_image() -> String {
    PLACEHOLDER_IMAGE.to_string()
}

/// Integer from a JSON number or a numeric string such as `"$24,995"`.
/// `Ok(None)` for `null` and blank strings.
fn parse_integer(value: &Value) -> Result<Option<i64>, ()> {
    match value {
        Value::Null => Ok(None),
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f.round() as i64))
            .map(Some)
            .ok_or(()),
        Value::String(s) => {
            let cleaned: String = s
                .chars()
                .filter(|c| !matches!(c, '$' | ',' | ' '))
                .collect();
            if cleaned.is_empty() {
                return Ok(None);
            }
            cleaned.parse::<i64>().map(Some).map_err(|_| ())
        }
        _ => Err(()),
    }
}

fn loose_optional_int<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: TryFrom<i64>,
{
    let value = Value::deserialize(deserializer)?;
    match parse_integer(&value) {
        Ok(Some(n)) => T::try_from(n)
            .map(Some)
            .map_err(|_| D::Error::custom(format!("integer out of range: {n}"))),
        Ok(None) => Ok(None),
        Err(()) => Err(D::Error::custom(format!(
            "expected an integer or numeric string, found {value}"
        ))),
    }
}

fn loose_int<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: TryFrom<i64>,
{
    loose_optional_int(deserializer)?
        .ok_or_else(|| D::Error::custom("expected an integer, found null"))
}

/// Build the display title `"{year} {make} {model} {trim}"`, dropping the
/// trailing space when there is no trim.
pub fn vehicle_title(year: i32, make: &str, model: &str, trim: &str) -> String {
    format!("{year} {make} {model} {trim}").trim().to_string()
}

impl Vehicle {
    /// Title to show, falling back to a derived one for records that were
    /// written without a title.
    pub fn display_title(&self) -> String {
        if self.title.trim().is_empty() {
            vehicle_title(self.year, &self.make, &self.model, &self.trim)
        } else {
            self.title.clone()
        }
    }
}

// ---------------------------------------------------------------------------
// Creation input
// ---------------------------------------------------------------------------

/// Validated input for a new vehicle, before an id and timestamp exist.
#[derive(Debug, Clone, PartialEq)]
pub struct NewVehicle {
    pub make: String,
    pub model: String,
    pub year: i32,
    pub trim: String,
    pub price: i64,
    pub mileage: i64,
    pub fuel_type: String,
    pub transmission: String,
    pub exterior_color: String,
    pub interior_color: String,
    pub body_type: String,
    pub condition: Condition,
    pub vin: String,
    pub stock_number: String,
    pub image: Option<String>,
    pub featured: bool,
    pub mpg_city: Option<u32>,
    pub mpg_highway: Option<u32>,
    pub description: Option<String>,
}

/// JSON truthiness: `null`, `false`, `0`, and `""` are falsy.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Return the first required field that is missing or falsy.
pub fn missing_required_field(fields: &Map<String, Value>) -> Option<&'static str> {
    REQUIRED_FIELDS
        .iter()
        .copied()
        .find(|field| !fields.get(*field).is_some_and(is_truthy))
}

fn text(fields: &Map<String, Value>, key: &str) -> String {
    match fields.get(key) {
        Some(Value::String(s)) => s.trim().to_string(),
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    }
}

fn optional_text(fields: &Map<String, Value>, key: &str) -> Option<String> {
    Some(text(fields, key)).filter(|s| !s.is_empty())
}

/// Read an integer that may arrive as a JSON number or as a form string
/// such as `"$24,995"` or `"42,180"`.
fn integer(fields: &Map<String, Value>, key: &str) -> Result<Option<i64>, CoreError> {
    let invalid = || CoreError::Validation(format!("{key} must be a number"));

    match fields.get(key) {
        None => Ok(None),
        Some(value) => parse_integer(value).map_err(|()| invalid()),
    }
}

fn required_integer(fields: &Map<String, Value>, key: &'static str) -> Result<i64, CoreError> {
    integer(fields, key)?.ok_or(CoreError::MissingField(key))
}

fn small_unsigned(fields: &Map<String, Value>, key: &str) -> Result<Option<u32>, CoreError> {
    integer(fields, key)?
        .map(|n| {
            u32::try_from(n)
                .map_err(|_| CoreError::Validation(format!("{key} must be a positive number")))
        })
        .transpose()
}

fn flag(fields: &Map<String, Value>, key: &str) -> bool {
    match fields.get(key) {
        Some(Value::Bool(b)) => *b,
        Some(Value::String(s)) => matches!(s.as_str(), "true" | "on" | "1" | "yes"),
        Some(Value::Number(n)) => n.as_i64().is_some_and(|n| n != 0),
        _ => false,
    }
}

impl NewVehicle {
    /// Validate a loosely typed field map (JSON body or form post).
    ///
    /// Required fields are checked first, in [`REQUIRED_FIELDS`] order, so
    /// the error names the first missing one. Numeric fields accept either
    /// JSON numbers or numeric strings.
    pub fn from_fields(fields: &Map<String, Value>) -> Result<Self, CoreError> {
        if let Some(field) = missing_required_field(fields) {
            return Err(CoreError::MissingField(field));
        }

        let year = required_integer(fields, "year")?;
        let year = i32::try_from(year)
            .map_err(|_| CoreError::Validation("year is out of range".into()))?;

        let condition = match optional_text(fields, "condition") {
            Some(raw) => Condition::parse(&raw).ok_or_else(|| {
                CoreError::Validation(format!("Unknown condition: {raw}"))
            })?,
            None => Condition::default(),
        };

        Ok(Self {
            make: text(fields, "make"),
            model: text(fields, "model"),
            year,
            trim: text(fields, "trim"),
            price: required_integer(fields, "price")?,
            mileage: required_integer(fields, "mileage")?,
            fuel_type: text(fields, "fuelType"),
            transmission: text(fields, "transmission"),
            exterior_color: text(fields, "exteriorColor"),
            interior_color: text(fields, "interiorColor"),
            body_type: text(fields, "bodyType"),
            condition,
            vin: text(fields, "vin").to_uppercase(),
            stock_number: text(fields, "stockNumber"),
            image: optional_text(fields, "image"),
            featured: flag(fields, "featured"),
            mpg_city: small_unsigned(fields, "mpgCity")?,
            mpg_highway: small_unsigned(fields, "mpgHighway")?,
            description: optional_text(fields, "description"),
        })
    }

    /// Turn validated input into a stored record.
    pub fn into_vehicle(self, id: VehicleId, created_at: Timestamp) -> Vehicle {
        let title = vehicle_title(self.year, &self.make, &self.model, &self.trim);
        Vehicle {
            id,
            title,
            image: self.image.unwrap_or_else(default_image),
            make: self.make,
            model: self.model,
            year: self.year,
            trim: self.trim,
            price: self.price,
            mileage: self.mileage,
            fuel_type: self.fuel_type,
            transmission: self.transmission,
            exterior_color: self.exterior_color,
            interior_color: self.interior_color,
            body_type: self.body_type,
            condition: self.condition,
            vin: self.vin,
            stock_number: self.stock_number,
            featured: self.featured,
            mpg_city: self.mpg_city,
            mpg_highway: self.mpg_highway,
            description: self.description,
            created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use serde_json::json;

    fn complete_fields() -> Map<String, Value> {
        json!({
            "make": "Honda",
            "model": "Civic",
            "year": 2021,
            "trim": "EX",
            "price": 22995,
            "mileage": 31000,
            "fuelType": "Gasoline",
            "transmission": "CVT",
            "exteriorColor": "Blue",
        })
        .as_object()
        .cloned()
        .unwrap()
    }

    #[test]
    fn complete_input_has_no_missing_field() {
        assert_eq!(missing_required_field(&complete_fields()), None);
    }

    #[test]
    fn each_required_field_is_enforced() {
        for field in REQUIRED_FIELDS {
            let mut fields = complete_fields();
            fields.remove(*field);
            assert_eq!(missing_required_field(&fields), Some(*field));
        }
    }

    #[test]
    fn falsy_values_count_as_missing() {
        let mut fields = complete_fields();
        fields.insert("make".into(), json!(""));
        assert_eq!(missing_required_field(&fields), Some("make"));

        let mut fields = complete_fields();
        fields.insert("price".into(), json!(0));
        assert_eq!(missing_required_field(&fields), Some("price"));

        let mut fields = complete_fields();
        fields.insert("transmission".into(), Value::Null);
        assert_eq!(missing_required_field(&fields), Some("transmission"));
    }

    #[test]
    fn from_fields_rejects_first_missing_field() {
        let mut fields = complete_fields();
        fields.remove("mileage");
        fields.remove("exteriorColor");
        assert_matches!(
            NewVehicle::from_fields(&fields),
            Err(CoreError::MissingField("mileage"))
        );
    }

    #[test]
    fn from_fields_accepts_form_strings() {
        let mut fields = complete_fields();
        fields.insert("year".into(), json!("2019"));
        fields.insert("price".into(), json!("$18,500"));
        fields.insert("mileage".into(), json!("54,210"));
        fields.insert("featured".into(), json!("on"));
        fields.insert("condition".into(), json!("Certified"));

        let input = NewVehicle::from_fields(&fields).unwrap();
        assert_eq!(input.year, 2019);
        assert_eq!(input.price, 18500);
        assert_eq!(input.mileage, 54210);
        assert!(input.featured);
        assert_eq!(input.condition, Condition::Certified);
    }

    #[test]
    fn from_fields_rejects_non_numeric_price() {
        let mut fields = complete_fields();
        fields.insert("price".into(), json!("call us"));
        assert_matches!(NewVehicle::from_fields(&fields), Err(CoreError::Validation(_)));
    }

    #[test]
    fn negative_mileage_is_not_rejected() {
        let mut fields = complete_fields();
        fields.insert("mileage".into(), json!(-5));
        assert_eq!(NewVehicle::from_fields(&fields).unwrap().mileage, -5);
    }

    #[test]
    fn into_vehicle_derives_title_and_defaults_image() {
        let now = chrono::Utc::now();
        let vehicle = NewVehicle::from_fields(&complete_fields())
            .unwrap()
            .into_vehicle("abc".into(), now);

        assert_eq!(vehicle.id, "abc");
        assert_eq!(vehicle.title, "2021 Honda Civic EX");
        assert_eq!(vehicle.image, PLACEHOLDER_IMAGE);
        assert_eq!(vehicle.condition, Condition::Used);
        assert_eq!(vehicle.created_at, now);
    }

    #[test]
    fn title_without_trim_has_no_trailing_space() {
        assert_eq!(vehicle_title(2020, "Ford", "F-150", ""), "2020 Ford F-150");
    }

    #[test]
    fn serializes_camel_case() {
        let vehicle = NewVehicle::from_fields(&complete_fields())
            .unwrap()
            .into_vehicle("abc".into(), chrono::Utc::now());
        let json = serde_json::to_value(&vehicle).unwrap();

        assert_eq!(json["fuelType"], "Gasoline");
        assert_eq!(json["exteriorColor"], "Blue");
        assert!(json.get("createdAt").is_some());
        assert!(json.get("mpgCity").is_none());
    }

    #[test]
    fn deserializes_sparse_legacy_record() {
        let raw = json!({
            "id": "legacy-1",
            "make": "Toyota",
            "model": "Camry",
            "year": 2018,
            "price": 17000,
            "mileage": 60000,
            "fuelType": "Gasoline",
            "transmission": "Automatic",
            "exteriorColor": "Silver",
            "someOldField": true,
        });
        let vehicle: Vehicle = serde_json::from_value(raw).unwrap();

        assert_eq!(vehicle.image, PLACEHOLDER_IMAGE);
        assert_eq!(vehicle.display_title(), "2018 Toyota Camry");
        assert!(!vehicle.featured);
    }

    #[test]
    fn deserializes_string_numbers_and_any_condition_case() {
        let raw = json!({
            "id": "hand-edited",
            "make": "Honda",
            "model": "Civic",
            "year": "2019",
            "price": "$17,500",
            "mileage": "40210",
            "fuelType": "Gasoline",
            "transmission": "CVT",
            "exteriorColor": "Red",
            "condition": "Used",
            "mpgCity": "31",
            "mpgHighway": null,
        });
        let vehicle: Vehicle = serde_json::from_value(raw).unwrap();

        assert_eq!(vehicle.year, 2019);
        assert_eq!(vehicle.price, 17500);
        assert_eq!(vehicle.mileage, 40210);
        assert_eq!(vehicle.condition, Condition::Used);
        assert_eq!(vehicle.mpg_city, Some(31));
        assert_eq!(vehicle.mpg_highway, None);
    }

    #[test]
    fn rejects_non_numeric_year_record() {
        let raw = json!({
            "id": "broken",
            "make": "Honda",
            "model": "Civic",
            "year": {},
            "price": 17500,
            "mileage": 40210,
            "fuelType": "Gasoline",
            "transmission": "CVT",
            "exteriorColor": "Red",
        });
        assert!(serde_json::from_value::<Vehicle>(raw).is_err());
    }

    #[test]
    fn condition_parse_is_case_insensitive() {
        assert_eq!(Condition::parse("NEW"), Some(Condition::New));
        assert_eq!(Condition::parse("salvage"), None);
    }
}
