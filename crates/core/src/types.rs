/// Vehicle identifiers are opaque strings (UUID v4 for records created here).
pub type VehicleId = String;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Generate a fresh vehicle identifier.
pub fn new_vehicle_id() -> VehicleId {
    uuid::Uuid::new_v4().to_string()
}
