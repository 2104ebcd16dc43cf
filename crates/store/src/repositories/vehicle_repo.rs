//! Repository for the vehicle inventory file.

use autolot_core::similarity::{rank_similar, SimilarCriteria};
use autolot_core::types::new_vehicle_id;
use autolot_core::vehicle::{NewVehicle, Vehicle};

use crate::store::{Change, StoreError, VehicleStore};

/// Provides list, create, delete, and similarity lookups for vehicles.
pub struct VehicleRepo;

impl VehicleRepo {
    /// Every vehicle, in insertion order.
    pub async fn list(store: &VehicleStore) -> Vec<Vehicle> {
        store.load().await
    }

    pub async fn find_by_id(store: &VehicleStore, id: &str) -> Option<Vehicle> {
        store.load().await.into_iter().find(|v| v.id == id)
    }

    /// Append a new vehicle and persist the collection.
    ///
    /// The id is regenerated until it differs from every existing id.
    pub async fn create(store: &VehicleStore, input: NewVehicle) -> Result<Vehicle, StoreError> {
        store
            .update(|vehicles| {
                let mut id = new_vehicle_id();
                while vehicles.iter().any(|v| v.id == id) {
                    id = new_vehicle_id();
                }

                let vehicle = input.into_vehicle(id, chrono::Utc::now());
                vehicles.push(vehicle.clone());
                Change::Modified(vehicle)
            })
            .await
    }

    /// Remove the first vehicle with `id`. Returns `false` if none matched,
    /// in which case the file is not rewritten.
    pub async fn delete(store: &VehicleStore, id: &str) -> Result<bool, StoreError> {
        store
            .update(|vehicles| match vehicles.iter().position(|v| v.id == id) {
                Some(index) => {
                    vehicles.remove(index);
                    Change::Modified(true)
                }
                None => Change::Unchanged(false),
            })
            .await
    }

    /// Vehicles ranked by similarity to `criteria`.
    pub async fn find_similar(store: &VehicleStore, criteria: &SimilarCriteria) -> Vec<Vehicle> {
        rank_similar(&store.load().await, criteria)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use serde_json::json;

    fn input(make: &str, model: &str) -> NewVehicle {
        let fields = json!({
            "make": make,
            "model": model,
            "year": 2020,
            "price": 19999,
            "mileage": 40000,
            "fuelType": "Gasoline",
            "transmission": "Automatic",
            "exteriorColor": "Gray",
            "bodyType": "Sedan",
        });
        NewVehicle::from_fields(fields.as_object().unwrap()).unwrap()
    }

    fn writable_store(dir: &tempfile::TempDir) -> VehicleStore {
        VehicleStore::new(dir.path().join("vehicles.json"), true)
    }

    #[tokio::test]
    async fn create_assigns_fresh_ids_and_appends() {
        let dir = tempfile::tempdir().unwrap();
        let store = writable_store(&dir);

        let first = VehicleRepo::create(&store, input("Honda", "Accord")).await.unwrap();
        let second = VehicleRepo::create(&store, input("Honda", "Civic")).await.unwrap();

        assert!(!first.id.is_empty());
        assert_ne!(first.id, second.id);

        let all = VehicleRepo::list(&store).await;
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].id, first.id);
        assert_eq!(all[1].title, "2020 Honda Civic");
    }

    #[tokio::test]
    async fn create_refused_when_writes_disabled() {
        let dir = tempfile::tempdir().unwrap();
        let store = VehicleStore::new(dir.path().join("vehicles.json"), false);

        assert_matches!(
            VehicleRepo::create(&store, input("Honda", "Accord")).await,
            Err(StoreError::WritesDisabled)
        );
        assert!(!store.path().exists());
    }

    #[tokio::test]
    async fn delete_removes_exactly_one_and_keeps_order() {
        let dir = tempfile::tempdir().unwrap();
        let store = writable_store(&dir);

        let a = VehicleRepo::create(&store, input("Ford", "Escape")).await.unwrap();
        let b = VehicleRepo::create(&store, input("Ford", "Edge")).await.unwrap();
        let c = VehicleRepo::create(&store, input("Ford", "Bronco")).await.unwrap();

        assert!(VehicleRepo::delete(&store, &b.id).await.unwrap());

        let ids: Vec<String> = VehicleRepo::list(&store).await.into_iter().map(|v| v.id).collect();
        assert_eq!(ids, [a.id, c.id]);
    }

    #[tokio::test]
    async fn delete_unknown_id_reports_false_and_leaves_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = writable_store(&dir);
        VehicleRepo::create(&store, input("Kia", "Telluride")).await.unwrap();
        let before = std::fs::read_to_string(store.path()).unwrap();

        assert!(!VehicleRepo::delete(&store, "missing").await.unwrap());

        assert_eq!(std::fs::read_to_string(store.path()).unwrap(), before);
    }

    #[tokio::test]
    async fn find_by_id() {
        let dir = tempfile::tempdir().unwrap();
        let store = writable_store(&dir);
        let created = VehicleRepo::create(&store, input("Subaru", "Outback")).await.unwrap();

        assert_eq!(VehicleRepo::find_by_id(&store, &created.id).await, Some(created));
        assert_eq!(VehicleRepo::find_by_id(&store, "nope").await, None);
    }

    #[tokio::test]
    async fn find_similar_excludes_the_reference_vehicle() {
        let dir = tempfile::tempdir().unwrap();
        let store = writable_store(&dir);
        let civic = VehicleRepo::create(&store, input("Honda", "Civic")).await.unwrap();
        let accord = VehicleRepo::create(&store, input("Honda", "Accord")).await.unwrap();

        let similar = VehicleRepo::find_similar(&store, &SimilarCriteria::like(&civic, 3)).await;
        assert_eq!(similar, vec![accord]);
    }
}
