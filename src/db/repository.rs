use crate::db::store::KeyValueStore;
use crate::errors::AppError;
use crate::models::Appointment;

pub const DEFAULT_STORAGE_KEY: &str = "bookedAppointments";

pub struct AppointmentRepository {
    store: Box<dyn KeyValueStore>,
    key: String,
}

impl AppointmentRepository {
    pub fn new(store: Box<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn with_default_key(store: Box<dyn KeyValueStore>) -> Self {
        Self::new(store, DEFAULT_STORAGE_KEY)
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Missing or unreadable data yields an empty list.
    pub fn load(&self) -> Vec<Appointment> {
        let raw = match self.store.get_item(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return vec![],
            Err(e) => {
                tracing::warn!(error = %e, key = %self.key, "failed to read stored appointments");
                return vec![];
            }
        };

        match serde_json::from_str::<Vec<Appointment>>(&raw) {
            Ok(appointments) => {
                tracing::debug!(count = appointments.len(), "loaded stored appointments");
                appointments
            }
            Err(e) => {
                tracing::warn!(error = %e, key = %self.key, "discarding malformed stored appointments");
                vec![]
            }
        }
    }

    pub fn save(&self, appointments: &[Appointment]) -> Result<(), AppError> {
        let serialized = serde_json::to_string(appointments)?;
        self.store.set_item(&self.key, &serialized)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::store::MemoryStore;
    use crate::models::FormData;
    use chrono::NaiveDate;

    struct FailingStore;

    impl KeyValueStore for FailingStore {
        fn get_item(&self, _key: &str) -> Result<Option<String>, AppError> {
            Err(AppError::Storage("unavailable".to_string()))
        }

        fn set_item(&self, _key: &str, _value: &str) -> Result<(), AppError> {
            Err(AppError::Storage("unavailable".to_string()))
        }

        fn remove_item(&self, _key: &str) -> Result<(), AppError> {
            Err(AppError::Storage("unavailable".to_string()))
        }
    }

    fn appointment(id: &str) -> Appointment {
        Appointment {
            id: id.to_string(),
            date: NaiveDate::from_ymd_opt(2025, 6, 10).unwrap(),
            time: "9:00 AM".to_string(),
            form_data: FormData {
                name: "Alice".to_string(),
                email: "alice@example.com".to_string(),
                phone: "5551234567".to_string(),
                notes: "Window seat".to_string(),
            },
        }
    }

    fn repo_with(raw: &str) -> AppointmentRepository {
        AppointmentRepository::with_default_key(Box::new(MemoryStore::with_item(
            DEFAULT_STORAGE_KEY,
            raw,
        )))
    }

    #[test]
    fn test_load_missing_key() {
        let repo = AppointmentRepository::with_default_key(Box::new(MemoryStore::new()));
        assert!(repo.load().is_empty());
    }

    #[test]
    fn test_load_invalid_json() {
        assert!(repo_with("{not json").load().is_empty());
    }

    #[test]
    fn test_load_wrong_shape() {
        assert!(repo_with(r#"{"id":"a"}"#).load().is_empty());
        assert!(repo_with(r#"[{"id":"a","date":"2025-06-10"}]"#).load().is_empty());
    }

    #[test]
    fn test_one_bad_entry_discards_all() {
        let raw = r#"[
            {"id":"a","date":"2025-06-10","time":"9:00 AM","formData":{"name":"A","email":"a@b.co","phone":"1","notes":""}},
            {"id":"b","date":"not-a-date","time":"9:00 AM","formData":{"name":"B","email":"b@b.co","phone":"2","notes":""}}
        ]"#;
        assert!(repo_with(raw).load().is_empty());
    }

    #[test]
    fn test_load_backend_error() {
        let repo = AppointmentRepository::with_default_key(Box::new(FailingStore));
        assert!(repo.load().is_empty());
    }

    #[test]
    fn test_save_then_load() {
        let repo = AppointmentRepository::with_default_key(Box::new(MemoryStore::new()));
        let list = vec![appointment("a"), appointment("b")];
        repo.save(&list).unwrap();
        assert_eq!(repo.load(), list);
    }

    #[test]
    fn test_save_overwrites_whole_list() {
        let repo = AppointmentRepository::with_default_key(Box::new(MemoryStore::new()));
        repo.save(&[appointment("a"), appointment("b")]).unwrap();
        repo.save(&[appointment("b")]).unwrap();
        let loaded = repo.load();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].id, "b");
    }

    #[test]
    fn test_save_backend_error() {
        let repo = AppointmentRepository::with_default_key(Box::new(FailingStore));
        assert!(matches!(
            repo.save(&[appointment("a")]),
            Err(AppError::Storage(_))
        ));
    }

    #[test]
    fn test_custom_key_isolated() {
        let repo = AppointmentRepository::new(Box::new(MemoryStore::new()), "other");
        repo.save(&[appointment("a")]).unwrap();
        assert_eq!(repo.key(), "other");
        assert_eq!(repo.load().len(), 1);
    }
}
