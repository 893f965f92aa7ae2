use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormData {
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(default)]
    pub notes: String,
}

#[derive(Debug, Clone, Default)]
pub struct FormDataPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub notes: Option<String>,
}

impl FormData {
    pub fn merge(&mut self, patch: FormDataPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(email) = patch.email {
            self.email = email;
        }
        if let Some(phone) = patch.phone {
            self.phone = phone;
        }
        if let Some(notes) = patch.notes {
            self.notes = notes;
        }
    }
}

impl From<FormData> for FormDataPatch {
    fn from(data: FormData) -> Self {
        Self {
            name: Some(data.name),
            email: Some(data.email),
            phone: Some(data.phone),
            notes: Some(data.notes),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: String,
    #[serde(with = "iso_date")]
    pub date: NaiveDate,
    pub time: String,
    pub form_data: FormData,
}

/// Dates are written as `YYYY-MM-DD`. Full RFC 3339 timestamps are accepted on
/// read and reduced to their calendar date in the local time zone.
mod iso_date {
    use chrono::{DateTime, Local, NaiveDate, TimeZone};
    use serde::{de, Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%Y-%m-%d";

    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&date.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse(&raw).ok_or_else(|| de::Error::custom(format!("invalid date: {raw}")))
    }

    pub(super) fn parse(raw: &str) -> Option<NaiveDate> {
        parse_in(raw, &Local)
    }

    pub(super) fn parse_in<Tz: TimeZone>(raw: &str, zone: &Tz) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(raw, FORMAT).ok().or_else(|| {
            DateTime::parse_from_rfc3339(raw)
                .ok()
                .map(|dt| dt.with_timezone(zone).date_naive())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Appointment {
        Appointment {
            id: "abc-123".to_string(),
            date: NaiveDate::from_ymd_opt(2025, 6, 10).unwrap(),
            time: "9:00 AM".to_string(),
            form_data: FormData {
                name: "Alice".to_string(),
                email: "alice@example.com".to_string(),
                phone: "+1 555-123-4567".to_string(),
                notes: String::new(),
            },
        }
    }

    #[test]
    fn test_serializes_camel_case_with_iso_date() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["date"], "2025-06-10");
        assert_eq!(json["formData"]["name"], "Alice");
        assert!(json.get("form_data").is_none());
    }

    #[test]
    fn test_accepts_rfc3339_timestamp() {
        let json = r#"{"id":"x","date":"2025-06-10T04:00:00.000Z","time":"9:00 AM","formData":{"name":"A","email":"a@b.co","phone":"123"}}"#;
        let appt: Appointment = serde_json::from_str(json).unwrap();
        let expected = chrono::DateTime::parse_from_rfc3339("2025-06-10T04:00:00.000Z")
            .unwrap()
            .with_timezone(&chrono::Local)
            .date_naive();
        assert_eq!(appt.date, expected);
        assert_eq!(appt.form_data.notes, "");
    }

    #[test]
    fn test_timestamp_uses_zone_calendar_day() {
        let tokyo = chrono::FixedOffset::east_opt(9 * 3600).unwrap();
        let new_york = chrono::FixedOffset::west_opt(4 * 3600).unwrap();
        assert_eq!(
            iso_date::parse_in("2025-06-09T15:00:00+00:00", &tokyo),
            NaiveDate::from_ymd_opt(2025, 6, 10)
        );
        assert_eq!(
            iso_date::parse_in("2025-06-09T15:00:00.000Z", &new_york),
            NaiveDate::from_ymd_opt(2025, 6, 9)
        );
        assert_eq!(
            iso_date::parse_in("2025-06-10", &tokyo),
            NaiveDate::from_ymd_opt(2025, 6, 10)
        );
    }

    #[test]
    fn test_rejects_garbage_date() {
        let json = r#"{"id":"x","date":"next tuesday","time":"9:00 AM","formData":{"name":"A","email":"a@b.co","phone":"123","notes":""}}"#;
        assert!(serde_json::from_str::<Appointment>(json).is_err());
    }

    #[test]
    fn test_parse_plain_date() {
        assert_eq!(
            iso_date::parse("2024-02-29"),
            NaiveDate::from_ymd_opt(2024, 2, 29)
        );
        assert_eq!(iso_date::parse("2023-02-29"), None);
    }

    #[test]
    fn test_merge_only_overwrites_present_fields() {
        let mut data = sample().form_data;
        data.merge(FormDataPatch {
            email: Some("new@example.com".to_string()),
            ..Default::default()
        });
        assert_eq!(data.name, "Alice");
        assert_eq!(data.email, "new@example.com");
        assert_eq!(data.phone, "+1 555-123-4567");
    }
}
