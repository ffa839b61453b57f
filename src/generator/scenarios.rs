//! Known-bad documents for exercising the validator.
//!
//! The datasets are valid by construction, so these fixtures cover the
//! other side: stations that break field constraints and contacts that
//! pass every field check yet break a record rule.

use serde_json::{json, Value};

/// Station documents that fail field constraints.
pub fn invalid_stations() -> Vec<Value> {
    vec![
        // Identifier too long, crew over capacity.
        json!({
            "station_id": "TOOLONG123456",
            "name": "Test Station",
            "crew_size": 25,
            "power_level": 85.0,
            "oxygen_level": 92.0,
            "last_maintenance": "2024-01-15T10:30:00",
            "is_operational": true,
        }),
        // Every numeric and text bound broken at once.
        json!({
            "station_id": "TS",
            "name": "",
            "crew_size": 0,
            "power_level": -10.0,
            "oxygen_level": 150.0,
            "last_maintenance": "2024-01-15T10:30:00",
            "is_operational": true,
        }),
    ]
}

/// Contact documents whose fields are fine but whose record rules are not.
pub fn invalid_contacts() -> Vec<Value> {
    vec![
        // Malformed identifier prefix.
        json!({
            "contact_id": "WRONG_FORMAT",
            "timestamp": "2024-01-15T14:30:00",
            "location": "Area 51",
            "contact_type": "RADIO",
            "signal_strength": 8.5,
            "duration_minutes": 45,
            "witness_count": 5,
            "message_received": null,
            "is_verified": false,
        }),
        // Verified telepathic report with a single witness.
        json!({
            "contact_id": "AC_2024_002",
            "timestamp": "2024-01-16T09:15:00",
            "location": "Roswell",
            "contact_type": "TELEPATHIC",
            "signal_strength": 6.2,
            "duration_minutes": 30,
            "witness_count": 1,
            "message_received": null,
            "is_verified": true,
        }),
    ]
}
