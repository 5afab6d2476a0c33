//! Test fixtures

use serde_json::json;

/// Build a `/api/get_packages` body from `(ip, attack_type)` pairs
pub fn packages_json(records: &[(String, String)]) -> String {
    let items: Vec<serde_json::Value> = records
        .iter()
        .map(|(ip, attack_type)| {
            json!({
                "ip": ip,
                "attack_type": attack_type,
                "timestamp": "2024-05-01T12:00:00Z",
            })
        })
        .collect();
    serde_json::Value::Array(items).to_string()
}
