//! Sample data shared by unit and integration suites.

/// `(id, label, disabled)` tuples for a city picker.
pub const CITY_RECORDS: &[(i64, &str, bool)] = &[
    (1, "Paris", false),
    (2, "London", false),
    (3, "Berlin", false),
    (4, "Lyon", false),
    (5, "Marseille", false),
    (6, "Londonderry", true),
    (7, "Oslo", false),
    (8, "Saint-Étienne", false),
];

/// `(name, score, joined)` tuples for table suites; two rows tie on score.
pub const SCORE_RECORDS: &[(&str, i64, &str)] = &[
    ("Chloé", 42, "2024-03-01T09:00:00Z"),
    ("Amine", 17, "2023-11-12T18:30:00Z"),
    ("Bastien", 42, "2024-01-20T07:15:00Z"),
    ("Dana", 8, "2022-06-05T12:00:00Z"),
    ("Élodie", 25, "2024-05-30T16:45:00Z"),
];

/// City items as the JSON array the CLI reads.
#[must_use]
pub fn cities_json() -> String {
    let items: Vec<serde_json::Value> = CITY_RECORDS
        .iter()
        .map(|(id, label, disabled)| {
            serde_json::json!({ "id": id, "label": label, "disabled": disabled })
        })
        .collect();
    serde_json::Value::Array(items).to_string()
}

/// Score rows as a JSON array of objects (`name`, `score`, `joined`).
#[must_use]
pub fn scores_json() -> String {
    let rows: Vec<serde_json::Value> = SCORE_RECORDS
        .iter()
        .map(|(name, score, joined)| {
            serde_json::json!({ "name": name, "score": score, "joined": joined })
        })
        .collect();
    serde_json::Value::Array(rows).to_string()
}

/// `count` generated rows (`id`, `label`) for paging suites.
#[must_use]
pub fn numbered_rows_json(count: usize) -> String {
    let rows: Vec<serde_json::Value> = (1..=count)
        .map(|id| serde_json::json!({ "id": id, "label": format!("row {id}") }))
        .collect();
    serde_json::Value::Array(rows).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_fixtures_match_their_records() {
        let cities: serde_json::Value = serde_json::from_str(&cities_json()).expect("json");
        assert_eq!(cities.as_array().map(Vec::len), Some(CITY_RECORDS.len()));
        assert_eq!(cities[5]["disabled"], serde_json::json!(true));

        let scores: serde_json::Value = serde_json::from_str(&scores_json()).expect("json");
        assert_eq!(scores[0]["name"], serde_json::json!("Chloé"));

        let numbered: serde_json::Value =
            serde_json::from_str(&numbered_rows_json(3)).expect("json");
        assert_eq!(numbered[2]["label"], serde_json::json!("row 3"));
    }
}
