use super::*;
use serde_json::json;

#[test]
fn dashboard_summary_path_embeds_student_id() {
    assert_eq!(dashboard_summary_path(42), "/students/42/dashboard-summary");
}

#[test]
fn summary_section_pretty_prints_objects() {
    let summary = json!({ "readiness": { "score": 78.5 } });
    assert_eq!(
        summary_section(&summary, "readiness"),
        Some("{\n  \"score\": 78.5\n}".to_owned())
    );
}

#[test]
fn summary_section_passes_strings_through() {
    let summary = json!({ "placement": "Likely placed" });
    assert_eq!(summary_section(&summary, "placement"), Some("Likely placed".to_owned()));
}

#[test]
fn summary_section_absent_or_null_is_none() {
    let summary = json!({ "readiness": null });
    assert_eq!(summary_section(&summary, "readiness"), None);
    assert_eq!(summary_section(&summary, "placement"), None);
}

#[test]
fn summary_sections_cover_readiness_and_placement() {
    let keys: Vec<&str> = SUMMARY_SECTIONS.iter().map(|(key, _)| *key).collect();
    assert_eq!(keys, ["readiness", "placement"]);
}
