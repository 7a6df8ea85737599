use super::*;

fn filled() -> PlacementInput {
    PlacementInput {
        skill_readiness_score: "72.5".to_owned(),
        project_count: "3".to_owned(),
        communication_rating: " 7.5 ".to_owned(),
        core_subject_marks: "78".to_owned(),
        ..PlacementInput::default()
    }
}

#[test]
fn validate_placement_input_parses_numbers() {
    assert_eq!(
        validate_placement_input(&filled()),
        Ok(PlacementRequest {
            skill_readiness_score: 72.5,
            project_count: 3,
            internship_status: false,
            internship_type: "None".to_owned(),
            internship_duration: 0,
            communication_rating: 7.5,
            core_subject_marks: 78.0,
        })
    );
}

#[test]
fn validate_placement_input_keeps_internship_details_when_checked() {
    let mut input = filled();
    input.internship_status = true;
    input.internship_type = "Research".to_owned();
    input.internship_duration = "6".to_owned();

    let request = validate_placement_input(&input).unwrap();
    assert!(request.internship_status);
    assert_eq!(request.internship_type, "Research");
    assert_eq!(request.internship_duration, 6);
}

#[test]
fn validate_placement_input_rejects_out_of_range_scores() {
    let mut input = filled();
    input.skill_readiness_score = "101".to_owned();
    assert_eq!(
        validate_placement_input(&input),
        Err("Skill readiness score must be between 0 and 100.")
    );

    let mut input = filled();
    input.communication_rating = "-1".to_owned();
    assert_eq!(
        validate_placement_input(&input),
        Err("Communication rating must be between 0 and 10.")
    );

    let mut input = filled();
    input.core_subject_marks = "NaN".to_owned();
    assert_eq!(
        validate_placement_input(&input),
        Err("Core subject marks must be between 0 and 100.")
    );
}

#[test]
fn validate_placement_input_requires_whole_project_count() {
    let mut input = filled();
    input.project_count = "2.5".to_owned();
    assert_eq!(
        validate_placement_input(&input),
        Err("Number of projects must be a whole number.")
    );
    input.project_count = String::new();
    assert_eq!(
        validate_placement_input(&input),
        Err("Number of projects must be a whole number.")
    );
}

#[test]
fn validate_placement_input_bounds_internship_duration() {
    let mut input = filled();
    input.internship_status = true;
    input.internship_duration = "13".to_owned();
    assert_eq!(
        validate_placement_input(&input),
        Err("Internship duration must be 1 to 12 months.")
    );
}

#[test]
fn validate_placement_input_rejects_unknown_internship_type() {
    let mut input = filled();
    input.internship_status = true;
    input.internship_type = "Volunteer".to_owned();
    assert_eq!(validate_placement_input(&input), Err("Choose an internship type."));
}

#[test]
fn placement_request_uses_backend_field_names() {
    let body = serde_json::to_value(validate_placement_input(&filled()).unwrap()).unwrap();
    assert_eq!(
        body,
        serde_json::json!({
            "skill_readiness_score": 72.5,
            "project_count": 3,
            "internship_status": false,
            "internship_type": "None",
            "internship_duration": 0,
            "communication_rating": 7.5,
            "core_subject_marks": 78.0,
        })
    );
}

#[test]
fn placement_result_reads_backend_response() {
    let result: PlacementResult = serde_json::from_str(
        r#"{"placement_probability":64.25,"confidence_score":85.5,"suggested_improvements":["Build more projects."]}"#,
    )
    .unwrap();
    assert_eq!(
        result,
        PlacementResult {
            placement_probability: 64.25,
            confidence_score: 85.5,
            suggested_improvements: vec!["Build more projects.".to_owned()],
        }
    );
}

#[test]
fn probability_tier_thresholds() {
    assert_eq!(probability_tier(60.0), "high");
    assert_eq!(probability_tier(59.99), "medium");
    assert_eq!(probability_tier(40.0), "medium");
    assert_eq!(probability_tier(12.0), "low");
}
