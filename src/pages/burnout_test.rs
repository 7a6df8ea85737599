use super::*;

fn filled() -> BurnoutInput {
    BurnoutInput {
        weekly_attendance_trend: "-0.15".to_owned(),
        marks_decline_trend: " -0.1".to_owned(),
        lab_submission_delays: "3".to_owned(),
        high_attendance_low_marks: true,
    }
}

#[test]
fn validate_burnout_input_parses_trends_and_flag() {
    assert_eq!(
        validate_burnout_input(&filled()),
        Ok(BurnoutRequest {
            weekly_attendance_trend: -0.15,
            marks_decline_trend: -0.1,
            lab_submission_delays: 3,
            high_attendance_low_marks: 1,
        })
    );
}

#[test]
fn unchecked_flag_is_sent_as_zero() {
    let mut input = filled();
    input.high_attendance_low_marks = false;
    let body = serde_json::to_value(validate_burnout_input(&input).unwrap()).unwrap();
    assert_eq!(body["high_attendance_low_marks"], 0);
    assert_eq!(body["lab_submission_delays"], 3);
}

#[test]
fn validate_burnout_input_requires_numeric_trends() {
    let mut input = filled();
    input.weekly_attendance_trend = String::new();
    assert_eq!(
        validate_burnout_input(&input),
        Err("Weekly attendance trend must be a number.")
    );

    let mut input = filled();
    input.marks_decline_trend = "inf".to_owned();
    assert_eq!(
        validate_burnout_input(&input),
        Err("Marks decline trend must be a number.")
    );
}

#[test]
fn validate_burnout_input_rejects_negative_delays() {
    let mut input = filled();
    input.lab_submission_delays = "-2".to_owned();
    assert_eq!(
        validate_burnout_input(&input),
        Err("Lab submission delays must be a whole number.")
    );
}

#[test]
fn burnout_result_reads_backend_response() {
    let result: BurnoutResult =
        serde_json::from_str(r#"{"burnout_risk_flag":true,"burnout_probability":74.5,"warning_level":"High"}"#)
            .unwrap();
    assert_eq!(
        result,
        BurnoutResult {
            burnout_risk_flag: true,
            burnout_probability: 74.5,
            warning_level: "High".to_owned(),
        }
    );
}

#[test]
fn warning_tier_maps_backend_levels() {
    assert_eq!(warning_tier("Low"), "low");
    assert_eq!(warning_tier("Medium"), "medium");
    assert_eq!(warning_tier("High"), "high");
    assert_eq!(warning_tier("Severe"), "high");
}
