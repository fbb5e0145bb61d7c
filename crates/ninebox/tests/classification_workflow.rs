//! End-to-end specifications for the talent classification pipeline as seen
//! through the public crate surface: records in, fully shaped assessments
//! out, with the wire format the HTTP layer serializes verbatim.

use ninebox::talent::{
    extract_features, parse_grade, ClassificationService, EmployeeRecord, TalentAssessment,
};

fn analyst() -> EmployeeRecord {
    serde_json::from_value(serde_json::json!({
        "name": "Test Employee",
        "position": "Analyst",
        "education": "S1",
        "workExperience": 5,
        "grade": "III/c",
        "skills": ["Python", "Data Analysis", "SQL", "Machine Learning"],
        "achievements": ["Best Employee 2023"]
    }))
    .expect("record deserializes, passthrough fields ignored")
}

#[test]
fn grade_parser_matches_documented_scores() {
    assert_eq!(parse_grade("III/c"), 3.6);
    assert_eq!(parse_grade("I/a"), 1.2);
    assert_eq!(parse_grade("IV/e"), 5.0);
    assert_eq!(parse_grade("invalid"), 3.0);
    assert_eq!(parse_grade(""), 3.0);
}

#[test]
fn record_parsed_from_json_extracts_expected_features() {
    assert_eq!(extract_features(&analyst()).as_array(), [2.0, 5.0, 3.6, 4.0]);
}

#[test]
fn empty_json_object_still_classifies() {
    let record: EmployeeRecord =
        serde_json::from_str("{}").expect("all fields default");
    assert_eq!(extract_features(&record).as_array(), [2.0, 0.0, 3.6, 3.0]);

    let assessment = ClassificationService::new().classify(&record);
    assert!((1..=9).contains(&assessment.box_number));
}

#[test]
fn analyst_record_resolves_to_high_potential() {
    // Features [2, 5, 3.6, 4] are equidistant from the High Potential and
    // Solid Professional reference rows after scaling; ties resolve to the
    // lower grid cell.
    let assessment = ClassificationService::new().classify(&analyst());
    assert_eq!(assessment.talent_box, "High Potential");
    assert_eq!(assessment.box_number, 6);
    assert_eq!(assessment.priority, "High Priority");
}

#[test]
fn assessment_serializes_with_the_documented_shape() {
    let assessment = ClassificationService::new().classify(&analyst());
    let value = serde_json::to_value(&assessment).expect("serializes");

    let object = value.as_object().expect("json object");
    assert!(object.contains_key("talentBox"));
    assert!(object.contains_key("boxNumber"));
    assert!(object.contains_key("priority"));
    assert_eq!(value["source"], "model");
    assert!(value["performance"]["justification"].is_string());
    assert!(value["potential"]["justification"].is_string());
    assert!(value["performance"]["score"].is_u64());

    let round_trip: TalentAssessment =
        serde_json::from_value(value).expect("round-trips");
    assert_eq!(round_trip, assessment);
}

#[test]
fn repeated_classification_is_stable_across_service_instances() {
    let input = analyst();
    let first = ClassificationService::new().classify(&input);
    let second = ClassificationService::new().classify(&input);
    assert_eq!(first, second);
}

#[test]
fn corner_records_reach_the_corner_cells() {
    let classifier = ClassificationService::new();

    let star = classifier.classify(&EmployeeRecord {
        education: Some("S3".to_string()),
        work_experience: Some(6),
        grade: Some("IV/e".to_string()),
        skills: Some((1..=7).map(|n| format!("skill-{n}")).collect()),
    });
    assert_eq!(star.talent_box, "Star/Top Talent");
    assert_eq!(star.box_number, 9);

    let underperformer = classifier.classify(&EmployeeRecord {
        education: Some("SMA".to_string()),
        work_experience: Some(2),
        grade: Some("I/a".to_string()),
        skills: Some(vec!["arsip".to_string(); 3]),
    });
    assert_eq!(underperformer.talent_box, "Underperformer");
    assert_eq!(underperformer.box_number, 1);
}
