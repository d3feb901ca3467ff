use cybershield::assessment::password::{
    FEEDBACK_DIGIT, FEEDBACK_LENGTH, FEEDBACK_SYMBOL, FEEDBACK_UPPERCASE,
};
use cybershield::assessment::{
    assess_password, Checklist, ChecklistError, IncidentError, IncidentKind, IncidentReport,
    PasswordStrength, SecurityRating, Urgency,
};

#[test]
fn empty_password_scores_zero() {
    let a = assess_password("");
    assert_eq!(a.score, 0);
    assert_eq!(a.strength, PasswordStrength::Weak);
    assert_eq!(a.feedback.len(), 5);
}

#[test]
fn long_mixed_password_scores_full() {
    let a = assess_password("Tr0ub4dor&3XtraLong!");
    assert_eq!(a.score, 100);
    assert_eq!(a.strength, PasswordStrength::Strong);
    assert!(a.feedback.is_empty());
}

#[test]
fn short_lowercase_password_lists_missing_classes() {
    let a = assess_password("hunter");
    assert_eq!(a.score, 15);
    assert_eq!(
        a.feedback,
        [FEEDBACK_LENGTH, FEEDBACK_UPPERCASE, FEEDBACK_DIGIT, FEEDBACK_SYMBOL]
    );
}

#[test]
fn strength_bands_follow_score() {
    // 12 chars, lower + upper + digit: 20 + 15 + 15 + 15
    assert_eq!(assess_password("Abcdefghij12").strength, PasswordStrength::Fair);
    // plus symbol: 85
    assert_eq!(assess_password("Abcdefghij1!").strength, PasswordStrength::Good);
}

#[test]
fn score_never_exceeds_100() {
    let a = assess_password(&"Aa1!".repeat(40));
    assert_eq!(a.score, 100);
}

#[test]
fn checklist_scores_by_priority() {
    let mut checklist = Checklist::default();
    assert_eq!(checklist.security_score(), 0);
    assert_eq!(checklist.rating(), SecurityRating::NeedsImprovement);

    checklist.toggle("1").unwrap(); // high
    assert_eq!(checklist.security_score(), 40);
    assert_eq!(checklist.rating(), SecurityRating::Fair);

    checklist.toggle("4").unwrap(); // medium
    assert_eq!(checklist.security_score(), 60);
    assert_eq!(checklist.rating(), SecurityRating::Good);

    checklist.toggle("7").unwrap(); // low
    assert_eq!(checklist.security_score(), 70);
}

#[test]
fn checklist_score_is_capped() {
    let mut checklist = Checklist::default();
    for id in ["1", "2", "3", "4", "5", "6", "7", "8"] {
        checklist.toggle(id).unwrap();
    }
    assert_eq!(checklist.completed_count(), 8);
    assert_eq!(checklist.security_score(), 100);
    assert_eq!(checklist.rating(), SecurityRating::Excellent);
}

#[test]
fn checklist_toggle_is_reversible() {
    let mut checklist = Checklist::default();
    assert!(checklist.toggle("3").unwrap());
    assert!(!checklist.toggle("3").unwrap());
    assert_eq!(checklist.completed_count(), 0);
}

#[test]
fn checklist_unknown_item() {
    let mut checklist = Checklist::default();
    assert_eq!(
        checklist.toggle("99"),
        Err(ChecklistError::UnknownItem("99".to_string()))
    );
}

#[test]
fn incident_requires_description_and_contact() {
    let mut report = IncidentReport {
        kind: Some(IncidentKind::Malware),
        description: String::new(),
        contact: "soc@example.com".to_string(),
        urgency: Urgency::High,
    };
    assert_eq!(report.submit(), Err(IncidentError::MissingField("description")));

    report.description = "Laptop shows ransom note".to_string();
    report.contact = "  ".to_string();
    assert_eq!(report.submit(), Err(IncidentError::MissingField("contact")));

    report.contact = "soc@example.com".to_string();
    let submission = report.submit().unwrap();
    assert_eq!(submission.kind, Some(IncidentKind::Malware));
    assert_eq!(submission.urgency, Urgency::High);
    assert!(submission.message.contains("24 hours"));
}

#[test]
fn incident_kind_is_optional() {
    let report = IncidentReport {
        description: "Odd login alert".to_string(),
        contact: "me".to_string(),
        ..IncidentReport::default()
    };
    let submission = report.submit().unwrap();
    assert_eq!(submission.kind, None);
    assert_eq!(submission.urgency, Urgency::Medium);
}
