use chrono::NaiveDate;

use super::common::*;
use crate::jobs::PostingId;
use crate::screening::{PostingDraft, PostingField, PostingViolation};

#[test]
fn clean_draft_becomes_trimmed_posting() {
    let posting = guard()
        .review(PostingId::from("job-100"), draft(), today())
        .expect("draft passes review");

    assert_eq!(posting.id, PostingId::from("job-100"));
    assert_eq!(posting.title, "Customer Support Associate");
    assert_eq!(posting.skills, vec!["Communication", "Teamwork"]);
    assert!(!posting.remote);
    assert_eq!(
        posting.deadline_date(),
        NaiveDate::from_ymd_opt(2025, 10, 15)
    );
}

#[test]
fn blank_draft_reports_every_required_field() {
    let rejection = guard()
        .review(PostingId::from("job-1"), PostingDraft::default(), today())
        .expect_err("blank draft rejected");

    let missing: Vec<PostingField> = rejection
        .violations
        .iter()
        .filter_map(|violation| match violation {
            PostingViolation::MissingField(field) => Some(*field),
            _ => None,
        })
        .collect();
    assert_eq!(
        missing,
        vec![
            PostingField::Title,
            PostingField::Company,
            PostingField::Location,
            PostingField::Description,
            PostingField::Salary,
            PostingField::Deadline,
        ]
    );
    assert_eq!(rejection.violations.len(), missing.len());
}

#[test]
fn banned_wording_in_description_is_rejected() {
    let mut submission = draft();
    submission.description = "Requires 3 yrs of experiance in retail.".to_string();

    let rejection = guard()
        .review(PostingId::from("job-2"), submission, today())
        .expect_err("experience wording rejected");

    match rejection.violations.as_slice() {
        [PostingViolation::BannedTerm { field, matched }] => {
            assert_eq!(*field, PostingField::Description);
            assert_eq!(matched.token, "yrs");
        }
        other => panic!("expected a single banned term violation, got {other:?}"),
    }
}

#[test]
fn banned_skill_is_reported_against_skills() {
    let mut submission = draft();
    submission.skills.push("Expert Excel".to_string());

    let rejection = guard()
        .review(PostingId::from("job-3"), submission, today())
        .expect_err("expert skill rejected");

    assert!(rejection.violations.iter().any(|violation| matches!(
        violation,
        PostingViolation::BannedTerm {
            field: PostingField::Skills,
            ..
        }
    )));
}

#[test]
fn deadline_must_parse_and_not_be_past() {
    let mut malformed = draft();
    malformed.deadline = "15/10/2025".to_string();
    let rejection = guard()
        .review(PostingId::from("job-4"), malformed, today())
        .expect_err("malformed deadline rejected");
    assert_eq!(
        rejection.violations,
        vec![PostingViolation::InvalidDeadline("15/10/2025".to_string())]
    );

    let mut expired = draft();
    expired.deadline = "2025-08-31".to_string();
    let rejection = guard()
        .review(PostingId::from("job-5"), expired, today())
        .expect_err("past deadline rejected");
    assert!(matches!(
        rejection.violations.as_slice(),
        [PostingViolation::DeadlinePassed { .. }]
    ));
}

#[test]
fn deadline_today_is_accepted() {
    let mut submission = draft();
    submission.deadline = "2025-09-01".to_string();
    assert!(guard()
        .review(PostingId::from("job-6"), submission, today())
        .is_ok());
}

#[test]
fn salary_without_figure_is_rejected() {
    let mut submission = draft();
    submission.salary = "Competitive".to_string();
    let rejection = guard()
        .review(PostingId::from("job-7"), submission, today())
        .expect_err("salary without digits rejected");
    assert_eq!(
        rejection.violations,
        vec![PostingViolation::MissingSalaryFigure(
            "Competitive".to_string()
        )]
    );
    assert!(rejection.to_string().contains("does not contain a figure"));
}
