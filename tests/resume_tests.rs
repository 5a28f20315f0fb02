mod common;
use common::{MIXED_RESUME_JSON, as_of, d, job, resume, write_resume};

use gapinspect::errors::AppError;
use gapinspect::models::date_like::DateValue;
use gapinspect::{DurationUnit, Resume, ResumeLike};
use std::path::Path;

#[test]
fn test_load_json_resume() {
    let r = Resume::from_json_str(MIXED_RESUME_JSON).unwrap();

    assert_eq!(r.name.as_deref(), Some("Jane Doe"));
    let history = r.employment_history().unwrap();
    assert_eq!(history.len(), 3);
    assert_eq!(history[0].employer.as_deref(), Some("Acme"));
    assert_eq!(history[0].start, Some(DateValue::from("2020-01")));
}

#[test]
fn test_load_yaml_resume_with_numeric_year_and_aliases() {
    let yaml = r#"
name: John Roe
employment:
  history:
    - company: Initech
      title: Developer
      startDate: 2018
      endDate: "2019-06"
    - employer: Globex
      start: "Jan 2020"
"#;
    let r = Resume::from_yaml_str(yaml).unwrap();
    let history = r.employment_history().unwrap();

    assert_eq!(history[0].employer.as_deref(), Some("Initech"));
    assert_eq!(history[0].position.as_deref(), Some("Developer"));
    assert_eq!(history[0].start, Some(DateValue::Year(2018)));
    assert_eq!(history[0].end, Some(DateValue::from("2019-06")));
    assert!(history[1].end.is_none());
}

#[test]
fn test_resume_without_employment_has_no_history() {
    let r = Resume::from_json_str(r#"{ "name": "Nobody", "skills": ["rust"] }"#).unwrap();
    assert!(r.employment_history().is_none());
    assert_eq!(r.duration(DurationUnit::Days, as_of()).unwrap(), 0);
}

#[test]
fn test_from_path_picks_parser_by_extension() {
    let p = write_resume("from_path_json", "json", MIXED_RESUME_JSON);
    let r = Resume::from_path(Path::new(&p)).unwrap();
    assert_eq!(r.employment_history().map(|h| h.len()), Some(3));

    let txt = write_resume("from_path_txt", "txt", MIXED_RESUME_JSON);
    let err = Resume::from_path(Path::new(&txt)).unwrap_err();
    assert!(matches!(err, AppError::UnsupportedResumeFormat(_)));
}

#[test]
fn test_from_path_checks_extension_before_reading() {
    let missing = std::env::temp_dir().join("gapinspect_missing_resume.txt");
    let _ = std::fs::remove_file(&missing);

    let err = Resume::from_path(&missing).unwrap_err();
    assert!(matches!(err, AppError::UnsupportedResumeFormat(_)));
}

#[test]
fn test_duration_spans_earliest_to_latest_date() {
    let r = resume(vec![
        job("2021-07", Some("2022-01")),
        job("2020-01", Some("2021-01")),
    ]);

    assert_eq!(r.duration(DurationUnit::Days, as_of()).unwrap(), 731);
    assert_eq!(r.duration(DurationUnit::Weeks, as_of()).unwrap(), 104);
    assert_eq!(r.duration(DurationUnit::Months, as_of()).unwrap(), 24);
    assert_eq!(r.duration(DurationUnit::Years, as_of()).unwrap(), 2);
}

#[test]
fn test_duration_runs_to_now_for_ongoing_job() {
    let r = resume(vec![job("2024-01", Some("present"))]);
    assert_eq!(r.duration(DurationUnit::Days, as_of()).unwrap(), 152);
}

#[test]
fn test_duration_propagates_invalid_dates() {
    let r = resume(vec![job("whenever", None)]);
    assert!(matches!(
        r.duration(DurationUnit::Days, as_of()),
        Err(AppError::InvalidDate(_))
    ));
}

#[test]
fn test_months_are_truncated_calendar_months() {
    assert_eq!(DurationUnit::Months.between(d(2020, 1, 15), d(2020, 3, 14)), 1);
    assert_eq!(DurationUnit::Months.between(d(2020, 1, 15), d(2020, 3, 15)), 2);
    assert_eq!(DurationUnit::Months.between(d(2020, 3, 15), d(2020, 1, 15)), -2);
    assert_eq!(DurationUnit::Years.between(d(2019, 6, 1), d(2021, 5, 31)), 1);
}
