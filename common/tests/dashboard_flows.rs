use std::cell::RefCell;

use chrono::FixedOffset;
use common::analytics::{CompareBy, compare_groups, summarize, timeline};
use common::error::ImportError;
use common::filter::{CertificateFilter, LegitimacyFilter, StudentFilter, TextQuery, YearFilter, apply};
use common::import::{ImportMode, parse_candidates, submit_sequentially};
use common::model::certificate::{Certificate, CertificateList};
use common::model::student::{Student, StudentDraft};
use common::session::{Route, guard, login};
use futures::executor::block_on;
use serde_json::json;

/// Stand-in for `POST /users`: assigns sequential ids and rejects names
/// starting with `!`.
struct FakeUsers {
    next_id: RefCell<u32>,
}

impl FakeUsers {
    fn new() -> Self {
        Self { next_id: RefCell::new(100) }
    }

    async fn create(&self, draft: StudentDraft) -> Result<Student, String> {
        if draft.candidate_name.starts_with('!') {
            return Err(format!("400 Bad Request for {}", draft.candidate_name));
        }
        let mut next = self.next_id.borrow_mut();
        *next += 1;
        Ok(Student {
            id: Some(next.to_string()),
            fields: draft,
            created_at: Some("2024-01-01T00:00:00.000Z".into()),
            updated_at: None,
        })
    }
}

fn calls_fixture() -> Vec<Certificate> {
    let body = json!({
        "data": [
            {"_id": "a", "timestamp": "2024-06-01T10:00:00Z", "is_legitimate": true,
             "signature_similarity_score": 0.95,
             "key_details": {"name": "Anu", "course": "BSc", "college": "Lake", "completion_year": "2022"}},
            {"_id": "b", "timestamp": "2024-06-01T12:00:00Z", "is_legitimate": false,
             "key_details": {"name": "Balu", "course": "BSc", "completion_year": "2021"}},
            {"_id": "c", "timestamp": "2024-06-03T12:00:00Z", "is_legitimate": true,
             "candidate_name": "Chitra", "course": "MA", "key_details": null},
            {"_id": "d", "timestamp": "2024-06-02T09:00:00Z",
             "key_details": {"college": "Lake", "completion_year": "2022"}}
        ],
        "total": 4
    });
    serde_json::from_value::<CertificateList>(body).unwrap().data
}

#[test]
fn bulk_text_end_to_end() {
    let candidates =
        parse_candidates("A,R,P,I,C,D,50,100,2024-01-01,Place", ImportMode::Delimited).unwrap();
    assert_eq!(candidates.len(), 1);
    assert_eq!(candidates[0].marks_obtained, "50");
    assert_eq!(candidates[0].marks_total, "100");

    let service = FakeUsers::new();
    let outcome = block_on(submit_sequentially(candidates, |d| service.create(d)));
    let mut collection: Vec<Student> = Vec::new();
    collection.extend(outcome.created);
    assert_eq!(collection.len(), 1);
    assert_eq!(collection[0].id(), Some("101"));
    assert_eq!(collection[0].percentage(), 50);
}

#[test]
fn bulk_csv_partial_success() {
    let text = "\"name\",\"relation\",\"parent\",\"institute\",\"course\",\"division\",\"obtained\",\"total\",\"date\",\"place\"
\"Ira\",\"D/o\",\"Om\",\"MIT\",\"BSc\",\"I\",\"40\",\"50\",\"2024-01-01\",\"Pune\"
\"!bad\",\"S/o\",\"Raj\",\"MIT\",\"BSc\",\"II\",\"30\",\"50\",\"2024-01-01\",\"Pune\"
too,short
\"Joy\",\"S/o\",\"Sam\",\"MIT\",\"BSc\",\"I\",\"45\",\"50\",\"2024-01-01\",\"Pune\"";

    let candidates = parse_candidates(text, ImportMode::Csv).unwrap();
    assert_eq!(candidates.len(), 3);

    let service = FakeUsers::new();
    let outcome = block_on(submit_sequentially(candidates, |d| service.create(d)));
    assert_eq!(outcome.added(), 2);
    assert_eq!(outcome.failures.len(), 1);
    assert_eq!(outcome.failures[0].0, 1);
    let names: Vec<_> = outcome.created.iter().map(|s| s.fields.candidate_name.as_str()).collect();
    assert_eq!(names, ["Ira", "Joy"]);
    assert_eq!(outcome.summary(), "Added 2 of 3 records (1 failed)");
}

#[test]
fn header_only_csv_is_an_error() {
    let err = parse_candidates("a,b,c,d,e,f,g,h,i,j\n", ImportMode::Csv).unwrap_err();
    assert_eq!(err, ImportError::NoValidRecords);
    assert_eq!(err.to_string(), "No valid records found");
}

#[test]
fn filters_are_idempotent_subsets() {
    let records = calls_fixture();
    let filters = [
        CertificateFilter::default(),
        CertificateFilter {
            query: TextQuery::new("bsc"),
            ..CertificateFilter::default()
        },
        CertificateFilter {
            year: YearFilter::from_value("2022"),
            legitimacy: LegitimacyFilter::Suspicious,
            ..CertificateFilter::default()
        },
        CertificateFilter {
            query: TextQuery::new("nobody"),
            ..CertificateFilter::default()
        },
    ];
    for filter in &filters {
        let once: Vec<Certificate> = apply(&records, filter).into_iter().cloned().collect();
        let twice: Vec<Certificate> = apply(&once, filter).into_iter().cloned().collect();
        assert_eq!(once, twice);
        assert!(once.len() <= records.len());
        assert!(once.iter().all(|c| records.contains(c)));
    }

    let students: Vec<Student> = Vec::new();
    assert!(apply(&students, &StudentFilter::new("x")).is_empty());
}

#[test]
fn charts_from_one_fetch() {
    let records = calls_fixture();
    let years = compare_groups(&records, CompareBy::CompletionYear, false);
    assert_eq!(years[0].name, "2022");
    assert_eq!(years[0].value, 2);
    assert_eq!(years.iter().map(|b| b.value).sum::<usize>(), records.len());

    let courses = compare_groups(&records, CompareBy::Course, true);
    let names: Vec<_> = courses.iter().map(|b| b.name.as_str()).collect();
    assert_eq!(names, ["BSc", "MA"]);

    let utc = FixedOffset::east_opt(0).unwrap();
    let days: Vec<_> = timeline(&records, utc).into_iter().map(|p| (p.date, p.total)).collect();
    assert_eq!(
        days,
        [
            ("2024-06-01".to_string(), 2),
            ("2024-06-03".to_string(), 1),
            ("2024-06-02".to_string(), 1),
        ]
    );

    let now = chrono::DateTime::parse_from_rfc3339("2024-06-08T11:00:00Z")
        .unwrap()
        .with_timezone(&chrono::Utc);
    let summary = summarize(&records, now);
    assert_eq!(summary.recent_week, 3);
    assert_eq!(summary.legitimacy_rate, 50);
}

#[test]
fn login_gates_protected_routes() {
    let session = login("admin@gmail.com", "123456").ok();
    assert!(session.is_some());
    assert_eq!(guard(Route::from_path("/certificates"), session.as_ref()), Route::Certificates);

    let rejected = login("admin@gmail.com", "wrong");
    assert_eq!(rejected.unwrap_err().to_string(), "Invalid credentials");
    assert_eq!(guard(Route::from_path("/dashboard"), None), Route::Login);
}
