use std::path::PathBuf;

use records::{
    marshal_dynamic, read_entries, read_table, unmarshal_dynamic, write_entries, write_table,
    DynamicRecord, Entry, EntryDescriptor, ErrorKind, FieldValue, TableIoError, TableOptions,
};
use tempfile::TempDir;

#[derive(Debug, Clone, Default, PartialEq, Entry)]
struct Person {
    #[csv("age")]
    age: i32,
    #[csv("name")]
    name: String,
    #[csv("isEmployee")]
    is_employee: bool,
}

fn testdata(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("testdata")
        .join(name)
}

#[test]
fn test_read_entries_from_file() {
    let conversion =
        read_entries::<Person, _>(testdata("test.csv"), &TableOptions::default()).unwrap();

    assert!(conversion.is_clean());
    let people = conversion.output;
    assert_eq!(people.len(), 4);
    assert_eq!(
        people[0],
        Person {
            age: 20,
            name: "john".to_string(),
            is_employee: false,
        }
    );
    assert!(people[2].is_employee);
    assert!(!people[3].is_employee);
    assert_eq!(people[3].name, "helen");
}

#[test]
fn test_read_entries_reports_every_failure() {
    let conversion =
        read_entries::<Person, _>(testdata("broken.csv"), &TableOptions::default()).unwrap();
    let (people, report) = conversion.into_parts();

    assert_eq!(people.len(), 3);
    assert_eq!(people[1].age, 24);
    assert_eq!(people[2].name, "saint");

    assert_eq!(report.len(), 3);
    assert_eq!(report.count(ErrorKind::ParseFailure), 1);
    assert_eq!(report.count(ErrorKind::IndexOutOfRange), 2);
    assert_eq!(report.failed_rows(), vec![1, 2]);
    assert_eq!(report.first().unwrap().error.kind(), ErrorKind::ParseFailure);
}

#[test]
fn test_write_entries_then_read_back() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("people.csv");
    let people = vec![
        Person {
            age: 20,
            name: "john, jr".to_string(),
            is_employee: false,
        },
        Person {
            age: 24,
            name: "mary".to_string(),
            is_employee: true,
        },
    ];

    let report = write_entries(&path, &people, &TableOptions::default()).unwrap();
    assert!(report.is_clean());

    let written = std::fs::read_to_string(&path).unwrap();
    assert_eq!(
        written,
        "age,name,isEmployee\n20,\"john, jr\",false\n24,mary,true\n"
    );

    let back = read_entries::<Person, _>(&path, &TableOptions::default())
        .unwrap()
        .into_result()
        .unwrap();
    assert_eq!(back, people);
}

#[test]
fn test_semicolon_delimited_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("people.csv");
    let options = TableOptions::default().with_delimiter(b';');

    write_table(
        &path,
        &[vec!["name", "age"], vec!["mary", "24"]],
        &options,
    )
    .unwrap();

    let people = read_entries::<Person, _>(&path, &options)
        .unwrap()
        .into_result()
        .unwrap();
    assert_eq!(people[0].age, 24);
    assert_eq!(people[0].name, "mary");
}

#[test]
fn test_empty_file_is_invalid_shape() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("empty.csv");
    std::fs::write(&path, "").unwrap();

    let err = read_entries::<Person, _>(&path, &TableOptions::default()).unwrap_err();
    match err {
        TableIoError::Records(e) => assert_eq!(e.kind(), ErrorKind::InvalidInputShape),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_schema_driven_normalization() {
    let descriptor = EntryDescriptor::from_file(testdata("person.yaml")).unwrap();
    let table = read_table(testdata("test.csv"), &TableOptions::default()).unwrap();

    let mut records: Vec<DynamicRecord> = Vec::new();
    unmarshal_dynamic(&descriptor, &table, &mut records)
        .unwrap()
        .into_result()
        .unwrap();

    assert_eq!(records.len(), 4);
    assert_eq!(records[2].get(2), Some(&FieldValue::Bool(true)));
    assert_eq!(records[2].get(3), Some(&FieldValue::text("")));

    let normalized = marshal_dynamic(&descriptor, &records)
        .unwrap()
        .into_result()
        .unwrap();
    assert_eq!(normalized[0], vec!["age", "name", "isEmployee"]);
    assert_eq!(normalized[3], vec!["31", "saint", "true"]);
    assert_eq!(normalized[4], vec!["45", "helen", "false"]);
}
