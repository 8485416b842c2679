//! Integration tests for tabular-preview

use std::io::Write;
use tabular_preview::{
    AnalysisView, Classifier, DEFAULT_MAX_BYTES, IngestError, Ingestor, SampleSize, Source,
    Value, classify, enabled_views, parse,
};
use tempfile::NamedTempFile;

fn temp_file(suffix: &str, contents: &[u8]) -> NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(contents).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_end_to_end_signup_table() {
    let data = b"id,name,signup_date\n1,Alice,2023-01-01\n2,Bob,2023-02-01";
    let table = parse(&Source::file("signups.csv", data.to_vec())).unwrap();

    assert_eq!(table.columns(), vec!["id", "name", "signup_date"]);
    assert_eq!(table.num_rows(), 2);
    assert_eq!(
        table.rows()[0].values(),
        &[
            Value::Number(1.0),
            Value::from("Alice"),
            Value::from("2023-01-01")
        ]
    );
    assert_eq!(
        table.rows()[1].values(),
        &[
            Value::Number(2.0),
            Value::from("Bob"),
            Value::from("2023-02-01")
        ]
    );

    let classes = classify(&table);
    assert_eq!(classes.numeric, vec!["id"]);
    assert_eq!(classes.datetime, vec!["signup_date"]);
    assert_eq!(classes.categorical, vec!["name"]);
    assert!(classes.text.is_empty());

    let views = enabled_views(&classes);
    assert!(views.contains(&AnalysisView::TimeSeries));
    assert!(!views.contains(&AnalysisView::Clustering));
}

#[test]
fn test_tsv_file() {
    let data = b"city\tpopulation\nOslo\t709037\nBergen\t291189\n";
    let table = parse(&Source::file("cities.TSV", data.to_vec())).unwrap();

    assert_eq!(table.columns(), vec!["city", "population"]);
    assert_eq!(table.get(1, "population"), Some(&Value::Number(291_189.0)));
}

#[test]
fn test_row_count_is_min_of_rows_and_cap() {
    let mut data = String::from("a,b,c\n");
    for i in 0..30 {
        data.push_str(&format!("{i},x{i},{}\n", i * 2));
    }

    for (cap, expected) in [(0, 0), (10, 10), (30, 30), (500, 30)] {
        let mut ingestor = Ingestor::new();
        ingestor.sample_size(SampleSize::Records(cap));
        let table = ingestor.parse_bytes("data.csv", data.as_bytes()).unwrap();

        assert_eq!(table.num_columns(), 3);
        assert_eq!(table.num_rows(), expected, "cap {cap}");
    }
}

#[test]
fn test_unsupported_extensions() {
    for name in ["data.json", "data.txt", "data.parquet", "data"] {
        let result = parse(&Source::file(name, b"a,b\n1,2\n".to_vec()));
        assert!(
            matches!(result, Err(IngestError::UnsupportedFormat(_))),
            "{name} should be unsupported"
        );
    }
}

#[test]
fn test_oversized_file_rejected_before_read() {
    let file = temp_file(".csv", b"a,b\n1,2\n3,4\n");

    let mut ingestor = Ingestor::new();
    ingestor.max_bytes(4);

    let result = ingestor.parse_path(file.path());
    assert!(matches!(
        result,
        Err(IngestError::OversizedInput { size: 12, limit: 4 })
    ));
}

#[test]
fn test_default_cap_is_ten_mib() {
    assert_eq!(DEFAULT_MAX_BYTES, 10 * 1024 * 1024);

    let big = vec![b'a'; DEFAULT_MAX_BYTES as usize + 1];
    let result = parse(&Source::file("big.csv", big));
    assert!(matches!(result, Err(IngestError::OversizedInput { .. })));
}

#[test]
fn test_parse_path() {
    let file = temp_file(".csv", b"score,comment\n9.5,great\n7,ok\n");
    let table = Ingestor::new().parse_path(file.path()).unwrap();

    assert_eq!(table.columns(), vec!["score", "comment"]);
    assert_eq!(table.get(0, "score"), Some(&Value::Number(9.5)));
}

#[test]
fn test_source_from_path() {
    let file = temp_file(".tsv", b"a\tb\n1\t2\n");
    let source = Source::from_path(file.path()).unwrap();
    let table = parse(&source).unwrap();

    assert_eq!(table.columns(), vec!["a", "b"]);
    assert!(source.label().ends_with(".tsv"));
}

#[test]
fn test_empty_file_is_malformed() {
    let result = parse(&Source::file("empty.csv", Vec::new()));
    assert!(matches!(result, Err(IngestError::MalformedContent(_))));
}

#[test]
fn test_header_only_file_classifies_nothing() {
    let table = parse(&Source::file("h.csv", b"a,b,c\n".to_vec())).unwrap();
    assert_eq!(table.num_columns(), 3);
    assert!(classify(&table).is_empty());
}

#[test]
fn test_duplicate_header_names_pass_through() {
    let table = parse(&Source::file("dup.csv", b"x,x\n1,2\n".to_vec())).unwrap();
    assert_eq!(table.columns(), vec!["x", "x"]);
    assert_eq!(table.rows()[0].values(), &[Value::Number(1.0), Value::Number(2.0)]);
}

#[test]
fn test_duplicate_header_names_classified_once() {
    let table = parse(&Source::file("dup.csv", b"x,x\n1,abc\n".to_vec())).unwrap();
    let classes = classify(&table);

    assert_eq!(classes.numeric, vec!["x"]);
    assert!(classes.categorical.is_empty());
    assert_eq!(classes.len(), 1);
}

#[test]
fn test_utf8_bom_header() {
    let mut data = vec![0xEF, 0xBB, 0xBF];
    data.extend_from_slice(b"id,value\n1,2\n");
    let table = parse(&Source::file("bom.csv", data)).unwrap();
    assert_eq!(table.columns(), vec!["id", "value"]);
}

#[test]
fn test_text_and_categorical_split() {
    let review = "This product exceeded every expectation I had and then some more.";
    assert!(review.chars().count() > 50);
    let data = format!("review,status\n\"{review}\",shipped\nshort,\"{review}\"\n");
    let table = parse(&Source::file("reviews.csv", data.into_bytes())).unwrap();
    let classes = classify(&table);

    assert_eq!(classes.text, vec!["review"]);
    assert_eq!(classes.categorical, vec!["status"]);
    assert!(enabled_views(&classes).contains(&AnalysisView::TextNlp));
}

#[test]
fn test_mixed_numeric_column_not_numeric() {
    let data = b"code\n1\nabc\n3\n";
    let table = parse(&Source::file("codes.csv", data.to_vec())).unwrap();
    let classes = classify(&table);

    assert!(classes.numeric.is_empty());
    assert_eq!(classes.categorical, vec!["code"]);
}

#[test]
fn test_custom_text_threshold() {
    let data = b"note\nsomewhat longer note\n";
    let table = parse(&Source::file("notes.csv", data.to_vec())).unwrap();

    let mut classifier = Classifier::new();
    classifier.text_threshold(10);
    assert_eq!(classifier.classify(&table).text, vec!["note"]);
}

#[test]
fn test_classification_idempotent() {
    let data = b"a,b,updated_at\n1,x,2024-01-01\n2,y,2024-01-02\n";
    let table = parse(&Source::file("t.csv", data.to_vec())).unwrap();

    assert_eq!(classify(&table), classify(&table));
}

#[test]
fn test_errors_render_messages() {
    let err = parse(&Source::file("a.pdf", Vec::new())).unwrap_err();
    assert!(err.to_string().contains("Unsupported file type"));

    let err = IngestError::OversizedInput { size: 11, limit: 10 };
    assert!(err.to_string().contains("Maximum allowed size"));
}
