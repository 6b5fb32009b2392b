//! Integration tests for ringtab.

use std::io::Write;
use tempfile::NamedTempFile;

use ringtab::{
    codec, generate, validate, ImportError, MockGateway, Ringtab, RingtabError, TableKind,
};

/// Helper to create a temporary file with given content.
fn create_test_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(content.as_bytes())
        .expect("Failed to write to temp file");
    file
}

// =============================================================================
// Round-Trip Tests
// =============================================================================

#[test]
fn test_round_trip_modulus_document() {
    let doc = generate::from_modulus(5).unwrap();
    let csv = codec::to_csv_string(&doc).unwrap();
    let imported = codec::from_reader(csv.as_bytes()).unwrap();
    assert_eq!(imported, doc);
}

#[test]
fn test_round_trip_custom_labels() {
    let mut doc = generate::from_element_list("e, a, b").unwrap();
    for kind in [TableKind::Addition, TableKind::Multiplication] {
        for i in 0..3 {
            for j in 0..3 {
                let label = doc.elements().get((i + j) % 3).unwrap().to_string();
                doc.set_cell(kind, i, j, label).unwrap();
            }
        }
    }

    let csv = codec::to_csv_string(&doc).unwrap();
    let imported = codec::from_reader(csv.as_bytes()).unwrap();
    assert_eq!(imported, doc);
}

#[test]
fn test_round_trip_survives_padded_edit() {
    let mut doc = generate::from_modulus(2).unwrap();
    doc.set_cell(TableKind::Addition, 0, 0, " 1 ").unwrap();
    assert_eq!(doc.table(TableKind::Addition).get(0, 0), Some("1"));

    let csv = codec::to_csv_string(&doc).unwrap();
    let imported = codec::from_reader(csv.as_bytes()).unwrap();
    assert_eq!(imported, doc);
}

#[test]
fn test_exported_separator_is_a_blank_line() {
    let doc = generate::from_modulus(2).unwrap();
    let csv = codec::to_csv_string(&doc).unwrap();
    assert_eq!(csv, "+,0,1\n0,0,1\n1,1,0\n\n*,0,1\n0,0,0\n1,0,1\n");
}

#[test]
fn test_round_trip_through_file() {
    let doc = generate::from_modulus(4).unwrap();
    let file = NamedTempFile::new().unwrap();
    codec::write_file(&doc, file.path()).unwrap();

    let (imported, metadata) = codec::from_file(file.path()).unwrap();
    assert_eq!(imported, doc);
    assert!(metadata.hash.starts_with("sha256:"));
    assert_eq!(metadata.row_count, 11);
    assert!(metadata.size_bytes > 0);
}

#[test]
fn test_provenance_hash_is_content_stable() {
    let doc = generate::from_modulus(3).unwrap();
    let a = NamedTempFile::new().unwrap();
    let b = NamedTempFile::new().unwrap();
    codec::write_file(&doc, a.path()).unwrap();
    codec::write_file(&doc, b.path()).unwrap();

    let (_, meta_a) = codec::from_file(a.path()).unwrap();
    let (_, meta_b) = codec::from_file(b.path()).unwrap();
    assert_eq!(meta_a.hash, meta_b.hash);
}

// =============================================================================
// Import Rejection Tests
// =============================================================================

#[test]
fn test_import_rejects_short_file() {
    let file = create_test_file("+,0\n0,0\n");
    let err = codec::from_file(file.path()).unwrap_err();
    assert!(matches!(
        err,
        RingtabError::Import(ImportError::TooFewRows { found: 2 })
    ));
}

#[test]
fn test_import_rejects_header_mismatch() {
    // Element list is [a, c] but the multiplication header says [a, b].
    let content = "+,a,c\na,a,c\nc,c,a\n\n*,a,b\na,a,a\nc,a,c\n";
    let file = create_test_file(content);

    let err = codec::from_file(file.path()).unwrap_err();
    match err {
        RingtabError::Import(ImportError::HeaderMismatch {
            table,
            column,
            expected,
            found,
        }) => {
            assert_eq!(table, TableKind::Multiplication);
            assert_eq!(column, 2);
            assert_eq!(expected, "c");
            assert_eq!(found, "b");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_import_rejects_foreign_cell_value() {
    let content = "\
+,0,1,2\n0,0,1,2\n1,1,2,0\n2,2,0,1\n\n\
*,0,1,2\n0,0,0,0\n1,0,1,2\n2,0,x,1\n";
    let file = create_test_file(content);

    let err = codec::from_file(file.path()).unwrap_err();
    match err {
        RingtabError::Import(ImportError::UnknownCell {
            table,
            row,
            column,
            value,
        }) => {
            assert_eq!(table, TableKind::Multiplication);
            assert_eq!(row, 3);
            assert_eq!(column, 2);
            assert_eq!(value, "x");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_import_error_messages_are_actionable() {
    let err = codec::parse_rows(vec![vec!["+".to_string()]]).unwrap_err();
    assert!(err.to_string().contains("at least 5 rows"));

    let content = "+,a,c\na,a,c\nc,c,a\n\n*,a,b\na,a,a\nc,a,c\n";
    let err = codec::from_reader(content.as_bytes()).unwrap_err();
    let message = err.to_string();
    assert!(message.contains("column 2"));
    assert!(message.contains("'c'"));
    assert!(message.contains("'b'"));
}

// =============================================================================
// Session Tests
// =============================================================================

#[test]
fn test_session_file_import_records_provenance() {
    let doc = generate::from_modulus(2).unwrap();
    let file = NamedTempFile::new().unwrap();
    codec::write_file(&doc, file.path()).unwrap();

    let mut session = Ringtab::new();
    session.import_file(file.path()).unwrap();

    assert_eq!(session.document().unwrap().elements().len(), 2);
    let source = session.source().unwrap();
    assert!(source.hash.starts_with("sha256:"));
}

#[test]
fn test_session_failed_file_import_clears_tables() {
    let bad = create_test_file("+,0\n0,0\n");
    let mut session = Ringtab::new();
    session.set_modulus(2);
    session.generate().unwrap();

    assert!(session.import_file(bad.path()).is_err());
    let doc = session.document().unwrap();
    assert!(!doc.table(TableKind::Addition).is_fully_populated());
}

#[test]
fn test_full_workflow_generate_export_import_analyze() {
    let mut session = Ringtab::new().with_gateway(MockGateway::cyclic_ring());
    session.set_modulus(3);
    session.generate().unwrap();

    let file = NamedTempFile::new().unwrap();
    session.export_to_file(file.path()).unwrap();
    session.import_file(file.path()).unwrap();

    validate::check_complete(session.document().unwrap()).unwrap();
    let verdict = session.analyze().unwrap();
    assert!(verdict.is_add_group);
    assert_eq!(verdict.add_identity, "0");
}
