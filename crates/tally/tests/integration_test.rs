//! Integration tests for tally.

use std::fs;
use std::io::Write;
use tempfile::{NamedTempFile, TempDir};

use tally::report::EMPTY_REPORT;
use tally::{
    GradeSummary, OrganizeConfig, Organizer, ReportBuilder, ReportConfig, SalesSummary,
    TallyError, TransferMode, Verdict, make_report, write_report,
};

/// Helper to create a temporary file with given content.
fn create_test_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::with_suffix(".csv").expect("Failed to create temp file");
    file.write_all(content.as_bytes())
        .expect("Failed to write to temp file");
    file
}

// =============================================================================
// Report: counts and delimiters
// =============================================================================

#[test]
fn test_report_basic_csv() {
    let content = "id,name,price\n\
                   1,pen,1.50\n\
                   2,pencil,0.75\n\
                   3,eraser,2.00\n";
    let file = create_test_file(content);

    let report = ReportBuilder::new().build(file.path()).expect("Report failed");

    assert_eq!(report.row_count, 3);
    assert_eq!(report.column_count(), 3);
    assert_eq!(report.source.format, "csv");
    assert_eq!(report.source.row_count, 3);
    assert!(report.source.hash.starts_with("sha256:"));
}

#[test]
fn test_report_counts_same_for_every_delimiter() {
    for delimiter in [",", ";", "\t", "|"] {
        let content = ["a", "b", "c"].join(delimiter)
            + "\n"
            + &["1", "2", "3"].join(delimiter)
            + "\n"
            + &["4", "5", "6"].join(delimiter)
            + "\n";
        let file = create_test_file(&content);

        let report = ReportBuilder::new().build(file.path()).expect("Report failed");

        assert_eq!(report.row_count, 2, "delimiter {:?}", delimiter);
        assert_eq!(report.column_count(), 3, "delimiter {:?}", delimiter);
        assert_eq!(report.summaries.len(), 3, "delimiter {:?}", delimiter);
    }
}

#[test]
fn test_report_semicolon_with_decimal_commas() {
    let content = "produto;preco;quantidade\n\
                   caneta;1,50;10\n\
                   caderno;12,90;2\n";
    let file = create_test_file(content);

    let report = ReportBuilder::new().build(file.path()).expect("Report failed");

    assert_eq!(report.source.format, "csv-semicolon");
    let price = report.summary("preco").expect("price summary");
    assert_eq!(price.count, 2);
    assert!((price.sum - 14.4).abs() < 1e-9);
    assert!((price.mean - 7.2).abs() < 1e-9);
    assert!(report.summary("produto").is_none());
}

#[test]
fn test_report_forced_delimiter() {
    let content = "a;b\n1;2\n";
    let file = create_test_file(content);

    let report = ReportBuilder::new()
        .with_delimiter(b',')
        .build(file.path())
        .expect("Report failed");

    assert_eq!(report.column_count(), 1);
    assert_eq!(report.headers, vec!["a;b"]);
}

#[test]
fn test_report_single_column_falls_back_to_comma() {
    let file = create_test_file("value\n10\n20\n");

    let report = ReportBuilder::new().build(file.path()).expect("Report failed");

    assert_eq!(report.source.delimiter, ',');
    assert_eq!(report.summary("value").map(|s| s.sum), Some(30.0));
}

// =============================================================================
// Report: summaries
// =============================================================================

#[test]
fn test_report_mixed_column_example() {
    let file = create_test_file("a,b\n1,x\n2,y\nfoo,3\n");

    let md = make_report(file.path()).expect("Report failed");

    assert!(md.contains("| a | 2 | 1.00 | 2.00 | 1.50 | 3.00 |"));
    assert!(md.contains("| b | 1 | 3.00 | 3.00 | 3.00 | 3.00 |"));
}

#[test]
fn test_report_all_numeric_column() {
    let file = create_test_file("x\n1.5\n2.5\n3\n-1\n");

    let report = ReportBuilder::new().build(file.path()).expect("Report failed");
    let x = report.summary("x").expect("x summary");

    assert_eq!(x.count, report.row_count);
    assert!((x.sum - 6.0).abs() < 1e-9);
    assert!((x.mean - x.sum / x.count as f64).abs() < 1e-12);
    assert_eq!(x.min, -1.0);
    assert_eq!(x.max, 3.0);
}

#[test]
fn test_report_text_column_not_summarized() {
    let file = create_test_file("city,state\nRecife,PE\nNatal,RN\n");

    let md = make_report(file.path()).expect("Report failed");

    assert!(!md.contains("## Numeric Summary per Column"));
    assert!(md.contains("## Sample (up to 5 rows)"));
}

#[test]
fn test_report_ragged_rows() {
    let file = create_test_file("a,b,c\n1,2,3\n4\n5,6\n");

    let report = ReportBuilder::new().build(file.path()).expect("Report failed");

    assert_eq!(report.row_count, 3);
    assert_eq!(report.summary("a").map(|s| s.count), Some(3));
    assert_eq!(report.summary("b").map(|s| s.count), Some(2));
    assert_eq!(report.summary("c").map(|s| s.count), Some(1));
    assert!(report.sample.iter().all(|row| row.len() == 3));
    assert_eq!(report.sample[1], vec!["4", "", ""]);
}

// =============================================================================
// Report: rendering and output
// =============================================================================

#[test]
fn test_report_sample_limited_to_five_rows() {
    let mut content = String::from("n,label\n");
    for i in 1..=12 {
        content.push_str(&format!("{},row{}\n", i, i));
    }
    let file = create_test_file(&content);

    let report = ReportBuilder::new().build(file.path()).expect("Report failed");
    let md = report.to_markdown();

    assert_eq!(report.row_count, 12);
    assert_eq!(report.sample.len(), 5);
    assert!(md.contains("| 5 | row5 |"));
    assert!(!md.contains("| 6 | row6 |"));
}

#[test]
fn test_report_custom_sample_size() {
    let file = create_test_file("n\n1\n2\n3\n");

    let config = ReportConfig {
        sample_rows: 2,
        ..ReportConfig::default()
    };
    let md = ReportBuilder::with_config(config)
        .render(file.path())
        .expect("Report failed");

    assert!(md.contains("## Sample (up to 2 rows)"));
    assert!(md.contains("| 2 |\n"));
    assert!(!md.contains("| 3 |\n"));
}

#[test]
fn test_report_quoted_cells_escaped() {
    let file = create_test_file("id,comment\n1,\"a|b, and \"\"c\"\"\"\n");

    let md = make_report(file.path()).expect("Report failed");

    assert!(md.contains("| 1 | a\\|b, and \"c\" |"));
}

#[test]
fn test_report_backslash_pipe_cell_keeps_columns() {
    let file = create_test_file("a,b\n\"x\\|y\",2\n");

    let md = make_report(file.path()).expect("Report failed");

    assert!(md.contains("| x\\\\\\|y | 2 |\n"));
}

#[test]
fn test_report_blank_lines_are_not_rows() {
    let file = create_test_file("a\n1\n\n2\n\n");

    let report = ReportBuilder::new().build(file.path()).expect("Report failed");

    assert_eq!(report.row_count, 2);
    assert_eq!(report.summary("a").map(|s| s.count), Some(2));
}

#[test]
fn test_report_title_names_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("vendas.csv");
    fs::write(&path, "total\n10\n").unwrap();

    let md = make_report(&path).expect("Report failed");

    assert!(md.starts_with("# CSV Report: vendas.csv\n"));
    assert!(md.contains("- Data rows: **1**"));
    assert!(md.contains("- Columns: **1** (total)"));
}

#[test]
fn test_report_empty_file() {
    let file = create_test_file("");

    let md = make_report(file.path()).expect("Report failed");

    assert_eq!(md, EMPTY_REPORT);
}

#[test]
fn test_report_invalid_utf8_is_not_fatal() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"name,score\n\xffbad,10\nok,20\n").unwrap();

    let report = ReportBuilder::new().build(file.path()).expect("Report failed");

    assert_eq!(report.row_count, 2);
    assert_eq!(report.summary("score").map(|s| s.sum), Some(30.0));
}

#[test]
fn test_report_missing_file() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nope.csv");

    let err = make_report(&missing).unwrap_err();

    assert!(matches!(err, TallyError::FileNotFound { .. }));
    assert!(err.to_string().contains("nope.csv"));
}

#[test]
fn test_write_report_to_nested_path() {
    let file = create_test_file("a\n1\n");
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("reports/2024/report.md");

    let md = make_report(file.path()).expect("Report failed");
    write_report(&md, &out).expect("Write failed");

    assert_eq!(fs::read_to_string(&out).unwrap(), md);
}

#[test]
fn test_report_json_output() {
    let file = create_test_file("a,b\n1,x\n");

    let report = ReportBuilder::new().build(file.path()).expect("Report failed");
    let json: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();

    assert_eq!(json["row_count"], 1);
    assert_eq!(json["headers"][1], "b");
    assert_eq!(json["summaries"][0]["name"], "a");
    assert_eq!(json["source"]["format"], "csv");
}

// =============================================================================
// Calculators
// =============================================================================

#[test]
fn test_grades_and_sales() {
    let grades = GradeSummary::compute(&[6.0, 7.5, 8.0, 9.5], 7.0).unwrap();
    assert_eq!(format!("{:.2}", grades.mean), "7.75");
    assert_eq!(format!("{:.2}", grades.median), "7.75");
    assert_eq!(grades.verdict, Verdict::Approved);

    let sales = SalesSummary::compute(&[120.90, 45.0, 32.5, 88.0, 10.0]).unwrap();
    assert_eq!(sales.count, 5);
    assert_eq!(format!("{:.2}", sales.total), "296.40");
    assert_eq!(format!("{:.2}", sales.average_ticket), "59.28");
}

// =============================================================================
// Organizer
// =============================================================================

#[test]
fn test_organize_dry_run_leaves_tree_untouched() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("a.pdf"), "pdf").unwrap();
    fs::write(dir.path().join("b.png"), "png").unwrap();

    let organizer = Organizer::new(OrganizeConfig::new(dir.path()));
    let plan = organizer.plan().unwrap();

    assert_eq!(plan.len(), 2);
    assert!(dir.path().join("a.pdf").exists());
    assert!(!dir.path().join("pdf").exists());
}

#[test]
fn test_organize_into_separate_destination() {
    let src = TempDir::new().unwrap();
    let dest = TempDir::new().unwrap();
    fs::create_dir_all(src.path().join("nested")).unwrap();
    fs::write(src.path().join("notes.TXT"), "1").unwrap();
    fs::write(src.path().join("nested/notes.txt"), "2").unwrap();
    fs::write(src.path().join("Makefile"), "3").unwrap();
    fs::create_dir_all(dest.path().join("txt")).unwrap();
    fs::write(dest.path().join("txt/notes.txt"), "0").unwrap();

    let config = OrganizeConfig::new(src.path())
        .with_destination(dest.path())
        .with_mode(TransferMode::Move);
    let organizer = Organizer::new(config);
    let plan = organizer.plan().unwrap();
    let done = organizer.execute(&plan).unwrap();

    assert_eq!(done.len(), 3);
    assert!(dest.path().join("no_extension/Makefile").exists());
    assert_eq!(fs::read_to_string(dest.path().join("txt/notes.txt")).unwrap(), "0");
    assert!(dest.path().join("txt/notes_1.txt").exists());
    assert!(dest.path().join("txt/notes.TXT").exists());
    assert!(!src.path().join("Makefile").exists());
}
