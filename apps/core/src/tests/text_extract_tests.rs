//! Text Extraction Module Tests
//!
//! Feature lists supplied as files: each format must come out as lines the
//! categorizer parses the same way as hand-typed text.

use crate::categorizer::{categorize, Category, Priority};
use crate::error::AppError;
use crate::text_extract::{extract_feature_text, read_source};
use std::io::Write;

#[cfg(test)]
mod format_tests {
    use super::*;

    #[test]
    fn test_markdown_lists() {
        let content = "\
# Client wishlist

## Must have
- Add login page (high priority)
* Implement Stripe checkout
1. Dark mode toggle button (low priority)
- [ ] Launch confetti animation
- [x] Sync with third-party CRM
";
        let text = extract_feature_text("wishlist.md", content.as_bytes()).unwrap();

        assert_eq!(
            text,
            "Add login page (high priority)\n\
             Implement Stripe checkout\n\
             Dark mode toggle button (low priority)\n\
             Launch confetti animation\n\
             Sync with third-party CRM"
        );
    }

    #[test]
    fn test_markdown_hash_without_space_is_text() {
        let content = "## Backlog\n#1 ask: search\n#\n###### Deep heading\n#hashtag support";
        let text = extract_feature_text("backlog.md", content.as_bytes()).unwrap();

        assert_eq!(text, "#1 ask: search\n#hashtag support");
    }

    #[test]
    fn test_csv_first_column_with_header() {
        let content = "Feature,Owner\nAdd login page (high priority),Ana\n\"Search, filter and sort\",Bo\n";
        let text = extract_feature_text("features.CSV", content.as_bytes()).unwrap();

        assert_eq!(text, "Add login page (high priority)\nSearch, filter and sort");
    }

    #[test]
    fn test_csv_without_header() {
        let content = "Implement Stripe checkout,1\nLaunch confetti animation,2";
        let text = extract_feature_text("features.csv", content.as_bytes()).unwrap();

        assert_eq!(text, "Implement Stripe checkout\nLaunch confetti animation");
    }

    #[test]
    fn test_json_array_of_strings() {
        let content = r#"["Add login page (high priority)", "Implement Stripe checkout"]"#;
        let text = extract_feature_text("features.json", content.as_bytes()).unwrap();

        assert_eq!(text, "Add login page (high priority)\nImplement Stripe checkout");
    }

    #[test]
    fn test_json_multiline_entry_is_one_feature() {
        let content = r#"["Multi\nline feature", {"text": "Export\r\n  to PDF\n", "priority": "high"}]"#;
        let text = extract_feature_text("features.json", content.as_bytes()).unwrap();

        assert_eq!(text, "Multi line feature\nExport to PDF (high priority)");

        let report = categorize(&text);
        assert_eq!(report.total_features, 2);
        let export = report.group(Category::Integrations).unwrap();
        assert_eq!(export.features[0].priority, Priority::High);
    }

    #[test]
    fn test_json_object_with_priorities() {
        let content = r#"{
            "features": [
                {"text": "Sync with third-party CRM", "priority": "High"},
                {"text": "Dark mode toggle button", "priority": "low"},
                {"text": "Launch confetti animation"},
                {"text": "Audit log", "priority": "urgent"},
                "Implement Stripe checkout"
            ]
        }"#;
        let text = extract_feature_text("features.json", content.as_bytes()).unwrap();

        assert_eq!(
            text,
            "Sync with third-party CRM (high priority)\n\
             Dark mode toggle button (low priority)\n\
             Launch confetti animation\n\
             Audit log\n\
             Implement Stripe checkout"
        );

        let report = categorize(&text);
        let crm = report.group(Category::Integrations).unwrap();
        assert_eq!(crm.features[0].priority, Priority::High);
    }

    #[test]
    fn test_malformed_json() {
        let result = extract_feature_text("features.json", b"{\"features\": 3}");
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[test]
    fn test_invalid_pdf() {
        let result = extract_feature_text("brief.pdf", b"not a pdf");
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[test]
    fn test_invalid_docx() {
        let result = extract_feature_text("brief.docx", b"not a zip archive");
        assert!(matches!(result, Err(AppError::Validation(_))));
    }
}

#[cfg(test)]
mod read_source_tests {
    use super::*;

    #[test]
    fn test_read_text_file() {
        let mut file = tempfile::Builder::new().suffix(".txt").tempfile().unwrap();
        writeln!(file, "Add login page (high priority)").unwrap();
        writeln!(file, "Launch confetti animation").unwrap();

        let text = read_source(Some(file.path()), 1024).unwrap();
        let report = categorize(&text);

        assert_eq!(report.total_features, 2);
        assert_eq!(report.categories(), vec![Category::Authentication, Category::Other]);
    }

    #[test]
    fn test_file_over_limit() {
        let mut file = tempfile::Builder::new().suffix(".txt").tempfile().unwrap();
        file.write_all(&[b'a'; 64]).unwrap();
        file.flush().unwrap();

        let result = read_source(Some(file.path()), 16);
        match result {
            Err(AppError::Validation(msg)) => assert!(msg.contains("limit")),
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = read_source(Some(&dir.path().join("missing.txt")), 1024);
        assert!(matches!(result, Err(AppError::Io(_))));
    }
}
