use genwatch_core::{classify, is_terminal, progress_percent, StatusCategory};

#[test]
fn success_markers_classify_as_success() {
    for status in [
        "PRD saved to 'project/prd.md'",
        "calculator.py generated.",
        "calculator.py updated by Code Fixer.",
        "Tests passed for calculator.py!",
        "tests PASSED for calculator.py!",
    ] {
        assert_eq!(classify(status), StatusCategory::Success, "{status}");
    }
}

#[test]
fn error_markers_classify_as_error() {
    for status in [
        "Could not fix calculator.py after 2 attempts.",
        "Failed to parse task JSON.",
        "An unexpected ERROR occurred",
    ] {
        assert_eq!(classify(status), StatusCategory::Error, "{status}");
    }
}

#[test]
fn complete_without_other_markers_classifies_as_complete() {
    assert_eq!(
        classify("Project generation complete!"),
        StatusCategory::Complete
    );
}

#[test]
fn everything_else_is_info() {
    for status in ["Processing...", "Generating System Design...", "Parsed 4 tasks."] {
        assert_eq!(classify(status), StatusCategory::Info, "{status}");
    }
}

#[test]
fn success_takes_precedence_over_error_and_complete() {
    // "saved to" is checked before "error" and "complete".
    assert_eq!(
        classify("error log saved to 'log.txt'"),
        StatusCategory::Success
    );
    // "failed" is checked before "complete".
    assert_eq!(classify("Run failed, incomplete"), StatusCategory::Error);
}

#[test]
fn percent_mapping_follows_stage_keywords() {
    assert_eq!(progress_percent("Generating System Design..."), 30);
    assert_eq!(progress_percent("Breaking the design into tasks"), 45);
    assert_eq!(progress_percent("Generating code files"), 60);
    assert_eq!(progress_percent("Writing unit tests"), 75);
    assert_eq!(progress_percent("Running tests and fixing"), 85);
    assert_eq!(progress_percent("Project generation complete!"), 100);
    assert_eq!(progress_percent("Tests passed successfully"), 100);
    assert_eq!(progress_percent("Processing..."), 10);
}

#[test]
fn percent_mapping_is_first_match_wins() {
    // Both "System Design" and "unit tests" present: the earlier keyword wins.
    assert_eq!(
        progress_percent("System Design covers the unit tests"),
        30
    );
}

#[test]
fn percent_defaults_when_no_stage_keyword_matches() {
    assert_eq!(progress_percent("Could not fix remaining issues"), 10);
}

#[test]
fn terminal_pattern_is_narrower_than_classification() {
    // Per-file successes keep the poll running.
    assert!(!is_terminal("PRD saved to 'project/prd.md'"));
    assert!(!is_terminal("calculator.py generated."));
    assert!(!is_terminal("Tests passed for calculator.py!"));
    // Run-level completion or failure stops it.
    assert!(is_terminal("Project generation complete!"));
    assert!(is_terminal("Tests passed successfully"));
    assert!(is_terminal("Could not fix calculator.py after 2 attempts."));
    assert!(is_terminal("Failed to parse task JSON."));
    assert!(is_terminal("An unexpected error occurred"));
    assert!(!is_terminal("Processing..."));
}
