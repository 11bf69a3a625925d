use defense_desk::workflows::reconcile::{
    extract_name, normalize, resolve, suggest, MatchResult, NameReconciler, ReconcileConfig,
};

#[test]
fn normalization_folds_case_and_accents() {
    assert_eq!(normalize("Á"), "a");
    assert_eq!(normalize("ñ"), "n");
    assert_eq!(normalize("ABC"), "abc");

    let source = "Garcia, María_12345";
    let normalized = normalize(source);
    assert_eq!(normalize(&normalized), normalized);
    assert_eq!(source, "Garcia, María_12345");
}

#[test]
fn extraction_handles_submission_labels_and_pass_through() {
    assert_eq!(
        extract_name("Garcia, Maria_12345_assignsubmission_file"),
        "Maria_Garcia"
    );
    assert_eq!(extract_name("foo_bar"), "foo_bar");
    assert_eq!(extract_name("no_underscore_here"), "no_underscore_here");
}

#[test]
fn resolves_exact_folder_for_roster_student() {
    let roster = ["Maria Garcia"];
    let dirs = ["Maria_Garcia"];
    assert_eq!(
        resolve("Maria_Garcia", &roster, &dirs),
        MatchResult::Matched {
            directory: "Maria_Garcia".into(),
            roster_name: "Maria Garcia".into(),
        }
    );
}

#[test]
fn empty_roster_rejects_everything() {
    let roster: [&str; 0] = [];
    assert_eq!(
        resolve("Maria_Garcia", &roster, &["Maria_Garcia"]),
        MatchResult::NotInRoster
    );
}

#[test]
fn roster_student_without_folder_is_not_found() {
    assert_eq!(
        resolve("Maria_Garcia", &["Maria Garcia"], &["Joan_Puig"]),
        MatchResult::NotFound {
            roster_name: "Maria Garcia".into(),
        }
    );
}

#[test]
fn partial_match_tolerates_extra_folder_text() {
    let outcome = resolve("Maria_Garcia", &["Maria Garcia"], &["Joan_Puig", "Maria_Garcia_TFM"]);
    assert_eq!(outcome.directory(), Some("Maria_Garcia_TFM"));
}

#[test]
fn first_roster_entry_wins_ties() {
    let roster = ["Maria Garcia Lopez", "Maria Garcia"];
    let outcome = resolve("Maria_Garcia", &roster, &["Maria_Garcia"]);
    assert_eq!(outcome.roster_name(), Some("Maria Garcia Lopez"));

    let reversed = ["Maria Garcia", "Maria Garcia Lopez"];
    let outcome = resolve("Maria_Garcia", &reversed, &["Maria_Garcia"]);
    assert_eq!(outcome.roster_name(), Some("Maria Garcia"));
}

#[test]
fn duplicate_roster_names_resolve_to_the_first() {
    let roster = ["Joan Puig", "Joan Puig"];
    let reconciler = NameReconciler::new(&roster, &["Joan_Puig"], ReconcileConfig::default());
    assert_eq!(reconciler.resolve("Joan_Puig").roster_name(), Some("Joan Puig"));
}

#[test]
fn degenerate_name_matches_first_folder() {
    let outcome = resolve("", &["Maria Garcia"], &["Joan_Puig", "Maria_Garcia"]);
    assert_eq!(outcome.directory(), Some("Joan_Puig"));
}

#[test]
fn accented_submission_matches_plain_folder() {
    let label = "Vidal, Núria_77_assignsubmission_file";
    let outcome = resolve(&extract_name(label), &["NÚRIA VIDAL"], &["Nuria_Vidal"]);
    assert_eq!(
        outcome,
        MatchResult::Matched {
            directory: "Nuria_Vidal".into(),
            roster_name: "NÚRIA VIDAL".into(),
        }
    );
}

#[test]
fn suggestions_list_at_most_three_overlapping_folders() {
    let dirs = ["Garcia_A", "Garcia_B", "Joan_Puig", "Garcia_C", "Garcia_D"];
    let config = ReconcileConfig::default();
    assert_eq!(
        suggest("Maria_Garcia", &dirs, &config),
        vec!["Garcia_A", "Garcia_B", "Garcia_C"]
    );
}
