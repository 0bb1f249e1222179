use flydoc_core::constants::CRITICAL_SYMPTOMS;
use flydoc_core::{
    classify, CaseStatus, FlightContext, GuidanceGenerator, PatientContext, Pathway,
    ReportCompiler, Severity, SymptomCatalog, TriageConfig, TriageError,
};

fn config() -> TriageConfig {
    TriageConfig::new(
        SymptomCatalog::builtin().unwrap(),
        FlightContext::default(),
        PatientContext::default(),
    )
}

/// Every non-empty subset of the default catalog, as id lists.
fn all_selections(ids: &[&'static str]) -> Vec<Vec<&'static str>> {
    (1u32..(1 << ids.len()))
        .map(|mask| {
            ids.iter()
                .enumerate()
                .filter(|(i, _)| mask & (1 << i) != 0)
                .map(|(_, id)| *id)
                .collect()
        })
        .collect()
}

const IDS: [&str; 8] = ["1", "2", "3", "4", "5", "6", "7", "8"];

#[test]
fn test_headache_is_mild_with_standard_guidance() {
    let cfg = config();
    let case = cfg.case_manager().create(&["1"]).unwrap();

    assert_eq!(case.severity(), Severity::Mild);

    let guidance = GuidanceGenerator::generate(case.severity(), case.symptoms());
    assert_eq!(guidance.pathway, Pathway::Standard);
    assert_eq!(guidance.steps.len(), 6);
    assert_eq!(guidance.steps[0].instruction, "reassure and calm patient");
}

#[test]
fn test_chest_pain_is_critical_with_critical_guidance() {
    let cfg = config();
    let case = cfg.case_manager().create(&["4"]).unwrap();

    assert_eq!(case.symptoms(), ["chest pain"]);
    assert_eq!(case.severity(), Severity::Critical);

    let guidance = GuidanceGenerator::generate(case.severity(), case.symptoms());
    assert_eq!(guidance.pathway, Pathway::Critical);
    assert_eq!(guidance.steps[0].instruction, "ensure airway patency");
}

#[test]
fn test_three_non_critical_symptoms_are_moderate() {
    let cfg = config();
    let case = cfg.case_manager().create(&["1", "6", "7"]).unwrap();

    assert_eq!(case.symptoms(), ["headache", "dizziness", "vomiting"]);
    assert_eq!(case.severity(), Severity::Moderate);
}

#[test]
fn test_empty_selection_leaves_store_unchanged() {
    let cfg = config();
    let manager = cfg.case_manager();
    let empty: Vec<String> = Vec::new();

    assert!(matches!(
        manager.create(&empty),
        Err(TriageError::InvalidSelection)
    ));
    assert!(manager.store().is_empty());
}

#[test]
fn test_double_save_keeps_single_entry() {
    let cfg = config();
    let mut manager = cfg.case_manager();
    let case = manager.create(&["2", "5"]).unwrap();

    let first = manager.save(case.clone()).unwrap();
    let second = manager.save(case.clone()).unwrap();

    assert_eq!(first, second);
    assert_eq!(manager.store().len(), 1);
    assert_eq!(manager.store().list()[0].id(), case.id());
    assert_eq!(manager.store().list()[0].status(), CaseStatus::Completed);
}

#[test]
fn test_full_session_flow() {
    let cfg = config();
    let mut manager = cfg.case_manager();

    let case = manager.create(&["3", "1"]).unwrap();
    let first = GuidanceGenerator::generate(case.severity(), case.symptoms());
    let again = GuidanceGenerator::generate(case.severity(), case.symptoms());
    assert_eq!(first, again);

    let report = ReportCompiler::compile(&case, cfg.flight(), cfg.patient());
    let saved = manager.save(case).unwrap();

    assert_eq!(report.case().id(), saved.id());
    assert_eq!(report.case().status(), CaseStatus::Active);
    assert_eq!(saved.status(), CaseStatus::Completed);
    assert_eq!(manager.store().get(saved.id()).unwrap(), &saved);
}

#[test]
fn test_list_length_equals_distinct_saved_ids() {
    let cfg = config();
    let mut manager = cfg.case_manager();

    let a = manager.create(&["1"]).unwrap();
    let b = manager.create(&["8"]).unwrap();

    manager.save(a.clone()).unwrap();
    manager.save(b.clone()).unwrap();
    manager.save(a.clone()).unwrap();

    let ids: Vec<_> = manager.store().list().iter().map(|c| c.id().clone()).collect();
    assert_eq!(ids, vec![a.id().clone(), b.id().clone()]);
}

#[test]
fn test_classification_rules_hold_for_every_selection() {
    let cfg = config();
    let manager = cfg.case_manager();

    for selection in all_selections(&IDS) {
        let case = manager.create(&selection).unwrap();
        let names = case.symptoms();
        let has_critical = names.iter().any(|n| CRITICAL_SYMPTOMS.contains(&n.as_str()));

        let expected = if has_critical {
            Severity::Critical
        } else if names.len() >= 3 {
            Severity::Moderate
        } else {
            Severity::Mild
        };

        assert_eq!(case.severity(), expected, "selection {:?}", selection);
        assert_eq!(classify(names), expected);

        let guidance = GuidanceGenerator::generate(case.severity(), names);
        assert_eq!(guidance.steps.len(), 6);
        let expected_pathway = if has_critical {
            Pathway::Critical
        } else {
            Pathway::Standard
        };
        assert_eq!(guidance.pathway, expected_pathway);
    }
}

#[test]
fn test_report_preserves_symptoms_for_every_selection() {
    let cfg = config();
    let manager = cfg.case_manager();

    for selection in all_selections(&IDS) {
        let case = manager.create(&selection).unwrap();
        let report = ReportCompiler::compile(&case, cfg.flight(), cfg.patient());

        assert_eq!(report.case().id(), case.id());
        assert_eq!(report.case().symptoms(), case.symptoms());
        assert_eq!(report.case().severity(), case.severity());
    }
}
