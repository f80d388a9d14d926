//! Walkthrough integration tests
//!
//! Runs every principle into a transcript and checks the narration contrast
//! between bad and good practice.

use solid::{run, run_captured, DemoConfig, Principle, Transcript};

fn split_at_good(lines: &[String]) -> (&[String], &[String]) {
    let good = lines
        .iter()
        .position(|l| l == "GOOD PRACTICE")
        .expect("walkthrough has a good practice section");
    lines.split_at(good)
}

#[test]
fn test_every_principle_has_both_practices() {
    for principle in Principle::ALL {
        let report = run_captured(principle, &DemoConfig::default()).unwrap();
        let (bad, good) = split_at_good(&report.lines);

        assert!(
            bad.iter().any(|l| l == "BAD PRACTICE"),
            "{} has no bad practice",
            principle
        );
        assert!(bad.len() > 3, "{} bad practice narrates nothing", principle);
        assert!(good.len() > 3, "{} good practice narrates nothing", principle);
    }
}

#[test]
fn test_dependency_inversion_contrast() {
    let report = run_captured(Principle::DependencyInversion, &DemoConfig::default()).unwrap();
    let (bad, good) = split_at_good(&report.lines);

    assert!(bad.iter().any(|l| l.contains("fails to support super worker")));
    assert!(!good.iter().any(|l| l.contains("fails to support")));
    assert!(good.iter().any(|l| l == "I'm super worker. I work very hard!"));
}

#[test]
fn test_interface_segregation_contrast() {
    let report = run_captured(Principle::InterfaceSegregation, &DemoConfig::default()).unwrap();
    let (bad, good) = split_at_good(&report.lines);

    assert!(bad.iter().any(|l| l == "I don't need to eat...."));
    assert!(good.iter().any(|l| l == "I'm a robot. I'm working...."));
    assert!(good.iter().any(|l| l.starts_with("The robot gets no lunch break")));
}

#[test]
fn test_liskov_substitution_contrast() {
    let report = run_captured(Principle::LiskovSubstitution, &DemoConfig::default()).unwrap();
    let (bad, good) = split_at_good(&report.lines);

    assert!(bad.iter().any(|l| l == "The current position of the prisoner: (0, 13)"));
    assert!(good.iter().any(|l| l == "The current position of the prisoner: (3, 3)"));
}

#[test]
fn test_run_appends_to_shared_transcript() {
    let transcript = Transcript::new();
    run(Principle::OpenClosed, &DemoConfig::default(), &transcript).unwrap();
    run(
        Principle::SingleResponsibility,
        &DemoConfig::default(),
        &transcript,
    )
    .unwrap();

    assert!(transcript.contains("I'm a rectangle"));
    assert!(transcript.contains("Geometric rectangle area: 8"));
}

#[test]
fn test_reports_serialize() {
    let reports: Vec<_> = Principle::ALL
        .iter()
        .map(|p| run_captured(*p, &DemoConfig::default()).unwrap())
        .collect();

    let json = serde_json::to_value(&reports).unwrap();
    let names: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["principle"].as_str().unwrap())
        .collect();

    assert_eq!(
        names,
        vec![
            "single_responsibility",
            "open_closed",
            "liskov_substitution",
            "interface_segregation",
            "dependency_inversion",
        ]
    );
}
