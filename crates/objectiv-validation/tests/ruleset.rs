use objectiv_schema::{Context, Event, GlobalContextName, LocationContextName, TrackerPlatform};
use objectiv_validation::{
    LocationContextRule, MissingContextRule, RecordingReporter, Reporter, RuleKind, RuleSet,
    UniqueContextRule, ValidationRule, ViolationKind,
};

fn well_formed_browser_event() -> Event {
    Event::new("PressEvent")
        .with_global_context(Context::new(GlobalContextName::ApplicationContext, "app"))
        .with_global_context(Context::new(GlobalContextName::PathContext, "/home"))
        .with_location_context(Context::new(LocationContextName::RootLocationContext, "home"))
        .with_location_context(Context::new(LocationContextName::PressableContext, "button"))
}

#[test]
fn test_open_taxonomy_accepts_well_formed_event() {
    let set = RuleSet::open_taxonomy(TrackerPlatform::Browser, None);
    assert!(set.validate(&well_formed_browser_event()).is_empty());
}

#[test]
fn test_open_taxonomy_core_does_not_require_path() {
    let core = RuleSet::open_taxonomy(TrackerPlatform::Core, None);
    let browser = RuleSet::open_taxonomy(TrackerPlatform::Browser, None);
    assert_eq!(core.len(), 3);
    assert_eq!(browser.len(), 4);

    let mut event = well_formed_browser_event();
    event.global_contexts.retain(|c| c.context_type.as_str() != "PathContext");

    assert!(core.validate(&event).is_empty());
    let diagnostics = browser.validate(&event);
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].context_name.as_str(), "PathContext");
}

#[test]
fn test_open_taxonomy_reports_in_rule_order() {
    let set = RuleSet::open_taxonomy(TrackerPlatform::React, Some("React"));
    let event = Event::new("PressEvent")
        .with_location_context(Context::new(LocationContextName::ContentContext, "main"))
        .with_location_context(Context::new(LocationContextName::RootLocationContext, "home"));

    let diagnostics = set.validate(&event);
    let summary: Vec<(RuleKind, ViolationKind)> = diagnostics
        .iter()
        .map(|d| (d.rule, d.violation.clone()))
        .collect();
    assert_eq!(
        summary,
        vec![
            (RuleKind::MissingGlobalContext, ViolationKind::Missing),
            (
                RuleKind::LocationContext,
                ViolationKind::WrongPosition {
                    expected: 0,
                    actual: 1
                }
            ),
            (RuleKind::MissingGlobalContext, ViolationKind::Missing),
        ]
    );
    assert!(diagnostics.iter().all(|d| d.tag() == "｢objectiv:React｣"));
}

#[test]
fn test_for_platform_keeps_core_rules() {
    let set = RuleSet::new()
        .with(MissingContextRule::new(TrackerPlatform::Core, GlobalContextName::ApplicationContext))
        .with(MissingContextRule::new(TrackerPlatform::Browser, GlobalContextName::PathContext))
        .with(LocationContextRule::new(
            TrackerPlatform::ReactNative,
            LocationContextName::RootLocationContext,
        ));

    let browser = set.for_platform(TrackerPlatform::Browser);
    let platforms: Vec<TrackerPlatform> = browser.rules().iter().map(|r| r.platform()).collect();
    assert_eq!(platforms, vec![TrackerPlatform::Core, TrackerPlatform::Browser]);

    assert_eq!(set.for_platform(TrackerPlatform::Core).len(), 1);
}

#[test]
fn test_validate_and_report_counts() {
    let set = RuleSet::new()
        .with(UniqueContextRule::new(TrackerPlatform::Core))
        .with(MissingContextRule::new(TrackerPlatform::Core, GlobalContextName::HttpContext));
    let event = Event::new("VisibleEvent")
        .with_global_context(Context::new(GlobalContextName::PathContext, "/"))
        .with_global_context(Context::new(GlobalContextName::PathContext, "/"));
    let reporter = RecordingReporter::new();

    assert_eq!(set.validate_and_report(&event, &reporter), 2);
    assert_eq!(reporter.len(), 2);
    assert!(reporter.messages()[1].contains("HttpContext is missing from Global Contexts of VisibleEvent."));
}

struct CountingReporter(std::cell::Cell<usize>);

impl Reporter for CountingReporter {
    fn group_collapsed(&self, _message: &str, _style: objectiv_validation::Style) {
        self.0.set(self.0.get() + 1);
    }
}

#[test]
fn test_custom_reporter() {
    let set = RuleSet::open_taxonomy(TrackerPlatform::Core, None);
    let reporter = CountingReporter(std::cell::Cell::new(0));

    set.validate_and_report(&Event::new("PressEvent"), &reporter);
    // ApplicationContext and RootLocationContext are both missing
    assert_eq!(reporter.0.get(), 2);
}
