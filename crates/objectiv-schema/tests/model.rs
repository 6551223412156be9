use objectiv_schema::{
    Context, ContextName, Event, EventTypeName, GlobalContextName, LocationContextName,
    TrackerPlatform,
};
use serde_json::json;

#[test]
fn test_event_without_context_lists_deserializes_empty() {
    let event: Event = serde_json::from_value(json!({
        "_type": "PressEvent",
        "id": "8c7e1f0e-3a7b-4f70-9a1a-1d2f3c4b5a69",
        "time": 1650000000000u64
    }))
    .unwrap();

    assert_eq!(event.event_type, EventTypeName::new("PressEvent"));
    assert!(event.global_contexts.is_empty());
    assert!(event.location_stack.is_empty());
    assert_eq!(event.fields["time"], json!(1650000000000u64));
}

#[test]
fn test_null_context_lists_deserialize_empty() {
    let event: Event = serde_json::from_value(json!({
        "_type": "PressEvent",
        "global_contexts": null,
        "location_stack": null
    }))
    .unwrap();

    assert!(event.global_contexts.is_empty());
    assert!(event.location_stack.is_empty());
}

#[test]
fn test_context_extra_fields_are_kept() {
    let event: Event = serde_json::from_value(json!({
        "_type": "InputChangeEvent",
        "global_contexts": [
            { "_type": "InputValueContext", "id": "email", "value": "a@b.c" }
        ],
        "location_stack": [
            { "_type": "RootLocationContext", "id": "home" },
            { "_type": "InputContext", "id": "email" }
        ]
    }))
    .unwrap();

    let value_ctx = &event.global_contexts[0];
    assert!(value_ctx.context_type == "InputValueContext");
    assert!(event.event_type == "InputChangeEvent");
    assert_eq!(value_ctx.context_type, ContextName::from(GlobalContextName::InputValueContext));
    assert_eq!(value_ctx.fields["value"], json!("a@b.c"));

    let back = serde_json::to_value(&event).unwrap();
    assert_eq!(back["global_contexts"][0]["value"], json!("a@b.c"));
    assert_eq!(back["location_stack"][1]["_type"], json!("InputContext"));
}

#[test]
fn test_location_contexts_of_reports_indices() {
    let content = ContextName::from(LocationContextName::ContentContext);
    let event = Event::new("PressEvent")
        .with_location_context(Context::new(LocationContextName::RootLocationContext, "home"))
        .with_location_context(Context::new(content.clone(), "a"))
        .with_location_context(Context::new(LocationContextName::PressableContext, "button"))
        .with_location_context(Context::new(content.clone(), "b"));

    let indices: Vec<usize> = event.location_contexts_of(&content).map(|(i, _)| i).collect();
    assert_eq!(indices, vec![1, 3]);
}

#[test]
fn test_identity_ignores_fields() {
    let a = Context::new(GlobalContextName::InputValueContext, "test").with_field("value", "x");
    let b = Context::new(GlobalContextName::InputValueContext, "test").with_field("value", "y");
    assert_eq!((&a.context_type, &a.id), (&b.context_type, &b.id));
    assert_ne!(a, b);
}

#[test]
fn test_platform_tags() {
    assert_eq!("react-native".parse::<TrackerPlatform>().unwrap(), TrackerPlatform::ReactNative);
    assert!("flutter".parse::<TrackerPlatform>().is_err());
    assert_eq!(serde_json::to_value(TrackerPlatform::Browser).unwrap(), json!("browser"));
    assert_eq!(TrackerPlatform::default(), TrackerPlatform::Core);
}
