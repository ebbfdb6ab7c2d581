//! Cross-link text scanning tests

use docnav::*;
use pretty_assertions::assert_eq;
use serde_json::json;

fn registry() -> ContentRegistry {
    ContentRegistry::build([PartialRegistry::new()
        .with(
            "components/inputs/date-picker",
            RegistrationRecord::from_doc("DatePicker", json!({})),
        )
        .with(
            "components/overlays/drawer",
            RegistrationRecord::from_doc("Drawer", json!({})),
        )])
}

// ═══════════════════════════════════════════════════════════════════════
// Matching
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_longest_name_wins() {
    let aliases = AliasTable::new()
        .with("Text", "components/typography/text")
        .with("Text Button", "components/buttons/text-button");
    let linker = TextLinker::from_aliases(&aliases).unwrap();

    assert_eq!(
        linker.link("Use a Text Button here"),
        vec![
            LinkSegment::plain("Use a "),
            LinkSegment::link("Text Button", RegistryPath::from("components/buttons/text-button")),
            LinkSegment::plain(" here"),
        ]
    );
}

#[test]
fn test_shorter_name_still_matches_alone() {
    let aliases = AliasTable::new()
        .with("Text", "components/typography/text")
        .with("Text Button", "components/buttons/text-button");
    let linker = TextLinker::from_aliases(&aliases).unwrap();

    let links: Vec<LinkSegment> = linker
        .link("Text and Text Button")
        .into_iter()
        .filter(LinkSegment::is_link)
        .collect();
    assert_eq!(
        links,
        vec![
            LinkSegment::link("Text", RegistryPath::from("components/typography/text")),
            LinkSegment::link("Text Button", RegistryPath::from("components/buttons/text-button")),
        ]
    );
}

#[test]
fn test_registry_titles_are_linked() {
    let linker = TextLinker::new(&registry(), &AliasTable::new()).unwrap();
    assert_eq!(linker.name_count(), 2);

    let segments = linker.link("Pair the DatePicker with a Drawer.");
    let targets: Vec<&str> = segments
        .iter()
        .filter_map(|s| s.path.as_ref().map(RegistryPath::as_str))
        .collect();
    assert_eq!(
        targets,
        vec!["components/inputs/date-picker", "components/overlays/drawer"]
    );
}

#[test]
fn test_alias_overrides_registry_title() {
    let aliases = AliasTable::new().with("Drawer", "components/overlays/side-sheet");
    let linker = TextLinker::new(&registry(), &aliases).unwrap();

    let segments = linker.link("Drawer");
    assert_eq!(
        segments,
        vec![LinkSegment::link("Drawer", RegistryPath::from("components/overlays/side-sheet"))]
    );
}

#[test]
fn test_dangling_alias_still_links() {
    let aliases = AliasTable::new().with("Avatar Upload", "components/inputs/avatar-upload");
    let linker = TextLinker::new(&registry(), &aliases).unwrap();

    assert!(linker.link("Avatar Upload")[0].is_link());
}

#[test]
fn test_link_except_skips_current_page() {
    let linker = TextLinker::new(&registry(), &AliasTable::new()).unwrap();
    let current = RegistryPath::from("components/overlays/drawer");

    assert_eq!(
        linker.link_except("The Drawer pairs with DatePicker", &current),
        vec![
            LinkSegment::plain("The Drawer pairs with "),
            LinkSegment::link("DatePicker", RegistryPath::from("components/inputs/date-picker")),
        ]
    );
}

#[test]
fn test_alias_table_from_json() {
    let aliases = AliasTable::from_json(r#"{ "DatePicker": "components/inputs/date-picker" }"#)
        .unwrap();
    assert_eq!(
        aliases.get("DatePicker"),
        Some(&RegistryPath::from("components/inputs/date-picker"))
    );
}

// ═══════════════════════════════════════════════════════════════════════
// Activation
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_plain_segment_activation_publishes_nothing() {
    let bus = CrossLinkBus::new();
    let seen = std::sync::Arc::new(std::sync::Mutex::new(Vec::new()));
    let sink = seen.clone();
    let _sub = bus.subscribe(move |event| sink.lock().unwrap().push(event.path.clone()));

    LinkSegment::plain("Drawer").activate(&bus);
    LinkSegment::link("Drawer", RegistryPath::from("components/overlays/drawer")).activate(&bus);

    assert_eq!(*seen.lock().unwrap(), vec!["components/overlays/drawer".to_string()]);
}
