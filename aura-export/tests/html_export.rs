//! Integration tests for HTML export: determinism, escaping, ordering,
//! layout variants, and degradation on bad records.

use aura_core::{Component, ComponentType, Position};
use aura_export::{export_html, ExportVariant};

fn sample_page() -> Vec<Component> {
    vec![
        Component::new(ComponentType::Text)
            .with_position(Position::new(10.0, 20.0))
            .with_property("content", "Welcome")
            .with_property("fontSize", 32.0),
        Component::new(ComponentType::TextArea)
            .with_position(Position::new(10.0, 80.0))
            .with_property("content", "Line one\nLine two"),
        Component::new(ComponentType::Image)
            .with_position(Position::new(300.0, 40.0))
            .with_property("imageUrl", "https://example.com/hero.png")
            .with_property("altText", "Hero image"),
        Component::new(ComponentType::Button)
            .with_position(Position::new(10.0, 200.0))
            .with_property("url", "https://example.com/signup")
            .with_property("buttonText", "Sign up"),
    ]
}

#[test]
fn export_is_deterministic() {
    let components = sample_page();
    let first = export_html(&components, ExportVariant::Desktop);
    let second = export_html(&components, ExportVariant::Desktop);
    assert_eq!(first, second);
}

#[test]
fn export_is_self_contained() {
    let html = export_html(&sample_page(), ExportVariant::Desktop);
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.ends_with("</html>"));
    assert!(html.contains("<style>"));
    assert!(!html.contains("<link"));
    assert!(!html.contains("<script"));
}

#[test]
fn all_four_types_render_with_their_styles() {
    let html = export_html(&sample_page(), ExportVariant::Desktop);
    assert!(html.contains("font-size: 32px;"));
    assert!(html.contains("text-align: left;"));
    assert!(html.contains("src=\"https://example.com/hero.png\""));
    assert!(html.contains("alt=\"Hero image\""));
    assert!(html.contains("object-fit: cover;"));
    assert!(html.contains("href=\"https://example.com/signup\""));
    assert!(html.contains("background-color: #3498db;"));
    assert!(html.contains(">Sign up</a>"));
}

#[test]
fn components_render_in_list_order() {
    let components = sample_page();
    let html = export_html(&components, ExportVariant::Desktop);
    let positions: Vec<usize> = components
        .iter()
        .map(|c| html.find(&format!("id=\"{}\"", c.id())).expect("component rendered"))
        .collect();
    let mut sorted = positions.clone();
    sorted.sort_unstable();
    assert_eq!(positions, sorted);
}

#[test]
fn variants_differ_only_in_the_viewport_directive() {
    let components = sample_page();
    let desktop = export_html(&components, ExportVariant::Desktop);
    let mobile = export_html(&components, ExportVariant::Mobile);

    assert!(desktop.contains("content=\"width=device-width, initial-scale=1.0\""));
    assert!(mobile
        .contains("content=\"width=350, initial-scale=1.0, maximum-scale=1.0, user-scalable=no\""));

    let desktop_stripped = desktop.replace(ExportVariant::Desktop.viewport_content(), "");
    let mobile_stripped = mobile.replace(ExportVariant::Mobile.viewport_content(), "");
    assert_eq!(desktop_stripped, mobile_stripped);
}

#[test]
fn script_injection_is_escaped() {
    let components = vec![Component::new(ComponentType::Button)
        .with_property("buttonText", "<script>alert('pwn')</script>")];
    let html = export_html(&components, ExportVariant::Desktop);
    assert!(!html.contains("<script>"));
    assert!(html.contains("&lt;script&gt;alert(&#39;pwn&#39;)&lt;/script&gt;"));
}

#[test]
fn attribute_injection_is_escaped() {
    let components = vec![Component::new(ComponentType::Image)
        .with_property("altText", "\" onerror=\"alert(1)")];
    let html = export_html(&components, ExportVariant::Desktop);
    assert!(!html.contains("alt=\"\" onerror="));
    assert!(html.contains("&quot; onerror=&quot;alert(1)"));
}

#[test]
fn newlines_survive_in_textarea_content() {
    let components = vec![Component::new(ComponentType::TextArea)
        .with_property("content", "First\nSecond")];
    let html = export_html(&components, ExportVariant::Desktop);
    assert!(html.contains("white-space: pre-wrap;"));
    assert!(html.contains("First\nSecond"));
}

#[test]
fn bad_record_degrades_to_a_placeholder_and_the_rest_survive() {
    let mut broken = Component::new(ComponentType::Image).with_position(Position::new(5.0, 6.0));
    broken.properties.remove("imageUrl");
    let intact = Component::new(ComponentType::Text).with_property("content", "Still here");
    let html = export_html(&[broken.clone(), intact], ExportVariant::Desktop);

    assert!(html.contains("aura-placeholder"));
    assert!(html.contains(&format!("id=\"{}\"", broken.id())));
    assert!(html.contains("left: 5px; top: 6px;"));
    assert!(html.contains("Still here"));
}

#[test]
fn empty_document_still_exports_the_shell() {
    let html = export_html(&[], ExportVariant::Desktop);
    assert!(html.contains("<div class=\"aura-container\">"));
    assert!(html.contains("<title>Exported from Aura</title>"));
}
