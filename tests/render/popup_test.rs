use popup_formatter::{ExcludeFields, FieldDescriptor, FieldSelector, LIGHT_GREY, render_popup};

use crate::utils::{rows, selection_of};

#[test]
fn test_alpha_gamma_example() {
    let fields = vec![
        FieldDescriptor::new("A", "Alpha"),
        FieldDescriptor::new("B", "Beta"),
        FieldDescriptor::new("C", "Gamma"),
    ];
    let selection = ExcludeFields::new(["B"]).select(&fields);
    let html = render_popup(&selection, "#f2f2f2");

    assert!(html.starts_with("<div>"));
    assert!(html.trim_end().ends_with("</div>"));

    let rows = rows(&html);
    assert_eq!(rows.len(), 2);
    assert!(rows[0].contains("background-color: #f2f2f2"));
    assert!(rows[0].contains("Alpha") && rows[0].contains("{A}"));
    assert!(!rows[1].contains("background-color"));
    assert!(rows[1].contains("Gamma") && rows[1].contains("{C}"));
    assert!(!html.contains("Beta"));
}

#[test]
fn test_each_label_and_placeholder_appears_once() {
    let selection = selection_of(&[
        ("assetid", "Asset ID"),
        ("material", "Material"),
        ("diameter", "Diameter"),
        ("rimelev", "Rim Elevation"),
    ]);
    let html = render_popup(&selection, LIGHT_GREY);

    for entry in &selection {
        assert_eq!(html.matches(&format!("{{{}}}", entry.name)).count(), 1);
        assert_eq!(html.matches(&format!(">{}<", entry.display_label)).count(), 1);
    }
}

#[test]
fn test_row_order_follows_selection() {
    let selection = selection_of(&[("b", "Second"), ("a", "First")]);
    let html = render_popup(&selection, LIGHT_GREY);
    let second = html.find("{b}").unwrap();
    let first = html.find("{a}").unwrap();
    assert!(second < first);
}

#[test]
fn test_labels_are_not_escaped() {
    let selection = selection_of(&[("len", "Length <ft>")]);
    let html = render_popup(&selection, LIGHT_GREY);
    assert!(html.contains("Length <ft>"));
}

#[test]
fn test_striping_for_many_rows() {
    let pairs: Vec<(String, String)> = (0..7)
        .map(|i| (format!("f{i}"), format!("Field {i}")))
        .collect();
    let borrowed: Vec<(&str, &str)> = pairs
        .iter()
        .map(|(name, label)| (name.as_str(), label.as_str()))
        .collect();
    let html = render_popup(&selection_of(&borrowed), "#3b3a3a");

    for (index, row) in rows(&html).iter().enumerate() {
        assert_eq!(
            row.contains("background-color: #3b3a3a"),
            index % 2 == 0,
            "row {index}"
        );
        assert!(row.contains(&format!("{{f{index}}}")));
    }
}
