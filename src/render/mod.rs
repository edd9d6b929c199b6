//! HTML popup rendering
//!
//! Renders a field selection as the table fragment pasted into a popup's HTML
//! source. Each row pairs a label with a `{field}` placeholder that the popup
//! engine substitutes with the clicked feature's value. Labels are written
//! verbatim; they come from project metadata and configuration, never from
//! end users.

use crate::schema::FieldSelection;

/// Light stripe color, the default
pub const LIGHT_GREY: &str = "#f2f2f2";

/// Dark stripe color
pub const DARK_GREY: &str = "#3b3a3a";

const LABEL_CELL_STYLE: &str = "text-align: left; padding: 5px;";
const VALUE_CELL_STYLE: &str = "text-align: left; font-weight: bold; width: 160px; padding: 5px;";

const OPEN_TAGS: &str = "<div>\n    <table>\n        <tbody>\n";
const CLOSE_TAGS: &str = "        </tbody>\n    </table>\n</div>\n";

/// Placeholder token for a field's value
#[must_use]
pub fn placeholder(field_name: &str) -> String {
    format!("{{{field_name}}}")
}

/// Render one table row.
///
/// # Arguments
/// * `label` - Text of the first cell
/// * `field_name` - Field whose placeholder goes in the second cell
/// * `stripe` - Background color for striped rows, `None` for a plain row
#[must_use]
pub fn render_row(label: &str, field_name: &str, stripe: Option<&str>) -> String {
    let open = match stripe {
        Some(color) => format!("<tr style=\"background-color: {color}\">"),
        None => "<tr>".to_string(),
    };
    format!(
        "            {open}\n                <td style=\"{LABEL_CELL_STYLE}\">{label}</td>\n                <td style=\"{VALUE_CELL_STYLE}\">{value}</td>\n            </tr>\n",
        value = placeholder(field_name),
    )
}

/// Render a whole selection; rows at even indexes get the stripe color
#[must_use]
pub fn render_popup(selection: &FieldSelection, stripe_color: &str) -> String {
    let mut html = String::from(OPEN_TAGS);
    for (index, entry) in selection.iter().enumerate() {
        let stripe = (index % 2 == 0).then_some(stripe_color);
        html.push_str(&render_row(&entry.display_label, &entry.name, stripe));
    }
    html.push_str(CLOSE_TAGS);
    html
}
