//! HTML fragments for rows and errors.
//!
//! The markup mirrors what the page's table already contains, so appended
//! rows are indistinguishable from server-rendered ones.

use std::fmt::Write as _;

use crate::products::records::{ProductRecord, ValidationErrors};

/// Message shown when a failure has no field-level detail.
pub const GENERIC_ERROR_MESSAGE: &str = "An unexpected error occurred.";

/// Render a table row for a created product.
///
/// The row id `product-row-{id}` is stable so later features can target the
/// row. The Edit link and Delete button are affordances only; their behavior
/// lives elsewhere.
#[must_use]
pub fn product_row(record: &ProductRecord) -> String {
    let id = record.id;
    let change_url = change_url(id);
    let name = escape(&record.name);
    let category = match &record.category_name {
        Some(category) => escape(category),
        None => "N/A".to_owned(),
    };

    format!(
        concat!(
            "<tr id=\"product-row-{id}\">",
            "<td>{id}</td>",
            "<td><a href=\"{change_url}\">{name}</a></td>",
            "<td>{category}</td>",
            "<td>${price}</td>",
            "<td>{stock}</td>",
            "<td>{active}</td>",
            "<td>",
            "<a href=\"{change_url}\" class=\"btn btn-sm btn-info\">Edit</a> ",
            "<button class=\"btn btn-sm btn-danger delete-product-btn\" ",
            "data-product-id=\"{id}\">Delete</button>",
            "</td>",
            "</tr>"
        ),
        id = id,
        change_url = change_url,
        name = name,
        category = category,
        price = record.price,
        stock = record.stock,
        active = if record.is_active { "Yes" } else { "No" },
    )
}

/// Render field-level errors, one line per field, field name emphasized and
/// messages joined with line breaks.
#[must_use]
pub fn validation_errors(errors: &ValidationErrors) -> String {
    let mut html = String::new();

    for (field, messages) in errors.iter() {
        let joined = messages
            .iter()
            .map(|message| escape(message))
            .collect::<Vec<_>>()
            .join("<br>");

        let _ = write!(html, "<strong>{}:</strong> {joined}<br>", escape(field));
    }

    html
}

fn change_url(id: u64) -> String {
    format!("/admin/products/product/{id}/change/")
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());

    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }

    escaped
}
