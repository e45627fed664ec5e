//! HTML views rendered with compile-time askama templates.

use askama::Template;

use listkeeper_core::{Error, Item, Result};

/// The list page: title, item rows with delete checkboxes, add form.
#[derive(Template)]
#[template(path = "list.html")]
struct ListPage<'a> {
    list_title: &'a str,
    items: &'a [Item],
}

/// Error page shown for failed requests.
#[derive(Template)]
#[template(path = "error.html")]
struct ErrorPage<'a> {
    status: u16,
    message: &'a str,
}

/// Renders a list page for the given title and items.
pub fn list_page(title: &str, items: &[Item]) -> Result<String> {
    ListPage {
        list_title: title,
        items,
    }
    .render()
    .map_err(|e| Error::render(e.to_string()))
}

/// Renders an error page.
pub fn error_page(status: u16, message: &str) -> Result<String> {
    ErrorPage { status, message }
        .render()
        .map_err(|e| Error::render(e.to_string()))
}
