#![allow(dead_code)]

pub mod command;
pub mod file;

/// Everything between `<body>` and `</body>` of a generated page.
pub fn page_body(page: &str) -> &str {
    page.split_once("<body>")
        .and_then(|(_, rest)| rest.split_once("</body>"))
        .map(|(body, _)| body)
        .unwrap_or_else(|| panic!("page has no body: {page}"))
}
