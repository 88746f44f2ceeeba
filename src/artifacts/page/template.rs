use crate::artifacts::page::TEMPLATE_SLOT_REGEX;
use anyhow::Context;
use derive_new::new;
use regex::Regex;

/// The page skeleton. `{{title}}` and `{{content}}` are its only slots.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct Template {
    text: String,
}

impl Template {
    /// Fill both slots in one pass; the inserted values are never scanned
    /// for slots themselves.
    pub fn render(&self, title: &str, content: &str) -> anyhow::Result<String> {
        let re = Regex::new(TEMPLATE_SLOT_REGEX)
            .with_context(|| format!("invalid template regex: {TEMPLATE_SLOT_REGEX}"))?;

        let page = re.replace_all(&self.text, |captures: &regex::Captures| match &captures[1] {
            "title" => title.to_string(),
            _ => content.to_string(),
        });

        Ok(page.into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn slots_are_filled() {
        let template = Template::new(
            "<title>{{title}}</title><body>{{content}}</body>".to_string(),
        );

        let page = template.render("Raw mode", "<p>hi</p>").unwrap();

        assert_eq!(page, "<title>Raw mode</title><body><p>hi</p></body>");
    }

    #[test]
    fn values_are_inserted_literally() {
        let template = Template::new("{{title}}|{{content}}|{{title}}".to_string());

        let page = template.render("$1 {{content}}", "\\0 {{title}}").unwrap();

        assert_eq!(page, "$1 {{content}}|\\0 {{title}}|$1 {{content}}");
    }
}
