use crate::artifacts::page::chapter::Placeholder;
use crate::artifacts::step::step_list::normalize_alias;
use std::collections::HashMap;
use std::rc::Rc;

/// Rendered HTML per step alias.
///
/// A step's aliases all share one fragment, so `{{7}}` and
/// `{{syntax-highlight}}` expand to the same markup.
#[derive(Debug, Clone, Default)]
pub struct StepFragments {
    diffs: HashMap<String, Rc<str>>,
    listings: HashMap<String, Rc<str>>,
}

impl StepFragments {
    pub fn insert_diff(&mut self, aliases: &[String], html: &str) {
        Self::insert(&mut self.diffs, aliases, html);
    }

    pub fn insert_listing(&mut self, aliases: &[String], html: &str) {
        Self::insert(&mut self.listings, aliases, html);
    }

    /// Numeric aliases are matched by value, so `{{007}}` finds step 7.
    pub fn get(&self, placeholder: &Placeholder) -> Option<&str> {
        let key = normalize_alias(placeholder.alias());
        match placeholder {
            Placeholder::Diff(_) => self.diffs.get(&key),
            Placeholder::Listing(_) => self.listings.get(&key),
        }
        .map(|html| html.as_ref())
    }

    fn insert(map: &mut HashMap<String, Rc<str>>, aliases: &[String], html: &str) {
        let html: Rc<str> = Rc::from(html);
        for alias in aliases {
            map.insert(alias.clone(), Rc::clone(&html));
        }
    }
}
