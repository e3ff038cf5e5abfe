use select::document::Document;
use select::node::Node;
use select::predicate::{Class, Name, Predicate};

use crate::record::{Field, PluginMetadataRecord};

/// How the value of a summary item is pulled out once its label matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Text of the item's `<strong>` element
    Strong,
    /// Text of the item's `<button>` element
    Button,
    /// Text of the item's element carrying the given class
    Class(&'static str),
}

impl Rule {
    pub fn apply(self, item: &Node) -> String {
        let text = match self {
            Self::Strong => collect_text(item, Name("strong")),
            Self::Button => collect_text(item, Name("button")),
            Self::Class(class) => collect_text(item, Class(class)),
        };
        text.trim().to_string()
    }
}

/// Label substring, target field and extraction rule, tried in order. The
/// first label found in an item's text decides its field.
pub const LABEL_RULES: [(&str, Field, Rule); 8] = [
    ("Version", Field::Version, Rule::Strong),
    ("Last updated", Field::LastUpdated, Rule::Strong),
    ("Active installations", Field::ActiveInstalls, Rule::Strong),
    ("WordPress version", Field::MinWpVersion, Rule::Strong),
    ("Tested up to", Field::TestedUpTo, Rule::Strong),
    ("PHP version", Field::MinPhpVersion, Rule::Strong),
    ("Languages", Field::Languages, Rule::Button),
    ("Tags", Field::Tags, Rule::Class("tags")),
];

pub fn classify(text: &str) -> Option<(Field, Rule)> {
    LABEL_RULES
        .iter()
        .find(|(label, _, _)| text.contains(label))
        .map(|&(_, field, rule)| (field, rule))
}

/// Extracts whatever fields the page provides. Missing ones are left empty,
/// defaults are the caller's business.
pub fn extract_record(document: &Document) -> PluginMetadataRecord {
    let mut record = PluginMetadataRecord::default();

    if let Some(title) = document
        .find(Name("h1").and(Class("plugin-title")))
        .next()
    {
        record.name = title.text().trim().to_string();
    }

    let items = document.find(
        Name("div")
            .and(Class("entry-meta"))
            .child(Name("div").and(Class("widget")).and(Class("plugin-meta")))
            .child(Name("ul"))
            .child(Name("li")),
    );

    for item in items {
        if let Some((field, rule)) = classify(&item.text()) {
            *record.get_mut(field) = rule.apply(&item);
        }
    }

    record
}

pub fn extract_from_html(html: &str) -> PluginMetadataRecord {
    extract_record(&Document::from(html))
}

fn collect_text<P: Predicate>(item: &Node, predicate: P) -> String {
    item.find(predicate).map(|n| n.text()).collect()
}
