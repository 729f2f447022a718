//! Rendering of a [`RepositoryRecord`] into the destination's property schema.

use serde_json::{Map, Value, json};

use crate::record::RepositoryRecord;

/// A destination property bag: property name to typed property value.
pub type PropertyBag = Map<String, Value>;

/// Property names of the destination database.
pub mod names {
    pub const NAME: &str = "Name";
    pub const DESCRIPTION: &str = "Description";
    pub const URL: &str = "URL";
    pub const STATUS: &str = "Status";
    pub const LAST_UPDATED: &str = "Last Updated";
    pub const TECH_STACK: &str = "Tech Stack";
    pub const PRIVACY: &str = "Privacy";
    pub const TAGS: &str = "Tags";
}

fn text(content: &str) -> Value {
    json!([{ "text": { "content": content } }])
}

fn multi_select(values: &[String]) -> Value {
    Value::Array(values.iter().map(|v| json!({ "name": v })).collect())
}

/// Build the full property set written for a record.
///
/// Every mapped property is always present except `Last Updated`, which is
/// left out entirely when the record has no timestamp.
#[must_use]
pub fn page_properties(record: &RepositoryRecord) -> PropertyBag {
    let mut props = PropertyBag::new();

    props.insert(names::NAME.into(), json!({ "title": text(&record.name) }));
    props.insert(
        names::DESCRIPTION.into(),
        json!({ "rich_text": text(&record.description) }),
    );
    props.insert(names::URL.into(), json!({ "url": record.url }));
    props.insert(
        names::STATUS.into(),
        json!({ "status": { "name": record.status.label() } }),
    );
    if let Some(updated_at) = &record.updated_at {
        props.insert(
            names::LAST_UPDATED.into(),
            json!({ "date": { "start": updated_at } }),
        );
    }
    props.insert(
        names::TECH_STACK.into(),
        json!({ "multi_select": multi_select(&record.tech_stack) }),
    );
    props.insert(
        names::PRIVACY.into(),
        json!({ "select": { "name": record.privacy.label() } }),
    );
    props.insert(
        names::TAGS.into(),
        json!({ "multi_select": multi_select(&record.tags) }),
    );

    props
}

/// Extract the plain title text from a destination page's property bag.
///
/// Returns `None` when the title property is missing or has no text.
#[must_use]
pub fn title_of(properties: &PropertyBag) -> Option<String> {
    let fragments = properties.get(names::NAME)?.get("title")?.as_array()?;
    let title: String = fragments
        .iter()
        .filter_map(|fragment| {
            fragment
                .get("plain_text")
                .and_then(Value::as_str)
                .or_else(|| fragment.pointer("/text/content").and_then(Value::as_str))
        })
        .collect();
    let title = title.trim();
    if title.is_empty() {
        None
    } else {
        Some(title.to_string())
    }
}
