//! Shared resource (docs, sheets, guides) model.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::repository::{Draft, Record};

/// Kind of resource, offered as a fixed list in the admin form.
///
/// Values outside the list are kept verbatim so older saved data survives a
/// load/save cycle unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ResourceType {
    GoogleDoc,
    GoogleSheet,
    GoogleSlides,
    UserGuide,
    Documentation,
    Template,
    Other,
    Unlisted(String),
}

impl ResourceType {
    /// The options listed in the admin form, in display order.
    pub const OPTIONS: [ResourceType; 7] = [
        ResourceType::GoogleDoc,
        ResourceType::GoogleSheet,
        ResourceType::GoogleSlides,
        ResourceType::UserGuide,
        ResourceType::Documentation,
        ResourceType::Template,
        ResourceType::Other,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            ResourceType::GoogleDoc => "Google Doc",
            ResourceType::GoogleSheet => "Google Sheet",
            ResourceType::GoogleSlides => "Google Slides",
            ResourceType::UserGuide => "User Guide",
            ResourceType::Documentation => "Documentation",
            ResourceType::Template => "Template",
            ResourceType::Other => "Other",
            ResourceType::Unlisted(name) => name,
        }
    }
}

impl From<String> for ResourceType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Google Doc" => ResourceType::GoogleDoc,
            "Google Sheet" => ResourceType::GoogleSheet,
            "Google Slides" => ResourceType::GoogleSlides,
            "User Guide" => ResourceType::UserGuide,
            "Documentation" => ResourceType::Documentation,
            "Template" => ResourceType::Template,
            "Other" => ResourceType::Other,
            _ => ResourceType::Unlisted(value),
        }
    }
}

impl From<ResourceType> for String {
    fn from(value: ResourceType) -> Self {
        match value {
            ResourceType::Unlisted(name) => name,
            listed => listed.as_str().to_string(),
        }
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    pub id: i64,
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: ResourceType,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewResource {
    pub title: String,
    pub description: String,
    pub kind: ResourceType,
    pub url: String,
}

impl Record for Resource {
    fn id(&self) -> i64 {
        self.id
    }
}

impl Draft for NewResource {
    type Record = Resource;

    fn build(self, id: i64) -> Resource {
        Resource {
            id,
            title: self.title,
            description: self.description,
            kind: self.kind,
            url: self.url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unlisted_type_is_preserved() {
        let json = r#"{"id":3,"title":"Runbook","description":"d","type":"Wiki Page","url":"https://wiki"}"#;
        let resource: Resource = serde_json::from_str(json).unwrap();
        assert_eq!(resource.kind, ResourceType::Unlisted("Wiki Page".to_string()));

        let back = serde_json::to_string(&resource).unwrap();
        assert_eq!(back, json);
    }

    #[test]
    fn test_listed_types_parse() {
        for option in ResourceType::OPTIONS {
            assert_eq!(ResourceType::from(option.as_str().to_string()), option);
        }
    }
}
