//! Video library model.

use serde::{Deserialize, Serialize};

use crate::repository::{Draft, Record};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Video {
    pub id: i64,
    pub title: String,
    pub description: String,
    /// Free-text category; the filter buttons are derived from the distinct values
    pub category: String,
    pub url: String,
    /// Display string such as "5:30"
    pub duration: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewVideo {
    pub title: String,
    pub description: String,
    pub category: String,
    pub url: String,
    pub duration: String,
}

impl Record for Video {
    fn id(&self) -> i64 {
        self.id
    }
}

impl Draft for NewVideo {
    type Record = Video;

    fn build(self, id: i64) -> Video {
        Video {
            id,
            title: self.title,
            description: self.description,
            category: self.category,
            url: self.url,
            duration: self.duration,
        }
    }
}
