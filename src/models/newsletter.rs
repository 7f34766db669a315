//! Quarterly newsletter model.

use serde::{Deserialize, Serialize};

use crate::repository::{Draft, Record};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Newsletter {
    pub id: i64,
    pub title: String,
    /// Quarter label in the form `Q4'25`
    pub quarter: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewNewsletter {
    pub title: String,
    pub quarter: String,
    pub url: String,
}

impl Record for Newsletter {
    fn id(&self) -> i64 {
        self.id
    }
}

impl Draft for NewNewsletter {
    type Record = Newsletter;

    fn build(self, id: i64) -> Newsletter {
        Newsletter {
            id,
            title: self.title,
            quarter: self.quarter,
            url: self.url,
        }
    }
}
