//! Team member model.

use serde::{Deserialize, Serialize};

use crate::repository::{Draft, Record};

/// A person shown in the Team section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMember {
    pub id: i64,
    pub name: String,
    pub role: String,
    /// Inline data URI of the photo, empty when none was uploaded
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub white_pages_url: String,
}

impl TeamMember {
    /// Cards link to the profile only when a non-blank URL is set.
    pub fn is_clickable(&self) -> bool {
        !self.white_pages_url.trim().is_empty()
    }

    pub fn initials(&self) -> String {
        initials(&self.name)
    }
}

/// Avatar label: first letter of each name token, upper-cased, at most two characters.
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|token| token.chars().next())
        .collect::<String>()
        .to_uppercase()
        .chars()
        .take(2)
        .collect()
}

/// Field values for creating or editing a team member.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewTeamMember {
    pub name: String,
    pub role: String,
    pub image: String,
    pub white_pages_url: String,
}

impl Record for TeamMember {
    fn id(&self) -> i64 {
        self.id
    }
}

impl Draft for NewTeamMember {
    type Record = TeamMember;

    fn build(self, id: i64) -> TeamMember {
        TeamMember {
            id,
            name: self.name,
            role: self.role,
            image: self.image,
            white_pages_url: self.white_pages_url,
        }
    }

    /// An edit without a new photo keeps the stored one.
    fn apply(mut self, existing: &TeamMember) -> TeamMember {
        if self.image.is_empty() {
            self.image = existing.image.clone();
        }
        self.build(existing.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initials() {
        assert_eq!(initials("Ada Lovelace"), "AL");
        assert_eq!(initials("grace brewster murray hopper"), "GB");
        assert_eq!(initials("  Linus   "), "L");
        assert_eq!(initials(""), "");
    }

    #[test]
    fn test_clickable_requires_non_blank_url() {
        let mut member = NewTeamMember {
            name: "Ada".to_string(),
            role: "Lead".to_string(),
            white_pages_url: "   ".to_string(),
            ..Default::default()
        }
        .build(1);
        assert!(!member.is_clickable());

        member.white_pages_url = "https://whitepages.example.com/ada".to_string();
        assert!(member.is_clickable());
    }
}
