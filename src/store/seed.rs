//! Built-in document used when nothing has been persisted yet.

use crate::models::{
    About, CompletedProject, Document, Newsletter, Project, ProjectStatus, Resource, ResourceType,
    Settings, TeamMember, Video,
};

pub fn seed_document() -> Document {
    Document {
        about: About {
            mission: "Driving efficiency and innovation in accounting operations through technology and process optimization.".to_string(),
            what_we_do: "We streamline financial workflows, implement automation solutions, and create tools that empower accounting teams.".to_string(),
            impact: "From reducing manual processes to building innovative solutions, we're transforming how accounting operations run.".to_string(),
        },
        settings: Settings {
            monday_url: Some(String::new()),
        },
        team: vec![TeamMember {
            id: 1,
            name: "Your Name".to_string(),
            role: "Team Lead".to_string(),
            image: String::new(),
            white_pages_url: String::new(),
        }],
        newsletters: vec![
            newsletter(1, "Q4'25", "https://example.com/newsletter-q4-25"),
            newsletter(2, "Q2'25", "https://example.com/newsletter-q2-25"),
            newsletter(3, "Q1'25", "https://example.com/newsletter-q1-25"),
        ],
        projects: vec![Project {
            id: 1,
            title: "Workflow Automation System".to_string(),
            description: "Building automated workflows to reduce manual data entry and improve accuracy.".to_string(),
            status: ProjectStatus::InProgress,
            progress: Some(65),
            owner: "Team Member".to_string(),
            start_date: "2026-01-15".to_string(),
            target_end_date: Some("2026-06-30".to_string()),
        }],
        completed: vec![CompletedProject {
            id: 1,
            title: "Invoice Processing Tool".to_string(),
            description: "Automated invoice processing system that reduced processing time by 70%.".to_string(),
            impact: "Saved 20+ hours per week across the accounting team.".to_string(),
            completed_date: "2025-12-15".to_string(),
        }],
        videos: vec![Video {
            id: 1,
            title: "Introduction to Our Tools".to_string(),
            description: "Overview of our team's tools and how to use them effectively.".to_string(),
            category: "Tutorial".to_string(),
            url: "https://example.com/video1".to_string(),
            duration: "5:30".to_string(),
        }],
        resources: vec![Resource {
            id: 1,
            title: "Team Handbook".to_string(),
            description: "Complete guide to team processes and best practices.".to_string(),
            kind: ResourceType::GoogleDoc,
            url: "https://docs.google.com".to_string(),
        }],
    }
}

fn newsletter(id: i64, quarter: &str, url: &str) -> Newsletter {
    Newsletter {
        id,
        title: format!("{} Newsletter", quarter),
        quarter: quarter.to_string(),
        url: url.to_string(),
    }
}
