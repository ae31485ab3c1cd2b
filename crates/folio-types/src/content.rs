//! Content Store domain types.
//!
//! A [`Portfolio`] is the static, read-only description of the site owner.
//! It is rendered by the page shell and serialized as grounding context for
//! chat answers. Nothing in the chat flow mutates it.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::ContentError;

/// Highest allowed skill proficiency score.
pub const MAX_SKILL_LEVEL: u8 = 100;

/// Headline facts about the site owner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub name: String,
    pub title: String,
    pub tagline: String,
    pub email: String,
    pub location: String,
    /// URL or site-relative path of the portrait shown in the hero banner.
    pub profile_image: String,
    /// Site-relative path of the downloadable résumé.
    pub resume_url: String,
    pub summary: String,
}

/// A link shown in the contact section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub platform: String,
    pub url: String,
    /// Icon name understood by the page shell (e.g. "linkedin", "mail").
    pub icon: String,
}

/// A single skill with a proficiency score in `0..=100`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub level: u8,
}

/// A titled group of skills.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillCategory {
    pub title: String,
    pub icon: String,
    pub skills: Vec<Skill>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceItem {
    pub id: u32,
    pub role: String,
    pub company: String,
    /// Free-form date range, e.g. "Mar 2024 - Aug 2024".
    pub date: String,
    pub location: String,
    pub description: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Education {
    pub degree: String,
    pub school: String,
    pub year: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

/// The complete Content Store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Portfolio {
    pub profile: Profile,
    #[serde(default)]
    pub social_links: Vec<SocialLink>,
    #[serde(default)]
    pub skills: Vec<SkillCategory>,
    #[serde(default)]
    pub experience: Vec<ExperienceItem>,
    #[serde(default)]
    pub education: Vec<Education>,
    #[serde(default)]
    pub projects: Vec<Project>,
}

impl Portfolio {
    /// Check the invariants the page and the grounding context rely on.
    ///
    /// - profile name and email are non-empty
    /// - every skill level is within `0..=100`
    /// - experience ids and project ids are unique
    pub fn validate(&self) -> Result<(), ContentError> {
        if self.profile.name.trim().is_empty() {
            return Err(ContentError::MissingField("profile.name"));
        }
        if self.profile.email.trim().is_empty() {
            return Err(ContentError::MissingField("profile.email"));
        }

        for category in &self.skills {
            for skill in &category.skills {
                if skill.level > MAX_SKILL_LEVEL {
                    return Err(ContentError::SkillLevelOutOfRange {
                        skill: skill.name.clone(),
                        level: skill.level,
                    });
                }
            }
        }

        let mut seen = HashSet::new();
        for item in &self.experience {
            if !seen.insert(item.id) {
                return Err(ContentError::DuplicateId {
                    section: "experience",
                    id: item.id,
                });
            }
        }

        seen.clear();
        for project in &self.projects {
            if !seen.insert(project.id) {
                return Err(ContentError::DuplicateId {
                    section: "projects",
                    id: project.id,
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Portfolio {
        Portfolio {
            profile: Profile {
                name: "Ada Example".to_string(),
                title: "Data Analyst".to_string(),
                tagline: "Numbers with a story".to_string(),
                email: "ada@example.com".to_string(),
                location: "Remote".to_string(),
                profile_image: "/assets/ada.jpg".to_string(),
                resume_url: "/assets/resume.pdf".to_string(),
                summary: "Analyst.".to_string(),
            },
            social_links: vec![],
            skills: vec![SkillCategory {
                title: "Programming".to_string(),
                icon: "code".to_string(),
                skills: vec![Skill {
                    name: "SQL".to_string(),
                    level: 80,
                }],
            }],
            experience: vec![],
            education: vec![],
            projects: vec![],
        }
    }

    #[test]
    fn valid_portfolio_passes() {
        assert!(sample().validate().is_ok());
    }

    #[test]
    fn empty_name_is_rejected() {
        let mut p = sample();
        p.profile.name = "  ".to_string();
        assert!(matches!(
            p.validate(),
            Err(ContentError::MissingField("profile.name"))
        ));
    }

    #[test]
    fn skill_level_above_hundred_is_rejected() {
        let mut p = sample();
        p.skills[0].skills[0].level = 101;
        let err = p.validate().unwrap_err();
        assert!(err.to_string().contains("SQL"));
    }

    #[test]
    fn skill_level_boundaries_are_accepted() {
        let mut p = sample();
        p.skills[0].skills.push(Skill {
            name: "Zero".to_string(),
            level: 0,
        });
        p.skills[0].skills[0].level = 100;
        assert!(p.validate().is_ok());
    }

    #[test]
    fn duplicate_project_ids_are_rejected() {
        let mut p = sample();
        let project = Project {
            id: 1,
            title: "A".to_string(),
            description: "a".to_string(),
            tags: vec![],
            image: String::new(),
            link: None,
        };
        p.projects = vec![project.clone(), project];
        assert!(matches!(
            p.validate(),
            Err(ContentError::DuplicateId {
                section: "projects",
                id: 1
            })
        ));
    }

    #[test]
    fn profile_serializes_camel_case() {
        let json = serde_json::to_value(&sample().profile).unwrap();
        assert!(json.get("profileImage").is_some());
        assert!(json.get("resumeUrl").is_some());
    }

    #[test]
    fn project_link_is_optional() {
        let json = r#"{"id":3,"title":"T","description":"d","tags":["x"],"image":"i"}"#;
        let project: Project = serde_json::from_str(json).unwrap();
        assert!(project.link.is_none());
    }
}
