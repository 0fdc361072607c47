//! Portfolio content model.
//!
//! The page text is data, not code: a TOML document with a built-in default
//! (`content.default.toml`) that can be replaced by a user supplied file.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Content shipped with the binary.
pub const DEFAULT_CONTENT: &str = include_str!("../content.default.toml");

pub const MAX_SKILL_LEVEL: u8 = 100;

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("Failed to read content file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid content in {origin}: {reason}")]
    Parse { origin: String, reason: String },
    #[error("Skill '{skill}' has level {level}, the maximum is {MAX_SKILL_LEVEL}")]
    SkillLevel { skill: String, level: u8 },
    #[error("Content field '{0}' must not be empty")]
    Empty(&'static str),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Profile {
    pub name: String,
    pub headline: String,
    pub tagline: String,
    pub location: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub cv_url: Option<String>,
    #[serde(default)]
    pub availability: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SocialLink {
    pub label: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AboutCard {
    pub title: String,
    pub detail: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct About {
    #[serde(default)]
    pub heading: String,
    #[serde(default)]
    pub paragraphs: Vec<String>,
    #[serde(default)]
    pub cards: Vec<AboutCard>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Skill {
    pub name: String,
    pub level: u8,
    #[serde(default)]
    pub icon: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SkillGroup {
    pub title: String,
    #[serde(default)]
    pub skills: Vec<Skill>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub demo_url: Option<String>,
    #[serde(default)]
    pub source_url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ProjectGallery {
    #[serde(default)]
    pub all_projects_url: Option<String>,
    #[serde(default)]
    pub items: Vec<Project>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ExperienceItem {
    pub role: String,
    pub company: String,
    #[serde(default)]
    pub logo: Option<String>,
    #[serde(default)]
    pub location: String,
    pub period: String,
    #[serde(default)]
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PortfolioContent {
    pub profile: Profile,
    #[serde(default)]
    pub socials: Vec<SocialLink>,
    #[serde(default)]
    pub about: About,
    #[serde(default)]
    pub skill_groups: Vec<SkillGroup>,
    #[serde(default)]
    pub projects: ProjectGallery,
    #[serde(default)]
    pub experience: Vec<ExperienceItem>,
}

impl PortfolioContent {
    /// Parse and validate a TOML document. `origin` only labels errors.
    pub fn from_toml_str(source: &str, origin: &str) -> Result<Self, ContentError> {
        let content: Self = toml::from_str(source).map_err(|e| ContentError::Parse {
            origin: origin.to_string(),
            reason: e.to_string(),
        })?;
        content.validate()?;
        Ok(content)
    }

    /// The content compiled into the binary.
    pub fn embedded() -> Result<Self, ContentError> {
        Self::from_toml_str(DEFAULT_CONTENT, "embedded content")
    }

    /// Load from `path` when given, otherwise fall back to the embedded content.
    pub fn load(path: Option<&Path>) -> Result<Self, ContentError> {
        let Some(path) = path else {
            return Self::embedded();
        };

        let source = std::fs::read_to_string(path).map_err(|source| ContentError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let content = Self::from_toml_str(&source, &path.display().to_string())?;
        log::info!("Loaded portfolio content from {}", path.display());
        Ok(content)
    }

    pub fn validate(&self) -> Result<(), ContentError> {
        if self.profile.name.trim().is_empty() {
            return Err(ContentError::Empty("profile.name"));
        }
        if self.profile.email.trim().is_empty() {
            return Err(ContentError::Empty("profile.email"));
        }

        for skill in self.skill_groups.iter().flat_map(|g| g.skills.iter()) {
            if skill.level > MAX_SKILL_LEVEL {
                return Err(ContentError::SkillLevel {
                    skill: skill.name.clone(),
                    level: skill.level,
                });
            }
        }
        Ok(())
    }

    pub fn skills(&self) -> impl Iterator<Item = &Skill> {
        self.skill_groups.iter().flat_map(|group| group.skills.iter())
    }
}
