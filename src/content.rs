use rust_embed::Embed;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;
use thiserror::Error;

pub static PORTFOLIO: LazyLock<Result<Portfolio, ContentError>> = LazyLock::new(|| {
    let loaded = Portfolio::load();
    match &loaded {
        Ok(p) => log::debug!(
            "loaded portfolio content: {} projects, {} skill categories, {} roles",
            p.projects.len(),
            p.skills.categories.len(),
            p.experience.len()
        ),
        Err(e) => log::error!("portfolio content is invalid: {e}"),
    }
    loaded
});

const PROFILE_FILE: &str = "profile.json";
const PROJECTS_FILE: &str = "projects.json";
const SKILLS_FILE: &str = "skills.json";
const EXPERIENCE_FILE: &str = "experience.json";

#[derive(Embed)]
#[folder = "content"]
pub struct Assets;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContentError {
    #[error("content file not found: {0}")]
    Missing(&'static str),
    #[error("couldn't parse {file}: {reason}")]
    Parse { file: &'static str, reason: String },
    #[error("duplicate {kind} id {id}")]
    DuplicateId { kind: &'static str, id: u32 },
    #[error("no skill categories defined")]
    NoCategories,
    #[error("skill category '{0}' has no skill list")]
    MissingCategory(String),
    #[error("skill list for undeclared category '{0}'")]
    UnknownCategory(String),
    #[error("proficiency {level} for '{skill}' is outside 0-100")]
    InvalidLevel { skill: String, level: u8 },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Links {
    pub github: String,
    pub linkedin: String,
    pub email: String,
    pub resume: String,
}

impl Links {
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub brand: String,
    pub headline: String,
    pub summary: String,
    pub initials: String,
    pub footer_note: String,
    pub links: Links,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectLinks {
    #[serde(default)]
    pub repo: Option<String>,
    #[serde(default)]
    pub live: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectEntry {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub long_description: String,
    pub image: String,
    pub tech_stack: Vec<String>,
    #[serde(default)]
    pub links: ProjectLinks,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub id: u32,
    pub role: String,
    pub company: String,
    pub period: String,
    pub location: String,
    pub description: String,
    pub achievements: Vec<String>,
    pub technologies: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillCategory {
    pub id: String,
    pub name: String,
}

/// A single skill. Entries without a `level` render name-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillEntry {
    pub name: String,
    #[serde(default)]
    pub level: Option<u8>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpertiseCard {
    pub title: String,
    pub value: String,
    pub icon: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Skills {
    pub categories: Vec<SkillCategory>,
    #[serde(rename = "skills")]
    pub by_category: HashMap<String, Vec<SkillEntry>>,
    #[serde(default)]
    pub expertise: Vec<ExpertiseCard>,
}

impl Skills {
    /// Skills for `category` in declared order, empty if the key is unknown.
    pub fn for_category(&self, category: &str) -> &[SkillEntry] {
        self.by_category
            .get(category)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn has_category(&self, category: &str) -> bool {
        self.by_category.contains_key(category)
    }

    pub fn default_category(&self) -> Option<&SkillCategory> {
        self.categories.first()
    }
}

#[derive(Debug, Clone)]
pub struct Portfolio {
    pub profile: Profile,
    pub projects: Vec<ProjectEntry>,
    pub skills: Skills,
    pub experience: Vec<ExperienceEntry>,
}

impl Portfolio {
    /// Parses and validates the JSON embedded from `content/`.
    pub fn load() -> Result<Self, ContentError> {
        Self::from_sources(
            &embedded(PROFILE_FILE)?,
            &embedded(PROJECTS_FILE)?,
            &embedded(SKILLS_FILE)?,
            &embedded(EXPERIENCE_FILE)?,
        )
    }

    pub fn from_sources(
        profile: &str,
        projects: &str,
        skills: &str,
        experience: &str,
    ) -> Result<Self, ContentError> {
        let portfolio = Self {
            profile: parse(PROFILE_FILE, profile)?,
            projects: parse(PROJECTS_FILE, projects)?,
            skills: parse(SKILLS_FILE, skills)?,
            experience: parse(EXPERIENCE_FILE, experience)?,
        };
        portfolio.validate()?;
        Ok(portfolio)
    }

    pub fn project(&self, id: u32) -> Option<&ProjectEntry> {
        self.projects.iter().find(|p| p.id == id)
    }

    fn validate(&self) -> Result<(), ContentError> {
        unique_ids("project", self.projects.iter().map(|p| p.id))?;
        unique_ids("experience", self.experience.iter().map(|e| e.id))?;

        let skills = &self.skills;
        if skills.categories.is_empty() {
            return Err(ContentError::NoCategories);
        }
        if let Some(c) = skills
            .categories
            .iter()
            .find(|c| !skills.has_category(&c.id))
        {
            return Err(ContentError::MissingCategory(c.id.clone()));
        }
        let declared = skills
            .categories
            .iter()
            .map(|c| c.id.as_str())
            .collect::<HashSet<_>>();
        // sorted so the reported key doesn't depend on map iteration order
        let mut keys = skills.by_category.keys().collect::<Vec<_>>();
        keys.sort();
        if let Some(k) = keys.into_iter().find(|k| !declared.contains(k.as_str())) {
            return Err(ContentError::UnknownCategory(k.clone()));
        }
        for skill in skills.by_category.values().flatten() {
            if let Some(level) = skill.level.filter(|l| *l > 100) {
                return Err(ContentError::InvalidLevel {
                    skill: skill.name.clone(),
                    level,
                });
            }
        }
        Ok(())
    }
}

/// The bundled portfolio, or the reason it couldn't be loaded.
pub fn portfolio() -> Result<&'static Portfolio, &'static ContentError> {
    PORTFOLIO.as_ref()
}

fn embedded(name: &'static str) -> Result<String, ContentError> {
    let file = Assets::get(name).ok_or(ContentError::Missing(name))?;
    String::from_utf8(file.data.into()).map_err(|e| ContentError::Parse {
        file: name,
        reason: e.to_string(),
    })
}

fn parse<T: DeserializeOwned>(file: &'static str, src: &str) -> Result<T, ContentError> {
    serde_json::from_str(src).map_err(|e| ContentError::Parse {
        file,
        reason: e.to_string(),
    })
}

fn unique_ids(kind: &'static str, ids: impl Iterator<Item = u32>) -> Result<(), ContentError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(ContentError::DuplicateId { kind, id });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const PROFILE: &str = r#"{
        "name": "Test Person",
        "brand": "DEV",
        "headline": "Engineer",
        "summary": "Builds things.",
        "initials": "TP",
        "footer_note": "Built with Rust",
        "links": {
            "github": "https://github.com/test",
            "linkedin": "https://linkedin.com/in/test",
            "email": "test@example.com",
            "resume": "/resume.pdf"
        }
    }"#;

    const PROJECTS: &str = r#"[
        {
            "id": 1,
            "title": "One",
            "description": "first",
            "long_description": "the first project",
            "image": "/one.png",
            "tech_stack": ["Rust"],
            "links": { "repo": "https://github.com/test/one" }
        },
        {
            "id": 2,
            "title": "Two",
            "description": "second",
            "long_description": "the second project",
            "image": "/two.png",
            "tech_stack": ["Rust", "Leptos"]
        }
    ]"#;

    const SKILLS: &str = r#"{
        "categories": [
            { "id": "frontend", "name": "Frontend" },
            { "id": "backend", "name": "Backend" }
        ],
        "skills": {
            "frontend": [{ "name": "Leptos", "level": 80 }, { "name": "CSS" }],
            "backend": [{ "name": "Axum", "level": 90 }]
        }
    }"#;

    const EXPERIENCE: &str = r#"[
        {
            "id": 1,
            "role": "Engineer",
            "company": "Acme",
            "period": "2020 - Present",
            "location": "Remote",
            "description": "Did work.",
            "achievements": ["Shipped"],
            "technologies": []
        }
    ]"#;

    #[test]
    fn test_bundled_content_is_valid() {
        let portfolio = Portfolio::load().expect("bundled content should validate");
        assert!(!portfolio.projects.is_empty());
        assert!(!portfolio.experience.is_empty());
        assert_eq!(
            portfolio.skills.default_category().map(|c| c.id.as_str()),
            Some("frontend")
        );
        assert!(portfolio.profile.links.mailto().starts_with("mailto:"));
    }

    #[test]
    fn test_from_sources() {
        let portfolio = Portfolio::from_sources(PROFILE, PROJECTS, SKILLS, EXPERIENCE).unwrap();
        assert_eq!(portfolio.profile.name, "Test Person");
        assert_eq!(portfolio.projects.len(), 2);

        // links are optional per project
        let two = portfolio.project(2).unwrap();
        assert!(two.links.repo.is_none());
        assert!(two.links.live.is_none());
        assert!(portfolio.project(7).is_none());
    }

    #[test]
    fn test_skills_for_category_keeps_order() {
        let portfolio = Portfolio::from_sources(PROFILE, PROJECTS, SKILLS, EXPERIENCE).unwrap();
        let frontend = portfolio.skills.for_category("frontend");
        let names = frontend.iter().map(|s| s.name.as_str()).collect::<Vec<_>>();
        assert_eq!(names, vec!["Leptos", "CSS"]);
        assert_eq!(frontend[1].level, None);

        // unknown keys fail closed
        assert!(portfolio.skills.for_category("mobile").is_empty());
    }

    #[test]
    fn test_duplicate_experience_id_rejected() {
        let experience = r#"[
            { "id": 1, "role": "A", "company": "C", "period": "p", "location": "l",
              "description": "d", "achievements": [], "technologies": [] },
            { "id": 1, "role": "B", "company": "C", "period": "p", "location": "l",
              "description": "d", "achievements": [], "technologies": [] }
        ]"#;
        let err = Portfolio::from_sources(PROFILE, PROJECTS, SKILLS, experience).unwrap_err();
        assert_eq!(
            err,
            ContentError::DuplicateId {
                kind: "experience",
                id: 1
            }
        );
    }

    #[test]
    fn test_duplicate_project_id_rejected() {
        let projects = PROJECTS.replace("\"id\": 2", "\"id\": 1");
        let err = Portfolio::from_sources(PROFILE, &projects, SKILLS, EXPERIENCE).unwrap_err();
        assert!(matches!(
            err,
            ContentError::DuplicateId {
                kind: "project",
                id: 1
            }
        ));
    }

    #[test]
    fn test_category_mapping_must_match() {
        let missing = r#"{
            "categories": [{ "id": "frontend", "name": "Frontend" }, { "id": "tools", "name": "Tools" }],
            "skills": { "frontend": [] }
        }"#;
        let err = Portfolio::from_sources(PROFILE, PROJECTS, missing, EXPERIENCE).unwrap_err();
        assert_eq!(err, ContentError::MissingCategory("tools".to_string()));

        let orphan = r#"{
            "categories": [{ "id": "frontend", "name": "Frontend" }],
            "skills": { "frontend": [], "other": [] }
        }"#;
        let err = Portfolio::from_sources(PROFILE, PROJECTS, orphan, EXPERIENCE).unwrap_err();
        assert_eq!(err, ContentError::UnknownCategory("other".to_string()));

        let empty = r#"{ "categories": [], "skills": {} }"#;
        let err = Portfolio::from_sources(PROFILE, PROJECTS, empty, EXPERIENCE).unwrap_err();
        assert_eq!(err, ContentError::NoCategories);
    }

    #[test]
    fn test_level_out_of_range_rejected() {
        let skills = SKILLS.replace("\"level\": 90", "\"level\": 120");
        let err = Portfolio::from_sources(PROFILE, PROJECTS, &skills, EXPERIENCE).unwrap_err();
        assert_eq!(
            err,
            ContentError::InvalidLevel {
                skill: "Axum".to_string(),
                level: 120
            }
        );
    }

    #[test]
    fn test_parse_error_names_file() {
        let err = Portfolio::from_sources(PROFILE, "[{", SKILLS, EXPERIENCE).unwrap_err();
        assert!(matches!(
            err,
            ContentError::Parse {
                file: PROJECTS_FILE,
                ..
            }
        ));
        assert!(err.to_string().starts_with("couldn't parse projects.json"));
    }
}
