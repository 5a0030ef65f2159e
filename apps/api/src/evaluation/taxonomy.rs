//! Skill taxonomy — the fixed role → skill keyword table used by the rule-based evaluator.

use serde::Serialize;

/// One role and the lowercase keywords that signal it.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct RoleSkills {
    pub role: &'static str,
    pub skills: &'static [&'static str],
}

/// Declaration order matters: role recommendation only looks at the first few roles.
pub static ROLE_SKILLS: &[RoleSkills] = &[
    RoleSkills {
        role: "Data Analyst",
        skills: &[
            "python",
            "sql",
            "excel",
            "tableau",
            "power bi",
            "pandas",
            "numpy",
            "statistics",
            "data visualization",
            "analytics",
            "reporting",
            "dashboard",
        ],
    },
    RoleSkills {
        role: "Data Scientist",
        skills: &[
            "python",
            "r",
            "machine learning",
            "deep learning",
            "tensorflow",
            "pytorch",
            "scikit-learn",
            "statistics",
            "pandas",
            "numpy",
            "jupyter",
            "sql",
        ],
    },
    RoleSkills {
        role: "Software Engineer",
        skills: &[
            "python",
            "java",
            "javascript",
            "react",
            "node.js",
            "git",
            "api",
            "backend",
            "frontend",
            "database",
            "sql",
            "mongodb",
        ],
    },
    RoleSkills {
        role: "UI/UX Designer",
        skills: &[
            "figma",
            "sketch",
            "adobe xd",
            "photoshop",
            "illustrator",
            "wireframe",
            "prototype",
            "user research",
            "design thinking",
            "html",
            "css",
        ],
    },
    RoleSkills {
        role: "Digital Marketing",
        skills: &[
            "google ads",
            "facebook ads",
            "seo",
            "sem",
            "google analytics",
            "social media",
            "content marketing",
            "email marketing",
            "copywriting",
        ],
    },
    RoleSkills {
        role: "Content Writer",
        skills: &[
            "writing",
            "copywriting",
            "content creation",
            "seo",
            "wordpress",
            "blog",
            "social media",
            "research",
            "editing",
            "proofreading",
        ],
    },
    RoleSkills {
        role: "Project Manager",
        skills: &[
            "agile",
            "scrum",
            "jira",
            "trello",
            "project management",
            "leadership",
            "communication",
            "planning",
            "stakeholder management",
            "risk management",
        ],
    },
    RoleSkills {
        role: "Business Analyst",
        skills: &[
            "requirements analysis",
            "business process",
            "sql",
            "excel",
            "documentation",
            "stakeholder management",
            "process improvement",
            "data analysis",
        ],
    },
];

/// Read-only view over a role table. `Default` is the built-in table.
#[derive(Debug, Clone, Copy)]
pub struct SkillTaxonomy {
    roles: &'static [RoleSkills],
}

impl Default for SkillTaxonomy {
    fn default() -> Self {
        Self { roles: ROLE_SKILLS }
    }
}

impl SkillTaxonomy {
    #[cfg(test)]
    pub fn new(roles: &'static [RoleSkills]) -> Self {
        Self { roles }
    }

    /// Roles in declaration order.
    pub fn roles(&self) -> &'static [RoleSkills] {
        self.roles
    }

    pub fn skills_for_role(&self, role: &str) -> Option<&'static [&'static str]> {
        self.roles.iter().find(|r| r.role == role).map(|r| r.skills)
    }

    /// Union of every role's keywords, deduplicated, in first-seen order.
    pub fn all_skills(&self) -> Vec<&'static str> {
        let mut skills: Vec<&'static str> = Vec::new();
        for role in self.roles {
            for &skill in role.skills {
                if !skills.contains(&skill) {
                    skills.push(skill);
                }
            }
        }
        skills
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_table_shape() {
        let taxonomy = SkillTaxonomy::default();
        assert_eq!(taxonomy.roles().len(), 8);
        assert_eq!(taxonomy.roles()[0].role, "Data Analyst");
        assert_eq!(taxonomy.roles()[7].role, "Business Analyst");
        for role in taxonomy.roles() {
            assert!(
                (8..=13).contains(&role.skills.len()),
                "{} has {} skills",
                role.role,
                role.skills.len()
            );
            for skill in role.skills {
                assert_eq!(*skill, skill.to_lowercase());
            }
        }
    }

    #[test]
    fn test_skills_for_role() {
        let taxonomy = SkillTaxonomy::default();
        let skills = taxonomy.skills_for_role("UI/UX Designer").unwrap();
        assert!(skills.contains(&"figma"));
        assert_eq!(skills.len(), 11);
        assert!(taxonomy.skills_for_role("Astronaut").is_none());
    }

    #[test]
    fn test_all_skills_is_deduplicated_union() {
        let taxonomy = SkillTaxonomy::default();
        let all = taxonomy.all_skills();

        let mut sorted = all.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), all.len(), "duplicates in flattened set");

        for role in taxonomy.roles() {
            for skill in role.skills {
                assert!(all.contains(skill), "{skill} missing from union");
            }
        }
        assert_eq!(all.iter().filter(|s| **s == "sql").count(), 1);
        assert_eq!(all[0], "python");
    }
}
