//! Role recommendation and skill extraction over normalized text.

use crate::evaluation::models::RoleMatch;
use crate::evaluation::scoring::count_present;
use crate::evaluation::taxonomy::SkillTaxonomy;

pub const DEFAULT_ROLE_LIMIT: usize = 3;
pub const DEFAULT_SKILL_LIMIT: usize = 10;

/// Scores the first `limit` taxonomy roles by keyword overlap.
///
/// Only the leading roles in declaration order are considered, and the output
/// keeps that order. Roles with no matching keyword are left out.
pub fn recommend_roles(text: &str, taxonomy: &SkillTaxonomy, limit: usize) -> Vec<RoleMatch> {
    taxonomy
        .roles()
        .iter()
        .take(limit)
        .filter_map(|role| {
            let matched = count_present(text, role.skills);
            if matched == 0 {
                return None;
            }
            let ratio = (matched as f64 / role.skills.len() as f64 * 100.0).min(100.0);
            Some(RoleMatch {
                role: role.role.to_string(),
                match_percentage: round_one_decimal(ratio),
                reason: format!("Ditemukan {matched} skills yang relevan"),
            })
        })
        .collect()
}

/// Taxonomy skills present in `text`, in taxonomy order, at most `limit`.
pub fn extract_skills(text: &str, taxonomy: &SkillTaxonomy, limit: usize) -> Vec<String> {
    taxonomy
        .all_skills()
        .into_iter()
        .filter(|skill| text.contains(skill))
        .take(limit)
        .map(str::to_string)
        .collect()
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
