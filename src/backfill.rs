use anyhow::Context;
use rand::Rng;
use serde::Deserialize;
use std::path::Path;

use crate::dates;
use crate::sqlgen;

/// Window the generic DOBs are sampled from, inclusive on both ends.
pub const DOB_START_YEAR: i32 = 2001;
pub const DOB_END_YEAR: i32 = 2003;

/// One record of the master user export. All three fields are required
/// for an UPDATE to be emitted; records with any of them missing are not
/// an error, just non-actionable.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MasterUser {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub reg_no: Option<String>,
}

pub fn load_master_users(path: &Path) -> anyhow::Result<Vec<MasterUser>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("{} is invalid JSON", path.display()))
}

/// Plausible LeetCode handle: alphanumerics of the name, case-folded,
/// joined to the lower-cased reg_no. Quote characters are stripped so the
/// result can be embedded in SQL text as-is.
pub fn derive_leetcode_username(name: &str, reg_no: &str) -> String {
    let clean_name: String = name
        .chars()
        .filter(|c| c.is_alphanumeric())
        .collect::<String>()
        .to_lowercase();
    let mut username = format!("{}_{}", clean_name, reg_no.to_lowercase());
    username.retain(|c| c != '\'' && c != '"');
    username
}

/// One UPDATE per complete record, setting a random DOB and a derived
/// LeetCode username. Output is intentionally not idempotent across runs.
pub fn build_backfill_script<R: Rng>(
    users: &[MasterUser],
    rng: &mut R,
) -> anyhow::Result<String> {
    let mut lines: Vec<String> =
        vec!["-- Bulk update for generic DOB and LeetCode Usernames".to_string()];

    for user in users {
        let (email, name, reg_no) = match (
            user.email.as_deref().filter(|s| !s.is_empty()),
            user.name.as_deref().filter(|s| !s.is_empty()),
            user.reg_no.as_deref().filter(|s| !s.is_empty()),
        ) {
            (Some(e), Some(n), Some(r)) => (e, n, r),
            _ => continue,
        };

        let dob = dates::random_dob(rng, DOB_START_YEAR, DOB_END_YEAR)?;
        let username = derive_leetcode_username(name, reg_no);
        lines.push(format!(
            "UPDATE users SET dob = '{}', leetcode_username = '{}', leetcode_notifications_enabled = true WHERE email = '{}';",
            dob,
            username,
            sqlgen::escape_quotes(email)
        ));
    }

    Ok(lines.join("\n"))
}
