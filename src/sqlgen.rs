use std::collections::HashMap;

use crate::dates;
use crate::prior_seed::PriorSeedEntry;
use crate::roster::RosterStudent;

pub const EMAIL_DOMAIN: &str = "psgtech.ac.in";
pub const DEFAULT_TEAM_ID: &str = "T00";
pub const DEFAULT_ROLES: &str =
    r#"{"isStudent": true, "isTeamLeader": false, "isCoordinator": false, "isPlacementRep": false}"#;

const SEED_HEADER: &str = r#"-- ============================================================================
-- PSGMX: Complete User Seed v2 (Updated with DOB and LeetCode)
-- ============================================================================

-- 1. Ensure Table Schema has new columns
ALTER TABLE public.users
ADD COLUMN IF NOT EXISTS leetcode_username TEXT,
ADD COLUMN IF NOT EXISTS dob DATE,
ADD COLUMN IF NOT EXISTS birthday_notifications_enabled BOOLEAN DEFAULT TRUE;

CREATE TABLE IF NOT EXISTS public.whitelist (
  email TEXT PRIMARY KEY,
  name TEXT,
  reg_no TEXT,
  batch TEXT,
  team_id TEXT,
  roles JSONB,
  dob DATE,
  leetcode_username TEXT,
  created_at TIMESTAMP WITH TIME ZONE DEFAULT NOW()
);

-- 2. Truncate Whitelist
TRUNCATE TABLE public.whitelist;

-- 3. Insert Data
INSERT INTO public.whitelist (email, name, reg_no, batch, team_id, dob, leetcode_username, roles) VALUES
"#;

const SEED_FOOTER: &str = r#"

-- 4. Sync Public Users
-- Update existing users with new fields
UPDATE public.users u
SET
  team_id = w.team_id,
  roles = w.roles,
  batch = w.batch,
  name = w.name,
  reg_no = w.reg_no,
  dob = w.dob,
  leetcode_username = w.leetcode_username
FROM public.whitelist w
WHERE u.email = w.email;

-- 5. Insert new users into public.users (Optional - usually they sign up)
-- We won't auto-insert into users table to avoid auth ID mismatches,
-- but ensuring whitelist is populated allows the Trigger/Function to work on Signup.

-- 6. Verification
SELECT COUNT(*) as whitelist_count FROM public.whitelist;
"#;

/// Double single quotes so the literal stays valid SQL. Applied to every
/// quoted text field, not just the ones observed to need it.
pub fn escape_quotes(s: &str) -> String {
    s.replace('\'', "''")
}

/// Quoted SQL literal, or the bare NULL keyword for an absent value.
pub fn literal_or_null(v: Option<&str>) -> String {
    match v {
        Some(s) => format!("'{}'", escape_quotes(s)),
        None => "NULL".to_string(),
    }
}

/// Render one whitelist value tuple for a roster student, preferring
/// prior-seed email/team/roles when the student was already seeded.
/// A student without a name cannot become a usable whitelist row; those
/// render to nothing.
pub fn render_whitelist_tuple(
    student: &RosterStudent,
    prior: Option<&PriorSeedEntry>,
) -> Option<String> {
    let name = student.name.as_deref()?;

    let (email, team_id, roles) = match prior {
        Some(p) => (p.email.clone(), p.team_id.as_str(), p.roles.as_str()),
        None => (
            format!("{}@{}", student.reg_no.to_lowercase(), EMAIL_DOMAIN),
            DEFAULT_TEAM_ID,
            DEFAULT_ROLES,
        ),
    };
    let dob = student.dob_raw.as_deref().and_then(dates::to_iso_date);

    Some(format!(
        "({}, {}, {}, {}, {}, {}, {}, {})",
        literal_or_null(Some(&email)),
        literal_or_null(Some(name)),
        literal_or_null(Some(&student.reg_no)),
        literal_or_null(student.batch.as_deref()),
        literal_or_null(Some(team_id)),
        literal_or_null(dob.as_deref()),
        literal_or_null(student.leetcode.as_deref()),
        literal_or_null(Some(roles)),
    ))
}

#[derive(Debug)]
pub struct SeedScript {
    pub sql: String,
    pub row_count: usize,
}

/// Assemble the full regeneration script: schema touch-ups, whitelist
/// recreate + truncate, the bulk insert, the users sync, a count check.
pub fn build_seed_script(
    students: &[RosterStudent],
    prior: &HashMap<String, PriorSeedEntry>,
) -> anyhow::Result<SeedScript> {
    let mut tuples: Vec<String> = Vec::with_capacity(students.len());
    for student in students {
        // Lookup is case-normalized; output keeps the roster's casing.
        let key = student.reg_no.trim().to_uppercase();
        if let Some(tuple) = render_whitelist_tuple(student, prior.get(&key)) {
            tuples.push(tuple);
        }
    }
    if tuples.is_empty() {
        anyhow::bail!("roster produced no whitelist rows");
    }

    let row_count = tuples.len();
    let mut sql = String::from(SEED_HEADER);
    sql.push_str(&tuples.join(",\n"));
    sql.push(';');
    sql.push_str(SEED_FOOTER);

    Ok(SeedScript { sql, row_count })
}
