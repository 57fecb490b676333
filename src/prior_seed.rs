use anyhow::Context;
use regex::Regex;
use std::collections::HashMap;
use std::path::Path;

/// Per-student metadata recovered from an earlier generated seed file.
/// Team and roles carry manual corrections we must not clobber, and the
/// stored email preserves any hand-fixed casing.
#[derive(Debug, Clone)]
pub struct PriorSeedEntry {
    pub email: String,
    pub name: String,
    pub batch: String,
    pub team_id: String,
    pub roles: String,
}

// Matches the value tuples the previous generator emitted:
// ('email', 'name', 'reg_no', 'batch', 'team_id', '{...roles json...}')
// This is coupled to that exact formatting on purpose; it is a legacy-data
// importer, not a SQL parser. Format drift in the old file silently yields
// fewer enrichments rather than an error.
const TUPLE_PATTERN: &str =
    r"\('([^']+)',\s*'([^']+)',\s*'([^']+)',\s*'([^']+)',\s*'([^']+)',\s*'(\{.*?\})'\)";

/// Scan prior seed text for value tuples, keyed by trimmed upper-cased
/// reg_no. Tuples that do not match the pattern are ignored.
pub fn extract_prior_seed(content: &str) -> anyhow::Result<HashMap<String, PriorSeedEntry>> {
    let re = Regex::new(TUPLE_PATTERN).context("bad prior-seed tuple pattern")?;

    let mut out: HashMap<String, PriorSeedEntry> = HashMap::new();
    for caps in re.captures_iter(content) {
        let reg_no_key = caps[3].trim().to_uppercase();
        out.insert(
            reg_no_key,
            PriorSeedEntry {
                email: caps[1].to_string(),
                name: caps[2].to_string(),
                batch: caps[4].to_string(),
                team_id: caps[5].to_string(),
                roles: caps[6].to_string(),
            },
        );
    }
    Ok(out)
}

/// Best-effort load of the prior seed. A missing or unreadable file is not
/// an error; enrichment just starts empty.
pub fn load_prior_seed(path: &Path) -> anyhow::Result<HashMap<String, PriorSeedEntry>> {
    let content = match std::fs::read_to_string(path) {
        Ok(v) => v,
        Err(e) => {
            eprintln!(
                "note: prior seed {} not readable ({}); continuing without enrichment",
                path.display(),
                e
            );
            return Ok(HashMap::new());
        }
    };
    extract_prior_seed(&content)
}
