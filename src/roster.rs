/// Marker used throughout the raw roster for "no value here".
pub const PLACEHOLDER: &str = "NULL";

/// One line of the new roster, after field splitting and placeholder
/// translation. `reg_no` is the join key against the prior seed and is
/// always present; everything optional really was missing in the source.
#[derive(Debug, Clone)]
pub struct RosterStudent {
    pub reg_no: String,
    pub name: Option<String>,
    pub batch: Option<String>,
    pub dob_raw: Option<String>,
    pub leetcode: Option<String>,
}

/// Parse a block of pipe-delimited roster lines.
///
/// Field order: reg_no | name | batch | dob (dd/mm/yyyy) | leetcode.
/// Lines with fewer than five fields are malformed and dropped. A line
/// whose reg_no is the placeholder is dropped whole; such a student
/// cannot be joined to anything downstream. Placeholders in the other
/// fields become `None`, never the literal string. Keep that asymmetry.
pub fn parse_roster(text: &str) -> Vec<RosterStudent> {
    text.lines().filter_map(parse_roster_line).collect()
}

fn parse_roster_line(line: &str) -> Option<RosterStudent> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    let parts: Vec<String> = line.split('|').map(|p| p.trim().to_string()).collect();
    if parts.len() < 5 {
        return None;
    }

    let reg_no = parts[0].clone();
    if reg_no == PLACEHOLDER || reg_no.is_empty() {
        return None;
    }

    Some(RosterStudent {
        reg_no,
        name: field_value(&parts[1]),
        batch: field_value(&parts[2]),
        dob_raw: field_value(&parts[3]),
        leetcode: field_value(&parts[4]),
    })
}

fn field_value(v: &str) -> Option<String> {
    if v.is_empty() || v == PLACEHOLDER {
        None
    } else {
        Some(v.to_string())
    }
}
