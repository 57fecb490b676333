use crate::dates;
use crate::sqlgen;

/// Build UPDATEs from a verified corrections list. Input is the same
/// pipe-delimited five-field format as the roster; only the DOB and
/// LeetCode columns are touched, and only when the line actually carries
/// them. Lines carrying neither produce no statement.
pub fn build_corrections_script(text: &str) -> String {
    let mut lines: Vec<String> = vec!["-- Bulk update based on verified user data".to_string()];

    for raw in text.lines() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        let parts: Vec<&str> = line.split('|').map(str::trim).collect();
        if parts.len() < 5 {
            continue;
        }
        let reg_no = parts[0];
        let dob_raw = parts[3];
        let leetcode = parts[4];
        if reg_no.is_empty() || reg_no.eq_ignore_ascii_case("NULL") {
            continue;
        }

        let mut updates: Vec<String> = Vec::new();
        if let Some(iso) = dates::to_iso_date(dob_raw) {
            updates.push(format!("dob = '{}'", iso));
        }
        if !leetcode.is_empty() && !leetcode.eq_ignore_ascii_case("NULL") {
            updates.push(format!(
                "leetcode_username = '{}'",
                sqlgen::escape_quotes(leetcode)
            ));
            updates.push("leetcode_notifications_enabled = true".to_string());
        }
        if updates.is_empty() {
            continue;
        }

        lines.push(format!(
            "UPDATE users SET {} WHERE reg_no = '{}';",
            updates.join(", "),
            sqlgen::escape_quotes(reg_no)
        ));
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}
