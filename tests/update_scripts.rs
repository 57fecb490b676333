use std::path::PathBuf;

use chrono::NaiveDate;
use psgmx_seedgen::{backfill, corrections};

fn temp_file(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("psgmx-seedgen-{}-{}", std::process::id(), name));
    p
}

#[test]
fn backfill_from_master_json_file() {
    let path = temp_file("users_master.json");
    std::fs::write(
        &path,
        r#"[
            {"email":"a@x.com","name":"Jo Ann","regNo":"25MX001"},
            {"email":"b@x.com","name":"No Reg"},
            {"name":"No Email","regNo":"25MX003"}
        ]"#,
    )
    .expect("write master fixture");

    let users = backfill::load_master_users(&path).expect("load master json");
    let _ = std::fs::remove_file(&path);
    assert_eq!(users.len(), 3);

    let mut rng = rand::thread_rng();
    let sql = backfill::build_backfill_script(&users, &mut rng).expect("build backfill");
    let lines: Vec<&str> = sql.lines().collect();

    // Header plus one statement; the two incomplete records are skipped.
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], "-- Bulk update for generic DOB and LeetCode Usernames");

    let stmt = lines[1];
    assert!(stmt.starts_with("UPDATE users SET dob = '"));
    assert!(stmt.contains("leetcode_username = 'joann_25mx001'"));
    assert!(stmt.ends_with("WHERE email = 'a@x.com';"));

    let dob_start = stmt.find("dob = '").unwrap() + "dob = '".len();
    let dob = NaiveDate::parse_from_str(&stmt[dob_start..dob_start + 10], "%Y-%m-%d")
        .expect("dob is a valid iso date");
    assert!(dob >= NaiveDate::from_ymd_opt(2001, 1, 1).unwrap());
    assert!(dob <= NaiveDate::from_ymd_opt(2003, 12, 31).unwrap());
}

#[test]
fn backfill_rejects_invalid_json() {
    let path = temp_file("users_master_bad.json");
    std::fs::write(&path, "{not json").expect("write bad fixture");
    let err = backfill::load_master_users(&path).unwrap_err();
    let _ = std::fs::remove_file(&path);
    assert!(err.to_string().contains("invalid JSON"));
}

#[test]
fn corrections_set_only_the_fields_present() {
    let input = "\
25MX101 | BALAJI K | G1 | 22/10/2005 | V8HjERH7Hj
25MX102 | Balasubramaniam S | G1 | 05/07/2003 | NULL
25MX103 | BarathVikraman S K | G1 | NULL | barathvikramansk
25MX104 | DEEPIKAA B S | G1 | NULL | NULL
";
    let sql = corrections::build_corrections_script(input);
    let lines: Vec<&str> = sql.lines().collect();

    assert_eq!(lines[0], "-- Bulk update based on verified user data");
    assert_eq!(lines.len(), 4);
    assert!(lines[1].contains("dob = '2005-10-22', leetcode_username = 'V8HjERH7Hj'"));
    assert_eq!(
        lines[2],
        "UPDATE users SET dob = '2003-07-05' WHERE reg_no = '25MX102';"
    );
    assert!(lines[3].starts_with("UPDATE users SET leetcode_username = 'barathvikramansk'"));
    assert!(!sql.contains("25MX104"));
}
