use anyhow::anyhow;
use chrono::{Duration, NaiveDate};
use rand::Rng;

/// Convert `dd/mm/yyyy` (single- or double-digit day/month accepted) to
/// `yyyy-mm-dd`. Anything absent or malformed yields `None`; we never
/// guess a date.
pub fn to_iso_date(raw: &str) -> Option<String> {
    let t = raw.trim();
    if t.is_empty() || t.eq_ignore_ascii_case("NULL") {
        return None;
    }

    let parts: Vec<&str> = t.split('/').collect();
    if parts.len() != 3 {
        return None;
    }
    let day = parts[0].trim().parse::<u32>().ok()?;
    let month = parts[1].trim().parse::<u32>().ok()?;
    let year = parts[2].trim().parse::<i32>().ok()?;

    // chrono rejects impossible calendar dates (31/02 and friends).
    let date = NaiveDate::from_ymd_opt(year, month, day)?;
    Some(date.format("%Y-%m-%d").to_string())
}

/// Uniformly sample a date between Jan 1 of `start_year` and Dec 31 of
/// `end_year`, inclusive on both ends, formatted as `yyyy-mm-dd`.
pub fn random_dob<R: Rng>(rng: &mut R, start_year: i32, end_year: i32) -> anyhow::Result<String> {
    let start = NaiveDate::from_ymd_opt(start_year, 1, 1)
        .ok_or_else(|| anyhow!("invalid start year {}", start_year))?;
    let end = NaiveDate::from_ymd_opt(end_year, 12, 31)
        .ok_or_else(|| anyhow!("invalid end year {}", end_year))?;
    let span_days = (end - start).num_days();
    if span_days < 0 {
        return Err(anyhow!("empty date window {}..{}", start_year, end_year));
    }

    let offset = rng.gen_range(0..=span_days);
    Ok((start + Duration::days(offset)).format("%Y-%m-%d").to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_double_digit_fields() {
        assert_eq!(to_iso_date("22/10/2005").as_deref(), Some("2005-10-22"));
        assert_eq!(to_iso_date("01/03/2003").as_deref(), Some("2003-03-01"));
    }

    #[test]
    fn pads_single_digit_fields() {
        assert_eq!(to_iso_date("9/5/2004").as_deref(), Some("2004-05-09"));
    }

    #[test]
    fn trims_surrounding_whitespace() {
        assert_eq!(to_iso_date(" 17/12/2004 ").as_deref(), Some("2004-12-17"));
    }

    #[test]
    fn placeholder_and_empty_yield_none() {
        assert!(to_iso_date("NULL").is_none());
        assert!(to_iso_date("null").is_none());
        assert!(to_iso_date("").is_none());
        assert!(to_iso_date("   ").is_none());
    }

    #[test]
    fn malformed_yields_none() {
        assert!(to_iso_date("22-10-2005").is_none());
        assert!(to_iso_date("22/10").is_none());
        assert!(to_iso_date("aa/bb/cccc").is_none());
        assert!(to_iso_date("31/02/2004").is_none());
    }

    #[test]
    fn round_trips_as_calendar_date() {
        let iso = to_iso_date("28/04/2004").unwrap();
        let parsed = NaiveDate::parse_from_str(&iso, "%Y-%m-%d").unwrap();
        assert_eq!(parsed, NaiveDate::from_ymd_opt(2004, 4, 28).unwrap());
    }

    #[test]
    fn random_dob_stays_inside_window() {
        let mut rng = rand::thread_rng();
        let lo = NaiveDate::from_ymd_opt(2001, 1, 1).unwrap();
        let hi = NaiveDate::from_ymd_opt(2003, 12, 31).unwrap();
        for _ in 0..500 {
            let s = random_dob(&mut rng, 2001, 2003).unwrap();
            let d = NaiveDate::parse_from_str(&s, "%Y-%m-%d").expect("valid iso date");
            assert!(d >= lo && d <= hi, "{} outside window", s);
        }
    }
}
