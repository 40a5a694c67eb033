//! Display helpers shared by cards and detail pages

use crate::enums::InstituteType;
use chrono::{DateTime, NaiveDate};

/// Placeholder rendered for missing values.
pub const DASH: &str = "—";

/// URL slug: lowercase ascii alphanumerics separated by single dashes.
pub fn slugify(text: &str) -> String {
    let cleaned: String = text
        .trim()
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || c.is_whitespace() || *c == '-')
        .collect();

    let mut slug = String::with_capacity(cleaned.len());
    for part in cleaned.split(|c: char| c.is_whitespace() || c == '-') {
        if part.is_empty() {
            continue;
        }
        if !slug.is_empty() {
            slug.push('-');
        }
        slug.push_str(part);
    }
    slug
}

/// Detail route of an institute: `/{type}/{slugified-name}-{id}`.
pub fn institute_detail_path(kind: InstituteType, name: &str, id: &str) -> String {
    let slug = slugify(name);
    if slug.is_empty() {
        format!("/{}/{}", kind.route_slug(), id)
    } else {
        format!("/{}/{}-{}", kind.route_slug(), slug, id)
    }
}

/// Backend id carried by the last dash-separated segment of a detail slug.
pub fn id_from_slug(segment: &str) -> &str {
    segment.rsplit('-').next().unwrap_or(segment)
}

fn strip_tags(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut in_tag = false;
    for c in html.chars() {
        match c {
            '<' => in_tag = true,
            '>' if in_tag => {
                in_tag = false;
                out.push(' ');
            }
            _ if !in_tag => out.push(c),
            _ => {}
        }
    }
    out
}

/// Estimated reading time at 200 words per minute, never below one minute.
pub fn read_time_minutes(html: &str) -> u32 {
    let words = strip_tags(html).split_whitespace().count() as u32;
    words.div_ceil(200).max(1)
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    let date_part = raw.split('T').next().unwrap_or(raw);
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}

/// "2025-03-15T00:00:00Z" -> "15 Mar 2025"; missing or invalid -> dash.
pub fn format_short_date(raw: Option<&str>) -> String {
    raw.and_then(parse_date)
        .map(|d| d.format("%d %b %Y").to_string())
        .unwrap_or_else(|| DASH.to_string())
}

/// "2025-03-15" -> "March 15, 2025"; unparsable input is returned as is.
pub fn format_long_date(raw: &str) -> String {
    parse_date(raw)
        .map(|d| d.format("%B %-d, %Y").to_string())
        .unwrap_or_else(|| raw.to_string())
}

/// Thousands separators: 15000 -> "15,000".
pub fn format_count(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// "https://www.nts.org.pk/" -> "www.nts.org.pk/"
pub fn strip_scheme(url: &str) -> &str {
    url.strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .unwrap_or(url)
}

/// Value or dash for optional display fields.
pub fn or_dash(value: Option<&str>) -> String {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .unwrap_or(DASH)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify() {
        assert_eq!(
            slugify("NUST - National University of Sciences & Technology"),
            "nust-national-university-of-sciences-technology"
        );
        assert_eq!(slugify("  Aga Khan   University "), "aga-khan-university");
        assert_eq!(slugify("!!!"), "");
    }

    #[test]
    fn test_detail_path_round_trip() {
        let path = institute_detail_path(InstituteType::University, "LUMS Lahore", "17");
        assert_eq!(path, "/universities/lums-lahore-17");
        let segment = path.rsplit('/').next().unwrap();
        assert_eq!(id_from_slug(segment), "17");
        assert_eq!(id_from_slug("42"), "42");
        assert_eq!(institute_detail_path(InstituteType::School, "", "3"), "/schools/3");
    }

    #[test]
    fn test_read_time() {
        assert_eq!(read_time_minutes(""), 1);
        let words = vec!["word"; 401].join(" ");
        assert_eq!(read_time_minutes(&format!("<p>{words}</p>")), 3);
        assert_eq!(read_time_minutes("<p>one</p><p>two</p>"), 1);
    }

    #[test]
    fn test_dates() {
        assert_eq!(format_short_date(Some("2025-03-15T10:00:00Z")), "15 Mar 2025");
        assert_eq!(format_short_date(Some("2025-08-01")), "01 Aug 2025");
        assert_eq!(format_short_date(Some("soon")), "—");
        assert_eq!(format_short_date(None), "—");
        assert_eq!(format_long_date("2025-03-05T08:30:00.000Z"), "March 5, 2025");
        assert_eq!(format_long_date("someday"), "someday");
    }

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(15000), "15,000");
        assert_eq!(format_count(1234567), "1,234,567");
    }

    #[test]
    fn test_strip_scheme_and_dash() {
        assert_eq!(strip_scheme("https://nts.org.pk"), "nts.org.pk");
        assert_eq!(strip_scheme("www.hec.gov.pk"), "www.hec.gov.pk");
        assert_eq!(or_dash(Some(" ")), "—");
        assert_eq!(or_dash(Some("2 hours")), "2 hours");
    }
}
