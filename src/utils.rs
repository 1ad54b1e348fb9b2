/// Utility helpers for ReelView

/// Turns a title into a URL-safe slug.
/// Apostrophes are dropped so "Chef's Knife" becomes `chefs-knife`; any other
/// run of non-alphanumeric characters collapses into one hyphen.
pub fn slugify<S: AsRef<str>>(s: S) -> String {
    let s = s.as_ref().to_lowercase();
    let mut out = String::with_capacity(s.len());
    let mut pending_dash = false;

    for ch in s.chars() {
        if ch == '\'' || ch == '\u{2019}' {
            continue;
        }
        if ch.is_ascii_alphanumeric() {
            if pending_dash && !out.is_empty() {
                out.push('-');
            }
            out.push(ch);
            pending_dash = false;
        } else {
            pending_dash = true;
        }
    }

    out
}

/// Appends `key=value` pairs to a URL, picking `?` or `&` depending on
/// whether it already carries a query string.
pub fn append_query(url: &str, params: &[(&str, &str)]) -> String {
    let mut out = url.trim_end_matches(|c: char| c == '?' || c == '&').to_string();
    let mut separator = if out.contains('?') { '&' } else { '?' };
    for (key, value) in params {
        out.push(separator);
        out.push_str(key);
        out.push('=');
        out.push_str(value);
        separator = '&';
    }
    out
}

/// Clock label: `m:ss`, or `h:mm:ss` from one hour up. Non-finite or negative reads as zero.
pub fn format_time(seconds: f64) -> String {
    let total = if seconds.is_finite() && seconds > 0.0 {
        seconds.floor() as u64
    } else {
        0
    };
    let (hours, minutes, secs) = (total / 3600, (total % 3600) / 60, total % 60);
    if hours > 0 {
        format!("{hours}:{minutes:02}:{secs:02}")
    } else {
        format!("{minutes}:{secs:02}")
    }
}

/// Share of `total` covered by `elapsed`, as a percentage clamped to 0..=100.
pub fn progress_percent(elapsed: f64, total: f64) -> f64 {
    if !elapsed.is_finite() || !total.is_finite() || total <= 0.0 {
        return 0.0;
    }
    (elapsed / total * 100.0).clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugify_collapses_punctuation() {
        assert_eq!(slugify("  Knife Skills -- in 10 Minutes! "), "knife-skills-in-10-minutes");
        assert_eq!(slugify("Chef's Knife"), "chefs-knife");
        assert_eq!(slugify("???"), "");
    }

    #[test]
    fn append_query_picks_separator() {
        assert_eq!(
            append_query("https://x.test/embed/a", &[("autoplay", "1"), ("mute", "1")]),
            "https://x.test/embed/a?autoplay=1&mute=1"
        );
        assert_eq!(
            append_query("https://x.test/embed/a?start=5", &[("autoplay", "1")]),
            "https://x.test/embed/a?start=5&autoplay=1"
        );
        assert_eq!(append_query("https://x.test/a?", &[]), "https://x.test/a");
    }

    #[test]
    fn format_time_pads_seconds() {
        assert_eq!(format_time(0.0), "0:00");
        assert_eq!(format_time(9.9), "0:09");
        assert_eq!(format_time(250.0), "4:10");
        assert_eq!(format_time(3723.0), "1:02:03");
        assert_eq!(format_time(f64::NAN), "0:00");
        assert_eq!(format_time(-5.0), "0:00");
    }

    #[test]
    fn progress_is_clamped() {
        assert_eq!(progress_percent(125.0, 250.0), 50.0);
        assert_eq!(progress_percent(400.0, 250.0), 100.0);
        assert_eq!(progress_percent(10.0, 0.0), 0.0);
        assert_eq!(progress_percent(f64::INFINITY, 250.0), 0.0);
    }
}
