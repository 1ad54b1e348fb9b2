use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Video {
    pub id: String,
    #[serde(default)]
    pub slug: String,
    pub title: String,
    #[serde(default)]
    pub category: String,
    #[serde(default, alias = "categorySlug")]
    pub category_slug: String,
    #[serde(default, alias = "thumbnailUrl")]
    pub thumbnail_url: String,
    #[serde(alias = "mediaUrl")]
    pub media_url: String,
    #[serde(default)]
    pub duration: Option<String>,
}

impl Video {
    /// Parses the duration label (`m:ss` or `h:mm:ss`) into seconds.
    pub fn duration_secs(&self) -> Option<u32> {
        let label = self.duration.as_deref()?.trim();
        if label.is_empty() {
            return None;
        }

        let mut total: u32 = 0;
        let mut parts = 0;
        for part in label.split(':') {
            let value: u32 = part.trim().parse().ok()?;
            total = total.checked_mul(60)?.checked_add(value)?;
            parts += 1;
        }

        if parts > 3 {
            return None;
        }
        Some(total)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Category {
    #[serde(default)]
    pub slug: String,
    pub name: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub videos: Vec<Video>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_duration(label: Option<&str>) -> Video {
        Video {
            duration: label.map(str::to_string),
            ..Video::default()
        }
    }

    #[test]
    fn parses_minutes_and_hours() {
        assert_eq!(with_duration(Some("4:10")).duration_secs(), Some(250));
        assert_eq!(with_duration(Some("1:02:03")).duration_secs(), Some(3723));
        assert_eq!(with_duration(Some("45")).duration_secs(), Some(45));
    }

    #[test]
    fn rejects_unparseable_labels() {
        assert_eq!(with_duration(None).duration_secs(), None);
        assert_eq!(with_duration(Some("")).duration_secs(), None);
        assert_eq!(with_duration(Some("ten:00")).duration_secs(), None);
        assert_eq!(with_duration(Some("1:2:3:4")).duration_secs(), None);
    }
}
