use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};

/// Placeholder shown when the upstream article has no description.
pub const NO_DESCRIPTION: &str = "No description available.";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Article {
    #[serde(default)]
    pub title: String,
    pub description: Option<String>,
    #[serde(default)]
    pub url: String,
    #[serde(rename = "urlToImage")]
    pub url_to_image: Option<String>,
    #[serde(rename = "publishedAt")]
    pub published_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub source: Source,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Source {
    #[serde(default)]
    pub name: String,
}

/// Display-ready projection of one article, shared by every view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardFields {
    pub title: String,
    pub source: String,
    pub description: String,
    pub date: String,
    /// None means the card has no image region at all.
    pub image_url: Option<String>,
    pub link: String,
}

impl Article {
    /// Description text with the placeholder substituted for missing or
    /// empty descriptions.
    pub fn description_text(&self) -> &str {
        self.description
            .as_deref()
            .filter(|d| !d.trim().is_empty())
            .unwrap_or(NO_DESCRIPTION)
    }

    /// Publication date in the local timezone, e.g. "Jan  5, 2026".
    pub fn date_line(&self) -> String {
        match self.published_at {
            Some(dt) => dt.with_timezone(&Local).format("%b %e, %Y").to_string(),
            None => "—".to_string(),
        }
    }

    /// Publication time in the local timezone, used by the trending sidebar.
    pub fn time_line(&self) -> String {
        match self.published_at {
            Some(dt) => dt.with_timezone(&Local).format("%H:%M").to_string(),
            None => "—".to_string(),
        }
    }

    pub fn card(&self) -> CardFields {
        CardFields {
            title: self.title.clone(),
            source: self.source.name.clone(),
            description: self.description_text().to_string(),
            date: self.date_line(),
            image_url: self.url_to_image.clone(),
            link: self.url.clone(),
        }
    }
}

/// Test fixture shared by the model, app, and ui tests.
#[cfg(test)]
pub(crate) fn sample_article(title: &str) -> Article {
    use chrono::TimeZone;

    Article {
        title: title.to_string(),
        description: Some(format!("About {title}")),
        url: format!("https://example.com/{title}"),
        url_to_image: Some(format!("https://example.com/{title}.jpg")),
        published_at: Some(Utc.with_ymd_and_hms(2026, 6, 15, 12, 0, 0).unwrap()),
        source: Source {
            name: "Example Wire".to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Deserialization ====================

    #[test]
    fn test_deserialize_full_article() {
        let json = r#"{
            "source": {"id": "cnn", "name": "CNN"},
            "title": "Big story",
            "description": "Details inside",
            "url": "https://cnn.com/story",
            "urlToImage": "https://cnn.com/story.jpg",
            "publishedAt": "2026-06-15T12:00:00Z"
        }"#;

        let article: Article = serde_json::from_str(json).unwrap();

        assert_eq!(article.title, "Big story");
        assert_eq!(article.description.as_deref(), Some("Details inside"));
        assert_eq!(article.source.name, "CNN");
        assert_eq!(
            article.url_to_image.as_deref(),
            Some("https://cnn.com/story.jpg")
        );
        assert!(article.published_at.is_some());
    }

    #[test]
    fn test_deserialize_missing_optionals() {
        // NewsAPI routinely omits or nulls these fields
        let json = r#"{
            "source": {"name": "Reuters"},
            "title": "Terse story",
            "url": "https://reuters.com/story",
            "description": null,
            "urlToImage": null,
            "publishedAt": null
        }"#;

        let article: Article = serde_json::from_str(json).unwrap();

        assert_eq!(article.description, None);
        assert_eq!(article.url_to_image, None);
        assert_eq!(article.published_at, None);
    }

    // ==================== Placeholder rules ====================

    #[test]
    fn test_description_placeholder_when_absent() {
        let mut article = sample_article("a");
        article.description = None;
        assert_eq!(article.description_text(), "No description available.");
    }

    #[test]
    fn test_description_placeholder_when_empty() {
        let mut article = sample_article("a");
        article.description = Some("   ".to_string());
        assert_eq!(article.description_text(), "No description available.");
    }

    #[test]
    fn test_description_passthrough_when_present() {
        let article = sample_article("a");
        assert_eq!(article.description_text(), "About a");
    }

    // ==================== Card projection ====================

    #[test]
    fn test_card_omits_image_when_absent() {
        let mut article = sample_article("a");
        article.url_to_image = None;
        assert_eq!(article.card().image_url, None);
    }

    #[test]
    fn test_card_carries_all_display_fields() {
        let article = sample_article("launch");
        let card = article.card();

        assert_eq!(card.title, "launch");
        assert_eq!(card.source, "Example Wire");
        assert_eq!(card.description, "About launch");
        assert_eq!(card.link, "https://example.com/launch");
        assert_eq!(
            card.image_url.as_deref(),
            Some("https://example.com/launch.jpg")
        );
        assert!(card.date.contains("2026"));
    }

    #[test]
    fn test_date_line_placeholder_without_timestamp() {
        let mut article = sample_article("a");
        article.published_at = None;
        assert_eq!(article.date_line(), "—");
        assert_eq!(article.time_line(), "—");
    }
}
