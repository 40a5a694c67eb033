use crate::domain::common::serde_helpers::{keyword_list, null_as_default};
use crate::domain::common::EntityId;
use crate::shared::text::read_time_minutes;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlogPost {
    pub id: EntityId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub slug: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default)]
    pub excerpt: Option<String>,
    /// Trusted HTML authored in the admin dashboard.
    #[serde(default, deserialize_with = "null_as_default")]
    pub content: String,
    #[serde(default)]
    pub author_name: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub views: u64,
    #[serde(default)]
    pub featured_image: Option<String>,
    #[serde(default, deserialize_with = "keyword_list")]
    pub meta_keywords: Vec<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub canonical_url: Option<String>,
}

impl BlogPost {
    pub fn read_time_minutes(&self) -> u32 {
        read_time_minutes(&self.content)
    }

    /// True when the post was edited after publishing.
    pub fn was_updated(&self) -> bool {
        match (&self.created_at, &self.updated_at) {
            (Some(c), Some(u)) => c != u,
            _ => false,
        }
    }
}

/// Social networks a post can be shared to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareTarget {
    Facebook,
    Twitter,
    LinkedIn,
}

impl ShareTarget {
    pub fn all() -> Vec<ShareTarget> {
        vec![Self::Facebook, Self::Twitter, Self::LinkedIn]
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Facebook => "Facebook",
            Self::Twitter => "Twitter",
            Self::LinkedIn => "LinkedIn",
        }
    }

    /// Sharer URL for `page_url`; only Twitter carries the title.
    pub fn share_url(&self, page_url: &str, title: &str) -> String {
        let url = urlencoding::encode(page_url);
        match self {
            Self::Facebook => format!("https://www.facebook.com/sharer/sharer.php?u={url}"),
            Self::Twitter => format!(
                "https://twitter.com/intent/tweet?url={url}&text={}",
                urlencoding::encode(title)
            ),
            Self::LinkedIn => {
                format!("https://www.linkedin.com/sharing/share-offsite/?url={url}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_keywords_and_read_time() {
        let words = vec!["word"; 401].join(" ");
        let post: BlogPost = serde_json::from_value(json!({
            "id": 7,
            "slug": "mdcat-guide",
            "title": "MDCAT Guide",
            "content": format!("<p>{words}</p>"),
            "meta_keywords": "mdcat, medical ,  , admissions",
            "views": null
        }))
        .unwrap();
        assert_eq!(post.meta_keywords, vec!["mdcat", "medical", "admissions"]);
        assert_eq!(post.read_time_minutes(), 3);
        assert_eq!(post.views, 0);
        assert!(!post.was_updated());
    }

    #[test]
    fn test_share_urls() {
        let page = "https://beyondtaleem.pk/blog/mdcat-guide";
        assert_eq!(
            ShareTarget::Facebook.share_url(page, "x"),
            "https://www.facebook.com/sharer/sharer.php?u=https%3A%2F%2Fbeyondtaleem.pk%2Fblog%2Fmdcat-guide"
        );
        assert_eq!(
            ShareTarget::Twitter.share_url(page, "MDCAT & ECAT"),
            "https://twitter.com/intent/tweet?url=https%3A%2F%2Fbeyondtaleem.pk%2Fblog%2Fmdcat-guide&text=MDCAT%20%26%20ECAT"
        );
        assert!(ShareTarget::LinkedIn
            .share_url(page, "x")
            .starts_with("https://www.linkedin.com/sharing/share-offsite/?url=https%3A"));
    }
}
