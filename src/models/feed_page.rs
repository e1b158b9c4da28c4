use serde::{Deserialize, Serialize};

use super::{lenient, Post};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct BlogInfo {
    #[serde(default, deserialize_with = "lenient::string")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub name: Option<String>,
}

/// A single page of the read API. Not retained once its images are saved.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct FeedPage {
    #[serde(rename = "tumblelog", default)]
    pub blog: BlogInfo,
    #[serde(default)]
    pub posts: Vec<Post>,
    #[serde(rename = "posts-total", default, deserialize_with = "lenient::count")]
    pub total_posts: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_page() {
        let page: FeedPage = serde_json::from_str(
            r#"{
                "tumblelog": {"title": "Night Scapes", "name": "jnightscape", "timezone": "US/Eastern"},
                "posts-start": 0,
                "posts-total": 45,
                "posts-type": false,
                "posts": [
                    {"id": "1", "type": "photo", "photo-url-1280": "https://x/1.jpg"},
                    {"id": "2", "type": "regular"},
                    {"id": "3", "type": "photo", "photo-url-1280": "https://x/3.jpg"}
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(page.blog.title.as_deref(), Some("Night Scapes"));
        assert_eq!(page.blog.name.as_deref(), Some("jnightscape"));
        assert_eq!(page.total_posts, Some(45));
        assert_eq!(page.posts.len(), 3);
        let ids: Vec<_> = page
            .posts
            .iter()
            .filter(|p| p.is_photo())
            .filter_map(|p| p.id.as_deref())
            .collect();
        assert_eq!(ids, vec!["1", "3"]);
    }

    #[test]
    fn test_missing_fields_default() {
        let page: FeedPage = serde_json::from_str("{}").unwrap();
        assert_eq!(page, FeedPage::default());
        assert_eq!(page.total_posts, None);
        assert!(page.posts.is_empty());
    }
}
