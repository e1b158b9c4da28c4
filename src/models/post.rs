use serde::{Deserialize, Serialize};

use super::lenient;

/// One entry of the `posts` array of the read API.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Post {
    #[serde(default, deserialize_with = "lenient::string_or_number")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub url: Option<String>,
    #[serde(rename = "type", default, deserialize_with = "lenient::string")]
    pub kind: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub date: Option<String>,
    #[serde(
        rename = "photo-caption",
        default,
        deserialize_with = "lenient::string"
    )]
    pub caption: Option<String>,
    #[serde(
        rename = "photo-url-1280",
        default,
        deserialize_with = "lenient::string"
    )]
    pub photo_url: Option<String>,
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum PostType {
    Photo,
    Other,
}

impl Post {
    pub fn post_type(&self) -> PostType {
        match self.kind.as_deref() {
            Some("photo") => PostType::Photo,
            _ => PostType::Other,
        }
    }

    pub fn is_photo(&self) -> bool {
        self.post_type() == PostType::Photo
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_photo_post() {
        let post: Post = serde_json::from_str(
            r#"{
                "id": "12345",
                "url": "https://x.tumblr.com/post/12345",
                "type": "photo",
                "date": "Wed, 01 Jan 2014 10:00:00",
                "photo-caption": "<p>sunset</p>",
                "photo-url-1280": "https://x.tumblr.com/abc/image123.jpg",
                "photo-url-500": "https://x.tumblr.com/abc/image123_500.jpg"
            }"#,
        )
        .unwrap();

        assert!(post.is_photo());
        assert_eq!(post.id.as_deref(), Some("12345"));
        assert_eq!(post.caption.as_deref(), Some("<p>sunset</p>"));
        assert_eq!(
            post.photo_url.as_deref(),
            Some("https://x.tumblr.com/abc/image123.jpg")
        );
    }

    #[test]
    fn test_non_photo_types() {
        for kind in ["regular", "quote", "link", "Photo"] {
            let post = Post {
                kind: Some(kind.to_string()),
                ..Default::default()
            };
            assert_eq!(post.post_type(), PostType::Other, "{kind}");
        }
        assert!(!Post::default().is_photo());
    }

    #[test]
    fn test_numeric_id() {
        let post: Post = serde_json::from_str(r#"{"id": 987654321, "type": "text"}"#).unwrap();
        assert_eq!(post.id.as_deref(), Some("987654321"));
        assert_eq!(post.photo_url, None);
    }
}
