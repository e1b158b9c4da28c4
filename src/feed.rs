use crate::models::FeedPage;

/// Posts per page of the read API. The server never reports this.
pub const PAGE_SIZE: u64 = 20;

pub const JSONP_PREFIX: &str = "var tumblr_api_read = ";

/// Strips a single trailing `/` from a blog URL.
pub fn normalize_blog_url(url: &str) -> &str {
    url.strip_suffix('/').unwrap_or(url)
}

/// Read API endpoint for a 1-based page number.
pub fn read_endpoint(base_url: &str, page: u32) -> String {
    if page > 1 {
        let start = u64::from(page - 1) * PAGE_SIZE;
        format!("{base_url}/api/read/json?start={start}")
    } else {
        format!("{base_url}/api/read/json")
    }
}

/// Removes the JavaScript assignment around the read API payload.
///
/// The prefix goes once, every `;` goes everywhere, including any inside
/// string values.
pub fn unwrap_jsonp(body: &str) -> String {
    body.replacen(JSONP_PREFIX, "", 1).replace(';', "")
}

/// Lenient decode: unknown fields are ignored, missing ones stay `None`, and a
/// document that does not decode at all yields an empty page.
pub fn parse_feed(json: &str) -> FeedPage {
    match serde_json::from_str::<FeedPage>(json) {
        Ok(page) => page,
        Err(e) => {
            log::warn!("Could not decode feed page, treating it as empty: {e}");
            FeedPage::default()
        }
    }
}
