use std::{ops::Range, time::Duration};

use crate::{client::TumblrClient, errors::AppResult, feed::PAGE_SIZE};

use super::downloader::Downloader;

#[derive(Debug, PartialEq, Clone, Copy)]
pub struct AllPagesReport {
    /// pages fetched and downloaded
    pub processed: u32,
    /// pages the reported post count implies
    pub pages: u32,
}

impl std::fmt::Display for AllPagesReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Done! {} of {} pages downloaded",
            self.processed, self.pages
        )
    }
}

pub fn page_count(total_posts: Option<u64>) -> u32 {
    let pages = total_posts.unwrap_or(0).div_ceil(PAGE_SIZE);
    u32::try_from(pages).unwrap_or(u32::MAX)
}

/// Page indices visited in all-pages mode.
///
/// The upper bound is exclusive, so the last computed page is never fetched.
pub fn pages_to_visit(pages: u32) -> Range<u32> {
    1..pages
}

/// Walks every page of a blog one at a time, saving each page's photos.
pub async fn download_all(
    client: &TumblrClient,
    downloader: &Downloader<'_>,
    base_url: &str,
    page_delay: Duration,
) -> AppResult<AllPagesReport> {
    let first = client.fetch_page(base_url, 1, true).await?;
    let pages = page_count(first.total_posts);
    tracing::info!(
        blog = base_url,
        total_posts = first.total_posts,
        pages = pages,
        "Starting all-pages download"
    );

    let mut processed = 0;
    for page in pages_to_visit(pages) {
        if processed > 0 && !page_delay.is_zero() {
            tokio::time::sleep(page_delay).await;
        }

        let feed = client.fetch_page(base_url, page, true).await?;
        let summary = downloader.download_images(&feed, true).await?;
        processed += 1;
        tracing::info!(
            page = page,
            saved = summary.saved,
            skipped = summary.skipped,
            "Page downloaded"
        );
    }

    Ok(AllPagesReport { processed, pages })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_count_rounds_up() {
        assert_eq!(page_count(Some(45)), 3);
        assert_eq!(page_count(Some(40)), 2);
        assert_eq!(page_count(Some(41)), 3);
        assert_eq!(page_count(Some(1)), 1);
        assert_eq!(page_count(Some(0)), 0);
        assert_eq!(page_count(None), 0);
    }

    #[test]
    fn test_last_page_is_never_visited() {
        let visited: Vec<u32> = pages_to_visit(page_count(Some(45))).collect();
        assert_eq!(visited, vec![1, 2]);
        assert_eq!(pages_to_visit(1).count(), 0);
        assert_eq!(pages_to_visit(0).count(), 0);
    }

    #[test]
    fn test_report_message() {
        let report = AllPagesReport {
            processed: 2,
            pages: 3,
        };
        assert_eq!(report.to_string(), "Done! 2 of 3 pages downloaded");
    }
}
