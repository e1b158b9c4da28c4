use std::path::PathBuf;

use crate::{
    client::TumblrClient,
    errors::{AppError, AppResult},
    models::{FeedPage, Post},
};

#[derive(Debug, PartialEq)]
pub enum DownloadOutcome {
    Saved(PathBuf),
    Skipped,
}

#[derive(Debug, Default, PartialEq, Clone, Copy)]
pub struct DownloadSummary {
    pub saved: usize,
    pub skipped: usize,
}

/// Saves photo posts into a single directory, named after the photo URL.
pub struct Downloader<'a> {
    client: &'a TumblrClient,
    output_dir: PathBuf,
}

impl<'a> Downloader<'a> {
    pub fn new(client: &'a TumblrClient, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            client,
            output_dir: output_dir.into(),
        }
    }

    pub async fn download_image(&self, post: &Post) -> AppResult<DownloadOutcome> {
        if !post.is_photo() {
            log::debug!("Skipping non-photo post {:?}", post.id);
            return Ok(DownloadOutcome::Skipped);
        }

        let photo_url = post.photo_url.as_deref().unwrap_or_default();
        let contents = self.client.fetch_bytes(photo_url).await?;

        let filename = filename_for(photo_url)?;
        let path = self.output_dir.join(filename);
        tokio::fs::write(&path, &contents)
            .await
            .map_err(|e| AppError::file_write(&path, e))?;

        log::info!("Saved {} ({} bytes)", path.display(), contents.len());
        Ok(DownloadOutcome::Saved(path))
    }

    /// Downloads every photo post of a page in order, printing progress
    /// unless `quiet`.
    pub async fn download_images(&self, page: &FeedPage, quiet: bool) -> AppResult<DownloadSummary> {
        let mut summary = DownloadSummary::default();

        for (i, post) in page.posts.iter().enumerate() {
            if !quiet {
                println!("Post #  {i}");
                println!(" ---> Caption:  {}", post.caption.as_deref().unwrap_or_default());
                println!(" ---> Url    :  {}", post.photo_url.as_deref().unwrap_or_default());
            }

            match self.download_image(post).await? {
                DownloadOutcome::Saved(_) => {
                    summary.saved += 1;
                    if !quiet {
                        println!();
                    }
                }
                DownloadOutcome::Skipped => {
                    summary.skipped += 1;
                    if !quiet {
                        println!(" ---> SKIPPING (not photo post)");
                    }
                }
            }
        }

        Ok(summary)
    }
}

/// File name for a photo: everything after the last `/` of the URL as given,
/// query string included and nothing re-encoded.
pub fn filename_for(photo_url: &str) -> AppResult<String> {
    match photo_url.rsplit('/').next() {
        Some(name) if !name.is_empty() && name != "." && name != ".." => Ok(name.to_string()),
        _ => Err(AppError::undeducible_filename(photo_url)),
    }
}
