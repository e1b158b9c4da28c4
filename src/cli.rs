use std::{io::Write, path::Path};

use clap::Parser;

use crate::{
    client::TumblrClient,
    config::AppConfig,
    errors::AppResult,
    feed::normalize_blog_url,
    tasks::{downloader::Downloader, pagination::download_all, raw_json::write_raw_json},
};

/// Download the photos of a tumblr blog into the current directory
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Blog page to download
    #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pub page: u32,

    /// Dump raw json output for debugging
    #[arg(short, long)]
    pub raw: bool,

    /// Download images from every page
    #[arg(short, long)]
    pub all: bool,

    /// Blog url, e.g. http://jnightscape.tumblr.com
    pub url: Option<String>,
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Mode {
    Raw { page: u32 },
    AllPages,
    SinglePage { page: u32 },
}

impl Args {
    /// Blog URL without its trailing `/`, or `None` when there is nothing to fetch.
    pub fn blog_url(&self) -> Option<&str> {
        self.url
            .as_deref()
            .map(normalize_blog_url)
            .filter(|url| !url.is_empty())
    }

    /// `--raw` wins over `--all`, and `--all` ignores `--page`.
    pub fn mode(&self) -> Mode {
        if self.raw {
            Mode::Raw { page: self.page }
        } else if self.all {
            Mode::AllPages
        } else {
            Mode::SinglePage { page: self.page }
        }
    }
}

pub fn write_usage<W: Write>(program: &str, err: &mut W) -> std::io::Result<()> {
    writeln!(err, "Please supply a tumblr url!")?;
    writeln!(err, "usage: {program} [options] url")
}

/// Runs one invocation. Photos land in `output_dir`; raw JSON, the blog
/// header and the all-pages report go to `out`.
pub async fn run<W: Write>(
    mode: Mode,
    url: &str,
    config: &AppConfig,
    output_dir: &Path,
    out: &mut W,
) -> AppResult<()> {
    let client = TumblrClient::new(config)?;

    match mode {
        Mode::Raw { page } => {
            let json = client.fetch_json(url, page, false).await?;
            write_raw_json(&json, out)
        }
        Mode::AllPages => {
            let downloader = Downloader::new(&client, output_dir);
            let report = download_all(&client, &downloader, url, config.page_delay).await?;
            writeln!(out, "{report}")?;
            Ok(())
        }
        Mode::SinglePage { page } => {
            let downloader = Downloader::new(&client, output_dir);
            let feed = client.fetch_page(url, page, false).await?;
            writeln!(out, "Blog Title:  {}", feed.blog.title.as_deref().unwrap_or_default())?;
            writeln!(out, "Number of Posts:  {}", feed.total_posts.unwrap_or(0))?;
            out.flush()?;
            downloader.download_images(&feed, false).await?;
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(args).expect("arguments should parse")
    }

    #[test]
    fn test_defaults() {
        let args = parse(&["tumblr-download", "http://x.tumblr.com/"]);
        assert_eq!(args.blog_url(), Some("http://x.tumblr.com"));
        assert_eq!(args.mode(), Mode::SinglePage { page: 1 });
    }

    #[test]
    fn test_missing_url() {
        let args = parse(&["tumblr-download", "--page", "2"]);
        assert_eq!(args.blog_url(), None);
        let args = parse(&["tumblr-download", "/"]);
        assert_eq!(args.blog_url(), None);
    }

    #[test]
    fn test_page_zero_rejected() {
        assert!(Args::try_parse_from(["tumblr-download", "--page", "0", "http://x"]).is_err());
        assert!(Args::try_parse_from(["tumblr-download", "-p", "-1", "http://x"]).is_err());
    }

    #[test]
    fn test_raw_takes_precedence_over_all() {
        let args = parse(&["tumblr-download", "--raw", "--all", "-p", "3", "http://x"]);
        assert_eq!(args.mode(), Mode::Raw { page: 3 });
    }

    #[test]
    fn test_all_ignores_page() {
        let args = parse(&["tumblr-download", "-a", "--page", "5", "http://x"]);
        assert_eq!(args.mode(), Mode::AllPages);
    }

    #[test]
    fn test_usage_message() {
        let mut err = Vec::new();
        write_usage("tumblr-download", &mut err).unwrap();
        assert_eq!(
            String::from_utf8(err).unwrap(),
            "Please supply a tumblr url!\nusage: tumblr-download [options] url\n"
        );
    }
}
