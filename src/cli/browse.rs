//! Line-oriented browser on stdin/stdout.
//!
//! Every input line is a search-text change. `:open N` selects the N-th
//! displayed result and `:quit` exits. Rendering is plain text; this is the
//! thinnest possible presentation layer over [`GifBrowser`].

use color_eyre::Result;
use futures::stream::BoxStream;
use futures::Stream;
use futures_util::StreamExt;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, info};

use crate::adapters::ReqwestHttpClient;
use crate::api::{GifApiClient, ImageDownloader};
use crate::browser::GifBrowser;
use crate::config::BrowserConfig;
use crate::models::{GifDetail, GifImage, SearchResult};
use crate::pipeline::{first_detail, NavigationCommand};
use crate::reactive::PipelineStreamExt;
use crate::traits::{HttpClient, ImageFetcher};

/// One line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowseInput {
    /// New search text (possibly empty)
    Search(String),
    /// Select the displayed result at this 1-based position
    Open(usize),
    Quit,
    /// Unrecognized `:` command
    Invalid(String),
}

/// Classify a line typed by the user.
pub fn parse_input(line: &str) -> BrowseInput {
    let Some(command) = line.trim().strip_prefix(':') else {
        return BrowseInput::Search(line.to_string());
    };

    let mut parts = command.split_whitespace();
    match (parts.next(), parts.next(), parts.next()) {
        (Some("q" | "quit"), None, _) => BrowseInput::Quit,
        (Some("open" | "o"), Some(n), None) => match n.parse::<usize>() {
            Ok(n) if n > 0 => BrowseInput::Open(n),
            _ => BrowseInput::Invalid(format!("not a result number: {}", n)),
        },
        _ => BrowseInput::Invalid(format!("unknown command: :{}", command)),
    }
}

/// Render the display list as numbered lines.
pub fn format_list(results: &[SearchResult]) -> String {
    if results.is_empty() {
        return "(no results)".to_string();
    }
    results
        .iter()
        .enumerate()
        .map(|(i, result)| format!("{:>3}. {}  {}", i + 1, result.text, result.gif_url))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render the first detail record, with image dimensions when known.
pub fn format_detail(detail: Option<&GifDetail>, image: Option<&GifImage>) -> String {
    let Some(detail) = detail else {
        return "no details available".to_string();
    };

    let mut lines = vec![
        format!("title:  {}", detail.text),
        format!("shares: {}", detail.shares),
        format!("url:    {}", detail.gif_url),
    ];
    if !detail.tags.is_empty() {
        lines.push(format!("tags:   {}", detail.tags.join(", ")));
    }
    if let Some(image) = image {
        lines.push(format!(
            "size:   {}x{} ({} bytes)",
            image.width,
            image.height,
            image.bytes.len()
        ));
    }
    lines.join("\n")
}

/// Pair each detail emission with the image of its first record.
///
/// A newer emission drops the download still pending for an older one, so a
/// slow media host never holds up the rest of the browser.
pub fn detail_views<S>(
    details: S,
    images: Arc<dyn ImageFetcher>,
) -> BoxStream<'static, (Vec<GifDetail>, Option<GifImage>)>
where
    S: Stream<Item = Vec<GifDetail>> + Send + 'static,
{
    details
        .map_latest(move |details| {
            let images = Arc::clone(&images);
            async move {
                let image = match first_detail(&details) {
                    Some(detail) => images.fetch_image(&detail.gif_url).await,
                    None => None,
                };
                (details, image)
            }
        })
        .boxed()
}

/// Run the browser until `:quit` or end of input.
pub async fn run_browser(config: BrowserConfig) -> Result<()> {
    config.validate()?;
    info!(base_url = %config.base_url, "Starting browser");

    let http: Arc<dyn HttpClient> = Arc::new(ReqwestHttpClient::from_config(&config)?);
    let api = Arc::new(GifApiClient::new(&config, Arc::clone(&http)));
    let images: Arc<dyn ImageFetcher> = Arc::new(ImageDownloader::new(http));

    let (browser, mut streams) = GifBrowser::new(api);
    let mut views = detail_views(streams.detail, images);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut shown: Vec<SearchResult> = Vec::new();

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else {
                    debug!("stdin closed");
                    break;
                };
                match parse_input(&line) {
                    BrowseInput::Search(text) => browser.on_search_text_changed(text),
                    BrowseInput::Open(n) => match shown.get(n - 1) {
                        Some(item) => browser.on_item_selected(item.clone()),
                        None => println!("no result {} (showing {})", n, shown.len()),
                    },
                    BrowseInput::Quit => break,
                    BrowseInput::Invalid(message) => println!("{}", message),
                }
            }
            Some(list) = streams.display_list.next() => {
                println!("{}", format_list(&list));
                shown = list;
            }
            Some(NavigationCommand::ShowDetail(item)) = streams.navigate.next() => {
                println!("-- {} [{}] --", item.text, item.id);
            }
            Some((details, image)) = views.next() => {
                println!("{}", format_detail(first_detail(&details), image.as_ref()));
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use bytes::Bytes;
    use futures::channel::mpsc;
    use futures::FutureExt;
    use std::sync::Mutex;

    /// Never answers for `hang_url`; answers a 1x1 image for anything else.
    #[derive(Default)]
    struct StallingFetcher {
        hang_url: String,
        fetched: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl ImageFetcher for StallingFetcher {
        async fn fetch_image(&self, url: &str) -> Option<GifImage> {
            self.fetched.lock().unwrap().push(url.to_string());
            if url == self.hang_url {
                futures::future::pending::<()>().await;
            }
            Some(GifImage {
                bytes: Bytes::from_static(b"GIF89a"),
                width: 1,
                height: 1,
            })
        }
    }

    fn detail(id: &str) -> GifDetail {
        GifDetail {
            id: id.to_string(),
            gif_url: format!("u{}", id),
            text: format!("GIF {}", id),
            shares: 0,
            tags: Vec::new(),
        }
    }

    #[tokio::test]
    async fn test_detail_views_newer_selection_skips_stalled_download() {
        let fetcher = Arc::new(StallingFetcher {
            hang_url: "u1".to_string(),
            ..Default::default()
        });
        let (tx, rx) = mpsc::unbounded();
        let mut views = detail_views(rx, fetcher.clone());

        tx.unbounded_send(vec![detail("1")]).unwrap();
        assert!(views.next().now_or_never().is_none());

        tx.unbounded_send(vec![detail("2")]).unwrap();
        let (details, image) = views.next().await.unwrap();
        assert_eq!(details, vec![detail("2")]);
        assert_eq!(image.map(|image| (image.width, image.height)), Some((1, 1)));
        assert_eq!(*fetcher.fetched.lock().unwrap(), vec!["u1", "u2"]);
    }

    #[tokio::test]
    async fn test_detail_views_empty_details_skip_download() {
        let fetcher = Arc::new(StallingFetcher::default());
        let views = detail_views(futures::stream::iter(vec![Vec::new()]), fetcher.clone());

        let out: Vec<_> = views.collect().await;
        assert_eq!(out, vec![(Vec::new(), None)]);
        assert!(fetcher.fetched.lock().unwrap().is_empty());
    }

    #[test]
    fn test_parse_input_search() {
        assert_eq!(parse_input("cat"), BrowseInput::Search("cat".to_string()));
        assert_eq!(
            parse_input("funny dogs"),
            BrowseInput::Search("funny dogs".to_string())
        );
    }

    #[test]
    fn test_parse_input_empty_line_clears_search() {
        assert_eq!(parse_input(""), BrowseInput::Search(String::new()));
    }

    #[test]
    fn test_parse_input_commands() {
        assert_eq!(parse_input(":quit"), BrowseInput::Quit);
        assert_eq!(parse_input(":q"), BrowseInput::Quit);
        assert_eq!(parse_input(":open 3"), BrowseInput::Open(3));
        assert_eq!(parse_input("  :o 1 "), BrowseInput::Open(1));
    }

    #[test]
    fn test_parse_input_invalid_commands() {
        assert!(matches!(parse_input(":open 0"), BrowseInput::Invalid(_)));
        assert!(matches!(parse_input(":open x"), BrowseInput::Invalid(_)));
        assert!(matches!(parse_input(":open"), BrowseInput::Invalid(_)));
        assert!(matches!(parse_input(":frobnicate"), BrowseInput::Invalid(_)));
    }

    #[test]
    fn test_format_list() {
        let results = vec![
            SearchResult::new("1", "u1", Some("Cat".to_string())),
            SearchResult::new("2", "u2", None),
        ];
        assert_eq!(format_list(&results), "  1. Cat  u1\n  2. no title  u2");
        assert_eq!(format_list(&[]), "(no results)");
    }

    #[test]
    fn test_format_detail() {
        let detail = GifDetail {
            id: "42".to_string(),
            gif_url: "u42".to_string(),
            text: "Dance".to_string(),
            shares: 9,
            tags: vec!["a".to_string(), "b".to_string()],
        };
        let image = GifImage {
            bytes: Bytes::from_static(b"GIF89a"),
            width: 10,
            height: 20,
        };

        let rendered = format_detail(Some(&detail), Some(&image));
        assert!(rendered.contains("title:  Dance"));
        assert!(rendered.contains("shares: 9"));
        assert!(rendered.contains("tags:   a, b"));
        assert!(rendered.contains("size:   10x20 (6 bytes)"));
    }

    #[test]
    fn test_format_detail_absent() {
        assert_eq!(format_detail(None, None), "no details available");
    }
}
