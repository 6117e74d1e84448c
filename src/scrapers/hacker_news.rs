//! Hacker News front page scraper.
//!
//! The front page is a single table. Each story occupies two rows: a display
//! row holding the headline (`span.titleline`) and a metadata row holding the
//! score, submitter and comments link (`td.subtext`). The two kinds of block
//! are selected separately and paired by position, so the Nth headline is
//! assumed to belong to the Nth metadata block. When the counts differ the
//! surplus blocks are ignored and [`Extraction::is_aligned`] reports it.
//!
//! # Field Rules
//!
//! | Field | Source | When absent |
//! |-------|--------|-------------|
//! | title, url | first link of the title block | story dropped |
//! | comments | last link of the metadata block | 0 |
//! | score | `span.score` | 0 |
//! | author | `a.hnuser` | `"Unknown"` |
//! | hn_url | `id` of the row after the headline row | empty id |

use crate::config::Selectors;
use crate::error::{ExtractionFieldError, NetworkError};
use crate::models::{CommentLabel, Story};
use reqwest::Client;
use reqwest::header::USER_AGENT;
use scraper::{ElementRef, Html};
use tracing::{debug, info, instrument, warn};
use url::Url;

/// Fetch the front page markup with a single GET.
///
/// Only the `User-Agent` header is set. No retries and no timeout: a hung
/// connection hangs the run. Redirects follow the client's default policy.
///
/// # Errors
///
/// [`NetworkError::Transport`] when the request or body read fails and
/// [`NetworkError::Status`] for any non-2xx answer.
#[instrument(level = "info", skip(client, user_agent))]
pub async fn fetch_front_page(
    client: &Client,
    url: &str,
    user_agent: &str,
) -> Result<String, NetworkError> {
    let transport = |source| NetworkError::Transport {
        url: url.to_string(),
        source,
    };

    let response = client
        .get(url)
        .header(USER_AGENT, user_agent)
        .send()
        .await
        .map_err(transport)?;

    let status = response.status();
    if !status.is_success() {
        return Err(NetworkError::Status {
            url: url.to_string(),
            status,
        });
    }

    let body = response.text().await.map_err(transport)?;
    info!(bytes = body.len(), %status, "Fetched front page");
    Ok(body)
}

/// Result of running the extractor over one page.
#[derive(Debug, Default)]
pub struct Extraction {
    /// Stories in page order, numbered 1.. without gaps.
    pub stories: Vec<Story>,
    /// Number of title blocks found on the page.
    pub title_blocks: usize,
    /// Number of metadata blocks found on the page.
    pub metadata_blocks: usize,
    /// Pairs that could not be turned into a story.
    pub dropped: Vec<ExtractionFieldError>,
}

impl Extraction {
    /// Whether every title block had a metadata block to pair with.
    pub fn is_aligned(&self) -> bool {
        self.title_blocks == self.metadata_blocks
    }
}

/// Extract every story from front page markup.
///
/// Never fails as a whole. A pair that cannot be read is logged, recorded in
/// [`Extraction::dropped`] and skipped; the stories after it are numbered as
/// if it never existed.
#[instrument(level = "info", skip_all, fields(bytes = html.len()))]
pub fn extract_stories(html: &str, selectors: &Selectors, root: &Url) -> Extraction {
    let document = Html::parse_document(html);
    let titles: Vec<ElementRef> = document.select(&selectors.title_block).collect();
    let subtexts: Vec<ElementRef> = document.select(&selectors.metadata_block).collect();

    let mut extraction = Extraction {
        title_blocks: titles.len(),
        metadata_blocks: subtexts.len(),
        ..Extraction::default()
    };
    if !extraction.is_aligned() {
        warn!(
            title_blocks = titles.len(),
            metadata_blocks = subtexts.len(),
            "Title and metadata block counts differ; pairing up to the shorter list"
        );
    }

    let mut next_id: u32 = 1;
    for (position, (title, subtext)) in titles.into_iter().zip(subtexts).enumerate() {
        let position = position + 1;
        match extract_story(title, subtext, position, next_id, selectors, root) {
            Ok(story) => {
                debug!(position, id = story.id, title = %story.title, "Extracted story");
                extraction.stories.push(story);
                next_id += 1;
            }
            Err(e) => {
                warn!(error = %e, "Skipping story");
                extraction.dropped.push(e);
            }
        }
    }

    info!(
        extracted = extraction.stories.len(),
        dropped = extraction.dropped.len(),
        "Extracted stories"
    );
    extraction
}

fn extract_story(
    title: ElementRef,
    subtext: ElementRef,
    position: usize,
    id: u32,
    selectors: &Selectors,
    root: &Url,
) -> Result<Story, ExtractionFieldError> {
    let link = title
        .select(&selectors.title_link)
        .next()
        .ok_or(ExtractionFieldError::MissingTitleLink { position })?;
    let href = link.value().attr("href").unwrap_or_default();
    let url = absolutize(href, root);

    let comments = match subtext.select(&selectors.metadata_link).last() {
        Some(comments_link) => parse_comment_label(&text_of(comments_link), position)?,
        None => CommentLabel::Missing,
    };
    if let CommentLabel::Unrecognized(label) = &comments {
        warn!(position, %label, "Unrecognized comments label; counting zero comments");
    }

    let score = subtext
        .select(&selectors.score)
        .next()
        .map(|element| leading_number(&text_of(element), "score", position))
        .transpose()?;

    let author = subtext
        .select(&selectors.author)
        .next()
        .map(|element| text_of(element).trim().to_string());

    let item_id = discussion_row_id(link).unwrap_or_default();
    let hn_url = absolutize(&format!("item?id={item_id}"), root);

    Ok(Story {
        id,
        title: text_of(link).trim().to_string(),
        url,
        comments,
        score,
        author,
        hn_url,
    })
}

fn text_of(element: ElementRef) -> String {
    element.text().collect()
}

/// Make a story link absolute.
///
/// Links that already carry an `http`/`https` scheme are kept verbatim.
/// Anything else, other schemes included, gets the site root prepended, so
/// every stored link points at either the web or the site itself.
pub fn absolutize(href: &str, root: &Url) -> String {
    if href.starts_with("http://") || href.starts_with("https://") {
        return href.to_string();
    }
    let base = root.as_str().trim_end_matches('/');
    format!("{base}/{}", href.trim_start_matches('/'))
}

/// `id` of the first `tr` following the row that encloses `link`.
fn discussion_row_id(link: ElementRef) -> Option<String> {
    let row = link
        .ancestors()
        .filter_map(ElementRef::wrap)
        .find(|element| element.value().name() == "tr")?;
    let next_row = row
        .next_siblings()
        .filter_map(ElementRef::wrap)
        .find(|element| element.value().name() == "tr")?;
    next_row.value().attr("id").map(str::to_string)
}

/// Interpret the label of the last metadata link.
///
/// `"N comments"` and `"1 comment"` carry a count, `"discuss"` means none yet.
/// Anything else is kept as [`CommentLabel::Unrecognized`].
pub fn parse_comment_label(
    label: &str,
    position: usize,
) -> Result<CommentLabel, ExtractionFieldError> {
    if label.contains("comment") {
        leading_number(label, "comments", position).map(CommentLabel::Count)
    } else if label.contains("discuss") {
        Ok(CommentLabel::Discuss)
    } else {
        Ok(CommentLabel::Unrecognized(label.trim().to_string()))
    }
}

/// Parse the first whitespace-delimited token. The page separates the number
/// from its unit with `&nbsp;`, which `split_whitespace` treats as a separator.
fn leading_number(
    text: &str,
    field: &'static str,
    position: usize,
) -> Result<u32, ExtractionFieldError> {
    let token = text.split_whitespace().next().unwrap_or_default();
    token
        .parse()
        .map_err(|_| ExtractionFieldError::NotANumber {
            position,
            field,
            token: token.to_string(),
        })
}
