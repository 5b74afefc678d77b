//! Content Data Model
//!
//! Result entities produced by a generation batch, plus the validated topic
//! newtype that gates submissions.
//!
//! [`VideoContent`] mirrors the provider's structured-output schema: all six
//! fields are required, so a payload missing any of them fails
//! deserialization instead of producing a half-filled entity. Results live
//! only in process memory and are replaced wholesale on the next submission.

use serde::Deserialize;

use crate::error::BlankTopic;
use crate::prompts::ThumbnailStyle;

/// Generated text content for a video topic
///
/// Field expectations (not enforced beyond presence): 3 titles, a
/// description ending in hashtags, 10-15 tags, a score in 0-100.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct VideoContent {
    /// Click-worthy, SEO-optimized title options
    pub titles: Vec<String>,
    /// SEO-friendly description with embedded hashtags
    pub description: String,
    /// Relevant SEO tags
    pub tags: Vec<String>,
    /// Overall SEO potential, 0-100
    pub seo_score: u8,
    /// Brief explanation of the score
    pub score_justification: String,
    /// Keyword analysis (search volume, competition, relevance)
    pub keyword_analysis: String,
}

/// A single generated thumbnail image
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Thumbnail {
    /// The prompt variant that produced this image
    pub style: ThumbnailStyle,
    /// PNG-encoded image bytes
    pub png: Vec<u8>,
}

impl Thumbnail {
    /// Create a thumbnail from its style and PNG bytes
    pub fn new(style: ThumbnailStyle, png: Vec<u8>) -> Self {
        Self { style, png }
    }
}

/// The three generated thumbnails, in fixed prompt order
///
/// Order is always Clickbait, Cinematic, Graphic. Constructed only from a
/// fully successful batch; a partially failed batch never yields one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ThumbnailSet([Thumbnail; 3]);

impl ThumbnailSet {
    /// Assemble a set from one thumbnail per style, in order
    pub fn new(clickbait: Thumbnail, cinematic: Thumbnail, graphic: Thumbnail) -> Self {
        Self([clickbait, cinematic, graphic])
    }

    /// Iterate the thumbnails in display order
    pub fn iter(&self) -> std::slice::Iter<'_, Thumbnail> {
        self.0.iter()
    }

    /// Thumbnail at `index` (0-2), if in range
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Thumbnail> {
        self.0.get(index)
    }

    /// Number of thumbnails (always 3)
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Never true; present for API symmetry
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }
}

impl<'a> IntoIterator for &'a ThumbnailSet {
    type Item = &'a Thumbnail;
    type IntoIter = std::slice::Iter<'a, Thumbnail>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// A validated, non-blank video topic
///
/// Trims surrounding whitespace on parse; a blank or whitespace-only input
/// is rejected before any provider contact.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Topic(String);

impl Topic {
    /// Parse a raw input string into a topic
    ///
    /// # Errors
    ///
    /// Returns [`BlankTopic`] if the trimmed input is empty.
    pub fn parse(raw: &str) -> Result<Self, BlankTopic> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            Err(BlankTopic)
        } else {
            Ok(Self(trimmed.to_string()))
        }
    }

    /// The topic text
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Topic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Sanitize a topic for use in a filename
///
/// Whitespace runs collapse to single hyphens; path separators are replaced.
#[must_use]
pub fn sanitize_topic(topic: &str) -> String {
    topic
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
        .replace(['/', '\\'], "-")
}

/// Download filename for thumbnail `index` (0-based) of `topic`
///
/// Matches the `thumbnail-<sanitized-topic>-<n>.png` naming scheme, with a
/// 1-based index in the name.
#[must_use]
pub fn download_filename(topic: &str, index: usize) -> String {
    format!("thumbnail-{}-{}.png", sanitize_topic(topic), index + 1)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn topic_trims_and_rejects_blank() {
        assert_eq!(Topic::parse("  sourdough  ").unwrap().as_str(), "sourdough");
        assert_eq!(Topic::parse(""), Err(BlankTopic));
        assert_eq!(Topic::parse("   \t\n"), Err(BlankTopic));
    }

    #[test]
    fn sanitize_collapses_whitespace() {
        assert_eq!(
            sanitize_topic("How to bake  sourdough bread"),
            "How-to-bake-sourdough-bread"
        );
        assert_eq!(sanitize_topic("a/b\\c"), "a-b-c");
    }

    #[test]
    fn download_filename_is_one_based() {
        assert_eq!(
            download_filename("rust async tips", 0),
            "thumbnail-rust-async-tips-1.png"
        );
        assert_eq!(
            download_filename("rust async tips", 2),
            "thumbnail-rust-async-tips-3.png"
        );
    }

    #[test]
    fn thumbnail_set_keeps_style_order() {
        let set = ThumbnailSet::new(
            Thumbnail::new(ThumbnailStyle::Clickbait, vec![1]),
            Thumbnail::new(ThumbnailStyle::Cinematic, vec![2]),
            Thumbnail::new(ThumbnailStyle::Graphic, vec![3]),
        );
        let styles: Vec<_> = set.iter().map(|t| t.style).collect();
        assert_eq!(
            styles,
            vec![
                ThumbnailStyle::Clickbait,
                ThumbnailStyle::Cinematic,
                ThumbnailStyle::Graphic
            ]
        );
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn video_content_requires_all_fields() {
        let missing_score = serde_json::json!({
            "titles": ["a", "b", "c"],
            "description": "d #tag",
            "tags": ["t1"],
            "scoreJustification": "fine",
            "keywordAnalysis": "ok",
        });
        assert!(serde_json::from_value::<VideoContent>(missing_score).is_err());

        let complete = serde_json::json!({
            "titles": ["a", "b", "c"],
            "description": "d #tag",
            "tags": ["t1"],
            "seoScore": 82,
            "scoreJustification": "fine",
            "keywordAnalysis": "ok",
        });
        let content: VideoContent = serde_json::from_value(complete).unwrap();
        assert_eq!(content.seo_score, 82);
        assert_eq!(content.titles.len(), 3);
    }
}
