//! Prompt Templates
//!
//! The fixed prompt templates sent to the provider, parameterized only by
//! the submitted topic. Thumbnail prompts come in three hardcoded style
//! variants, and their declaration order here is the display order
//! everywhere else in the system.

use std::fmt;

/// Build the structured-output text prompt for a topic
#[must_use]
pub fn text_prompt(topic: &str) -> String {
    format!(
        "For a YouTube video about \"{topic}\", generate a JSON object with the following structure:\n\
         1. \"titles\": An array of 3 unique, click-worthy, and SEO-optimized titles that are likely to rank high on YouTube search.\n\
         2. \"description\": A detailed, SEO-friendly description for the video, including relevant keywords and 3-5 hashtags at the end.\n\
         3. \"tags\": An array of 10-15 relevant SEO tags.\n\
         4. \"seoScore\": An integer score from 0 to 100 representing the overall SEO potential of the generated content.\n\
         5. \"scoreJustification\": A brief, 1-2 sentence explanation for the given SEO score.\n\
         6. \"keywordAnalysis\": A short analysis of the main keywords, simulating insights from SEO tools, focusing on search volume, competition, and relevance."
    )
}

/// The three fixed thumbnail prompt variants
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ThumbnailStyle {
    /// High-contrast, vibrant, attention-grabbing
    Clickbait,
    /// Minimalist, professional, cinematic
    Cinematic,
    /// Icon-and-text graphic with clear visual hierarchy
    Graphic,
}

impl ThumbnailStyle {
    /// All styles in fixed display order
    pub const ALL: [ThumbnailStyle; 3] = [
        ThumbnailStyle::Clickbait,
        ThumbnailStyle::Cinematic,
        ThumbnailStyle::Graphic,
    ];

    /// Build the image-generation prompt for this style and topic
    #[must_use]
    pub fn prompt(self, topic: &str) -> String {
        match self {
            ThumbnailStyle::Clickbait => format!(
                "A visually stunning and clickbait YouTube thumbnail for a video about \
                 \"{topic}\". High contrast, vibrant colors, clear subject, and engaging text."
            ),
            ThumbnailStyle::Cinematic => format!(
                "An aesthetic and cinematic YouTube thumbnail for a video about \"{topic}\". \
                 Minimalist design, professional typography, high-quality imagery."
            ),
            ThumbnailStyle::Graphic => format!(
                "An engaging and informative graphic-style YouTube thumbnail for a video about \
                 \"{topic}\". Use icons, bold text overlays, and a clear visual hierarchy to \
                 convey the video's content."
            ),
        }
    }

    /// Short human-readable label
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            ThumbnailStyle::Clickbait => "Clickbait",
            ThumbnailStyle::Cinematic => "Cinematic",
            ThumbnailStyle::Graphic => "Graphic",
        }
    }
}

impl fmt::Display for ThumbnailStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
