//! Studio integration tests
//!
//! Drive the Studio through surface events with fake providers and verify
//! the state machine: validation short-circuits, fixed thumbnail ordering,
//! fail-fast joins with no partial results, interstitial timing, and
//! clearing of prior results on re-submission.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use pretty_assertions::assert_eq;
use tokio::sync::mpsc;

use tubesmith_core::{
    ImageGenerator, ProviderError, Studio, StudioConfig, StudioMessage, StudioPhase, SurfaceEvent,
    TextGenerator, ThumbnailStyle, Topic, VideoContent,
};

fn sample_content() -> VideoContent {
    serde_json::from_value(serde_json::json!({
        "titles": ["Title One", "Title Two", "Title Three"],
        "description": "A great video. #rust #async",
        "tags": ["rust", "async", "tokio"],
        "seoScore": 85,
        "scoreJustification": "Strong keywords.",
        "keywordAnalysis": "High volume, low competition.",
    }))
    .unwrap()
}

/// Text provider that succeeds and counts calls
struct FakeText {
    calls: Arc<AtomicUsize>,
    fail: bool,
}

impl FakeText {
    fn ok(calls: Arc<AtomicUsize>) -> Self {
        Self { calls, fail: false }
    }

    fn failing(calls: Arc<AtomicUsize>) -> Self {
        Self { calls, fail: true }
    }
}

#[async_trait]
impl TextGenerator for FakeText {
    async fn generate_content(&self, _topic: &Topic) -> Result<VideoContent, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            Err(ProviderError::MalformedResponse("boom".to_string()))
        } else {
            Ok(sample_content())
        }
    }
}

/// Image provider that echoes the prompt into the PNG bytes, optionally
/// failing for prompts containing a marker string
struct FakeImages {
    calls: Arc<AtomicUsize>,
    fail_on: Option<&'static str>,
}

impl FakeImages {
    fn ok(calls: Arc<AtomicUsize>) -> Self {
        Self {
            calls,
            fail_on: None,
        }
    }

    fn failing_on(calls: Arc<AtomicUsize>, marker: &'static str) -> Self {
        Self {
            calls,
            fail_on: Some(marker),
        }
    }
}

#[async_trait]
impl ImageGenerator for FakeImages {
    async fn generate_thumbnail(&self, prompt: &str) -> Result<Vec<u8>, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(marker) = self.fail_on {
            if prompt.contains(marker) {
                return Err(ProviderError::NoImage);
            }
        }
        Ok(prompt.as_bytes().to_vec())
    }
}

type TestStudio = Studio<FakeText, FakeImages>;

fn studio_with(
    text: FakeText,
    images: FakeImages,
) -> (TestStudio, mpsc::Receiver<StudioMessage>) {
    let (tx, rx) = mpsc::channel(64);
    let config = StudioConfig::new("test-key");
    (Studio::new(text, images, config, tx), rx)
}

/// Poll until the studio leaves `phase` or the iteration budget runs out
async fn poll_until_leaves(studio: &mut TestStudio, phase: StudioPhase) {
    for _ in 0..10_000 {
        studio.poll_generation().await;
        if studio.phase() != phase {
            return;
        }
        tokio::task::yield_now().await;
    }
    panic!("studio never left {phase:?}");
}

fn drain(rx: &mut mpsc::Receiver<StudioMessage>) -> Vec<StudioMessage> {
    let mut messages = Vec::new();
    while let Ok(msg) = rx.try_recv() {
        messages.push(msg);
    }
    messages
}

#[tokio::test]
async fn blank_topic_never_reaches_provider() {
    let text_calls = Arc::new(AtomicUsize::new(0));
    let image_calls = Arc::new(AtomicUsize::new(0));
    let (mut studio, mut rx) = studio_with(
        FakeText::ok(Arc::clone(&text_calls)),
        FakeImages::ok(Arc::clone(&image_calls)),
    );

    for input in ["", "   ", "\t\n  "] {
        studio
            .handle_event(SurfaceEvent::TopicSubmitted {
                topic: input.to_string(),
            })
            .await;
    }

    assert_eq!(studio.phase(), StudioPhase::Idle);
    assert_eq!(text_calls.load(Ordering::SeqCst), 0);
    assert_eq!(image_calls.load(Ordering::SeqCst), 0);

    let messages = drain(&mut rx);
    assert_eq!(messages.len(), 3);
    for msg in messages {
        match msg {
            StudioMessage::ValidationFailed { message } => {
                assert_eq!(message, "Please enter a video topic.");
            }
            other => panic!("unexpected message: {other:?}"),
        }
    }
}

#[tokio::test(start_paused = true)]
async fn successful_batch_yields_full_result_in_style_order() {
    let text_calls = Arc::new(AtomicUsize::new(0));
    let image_calls = Arc::new(AtomicUsize::new(0));
    let (mut studio, mut rx) = studio_with(
        FakeText::ok(Arc::clone(&text_calls)),
        FakeImages::ok(Arc::clone(&image_calls)),
    );

    studio
        .handle_event(SurfaceEvent::TopicSubmitted {
            topic: "  rust async tips ".to_string(),
        })
        .await;
    assert_eq!(studio.phase(), StudioPhase::Loading);

    poll_until_leaves(&mut studio, StudioPhase::Loading).await;
    assert_eq!(studio.phase(), StudioPhase::Interstitial);
    assert_eq!(text_calls.load(Ordering::SeqCst), 1);
    assert_eq!(image_calls.load(Ordering::SeqCst), 3);

    let content = studio.content().expect("content present");
    assert_eq!(content.titles.len(), 3);
    assert_eq!(content.seo_score, 85);

    let thumbnails = studio.thumbnails().expect("thumbnails present");
    let styles: Vec<_> = thumbnails.iter().map(|t| t.style).collect();
    assert_eq!(
        styles,
        vec![
            ThumbnailStyle::Clickbait,
            ThumbnailStyle::Cinematic,
            ThumbnailStyle::Graphic
        ]
    );
    // Each PNG came from its own style's prompt (topic trimmed)
    for thumbnail in thumbnails {
        let prompt = String::from_utf8(thumbnail.png.clone()).unwrap();
        assert_eq!(prompt, thumbnail.style.prompt("rust async tips"));
    }

    let messages = drain(&mut rx);
    assert!(messages
        .iter()
        .any(|m| matches!(m, StudioMessage::ResultsReady { .. })));
}

#[tokio::test(start_paused = true)]
async fn interstitial_promotes_to_displaying_after_pause() {
    let calls = Arc::new(AtomicUsize::new(0));
    let (mut studio, _rx) = studio_with(
        FakeText::ok(Arc::clone(&calls)),
        FakeImages::ok(Arc::clone(&calls)),
    );

    studio
        .handle_event(SurfaceEvent::TopicSubmitted {
            topic: "gardening".to_string(),
        })
        .await;
    poll_until_leaves(&mut studio, StudioPhase::Loading).await;
    assert_eq!(studio.phase(), StudioPhase::Interstitial);

    // Not yet: one millisecond short of the pause
    tokio::time::advance(std::time::Duration::from_millis(2499)).await;
    studio.poll_generation().await;
    assert_eq!(studio.phase(), StudioPhase::Interstitial);

    tokio::time::advance(std::time::Duration::from_millis(1)).await;
    studio.poll_generation().await;
    assert_eq!(studio.phase(), StudioPhase::Displaying);
}

#[tokio::test(start_paused = true)]
async fn text_failure_fails_batch_without_partials() {
    let text_calls = Arc::new(AtomicUsize::new(0));
    let image_calls = Arc::new(AtomicUsize::new(0));
    let (mut studio, mut rx) = studio_with(
        FakeText::failing(Arc::clone(&text_calls)),
        FakeImages::ok(Arc::clone(&image_calls)),
    );

    studio
        .handle_event(SurfaceEvent::TopicSubmitted {
            topic: "cooking".to_string(),
        })
        .await;
    poll_until_leaves(&mut studio, StudioPhase::Loading).await;

    assert_eq!(studio.phase(), StudioPhase::Failed);
    assert!(studio.content().is_none());
    assert!(studio.thumbnails().is_none());
    assert_eq!(
        studio.error(),
        Some("Failed to generate text content. Please try again.")
    );

    let messages = drain(&mut rx);
    assert!(!messages
        .iter()
        .any(|m| matches!(m, StudioMessage::ResultsReady { .. })));
}

#[tokio::test(start_paused = true)]
async fn image_failure_discards_sibling_successes() {
    let text_calls = Arc::new(AtomicUsize::new(0));
    let image_calls = Arc::new(AtomicUsize::new(0));
    // The cinematic prompt fails; clickbait/graphic and the text call may
    // have succeeded, but nothing of them is surfaced.
    let (mut studio, _rx) = studio_with(
        FakeText::ok(Arc::clone(&text_calls)),
        FakeImages::failing_on(Arc::clone(&image_calls), "cinematic"),
    );

    studio
        .handle_event(SurfaceEvent::TopicSubmitted {
            topic: "woodworking".to_string(),
        })
        .await;
    poll_until_leaves(&mut studio, StudioPhase::Loading).await;

    assert_eq!(studio.phase(), StudioPhase::Failed);
    assert!(studio.content().is_none());
    assert!(studio.thumbnails().is_none());
    assert_eq!(
        studio.error(),
        Some("Failed to generate thumbnail image. Please try again.")
    );
}

#[tokio::test(start_paused = true)]
async fn resubmission_clears_prior_failure() {
    let calls = Arc::new(AtomicUsize::new(0));
    let (mut studio, _rx) = studio_with(
        FakeText::ok(Arc::clone(&calls)),
        FakeImages::failing_on(Arc::clone(&calls), "clickbait"),
    );

    studio
        .handle_event(SurfaceEvent::TopicSubmitted {
            topic: "first try".to_string(),
        })
        .await;
    poll_until_leaves(&mut studio, StudioPhase::Loading).await;
    assert_eq!(studio.phase(), StudioPhase::Failed);
    assert!(studio.error().is_some());

    studio
        .handle_event(SurfaceEvent::TopicSubmitted {
            topic: "second try".to_string(),
        })
        .await;
    assert_eq!(studio.phase(), StudioPhase::Loading);
    assert!(studio.error().is_none());
    assert!(studio.content().is_none());
    assert!(studio.thumbnails().is_none());
}

#[tokio::test(start_paused = true)]
async fn resubmission_after_displaying_clears_prior_result() {
    let calls = Arc::new(AtomicUsize::new(0));
    let (mut studio, _rx) = studio_with(
        FakeText::ok(Arc::clone(&calls)),
        FakeImages::ok(Arc::clone(&calls)),
    );

    studio
        .handle_event(SurfaceEvent::TopicSubmitted {
            topic: "alpha".to_string(),
        })
        .await;
    poll_until_leaves(&mut studio, StudioPhase::Loading).await;
    tokio::time::advance(std::time::Duration::from_millis(2500)).await;
    studio.poll_generation().await;
    assert_eq!(studio.phase(), StudioPhase::Displaying);
    assert!(studio.content().is_some());

    studio
        .handle_event(SurfaceEvent::TopicSubmitted {
            topic: "beta".to_string(),
        })
        .await;
    assert_eq!(studio.phase(), StudioPhase::Loading);
    assert!(studio.content().is_none());
    assert!(studio.thumbnails().is_none());
    assert_eq!(studio.topic().unwrap().as_str(), "beta");
}

#[tokio::test(start_paused = true)]
async fn submissions_while_loading_are_ignored() {
    let text_calls = Arc::new(AtomicUsize::new(0));
    let image_calls = Arc::new(AtomicUsize::new(0));
    let (mut studio, _rx) = studio_with(
        FakeText::ok(Arc::clone(&text_calls)),
        FakeImages::ok(Arc::clone(&image_calls)),
    );

    studio
        .handle_event(SurfaceEvent::TopicSubmitted {
            topic: "one".to_string(),
        })
        .await;
    assert_eq!(studio.phase(), StudioPhase::Loading);

    studio
        .handle_event(SurfaceEvent::TopicSubmitted {
            topic: "two".to_string(),
        })
        .await;
    assert_eq!(studio.topic().unwrap().as_str(), "one");

    poll_until_leaves(&mut studio, StudioPhase::Loading).await;
    assert_eq!(text_calls.load(Ordering::SeqCst), 1);
    assert_eq!(image_calls.load(Ordering::SeqCst), 3);
}
