use regex::Regex;
use std::sync::OnceLock;

use crate::schema::VideoData;

pub const YOUTUBE: &str = "youtube";

/// How a video block is played back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VideoPlayer {
    /// Hosted player in an iframe
    Embed { video_id: String, src: String },
    /// Native `<video>` element
    Native { src: String, poster: Option<String> },
}

/// Pull the video id out of the usual YouTube url shapes
/// (`watch?v=`, `youtu.be/`, `embed/`, `shorts/`).
pub fn youtube_video_id(url: &str) -> Option<String> {
    static YOUTUBE_REGEX: OnceLock<Regex> = OnceLock::new();
    let regex = YOUTUBE_REGEX.get_or_init(|| {
        Regex::new(
            r"(?:youtube(?:-nocookie)?\.com/(?:watch\?(?:[^#\s]*&)?v=|embed/|shorts/)|youtu\.be/)([A-Za-z0-9_-]{11})",
        )
        .expect("Invalid YouTube regex")
    });

    regex
        .captures(url)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

pub fn youtube_embed_url(video_id: &str) -> String {
    format!("https://www.youtube.com/embed/{video_id}")
}

fn is_youtube(provider: Option<&str>) -> bool {
    provider.is_some_and(|p| p.eq_ignore_ascii_case(YOUTUBE))
}

/// Choose the player for a video block. Only the `youtube` provider gets
/// the hosted player, and only when an id is known or can be read from the
/// url; everything else falls back to the native element.
pub fn resolve_player(video: &VideoData) -> VideoPlayer {
    if is_youtube(video.provider.as_deref()) {
        let video_id = video
            .video_id
            .clone()
            .filter(|id| !id.is_empty())
            .or_else(|| youtube_video_id(&video.url));

        if let Some(video_id) = video_id {
            let src = youtube_embed_url(&video_id);
            return VideoPlayer::Embed { video_id, src };
        }
    }

    VideoPlayer::Native {
        src: video.url.clone(),
        poster: video.poster.clone().filter(|p| !p.is_empty()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("https://www.youtube.com/watch?v=dQw4w9WgXcQ")]
    #[case("https://youtube.com/watch?feature=share&v=dQw4w9WgXcQ")]
    #[case("https://youtu.be/dQw4w9WgXcQ?t=42")]
    #[case("https://www.youtube.com/embed/dQw4w9WgXcQ")]
    #[case("https://www.youtube.com/shorts/dQw4w9WgXcQ")]
    #[case("https://www.youtube-nocookie.com/embed/dQw4w9WgXcQ")]
    fn test_youtube_id_extraction(#[case] url: &str) {
        assert_eq!(youtube_video_id(url), Some("dQw4w9WgXcQ".to_string()));
    }

    #[rstest]
    #[case("https://vimeo.com/123456789")]
    #[case("https://cdn.example.com/clip.mp4")]
    #[case("")]
    fn test_non_youtube_urls_have_no_id(#[case] url: &str) {
        assert_eq!(youtube_video_id(url), None);
    }

    #[test]
    fn test_youtube_provider_with_explicit_id() {
        let video = VideoData {
            url: "ignored".to_string(),
            provider: Some("youtube".to_string()),
            video_id: Some("abcdefghijk".to_string()),
            ..Default::default()
        };
        assert_eq!(
            resolve_player(&video),
            VideoPlayer::Embed {
                video_id: "abcdefghijk".to_string(),
                src: "https://www.youtube.com/embed/abcdefghijk".to_string(),
            }
        );
    }

    #[test]
    fn test_provider_match_ignores_case() {
        let video = VideoData {
            url: "https://youtu.be/dQw4w9WgXcQ".to_string(),
            provider: Some("YouTube".to_string()),
            ..Default::default()
        };
        assert!(matches!(resolve_player(&video), VideoPlayer::Embed { .. }));
    }

    #[test]
    fn test_youtube_url_without_provider_plays_natively() {
        // The provider field alone decides the player
        let video = VideoData {
            url: "https://youtu.be/dQw4w9WgXcQ".to_string(),
            ..Default::default()
        };
        assert!(matches!(resolve_player(&video), VideoPlayer::Native { .. }));
    }

    #[test]
    fn test_youtube_provider_without_any_id_falls_back() {
        let video = VideoData {
            url: "https://example.com/v.mp4".to_string(),
            provider: Some("youtube".to_string()),
            poster: Some("poster.jpg".to_string()),
            ..Default::default()
        };
        assert_eq!(
            resolve_player(&video),
            VideoPlayer::Native {
                src: "https://example.com/v.mp4".to_string(),
                poster: Some("poster.jpg".to_string()),
            }
        );
    }
}
