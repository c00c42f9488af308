use artisan_blocks_engine::render::VideoPlayer;
use dioxus::prelude::*;

#[component]
pub fn Video(player: VideoPlayer, caption: Option<String>) -> Element {
    rsx! {
        figure {
            class: "block-video",
            match player {
                VideoPlayer::Embed { video_id, src } => rsx! {
                    div {
                        class: "video-embed",
                        iframe {
                            src: "{src}",
                            title: "YouTube video {video_id}",
                            allow: "accelerometer; encrypted-media; picture-in-picture",
                            "allowfullscreen": "true",
                        }
                    }
                },
                VideoPlayer::Native { src, poster } => rsx! {
                    video {
                        class: "video-native",
                        controls: true,
                        src: "{src}",
                        poster: poster,
                    }
                },
            }
            if let Some(caption) = caption {
                figcaption { "{caption}" }
            }
        }
    }
}
