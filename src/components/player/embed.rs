// Embed boundary: the only place a media reference reaches the third-party widget.

use crate::catalog::Video;
use crate::utils::append_query;
use dioxus::prelude::*;

const EMBED_ALLOW: &str =
    "accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture";

/// Media reference with the fixed playback parameters appended.
pub fn embed_src(video: &Video, muted: bool) -> String {
    let mute = if muted { "1" } else { "0" };
    append_query(&video.media_url, &[("autoplay", "1"), ("mute", mute)])
}

#[component]
pub fn VideoEmbed(video: Video, muted: bool) -> Element {
    let src = embed_src(&video, muted);

    rsx! {
        iframe {
            class: "player-embed",
            title: "{video.title}",
            src: "{src}",
            allow: EMBED_ALLOW,
            allowfullscreen: true,
        }
    }
}
