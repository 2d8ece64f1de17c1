//! Clip section of a card: embedded player or upload placeholder

use crate::markup::{el, Element};
use crate::BugRecord;
use regex::Regex;
use std::sync::OnceLock;

/// Link text used when a record has neither a clip nor `video_text`
pub const DEFAULT_VIDEO_TEXT: &str = "Add YouTube link here";

const PLAYER_PERMISSIONS: &str =
    "accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture";

/// A watch-link pattern whose first capture is the video id
struct VideoHost {
    watch_link: Regex,
    embed_prefix: &'static str,
}

fn video_hosts() -> &'static [VideoHost] {
    static HOSTS: OnceLock<Vec<VideoHost>> = OnceLock::new();
    HOSTS.get_or_init(|| {
        vec![
            VideoHost {
                watch_link: Regex::new(r"youtube\.com/watch\?v=([^&]*)").unwrap(),
                embed_prefix: "https://www.youtube.com/embed/",
            },
            VideoHost {
                watch_link: Regex::new(r"youtu\.be/([^?]*)").unwrap(),
                embed_prefix: "https://www.youtube.com/embed/",
            },
        ]
    })
}

/// Rewrite a known watch link to its embeddable form; anything else passes through
pub fn embed_url(url: &str) -> String {
    for host in video_hosts() {
        if let Some(caps) = host.watch_link.captures(url) {
            return format!("{}{}", host.embed_prefix, &caps[1]);
        }
    }
    url.to_string()
}

/// Player iframe when the record has a clip, otherwise a placeholder
pub fn render_clip(record: &BugRecord) -> Element {
    let url = record.video_url.as_deref().map(str::trim).unwrap_or("");
    if url.is_empty() {
        return placeholder(record);
    }
    el("div").class("video-wrapper").child(
        el("iframe")
            .attr("src", embed_url(url))
            .attr("title", format!("Bug clip #{}", record.id))
            .attr("frameborder", "0")
            .attr("allow", PLAYER_PERMISSIONS)
            .flag("allowfullscreen"),
    )
}

fn placeholder(record: &BugRecord) -> Element {
    let text = record
        .video_text
        .as_deref()
        .unwrap_or(DEFAULT_VIDEO_TEXT);
    el("div")
        .class("video-placeholder")
        .child(el("div").class("video-icon").raw("&#9654;"))
        .child(el("span").text("Clip pending upload"))
        .child(
            el("a")
                .attr("href", "https://youtube.com")
                .attr("target", "_blank")
                .attr("rel", "noopener")
                .text(text),
        )
}
