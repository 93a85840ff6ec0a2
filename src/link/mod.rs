use regex::Regex;
use std::sync::OnceLock;
use tracing::warn;

pub const YOUTUBE_BASE_URL: &str = "http://youtu.be/";
pub const YOUTUBE_ID_LEN: usize = 11;

/// Slots in a basic-tab video list: one YouTube link, two html5 sources.
pub const VIDEO_LIST_SLOTS: usize = 3;
const HTML5_SLOTS: usize = VIDEO_LIST_SLOTS - 1;

fn youtube_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r"^(?:https?://)?(?:www\.|m\.)?(?:youtu\.be/|youtube\.com/(?:embed/|v/|watch\?v=|watch\?.+&v=))([A-Za-z0-9_-]{11})(?:[?&#].*)?$",
        )
        .expect("valid regex")
    })
}

fn html5_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^(?:\S*/)?([^/\s]+)\.(?i:(mp4|webm|ogv))(?:[?#]\S*)?$").expect("valid regex")
    })
}

fn youtube_id_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[A-Za-z0-9_-]{11}$").expect("valid regex"))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Link {
    Youtube { id: String },
    Html5 { video: String, format: String },
    Incorrect,
}

impl Link {
    pub fn is_youtube(&self) -> bool {
        matches!(self, Self::Youtube { .. })
    }
}

pub fn is_youtube_id(s: &str) -> bool {
    youtube_id_regex().is_match(s)
}

pub fn parse_link(url: &str) -> Link {
    let url = url.trim();
    if let Some(caps) = youtube_regex().captures(url) {
        return Link::Youtube {
            id: caps[1].to_string(),
        };
    }
    if let Some(caps) = html5_regex().captures(url) {
        return Link::Html5 {
            video: caps[1].to_string(),
            format: caps[2].to_ascii_lowercase(),
        };
    }
    Link::Incorrect
}

pub fn youtube_link(id: &str) -> String {
    LinkCodec::default().encode(id)
}

/// Encodes YouTube ids as links under a base URL and decodes them back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkCodec {
    base_url: String,
}

impl Default for LinkCodec {
    fn default() -> Self {
        Self::new(YOUTUBE_BASE_URL)
    }
}

impl LinkCodec {
    pub fn new(base_url: &str) -> Self {
        let mut base_url = base_url.to_string();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        Self { base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn encode(&self, id: &str) -> String {
        format!("{}{id}", self.base_url)
    }

    /// The id behind a YouTube link, or `None` when `url` is not one.
    ///
    /// Anything eleven characters long under the codec's own base URL is an
    /// id, so every link `encode` builds decodes back.
    pub fn decode(&self, url: &str) -> Option<String> {
        if let Some(id) = url.strip_prefix(self.base_url.as_str()) {
            if id.chars().count() == YOUTUBE_ID_LEN {
                return Some(id.to_string());
            }
        }
        match parse_link(url) {
            Link::Youtube { id } => Some(id),
            Link::Html5 { .. } | Link::Incorrect => None,
        }
    }

    /// Build the three-slot video list. Slot 0 stays empty unless `youtube_id`
    /// is exactly eleven characters long; missing sources become empty slots.
    pub fn compose_video_list(
        &self,
        youtube_id: Option<&str>,
        html5_sources: &[String],
    ) -> Vec<String> {
        let youtube = match youtube_id {
            Some(id) if id.chars().count() == YOUTUBE_ID_LEN => self.encode(id),
            _ => String::new(),
        };
        let mut list = Vec::with_capacity(VIDEO_LIST_SLOTS);
        list.push(youtube);
        for i in 0..HTML5_SLOTS {
            list.push(html5_sources.get(i).cloned().unwrap_or_default());
        }
        list
    }

    /// Split a video list into its YouTube id and html5 sources.
    ///
    /// The first entry that decodes as a YouTube link supplies the id; the
    /// other non-blank entries are kept verbatim as sources, at most two.
    pub fn split_video_list(&self, list: &[String]) -> VideoSources {
        let mut youtube_id = None;
        let mut html5_sources = Vec::with_capacity(HTML5_SLOTS);
        for entry in list.iter().filter(|e| !e.trim().is_empty()) {
            match self.decode(entry) {
                Some(id) => {
                    if youtube_id.is_none() {
                        youtube_id = Some(id);
                    }
                }
                None if html5_sources.len() < HTML5_SLOTS => html5_sources.push(entry.clone()),
                None => warn!(source = %entry, "video list holds more than {HTML5_SLOTS} sources, dropping"),
            }
        }
        VideoSources {
            youtube_id: youtube_id.unwrap_or_default(),
            html5_sources,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VideoSources {
    pub youtube_id: String,
    pub html5_sources: Vec<String>,
}

#[cfg(test)]
mod tests;
