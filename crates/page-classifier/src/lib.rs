use url::Url;

use vidveil_core_types::PageType;

/// Normalizes a URL into the canonical page-path identifier used as a
/// bookmark key.
///
/// The identifier is the URL's path with any trailing slash stripped (the
/// root stays `/`). Query and fragment are dropped, with one exception:
/// a watch page keeps its video id, so `/watch?v=abc&t=42` becomes
/// `/watch/abc` and bookmarks survive playlist and timestamp parameters.
/// Input that does not parse as a URL is returned trimmed as-is.
pub fn parse(raw: &str) -> String {
    let parsed = match Url::parse(raw.trim()) {
        Ok(parsed) => parsed,
        Err(_) => return raw.trim().to_string(),
    };

    let path = normalize_path(parsed.path());
    if path == "/watch" {
        if let Some(video_id) = parsed
            .query_pairs()
            .find(|(key, _)| key == "v")
            .map(|(_, value)| value.into_owned())
        {
            return format!("/watch/{video_id}");
        }
    }
    path
}

fn normalize_path(path: &str) -> String {
    if path.is_empty() {
        return "/".to_string();
    }
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else {
        trimmed.to_string()
    }
}

/// True if the normalized path is a channel page, including its tab
/// sub-paths (`/@handle/videos`, `/channel/<id>/about`, ...).
pub fn is_channel_page(path: &str) -> bool {
    path.starts_with("/@")
        || path.starts_with("/channel/")
        || path.starts_with("/c/")
        || path.starts_with("/user/")
}

pub fn is_home_page(path: &str) -> bool {
    path == "/"
}

pub fn is_explore_page(path: &str) -> bool {
    // /feed/trending is the pre-redesign name for the explore feed.
    path == "/feed/explore" || path == "/feed/trending"
}

pub fn is_library_page(path: &str) -> bool {
    path == "/feed/library"
}

pub fn is_history_page(path: &str) -> bool {
    path == "/feed/history"
}

pub fn is_subscriptions_page(path: &str) -> bool {
    path == "/feed/subscriptions"
}

fn predicate_for(page_type: PageType) -> fn(&str) -> bool {
    match page_type {
        PageType::Channel => is_channel_page,
        PageType::Home => is_home_page,
        PageType::Explore => is_explore_page,
        PageType::Library => is_library_page,
        PageType::History => is_history_page,
        PageType::Subscriptions => is_subscriptions_page,
    }
}

/// Classifies a normalized path into at most one page type.
///
/// Invariant: the six predicates are mutually exclusive. Debug builds check
/// this over every call; release builds resolve a (never expected) overlap
/// deterministically in favor of the first match in `PageType::ALL` order.
pub fn classify(path: &str) -> Option<PageType> {
    let mut matched = None;
    let mut count = 0usize;
    for page_type in PageType::ALL {
        if predicate_for(page_type)(path) {
            count += 1;
            if matched.is_none() {
                matched = Some(page_type);
            }
        }
    }
    debug_assert!(
        count <= 1,
        "page-type predicates overlap for path {path:?}: {count} matches"
    );
    matched
}
