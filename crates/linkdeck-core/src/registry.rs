//! Static navigation registry
//!
//! Two disjoint ordered lists of destinations: the primary Web3 section tabs
//! and the secondary AI Studio tools. Defined once at startup, immutable,
//! with pure lookup helpers. A lookup miss returns `None`, never an error.

use crate::types::NavContext;

/// Sentinel tab id used to highlight the studio trigger while the studio
/// menu is open or a studio destination is resolved. Deliberately not an id
/// of any registry entry.
pub const STUDIO_TAB_ID: &str = "studio";

/// Visual accent assigned to a destination, mapped to a terminal color by
/// the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accent {
    Cyan,
    Blue,
    Green,
    Yellow,
    Magenta,
    Red,
}

/// A single navigation destination.
///
/// `id` is unique within its list; the two lists' id-spaces are independent.
/// `route` is unique across both lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavEntry {
    pub id: &'static str,
    pub label: &'static str,
    pub route: &'static str,
    pub icon: &'static str,
    pub accent: Accent,
    pub is_new: bool,
}

/// Primary destinations: the persistent Web3 section tabs, in display order.
pub const PRIMARY_ENTRIES: &[NavEntry] = &[
    NavEntry {
        id: "build",
        label: "Build",
        route: "/profile-builder-dashboard",
        icon: "⌂",
        accent: Accent::Cyan,
        is_new: false,
    },
    NavEntry {
        id: "manage",
        label: "Manage",
        route: "/link-content-management",
        icon: "≡",
        accent: Accent::Blue,
        is_new: false,
    },
    NavEntry {
        id: "payments",
        label: "Payments",
        route: "/crypto-payment-setup",
        icon: "◈",
        accent: Accent::Green,
        is_new: false,
    },
    NavEntry {
        id: "leads",
        label: "Leads",
        route: "/lead-generation-hub",
        icon: "◎",
        accent: Accent::Yellow,
        is_new: false,
    },
    NavEntry {
        id: "analytics",
        label: "Analytics",
        route: "/analytics-performance-dashboard",
        icon: "∿",
        accent: Accent::Magenta,
        is_new: false,
    },
];

/// Secondary destinations: the AI Studio tools, in display order.
pub const SECONDARY_ENTRIES: &[NavEntry] = &[
    NavEntry {
        id: "text-to-image",
        label: "Text to Image",
        route: "/ai-text-to-image-generator",
        icon: "▣",
        accent: Accent::Cyan,
        is_new: false,
    },
    NavEntry {
        id: "image-to-image",
        label: "Image to Image",
        route: "/ai-image-to-image-transformer",
        icon: "⇄",
        accent: Accent::Blue,
        is_new: false,
    },
    NavEntry {
        id: "image-to-video",
        label: "Image to Video",
        route: "/ai-image-to-video-creator",
        icon: "▶",
        accent: Accent::Magenta,
        is_new: false,
    },
    NavEntry {
        id: "video-lipsync",
        label: "Video Lipsync",
        route: "/ai-video-to-lipsync-generator",
        icon: "♫",
        accent: Accent::Yellow,
        is_new: true,
    },
    NavEntry {
        id: "text-to-audio",
        label: "Text to Audio",
        route: "/ai-text-to-audio-generator",
        icon: "♪",
        accent: Accent::Green,
        is_new: false,
    },
    NavEntry {
        id: "image-upscaler",
        label: "Image Upscaler",
        route: "/ai-image-upscaler",
        icon: "⤢",
        accent: Accent::Cyan,
        is_new: false,
    },
    NavEntry {
        id: "image-realism",
        label: "Image Realism",
        route: "/ai-image-realism-model",
        icon: "◉",
        accent: Accent::Red,
        is_new: true,
    },
    NavEntry {
        id: "ai-chat-assistant",
        label: "Chat Assistant",
        route: "/ai-chat-assistant",
        icon: "✉",
        accent: Accent::Blue,
        is_new: false,
    },
];

/// The fallback destination for unmatched routes (including `/`).
pub fn default_entry() -> &'static NavEntry {
    &PRIMARY_ENTRIES[0]
}

/// Look up an entry by route, searching primary entries first, then secondary.
pub fn find_by_route(route: &str) -> Option<&'static NavEntry> {
    PRIMARY_ENTRIES
        .iter()
        .find(|e| e.route == route)
        .or_else(|| SECONDARY_ENTRIES.iter().find(|e| e.route == route))
}

/// Look up an entry by id within a specific context.
pub fn find_by_id(id: &str, context: NavContext) -> Option<&'static NavEntry> {
    let list = match context {
        NavContext::Primary => PRIMARY_ENTRIES,
        NavContext::Secondary => SECONDARY_ENTRIES,
    };
    list.iter().find(|e| e.id == id)
}
