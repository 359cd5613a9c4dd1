//! Fixed user-facing copy shared by every frontend.

pub const TITLE: &str = "AItrendmaster Prompt Generator";

pub const HOW_TO_USE: &[&str] = &[
    "Optionally type a custom idea below",
    "Select dropdown values",
    "Click \"Generate Prompt\" then \"Copy Prompt\"",
];

pub const TIP: &str = "Tip: Combine cinematic and glitch styles for unique visuals.";

pub const FREE_TEXT_PLACEHOLDER: &str = "Enter your own base prompt (optional)";

pub const UPGRADE_HEADLINE: &str = "Want full access?";
pub const UPGRADE_BODY: &str =
    "Unlock Pro for a one-time $7.99 and get all categories, updates & features for life.";

pub const LOCKED_CATEGORY: &str = "Pro users only";

pub const UNLOCK_DIALOG_TITLE: &str = "Unlock Pro";
pub const UNLOCK_DIALOG_PROMPT: &str = "Enter your Pro access code from Gumroad:";

pub const UNLOCK_SUCCESS: &str =
    "Pro Unlocked! You now have full access to all categories and features.";

pub const COPIED: &str = "Prompt copied to clipboard!";

/// Placeholder entry shown at the top of a selector.
pub fn select_placeholder(label: &str) -> String {
    format!("Select {label}")
}
