// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Category icon registry.
//!
//! Categories persist their icon as a name string. Resolution happens here,
//! at compile time, through an explicit enum - not a by-name module lookup -
//! so an unknown or misspelled name degrades to [`CategoryIcon::Fallback`]
//! instead of failing at render time.

/// The icons a category can display.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum CategoryIcon {
    Globe,
    Code,
    Book,
    Tool,
    Media,
    Chat,
    Folder,
    Star,
    /// Shown for any unrecognized icon name.
    #[default]
    Fallback,
}

impl CategoryIcon {
    /// Resolve a persisted icon name, case-insensitively. Unknown names map
    /// to [`CategoryIcon::Fallback`], never an error.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "globe" => CategoryIcon::Globe,
            "code" => CategoryIcon::Code,
            "book" => CategoryIcon::Book,
            "tool" => CategoryIcon::Tool,
            "media" => CategoryIcon::Media,
            "chat" => CategoryIcon::Chat,
            "folder" => CategoryIcon::Folder,
            "star" => CategoryIcon::Star,
            _ => CategoryIcon::Fallback,
        }
    }

    /// Canonical persisted name.
    pub fn name(self) -> &'static str {
        match self {
            CategoryIcon::Globe => "globe",
            CategoryIcon::Code => "code",
            CategoryIcon::Book => "book",
            CategoryIcon::Tool => "tool",
            CategoryIcon::Media => "media",
            CategoryIcon::Chat => "chat",
            CategoryIcon::Folder => "folder",
            CategoryIcon::Star => "star",
            CategoryIcon::Fallback => "folder",
        }
    }

    /// Terminal glyph for CLI listings.
    pub fn glyph(self) -> &'static str {
        match self {
            CategoryIcon::Globe => "🌐",
            CategoryIcon::Code => "⌨",
            CategoryIcon::Book => "📖",
            CategoryIcon::Tool => "🔧",
            CategoryIcon::Media => "🎬",
            CategoryIcon::Chat => "💬",
            CategoryIcon::Folder => "📁",
            CategoryIcon::Star => "★",
            CategoryIcon::Fallback => "📁",
        }
    }
}
