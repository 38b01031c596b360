//! Centralized icon glyph definitions.
//!
//! Glyph theme is configured in `config.rs` via `ICON_THEME`. This module
//! maps semantic icon names to the selected theme's glyphs, and maps the
//! registry's icon ids (see [`crate::core::icons`]) onto concrete glyphs
//! for rendering. Unknown ids fall back to the generic file glyph, so a
//! registry miss can never break rendering.

use icondata::Icon;

use crate::config::IconTheme;
use crate::core::icons::DEFAULT_FOLDER_ICON;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuBookOpen as FilePdf, LuChevronRight as ChevronRight, LuFile as File,
        LuFileText as FileText, LuFolder as Folder, LuHouse as Home, LuImage as FileImage,
        LuLink as FileLink, LuLock as Lock, LuMoon as Moon, LuSun as Sun,
        LuTerminal as Terminal,
    };
}

mod bootstrap {
    pub use icondata::{
        BsChevronRight as ChevronRight, BsFileEarmark as File, BsFileEarmarkImage as FileImage,
        BsFileEarmarkPdf as FilePdf, BsFileEarmarkText as FileText, BsFolderFill as Folder,
        BsHouseFill as Home, BsLink45deg as FileLink, BsLockFill as Lock, BsMoonFill as Moon,
        BsSunFill as Sun, BsTerminal as Terminal,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(CHEVRON_RIGHT, ChevronRight);
themed_icon!(FILE, File);
themed_icon!(FILE_IMAGE, FileImage);
themed_icon!(FILE_LINK, FileLink);
themed_icon!(FILE_PDF, FilePdf);
themed_icon!(FILE_TEXT, FileText);
themed_icon!(FOLDER, Folder);
themed_icon!(HOME, Home);
themed_icon!(LOCK, Lock);
themed_icon!(MOON, Moon);
themed_icon!(SUN, Sun);
themed_icon!(TERMINAL, Terminal);

// =============================================================================
// Registry id -> glyph
// =============================================================================

/// Glyph for a resolved icon id.
pub fn glyph_for(icon_id: &str) -> Icon {
    if icon_id == DEFAULT_FOLDER_ICON {
        return FOLDER;
    }

    match icon_id {
        "markdown" | "text" | "json" | "yaml" | "toml" | "xml" | "rust" | "javascript"
        | "typescript" | "python" | "html" | "css" | "git" | "make" | "settings" => FILE_TEXT,
        "image" => FILE_IMAGE,
        "pdf" => FILE_PDF,
        "url" => FILE_LINK,
        "shell" | "docker" => TERMINAL,
        "lock" => LOCK,
        _ => FILE,
    }
}
