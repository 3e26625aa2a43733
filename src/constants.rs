//! Common constants used throughout the synopsis application.

/// Default template file name, looked up in the working directory
pub const DEFAULT_TEMPLATE_FILE: &str = "template.txt";

/// Marker opening the repeatable entry region of a template
pub const ENTRY_BEGIN_MARKER: &str = "<!-- entry-begin -->";

/// Marker closing the repeatable entry region of a template
pub const ENTRY_END_MARKER: &str = "<!-- entry-end -->";

/// Token left in the residual document where rendered entries are inserted
pub const ENTRIES_MARKER: &str = "[ENTRIES-HTML]";

/// Separator placed between rendered entries
pub const ENTRY_SEPARATOR: &str = "\n";

/// Placeholder tokens substituted with entry values.
pub mod placeholders {
    pub const CHARACTER_NAME: &str = "[CHARACTER-NAME]";
    pub const BOOK_ID: &str = "[BOOK-ID]";
    pub const BOOK_TITLE: &str = "[BOOK-TITLE]";
    pub const FILE_PATH: &str = "[FILE-PATH]";
    pub const IMAGE_PATH: &str = "[IMAGE-PATH]";
    pub const BOOK_SYNOPSIS: &str = "[BOOK-SYNOPSIS]";
}
