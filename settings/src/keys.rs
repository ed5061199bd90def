// Setting names. Keeping them in one place avoids collisions and misspellings.

// Main window.
pub const MAIN_LEFT_PANEL_WIDTH: &str = "main-left-panel-width";

// Formatting choices.
pub const FMT_UPPER_HEX_DIGITS: &str = "fmt-upper-hex-digits";

// Code list view.
pub const CDLV_FONT_FAMILY: &str = "cdlv-font-family";
pub const CDLV_FONT_SIZE: &str = "cdlv-font-size";

// Source generation.
pub const SRCGEN_DEFAULT_ASM: &str = "srcgen-default-asm";

// Label file generation.
pub const LABGEN_FORMAT: &str = "labgen-format";
pub const LABGEN_INCLUDE_AUTO: &str = "labgen-include-auto";

// Internal debugging features.
pub const DEBUG_MENU_ENABLED: &str = "debug-menu-enabled";
