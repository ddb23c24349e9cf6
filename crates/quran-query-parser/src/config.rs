/// Parser configuration trait - lets callers switch individual operators off.
/// A disabled operator is parsed as plain text.
pub trait ParserConfig {
    /// Should parse exclusions (e.g., -الرحيم)
    fn enable_exclude(&self) -> bool {
        true
    }

    /// Should parse field scopes (e.g., standard:الله)
    fn enable_field_scope(&self) -> bool {
        true
    }

    /// Should parse quoted phrases (e.g., "بسم الله")
    fn enable_phrases(&self) -> bool {
        true
    }

    /// Characters allowed in a field name before the `:` separator
    fn is_field_name_char(&self, c: char) -> bool {
        c.is_ascii_alphanumeric() || c == '_'
    }
}

/// Default configuration for advanced search - all operators enabled
#[derive(Debug, Clone, Copy, Default)]
pub struct AdvancedConfig;

impl ParserConfig for AdvancedConfig {
    // All defaults enabled
}

/// Every operator disabled: each whitespace-separated word is a bare term.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainConfig;

impl ParserConfig for PlainConfig {
    fn enable_exclude(&self) -> bool {
        false
    }

    fn enable_field_scope(&self) -> bool {
        false
    }

    fn enable_phrases(&self) -> bool {
        false
    }
}
