//! Domain constants
//!
//! Tags and markers shared by the condition and argument modules.

// ============================================================================
// PROPERTY TAGS
// ============================================================================

/// Property placeholder bound to a value slot that carries no selector
pub const DEFAULT_VALUE_TAG: &str = "${}";

/// Prefix that marks a selector as a property placeholder
pub const PROPERTY_TAG_PREFIX: &str = "${";

/// Suffix that closes a property placeholder
pub const PROPERTY_TAG_SUFFIX: &str = "}";

/// Separator appended to a type name to form a by-type object tag
pub const TYPE_TAG_SEPARATOR: char = ':';

// ============================================================================
// CONDITIONS
// ============================================================================

/// Marker replaced by the property value inside a property-value expression
pub const PLACEHOLDER_MARKER: &str = "$";

/// Value reported by `Display` for a nil value
pub const NIL_DISPLAY: &str = "";
