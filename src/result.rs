//! Result types for extraction output.
//!
//! The parsed document does not outlive an extraction call, so group nodes
//! cannot be handed back to the caller directly. Each group is instead
//! surfaced as a snapshot of its anchor element (tag name plus attributes)
//! alongside the extracted text, in group registration order.

/// The text content of one group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GroupContent {
    /// One normalized string per fragment, in document order of first
    /// appearance (the default).
    Fragments(Vec<String>),

    /// All fragments joined with the configured separator and normalized as
    /// one string (`join_texts = true`).
    Joined(String),
}

impl GroupContent {
    /// The fragment list, if this group was extracted without joining.
    #[must_use]
    pub fn as_fragments(&self) -> Option<&[String]> {
        match self {
            Self::Fragments(fragments) => Some(fragments),
            Self::Joined(_) => None,
        }
    }

    /// The joined string, if this group was extracted with `join_texts`.
    #[must_use]
    pub fn as_joined(&self) -> Option<&str> {
        match self {
            Self::Fragments(_) => None,
            Self::Joined(text) => Some(text),
        }
    }

    /// True when the group holds no text at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Fragments(fragments) => fragments.is_empty(),
            Self::Joined(text) => text.is_empty(),
        }
    }
}

/// One group of extracted text: the anchor element snapshot plus content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextGroup {
    /// Tag name of the group anchor element.
    pub tag: Option<String>,

    /// Attribute snapshot of the group anchor element.
    pub attributes: Vec<(String, String)>,

    /// Extracted text for this group.
    pub content: GroupContent,
}

impl TextGroup {
    /// Look up an attribute of the group anchor by name.
    #[must_use]
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

/// Result of a grouped text extraction.
///
/// Groups appear in registration order: grouper-selector order when explicit
/// groupers were supplied, root-resolution order otherwise.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupedText {
    /// The extracted groups.
    pub groups: Vec<TextGroup>,
}

impl GroupedText {
    /// Number of groups.
    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// True when no group was registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// First group whose anchor has the given tag name.
    #[must_use]
    pub fn by_tag(&self, tag: &str) -> Option<&TextGroup> {
        self.groups
            .iter()
            .find(|group| group.tag.as_deref().is_some_and(|t| t.eq_ignore_ascii_case(tag)))
    }

    /// First group whose anchor carries the given attribute value.
    #[must_use]
    pub fn by_attr(&self, name: &str, value: &str) -> Option<&TextGroup> {
        self.groups.iter().find(|group| group.attr(name) == Some(value))
    }

    /// Iterate over the groups in registration order.
    pub fn iter(&self) -> std::slice::Iter<'_, TextGroup> {
        self.groups.iter()
    }
}

impl<'a> IntoIterator for &'a GroupedText {
    type Item = &'a TextGroup;
    type IntoIter = std::slice::Iter<'a, TextGroup>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.iter()
    }
}
