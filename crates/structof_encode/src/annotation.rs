use core::fmt;

/// The attribute name annotations are written with: `#[structof("...")]`.
pub const ANNOTATION_ATTRIBUTE: &str = "structof";

const OMIT_EMPTY: &str = "omitempty";
const QUOTED: &str = "string";
const INLINE: &str = "inline";

// -----------------------------------------------------------------------------
// Annotation

/// The parsed form of a field annotation, `name[,option]*`.
///
/// - The name may be empty, giving options only: `",omitempty"`.
/// - A name that contains anything but Unicode letters, digits, spaces and
///   ``!#$%&()*+-./:;<=>?@[]^_{|}~`` is ignored, and the field keeps its
///   declared name.
/// - `"-"` alone omits the field. `"-,"` names it `-`.
/// - `omitempty`, `string` and `inline` are recognized. Unknown options are
///   kept and reported by [`has_option`](Annotation::has_option).
///
/// # Examples
///
/// ```
/// use structof_encode::Annotation;
///
/// let a = Annotation::parse("user_id,omitempty,string");
/// assert_eq!(a.name(), Some("user_id"));
/// assert!(a.omit_empty() && a.quoted() && !a.inline());
///
/// assert!(Annotation::parse("-").is_skip());
/// assert_eq!(Annotation::parse("-,").name(), Some("-"));
///
/// // Quotes are never valid in a name.
/// assert_eq!(Annotation::parse("\"x\",inline").name(), None);
/// ```
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Annotation<'a> {
    raw: &'a str,
    name: Option<&'a str>,
    options: &'a str,
}

impl<'a> Annotation<'a> {
    /// Parses an annotation string. Parsing never fails.
    pub fn parse(raw: &'a str) -> Self {
        let (name, options) = match raw.split_once(',') {
            Some((name, options)) => (name, options),
            None => (raw, ""),
        };
        Self {
            raw,
            name: is_valid_name(name).then_some(name),
            options,
        }
    }

    /// Returns the annotation as written.
    #[inline]
    pub const fn raw(&self) -> &'a str {
        self.raw
    }

    /// Returns the output name, `None` if absent or invalid.
    #[inline]
    pub const fn name(&self) -> Option<&'a str> {
        self.name
    }

    /// Returns `true` for the annotation `-`, which omits the field.
    #[inline]
    pub fn is_skip(&self) -> bool {
        self.raw == "-"
    }

    /// Iterates over the non-empty options in declaration order.
    pub fn options(&self) -> impl Iterator<Item = &'a str> + 'a {
        self.options.split(',').filter(|option| !option.is_empty())
    }

    /// Returns `true` if `option` is present.
    pub fn has_option(&self, option: &str) -> bool {
        self.options().any(|o| o == option)
    }

    /// The `omitempty` option.
    #[inline]
    pub fn omit_empty(&self) -> bool {
        self.has_option(OMIT_EMPTY)
    }

    /// The `string` option.
    #[inline]
    pub fn quoted(&self) -> bool {
        self.has_option(QUOTED)
    }

    /// The `inline` option.
    #[inline]
    pub fn inline(&self) -> bool {
        self.has_option(INLINE)
    }
}

impl fmt::Debug for Annotation<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Annotation")
            .field("name", &self.name)
            .field("options", &self.options)
            .finish()
    }
}

fn is_valid_name(name: &str) -> bool {
    const PUNCTUATION: &str = "!#$%&()*+-./:;<=>?@[]^_{|}~ ";

    !name.is_empty()
        && name
            .chars()
            .all(|c| PUNCTUATION.contains(c) || c.is_alphabetic() || c.is_numeric())
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::Annotation;

    #[test]
    fn name_and_options() {
        let a = Annotation::parse("a");
        assert_eq!(a.name(), Some("a"));
        assert_eq!(a.options().count(), 0);

        let a = Annotation::parse(",omitempty");
        assert_eq!(a.name(), None);
        assert!(a.omit_empty());

        let a = Annotation::parse("b,,inline,unknown");
        assert_eq!(a.name(), Some("b"));
        assert!(a.inline());
        assert!(a.has_option("unknown"));
        assert!(!a.has_option(""));
    }

    #[test]
    fn skip_and_dash_name() {
        assert!(Annotation::parse("-").is_skip());
        assert!(!Annotation::parse("-,").is_skip());
        assert!(!Annotation::parse("-,omitempty").is_skip());
        assert_eq!(Annotation::parse("-,omitempty").name(), Some("-"));
    }

    #[test]
    fn name_validity() {
        assert_eq!(Annotation::parse("héllo wörld").name(), Some("héllo wörld"));
        assert_eq!(Annotation::parse("x-y.z/0").name(), Some("x-y.z/0"));
        assert_eq!(Annotation::parse("名前").name(), Some("名前"));
        assert_eq!(Annotation::parse("back\\slash").name(), None);
        assert_eq!(Annotation::parse("quo'te").name(), None);
        assert_eq!(Annotation::parse("tab\t").name(), None);
        assert_eq!(Annotation::parse("").name(), None);
    }
}
