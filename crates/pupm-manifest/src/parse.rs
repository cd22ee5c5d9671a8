use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref HEADER_LINE: Regex =
        Regex::new(r#"^mod\s+["'](?P<name>[\w\-]+)["']\s*,\s*$"#).unwrap();
    static ref ATTRIBUTE_LINE: Regex =
        Regex::new(r#"^\s+:(?P<key>\w+)\s*=>\s*["'](?P<value>[\w\-/.:]+)["']\s*,?\s*$"#).unwrap();
}

/// One physical Puppetfile line, classified against the two grammar rules.
///
/// Everything that is neither a module header nor an attribute is
/// [`Line::Ignored`]: comments, blank lines and any syntax this parser
/// does not support.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    /// `mod 'name',` opens a module block.
    Header(String),
    /// `  :key => 'value',` inside the current module block.
    Attribute(String, String),
    Ignored,
}

/// Classifies a single physical line. Each line stands alone; there is no
/// multi-line grammar.
#[must_use]
pub fn classify(line: &str) -> Line {
    if let Some(caps) = HEADER_LINE.captures(line) {
        if let Some(name) = caps.name("name") {
            return Line::Header(name.as_str().to_string());
        }
    }
    if let Some(caps) = ATTRIBUTE_LINE.captures(line) {
        if let (Some(key), Some(value)) = (caps.name("key"), caps.name("value")) {
            return Line::Attribute(key.as_str().to_string(), value.as_str().to_string());
        }
    }
    Line::Ignored
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_single_quotes() {
        assert_eq!(
            classify("mod 'stdlib',"),
            Line::Header("stdlib".to_string())
        );
    }

    #[test]
    fn test_header_double_quotes_and_hyphen() {
        assert_eq!(
            classify("mod \"puppet-nginx\","),
            Line::Header("puppet-nginx".to_string())
        );
    }

    #[test]
    fn test_header_trailing_whitespace_after_comma() {
        assert_eq!(classify("mod 'apache',   "), Line::Header("apache".to_string()));
    }

    #[test]
    fn test_header_requires_trailing_comma() {
        assert_eq!(classify("mod 'stdlib'"), Line::Ignored);
    }

    #[test]
    fn test_indented_mod_is_not_a_header() {
        assert_eq!(classify("  mod 'stdlib',"), Line::Ignored);
    }

    #[test]
    fn test_header_with_version_argument_unsupported() {
        assert_eq!(classify("mod 'apache', '1.2.3'"), Line::Ignored);
    }

    #[test]
    fn test_attribute_with_trailing_comma() {
        assert_eq!(
            classify("  :ref => '4.24.0',"),
            Line::Attribute("ref".to_string(), "4.24.0".to_string())
        );
    }

    #[test]
    fn test_attribute_without_trailing_comma() {
        assert_eq!(
            classify("  :owner => 'puppetlabs'"),
            Line::Attribute("owner".to_string(), "puppetlabs".to_string())
        );
    }

    #[test]
    fn test_attribute_value_with_url_characters() {
        assert_eq!(
            classify("  :git => 'https://github.com/puppetlabs/puppetlabs-stdlib.git',"),
            Line::Attribute(
                "git".to_string(),
                "https://github.com/puppetlabs/puppetlabs-stdlib.git".to_string()
            )
        );
    }

    #[test]
    fn test_attribute_requires_indentation() {
        assert_eq!(classify(":ref => '4.24.0'"), Line::Ignored);
    }

    #[test]
    fn test_comment_ignored() {
        assert_eq!(classify("# forge modules below"), Line::Ignored);
    }

    #[test]
    fn test_blank_line_ignored() {
        assert_eq!(classify(""), Line::Ignored);
    }

    #[test]
    fn test_forge_declaration_ignored() {
        assert_eq!(classify("forge 'https://forgeapi.puppet.com'"), Line::Ignored);
    }

    #[test]
    fn test_attribute_value_with_space_unsupported() {
        assert_eq!(classify("  :note => 'two words'"), Line::Ignored);
    }
}
