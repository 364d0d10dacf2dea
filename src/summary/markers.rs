//! Marker delimited regions that record previously generated summaries
//! inside a larger body of text.
use regex::Regex;
use std::sync::LazyLock;

const RELEASE_HEADER: &str = "###### Release Summary ######";
const RELEASE_FOOTER: &str = "###### End of Release Summary ######";
const PULL_REQUEST_HEADER: &str = "###### Pull Request Summary ######";
const PULL_REQUEST_FOOTER: &str = "###### End of Pull Request Summary ######";

fn region_regex(header: &str, footer: &str) -> Regex {
    let pattern = format!(
        r"(?s){}(?<inner>.*?){}",
        regex::escape(header),
        regex::escape(footer)
    );
    Regex::new(&pattern).unwrap()
}

/// Header and footer pair delimiting a generated region.
#[derive(Debug)]
pub struct Markers {
    pub header: &'static str,
    pub footer: &'static str,
    pattern: LazyLock<Regex>,
}

/// Region written into release bodies.
pub static RELEASE_MARKERS: Markers = Markers {
    header: RELEASE_HEADER,
    footer: RELEASE_FOOTER,
    pattern: LazyLock::new(|| {
        region_regex(RELEASE_HEADER, RELEASE_FOOTER)
    }),
};

/// Region written into pull request descriptions and comments.
pub static PULL_REQUEST_MARKERS: Markers = Markers {
    header: PULL_REQUEST_HEADER,
    footer: PULL_REQUEST_FOOTER,
    pattern: LazyLock::new(|| {
        region_regex(PULL_REQUEST_HEADER, PULL_REQUEST_FOOTER)
    }),
};

/// Outcome of looking for a marked region in a body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Region<'a> {
    /// A region exists and replacement was not requested: the enclosed text.
    Existing(&'a str),
    /// Text to regenerate from: the body with any region removed.
    Base(String),
}

impl Markers {
    /// Text strictly between the first header and the first footer after it.
    pub fn extract<'a>(&self, text: &'a str) -> Option<&'a str> {
        self.pattern
            .captures(text)
            .and_then(|c| c.name("inner"))
            .map(|m| m.as_str())
    }

    /// `text` with the first region, markers included, removed. The rest of
    /// the text is left untouched.
    pub fn strip(&self, text: &str) -> String {
        self.pattern.replace(text, "").into_owned()
    }

    /// Resolves what to do with `text`: reuse an existing region, or
    /// regenerate starting from the returned base.
    pub fn resolve<'a>(&self, text: &'a str, replace: bool) -> Region<'a> {
        match self.extract(text) {
            Some(existing) if !replace => Region::Existing(existing),
            Some(_) => Region::Base(self.strip(text)),
            None => Region::Base(text.to_string()),
        }
    }

    /// Appends `content` as a marked region to `base`, separating each part
    /// with a blank line.
    pub fn wrap(&self, base: &str, content: &str) -> String {
        let base = base.trim_end();
        let region =
            format!("{}\n\n{}\n\n{}", self.header, content.trim(), self.footer);

        if base.is_empty() {
            region
        } else {
            format!("{base}\n\n{region}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_text_between_markers() {
        let body = format!(
            "intro\n{}\n* one\n* two\n{}\noutro",
            RELEASE_MARKERS.header, RELEASE_MARKERS.footer
        );

        let inner = RELEASE_MARKERS.extract(&body);

        assert_eq!(inner, Some("\n* one\n* two\n"));
    }

    #[test]
    fn stops_at_first_footer() {
        let body = format!(
            "{h}a{f}b{f}",
            h = RELEASE_MARKERS.header,
            f = RELEASE_MARKERS.footer
        );

        assert_eq!(RELEASE_MARKERS.extract(&body), Some("a"));
        assert_eq!(
            RELEASE_MARKERS.strip(&body),
            format!("b{}", RELEASE_MARKERS.footer)
        );
    }

    #[test]
    fn strip_leaves_rest_identical() {
        let before = "Some notes\r\n  with spacing \n";
        let after = "\n trailing\n";
        let body = format!(
            "{before}{}\nold summary\n{}{after}",
            RELEASE_MARKERS.header, RELEASE_MARKERS.footer
        );

        let stripped = RELEASE_MARKERS.strip(&body);

        assert_eq!(stripped, format!("{before}{after}"));
    }

    #[test]
    fn missing_footer_is_not_a_region() {
        let body = format!("{}\nunterminated", RELEASE_MARKERS.header);

        assert_eq!(RELEASE_MARKERS.extract(&body), None);
        assert_eq!(
            RELEASE_MARKERS.resolve(&body, false),
            Region::Base(body.clone())
        );
    }

    #[test]
    fn marker_pairs_are_independent() {
        let body = PULL_REQUEST_MARKERS.wrap("description", "pr summary");

        assert_eq!(RELEASE_MARKERS.extract(&body), None);
        assert_eq!(
            PULL_REQUEST_MARKERS.extract(&body),
            Some("\n\npr summary\n\n")
        );
    }

    #[test]
    fn resolve_returns_existing_region_unless_replacing() {
        let body = RELEASE_MARKERS.wrap("notes", "* cached");

        assert_eq!(
            RELEASE_MARKERS.resolve(&body, false),
            Region::Existing("\n\n* cached\n\n")
        );
        assert_eq!(
            RELEASE_MARKERS.resolve(&body, true),
            Region::Base("notes\n\n".into())
        );
    }

    #[test]
    fn wrap_separates_parts_with_blank_lines() {
        let wrapped = RELEASE_MARKERS.wrap("notes\n\n", "* new");

        assert_eq!(
            wrapped,
            format!(
                "notes\n\n{}\n\n* new\n\n{}",
                RELEASE_MARKERS.header, RELEASE_MARKERS.footer
            )
        );
        assert_eq!(
            RELEASE_MARKERS.wrap("", "* new"),
            format!(
                "{}\n\n* new\n\n{}",
                RELEASE_MARKERS.header, RELEASE_MARKERS.footer
            )
        );
    }
}
