//! Tolerant reader for the INI-like dialect used by the preference and theme
//! files.
//!
//! The parse policy is deliberately forgiving: a line without a `=` separator
//! is skipped, as is any line appearing before the first section header.
//! Unknown sections are preserved here and ignored by the consumer. Parsing
//! never fails.

/// One `[name]` section and its `key=value` entries, in file order.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct Section {
    pub name: String,
    pub entries: Vec<(String, String)>,
}

/// Split `text` into sections, skipping malformed lines.
pub(crate) fn parse(text: &str) -> Vec<Section> {
    let mut sections: Vec<Section> = Vec::new();

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if let Some(name) = line.strip_prefix('[').and_then(|l| l.strip_suffix(']')) {
            sections.push(Section {
                name: name.trim().to_string(),
                entries: Vec::new(),
            });
            continue;
        }
        let Some(section) = sections.last_mut() else {
            // entry before any section header
            continue;
        };
        if let Some((key, value)) = line.split_once('=') {
            section
                .entries
                .push((key.trim().to_string(), value.trim().to_string()));
        }
        // no separator: skipped
    }

    sections
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_sections_and_entries() {
        let sections = parse("[General]\nfont_family=Monospace\nfont_size=11.0\n");
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].name, "General");
        assert_eq!(
            sections[0].entries,
            vec![
                ("font_family".into(), "Monospace".into()),
                ("font_size".into(), "11.0".into()),
            ]
        );
    }

    #[test]
    fn skips_lines_without_separator() {
        let sections = parse("[Theme]\nname=Foo\nthis line is noise\nbackground=0,0,0,1\n");
        assert_eq!(sections[0].entries.len(), 2);
    }

    #[test]
    fn skips_entries_before_first_section() {
        let sections = parse("orphan=1\n[Theme]\nname=Foo\n");
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].entries, vec![("name".into(), "Foo".into())]);
    }

    #[test]
    fn keeps_unknown_sections_for_caller_to_ignore() {
        let sections = parse("[Mystery]\nkey=value\n[Theme]\nname=Foo\n");
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].name, "Mystery");
    }

    #[test]
    fn value_may_contain_equals() {
        let sections = parse("[General]\nfont_family=Fira=Code\n");
        assert_eq!(
            sections[0].entries,
            vec![("font_family".into(), "Fira=Code".into())]
        );
    }

    #[test]
    fn empty_input_yields_no_sections() {
        assert!(parse("").is_empty());
        assert!(parse("\n\n  \n").is_empty());
    }
}
