//! Low-level splitting of ROM filenames into plain text and bracketed groups.

/// A piece of a filename: either free text or a `(...)`, `[...]`, `{...}` group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Segment<'a> {
    Text(&'a str),
    Group {
        /// Opening delimiter: `(`, `[` or `{`.
        open: char,
        /// Content between the delimiters.
        content: &'a str,
        /// The whole group including delimiters.
        raw: &'a str,
    },
}

/// Split a name into text runs and bracketed groups.
///
/// Groups nest by delimiter type, so `(Disc 1 (Alt))` is one group. An
/// unclosed delimiter turns the rest of the name into plain text.
pub(crate) fn split_segments(name: &str) -> Vec<Segment<'_>> {
    let bytes = name.as_bytes();
    let mut segments = Vec::new();
    let mut text_start = 0;
    let mut i = 0;

    while i < bytes.len() {
        let open = bytes[i];
        let close = match open {
            b'(' => b')',
            b'[' => b']',
            b'{' => b'}',
            _ => {
                i += 1;
                continue;
            }
        };

        let mut depth = 1u32;
        let mut j = i + 1;
        while j < bytes.len() {
            if bytes[j] == open {
                depth += 1;
            } else if bytes[j] == close {
                depth -= 1;
                if depth == 0 {
                    break;
                }
            }
            j += 1;
        }
        if j >= bytes.len() {
            break;
        }

        if text_start < i {
            segments.push(Segment::Text(&name[text_start..i]));
        }
        segments.push(Segment::Group {
            open: open as char,
            content: &name[i + 1..j],
            raw: &name[i..=j],
        });
        i = j + 1;
        text_start = i;
    }

    if text_start < name.len() {
        segments.push(Segment::Text(&name[text_start..]));
    }
    segments
}

/// Split `name` into stem and extension.
///
/// Only a short trailing run of ASCII alphanumerics after the last `.`
/// counts as an extension, so `Super Mario Bros. (USA)` has none.
pub(crate) fn split_extension(name: &str) -> (&str, Option<&str>) {
    if let Some(dot) = name.rfind('.') {
        let ext = &name[dot + 1..];
        if !ext.is_empty() && ext.len() <= 8 && ext.chars().all(|c| c.is_ascii_alphanumeric()) {
            return (&name[..dot], Some(ext));
        }
    }
    (name, None)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_segments_basic() {
        let segs = split_segments("Game (USA) [!]");
        assert_eq!(
            segs,
            vec![
                Segment::Text("Game "),
                Segment::Group {
                    open: '(',
                    content: "USA",
                    raw: "(USA)"
                },
                Segment::Text(" "),
                Segment::Group {
                    open: '[',
                    content: "!",
                    raw: "[!]"
                },
            ]
        );
    }

    #[test]
    fn test_split_segments_adjacent_and_nested() {
        let segs = split_segments("Game (USA)(Rev 1)");
        assert_eq!(segs.len(), 3);
        let segs = split_segments("Game (Disc 1 (Alt))");
        assert_eq!(
            segs[1],
            Segment::Group {
                open: '(',
                content: "Disc 1 (Alt)",
                raw: "(Disc 1 (Alt))"
            }
        );
    }

    #[test]
    fn test_split_segments_unclosed() {
        let segs = split_segments("Game (USA");
        assert_eq!(segs, vec![Segment::Text("Game (USA")]);
        let segs = split_segments("Game (USA) [b");
        assert_eq!(segs.len(), 3);
        assert_eq!(segs[2], Segment::Text(" [b"));
    }

    #[test]
    fn test_split_extension() {
        assert_eq!(split_extension("Game (USA).sfc"), ("Game (USA)", Some("sfc")));
        assert_eq!(split_extension("Game (USA).7z"), ("Game (USA)", Some("7z")));
        assert_eq!(
            split_extension("Super Mario Bros. (USA)"),
            ("Super Mario Bros. (USA)", None)
        );
        assert_eq!(split_extension("Super Mario Bros."), ("Super Mario Bros.", None));
        assert_eq!(split_extension("noext"), ("noext", None));
    }
}
