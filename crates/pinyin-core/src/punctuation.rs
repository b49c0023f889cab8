//! Full-width Chinese punctuation → ASCII substitution.
//!
//! Ideographic punctuation has no dictionary entry, so [`Converter`] drops it.
//! Callers that want to keep it can run [`normalize_punctuation`] over the
//! text themselves.
//!
//! [`Converter`]: crate::converter::Converter

/// `(full-width, ASCII)` pairs. At a given position the first matching pair
/// wins, so multi-char marks come before their single-char prefixes.
pub const PUNCTUATIONS: &[(&str, &str)] = &[
    // comma, full stop
    ("，", ","),
    ("。", "."),
    ("！", "!"),
    ("？", "?"),
    ("：", ":"),
    ("；", ";"),
    // quotes
    ("‘", " '"),
    ("’", " '"),
    ("“", " \""),
    ("”", " \""),
    // corner brackets
    ("「", " ["),
    ("」", " ]"),
    ("『", " ["),
    ("』", " ]"),
    // parentheses and brackets
    ("（", " ("),
    ("）", " )"),
    ("〔", " ["),
    ("〕", " ]"),
    ("【", " ["),
    ("】", " ]"),
    ("{", " {"),
    ("}", " }"),
    // ellipsis, dashes
    ("……", "..."),
    ("——", "-"),
    ("—", "-"),
    ("/", " /"),
    ("\\", " \\"),
    ("～", "~"),
    // book title marks
    ("《", " <"),
    ("》", " >"),
    ("〈", " <"),
    ("〉", " >"),
    ("·", " ·"),
    // enumeration comma
    ("、", ","),
];

/// ASCII replacement for a single punctuation mark.
pub fn punctuation_for(mark: &str) -> Option<&'static str> {
    PUNCTUATIONS
        .iter()
        .find(|(from, _)| *from == mark)
        .map(|&(_, to)| to)
}

/// A run of `text` as split by [`pieces`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Piece<'a> {
    /// Text containing no mark from [`PUNCTUATIONS`].
    Text(&'a str),
    Mark {
        from: &'static str,
        to: &'static str,
    },
}

/// Split `text` into punctuation marks and the runs between them, scanning
/// left to right without overlapping matches.
pub fn pieces(text: &str) -> Vec<Piece<'_>> {
    let mut out = Vec::new();
    let mut run_start = 0;
    let mut i = 0;

    while let Some(c) = text[i..].chars().next() {
        let rest = &text[i..];
        match PUNCTUATIONS.iter().find(|(from, _)| rest.starts_with(*from)) {
            Some(&(from, to)) => {
                if run_start < i {
                    out.push(Piece::Text(&text[run_start..i]));
                }
                out.push(Piece::Mark { from, to });
                i += from.len();
                run_start = i;
            }
            None => i += c.len_utf8(),
        }
    }
    if run_start < text.len() {
        out.push(Piece::Text(&text[run_start..]));
    }
    out
}

/// Replace every mark in [`PUNCTUATIONS`] found in `text`. Other characters
/// are copied as is.
pub fn normalize_punctuation(text: &str) -> String {
    pieces(text)
        .into_iter()
        .map(|piece| match piece {
            Piece::Text(t) => t,
            Piece::Mark { to, .. } => to,
        })
        .collect()
}
