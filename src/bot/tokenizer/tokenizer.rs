use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenizeError {
    #[error("Quote opened at argument {position} is never closed")]
    UnterminatedQuote { position: usize },
}

/// Splits a raw message on whitespace and merges `"quoted spans"` into single arguments.
pub fn tokenize(text: &str) -> Result<Vec<String>, TokenizeError> {
    let fragments: Vec<&str> = text.split_whitespace().collect();
    merge_quoted(&fragments)
}

/// Merges whitespace-delimited fragments that form a double-quoted phrase into one token.
///
/// A fragment wrapped in quotes on both sides (at least two characters long) becomes its
/// inner text. A fragment that only opens a quote starts a span which swallows every
/// following fragment up to and including the first one ending with `"`; the pieces are
/// joined with single spaces. Everything else passes through untouched, empty fragments
/// included.
///
/// A span still open at the end of input is reported as [`TokenizeError::UnterminatedQuote`]
/// instead of being dropped.
pub fn merge_quoted<S: AsRef<str>>(fragments: &[S]) -> Result<Vec<String>, TokenizeError> {
    let mut tokens = Vec::with_capacity(fragments.len());
    let mut open: Option<(usize, Vec<&str>)> = None;

    for (position, fragment) in fragments.iter().enumerate() {
        let fragment = fragment.as_ref();

        if let Some((start, mut pieces)) = open.take() {
            match fragment.strip_suffix('"') {
                Some(last) => {
                    pieces.push(last);
                    tokens.push(pieces.join(" "));
                }
                None => {
                    pieces.push(fragment);
                    open = Some((start, pieces));
                }
            }
            continue;
        }

        match fragment.strip_prefix('"') {
            Some(rest) => match rest.strip_suffix('"') {
                Some(inner) => tokens.push(inner.to_string()),
                None => open = Some((position, vec![rest])),
            },
            None => tokens.push(fragment.to_string()),
        }
    }

    match open {
        Some((position, _)) => Err(TokenizeError::UnterminatedQuote { position }),
        None => Ok(tokens),
    }
}
