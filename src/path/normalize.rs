use derive_more::IsVariant;

#[derive(Debug, Clone, Copy, IsVariant)]
enum Seq {
    Slash,
    SlashDot,
    Other,
}

/// Reduces a nul-free path to its canonical lexical form, returning the bytes with a trailing nul
/// ready to wrap in a [`NulFreeString`](crate::string::NulFreeString).
///
/// One left-to-right scan. Consecutive separators collapse, `.` components drop, trailing
/// separators trim, and everything else — `..` included — is kept verbatim. Resolving `..`
/// against the component before it would require filesystem truth this layer does not have.
///
/// Total over nul-free input; the caller validates before calling.
//
// Copying survivors into a fresh buffer is cheaper than editing in place: O(n) rather than the
// O(n^2) of repeated removals.
pub(crate) fn normalize(value: &[u8]) -> Vec<u8> {
    let absolute = value.first() == Some(&b'/');

    // Start-of-input acts as a separator boundary, so a leading "./" drops like any other
    // redundant dot component and a leading ".." survives like any other component.
    let mut last_seq = Seq::Slash;
    let mut valid = Vec::with_capacity(value.len() + 2);

    if absolute {
        valid.push(b'/');
    }

    for &ch in value {
        match (ch, last_seq) {
            (b'/', Seq::Slash) => (),
            (b'/', Seq::SlashDot) => {
                last_seq = Seq::Slash;
            },
            (b'/', Seq::Other) => {
                last_seq = Seq::Slash;
                valid.push(ch);
            },
            (b'.', Seq::Slash) => {
                last_seq = Seq::SlashDot;
            },
            (ch, Seq::Slash) => {
                last_seq = Seq::Other;
                valid.push(ch);
            },
            (ch, Seq::SlashDot) => {
                last_seq = Seq::Other;
                valid.push(b'.');
                valid.push(ch);
            },
            (ch, Seq::Other) => {
                valid.push(ch);
            },
        }
    }

    if valid.is_empty() {
        // No component survived and there was no root: the canonical empty path is the current
        // directory, the one case where the output contains a byte the input did not.
        valid.push(b'.');
    } else if !last_seq.is_other() && valid.len() > 1 {
        // The scan ended on a separator (possibly with a dangling dot component behind it).
        valid.pop();
    }

    valid.push(b'\0');
    valid
}
