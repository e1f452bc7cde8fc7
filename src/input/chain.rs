/// Chaining operator joining a sub-command to the one after it. `Normal`
/// marks the final sub-command of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChainKind {
    Normal,
    And,
    Or,
    Sequence,
}

/// Non-owning view of one sub-command inside an input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'line> {
    pub text: &'line str,
    pub joiner: ChainKind,
}

/// Splits a line on `;`, `&&`, and `||`. A single `|` is not an operator
/// here and stays in the text. Empty segments are kept; the dispatch loop
/// skips them without touching the recorded status.
pub fn split(line: &str) -> Vec<Segment<'_>> {
    let bytes = line.as_bytes();
    let mut segments = Vec::new();
    let mut start = 0;
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b';' => {
                segments.push(Segment {
                    text: &line[start..i],
                    joiner: ChainKind::Sequence,
                });
                i += 1;
                start = i;
            }
            b'&' if bytes.get(i + 1) == Some(&b'&') => {
                segments.push(Segment {
                    text: &line[start..i],
                    joiner: ChainKind::And,
                });
                i += 2;
                start = i;
            }
            b'|' if bytes.get(i + 1) == Some(&b'|') => {
                segments.push(Segment {
                    text: &line[start..i],
                    joiner: ChainKind::Or,
                });
                i += 2;
                start = i;
            }
            _ => i += 1,
        }
    }

    segments.push(Segment {
        text: &line[start..],
        joiner: ChainKind::Normal,
    });
    segments
}
