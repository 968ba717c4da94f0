use crate::Position;

/// Maps a virtual position of a decorated list onto its section.
///
/// The list is laid out as `headers ++ body ++ footers`. Returns `None` when `position` is past
/// the end (`headers + body + footers`).
pub fn classify(position: usize, headers: usize, body: usize, footers: usize) -> Option<Position> {
    if position < headers {
        return Some(Position::Header(position));
    }
    let in_body = position - headers;
    if in_body < body {
        return Some(Position::Body(in_body));
    }
    let in_footer = in_body - body;
    if in_footer < footers {
        return Some(Position::Footer(in_footer));
    }
    None
}

/// Total number of positions of a decorated list.
pub fn total(headers: usize, body: usize, footers: usize) -> usize {
    headers.saturating_add(body).saturating_add(footers)
}
