use crate::nav::host::LinkId;
use crate::nav::offsets::OffsetTable;

/// Pick the section the reader is in.
///
/// The answer is the last section whose top is at or above
/// `scroll_y + header_height + lead_in`, falling back to the first section
/// when none qualifies. Returns `None` only for an empty table.
pub fn resolve(table: &OffsetTable, scroll_y: f64, header_height: f64, lead_in: f64) -> Option<LinkId> {
    let sections = table.sections();
    let mut current = sections.first()?.link;
    let effective = scroll_y + header_height + lead_in;
    for section in sections {
        if section.top > effective {
            break;
        }
        current = section.link;
    }
    Some(current)
}
