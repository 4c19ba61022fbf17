use quiz_core::model::QuestionId;
use quiz_core::session::Session;

/// Presentation-agnostic palette entry for one question slot.
///
/// This is intentionally **not** a UI view-model:
/// - no pre-formatted labels
/// - no styling decisions
///
/// The UI decides how current, answered, and flagged combine visually.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionPaletteItem {
    pub index: usize,
    pub question_id: QuestionId,
    pub is_current: bool,
    pub is_answered: bool,
    pub is_flagged: bool,
}

/// Builds palette entries for every question in traversal order.
#[must_use]
pub fn palette_for(session: &Session) -> Vec<QuestionPaletteItem> {
    session
        .question_ids()
        .iter()
        .enumerate()
        .map(|(index, id)| QuestionPaletteItem {
            index,
            question_id: id.clone(),
            is_current: index == session.current_index(),
            is_answered: session.is_answered(id),
            is_flagged: session.is_marked_for_review(id),
        })
        .collect()
}
