//! Note list view model.

use crate::model::note::{Note, NoteId};
use std::fmt::{Display, Formatter};

pub const EMPTY_HEADING: &str = "No Notes Yet";
pub const EMPTY_MESSAGE: &str = "Create your first note to get started!";
pub const EMPTY_ACTION: &str = "Add Your First Note";

/// One rendered note.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteCard {
    pub id: NoteId,
    pub title: String,
    pub content: String,
}

/// What the note list area shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotesView {
    Empty {
        heading: &'static str,
        message: &'static str,
        action: &'static str,
    },
    Cards(Vec<NoteCard>),
}

/// Builds the view for a collection, keeping collection order.
pub fn render_notes(notes: &[Note]) -> NotesView {
    if notes.is_empty() {
        return NotesView::Empty {
            heading: EMPTY_HEADING,
            message: EMPTY_MESSAGE,
            action: EMPTY_ACTION,
        };
    }

    NotesView::Cards(
        notes
            .iter()
            .map(|note| NoteCard {
                id: note.id.clone(),
                title: note.title.clone(),
                content: note.content.clone(),
            })
            .collect(),
    )
}

impl Display for NotesView {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty {
                heading,
                message,
                action,
            } => {
                writeln!(f, "{heading}")?;
                writeln!(f, "{message}")?;
                write!(f, "[{action}]")
            }
            Self::Cards(cards) => {
                for (index, card) in cards.iter().enumerate() {
                    if index > 0 {
                        writeln!(f)?;
                    }
                    writeln!(f, "[{}] {}", card.id, card.title)?;
                    for line in card.content.lines() {
                        writeln!(f, "    {line}")?;
                    }
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{render_notes, NotesView, EMPTY_HEADING};
    use crate::model::note::{Note, NoteId};

    #[test]
    fn empty_collection_renders_empty_state() {
        let view = render_notes(&[]);
        assert!(matches!(&view, NotesView::Empty { heading, .. } if *heading == EMPTY_HEADING));
        assert!(view.to_string().contains("Add Your First Note"));
    }

    #[test]
    fn cards_follow_collection_order() {
        let notes = vec![
            Note::new(NoteId::from("2"), "second", "b"),
            Note::new(NoteId::from("1"), "first", "line one\nline two"),
        ];
        let view = render_notes(&notes);

        let NotesView::Cards(cards) = &view else {
            panic!("expected cards");
        };
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].title, "second");
        assert_eq!(
            view.to_string(),
            "[2] second\n    b\n\n[1] first\n    line one\n    line two\n"
        );
    }
}
