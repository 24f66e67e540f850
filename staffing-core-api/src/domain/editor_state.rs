use std::mem;
use uuid::Uuid;

use super::candidate::Candidate;
use super::draft::{apply_change, Draft, FieldChange};
use crate::error::{ApiError, ApiResult};

/// Where a submission came from, so a failed submit can return there.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOrigin {
    New,
    Editing(Box<Candidate>),
}

/// Lifecycle of one editor dialog.
///
/// `Closed -> New -> Submitting -> Closed` or
/// `Closed -> Editing -> Submitting -> Closed`. A failed submit goes back to
/// the originating state with the draft untouched.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum EditorState {
    #[default]
    Closed,
    New {
        draft: Draft,
    },
    Editing {
        candidate: Box<Candidate>,
        draft: Draft,
    },
    Submitting {
        origin: SubmitOrigin,
        draft: Draft,
    },
}

impl EditorState {
    pub fn name(&self) -> &'static str {
        match self {
            EditorState::Closed => "closed",
            EditorState::New { .. } => "new",
            EditorState::Editing { .. } => "editing",
            EditorState::Submitting { .. } => "submitting",
        }
    }

    pub fn is_open(&self) -> bool {
        !matches!(self, EditorState::Closed)
    }

    pub fn draft(&self) -> Option<&Draft> {
        match self {
            EditorState::Closed => None,
            EditorState::New { draft }
            | EditorState::Editing { draft, .. }
            | EditorState::Submitting { draft, .. } => Some(draft),
        }
    }

    /// Candidate being edited, if any.
    pub fn editing_candidate(&self) -> Option<&Candidate> {
        match self {
            EditorState::Editing { candidate, .. }
            | EditorState::Submitting {
                origin: SubmitOrigin::Editing(candidate),
                ..
            } => Some(candidate.as_ref()),
            _ => None,
        }
    }

    pub fn editing_id(&self) -> Option<Uuid> {
        self.editing_candidate().map(|candidate| candidate.id)
    }

    pub fn open_new(&mut self) -> ApiResult<()> {
        self.expect_closed("open a new candidate")?;
        *self = EditorState::New {
            draft: Draft::blank(),
        };
        Ok(())
    }

    pub fn open_existing(&mut self, candidate: Candidate) -> ApiResult<()> {
        self.expect_closed("open a candidate")?;
        let draft = Draft::from_candidate(&candidate);
        *self = EditorState::Editing {
            candidate: Box::new(candidate),
            draft,
        };
        Ok(())
    }

    /// Replaces the draft with the result of the reducer.
    pub fn change(&mut self, change: FieldChange) -> ApiResult<()> {
        match self {
            EditorState::New { draft } | EditorState::Editing { draft, .. } => {
                *draft = apply_change(draft, change);
                Ok(())
            }
            other => Err(ApiError::InvalidState(format!(
                "cannot edit the draft while {}",
                other.name()
            ))),
        }
    }

    /// Moves to `Submitting` and hands out the draft and the id being edited.
    pub fn begin_submit(&mut self) -> ApiResult<(Draft, Option<Uuid>)> {
        let (origin, draft) = match mem::take(self) {
            EditorState::New { draft } => (SubmitOrigin::New, draft),
            EditorState::Editing { candidate, draft } => (SubmitOrigin::Editing(candidate), draft),
            other => {
                let name = other.name();
                *self = other;
                return Err(ApiError::InvalidState(format!("cannot submit while {name}")));
            }
        };
        *self = EditorState::Submitting {
            origin,
            draft: draft.clone(),
        };
        let editing_id = self.editing_id();
        Ok((draft, editing_id))
    }

    /// Returns to the state the submission started from, keeping the draft.
    pub fn submit_failed(&mut self) -> ApiResult<()> {
        match mem::take(self) {
            EditorState::Submitting { origin, draft } => {
                *self = match origin {
                    SubmitOrigin::New => EditorState::New { draft },
                    SubmitOrigin::Editing(candidate) => EditorState::Editing { candidate, draft },
                };
                Ok(())
            }
            other => self.restore_invalid(other, "fail a submission"),
        }
    }

    pub fn submit_succeeded(&mut self) -> ApiResult<()> {
        match mem::take(self) {
            EditorState::Submitting { .. } => Ok(()),
            other => self.restore_invalid(other, "complete a submission"),
        }
    }

    /// Discards the draft. Not allowed while a submission is in flight.
    pub fn close(&mut self) -> ApiResult<()> {
        if let EditorState::Submitting { .. } = self {
            return Err(ApiError::InvalidState(
                "cannot close while submitting".to_string(),
            ));
        }
        *self = EditorState::Closed;
        Ok(())
    }

    fn expect_closed(&self, action: &str) -> ApiResult<()> {
        if self.is_open() {
            return Err(ApiError::InvalidState(format!(
                "cannot {action} while {}",
                self.name()
            )));
        }
        Ok(())
    }

    fn restore_invalid(&mut self, previous: EditorState, action: &str) -> ApiResult<()> {
        let name = previous.name();
        *self = previous;
        Err(ApiError::InvalidState(format!("cannot {action} while {name}")))
    }
}
