use contracts::domain::common::Validate;
use contracts::shared::error::ValidationError;

/// Lifecycle of a create/edit form.
///
/// `Idle → Submitting → Closed` on success, back to `Idle` on failure.
/// While `Submitting` every further submit is ignored.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormPhase {
    #[default]
    Idle,
    Submitting,
    Closed,
}

/// Why a submit did not start
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitBlocked {
    /// A request is already in flight
    Busy,
    /// The form is closed
    Closed,
    Invalid(ValidationError),
}

impl FormPhase {
    pub fn is_busy(self) -> bool {
        self == FormPhase::Submitting
    }

    /// Next phase when the service call completes
    pub fn finish(self, ok: bool) -> FormPhase {
        match self {
            FormPhase::Submitting if ok => FormPhase::Closed,
            FormPhase::Submitting => FormPhase::Idle,
            other => other,
        }
    }

    /// Gate a submit: only an idle form with a valid draft may call the
    /// service. Returns the phase to switch to.
    pub fn begin_submit<D: Validate>(self, draft: &D) -> Result<FormPhase, SubmitBlocked> {
        match self {
            FormPhase::Submitting => Err(SubmitBlocked::Busy),
            FormPhase::Closed => Err(SubmitBlocked::Closed),
            FormPhase::Idle => {
                draft.validate().map_err(SubmitBlocked::Invalid)?;
                Ok(FormPhase::Submitting)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_category::aggregate::CategoryDraft;
    use contracts::domain::a005_accommodation::aggregate::AccommodationDraft;

    fn valid_category() -> CategoryDraft {
        CategoryDraft {
            name: "Biển".into(),
            slug: "bien".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_valid_submit_starts() {
        assert_eq!(
            FormPhase::Idle.begin_submit(&valid_category()),
            Ok(FormPhase::Submitting)
        );
    }

    #[test]
    fn test_double_submit_is_ignored() {
        let phase = FormPhase::Idle.begin_submit(&valid_category()).unwrap();
        assert_eq!(phase.begin_submit(&valid_category()), Err(SubmitBlocked::Busy));
        assert!(phase.is_busy());
    }

    #[test]
    fn test_invalid_draft_never_submits() {
        let draft = AccommodationDraft {
            name: "Sunrise".into(),
            slug: "sunrise".into(),
            summary: "View biển".into(),
            address: "Nha Trang".into(),
            category_id: Some(1),
            min_price: 0.0,
            max_price: 500_000.0,
            ..Default::default()
        };
        assert_eq!(
            FormPhase::Idle.begin_submit(&draft),
            Err(SubmitBlocked::Invalid(ValidationError::NonPositiveMinPrice))
        );
    }

    #[test]
    fn test_finish_transitions() {
        assert_eq!(FormPhase::Submitting.finish(true), FormPhase::Closed);
        assert_eq!(FormPhase::Submitting.finish(false), FormPhase::Idle);
        assert_eq!(FormPhase::Idle.finish(true), FormPhase::Idle);
        assert_eq!(
            FormPhase::Closed.begin_submit(&valid_category()),
            Err(SubmitBlocked::Closed)
        );
    }
}
