/// Submission lifecycle for the login form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitState {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

/// Outcome of a finished submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Success,
    Failure,
}

impl SubmitState {
    /// True while a request is outstanding; the submit trigger is
    /// disabled for exactly this state.
    pub fn is_busy(self) -> bool {
        matches!(self, SubmitState::Submitting)
    }

    /// Enter `Submitting`. Returns `None` while a submission is already
    /// in flight, rejecting the second attempt.
    pub fn start(self) -> Option<SubmitState> {
        if self.is_busy() {
            None
        } else {
            Some(SubmitState::Submitting)
        }
    }

    /// Leave `Submitting`. Always lands in a non-busy state, so the
    /// trigger is re-enabled after every outcome.
    pub fn finish(self, outcome: SubmitOutcome) -> SubmitState {
        match outcome {
            SubmitOutcome::Success => SubmitState::Succeeded,
            SubmitOutcome::Failure => SubmitState::Failed,
        }
    }
}
