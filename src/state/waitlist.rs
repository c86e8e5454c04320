#[cfg(test)]
#[path = "waitlist_test.rs"]
mod waitlist_test;

/// Lifecycle of the waitlist form.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WaitlistPhase {
    #[default]
    Editing,
    Submitting,
    /// Success message replaces the form. Terminal.
    Joined,
}

/// Outcome of one waitlist POST.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    Accepted,
    /// Non-2xx response with an optional server-provided error message.
    Rejected(Option<String>),
    NetworkError,
}

/// State for the waitlist signup form: current field values, phase, and the
/// error message shown near the form (if any).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct WaitlistState {
    pub email: String,
    /// Honeypot field, submitted verbatim; bots fill it, humans never see it.
    pub website_url: String,
    pub phase: WaitlistPhase,
    pub error: Option<String>,
}

impl WaitlistState {
    /// Start a submission attempt. Returns `false` (with a validation
    /// message set) when the email is empty or a submit is already in
    /// flight; no network call should be made in either case.
    pub fn begin_submit(&mut self) -> bool {
        if self.phase != WaitlistPhase::Editing {
            return false;
        }
        if self.email.is_empty() {
            self.error = Some("Please enter your email.".to_owned());
            return false;
        }
        self.error = None;
        self.phase = WaitlistPhase::Submitting;
        true
    }

    /// Apply the outcome of the POST. This is the single cleanup step: it
    /// runs once per attempt and leaves the control re-enabled in every
    /// non-success branch.
    pub fn finish(&mut self, outcome: SubmitOutcome) {
        match outcome {
            SubmitOutcome::Accepted => {
                self.phase = WaitlistPhase::Joined;
                self.error = None;
            }
            SubmitOutcome::Rejected(message) => {
                self.phase = WaitlistPhase::Editing;
                self.error = Some(
                    message.unwrap_or_else(|| "Something went wrong. Please try again.".to_owned()),
                );
            }
            SubmitOutcome::NetworkError => {
                self.phase = WaitlistPhase::Editing;
                self.error = Some("Network error. Please try again later.".to_owned());
            }
        }
    }

    pub fn button_label(&self) -> &'static str {
        match self.phase {
            WaitlistPhase::Submitting => "Joining...",
            _ => "Join Waitlist",
        }
    }

    pub fn submitting(&self) -> bool {
        self.phase == WaitlistPhase::Submitting
    }
}
