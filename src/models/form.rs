/// Raw values of the seven form inputs. Empty string means unset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    pub date: String,
    pub time: String,
    pub specialist: String,
    pub service: String,
    pub strizhka_type: String,
    pub name: String,
    pub phone: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormPhase {
    #[default]
    Idle,
    SlotsLoading,
    Submitting,
    Confirmed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormEvent {
    DateChanged,
    SlotsLoaded,
    SlotsFailed,
    SubmitStarted,
    BookingAccepted,
    BookingFailed,
    ConfirmationClosed,
}

impl FormPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            FormPhase::Idle => "idle",
            FormPhase::SlotsLoading => "slots_loading",
            FormPhase::Submitting => "submitting",
            FormPhase::Confirmed => "confirmed",
        }
    }

    /// The phase `event` leads to, or `None` if it is not allowed here.
    pub fn next(self, event: FormEvent) -> Option<FormPhase> {
        use FormEvent::*;
        use FormPhase::*;

        match (self, event) {
            (Idle, DateChanged) => Some(SlotsLoading),
            (SlotsLoading, SlotsLoaded | SlotsFailed) => Some(Idle),
            (Idle, SubmitStarted) => Some(Submitting),
            (Submitting, BookingAccepted) => Some(Confirmed),
            (Submitting, BookingFailed) => Some(Idle),
            (Confirmed, ConfirmationClosed) => Some(Idle),
            _ => None,
        }
    }
}
