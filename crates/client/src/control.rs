use std::ops::Deref;

pub const DEFAULT_LABEL: &str = "문의 접수";
pub const BUSY_LABEL: &str = "전송 중...";

/// State of the submit button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitControl {
    label: String,
    busy_label: String,
    disabled: bool,
}

impl Default for SubmitControl {
    fn default() -> Self {
        Self::new(DEFAULT_LABEL)
    }
}

impl SubmitControl {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            busy_label: BUSY_LABEL.to_owned(),
            disabled: false,
        }
    }

    pub fn with_busy_label(mut self, busy_label: impl Into<String>) -> Self {
        self.busy_label = busy_label.into();
        self
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Disable the control and show the busy label until the guard drops.
    pub fn begin(&mut self) -> Busy<'_> {
        let saved_label = std::mem::replace(&mut self.label, self.busy_label.clone());
        let saved_disabled = std::mem::replace(&mut self.disabled, true);

        Busy {
            control: self,
            saved_label,
            saved_disabled,
        }
    }
}

/// Restores the control to its pre-submission state on drop, whichever way
/// the submission ended.
#[must_use]
pub struct Busy<'a> {
    control: &'a mut SubmitControl,
    saved_label: String,
    saved_disabled: bool,
}

impl Deref for Busy<'_> {
    type Target = SubmitControl;

    fn deref(&self) -> &Self::Target {
        self.control
    }
}

impl Drop for Busy<'_> {
    fn drop(&mut self) {
        self.control.label = std::mem::take(&mut self.saved_label);
        self.control.disabled = self.saved_disabled;
    }
}
