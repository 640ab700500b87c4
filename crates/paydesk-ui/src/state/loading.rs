/// Tracks in-flight requests to prevent double-dispatch.
///
/// Two independent dimensions:
/// - List: the company list fetch started by mount or reload
/// - Dialog: a dialog submit (create or block/unblock) is in flight
#[derive(Clone, Debug, Default)]
pub struct LoadingState {
    list: bool,
    dialog: bool,
}

impl LoadingState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the list fetch as in-flight.
    pub fn set_list(&mut self) {
        self.list = true;
    }

    pub fn clear_list(&mut self) {
        self.list = false;
    }

    pub fn is_list(&self) -> bool {
        self.list
    }

    /// Mark a dialog operation as in-flight.
    pub fn set_dialog(&mut self) {
        self.dialog = true;
    }

    /// Clear the dialog operation flag.
    pub fn clear_dialog(&mut self) {
        self.dialog = false;
    }

    /// Check if a dialog operation is in-flight.
    pub fn is_dialog(&self) -> bool {
        self.dialog
    }

    /// True while any request is outstanding.
    pub fn is_any(&self) -> bool {
        self.list || self.dialog
    }
}
