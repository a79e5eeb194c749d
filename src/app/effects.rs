use crate::app::{App, Message, Model, ToastLevel};
use crate::notepad::Submission;

impl App {
    pub(super) fn handle_message_side_effects(model: &mut Model, msg: &Message) {
        if matches!(msg, Message::SubmitCommand) {
            Self::submit_command(model);
        }
    }

    /// Hand the command line to the notepad. Saving writes to storage here.
    fn submit_command(model: &mut Model) {
        let _scope = crate::perf::scope("app.submit_command");
        let line = std::mem::take(&mut model.command_input);
        let submission = model.notepad.submit(&line);
        crate::perf::log_event(
            "notepad.submit",
            format!("input={line:?} submission={submission:?}"),
        );
        model.apply_submission(&submission);
        if let Submission::Executed { result, .. } = &submission
            && !result.success
        {
            model.show_toast(ToastLevel::Error, result.message.clone());
        }
    }
}
