pub mod dto;
pub mod error;
pub mod shell;

pub use dto::{BridgeMessage, CommandReply, ShellCommand};
pub use error::map_err;

use crate::bootstrap::ShellRuntime;

/// Route a decoded command to its handler.
pub async fn execute_command(
    runtime: &ShellRuntime,
    command: ShellCommand,
) -> Result<CommandReply, String> {
    match command {
        ShellCommand::GetState => shell::get_state(runtime).await,
        ShellCommand::CreateAccount => shell::create_account(runtime).await,
        ShellCommand::SignIn => shell::sign_in(runtime).await,
        ShellCommand::Back => shell::back(runtime).await,
        ShellCommand::UpdateProfile { field, value } => {
            shell::update_profile(runtime, field, value).await
        }
        ShellCommand::SubmitRegistration => shell::submit_registration(runtime).await,
        ShellCommand::SelectLoginMethod { method } => {
            shell::select_login_method(runtime, method).await
        }
        ShellCommand::UpdateLoginValue { value } => {
            shell::update_login_value(runtime, value).await
        }
        ShellCommand::SubmitLogin => shell::submit_login(runtime).await,
        ShellCommand::EnterOtpDigit { index, value } => {
            shell::enter_otp_digit(runtime, index, value).await
        }
        ShellCommand::VerifyCode => shell::verify_code(runtime).await,
        ShellCommand::RequestPermission { capability } => {
            shell::request_permission(runtime, capability).await
        }
        ShellCommand::ContinueToMain => shell::continue_to_main(runtime).await,
        ShellCommand::SelectTab { tab } => shell::select_tab(runtime, tab).await,
    }
}
