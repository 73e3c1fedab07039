//! Shell commands
//!
//! One function per input action. Each opens its own command span and
//! delegates to the shell orchestrator.

use pm_core::{
    login::LoginMethod, navigation::Tab, permissions::Capability, profile::ProfileField,
};
use tracing::{info_span, Instrument};

use crate::bootstrap::ShellRuntime;
use crate::commands::dto::CommandReply;
use crate::commands::error::map_err;

/// Get the current shell snapshot without changing it.
pub async fn get_state(runtime: &ShellRuntime) -> Result<CommandReply, String> {
    let span = info_span!("command.shell.get_state");
    async { Ok(runtime.shell_orchestrator().snapshot().await.into()) }
        .instrument(span)
        .await
}

pub async fn create_account(runtime: &ShellRuntime) -> Result<CommandReply, String> {
    let span = info_span!("command.shell.create_account");
    async {
        let orchestrator = runtime.shell_orchestrator();
        orchestrator
            .create_account()
            .await
            .map(CommandReply::from)
            .map_err(map_err)
    }
    .instrument(span)
    .await
}

pub async fn sign_in(runtime: &ShellRuntime) -> Result<CommandReply, String> {
    let span = info_span!("command.shell.sign_in");
    async {
        let orchestrator = runtime.shell_orchestrator();
        orchestrator
            .sign_in()
            .await
            .map(CommandReply::from)
            .map_err(map_err)
    }
    .instrument(span)
    .await
}

pub async fn back(runtime: &ShellRuntime) -> Result<CommandReply, String> {
    let span = info_span!("command.shell.back");
    async {
        let orchestrator = runtime.shell_orchestrator();
        orchestrator
            .back()
            .await
            .map(CommandReply::from)
            .map_err(map_err)
    }
    .instrument(span)
    .await
}

pub async fn update_profile(
    runtime: &ShellRuntime,
    field: ProfileField,
    value: String,
) -> Result<CommandReply, String> {
    let span = info_span!("command.shell.update_profile", field = %field.as_str());
    async {
        let orchestrator = runtime.shell_orchestrator();
        orchestrator
            .update_profile(field, value)
            .await
            .map(CommandReply::from)
            .map_err(map_err)
    }
    .instrument(span)
    .await
}

pub async fn submit_registration(runtime: &ShellRuntime) -> Result<CommandReply, String> {
    let span = info_span!("command.shell.submit_registration");
    async {
        let orchestrator = runtime.shell_orchestrator();
        orchestrator
            .submit_registration()
            .await
            .map(CommandReply::from)
            .map_err(map_err)
    }
    .instrument(span)
    .await
}

pub async fn select_login_method(
    runtime: &ShellRuntime,
    method: LoginMethod,
) -> Result<CommandReply, String> {
    let span = info_span!("command.shell.select_login_method", method = ?method);
    async {
        let orchestrator = runtime.shell_orchestrator();
        orchestrator
            .select_login_method(method)
            .await
            .map(CommandReply::from)
            .map_err(map_err)
    }
    .instrument(span)
    .await
}

pub async fn update_login_value(
    runtime: &ShellRuntime,
    value: String,
) -> Result<CommandReply, String> {
    let span = info_span!("command.shell.update_login_value");
    async {
        let orchestrator = runtime.shell_orchestrator();
        orchestrator
            .update_login_value(value)
            .await
            .map(CommandReply::from)
            .map_err(map_err)
    }
    .instrument(span)
    .await
}

pub async fn submit_login(runtime: &ShellRuntime) -> Result<CommandReply, String> {
    let span = info_span!("command.shell.submit_login");
    async {
        let orchestrator = runtime.shell_orchestrator();
        orchestrator
            .submit_login()
            .await
            .map(CommandReply::from)
            .map_err(map_err)
    }
    .instrument(span)
    .await
}

/// Enter one OTP digit. The reply carries the focus advance, if any.
pub async fn enter_otp_digit(
    runtime: &ShellRuntime,
    index: usize,
    value: String,
) -> Result<CommandReply, String> {
    let span = info_span!("command.shell.enter_otp_digit", index);
    async {
        let outcome = runtime
            .shell_orchestrator()
            .enter_otp_digit(index, value)
            .await
            .map_err(map_err)?;
        Ok(CommandReply {
            snapshot: outcome.snapshot,
            focus: outcome.focus,
        })
    }
    .instrument(span)
    .await
}

pub async fn verify_code(runtime: &ShellRuntime) -> Result<CommandReply, String> {
    let span = info_span!("command.shell.verify_code");
    async {
        let orchestrator = runtime.shell_orchestrator();
        orchestrator
            .verify_code()
            .await
            .map(CommandReply::from)
            .map_err(map_err)
    }
    .instrument(span)
    .await
}

pub async fn request_permission(
    runtime: &ShellRuntime,
    capability: Capability,
) -> Result<CommandReply, String> {
    let span = info_span!("command.shell.request_permission", capability = %capability);
    async {
        let orchestrator = runtime.shell_orchestrator();
        orchestrator
            .request_permission(capability)
            .await
            .map(CommandReply::from)
            .map_err(map_err)
    }
    .instrument(span)
    .await
}

pub async fn continue_to_main(runtime: &ShellRuntime) -> Result<CommandReply, String> {
    let span = info_span!("command.shell.continue_to_main");
    async {
        let orchestrator = runtime.shell_orchestrator();
        orchestrator
            .continue_to_main()
            .await
            .map(CommandReply::from)
            .map_err(map_err)
    }
    .instrument(span)
    .await
}

pub async fn select_tab(
    runtime: &ShellRuntime,
    tab: Tab,
) -> Result<CommandReply, String> {
    let span = info_span!("command.shell.select_tab", tab = ?tab);
    async {
        let orchestrator = runtime.shell_orchestrator();
        orchestrator
            .select_tab(tab)
            .await
            .map(CommandReply::from)
            .map_err(map_err)
    }
    .instrument(span)
    .await
}
