//! Shell orchestrator.
//!
//! This module coordinates the shell state machine and side effects. It is
//! the single writer of the session state: every mutation goes through
//! `dispatch`, which is serialized by the context's dispatch lock.

use std::sync::Arc;

use tokio::sync::{mpsc, Mutex};
use tokio::task::JoinHandle;
use tracing::{debug, info, info_span, warn, Instrument};

use pm_core::{
    config::ShellConfig,
    ids::TimerId,
    login::LoginMethod,
    navigation::Tab,
    otp::FocusAdvance,
    permissions::Capability,
    ports::{
        CodeVerifierPort, PermissionDecision, PermissionRequesterPort, ShellEventPort,
        TimerExpiredSender, TimerPort, VerificationOutcome,
    },
    profile::ProfileField,
    shell::{ShellAction, ShellEvent, ShellPolicy, ShellSnapshot, ShellState, ShellStateMachine},
};

use crate::deps::ShellDeps;
use crate::usecases::shell::context::ShellContext;

/// Errors produced by the shell orchestrator.
///
/// A failed port call aborts the dispatch before the new state is stored,
/// so the session stays where it was.
#[derive(Debug, thiserror::Error)]
pub enum ShellOrchestratorError {
    #[error("timer operation failed: {0}")]
    Timer(#[source] anyhow::Error),
    #[error("code verification failed: {0}")]
    Verification(#[source] anyhow::Error),
    #[error("permission request for {capability} failed: {source}")]
    PermissionRequest {
        capability: Capability,
        #[source]
        source: anyhow::Error,
    },
}

/// Result of entering one OTP digit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OtpDigitOutcome {
    pub snapshot: ShellSnapshot,
    /// Slot the presentation layer should focus next, if any.
    pub focus: Option<FocusAdvance>,
}

struct DispatchResult {
    state: ShellState,
    focus: Option<FocusAdvance>,
}

/// Orchestrator that drives shell state and side effects.
pub struct ShellOrchestrator {
    context: ShellContext,
    machine: ShellStateMachine,
    splash_delay_ms: u64,

    timer_port: Arc<Mutex<dyn TimerPort>>,
    code_verifier: Arc<dyn CodeVerifierPort>,
    permission_requester: Arc<dyn PermissionRequesterPort>,
    shell_event_port: Arc<dyn ShellEventPort>,

    timer_expired_tx: TimerExpiredSender,
    timer_expired_rx: Mutex<Option<mpsc::UnboundedReceiver<TimerId>>>,
}

impl ShellOrchestrator {
    pub fn new(config: &ShellConfig, deps: ShellDeps) -> Self {
        let (timer_expired_tx, timer_expired_rx) = mpsc::unbounded_channel();
        let policy = ShellPolicy {
            clear_login_value_on_method_switch: config.clear_login_value_on_method_switch,
        };
        Self {
            context: ShellContext::new(ShellState::new()),
            machine: ShellStateMachine::new(policy),
            splash_delay_ms: config.splash_delay_ms,
            timer_port: deps.timer,
            code_verifier: deps.code_verifier,
            permission_requester: deps.permission_requester,
            shell_event_port: deps.shell_events,
            timer_expired_tx,
            timer_expired_rx: Mutex::new(Some(timer_expired_rx)),
        }
    }

    /// Spawns the task that turns expired timers into `SplashElapsed`
    /// events. Returns `None` if the listener was already started.
    pub async fn spawn_timer_listener(self: &Arc<Self>) -> Option<JoinHandle<()>> {
        let mut rx = self.timer_expired_rx.lock().await.take()?;
        let orchestrator = Arc::clone(self);
        Some(tokio::spawn(async move {
            while let Some(timer_id) = rx.recv().await {
                if let Err(err) = orchestrator.on_timer_expired(timer_id).await {
                    warn!(error = %err, "failed to handle expired timer");
                }
            }
        }))
    }

    /// Mounts the shell on the splash screen and arms the auto-advance timer.
    pub async fn launch(&self) -> Result<ShellSnapshot, ShellOrchestratorError> {
        let timer_id = TimerId::new();
        self.dispatch_snapshot(ShellEvent::Launch { timer_id }).await
    }

    /// Tears the shell down, cancelling a pending splash timer.
    pub async fn unmount(&self) -> Result<ShellSnapshot, ShellOrchestratorError> {
        self.dispatch_snapshot(ShellEvent::Unmount).await
    }

    pub async fn on_timer_expired(
        &self,
        timer_id: TimerId,
    ) -> Result<ShellSnapshot, ShellOrchestratorError> {
        self.dispatch_snapshot(ShellEvent::SplashElapsed { timer_id })
            .await
    }

    pub async fn create_account(&self) -> Result<ShellSnapshot, ShellOrchestratorError> {
        self.dispatch_snapshot(ShellEvent::CreateAccount).await
    }

    pub async fn sign_in(&self) -> Result<ShellSnapshot, ShellOrchestratorError> {
        self.dispatch_snapshot(ShellEvent::SignIn).await
    }

    pub async fn back(&self) -> Result<ShellSnapshot, ShellOrchestratorError> {
        self.dispatch_snapshot(ShellEvent::Back).await
    }

    pub async fn update_profile(
        &self,
        field: ProfileField,
        value: String,
    ) -> Result<ShellSnapshot, ShellOrchestratorError> {
        self.dispatch_snapshot(ShellEvent::UpdateProfile { field, value })
            .await
    }

    pub async fn submit_registration(&self) -> Result<ShellSnapshot, ShellOrchestratorError> {
        self.dispatch_snapshot(ShellEvent::SubmitRegistration).await
    }

    pub async fn select_login_method(
        &self,
        method: LoginMethod,
    ) -> Result<ShellSnapshot, ShellOrchestratorError> {
        self.dispatch_snapshot(ShellEvent::SelectLoginMethod { method })
            .await
    }

    pub async fn update_login_value(
        &self,
        value: String,
    ) -> Result<ShellSnapshot, ShellOrchestratorError> {
        self.dispatch_snapshot(ShellEvent::UpdateLoginValue { value })
            .await
    }

    pub async fn submit_login(&self) -> Result<ShellSnapshot, ShellOrchestratorError> {
        self.dispatch_snapshot(ShellEvent::SubmitLogin).await
    }

    pub async fn enter_otp_digit(
        &self,
        index: usize,
        raw: String,
    ) -> Result<OtpDigitOutcome, ShellOrchestratorError> {
        let result = self
            .dispatch(ShellEvent::EnterOtpDigit { index, raw })
            .await?;
        Ok(OtpDigitOutcome {
            snapshot: ShellSnapshot::from(&result.state),
            focus: result.focus,
        })
    }

    pub async fn verify_code(&self) -> Result<ShellSnapshot, ShellOrchestratorError> {
        self.dispatch_snapshot(ShellEvent::VerifyCode).await
    }

    pub async fn request_permission(
        &self,
        capability: Capability,
    ) -> Result<ShellSnapshot, ShellOrchestratorError> {
        self.dispatch_snapshot(ShellEvent::RequestPermission { capability })
            .await
    }

    pub async fn continue_to_main(&self) -> Result<ShellSnapshot, ShellOrchestratorError> {
        self.dispatch_snapshot(ShellEvent::ContinueToMain).await
    }

    pub async fn select_tab(&self, tab: Tab) -> Result<ShellSnapshot, ShellOrchestratorError> {
        self.dispatch_snapshot(ShellEvent::SelectTab { tab }).await
    }

    pub async fn get_state(&self) -> ShellState {
        self.context.read().await
    }

    pub async fn snapshot(&self) -> ShellSnapshot {
        ShellSnapshot::from(&self.context.read().await)
    }

    async fn dispatch_snapshot(
        &self,
        event: ShellEvent,
    ) -> Result<ShellSnapshot, ShellOrchestratorError> {
        let result = self.dispatch(event).await?;
        Ok(ShellSnapshot::from(&result.state))
    }

    async fn dispatch(&self, event: ShellEvent) -> Result<DispatchResult, ShellOrchestratorError> {
        let _dispatch_guard = self.context.lock_dispatch().await;

        let span = info_span!("usecase.shell_orchestrator.dispatch", event = ?event);
        async {
            let mut current = self.context.read().await;
            let mut focus = None;
            let mut pending_events = vec![event];

            while let Some(event) = pending_events.pop() {
                let from = current.screen;
                let event_name = format!("{:?}", event);
                let (next, actions) = self.machine.transition(current.clone(), event);
                info!(from = %from, to = %next.screen, event = %event_name, "shell state transition");

                let follow_up_events = self.execute_actions(actions, &mut focus).await?;
                if let Some(committed) = self.context.commit(next).await {
                    if committed.screen.is_terminal() && !from.is_terminal() {
                        info!(revision = committed.revision, "onboarding complete");
                    }
                    self.shell_event_port
                        .emit_shell_state_changed(ShellSnapshot::from(&committed))
                        .await;
                    current = committed;
                }
                pending_events.extend(follow_up_events);
            }

            Ok(DispatchResult {
                state: current,
                focus,
            })
        }
        .instrument(span)
        .await
    }

    async fn execute_actions(
        &self,
        actions: Vec<ShellAction>,
        focus: &mut Option<FocusAdvance>,
    ) -> Result<Vec<ShellEvent>, ShellOrchestratorError> {
        let mut follow_up_events = Vec::new();
        for action in actions {
            debug!(?action, "shell executing action");
            match action {
                ShellAction::ArmSplashTimer { timer_id } => {
                    self.timer_port
                        .lock()
                        .await
                        .start(
                            &timer_id,
                            self.splash_delay_ms,
                            self.timer_expired_tx.clone(),
                        )
                        .await
                        .map_err(ShellOrchestratorError::Timer)?;
                    debug!(%timer_id, delay_ms = self.splash_delay_ms, "splash timer armed");
                }
                ShellAction::CancelSplashTimer { timer_id } => {
                    self.timer_port
                        .lock()
                        .await
                        .stop(&timer_id)
                        .await
                        .map_err(ShellOrchestratorError::Timer)?;
                    debug!(%timer_id, "splash timer cancelled");
                }
                ShellAction::FocusOtpSlot { index } => {
                    *focus = Some(FocusAdvance { to: index });
                }
                ShellAction::VerifyCode { code } => {
                    let outcome = self
                        .code_verifier
                        .verify(&code)
                        .await
                        .map_err(ShellOrchestratorError::Verification)?;
                    debug!(?outcome, complete = code.is_complete(), "code verification finished");
                    follow_up_events.push(match outcome {
                        VerificationOutcome::Accepted => ShellEvent::CodeAccepted,
                        VerificationOutcome::Rejected => ShellEvent::CodeRejected,
                    });
                }
                ShellAction::RequestPermission { capability } => {
                    let decision = self
                        .permission_requester
                        .request(capability)
                        .await
                        .map_err(|source| ShellOrchestratorError::PermissionRequest {
                            capability,
                            source,
                        })?;
                    debug!(%capability, ?decision, "permission request finished");
                    follow_up_events.push(match decision {
                        PermissionDecision::Granted => ShellEvent::PermissionGranted { capability },
                        PermissionDecision::Denied => ShellEvent::PermissionDenied { capability },
                    });
                }
            }
        }

        Ok(follow_up_events)
    }
}
