use std::sync::{Arc, Mutex as StdMutex};

use async_trait::async_trait;
use mockall::mock;
use pm_app::{ShellDeps, ShellOrchestrator, ShellOrchestratorError};
use pm_core::config::ShellConfig;
use pm_core::ids::TimerId;
use pm_core::login::LoginMethod;
use pm_core::navigation::{Screen, Tab};
use pm_core::otp::{FocusAdvance, OtpCode};
use pm_core::permissions::Capability;
use pm_core::ports::{
    CodeVerifierPort, PermissionDecision, PermissionRequesterPort, ShellEventPort,
    TimerExpiredSender, TimerPort, VerificationOutcome,
};
use pm_core::profile::ProfileField;
use pm_core::shell::ShellSnapshot;
use pm_infra::{SimulatedCodeVerifier, SimulatedPermissionRequester, Timer};
use tokio::sync::Mutex;
use tokio::time::{sleep, Duration};

#[derive(Default)]
struct RecordingEventPort {
    snapshots: StdMutex<Vec<ShellSnapshot>>,
}

impl RecordingEventPort {
    fn screens(&self) -> Vec<Screen> {
        self.snapshots
            .lock()
            .unwrap()
            .iter()
            .map(|s| s.screen)
            .collect()
    }
}

#[async_trait]
impl ShellEventPort for RecordingEventPort {
    async fn emit_shell_state_changed(&self, snapshot: ShellSnapshot) {
        self.snapshots.lock().unwrap().push(snapshot);
    }
}

struct FailingTimer;

#[async_trait]
impl TimerPort for FailingTimer {
    async fn start(
        &mut self,
        _timer_id: &TimerId,
        _delay_ms: u64,
        _expired: TimerExpiredSender,
    ) -> anyhow::Result<()> {
        Err(anyhow::anyhow!("no timer backend"))
    }

    async fn stop(&mut self, _timer_id: &TimerId) -> anyhow::Result<()> {
        Ok(())
    }
}

struct DenyingRequester;

#[async_trait]
impl PermissionRequesterPort for DenyingRequester {
    async fn request(&self, _capability: Capability) -> anyhow::Result<PermissionDecision> {
        Ok(PermissionDecision::Denied)
    }
}

mock! {
    pub Verifier {}

    #[async_trait]
    impl CodeVerifierPort for Verifier {
        async fn verify(&self, code: &OtpCode) -> anyhow::Result<VerificationOutcome>;
    }
}

struct Harness {
    orchestrator: Arc<ShellOrchestrator>,
    events: Arc<RecordingEventPort>,
}

fn build_with(
    config: ShellConfig,
    timer: Arc<Mutex<dyn TimerPort>>,
    code_verifier: Arc<dyn CodeVerifierPort>,
    permission_requester: Arc<dyn PermissionRequesterPort>,
) -> Harness {
    let events = Arc::new(RecordingEventPort::default());
    let orchestrator = ShellOrchestrator::new(
        &config,
        ShellDeps {
            timer,
            code_verifier,
            permission_requester,
            shell_events: events.clone(),
        },
    );
    Harness {
        orchestrator: Arc::new(orchestrator),
        events,
    }
}

fn build() -> Harness {
    build_with(
        ShellConfig::default(),
        Arc::new(Mutex::new(Timer::new())),
        Arc::new(SimulatedCodeVerifier::default()),
        Arc::new(SimulatedPermissionRequester::new()),
    )
}

async fn launch_past_splash(harness: &Harness) {
    harness.orchestrator.spawn_timer_listener().await;
    harness.orchestrator.launch().await.expect("launch");
    sleep(Duration::from_millis(3001)).await;
    assert_eq!(harness.orchestrator.snapshot().await.screen, Screen::AuthChoice);
}

async fn fill_profile(orchestrator: &ShellOrchestrator) {
    for (field, value) in [
        (ProfileField::FirstName, "Ada"),
        (ProfileField::LastName, "Lovelace"),
        (ProfileField::Email, "ada@example.com"),
        (ProfileField::Phone, "5551234567"),
        (ProfileField::Gender, "female"),
        (ProfileField::DateOfBirth, "1815-12-10"),
    ] {
        orchestrator
            .update_profile(field, value.to_string())
            .await
            .expect("update profile");
    }
}

#[tokio::test(start_paused = true)]
async fn register_path_reaches_permissions_with_empty_code() {
    let harness = build();
    let orchestrator = &harness.orchestrator;
    assert!(orchestrator.spawn_timer_listener().await.is_some());
    assert!(orchestrator.spawn_timer_listener().await.is_none());

    let state = orchestrator.launch().await.expect("launch");
    assert_eq!(state.screen, Screen::Splash);

    sleep(Duration::from_millis(2999)).await;
    assert_eq!(orchestrator.snapshot().await.screen, Screen::Splash);

    sleep(Duration::from_millis(2)).await;
    assert_eq!(orchestrator.snapshot().await.screen, Screen::AuthChoice);

    let state = orchestrator.create_account().await.expect("create account");
    assert_eq!(state.screen, Screen::Register);

    fill_profile(orchestrator).await;
    let state = orchestrator
        .submit_registration()
        .await
        .expect("submit registration");
    assert_eq!(state.screen, Screen::OtpVerify);
    assert_eq!(state.verification_destination, "ada@example.com");

    let state = orchestrator.verify_code().await.expect("verify");
    assert_eq!(state.screen, Screen::Permissions);
    assert!(state.otp.slots.iter().all(String::is_empty));

    assert_eq!(
        harness.events.screens().last().copied(),
        Some(Screen::Permissions)
    );
}

#[tokio::test(start_paused = true)]
async fn splash_fires_exactly_once() {
    let harness = build();
    launch_past_splash(&harness).await;

    // a second launch on a non-splash screen arms nothing
    harness.orchestrator.launch().await.expect("launch");
    sleep(Duration::from_millis(10_000)).await;

    let auth_choice_entries = harness
        .events
        .screens()
        .into_iter()
        .filter(|s| *s == Screen::AuthChoice)
        .count();
    assert_eq!(auth_choice_entries, 1);
    assert_eq!(harness.orchestrator.snapshot().await.screen, Screen::AuthChoice);
}

#[tokio::test(start_paused = true)]
async fn every_emitted_change_carries_a_newer_revision() {
    let harness = build();
    launch_past_splash(&harness).await;

    // Ignored events commit nothing.
    harness.orchestrator.submit_login().await.expect("submit");
    harness.orchestrator.sign_in().await.expect("sign in");

    let revisions: Vec<u64> = harness
        .events
        .snapshots
        .lock()
        .unwrap()
        .iter()
        .map(|s| s.revision)
        .collect();
    assert_eq!(revisions, vec![1, 2, 3]);

    let snapshot = harness.orchestrator.snapshot().await;
    assert_eq!(snapshot.screen, Screen::Login);
    assert_eq!(snapshot.revision, 3);
}

#[tokio::test(start_paused = true)]
async fn unmount_before_delay_cancels_splash() {
    let harness = build();
    harness.orchestrator.spawn_timer_listener().await;
    harness.orchestrator.launch().await.expect("launch");

    sleep(Duration::from_millis(1500)).await;
    harness.orchestrator.unmount().await.expect("unmount");
    sleep(Duration::from_millis(5000)).await;

    let state = harness.orchestrator.get_state().await;
    assert_eq!(state.screen, Screen::Splash);
    assert!(state.splash_timer.is_none());
}

#[tokio::test(start_paused = true)]
async fn continue_requires_all_permissions() {
    let harness = build();
    let orchestrator = &harness.orchestrator;
    launch_past_splash(&harness).await;
    orchestrator.sign_in().await.expect("sign in");
    orchestrator
        .update_login_value("ada@example.com".into())
        .await
        .expect("login value");
    orchestrator.submit_login().await.expect("submit login");
    orchestrator.verify_code().await.expect("verify");

    orchestrator
        .request_permission(Capability::Camera)
        .await
        .expect("camera");
    orchestrator
        .request_permission(Capability::Media)
        .await
        .expect("media");
    let state = orchestrator.continue_to_main().await.expect("continue");
    assert_eq!(state.screen, Screen::Permissions);
    assert!(!state.can_continue);

    let state = orchestrator
        .request_permission(Capability::Location)
        .await
        .expect("location");
    assert!(state.permissions.all_granted);
    assert!(state.can_continue);

    let state = orchestrator.continue_to_main().await.expect("continue");
    assert_eq!(state.screen, Screen::Main);
    assert_eq!(state.tab, Some(Tab::Home));

    let state = orchestrator.select_tab(Tab::Profile).await.expect("tab");
    assert_eq!(state.tab, Some(Tab::Profile));
}

#[tokio::test(start_paused = true)]
async fn otp_entry_reports_focus_advance() {
    let harness = build();
    let orchestrator = &harness.orchestrator;
    launch_past_splash(&harness).await;
    orchestrator.sign_in().await.expect("sign in");
    orchestrator
        .update_login_value("5551234567".into())
        .await
        .expect("login value");
    orchestrator.submit_login().await.expect("submit login");

    let outcome = orchestrator
        .enter_otp_digit(0, "ab".into())
        .await
        .expect("digit");
    assert_eq!(outcome.focus, None);
    assert_eq!(outcome.snapshot.otp.slots[0], "");

    let outcome = orchestrator
        .enter_otp_digit(0, "7".into())
        .await
        .expect("digit");
    assert_eq!(outcome.focus, Some(FocusAdvance { to: 1 }));
    assert_eq!(outcome.snapshot.otp.slots[0], "7");
    assert_eq!(outcome.snapshot.otp.focused, 1);

    let outcome = orchestrator
        .enter_otp_digit(5, "2".into())
        .await
        .expect("digit");
    assert_eq!(outcome.focus, None);
}

#[tokio::test(start_paused = true)]
async fn login_method_switch_keeps_value() {
    let harness = build();
    let orchestrator = &harness.orchestrator;
    launch_past_splash(&harness).await;
    orchestrator.sign_in().await.expect("sign in");

    orchestrator
        .select_login_method(LoginMethod::Phone)
        .await
        .expect("phone");
    orchestrator
        .update_login_value("5551234567".into())
        .await
        .expect("value");
    let state = orchestrator
        .select_login_method(LoginMethod::Email)
        .await
        .expect("email");
    assert_eq!(state.login.method, LoginMethod::Email);
    assert_eq!(state.login.value, "5551234567");
    assert_eq!(state.login_input_hint, "email");
}

#[tokio::test(start_paused = true)]
async fn login_method_switch_clears_value_when_configured() {
    let config = ShellConfig {
        clear_login_value_on_method_switch: true,
        ..ShellConfig::default()
    };
    let harness = build_with(
        config,
        Arc::new(Mutex::new(Timer::new())),
        Arc::new(SimulatedCodeVerifier::default()),
        Arc::new(SimulatedPermissionRequester::new()),
    );
    launch_past_splash(&harness).await;
    let orchestrator = &harness.orchestrator;
    orchestrator.sign_in().await.expect("sign in");
    orchestrator
        .update_login_value("5551234567".into())
        .await
        .expect("value");
    let state = orchestrator
        .select_login_method(LoginMethod::Phone)
        .await
        .expect("phone");
    assert!(state.login.value.is_empty());
}

#[tokio::test(start_paused = true)]
async fn rejected_code_keeps_otp_screen() {
    let mut verifier = MockVerifier::new();
    verifier
        .expect_verify()
        .withf(|code: &OtpCode| code.as_str() == "4")
        .times(1)
        .returning(|_| Ok(VerificationOutcome::Rejected));

    let harness = build_with(
        ShellConfig::default(),
        Arc::new(Mutex::new(Timer::new())),
        Arc::new(verifier),
        Arc::new(SimulatedPermissionRequester::new()),
    );
    launch_past_splash(&harness).await;
    let orchestrator = &harness.orchestrator;
    orchestrator.sign_in().await.expect("sign in");
    orchestrator
        .update_login_value("ada@example.com".into())
        .await
        .expect("value");
    orchestrator.submit_login().await.expect("submit");
    orchestrator
        .enter_otp_digit(0, "4".into())
        .await
        .expect("digit");

    let state = orchestrator.verify_code().await.expect("verify");
    assert_eq!(state.screen, Screen::OtpVerify);
}

#[tokio::test(start_paused = true)]
async fn strict_verifier_rejects_incomplete_code() {
    let harness = build_with(
        ShellConfig::default(),
        Arc::new(Mutex::new(Timer::new())),
        Arc::new(SimulatedCodeVerifier::new(true)),
        Arc::new(SimulatedPermissionRequester::new()),
    );
    launch_past_splash(&harness).await;
    let orchestrator = &harness.orchestrator;
    orchestrator.sign_in().await.expect("sign in");
    orchestrator
        .update_login_value("ada@example.com".into())
        .await
        .expect("value");
    orchestrator.submit_login().await.expect("submit");

    let state = orchestrator.verify_code().await.expect("verify");
    assert_eq!(state.screen, Screen::OtpVerify);

    for (index, digit) in ["1", "2", "3", "4", "5", "6"].into_iter().enumerate() {
        orchestrator
            .enter_otp_digit(index, digit.into())
            .await
            .expect("digit");
    }
    let state = orchestrator.verify_code().await.expect("verify");
    assert_eq!(state.screen, Screen::Permissions);
}

#[tokio::test(start_paused = true)]
async fn denied_permission_blocks_main() {
    let harness = build_with(
        ShellConfig::default(),
        Arc::new(Mutex::new(Timer::new())),
        Arc::new(SimulatedCodeVerifier::default()),
        Arc::new(DenyingRequester),
    );
    launch_past_splash(&harness).await;
    let orchestrator = &harness.orchestrator;
    orchestrator.sign_in().await.expect("sign in");
    orchestrator
        .update_login_value("ada@example.com".into())
        .await
        .expect("value");
    orchestrator.submit_login().await.expect("submit");
    orchestrator.verify_code().await.expect("verify");

    for capability in Capability::ALL {
        let state = orchestrator
            .request_permission(capability)
            .await
            .expect("request");
        assert!(!state.permissions.all_granted);
    }
    let state = orchestrator.continue_to_main().await.expect("continue");
    assert_eq!(state.screen, Screen::Permissions);
}

#[tokio::test]
async fn timer_failure_leaves_state_unchanged() {
    let harness = build_with(
        ShellConfig::default(),
        Arc::new(Mutex::new(FailingTimer)),
        Arc::new(SimulatedCodeVerifier::default()),
        Arc::new(SimulatedPermissionRequester::new()),
    );

    let err = harness
        .orchestrator
        .launch()
        .await
        .expect_err("launch should fail");
    assert!(matches!(err, ShellOrchestratorError::Timer(_)));

    let state = harness.orchestrator.get_state().await;
    assert_eq!(state.screen, Screen::Splash);
    assert!(state.splash_timer.is_none());
    assert!(harness.events.screens().is_empty());
}

#[tokio::test(start_paused = true)]
async fn incomplete_registration_stays_on_register() {
    let harness = build();
    launch_past_splash(&harness).await;
    let orchestrator = &harness.orchestrator;
    orchestrator.create_account().await.expect("create account");
    orchestrator
        .update_profile(ProfileField::FirstName, "Ada".into())
        .await
        .expect("first name");

    let state = orchestrator
        .submit_registration()
        .await
        .expect("submit registration");
    assert_eq!(state.screen, Screen::Register);
    assert!(!state.can_submit_registration);
    assert_eq!(state.display_name, "Ada");

    let state = orchestrator.back().await.expect("back");
    assert_eq!(state.screen, Screen::AuthChoice);
    assert_eq!(state.profile.first_name, "Ada");
}
