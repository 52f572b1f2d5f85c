use loginflow::config::DemoConfig;
use loginflow::entities::User;
use loginflow::host::{run_flow, run_home, run_login, HostEvent, Services};
use loginflow::services::SimulatedFailure;
use loginflow::ui::alert::AlertCategory;
use loginflow::ui::login::LoginAlert;

fn demo_config() -> DemoConfig {
    DemoConfig {
        latency_ms: 0,
        ..DemoConfig::default()
    }
}

#[tokio::test]
async fn full_flow_logs_in_loads_and_logs_out() {
    let config = demo_config();
    let services = Services::in_memory(&config);

    let events = run_flow(&services, "koher", "pw").await;

    assert_eq!(
        events,
        vec![
            HostEvent::NavigatedToHome,
            HostEvent::UserLoaded(config.user.clone()),
            HostEvent::Dismissed,
        ]
    );
}

#[tokio::test]
async fn wrong_password_stays_on_login() {
    let services = Services::in_memory(&demo_config());

    let events = run_flow(&services, "koher", "nope").await;

    assert_eq!(
        events,
        vec![HostEvent::LoginFailed(LoginAlert::InvalidCredentials)]
    );
}

#[tokio::test]
async fn empty_password_disables_submit() {
    let services = Services::in_memory(&demo_config());

    let events = run_login(&services, "koher", "").await;

    assert_eq!(events, vec![HostEvent::SubmitDisabled]);
}

#[tokio::test]
async fn home_without_session_shows_authentication_alert_and_dismisses() {
    let services = Services::in_memory(&demo_config());

    let events = run_home(&services).await;

    assert_eq!(
        events,
        vec![
            HostEvent::AlertShown(AlertCategory::Authentication),
            HostEvent::Dismissed,
        ]
    );
}

#[tokio::test]
async fn simulated_network_failure_shows_network_alert() {
    let config = DemoConfig {
        user_failure: Some(SimulatedFailure::Network),
        ..demo_config()
    };
    let services = Services::in_memory(&config);

    let events = run_flow(&services, "koher", "pw").await;

    assert_eq!(
        events,
        vec![
            HostEvent::NavigatedToHome,
            HostEvent::AlertShown(AlertCategory::Network),
            HostEvent::Dismissed,
        ]
    );
}

#[test]
fn events_render_for_terminal() {
    let user = User::new("koher", "Yuta Koshizawa", "");
    assert_eq!(
        HostEvent::UserLoaded(user).to_string(),
        "home: Yuta Koshizawa (@koher)"
    );
    assert_eq!(
        HostEvent::AlertShown(AlertCategory::Server).to_string(),
        "home: [Server Error] Please try again later."
    );
}
