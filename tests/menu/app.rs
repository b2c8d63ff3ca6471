use crate::common::{
    eventually, write_config, LaunchCall, RecordingHost, RecordingLauncher, ONE_GROUP_CONFIG, TWO_GROUP_CONFIG,
};
use qol_launcher::app::LauncherApp;
use qol_launcher::command::{CommandInterpreter, Launcher};
use qol_launcher::config::ConfigStore;
use qol_launcher::menu::{ClickDispatcher, ControlAction, EventRouter, UP_TO_DATE_LABEL};
use qol_launcher::settings::LauncherSettings;
use std::sync::Arc;
use tempfile::TempDir;
use tokio::runtime::Handle;

struct Fixture {
    _dir: TempDir,
    config_file: std::path::PathBuf,
    launcher: Arc<RecordingLauncher>,
    host: RecordingHost,
    app: LauncherApp,
}

fn fixture(initial_config: &str) -> Fixture {
    let dir = TempDir::new().unwrap();
    let config_file = dir.path().join("config.json");
    write_config(&config_file, initial_config);

    let settings = LauncherSettings {
        config_file: config_file.clone(),
        ..Default::default()
    };
    let launcher = Arc::new(RecordingLauncher::default());
    let shared: Arc<dyn Launcher> = launcher.clone();
    let interpreter = Arc::new(CommandInterpreter::new(shared, Some(dir.path().to_path_buf())));
    let dispatcher = ClickDispatcher::new(EventRouter::new(), interpreter, Handle::current());
    let mut app = LauncherApp::new(settings, Arc::new(ConfigStore::default()), dispatcher);
    let mut host = RecordingHost::new();
    app.install(&mut host).unwrap();

    Fixture {
        _dir: dir,
        config_file,
        launcher,
        host,
        app,
    }
}

fn click(f: &mut Fixture, action: ControlAction) -> bool {
    let id = f.app.control_id(action).unwrap().to_string();
    f.app.pump(&mut f.host, [id])
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn install_places_controls_above_configured_groups() {
    // Arrange
    let f = fixture(TWO_GROUP_CONFIG);

    // Act
    let labels = f.host.labels();

    // Assert
    assert_eq!(
        &labels[..7],
        [
            "About",
            "Reload Config",
            "Edit Options",
            "Check for Updates",
            "Quit",
            "Dev",
            "Echo"
        ]
    );
    assert_eq!(f.app.synchronizer().live().handles().len(), 6);
    assert_eq!(f.app.synchronizer().live().leaves().len(), 3);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn install_with_missing_config_keeps_controls() {
    // Arrange
    let mut f = fixture(TWO_GROUP_CONFIG);
    std::fs::remove_file(&f.config_file).unwrap();

    // Act
    let summary = f.app.reload(&mut f.host);

    // Assert
    assert!(summary.is_none());
    assert!(f.host.id_of("Quit").is_some());
    assert_eq!(f.app.synchronizer().live().handles().len(), 6);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn reload_click_rebuilds_from_edited_file() {
    // Arrange
    let mut f = fixture(TWO_GROUP_CONFIG);
    write_config(&f.config_file, ONE_GROUP_CONFIG);

    // Act
    click(&mut f, ControlAction::Reload);
    let rebuilt = eventually(|| {
        f.app.pump(&mut f.host, Vec::<String>::new());
        f.host.id_of("Solo").is_some()
    })
    .await;

    // Assert
    assert!(rebuilt);
    assert!(f.host.id_of("Dev").is_none());
    assert!(f.host.id_of("Ops").is_none());
    assert_eq!(f.app.synchronizer().live().handles().len(), 2);
    assert_eq!(f.app.store().snapshot().groups[0].name, "Solo");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn malformed_config_leaves_menu_unchanged() {
    // Arrange
    let mut f = fixture(TWO_GROUP_CONFIG);
    let before = f.host.labels();
    let before_store = f.app.store().snapshot();
    write_config(&f.config_file, "{ \"lists\": [ oops");

    // Act
    let summary = f.app.reload(&mut f.host);

    // Assert
    assert!(summary.is_none());
    assert_eq!(f.host.labels(), before);
    assert_eq!(f.app.store().snapshot(), before_store);
    assert!(f.host.retired.is_empty());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn leaf_click_after_reload_runs_new_command() {
    // Arrange
    let mut f = fixture(TWO_GROUP_CONFIG);
    write_config(&f.config_file, ONE_GROUP_CONFIG);
    f.app.reload(&mut f.host).unwrap();
    let date = f.host.id_of("Date").unwrap().to_string();

    // Act
    f.app.pump(&mut f.host, [date]);

    // Assert
    assert!(eventually(|| f.launcher.calls().len() == 1).await);
    assert_eq!(f.launcher.calls(), vec![LaunchCall::Spawn("date".to_string(), vec![])]);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn check_for_updates_marks_entry_up_to_date() {
    // Arrange
    let mut f = fixture(TWO_GROUP_CONFIG);
    let id = f.app.control_id(ControlAction::CheckUpdate).unwrap().clone();

    // Act
    click(&mut f, ControlAction::CheckUpdate);
    let marked = eventually(|| {
        f.app.pump(&mut f.host, Vec::<String>::new());
        f.host.nodes[&id].label == UP_TO_DATE_LABEL
    })
    .await;

    // Assert
    assert!(marked);
    assert!(!f.host.nodes[&id].enabled);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn quit_retires_menu_and_stops_pumping() {
    // Arrange
    let mut f = fixture(TWO_GROUP_CONFIG);

    // Act
    click(&mut f, ControlAction::Quit);
    let mut running = true;
    let stopped = eventually(|| {
        running = f.app.pump(&mut f.host, Vec::<String>::new());
        !running
    })
    .await;

    // Assert
    assert!(stopped);
    assert!(!running);
    assert_eq!(f.app.router().len(), 5);
    assert!(f.app.synchronizer().live().is_empty());
    assert!(f.host.id_of("Dev").is_none());
    assert!(f.host.id_of("Quit").is_some());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn about_opens_configured_url() {
    // Arrange
    let mut f = fixture(TWO_GROUP_CONFIG);
    let expected = f.app.settings().about_url.clone();

    // Act
    click(&mut f, ControlAction::About);

    // Assert
    assert!(eventually(|| f.launcher.calls().len() == 1).await);
    assert_eq!(f.launcher.calls(), vec![LaunchCall::Open(expected)]);
}
