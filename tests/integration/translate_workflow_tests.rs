/*!
 * End-to-end translation workflow tests
 */

use std::fs;

use textlate::app_config::Config;
use textlate::app_controller::Controller;
use textlate::errors::TranslationError;
use textlate::providers::mock::MockBackend;
use textlate::{BufferStore, DirBufferStore};

use crate::common;

fn init_test_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Test a full translation against a workspace directory
#[tokio::test]
async fn test_workflow_withDefaultConfig_shouldWriteDestinationFile() {
    init_test_logging();
    let temp_dir = common::create_temp_dir().unwrap();
    let store = DirBufferStore::open(temp_dir.path()).unwrap();

    let controller = Controller::new_for_test().unwrap();
    let backend = MockBackend::working();

    let outcome = controller
        .translate_with(&backend, &store, "hello world".to_string(), Some("notes".to_string()))
        .await
        .unwrap();

    assert_eq!(outcome.buffer_name, "Chinese");
    let destination = temp_dir.path().join("Chinese.txt");
    assert_eq!(
        fs::read_to_string(destination).unwrap(),
        "[en->zh] hello world\n"
    );
}

/// Test the configured write policy is applied to an existing destination
#[tokio::test]
async fn test_workflow_withOverwriteConfigured_shouldReplaceDestination() {
    init_test_logging();
    let temp_dir = common::create_temp_dir().unwrap();
    let dir = temp_dir.path().to_path_buf();
    common::create_test_file(&dir, "Chinese.txt", "OLD").unwrap();
    let store = DirBufferStore::open(&dir).unwrap();

    let mut config = Config::default();
    config.translation.overwrite = true;
    let controller = Controller::with_config(config).unwrap();

    controller
        .translate_with(&MockBackend::fixed("NEW"), &store, "text".to_string(), None)
        .await
        .unwrap();

    assert_eq!(fs::read_to_string(dir.join("Chinese.txt")).unwrap(), "NEW\n");
}

/// Test translating a buffer named like the destination renames its file
#[tokio::test]
async fn test_workflow_withCollidingSourceFile_shouldRenameIt() {
    init_test_logging();
    let temp_dir = common::create_temp_dir().unwrap();
    let dir = temp_dir.path().to_path_buf();
    common::create_test_file(&dir, "Chinese.txt", "source words").unwrap();
    let store = DirBufferStore::open(&dir).unwrap();

    let controller = Controller::new_for_test().unwrap();
    let outcome = controller
        .translate_with(
            &MockBackend::fixed("translated"),
            &store,
            "source words".to_string(),
            Some("Chinese".to_string()),
        )
        .await
        .unwrap();

    assert_eq!(outcome.renamed_source.as_deref(), Some("Chinese.001"));
    assert_eq!(
        fs::read_to_string(dir.join("Chinese.001.txt")).unwrap(),
        "source words"
    );
    assert_eq!(
        fs::read_to_string(dir.join("Chinese.txt")).unwrap(),
        "translated\n"
    );
}

/// Test a backend failure leaves the workspace untouched
#[tokio::test]
async fn test_workflow_withFailingBackend_shouldLeaveWorkspaceUntouched() {
    init_test_logging();
    let temp_dir = common::create_temp_dir().unwrap();
    let store = DirBufferStore::open(temp_dir.path()).unwrap();

    let controller = Controller::new_for_test().unwrap();
    let result = controller
        .translate_with(&MockBackend::failing(), &store, "text".to_string(), None)
        .await;

    assert!(matches!(result, Err(TranslationError::Provider(_))));
    assert!(store.names().is_empty());
}

/// Test reversing the language pair swaps config and prepares buffers
#[test]
fn test_workflow_withReverse_shouldSwapAndPrepareBuffers() {
    init_test_logging();
    let temp_dir = common::create_temp_dir().unwrap();
    let store = DirBufferStore::open(temp_dir.path()).unwrap();

    let mut controller = Controller::new_for_test().unwrap();
    let (new_source, new_target) = controller.reverse_languages(&store).unwrap();

    assert_eq!(new_source, "zh");
    assert_eq!(new_target, "en");
    assert_eq!(controller.config().source_language, "zh");
    assert_eq!(controller.config().target_language, "en");
    assert!(store.exists("English"));
    assert!(store.exists("Chinese"));
}

/// Test toggling flips the persisted UI language both ways
#[test]
fn test_workflow_withToggle_shouldFlipAndPersist() {
    init_test_logging();
    let temp_dir = common::create_temp_dir().unwrap();
    let config_path = temp_dir.path().join("textlate.json");

    let mut controller = Controller::new_for_test().unwrap();
    assert_eq!(controller.toggle_ui_language().unwrap(), "zh_CN");
    controller.config().save(&config_path).unwrap();

    // Reload from disk, as the CLI does, and toggle back
    let loaded: Config =
        serde_json::from_str(&fs::read_to_string(&config_path).unwrap()).unwrap();
    assert_eq!(loaded.toggle.ui_language, "zh_CN");

    let mut controller = Controller::with_config(loaded).unwrap();
    assert_eq!(controller.toggle_ui_language().unwrap(), "en_US");
}
