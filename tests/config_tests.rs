use quiz_poll_bot::config::Config;
use std::env;
use std::sync::Mutex;

// Mutex to ensure config tests run sequentially to avoid environment variable conflicts
static CONFIG_TEST_MUTEX: Mutex<()> = Mutex::new(());

fn clear_env() {
    env::remove_var("TELEGRAM_BOT_TOKEN");
    env::remove_var("DATABASE_URL");
    env::remove_var("HTTP_PORT");
    env::remove_var("QUIZ_FILES_DIR");
}

#[test]
fn test_config_from_env_with_all_vars() {
    let _guard = CONFIG_TEST_MUTEX.lock().unwrap();
    clear_env();

    env::set_var("TELEGRAM_BOT_TOKEN", "test_token_123");
    env::set_var("DATABASE_URL", "sqlite:test.db");
    env::set_var("HTTP_PORT", "8080");
    env::set_var("QUIZ_FILES_DIR", "/tmp/quiz-files");

    let config = Config::from_env().unwrap();

    assert_eq!(config.telegram_bot_token, "test_token_123");
    assert_eq!(config.database_url, "sqlite:test.db");
    assert_eq!(config.http_port, 8080);
    assert_eq!(config.files_dir, "/tmp/quiz-files");

    clear_env();
}

#[test]
fn test_config_from_env_with_defaults() {
    let _guard = CONFIG_TEST_MUTEX.lock().unwrap();
    clear_env();

    env::set_var("TELEGRAM_BOT_TOKEN", "test_token_123");

    let config = Config::from_env().unwrap();

    assert_eq!(config.telegram_bot_token, "test_token_123");
    assert_eq!(config.database_url, "sqlite:./data/quizbot.db");
    assert_eq!(config.http_port, 3000);
    assert_eq!(config.files_dir, "./data/files");

    clear_env();
}

#[test]
fn test_config_missing_token_fails() {
    let _guard = CONFIG_TEST_MUTEX.lock().unwrap();
    clear_env();

    let result = Config::from_env();
    assert!(result.is_err());
}

#[test]
fn test_config_blank_token_fails() {
    let _guard = CONFIG_TEST_MUTEX.lock().unwrap();
    clear_env();

    env::set_var("TELEGRAM_BOT_TOKEN", "   ");

    let result = Config::from_env();
    assert!(result.is_err());

    clear_env();
}

#[test]
fn test_config_invalid_port_fails() {
    let _guard = CONFIG_TEST_MUTEX.lock().unwrap();
    clear_env();

    env::set_var("TELEGRAM_BOT_TOKEN", "test_token_123");
    env::set_var("HTTP_PORT", "not-a-port");

    let result = Config::from_env();
    assert!(result.is_err());

    clear_env();
}

#[test]
fn test_config_blank_optional_vars_fall_back_to_defaults() {
    let _guard = CONFIG_TEST_MUTEX.lock().unwrap();
    clear_env();

    env::set_var("TELEGRAM_BOT_TOKEN", "test_token_123");
    env::set_var("DATABASE_URL", "   ");
    env::set_var("QUIZ_FILES_DIR", "");

    let config = Config::from_env().unwrap();

    assert_eq!(config.database_url, "sqlite:./data/quizbot.db");
    assert_eq!(config.files_dir, "./data/files");

    clear_env();
}
