use formcheck::frontend::run_session;
use formcheck::{
    FrontendConfig, ValidationResult, login_user, sign_up_user, validate_email,
    validate_password, validate_username,
};
use tokio::io::BufReader;

const EMAIL_ERROR: &str = "Invalid email format";
const USERNAME_ERROR: &str = "Username must be at least 3 characters and contain only letters";

// Helper to build an expected failure
fn failure(messages: &[&str]) -> ValidationResult {
    ValidationResult::Failure(messages.iter().map(|m| m.to_string()).collect())
}

#[test]
fn test_field_validators() {
    assert!(validate_email("test@example.com"));
    assert!(!validate_email("test@@example.com"));

    assert!(validate_username("USERNAME"));
    assert!(!validate_username("uz"));
    assert!(!validate_username("user123"));

    assert!(validate_password("Password1"));
    assert!(!validate_password("password1"));
    assert!(!validate_password("PASSWORD1"));
    assert!(!validate_password("Pass1"));
}

#[test]
fn test_login_outcomes() {
    assert_eq!(
        login_user("test@example.com", "Password1"),
        ValidationResult::Success("Login Successful".to_string())
    );
    assert_eq!(
        login_user("invalid-email", "Password1"),
        failure(&[EMAIL_ERROR])
    );
    assert_eq!(
        login_user("invalid-email", "pass"),
        failure(&[EMAIL_ERROR, "Invalid password"])
    );
}

#[test]
fn test_sign_up_outcomes() {
    assert_eq!(
        sign_up_user("test@example.com", "Password1", "user"),
        ValidationResult::Success("Sign-Up Successful".to_string())
    );
    assert_eq!(
        sign_up_user("invalid-email", "pass", "us"),
        failure(&[EMAIL_ERROR, USERNAME_ERROR, "Password does not meet criteria"])
    );
}

#[test]
fn test_failure_is_never_empty() {
    let inputs = [
        ("invalid-email", "Password1", "user"),
        ("test@example.com", "pass", "user"),
        ("test@example.com", "Password1", "us"),
        ("", "", ""),
    ];

    for (email, password, username) in inputs {
        match sign_up_user(email, password, username) {
            ValidationResult::Failure(errors) => assert!(!errors.is_empty()),
            ValidationResult::Success(_) => panic!("expected failure for {:?}", email),
        }
        match login_user(email, password) {
            ValidationResult::Failure(errors) => assert!(!errors.is_empty()),
            ValidationResult::Success(message) => assert_eq!(message, "Login Successful"),
        }
    }
}

#[test]
fn test_calls_are_repeatable_across_threads() {
    let handles: Vec<_> = (0..4)
        .map(|_| std::thread::spawn(|| sign_up_user("invalid-email", "pass", "us")))
        .collect();

    for handle in handles {
        assert_eq!(
            handle.join().unwrap(),
            sign_up_user("invalid-email", "pass", "us")
        );
    }
}

#[tokio::test]
async fn test_session_over_in_memory_streams() {
    let config = FrontendConfig {
        show_banner: false,
        prompt: String::new(),
        ..FrontendConfig::default()
    };
    let input = "login\ninvalid-email\npass\nsignup\ntest@example.com\nPassword1\nuser\nquit\n";

    let mut output = Vec::new();
    let summary = run_session(BufReader::new(input.as_bytes()), &mut output, &config)
        .await
        .unwrap();

    assert_eq!(summary.submissions, 2);
    assert_eq!(summary.successes, 1);
    assert_eq!(
        String::from_utf8(output).unwrap(),
        "email: password: [error] Invalid email format\n\
         [error] Invalid password\n\
         email: password: username: [success] Sign-Up Successful\n\
         Goodbye\n"
    );
}
