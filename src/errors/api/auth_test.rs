#[cfg(test)]
mod tests {
    use crate::errors::AuthError;
    use crate::types::internal::LoginFailure;

    #[test]
    fn test_credential_failures_share_one_message() {
        let reasons = [
            LoginFailure::NoNameMatch,
            LoginFailure::NoExactNameMatch,
            LoginFailure::PhoneMismatch,
            LoginFailure::AmbiguousMatch,
            LoginFailure::InvalidInput,
        ];
        for reason in reasons {
            let auth_err = AuthError::from_login_failure(reason);
            assert_eq!(auth_err.status_code(), 401);
            assert_eq!(auth_err.message(), "Invalid first name or phone number");
        }
    }

    #[test]
    fn test_directory_unavailable_is_503() {
        let auth_err = AuthError::from(LoginFailure::DirectoryUnavailable);
        assert_eq!(auth_err.status_code(), 503);
        assert!(matches!(auth_err, AuthError::DirectoryUnavailable(_)));
    }
}
