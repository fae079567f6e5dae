use super::*;

#[test]
fn default_api_targets_relative_endpoints() {
    let api = HttpPasswordApi::default();
    assert_eq!(api.forgot_url(), "/password/forgot");
    assert_eq!(api.reset_url(), "/password/reset");
}

#[test]
fn configured_base_url_prefixes_endpoints() {
    let api = HttpPasswordApi::new(ApiConfig::new("https://api.example.com/"));
    assert_eq!(api.forgot_url(), "https://api.example.com/password/forgot");
    assert_eq!(api.reset_url(), "https://api.example.com/password/reset");
}

#[test]
fn status_result_accepts_only_2xx() {
    assert_eq!(status_result(200), Ok(()));
    assert_eq!(status_result(204), Ok(()));
    assert_eq!(status_result(199), Err(ApiError::Status(199)));
    assert_eq!(status_result(302), Err(ApiError::Status(302)));
    assert_eq!(status_result(400), Err(ApiError::Status(400)));
    assert_eq!(status_result(500), Err(ApiError::Status(500)));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn calls_are_unavailable_outside_the_browser() {
    use futures::executor::block_on;

    let api = HttpPasswordApi::default();
    let forgot = ForgotPasswordRequest { email: "johndoe@example.com".to_owned() };
    assert_eq!(block_on(api.request_password_reset(&forgot)), Err(ApiError::Unavailable));

    let reset = ResetPasswordRequest {
        password: "123456".to_owned(),
        password_confirmation: "123456".to_owned(),
        token: "token-123".to_owned(),
    };
    assert_eq!(block_on(api.reset_password(&reset)), Err(ApiError::Unavailable));
}
