use nyaya_api::limits::{enforce_max_message_size, MAX_MESSAGE_BYTES};
use nyaya_api::status::StatusCode;

#[test]
fn allows_exact_max_size() {
    assert!(enforce_max_message_size(MAX_MESSAGE_BYTES).is_ok());
}

#[test]
fn rejects_over_max_size() {
    let err = enforce_max_message_size(MAX_MESSAGE_BYTES + 1)
        .expect_err("should error for oversized message");
    let msg = err.to_string();
    assert!(msg.contains("message too large"), "unexpected message: {msg}");
}

#[test]
fn status_codes_map_to_http_numbers() {
    assert_eq!(StatusCode::Ok.as_u16(), 200);
    assert_eq!(StatusCode::BadRequest.as_u16(), 400);
    assert_eq!(StatusCode::Unauthorized.as_u16(), 401);
    assert_eq!(StatusCode::NotFound.as_u16(), 404);
    assert_eq!(StatusCode::RequestEntityTooLarge.as_u16(), 413);
    assert_eq!(StatusCode::TooManyRequests.as_u16(), 429);
    assert_eq!(StatusCode::InternalServerError.as_u16(), 500);
}

#[test]
fn reasons_are_standard_http_phrases() {
    assert_eq!(StatusCode::Ok.reason(), "OK");
    assert_eq!(StatusCode::RequestEntityTooLarge.reason(), "Payload Too Large");
}
