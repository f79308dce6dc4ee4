use super::*;

#[test]
fn single_response_decodes_with_caption() {
    let body = r#"{"message":"Done","type":"single","caption":"hi","video_url":"http://x/v.mp4","filename":"v.mp4"}"#;
    let resp: DownloadResponse = serde_json::from_str(body).expect("decode");
    assert_eq!(resp.message, "Done");
    assert_eq!(resp.success, None);
    assert_eq!(
        resp.result,
        DownloadResult::Single {
            caption: Some("hi".to_owned()),
            video_url: "http://x/v.mp4".to_owned(),
            filename: "v.mp4".to_owned(),
        }
    );
}

#[test]
fn single_response_caption_is_optional() {
    let body = r#"{"message":"ok","type":"single","video_url":"/serve/a.mp4","filename":"a.mp4"}"#;
    let resp: DownloadResponse = serde_json::from_str(body).expect("decode");
    assert!(matches!(resp.result, DownloadResult::Single { caption: None, .. }));
}

#[test]
fn profile_response_decodes_post_count() {
    let body = r#"{"success":true,"message":"ok","type":"profile","post_count":42,"zip_url":"/serve/u.zip","filename":"u.zip"}"#;
    let resp: DownloadResponse = serde_json::from_str(body).expect("decode");
    assert_eq!(resp.success, Some(true));
    assert_eq!(
        resp.result,
        DownloadResult::Profile {
            post_count: 42,
            zip_url: "/serve/u.zip".to_owned(),
            filename: "u.zip".to_owned(),
        }
    );
}

#[test]
fn unrecognised_type_decodes_as_unknown() {
    let body = r#"{"message":"ok","type":"story"}"#;
    let resp: DownloadResponse = serde_json::from_str(body).expect("decode");
    assert_eq!(resp.result, DownloadResult::Unknown);
}

#[test]
fn missing_message_is_a_decode_error() {
    let body = r#"{"type":"single","video_url":"v","filename":"f"}"#;
    assert!(serde_json::from_str::<DownloadResponse>(body).is_err());
}

#[test]
fn response_serializes_flat_with_type_tag() {
    let resp = DownloadResponse {
        success: Some(true),
        message: "Download ready!".to_owned(),
        result: DownloadResult::Single {
            caption: Some(String::new()),
            video_url: "/serve/a.mp4".to_owned(),
            filename: "a.mp4".to_owned(),
        },
    };
    let value = serde_json::to_value(&resp).expect("encode");
    assert_eq!(value["type"], "single");
    assert_eq!(value["success"], true);
    assert_eq!(value["video_url"], "/serve/a.mp4");
    assert_eq!(value["caption"], "");
}

#[test]
fn error_response_fields_are_optional() {
    let empty: ErrorResponse = serde_json::from_str("{}").expect("decode");
    assert_eq!(empty.error, None);

    let err: ErrorResponse = serde_json::from_str(r#"{"error":"bad url"}"#).expect("decode");
    assert_eq!(err.error.as_deref(), Some("bad url"));
}

#[test]
fn error_response_new_marks_failure() {
    let value = serde_json::to_value(ErrorResponse::new("nope")).expect("encode");
    assert_eq!(value, serde_json::json!({"success": false, "error": "nope"}));
}
