//! Envelope contract tests.
//!
//! Every resource call funnels through `ApiResult::from_response`, so these
//! tests pin down how raw status/body pairs become envelopes.

use pmapi::{ApiResult, ErrorInfo, PmError, ProjectDto, TaskDto, TimesheetDto};

// =============================================================================
// Success path
// =============================================================================

#[test]
fn test_task_list_with_sparse_fields() {
    let body = br#"{"data": [{"id":"abc","name":"Test Task"}]}"#;

    let result: ApiResult<Vec<TaskDto>> = ApiResult::from_response(200, body).unwrap();

    assert!(result.success());
    assert!(!result.has_error());
    assert!(result.error().is_none());

    let tasks = result.into_data().unwrap();
    assert_eq!(tasks.len(), 1);
    assert_eq!(
        tasks[0],
        TaskDto {
            id: Some("abc".to_string()),
            name: Some("Test Task".to_string()),
            ..Default::default()
        }
    );
}

#[test]
fn test_every_2xx_status_is_success() {
    for status in [200, 201, 202, 204, 299] {
        let result: ApiResult<Option<TaskDto>> =
            ApiResult::from_response(status, br#"{"data": null}"#).unwrap();

        assert!(result.success(), "status {status}");
        assert!(!result.has_error(), "status {status}");
        assert_eq!(result.status_code(), status);
    }
}

#[test]
fn test_unknown_fields_are_ignored() {
    let body = br#"{
        "data": {
            "id": "p1",
            "name": "Roadmap",
            "brandNewField": {"nested": [1, 2, 3]},
            "status": {"id": "s1", "name": "Active", "colour": "green"}
        },
        "serverVersion": "9.9"
    }"#;

    let result: ApiResult<ProjectDto> = ApiResult::from_response(200, body).unwrap();
    let project = result.into_data().unwrap();

    assert_eq!(project.name.as_deref(), Some("Roadmap"));
    assert_eq!(
        project.status.and_then(|s| s.name).as_deref(),
        Some("Active")
    );
}

#[test]
fn test_missing_fields_are_absent() {
    let result: ApiResult<TimesheetDto> =
        ApiResult::from_response(200, br#"{"data": {}}"#).unwrap();

    assert_eq!(result.into_data().unwrap(), TimesheetDto::default());
}

#[test]
fn test_explicit_nulls_are_absent() {
    let body = br#"{"data": {"id": "t1", "name": null, "percentComplete": null}}"#;

    let task: TaskDto = ApiResult::from_response(200, body)
        .unwrap()
        .into_result()
        .unwrap();

    assert_eq!(task.id.as_deref(), Some("t1"));
    assert!(task.name.is_none());
    assert!(task.percent_complete.is_none());
}

#[test]
fn test_empty_body_suits_unit_payload() {
    let result: ApiResult<()> = ApiResult::from_response(204, b"").unwrap();

    assert!(result.success());
    assert_eq!(result.data(), Some(&()));
}

// =============================================================================
// Decode failures
// =============================================================================

#[test]
fn test_malformed_success_body_is_decode_error() {
    let err = ApiResult::<TaskDto>::from_response(200, b"{not json").unwrap_err();

    assert!(err.is_decode());
    assert_eq!(err.status_code(), Some(200));
}

#[test]
fn test_wrong_payload_shape_is_decode_error() {
    // A list where a single object is expected.
    let err = ApiResult::<TaskDto>::from_response(200, br#"{"data": [{"id": "a"}]}"#)
        .unwrap_err();

    assert!(matches!(err, PmError::Decode { status: 200, .. }));
}

#[test]
fn test_wrong_field_type_is_decode_error() {
    let body = br#"{"data": {"id": "t1", "percentComplete": "half"}}"#;

    let err = ApiResult::<TaskDto>::from_response(200, body).unwrap_err();

    assert!(err.is_decode());
}

#[test]
fn test_missing_data_for_object_payload_is_decode_error() {
    let err = ApiResult::<TaskDto>::from_response(200, br#"{"success": true}"#).unwrap_err();

    assert!(err.is_decode());
}

#[test]
fn test_bare_array_body_is_decode_error() {
    let err =
        ApiResult::<Vec<TaskDto>>::from_response(200, br#"[{"id": "a"}]"#).unwrap_err();

    assert!(err.is_decode());
}

// =============================================================================
// Error path
// =============================================================================

#[test]
fn test_not_found_message() {
    let result: ApiResult<Vec<TaskDto>> =
        ApiResult::from_response(404, br#"{"message":"Not found"}"#).unwrap();

    assert!(!result.success());
    assert!(result.has_error());
    assert!(result.data().is_none());
    assert_eq!(result.error().unwrap().message, "Not found");
}

#[test]
fn test_every_non_2xx_status_is_failure() {
    for status in [100, 199, 300, 304, 400, 401, 403, 404, 409, 422, 500, 503] {
        let result: ApiResult<TaskDto> =
            ApiResult::from_response(status, br#"{"message": "nope"}"#).unwrap();

        assert!(!result.success(), "status {status}");
        assert!(result.has_error(), "status {status}");
        assert!(result.data().is_none(), "status {status}");
        assert_eq!(result.status_code(), status);
    }
}

#[test]
fn test_full_error_body() {
    let body = br#"{
        "message": "Validation failed",
        "technicalError": "ModelState invalid",
        "additionalErrors": ["first", "second"],
        "validationErrors": {"name": "Name is required", "budget": "Must be positive"}
    }"#;

    let result: ApiResult<ProjectDto> = ApiResult::from_response(400, body).unwrap();
    let error = result.error().unwrap();

    assert_eq!(error.message, "Validation failed");
    assert_eq!(error.technical_error.as_deref(), Some("ModelState invalid"));
    assert_eq!(error.additional_errors, vec!["first", "second"]);
    assert_eq!(error.validation_error("name"), Some("Name is required"));
    assert_eq!(error.validation_error("budget"), Some("Must be positive"));
    assert_eq!(error.validation_error("missing"), None);
}

#[test]
fn test_error_body_that_looks_like_success_is_still_failure() {
    // The status code decides, not the body shape.
    let result: ApiResult<TaskDto> =
        ApiResult::from_response(500, br#"{"data": {"id": "t1"}}"#).unwrap();

    assert!(result.has_error());
    assert!(result.data().is_none());
}

#[test]
fn test_html_error_body_becomes_message() {
    let result: ApiResult<TaskDto> =
        ApiResult::from_response(502, b"<html>Bad Gateway</html>\n").unwrap();

    assert_eq!(result.error().unwrap().message, "<html>Bad Gateway</html>");
}

#[test]
fn test_empty_error_body_uses_status_text() {
    let result: ApiResult<TaskDto> = ApiResult::from_response(503, b"").unwrap();

    assert_eq!(
        result.error().unwrap().message,
        "HTTP 503 Service Unavailable"
    );
}

#[test]
fn test_into_result_on_failure() {
    let result: ApiResult<TaskDto> =
        ApiResult::from_response(401, br#"{"message": "Invalid API key"}"#).unwrap();

    match result.into_result() {
        Err(PmError::Api { status_code, info }) => {
            assert_eq!(status_code, 401);
            assert_eq!(info.message, "Invalid API key");
        }
        other => panic!("expected API error, got {other:?}"),
    }
}

// =============================================================================
// Wire shape
// =============================================================================

#[test]
fn test_error_info_wire_shape() {
    let info: ErrorInfo = serde_json::from_value(serde_json::json!({
        "message": "Conflict",
        "additionalErrors": ["Task is locked"]
    }))
    .unwrap();

    let json = serde_json::to_value(&info).unwrap();

    assert_eq!(json["message"], "Conflict");
    assert_eq!(json["additionalErrors"][0], "Task is locked");
    assert!(json.get("technicalError").is_none());
    assert!(json.get("validationErrors").is_none());
}

#[test]
fn test_envelope_round_trip() {
    let body = br#"{"data": {"id": "t1", "name": "Ship it", "priority": 500}}"#;
    let original: ApiResult<TaskDto> = ApiResult::from_response(200, body).unwrap();

    let encoded = serde_json::to_string(&original).unwrap();
    let decoded: ApiResult<TaskDto> = serde_json::from_str(&encoded).unwrap();

    assert_eq!(decoded, original);
}

#[test]
fn test_failed_envelope_round_trip() {
    let original: ApiResult<TaskDto> =
        ApiResult::from_response(404, br#"{"message": "Not found"}"#).unwrap();

    let encoded = serde_json::to_value(&original).unwrap();
    assert_eq!(encoded["success"], false);
    assert_eq!(encoded["hasError"], true);
    assert_eq!(encoded["statusCode"], 404);

    let decoded: ApiResult<TaskDto> = serde_json::from_value(encoded).unwrap();
    assert_eq!(decoded, original);
}

#[test]
fn test_inconsistent_envelope_is_rejected() {
    let json = serde_json::json!({
        "success": true,
        "hasError": true,
        "statusCode": 200,
        "data": {"id": "t1"}
    });

    assert!(serde_json::from_value::<ApiResult<TaskDto>>(json).is_err());

    // Success flag must agree with the status code.
    let success_with_500 = serde_json::json!({
        "success": true,
        "statusCode": 500,
        "data": {"id": "t1"}
    });
    assert!(serde_json::from_value::<ApiResult<TaskDto>>(success_with_500).is_err());

    let failure_with_201 = serde_json::json!({
        "success": false,
        "statusCode": 201,
        "error": {"message": "Not found"}
    });
    assert!(serde_json::from_value::<ApiResult<TaskDto>>(failure_with_201).is_err());

    // The status code is required.
    let no_status = serde_json::json!({
        "success": true,
        "data": {"id": "t1"}
    });
    assert!(serde_json::from_value::<ApiResult<TaskDto>>(no_status).is_err());
}

#[test]
fn test_dto_round_trip_preserves_values() {
    let body = br#"{"data": {
        "id": "p1",
        "name": "Roadmap",
        "plannedStartDate": "2024-03-01",
        "budget": 1200.5,
        "favorite": true,
        "tags": [{"id": "tag1", "name": "Q1", "color": "blue"}]
    }}"#;
    let project: ProjectDto = ApiResult::from_response(200, body)
        .unwrap()
        .into_result()
        .unwrap();

    let encoded = serde_json::to_string(&project).unwrap();
    let decoded: ProjectDto = serde_json::from_str(&encoded).unwrap();

    assert_eq!(decoded, project);
}
