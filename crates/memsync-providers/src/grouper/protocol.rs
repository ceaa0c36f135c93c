//! Grouper membership request bodies
//!
//! ```json
//! {"WsRestAddMemberRequest": {"replaceAllExisting": "F",
//!   "subjectLookups": [{"subjectId": "jdoe"}]}}
//! ```

use memsync_domain::constants::REPLACE_ALL_EXISTING_FALSE;
use memsync_domain::error::Result;
use memsync_domain::value_objects::{BatchOperation, MemberId};
use reqwest::Method;
use serde::Serialize;
use serde_json::{Map, Value};

#[derive(Debug, Serialize)]
struct SubjectLookup<'a> {
    #[serde(rename = "subjectId")]
    subject_id: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct MemberRequest<'a> {
    replace_all_existing: &'static str,
    subject_lookups: Vec<SubjectLookup<'a>>,
}

/// HTTP verb for the operation
///
/// Drops send the delete envelope with POST.
pub fn http_method(operation: BatchOperation) -> Method {
    match operation {
        BatchOperation::Add => Method::PUT,
        BatchOperation::Drop => Method::POST,
    }
}

/// Build the JSON envelope for one batch
pub fn request_body(operation: BatchOperation, members: &[MemberId]) -> Result<Value> {
    let request = MemberRequest {
        replace_all_existing: REPLACE_ALL_EXISTING_FALSE,
        subject_lookups: members
            .iter()
            .map(|member| SubjectLookup {
                subject_id: member.as_str(),
            })
            .collect(),
    };

    let mut envelope = Map::new();
    envelope.insert(
        operation.request_key().to_string(),
        serde_json::to_value(&request)?,
    );
    Ok(Value::Object(envelope))
}
