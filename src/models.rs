//! Wire Models
//!
//! Data structures matching the Yello admin API.

use serde::{Deserialize, Serialize};

/// Standard `{status, message, data}` envelope wrapping every backend
/// payload, success or error
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Envelope<T> {
    pub status: u16,
    pub message: String,
    pub data: T,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub name: String,
    pub yello_id: String,
    pub group: String,
    pub image_url: String,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub deleted_at: Option<String>,
}

/// One page of the user endpoint
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPage {
    pub page_count: u64,
    pub total_count: u64,
    pub user_list: Vec<User>,
}

/// A themed voting prompt. The four fragments render the sentence
/// template; the heads may be null on the wire.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionDetail {
    pub id: i64,
    #[serde(default)]
    pub name_head: Option<String>,
    pub name_foot: String,
    #[serde(default)]
    pub keyword_head: Option<String>,
    pub keyword_foot: String,
    pub keyword_list: Vec<String>,
}

/// One synthetic vote in the outgoing batch
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VoteContent {
    pub sender_id: i64,
    pub receiver_id: i64,
    pub keyword: String,
    pub color_index: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VoteSendRequest {
    pub vote_content_list: Vec<VoteContent>,
}

/// Payload of `POST /api/v1/auth/oauth`
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionToken {
    pub access_token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_question_envelope() {
        let body = r#"{
            "status": 200,
            "message": "질문 조회에 성공하였습니다.",
            "data": {
                "id": 42,
                "nameHead": "상큼한",
                "nameFoot": "토마토",
                "keywordHead": "맛있는",
                "keywordFoot": "사과",
                "keywordList": ["빨강", "노랑"]
            }
        }"#;

        let envelope: Envelope<QuestionDetail> = serde_json::from_str(body).unwrap();
        assert_eq!(envelope.status, 200);
        let q = envelope.data;
        assert_eq!(q.id, 42);
        assert_eq!(q.name_head.as_deref(), Some("상큼한"));
        assert_eq!(q.name_foot, "토마토");
        assert_eq!(q.keyword_head.as_deref(), Some("맛있는"));
        assert_eq!(q.keyword_foot, "사과");
        assert_eq!(q.keyword_list, vec!["빨강", "노랑"]);
    }

    #[test]
    fn test_question_null_heads() {
        let body = r#"{
            "id": 7,
            "nameHead": null,
            "nameFoot": "토마토",
            "keywordFoot": "사과",
            "keywordList": []
        }"#;

        let q: QuestionDetail = serde_json::from_str(body).unwrap();
        assert_eq!(q.name_head, None);
        assert_eq!(q.keyword_head, None);
    }

    #[test]
    fn test_user_page_envelope() {
        let body = r#"{
            "status": 200,
            "message": "OK",
            "data": {
                "pageCount": 3,
                "totalCount": 25,
                "userList": [{
                    "id": 1,
                    "name": "김옐로",
                    "yelloId": "yello_kim",
                    "group": "옐로대학교",
                    "imageUrl": "https://cdn.example.com/1.png",
                    "createdAt": "2023-08-01T00:00:00",
                    "deletedAt": null
                }]
            }
        }"#;

        let envelope: Envelope<UserPage> = serde_json::from_str(body).unwrap();
        assert_eq!(envelope.data.page_count, 3);
        assert_eq!(envelope.data.total_count, 25);
        assert_eq!(envelope.data.user_list.len(), 1);
        assert_eq!(envelope.data.user_list[0].yello_id, "yello_kim");
        assert_eq!(envelope.data.user_list[0].deleted_at, None);
    }

    #[test]
    fn test_message_only_envelope_without_data() {
        // Send/delete responses carry only status and message
        let body = r#"{"status":200,"message":"투표 전송에 성공하였습니다."}"#;
        let envelope: Envelope<Option<serde_json::Value>> = serde_json::from_str(body).unwrap();
        assert_eq!(envelope.message, "투표 전송에 성공하였습니다.");
        assert_eq!(envelope.data, None);

        // An explicit null data also decodes
        let body = r#"{"status":200,"message":"삭제되었습니다.","data":null}"#;
        let envelope: Envelope<Option<serde_json::Value>> = serde_json::from_str(body).unwrap();
        assert_eq!(envelope.data, None);
    }

    #[test]
    fn test_session_token_envelope() {
        let body = r#"{"status":200,"message":"로그인 성공","data":{"accessToken":"tok-123"}}"#;
        let envelope: Envelope<SessionToken> = serde_json::from_str(body).unwrap();
        assert_eq!(envelope.data.access_token, "tok-123");
    }
}
