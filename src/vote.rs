//! Vote Composer Logic
//!
//! Pure state behind the question page: the in-progress draft, the
//! pending vote list, and the shared-roster page arithmetic.

use crate::models::{User, VoteContent};

/// Indexed vote color palette. Index 0 is reserved and never selectable.
pub const VOTE_COLORS: &[&str] = &[
    "#000000", // reserved
    "#FFE600", "#D96BFF", "#7CE3B6", "#FF7C98", "#7DC1FF", "#FFAD62",
    "#B4EB5A", "#8A7CFF", "#FF6E6E", "#64E8F5", "#F5E764", "#C9FF62",
];

/// The in-progress vote being assembled by the operator.
///
/// Field edits replace the whole draft rather than mutating in place;
/// `Default` is the empty draft the form resets to.
#[derive(Debug, Clone, PartialEq)]
pub struct VoteDraft {
    pub sender: Option<User>,
    pub receiver: Option<User>,
    pub keyword: Option<String>,
    pub color_index: usize,
}

impl Default for VoteDraft {
    fn default() -> Self {
        Self {
            sender: None,
            receiver: None,
            keyword: None,
            color_index: 1,
        }
    }
}

impl VoteDraft {
    /// A draft is appendable once sender, receiver, a non-empty keyword
    /// and a non-reserved color are all present.
    pub fn is_complete(&self) -> bool {
        self.sender.is_some()
            && self.receiver.is_some()
            && self.keyword.as_deref().is_some_and(|k| !k.is_empty())
            && self.color_index != 0
    }

    /// Map a completed draft to the outgoing wire shape.
    /// Incomplete drafts map to `None`.
    pub fn to_content(&self) -> Option<VoteContent> {
        if !self.is_complete() {
            return None;
        }
        Some(VoteContent {
            sender_id: self.sender.as_ref()?.id,
            receiver_id: self.receiver.as_ref()?.id,
            keyword: self.keyword.clone()?,
            color_index: self.color_index,
        })
    }
}

/// Append `draft` to `votes` if complete, resetting the draft to the
/// empty one. Incomplete drafts leave both untouched and return false.
pub fn append_draft(votes: &mut Vec<VoteDraft>, draft: &mut VoteDraft) -> bool {
    if !draft.is_complete() {
        return false;
    }
    votes.push(std::mem::take(draft));
    true
}

/// Both pickers feed one roster keyed by whichever page is further ahead
pub fn shared_page(sender_page: u32, receiver_page: u32) -> u32 {
    sender_page.max(receiver_page)
}

/// Whether advancing to `page` actually needs a request, given the last
/// page already fetched. A lagging picker catching up never re-fetches.
pub fn needs_fetch(last_fetched: Option<u32>, page: u32) -> bool {
    last_fetched.map_or(true, |last| page > last)
}

/// "상큼한 너토마토" line of the vote preview (null-tolerant head)
pub fn name_line(name_head: Option<&str>, name_foot: &str) -> String {
    format!("{} 너{}", name_head.unwrap_or(""), name_foot)
}

/// "맛있는 키워드사과" line of the vote preview
pub fn keyword_line(keyword_head: Option<&str>, keyword: &str, keyword_foot: &str) -> String {
    format!("{} {}{}", keyword_head.unwrap_or(""), keyword, keyword_foot)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::VoteSendRequest;

    fn make_user(id: i64) -> User {
        User {
            id,
            name: format!("유저{}", id),
            yello_id: format!("yello_{}", id),
            group: "옐로대학교".to_string(),
            image_url: format!("https://cdn.example.com/{}.png", id),
            created_at: None,
            deleted_at: None,
        }
    }

    fn complete_draft() -> VoteDraft {
        VoteDraft {
            sender: Some(make_user(1)),
            receiver: Some(make_user(2)),
            keyword: Some("친절함".to_string()),
            color_index: 3,
        }
    }

    #[test]
    fn test_draft_completeness() {
        assert!(complete_draft().is_complete());

        let mut d = complete_draft();
        d.sender = None;
        assert!(!d.is_complete());

        let mut d = complete_draft();
        d.receiver = None;
        assert!(!d.is_complete());

        let mut d = complete_draft();
        d.keyword = None;
        assert!(!d.is_complete());

        let mut d = complete_draft();
        d.keyword = Some(String::new());
        assert!(!d.is_complete());

        // Color 0 is reserved
        let mut d = complete_draft();
        d.color_index = 0;
        assert!(!d.is_complete());
    }

    #[test]
    fn test_append_resets_draft() {
        let mut votes = Vec::new();
        let mut draft = complete_draft();

        assert!(append_draft(&mut votes, &mut draft));
        assert_eq!(votes.len(), 1);
        assert_eq!(votes[0].sender.as_ref().unwrap().id, 1);
        assert_eq!(votes[0].receiver.as_ref().unwrap().id, 2);
        assert_eq!(votes[0].keyword.as_deref(), Some("친절함"));
        assert_eq!(votes[0].color_index, 3);

        // Draft resets to the empty one with color index 1
        assert_eq!(draft, VoteDraft::default());
        assert_eq!(draft.color_index, 1);
    }

    #[test]
    fn test_append_rejects_incomplete() {
        let mut votes = vec![complete_draft()];
        let mut draft = VoteDraft::default();

        assert!(!append_draft(&mut votes, &mut draft));
        assert_eq!(votes.len(), 1);
        // The incomplete draft is left as it was
        assert_eq!(draft, VoteDraft::default());
    }

    #[test]
    fn test_payload_shape() {
        let batch = VoteSendRequest {
            vote_content_list: vec![complete_draft(), complete_draft()]
                .iter()
                .filter_map(VoteDraft::to_content)
                .collect(),
        };

        let json = serde_json::to_value(&batch).unwrap();
        let list = json["voteContentList"].as_array().unwrap();
        assert_eq!(list.len(), 2);
        for entry in list {
            let obj = entry.as_object().unwrap();
            // Exactly the four wire fields, nothing else
            assert_eq!(obj.len(), 4);
            assert_eq!(obj["senderId"], 1);
            assert_eq!(obj["receiverId"], 2);
            assert_eq!(obj["keyword"], "친절함");
            assert_eq!(obj["colorIndex"], 3);
        }
    }

    #[test]
    fn test_incomplete_draft_maps_to_none() {
        assert_eq!(VoteDraft::default().to_content(), None);
    }

    #[test]
    fn test_shared_page_is_max() {
        assert_eq!(shared_page(0, 0), 0);
        assert_eq!(shared_page(3, 1), 3);
        assert_eq!(shared_page(1, 4), 4);
    }

    #[test]
    fn test_needs_fetch_guard() {
        // First page always fetches
        assert!(needs_fetch(None, 0));
        // Advancing past the fetched page fetches
        assert!(needs_fetch(Some(0), 1));
        // The lagging picker catching up does not re-fetch
        assert!(!needs_fetch(Some(3), 3));
        assert!(!needs_fetch(Some(3), 2));
    }

    #[test]
    fn test_sentence_preview() {
        assert_eq!(name_line(Some("상큼한"), "토마토"), "상큼한 너토마토");
        assert_eq!(name_line(None, "토마토"), " 너토마토");
        assert_eq!(
            keyword_line(Some("맛있는"), "친절함", "사과"),
            "맛있는 친절함사과"
        );
        assert_eq!(keyword_line(None, "친절함", "사과"), " 친절함사과");
    }

    #[test]
    fn test_palette_reserves_index_zero() {
        assert!(VOTE_COLORS.len() > 2);
        // Every selectable index is a hex color
        for color in &VOTE_COLORS[1..] {
            assert!(color.starts_with('#'));
        }
    }
}
