//! Comment Thread State
//!
//! Incremental comment loading plus local comment/reply submission for
//! a blog post. Batches of the seeded feed are paged in as the reader
//! scrolls; submissions live only in the local `posted` list and never
//! join the seeded feed.

use std::collections::HashSet;

use crate::models::{avatar_initials, Comment, Reply};

/// Comments fetched per sentinel trigger
pub const COMMENT_BATCH: usize = 5;

/// Replies shown while a comment is collapsed
pub const COLLAPSED_REPLIES: usize = 2;

/// Ids for locally posted comments/replies start here so they cannot
/// collide with feed ids
const LOCAL_ID_BASE: u32 = 10_000;

/// One fetched page of the comment feed
#[derive(Clone, Debug, PartialEq)]
pub struct CommentPage {
    pub comments: Vec<Comment>,
    pub total: usize,
}

/// Pending top-level comment or reply input
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CommentDraft {
    pub author: String,
    pub email: String,
    pub body: String,
}

impl CommentDraft {
    /// All three fields are required; whitespace doesn't count
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.author.trim().is_empty() {
            return Err("Please enter your name");
        }
        if self.email.trim().is_empty() {
            return Err("Please enter your email");
        }
        if self.body.trim().is_empty() {
            return Err("Please write a comment first");
        }
        Ok(())
    }
}

/// State machine for one post's comment section.
///
/// `seeded` is the paged-in prefix of the backing feed; `posted` holds
/// local submissions, newest first. The rendered list is
/// `posted ++ seeded`, so the seeded prefix only ever grows and user
/// posts never count against paging.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ThreadState {
    seeded: Vec<Comment>,
    posted: Vec<Comment>,
    total: Option<usize>,
    loading: bool,
    expanded: HashSet<u32>,
    next_local_id: u32,
}

impl ThreadState {
    pub fn new() -> Self {
        Self {
            next_local_id: LOCAL_ID_BASE,
            ..Self::default()
        }
    }

    pub fn displayed(&self) -> Vec<Comment> {
        let mut out = self.posted.clone();
        out.extend(self.seeded.iter().cloned());
        out
    }

    pub fn displayed_len(&self) -> usize {
        self.posted.len() + self.seeded.len()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// True until the seeded prefix covers the whole feed. Before the
    /// first page arrives the total is unknown, which counts as more.
    pub fn has_more(&self) -> bool {
        match self.total {
            None => true,
            Some(total) => self.seeded.len() < total,
        }
    }

    /// Start a batch load, returning the fetch offset. Returns `None`
    /// while a load is in flight or the feed is exhausted, so repeat
    /// sentinel triggers are no-ops.
    pub fn begin_load(&mut self) -> Option<usize> {
        if self.loading || !self.has_more() {
            return None;
        }
        self.loading = true;
        Some(self.seeded.len())
    }

    pub fn complete_load(&mut self, page: CommentPage) {
        self.loading = false;
        self.total = Some(page.total);
        self.seeded.extend(page.comments);
    }

    pub fn fail_load(&mut self) {
        self.loading = false;
    }

    pub fn replies_expanded(&self, comment_id: u32) -> bool {
        self.expanded.contains(&comment_id)
    }

    pub fn toggle_replies(&mut self, comment_id: u32) {
        if !self.expanded.remove(&comment_id) {
            self.expanded.insert(comment_id);
        }
    }

    /// The replies currently visible for a comment: the first two while
    /// collapsed, all of them once expanded.
    pub fn visible_replies<'a>(&self, comment: &'a Comment) -> &'a [Reply] {
        if self.replies_expanded(comment.id) {
            &comment.replies
        } else {
            let shown = comment.replies.len().min(COLLAPSED_REPLIES);
            &comment.replies[..shown]
        }
    }

    /// Post a top-level comment. On success it is prepended to the
    /// local list with a synthetic id; a rejected draft changes
    /// nothing.
    pub fn submit_comment(&mut self, draft: &CommentDraft) -> Result<u32, &'static str> {
        draft.validate()?;
        let id = self.take_local_id();
        let author = draft.author.trim().to_string();
        self.posted.insert(
            0,
            Comment {
                id,
                initials: avatar_initials(&author),
                author,
                date: "Just now".to_string(),
                content: draft.body.trim().to_string(),
                likes: 0,
                replies: Vec::new(),
            },
        );
        Ok(id)
    }

    /// Post a reply under `comment_id`, optionally answering a named
    /// earlier reply. Force-expands the comment's reply list.
    pub fn submit_reply(
        &mut self,
        comment_id: u32,
        draft: &CommentDraft,
        reply_to: Option<String>,
    ) -> Result<u32, &'static str> {
        draft.validate()?;
        let id = self.take_local_id();
        let reply = Reply {
            id,
            author: draft.author.trim().to_string(),
            date: "Just now".to_string(),
            content: draft.body.trim().to_string(),
            likes: 0,
            reply_to,
        };
        let target = self
            .posted
            .iter_mut()
            .chain(self.seeded.iter_mut())
            .find(|c| c.id == comment_id)
            .ok_or("That comment is no longer available")?;
        target.replies.push(reply);
        self.expanded.insert(comment_id);
        Ok(id)
    }

    fn take_local_id(&mut self) -> u32 {
        let id = self.next_local_id;
        self.next_local_id += 1;
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data;

    fn feed() -> Vec<Comment> {
        data::seed_comments(1)
    }

    fn page_at(feed: &[Comment], offset: usize) -> CommentPage {
        let end = (offset + COMMENT_BATCH).min(feed.len());
        CommentPage {
            comments: feed[offset..end].to_vec(),
            total: feed.len(),
        }
    }

    fn draft() -> CommentDraft {
        CommentDraft {
            author: "Jordan Lee".to_string(),
            email: "jordan@example.com".to_string(),
            body: "Great article!".to_string(),
        }
    }

    #[test]
    fn test_five_batches_exhaust_a_25_comment_feed() {
        let feed = feed();
        assert_eq!(feed.len(), 25);
        let mut thread = ThreadState::new();
        for _ in 0..5 {
            let offset = thread.begin_load().expect("should have more to load");
            thread.complete_load(page_at(&feed, offset));
        }
        assert_eq!(thread.displayed_len(), 25);
        assert!(!thread.has_more());
        // A sixth trigger is a no-op
        assert_eq!(thread.begin_load(), None);
        assert_eq!(thread.displayed_len(), 25);
    }

    #[test]
    fn test_load_in_flight_suppresses_second_trigger() {
        let feed = feed();
        let mut thread = ThreadState::new();
        let offset = thread.begin_load().unwrap();
        assert!(thread.is_loading());
        assert_eq!(thread.begin_load(), None);
        thread.complete_load(page_at(&feed, offset));
        assert!(!thread.is_loading());
        assert_eq!(thread.begin_load(), Some(COMMENT_BATCH));
    }

    #[test]
    fn test_displayed_order_is_posted_then_seeded() {
        let feed = feed();
        let mut thread = ThreadState::new();
        let offset = thread.begin_load().unwrap();
        thread.complete_load(page_at(&feed, offset));
        thread.submit_comment(&draft()).unwrap();
        let displayed = thread.displayed();
        assert_eq!(displayed[0].author, "Jordan Lee");
        assert_eq!(displayed[0].date, "Just now");
        assert_eq!(displayed[1].id, feed[0].id);
        // The posted comment is not part of the seeded prefix, so
        // paging math is untouched
        assert!(thread.has_more());
    }

    #[test]
    fn test_empty_email_is_rejected_without_mutation() {
        let mut thread = ThreadState::new();
        thread.complete_load(page_at(&feed(), 0));
        let before = thread.displayed_len();
        let mut bad = draft();
        bad.email = "  ".to_string();
        assert!(thread.submit_comment(&bad).is_err());
        assert_eq!(thread.displayed_len(), before);
    }

    #[test]
    fn test_reply_appends_and_force_expands() {
        let feed = feed();
        let mut thread = ThreadState::new();
        thread.complete_load(CommentPage {
            comments: feed.clone(),
            total: feed.len(),
        });

        // Collapsed comment
        assert!(!thread.replies_expanded(7));
        thread
            .submit_reply(7, &draft(), Some("Sarah".to_string()))
            .unwrap();
        let comment = thread.displayed().into_iter().find(|c| c.id == 7).unwrap();
        let reply = comment.replies.last().unwrap().clone();
        assert_eq!(reply.reply_to.as_deref(), Some("Sarah"));
        assert!(thread.replies_expanded(7));

        // Explicitly collapsed again, a second reply re-expands it
        thread.toggle_replies(7);
        assert!(!thread.replies_expanded(7));
        thread.submit_reply(7, &draft(), None).unwrap();
        assert!(thread.replies_expanded(7));
    }

    #[test]
    fn test_visible_replies_collapsed_vs_expanded() {
        let mut thread = ThreadState::new();
        let mut comment = feed().remove(0);
        comment.replies = (0..3)
            .map(|i| Reply {
                id: 500 + i,
                author: format!("Replier {i}"),
                date: "Yesterday".to_string(),
                content: "reply".to_string(),
                likes: 0,
                reply_to: None,
            })
            .collect();
        assert_eq!(thread.visible_replies(&comment).len(), COLLAPSED_REPLIES);
        thread.toggle_replies(comment.id);
        assert_eq!(thread.visible_replies(&comment).len(), 3);
    }

    #[test]
    fn test_reply_to_unknown_comment_fails() {
        let mut thread = ThreadState::new();
        assert!(thread.submit_reply(999, &draft(), None).is_err());
    }
}
