//! Comment Board
//!
//! In-memory state of the notes shown on the page. Loading and adding are
//! split around the store call so the reactive layer can await the store
//! without holding the board:
//!
//! - load: `list_all` → [`CommentBoard::finish_load`]
//! - add: [`CommentBoard::prepare`] → `store::persist` → [`CommentBoard::commit`]
//!
//! Nothing is written back after creation. Positions changed by dragging
//! live only in this session.

use chrono::{DateTime, Utc};

use crate::geometry::{clamp_to_canvas, find_safe_position, CanvasBounds, Point, Size};
use crate::models::{Comment, CommentId, DraftComment, NewComment};
use crate::store::StoreResult;
use crate::validation::ValidationError;

/// Base position of the first new comment
const NEW_COMMENT_X: f64 = 100.0;
const NEW_COMMENT_Y: f64 = 200.0;
/// New comments step down in rows of this height, wrapping after five
const NEW_COMMENT_ROW_HEIGHT: f64 = 150.0;
const NEW_COMMENT_ROWS: usize = 5;

/// Shown when the store cannot be read
const SEED_ID: &str = "initial";
const SEED_TEXT: &str = "Deeply saddened by the loss, your kindness will always be remembered.";
const SEED_AUTHOR: &str = "Dhrubajyoti Ghosh";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BoardPhase {
    #[default]
    Loading,
    Ready,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CommentBoard {
    phase: BoardPhase,
    comments: Vec<Comment>,
    /// Author of the last successful submission, offered as the default
    /// for the next one
    last_author: String,
}

impl CommentBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> BoardPhase {
        self.phase
    }

    pub fn is_loading(&self) -> bool {
        self.phase == BoardPhase::Loading
    }

    pub fn comments(&self) -> &[Comment] {
        &self.comments
    }

    pub fn get(&self, id: &CommentId) -> Option<&Comment> {
        self.comments.iter().find(|c| &c.id == id)
    }

    pub fn last_author(&self) -> &str {
        &self.last_author
    }

    /// Complete the initial load.
    ///
    /// Every loaded comment is moved off the photo once. A failed load is
    /// replaced by the seed comment so the board never stays empty or
    /// loading. Without canvas bounds positions are kept as stored.
    pub fn finish_load(&mut self, result: StoreResult<Vec<Comment>>, bounds: Option<CanvasBounds>) {
        let loaded = match result {
            Ok(comments) => {
                log::info!("loaded {} comments", comments.len());
                comments
            }
            Err(e) => {
                log::error!("failed to load comments: {}", e);
                vec![seed_comment()]
            }
        };
        self.comments = loaded
            .into_iter()
            .map(|comment| place_safely(comment, bounds))
            .collect();
        self.phase = BoardPhase::Ready;
    }

    /// Position the next new comment would be placed at, before the guard
    pub fn next_base_position(&self) -> Point {
        let row = (self.comments.len() % NEW_COMMENT_ROWS) as f64;
        Point::new(NEW_COMMENT_X, NEW_COMMENT_Y + row * NEW_COMMENT_ROW_HEIGHT)
    }

    /// Validate a draft and compute where it will be placed. Nothing is
    /// changed; the result is what gets sent to the store.
    pub fn prepare(
        &self,
        draft: &DraftComment,
        bounds: Option<CanvasBounds>,
        timestamp: DateTime<Utc>,
    ) -> Result<NewComment, ValidationError> {
        draft.validate()?;
        let base = self.next_base_position();
        let pos = match bounds {
            Some(bounds) => find_safe_position(base, Size::comment(), bounds),
            None => base,
        };
        Ok(NewComment {
            text: draft.text.clone(),
            author: draft.author.clone(),
            x: pos.x,
            y: pos.y,
            timestamp,
        })
    }

    /// Append a comment the store has confirmed and remember its author
    pub fn commit(&mut self, comment: Comment) {
        self.last_author = comment.author.clone();
        self.comments.push(comment);
    }

    /// Move a comment to a new top-left corner, kept inside the canvas.
    /// Returns false if no comment has this id.
    pub fn move_comment(&mut self, id: &CommentId, to: Point, bounds: CanvasBounds) -> bool {
        let pos = clamp_to_canvas(to, Size::comment(), bounds);
        match self.comments.iter_mut().find(|c| &c.id == id) {
            Some(comment) => {
                comment.x = pos.x;
                comment.y = pos.y;
                true
            }
            None => false,
        }
    }
}

fn seed_comment() -> Comment {
    Comment {
        id: CommentId::new(SEED_ID),
        text: SEED_TEXT.to_string(),
        author: SEED_AUTHOR.to_string(),
        x: NEW_COMMENT_X,
        y: NEW_COMMENT_Y,
    }
}

fn place_safely(mut comment: Comment, bounds: Option<CanvasBounds>) -> Comment {
    if let Some(bounds) = bounds {
        let pos = find_safe_position(Point::new(comment.x, comment.y), Size::comment(), bounds);
        comment.x = pos.x;
        comment.y = pos.y;
    }
    comment
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::overlaps;
    use crate::store::memory::MemoryStore;
    use crate::store::{persist, CommentStore, StoreError};
    use chrono::TimeZone;

    fn canvas() -> CanvasBounds {
        CanvasBounds::new(1400.0, 900.0)
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 5, 1, 12, 0, 0).unwrap()
    }

    fn comment(id: &str, x: f64, y: f64) -> Comment {
        Comment {
            id: CommentId::new(id),
            text: "With love".to_string(),
            author: "Anon".to_string(),
            x,
            y,
        }
    }

    fn words(n: usize) -> String {
        vec!["word"; n].join(" ")
    }

    async fn loaded_board(store: &MemoryStore) -> CommentBoard {
        let mut board = CommentBoard::new();
        assert!(board.is_loading());
        board.finish_load(store.list_all().await, Some(canvas()));
        board
    }

    #[tokio::test]
    async fn test_load_moves_comments_off_photo() {
        let store = MemoryStore::with_comments(vec![
            comment("a", 600.0, 400.0),
            comment("b", 950.0, 300.0),
        ]);
        let board = loaded_board(&store).await;

        assert_eq!(board.phase(), BoardPhase::Ready);
        assert_eq!(board.comments().len(), 2);
        let a = board.get(&CommentId::new("a")).unwrap();
        assert_eq!((a.x, a.y), (50.0, 50.0));
        let b = board.get(&CommentId::new("b")).unwrap();
        assert_eq!((b.x, b.y), (950.0, 300.0));
    }

    #[tokio::test]
    async fn test_failed_load_shows_seed_comment() {
        let store = MemoryStore::new().failing_list();
        let board = loaded_board(&store).await;

        assert_eq!(board.phase(), BoardPhase::Ready);
        assert_eq!(board.comments().len(), 1);
        let seed = &board.comments()[0];
        assert_eq!(seed.author, "Dhrubajyoti Ghosh");
        // (100, 200) overlaps the photo on this canvas
        assert_eq!((seed.x, seed.y), (50.0, 50.0));
        assert!(!overlaps(Point::new(seed.x, seed.y), Size::comment(), canvas()));
    }

    #[test]
    fn test_load_without_bounds_keeps_positions() {
        let mut board = CommentBoard::new();
        board.finish_load(Ok(vec![comment("a", 600.0, 400.0)]), None);
        assert_eq!((board.comments()[0].x, board.comments()[0].y), (600.0, 400.0));
    }

    #[tokio::test]
    async fn test_add_comment_persists_then_appends() {
        let store = MemoryStore::new();
        let mut board = loaded_board(&store).await;
        assert!(board.comments().is_empty());

        let draft = DraftComment::new("Rest well", "Jane");
        let prepared = board.prepare(&draft, Some(canvas()), now()).unwrap();
        let saved = persist(&store, prepared).await.unwrap();
        board.commit(saved);

        let inserts = store.inserts();
        assert_eq!(inserts.len(), 1);
        assert_eq!(inserts[0].text, "Rest well");
        assert_eq!(inserts[0].author, "Jane");
        assert_eq!((inserts[0].x, inserts[0].y), (50.0, 50.0));
        assert_eq!(inserts[0].timestamp, now());

        assert_eq!(board.comments().len(), 1);
        assert_eq!(board.comments()[0].id, CommentId::new("doc-1"));
        assert_eq!(board.last_author(), "Jane");
    }

    #[tokio::test]
    async fn test_overlong_comment_never_reaches_store() {
        let store = MemoryStore::new();
        let board = loaded_board(&store).await;

        let draft = DraftComment::new(words(76), "Jane");
        assert_eq!(
            board.prepare(&draft, Some(canvas()), now()),
            Err(ValidationError::TooManyWords(76))
        );
        assert!(store.inserts().is_empty());
        assert!(board.comments().is_empty());
    }

    #[test]
    fn test_blank_fields_rejected() {
        let board = CommentBoard::new();
        assert_eq!(
            board.prepare(&DraftComment::new("   ", "Jane"), None, now()),
            Err(ValidationError::EmptyText)
        );
        assert_eq!(
            board.prepare(&DraftComment::new("Rest well", ""), None, now()),
            Err(ValidationError::EmptyAuthor)
        );
    }

    #[tokio::test]
    async fn test_failed_insert_leaves_board_unchanged() {
        let store = MemoryStore::new().failing_insert();
        let mut board = loaded_board(&store).await;
        board.commit(comment("kept", 950.0, 100.0));
        let before = board.clone();

        let prepared = board
            .prepare(&DraftComment::new("Rest well", "Jane"), Some(canvas()), now())
            .unwrap();
        let result = persist(&store, prepared).await;

        assert!(matches!(result, Err(StoreError::Rejected { status: 503, .. })));
        assert_eq!(board, before);
        assert_eq!(store.inserts().len(), 1);
        assert_eq!(store.len(), 0);
    }

    #[test]
    fn test_base_position_cycles_every_five() {
        let mut board = CommentBoard::new();
        board.finish_load(Ok(Vec::new()), None);
        let mut ys = Vec::new();
        for i in 0..6 {
            ys.push(board.next_base_position().y);
            board.commit(comment(&format!("c{}", i), 0.0, 0.0));
        }
        assert_eq!(ys, vec![200.0, 350.0, 500.0, 650.0, 800.0, 200.0]);
        assert_eq!(board.next_base_position().x, 100.0);
    }

    #[test]
    fn test_prepare_without_bounds_uses_base_position() {
        let board = CommentBoard::new();
        let prepared = board
            .prepare(&DraftComment::new("Rest well", "Jane"), None, now())
            .unwrap();
        assert_eq!((prepared.x, prepared.y), (100.0, 200.0));
    }

    #[test]
    fn test_move_comment_clamps_to_canvas() {
        let mut board = CommentBoard::new();
        board.finish_load(Ok(vec![comment("a", 10.0, 10.0)]), None);
        let id = CommentId::new("a");

        assert!(board.move_comment(&id, Point::new(-40.0, 5000.0), canvas()));
        let a = board.get(&id).unwrap();
        assert_eq!((a.x, a.y), (0.0, 800.0));

        assert!(board.move_comment(&id, Point::new(700.0, 300.0), canvas()));
        let a = board.get(&id).unwrap();
        assert_eq!((a.x, a.y), (700.0, 300.0));
    }

    #[test]
    fn test_move_unknown_comment() {
        let mut board = CommentBoard::new();
        board.finish_load(Ok(vec![comment("a", 10.0, 10.0)]), None);
        assert!(!board.move_comment(&CommentId::new("zzz"), Point::new(1.0, 1.0), canvas()));
        assert_eq!(board.comments()[0].x, 10.0);
    }
}
