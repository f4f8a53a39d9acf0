use chrono::{TimeZone, Utc};
use comments_api::domain::{
    comment::{
        entity::{Comment, CommentChanges, NewComment, normalize_image},
        reaction::Reaction,
    },
    shared::pagination::{MAX_PAGE_SIZE, PaginationRequest},
};

#[test]
fn reaction_deltas_match_the_counter_rules() {
    assert_eq!(Reaction::transition_delta(Reaction::Neutral, Reaction::Like), 1);
    assert_eq!(Reaction::transition_delta(Reaction::Dislike, Reaction::Like), 2);
    assert_eq!(Reaction::transition_delta(Reaction::Like, Reaction::Dislike), -2);
    assert_eq!(Reaction::transition_delta(Reaction::Dislike, Reaction::Neutral), 1);
}

#[test]
fn new_comment_keeps_supplied_values() {
    let date = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let c = NewComment::new(
        "A".into(),
        "hi".into(),
        Some(date),
        Some(5),
        Some("https://example.com/a.png".into()),
    );
    assert_eq!(c.date, date);
    assert_eq!(c.likes, 5);
    assert_eq!(c.image.as_deref(), Some("https://example.com/a.png"));
}

#[test]
fn blank_images_normalize_to_none() {
    assert_eq!(normalize_image(Some("   ".into())), None);
    assert_eq!(normalize_image(None), None);
    assert_eq!(
        normalize_image(Some(" https://x.io/a ".into())),
        Some("https://x.io/a".to_string())
    );
}

#[test]
fn empty_changes_are_detected() {
    assert!(CommentChanges::default().is_empty());
    let changes = CommentChanges {
        likes: Some(0),
        ..Default::default()
    };
    assert!(!changes.is_empty());

    let mut c = Comment {
        id: 1,
        author: "A".into(),
        text: "t".into(),
        date: Utc::now(),
        likes: 9,
        image: None,
    };
    changes.apply_to(&mut c);
    assert_eq!(c.likes, 0);
}

#[test]
fn pagination_is_clamped() {
    let p = PaginationRequest::new(10_000, -5);
    assert_eq!(p.limit, MAX_PAGE_SIZE);
    assert_eq!(p.offset, 0);
    assert_eq!(PaginationRequest::new(0, 0).limit, 1);
    assert!(PaginationRequest::new(10, 0).previous().is_none());
    assert!(PaginationRequest::new(10, 0).next(10).is_none());
    assert_eq!(PaginationRequest::new(10, 0).next(11).unwrap().offset, 10);
}

#[test]
fn pagination_next_stops_at_the_largest_offset() {
    let last = PaginationRequest::new(1, i64::MAX);
    assert_eq!(last.offset, i64::MAX);
    assert!(last.next(i64::MAX).is_none());
    assert_eq!(last.previous().unwrap().offset, i64::MAX - 1);

    let near = PaginationRequest::new(MAX_PAGE_SIZE, i64::MAX - 10);
    assert!(near.next(i64::MAX).is_none());
}
