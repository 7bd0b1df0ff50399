use std::sync::Arc;

mod support;

use commentary_core::application::commands::comments::{CommentCommandService, CreateCommentCommand};
use commentary_core::application::queries::comments::{
    CommentQueryService, ListCommentsQuery, SortOrder,
};
use commentary_core::infrastructure::repositories::InMemoryCommentRepository;
use support::{RecordingPublisher, SequentialIds, SteppingClock};

struct Fixture {
    commands: CommentCommandService,
    queries: CommentQueryService,
    publisher: Arc<RecordingPublisher>,
}

fn fixture() -> Fixture {
    let repo = Arc::new(InMemoryCommentRepository::new());
    let publisher = Arc::new(RecordingPublisher::default());
    Fixture {
        commands: CommentCommandService::new(
            repo.clone(),
            publisher.clone(),
            Arc::new(SequentialIds::default()),
            Arc::new(SteppingClock::default()),
        ),
        queries: CommentQueryService::new(repo),
        publisher,
    }
}

async fn seed(fx: &Fixture, entity_id: &str, texts: &[&str]) -> Vec<String> {
    let mut ids = Vec::new();
    for text in texts {
        let dto = fx
            .commands
            .create_comment(CreateCommentCommand {
                entity_type: "post".into(),
                entity_id: entity_id.into(),
                author_id: "u1".into(),
                text: (*text).into(),
            })
            .await
            .unwrap();
        ids.push(dto.id);
    }
    ids
}

fn query(page: u32, limit: u32, sort: SortOrder) -> ListCommentsQuery {
    ListCommentsQuery {
        entity_type: "post".into(),
        entity_id: "42".into(),
        page,
        limit,
        sort,
    }
}

#[tokio::test]
async fn second_page_of_one_in_desc_order_is_the_older_comment() {
    let fx = fixture();
    let ids = seed(&fx, "42", &["older", "newer"]).await;

    let page = fx
        .queries
        .list_comments(query(2, 1, SortOrder::Desc))
        .await
        .unwrap();

    assert_eq!(page.len(), 1);
    assert_eq!(page[0].id, ids[0]);
    assert_eq!(page[0].text, "older");
}

#[tokio::test]
async fn asc_and_desc_are_exact_reversals() {
    let fx = fixture();
    seed(&fx, "42", &["a", "b", "c", "d"]).await;

    let asc = fx
        .queries
        .list_comments(query(1, 10, SortOrder::Asc))
        .await
        .unwrap();
    let mut desc = fx
        .queries
        .list_comments(query(1, 10, SortOrder::Desc))
        .await
        .unwrap();
    desc.reverse();

    assert_eq!(asc, desc);
    let texts: Vec<_> = asc.iter().map(|c| c.text.as_str()).collect();
    assert_eq!(texts, vec!["a", "b", "c", "d"]);
}

#[tokio::test]
async fn listing_is_idempotent_and_never_publishes() {
    let fx = fixture();
    seed(&fx, "42", &["a", "b", "c"]).await;
    let published_before = fx.publisher.events().len();

    let first = fx
        .queries
        .list_comments(query(1, 2, SortOrder::Desc))
        .await
        .unwrap();
    let second = fx
        .queries
        .list_comments(query(1, 2, SortOrder::Desc))
        .await
        .unwrap();

    assert_eq!(first, second);
    assert_eq!(fx.publisher.events().len(), published_before);
}

#[tokio::test]
async fn only_the_requested_entity_is_listed() {
    let fx = fixture();
    seed(&fx, "42", &["mine"]).await;
    seed(&fx, "7", &["theirs"]).await;

    let page = fx
        .queries
        .list_comments(query(1, 10, SortOrder::Desc))
        .await
        .unwrap();
    assert_eq!(page.len(), 1);
    assert_eq!(page[0].text, "mine");
}

#[tokio::test]
async fn entity_without_comments_is_not_found() {
    let fx = fixture();
    let err = fx
        .queries
        .list_comments(query(1, 10, SortOrder::Desc))
        .await
        .unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn page_past_the_end_is_empty() {
    let fx = fixture();
    seed(&fx, "42", &["a", "b"]).await;

    let page = fx
        .queries
        .list_comments(query(5, 10, SortOrder::Asc))
        .await
        .unwrap();
    assert!(page.is_empty());
}

#[tokio::test]
async fn zero_page_or_limit_is_rejected() {
    let fx = fixture();
    seed(&fx, "42", &["a"]).await;

    let err = fx
        .queries
        .list_comments(query(0, 10, SortOrder::Asc))
        .await
        .unwrap_err();
    assert!(err.is_validation());

    let err = fx
        .queries
        .list_comments(query(1, 0, SortOrder::Asc))
        .await
        .unwrap_err();
    assert!(err.is_validation());
}

#[test]
fn sort_order_parses_only_asc_and_desc() {
    assert_eq!("asc".parse::<SortOrder>().unwrap(), SortOrder::Asc);
    assert_eq!("desc".parse::<SortOrder>().unwrap(), SortOrder::Desc);
    assert!("DESC".parse::<SortOrder>().is_err());
    assert!("newest".parse::<SortOrder>().is_err());
    assert_eq!(SortOrder::default(), SortOrder::Desc);
}
