use futures::TryStreamExt as _;
use mvr_dal::customer::{CreateCustomer, CustomerRepositoryImpl};
use mvr_dal::genre::{CreateGenre, GenreRepositoryImpl};
use mvr_dal::Error;
use sqlx::Executor;

const TEST_DATA: &str = r#"
INSERT INTO genre (id, name) VALUES (1, 'crime');
INSERT INTO genre (id, name) VALUES (2, 'sci-fi');
INSERT INTO genre (id, name) VALUES (3, 'fantasy');

INSERT INTO customer (id, name, phone, is_gold) VALUES (1, 'John Smith', 777123456, 0);
INSERT INTO customer (id, name, phone, is_gold) VALUES (2, 'Jane Smith', 777123457, 1);
"#;

async fn init_db() -> sqlx::Pool<sqlx::Sqlite> {
    const DB_URL: &str = "sqlite::memory:";
    let conn = sqlx::sqlite::SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .connect(DB_URL)
        .await
        .unwrap();
    sqlx::migrate!("../../migrations").run(&conn).await.unwrap();

    conn.execute_many(TEST_DATA)
        .try_collect::<Vec<_>>()
        .await
        .unwrap();

    conn
}

#[tokio::test]
async fn test_genre_list_sorted_by_name() {
    let conn = init_db().await;
    let repo = GenreRepositoryImpl::new(conn);

    let genres = repo.list(mvr_dal::MAX_LIMIT).await.unwrap();
    let names: Vec<&str> = genres.iter().map(|g| g.name.as_str()).collect();
    assert_eq!(names, vec!["crime", "fantasy", "sci-fi"]);
}

#[tokio::test]
async fn test_genre_create_and_get() {
    let conn = init_db().await;
    let repo = GenreRepositoryImpl::new(conn);

    let created = repo
        .create(CreateGenre {
            name: "Action".to_string(),
        })
        .await
        .unwrap();
    assert!(created.id > 3);
    assert_eq!(created.name, "Action");

    let fetched = repo.get(created.id).await.unwrap();
    assert_eq!(fetched.id, created.id);
    assert_eq!(fetched.name, created.name);
}

#[tokio::test]
async fn test_genre_update() {
    let conn = init_db().await;
    let repo = GenreRepositoryImpl::new(conn);

    let updated = repo
        .update(
            1,
            CreateGenre {
                name: "thriller".to_string(),
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.id, 1);
    assert_eq!(updated.name, "thriller");

    let missing = repo
        .update(
            99,
            CreateGenre {
                name: "western".to_string(),
            },
        )
        .await;
    assert!(matches!(missing, Err(Error::RecordNotFound(_))));
}

#[tokio::test]
async fn test_genre_delete_returns_record() {
    let conn = init_db().await;
    let repo = GenreRepositoryImpl::new(conn);

    let deleted = repo.delete(2).await.unwrap();
    assert_eq!(deleted.name, "sci-fi");

    let gone = repo.get(2).await;
    assert!(matches!(gone, Err(Error::RecordNotFound(_))));

    let again = repo.delete(2).await;
    assert!(matches!(again, Err(Error::RecordNotFound(_))));
}

#[tokio::test]
async fn test_customer_roundtrip() {
    let conn = init_db().await;
    let repo = CustomerRepositoryImpl::new(conn);

    let created = repo
        .create(CreateCustomer {
            name: "Karel Novak".to_string(),
            phone: 606_123_789,
            is_gold: false,
        })
        .await
        .unwrap();
    assert!(!created.is_gold);

    let updated = repo
        .update(
            created.id,
            CreateCustomer {
                name: "Karel Novak".to_string(),
                phone: 606_999_000,
                is_gold: true,
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.phone, 606_999_000);
    assert!(updated.is_gold);

    let deleted = repo.delete(created.id).await.unwrap();
    assert_eq!(deleted.phone, 606_999_000);
    let gone = repo.get(created.id).await;
    assert!(matches!(gone, Err(Error::RecordNotFound(_))));
}

#[tokio::test]
async fn test_customer_find_by_name() {
    let conn = init_db().await;
    let repo = CustomerRepositoryImpl::new(conn);

    let found = repo.find_by_name("Jane Smith").await.unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, 2);
    assert!(found[0].is_gold);

    let nobody = repo.find_by_name("Nobody Here").await.unwrap();
    assert!(nobody.is_empty());
}

#[tokio::test]
async fn test_customer_get_missing() {
    let conn = init_db().await;
    let repo = CustomerRepositoryImpl::new(conn);

    let missing = repo.get(42).await;
    assert!(matches!(missing, Err(Error::RecordNotFound(_))));
}
