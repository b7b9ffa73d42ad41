//! Use case scenarios against the in-memory repository.

use std::sync::Arc;

use domain::{DomainError, UserError, UserRecord};
use user_service_lib::repository::InMemoryUserRepository;
use user_service_lib::usecases::{
    CreateUserInput, DeleteUserInput, GetUserInput, UpdateUserInput, UserUseCases,
};

fn setup() -> (InMemoryUserRepository, UserUseCases) {
    let repo = InMemoryUserRepository::new();
    let use_cases = UserUseCases::new(Arc::new(repo.clone()));
    (repo, use_cases)
}

fn create_input(email: &str, name: &str) -> CreateUserInput {
    CreateUserInput {
        email: email.to_string(),
        name: name.to_string(),
    }
}

#[tokio::test]
async fn test_create_on_empty_store() {
    let (repo, users) = setup();

    let record = users
        .create
        .execute(create_input("a@x.com", "A"))
        .await
        .unwrap();

    assert_eq!(
        record,
        UserRecord {
            id: 1,
            email: "a@x.com".to_string(),
            name: "A".to_string(),
        }
    );
    assert_eq!(repo.len().await, 1);
}

#[tokio::test]
async fn test_create_with_existing_email_leaves_store_unchanged() {
    let (repo, users) = setup();
    users
        .create
        .execute(create_input("a@x.com", "A"))
        .await
        .unwrap();

    let err = users
        .create
        .execute(create_input("a@x.com", "Other"))
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "Email already exists");
    assert_eq!(repo.len().await, 1);
}

#[tokio::test]
async fn test_update_name_only_keeps_email() {
    let (_repo, users) = setup();
    users
        .create
        .execute(create_input("a@x.com", "A"))
        .await
        .unwrap();

    let record = users
        .update
        .execute(UpdateUserInput {
            id: 1,
            email: None,
            name: Some("B".to_string()),
        })
        .await
        .unwrap();

    assert_eq!(record.email, "a@x.com");
    assert_eq!(record.name, "B");

    let stored = users
        .get
        .execute(GetUserInput { id: 1 })
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.name, "B");
}

#[tokio::test]
async fn test_update_to_other_users_email_conflicts() {
    let (_repo, users) = setup();
    users.create.execute(create_input("a@x.com", "A")).await.unwrap();
    users.create.execute(create_input("b@x.com", "B")).await.unwrap();

    let err = users
        .update
        .execute(UpdateUserInput {
            id: 2,
            email: Some("a@x.com".to_string()),
            name: None,
        })
        .await
        .unwrap_err();

    assert_eq!(err, UserError::Domain(DomainError::EmailAlreadyExists));
}

#[tokio::test]
async fn test_update_to_own_email_is_a_redundant_change() {
    let (_repo, users) = setup();
    users.create.execute(create_input("a@x.com", "A")).await.unwrap();

    let err = users
        .update
        .execute(UpdateUserInput {
            id: 1,
            email: Some("a@x.com".to_string()),
            name: None,
        })
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "New email is the same as current email");
}

#[tokio::test]
async fn test_delete_absent_user() {
    let (_repo, users) = setup();

    let err = users
        .delete
        .execute(DeleteUserInput { id: 999 })
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "User not found");
}

#[tokio::test]
async fn test_delete_existing_user() {
    let (repo, users) = setup();
    users.create.execute(create_input("a@x.com", "A")).await.unwrap();

    tokio_test::assert_ok!(users.delete.execute(DeleteUserInput { id: 1 }).await);

    assert!(repo.is_empty().await);
    let found = users.get.execute(GetUserInput { id: 1 }).await.unwrap();
    assert!(found.is_none());
}

#[tokio::test]
async fn test_get_absent_user_returns_none() {
    let (_repo, users) = setup();

    let found = users.get.execute(GetUserInput { id: 999 }).await;

    assert_eq!(found, Ok(None));
}

#[tokio::test]
async fn test_get_all_is_idempotent() {
    let (_repo, users) = setup();
    for (email, name) in [("a@x.com", "A"), ("b@x.com", "B")] {
        users.create.execute(create_input(email, name)).await.unwrap();
    }

    let first = users.get_all.execute().await.unwrap();
    let second = users.get_all.execute().await.unwrap();

    assert_eq!(first, second);
    assert_eq!(first.len(), 2);
    assert_eq!(first[0].email, "a@x.com");
}

#[tokio::test]
async fn test_get_all_on_empty_store() {
    let (_repo, users) = setup();
    assert!(users.get_all.execute().await.unwrap().is_empty());
}
