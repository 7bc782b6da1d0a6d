use store_api::clients::ActorClient;
use store_api::lifecycle::StoreSystem;
use store_api::model::{ProductId, ProductPayload, UserId, UserPayload};
use store_api::product_actor::ProductError;
use store_api::user_actor::UserError;
use store_api::validation::Violation;

fn maria() -> UserPayload {
    UserPayload::new("Maria Silva", "12345678901", "maria@example.com")
}

/// Full end-to-end test of the users collection with a real actor.
#[tokio::test]
async fn test_user_lifecycle() {
    let system = StoreSystem::new();

    let id = system
        .user_client
        .create_user(maria())
        .await
        .expect("Failed to create user");
    assert_eq!(id, UserId(1));

    let user = system.user_client.fetch(id).await.expect("User not found");
    assert_eq!(user.name, "Maria Silva");
    assert_eq!(user.cpf, "12345678901");
    assert_eq!(user.email, "maria@example.com");

    let updated = system
        .user_client
        .update_user(id, UserPayload::new("Maria Souza", "10987654321", "ms@example.org"))
        .await
        .expect("Failed to update user");
    assert_eq!(updated.id, id);
    assert_eq!(updated.name, "Maria Souza");
    assert_eq!(system.user_client.fetch(id).await.unwrap(), updated);

    system.user_client.delete(id).await.expect("Failed to delete user");
    assert_eq!(system.user_client.get(id).await.unwrap(), None);

    system.shutdown().await.expect("Failed to shutdown");
}

#[tokio::test]
async fn test_invalid_create_reports_every_violation_and_stores_nothing() {
    let system = StoreSystem::new();

    let result = system
        .user_client
        .create_user(UserPayload::new("Jo", "123", "nope"))
        .await;

    match result {
        Err(UserError::ValidationError(errors)) => assert_eq!(
            errors.violations(),
            &[
                Violation::NameTooShort { min: 3 },
                Violation::InvalidCpf,
                Violation::InvalidEmail,
            ]
        ),
        other => panic!("Expected ValidationError, got {other:?}"),
    }
    assert!(system.user_client.list().await.unwrap().is_empty());

    // The rejected create did not consume an id.
    let id = system.user_client.create_user(maria()).await.unwrap();
    assert_eq!(id, UserId(1));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_missing_ids_are_not_found_and_change_nothing() {
    let system = StoreSystem::new();
    system.user_client.create_user(maria()).await.unwrap();
    let before = system.user_client.list().await.unwrap();

    let missing = UserId(42);
    assert_eq!(
        system.user_client.fetch(missing).await,
        Err(UserError::NotFound("user_42".to_string()))
    );
    assert!(matches!(
        system.user_client.update_user(missing, maria()).await,
        Err(UserError::NotFound(_))
    ));
    assert!(matches!(
        system.user_client.delete(missing).await,
        Err(UserError::NotFound(_))
    ));

    assert_eq!(system.user_client.list().await.unwrap(), before);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_update_of_missing_id_is_not_found_even_with_invalid_body() {
    let system = StoreSystem::new();

    let result = system
        .product_client
        .update_product(ProductId(1), ProductPayload::default())
        .await;

    assert_eq!(result, Err(ProductError::NotFound("product_1".to_string())));
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_invalid_update_leaves_product_untouched() {
    let system = StoreSystem::new();
    let id = system
        .product_client
        .create_product(ProductPayload::new("Widget", 9.99))
        .await
        .unwrap();

    let result = system
        .product_client
        .update_product(id, ProductPayload::new("Widget", -1.0))
        .await;
    assert!(matches!(result, Err(ProductError::ValidationError(_))));

    let product = system.product_client.fetch(id).await.unwrap();
    assert_eq!(product.price, 9.99);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_ids_are_not_reused_after_delete() {
    let system = StoreSystem::new();
    let widget = || ProductPayload::new("Widget", 1.0);

    let first = system.product_client.create_product(widget()).await.unwrap();
    let second = system.product_client.create_product(widget()).await.unwrap();
    system.product_client.delete(second).await.unwrap();
    let third = system.product_client.create_product(widget()).await.unwrap();

    assert_eq!(first, ProductId(1));
    assert_eq!(second, ProductId(2));
    assert_eq!(third, ProductId(3));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_list_keeps_insertion_order_across_deletes() {
    let system = StoreSystem::new();
    for name in ["Alpha", "Bravo", "Charlie", "Delta"] {
        system
            .product_client
            .create_product(ProductPayload::new(name, 1.0))
            .await
            .unwrap();
    }
    system.product_client.delete(ProductId(2)).await.unwrap();

    let names: Vec<String> = system
        .product_client
        .list()
        .await
        .unwrap()
        .into_iter()
        .map(|product| product.name)
        .collect();
    assert_eq!(names, ["Alpha", "Charlie", "Delta"]);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_collections_are_independent() {
    let system = StoreSystem::new();

    let user_id = system.user_client.create_user(maria()).await.unwrap();
    let product_id = system
        .product_client
        .create_product(ProductPayload::new("Widget", 9.99))
        .await
        .unwrap();

    assert_eq!(user_id, UserId(1));
    assert_eq!(product_id, ProductId(1));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_default_system_starts_empty() {
    let system = StoreSystem::default();

    assert!(system.user_client.list().await.unwrap().is_empty());
    assert!(system.product_client.list().await.unwrap().is_empty());

    system.shutdown().await.unwrap();
}
