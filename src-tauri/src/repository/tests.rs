//! Repository Integration Tests
//!
//! Tests for ItemRepository with in-memory SQLite database.

#[cfg(test)]
mod tests {
    use std::path::PathBuf;
    use std::sync::Arc;

    use tokio::sync::Mutex;

    use crate::domain::{DetailField, Item};
    use crate::repository::{init_db, ItemRepository, Repository};

    async fn setup_test_repo() -> ItemRepository {
        // Use in-memory database for tests
        let db_path = PathBuf::from(":memory:");
        let db_state = init_db(&db_path).await.expect("Failed to init test DB");
        let conn = db_state
            .get_connection()
            .await
            .expect("Failed to get connection");
        ItemRepository::new(Arc::new(Mutex::new(conn)))
    }

    #[tokio::test]
    async fn test_add_item() {
        let repo = setup_test_repo().await;

        let item = repo
            .add("Leite", "laticinios")
            .await
            .expect("Failed to add")
            .expect("Item should be created");

        assert!(!item.id.is_empty());
        assert_eq!(item.name, "Leite");
        assert_eq!(item.category, "laticinios");
        assert!(!item.completed);
        assert!(item.created_at.is_some());
    }

    #[tokio::test]
    async fn test_add_trims_name() {
        let repo = setup_test_repo().await;

        let item = repo
            .add("  Pão  ", "padaria")
            .await
            .expect("Failed to add")
            .expect("Item should be created");

        assert_eq!(item.name, "Pão");
    }

    #[tokio::test]
    async fn test_add_blank_name_is_noop() {
        let repo = setup_test_repo().await;

        let created = repo.add("   ", "padaria").await.expect("Add failed");
        assert!(created.is_none());

        let items = repo.list().await.expect("List failed");
        assert!(items.is_empty());
    }

    #[tokio::test]
    async fn test_add_empty_category_is_noop() {
        let repo = setup_test_repo().await;

        let kept = repo.add("Ovos", "proteinas").await.expect("Add failed");
        let skipped = repo.add("", "proteinas").await.expect("Add failed");

        assert!(kept.is_some());
        assert!(skipped.is_none());

        let items = repo.list().await.expect("List failed");
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name, "Ovos");
    }

    #[tokio::test]
    async fn test_add_assigns_unique_ids() {
        let repo = setup_test_repo().await;

        let first = repo.add("Arroz", "graos").await.unwrap().unwrap();
        let second = repo.add("Feijão", "graos").await.unwrap().unwrap();

        assert_ne!(first.id, second.id);
    }

    #[tokio::test]
    async fn test_toggle_is_its_own_inverse() {
        let repo = setup_test_repo().await;

        let item = repo.add("Café", "mercearia").await.unwrap().unwrap();

        repo.toggle(&item.id).await.expect("Toggle failed");
        let toggled = repo.find_by_id(item.id.clone()).await.unwrap().unwrap();
        assert!(toggled.completed);

        repo.toggle(&item.id).await.expect("Toggle failed");
        let restored = repo.find_by_id(item.id.clone()).await.unwrap().unwrap();
        assert!(!restored.completed);
    }

    #[tokio::test]
    async fn test_toggle_unknown_id_is_noop() {
        let repo = setup_test_repo().await;

        repo.toggle("missing").await.expect("Toggle failed");

        let items = repo.list().await.expect("List failed");
        assert!(items.is_empty());
    }

    #[tokio::test]
    async fn test_set_detail() {
        let repo = setup_test_repo().await;

        let item = repo.add("Queijo", "laticinios").await.unwrap().unwrap();
        repo.toggle(&item.id).await.unwrap();

        repo.set_detail(&item.id, DetailField::Price, 5.0)
            .await
            .expect("Set price failed");
        repo.set_detail(&item.id, DetailField::Quantity, 2.0)
            .await
            .expect("Set quantity failed");

        let found = repo.find_by_id(item.id.clone()).await.unwrap().unwrap();
        assert_eq!(found.price, Some(5.0));
        assert_eq!(found.quantity, Some(2.0));
    }

    #[tokio::test]
    async fn test_set_detail_coerced_zero_is_stored() {
        let repo = setup_test_repo().await;

        let item = repo.add("Manteiga", "laticinios").await.unwrap().unwrap();
        repo.set_detail(&item.id, DetailField::Price, 0.0)
            .await
            .expect("Set price failed");

        let found = repo.find_by_id(item.id.clone()).await.unwrap().unwrap();
        assert_eq!(found.price, Some(0.0));
    }

    #[tokio::test]
    async fn test_set_detail_unknown_id_is_noop() {
        let repo = setup_test_repo().await;

        repo.set_detail("missing", DetailField::Quantity, 3.0)
            .await
            .expect("Set detail failed");

        let items = repo.list().await.expect("List failed");
        assert!(items.is_empty());
    }

    #[tokio::test]
    async fn test_delete_item() {
        let repo = setup_test_repo().await;

        let item = repo.add("Sabão", "limpeza").await.unwrap().unwrap();
        repo.delete(item.id.clone()).await.expect("Delete failed");

        let found = repo.find_by_id(item.id).await.expect("Find failed");
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn test_delete_unknown_id_is_noop() {
        let repo = setup_test_repo().await;

        repo.add("Suco", "bebidas").await.unwrap();
        repo.delete("missing".to_string()).await.expect("Delete failed");

        let items = repo.list().await.expect("List failed");
        assert_eq!(items.len(), 1);
    }

    #[tokio::test]
    async fn test_list_returns_all_in_creation_order() {
        let repo = setup_test_repo().await;

        repo.add("Primeiro", "outros").await.unwrap();
        repo.add("Segundo", "outros").await.unwrap();
        repo.add("Terceiro", "outros").await.unwrap();

        let items = repo.list().await.expect("List failed");
        let names: Vec<&str> = items.iter().map(|item| item.name.as_str()).collect();
        assert_eq!(names, ["Primeiro", "Segundo", "Terceiro"]);
    }

    #[tokio::test]
    async fn test_update_item() {
        let repo = setup_test_repo().await;

        let mut item = repo.add("Original", "outros").await.unwrap().unwrap();
        item.name = "Atualizado".to_string();
        item.completed = true;
        item.price = Some(1.5);

        let updated: Item = repo.update(&item).await.expect("Update failed");
        assert_eq!(updated.name, "Atualizado");

        let found = repo.find_by_id(item.id.clone()).await.unwrap().unwrap();
        assert_eq!(found.name, "Atualizado");
        assert!(found.completed);
        assert_eq!(found.price, Some(1.5));
    }
}
