use super::*;

fn temp_storage() -> Storage {
    Storage::new(std::env::temp_dir().join(format!("carango-storage-test-{}", Uuid::new_v4())))
}

#[test]
fn object_path_nests_user_then_image() {
    let storage = Storage::new("/var/uploads");
    let user_id = Uuid::new_v4();
    let image_id = Uuid::new_v4();
    let path = storage.object_path(user_id, image_id);
    assert_eq!(path, PathBuf::from(format!("/var/uploads/{user_id}/{image_id}")));
}

#[test]
fn public_url_matches_static_mount() {
    let user_id = Uuid::new_v4();
    let image_id = Uuid::new_v4();
    assert_eq!(Storage::public_url(user_id, image_id), format!("/uploads/{user_id}/{image_id}"));
}

#[tokio::test]
async fn save_then_remove_round_trips() {
    let storage = temp_storage();
    let user_id = Uuid::new_v4();
    let image_id = Uuid::new_v4();

    storage.save(user_id, image_id, b"jpeg bytes").await.unwrap();
    let stored = tokio::fs::read(storage.object_path(user_id, image_id)).await.unwrap();
    assert_eq!(stored, b"jpeg bytes");

    storage.remove(user_id, image_id).await.unwrap();
    assert!(!storage.object_path(user_id, image_id).exists());

    let _ = tokio::fs::remove_dir_all(storage.root()).await;
}

#[tokio::test]
async fn remove_missing_object_is_ok() {
    let storage = temp_storage();
    storage.remove(Uuid::new_v4(), Uuid::new_v4()).await.unwrap();
}
