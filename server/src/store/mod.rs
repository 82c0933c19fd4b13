//! # Ownership-scoped store
//!
//! CRUD over the two entity collections, instantiated per entity in
//! [`boards`] and [`todos`]. Every read, update and delete binds the
//! requesting user's id alongside the row id (`... AND owner_id = $n`), so a
//! record belonging to someone else is indistinguishable from one that does
//! not exist — the façade answers 404, never 403.
//!
//! The store trusts its inputs: field validation (trimmed titles, the
//! status/priority enumerations, due-date parsing) happens in the façade
//! before anything reaches these queries.

pub mod boards;
pub mod todos;

#[cfg(test)]
mod tests {
    use api::models::{TodoPriority, TodoStatus};
    use sqlx::PgPool;

    use super::{boards, todos};
    use crate::auth::VerifiedIdentity;
    use crate::models::User;
    use crate::users;

    async fn user(pool: &PgPool, subject: &str) -> User {
        users::ensure_user(
            pool,
            &VerifiedIdentity {
                subject_id: subject.into(),
                email: Some(format!("{subject}@example.com")),
                name: None,
            },
        )
        .await
        .unwrap()
    }

    fn board_fields(title: &str) -> boards::BoardFields {
        boards::BoardFields {
            title: title.into(),
            description: String::new(),
            color_tag: "#6366f1".into(),
        }
    }

    fn todo_fields(title: &str) -> todos::TodoFields {
        todos::TodoFields {
            title: title.into(),
            description: String::new(),
            status: TodoStatus::default(),
            priority: TodoPriority::default(),
            due_date: None,
        }
    }

    #[sqlx::test(migrator = "crate::db::MIGRATOR")]
    async fn test_board_create_get_round_trip(pool: PgPool) {
        let owner = user(&pool, "subject-a").await;
        let created = boards::create(&pool, owner.id, &board_fields("Work"))
            .await
            .unwrap();
        let fetched = boards::get(&pool, created.id, owner.id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(fetched.id, created.id);
        assert_eq!(fetched.title, "Work");
        assert_eq!(fetched.color_tag, "#6366f1");
        assert_eq!(fetched.owner_id, owner.id);
    }

    #[sqlx::test(migrator = "crate::db::MIGRATOR")]
    async fn test_foreign_boards_read_as_absent(pool: PgPool) {
        let alice = user(&pool, "subject-alice").await;
        let bob = user(&pool, "subject-bob").await;
        let board = boards::create(&pool, alice.id, &board_fields("Private"))
            .await
            .unwrap();

        assert!(boards::get(&pool, board.id, bob.id).await.unwrap().is_none());
        assert!(boards::update(&pool, board.id, bob.id, &board_fields("Taken"))
            .await
            .unwrap()
            .is_none());
        assert!(!boards::delete(&pool, board.id, bob.id).await.unwrap());
        assert!(boards::list(&pool, bob.id).await.unwrap().is_empty());

        // The failed foreign writes left the board untouched.
        let still = boards::get(&pool, board.id, alice.id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(still.title, "Private");
    }

    #[sqlx::test(migrator = "crate::db::MIGRATOR")]
    async fn test_foreign_todos_read_as_absent(pool: PgPool) {
        let alice = user(&pool, "subject-alice").await;
        let bob = user(&pool, "subject-bob").await;
        let board = boards::create(&pool, alice.id, &board_fields("Private"))
            .await
            .unwrap();
        let todo = todos::create(&pool, alice.id, board.id, &todo_fields("Ship it"))
            .await
            .unwrap();

        assert!(todos::update(&pool, todo.id, bob.id, &todo_fields("Hijack"))
            .await
            .unwrap()
            .is_none());
        assert!(todos::set_status(&pool, todo.id, bob.id, TodoStatus::Done)
            .await
            .unwrap()
            .is_none());
        assert!(!todos::delete(&pool, todo.id, bob.id).await.unwrap());
        assert!(todos::list_for_board(&pool, bob.id, board.id)
            .await
            .unwrap()
            .is_empty());
    }

    #[sqlx::test(migrator = "crate::db::MIGRATOR")]
    async fn test_new_board_lists_its_todos_newest_first(pool: PgPool) {
        let owner = user(&pool, "subject-a").await;
        let board = boards::create(&pool, owner.id, &board_fields("Work"))
            .await
            .unwrap();

        let first = todos::create(&pool, owner.id, board.id, &todo_fields("Write report"))
            .await
            .unwrap();
        let second = todos::create(&pool, owner.id, board.id, &todo_fields("Review PRs"))
            .await
            .unwrap();

        assert_eq!(first.status, "todo");
        assert_eq!(first.priority, "medium");
        assert!(first.due_date.is_none());

        let listed = todos::list_for_board(&pool, owner.id, board.id)
            .await
            .unwrap();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].id, second.id);
        assert_eq!(listed[1].id, first.id);
    }

    #[sqlx::test(migrator = "crate::db::MIGRATOR")]
    async fn test_board_delete_cascades_to_todos(pool: PgPool) {
        let owner = user(&pool, "subject-a").await;
        let board = boards::create(&pool, owner.id, &board_fields("Doomed"))
            .await
            .unwrap();
        let todo = todos::create(&pool, owner.id, board.id, &todo_fields("Gone with it"))
            .await
            .unwrap();

        assert!(boards::delete(&pool, board.id, owner.id).await.unwrap());
        assert!(todos::list_for_board(&pool, owner.id, board.id)
            .await
            .unwrap()
            .is_empty());
        assert!(!todos::delete(&pool, todo.id, owner.id).await.unwrap());
    }

    #[sqlx::test(migrator = "crate::db::MIGRATOR")]
    async fn test_set_status_touches_only_status(pool: PgPool) {
        let owner = user(&pool, "subject-a").await;
        let board = boards::create(&pool, owner.id, &board_fields("Work"))
            .await
            .unwrap();
        let todo = todos::create(&pool, owner.id, board.id, &todo_fields("Ship it"))
            .await
            .unwrap();

        let updated = todos::set_status(&pool, todo.id, owner.id, TodoStatus::InProgress)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.status, "in-progress");
        assert_eq!(updated.title, "Ship it");
        assert_eq!(updated.priority, "medium");
        assert!(updated.updated_at >= todo.updated_at);
    }
}
