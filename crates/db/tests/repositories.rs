//! Integration tests for the repository layer.
//!
//! Exercises the repositories against a real database:
//! - Space lookup by case-insensitive name and timestamp touch
//! - Board ordering and the per-space unique name index
//! - Product copy / delete scoped to a single board
//! - Assignment cleanup scoped to a single board
//! - Foreign keys that block implicit cascades

use peoplemover_db::models::assignment::CreateAssignment;
use peoplemover_db::models::person::CreatePerson;
use peoplemover_db::models::product::{CreateProduct, UpdateProduct};
use peoplemover_db::repositories::{
    AssignmentRepo, BoardRepo, PersonRepo, ProductRepo, SpaceRepo,
};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Spaces
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_find_space_by_name_ignores_case(pool: PgPool) {
    let space = SpaceRepo::create(&pool, "SpaceOne").await.unwrap();

    let found = SpaceRepo::find_by_name(&pool, "spaceone").await.unwrap();
    assert_eq!(found.map(|s| s.id), Some(space.id));

    assert!(SpaceRepo::find_by_name(&pool, "SpaceTwo")
        .await
        .unwrap()
        .is_none());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_duplicate_space_name_rejected(pool: PgPool) {
    SpaceRepo::create(&pool, "Unique").await.unwrap();
    let result = SpaceRepo::create(&pool, "UNIQUE").await;
    assert!(result.is_err(), "Case-insensitive duplicate space should fail");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_touch_advances_last_modified(pool: PgPool) {
    let space = SpaceRepo::create(&pool, "Touchy").await.unwrap();
    sqlx::query("UPDATE spaces SET last_modified_date = '2010-01-12 01:01:01+00' WHERE id = $1")
        .bind(space.id)
        .execute(&pool)
        .await
        .unwrap();

    assert!(SpaceRepo::touch(&pool, space.id).await.unwrap());

    let reloaded = SpaceRepo::find_by_id(&pool, space.id).await.unwrap().unwrap();
    assert!(reloaded.last_modified_date.timestamp() > 1_263_258_061);
    assert!(!SpaceRepo::touch(&pool, 999_999).await.unwrap());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_list_spaces_by_names(pool: PgPool) {
    let one = SpaceRepo::create(&pool, "SpaceOne").await.unwrap();
    let two = SpaceRepo::create(&pool, "SpaceTwo").await.unwrap();
    SpaceRepo::create(&pool, "SpaceThree").await.unwrap();

    let names = vec![
        "Reserved".to_string(),
        "spaceone".to_string(),
        "SPACETWO".to_string(),
    ];
    let spaces = SpaceRepo::list_by_names(&pool, &names).await.unwrap();
    let ids: Vec<i64> = spaces.iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![one.id, two.id]);
}

// ---------------------------------------------------------------------------
// Boards
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_list_boards_orders_by_lowercase_name(pool: PgPool) {
    let space = SpaceRepo::create(&pool, "doesntMatter").await.unwrap();
    for name in ["Oard2", "1. board1", "board3"] {
        BoardRepo::create(&pool, name, space.id).await.unwrap();
    }

    let boards = BoardRepo::list_by_space(&pool, space.id).await.unwrap();
    let names: Vec<&str> = boards.iter().map(|b| b.name.as_str()).collect();
    assert_eq!(names, vec!["1. board1", "board3", "Oard2"]);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_board_name_unique_per_space(pool: PgPool) {
    let space = SpaceRepo::create(&pool, "tok").await.unwrap();
    let other = SpaceRepo::create(&pool, "emptySpace").await.unwrap();
    BoardRepo::create(&pool, "board one", space.id).await.unwrap();

    let duplicate = BoardRepo::create(&pool, "Board One", space.id).await;
    match duplicate {
        Err(sqlx::Error::Database(db_err)) => {
            assert_eq!(db_err.constraint(), Some("uq_boards_space_id_name"));
        }
        other => panic!("Expected unique violation, got {other:?}"),
    }

    // Same name in another space is fine.
    BoardRepo::create(&pool, "board one", other.id).await.unwrap();
}

#[sqlx::test(migrations = "./migrations")]
async fn test_rename_and_find_board(pool: PgPool) {
    let space = SpaceRepo::create(&pool, "tok").await.unwrap();
    let board = BoardRepo::create(&pool, "before", space.id).await.unwrap();

    let renamed = BoardRepo::rename(&pool, board.id, "after")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(renamed.name, "after");
    assert!(renamed.products.is_empty());

    let found = BoardRepo::find_by_name(&pool, space.id, "AFTER").await.unwrap();
    assert_eq!(found.map(|b| b.id), Some(board.id));
    assert!(BoardRepo::rename(&pool, 999_999, "x").await.unwrap().is_none());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_board_with_products_cannot_be_deleted_directly(pool: PgPool) {
    let space = SpaceRepo::create(&pool, "tok").await.unwrap();
    let board = BoardRepo::create(&pool, "board", space.id).await.unwrap();
    ProductRepo::create(&pool, &CreateProduct::named("product"), board.id, space.id)
        .await
        .unwrap();

    let result = BoardRepo::delete(&pool, board.id).await;
    assert!(result.is_err(), "Products must be removed before their board");
    assert!(BoardRepo::find_by_id(&pool, board.id).await.unwrap().is_some());
}

// ---------------------------------------------------------------------------
// Products and assignments
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_copy_products_onto_board(pool: PgPool) {
    let space = SpaceRepo::create(&pool, "tok").await.unwrap();
    let board = BoardRepo::create(&pool, "board", space.id).await.unwrap();

    let mut conn = pool.acquire().await.unwrap();
    let products = vec![
        CreateProduct {
            id: None,
            name: "beta".to_string(),
            notes: Some("second".to_string()),
        },
        CreateProduct::named("Alpha"),
    ];
    let created = ProductRepo::copy_to_board(&mut conn, &products, board.id, space.id)
        .await
        .unwrap();
    assert_eq!(created.len(), 2);
    assert_eq!(created[0].notes, "second");
    assert_eq!(created[1].notes, "");

    let listed = ProductRepo::list_by_board(&pool, board.id).await.unwrap();
    let names: Vec<&str> = listed.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Alpha", "beta"]);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_delete_for_board_leaves_other_boards(pool: PgPool) {
    let space = SpaceRepo::create(&pool, "tok").await.unwrap();
    let board_one = BoardRepo::create(&pool, "board one", space.id).await.unwrap();
    let board_two = BoardRepo::create(&pool, "board two", space.id).await.unwrap();
    let doomed = ProductRepo::create(&pool, &CreateProduct::named("product one"), board_one.id, space.id)
        .await
        .unwrap();
    let kept = ProductRepo::create(&pool, &CreateProduct::named("product two"), board_two.id, space.id)
        .await
        .unwrap();

    let person = PersonRepo::create(
        &pool,
        &CreatePerson {
            name: "Jane Smith".to_string(),
            space_id: space.id,
        },
    )
    .await
    .unwrap();
    for product_id in [doomed.id, kept.id] {
        AssignmentRepo::create(
            &pool,
            &CreateAssignment {
                person_id: person.id,
                product_id,
                placeholder: None,
            },
        )
        .await
        .unwrap();
    }

    assert_eq!(AssignmentRepo::delete_for_board(&pool, board_one.id).await.unwrap(), 1);
    assert_eq!(ProductRepo::delete_for_board(&pool, board_one.id).await.unwrap(), 1);

    assert_eq!(ProductRepo::count_by_board(&pool, board_one.id).await.unwrap(), 0);
    assert_eq!(AssignmentRepo::count_for_board(&pool, board_one.id).await.unwrap(), 0);
    assert!(ProductRepo::find_by_id(&pool, doomed.id).await.unwrap().is_none());

    let survivors = ProductRepo::list_by_board(&pool, board_two.id).await.unwrap();
    assert_eq!(survivors, vec![kept.clone()]);
    let assignments = AssignmentRepo::list_by_product(&pool, kept.id).await.unwrap();
    assert_eq!(assignments.len(), 1);
    assert!(!assignments[0].placeholder);
    assert!(PersonRepo::find_by_id(&pool, person.id).await.unwrap().is_some());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_product_name_unique_per_board(pool: PgPool) {
    let space = SpaceRepo::create(&pool, "tok").await.unwrap();
    let board = BoardRepo::create(&pool, "board", space.id).await.unwrap();
    let other = BoardRepo::create(&pool, "other", space.id).await.unwrap();
    ProductRepo::create(&pool, &CreateProduct::named("unassigned"), board.id, space.id)
        .await
        .unwrap();

    let duplicate =
        ProductRepo::create(&pool, &CreateProduct::named("unassigned"), board.id, space.id).await;
    assert!(duplicate.is_err());

    ProductRepo::create(&pool, &CreateProduct::named("unassigned"), other.id, space.id)
        .await
        .unwrap();
    assert_eq!(ProductRepo::list_by_space(&pool, space.id).await.unwrap().len(), 2);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_update_product_keeps_notes_when_absent(pool: PgPool) {
    let space = SpaceRepo::create(&pool, "tok").await.unwrap();
    let board = BoardRepo::create(&pool, "board", space.id).await.unwrap();
    let product = ProductRepo::create(
        &pool,
        &CreateProduct {
            id: None,
            name: "Old".to_string(),
            notes: Some("keep".to_string()),
        },
        board.id,
        space.id,
    )
    .await
    .unwrap();

    let update = UpdateProduct {
        id: None,
        name: "New".to_string(),
        notes: None,
    };
    let updated = ProductRepo::update(&pool, product.id, &update).await.unwrap().unwrap();
    assert_eq!(updated.name, "New");
    assert_eq!(updated.notes, "keep");

    let found = ProductRepo::find_by_name(&pool, board.id, "New").await.unwrap();
    assert_eq!(found, Some(updated));
    assert!(ProductRepo::find_by_name(&pool, board.id, "new").await.unwrap().is_none());
    assert!(ProductRepo::update(&pool, 999_999, &update).await.unwrap().is_none());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_move_assignments_then_delete_product(pool: PgPool) {
    let space = SpaceRepo::create(&pool, "tok").await.unwrap();
    let board = BoardRepo::create(&pool, "board", space.id).await.unwrap();
    let from = ProductRepo::create(&pool, &CreateProduct::named("from"), board.id, space.id)
        .await
        .unwrap();
    let to = ProductRepo::create(&pool, &CreateProduct::named("to"), board.id, space.id)
        .await
        .unwrap();
    let person = PersonRepo::create(
        &pool,
        &CreatePerson {
            name: "Jane Smith".to_string(),
            space_id: space.id,
        },
    )
    .await
    .unwrap();
    AssignmentRepo::create(
        &pool,
        &CreateAssignment {
            person_id: person.id,
            product_id: from.id,
            placeholder: Some(true),
        },
    )
    .await
    .unwrap();

    assert!(ProductRepo::delete(&pool, from.id).await.is_err(), "assignments still reference it");

    assert_eq!(AssignmentRepo::move_to_product(&pool, from.id, to.id).await.unwrap(), 1);
    assert!(ProductRepo::delete(&pool, from.id).await.unwrap());
    assert!(!ProductRepo::delete(&pool, from.id).await.unwrap());

    let moved = AssignmentRepo::list_by_product(&pool, to.id).await.unwrap();
    assert_eq!(moved.len(), 1);
    assert!(moved[0].placeholder);
}
