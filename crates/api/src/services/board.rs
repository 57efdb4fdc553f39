//! Board lifecycle within a space.
//!
//! Every mutation runs in one transaction that also touches the owning
//! space's `last_modified_date`. Dropping an uncommitted transaction rolls it
//! back, so an early `?` return leaves no partial writes behind.

use peoplemover_core::board::{
    has_name_collision, sort_by_name, validate_name, NEW_SPACE_PRODUCT_NAMES,
    UNASSIGNED_PRODUCT_NAME,
};
use peoplemover_core::error::CoreError;
use peoplemover_core::types::DbId;
use peoplemover_db::models::board::{Board, CreateBoard, UpdateBoard};
use peoplemover_db::models::product::CreateProduct;
use peoplemover_db::models::space::Space;
use peoplemover_db::repositories::{AssignmentRepo, BoardRepo, ProductRepo, SpaceRepo};
use peoplemover_db::DbPool;
use sqlx::PgConnection;

use crate::error::AppResult;

/// What a board deletion removed.
#[derive(Debug)]
pub struct RemovedBoard {
    pub board: Board,
    pub space_name: String,
    pub products: u64,
    pub assignments: u64,
}

/// Board operations scoped to a space.
pub struct BoardService;

impl BoardService {
    /// All boards of a space, each with its products, ordered by
    /// case-insensitive name.
    pub async fn list_in_space(pool: &DbPool, space_name: &str) -> AppResult<Vec<Board>> {
        let space = find_space(pool, space_name).await?;

        let mut boards = BoardRepo::list_by_space(pool, space.id).await?;
        let products = ProductRepo::list_by_space(pool, space.id).await?;

        for board in &mut boards {
            board.products = products
                .iter()
                .filter(|p| p.board_id == board.id)
                .cloned()
                .collect();
            sort_by_name(&mut board.products, |p| p.name.as_str());
        }
        sort_by_name(&mut boards, |b| b.name.as_str());
        Ok(boards)
    }

    /// Create a board in a space.
    ///
    /// The supplied products are copied onto the new board with their names
    /// and notes; an empty list yields a single "unassigned" product. A
    /// supplied product whose `id` names a product of the same space hands
    /// its assignments over to the copy.
    pub async fn create_in_space(
        pool: &DbPool,
        input: &CreateBoard,
        space_name: &str,
    ) -> AppResult<Board> {
        validate_name("Board", &input.name)?;
        let space = find_space(pool, space_name).await?;

        if let Some(id) = input.id {
            if BoardRepo::find_by_id(pool, id).await?.is_some() {
                return Err(CoreError::Conflict(format!("Board with id {id} already exists")).into());
            }
        }
        ensure_name_available(pool, space.id, &input.name, None).await?;

        let products = if input.products.is_empty() {
            vec![CreateProduct::named(UNASSIGNED_PRODUCT_NAME)]
        } else {
            input.products.clone()
        };

        let mut tx = pool.begin().await?;
        let mut board = BoardRepo::create(&mut *tx, &input.name, space.id).await?;
        SpaceRepo::touch(&mut *tx, space.id).await?;
        board.products = ProductRepo::copy_to_board(&mut *tx, &products, board.id, space.id).await?;

        let mut moved = 0;
        for (source, copy) in products.iter().zip(&board.products) {
            let Some(source_id) = source.id else { continue };
            let in_space = ProductRepo::find_by_id(&mut *tx, source_id)
                .await?
                .is_some_and(|p| p.space_id == space.id);
            if in_space {
                moved += AssignmentRepo::move_to_product(&mut *tx, source_id, copy.id).await?;
            }
        }
        tx.commit().await?;

        if moved > 0 {
            tracing::debug!(board_id = board.id, moved, "Moved assignments onto copied products");
        }
        sort_by_name(&mut board.products, |p| p.name.as_str());
        Ok(board)
    }

    /// Create the default board of a freshly inserted space, inside the
    /// caller's transaction.
    pub async fn create_default_board_for_new_space(
        tx: &mut PgConnection,
        name: &str,
        space: &Space,
    ) -> AppResult<Board> {
        let mut board = BoardRepo::create(&mut *tx, name, space.id).await?;
        SpaceRepo::touch(&mut *tx, space.id).await?;

        let products: Vec<CreateProduct> = NEW_SPACE_PRODUCT_NAMES
            .iter()
            .map(|name| CreateProduct::named(*name))
            .collect();
        board.products = ProductRepo::copy_to_board(tx, &products, board.id, space.id).await?;
        sort_by_name(&mut board.products, |p| p.name.as_str());
        Ok(board)
    }

    /// Rename a board.
    ///
    /// The collision check runs against the boards of `space_name`, ignoring
    /// the board itself, so renaming a board to its current name succeeds.
    pub async fn update(
        pool: &DbPool,
        board_id: DbId,
        input: &UpdateBoard,
        space_name: &str,
    ) -> AppResult<Board> {
        validate_name("Board", &input.name)?;

        if BoardRepo::find_by_id(pool, board_id).await?.is_none() {
            return Err(CoreError::not_found("Board", board_id).into());
        }
        let space = find_space(pool, space_name).await?;
        ensure_name_available(pool, space.id, &input.name, Some(board_id)).await?;

        let mut tx = pool.begin().await?;
        let mut board = BoardRepo::rename(&mut *tx, board_id, &input.name)
            .await?
            .ok_or_else(|| CoreError::not_found("Board", board_id))?;
        SpaceRepo::touch(&mut *tx, board.space_id).await?;
        board.products = ProductRepo::list_by_board(&mut *tx, board.id).await?;
        tx.commit().await?;

        sort_by_name(&mut board.products, |p| p.name.as_str());
        Ok(board)
    }

    /// Delete a board together with its products and their assignments.
    ///
    /// An unknown id is `NotFound` and writes nothing.
    pub async fn delete(pool: &DbPool, board_id: DbId) -> AppResult<RemovedBoard> {
        let mut tx = pool.begin().await?;

        let board = BoardRepo::find_by_id_for_update(&mut *tx, board_id)
            .await?
            .ok_or_else(|| CoreError::not_found("Board", board_id))?;
        let space = SpaceRepo::find_by_id(&mut *tx, board.space_id)
            .await?
            .ok_or_else(|| CoreError::not_found("Space", board.space_id))?;

        let assignments = AssignmentRepo::delete_for_board(&mut *tx, board.id).await?;
        let products = ProductRepo::delete_for_board(&mut *tx, board.id).await?;
        BoardRepo::delete(&mut *tx, board.id).await?;
        SpaceRepo::touch(&mut *tx, space.id).await?;

        tx.commit().await?;

        Ok(RemovedBoard {
            board,
            space_name: space.name,
            products,
            assignments,
        })
    }
}

/// Resolve a space by case-insensitive name.
async fn find_space(pool: &DbPool, space_name: &str) -> AppResult<Space> {
    let space = SpaceRepo::find_by_name(pool, space_name)
        .await?
        .ok_or_else(|| CoreError::not_found("Space", space_name))?;
    Ok(space)
}

async fn ensure_name_available(
    pool: &DbPool,
    space_id: DbId,
    name: &str,
    exclude_id: Option<DbId>,
) -> AppResult<()> {
    let existing = BoardRepo::list_by_space(pool, space_id).await?;
    let taken = has_name_collision(
        existing.iter().map(|b| (b.id, b.name.as_str())),
        name,
        exclude_id,
    );
    if taken {
        return Err(CoreError::Conflict(format!("A board named '{name}' already exists")).into());
    }
    Ok(())
}
