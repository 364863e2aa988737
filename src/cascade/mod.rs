//! Cascade delete engine
//!
//! Atomic deletion of a resource tree: a root row plus every descendant,
//! executed as ordered statements inside one transaction. Children are
//! always removed before their parents and the root delete is the last
//! statement before commit, so no observer can ever see a child row
//! referencing a missing parent.
//!
//! One generic algorithm, parameterized by table names and foreign-key
//! columns, serves both the board tree (boards → lists → cards) and the
//! to-do tree (todo_lists → todo_cards). The statement list is built
//! leaf-first by construction; there is no code path that deletes a
//! parent ahead of its children.
//!
//! Failure handling: any step error aborts the scope, the transaction is
//! rolled back (dropping an uncommitted `sqlx::Transaction` rolls back),
//! and the caller gets exactly one [`ApiError::Transaction`]. Deleting an
//! id with no rows anywhere is not an error; the empty scope still
//! commits.

use std::time::Duration;

use sqlx::SqlitePool;

use crate::error::ApiError;

/// Upper bound on one cascade. Not part of the observed contract of the
/// system this replaces; added so a wedged writer cannot hold the
/// transaction scope open forever. Expiry drops the scope, which rolls it
/// back.
pub const CASCADE_TIMEOUT: Duration = Duration::from_secs(5);

/// Shape of a two- or three-level ownership tree.
///
/// `child_table` rows reference the root through `child_fk`; an optional
/// [`Grandchild`] level references the child table through its own
/// foreign key (the board tree's cards, reached through lists).
#[derive(Debug, Clone, Copy)]
pub struct TreeSpec {
    pub parent_table: &'static str,
    pub child_table: &'static str,
    pub child_fk: &'static str,
    pub grandchild: Option<Grandchild>,
}

/// Leaf level of a three-level tree.
#[derive(Debug, Clone, Copy)]
pub struct Grandchild {
    pub table: &'static str,
    pub fk: &'static str,
}

/// Board tree: boards own lists, lists own cards.
pub const BOARD_TREE: TreeSpec = TreeSpec {
    parent_table: "boards",
    child_table: "lists",
    child_fk: "board_id",
    grandchild: Some(Grandchild {
        table: "cards",
        fk: "list_id",
    }),
};

/// A single list and its cards.
pub const LIST_TREE: TreeSpec = TreeSpec {
    parent_table: "lists",
    child_table: "cards",
    child_fk: "list_id",
    grandchild: None,
};

/// To-do tree: structurally separate from the board tree, behaviorally
/// identical.
pub const TODO_LIST_TREE: TreeSpec = TreeSpec {
    parent_table: "todo_lists",
    child_table: "todo_cards",
    child_fk: "todo_list_id",
    grandchild: None,
};

/// Result of a committed cascade.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CascadeOutcome {
    /// Total rows removed across every level. Zero is a valid outcome:
    /// deleting an already-deleted root still commits.
    pub rows_deleted: u64,
}

impl TreeSpec {
    /// Ordered delete statements for one root id, leaves first. Every
    /// statement binds the same root id as its single parameter.
    fn statements(&self) -> Vec<String> {
        let mut statements = Vec::with_capacity(3);

        if let Some(grandchild) = &self.grandchild {
            statements.push(format!(
                "DELETE FROM {gc} WHERE {gc_fk} IN (SELECT id FROM {child} WHERE {fk} = ?)",
                gc = grandchild.table,
                gc_fk = grandchild.fk,
                child = self.child_table,
                fk = self.child_fk,
            ));
        }

        statements.push(format!(
            "DELETE FROM {child} WHERE {fk} = ?",
            child = self.child_table,
            fk = self.child_fk,
        ));

        // Root delete is always the final statement before commit.
        statements.push(format!(
            "DELETE FROM {parent} WHERE id = ?",
            parent = self.parent_table,
        ));

        statements
    }
}

/// Delete a root resource and all of its descendants atomically.
///
/// Runs the tree's statements strictly in order inside one transaction
/// bound to this call. On success the commit is the only point where the
/// deletion becomes visible; on any step failure (or timeout) the scope is
/// rolled back and a single [`ApiError::Transaction`] is returned, never a
/// partial result.
pub async fn delete_tree(
    pool: &SqlitePool,
    spec: &TreeSpec,
    root_id: i64,
) -> Result<CascadeOutcome, ApiError> {
    let result = tokio::time::timeout(CASCADE_TIMEOUT, run_steps(pool, spec, root_id)).await;

    match result {
        Ok(Ok(rows_deleted)) => {
            tracing::info!(
                "Cascade delete committed: {} id={} rows={}",
                spec.parent_table,
                root_id,
                rows_deleted
            );
            Ok(CascadeOutcome { rows_deleted })
        }
        Ok(Err(err)) => {
            tracing::error!(
                "Cascade delete rolled back: {} id={}: {:?}",
                spec.parent_table,
                root_id,
                err
            );
            Err(ApiError::Transaction(format!(
                "failed to delete {} and its descendants",
                singular(spec.parent_table)
            )))
        }
        Err(_) => {
            // Dropping the in-flight future drops the transaction, which
            // rolls it back.
            tracing::error!(
                "Cascade delete timed out: {} id={}",
                spec.parent_table,
                root_id
            );
            Err(ApiError::Transaction(format!(
                "timed out deleting {} and its descendants",
                singular(spec.parent_table)
            )))
        }
    }
}

/// Execute the ordered statements within one transaction scope.
async fn run_steps(pool: &SqlitePool, spec: &TreeSpec, root_id: i64) -> Result<u64, sqlx::Error> {
    let mut tx = pool.begin().await?;
    let mut rows_deleted = 0;

    for sql in spec.statements() {
        let result = sqlx::query(&sql).bind(root_id).execute(&mut *tx).await?;
        rows_deleted += result.rows_affected();
    }

    tx.commit().await?;
    Ok(rows_deleted)
}

fn singular(table: &str) -> &str {
    table.strip_suffix('s').unwrap_or(table)
}
