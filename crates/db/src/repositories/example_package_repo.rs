//! Repository for the `example_packages` table.

use signops_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::example_package::ExamplePackage;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, project_id, name, description, file_path, created_at";

/// Provides read operations for example signage packages.
pub struct ExamplePackageRepo;

impl ExamplePackageRepo {
    /// List a project's example packages ordered by name.
    pub async fn list_by_project(
        pool: &SqlitePool,
        project_id: DbId,
    ) -> Result<Vec<ExamplePackage>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM example_packages WHERE project_id = ? ORDER BY name ASC"
        );
        sqlx::query_as::<_, ExamplePackage>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }
}
