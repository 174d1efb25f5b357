pub mod auth;
pub mod comment;
pub mod drawing;
pub mod health;
pub mod project;
pub mod proof;
pub mod rfq;
pub mod sign;
pub mod sign_type;
pub mod takeoff;
pub mod vendor;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/login                                  login (public)
/// /auth/logout                                 logout (requires session)
/// /auth/me                                     current user (requires session)
///
/// /projects                                    list, create (multipart)
/// /projects/{id}                               get
/// /projects/{project_id}/drawings              list, create (multipart)
/// /projects/{project_id}/sign-types            aggregate list, create
/// /projects/{project_id}/sign-types-takeoff    plain list, create
/// /projects/{project_id}/copy-master-sign-types copy studio directory (POST)
/// /projects/{project_id}/signs                 list, create
/// /projects/{project_id}/takeoff-markers       list, place
/// /projects/{project_id}/takeoffs              combined takeoff payload (GET)
/// /projects/{project_id}/rom                   rollup (GET, computed on demand)
/// /projects/{project_id}/rom/recalculate       recompute rollup (POST)
/// /projects/{project_id}/code-summary          get, upsert (GET, PUT)
/// /projects/{project_id}/example-packages      list (GET)
/// /projects/{project_id}/rfqs                  summaries, create
/// /projects/{project_id}/proof                 get-or-create proof (GET)
///
/// /drawings/{id}/pages                         replace included pages (PATCH)
/// /drawing-files/{id}                          update display metadata (PATCH)
///
/// /sign-types/{id}                             get
/// /sign-types/{id}/spec                        get, attach/replace (multipart)
/// /master-sign-types                           list, create
///
/// /signs/{id}                                  get, update (PUT)
/// /signs/{id}/tile-art                         get, attach/replace artwork
///
/// /takeoff-markers/{id}                        update, delete (PATCH, DELETE)
///
/// /comments                                    list (?entity_type, entity_id), create
///
/// /rfqs/{id}/bids                              list, create
/// /vendors                                     list, create
///
/// /proofs/{id}/items                           place sign on canvas (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Authentication routes (login, logout, me).
        .nest("/auth", auth::router())
        // Project routes (also nests every project-scoped sub-resource).
        .nest("/projects", project::router())
        // Drawing-set page inclusion.
        .nest("/drawings", drawing::set_router())
        // Drawing file display metadata.
        .nest("/drawing-files", drawing::file_router())
        // Sign types and their spec pages.
        .nest("/sign-types", sign_type::router())
        // Studio-level sign type directory.
        .nest("/master-sign-types", sign_type::master_router())
        // Signs and their artwork records.
        .nest("/signs", sign::router())
        // Takeoff marker mutation.
        .nest("/takeoff-markers", takeoff::router())
        // Pinned comments on signs and proofs.
        .nest("/comments", comment::router())
        // RFQ bids.
        .nest("/rfqs", rfq::router())
        // Vendor directory.
        .nest("/vendors", vendor::router())
        // Proof canvas items.
        .nest("/proofs", proof::router())
}
