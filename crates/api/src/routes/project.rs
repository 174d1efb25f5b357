//! Route definitions for the `/projects` resource.
//!
//! Also nests every project-scoped sub-resource under
//! `/projects/{project_id}/...`: drawings, sign types, signs, takeoff
//! markers, pricing, code summary, example packages, RFQs, and the proof.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{
    code_summary, drawing, example_package, project, proof, rfq, rom, sign, sign_type, takeoff,
};
use crate::state::AppState;

/// Routes mounted at `/projects`.
///
/// ```text
/// GET    /                                     -> list
/// POST   /                                     -> create (multipart, optional logo)
/// GET    /{id}                                 -> get_by_id
///
/// GET    /{project_id}/drawings                -> sets with files + included pages
/// POST   /{project_id}/drawings                -> create set (multipart, PDF files)
///
/// GET    /{project_id}/sign-types              -> aggregate listing
/// POST   /{project_id}/sign-types              -> create
/// GET    /{project_id}/sign-types-takeoff      -> plain listing for takeoff
/// POST   /{project_id}/sign-types-takeoff      -> create
/// POST   /{project_id}/copy-master-sign-types  -> copy studio directory
///
/// GET    /{project_id}/signs                   -> list
/// POST   /{project_id}/signs                   -> create (recomputes ROM)
///
/// GET    /{project_id}/takeoff-markers         -> list
/// POST   /{project_id}/takeoff-markers         -> place marker
/// GET    /{project_id}/takeoffs                -> combined takeoff payload
///
/// GET    /{project_id}/rom                     -> rollup (computed on demand)
/// POST   /{project_id}/rom/recalculate         -> recompute rollup
///
/// GET    /{project_id}/code-summary            -> compliance lists
/// PUT    /{project_id}/code-summary            -> upsert compliance lists
/// GET    /{project_id}/example-packages        -> list
/// GET    /{project_id}/rfqs                    -> summaries with bid aggregates
/// POST   /{project_id}/rfqs                    -> create
/// GET    /{project_id}/proof                   -> get-or-create proof
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(project::list).post(project::create))
        .route("/{id}", get(project::get_by_id))
        .route(
            "/{project_id}/drawings",
            get(drawing::list_by_project).post(drawing::create),
        )
        .route(
            "/{project_id}/sign-types",
            get(sign_type::list_by_project).post(sign_type::create),
        )
        .route(
            "/{project_id}/sign-types-takeoff",
            get(sign_type::list_for_takeoff).post(sign_type::create),
        )
        .route(
            "/{project_id}/copy-master-sign-types",
            post(sign_type::copy_masters),
        )
        .route(
            "/{project_id}/signs",
            get(sign::list_by_project).post(sign::create),
        )
        .route(
            "/{project_id}/takeoff-markers",
            get(takeoff::list_by_project).post(takeoff::create),
        )
        .route("/{project_id}/takeoffs", get(takeoff::combined))
        .route("/{project_id}/rom", get(rom::get_by_project))
        .route("/{project_id}/rom/recalculate", post(rom::recalculate))
        .route(
            "/{project_id}/code-summary",
            get(code_summary::get_by_project).put(code_summary::upsert),
        )
        .route(
            "/{project_id}/example-packages",
            get(example_package::list_by_project),
        )
        .route(
            "/{project_id}/rfqs",
            get(rfq::list_by_project).post(rfq::create),
        )
        .route("/{project_id}/proof", get(proof::get_for_project))
}
