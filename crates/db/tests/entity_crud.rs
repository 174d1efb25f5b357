//! Integration tests for entity CRUD operations.
//!
//! Exercises the repository layer against a real database:
//! - Create full hierarchy (project -> drawing set -> sign type -> sign)
//! - Default values (project status, sign quantity/status)
//! - Cascade delete behaviour
//! - Update and list operations
//! - Aggregate listings (sign type summaries, RFQ summaries)

use signops_db::models::drawing::{CreateDrawingFile, CreateDrawingSet};
use signops_db::models::project::CreateProject;
use signops_db::models::sign::CreateSign;
use signops_db::models::sign_type::{CreateMasterSignType, CreateSignType};
use signops_db::models::vendor::{CreateBid, CreateRfq, CreateVendor};
use signops_db::repositories::{
    DrawingRepo, MasterSignTypeRepo, ProjectRepo, RfqRepo, SignRepo, SignTypeRepo, VendorRepo,
};
use sqlx::SqlitePool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_project(name: &str) -> CreateProject {
    CreateProject {
        name: name.to_string(),
        ..Default::default()
    }
}

fn new_drawing_set(project_id: i64, label: &str) -> CreateDrawingSet {
    CreateDrawingSet {
        project_id,
        version_label: label.to_string(),
        uploaded_by: None,
        notes: None,
    }
}

fn new_sign_type(name: &str) -> CreateSignType {
    CreateSignType {
        name: name.to_string(),
        category: None,
    }
}

fn new_sign(sign_type_id: i64, unit_price: f64, quantity: i64) -> CreateSign {
    CreateSign {
        sign_type_id,
        location_ref: None,
        width_in: None,
        height_in: None,
        unit_price: Some(unit_price),
        quantity: Some(quantity),
        status: None,
    }
}

// ---------------------------------------------------------------------------
// Projects
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn project_with_only_name_defaults_to_active(pool: SqlitePool) {
    let project = ProjectRepo::create(&pool, &new_project("Westfield Commons Phase 2"))
        .await
        .unwrap();
    assert_eq!(project.name, "Westfield Commons Phase 2");
    assert_eq!(project.status, "active");
    assert!(project.address.is_none());
}

#[sqlx::test(migrations = "./migrations")]
async fn project_status_can_be_overridden(pool: SqlitePool) {
    let input = CreateProject {
        name: "On Hold Job".to_string(),
        status: Some("on_hold".to_string()),
        ..Default::default()
    };
    let project = ProjectRepo::create(&pool, &input).await.unwrap();
    assert_eq!(project.status, "on_hold");
}

#[sqlx::test(migrations = "./migrations")]
async fn find_by_id_returns_none_for_unknown_project(pool: SqlitePool) {
    let found = ProjectRepo::find_by_id(&pool, 999_999).await.unwrap();
    assert!(found.is_none());
}

#[sqlx::test(migrations = "./migrations")]
async fn list_returns_created_projects(pool: SqlitePool) {
    ProjectRepo::create(&pool, &new_project("P1")).await.unwrap();
    ProjectRepo::create(&pool, &new_project("P2")).await.unwrap();

    let projects = ProjectRepo::list(&pool).await.unwrap();
    assert_eq!(projects.len(), 2);
}

// ---------------------------------------------------------------------------
// Drawing sets, files, and page inclusion
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn drawing_set_with_files_and_pages(pool: SqlitePool) {
    let project = ProjectRepo::create(&pool, &new_project("Drawings")).await.unwrap();
    let set = DrawingRepo::create_set(&pool, &new_drawing_set(project.id, "Rev A"))
        .await
        .unwrap();

    let file = DrawingRepo::add_file(
        &pool,
        &CreateDrawingFile {
            drawing_set_id: set.id,
            file_path: "uploads/abc.pdf".to_string(),
            original_filename: "floor-plans.pdf".to_string(),
            display_name: "Floor Plans".to_string(),
            scale: Some("1/8\" = 1'".to_string()),
            short_code: Some("A-101".to_string()),
            page_count: 12,
        },
    )
    .await
    .unwrap();
    assert_eq!(file.page_count, 12);

    DrawingRepo::set_included_pages(&pool, set.id, &[1, 3, 5]).await.unwrap();
    assert_eq!(DrawingRepo::included_pages(&pool, set.id).await.unwrap(), vec![1, 3, 5]);

    // Re-patching replaces the prior inclusion list wholesale.
    DrawingRepo::set_included_pages(&pool, set.id, &[2]).await.unwrap();
    assert_eq!(DrawingRepo::included_pages(&pool, set.id).await.unwrap(), vec![2]);

    let details = DrawingRepo::list_details_by_project(&pool, project.id).await.unwrap();
    assert_eq!(details.len(), 1);
    assert_eq!(details[0].files.len(), 1);
    assert_eq!(details[0].included_pages, vec![2]);
}

#[sqlx::test(migrations = "./migrations")]
async fn drawing_file_metadata_update(pool: SqlitePool) {
    let project = ProjectRepo::create(&pool, &new_project("Meta")).await.unwrap();
    let set = DrawingRepo::create_set(&pool, &new_drawing_set(project.id, "Rev A"))
        .await
        .unwrap();
    let file = DrawingRepo::add_file(
        &pool,
        &CreateDrawingFile {
            drawing_set_id: set.id,
            file_path: "uploads/x.pdf".to_string(),
            original_filename: "x.pdf".to_string(),
            display_name: "x.pdf".to_string(),
            scale: None,
            short_code: None,
            page_count: 1,
        },
    )
    .await
    .unwrap();

    let updated = DrawingRepo::update_file(
        &pool,
        file.id,
        &signops_db::models::drawing::UpdateDrawingFile {
            display_name: Some("Site Plan".to_string()),
            scale: None,
            short_code: Some("C-100".to_string()),
        },
    )
    .await
    .unwrap()
    .expect("file should exist");

    assert_eq!(updated.display_name, "Site Plan");
    assert_eq!(updated.short_code.as_deref(), Some("C-100"));
    // Untouched fields survive the partial update.
    assert_eq!(updated.original_filename, "x.pdf");
}

// ---------------------------------------------------------------------------
// Sign types and signs
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn sign_defaults_and_update(pool: SqlitePool) {
    let project = ProjectRepo::create(&pool, &new_project("Signs")).await.unwrap();
    let sign_type = SignTypeRepo::create(&pool, project.id, &new_sign_type("ADA Room ID"))
        .await
        .unwrap();

    let sign = SignRepo::create(
        &pool,
        project.id,
        &CreateSign {
            sign_type_id: sign_type.id,
            location_ref: None,
            width_in: None,
            height_in: None,
            unit_price: None,
            quantity: None,
            status: None,
        },
    )
    .await
    .unwrap();
    assert_eq!(sign.status, "draft");
    assert_eq!(sign.quantity, 1);
    assert!((sign.unit_price - 0.0).abs() < f64::EPSILON);

    let updated = SignRepo::update(
        &pool,
        sign.id,
        &signops_db::models::sign::UpdateSign {
            unit_price: Some(185.0),
            quantity: Some(24),
            status: Some("approved".to_string()),
            ..Default::default()
        },
    )
    .await
    .unwrap()
    .expect("sign should exist");
    assert!((updated.unit_price - 185.0).abs() < f64::EPSILON);
    assert_eq!(updated.quantity, 24);
    assert_eq!(updated.status, "approved");
}

#[sqlx::test(migrations = "./migrations")]
async fn sign_type_summary_aggregates(pool: SqlitePool) {
    let project = ProjectRepo::create(&pool, &new_project("Summary")).await.unwrap();
    let with_signs = SignTypeRepo::create(&pool, project.id, &new_sign_type("Wayfinding"))
        .await
        .unwrap();
    let without_signs = SignTypeRepo::create(&pool, project.id, &new_sign_type("Exit"))
        .await
        .unwrap();

    SignRepo::create(&pool, project.id, &new_sign(with_signs.id, 85.0, 2)).await.unwrap();
    SignRepo::create(&pool, project.id, &new_sign(with_signs.id, 95.0, 1)).await.unwrap();

    let summaries = SignTypeRepo::list_summaries_by_project(&pool, project.id).await.unwrap();
    assert_eq!(summaries.len(), 2);

    let exit = summaries.iter().find(|s| s.id == without_signs.id).unwrap();
    assert_eq!(exit.sign_count, 0);
    assert!(exit.spec_version.is_none());

    let wayfinding = summaries.iter().find(|s| s.id == with_signs.id).unwrap();
    assert_eq!(wayfinding.sign_count, 2);
}

#[sqlx::test(migrations = "./migrations")]
async fn copy_master_sign_types_skips_existing_names(pool: SqlitePool) {
    MasterSignTypeRepo::create(
        &pool,
        &CreateMasterSignType {
            name: "ADA Room ID".to_string(),
            category: Some("interior".to_string()),
        },
    )
    .await
    .unwrap();
    MasterSignTypeRepo::create(
        &pool,
        &CreateMasterSignType {
            name: "Monument".to_string(),
            category: Some("exterior".to_string()),
        },
    )
    .await
    .unwrap();

    let project = ProjectRepo::create(&pool, &new_project("Copy")).await.unwrap();
    SignTypeRepo::create(&pool, project.id, &new_sign_type("ADA Room ID")).await.unwrap();

    let copied = SignTypeRepo::copy_from_masters(&pool, project.id).await.unwrap();
    assert_eq!(copied, 1);

    let types = SignTypeRepo::list_by_project(&pool, project.id).await.unwrap();
    assert_eq!(types.len(), 2);

    // A second copy is a no-op.
    let copied_again = SignTypeRepo::copy_from_masters(&pool, project.id).await.unwrap();
    assert_eq!(copied_again, 0);
}

// ---------------------------------------------------------------------------
// Cascade delete
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn deleting_a_project_cascades_to_children(pool: SqlitePool) {
    let project = ProjectRepo::create(&pool, &new_project("Doomed")).await.unwrap();
    let sign_type = SignTypeRepo::create(&pool, project.id, &new_sign_type("Exit"))
        .await
        .unwrap();
    SignRepo::create(&pool, project.id, &new_sign(sign_type.id, 50.0, 1)).await.unwrap();

    sqlx::query("DELETE FROM projects WHERE id = ?")
        .bind(project.id)
        .execute(&pool)
        .await
        .unwrap();

    assert!(SignTypeRepo::find_by_id(&pool, sign_type.id).await.unwrap().is_none());
    assert!(SignRepo::list_by_project(&pool, project.id).await.unwrap().is_empty());
}

// ---------------------------------------------------------------------------
// RFQs and bids
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn rfq_summary_counts_bids_and_finds_lowest(pool: SqlitePool) {
    let project = ProjectRepo::create(&pool, &new_project("RFQs")).await.unwrap();
    let rfq = RfqRepo::create(
        &pool,
        project.id,
        &CreateRfq {
            scope: "Exterior monument signage".to_string(),
            due_date: Some("2026-09-15".to_string()),
            status: None,
        },
    )
    .await
    .unwrap();
    assert_eq!(rfq.status, "open");

    let acme = VendorRepo::create(
        &pool,
        &CreateVendor {
            name: "Acme Signs".to_string(),
            email: None,
            phone: None,
        },
    )
    .await
    .unwrap();
    let zenith = VendorRepo::create(
        &pool,
        &CreateVendor {
            name: "Zenith Fab".to_string(),
            email: None,
            phone: None,
        },
    )
    .await
    .unwrap();

    RfqRepo::create_bid(
        &pool,
        rfq.id,
        &CreateBid {
            vendor_id: acme.id,
            price: 12_500.0,
            lead_time_weeks: Some(6),
            notes: None,
        },
    )
    .await
    .unwrap();
    RfqRepo::create_bid(
        &pool,
        rfq.id,
        &CreateBid {
            vendor_id: zenith.id,
            price: 11_800.0,
            lead_time_weeks: Some(8),
            notes: None,
        },
    )
    .await
    .unwrap();

    let summaries = RfqRepo::list_summaries_by_project(&pool, project.id).await.unwrap();
    assert_eq!(summaries.len(), 1);
    assert_eq!(summaries[0].bid_count, 2);
    assert!((summaries[0].lowest_bid.unwrap() - 11_800.0).abs() < f64::EPSILON);

    let bids = RfqRepo::list_bids(&pool, rfq.id).await.unwrap();
    assert_eq!(bids.len(), 2);
    // Ordered lowest price first.
    assert!((bids[0].price - 11_800.0).abs() < f64::EPSILON);
}
