//! ROM (Rough Order of Magnitude) pricing constants, types, and pure logic.
//!
//! The rollup is a fold over a project's sign rows: signage subtotal is
//! `unit_price * quantity` summed across signs, installation is a flat
//! percentage of that subtotal, and permits are a fixed fee. Because the
//! computation is a pure function of the current sign rows, recomputing it
//! with unchanged inputs always yields an identical breakdown.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Installation add-on as a fraction of the signage subtotal.
pub const INSTALLATION_RATE: f64 = 0.30;

/// Flat permit fee applied to every project rollup, in dollars.
pub const PERMIT_FEE: f64 = 500.0;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// The pricing-relevant slice of a sign row.
#[derive(Debug, Clone, Copy)]
pub struct SignLine {
    pub unit_price: f64,
    pub quantity: i64,
}

/// Per-project rollup breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RomBreakdown {
    pub signage_subtotal: f64,
    pub installation: f64,
    pub permits: f64,
    pub total: f64,
}

// ---------------------------------------------------------------------------
// Rollup
// ---------------------------------------------------------------------------

/// Compute the ROM breakdown for a set of sign lines.
///
/// `signage_subtotal = sum(unit_price * quantity)`, installation is
/// [`INSTALLATION_RATE`] of the subtotal, permits are the flat
/// [`PERMIT_FEE`], and the total is the sum of all three. A project with no
/// signs still carries the permit fee.
pub fn compute_rom(lines: &[SignLine]) -> RomBreakdown {
    let signage_subtotal: f64 = lines
        .iter()
        .map(|l| l.unit_price * l.quantity as f64)
        .sum();
    let installation = signage_subtotal * INSTALLATION_RATE;
    let permits = PERMIT_FEE;
    RomBreakdown {
        signage_subtotal,
        installation,
        permits,
        total: signage_subtotal + installation + permits,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
