//! Basis point arithmetic.
//!
//! All operations truncate towards zero, i.e. they behave exactly like
//! `a * b / 10_000` in unsigned integer arithmetic. Callers that compose
//! several of them (the fee split for example) are responsible for assigning
//! the truncation remainder somewhere.

use alloy::primitives::U256;

/// 10 000 basis points == 100%.
pub const BPS_SCALE: u16 = 10_000;

fn scale() -> U256 {
    U256::from(BPS_SCALE)
}

/// Extension trait for basis point scaling of U256 amounts.
pub trait U256Ext: Sized {
    /// `self * bps / 10_000`. Never overflows for `bps <= 10_000`.
    fn checked_mul_bps(&self, bps: U256) -> Option<Self>;

    /// `self * (10_000 + bps) / 10_000`.
    fn checked_add_bps(&self, bps: U256) -> Option<Self>;

    /// `self * (10_000 - bps) / 10_000`. Returns `None` when `bps` exceeds
    /// the scale, never overflows otherwise.
    fn checked_sub_bps(&self, bps: U256) -> Option<Self>;
}

impl U256Ext for U256 {
    fn checked_mul_bps(&self, bps: U256) -> Option<Self> {
        // (q * 10_000 + r) * bps / 10_000 == q * bps + r * bps / 10_000
        let (quotient, remainder) = self.div_rem(scale());
        quotient
            .checked_mul(bps)?
            .checked_add(remainder.checked_mul(bps)? / scale())
    }

    fn checked_add_bps(&self, bps: U256) -> Option<Self> {
        self.checked_mul(scale().checked_add(bps)?)?
            .checked_div(scale())
    }

    fn checked_sub_bps(&self, bps: U256) -> Option<Self> {
        self.checked_mul_bps(scale().checked_sub(bps)?)
    }
}
