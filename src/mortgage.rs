//! Mortgage calculator: standard annuity amortization over a fixed term.
//!
//! Pure math only. No rounding happens here; formatting for display lives
//! in [`crate::format`].

use thiserror::Error;

/// Bounds for the calculator controls, mirrored by the sliders.
pub const AMOUNT_MIN: f64 = 30_000_000.0;
pub const AMOUNT_MAX: f64 = 150_000_000.0;
pub const AMOUNT_STEP: f64 = 1_000_000.0;
pub const DOWN_PAYMENT_STEP: f64 = 500_000.0;
pub const RATE_MIN: f64 = 5.0;
pub const RATE_MAX: f64 = 20.0;
pub const RATE_STEP: f64 = 0.1;
pub const TERM_MIN: u32 = 5;
pub const TERM_MAX: u32 = 30;

/// Raw calculator inputs as they come from the form.
///
/// Sliders clamp to their ranges, but the paired numeric fields accept
/// anything, so [`quote`] has to survive a zero term and a down payment
/// above the amount.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LoanInput {
    /// Property price, rubles.
    pub amount: f64,
    /// Rubles; anything above `amount` clamps the principal to zero.
    pub down_payment: f64,
    /// Annual percentage, e.g. 12.0 for 12%.
    pub annual_rate: f64,
    pub term_years: u32,
}

impl Default for LoanInput {
    fn default() -> Self {
        Self {
            amount: 50_000_000.0,
            down_payment: 15_000_000.0,
            annual_rate: 12.0,
            term_years: 20,
        }
    }
}

/// Amortization figures for one set of inputs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MortgageQuote {
    /// Amount minus down payment, floored at zero.
    pub principal: f64,
    pub monthly_payment: f64,
    pub total_payment: f64,
    pub total_interest: f64,
}

#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum MortgageError {
    /// A zero-month term has no payment schedule to compute.
    #[error("loan term must be at least one year")]
    ZeroTerm,
}

/// Computes the annuity figures for `input`.
///
/// Identical inputs always produce identical quotes. The degenerate cases
/// are handled explicitly so the display never sees NaN or infinity:
/// zero rate falls back to linear repayment, zero principal yields an
/// all-zero quote, and a zero term is rejected.
pub fn quote(input: &LoanInput) -> Result<MortgageQuote, MortgageError> {
    if input.term_years == 0 {
        return Err(MortgageError::ZeroTerm);
    }
    let principal = (input.amount - input.down_payment).max(0.0);
    let months = f64::from(input.term_years) * 12.0;
    let monthly_rate = input.annual_rate / 100.0 / 12.0;

    let monthly_payment = if principal == 0.0 {
        0.0
    } else if monthly_rate == 0.0 {
        // The annuity formula degenerates to 0/0 at zero interest.
        principal / months
    } else {
        // Discount-factor form of the annuity: (1+r)^-n underflows to 0
        // for absurdly long hand-typed terms, so the payment tends to
        // principal * r instead of going through inf/inf = NaN.
        principal * monthly_rate / (1.0 - (1.0 + monthly_rate).powf(-months))
    };

    let total_payment = monthly_payment * months;
    Ok(MortgageQuote {
        principal,
        monthly_payment,
        total_payment,
        total_interest: total_payment - principal,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference_input() -> LoanInput {
        LoanInput {
            amount: 50_000_000.0,
            down_payment: 15_000_000.0,
            annual_rate: 12.0,
            term_years: 20,
        }
    }

    #[test]
    fn reference_case_matches_annuity_formula() {
        let q = quote(&reference_input()).unwrap();
        assert_eq!(q.principal, 35_000_000.0);

        // 12% over 20 years: r = 0.01, n = 240. Sanity band first, then
        // the exact annuity identity below.
        assert!(q.monthly_payment > 380_000.0 && q.monthly_payment < 390_000.0);
        assert!((q.total_payment - q.monthly_payment * 240.0).abs() < 1e-6);
        assert!((q.total_interest - (q.total_payment - q.principal)).abs() < 1e-6);
    }

    /// The present value of all payments discounted at the monthly rate
    /// must equal the principal. This pins the formula itself rather than
    /// a hand-computed constant.
    #[test]
    fn payments_discount_back_to_principal() {
        let q = quote(&reference_input()).unwrap();
        let r: f64 = 0.12 / 12.0;
        let n = 240.0;
        let present_value = q.monthly_payment * (1.0 - (1.0 + r).powf(-n)) / r;
        assert!((present_value - q.principal).abs() < 1e-4);
    }

    #[test]
    fn zero_rate_falls_back_to_linear_repayment() {
        let input = LoanInput {
            annual_rate: 0.0,
            ..reference_input()
        };
        let q = quote(&input).unwrap();
        assert_eq!(q.monthly_payment, 35_000_000.0 / 240.0);
        assert!((q.total_payment - 35_000_000.0).abs() < 1e-6);
        assert!(q.total_interest.abs() < 1e-6);
    }

    #[test]
    fn full_down_payment_yields_all_zero_quote() {
        let input = LoanInput {
            down_payment: 50_000_000.0,
            ..reference_input()
        };
        let q = quote(&input).unwrap();
        assert_eq!(q.principal, 0.0);
        assert_eq!(q.monthly_payment, 0.0);
        assert_eq!(q.total_payment, 0.0);
        assert_eq!(q.total_interest, 0.0);
    }

    #[test]
    fn overshooting_down_payment_clamps_instead_of_going_negative() {
        let input = LoanInput {
            down_payment: 60_000_000.0,
            ..reference_input()
        };
        let q = quote(&input).unwrap();
        assert_eq!(q.principal, 0.0);
        assert_eq!(q.monthly_payment, 0.0);
    }

    #[test]
    fn zero_term_is_rejected_not_divided_by() {
        let input = LoanInput {
            term_years: 0,
            ..reference_input()
        };
        assert_eq!(quote(&input), Err(MortgageError::ZeroTerm));
    }

    #[test]
    fn quote_is_pure_and_idempotent() {
        let input = reference_input();
        assert_eq!(quote(&input), quote(&input));
    }

    #[test]
    fn no_quote_field_is_nan_or_infinite() {
        let inputs = [
            reference_input(),
            LoanInput { annual_rate: 0.0, ..reference_input() },
            LoanInput { down_payment: 50_000_000.0, ..reference_input() },
            LoanInput { down_payment: 99_000_000.0, ..reference_input() },
            LoanInput { amount: 0.0, down_payment: 0.0, annual_rate: 0.0, term_years: 1 },
            // Hand-typed terms far beyond the slider range.
            LoanInput { term_years: 10_000, ..reference_input() },
            LoanInput { term_years: u32::MAX, ..reference_input() },
        ];
        for input in inputs {
            let q = quote(&input).unwrap();
            for value in [q.principal, q.monthly_payment, q.total_payment, q.total_interest] {
                assert!(value.is_finite(), "non-finite figure for {input:?}");
            }
        }
    }

    /// A 10 000-year term makes `(1+r)^n` overflow `f64`; the discount
    /// form must keep the payment finite and converging on interest-only,
    /// `principal * r`.
    #[test]
    fn extreme_term_converges_to_interest_only_payment() {
        let input = LoanInput {
            term_years: 10_000,
            ..reference_input()
        };
        let q = quote(&input).unwrap();
        let interest_only = 35_000_000.0 * 0.01;
        assert!(q.monthly_payment.is_finite());
        assert!((q.monthly_payment - interest_only).abs() < 1.0);
    }

    /// `term_years * 12` must not be computed in `u32`: near `u32::MAX` it
    /// would overflow before the conversion to `f64`.
    #[test]
    fn month_count_survives_huge_term_years() {
        let input = LoanInput {
            term_years: 400_000_000,
            ..reference_input()
        };
        let q = quote(&input).unwrap();
        assert!(q.monthly_payment.is_finite());
        assert!(q.monthly_payment > 0.0);
    }
}
