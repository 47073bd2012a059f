use bigdecimal::{BigDecimal, RoundingMode};

/// Derived amounts for one payroll row.
#[derive(Debug, Clone, PartialEq)]
pub struct PayrollBreakdown {
    pub tax_amount: BigDecimal,
    pub net_salary: BigDecimal,
}

/// Derive tax and net salary from the raw inputs:
///
/// tax_amount = (basic_salary + bonus) * tax_percent / 100
/// net_salary = basic_salary + bonus - tax_amount - deductions
///
/// Decimal arithmetic throughout; the tax amount is rounded half-up to cent
/// precision before the net is derived, so the invariant holds exactly at
/// two decimal places for any inputs. Negative inputs pass through
/// unchecked.
pub fn compute(
    basic_salary: &BigDecimal,
    bonus: &BigDecimal,
    deductions: &BigDecimal,
    tax_percent: &BigDecimal,
) -> PayrollBreakdown {
    let gross = basic_salary + bonus;
    let tax_amount =
        (&gross * tax_percent / BigDecimal::from(100)).with_scale_round(2, RoundingMode::HalfUp);
    let net_salary = gross - &tax_amount - deductions;

    PayrollBreakdown {
        tax_amount,
        net_salary,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::str::FromStr;

    fn dec(s: &str) -> BigDecimal {
        BigDecimal::from_str(s).unwrap()
    }

    #[test]
    fn documented_scenario() {
        // 1000 basic, 100 bonus, 50 deductions, 10% tax
        let breakdown = compute(&dec("1000"), &dec("100"), &dec("50"), &dec("10"));
        assert_eq!(breakdown.tax_amount, dec("110"));
        assert_eq!(breakdown.net_salary, dec("940"));
    }

    #[test]
    fn zero_optional_inputs() {
        let breakdown = compute(&dec("2500"), &dec("0"), &dec("0"), &dec("0"));
        assert_eq!(breakdown.tax_amount, dec("0"));
        assert_eq!(breakdown.net_salary, dec("2500"));
    }

    #[test]
    fn fractional_amounts_stay_exact() {
        // 0.1-style values that drift under binary floating point
        let breakdown = compute(&dec("1000.10"), &dec("0.20"), &dec("0.30"), &dec("10"));
        assert_eq!(breakdown.tax_amount, dec("100.03"));
        assert_eq!(breakdown.net_salary, dec("899.97"));
    }

    #[test]
    fn tax_rounds_half_up_to_cents() {
        // (100 + 0) * 3.333% = 3.333 -> 3.33
        let breakdown = compute(&dec("100"), &dec("0"), &dec("0"), &dec("3.333"));
        assert_eq!(breakdown.tax_amount, dec("3.33"));
        assert_eq!(breakdown.net_salary, dec("96.67"));

        // (100 + 0) * 3.335% = 3.335 -> 3.34
        let breakdown = compute(&dec("100"), &dec("0"), &dec("0"), &dec("3.335"));
        assert_eq!(breakdown.tax_amount, dec("3.34"));
    }

    #[test]
    fn invariant_holds_for_every_breakdown() {
        let cases = [
            ("1000", "100", "50", "10"),
            ("1234.56", "78.90", "12.34", "7.25"),
            ("0", "0", "0", "0"),
            ("99999999.99", "0.01", "1000", "33.33"),
        ];
        for (basic, bonus, deductions, percent) in cases {
            let (basic, bonus, deductions, percent) =
                (dec(basic), dec(bonus), dec(deductions), dec(percent));
            let breakdown = compute(&basic, &bonus, &deductions, &percent);
            assert_eq!(
                breakdown.net_salary,
                &basic + &bonus - &breakdown.tax_amount - &deductions
            );
        }
    }

    #[test]
    fn negative_inputs_pass_through() {
        let breakdown = compute(&dec("-1000"), &dec("0"), &dec("0"), &dec("10"));
        assert_eq!(breakdown.tax_amount, dec("-100"));
        assert_eq!(breakdown.net_salary, dec("-900"));
    }
}
