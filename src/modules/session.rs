use num_bigint::BigInt;
use serde::Serialize;

use crate::modules::errors::ReconError;
use crate::modules::input::TestCase;
use crate::modules::polynomial::Polynomial;
use crate::modules::radix::decode_digits;


/**
 * session.rs orchestrates one reconstruction run in three sequential phases:
 * select the k roots with the smallest identifiers, expand them into the
 * monic polynomial, then evaluate the polynomial at every supplied root for
 * the validation report. Any failure aborts the run with no partial output.
 */

// one validation row: P evaluated at the decoded root for this id
#[derive(Debug, Clone, Serialize)]
pub struct RootCheck {
    pub id: u32,
    pub value: BigInt,
    pub eval: BigInt,
}

#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub roots: Vec<BigInt>,
    pub degree: usize,
    pub coefficients: Vec<BigInt>,
    pub polynomial: String,
    pub checks: Vec<RootCheck>,
}

pub struct ReconstructionSession {
    case: TestCase,
}

impl ReconstructionSession {

    pub fn new(case: TestCase) -> Self {
        ReconstructionSession { case }
    }

    // selection, construction, validation, in that order
    pub fn run(&self) -> Result<Report, ReconError> {
        let selected = self.select_roots()?;
        let poly = Polynomial::from_roots(&selected);
        let checks = self.validate(&poly)?;

        // the reported degree is k - 1, following the root count rather
        // than the expanded polynomial
        Ok(Report {
            degree: selected.len().saturating_sub(1),
            roots: selected,
            polynomial: poly.to_string(),
            coefficients: poly.coeffs,
            checks,
        })
    }

    // decode the k roots with the smallest identifiers, ascending-id order.
    // selection order is what makes a run reproducible
    fn select_roots(&self) -> Result<Vec<BigInt>, ReconError> {
        if self.case.k > self.case.roots.len() {
            return Err(ReconError::InsufficientRoots {
                needed: self.case.k,
                available: self.case.roots.len(),
            });
        }

        // BTreeMap iterates keys ascending
        self.case
            .roots
            .values()
            .take(self.case.k)
            .map(|enc| decode_digits(enc.base, &enc.digits))
            .collect()
    }

    // evaluate the polynomial at every supplied root, not only the selected
    // k. unselected roots generally do NOT evaluate to zero; reporting them
    // anyway is intentional diagnostic output, not a bug
    fn validate(&self, poly: &Polynomial) -> Result<Vec<RootCheck>, ReconError> {
        let mut checks = Vec::with_capacity(self.case.roots.len());
        for (&id, enc) in &self.case.roots {
            let value = decode_digits(enc.base, &enc.digits)?;
            let eval = poly.eval(&value);
            checks.push(RootCheck { id, value, eval });
        }
        Ok(checks)
    }
}
