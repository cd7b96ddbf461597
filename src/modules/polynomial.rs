use std::fmt;
use std::fs::File;
use std::io::{self, Read, Write};

use num_bigint::BigInt;
use num_traits::{One, Signed, Zero};
use serde::{Deserialize, Serialize};


/**
 * polynomial.rs implements exact integer polynomials: expansion of a root
 * sequence into the coefficients of the monic polynomial having those roots,
 * Horner evaluation, and the canonical display rendering. All arithmetic is
 * unbounded BigInt; coefficient magnitudes outgrow native integers quickly.
 */

#[derive(PartialEq, Debug, Clone, Serialize, Deserialize)]
pub struct Polynomial {
    pub coeffs: Vec<BigInt>,
}

impl Polynomial {

    // coefficients stored lowest to highest degree
    pub fn new(coeffs: Vec<BigInt>) -> Self {
        Polynomial { coeffs }
    }

    // expand (x - r_1)(x - r_2)...(x - r_k) into monic coefficients.
    // each step multiplies the current vector by the monomial (x - r),
    // O(k^2) BigInt multiplications overall
    pub fn from_roots(roots: &[BigInt]) -> Self {

        // constant polynomial 1
        let mut coeffs: Vec<BigInt> = vec![BigInt::one()];

        for r in roots {
            let mut next: Vec<BigInt> = vec![BigInt::zero(); coeffs.len() + 1];
            for (i, c) in coeffs.iter().enumerate() {
                next[i] += c * (-r);  // c[i] * (-r)
                next[i + 1] += c;     // c[i] * x
            }
            coeffs = next;
        }

        Polynomial { coeffs }
    }

    // evaluate polynomial at x using Horner's method
    pub fn eval(&self, x: &BigInt) -> BigInt {
        let mut acc = BigInt::zero();
        for c in self.coeffs.iter().rev() {
            acc = acc * x + c;
        }
        acc
    }

    // get degree of polynomial
    pub fn degree(&self) -> usize {
        self.coeffs.len().saturating_sub(1)
    }

    // checks for zero polynomial
    pub fn is_zero(&self) -> bool {
        self.coeffs.iter().all(|c| c.is_zero())
    }

    // Save the polynomial to a JSON file
    pub fn save(&self, filename: &str) -> io::Result<()> {
        let json = serde_json::to_string(&self)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        let mut file = File::create(filename)?;
        file.write_all(json.as_bytes())?;
        Ok(())
    }

    // Load a polynomial from a JSON file
    pub fn load(filename: &str) -> io::Result<Polynomial> {
        let mut file = File::open(filename)?;
        let mut json = String::new();
        file.read_to_string(&mut json)?;
        let poly: Polynomial = serde_json::from_str(&json)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        Ok(poly)
    }
}

// prints polynomial from highest term to lowest. zero terms are omitted,
// unit coefficients drop the numeral on non-constant terms, and every term
// after the first is joined with " + " or " - " against the magnitude
impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;

        for (deg, c) in self.coeffs.iter().enumerate().rev() {
            if c.is_zero() { continue; }

            if first {
                if c.is_negative() { write!(f, "-")?; }
                first = false;
            } else {
                write!(f, "{}", if c.is_negative() { " - " } else { " + " })?;
            }

            let mag = c.abs();
            if deg == 0 {
                write!(f, "{}", mag)?;
            } else {
                if !mag.is_one() { write!(f, "{}", mag)?; }
                if deg == 1 { write!(f, "x")?; } else { write!(f, "x^{}", deg)?; }
            }
        }

        // nothing emitted means every coefficient was zero
        if first { write!(f, "0")?; }
        Ok(())
    }
}
