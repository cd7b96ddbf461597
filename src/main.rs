use std::io::{self, Read};
use std::process;

use poly_reconstruct::modules::input::parse_input;
use poly_reconstruct::modules::session::ReconstructionSession;


fn main() {

    // slurp the whole test case from stdin
    let mut raw = String::new();
    if let Err(e) = io::stdin().read_to_string(&mut raw) {
        eprintln!("failed to read input: {}", e);
        process::exit(1);
    }

    let case = match parse_input(&raw) {
        Ok(case) => case,
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    };

    // all-or-nothing: nothing is printed unless the whole run succeeds
    let report = match ReconstructionSession::new(case).run() {
        Ok(report) => report,
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    };

    let roots: Vec<String> = report.roots.iter().map(|r| r.to_string()).collect();
    println!("Decoded roots: [{}]", roots.join(", "));
    println!("Polynomial degree = {}", report.degree);

    let coeffs: Vec<String> = report.coefficients.iter().map(|c| c.to_string()).collect();
    println!("Coefficients (lowest degree first): [{}]", coeffs.join(", "));

    println!("\nPolynomial:");
    println!("{}", report.polynomial);

    println!("\nValidation (P(root) should equal 0):");
    for check in &report.checks {
        println!(
            "Root ID {} (value = {}) -> P(r) = {}",
            check.id, check.value, check.eval
        );
    }
}
