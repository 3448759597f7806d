//! Printed explanation of SPRT testing
//!
//! Purely informational; no statistics are computed.

use crate::bounds::SprtBounds;

/// Full explanation text for the given bounds.
///
/// Expected game counts are only known for the default `[-3.0, 1.0]`
/// bounds; other bounds get no range guidance.
pub fn sprt_explanation(bounds: &SprtBounds) -> String {
    let rule = "=".repeat(60);
    let mut out = String::new();

    out.push_str(&format!("\n{}\nABOUT SPRT TESTING\n{}\n", rule, rule));
    out.push_str("Sequential Probability Ratio Test (SPRT) is superior to fixed-game testing:\n\n");

    out.push_str("ADVANTAGES:\n");
    out.push_str("  • Stops early when result is clear (saves time)\n");
    out.push_str("  • Provides statistical confidence bounds\n");
    out.push_str("  • Industry standard for chess engine development\n");
    out.push_str("  • Used by Stockfish, Leela, and other top engines\n\n");

    // {:?} keeps the trailing ".0" on whole numbers
    out.push_str("SPRT BOUNDS:\n");
    out.push_str(&format!("  • H0 (null hypothesis): ELO <= {:?}\n", bounds.lower));
    out.push_str(&format!("  • H1 (alternative): ELO >= {:?}\n", bounds.upper));
    out.push_str("  • Test stops when one hypothesis is proven with 95% confidence\n\n");

    out.push_str("TYPICAL BOUNDS:\n");
    out.push_str("  • [-3, 1]: Detect if improvement is >= 1 ELO or <= -3 ELO\n");
    out.push_str("  • [-1, 4]: More sensitive test for smaller improvements\n");
    out.push_str("  • [-0.5, 2.5]: Very sensitive for final validation\n\n");

    out.push_str("EXPECTED GAMES:\n");
    if bounds.is_default() {
        out.push_str("  • Pass: ~5,000-15,000 games (if truly +1 ELO)\n");
        out.push_str("  • Fail: ~1,000-5,000 games (if truly -3 ELO)\n");
        out.push_str("  • Inconclusive: Up to max games if ELO is between bounds\n");
    }
    out.push_str(&rule);
    out.push('\n');
    out
}

/// Print the explanation to stdout
pub fn explain_sprt(bounds: &SprtBounds) {
    print!("{}", sprt_explanation(bounds));
}
