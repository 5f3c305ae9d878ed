//! Prepare a Bell pair and print the resulting state
//!
//! Run with: cargo run --example bell_state

use qreg_engine::{Circuit, Engine};
use qreg_gates::StandardGate;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut circuit = Circuit::new(2);
    circuit.add_gate(StandardGate::H, 0)?;
    circuit.add_cnot(0, 1)?;

    let mut engine = Engine::new(2)?;
    engine.run(&circuit)?;

    println!("Bell state (|00> + |11>)/sqrt(2)");
    println!();
    let probs = engine.probabilities();
    let dump = engine.state_vector(4);
    for (idx, (amp, prob)) in dump.iter().zip(&probs).enumerate() {
        println!(
            "|{:02b}>  amplitude {:>14}  probability {:.4}",
            idx, amp, prob
        );
    }

    Ok(())
}
